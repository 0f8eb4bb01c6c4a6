use crate::{frame::FrameContext, phase::FramePhase};

/// Base contract for a subsystem/behavior attached to the frame loop.
pub trait Module {
    fn on_start(&mut self, _ctx: &mut FrameContext<'_>) {}
    fn on_phase(&mut self, _phase: FramePhase, _ctx: &mut FrameContext<'_>) {}
    fn on_shutdown(&mut self, _ctx: &mut FrameContext<'_>) {}
}
