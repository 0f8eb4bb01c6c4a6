/// Frame phases, dispatched in declaration order each frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FramePhase {
    BeginFrame,
    Input,
    Update,
    LateUpdate,
    EndFrame,
}

impl FramePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeginFrame => "BeginFrame",
            Self::Input => "Input",
            Self::Update => "Update",
            Self::LateUpdate => "LateUpdate",
            Self::EndFrame => "EndFrame",
        }
    }
}
