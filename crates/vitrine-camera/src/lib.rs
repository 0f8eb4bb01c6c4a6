#![forbid(unsafe_op_in_unsafe_fn)]

pub mod controller;
pub mod projection;
pub mod rig;

pub use controller::{CamInput, FlyCamController};
pub use projection::Perspective;
pub use rig::CameraRig;
