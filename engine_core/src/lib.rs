pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod input;
pub mod logsys;
pub mod module;
pub mod phase;
pub mod schedule;
pub mod signals;
pub mod telemetry;
pub mod time;

pub use crate::engine::Engine;
pub use crate::error::{EngineError, EngineResult};
