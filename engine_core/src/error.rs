use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level failures: the event loop and the config file. Behavior
/// modules do not propagate errors; per the frame contract they log and
/// disable themselves instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("winit error: {0}")]
    Winit(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<winit::error::EventLoopError> for EngineError {
    fn from(e: winit::error::EventLoopError) -> Self {
        Self::Winit(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_subsystem() {
        let e = EngineError::Config("parse vitrine.toml: expected value".into());
        assert!(e.to_string().starts_with("config error:"));

        let e = EngineError::Winit("event loop closed".into());
        assert!(e.to_string().starts_with("winit error:"));
    }
}
