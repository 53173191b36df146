//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Types crossing the platform ↔ core thread boundary (events and errors).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Key events buffered since the last flush, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),

    /// The OS refused to open a window.
    WindowCreation(String),

    /// Pixel surface could not be created, resized or presented.
    Surface(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::Surface(e) => write!(f, "Surface error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<softbuffer::SoftBufferError> for PlatformError {
    fn from(e: softbuffer::SoftBufferError) -> Self {
        Self::Surface(e.to_string())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_event_is_cloneable_and_debug() {
        let event = PlatformEvent::Inputs(vec![]);
        let cloned = event.clone();
        assert!(format!("{:?}", cloned).contains("Inputs"));
        assert!(format!("{:?}", PlatformEvent::WindowClosed).contains("WindowClosed"));
    }

    #[test]
    fn platform_error_display_format() {
        let err = PlatformError::Surface("no display".into());
        assert_eq!(err.to_string(), "Surface error: no display");

        let err = PlatformError::EventLoopCreation("denied".into());
        assert!(err.to_string().starts_with("Event loop creation failed"));
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }
}
