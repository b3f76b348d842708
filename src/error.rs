//! Error types.
//!
//! Two error families: [`EngineError`] for engine construction and output,
//! [`TreeError`] for structural edits of the widget tree.

use std::io;

use thiserror::Error;

use crate::widget::WidgetId;

/// Errors raised by the engine and its backends.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Writing to or configuring the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    /// The backend never reported a screen size.
    #[error("screen size unavailable after {attempts} attempts")]
    ScreenSizeUnavailable { attempts: u32 },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Errors raised by widget tree edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("widget {0:?} does not exist")]
    MissingWidget(WidgetId),

    #[error("widget {0:?} cannot hold children")]
    NotAContainer(WidgetId),

    /// Parenting `child` under `parent` would make `child` its own ancestor.
    #[error("parenting {child:?} under {parent:?} would create a cycle")]
    Cycle { child: WidgetId, parent: WidgetId },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::ScreenSizeUnavailable { attempts: 3 };
        assert_eq!(err.to_string(), "screen size unavailable after 3 attempts");

        let io_err: EngineError = io::Error::other("boom").into();
        assert!(matches!(io_err, EngineError::Io(_)));
    }
}
