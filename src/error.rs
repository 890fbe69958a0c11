//! Error types for capture operations
//!
//! Errors carry the raw offending parameters (title query, requested
//! coordinates) as structured fields; message formatting happens in the
//! `Display` impl, not at the call sites. Each variant also offers an
//! actionable remediation hint through [`CaptureError::remediation_hint`].

use crate::model::{Bounds, Rect, TitleQuery};

/// Result type alias for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Error type for capture operations
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// Title query matched no open window
    #[error("window with title matching '{query}' was not found")]
    WindowNotFound {
        /// The query that failed to match any window
        query: TitleQuery,
    },

    /// Requested capture rectangle failed validation
    ///
    /// The message quotes the requested coordinates verbatim alongside the
    /// bounds the target window reported.
    #[error("specified coordinates ({rect}) are invalid for capture bounds ({bounds})")]
    InvalidRectangle {
        /// The rectangle as requested by the caller
        rect:   Rect,
        /// The bounds the target window reported
        bounds: Bounds,
    },

    /// Opaque failure from the underlying capture provider
    ///
    /// Raised when a native call fails (device context allocation, blit,
    /// pixel readback, ...). The facade adds no recovery; the reason string
    /// names the failing call.
    #[error("capture provider failure: {reason}")]
    Provider {
        /// Description of the failing native operation
        reason: String,
    },

    /// I/O error while writing a captured image to disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("image encoding error: {0}")]
    Image(String),
}

impl CaptureError {
    /// Returns an actionable remediation hint for this error
    ///
    /// # Examples
    ///
    /// ```
    /// use win32_screenshot::error::CaptureError;
    ///
    /// let error = CaptureError::WindowNotFound {
    ///     query: "Firefox".into(),
    /// };
    /// assert!(error.remediation_hint().contains("title"));
    /// ```
    pub fn remediation_hint(&self) -> &str {
        match self {
            CaptureError::WindowNotFound { .. } => {
                "Check that the window is open and its title contains the query text. Window \
                 titles may change dynamically (e.g. browser tabs); a regex query can match the \
                 stable part of the title."
            }
            CaptureError::InvalidRectangle { .. } => {
                "Coordinates must satisfy 0 <= x1 < x2 and 0 <= y1 < y2, and (x2, y2) must not \
                 exceed the window's reported bounds. The origin is always (0, 0); x2 and y2 are \
                 effectively width and height."
            }
            CaptureError::Provider { .. } => {
                "A native capture call failed. The target window may have been closed or \
                 minimized mid-capture, or the system may be out of GDI resources."
            }
            CaptureError::Io(_) => {
                "An I/O error occurred. Check file permissions, disk space, and that the output \
                 directory exists."
            }
            CaptureError::Image(_) => {
                "Image encoding failed. Ensure the capture produced non-empty pixel data and the \
                 output path ends in .png."
            }
        }
    }
}
