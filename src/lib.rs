//! win32-screenshot: window and desktop capture for Windows
//!
//! Captures bitmap images of the desktop, the foreground window, or a window
//! found by title, either whole or a rectangular sub-region. Pixel acquisition is
//! delegated to a [`capture::WindowProvider`]; the GDI-backed provider is
//! available on Windows, and [`capture::MockProvider`] supports tests and
//! development on any platform.
//!
//! # Examples
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn capture() -> win32_screenshot::CaptureResult<()> {
//! use win32_screenshot::{model::Rect, screenshot};
//!
//! // Whole screen
//! let image = screenshot::desktop()?;
//! image.save("desktop.png")?;
//!
//! // Top-left corner of the window titled like "Notepad"
//! let corner = screenshot::window_area("Notepad", Rect::new(0, 0, 200, 200), None)?;
//! # let _ = corner;
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod error;
pub mod model;
pub mod screenshot;

pub use capture::{Bitmap, MockProvider, WindowProvider};
pub use error::{CaptureError, CaptureResult};
pub use model::{Bounds, Rect, TitleQuery, WindowRef};
pub use screenshot::{DEFAULT_PAUSE, Screenshot};

#[cfg(windows)]
pub use capture::GdiProvider;
