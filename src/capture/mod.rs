//! Window provider trait and implementations
//!
//! This module provides the seam between the capture facade and the native
//! windowing system:
//!
//! - [`Bitmap`]: pixel buffer wrapping `image::RgbaImage`, with PNG output
//! - [`WindowProvider`]: trait the facade delegates all platform work to
//! - [`MockProvider`]: in-memory provider for tests and development
//! - `GdiProvider` (Windows only): real provider over Win32 GDI
//!
//! The provider owns every native resource (window handles, device contexts)
//! for the duration of a single call; nothing is retained across calls.

use std::time::Duration;

use crate::{
    error::CaptureResult,
    model::{Bounds, Rect, TitleQuery, WindowRef},
};

pub mod image_buffer;
pub mod matching;
pub mod mock;

#[cfg(windows)]
pub mod gdi;

pub use image_buffer::Bitmap;
pub use mock::MockProvider;

#[cfg(windows)]
pub use gdi::GdiProvider;

/// Interface the capture facade requires from a window/bitmap provider
///
/// All methods are synchronous and blocking: each call runs to completion on
/// the calling thread, including the fixed activation-wait sleep in
/// [`prepare_window`](WindowProvider::prepare_window). Implementations hold
/// no state the facade can observe between calls.
///
/// # Examples
///
/// ```
/// use win32_screenshot::{capture::{MockProvider, WindowProvider}, model::Rect};
///
/// let provider = MockProvider::new();
/// let window = provider.foreground_window().unwrap();
/// let bounds = provider.capture_bounds(window).unwrap();
/// assert_eq!(bounds.max_x2, 1920);
///
/// let image = provider.capture_rect(window, Rect::new(0, 0, 100, 100)).unwrap();
/// assert_eq!(image.dimensions(), (100, 100));
/// ```
pub trait WindowProvider {
    /// Resolves the window currently receiving input focus
    ///
    /// # Errors
    ///
    /// - [`CaptureError::Provider`](crate::error::CaptureError::Provider) -
    ///   the system reported no foreground window
    fn foreground_window(&self) -> CaptureResult<WindowRef>;

    /// Resolves the whole-screen/desktop pseudo-window
    fn desktop_window(&self) -> CaptureResult<WindowRef>;

    /// Finds the first window whose title matches the query
    ///
    /// Returns `Ok(None)` when no window matches; the facade turns that into
    /// [`CaptureError::WindowNotFound`](crate::error::CaptureError::WindowNotFound).
    fn find_window(&self, query: &TitleQuery) -> CaptureResult<Option<WindowRef>>;

    /// Brings the window to the foreground and waits for `pause`
    ///
    /// The pause is a fixed, non-adaptive delay that lets the compositor
    /// finish redrawing the newly focused window; it is not a
    /// poll-until-ready loop and always runs to completion.
    fn prepare_window(&self, window: WindowRef, pause: Duration) -> CaptureResult<()>;

    /// Captures the full capturable area of the window
    fn capture_full(&self, window: WindowRef) -> CaptureResult<Bitmap>;

    /// Captures a sub-rectangle of the window
    ///
    /// The facade validates `rect` against
    /// [`capture_bounds`](WindowProvider::capture_bounds) before calling this;
    /// implementations may assume the rectangle is in range.
    fn capture_rect(&self, window: WindowRef, rect: Rect) -> CaptureResult<Bitmap>;

    /// Reports the maximum capturable extent of the window
    ///
    /// The minimum origin is always (0, 0).
    fn capture_bounds(&self, window: WindowRef) -> CaptureResult<Bounds>;
}
