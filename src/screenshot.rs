//! Capture facade
//!
//! [`Screenshot`] exposes the named capture operations over any
//! [`WindowProvider`]. The facade itself is stateless: it resolves a target
//! window, validates a requested rectangle against the window's reported
//! bounds, optionally asks the provider to activate the window and wait, and
//! then delegates the actual pixel copy. All calls are synchronous and
//! blocking; failures propagate to the caller without retries or recovery.
//!
//! Every operation comes in two forms, a classic callback-vs-return pair:
//! the plain form returns the captured [`Bitmap`], and the `_with` form
//! passes it to a caller-supplied handler instead.
//!
//! # Examples
//!
//! ```
//! use win32_screenshot::{capture::MockProvider, model::Rect, Screenshot};
//!
//! let capture = Screenshot::new(MockProvider::new());
//!
//! let full = capture.foreground().unwrap();
//! let area = capture.desktop_area(Rect::new(0, 0, 400, 300)).unwrap();
//! assert_eq!(area.dimensions(), (400, 300));
//!
//! // Handler form: the bitmap is handed to the closure
//! let (w, h) = capture.window_with("Firefox", None, |bitmap| bitmap.dimensions()).unwrap();
//! assert_eq!((w, h), (1920, 1080));
//! ```

use std::time::Duration;

use crate::{
    capture::{Bitmap, WindowProvider},
    error::{CaptureError, CaptureResult},
    model::{Bounds, Rect, TitleQuery, WindowRef},
};

/// Default activation wait after bringing a window to the foreground (0.5s)
///
/// A fixed, non-adaptive delay that lets the compositor finish redrawing the
/// newly focused window before pixels are copied.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(500);

/// Validates a requested rectangle against the target's reported bounds
///
/// All three rule groups are evaluated and combined into a single failure:
/// any negative coordinate, a degenerate or inverted rectangle
/// (`x1 >= x2` or `y1 >= y2`), or an extent beyond the reported bounds.
pub(crate) fn validate_rect(rect: Rect, bounds: Bounds) -> CaptureResult<()> {
    let Rect { x1, y1, x2, y2 } = rect;

    let has_negative = x1 < 0 || y1 < 0 || x2 < 0 || y2 < 0;
    let is_degenerate = x1 >= x2 || y1 >= y2;
    let exceeds_bounds = x2 > bounds.max_x2 || y2 > bounds.max_y2;

    if has_negative || is_degenerate || exceeds_bounds {
        tracing::warn!(
            "Rejecting capture rectangle ({}) against bounds ({}): negative={} degenerate={} \
             exceeds={}",
            rect,
            bounds,
            has_negative,
            is_degenerate,
            exceeds_bounds
        );
        return Err(CaptureError::InvalidRectangle { rect, bounds });
    }

    Ok(())
}

/// Capture facade over a window provider
///
/// Holds nothing but the provider; all per-call data is local parameters.
/// Concurrent captures from separate threads are not coordinated; which
/// window is foreground at any instant is the caller's responsibility.
#[derive(Debug)]
pub struct Screenshot<P: WindowProvider> {
    provider: P,
}

impl<P: WindowProvider> Screenshot<P> {
    /// Creates a facade over the given provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Borrows the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Captures the currently focused top-level window
    pub fn foreground(&self) -> CaptureResult<Bitmap> {
        let window = self.provider.foreground_window()?;
        self.provider.capture_full(window)
    }

    /// Captures a sub-rectangle of the currently focused top-level window
    pub fn foreground_area(&self, rect: Rect) -> CaptureResult<Bitmap> {
        let window = self.provider.foreground_window()?;
        self.capture_area(window, rect)
    }

    /// Captures the visible view of the whole screen
    ///
    /// Captures what is on screen, not the bare desktop; minimize windows
    /// first for a true desktop shot.
    pub fn desktop(&self) -> CaptureResult<Bitmap> {
        let window = self.provider.desktop_window()?;
        self.provider.capture_full(window)
    }

    /// Captures a sub-rectangle of the visible view of the whole screen
    pub fn desktop_area(&self, rect: Rect) -> CaptureResult<Bitmap> {
        let window = self.provider.desktop_window()?;
        self.capture_area(window, rect)
    }

    /// Captures the first window whose title matches `query`
    ///
    /// The window is brought to the foreground, then the calling thread
    /// sleeps for `pause` (default [`DEFAULT_PAUSE`]) before capturing.
    ///
    /// # Errors
    ///
    /// - [`CaptureError::WindowNotFound`] - no window title matches `query`
    pub fn window(
        &self,
        query: impl Into<TitleQuery>,
        pause: Option<Duration>,
    ) -> CaptureResult<Bitmap> {
        let window = self.resolve_title(&query.into())?;
        self.by_handle(window, pause)
    }

    /// Captures a sub-rectangle of the first window whose title matches
    pub fn window_area(
        &self,
        query: impl Into<TitleQuery>,
        rect: Rect,
        pause: Option<Duration>,
    ) -> CaptureResult<Bitmap> {
        let window = self.resolve_title(&query.into())?;
        self.area_by_handle(window, rect, pause)
    }

    /// Captures a window by its native handle, after activation and wait
    ///
    /// The handle itself is not validated; a stale handle surfaces as a
    /// provider failure.
    pub fn by_handle(&self, window: WindowRef, pause: Option<Duration>) -> CaptureResult<Bitmap> {
        self.provider
            .prepare_window(window, pause.unwrap_or(DEFAULT_PAUSE))?;
        self.provider.capture_full(window)
    }

    /// Captures a sub-rectangle of a window by its native handle
    ///
    /// The rectangle is validated before the window is activated, so an
    /// invalid request never disturbs window focus.
    pub fn area_by_handle(
        &self,
        window: WindowRef,
        rect: Rect,
        pause: Option<Duration>,
    ) -> CaptureResult<Bitmap> {
        let bounds = self.provider.capture_bounds(window)?;
        validate_rect(rect, bounds)?;
        self.provider
            .prepare_window(window, pause.unwrap_or(DEFAULT_PAUSE))?;
        self.provider.capture_rect(window, rect)
    }

    /// Handler form of [`foreground`](Screenshot::foreground)
    pub fn foreground_with<T>(&self, handler: impl FnOnce(Bitmap) -> T) -> CaptureResult<T> {
        self.foreground().map(handler)
    }

    /// Handler form of [`foreground_area`](Screenshot::foreground_area)
    pub fn foreground_area_with<T>(
        &self,
        rect: Rect,
        handler: impl FnOnce(Bitmap) -> T,
    ) -> CaptureResult<T> {
        self.foreground_area(rect).map(handler)
    }

    /// Handler form of [`desktop`](Screenshot::desktop)
    pub fn desktop_with<T>(&self, handler: impl FnOnce(Bitmap) -> T) -> CaptureResult<T> {
        self.desktop().map(handler)
    }

    /// Handler form of [`desktop_area`](Screenshot::desktop_area)
    pub fn desktop_area_with<T>(
        &self,
        rect: Rect,
        handler: impl FnOnce(Bitmap) -> T,
    ) -> CaptureResult<T> {
        self.desktop_area(rect).map(handler)
    }

    /// Handler form of [`window`](Screenshot::window)
    pub fn window_with<T>(
        &self,
        query: impl Into<TitleQuery>,
        pause: Option<Duration>,
        handler: impl FnOnce(Bitmap) -> T,
    ) -> CaptureResult<T> {
        self.window(query, pause).map(handler)
    }

    /// Handler form of [`window_area`](Screenshot::window_area)
    pub fn window_area_with<T>(
        &self,
        query: impl Into<TitleQuery>,
        rect: Rect,
        pause: Option<Duration>,
        handler: impl FnOnce(Bitmap) -> T,
    ) -> CaptureResult<T> {
        self.window_area(query, rect, pause).map(handler)
    }

    /// Handler form of [`by_handle`](Screenshot::by_handle)
    pub fn by_handle_with<T>(
        &self,
        window: WindowRef,
        pause: Option<Duration>,
        handler: impl FnOnce(Bitmap) -> T,
    ) -> CaptureResult<T> {
        self.by_handle(window, pause).map(handler)
    }

    /// Handler form of [`area_by_handle`](Screenshot::area_by_handle)
    pub fn area_by_handle_with<T>(
        &self,
        window: WindowRef,
        rect: Rect,
        pause: Option<Duration>,
        handler: impl FnOnce(Bitmap) -> T,
    ) -> CaptureResult<T> {
        self.area_by_handle(window, rect, pause).map(handler)
    }

    /// One-shot title resolution; no retry, no fuzzy matching
    fn resolve_title(&self, query: &TitleQuery) -> CaptureResult<WindowRef> {
        tracing::debug!("Resolving window by title query '{}'", query);
        self.provider
            .find_window(query)?
            .ok_or_else(|| CaptureError::WindowNotFound {
                query: query.clone(),
            })
    }

    /// Bounds lookup, validation, then delegated rectangle capture
    fn capture_area(&self, window: WindowRef, rect: Rect) -> CaptureResult<Bitmap> {
        let bounds = self.provider.capture_bounds(window)?;
        validate_rect(rect, bounds)?;
        self.provider.capture_rect(window, rect)
    }
}

/// Module-level operations over a fresh GDI provider per call
///
/// The stateless free-function surface: each call constructs a
/// [`GdiProvider`](crate::capture::GdiProvider), captures, and drops it.
#[cfg(windows)]
mod free {
    use super::*;
    use crate::capture::GdiProvider;

    fn facade() -> Screenshot<GdiProvider> {
        Screenshot::new(GdiProvider::new())
    }

    /// Captures the currently focused top-level window
    pub fn foreground() -> CaptureResult<Bitmap> {
        facade().foreground()
    }

    /// Captures a sub-rectangle of the currently focused top-level window
    pub fn foreground_area(rect: Rect) -> CaptureResult<Bitmap> {
        facade().foreground_area(rect)
    }

    /// Captures the visible view of the whole screen
    pub fn desktop() -> CaptureResult<Bitmap> {
        facade().desktop()
    }

    /// Captures a sub-rectangle of the visible view of the whole screen
    pub fn desktop_area(rect: Rect) -> CaptureResult<Bitmap> {
        facade().desktop_area(rect)
    }

    /// Captures the first window whose title matches `query`
    pub fn window(query: impl Into<TitleQuery>, pause: Option<Duration>) -> CaptureResult<Bitmap> {
        facade().window(query, pause)
    }

    /// Captures a sub-rectangle of the first window whose title matches
    pub fn window_area(
        query: impl Into<TitleQuery>,
        rect: Rect,
        pause: Option<Duration>,
    ) -> CaptureResult<Bitmap> {
        facade().window_area(query, rect, pause)
    }

    /// Captures a window by its native handle
    pub fn by_handle(window: WindowRef, pause: Option<Duration>) -> CaptureResult<Bitmap> {
        facade().by_handle(window, pause)
    }

    /// Captures a sub-rectangle of a window by its native handle
    pub fn area_by_handle(
        window: WindowRef,
        rect: Rect,
        pause: Option<Duration>,
    ) -> CaptureResult<Bitmap> {
        facade().area_by_handle(window, rect, pause)
    }
}

#[cfg(windows)]
pub use free::{
    area_by_handle, by_handle, desktop, desktop_area, foreground, foreground_area, window,
    window_area,
};
