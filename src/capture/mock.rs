//! Mock window provider for testing
//!
//! [`MockProvider`] implements [`WindowProvider`] without touching a real
//! windowing system. It serves three testing needs:
//!
//! - **Synthetic captures:** test-pattern bitmaps sized to the mock window
//! - **Error injection:** force every operation to fail with a given error
//! - **Call recording:** every provider call is logged in order, so tests can
//!   assert sequencing (e.g. that a window is prepared before it is captured)
//!
//! `prepare_window` records its pause but does not sleep, keeping tests fast.
//!
//! # Examples
//!
//! ```
//! use win32_screenshot::capture::{mock::ProviderCall, MockProvider, WindowProvider};
//!
//! let provider = MockProvider::new();
//! let window = provider.find_window(&"Firefox".into()).unwrap().unwrap();
//! provider.capture_full(window).unwrap();
//!
//! let calls = provider.calls();
//! assert!(matches!(calls[1], ProviderCall::CaptureFull { .. }));
//! ```

use std::{sync::Mutex, time::Duration};

use super::{Bitmap, WindowProvider, matching};
use crate::{
    error::{CaptureError, CaptureResult},
    model::{Bounds, Rect, TitleQuery, WindowRef},
};

/// A window known to the mock provider
#[derive(Debug, Clone)]
pub struct MockWindow {
    /// Handle the mock hands out for this window
    pub window: WindowRef,
    /// Title used for query matching
    pub title:  String,
    /// Capturable bounds reported for this window
    pub bounds: Bounds,
}

/// One recorded provider invocation, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    /// `foreground_window` was called
    ForegroundWindow,
    /// `desktop_window` was called
    DesktopWindow,
    /// `find_window` was called with this query text
    FindWindow { query: String },
    /// `prepare_window` was called
    PrepareWindow { window: WindowRef, pause: Duration },
    /// `capture_full` was called
    CaptureFull { window: WindowRef },
    /// `capture_rect` was called
    CaptureRect { window: WindowRef, rect: Rect },
    /// `capture_bounds` was called
    CaptureBounds { window: WindowRef },
}

/// Mock provider with predefined windows, error injection, and a call log
#[derive(Debug)]
pub struct MockProvider {
    windows:         Vec<MockWindow>,
    desktop:         MockWindow,
    error_injection: Option<CaptureError>,
    calls:           Mutex<Vec<ProviderCall>>,
}

impl MockProvider {
    /// Handle of the desktop pseudo-window
    pub const DESKTOP: WindowRef = WindowRef::from_raw(0x1000);

    /// Creates a provider with three predefined windows
    ///
    /// - `0x1` "Mozilla Firefox", bounds 1920x1080 (also the foreground window)
    /// - `0x2` "Visual Studio Code", bounds 1280x720
    /// - `0x3` "Terminal - Alacritty", bounds 800x600
    ///
    /// The desktop pseudo-window reports bounds 2560x1440.
    pub fn new() -> Self {
        Self {
            windows:         vec![
                MockWindow {
                    window: WindowRef::from_raw(0x1),
                    title:  "Mozilla Firefox".to_string(),
                    bounds: Bounds::new(1920, 1080),
                },
                MockWindow {
                    window: WindowRef::from_raw(0x2),
                    title:  "Visual Studio Code".to_string(),
                    bounds: Bounds::new(1280, 720),
                },
                MockWindow {
                    window: WindowRef::from_raw(0x3),
                    title:  "Terminal - Alacritty".to_string(),
                    bounds: Bounds::new(800, 600),
                },
            ],
            desktop:         MockWindow {
                window: Self::DESKTOP,
                title:  String::new(),
                bounds: Bounds::new(2560, 1440),
            },
            error_injection: None,
            calls:           Mutex::new(Vec::new()),
        }
    }

    /// Adds a window to the mock window list
    pub fn with_window(mut self, raw: isize, title: &str, bounds: Bounds) -> Self {
        self.windows.push(MockWindow {
            window: WindowRef::from_raw(raw),
            title: title.to_string(),
            bounds,
        });
        self
    }

    /// Replaces the desktop pseudo-window bounds
    pub fn with_desktop_bounds(mut self, bounds: Bounds) -> Self {
        self.desktop.bounds = bounds;
        self
    }

    /// Injects an error that every operation will return
    pub fn with_error(mut self, error: CaptureError) -> Self {
        self.error_injection = Some(error);
        self
    }

    /// Returns a snapshot of all recorded calls, in order
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    fn record(&self, call: ProviderCall) {
        self.calls.lock().expect("call log poisoned").push(call);
    }

    /// Checks whether an injected error must be returned
    ///
    /// `CaptureError` holds a non-`Clone` `io::Error`, so the injected value
    /// is rebuilt variant by variant.
    fn check_error_injection(&self) -> CaptureResult<()> {
        if let Some(ref error) = self.error_injection {
            return Err(match error {
                CaptureError::WindowNotFound { query } => CaptureError::WindowNotFound {
                    query: query.clone(),
                },
                CaptureError::InvalidRectangle { rect, bounds } => CaptureError::InvalidRectangle {
                    rect:   *rect,
                    bounds: *bounds,
                },
                CaptureError::Provider { reason } => CaptureError::Provider {
                    reason: reason.clone(),
                },
                CaptureError::Io(e) => {
                    CaptureError::Io(std::io::Error::new(e.kind(), e.to_string()))
                }
                CaptureError::Image(msg) => CaptureError::Image(msg.clone()),
            });
        }
        Ok(())
    }

    fn lookup(&self, window: WindowRef) -> CaptureResult<&MockWindow> {
        if window == self.desktop.window {
            return Ok(&self.desktop);
        }
        self.windows
            .iter()
            .find(|w| w.window == window)
            .ok_or_else(|| CaptureError::Provider {
                reason: format!("unknown window handle {}", window),
            })
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowProvider for MockProvider {
    fn foreground_window(&self) -> CaptureResult<WindowRef> {
        self.record(ProviderCall::ForegroundWindow);
        self.check_error_injection()?;
        self.windows
            .first()
            .map(|w| w.window)
            .ok_or_else(|| CaptureError::Provider {
                reason: "no foreground window".to_string(),
            })
    }

    fn desktop_window(&self) -> CaptureResult<WindowRef> {
        self.record(ProviderCall::DesktopWindow);
        self.check_error_injection()?;
        Ok(self.desktop.window)
    }

    fn find_window(&self, query: &TitleQuery) -> CaptureResult<Option<WindowRef>> {
        self.record(ProviderCall::FindWindow {
            query: query.as_str().to_string(),
        });
        self.check_error_injection()?;

        let titles: Vec<(WindowRef, String)> = self
            .windows
            .iter()
            .map(|w| (w.window, w.title.clone()))
            .collect();
        Ok(matching::find_first(query, &titles))
    }

    fn prepare_window(&self, window: WindowRef, pause: Duration) -> CaptureResult<()> {
        self.record(ProviderCall::PrepareWindow { window, pause });
        self.check_error_injection()?;
        self.lookup(window)?;
        // Recorded only; the mock never sleeps.
        Ok(())
    }

    fn capture_full(&self, window: WindowRef) -> CaptureResult<Bitmap> {
        self.record(ProviderCall::CaptureFull { window });
        self.check_error_injection()?;
        let mock = self.lookup(window)?;
        Ok(Bitmap::from_test_pattern(
            mock.bounds.max_x2 as u32,
            mock.bounds.max_y2 as u32,
        ))
    }

    fn capture_rect(&self, window: WindowRef, rect: Rect) -> CaptureResult<Bitmap> {
        self.record(ProviderCall::CaptureRect { window, rect });
        self.check_error_injection()?;
        self.lookup(window)?;
        Ok(Bitmap::from_test_pattern(rect.width() as u32, rect.height() as u32))
    }

    fn capture_bounds(&self, window: WindowRef) -> CaptureResult<Bounds> {
        self.record(ProviderCall::CaptureBounds { window });
        self.check_error_injection()?;
        Ok(self.lookup(window)?.bounds)
    }
}
