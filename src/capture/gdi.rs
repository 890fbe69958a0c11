//! Win32 GDI window provider
//!
//! Real [`WindowProvider`] implementation for Windows:
//!
//! - **Window resolution**: `GetForegroundWindow`, `GetDesktopWindow`, and
//!   `EnumWindows` with title matching
//! - **Activation**: `SetForegroundWindow` followed by a fixed sleep
//! - **Pixel acquisition**: GDI bit-block transfer into a compatible bitmap,
//!   read back as top-down 32-bit BGRA via `GetDIBits`
//!
//! Every device context and GDI bitmap is acquired and released within a
//! single call; no native resource outlives the provider method that created
//! it.

use std::{ffi::OsString, os::windows::ffi::OsStringExt, thread, time::Duration};

use windows_sys::Win32::{
    Foundation::{HWND, LPARAM, RECT},
    Graphics::Gdi::{
        BITMAPINFO, BITMAPINFOHEADER, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC,
        DIB_RGB_COLORS, DeleteDC, DeleteObject, GetDC, GetDIBits, HBITMAP, HDC, ReleaseDC, SRCCOPY,
        SelectObject,
    },
    UI::WindowsAndMessaging::{
        EnumWindows, GetClientRect, GetDesktopWindow, GetForegroundWindow, GetWindowTextLengthW,
        GetWindowTextW, IsWindowVisible, SetForegroundWindow,
    },
};

use super::{Bitmap, WindowProvider, matching};
use crate::{
    error::{CaptureError, CaptureResult},
    model::{Bounds, Rect, TitleQuery, WindowRef},
};

/// Window provider backed by Win32 window management and GDI
///
/// Stateless; construct one per capture or reuse freely.
#[derive(Debug, Default)]
pub struct GdiProvider {
    _private: (),
}

impl GdiProvider {
    /// Creates a new GDI provider
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Enumerates all visible, titled top-level windows
    fn enumerate_windows() -> Vec<(WindowRef, String)> {
        let mut handles: Vec<isize> = Vec::new();

        unsafe extern "system" fn enum_callback(hwnd: HWND, lparam: LPARAM) -> i32 {
            let handles = unsafe { &mut *(lparam as *mut Vec<isize>) };

            // Skip invisible and untitled windows
            if unsafe { IsWindowVisible(hwnd) } == 0 {
                return 1;
            }
            if unsafe { GetWindowTextLengthW(hwnd) } == 0 {
                return 1;
            }

            handles.push(hwnd as isize);
            1
        }

        unsafe {
            EnumWindows(Some(enum_callback), &mut handles as *mut Vec<isize> as isize);
        }

        tracing::debug!("Enumerated {} candidate windows", handles.len());
        handles
            .into_iter()
            .map(|raw| (WindowRef::from_raw(raw), Self::window_title(raw as HWND)))
            .collect()
    }

    /// Reads the title of a window
    fn window_title(hwnd: HWND) -> String {
        unsafe {
            let len = GetWindowTextLengthW(hwnd);
            if len == 0 {
                return String::new();
            }

            let mut buffer: Vec<u16> = vec![0; (len + 1) as usize];
            let copied = GetWindowTextW(hwnd, buffer.as_mut_ptr(), buffer.len() as i32);
            if copied == 0 {
                return String::new();
            }

            buffer.truncate(copied as usize);
            OsString::from_wide(&buffer).to_string_lossy().into_owned()
        }
    }

    /// Copies a region of the window into a fresh RGBA bitmap
    ///
    /// One GDI round trip: source DC, compatible memory DC and bitmap, blit,
    /// top-down 32-bit readback. All handles are released before returning,
    /// on success and on failure alike.
    fn blit(window: WindowRef, x: i32, y: i32, width: i32, height: i32) -> CaptureResult<Bitmap> {
        if width <= 0 || height <= 0 {
            return Err(CaptureError::Provider {
                reason: format!("window reports empty capture area ({width}x{height})"),
            });
        }

        let hwnd = window.as_raw() as HWND;
        unsafe {
            let hdc_window = GetDC(hwnd);
            if hdc_window.is_null() {
                return Err(CaptureError::Provider {
                    reason: "GetDC failed for target window".to_string(),
                });
            }

            let result = (|| {
                let hdc_mem = CreateCompatibleDC(hdc_window);
                if hdc_mem.is_null() {
                    return Err(CaptureError::Provider {
                        reason: "CreateCompatibleDC failed".to_string(),
                    });
                }

                let result = (|| {
                    let hbitmap = CreateCompatibleBitmap(hdc_window, width, height);
                    if hbitmap.is_null() {
                        return Err(CaptureError::Provider {
                            reason: "CreateCompatibleBitmap failed".to_string(),
                        });
                    }

                    let previous = SelectObject(hdc_mem, hbitmap);
                    let blitted =
                        BitBlt(hdc_mem, 0, 0, width, height, hdc_window, x, y, SRCCOPY);
                    SelectObject(hdc_mem, previous);

                    let result = if blitted == 0 {
                        Err(CaptureError::Provider {
                            reason: "BitBlt failed".to_string(),
                        })
                    } else {
                        Self::read_pixels(hdc_mem, hbitmap, width, height)
                    };

                    DeleteObject(hbitmap);
                    result
                })();

                DeleteDC(hdc_mem);
                result
            })();

            ReleaseDC(hwnd, hdc_window);
            result
        }
    }

    /// Reads a GDI bitmap back as top-down 32-bit BGRA and converts to RGBA
    unsafe fn read_pixels(hdc: HDC, hbitmap: HBITMAP, width: i32, height: i32) -> CaptureResult<Bitmap> {
        let mut info: BITMAPINFO = unsafe { std::mem::zeroed() };
        info.bmiHeader.biSize = std::mem::size_of::<BITMAPINFOHEADER>() as u32;
        info.bmiHeader.biWidth = width;
        // Negative height requests top-down row order
        info.bmiHeader.biHeight = -height;
        info.bmiHeader.biPlanes = 1;
        info.bmiHeader.biBitCount = 32;
        info.bmiHeader.biCompression = 0; // BI_RGB

        let row_pitch = width as usize * 4;
        let mut pixels = vec![0u8; row_pitch * height as usize];

        let copied = unsafe {
            GetDIBits(
                hdc,
                hbitmap,
                0,
                height as u32,
                pixels.as_mut_ptr() as *mut core::ffi::c_void,
                &mut info,
                DIB_RGB_COLORS,
            )
        };
        if copied == 0 {
            return Err(CaptureError::Provider {
                reason: "GetDIBits failed".to_string(),
            });
        }

        Bitmap::from_bgra(width as u32, height as u32, row_pitch, &pixels)
    }
}

impl WindowProvider for GdiProvider {
    fn foreground_window(&self) -> CaptureResult<WindowRef> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_null() {
            return Err(CaptureError::Provider {
                reason: "no foreground window".to_string(),
            });
        }
        Ok(WindowRef::from_raw(hwnd as isize))
    }

    fn desktop_window(&self) -> CaptureResult<WindowRef> {
        Ok(WindowRef::from_raw(unsafe { GetDesktopWindow() } as isize))
    }

    fn find_window(&self, query: &TitleQuery) -> CaptureResult<Option<WindowRef>> {
        let windows = Self::enumerate_windows();
        Ok(matching::find_first(query, &windows))
    }

    fn prepare_window(&self, window: WindowRef, pause: Duration) -> CaptureResult<()> {
        let brought = unsafe { SetForegroundWindow(window.as_raw() as HWND) };
        if brought == 0 {
            // Focus-stealing prevention can refuse; the capture still proceeds.
            tracing::warn!("SetForegroundWindow refused for window {}", window);
        }
        thread::sleep(pause);
        Ok(())
    }

    fn capture_full(&self, window: WindowRef) -> CaptureResult<Bitmap> {
        let bounds = self.capture_bounds(window)?;
        Self::blit(window, 0, 0, bounds.max_x2, bounds.max_y2)
    }

    fn capture_rect(&self, window: WindowRef, rect: Rect) -> CaptureResult<Bitmap> {
        Self::blit(window, rect.x1, rect.y1, rect.width(), rect.height())
    }

    fn capture_bounds(&self, window: WindowRef) -> CaptureResult<Bounds> {
        let mut rect = RECT {
            left:   0,
            top:    0,
            right:  0,
            bottom: 0,
        };
        let ok = unsafe { GetClientRect(window.as_raw() as HWND, &mut rect) };
        if ok == 0 {
            return Err(CaptureError::Provider {
                reason: format!("GetClientRect failed for window {}", window),
            });
        }
        Ok(Bounds::new(rect.right, rect.bottom))
    }
}
