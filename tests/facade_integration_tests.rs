//! Integration tests for the capture facade over the mock provider
//!
//! Exercises the public surface end to end: rectangle validation, title
//! resolution, activation ordering, and the handler-form operations.

use std::time::Duration;

use win32_screenshot::{
    Bounds, CaptureError, MockProvider, Rect, Screenshot, WindowRef,
    capture::mock::ProviderCall,
};

fn facade() -> Screenshot<MockProvider> {
    Screenshot::new(MockProvider::new())
}

#[test]
fn foreground_captures_full_window() {
    let capture = facade();
    let image = capture.foreground().unwrap();
    // Foreground mock window is Firefox at 1920x1080
    assert_eq!(image.dimensions(), (1920, 1080));
}

#[test]
fn desktop_captures_full_screen() {
    let capture = facade();
    let image = capture.desktop().unwrap();
    assert_eq!(image.dimensions(), (2560, 1440));
}

#[test]
fn area_capture_with_negative_component_fails_with_literal_coordinates() {
    let capture = facade();

    for rect in [
        Rect::new(-1, 10, 100, 100),
        Rect::new(10, -1, 100, 100),
        Rect::new(10, 10, -100, 100),
        Rect::new(10, 10, 100, -100),
    ] {
        let error = capture.foreground_area(rect).unwrap_err();
        assert!(matches!(error, CaptureError::InvalidRectangle { .. }));
        assert!(
            error.to_string().contains(&rect.to_string()),
            "message '{}' should contain '{}'",
            error,
            rect
        );
    }
}

#[test]
fn area_capture_with_degenerate_rect_fails() {
    let capture = facade();

    for rect in [
        Rect::new(100, 10, 100, 100), // x1 == x2
        Rect::new(10, 100, 100, 100), // y1 == y2
        Rect::new(200, 10, 100, 100), // x1 > x2
        Rect::new(10, 200, 100, 100), // y1 > y2
    ] {
        let error = capture.desktop_area(rect).unwrap_err();
        assert!(matches!(error, CaptureError::InvalidRectangle { .. }), "{rect}");
    }
}

#[test]
fn area_capture_beyond_bounds_fails() {
    // Window 0x7 reports bounds (0, 0, 800, 600)
    let capture = Screenshot::new(MockProvider::new().with_window(0x7, "Example", Bounds::new(800, 600)));
    let window = WindowRef::from_raw(0x7);

    let error = capture
        .area_by_handle(window, Rect::new(10, 10, 900, 100), None)
        .unwrap_err();
    assert!(matches!(error, CaptureError::InvalidRectangle { .. }));
    assert!(error.to_string().contains("10, 10, 900, 100"));

    let error = capture
        .area_by_handle(window, Rect::new(10, 10, 100, 700), None)
        .unwrap_err();
    assert!(matches!(error, CaptureError::InvalidRectangle { .. }));
}

#[test]
fn valid_area_request_delegates_exact_coordinates() {
    let capture = Screenshot::new(MockProvider::new().with_window(0x7, "Example", Bounds::new(800, 600)));
    let window = WindowRef::from_raw(0x7);
    let rect = Rect::new(10, 10, 100, 100);

    let image = capture.area_by_handle(window, rect, None).unwrap();
    assert_eq!(image.dimensions(), (90, 90));

    let calls = capture.provider().calls();
    assert!(
        calls.contains(&ProviderCall::CaptureRect { window, rect }),
        "provider should receive the rectangle unchanged: {calls:?}"
    );
}

#[test]
fn unmatched_title_query_is_window_not_found() {
    let capture = facade();
    let error = capture.window("NoSuchApp12345", None).unwrap_err();

    assert!(matches!(error, CaptureError::WindowNotFound { .. }));
    assert!(error.to_string().contains("NoSuchApp12345"));
}

#[test]
fn window_capture_resolves_activates_then_captures() {
    let capture = facade();
    capture.window("Firefox", Some(Duration::from_millis(200))).unwrap();

    let window = WindowRef::from_raw(0x1);
    assert_eq!(
        capture.provider().calls(),
        vec![
            ProviderCall::FindWindow {
                query: "Firefox".to_string(),
            },
            ProviderCall::PrepareWindow {
                window,
                pause: Duration::from_millis(200),
            },
            ProviderCall::CaptureFull { window },
        ]
    );
}

#[test]
fn by_handle_prepares_before_capturing() {
    let capture = facade();
    let window = WindowRef::from_raw(0x2);

    capture.by_handle(window, Some(Duration::from_millis(200))).unwrap();

    let calls = capture.provider().calls();
    let prepare_at = calls
        .iter()
        .position(|c| matches!(c, ProviderCall::PrepareWindow { .. }))
        .expect("prepare_window must be called");
    let capture_at = calls
        .iter()
        .position(|c| matches!(c, ProviderCall::CaptureFull { .. }))
        .expect("capture_full must be called");
    assert!(prepare_at < capture_at, "activation must precede capture: {calls:?}");

    assert_eq!(
        calls[prepare_at],
        ProviderCall::PrepareWindow {
            window,
            pause: Duration::from_millis(200),
        }
    );
}

#[test]
fn omitted_pause_defaults_to_half_second() {
    let capture = facade();
    capture.by_handle(WindowRef::from_raw(0x1), None).unwrap();

    assert!(capture.provider().calls().contains(&ProviderCall::PrepareWindow {
        window: WindowRef::from_raw(0x1),
        pause:  Duration::from_millis(500),
    }));
}

#[test]
fn invalid_rect_never_disturbs_window_focus() {
    let capture = facade();
    let window = WindowRef::from_raw(0x1);

    let result = capture.area_by_handle(window, Rect::new(0, 0, 99999, 99999), None);
    assert!(result.is_err());

    let calls = capture.provider().calls();
    assert!(
        !calls.iter().any(|c| matches!(c, ProviderCall::PrepareWindow { .. })),
        "validation failure must happen before activation: {calls:?}"
    );
}

#[test]
fn window_area_validates_against_that_windows_bounds() {
    let capture = facade();

    // Terminal window reports 800x600; 801 wide must fail
    let error = capture
        .window_area("Terminal", Rect::new(0, 0, 801, 600), None)
        .unwrap_err();
    assert!(matches!(error, CaptureError::InvalidRectangle { .. }));

    // 800x600 exactly passes
    let image = capture
        .window_area("Terminal", Rect::new(0, 0, 800, 600), None)
        .unwrap();
    assert_eq!(image.dimensions(), (800, 600));
}

#[test]
fn desktop_area_validates_against_screen_bounds() {
    let capture = Screenshot::new(MockProvider::new().with_desktop_bounds(Bounds::new(1024, 768)));

    assert!(capture.desktop_area(Rect::new(0, 0, 1025, 768)).is_err());
    let image = capture.desktop_area(Rect::new(100, 100, 400, 300)).unwrap();
    assert_eq!(image.dimensions(), (300, 200));
}

#[test]
fn regex_title_query_resolves() {
    let capture = facade();
    let pattern = regex::Regex::new("Visual Studio .*").unwrap();

    capture.window(pattern, Some(Duration::ZERO)).unwrap();
    assert!(capture.provider().calls().contains(&ProviderCall::CaptureFull {
        window: WindowRef::from_raw(0x2),
    }));
}

#[test]
fn handler_form_passes_bitmap_to_handler() {
    let capture = facade();

    let dimensions = capture.foreground_with(|bitmap| bitmap.dimensions()).unwrap();
    assert_eq!(dimensions, (1920, 1080));

    let area = Rect::new(0, 0, 320, 240);
    let pixels = capture
        .desktop_area_with(area, |bitmap| bitmap.into_rgba().into_raw().len())
        .unwrap();
    assert_eq!(pixels, 320 * 240 * 4);
}

#[test]
fn handler_form_propagates_errors_without_invoking_handler() {
    let capture = facade();
    let mut invoked = false;

    let result = capture.window_with("NoSuchApp12345", None, |_| invoked = true);
    assert!(result.is_err());
    assert!(!invoked);
}

#[test]
fn provider_failures_propagate_unchanged() {
    let capture = Screenshot::new(MockProvider::new().with_error(CaptureError::Provider {
        reason: "device context allocation failed".to_string(),
    }));

    let error = capture.foreground().unwrap_err();
    assert!(matches!(error, CaptureError::Provider { .. }));
    assert!(error.to_string().contains("device context allocation failed"));
}
