//! Data model for capture targets and regions
//!
//! This module defines the small set of value types shared by the capture
//! facade and the window providers:
//!
//! - [`WindowRef`]: opaque reference to a native window
//! - [`Rect`]: a requested capture rectangle
//! - [`Bounds`]: the maximum capturable extent a window reports
//! - [`TitleQuery`]: substring or regex query for finding a window by title

use regex::Regex;

/// Opaque reference to a native on-screen window
///
/// Wraps the raw `HWND` value. A `WindowRef` is borrowed, never owned: it is
/// valid only while the underlying window exists, and the facade never
/// creates, destroys, or caches one across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowRef(isize);

impl WindowRef {
    /// Wraps a raw native window handle value
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// Returns the raw native handle value
    pub fn as_raw(&self) -> isize {
        self.0
    }
}

impl std::fmt::Display for WindowRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A requested capture rectangle
///
/// `(x1, y1)` is the top-left origin and `(x2, y2)` the right/bottom extent,
/// so with the usual zero origin `x2`/`y2` are effectively width and height.
/// Valid when all four values are non-negative, `x1 < x2`, `y1 < y2`, and the
/// extent stays within the target's [`Bounds`].
///
/// The `Display` impl renders the four values verbatim, comma-joined
/// (`"10, 10, 900, 100"`), since validation errors must quote the requested
/// coordinates literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge of the rectangle
    pub x1: i32,
    /// Top edge of the rectangle
    pub y1: i32,
    /// Right edge of the rectangle
    pub x2: i32,
    /// Bottom edge of the rectangle
    pub y2: i32,
}

impl Rect {
    /// Creates a rectangle from the four positional coordinates
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width of the rectangle (`x2 - x1`)
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Height of the rectangle (`y2 - y1`)
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Maximum capturable extent of a window, as reported by a provider
///
/// The minimum origin is always (0, 0); providers report extents only.
/// Non-zero origins are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Maximum right extent (capturable width)
    pub max_x2: i32,
    /// Maximum bottom extent (capturable height)
    pub max_y2: i32,
}

impl Bounds {
    /// Creates bounds from the maximum right/bottom extents
    pub fn new(max_x2: i32, max_y2: i32) -> Self {
        Self { max_x2, max_y2 }
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0, 0, {}, {}", self.max_x2, self.max_y2)
    }
}

/// Query for locating a window by its title
///
/// Resolution is a one-shot, first-match lookup: either a case-insensitive
/// substring search or a regex match against each enumerated window title.
/// There is no fuzzy matching and no retry.
///
/// # Examples
///
/// ```
/// use win32_screenshot::model::TitleQuery;
///
/// let by_text: TitleQuery = "Notepad".into();
/// let by_pattern: TitleQuery = regex::Regex::new("Notepad.*\\.txt").unwrap().into();
/// ```
#[derive(Debug, Clone)]
pub enum TitleQuery {
    /// Case-insensitive substring search on the window title
    Substring(String),
    /// Regex match on the window title
    Pattern(Regex),
}

impl TitleQuery {
    /// Returns the raw query text (substring, or the regex source)
    pub fn as_str(&self) -> &str {
        match self {
            TitleQuery::Substring(s) => s,
            TitleQuery::Pattern(re) => re.as_str(),
        }
    }
}

impl std::fmt::Display for TitleQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for TitleQuery {
    fn from(query: &str) -> Self {
        TitleQuery::Substring(query.to_string())
    }
}

impl From<String> for TitleQuery {
    fn from(query: String) -> Self {
        TitleQuery::Substring(query)
    }
}

impl From<Regex> for TitleQuery {
    fn from(pattern: Regex) -> Self {
        TitleQuery::Pattern(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ref_round_trip() {
        let window = WindowRef::from_raw(0x1a2b);
        assert_eq!(window.as_raw(), 0x1a2b);
        assert_eq!(format!("{}", window), "0x1a2b");
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(10, 20, 110, 220);
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 200);
    }

    #[test]
    fn test_rect_display_is_literal_coordinates() {
        let rect = Rect::new(10, 10, 900, 100);
        assert_eq!(format!("{}", rect), "10, 10, 900, 100");

        let negative = Rect::new(-1, 0, 80, 60);
        assert_eq!(format!("{}", negative), "-1, 0, 80, 60");
    }

    #[test]
    fn test_bounds_display_includes_zero_origin() {
        let bounds = Bounds::new(800, 600);
        assert_eq!(format!("{}", bounds), "0, 0, 800, 600");
    }

    #[test]
    fn test_title_query_from_str() {
        let query: TitleQuery = "Calculator".into();
        assert!(matches!(query, TitleQuery::Substring(_)));
        assert_eq!(query.as_str(), "Calculator");
    }

    #[test]
    fn test_title_query_from_regex() {
        let query: TitleQuery = Regex::new("Untitled - .*").unwrap().into();
        assert!(matches!(query, TitleQuery::Pattern(_)));
        assert_eq!(query.as_str(), "Untitled - .*");
    }

    #[test]
    fn test_title_query_display() {
        let query = TitleQuery::Substring("NoSuchApp12345".to_string());
        assert_eq!(format!("{}", query), "NoSuchApp12345");
    }
}
