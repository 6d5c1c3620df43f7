//! Hit testing for input processing
//!
//! Determining what the pointer is over is an input concern; layout only
//! produces the rectangles.

use crate::foundation::math::{Rect, Vec2};

/// Check if a point is inside a widget's rectangle and the visible clip region
///
/// # Arguments
/// * `rect` - Resolved widget rectangle
/// * `clip` - Visible region of the owning panel
/// * `point` - Pointer position in screen pixels
pub fn hit_test(rect: &Rect, clip: &Rect, point: Vec2) -> bool {
    rect.contains(point) && clip.contains(point)
}

/// Index of the last visible rectangle containing `point`
///
/// Rectangles are given bottom-most first, so the last hit is the one drawn on
/// top. `None` entries are hidden and never hit but keep their index.
pub fn topmost_hit<I>(rects: I, point: Vec2) -> Option<usize>
where
    I: IntoIterator<Item = Option<Rect>>,
{
    rects
        .into_iter()
        .enumerate()
        .filter(|(_, rect)| rect.is_some_and(|rect| rect.contains(point)))
        .map(|(index, _)| index)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_excludes_hidden_part() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let clip = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(hit_test(&rect, &clip, Vec2::new(25.0, 25.0)));
        assert!(!hit_test(&rect, &clip, Vec2::new(75.0, 75.0)));
    }

    #[test]
    fn test_topmost_prefers_last() {
        let rects = [Some(Rect::new(0.0, 0.0, 100.0, 100.0)), Some(Rect::new(50.0, 50.0, 100.0, 100.0))];
        assert_eq!(topmost_hit(rects, Vec2::new(60.0, 60.0)), Some(1));
        assert_eq!(topmost_hit(rects, Vec2::new(10.0, 10.0)), Some(0));
        assert_eq!(topmost_hit(rects, Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let rects = [Some(Rect::new(0.0, 0.0, 100.0, 100.0)), None];
        assert_eq!(topmost_hit(rects, Vec2::new(10.0, 10.0)), Some(0));
    }
}
