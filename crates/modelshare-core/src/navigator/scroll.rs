//! Scroll measurement and paging affordances.
//!
//! The navigator never reads a rendering surface directly. The host injects
//! a [`Measure`] implementation that reports the current content and
//! viewport widths whenever the navigator derives its state.

use serde::{Deserialize, Serialize};

use crate::config::NavigatorConfig;

/// Current scroll offset reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

/// Measured widths of the scrollable content and its viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extents {
    pub content_width: f64,
    pub viewport_width: f64,
}

impl Extents {
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        Self {
            content_width,
            viewport_width,
        }
    }

    pub fn overflows(&self) -> bool {
        self.content_width > self.viewport_width
    }

    /// Largest valid horizontal offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }
}

/// Measurement capability supplied by the rendering host.
pub trait Measure {
    fn extents(&self) -> Extents;
}

impl Measure for Extents {
    fn extents(&self) -> Extents {
        *self
    }
}

impl<F> Measure for F
where
    F: Fn() -> Extents,
{
    fn extents(&self) -> Extents {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Request for the host to move the viewport.
///
/// `target_x` is the clamped offset the host will land on once the
/// animation completes; the navigator learns the real offset from the next
/// scroll position report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollRequest {
    pub delta_x: f64,
    pub target_x: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn page(direction: ScrollDirection, offset_x: f64, extents: Extents) -> Self {
        let delta_x = match direction {
            ScrollDirection::Left => -NavigatorConfig::PAGE_STEP,
            ScrollDirection::Right => NavigatorConfig::PAGE_STEP,
        };
        Self {
            delta_x,
            target_x: (offset_x + delta_x).clamp(0.0, extents.max_offset()),
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Visibility of the left and right paging controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollAffordances {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollAffordances {
    pub fn derive(position: ScrollPosition, extents: Extents) -> Self {
        let can_scroll_left = position.x > 0.0;
        let can_scroll_right = extents.overflows()
            && position.x
                < extents.content_width - extents.viewport_width - NavigatorConfig::EDGE_TOLERANCE;
        Self {
            can_scroll_left,
            can_scroll_right,
        }
    }

    pub fn allows(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Left => self.can_scroll_left,
            ScrollDirection::Right => self.can_scroll_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64) -> ScrollPosition {
        ScrollPosition { x, y: 0.0 }
    }

    #[test]
    fn test_left_hidden_at_origin() {
        let affordances = ScrollAffordances::derive(at(0.0), Extents::new(800.0, 300.0));
        assert!(!affordances.can_scroll_left);
        assert!(affordances.can_scroll_right);
    }

    #[test]
    fn test_right_hidden_without_overflow() {
        for x in [0.0, 10.0, 500.0] {
            let affordances = ScrollAffordances::derive(at(x), Extents::new(300.0, 300.0));
            assert!(!affordances.can_scroll_right);

            let affordances = ScrollAffordances::derive(at(x), Extents::new(200.0, 300.0));
            assert!(!affordances.can_scroll_right);
        }
    }

    #[test]
    fn test_right_edge_tolerance() {
        let extents = Extents::new(800.0, 300.0);
        assert!(ScrollAffordances::derive(at(498.5), extents).can_scroll_right);
        assert!(!ScrollAffordances::derive(at(499.0), extents).can_scroll_right);
        assert!(!ScrollAffordances::derive(at(500.0), extents).can_scroll_right);
    }

    #[test]
    fn test_both_sides_in_the_middle() {
        let affordances = ScrollAffordances::derive(at(200.0), Extents::new(800.0, 300.0));
        assert!(affordances.allows(ScrollDirection::Left));
        assert!(affordances.allows(ScrollDirection::Right));
    }

    #[test]
    fn test_page_request_is_clamped() {
        let extents = Extents::new(800.0, 300.0);
        let right = ScrollRequest::page(ScrollDirection::Right, 400.0, extents);
        assert_eq!(right.delta_x, 200.0);
        assert_eq!(right.target_x, 500.0);
        assert_eq!(right.behavior, ScrollBehavior::Smooth);

        let left = ScrollRequest::page(ScrollDirection::Left, 50.0, extents);
        assert_eq!(left.delta_x, -200.0);
        assert_eq!(left.target_x, 0.0);
    }

    #[test]
    fn test_closure_measure() {
        let measure = || Extents::new(10.0, 5.0);
        assert!(measure.extents().overflows());
    }
}
