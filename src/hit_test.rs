//! Hit-testing for routing pointer gestures to sheet regions
//!
//! The design follows a "hit-test → dispatch" pattern:
//! 1. `SheetLayout::compute()` places the sheet rectangles for the frame
//! 2. `route_gesture()` determines the highest-priority `GestureRegion` at
//!    the press point
//! 3. The runtime dispatches the rest of the gesture to whichever region
//!    claimed the press
//!
//! Routing is decided once at press time. Regions never change mid-gesture,
//! so a drag that wanders out of its region keeps its owner.

/// A point in window coordinates (physical pixels)
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in window coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x < self.x + self.width && pt.y >= self.y && pt.y < self.y + self.height
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Regions of the sheet that can claim a pointer gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureRegion {
    /// The header strip at the top of the sheet (drag-down-to-collapse)
    Header,
    /// The sheet body (drag to expand or collapse)
    Panel,
}

/// Where the sheet's rectangles sit for the current frame.
///
/// The sheet is anchored to the bottom edge: fully expanded its top sits at
/// `window_height - panel_height`, and the position offset pushes it down
/// from there. The header strip is the top slice of the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetLayout {
    pub panel: Rect,
    pub header: Rect,
}

impl SheetLayout {
    pub fn compute(
        window_width: f64,
        window_height: f64,
        panel_height: f64,
        offset: f64,
        header_height: f64,
    ) -> Self {
        let top = window_height - panel_height + offset;
        let panel = Rect::new(0.0, top, window_width, panel_height);
        let header = Rect::new(0.0, top, window_width, header_height.min(panel_height));
        Self { panel, header }
    }
}

/// Determine which sheet region owns a press at `pt`.
///
/// Priority order:
/// 1. Header strip, only while the sheet is expanded (collapsed sheets have
///    no header gesture; the press falls through to the panel)
/// 2. Panel body
///
/// Points outside the panel belong to the host UI and return `None`.
pub fn route_gesture(layout: &SheetLayout, pt: Point, expanded: bool) -> Option<GestureRegion> {
    if expanded && layout.header.contains(pt) {
        return Some(GestureRegion::Header);
    }
    if layout.panel.contains(pt) {
        return Some(GestureRegion::Panel);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SheetLayout {
        // 800x600 window, 400 px sheet fully expanded, 48 px header.
        SheetLayout::compute(800.0, 600.0, 400.0, 0.0, 48.0)
    }

    #[test]
    fn test_layout_anchors_panel_to_bottom() {
        let l = layout();
        assert_eq!(l.panel.y, 200.0);
        assert_eq!(l.panel.bottom(), 600.0);
        assert_eq!(l.header.y, 200.0);
        assert_eq!(l.header.height, 48.0);
    }

    #[test]
    fn test_offset_pushes_panel_down() {
        let l = SheetLayout::compute(800.0, 600.0, 400.0, 150.0, 48.0);
        assert_eq!(l.panel.y, 350.0);
        assert_eq!(l.header.y, 350.0);
    }

    #[test]
    fn test_header_wins_over_panel_when_expanded() {
        let l = layout();
        let in_header = Point::new(400.0, 210.0);

        assert_eq!(
            route_gesture(&l, in_header, true),
            Some(GestureRegion::Header)
        );
    }

    #[test]
    fn test_header_is_inert_when_collapsed() {
        let l = SheetLayout::compute(800.0, 600.0, 400.0, 150.0, 48.0);
        let in_header = Point::new(400.0, 360.0);

        assert_eq!(
            route_gesture(&l, in_header, false),
            Some(GestureRegion::Panel)
        );
    }

    #[test]
    fn test_body_routes_to_panel() {
        let l = layout();
        let in_body = Point::new(400.0, 450.0);

        assert_eq!(route_gesture(&l, in_body, true), Some(GestureRegion::Panel));
        assert_eq!(
            route_gesture(&l, in_body, false),
            Some(GestureRegion::Panel)
        );
    }

    #[test]
    fn test_outside_panel_routes_nowhere() {
        let l = layout();
        let above = Point::new(400.0, 100.0);

        assert_eq!(route_gesture(&l, above, true), None);
        assert_eq!(route_gesture(&l, above, false), None);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(0.0, 10.0, 100.0, 20.0);

        assert!(r.contains(Point::new(0.0, 10.0)));
        assert!(r.contains(Point::new(99.9, 29.9)));
        assert!(!r.contains(Point::new(100.0, 15.0)));
        assert!(!r.contains(Point::new(50.0, 30.0)));
    }

    #[test]
    fn test_header_clamped_to_panel_height() {
        let l = SheetLayout::compute(800.0, 600.0, 30.0, 0.0, 48.0);
        assert_eq!(l.header.height, 30.0);
    }
}
