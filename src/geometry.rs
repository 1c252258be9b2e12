// src/geometry.rs
//
// Watch-corner selection for the slope test. The menu's bounding box is
// expanded vertically by the tolerance margin, and two of its corners are
// picked per submenu direction: travel into the submenu makes the slope
// from the pointer to the "decreasing" corner fall over time and the slope
// to the "increasing" corner rise. (The y axis grows downward, which is
// why the upper corner is the decreasing one for a right-opening submenu.)

use crate::types::{MenuBounds, Point, SubmenuDirection};

/// The two tolerance-expanded corners the activation policy watches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchCorners {
    pub decreasing: Point,
    pub increasing: Point,
}

pub fn watch_corners(
    bounds: &MenuBounds,
    tolerance: f64,
    direction: SubmenuDirection,
) -> WatchCorners {
    let upper_left = Point::new(bounds.left, bounds.top - tolerance);
    let upper_right = Point::new(bounds.right(), bounds.top - tolerance);
    let lower_left = Point::new(bounds.left, bounds.bottom() + tolerance);
    let lower_right = Point::new(bounds.right(), bounds.bottom() + tolerance);

    match direction {
        SubmenuDirection::Right => WatchCorners {
            decreasing: upper_right,
            increasing: lower_right,
        },
        SubmenuDirection::Left => WatchCorners {
            decreasing: lower_left,
            increasing: upper_left,
        },
        SubmenuDirection::Below => WatchCorners {
            decreasing: lower_right,
            increasing: lower_left,
        },
        SubmenuDirection::Above => WatchCorners {
            decreasing: upper_left,
            increasing: upper_right,
        },
    }
}

/// Slope of the line from `a` to `b`. Yields ±infinity when the x
/// coordinates coincide; infinities order normally in the comparisons
/// downstream, so no special-casing is needed.
pub fn slope(a: Point, b: Point) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: MenuBounds = MenuBounds {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 300.0,
    };

    #[test]
    fn test_corner_pair_per_direction() {
        let upper_left = Point::new(0.0, -75.0);
        let upper_right = Point::new(200.0, -75.0);
        let lower_left = Point::new(0.0, 375.0);
        let lower_right = Point::new(200.0, 375.0);

        let right = watch_corners(&BOUNDS, 75.0, SubmenuDirection::Right);
        assert_eq!(right.decreasing, upper_right);
        assert_eq!(right.increasing, lower_right);

        let left = watch_corners(&BOUNDS, 75.0, SubmenuDirection::Left);
        assert_eq!(left.decreasing, lower_left);
        assert_eq!(left.increasing, upper_left);

        let below = watch_corners(&BOUNDS, 75.0, SubmenuDirection::Below);
        assert_eq!(below.decreasing, lower_right);
        assert_eq!(below.increasing, lower_left);

        let above = watch_corners(&BOUNDS, 75.0, SubmenuDirection::Above);
        assert_eq!(above.decreasing, upper_left);
        assert_eq!(above.increasing, upper_right);
    }

    #[test]
    fn test_tolerance_expands_vertically_only() {
        let corners = watch_corners(&BOUNDS, 10.0, SubmenuDirection::Right);
        assert_eq!(corners.decreasing, Point::new(200.0, -10.0));
        assert_eq!(corners.increasing, Point::new(200.0, 310.0));
    }

    #[test]
    fn test_slope() {
        assert_eq!(slope(Point::new(0.0, 0.0), Point::new(2.0, 4.0)), 2.0);
        assert_eq!(slope(Point::new(2.0, 4.0), Point::new(0.0, 0.0)), 2.0);
    }

    #[test]
    fn test_degenerate_slope_is_signed_infinity() {
        let down = slope(Point::new(5.0, 0.0), Point::new(5.0, 10.0));
        let up = slope(Point::new(5.0, 10.0), Point::new(5.0, 0.0));
        assert_eq!(down, f64::INFINITY);
        assert_eq!(up, f64::NEG_INFINITY);
        // Infinities must still participate in the ordering the policy uses.
        assert!(up < 0.0 && 0.0 < down);
    }
}
