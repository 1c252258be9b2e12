// src/policy.rs
//
// The activation-delay decision. Given where the pointer has been over the
// last few samples, is it heading into the open submenu's content? If the
// slope from the pointer to the decreasing watch corner is falling while
// the slope to the increasing corner is rising, the pointer is converging
// on the cone between them and the caller should wait before switching
// rows. Everything else activates immediately.

use crate::geometry::{slope, watch_corners};
use crate::sample_buffer::SampleBuffer;
use crate::types::{MenuBounds, Point, SubmenuDirection};
use std::time::Duration;
use tracing::debug;

/// Inputs for one delay decision. `submenu_open` is whether a row is
/// currently active *and* passes the host's submenu filter; rows without
/// submenus never delay their siblings.
pub struct PolicyInput<'a> {
    pub submenu_open: bool,
    pub samples: &'a SampleBuffer,
    pub bounds: MenuBounds,
    pub tolerance: f64,
    pub direction: SubmenuDirection,
    pub delay: Duration,
}

/// How long to wait before re-checking activation. Zero means activate
/// immediately. Total: every input produces a decision, never an error.
///
/// `last_delay_loc` is the memo of the sample that produced the previous
/// delayed decision; a pointer that has not moved since then activates
/// immediately so a stationary cursor cannot be deferred forever.
pub fn activation_delay(
    input: &PolicyInput<'_>,
    last_delay_loc: &mut Option<Point>,
) -> Duration {
    if !input.submenu_open {
        // Nothing to protect against; activate right away.
        return Duration::ZERO;
    }

    let Some(loc) = input.samples.latest() else {
        return Duration::ZERO;
    };
    let prev_loc = input.samples.oldest().unwrap_or(loc);

    // Pointer came in from outside the whole menu, so there is no
    // diagonal-travel ambiguity. Only the bottom edge carries the
    // tolerance here, matching the cone's lower corner.
    let bounds = input.bounds;
    if prev_loc.x < bounds.left
        || prev_loc.x > bounds.right()
        || prev_loc.y < bounds.top
        || prev_loc.y > bounds.bottom() + input.tolerance
    {
        return Duration::ZERO;
    }

    // Pointer has not moved since the last delayed check; stop deferring.
    if *last_delay_loc == Some(loc) {
        return Duration::ZERO;
    }

    let corners = watch_corners(&bounds, input.tolerance, input.direction);

    let decreasing_slope = slope(loc, corners.decreasing);
    let increasing_slope = slope(loc, corners.increasing);
    let prev_decreasing_slope = slope(prev_loc, corners.decreasing);
    let prev_increasing_slope = slope(prev_loc, corners.increasing);

    if decreasing_slope < prev_decreasing_slope && increasing_slope > prev_increasing_slope {
        // Both slope trends converge on the cone: the pointer is moving
        // toward the submenu. Hold off and check again later.
        debug!(?loc, ?prev_loc, delay = ?input.delay, "pointer aimed at submenu, delaying");
        *last_delay_loc = Some(loc);
        return input.delay;
    }

    *last_delay_loc = None;
    Duration::ZERO
}
