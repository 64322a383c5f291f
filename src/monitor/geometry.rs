//! Coordinate arithmetic for placing windows on a display.
//!
//! Everything here is pure: no host queries, no side effects.

use crate::error::{Error, Result};

use super::types::{Dimension, DisplayDevice, Point};

/// Return the top-left corner of the device at `index`.
///
/// An index outside `0..devices.len()` is a caller error and is never clamped.
pub fn top_left_corner(devices: &[DisplayDevice], index: usize) -> Result<Point> {
    devices
        .get(index)
        .map(|device| device.origin)
        .ok_or(Error::IndexOutOfRange {
            index,
            len: devices.len(),
        })
}

/// Centre of a display, using truncating integer division.
pub fn display_center_point(origin: Point, resolution: Dimension) -> Point {
    Point::new(
        origin.x + resolution.width / 2,
        origin.y + resolution.height / 2,
    )
}

/// Top-left anchor that centres a window of `window` size on the display.
pub fn center_point_for_window(
    display_origin: Point,
    display_resolution: Dimension,
    window: Dimension,
) -> Point {
    let center = display_center_point(display_origin, display_resolution);
    // Windows are anchored at their top-left corner.
    Point::new(center.x - window.width / 2, center.y - window.height / 2)
}
