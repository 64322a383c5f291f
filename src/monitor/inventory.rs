use std::fmt;

use crate::error::{Error, Result};

use super::enumerate::DisplayHost;
use super::geometry::{center_point_for_window, top_left_corner};
use super::types::{Dimension, DisplayDevice, Point};

/// Where a device sits relative to the default display.
///
/// Only the horizontal origin is considered, so stacked or diagonal layouts
/// are reported as left/right of the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Qualifier {
    Default,
    Right,
    Left,
}

impl Qualifier {
    pub fn of(device: &DisplayDevice, default: Option<&DisplayDevice>) -> Self {
        if default == Some(device) {
            Qualifier::Default
        } else if device.origin.x > 0 {
            Qualifier::Right
        } else {
            Qualifier::Left
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Qualifier::Default => "Default Device",
            Qualifier::Right => "Right from Default Display",
            Qualifier::Left => "Left from Default Display",
        })
    }
}

/// Index of the device equal to `default`, or 0 when none matches.
pub fn default_device_index(
    devices: &[DisplayDevice],
    default: Option<&DisplayDevice>,
) -> Result<usize> {
    if devices.is_empty() {
        return Err(Error::NoDisplays);
    }
    Ok(default
        .and_then(|default| devices.iter().rposition(|d| d == default))
        .unwrap_or(0))
}

/// User-facing display number: every digit in the identifier, plus one.
fn display_number(id: &str) -> Result<u32> {
    let digits: String = id.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<u32>()
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| Error::UnparseableIdentifier(id.to_string()))
}

/// Build `"Display {N} {W}x{H} ({qualifier})"` for a device.
pub fn format_label(device: &DisplayDevice, default: Option<&DisplayDevice>) -> Result<String> {
    let number = display_number(&device.id)?;
    Ok(format!(
        "Display {} {}x{} ({})",
        number,
        device.resolution.width,
        device.resolution.height,
        Qualifier::of(device, default)
    ))
}

/// A single enumeration snapshot.
///
/// Indices handed out by the inventory stay valid for its whole lifetime, so
/// the UI and the hand-off agree on what a selection refers to.
#[derive(Clone, Debug)]
pub struct DisplayInventory {
    devices: Vec<DisplayDevice>,
    default: Option<DisplayDevice>,
}

impl DisplayInventory {
    pub fn enumerate(host: &dyn DisplayHost) -> Result<Self> {
        let (devices, default) = host.snapshot()?;
        Self::from_devices(devices, default)
    }

    pub fn from_devices(devices: Vec<DisplayDevice>, default: Option<DisplayDevice>) -> Result<Self> {
        if devices.is_empty() {
            return Err(Error::NoDisplays);
        }
        Ok(Self { devices, default })
    }

    pub fn devices(&self) -> &[DisplayDevice] {
        &self.devices
    }

    pub fn default_device(&self) -> Option<&DisplayDevice> {
        self.default.as_ref()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn default_device_index(&self) -> usize {
        // Non-empty by construction.
        default_device_index(&self.devices, self.default.as_ref()).unwrap_or(0)
    }

    pub fn label(&self, index: usize) -> Result<String> {
        let device = self.device(index)?;
        format_label(device, self.default.as_ref())
    }

    /// Labels for every device, in enumeration order.
    pub fn labels(&self) -> Result<Vec<String>> {
        self.devices
            .iter()
            .map(|device| format_label(device, self.default.as_ref()))
            .collect()
    }

    pub fn device(&self, index: usize) -> Result<&DisplayDevice> {
        self.devices.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.devices.len(),
        })
    }

    pub fn top_left_corner(&self, index: usize) -> Result<Point> {
        top_left_corner(&self.devices, index)
    }

    pub fn resolution(&self, index: usize) -> Result<Dimension> {
        Ok(self.device(index)?.resolution)
    }

    /// Top-left anchor that centres a `window`-sized window on device `index`.
    pub fn centered_window(&self, index: usize, window: Dimension) -> Result<Point> {
        let device = self.device(index)?;
        Ok(center_point_for_window(device.origin, device.resolution, window))
    }
}
