pub mod enumerate;
pub mod geometry;
pub mod inventory;
pub mod types;

pub use enumerate::{DisplayHost, StaticHost};
#[cfg(feature = "gui")]
pub use enumerate::GpuiHost;
#[cfg(windows)]
pub use enumerate::Win32Host;
pub use geometry::{center_point_for_window, display_center_point, top_left_corner};
pub use inventory::{DisplayInventory, Qualifier, default_device_index, format_label};
pub use types::{Dimension, DisplayDevice, Point};
