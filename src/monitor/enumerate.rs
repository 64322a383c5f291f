use crate::error::Result;

use super::types::DisplayDevice;

/// Source of display devices.
///
/// Every call re-queries the host; callers that need stable indices should
/// take one [`DisplayInventory`](super::DisplayInventory) snapshot.
pub trait DisplayHost {
    /// All attached displays, in whatever order the host reports them.
    fn devices(&self) -> Result<Vec<DisplayDevice>>;

    /// The display the host considers primary, if it reports one.
    fn default_device(&self) -> Option<DisplayDevice>;

    /// Devices and default taken from the same query. Hosts that re-enumerate
    /// on every call should override this so a hot-plug between the two
    /// lookups cannot mix layouts.
    fn snapshot(&self) -> Result<(Vec<DisplayDevice>, Option<DisplayDevice>)> {
        Ok((self.devices()?, self.default_device()))
    }
}

/// A fixed layout, used for configured dry runs and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticHost {
    devices: Vec<DisplayDevice>,
    default: Option<usize>,
}

impl StaticHost {
    /// `default` indexes into `devices`; an out-of-range index means no default.
    pub fn new(devices: Vec<DisplayDevice>, default: Option<usize>) -> Self {
        Self { devices, default }
    }
}

impl DisplayHost for StaticHost {
    fn devices(&self) -> Result<Vec<DisplayDevice>> {
        Ok(self.devices.clone())
    }

    fn default_device(&self) -> Option<DisplayDevice> {
        self.default.and_then(|i| self.devices.get(i).cloned())
    }
}

#[cfg(windows)]
pub use win32::Win32Host;

#[cfg(windows)]
mod win32 {
    use windows::Win32::Foundation::{LPARAM, RECT};
    use windows::Win32::Graphics::Gdi::{
        EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFOEXW, MONITORINFOF_PRIMARY,
    };

    use super::DisplayHost;
    use crate::error::{Error, Result};
    use crate::monitor::types::{Dimension, DisplayDevice, Point};

    struct Found {
        device: DisplayDevice,
        primary: bool,
    }

    /// Live enumeration through `EnumDisplayMonitors`.
    ///
    /// Identifiers are `\DisplayN` with a zero-based enumeration ordinal; the
    /// GDI device name (`\\.\DISPLAY1`, ...) is kept in `name`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Win32Host;

    impl Win32Host {
        fn enumerate(&self) -> Result<Vec<Found>> {
            unsafe extern "system" fn enum_proc(
                hmonitor: HMONITOR,
                _hdc: HDC,
                _rect: *mut RECT,
                lparam: LPARAM,
            ) -> windows::core::BOOL {
                unsafe {
                    let found = &mut *(lparam.0 as *mut Vec<Found>);

                    let mut info = MONITORINFOEXW::default();
                    info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;

                    if GetMonitorInfoW(hmonitor, &mut info as *mut _ as *mut _).as_bool() {
                        let rc = info.monitorInfo.rcMonitor;
                        let device_name_slice = &info.szDevice;
                        let name_len = device_name_slice
                            .iter()
                            .position(|&c| c == 0)
                            .unwrap_or(device_name_slice.len());
                        let name = String::from_utf16_lossy(&device_name_slice[..name_len]);

                        let ordinal = found.len();
                        found.push(Found {
                            device: DisplayDevice {
                                id: format!("\\Display{}", ordinal),
                                name,
                                origin: Point::new(rc.left, rc.top),
                                resolution: Dimension::new(rc.right - rc.left, rc.bottom - rc.top),
                            },
                            primary: info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY != 0,
                        });
                    }

                    windows::core::BOOL(1) // continue enumeration
                }
            }

            let mut found: Vec<Found> = Vec::new();
            let ok = unsafe {
                EnumDisplayMonitors(
                    None,
                    None,
                    Some(enum_proc),
                    LPARAM(&mut found as *mut Vec<Found> as isize),
                )
            };
            if !ok.as_bool() {
                return Err(Error::Enumeration(
                    "EnumDisplayMonitors returned FALSE".to_string(),
                ));
            }
            Ok(found)
        }
    }

    impl DisplayHost for Win32Host {
        fn devices(&self) -> Result<Vec<DisplayDevice>> {
            Ok(self.enumerate()?.into_iter().map(|f| f.device).collect())
        }

        fn default_device(&self) -> Option<DisplayDevice> {
            match self.enumerate() {
                Ok(found) => found.into_iter().find(|f| f.primary).map(|f| f.device),
                Err(e) => {
                    log::warn!("Could not query the primary display: {}", e);
                    None
                }
            }
        }

        fn snapshot(&self) -> Result<(Vec<DisplayDevice>, Option<DisplayDevice>)> {
            let found = self.enumerate()?;
            let default = found.iter().find(|f| f.primary).map(|f| f.device.clone());
            let devices = found.into_iter().map(|f| f.device).collect();
            Ok((devices, default))
        }
    }
}

#[cfg(feature = "gui")]
pub use toolkit::GpuiHost;

#[cfg(feature = "gui")]
mod toolkit {
    use gpui::{App, PlatformDisplay};

    use super::DisplayHost;
    use crate::error::Result;
    use crate::monitor::types::{Dimension, DisplayDevice, Point};

    /// Enumeration through gpui's platform display list.
    ///
    /// Bounds are logical pixels and are rounded to whole coordinates.
    pub struct GpuiHost<'a> {
        cx: &'a App,
    }

    impl<'a> GpuiHost<'a> {
        pub fn new(cx: &'a App) -> Self {
            Self { cx }
        }
    }

    fn to_device(display: &dyn PlatformDisplay) -> DisplayDevice {
        let bounds = display.bounds();
        let round = |v: gpui::Pixels| f32::from(v).round() as i32;
        let id = format!("Display{}", u32::from(display.id()));
        DisplayDevice {
            name: id.clone(),
            id,
            origin: Point::new(round(bounds.origin.x), round(bounds.origin.y)),
            resolution: Dimension::new(round(bounds.size.width), round(bounds.size.height)),
        }
    }

    impl DisplayHost for GpuiHost<'_> {
        fn devices(&self) -> Result<Vec<DisplayDevice>> {
            Ok(self
                .cx
                .displays()
                .iter()
                .map(|display| to_device(display.as_ref()))
                .collect())
        }

        fn default_device(&self) -> Option<DisplayDevice> {
            self.cx
                .primary_display()
                .map(|display| to_device(display.as_ref()))
        }
    }
}
