/// A position in virtual-screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// One monitor as reported by the host.
#[derive(Clone, Debug)]
pub struct DisplayDevice {
    /// Host identifier with a zero-based display number (e.g. `\Display0`).
    pub id: String,
    /// Free-form device name, only used for diagnostics (e.g. `\\.\DISPLAY1`).
    pub name: String,
    /// Top-left corner in virtual-screen space.
    pub origin: Point,
    /// Current resolution.
    pub resolution: Dimension,
}

impl DisplayDevice {
    pub fn new(id: impl Into<String>, origin: Point, resolution: Dimension) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            origin,
            resolution,
        }
    }
}

// `name` is cosmetic; two handles describe the same device when the host id and
// geometry match.
impl PartialEq for DisplayDevice {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.origin == other.origin && self.resolution == other.resolution
    }
}

impl Eq for DisplayDevice {}
