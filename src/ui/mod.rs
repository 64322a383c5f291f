pub mod components;
pub mod controller;
pub mod dropdown;
pub mod identify;

use std::sync::Arc;

use gpui::{
    App, AppContext, Bounds, SharedString, TitlebarOptions, WindowBounds, WindowHandle, WindowKind,
    WindowOptions, point, px,
};

pub use controller::Picker;
pub use identify::IdentifyView;

use crate::config::Config;
use crate::monitor::{Dimension, DisplayInventory, Point};
use crate::session::SelectionSession;

/// Options for a titled window at an absolute screen position.
pub fn window_options(
    origin: Point,
    size: Dimension,
    title: impl Into<SharedString>,
    kind: WindowKind,
) -> WindowOptions {
    let bounds = Bounds {
        origin: point(px(origin.x as f32), px(origin.y as f32)),
        size: gpui::size(px(size.width as f32), px(size.height as f32)),
    };
    WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(title.into()),
            ..Default::default()
        }),
        kind,
        ..Default::default()
    }
}

/// Open the "Set Display" window centred on the default display.
pub fn open_picker(
    cx: &mut App,
    inventory: Arc<DisplayInventory>,
    labels: Vec<String>,
    session: Arc<SelectionSession>,
    config: &Config,
) -> anyhow::Result<WindowHandle<Picker>> {
    let size = config.picker.dimension();
    let origin = inventory.centered_window(inventory.default_device_index(), size)?;
    log::debug!("Opening picker at {:?}", origin);

    let picker = Picker::new(inventory, labels, session, config);
    cx.open_window(
        window_options(origin, size, "Set Display", WindowKind::Normal),
        |_, cx| cx.new(move |_| picker),
    )
}
