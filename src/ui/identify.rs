use gpui::prelude::*;
use gpui::{App, AppContext, FontWeight, SharedString, WindowHandle, WindowKind, div, rgb};

use crate::error::Result;
use crate::monitor::{Dimension, DisplayInventory};
use crate::ui::components::button;
use crate::ui::window_options;

/// Informational pop-up shown in the middle of one display.
pub struct IdentifyView {
    label: SharedString,
}

impl IdentifyView {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Render for IdentifyView {
    fn render(
        &mut self,
        _window: &mut gpui::Window,
        _cx: &mut gpui::Context<Self>,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .size_full()
            .p_4()
            .items_center()
            .justify_center()
            .bg(rgb(0x0e0e0e))
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .text_color(rgb(0xffffff))
                    .child(self.label.clone()),
            )
            .child(button("Close", false, |_, window, _cx| {
                window.remove_window();
            }))
    }
}

/// Open one identify pop-up per display, centred on that display.
///
/// The windows are independent of the picker: they do not block it and
/// closing them has no effect on the selection.
pub fn open_identify_windows(
    cx: &mut App,
    inventory: &DisplayInventory,
    size: Dimension,
) -> Result<Vec<WindowHandle<IdentifyView>>> {
    let labels = inventory.labels()?;
    let mut handles = Vec::with_capacity(labels.len());

    for (i, label) in labels.into_iter().enumerate() {
        let origin = inventory.centered_window(i, size)?;
        let title = label.clone();
        match cx.open_window(
            window_options(origin, size, title, WindowKind::PopUp),
            |_, cx| cx.new(move |_| IdentifyView::new(label)),
        ) {
            Ok(handle) => handles.push(handle),
            Err(e) => log::error!("Failed to open identify window on display {}: {:?}", i, e),
        }
    }

    Ok(handles)
}

/// Close identify windows left over from a previous click.
pub fn close_identify_windows(cx: &mut App, handles: &mut Vec<WindowHandle<IdentifyView>>) {
    for handle in handles.drain(..) {
        // Already-closed windows report an error here; that is expected.
        let _ = handle.update(cx, |_, window, _| window.remove_window());
    }
}
