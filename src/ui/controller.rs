use std::sync::Arc;

use gpui::prelude::*;
use gpui::{FontWeight, SharedString, WindowHandle, div, px, rgb};

use crate::config::Config;
use crate::monitor::{Dimension, DisplayInventory};
use crate::session::SelectionSession;
use crate::ui::components::button;
use crate::ui::dropdown::display_dropdown;
use crate::ui::identify::{IdentifyView, close_identify_windows, open_identify_windows};

/// The "Set Display" form.
///
/// Owns the dropdown state and the identify pop-ups, and commits the chosen
/// index to the shared [`SelectionSession`] when *Set* is pressed.
pub struct Picker {
    /// Snapshot the dropdown indices refer to.
    pub inventory: Arc<DisplayInventory>,
    /// One label per display, same order as `inventory`.
    pub labels: Vec<SharedString>,
    /// Index shown in the dropdown.
    pub selected: usize,
    pub dropdown_open: bool,
    /// Size used for the identify pop-ups.
    pub identify_size: Dimension,
    pub identify_windows: Vec<WindowHandle<IdentifyView>>,
    pub session: Arc<SelectionSession>,
}

impl Picker {
    pub fn new(
        inventory: Arc<DisplayInventory>,
        labels: Vec<String>,
        session: Arc<SelectionSession>,
        config: &Config,
    ) -> Self {
        let selected = inventory.default_device_index();
        Self {
            inventory,
            labels: labels.into_iter().map(SharedString::from).collect(),
            selected,
            dropdown_open: false,
            identify_size: config.identify.dimension(),
            identify_windows: Vec::new(),
            session,
        }
    }

    fn identify(&mut self, cx: &mut gpui::Context<Self>) {
        close_identify_windows(cx, &mut self.identify_windows);
        match open_identify_windows(cx, &self.inventory, self.identify_size) {
            Ok(handles) => self.identify_windows = handles,
            Err(e) => log::error!("Cannot identify displays: {}", e),
        }
    }

    fn set(&mut self, window: &mut gpui::Window, cx: &mut gpui::Context<Self>) {
        log::info!("Dropdown has value: {}", self.selected);
        close_identify_windows(cx, &mut self.identify_windows);
        self.session.commit(self.selected);
        window.remove_window();
    }
}

impl Render for Picker {
    fn render(
        &mut self,
        _window: &mut gpui::Window,
        cx: &mut gpui::Context<Self>,
    ) -> impl IntoElement {
        let dropdown = display_dropdown(&self.labels, self.selected, self.dropdown_open, cx);

        let buttons = div()
            .flex()
            .gap_3()
            .w_full()
            .child(button(
                "Identify Displays",
                false,
                cx.listener(|this, _, _window, cx| {
                    this.identify(cx);
                }),
            ))
            .child(button(
                "Set",
                true,
                cx.listener(|this, _, window, cx| {
                    this.set(window, cx);
                }),
            ));

        div()
            .flex()
            .flex_col()
            .gap_4()
            .size_full()
            .px_6()
            .py_5()
            .bg(rgb(0x0e0e0e))
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(rgb(0x888888))
                    .child(format!("Displays ({})", self.labels.len())),
            )
            .child(dropdown)
            .child(div().w_full().h(px(1.0)).bg(rgb(0x333333)))
            .child(buttons)
    }
}
