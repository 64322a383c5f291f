use gpui::prelude::*;
use gpui::{FontWeight, MouseButton, SharedString, div, px, rgb};

use crate::ui::controller::Picker;

/// Build the display dropdown: a header showing the current choice and, when
/// open, one row per display in enumeration order.
///
/// Clicking the header toggles the list; clicking a row selects that display
/// and closes the list.
pub fn display_dropdown(
    labels: &[SharedString],
    selected: usize,
    open: bool,
    cx: &mut gpui::Context<Picker>,
) -> impl IntoElement + use<> {
    let current = labels.get(selected).cloned().unwrap_or_default();

    let header = div()
        .flex()
        .items_center()
        .justify_between()
        .w_full()
        .px_3()
        .py_2()
        .rounded(px(6.0))
        .bg(rgb(0x1e1e1e))
        .border_1()
        .border_color(if open { rgb(0x4CAF50) } else { rgb(0x333333) })
        .cursor_pointer()
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(|this, _, _window, cx| {
                this.dropdown_open = !this.dropdown_open;
                cx.notify();
            }),
        )
        .child(
            div()
                .text_color(rgb(0xffffff))
                .font_weight(FontWeight::MEDIUM)
                .child(current),
        )
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x888888))
                .child(if open { "▲" } else { "▼" }),
        );

    let mut dropdown = div().flex().flex_col().gap_1().w_full().child(header);

    if open {
        let mut list = div()
            .flex()
            .flex_col()
            .w_full()
            .rounded(px(6.0))
            .bg(rgb(0x1e1e1e))
            .border_1()
            .border_color(rgb(0x333333));

        for (i, label) in labels.iter().enumerate() {
            let is_selected = i == selected;
            list = list.child(
                div()
                    .w_full()
                    .px_3()
                    .py_2()
                    .bg(if is_selected {
                        rgb(0x1e3a1e)
                    } else {
                        rgb(0x1e1e1e)
                    })
                    .text_color(if is_selected {
                        rgb(0x81C784)
                    } else {
                        rgb(0xcccccc)
                    })
                    .cursor_pointer()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _, _window, cx| {
                            this.selected = i;
                            this.dropdown_open = false;
                            cx.notify();
                        }),
                    )
                    .child(label.clone()),
            );
        }

        dropdown = dropdown.child(list);
    }

    dropdown
}
