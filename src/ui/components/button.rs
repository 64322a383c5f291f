use gpui::prelude::*;
use gpui::{FontWeight, MouseButton, MouseDownEvent, SharedString, div, px, rgb};

/// A flat push button.
///
/// `primary` buttons use the accent colour; secondary ones are grey.
pub fn button(
    label: impl Into<SharedString>,
    primary: bool,
    on_click: impl Fn(&MouseDownEvent, &mut gpui::Window, &mut gpui::App) + 'static,
) -> impl IntoElement {
    let label: SharedString = label.into();
    div()
        .flex()
        .flex_1()
        .items_center()
        .justify_center()
        .h(px(32.0))
        .px_4()
        .rounded(px(6.0))
        .bg(if primary {
            rgb(0x4CAF50)
        } else {
            rgb(0x2a2a2a)
        })
        .border_1()
        .border_color(if primary {
            rgb(0x4CAF50)
        } else {
            rgb(0x555555)
        })
        .text_color(rgb(0xffffff))
        .font_weight(FontWeight::MEDIUM)
        .cursor_pointer()
        .on_mouse_down(MouseButton::Left, move |event, window, cx| {
            cx.stop_propagation();
            on_click(event, window, cx);
        })
        .child(label)
}
