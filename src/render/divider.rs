//! Divider rendering - drag handle, collapse button and the drag shield.

use crate::app::SplitPaneEditor;
use crate::constants::DIVIDER_WIDTH;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;

/// Vertical handle between the panes. Drag to resize, double-click to reset.
pub fn render_divider(collapsed: bool, dragging: bool, cx: &mut Context<SplitPaneEditor>) -> Stateful<Div> {
    let border = cx.theme().border;
    let active = cx.theme().primary;
    let hover_bg = cx.theme().muted;

    div()
        .id("pane-divider")
        .relative()
        .flex_none()
        .w(px(DIVIDER_WIDTH))
        .h_full()
        .flex()
        .justify_center()
        .when(!collapsed, |d| {
            d.cursor(CursorStyle::ResizeLeftRight)
                .hover(|s| s.bg(hover_bg))
                .on_mouse_down(MouseButton::Left, cx.listener(SplitPaneEditor::on_divider_mouse_down))
        })
        // Hairline
        .child(
            div()
                .w(px(1.0))
                .h_full()
                .bg(if dragging { active } else { border }),
        )
        .child(render_collapse_button(collapsed, cx))
}

fn render_collapse_button(collapsed: bool, cx: &mut Context<SplitPaneEditor>) -> Stateful<Div> {
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let fg = cx.theme().muted_foreground;
    let hover_bg = cx.theme().muted;

    div()
        .id("pane-collapse-toggle")
        .absolute()
        .top(px(12.0))
        .left(px(DIVIDER_WIDTH / 2.0 - 10.0))
        .w(px(20.0))
        .h(px(28.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(border)
        .bg(bg)
        .hover(|s| s.bg(hover_bg))
        .cursor_pointer()
        .flex()
        .items_center()
        .justify_center()
        .text_xs()
        .text_color(fg)
        .child(if collapsed { "›" } else { "‹" })
        // Keep the press from starting a drag on the handle underneath
        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .on_click(cx.listener(|this, _, _, cx| this.toggle_collapse(cx)))
}

/// Full-size layer shown while a drag is active. It keeps the resize cursor
/// everywhere, blocks text selection and hover effects underneath, and
/// receives the pointer moves and the release.
pub fn render_drag_shield(cx: &mut Context<SplitPaneEditor>) -> Stateful<Div> {
    div()
        .id("drag-shield")
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .occlude()
        .cursor(CursorStyle::ResizeLeftRight)
        .on_mouse_move(cx.listener(SplitPaneEditor::on_drag_mouse_move))
        .on_mouse_up(MouseButton::Left, cx.listener(SplitPaneEditor::on_drag_mouse_up))
        .on_mouse_up_out(MouseButton::Left, cx.listener(SplitPaneEditor::on_drag_mouse_up))
}
