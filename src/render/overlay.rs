//! Mobile content overlay.
//!
//! Below the breakpoint the content pane leaves the row and floats above the
//! preview at full width. When closed, a small button brings it back.

use crate::app::SplitPaneEditor;
use crate::constants::PREVIEW_HEADER_HEIGHT;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

pub fn render_mobile_overlay(content: AnyView, cx: &mut Context<SplitPaneEditor>) -> impl IntoElement {
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let hover_bg = cx.theme().muted;

    deferred(
        v_flex()
            .id("mobile-content-overlay")
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(bg)
            .occlude()
            .child(
                h_flex()
                    .flex_none()
                    .h(px(PREVIEW_HEADER_HEIGHT))
                    .px(px(12.0))
                    .items_center()
                    .justify_end()
                    .border_b_1()
                    .border_color(border)
                    .child(
                        div()
                            .id("mobile-overlay-close")
                            .px(px(10.0))
                            .h(px(26.0))
                            .rounded(px(6.0))
                            .hover(|s| s.bg(hover_bg))
                            .cursor_pointer()
                            .flex()
                            .items_center()
                            .text_sm()
                            .text_color(fg)
                            .child("Show preview")
                            .on_click(cx.listener(|this, _, _, cx| this.toggle_collapse(cx))),
                    ),
            )
            .child(div().flex_1().min_h_0().overflow_hidden().child(content)),
    )
    .with_priority(1)
}

pub fn render_overlay_opener(cx: &mut Context<SplitPaneEditor>) -> Stateful<Div> {
    let bg = cx.theme().primary;
    let fg = cx.theme().primary_foreground;

    div()
        .id("mobile-overlay-open")
        .absolute()
        .bottom(px(16.0))
        .right(px(16.0))
        .px(px(14.0))
        .h(px(36.0))
        .rounded(px(18.0))
        .bg(bg)
        .cursor_pointer()
        .flex()
        .items_center()
        .text_sm()
        .font_weight(FontWeight::MEDIUM)
        .text_color(fg)
        .child("Edit")
        .on_click(cx.listener(|this, _, _, cx| this.toggle_collapse(cx)))
}
