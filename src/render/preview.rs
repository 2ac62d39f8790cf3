//! Preview pane rendering - header with the preview-mode toggle, and the
//! surface area in its placeholder, unavailable or live state.

use crate::app::SplitPaneEditor;
use crate::constants::{MOBILE_FRAME_WIDTH, PLACEHOLDER_TEXT, PREVIEW_HEADER_HEIGHT, UNAVAILABLE_TEXT};
use crate::preview::SurfaceState;
use crate::profile_scope;
use crate::types::PreviewMode;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::webview::WebView;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

/// Everything the preview pane needs, gathered before rendering.
pub struct PreviewView {
    pub locator: Option<SharedString>,
    pub state: SurfaceState,
    pub mode: PreviewMode,
    pub surface: Option<Entity<WebView>>,
}

pub fn render_preview_pane(view: PreviewView, cx: &mut Context<SplitPaneEditor>) -> Div {
    profile_scope!("render_preview_pane");

    let bg = cx.theme().muted;

    v_flex()
        .flex_1()
        .min_w_0()
        .h_full()
        .child(render_preview_header(&view, cx))
        .child(
            div()
                .flex_1()
                .min_h_0()
                .relative()
                .bg(bg)
                .flex()
                .justify_center()
                .child(render_preview_body(view, cx)),
        )
}

fn render_preview_header(view: &PreviewView, cx: &mut Context<SplitPaneEditor>) -> Div {
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let loading = view.state == SurfaceState::Loading;

    h_flex()
        .flex_none()
        .h(px(PREVIEW_HEADER_HEIGHT))
        .px(px(12.0))
        .gap(px(12.0))
        .items_center()
        .justify_between()
        .border_b_1()
        .border_color(border)
        .child(
            div()
                .flex_1()
                .min_w_0()
                .overflow_hidden()
                .text_ellipsis()
                .whitespace_nowrap()
                .text_sm()
                .text_color(if view.locator.is_some() { fg } else { muted_fg })
                .child(view.locator.clone().unwrap_or_else(|| "No preview".into())),
        )
        .child(
            h_flex()
                .flex_none()
                .gap(px(8.0))
                .items_center()
                .when(loading, |d| {
                    d.child(
                        div()
                            .id("preview-loading")
                            .text_xs()
                            .text_color(muted_fg)
                            .child("Loading…"),
                    )
                })
                .child(render_mode_toggle(view.mode, cx)),
        )
}

fn render_mode_button(
    mode: PreviewMode,
    selected: bool,
    cx: &mut Context<SplitPaneEditor>,
) -> Stateful<Div> {
    let bg = if selected {
        cx.theme().primary
    } else {
        cx.theme().transparent
    };
    let fg = if selected {
        cx.theme().primary_foreground
    } else {
        cx.theme().muted_foreground
    };
    let hover_bg = cx.theme().muted;

    div()
        .id(ElementId::Name(format!("preview-mode-{}", mode.label()).into()))
        .px(px(10.0))
        .h(px(26.0))
        .rounded(px(6.0))
        .bg(bg)
        .hover(|s| s.bg(if selected { bg } else { hover_bg }))
        .cursor_pointer()
        .flex()
        .items_center()
        .text_xs()
        .font_weight(FontWeight::MEDIUM)
        .text_color(fg)
        .child(mode.label())
        .on_click(cx.listener(move |this, _, _, cx| this.set_preview_mode(mode, cx)))
}

fn render_mode_toggle(current: PreviewMode, cx: &mut Context<SplitPaneEditor>) -> Div {
    let border = cx.theme().border;

    h_flex()
        .p(px(2.0))
        .gap(px(2.0))
        .rounded(px(8.0))
        .border_1()
        .border_color(border)
        .child(render_mode_button(PreviewMode::Desktop, current == PreviewMode::Desktop, cx))
        .child(render_mode_button(PreviewMode::Mobile, current == PreviewMode::Mobile, cx))
}

fn render_message(text: &'static str, cx: &mut Context<SplitPaneEditor>) -> Div {
    let muted_fg = cx.theme().muted_foreground;

    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .text_sm()
        .text_color(muted_fg)
        .child(text)
}

fn render_preview_body(view: PreviewView, cx: &mut Context<SplitPaneEditor>) -> AnyElement {
    match (view.state, view.surface) {
        (SurfaceState::Placeholder, _) => render_message(PLACEHOLDER_TEXT, cx).into_any_element(),
        (SurfaceState::Unavailable, _) | (_, None) => {
            render_message(UNAVAILABLE_TEXT, cx).into_any_element()
        }
        (SurfaceState::Loading | SurfaceState::Ready, Some(surface)) => match view.mode {
            PreviewMode::Desktop => div().size_full().child(surface).into_any_element(),
            PreviewMode::Mobile => {
                let border = cx.theme().border;
                div()
                    .flex_none()
                    .w(px(MOBILE_FRAME_WIDTH))
                    .h_full()
                    .border_x_1()
                    .border_color(border)
                    .child(surface)
                    .into_any_element()
            }
        },
    }
}
