//! Demo host for the split-pane editor.
//!
//! `livepane [BASE_URL]` opens a window with a small settings panel on the
//! left and the live preview of BASE_URL on the right.

use anyhow::Result;
use gpui::*;
use gpui_component::{ActiveTheme as _, Root, v_flex};
use livepane::config::{EditorConfig, default_config_path};
use livepane::{EditorEvent, EditorProfile, PreviewInputs, PreviewSettings, SplitPaneEditor};
use tracing::{error, info};

const DEFAULT_BASE_URL: &str = "https://example.com";
const COLORS: &[&str] = &["sky", "emerald", "rose", "amber"];

fn demo_settings(color_index: usize) -> PreviewSettings {
    PreviewSettings::new()
        .with("site", "Acme")
        .with("primary_color", COLORS[color_index % COLORS.len()])
        .with("font_family", "Inter")
}

/// Stand-in for the caller's form.
struct SettingsPanel {
    editor: Option<WeakEntity<SplitPaneEditor>>,
    color_index: usize,
}

impl SettingsPanel {
    fn with_editor(&mut self, update: impl FnOnce(&mut SplitPaneEditor, &mut Context<SplitPaneEditor>), cx: &mut App) {
        if let Some(editor) = self.editor.as_ref().and_then(|e| e.upgrade()) {
            editor.update(cx, update);
        }
    }

    fn next_color(&mut self, cx: &mut Context<Self>) {
        self.color_index += 1;
        let settings = demo_settings(self.color_index);
        self.with_editor(|editor, cx| editor.set_settings(settings, cx), cx);
        cx.notify();
    }
}

fn panel_button(id: &'static str, label: &'static str, cx: &App) -> Stateful<Div> {
    let border = cx.theme().border;
    let hover_bg = cx.theme().muted;

    div()
        .id(id)
        .px(px(12.0))
        .h(px(32.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(border)
        .hover(|s| s.bg(hover_bg))
        .cursor_pointer()
        .flex()
        .items_center()
        .text_sm()
        .child(label)
}

impl Render for SettingsPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let muted_fg = cx.theme().muted_foreground;
        let color = COLORS[self.color_index % COLORS.len()];

        v_flex()
            .size_full()
            .p(px(16.0))
            .gap(px(12.0))
            .child(div().text_lg().font_weight(FontWeight::SEMIBOLD).child("Site settings"))
            .child(
                div()
                    .text_sm()
                    .text_color(muted_fg)
                    .child(format!("Primary color: {}", color)),
            )
            .child(
                panel_button("next-color", "Next color", cx)
                    .on_click(cx.listener(|this, _, _, cx| this.next_color(cx))),
            )
            .child(
                panel_button("reload-preview", "Reload preview", cx).on_click(cx.listener(
                    |this, _, _, cx| this.with_editor(|editor, cx| editor.refresh_preview(cx), cx),
                )),
            )
    }
}

fn main() -> Result<()> {
    livepane::logging::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let config = EditorConfig::load();
    info!(%base_url, "Starting livepane");

    let app = Application::new();
    app.run(move |cx| {
        gpui_component::init(cx);
        cx.activate(true);

        let bounds = Bounds::centered(None, size(px(1280.0), px(800.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let panel = cx.new(|_| SettingsPanel {
                editor: None,
                color_index: 0,
            });
            let inputs = PreviewInputs::new(base_url.clone()).with_settings(demo_settings(0));
            let editor = cx.new(|cx| {
                let mut editor = SplitPaneEditor::new(
                    panel.clone().into(),
                    EditorProfile::Edit,
                    config.clone(),
                    inputs,
                    window,
                    cx,
                );
                if let Some(path) = default_config_path() {
                    editor.watch_config(path);
                }
                editor
            });
            panel.update(cx, |panel, _| panel.editor = Some(editor.downgrade()));

            cx.subscribe(&editor, |_, event: &EditorEvent, _| {
                info!(?event, "Editor event");
            })
            .detach();

            cx.new(|cx| Root::new(editor.into(), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open window");
            cx.quit();
        }
    });

    Ok(())
}
