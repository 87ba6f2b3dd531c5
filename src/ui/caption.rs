use imgui::{Condition, WindowFlags};

use crate::renderer_engine::RendererConfig;

/// Marge verticale entre le haut de l'écran et la légende.
const CAPTION_TOP_MARGIN: f32 = 40.0;

/// Affiche la légende en grand, centrée en haut de l'overlay.
pub fn draw_caption(ui: &imgui::Ui, caption: &str, config: &RendererConfig) {
    if caption.is_empty() {
        return;
    }

    let [width, _] = ui.io().display_size;
    let flags = WindowFlags::NO_DECORATION
        | WindowFlags::NO_BACKGROUND
        | WindowFlags::NO_INPUTS
        | WindowFlags::NO_SAVED_SETTINGS
        | WindowFlags::ALWAYS_AUTO_RESIZE;

    ui.window("##caption")
        .position([0.0, CAPTION_TOP_MARGIN], Condition::Always)
        .size([width, 0.0], Condition::Always)
        .flags(flags)
        .build(|| {
            ui.set_window_font_scale(config.caption_scale.max(0.1));
            let [text_w, _] = ui.calc_text_size(caption);
            ui.set_cursor_pos([((width - text_w) / 2.0).max(0.0), 0.0]);
            ui.text_colored(config.caption_color, caption);
        });
}
