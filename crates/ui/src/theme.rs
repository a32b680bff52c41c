use egui::Color32;
use folio_protocol::ThemeToken;

/// Resolve a semantic token into an egui color.
///
/// Tokens whose CSS form carries alpha keep it here too.
pub fn resolve(token: ThemeToken) -> Color32 {
    let [r, g, b] = token.rgb();
    match token {
        ThemeToken::NeonDim => Color32::from_rgba_unmultiplied(r, g, b, 25),
        ThemeToken::Border => Color32::from_rgba_unmultiplied(r, g, b, 25),
        ThemeToken::CursorOutline => Color32::from_rgba_unmultiplied(r, g, b, 128),
        _ => Color32::from_rgb(r, g, b),
    }
}

/// `token` scaled by a command's opacity.
pub fn resolve_alpha(token: ThemeToken, alpha: f64) -> Color32 {
    resolve(token).gamma_multiply(alpha.clamp(0.0, 1.0) as f32)
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_DISPLAY: f32 = 44.0;
pub const FONT_TITLE: f32 = 28.0;
pub const FONT_EMPHASIS: f32 = 18.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_CAPTION: f32 = 12.0;

// ── egui visual presets ────────────────────────────────────────────────────

/// Near-black visuals with the neon accent.
pub fn neon_dark_visuals() -> egui::Visuals {
    let neon = resolve(ThemeToken::Neon);
    let mut v = egui::Visuals::dark();
    v.panel_fill = resolve(ThemeToken::Background);
    v.window_fill = resolve(ThemeToken::Surface);
    v.extreme_bg_color = resolve(ThemeToken::SurfaceRaised);
    v.faint_bg_color = resolve(ThemeToken::Surface);
    v.widgets.noninteractive.bg_fill = resolve(ThemeToken::Surface);
    v.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, resolve(ThemeToken::TextSecondary));
    v.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, resolve(ThemeToken::Border));
    v.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
    v.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, resolve(ThemeToken::TextSecondary));
    v.widgets.hovered.weak_bg_fill = resolve(ThemeToken::NeonDim);
    v.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, neon);
    v.widgets.active.weak_bg_fill = resolve(ThemeToken::NeonDim);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, neon);
    v.selection.bg_fill = resolve(ThemeToken::NeonDim);
    v.selection.stroke = egui::Stroke::new(1.0, neon);
    v.window_corner_radius = egui::CornerRadius::same(16);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(12);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(12);
    v.widgets.active.corner_radius = egui::CornerRadius::same(12);
    v.hyperlink_color = neon;
    v
}

/// Apply the page's typography scale and spacing.
pub fn apply_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_TITLE),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    ctx.set_style(style);
}
