//! WASM bridge for the portfolio page.
//!
//! Stateless exports return JSON/markup strings for any host. On `wasm32`
//! the crate also owns a live DOM frontend: [`mount`] renders the page into
//! an element and wires every effect, and the returned handle tears it all
//! down again.

use folio_core::effects::ParticleField;
use folio_core::page::Page;
use folio_core::{EffectsConfig, Language, NavState, Section};
use folio_protocol::{Size, ThemeToken};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{Portfolio, mount};

/// Frames advanced before a particle snapshot is taken, so links have
/// started to form.
const SNAPSHOT_WARMUP_FRAMES: usize = 120;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
}

fn js_error(err: &impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

fn content_for(language: &str) -> folio_core::Result<String> {
    let language: Language = language.parse()?;
    Ok(serde_json::to_string(language.content())?)
}

fn page_for(language: &str, active: &str) -> folio_core::Result<String> {
    let language: Language = language.parse()?;
    let mut nav = NavState::default();
    nav.click(active.parse::<Section>()?);
    let page = Page::compose(language, &nav);
    Ok(folio_core::html::render_page(&page, |_| false))
}

fn snapshot_for(width: f64, height: f64, seed: u64, config_json: Option<&str>) -> folio_core::Result<String> {
    let config = match config_json {
        Some(json) => EffectsConfig::from_json(json)?,
        None => EffectsConfig::default(),
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = ParticleField::new(&config, Size::new(width, height), &mut rng);
    for _ in 0..SNAPSHOT_WARMUP_FRAMES {
        field.step();
    }
    Ok(folio_core::svg::render_svg(
        &field.render(&config),
        width,
        height,
        Some(ThemeToken::Background),
    ))
}

/// Localized page content (`"fa"` or `"en"`) as JSON.
#[wasm_bindgen]
pub fn content_json(language: &str) -> Result<String, JsError> {
    content_for(language).map_err(|e| js_error(&e))
}

/// Static markup of the page for `language` with `active` highlighted in
/// the navigation. Every region is rendered unrevealed.
#[wasm_bindgen]
pub fn page_html(language: &str, active: &str) -> Result<String, JsError> {
    page_for(language, active).map_err(|e| js_error(&e))
}

/// The stylesheet the markup from [`page_html`] expects.
#[wasm_bindgen]
pub fn page_stylesheet() -> String {
    folio_core::html::STYLESHEET.to_owned()
}

/// A deterministic SVG poster frame of the particle background.
#[wasm_bindgen]
pub fn particle_snapshot_svg(
    width: f64,
    height: f64,
    seed: u32,
    config_json: Option<String>,
) -> Result<String, JsError> {
    snapshot_for(width, height, u64::from(seed), config_json.as_deref()).map_err(|e| js_error(&e))
}

/// The default effect configuration as JSON, for hosts that want to edit it.
#[wasm_bindgen]
pub fn default_config_json() -> Result<String, JsError> {
    serde_json::to_string(&EffectsConfig::default()).map_err(|e| js_error(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_json_per_language() {
        let Ok(json) = content_for("en") else {
            panic!("english content should serialize");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(value["nav"]["home"], "Home");
        assert!(content_for("fa").is_ok_and(|json| json.contains("خانه")));
    }

    #[test]
    fn unknown_language_is_an_error() {
        assert!(matches!(
            content_for("de"),
            Err(folio_core::Error::UnknownLanguage(_))
        ));
    }

    #[test]
    fn page_marks_requested_section() {
        let Ok(html) = page_for("en", "#skills") else {
            panic!("page should render");
        };
        assert!(html.contains(r#"<button class="nav-item active" data-nav="skills""#));
        assert!(matches!(
            page_for("en", "blog"),
            Err(folio_core::Error::UnknownSection(_))
        ));
    }

    #[test]
    fn snapshot_is_deterministic_per_seed() {
        let a = snapshot_for(400.0, 300.0, 7, None);
        let b = snapshot_for(400.0, 300.0, 7, None);
        assert!(a.is_ok());
        assert_eq!(a.ok(), b.ok());
        let svg = snapshot_for(400.0, 300.0, 8, None).unwrap_or_default();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), 40);
    }

    #[test]
    fn snapshot_honors_config() {
        let svg = snapshot_for(200.0, 200.0, 1, Some(r#"{"particle_count": 5}"#)).unwrap_or_default();
        assert_eq!(svg.matches("<circle").count(), 5);
        assert!(snapshot_for(200.0, 200.0, 1, Some(r#"{"link_alpha": 2}"#)).is_err());
        assert!(matches!(
            snapshot_for(200.0, 200.0, 1, Some(r#"{"particle_count": 5000}"#)),
            Err(folio_core::Error::InvalidConfig(_))
        ));
    }
}
