mod app;
mod host;
mod renderer;
mod sections;
mod theme;

pub use app::PortfolioApp;

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Id of the canvas the egui build draws into.
#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "folio_canvas";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Redirect logs/panics to console
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no canvas element with id '{CANVAS_ID}'");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    Ok(Box::new(PortfolioApp::new(
                        cc,
                        folio_core::EffectsConfig::default(),
                    )))
                }),
            )
            .await;
        if let Err(e) = start_result {
            log::error!("Failed to start eframe: {e:?}");
        }
    });
    Ok(())
}
