//! Native window for the portfolio page.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context as _;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var_os("FOLIO_CONFIG") {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.to_string_lossy()))?;
            folio_core::EffectsConfig::from_json(&json)
                .with_context(|| format!("parsing {}", path.to_string_lossy()))?
        }
        None => folio_core::EffectsConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("folio"),
        ..Default::default()
    };
    eframe::run_native(
        "folio",
        options,
        Box::new(move |cc| Ok(Box::new(folio_ui::PortfolioApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe: {err}"))
}

// The web build starts from `folio_ui::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
