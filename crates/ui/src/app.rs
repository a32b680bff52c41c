use egui::{Align, CursorIcon, Id, LayerId, Order, Pos2};
use folio_core::effects::{CursorTracker, ParticleLayer, Spotlight};
use folio_core::{
    EffectsConfig, LanguageState, Listeners, NavState, Page, RevealObserver, ScrollRequest,
    Section,
};
use folio_protocol::{Point, Rect as FolioRect, Size};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::host;
use crate::renderer;
use crate::sections::{self, Action, CardGlow};
use crate::theme;

/// Distance (points) below the top of the scroll viewport used to decide
/// which region the reader is in.
const SCROLL_PROBE_OFFSET: f64 = 120.0;

/// Seconds a region takes to fade in once revealed.
const REVEAL_FADE_SECS: f32 = 0.8;

/// Vertical slide (points) of a region that has not been revealed yet.
const REVEAL_SLIDE: f32 = 40.0;

/// Effects that need a real viewport size and are created on the first frame.
struct Mounted {
    particles: Option<ParticleLayer>,
    cursor: CursorTracker,
}

pub struct PortfolioApp {
    config: EffectsConfig,
    language: LanguageState,
    nav: NavState,
    listeners: Listeners,
    effects: Option<Mounted>,
    reveal: RevealObserver<Section>,
    spotlights: Vec<Spotlight>,
    pending_scroll: Option<ScrollRequest>,
    viewport: Size,
    last_pointer: Option<Pos2>,
    rng: SmallRng,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: EffectsConfig) -> Self {
        cc.egui_ctx.set_visuals(theme::neon_dark_visuals());
        theme::apply_typography(&cc.egui_ctx);

        let language = LanguageState::default();
        host::apply_document_attrs(language.attrs());

        let mut listeners = Listeners::new();
        let reveal = RevealObserver::mount(&mut listeners, config.reveal_threshold, Section::ALL);
        let spotlights = vec![Spotlight::default(); language.content().projects.items.len()];
        log::info!("portfolio created, language {}", language.language());

        Self {
            nav: NavState::new(config.nav_mode),
            config,
            language,
            listeners,
            effects: None,
            reveal,
            spotlights,
            pending_scroll: None,
            viewport: Size::new(0.0, 0.0),
            last_pointer: None,
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn active_listeners(&self) -> usize {
        self.listeners.active()
    }

    fn mount_effects(&mut self, viewport: Size) {
        let particles = ParticleLayer::mount(
            &mut self.listeners,
            &self.config,
            (!viewport.is_empty()).then_some(viewport),
            &mut self.rng,
        );
        let cursor = CursorTracker::mount(&mut self.listeners, &self.config, viewport.width);
        self.effects = Some(Mounted { particles, cursor });
        log::debug!("effects mounted, {} listeners active", self.listeners.active());
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Navigate(section) => {
                self.pending_scroll = Some(self.nav.click(section));
            }
            Action::ToggleLanguage => {
                let attrs = self.language.toggle();
                host::apply_document_attrs(attrs);
                self.reveal.remount(&mut self.listeners, Section::ALL);
                self.spotlights =
                    vec![Spotlight::default(); self.language.content().projects.items.len()];
            }
        }
    }

    fn track_viewport(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if let Some(particles) = self.effects.as_mut().and_then(|e| e.particles.as_mut()) {
            particles.resize(viewport);
        }
    }

    fn track_pointer(&mut self, pointer: Option<Pos2>, now_ms: f64) {
        if pointer == self.last_pointer {
            return;
        }
        self.last_pointer = pointer;
        if let (Some(pos), Some(effects)) = (pointer, self.effects.as_mut()) {
            effects
                .cursor
                .on_pointer_move(Point::new(f64::from(pos.x), f64::from(pos.y)), now_ms);
        }
    }

    fn paint_particles(&mut self, ctx: &egui::Context) {
        let Some(particles) = self.effects.as_mut().and_then(|e| e.particles.as_mut()) else {
            return;
        };
        let commands = particles.frame(&mut self.listeners);
        let mut painter = ctx.layer_painter(LayerId::background());
        renderer::render_commands(&mut painter, &commands, Pos2::ZERO, self.config.layer_opacity);
        if particles.is_running() {
            ctx.request_repaint();
        }
    }

    fn paint_cursor(&self, ctx: &egui::Context, now_ms: f64) {
        let Some(effects) = &self.effects else {
            return;
        };
        if !effects.cursor.is_enabled() {
            return;
        }
        ctx.set_cursor_icon(CursorIcon::None);
        let mut painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("folio_cursor")));
        renderer::render_commands(&mut painter, &effects.cursor.render(now_ms), Pos2::ZERO, 1.0);
        if effects.cursor.is_animating(now_ms) {
            ctx.request_repaint();
        }
    }

    fn content(&mut self, ui: &mut egui::Ui, page: &Page, pointer: Option<Pos2>) {
        let scroll_to = self.pending_scroll.take().map(|request| request.target);
        let mut regions: Vec<(Section, FolioRect)> = Vec::with_capacity(Section::ALL.len());
        let ctx = ui.ctx().clone();

        let output = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(960.0);
                let mut glow = CardGlow {
                    spotlights: &mut self.spotlights,
                    config: &self.config,
                    pointer,
                };
                for section in Section::ALL {
                    let shown = ctx.animate_bool_with_time(
                        Id::new(("folio_reveal", section.id())),
                        self.reveal.is_revealed(&section),
                        REVEAL_FADE_SECS,
                    );
                    let rect = ui
                        .scope(|ui| {
                            ui.set_opacity(shown);
                            ui.add_space((1.0 - shown) * REVEAL_SLIDE);
                            sections::section(ui, page, section, &mut glow);
                        })
                        .response
                        .rect;
                    if scroll_to == Some(section) {
                        ui.scroll_to_rect(rect, Some(Align::TOP));
                    }
                    regions.push((section, to_folio_rect(rect)));
                    ui.add_space(64.0);
                }
            });

        let viewport = to_folio_rect(output.inner_rect);
        for section in self.reveal.poll(&regions, viewport) {
            log::debug!("revealed #{section}");
        }

        // Region tops in content coordinates, for scroll following.
        let origin = f64::from(output.inner_rect.top()) - f64::from(output.state.offset.y);
        let tops: Vec<(Section, f64)> = regions
            .iter()
            .map(|(section, rect)| (*section, rect.y - origin))
            .collect();
        if self.nav.observe_scroll(
            &tops,
            f64::from(output.state.offset.y),
            SCROLL_PROBE_OFFSET,
        ) {
            log::debug!("scrolled into #{}", self.nav.active());
        }
    }
}

fn to_folio_rect(rect: egui::Rect) -> FolioRect {
    FolioRect::new(
        f64::from(rect.min.x),
        f64::from(rect.min.y),
        f64::from(rect.width()),
        f64::from(rect.height()),
    )
}

#[allow(deprecated)]
fn screen_size(ctx: &egui::Context) -> Size {
    let rect = ctx.screen_rect();
    Size::new(f64::from(rect.width()), f64::from(rect.height()))
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let viewport = screen_size(ctx);
        if self.effects.is_none() {
            self.mount_effects(viewport);
        }
        self.track_viewport(viewport);

        let (pointer, now_ms) = ctx.input(|i| (i.pointer.hover_pos(), i.time * 1000.0));
        self.track_pointer(pointer, now_ms);

        // Background first so panels and content paint over it.
        self.paint_particles(ctx);

        let page = Page::compose(self.language.language(), &self.nav);
        let narrow = viewport.width <= self.config.cursor_breakpoint;
        let mut action = None;

        if narrow {
            egui::TopBottomPanel::top("folio_topbar").show(ctx, |ui| {
                action = action.or(sections::topbar(ui, &page));
            });
            egui::TopBottomPanel::bottom("folio_bottom_nav").show(ctx, |ui| {
                action = action.or(sections::bottom_nav(ui, &page));
            });
        } else {
            let panel = if page.direction.is_rtl() {
                egui::SidePanel::right("folio_sidebar_rtl")
            } else {
                egui::SidePanel::left("folio_sidebar_ltr")
            };
            panel
                .resizable(false)
                .exact_width(240.0)
                .show(ctx, |ui| {
                    action = action.or(sections::sidebar(ui, &page));
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(24)))
            .show(ctx, |ui| self.content(ui, &page, pointer));

        self.paint_cursor(ctx, now_ms);

        if let Some(action) = action {
            self.apply(action);
            ctx.request_repaint();
        }
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        if let Some(mut effects) = self.effects.take() {
            if let Some(particles) = effects.particles.as_mut() {
                particles.unmount(&mut self.listeners);
            }
            effects.cursor.unmount(&mut self.listeners);
        }
        self.reveal.unmount(&mut self.listeners);
        log::debug!("portfolio dropped, {} listeners left", self.listeners.active());
    }
}
