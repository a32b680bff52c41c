//! Live DOM frontend.
//!
//! The page markup comes from `folio_core::html`; this module injects it,
//! then attaches the effects. Interaction uses delegated listeners on the
//! root, so re-rendering the markup (language switch) keeps them valid.
//! Every host registration is mirrored in a [`Listeners`] ledger and
//! released by [`Portfolio::unmount`].

mod canvas;
mod reveal;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::effects::{CursorTracker, ParticleLayer, Spotlight};
use folio_core::html::{
    self, ACTION_ATTR, CURSOR_ACTIVE_CLASS, CURSOR_DOT_CLASS, CURSOR_OUTLINE_CLASS, NAV_ATTR,
    PARTICLE_CANVAS_ID, SPOTLIGHT_ATTR, SPOTLIGHT_CLASS, TOGGLE_LANG_ACTION,
};
use folio_core::page::Page;
use folio_core::{
    EffectsConfig, LanguageState, ListenerKind, Listeners, NavMode, NavState, RevealObserver,
    Section, Subscription,
};
use folio_protocol::{Point, Rect, Size};
use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window};

use self::canvas::CanvasPainter;
use self::reveal::RevealWatcher;

const STYLE_ID: &str = "folio-style";

/// Distance (px) below the top of the viewport used to decide which region
/// the reader is in when the indicator follows scrolling.
const SCROLL_PROBE_OFFSET: f64 = 120.0;

/// State shared by the event callbacks.
pub(crate) struct Inner {
    config: EffectsConfig,
    listeners: Listeners,
    language: LanguageState,
    nav: NavState,
    particles: Option<ParticleLayer>,
    cursor: CursorTracker,
    reveal: RevealObserver<Section>,
    /// Card under the pointer and its spotlight.
    hovered: Option<(Element, Spotlight)>,
    /// Ledger entries for the delegated listeners owned by [`Portfolio`].
    delegated: Vec<Subscription>,
    watcher: Option<RevealWatcher>,
    document: Document,
    root: Element,
}

type Shared = Rc<RefCell<Inner>>;

/// The pending particle frame. Each frame re-arms the slot; emptying it
/// cancels the loop.
type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// A mounted portfolio page. Call [`Portfolio::unmount`] (or free the
/// handle) to remove every listener, observer and pending frame.
#[wasm_bindgen]
pub struct Portfolio {
    inner: Shared,
    window: Window,
    body: HtmlElement,
    frame: FrameSlot,
    listeners: Vec<EventListener>,
    /// Nodes created outside the root (canvas, cursor, stylesheet).
    nodes: Vec<Element>,
}

fn js_error(err: &JsValue) -> JsError {
    JsError::new(&format!("{err:?}"))
}

fn viewport_size(window: &Window) -> Size {
    let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(read(window.inner_width()), read(window.inner_height()))
}

fn create_node(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let node = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    if !class.is_empty() {
        node.set_class_name(class);
    }
    Ok(node)
}

fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Render the page into the root element and apply `lang`/`dir`.
fn render(inner: &Inner) -> Result<(), JsValue> {
    let page = Page::compose(inner.language.language(), &inner.nav);
    let markup = html::render_page(&page, |section| inner.reveal.is_revealed(&section));
    inner.root.set_inner_html(&markup);
    if let Some(document_element) = inner.document.document_element() {
        let attrs = inner.language.attrs();
        document_element.set_attribute("lang", attrs.lang)?;
        document_element.set_attribute("dir", attrs.dir)?;
    }
    Ok(())
}

fn mark_active_nav(root: &Element, active: Section) -> Result<(), JsValue> {
    let buttons = root.query_selector_all(&format!("[{NAV_ATTR}]"))?;
    for index in 0..buttons.length() {
        let Some(button) = buttons.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let is_active = button.get_attribute(NAV_ATTR).as_deref() == Some(active.id());
        button.class_list().toggle_with_force("active", is_active)?;
        button.set_attribute("aria-current", if is_active { "true" } else { "false" })?;
    }
    Ok(())
}

fn navigate(inner: &mut Inner, section: Section) -> Result<(), JsValue> {
    let request = inner.nav.click(section);
    mark_active_nav(&inner.root, section)?;
    let Some(region) = inner.document.get_element_by_id(request.target.id()) else {
        log::warn!("no region #{section} to scroll to");
        return Ok(());
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(if request.smooth {
        web_sys::ScrollBehavior::Smooth
    } else {
        web_sys::ScrollBehavior::Auto
    });
    region.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

fn toggle_language(shared: &Shared) -> Result<(), JsValue> {
    let threshold = {
        let mut guard = shared.borrow_mut();
        let inner = &mut *guard;
        // Old regions are about to be replaced; stop watching them first.
        inner.watcher.take();
        inner.language.toggle();
        inner.hovered = None;
        inner
            .reveal
            .remount(&mut inner.listeners, Section::ALL);
        render(inner)?;
        inner.config.reveal_threshold
    };
    let root = shared.borrow().root.clone();
    let watcher = RevealWatcher::observe(&root, Rc::downgrade(shared), threshold)?;
    shared.borrow_mut().watcher = Some(watcher);
    Ok(())
}

fn on_click(shared: &Shared, event: &Event) -> Result<(), JsValue> {
    let Some(target) = event_element(event) else {
        return Ok(());
    };
    if let Some(button) = target.closest(&format!("[{NAV_ATTR}]"))? {
        let Some(id) = button.get_attribute(NAV_ATTR) else {
            return Ok(());
        };
        match id.parse::<Section>() {
            Ok(section) => navigate(&mut shared.borrow_mut(), section)?,
            Err(err) => log::warn!("{err}"),
        }
        return Ok(());
    }
    let toggle = format!(r#"[{ACTION_ATTR}="{TOGGLE_LANG_ACTION}"]"#);
    if target.closest(&toggle)?.is_some() {
        toggle_language(shared)?;
    }
    Ok(())
}

fn set_spotlight_style(card: &Element, spotlight: &Spotlight, config: &EffectsConfig) -> Result<(), JsValue> {
    let Some(overlay) = card
        .query_selector(&format!(".{SPOTLIGHT_CLASS}"))?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let style = overlay.style();
    style.set_property("background", &spotlight.css_background(config))?;
    style.set_property("opacity", &spotlight.opacity.to_string())?;
    Ok(())
}

fn on_card_move(inner: &mut Inner, event: &Event) -> Result<(), JsValue> {
    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
        return Ok(());
    };
    let card = match event_element(event) {
        Some(target) => target.closest(&format!("[{SPOTLIGHT_ATTR}]"))?,
        None => None,
    };

    let left_previous = match (&inner.hovered, &card) {
        (Some((previous, _)), Some(card)) => previous != card,
        (Some(_), None) => true,
        (None, _) => false,
    };
    if left_previous {
        on_card_leave(inner)?;
    }

    let Some(card) = card else {
        return Ok(());
    };
    let bounds = card.get_bounding_client_rect();
    let mut spotlight = inner
        .hovered
        .take()
        .map(|(_, spotlight)| spotlight)
        .unwrap_or_default();
    spotlight.on_pointer_move(
        Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height()),
        Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())),
    );
    set_spotlight_style(&card, &spotlight, &inner.config)?;
    inner.hovered = Some((card, spotlight));
    Ok(())
}

fn on_card_leave(inner: &mut Inner) -> Result<(), JsValue> {
    if let Some((card, mut spotlight)) = inner.hovered.take() {
        spotlight.on_pointer_leave();
        set_spotlight_style(&card, &spotlight, &inner.config)?;
    }
    Ok(())
}

fn on_scroll(inner: &mut Inner, window: &Window) -> Result<(), JsValue> {
    let scroll_y = window.scroll_y()?;
    let tops: Vec<(Section, f64)> = Section::ALL
        .into_iter()
        .filter_map(|section| {
            let region = inner.document.get_element_by_id(section.id())?;
            Some((section, region.get_bounding_client_rect().top() + scroll_y))
        })
        .collect();
    if inner.nav.observe_scroll(&tops, scroll_y, SCROLL_PROBE_OFFSET) {
        mark_active_nav(&inner.root, inner.nav.active())?;
    }
    Ok(())
}

/// Draw one particle frame and request the next while the layer runs.
fn schedule_frame(slot: &FrameSlot, weak: Weak<RefCell<Inner>>, painter: Rc<CanvasPainter>) {
    let weak_slot = Rc::downgrade(slot);
    let frame = request_animation_frame(move |_time| {
        let Some(slot) = weak_slot.upgrade() else {
            return;
        };
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let running = match shared.try_borrow_mut() {
            Ok(mut guard) => {
                let inner = &mut *guard;
                match inner.particles.as_mut() {
                    Some(particles) => {
                        let commands = particles.frame(&mut inner.listeners);
                        report("particle frame", painter.render(&commands));
                        particles.is_running()
                    }
                    None => false,
                }
            }
            // Busy in another handler; try again next frame.
            Err(_) => true,
        };
        if running {
            schedule_frame(&slot, weak, painter);
        } else {
            slot.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(frame);
}

/// Log a failed event handler; callbacks have nowhere to return errors.
fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{what} failed: {err:?}");
    }
}

/// Mount the page into the element with id `root_id`.
///
/// `config_json` optionally overrides effect settings (see
/// `default_config_json`).
#[wasm_bindgen]
pub fn mount(root_id: &str, config_json: Option<String>) -> Result<Portfolio, JsError> {
    let config = match config_json.as_deref() {
        Some(json) => EffectsConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?,
        None => EffectsConfig::default(),
    };
    let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
    let document = window.document().ok_or_else(|| JsError::new("no document"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsError::new(&format!("no element with id '{root_id}'")))?;
    Portfolio::mount(&window, &document, &root, config).map_err(|e| js_error(&e))
}

impl Portfolio {
    fn mount(
        window: &Window,
        document: &Document,
        root: &Element,
        config: EffectsConfig,
    ) -> Result<Self, JsValue> {
        let mut nodes = Vec::new();
        let mounted = Self::build(window, document, root, config, &mut nodes);
        if mounted.is_err() {
            // Not yet owned by a `Portfolio`, so nothing else removes them.
            for node in nodes {
                node.remove();
            }
        }
        mounted
    }

    fn build(
        window: &Window,
        document: &Document,
        root: &Element,
        config: EffectsConfig,
        nodes: &mut Vec<Element>,
    ) -> Result<Self, JsValue> {
        let mut listeners = Listeners::new();
        let viewport = viewport_size(window);
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        if document.get_element_by_id(STYLE_ID).is_none() {
            if let Some(head) = document.head() {
                let style = document.create_element("style")?;
                style.set_id(STYLE_ID);
                style.set_text_content(Some(html::STYLESHEET));
                head.append_child(&style)?;
                nodes.push(style);
            }
        }

        // Particle background canvas, fixed behind the page.
        let canvas = create_node(document, "canvas", "")?;
        canvas.set_id(PARTICLE_CANVAS_ID);
        body.prepend_with_node_1(&canvas)?;
        nodes.push(canvas.clone().into());
        canvas.style().set_property("opacity", &config.layer_opacity.to_string())?;
        let canvas = canvas.dyn_into::<web_sys::HtmlCanvasElement>()?;
        let painter = match CanvasPainter::new(canvas) {
            Ok(painter) => {
                painter.fit(viewport.width, viewport.height);
                Some(painter)
            }
            Err(err) => {
                log::warn!("canvas unavailable: {err:?}");
                None
            }
        };
        let mut rng = SmallRng::from_entropy();
        let particles = ParticleLayer::mount(
            &mut listeners,
            &config,
            painter.as_ref().map(|_| viewport),
            &mut rng,
        );

        let cursor = CursorTracker::mount(&mut listeners, &config, viewport.width);
        let reveal = RevealObserver::mount(&mut listeners, config.reveal_threshold, Section::ALL);
        let nav = NavState::new(config.nav_mode);

        let inner = Rc::new(RefCell::new(Inner {
            config,
            listeners,
            language: LanguageState::default(),
            nav,
            particles,
            cursor,
            reveal,
            hovered: None,
            delegated: Vec::new(),
            watcher: None,
            document: document.clone(),
            root: root.clone(),
        }));

        // From here on, dropping the handle undoes everything.
        let mut portfolio = Self {
            inner: Rc::clone(&inner),
            window: window.clone(),
            body: body.clone(),
            frame: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
            nodes: std::mem::take(nodes),
        };
        let rendered = render(&inner.borrow());
        rendered?;

        if let Some(painter) = painter {
            portfolio.start_particles(painter);
        }
        portfolio.attach_cursor(document, &body)?;
        portfolio.attach_delegated(root);

        let threshold = inner.borrow().config.reveal_threshold;
        let watcher = RevealWatcher::observe(root, Rc::downgrade(&inner), threshold)?;
        inner.borrow_mut().watcher = Some(watcher);

        log::info!(
            "portfolio mounted, {} listeners active",
            inner.borrow().listeners.active()
        );
        Ok(portfolio)
    }

    fn start_particles(&mut self, painter: CanvasPainter) {
        let painter = Rc::new(painter);
        schedule_frame(&self.frame, Rc::downgrade(&self.inner), Rc::clone(&painter));

        let weak = Rc::downgrade(&self.inner);
        let window = self.window.clone();
        self.listeners.push(EventListener::new(&self.window, "resize", move |_| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let size = viewport_size(&window);
            painter.fit(size.width, size.height);
            if let Some(particles) = shared.borrow_mut().particles.as_mut() {
                particles.resize(size);
            }
        }));
    }

    fn attach_cursor(&mut self, document: &Document, body: &HtmlElement) -> Result<(), JsValue> {
        let (enabled, lag_ms) = {
            let inner = self.inner.borrow();
            (inner.cursor.is_enabled(), inner.config.cursor_lag_ms)
        };
        if !enabled {
            return Ok(());
        }

        let dot = create_node(document, "div", CURSOR_DOT_CLASS)?;
        let outline = create_node(document, "div", CURSOR_OUTLINE_CLASS)?;
        // The outline trails the pointer by the configured lag.
        outline.style().set_property(
            "transition",
            &format!("left {lag_ms}ms linear, top {lag_ms}ms linear"),
        )?;
        body.append_child(&dot)?;
        self.nodes.push(dot.clone().into());
        body.append_child(&outline)?;
        self.nodes.push(outline.clone().into());
        body.class_list().add_1(CURSOR_ACTIVE_CLASS)?;

        let weak = Rc::downgrade(&self.inner);
        self.listeners.push(EventListener::new(&self.window, "mousemove", move |event: &Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let (x, y) = (f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            shared
                .borrow_mut()
                .cursor
                .on_pointer_move(Point::new(x, y), event.time_stamp());
            for node in [&dot, &outline] {
                let style = node.style();
                report("cursor left", style.set_property("left", &format!("{x}px")));
                report("cursor top", style.set_property("top", &format!("{y}px")));
            }
        }));
        Ok(())
    }

    fn attach_delegated(&mut self, root: &Element) {
        let weak = Rc::downgrade(&self.inner);
        self.listeners.push(EventListener::new(root, "click", move |event: &Event| {
            if let Some(shared) = weak.upgrade() {
                report("click", on_click(&shared, event));
            }
        }));

        let weak = Rc::downgrade(&self.inner);
        self.listeners.push(EventListener::new(root, "mousemove", move |event: &Event| {
            if let Some(shared) = weak.upgrade() {
                report("spotlight", on_card_move(&mut shared.borrow_mut(), event));
            }
        }));

        let weak = Rc::downgrade(&self.inner);
        self.listeners.push(EventListener::new(root, "mouseleave", move |_| {
            if let Some(shared) = weak.upgrade() {
                report("spotlight", on_card_leave(&mut shared.borrow_mut()));
            }
        }));

        let mut kinds = vec![ListenerKind::Click, ListenerKind::PointerMove, ListenerKind::PointerMove];

        if self.inner.borrow().nav.mode() == NavMode::FollowScroll {
            let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
            let window = self.window.clone();
            self.listeners.push(EventListener::new(&self.window, "scroll", move |_| {
                if let Some(shared) = weak.upgrade() {
                    report("scroll", on_scroll(&mut shared.borrow_mut(), &window));
                }
            }));
            kinds.push(ListenerKind::Scroll);
        }

        let mut inner = self.inner.borrow_mut();
        let inner = &mut *inner;
        for kind in kinds {
            let subscription = inner.listeners.register(kind);
            inner.delegated.push(subscription);
        }
    }
}

#[wasm_bindgen]
impl Portfolio {
    /// Switch between Persian and English.
    pub fn toggle_language(&self) -> Result<(), JsError> {
        toggle_language(&self.inner).map_err(|e| js_error(&e))
    }

    /// Activate `section` (e.g. `"skills"` or `"#skills"`) and scroll to it.
    pub fn navigate(&self, section: &str) -> Result<(), JsError> {
        let section: Section = section.parse().map_err(|e: folio_core::Error| JsError::new(&e.to_string()))?;
        navigate(&mut self.inner.borrow_mut(), section).map_err(|e| js_error(&e))
    }

    /// Active language tag, `"fa"` or `"en"`.
    pub fn language(&self) -> String {
        self.inner.borrow().language.language().tag().to_owned()
    }

    pub fn active_section(&self) -> String {
        self.inner.borrow().nav.active().id().to_owned()
    }

    /// Live host registrations; 0 after [`Portfolio::unmount`].
    pub fn active_listeners(&self) -> usize {
        self.inner.borrow().listeners.active()
    }

    /// Remove every listener, observer, pending frame and created node.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        self.frame.borrow_mut().take();
        self.listeners.clear();
        for node in self.nodes.drain(..) {
            node.remove();
        }
        report(
            "cursor class",
            self.body.class_list().remove_1(CURSOR_ACTIVE_CLASS),
        );

        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        inner.watcher.take();
        if let Some(particles) = inner.particles.as_mut() {
            particles.unmount(&mut inner.listeners);
        }
        inner.cursor.unmount(&mut inner.listeners);
        inner.reveal.unmount(&mut inner.listeners);
        for subscription in inner.delegated.drain(..) {
            inner.listeners.release(subscription);
        }
        inner.hovered = None;
        log::info!(
            "portfolio unmounted, {} listeners left",
            inner.listeners.active()
        );
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.unmount();
    }
}
