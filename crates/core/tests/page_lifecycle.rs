//! Integration test: mount every behavioral component against one listener
//! ledger, drive them through a session of frames, pointer moves, scrolling,
//! navigation and a language switch, then tear everything down.

use folio_core::effects::{CursorTracker, ParticleLayer};
use folio_core::html;
use folio_core::{
    EffectsConfig, LanguageState, ListenerKind, Listeners, NavState, Page, RevealObserver, Section,
};
use folio_protocol::{Point, Rect, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;

const VIEWPORT: Size = Size {
    width: 1440.0,
    height: 900.0,
};

fn section_rects(scroll_y: f64) -> Vec<(Section, Rect)> {
    Section::ALL
        .into_iter()
        .enumerate()
        .map(|(i, s)| (s, Rect::new(0.0, i as f64 * 1000.0 - scroll_y, 1100.0, 800.0)))
        .collect()
}

#[test]
fn full_session_leaves_no_listeners() {
    let config = EffectsConfig::default();
    let mut listeners = Listeners::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut language = LanguageState::default();
    let mut nav = NavState::new(config.nav_mode);

    let mut particles = ParticleLayer::mount(&mut listeners, &config, Some(VIEWPORT), &mut rng)
        .expect("surface available");
    let mut cursor = CursorTracker::mount(&mut listeners, &config, VIEWPORT.width);
    let mut reveal = RevealObserver::mount(&mut listeners, config.reveal_threshold, Section::ALL);

    assert_eq!(listeners.count(ListenerKind::AnimationFrame), 1);
    assert_eq!(listeners.count(ListenerKind::Resize), 1);
    assert_eq!(listeners.count(ListenerKind::PointerMove), 1);
    assert_eq!(listeners.count(ListenerKind::Intersection), 1);

    let viewport = Rect::from_size(VIEWPORT);
    let revealed = reveal.poll(&section_rects(0.0), viewport);
    assert_eq!(revealed, vec![Section::Home]);

    for frame in 0..120 {
        let now = frame as f64 * 16.0;
        let commands = particles.frame(&mut listeners);
        assert!(!commands.is_empty());
        cursor.on_pointer_move(Point::new(now, now / 2.0), now);
        assert_eq!(listeners.count(ListenerKind::AnimationFrame), 1);
    }

    let request = nav.click(Section::Projects);
    assert_eq!(request.target, Section::Projects);
    let revealed = reveal.poll(&section_rects(2000.0), viewport);
    assert_eq!(revealed, vec![Section::Projects]);

    particles.resize(Size::new(800.0, 600.0));
    particles.frame(&mut listeners);

    language.toggle();
    reveal.remount(&mut listeners, Section::ALL);
    let page = Page::compose(language.language(), &nav);
    let markup = html::render_page(&page, |s| reveal.is_revealed(&s));
    assert!(markup.contains(r#"<section id="projects" class="reveal-on-scroll reveal-visible">"#));
    assert!(markup.contains(r#"<section id="home" class="reveal-on-scroll reveal-visible">"#));
    assert!(markup.contains(r#"<section id="skills" class="reveal-on-scroll">"#));

    particles.unmount(&mut listeners);
    cursor.unmount(&mut listeners);
    reveal.unmount(&mut listeners);
    assert_eq!(listeners.active(), 0);
    assert!(particles.frame(&mut listeners).is_empty());
    assert_eq!(listeners.active(), 0);
}

#[test]
fn narrow_viewport_session_registers_no_pointer_listener() {
    let config = EffectsConfig::default();
    let mut listeners = Listeners::new();
    let mut cursor = CursorTracker::mount(&mut listeners, &config, 390.0);
    assert_eq!(listeners.count(ListenerKind::PointerMove), 0);
    cursor.unmount(&mut listeners);
    assert!(listeners.is_empty());
}
