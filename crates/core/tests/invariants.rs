//! Property-style checks over many seeds and frames.

use folio_core::effects::ParticleField;
use folio_core::effects::particles::link_alpha;
use folio_core::{EffectsConfig, Language, LanguageState, NavState, Page, Section};
use folio_protocol::{RenderCommand, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn particles_never_escape_the_viewport() {
    let config = EffectsConfig {
        max_speed: 25.0,
        ..EffectsConfig::default()
    };
    for seed in 0..20 {
        let bounds = Size::new(320.0 + seed as f64 * 37.0, 240.0 + seed as f64 * 11.0);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(&config, bounds, &mut rng);
        for _ in 0..500 {
            field.step();
            for p in field.particles() {
                assert!((0.0..=bounds.width).contains(&p.x), "x={} w={}", p.x, bounds.width);
                assert!((0.0..=bounds.height).contains(&p.y), "y={} h={}", p.y, bounds.height);
            }
        }
    }
}

#[test]
fn lines_only_below_threshold_and_fading_with_distance() {
    let config = EffectsConfig {
        particle_count: 60,
        ..EffectsConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = ParticleField::new(&config, Size::new(400.0, 300.0), &mut rng);
    for _ in 0..50 {
        field.step();
        let mut links = field.links(config.link_distance, config.link_alpha);
        for link in &links {
            let a = field.particles()[link.a].position();
            let b = field.particles()[link.b].position();
            assert!(a.distance(b) < config.link_distance);
            assert!(link.alpha > 0.0 && link.alpha <= config.link_alpha);
        }
        links.sort_by(|x, y| x.distance.total_cmp(&y.distance));
        for pair in links.windows(2) {
            assert!(pair[0].alpha >= pair[1].alpha);
        }

        let ps = field.particles();
        let close_pairs = (0..ps.len())
            .flat_map(|i| (i + 1..ps.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| ps[i].position().distance(ps[j].position()) < config.link_distance)
            .count();
        let drawn = field
            .render(&config)
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawLine { .. }))
            .count();
        assert_eq!(drawn, links.len());
        assert_eq!(drawn, close_pairs);
    }
    assert!(link_alpha(config.link_distance - 1e-9, config.link_distance, 0.1).unwrap_or(1.0) < 1e-9);
}

#[test]
fn language_round_trip_restores_page() {
    for start in Language::ALL {
        let nav = NavState::default();
        let mut state = LanguageState::new(start);
        let before = Page::compose(state.language(), &nav);
        state.toggle();
        let flipped = Page::compose(state.language(), &nav);
        assert_ne!(flipped.attrs, before.attrs);
        state.toggle();
        let after = Page::compose(state.language(), &nav);
        assert_eq!(after.attrs, before.attrs);
        assert_eq!(after.direction, before.direction);
        assert_eq!(after.content.hero.title, before.content.hero.title);
        assert_eq!(after.nav[0].label, before.nav[0].label);
    }
}

#[test]
fn each_click_yields_one_scroll_to_its_region() {
    let mut nav = NavState::default();
    let mut requests = Vec::new();
    for target in [Section::Contact, Section::Home, Section::Skills] {
        requests.push(nav.click(target));
        assert_eq!(nav.active(), target);
    }
    let targets: Vec<_> = requests.iter().map(|r| r.target.id()).collect();
    assert_eq!(targets, ["contact", "home", "skills"]);
}
