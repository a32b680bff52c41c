//! egui widgets for the page chrome and the five content regions.

use egui::{Align, CornerRadius, Frame, Layout, Margin, Pos2, RichText, Shape, Stroke, Ui};
use folio_core::content::shared::{self, Icon};
use folio_core::content::ProjectItem;
use folio_core::effects::Spotlight;
use folio_core::page::Page;
use folio_core::{Direction, EffectsConfig, Section};
use folio_protocol::{Point, Rect as FolioRect, ThemeToken};

use crate::renderer;
use crate::theme::{self, resolve};

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Section),
    ToggleLanguage,
}

/// Per-frame state the project cards need to draw their spotlight.
pub struct CardGlow<'a> {
    pub spotlights: &'a mut [Spotlight],
    pub config: &'a EffectsConfig,
    pub pointer: Option<Pos2>,
}

/// Seconds each hero role stays on screen.
const ROLE_PERIOD_SECS: f64 = 2.5;

fn column(direction: Direction) -> Layout {
    Layout::top_down(if direction.is_rtl() {
        Align::Max
    } else {
        Align::Min
    })
}

fn row(direction: Direction) -> Layout {
    if direction.is_rtl() {
        Layout::right_to_left(Align::Center)
    } else {
        Layout::left_to_right(Align::Center)
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

fn toggle_button(ui: &mut Ui, label: &str) -> bool {
    ui.button(format!("{} {label}", Icon::Globe.glyph())).clicked()
}

fn tag(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .monospace()
            .color(resolve(ThemeToken::TextSecondary)),
    );
}

/// Wide-screen navigation column.
pub fn sidebar(ui: &mut Ui, page: &Page) -> Option<Action> {
    let mut action = None;
    ui.with_layout(column(page.direction), |ui| {
        ui.add_space(24.0);
        ui.label(
            RichText::new(shared::BRAND_HANDLE)
                .strong()
                .size(theme::FONT_EMPHASIS)
                .color(resolve(ThemeToken::TextPrimary)),
        );
        ui.label(
            RichText::new(shared::BRAND_TAGLINE)
                .small()
                .color(resolve(ThemeToken::Neon)),
        );
        ui.add_space(32.0);
        for item in &page.nav {
            let color = if item.active {
                resolve(ThemeToken::Neon)
            } else {
                resolve(ThemeToken::TextSecondary)
            };
            if ui
                .selectable_label(item.active, RichText::new(item.label).color(color))
                .clicked()
            {
                action = Some(Action::Navigate(item.section));
            }
        }
        ui.add_space(32.0);
        if toggle_button(ui, page.toggle_label) {
            action = Some(Action::ToggleLanguage);
        }
    });
    action
}

/// Narrow-screen brand bar with the compact language toggle.
pub fn topbar(ui: &mut Ui, page: &Page) -> Option<Action> {
    let mut action = None;
    ui.with_layout(row(page.direction), |ui| {
        ui.label(
            RichText::new(shared::BRAND_SHORT)
                .monospace()
                .strong()
                .color(resolve(ThemeToken::Neon)),
        );
        ui.with_layout(row(page.direction).with_main_align(Align::Max), |ui| {
            if toggle_button(ui, page.toggle_short_label) {
                action = Some(Action::ToggleLanguage);
            }
        });
    });
    action
}

/// Narrow-screen navigation strip.
pub fn bottom_nav(ui: &mut Ui, page: &Page) -> Option<Action> {
    let mut action = None;
    ui.with_layout(row(page.direction).with_main_wrap(true), |ui| {
        for item in &page.nav {
            if ui.selectable_label(item.active, item.label).clicked() {
                action = Some(Action::Navigate(item.section));
            }
        }
    });
    action
}

fn heading(ui: &mut Ui, page: &Page, section: Section) {
    ui.with_layout(row(page.direction), |ui| {
        if let Some(ordinal) = section.ordinal() {
            ui.label(
                RichText::new(ordinal)
                    .monospace()
                    .size(theme::FONT_TITLE)
                    .color(resolve(ThemeToken::Neon)),
            );
        }
        ui.label(
            RichText::new(page.heading(section))
                .strong()
                .size(theme::FONT_TITLE)
                .color(resolve(ThemeToken::TextPrimary)),
        );
    });
    ui.add_space(16.0);
}

/// Draw one content region.
pub fn section(ui: &mut Ui, page: &Page, section: Section, glow: &mut CardGlow<'_>) {
    ui.with_layout(column(page.direction), |ui| match section {
        Section::Home => hero(ui, page),
        Section::Experience => experience(ui, page),
        Section::Projects => projects(ui, page, glow),
        Section::Skills => skills(ui, page),
        Section::Contact => contact(ui, page),
    });
}

fn hero(ui: &mut Ui, page: &Page) {
    let hero = &page.content.hero;
    ui.add_space(48.0);
    ui.label(
        RichText::new(shared::HERO_BADGE)
            .small()
            .color(resolve(ThemeToken::Neon)),
    );
    ui.label(
        RichText::new(hero.title)
            .strong()
            .size(theme::FONT_DISPLAY)
            .color(resolve(ThemeToken::TextPrimary)),
    );
    if !hero.roles.is_empty() {
        let time = ui.input(|i| i.time);
        let index = (time / ROLE_PERIOD_SECS) as usize % hero.roles.len();
        ui.label(
            RichText::new(hero.roles[index])
                .size(theme::FONT_EMPHASIS)
                .color(resolve(ThemeToken::Neon)),
        );
    }
    ui.add_space(8.0);
    ui.label(RichText::new(hero.description).color(resolve(ThemeToken::TextSecondary)));
    ui.add_space(8.0);
    ui.with_layout(row(page.direction), |ui| {
        for stat in [hero.stats.experience, hero.stats.projects] {
            ui.label(RichText::new(stat).small().color(resolve(ThemeToken::TextMuted)));
        }
    });
    ui.add_space(16.0);
    ui.with_layout(row(page.direction), |ui| {
        // Resume download has no target yet; the button is inert.
        let _ = ui.button(RichText::new(hero.cta).strong());
        for link in page.social {
            ui.hyperlink_to(link.icon.glyph(), link.href);
        }
    });
    ui.add_space(48.0);
}

fn experience(ui: &mut Ui, page: &Page) {
    heading(ui, page, Section::Experience);
    for job in page.content.experience.items {
        Frame::NONE
            .stroke(Stroke::new(1.0, resolve(ThemeToken::Border)))
            .corner_radius(CornerRadius::same(16))
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.with_layout(column(page.direction), |ui| {
                    ui.label(
                        RichText::new(job.date)
                            .monospace()
                            .color(resolve(ThemeToken::Neon)),
                    );
                    ui.label(
                        RichText::new(job.title)
                            .strong()
                            .size(theme::FONT_EMPHASIS)
                            .color(resolve(ThemeToken::TextPrimary)),
                    );
                    ui.label(RichText::new(job.description).color(resolve(ThemeToken::TextSecondary)));
                    ui.with_layout(row(page.direction).with_main_wrap(true), |ui| {
                        for t in job.tags {
                            tag(ui, &format!("#{t}"));
                        }
                    });
                });
            });
        ui.add_space(12.0);
    }
}

fn projects(ui: &mut Ui, page: &Page, glow: &mut CardGlow<'_>) {
    heading(ui, page, Section::Projects);
    let card_width = (ui.available_width() / 2.0 - 12.0).max(280.0);
    ui.with_layout(row(page.direction).with_main_wrap(true).with_cross_align(Align::Min), |ui| {
        for (index, project) in page.content.projects.items.iter().enumerate() {
            ui.allocate_ui(egui::vec2(card_width, 0.0), |ui| {
                project_card(ui, page, project, card_width, index, glow);
            });
        }
    });
}

fn project_card(
    ui: &mut Ui,
    page: &Page,
    project: &ProjectItem,
    width: f32,
    index: usize,
    glow: &mut CardGlow<'_>,
) {
    let radius = CornerRadius::same(24);
    // Card fill, then glow, then border and content on top.
    let fill_slot = ui.painter().add(Shape::Noop);
    let glow_slot = ui.painter().add(Shape::Noop);

    let card = Frame::NONE
        .stroke(Stroke::new(1.0, resolve(ThemeToken::Border)))
        .corner_radius(radius)
        .inner_margin(Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(width - 40.0);
            ui.with_layout(column(page.direction), |ui| {
                ui.hyperlink_to(format!("{} ↗", page.view_label), project.link);
                ui.label(
                    RichText::new(project.title)
                        .strong()
                        .size(theme::FONT_EMPHASIS)
                        .color(resolve(ThemeToken::TextPrimary)),
                );
                ui.label(RichText::new(project.description).color(resolve(ThemeToken::TextSecondary)));
                ui.with_layout(row(page.direction).with_main_wrap(true), |ui| {
                    for t in project.tags {
                        tag(ui, t);
                    }
                });
                if let Some(snippet) = &project.code_snippet {
                    Frame::NONE
                        .fill(resolve(ThemeToken::Background))
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(Margin::same(10))
                        .show(ui, |ui| {
                            // Code reads left to right in either language.
                            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                                ui.label(
                                    RichText::new(snippet.file)
                                        .small()
                                        .color(resolve(ThemeToken::TextMuted)),
                                );
                                ui.label(
                                    RichText::new(snippet.preview())
                                        .monospace()
                                        .color(resolve(ThemeToken::Neon)),
                                );
                            });
                        });
                }
            });
        })
        .response
        .rect;

    ui.painter().set(
        fill_slot,
        Shape::rect_filled(card, radius, resolve(ThemeToken::SurfaceRaised)),
    );

    let Some(spotlight) = glow.spotlights.get_mut(index) else {
        return;
    };
    match glow.pointer.filter(|p| card.contains(*p)) {
        Some(pointer) => spotlight.on_pointer_move(
            to_folio_rect(card),
            Point::new(f64::from(pointer.x), f64::from(pointer.y)),
        ),
        None if spotlight.is_visible() => spotlight.on_pointer_leave(),
        None => {}
    }
    let commands = spotlight.render(to_folio_rect(card), glow.config);
    let shapes = renderer::to_shapes(&commands, Pos2::ZERO, 1.0);
    ui.painter()
        .with_clip_rect(card)
        .set(glow_slot, Shape::Vec(shapes));
}

fn skills(ui: &mut Ui, page: &Page) {
    heading(ui, page, Section::Skills);
    for panel in &page.skill_panels {
        Frame::NONE
            .fill(resolve(ThemeToken::Surface))
            .stroke(Stroke::new(1.0, resolve(ThemeToken::Border)))
            .corner_radius(CornerRadius::same(24))
            .inner_margin(Margin::same(20))
            .show(ui, |ui| {
                ui.with_layout(column(page.direction), |ui| {
                    ui.label(
                        RichText::new(format!("{} {}", panel.icon.glyph(), panel.title))
                            .strong()
                            .size(theme::FONT_EMPHASIS)
                            .color(resolve(ThemeToken::TextPrimary)),
                    );
                    for skill in &panel.skills {
                        ui.with_layout(row(page.direction), |ui| {
                            ui.label(format!("{} {}", skill.icon.glyph(), skill.name));
                            ui.label(
                                RichText::new(format!("{}%", skill.percentage))
                                    .monospace()
                                    .color(resolve(ThemeToken::Neon)),
                            );
                        });
                        ui.add(
                            egui::ProgressBar::new(skill.fraction() as f32)
                                .fill(resolve(ThemeToken::Neon)),
                        );
                    }
                });
            });
        ui.add_space(12.0);
    }
}

fn contact(ui: &mut Ui, page: &Page) {
    heading(ui, page, Section::Contact);
    ui.with_layout(row(page.direction).with_main_wrap(true), |ui| {
        for contact in page.contacts {
            Frame::NONE
                .fill(resolve(ThemeToken::Surface))
                .stroke(Stroke::new(1.0, resolve(ThemeToken::Border)))
                .corner_radius(CornerRadius::same(16))
                .inner_margin(Margin::same(16))
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(format!("{} {}", contact.icon.glyph(), contact.label));
                        ui.hyperlink_to(contact.value, contact.href);
                    });
                });
        }
    });
    ui.add_space(32.0);
    ui.separator();
    ui.label(RichText::new(page.content.footer.text).color(resolve(ThemeToken::TextMuted)));
    ui.with_layout(row(page.direction), |ui| {
        ui.label(RichText::new(shared::CREDIT_PREFIX).small());
        ui.label(
            RichText::new(shared::CREDIT_NAME)
                .small()
                .color(resolve(ThemeToken::Neon)),
        );
    });
}
