//! View composition: everything a frontend needs to draw the page for the
//! active language and section, with no further lookups.

use serde::Serialize;

use crate::content::shared::{self, ContactLink, Icon, Skill, SkillCategory, SocialLink};
use crate::content::Content;
use crate::i18n::{Direction, DocumentAttrs, Language};
use crate::nav::{NavState, Section};

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillPanel {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: Vec<&'static Skill>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub language: Language,
    pub direction: Direction,
    pub attrs: DocumentAttrs,
    pub nav: Vec<NavItem>,
    pub toggle_label: &'static str,
    pub toggle_short_label: &'static str,
    pub view_label: &'static str,
    pub content: &'static Content,
    pub skill_panels: Vec<SkillPanel>,
    pub contacts: &'static [ContactLink],
    pub social: &'static [SocialLink],
}

impl Page {
    pub fn compose(language: Language, nav: &NavState) -> Self {
        let content = language.content();
        let nav_items = Section::ALL
            .into_iter()
            .map(|section| NavItem {
                section,
                label: section.label(&content.nav),
                active: nav.is_active(section),
            })
            .collect();

        let skill_panels = [
            (SkillCategory::Mobile, Icon::Smartphone),
            (SkillCategory::Web, Icon::Globe),
        ]
        .into_iter()
        .map(|(category, icon)| SkillPanel {
            title: content.skills.categories.label(category),
            icon,
            skills: shared::skills_in(category).collect(),
        })
        .collect();

        Self {
            language,
            direction: language.direction(),
            attrs: language.into(),
            nav: nav_items,
            toggle_label: language.toggle_label(),
            toggle_short_label: language.toggle_short_label(),
            view_label: language.view_link_label(),
            content,
            skill_panels,
            contacts: shared::CONTACTS,
            social: shared::SOCIAL_LINKS,
        }
    }

    /// Heading of a section region (the hero uses its title).
    pub fn heading(&self, section: Section) -> &'static str {
        match section {
            Section::Home => self.content.hero.title,
            Section::Experience => self.content.experience.title,
            Section::Projects => self.content.projects.title,
            Section::Skills => self.content.skills.title,
            Section::Contact => self.content.nav.contact,
        }
    }

    pub fn active_section(&self) -> Option<Section> {
        self.nav.iter().find(|item| item.active).map(|item| item.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_lists_all_sections_with_one_active() {
        let mut nav = NavState::default();
        nav.click(Section::Skills);
        let page = Page::compose(Language::En, &nav);
        assert_eq!(page.nav.len(), 5);
        assert_eq!(page.active_section(), Some(Section::Skills));
        assert_eq!(page.nav.iter().filter(|i| i.active).count(), 1);
        assert_eq!(page.nav[3].label, "Skills");
    }

    #[test]
    fn persian_page_is_rtl_with_english_toggle() {
        let page = Page::compose(Language::Fa, &NavState::default());
        assert!(page.direction.is_rtl());
        assert_eq!(page.attrs.lang, "fa");
        assert_eq!(page.toggle_label, "English");
        assert_eq!(page.heading(Section::Contact), "ارتباط");
    }

    #[test]
    fn skill_panels_use_localized_titles() {
        let page = Page::compose(Language::En, &NavState::default());
        let titles: Vec<_> = page.skill_panels.iter().map(|p| p.title).collect();
        assert_eq!(titles, ["Mobile Development", "Web Development"]);
        assert_eq!(page.skill_panels[0].skills.len(), 3);
    }

    #[test]
    fn sections_render_regardless_of_active_state() {
        let page = Page::compose(Language::En, &NavState::default());
        for section in Section::ALL {
            assert!(!page.heading(section).is_empty());
        }
    }
}
