//! Static page content.
//!
//! Each language is a value of the same [`Content`] struct, so both variants
//! always expose the same fields; list lengths may differ between them.
//! Data that is not translated on the page (skill meters, contact links)
//! lives in [`shared`].

mod en;
mod fa;
pub mod shared;

use serde::Serialize;

use crate::i18n::Language;

pub use shared::{CONTACTS, SKILLS, SOCIAL_LINKS};

#[derive(Debug, Serialize)]
pub struct Content {
    pub nav: NavLabels,
    pub hero: Hero,
    pub experience: ExperienceSection,
    pub projects: ProjectsSection,
    pub skills: SkillsSection,
    pub footer: Footer,
}

#[derive(Debug, Serialize)]
pub struct NavLabels {
    pub brand: &'static str,
    pub home: &'static str,
    pub experience: &'static str,
    pub projects: &'static str,
    pub skills: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub roles: &'static [&'static str],
    pub description: &'static str,
    pub stats: HeroStats,
    pub cta: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HeroStats {
    pub experience: &'static str,
    pub projects: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExperienceSection {
    pub title: &'static str,
    pub items: &'static [ExperienceItem],
}

#[derive(Debug, Serialize)]
pub struct ExperienceItem {
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ProjectsSection {
    pub title: &'static str,
    pub items: &'static [ProjectItem],
}

#[derive(Debug, Serialize)]
pub struct ProjectItem {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub code_snippet: Option<CodeSnippet>,
}

#[derive(Debug, Serialize)]
pub struct CodeSnippet {
    pub file: &'static str,
    pub code: &'static str,
}

impl CodeSnippet {
    /// Characters of the excerpt shown on a project card.
    pub const PREVIEW_CHARS: usize = 100;

    /// The first [`Self::PREVIEW_CHARS`] characters followed by `...`.
    pub fn preview(&self) -> String {
        let head: String = self.code.chars().take(Self::PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}

#[derive(Debug, Serialize)]
pub struct SkillsSection {
    pub title: &'static str,
    pub categories: SkillCategories,
}

#[derive(Debug, Serialize)]
pub struct SkillCategories {
    pub mobile: &'static str,
    pub web: &'static str,
    /// Localized heading with no skill panel of its own; shipped as data.
    pub programming: &'static str,
}

impl SkillCategories {
    pub fn label(&self, category: shared::SkillCategory) -> &'static str {
        match category {
            shared::SkillCategory::Mobile => self.mobile,
            shared::SkillCategory::Web => self.web,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Footer {
    pub text: &'static str,
}

pub fn for_language(language: Language) -> &'static Content {
    match language {
        Language::Fa => &fa::CONTENT,
        Language::En => &en::CONTENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> impl Iterator<Item = &'static Content> {
        Language::ALL.into_iter().map(for_language)
    }

    #[test]
    fn every_language_fills_every_label() {
        for content in all() {
            let labels = [
                content.nav.brand,
                content.nav.home,
                content.nav.experience,
                content.nav.projects,
                content.nav.skills,
                content.nav.contact,
                content.hero.title,
                content.hero.description,
                content.hero.stats.experience,
                content.hero.stats.projects,
                content.hero.cta,
                content.experience.title,
                content.projects.title,
                content.skills.title,
                content.skills.categories.mobile,
                content.skills.categories.web,
                content.skills.categories.programming,
                content.footer.text,
            ];
            assert!(labels.iter().all(|l| !l.trim().is_empty()));
            assert!(!content.hero.roles.is_empty());
        }
    }

    #[test]
    fn entries_are_complete() {
        for content in all() {
            for job in content.experience.items {
                assert!(!job.date.is_empty() && !job.title.is_empty());
                assert!(!job.tags.is_empty());
            }
            for project in content.projects.items {
                assert!(project.link.starts_with("http"));
                assert!(!project.tags.is_empty());
            }
        }
    }

    #[test]
    fn only_persian_carries_a_code_excerpt() {
        let fa = for_language(Language::Fa);
        let en = for_language(Language::En);
        assert!(fa.projects.items.iter().any(|p| p.code_snippet.is_some()));
        assert!(en.projects.items.iter().all(|p| p.code_snippet.is_none()));
    }

    #[test]
    fn preview_truncates_to_hundred_chars() {
        let snippet = CodeSnippet {
            file: "Main.java",
            code: "ب".repeat(150).leak(),
        };
        let preview = snippet.preview();
        assert_eq!(preview.chars().count(), CodeSnippet::PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn serializes_both_branches_with_same_keys() {
        let keys = |c: &Content| -> Vec<String> {
            let value = serde_json::to_value(c).unwrap_or_default();
            value
                .as_object()
                .map(|o| o.keys().cloned().collect())
                .unwrap_or_default()
        };
        let fa = keys(for_language(Language::Fa));
        assert_eq!(fa, keys(for_language(Language::En)));
        assert_eq!(fa.len(), 6);
    }
}
