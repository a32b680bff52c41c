//! Language-neutral page data.

use serde::Serialize;

/// Handle shown in the sidebar brand block.
pub const BRAND_HANDLE: &str = "Ali_hsnnzhd";
pub const BRAND_TAGLINE: &str = "Android Developer";
/// Compact brand shown in the narrow-screen top bar.
pub const BRAND_SHORT: &str = "<Ali.Dev />";
pub const HERO_BADGE: &str = "Ready to Innovate";
pub const AVATAR_URL: &str = "https://picsum.photos/600/600";
pub const CREDIT_PREFIX: &str = "Designed & Built by";
pub const CREDIT_NAME: &str = "Ali";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Mobile,
    Web,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Code,
    Layout,
    Database,
    Smartphone,
    Globe,
    Mail,
    Github,
    Instagram,
}

impl Icon {
    /// Text glyph used where no icon font is available.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Layout => "▦",
            Self::Database => "⛁",
            Self::Smartphone => "▯",
            Self::Globe => "◍",
            Self::Mail => "✉",
            Self::Github => "GH",
            Self::Instagram => "IG",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
    pub category: SkillCategory,
    pub icon: Icon,
}

impl Skill {
    /// Fill fraction of the meter, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.percentage.min(100)) / 100.0
    }
}

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "Java & Kotlin",
        percentage: 95,
        category: SkillCategory::Mobile,
        icon: Icon::Code,
    },
    Skill {
        name: "Android SDK & Jetpack",
        percentage: 90,
        category: SkillCategory::Mobile,
        icon: Icon::Layout,
    },
    Skill {
        name: "MVVM & Clean Arch",
        percentage: 85,
        category: SkillCategory::Mobile,
        icon: Icon::Database,
    },
    Skill {
        name: "React & Tailwind",
        percentage: 80,
        category: SkillCategory::Web,
        icon: Icon::Layout,
    },
    Skill {
        name: "HTML5 / CSS3",
        percentage: 90,
        category: SkillCategory::Web,
        icon: Icon::Code,
    },
];

/// Skill meters of one category, in display order.
pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

#[derive(Debug, Serialize)]
pub struct ContactLink {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACTS: &[ContactLink] = &[
    ContactLink {
        icon: Icon::Mail,
        label: "Email Me",
        value: "alihassannegad44@gmail.com",
        href: "mailto:alihassannegad44@gmail.com",
    },
    ContactLink {
        icon: Icon::Github,
        label: "Github",
        value: "@Alihsnnzhd",
        href: "https://github.com/Alihsnnzhd",
    },
    ContactLink {
        icon: Icon::Smartphone,
        label: "Cafe Bazaar",
        value: "Developer Profile",
        href: "https://cafebazaar.ir/developer/ali_hsnnzhd",
    },
    ContactLink {
        icon: Icon::Instagram,
        label: "Instagram",
        value: "@Ali.Dev",
        href: "#",
    },
];

#[derive(Debug, Serialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
}

/// Icon buttons next to the hero call-to-action.
pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Github,
        href: "https://github.com/Alihsnnzhd",
    },
    SocialLink {
        icon: Icon::Instagram,
        href: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_are_bounded() {
        assert!(SKILLS.iter().all(|s| s.percentage <= 100));
        assert!((SKILLS[0].fraction() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn mobile_panel_has_three_meters() {
        assert_eq!(skills_in(SkillCategory::Mobile).count(), 3);
        assert_eq!(skills_in(SkillCategory::Web).count(), 2);
        assert_eq!(
            skills_in(SkillCategory::Mobile).count() + skills_in(SkillCategory::Web).count(),
            SKILLS.len()
        );
    }

    #[test]
    fn email_contact_uses_mailto() {
        assert!(CONTACTS.iter().any(|c| c.href.starts_with("mailto:")));
    }
}
