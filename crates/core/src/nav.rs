use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::NavLabels;
use crate::error::Error;

/// The five addressable regions of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id of the region in the document.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn label(self, labels: &NavLabels) -> &'static str {
        match self {
            Self::Home => labels.home,
            Self::Experience => labels.experience,
            Self::Projects => labels.projects,
            Self::Skills => labels.skills,
            Self::Contact => labels.contact,
        }
    }

    /// Heading ordinal (`01.` .. `04.`); the hero has none.
    pub fn ordinal(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Experience => Some("01."),
            Self::Projects => Some("02."),
            Self::Skills => Some("03."),
            Self::Contact => Some("04."),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

/// How the active navigation indicator is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavMode {
    /// The indicator reflects the last clicked item only.
    #[default]
    ClickOnly,
    /// Manual scrolling also moves the indicator to the region under the
    /// top of the viewport.
    FollowScroll,
}

/// A request for the host to smoothly scroll a region into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: Section,
    pub smooth: bool,
}

/// Active-section state machine owned by the top-level view.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    active: Section,
    mode: NavMode,
}

impl NavState {
    pub fn new(mode: NavMode) -> Self {
        Self {
            active: Section::Home,
            mode,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    /// A navigation control was clicked: activate it and ask for one scroll.
    pub fn click(&mut self, target: Section) -> ScrollRequest {
        self.active = target;
        log::info!("navigate to #{target}");
        ScrollRequest {
            target,
            smooth: true,
        }
    }

    /// Report region tops (document coordinates) after a manual scroll.
    ///
    /// Only has an effect in [`NavMode::FollowScroll`]. The active section
    /// becomes the last region whose top is at or above `viewport_top +
    /// offset`. Returns `true` when the active section changed.
    pub fn observe_scroll(
        &mut self,
        region_tops: &[(Section, f64)],
        viewport_top: f64,
        offset: f64,
    ) -> bool {
        if self.mode != NavMode::FollowScroll {
            return false;
        }
        let probe = viewport_top + offset;
        let current = region_tops
            .iter()
            .filter(|(_, top)| *top <= probe)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(section, _)| *section)
            .unwrap_or(Section::Home);
        if current == self.active {
            return false;
        }
        self.active = current;
        true
    }
}
