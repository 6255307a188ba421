//! Project detail tabs and their sync with the `tab` URL parameter.
//!
//! Sync is one-directional: the parameter drives the active tab, while a tab
//! picked by the user is never written back to the parameter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Detail views of a single project.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTab {
    #[default]
    Milestones,
    Reports,
    Documents,
    Activities,
}

impl ProjectTab {
    /// All tabs in display order.
    pub const ALL: [ProjectTab; 4] = [
        ProjectTab::Milestones,
        ProjectTab::Reports,
        ProjectTab::Documents,
        ProjectTab::Activities,
    ];

    /// Value as it appears in the URL parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectTab::Milestones => "milestones",
            ProjectTab::Reports => "reports",
            ProjectTab::Documents => "documents",
            ProjectTab::Activities => "activities",
        }
    }

    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectTab::Milestones => "Milestones",
            ProjectTab::Reports => "Reports",
            ProjectTab::Documents => "Documents",
            ProjectTab::Activities => "Activities",
        }
    }

    /// Position in [`ProjectTab::ALL`].
    pub fn index(&self) -> usize {
        match self {
            ProjectTab::Milestones => 0,
            ProjectTab::Reports => 1,
            ProjectTab::Documents => 2,
            ProjectTab::Activities => 3,
        }
    }
}

impl fmt::Display for ProjectTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectTab {
    type Err = String;

    /// Exact match on the URL value; no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectTab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("Unknown tab: {s}"))
    }
}

/// Tab to show given the URL parameter and the tab currently shown.
///
/// A parameter naming a known tab wins; a missing or unknown one keeps
/// `current`.
pub fn reconcile(param: Option<&str>, current: ProjectTab) -> ProjectTab {
    match param.map(str::parse::<ProjectTab>) {
        Some(Ok(tab)) => tab,
        Some(Err(_)) => {
            debug!(param = ?param, current = %current, "ignoring unknown tab parameter");
            current
        }
        None => current,
    }
}

/// Active tab plus the last parameter value it was reconciled against.
///
/// [`TabSync::observe`] behaves like a subscription to the parameter: it
/// reconciles on the first call and afterwards only when the value changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSync {
    active: ProjectTab,
    last_param: Option<Option<String>>,
}

impl TabSync {
    pub fn new(initial: ProjectTab) -> Self {
        Self {
            active: initial,
            last_param: None,
        }
    }

    pub fn active_tab(&self) -> ProjectTab {
        self.active
    }

    /// Feed the current parameter value; returns the active tab afterwards.
    pub fn observe(&mut self, param: Option<&str>) -> ProjectTab {
        let changed = match &self.last_param {
            None => true,
            Some(last) => last.as_deref() != param,
        };
        if changed {
            self.last_param = Some(param.map(str::to_string));
            self.active = reconcile(param, self.active);
        }
        self.active
    }

    /// Tab clicked by the user. The remembered parameter is left alone.
    pub fn select(&mut self, tab: ProjectTab) {
        self.active = tab;
    }
}
