//! Session state held by the controller and the results of its transitions.

use std::sync::Arc;

use gaphunter_core::CompetitorAnalysis;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The screen the application is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    #[default]
    Landing,
    Dashboard,
    AnalyzerInput,
    Analyzing,
    Insights,
    Blueprint,
    Settings,
}

impl Screen {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Landing => "LANDING",
            Screen::Dashboard => "DASHBOARD",
            Screen::AnalyzerInput => "ANALYZER_INPUT",
            Screen::Analyzing => "ANALYZING",
            Screen::Insights => "INSIGHTS",
            Screen::Blueprint => "BLUEPRINT",
            Screen::Settings => "SETTINGS",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The analyzer form as last submitted, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisForm {
    pub competitor_name: String,
    pub description: String,
}

impl AnalysisForm {
    #[must_use]
    pub fn new(competitor_name: &str, description: &str) -> Self {
        Self {
            competitor_name: competitor_name.trim().to_owned(),
            description: description.trim().to_owned(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.competitor_name.is_empty() && !self.description.is_empty()
    }
}

/// Snapshot of everything the presentation layer reads.
///
/// Cloning is cheap: the analysis is shared behind an `Arc` and only ever
/// replaced, never mutated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    pub screen: Screen,
    pub analysis: Option<Arc<CompetitorAnalysis>>,
    /// User-facing message from the last failed flow.
    pub error: Option<String>,
    /// Progress label while the screen is [`Screen::Analyzing`].
    pub step: Option<String>,
    pub form: AnalysisForm,
}

/// Why a transition was refused. A refused transition leaves the session
/// untouched and makes no gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("competitor name and description are both required")]
    EmptyInput,

    #[error("no competitor analysis is loaded")]
    NoAnalysis,

    #[error("an analysis is already in progress")]
    Busy,

    #[error("screen {0} cannot be shown from the current state")]
    Unreachable(Screen),
}

/// Result of a controller transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The transition completed and the session now shows this screen.
    Succeeded(Screen),
    /// A gateway call failed; the session carries an error and shows this screen.
    Failed(Screen),
    Rejected(Rejection),
}

impl Outcome {
    /// The screen the session ended on, if the transition ran at all.
    #[must_use]
    pub fn screen(self) -> Option<Screen> {
        match self {
            Outcome::Succeeded(screen) | Outcome::Failed(screen) => Some(screen),
            Outcome::Rejected(_) => None,
        }
    }
}
