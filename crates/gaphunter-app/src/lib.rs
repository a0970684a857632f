//! GapHunter view-state controller and presentation.
//!
//! [`Controller`] moves a single [`Session`] between screens and runs the
//! analysis and blueprint flows through an [`gaphunter_gemini::AnalysisGateway`].
//! [`view::render`] turns a session into the view model of its screen.

pub mod controller;
pub mod state;
pub mod view;

pub use controller::{Controller, ANALYSIS_FAILED_MESSAGE, BLUEPRINT_FAILED_MESSAGE};
pub use state::{AnalysisForm, Outcome, Rejection, Screen, Session};
pub use view::{render, RenderContext, View};
