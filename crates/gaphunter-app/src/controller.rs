//! View-state controller: owns the session and runs the analysis and
//! blueprint flows against an [`AnalysisGateway`].
//!
//! The session lock is only held for synchronous updates. Gateway calls run
//! with the lock released, so readers observe [`Screen::Analyzing`] and its
//! step label while a call is in flight; the `Busy` rejection keeps a second
//! flow from starting meanwhile.
//!
//! Each flow runs in its own task. A caller that goes away mid-flight does
//! not cancel it, so the session always leaves ANALYZING.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use gaphunter_core::{CompetitorAnalysis, Review};
use gaphunter_gemini::{AnalysisDraft, AnalysisGateway, GeminiError};
use tokio::sync::RwLock;

use crate::state::{AnalysisForm, Outcome, Rejection, Screen, Session};
use crate::view::{self, RenderContext, View};

pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed. Please check your API key or try again.";
pub const BLUEPRINT_FAILED_MESSAGE: &str = "Failed to generate blueprint.";

const STEP_FETCHING: &str = "Scraping public reviews...";
const STEP_DRAFTING: &str = "Drafting product blueprint...";

pub struct Controller<G> {
    gateway: Arc<G>,
    demo: Arc<CompetitorAnalysis>,
    session: Arc<RwLock<Session>>,
}

impl<G: AnalysisGateway + 'static> Controller<G> {
    /// Creates a controller on the landing screen with no analysis loaded.
    pub fn new(gateway: G, demo: CompetitorAnalysis) -> Self {
        Self {
            gateway: Arc::new(gateway),
            demo: Arc::new(demo),
            session: Arc::new(RwLock::new(Session::default())),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The demonstration analysis shown on the dashboard's sample row.
    pub fn demo(&self) -> &Arc<CompetitorAnalysis> {
        &self.demo
    }

    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// View model for the current screen; `None` when that screen's aggregate
    /// is not held.
    pub async fn view(&self) -> Option<View> {
        let session = self.session().await;
        view::render(
            &session,
            &RenderContext {
                demo: &self.demo,
                credential_configured: self.gateway.has_credential(),
                model: self.gateway.model_label(),
            },
        )
    }

    /// Plain navigation; no gateway call.
    ///
    /// Insights needs a held analysis and Blueprint needs one carrying a
    /// blueprint. Analyzing is never a navigation target.
    pub async fn navigate(&self, target: Screen) -> Outcome {
        let mut session = self.session.write().await;
        if session.screen == Screen::Analyzing {
            return Outcome::Rejected(Rejection::Busy);
        }

        let reachable = match target {
            Screen::Landing | Screen::Dashboard | Screen::AnalyzerInput | Screen::Settings => true,
            Screen::Insights => session.analysis.is_some(),
            Screen::Blueprint => session
                .analysis
                .as_ref()
                .is_some_and(|a| a.blueprint.is_some()),
            Screen::Analyzing => false,
        };
        if !reachable {
            return Outcome::Rejected(Rejection::Unreachable(target));
        }

        tracing::debug!(from = %session.screen, to = %target, "navigate");
        session.screen = target;
        session.error = None;
        Outcome::Succeeded(target)
    }

    /// Loads the demonstration analysis and shows its insights.
    pub async fn open_demo_analysis(&self) -> Outcome {
        let mut session = self.session.write().await;
        if session.screen == Screen::Analyzing {
            return Outcome::Rejected(Rejection::Busy);
        }

        session.analysis = Some(Arc::clone(&self.demo));
        session.error = None;
        session.screen = Screen::Insights;
        Outcome::Succeeded(Screen::Insights)
    }

    /// Fetches reviews for a competitor, analyzes them, and shows the insights.
    ///
    /// Both inputs are trimmed and must be non-empty. Any gateway failure
    /// drops the partial result, records a generic message, and returns to the
    /// input screen with the form kept.
    pub async fn request_analysis(&self, competitor_name: &str, description: &str) -> Outcome {
        let form = AnalysisForm::new(competitor_name, description);
        {
            let mut session = self.session.write().await;
            if session.screen == Screen::Analyzing {
                return Outcome::Rejected(Rejection::Busy);
            }
            if !form.is_complete() {
                return Outcome::Rejected(Rejection::EmptyInput);
            }
            session.screen = Screen::Analyzing;
            session.analysis = None;
            session.error = None;
            session.step = Some(STEP_FETCHING.to_owned());
            session.form = form.clone();
        }

        tracing::info!(competitor = %form.competitor_name, "starting competitor analysis");
        let flow = tokio::spawn(analysis_flow(
            Arc::clone(&self.gateway),
            Arc::clone(&self.session),
            form,
        ));

        match flow.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "competitor analysis task did not finish");
                fail_analysis(&mut *self.session.write().await)
            }
        }
    }

    /// Drafts a product blueprint from the held analysis.
    ///
    /// On success the held analysis is replaced by a copy carrying the
    /// blueprint. On failure the held analysis is left exactly as it was.
    pub async fn request_blueprint(&self) -> Outcome {
        let analysis = {
            let mut session = self.session.write().await;
            if session.screen == Screen::Analyzing {
                return Outcome::Rejected(Rejection::Busy);
            }
            let Some(analysis) = session.analysis.clone() else {
                return Outcome::Rejected(Rejection::NoAnalysis);
            };
            session.screen = Screen::Analyzing;
            session.error = None;
            session.step = Some(STEP_DRAFTING.to_owned());
            analysis
        };

        let flow = tokio::spawn(blueprint_flow(
            Arc::clone(&self.gateway),
            Arc::clone(&self.session),
            analysis,
        ));

        match flow.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "blueprint task did not finish");
                fail_blueprint(&mut *self.session.write().await)
            }
        }
    }
}

async fn analysis_flow<G: AnalysisGateway>(
    gateway: Arc<G>,
    session: Arc<RwLock<Session>>,
    form: AnalysisForm,
) -> Outcome {
    let result = run_analysis(gateway.as_ref(), &session, &form).await;

    let mut session = session.write().await;
    match result {
        Ok(analysis) => {
            tracing::info!(
                competitor = %analysis.competitor_name,
                reviews = analysis.total_reviews_analyzed,
                pain_points = analysis.pain_points.len(),
                "competitor analysis complete"
            );
            session.step = None;
            session.analysis = Some(Arc::new(analysis));
            session.screen = Screen::Insights;
            Outcome::Succeeded(Screen::Insights)
        }
        Err(e) => {
            tracing::error!(
                competitor = %form.competitor_name,
                error = %e,
                "competitor analysis failed"
            );
            fail_analysis(&mut session)
        }
    }
}

async fn run_analysis<G: AnalysisGateway>(
    gateway: &G,
    session: &RwLock<Session>,
    form: &AnalysisForm,
) -> Result<CompetitorAnalysis, GeminiError> {
    let reviews = gateway
        .fetch_reviews(&form.competitor_name, &form.description)
        .await?;

    session.write().await.step = Some(format!(
        "Analyzing {} reviews with {}...",
        reviews.len(),
        gateway.model_label()
    ));

    let draft = gateway
        .analyze_reviews(&form.competitor_name, &reviews)
        .await?;

    Ok(assemble_analysis(
        &form.competitor_name,
        reviews,
        draft,
        Utc::now(),
    ))
}

async fn blueprint_flow<G: AnalysisGateway>(
    gateway: Arc<G>,
    session: Arc<RwLock<Session>>,
    analysis: Arc<CompetitorAnalysis>,
) -> Outcome {
    let result = gateway.generate_blueprint(&analysis).await;

    let mut session = session.write().await;
    match result {
        Ok(blueprint) => {
            tracing::info!(
                competitor = %analysis.competitor_name,
                product = %blueprint.product_name,
                "blueprint drafted"
            );
            session.step = None;
            session.analysis = Some(Arc::new(analysis.with_blueprint(blueprint)));
            session.screen = Screen::Blueprint;
            Outcome::Succeeded(Screen::Blueprint)
        }
        Err(e) => {
            tracing::error!(
                competitor = %analysis.competitor_name,
                error = %e,
                "blueprint generation failed"
            );
            fail_blueprint(&mut session)
        }
    }
}

/// Back to the input screen with the form kept and no analysis held.
fn fail_analysis(session: &mut Session) -> Outcome {
    session.step = None;
    session.analysis = None;
    session.error = Some(ANALYSIS_FAILED_MESSAGE.to_owned());
    session.screen = Screen::AnalyzerInput;
    Outcome::Failed(Screen::AnalyzerInput)
}

/// Back to the insights of the unchanged analysis.
fn fail_blueprint(session: &mut Session) -> Outcome {
    session.step = None;
    session.error = Some(BLUEPRINT_FAILED_MESSAGE.to_owned());
    session.screen = Screen::Insights;
    Outcome::Failed(Screen::Insights)
}

/// Builds the stored aggregate from the fetched reviews and the model's
/// analysis. Fields the model left out default to zero or empty.
fn assemble_analysis(
    competitor_name: &str,
    reviews: Vec<Review>,
    draft: AnalysisDraft,
    now: DateTime<Utc>,
) -> CompetitorAnalysis {
    CompetitorAnalysis {
        id: now.timestamp_millis().to_string(),
        competitor_name: competitor_name.to_owned(),
        competitor_url: None,
        date_analyzed: now.date_naive(),
        total_reviews_analyzed: u32::try_from(reviews.len()).unwrap_or(u32::MAX),
        average_rating: draft.average_rating.unwrap_or(0.0),
        sentiment_summary: draft.sentiment_summary.unwrap_or_default(),
        pain_points: draft.pain_points,
        feature_gaps: draft.feature_gaps,
        reviews,
        blueprint: None,
    }
}
