//! View models derived from a [`Session`].
//!
//! Rendering only orders, counts and formats; it never changes state.

use chrono::NaiveDate;
use gaphunter_core::{
    primary_complaint, rank_pain_points, CompetitorAnalysis, CoreFeature, FeatureGap, PainPoint,
    Review,
};
use serde::Serialize;

use crate::state::{Screen, Session};

/// Reviews shown on the insights screen.
pub const REVIEW_HIGHLIGHT_LIMIT: usize = 5;

/// Values a view needs that do not live in the session.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub demo: &'a CompetitorAnalysis,
    pub credential_configured: bool,
    pub model: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    Landing,
    Dashboard(DashboardView),
    AnalyzerInput(AnalyzerInputView),
    Analyzing(AnalyzingView),
    Insights(InsightsView),
    Blueprint(BlueprintView),
    Settings(SettingsView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub analyses: Vec<AnalysisRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRow {
    pub id: String,
    pub competitor_name: String,
    pub date_analyzed: NaiveDate,
    pub total_reviews_analyzed: u32,
    pub average_rating: String,
    pub is_demo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzerInputView {
    pub competitor_name: String,
    pub description: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzingView {
    pub competitor_name: String,
    pub step: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsView {
    pub competitor_name: String,
    pub date_analyzed: NaiveDate,
    pub total_reviews_analyzed: u32,
    /// Average star rating formatted to one decimal place.
    pub average_rating: String,
    pub sentiment_summary: String,
    /// Category of the most frequently reported pain point.
    pub primary_complaint: Option<String>,
    pub critical_gap_count: usize,
    /// Pain points by descending count; equal counts keep their input order.
    pub pain_points: Vec<PainPoint>,
    pub review_highlights: Vec<Review>,
    pub feature_gaps: Vec<FeatureGap>,
    pub has_blueprint: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlueprintView {
    pub competitor_name: String,
    pub product_name: String,
    pub tagline: String,
    pub value_proposition: String,
    pub core_features: Vec<CoreFeature>,
    pub marketing_angles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsView {
    pub credential_configured: bool,
    pub model: String,
}

/// Renders the session's current screen.
///
/// Returns `None` for Insights without an analysis and for Blueprint without
/// an analysis carrying a blueprint.
#[must_use]
pub fn render(session: &Session, ctx: &RenderContext<'_>) -> Option<View> {
    let view = match session.screen {
        Screen::Landing => View::Landing,
        Screen::Dashboard => View::Dashboard(dashboard_view(session.analysis.as_deref(), ctx.demo)),
        Screen::AnalyzerInput => View::AnalyzerInput(AnalyzerInputView {
            competitor_name: session.form.competitor_name.clone(),
            description: session.form.description.clone(),
            error: session.error.clone(),
        }),
        Screen::Analyzing => View::Analyzing(AnalyzingView {
            competitor_name: session.analysis.as_ref().map_or_else(
                || session.form.competitor_name.clone(),
                |a| a.competitor_name.clone(),
            ),
            step: session.step.clone(),
        }),
        Screen::Insights => View::Insights(insights_view(
            session.analysis.as_deref()?,
            session.error.clone(),
        )),
        Screen::Blueprint => View::Blueprint(blueprint_view(session.analysis.as_deref()?)?),
        Screen::Settings => View::Settings(SettingsView {
            credential_configured: ctx.credential_configured,
            model: ctx.model.to_owned(),
        }),
    };
    Some(view)
}

/// Insights for one analysis.
#[must_use]
pub fn insights_view(analysis: &CompetitorAnalysis, error: Option<String>) -> InsightsView {
    InsightsView {
        competitor_name: analysis.competitor_name.clone(),
        date_analyzed: analysis.date_analyzed,
        total_reviews_analyzed: analysis.total_reviews_analyzed,
        average_rating: format!("{:.1}", analysis.average_rating),
        sentiment_summary: analysis.sentiment_summary.clone(),
        primary_complaint: primary_complaint(&analysis.pain_points).map(|p| p.category.clone()),
        critical_gap_count: analysis.critical_gap_count(),
        pain_points: rank_pain_points(&analysis.pain_points)
            .into_iter()
            .cloned()
            .collect(),
        review_highlights: analysis
            .reviews
            .iter()
            .take(REVIEW_HIGHLIGHT_LIMIT)
            .cloned()
            .collect(),
        feature_gaps: analysis.feature_gaps.clone(),
        has_blueprint: analysis.blueprint.is_some(),
        error,
    }
}

/// The analysis' blueprint, or `None` if it has not been drafted.
#[must_use]
pub fn blueprint_view(analysis: &CompetitorAnalysis) -> Option<BlueprintView> {
    let blueprint = analysis.blueprint.as_ref()?;
    Some(BlueprintView {
        competitor_name: analysis.competitor_name.clone(),
        product_name: blueprint.product_name.clone(),
        tagline: blueprint.tagline.clone(),
        value_proposition: blueprint.value_proposition.clone(),
        core_features: blueprint.core_features.clone(),
        marketing_angles: blueprint.marketing_angles.clone(),
    })
}

fn dashboard_view(current: Option<&CompetitorAnalysis>, demo: &CompetitorAnalysis) -> DashboardView {
    let mut analyses = Vec::with_capacity(2);
    if let Some(current) = current.filter(|a| a.id != demo.id) {
        analyses.push(analysis_row(current, false));
    }
    analyses.push(analysis_row(demo, true));
    DashboardView { analyses }
}

fn analysis_row(analysis: &CompetitorAnalysis, is_demo: bool) -> AnalysisRow {
    AnalysisRow {
        id: analysis.id.clone(),
        competitor_name: analysis.competitor_name.clone(),
        date_analyzed: analysis.date_analyzed,
        total_reviews_analyzed: analysis.total_reviews_analyzed,
        average_rating: format!("{:.1}", analysis.average_rating),
        is_demo,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::state::AnalysisForm;
    use gaphunter_core::{DemandLevel, ProductBlueprint, ReviewSource, Severity};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    }

    fn point(category: &str, count: u32) -> PainPoint {
        PainPoint {
            category: category.to_string(),
            count,
            description: String::new(),
            severity: Severity::Medium,
        }
    }

    fn review(n: usize) -> Review {
        Review {
            id: n.to_string(),
            author: format!("user{n}"),
            rating: 1,
            date: "2025-05-30".to_string(),
            content: "bad".to_string(),
            source: ReviewSource::AppStore,
        }
    }

    fn analysis(id: &str) -> CompetitorAnalysis {
        CompetitorAnalysis {
            id: id.to_string(),
            competitor_name: format!("Competitor {id}"),
            competitor_url: None,
            date_analyzed: date(),
            total_reviews_analyzed: 8,
            average_rating: 2.26,
            sentiment_summary: "unhappy".to_string(),
            pain_points: vec![point("Support", 4), point("Pricing", 9), point("UX", 4)],
            feature_gaps: vec![
                FeatureGap {
                    feature_name: "Export".to_string(),
                    demand_level: DemandLevel::Critical,
                    context: String::new(),
                },
                FeatureGap {
                    feature_name: "Dark mode".to_string(),
                    demand_level: DemandLevel::NiceToHave,
                    context: String::new(),
                },
            ],
            reviews: (1..=8).map(review).collect(),
            blueprint: None,
        }
    }

    fn blueprint() -> ProductBlueprint {
        ProductBlueprint {
            product_name: "Clarity".to_string(),
            tagline: "Less is more".to_string(),
            value_proposition: "Flat pricing".to_string(),
            core_features: vec![],
            marketing_angles: vec!["Honest pricing".to_string()],
        }
    }

    fn ctx(demo: &CompetitorAnalysis) -> RenderContext<'_> {
        RenderContext {
            demo,
            credential_configured: true,
            model: "gemini-2.5-flash",
        }
    }

    fn session_on(screen: Screen, analysis: Option<CompetitorAnalysis>) -> Session {
        Session {
            screen,
            analysis: analysis.map(Arc::new),
            ..Session::default()
        }
    }

    #[test]
    fn insights_rank_pain_points_and_count_gaps() {
        let view = insights_view(&analysis("a"), None);

        let order: Vec<_> = view.pain_points.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(order, ["Pricing", "Support", "UX"]);
        assert_eq!(view.primary_complaint.as_deref(), Some("Pricing"));
        assert_eq!(view.critical_gap_count, 1);
        assert_eq!(view.average_rating, "2.3");
    }

    #[test]
    fn insights_show_at_most_five_reviews() {
        let view = insights_view(&analysis("a"), None);
        assert_eq!(view.review_highlights.len(), REVIEW_HIGHLIGHT_LIMIT);
        assert_eq!(view.review_highlights[0].id, "1");
    }

    #[test]
    fn insights_without_pain_points_have_no_primary_complaint() {
        let mut a = analysis("a");
        a.pain_points.clear();
        a.reviews.clear();
        let view = insights_view(&a, None);
        assert!(view.primary_complaint.is_none());
        assert!(view.review_highlights.is_empty());
    }

    #[test]
    fn insights_without_analysis_renders_nothing() {
        let demo = analysis("demo");
        let session = session_on(Screen::Insights, None);
        assert!(render(&session, &ctx(&demo)).is_none());
    }

    #[test]
    fn blueprint_without_blueprint_renders_nothing() {
        let demo = analysis("demo");
        let session = session_on(Screen::Blueprint, Some(analysis("a")));
        assert!(render(&session, &ctx(&demo)).is_none());
    }

    #[test]
    fn blueprint_renders_embedded_blueprint() {
        let demo = analysis("demo");
        let session = session_on(
            Screen::Blueprint,
            Some(analysis("a").with_blueprint(blueprint())),
        );
        let Some(View::Blueprint(view)) = render(&session, &ctx(&demo)) else {
            panic!("expected blueprint view");
        };
        assert_eq!(view.product_name, "Clarity");
        assert_eq!(view.competitor_name, "Competitor a");
    }

    #[test]
    fn dashboard_lists_current_analysis_before_demo() {
        let demo = analysis("demo");
        let session = session_on(Screen::Dashboard, Some(analysis("42")));
        let Some(View::Dashboard(view)) = render(&session, &ctx(&demo)) else {
            panic!("expected dashboard view");
        };
        let ids: Vec<_> = view.analyses.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["42", "demo"]);
        assert!(view.analyses[1].is_demo);
    }

    #[test]
    fn dashboard_does_not_repeat_loaded_demo() {
        let demo = analysis("demo");
        let session = session_on(Screen::Dashboard, Some(analysis("demo")));
        let Some(View::Dashboard(view)) = render(&session, &ctx(&demo)) else {
            panic!("expected dashboard view");
        };
        assert_eq!(view.analyses.len(), 1);
    }

    #[test]
    fn analyzer_input_shows_form_and_error() {
        let demo = analysis("demo");
        let session = Session {
            screen: Screen::AnalyzerInput,
            error: Some("nope".to_string()),
            form: AnalysisForm::new("Acme", "CRM tool"),
            ..Session::default()
        };
        let Some(View::AnalyzerInput(view)) = render(&session, &ctx(&demo)) else {
            panic!("expected analyzer input view");
        };
        assert_eq!(view.competitor_name, "Acme");
        assert_eq!(view.error.as_deref(), Some("nope"));
    }

    #[test]
    fn settings_reports_credential_and_model() {
        let demo = analysis("demo");
        let session = session_on(Screen::Settings, None);
        let view = render(&session, &ctx(&demo)).expect("settings always renders");
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["screen"], "SETTINGS");
        assert_eq!(json["credential_configured"], true);
        assert_eq!(json["model"], "gemini-2.5-flash");
    }

    #[test]
    fn landing_serializes_as_tag_only() {
        let demo = analysis("demo");
        let view = render(&Session::default(), &ctx(&demo)).expect("landing renders");
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json, serde_json::json!({ "screen": "LANDING" }));
    }
}
