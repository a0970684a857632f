use gaphunter_core::{FeatureGap, PainPoint};
use serde::Serialize;

/// Result of the review-analysis call: the part of a competitor analysis the
/// model produces.
///
/// Optional fields were absent from the model's answer; callers choose the
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisDraft {
    pub sentiment_summary: Option<String>,
    pub average_rating: Option<f64>,
    pub pain_points: Vec<PainPoint>,
    pub feature_gaps: Vec<FeatureGap>,
}
