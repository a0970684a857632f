//! Domain records for competitor review analysis.
//!
//! Every record is plain data. The closed label sets ([`ReviewSource`],
//! [`Severity`], [`DemandLevel`]) serialize to exactly the labels the analysis
//! gateway declares in its response schemas, so the same enums are used on the
//! wire and in the UI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Platform a review was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewSource {
    #[serde(rename = "App Store")]
    AppStore,
    #[serde(rename = "Play Store")]
    PlayStore,
    #[serde(rename = "G2")]
    G2,
    #[serde(rename = "Capterra")]
    Capterra,
    #[serde(rename = "Twitter")]
    Twitter,
}

impl ReviewSource {
    pub const ALL: [ReviewSource; 5] = [
        ReviewSource::AppStore,
        ReviewSource::PlayStore,
        ReviewSource::G2,
        ReviewSource::Capterra,
        ReviewSource::Twitter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewSource::AppStore => "App Store",
            ReviewSource::PlayStore => "Play Store",
            ReviewSource::G2 => "G2",
            ReviewSource::Capterra => "Capterra",
            ReviewSource::Twitter => "Twitter",
        }
    }
}

impl std::fmt::Display for ReviewSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How badly a pain point hurts the competitor's users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strongly users ask for a missing feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemandLevel {
    Critical,
    #[serde(rename = "Nice to Have")]
    NiceToHave,
}

impl DemandLevel {
    pub const ALL: [DemandLevel; 2] = [DemandLevel::Critical, DemandLevel::NiceToHave];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DemandLevel::Critical => "Critical",
            DemandLevel::NiceToHave => "Nice to Have",
        }
    }
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single (synthetic) user review of the competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Review date as reported by the source; free-form.
    pub date: String,
    pub content: String,
    pub source: ReviewSource,
}

/// A recurring complaint theme extracted from reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainPoint {
    pub category: String,
    pub count: u32,
    pub description: String,
    pub severity: Severity,
}

/// A capability users say the competitor is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureGap {
    pub feature_name: String,
    pub demand_level: DemandLevel,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreFeature {
    pub title: String,
    pub description: String,
    /// The pain point or feature gap this feature answers.
    pub solves_gap: String,
}

/// Concept for a new product that answers a competitor's weaknesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBlueprint {
    pub product_name: String,
    pub tagline: String,
    pub value_proposition: String,
    #[serde(default)]
    pub core_features: Vec<CoreFeature>,
    #[serde(default)]
    pub marketing_angles: Vec<String>,
}

/// The aggregate produced by one analysis run.
///
/// Held as an immutable snapshot; a blueprint is attached by building a new
/// value with [`CompetitorAnalysis::with_blueprint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub id: String,
    pub competitor_name: String,
    #[serde(default)]
    pub competitor_url: Option<String>,
    pub date_analyzed: NaiveDate,
    pub total_reviews_analyzed: u32,
    /// Mean star rating in `0.0..=5.0`.
    pub average_rating: f64,
    pub sentiment_summary: String,
    #[serde(default)]
    pub pain_points: Vec<PainPoint>,
    #[serde(default)]
    pub feature_gaps: Vec<FeatureGap>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub blueprint: Option<ProductBlueprint>,
}

impl CompetitorAnalysis {
    /// Returns a copy of this analysis carrying `blueprint`.
    #[must_use]
    pub fn with_blueprint(&self, blueprint: ProductBlueprint) -> Self {
        Self {
            blueprint: Some(blueprint),
            ..self.clone()
        }
    }

    /// Number of feature gaps tagged [`DemandLevel::Critical`].
    #[must_use]
    pub fn critical_gap_count(&self) -> usize {
        self.feature_gaps
            .iter()
            .filter(|g| g.demand_level == DemandLevel::Critical)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> CompetitorAnalysis {
        CompetitorAnalysis {
            id: "1".to_string(),
            competitor_name: "Acme".to_string(),
            competitor_url: None,
            date_analyzed: NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
            total_reviews_analyzed: 0,
            average_rating: 0.0,
            sentiment_summary: String::new(),
            pain_points: vec![],
            feature_gaps: vec![
                FeatureGap {
                    feature_name: "Export".to_string(),
                    demand_level: DemandLevel::Critical,
                    context: "csv".to_string(),
                },
                FeatureGap {
                    feature_name: "Dark Mode".to_string(),
                    demand_level: DemandLevel::NiceToHave,
                    context: "night".to_string(),
                },
            ],
            reviews: vec![],
            blueprint: None,
        }
    }

    #[test]
    fn labels_serialize_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReviewSource::PlayStore).unwrap(),
            "\"Play Store\""
        );
        assert_eq!(
            serde_json::to_string(&DemandLevel::NiceToHave).unwrap(),
            "\"Nice to Have\""
        );
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
    }

    #[test]
    fn unknown_label_is_rejected() {
        let result: Result<Severity, _> = serde_json::from_str("\"Extreme\"");
        assert!(result.is_err());
    }

    #[test]
    fn as_str_matches_serde_name_for_every_variant() {
        for source in ReviewSource::ALL {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.as_str()));
        }
        for level in DemandLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn with_blueprint_leaves_original_untouched() {
        let original = analysis();
        let blueprint = ProductBlueprint {
            product_name: "Zen CRM".to_string(),
            tagline: "Less clicks".to_string(),
            value_proposition: "Simple".to_string(),
            core_features: vec![],
            marketing_angles: vec!["cheap".to_string()],
        };

        let updated = original.with_blueprint(blueprint.clone());

        assert!(original.blueprint.is_none());
        assert_eq!(updated.blueprint, Some(blueprint));
        assert_eq!(updated.competitor_name, original.competitor_name);
    }

    #[test]
    fn critical_gap_count_ignores_nice_to_have() {
        assert_eq!(analysis().critical_gap_count(), 1);
    }
}
