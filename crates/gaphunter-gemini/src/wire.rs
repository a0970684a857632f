//! Wire shapes of the model's JSON answers and their validation.
//!
//! Each `parse_*` function goes text → typed wire struct → range checks →
//! domain value. Closed label sets are enforced by deserializing straight into
//! the domain enums.

use gaphunter_core::{
    CoreFeature, DemandLevel, FeatureGap, PainPoint, ProductBlueprint, Review, ReviewSource,
    Severity,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::GeminiError;
use crate::types::AnalysisDraft;

#[derive(Debug, Deserialize)]
struct ReviewWire {
    id: String,
    author: String,
    rating: i64,
    date: String,
    content: String,
    source: ReviewSource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisWire {
    #[serde(default)]
    sentiment_summary: Option<String>,
    #[serde(default)]
    average_rating: Option<f64>,
    #[serde(default)]
    pain_points: Option<Vec<PainPointWire>>,
    #[serde(default)]
    feature_gaps: Option<Vec<FeatureGapWire>>,
}

#[derive(Debug, Deserialize)]
struct PainPointWire {
    category: String,
    count: i64,
    #[serde(default)]
    description: String,
    severity: Severity,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeatureGapWire {
    feature_name: String,
    demand_level: DemandLevel,
    #[serde(default)]
    context: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlueprintWire {
    product_name: String,
    tagline: String,
    value_proposition: String,
    #[serde(default)]
    core_features: Option<Vec<CoreFeatureWire>>,
    #[serde(default)]
    marketing_angles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoreFeatureWire {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    solves_gap: String,
}

fn decode<T: DeserializeOwned>(text: &str, context: &str) -> Result<T, GeminiError> {
    serde_json::from_str(text).map_err(|e| GeminiError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

fn violation(context: &str, reason: String) -> GeminiError {
    GeminiError::SchemaViolation {
        context: context.to_string(),
        reason,
    }
}

/// Parse the review-fetch answer.
///
/// # Errors
///
/// [`GeminiError::Deserialize`] if the text is not an array of complete review
/// objects, [`GeminiError::SchemaViolation`] if any rating is outside 1–5.
pub(crate) fn parse_reviews(text: &str) -> Result<Vec<Review>, GeminiError> {
    const CONTEXT: &str = "reviews";
    let wire: Vec<ReviewWire> = decode(text, CONTEXT)?;

    wire.into_iter()
        .map(|r| {
            let rating = u8::try_from(r.rating)
                .ok()
                .filter(|n| (1..=5).contains(n))
                .ok_or_else(|| {
                    violation(
                        CONTEXT,
                        format!("review '{}' has rating {}; must be 1 through 5", r.id, r.rating),
                    )
                })?;
            Ok(Review {
                id: r.id,
                author: r.author,
                rating,
                date: r.date,
                content: r.content,
                source: r.source,
            })
        })
        .collect()
}

/// Parse the review-analysis answer.
///
/// Missing or `null` top-level fields are accepted and left as `None`/empty.
///
/// # Errors
///
/// [`GeminiError::Deserialize`] on shape mismatch, [`GeminiError::SchemaViolation`]
/// for a non-finite or out-of-range average rating or a negative count.
pub(crate) fn parse_analysis(text: &str) -> Result<AnalysisDraft, GeminiError> {
    const CONTEXT: &str = "review analysis";
    let wire: AnalysisWire = decode(text, CONTEXT)?;

    if let Some(avg) = wire.average_rating {
        if !avg.is_finite() || !(0.0..=5.0).contains(&avg) {
            return Err(violation(
                CONTEXT,
                format!("averageRating {avg} is outside 0.0..=5.0"),
            ));
        }
    }

    let pain_points = wire
        .pain_points
        .unwrap_or_default()
        .into_iter()
        .map(|p| {
            let count = u32::try_from(p.count).map_err(|_| {
                violation(
                    CONTEXT,
                    format!("pain point '{}' has invalid count {}", p.category, p.count),
                )
            })?;
            Ok(PainPoint {
                category: p.category,
                count,
                description: p.description,
                severity: p.severity,
            })
        })
        .collect::<Result<Vec<_>, GeminiError>>()?;

    let feature_gaps = wire
        .feature_gaps
        .unwrap_or_default()
        .into_iter()
        .map(|g| FeatureGap {
            feature_name: g.feature_name,
            demand_level: g.demand_level,
            context: g.context,
        })
        .collect();

    Ok(AnalysisDraft {
        sentiment_summary: wire.sentiment_summary,
        average_rating: wire.average_rating,
        pain_points,
        feature_gaps,
    })
}

/// Parse the blueprint answer.
///
/// # Errors
///
/// [`GeminiError::Deserialize`] on shape mismatch, [`GeminiError::SchemaViolation`]
/// if the product name is blank.
pub(crate) fn parse_blueprint(text: &str) -> Result<ProductBlueprint, GeminiError> {
    const CONTEXT: &str = "product blueprint";
    let wire: BlueprintWire = decode(text, CONTEXT)?;

    if wire.product_name.trim().is_empty() {
        return Err(violation(CONTEXT, "productName is blank".to_string()));
    }

    Ok(ProductBlueprint {
        product_name: wire.product_name,
        tagline: wire.tagline,
        value_proposition: wire.value_proposition,
        core_features: wire
            .core_features
            .unwrap_or_default()
            .into_iter()
            .map(|f| CoreFeature {
                title: f.title,
                description: f.description,
                solves_gap: f.solves_gap,
            })
            .collect(),
        marketing_angles: wire.marketing_angles.unwrap_or_default(),
    })
}
