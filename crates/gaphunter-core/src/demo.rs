use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::app_config::AppConfig;
use crate::types::{CompetitorAnalysis, FeatureGap, PainPoint, Review};
use crate::ConfigError;

const BUNDLED_DEMO: &str = include_str!("../../../config/demo_analysis.yaml");

/// On-disk shape of the demo analysis. `date_analyzed` is not stored; it is
/// stamped at load time.
#[derive(Debug, Deserialize)]
struct DemoFile {
    id: String,
    competitor_name: String,
    #[serde(default)]
    competitor_url: Option<String>,
    total_reviews_analyzed: u32,
    average_rating: f64,
    #[serde(default)]
    sentiment_summary: String,
    #[serde(default)]
    pain_points: Vec<PainPoint>,
    #[serde(default)]
    feature_gaps: Vec<FeatureGap>,
    #[serde(default)]
    reviews: Vec<Review>,
}

/// Load the bundled demo analysis, dated `today`.
///
/// # Errors
///
/// Returns `ConfigError` only if the bundled YAML is invalid.
pub fn bundled_demo_analysis(today: NaiveDate) -> Result<CompetitorAnalysis, ConfigError> {
    parse_demo(BUNDLED_DEMO, today)
}

/// Load a demo analysis from a YAML file, dated `today`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_demo_analysis(path: &Path, today: NaiveDate) -> Result<CompetitorAnalysis, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DemoFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_demo(&content, today)
}

/// The demo analysis selected by `config`: the file at `demo_path` when set,
/// otherwise the bundled one.
///
/// # Errors
///
/// See [`load_demo_analysis`] and [`bundled_demo_analysis`].
pub fn configured_demo_analysis(
    config: &AppConfig,
    today: NaiveDate,
) -> Result<CompetitorAnalysis, ConfigError> {
    match &config.demo_path {
        Some(path) => load_demo_analysis(path, today),
        None => bundled_demo_analysis(today),
    }
}

fn parse_demo(content: &str, today: NaiveDate) -> Result<CompetitorAnalysis, ConfigError> {
    let demo: DemoFile = serde_yaml::from_str(content).map_err(ConfigError::DemoFileParse)?;

    if demo.competitor_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "demo competitor_name must be non-empty".to_string(),
        ));
    }

    if !(0.0..=5.0).contains(&demo.average_rating) {
        return Err(ConfigError::Validation(format!(
            "demo average_rating {} is outside 0.0..=5.0",
            demo.average_rating
        )));
    }

    if let Some(review) = demo.reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
        return Err(ConfigError::Validation(format!(
            "demo review '{}' has invalid rating {}; must be 1 through 5",
            review.id, review.rating
        )));
    }

    Ok(CompetitorAnalysis {
        id: demo.id,
        competitor_name: demo.competitor_name,
        competitor_url: demo.competitor_url,
        date_analyzed: today,
        total_reviews_analyzed: demo.total_reviews_analyzed,
        average_rating: demo.average_rating,
        sentiment_summary: demo.sentiment_summary,
        pain_points: demo.pain_points,
        feature_gaps: demo.feature_gaps,
        reviews: demo.reviews,
        blueprint: None,
    })
}
