//! Instruction text for the three gateway operations.

use gaphunter_core::{CompetitorAnalysis, Review};
use serde_json::json;

/// Number of synthetic reviews requested per analysis.
pub const REVIEW_SAMPLE_SIZE: usize = 20;

pub(crate) fn reviews_prompt(competitor_name: &str, description: &str) -> String {
    format!(
        "Act as a data scraper. Generate {REVIEW_SAMPLE_SIZE} realistic, raw, negative user reviews \
         for a SaaS product named \"{competitor_name}\".\n\
         The product is described as: \"{description}\".\n\
         Focus on common SaaS complaints: high pricing, poor support, buggy UI, missing specific \
         features, complexity, data lock-in.\n\
         Vary the length and tone. Ratings should be mostly 1, 2, or 3 stars.\n\
         Return JSON only."
    )
}

/// Flattens reviews into `[N stars] content` blocks separated by blank lines.
pub(crate) fn reviews_block(reviews: &[Review]) -> String {
    reviews
        .iter()
        .map(|r| format!("[{} stars] {}", r.rating, r.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(crate) fn analysis_prompt(competitor_name: &str, reviews: &[Review]) -> String {
    format!(
        "Analyze the following {count} reviews for competitor \"{competitor_name}\".\n\
         Identify the top recurring pain points and missing features that users are complaining \
         about.\n\
         Summarize the overall sentiment.\n\n\
         Reviews:\n{block}",
        count = reviews.len(),
        block = reviews_block(reviews),
    )
}

pub(crate) fn blueprint_prompt(analysis: &CompetitorAnalysis) -> String {
    let context = json!({
        "competitor": analysis.competitor_name,
        "painPoints": analysis.pain_points,
        "gaps": analysis.feature_gaps,
    });

    format!(
        "Based on the provided competitor analysis (Pain Points and Feature Gaps), create a \
         Product Blueprint for a new SaaS that beats this competitor.\n\
         The product should directly address the high severity pain points and include the \
         missing features.\n\n\
         Context: {context}"
    )
}
