//! Plain-text rendering of view models.

use gaphunter_app::view::{BlueprintView, InsightsView, SettingsView};

const BAR_WIDTH: u64 = 30;

pub(crate) fn insights(view: &InsightsView) -> String {
    let mut lines = vec![
        format!(
            "{} | analyzed {} | {} reviews",
            view.competitor_name, view.date_analyzed, view.total_reviews_analyzed
        ),
        format!(
            "Avg rating: {}/5   Primary complaint: {}   Critical gaps: {}",
            view.average_rating,
            view.primary_complaint.as_deref().unwrap_or("none"),
            view.critical_gap_count
        ),
    ];

    if let Some(error) = &view.error {
        lines.push(format!("! {error}"));
    }

    if !view.sentiment_summary.is_empty() {
        lines.push(String::new());
        lines.push("Sentiment".to_string());
        lines.push(format!("  {}", view.sentiment_summary));
    }

    if !view.pain_points.is_empty() {
        let max = view.pain_points.iter().map(|p| p.count).max().unwrap_or(0);
        let label_width = view
            .pain_points
            .iter()
            .map(|p| p.category.chars().count())
            .max()
            .unwrap_or(0);

        lines.push(String::new());
        lines.push("Complaint frequency".to_string());
        for point in &view.pain_points {
            lines.push(format!(
                "  {:<label_width$} {} {}",
                point.category,
                bar(point.count, max),
                point.count
            ));
        }

        lines.push(String::new());
        lines.push("Pain points".to_string());
        for point in &view.pain_points {
            lines.push(format!(
                "  [{}] {} ({} mentions)",
                point.severity, point.category, point.count
            ));
            if !point.description.is_empty() {
                lines.push(format!("      {}", point.description));
            }
        }
    }

    if !view.review_highlights.is_empty() {
        lines.push(String::new());
        lines.push("Review highlights".to_string());
        for review in &view.review_highlights {
            lines.push(format!(
                "  [{} stars] {} on {}: {}",
                review.rating, review.author, review.source, review.content
            ));
        }
    }

    if !view.feature_gaps.is_empty() {
        lines.push(String::new());
        lines.push("Feature gaps".to_string());
        for gap in &view.feature_gaps {
            lines.push(format!("  [{}] {}", gap.demand_level, gap.feature_name));
            if !gap.context.is_empty() {
                lines.push(format!("      {}", gap.context));
            }
        }
    }

    finish(lines)
}

pub(crate) fn blueprint(view: &BlueprintView) -> String {
    let mut lines = vec![
        format!("Blueprint vs {}: {}", view.competitor_name, view.product_name),
        format!("\"{}\"", view.tagline),
        String::new(),
        view.value_proposition.clone(),
    ];

    if !view.core_features.is_empty() {
        lines.push(String::new());
        lines.push("Core features".to_string());
        for (i, feature) in view.core_features.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, feature.title));
            lines.push(format!("     {}", feature.description));
            lines.push(format!("     Fixes: {}", feature.solves_gap));
        }
    }

    if !view.marketing_angles.is_empty() {
        lines.push(String::new());
        lines.push("Marketing angles".to_string());
        lines.extend(view.marketing_angles.iter().map(|a| format!("  - {a}")));
    }

    finish(lines)
}

pub(crate) fn settings(view: &SettingsView) -> String {
    let credential = if view.credential_configured {
        "configured"
    } else {
        "missing (set GEMINI_API_KEY)"
    };
    finish(vec![
        format!("Gemini API key: {credential}"),
        format!("Model:          {}", view.model),
    ])
}

/// Bar scaled so the largest count fills `BAR_WIDTH` columns.
fn bar(count: u32, max: u32) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = u64::from(count) * BAR_WIDTH / u64::from(max);
    "#".repeat(usize::try_from(filled).unwrap_or(0))
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
