//! `responseSchema` declarations sent with each `generateContent` call.
//!
//! Gemini accepts an OpenAPI-style subset: upper-case `type` names, `enum` for
//! closed string sets, and `required` for mandatory properties. Enumerations
//! are built from the domain enums so the declared labels and the labels the
//! deserializer accepts cannot drift apart.

use gaphunter_core::{DemandLevel, ReviewSource, Severity};
use serde_json::{json, Value};

/// An array of review objects.
#[must_use]
pub fn reviews_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "author": { "type": "STRING" },
                "rating": { "type": "INTEGER" },
                "date": { "type": "STRING" },
                "content": { "type": "STRING" },
                "source": {
                    "type": "STRING",
                    "enum": ReviewSource::ALL.map(ReviewSource::as_str),
                },
            },
            "required": ["id", "author", "rating", "date", "content", "source"],
        },
    })
}

/// Sentiment summary, average rating, pain points and feature gaps.
///
/// Top-level properties are optional; items inside the lists are not.
#[must_use]
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sentimentSummary": { "type": "STRING" },
            "averageRating": { "type": "NUMBER" },
            "painPoints": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "count": { "type": "INTEGER" },
                        "description": { "type": "STRING" },
                        "severity": {
                            "type": "STRING",
                            "enum": Severity::ALL.map(Severity::as_str),
                        },
                    },
                    "required": ["category", "count", "severity"],
                },
            },
            "featureGaps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "featureName": { "type": "STRING" },
                        "demandLevel": {
                            "type": "STRING",
                            "enum": DemandLevel::ALL.map(DemandLevel::as_str),
                        },
                        "context": { "type": "STRING" },
                    },
                    "required": ["featureName", "demandLevel"],
                },
            },
        },
    })
}

#[must_use]
pub fn blueprint_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "productName": { "type": "STRING" },
            "tagline": { "type": "STRING" },
            "valueProposition": { "type": "STRING" },
            "coreFeatures": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "solvesGap": { "type": "STRING" },
                    },
                    "required": ["title"],
                },
            },
            "marketingAngles": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
            },
        },
        "required": ["productName", "tagline", "valueProposition"],
    })
}
