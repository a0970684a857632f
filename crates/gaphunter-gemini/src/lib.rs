//! Gemini-backed analysis gateway for GapHunter.
//!
//! Three structured-output calls: generate synthetic reviews for a competitor,
//! analyze them into pain points and feature gaps, and draft a product
//! blueprint. Each answer is validated against its declared schema before a
//! domain value is returned.

pub mod client;
pub mod error;
pub mod gateway;
pub mod prompts;
pub mod schema;
pub mod types;

mod wire;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use gateway::AnalysisGateway;
pub use prompts::REVIEW_SAMPLE_SIZE;
pub use types::AnalysisDraft;
