//! The three analysis operations behind a trait, and their Gemini implementation.

use std::future::Future;

use gaphunter_core::{CompetitorAnalysis, ProductBlueprint, Review};

use crate::client::GeminiClient;
use crate::error::GeminiError;
use crate::prompts::{analysis_prompt, blueprint_prompt, reviews_prompt};
use crate::schema::{analysis_schema, blueprint_schema, reviews_schema};
use crate::types::AnalysisDraft;
use crate::wire::{parse_analysis, parse_blueprint, parse_reviews};

/// External service that turns a competitor description into reviews, reviews
/// into an analysis, and an analysis into a product blueprint.
///
/// Operations are independent one-shot calls with no shared state.
pub trait AnalysisGateway: Send + Sync {
    /// Whether a credential is configured. Without one every operation fails
    /// with [`GeminiError::MissingCredential`].
    fn has_credential(&self) -> bool;

    /// Human-readable model name for progress messages.
    fn model_label(&self) -> &str;

    /// Produce synthetic negative reviews for a competitor.
    ///
    /// Degrades to an empty list when the remote call fails or returns no
    /// text; a non-empty answer that does not validate is an error.
    fn fetch_reviews(
        &self,
        competitor_name: &str,
        description: &str,
    ) -> impl Future<Output = Result<Vec<Review>, GeminiError>> + Send;

    /// Extract pain points, feature gaps and sentiment from reviews.
    fn analyze_reviews(
        &self,
        competitor_name: &str,
        reviews: &[Review],
    ) -> impl Future<Output = Result<AnalysisDraft, GeminiError>> + Send;

    /// Draft a product that answers the analysis' pain points and gaps.
    fn generate_blueprint(
        &self,
        analysis: &CompetitorAnalysis,
    ) -> impl Future<Output = Result<ProductBlueprint, GeminiError>> + Send;
}

impl AnalysisGateway for GeminiClient {
    fn has_credential(&self) -> bool {
        self.has_api_key()
    }

    fn model_label(&self) -> &str {
        self.model()
    }

    async fn fetch_reviews(
        &self,
        competitor_name: &str,
        description: &str,
    ) -> Result<Vec<Review>, GeminiError> {
        const OPERATION: &str = "fetch_reviews";
        let prompt = reviews_prompt(competitor_name, description);

        match self.generate(OPERATION, &prompt, &reviews_schema()).await {
            Ok(Some(text)) => {
                let reviews = parse_reviews(&text)?;
                tracing::debug!(
                    competitor = competitor_name,
                    count = reviews.len(),
                    "reviews generated"
                );
                Ok(reviews)
            }
            Ok(None) => {
                tracing::warn!(
                    competitor = competitor_name,
                    "no review text generated; continuing with zero reviews"
                );
                Ok(Vec::new())
            }
            Err(e) if e.is_transport() => {
                tracing::warn!(
                    competitor = competitor_name,
                    error = %e,
                    "review generation failed; continuing with zero reviews"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn analyze_reviews(
        &self,
        competitor_name: &str,
        reviews: &[Review],
    ) -> Result<AnalysisDraft, GeminiError> {
        const OPERATION: &str = "analyze_reviews";
        let prompt = analysis_prompt(competitor_name, reviews);

        let text = self
            .generate(OPERATION, &prompt, &analysis_schema())
            .await?
            .ok_or(GeminiError::EmptyResponse {
                operation: OPERATION,
            })?;

        let draft = parse_analysis(&text)?;
        tracing::debug!(
            competitor = competitor_name,
            pain_points = draft.pain_points.len(),
            feature_gaps = draft.feature_gaps.len(),
            "reviews analyzed"
        );
        Ok(draft)
    }

    async fn generate_blueprint(
        &self,
        analysis: &CompetitorAnalysis,
    ) -> Result<ProductBlueprint, GeminiError> {
        const OPERATION: &str = "generate_blueprint";
        let prompt = blueprint_prompt(analysis);

        let text = self
            .generate(OPERATION, &prompt, &blueprint_schema())
            .await?
            .ok_or(GeminiError::EmptyResponse {
                operation: OPERATION,
            })?;

        let blueprint = parse_blueprint(&text)?;
        tracing::debug!(
            competitor = %analysis.competitor_name,
            product = %blueprint.product_name,
            "blueprint generated"
        );
        Ok(blueprint)
    }
}
