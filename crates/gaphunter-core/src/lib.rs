//! Domain model and configuration shared by every GapHunter crate.

pub mod app_config;
pub mod config;
pub mod demo;
pub mod ranking;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use demo::{bundled_demo_analysis, configured_demo_analysis, load_demo_analysis};
pub use ranking::{primary_complaint, rank_pain_points};
pub use types::{
    CompetitorAnalysis, CoreFeature, DemandLevel, FeatureGap, PainPoint, ProductBlueprint, Review,
    ReviewSource, Severity,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read demo analysis file {path}: {source}")]
    DemoFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse demo analysis: {0}")]
    DemoFileParse(#[from] serde_yaml::Error),

    #[error("invalid demo analysis: {0}")]
    Validation(String),
}
