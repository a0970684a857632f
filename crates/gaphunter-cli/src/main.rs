mod render;

use clap::{Parser, Subcommand};
use gaphunter_app::{view, Controller, Outcome, Screen, View};
use gaphunter_gemini::{AnalysisGateway, GeminiClient};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gaphunter-cli")]
#[command(about = "Find the gaps in a competitor's product from its reviews")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate and analyze reviews for a competitor
    Analyze {
        /// Competitor product name
        #[arg(long)]
        name: String,
        /// What the competitor does
        #[arg(long)]
        description: String,
        /// Also draft a product blueprint from the analysis
        #[arg(long)]
        blueprint: bool,
        /// Print the analysis as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the bundled demo analysis
    Demo {
        #[arg(long)]
        json: bool,
    },
    /// Show whether a Gemini credential is configured
    Settings,
}

type CliController = Controller<GeminiClient>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = gaphunter_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("gaphunter-cli: run with --help to list commands");
        return Ok(());
    };

    let today = chrono::Local::now().date_naive();
    let demo = gaphunter_core::configured_demo_analysis(&config, today)?;
    let controller = Controller::new(GeminiClient::from_config(&config)?, demo);

    match command {
        Commands::Analyze {
            name,
            description,
            blueprint,
            json,
        } => run_analyze(&controller, &name, &description, blueprint, json).await,
        Commands::Demo { json } => run_demo(&controller, json).await,
        Commands::Settings => run_settings(&controller).await,
    }
}

/// Runs the analysis flow and, optionally, the blueprint flow.
///
/// # Errors
///
/// Returns an error if the input is rejected or a gateway flow fails.
async fn run_analyze(
    controller: &CliController,
    name: &str,
    description: &str,
    with_blueprint: bool,
    json: bool,
) -> anyhow::Result<()> {
    tracing::info!(competitor = %name, model = %controller.gateway().model_label(), "analyzing competitor");
    if let Err(e) =
        ensure_completed(controller, controller.request_analysis(name, description).await).await
    {
        tracing::error!(competitor = %name, error = %e, "analysis did not complete");
        return Err(e);
    }

    let blueprint_result = if with_blueprint {
        tracing::info!(competitor = %name, "drafting blueprint");
        let result = ensure_completed(controller, controller.request_blueprint().await).await;
        if let Err(e) = &result {
            tracing::error!(competitor = %name, error = %e, "blueprint did not complete");
        }
        result
    } else {
        Ok(())
    };

    let Some(analysis) = controller.session().await.analysis else {
        anyhow::bail!("no analysis was stored");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(analysis.as_ref())?);
    } else {
        print!("{}", render::insights(&view::insights_view(&analysis, None)));
        if let Some(blueprint) = view::blueprint_view(&analysis) {
            println!();
            print!("{}", render::blueprint(&blueprint));
        }
    }

    blueprint_result
}

async fn run_demo(controller: &CliController, json: bool) -> anyhow::Result<()> {
    ensure_completed(controller, controller.open_demo_analysis().await).await?;

    match controller.view().await {
        Some(View::Insights(insights)) if json => {
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
        Some(View::Insights(insights)) => print!("{}", render::insights(&insights)),
        _ => anyhow::bail!("demo analysis did not open"),
    }
    Ok(())
}

async fn run_settings(controller: &CliController) -> anyhow::Result<()> {
    ensure_completed(controller, controller.navigate(Screen::Settings).await).await?;

    let Some(View::Settings(settings)) = controller.view().await else {
        anyhow::bail!("settings view unavailable");
    };
    print!("{}", render::settings(&settings));
    Ok(())
}

/// Turns a rejected or failed transition into an error carrying the
/// user-facing message.
async fn ensure_completed(controller: &CliController, outcome: Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::Succeeded(_) => Ok(()),
        Outcome::Rejected(rejection) => Err(anyhow::anyhow!(rejection)),
        Outcome::Failed(screen) => {
            let message = controller
                .session()
                .await
                .error
                .unwrap_or_else(|| format!("flow failed; returned to {screen}"));
            anyhow::bail!(message)
        }
    }
}

#[cfg(test)]
mod tests;
