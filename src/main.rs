use clap::Parser;
use serde::Serialize;
use wc_predictions::config::Command;
use wc_predictions::domain::model::KnockoutPhase;
use wc_predictions::utils::error::ErrorCategory;
use wc_predictions::utils::logger;
use wc_predictions::{AppContainer, CliConfig, ClientConfig, PredictionsError, SessionContext};

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

fn load_config(cli: &CliConfig) -> Result<ClientConfig, PredictionsError> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::new(DEFAULT_BASE_URL),
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), PredictionsError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(container: &AppContainer, command: Command) -> Result<(), PredictionsError> {
    match command {
        Command::Calendar => print_json(&container.get_calendar().execute().await?),
        Command::Knockouts { phase } => {
            let phase: KnockoutPhase = phase.parse()?;
            print_json(&container.get_knockout_matches().execute(phase).await?)
        }
        Command::League { league_id } => {
            match container.get_league_by_id().execute(&league_id).await? {
                Some(league) => print_json(&league),
                None => {
                    println!("League {} not found", league_id);
                    Ok(())
                }
            }
        }
        Command::Leagues { category } => {
            let leagues = match category {
                Some(category) => container.get_leagues_by_category().execute(&category).await?,
                None => container.get_public_leagues().execute().await?,
            };
            print_json(&leagues)
        }
        Command::Ranking { league_id } => {
            print_json(&container.get_league_ranking().execute(&league_id).await?)
        }
        Command::Stats { prediction_id } => {
            print_json(&container.get_prediction_stats().execute(&prediction_id).await?)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(config.log_level(), cli.verbose);
    } else {
        logger::init_cli_logger(config.log_level(), cli.verbose);
    }

    tracing::info!("Starting wc-predictions CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli.command);
    }

    let session = match &cli.token {
        Some(token) => SessionContext::with_token(token.clone()),
        None => SessionContext::new(),
    };

    let container = match AppContainer::from_config_with_session(&config, session) {
        Ok(container) => container,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&container, cli.command).await {
        tracing::error!("❌ Request failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::Domain => 3,
            ErrorCategory::Network => 4,
            ErrorCategory::Configuration => 1,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
