mod config;
mod display;
mod groundstation;
mod prompt;
mod reconcile;
mod session;
mod window;

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::config::Config;
use crate::groundstation::AwsGroundStation;
use crate::prompt::{PromptError, TerminalPrompter};
use crate::session::{Action, Session, SessionError};
use crate::window::WindowRules;

#[derive(Parser)]
#[command(name = "gs-contact")]
#[command(about = "Schedule, view and cancel AWS Ground Station contacts")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<String>,
    /// AWS region, overrides the configuration file
    #[arg(long, global = true)]
    region: Option<String>,
    /// Named AWS profile, overrides the configuration file
    #[arg(long, global = true)]
    profile: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Reserve contacts on available passes
    Schedule,
    /// List contacts
    View {
        /// Print the contacts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cancel scheduled contacts
    Cancel,
    /// Validate a configuration file
    CheckConfig { config: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let action = match cli.command.unwrap_or(Commands::Menu) {
        Commands::CheckConfig { config } => return check_config(&config),
        Commands::Menu => None,
        Commands::Schedule => Some(Action::Schedule),
        Commands::View { json } => Some(Action::View { json }),
        Commands::Cancel => Some(Action::Cancel),
    };

    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    config.override_aws(cli.region, cli.profile);

    let api = AwsGroundStation::connect(
        config.aws.region.clone(),
        config.aws.profile.clone(),
        config.query.page_size,
    )
    .await;
    let rules = WindowRules {
        today: Utc::now().date_naive(),
        horizon_days: config.scheduling.horizon_days(),
        history_days: config.scheduling.history_days(),
    };

    let mut prompter = TerminalPrompter::new();
    let mut session = Session::new(&api, &mut prompter, rules);
    let result = match action {
        Some(action) => session.run(action).await,
        None => session.run_menu().await,
    };

    match result {
        Ok(()) | Err(SessionError::Prompt(PromptError::Interrupted)) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("session failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn check_config(path: &str) -> ExitCode {
    match Config::from_file(path) {
        Ok(config) => {
            println!("Config is valid");
            println!(
                "  aws.region:          {}",
                config.aws.region.as_deref().unwrap_or("<default chain>")
            );
            println!(
                "  aws.profile:         {}",
                config.aws.profile.as_deref().unwrap_or("<default>")
            );
            println!(
                "  scheduling.horizon:  {} ({} days)",
                humantime::format_duration(config.scheduling.horizon),
                config.scheduling.horizon_days()
            );
            println!(
                "  scheduling.history:  {} ({} days)",
                humantime::format_duration(config.scheduling.history),
                config.scheduling.history_days()
            );
            println!("  query.page_size:     {}", config.query.page_size);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {}", e);
            ExitCode::FAILURE
        }
    }
}
