use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use signup_cli::api::SignupClient;
use signup_cli::cli::{
    handle_config_command, handle_prompt_command, handle_submit_command, SubmitArgs,
};
use signup_cli::config::{Settings, SignupPaths};
use signup_cli::prompt::TerminalPrompter;
use signup_cli::wizard::SignupForm;

#[derive(Parser)]
#[command(
    name = "signup",
    version,
    about = "Terminal client for the multi-step signup form",
    long_about = "signup collects credentials, client details (person or company) \
                  and an address over three validated steps, then posts the \
                  registration to the signup API."
)]
struct Cli {
    /// Base URL of the signup API (overrides config.json)
    #[arg(long, env = "SIGNUP_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Fill the form one question at a time
    Prompt,

    /// Validate and submit a signup from flags
    Submit(SubmitArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SignupPaths::new()?;
    let stored = Settings::load_or_create(&paths)?;
    let settings = stored.clone().with_api_base_url(cli.api_url);

    if let Err(e) = signup_cli::logging::init(&paths, &settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let form = SignupForm::with_default_address_type(settings.default_address_type.clone());
    let client = SignupClient::from_settings(&settings);

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let runtime = Runtime::new()?;
            signup_cli::tui::run_tui(form, client, runtime.handle().clone())?;
        }
        Commands::Prompt => {
            let runtime = Runtime::new()?;
            let mut form = form;
            runtime.block_on(handle_prompt_command(&mut TerminalPrompter, &mut form, &client))?;
        }
        Commands::Submit(args) => {
            let runtime = Runtime::new()?;
            if !runtime.block_on(handle_submit_command(args, form, &client))? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config => handle_config_command(&paths, &stored, &settings)?,
    }

    Ok(ExitCode::SUCCESS)
}
