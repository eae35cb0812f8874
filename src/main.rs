use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regform::config::{AppConfig, Overrides};
use regform::core::{FieldId, FormState, SubmitDecision};
use regform::logging::{self, LogSink};
use regform::runtime::Runtime;
use regform::state::AppState;
use regform::submit::Submitter;
use regform::terminal::Terminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "regform", version, about = "Registration form client")]
struct Cli {
    /// Base URL of the registration API.
    #[arg(long, env = "REGFORM_BASE_URL", global = true)]
    base_url: Option<String>,

    /// YAML config file.
    #[arg(long, env = "REGFORM_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[arg(long, env = "REGFORM_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate and submit one registration without the interactive form.
    Submit {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        identity_number: String,
        #[arg(long, default_value = "")]
        email: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        date_of_birth: String,
        /// Print the final form state as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(Overrides {
        base_url: cli.base_url,
        config: cli.config,
        log_file: cli.log_file,
        log_level: cli.log_level,
    })
    .context("failed to load configuration")?;

    let sink = if cli.command.is_some() {
        LogSink::Stderr
    } else {
        LogSink::FileOnly
    };
    logging::init(&config, sink).context("failed to open log file")?;
    log::debug!("using endpoint {}", config.endpoint_url());

    let submitter = Submitter::new(config.endpoint_url());
    match cli.command {
        None => {
            run_interactive(submitter)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Submit {
            name,
            identity_number,
            email,
            date_of_birth,
            json,
        }) => {
            let mut form = FormState::new();
            form.edit_field(FieldId::Name, name);
            form.edit_field(FieldId::IdentityNumber, identity_number);
            form.edit_field(FieldId::Email, email);
            form.edit_field(FieldId::DateOfBirth, date_of_birth);
            run_once(form, &submitter, json)
        }
    }
}

fn run_interactive(submitter: Submitter) -> Result<()> {
    let terminal = Terminal::new().context("failed to open terminal")?;
    let mut runtime = Runtime::new(AppState::new(), terminal, submitter);
    runtime.run().context("terminal session failed")
}

fn run_once(mut form: FormState, submitter: &Submitter, json: bool) -> Result<ExitCode> {
    let decision = form.submit_with(|data| submitter.submit(data));
    if decision == SubmitDecision::Invalid {
        log::info!("registration rejected by local validation");
    }

    if json {
        let rendered = serde_json::to_string_pretty(&form).context("failed to encode state")?;
        println!("{rendered}");
    } else {
        for (key, message) in form.errors().iter() {
            eprintln!("{key}: {message}");
        }
        if let Some(status) = form.status() {
            println!("{}", status.message());
        }
    }

    let succeeded = form.status().is_some_and(|status| status.is_success());
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
