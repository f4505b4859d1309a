use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{self, ScoreArgs, TakeArgs};
use crate::config::{self, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "focuskit",
    about = "Take and score the ADHD self-assessment screener from the terminal",
    version
)]
struct Cli {
    /// Path to the config file
    #[arg(long, env = "FOCUSKIT_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    json_logs: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the questionnaire interactively (default command)
    Take(TakeArgs),
    /// Score a complete response vector without prompting
    Score(ScoreArgs),
    /// List the questions of an instrument
    Questions {
        #[arg(long, default_value = commands::DEFAULT_INSTRUMENT)]
        instrument: String,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Write a fresh config file
    Init {
        /// Default to lenient navigation
        #[arg(long)]
        lenient: bool,
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(json: bool) {
    // stdout carries the questionnaire, so logs go to stderr.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config_path = config::resolve_path(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_else(|| {
        Command::Take(TakeArgs {
            instrument: commands::DEFAULT_INSTRUMENT.to_string(),
            lenient: false,
            report: commands::ReportArgs {
                output: None,
                template: None,
            },
        })
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Take(args) => {
            let config = config::load_config(&config_path)?;
            commands::take(&args, &config, io::stdin().lock(), &mut out)
        }
        Command::Score(args) => {
            let config = config::load_config(&config_path)?;
            commands::score(&args, &config, &mut out)
        }
        Command::Questions { instrument } => commands::questions(&instrument, &mut out),
        Command::Config {
            command: ConfigCommand::Show,
        } => commands::show_config(&config_path, &mut out),
        Command::Config {
            command:
                ConfigCommand::Init {
                    lenient,
                    output,
                    force,
                },
        } => commands::init_config(&config_path, lenient, output, force, &mut out),
    }
}
