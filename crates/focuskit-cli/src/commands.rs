use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use focuskit_core::models::response::ResponseOption;
use focuskit_export::render;
use focuskit_instruments::error::AssessmentError;
use focuskit_instruments::outcome::{self, AssessmentOutcome};
use focuskit_instruments::session::{AssessmentSession, NavigationPolicy};
use focuskit_instruments::get_instrument;

use crate::config::{self, FocuskitConfig, OutputFormat};
use crate::interactive;

pub const DEFAULT_INSTRUMENT: &str = "adhd_self_report";

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,
    /// Render text output with this Tera template instead of the built-in one
    #[arg(long)]
    pub template: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct TakeArgs {
    /// Instrument to administer
    #[arg(long, default_value = DEFAULT_INSTRUMENT)]
    pub instrument: String,
    /// Allow moving past unanswered questions (they score as 0)
    #[arg(long)]
    pub lenient: bool,
    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Comma-separated responses in question order: 0-3 or option names,
    /// `_` for unanswered
    #[arg(long)]
    pub responses: String,
    #[arg(long, default_value = DEFAULT_INSTRUMENT)]
    pub instrument: String,
    /// Accept unanswered items
    #[arg(long)]
    pub lenient: bool,
    /// Print the answers as structured prompt context instead of a report
    #[arg(long)]
    pub structured: bool,
    #[command(flatten)]
    pub report: ReportArgs,
}

/// Parse `"3,3,_,Often"` into a response vector.
pub fn parse_responses(raw: &str) -> Result<Vec<Option<ResponseOption>>, AssessmentError> {
    raw.split(',')
        .map(str::trim)
        .map(|token| match token {
            "" | "_" | "-" => Ok(None),
            value => value
                .parse::<ResponseOption>()
                .map(Some)
                .map_err(AssessmentError::from),
        })
        .collect()
}

fn policy_for(lenient: bool, config: &FocuskitConfig) -> NavigationPolicy {
    if lenient {
        NavigationPolicy::Lenient
    } else {
        config.navigation
    }
}

pub fn take<R: BufRead, W: Write>(
    args: &TakeArgs,
    config: &FocuskitConfig,
    input: R,
    out: &mut W,
) -> eyre::Result<()> {
    let instrument = get_instrument(&args.instrument)?;
    let mut session =
        AssessmentSession::new(instrument)?.with_policy(policy_for(args.lenient, config));

    match interactive::run_session(&mut session, input, out)? {
        Some(outcome) => {
            writeln!(out)?;
            emit(&outcome, &args.report, config, out)
        }
        None => Ok(()),
    }
}

pub fn score<W: Write>(args: &ScoreArgs, config: &FocuskitConfig, out: &mut W) -> eyre::Result<()> {
    let instrument = get_instrument(&args.instrument)?;
    let responses = parse_responses(&args.responses)?;

    if policy_for(args.lenient, config) == NavigationPolicy::Strict
        && let Some(missing) = responses.iter().position(Option::is_none)
    {
        return Err(AssessmentError::InvalidInput(format!(
            "question {} is unanswered (pass --lenient to score it as 0)",
            missing + 1
        ))
        .into());
    }

    if args.structured {
        write!(out, "{}", instrument.to_structured_input(&responses)?)?;
        return Ok(());
    }

    let outcome = outcome::evaluate(instrument.as_ref(), &responses)?;
    emit(&outcome, &args.report, config, out)
}

pub fn questions<W: Write>(instrument_id: &str, out: &mut W) -> eyre::Result<()> {
    let instrument = get_instrument(instrument_id)?;
    writeln!(out, "{} ({} questions)", instrument.name(), instrument.questions().len())?;
    for question in instrument.questions() {
        writeln!(out, "{:>2}. [{}] {}", question.id, question.category, question.text)?;
    }
    Ok(())
}

pub fn show_config<W: Write>(path: &Path, out: &mut W) -> eyre::Result<()> {
    let config = config::load_config(path)?;
    writeln!(out, "# {}", path.display())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
    Ok(())
}

pub fn init_config<W: Write>(
    path: &Path,
    lenient: bool,
    output: Option<OutputFormat>,
    force: bool,
    out: &mut W,
) -> eyre::Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }

    let mut config = FocuskitConfig::default();
    if lenient {
        config.navigation = NavigationPolicy::Lenient;
    }
    if let Some(output) = output {
        config.output = output;
    }
    config::save_config(path, &config)?;
    writeln!(out, "wrote {}", path.display())?;
    Ok(())
}

fn emit<W: Write>(
    outcome: &AssessmentOutcome,
    args: &ReportArgs,
    config: &FocuskitConfig,
    out: &mut W,
) -> eyre::Result<()> {
    match args.output.unwrap_or(config.output) {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(outcome)?)?;
        }
        OutputFormat::Text => {
            let rendered = match &args.template {
                Some(path) => {
                    let content = std::fs::read_to_string(path).map_err(|e| {
                        eyre::eyre!("failed to read template {}: {e}", path.display())
                    })?;
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "template".to_string());
                    render::render_template(&name, &content, outcome)?
                }
                None => render::render_report(outcome)?,
            };
            write!(out, "{rendered}")?;
        }
    }
    Ok(())
}
