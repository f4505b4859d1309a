use std::io::{BufRead, Write};

use focuskit_core::models::response::ResponseOption;
use focuskit_instruments::outcome::AssessmentOutcome;
use focuskit_instruments::session::{AssessmentSession, SessionState, Step};

const HELP: &str = "Answer with 0-3 or an option name, then press Enter (or n) to continue. \
p = previous, r = restart, q = quit.";

enum Input {
    Answer(ResponseOption),
    Next,
    Previous,
    Restart,
    Quit,
    Help,
}

fn parse_input(line: &str) -> Result<Input, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" | "n" | "next" => Ok(Input::Next),
        "p" | "prev" | "previous" | "back" => Ok(Input::Previous),
        "r" | "restart" => Ok(Input::Restart),
        "q" | "quit" | "exit" => Ok(Input::Quit),
        "?" | "h" | "help" => Ok(Input::Help),
        _ => trimmed
            .parse::<ResponseOption>()
            .map(Input::Answer)
            .map_err(|e| e.to_string()),
    }
}

/// Drive `session` from line-oriented input until it completes, the user
/// quits, or input runs out.
///
/// Returns the outcome on completion. Rejected operations are reported to
/// the user and the loop carries on.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut AssessmentSession,
    input: R,
    out: &mut W,
) -> eyre::Result<Option<AssessmentOutcome>> {
    if session.state() != SessionState::InProgress {
        session.start();
    }

    let instrument = session.instrument();
    writeln!(out, "{}", instrument.name())?;
    writeln!(
        out,
        "{} questions. This is a screening tool, not a diagnostic test.",
        session.question_count()
    )?;
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    loop {
        print_question(session, out)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            tracing::debug!("input closed before completion");
            return Ok(None);
        };

        let command = match parse_input(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "! {message}")?;
                continue;
            }
        };

        let result = match command {
            Input::Answer(option) => session.answer_option(option),
            Input::Next => match session.next() {
                Ok(Step::Completed) => return Ok(session.outcome().cloned()),
                Ok(Step::Question(_)) => Ok(()),
                Err(e) => Err(e),
            },
            Input::Previous => session.previous().map(|_| ()),
            Input::Restart => {
                session.reset();
                session.start();
                writeln!(out, "Restarted.")?;
                Ok(())
            }
            Input::Quit => {
                writeln!(out, "Assessment abandoned; nothing was saved.")?;
                return Ok(None);
            }
            Input::Help => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
        };

        if let Err(e) = result {
            writeln!(out, "! {e}")?;
        }
    }
}

fn print_question<W: Write>(session: &AssessmentSession, out: &mut W) -> eyre::Result<()> {
    let Some(question) = session.current_question() else {
        return Ok(());
    };
    let (number, count) = session.position();

    writeln!(out)?;
    writeln!(
        out,
        "Question {number} of {count} ({}% complete) [{}]",
        session.progress_percent(),
        question.category
    )?;
    writeln!(out, "{}", question.text)?;
    for option in ResponseOption::ALL {
        let marker = if session.current_response() == Some(option) {
            "*"
        } else {
            " "
        };
        writeln!(out, " {marker} {}) {}", option.value(), option.label())?;
    }
    if session.is_last_question() {
        writeln!(out, "(this is the last question; continue to see results)")?;
    }
    Ok(())
}
