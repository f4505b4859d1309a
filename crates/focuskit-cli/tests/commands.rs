use std::io::Cursor;

use focuskit_cli::commands::{
    self, ReportArgs, ScoreArgs, TakeArgs, parse_responses,
};
use focuskit_cli::config::{FocuskitConfig, OutputFormat};
use focuskit_core::models::response::ResponseOption;
use focuskit_instruments::outcome::AssessmentOutcome;

fn score_args(responses: &str) -> ScoreArgs {
    ScoreArgs {
        responses: responses.to_string(),
        instrument: commands::DEFAULT_INSTRUMENT.to_string(),
        lenient: false,
        structured: false,
        report: ReportArgs {
            output: None,
            template: None,
        },
    }
}

fn run_score(args: &ScoreArgs) -> eyre::Result<String> {
    let mut out = Vec::new();
    commands::score(args, &FocuskitConfig::default(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn parse_accepts_numbers_labels_and_blanks() {
    let parsed = parse_responses("3, never,_, Very Often,").unwrap();
    assert_eq!(
        parsed,
        vec![
            Some(ResponseOption::VeryOften),
            Some(ResponseOption::Never),
            None,
            Some(ResponseOption::VeryOften),
            None,
        ]
    );
    assert!(parse_responses("1,5").is_err());
}

#[test]
fn score_renders_text_report() {
    let text = run_score(&score_args("3,3,3,0,0,0,0,0,0,0,0,0,0,0,0")).unwrap();
    assert!(text.starts_with("ADHD Self-Assessment: Low Likelihood"));
    assert!(text.contains("Overall score: 9 / 45"));
}

#[test]
fn score_json_output_deserializes() {
    let mut args = score_args("2,2,2,2,2,2,2,2,2,2,2,2,2,2,2");
    args.report.output = Some(OutputFormat::Json);

    let json = run_score(&args).unwrap();
    let outcome: AssessmentOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome.score.total, 30);
    assert_eq!(outcome.classification.label, "Moderate Likelihood");
}

#[test]
fn strict_score_rejects_gaps() {
    let err = run_score(&score_args("3,3,_,0,0,0,0,0,0,0,0,0,0,0,0")).unwrap_err();
    assert!(err.to_string().contains("question 3 is unanswered"));
}

#[test]
fn lenient_score_counts_gaps_as_zero() {
    let mut args = score_args("3,3,_,0,0,0,0,0,0,0,0,0,0,0,0");
    args.lenient = true;
    let text = run_score(&args).unwrap();
    assert!(text.contains("Overall score: 6 / 45"));
    assert!(text.contains("Answered 14 of 15 questions"));
}

#[test]
fn score_rejects_wrong_length() {
    let err = run_score(&score_args("3,3,3")).unwrap_err();
    assert!(err.to_string().contains("expected 15 responses, got 3"));
}

#[test]
fn structured_output_lists_answers() {
    let mut args = score_args("0,1,2,3,0,1,2,3,0,1,2,3,0,1,2");
    args.structured = true;
    let text = run_score(&args).unwrap();
    assert!(text.starts_with("## ADHD Self-Assessment"));
    assert!(text.contains("### Hyperactivity"));
    assert!(text.contains("Very Often (3)"));
}

#[test]
fn custom_template_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("short.txt");
    std::fs::write(&template, "{{ label }} ({{ total }}/{{ max_total }})").unwrap();

    let mut args = score_args("1,1,1,1,1,1,1,1,1,1,1,1,1,1,1");
    args.report.template = Some(template);
    assert_eq!(run_score(&args).unwrap(), "Low Likelihood (15/45)");
}

#[test]
fn questions_lists_bank() {
    let mut out = Vec::new();
    commands::questions(commands::DEFAULT_INSTRUMENT, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("ADHD Self-Assessment (15 questions)"));
    assert!(text.contains(" 3. [Memory] How often do you have problems remembering"));
    assert!(text.contains("15. [Impulsivity]"));
}

#[test]
fn unknown_instrument_is_reported() {
    let mut out = Vec::new();
    let err = commands::questions("nope", &mut out).unwrap_err();
    assert!(err.to_string().contains("unknown instrument: nope"));
}

#[test]
fn take_prints_report_after_completion() {
    let script: String = std::iter::repeat("0\nn\n").take(15).collect();
    let args = TakeArgs {
        instrument: commands::DEFAULT_INSTRUMENT.to_string(),
        lenient: false,
        report: ReportArgs {
            output: None,
            template: None,
        },
    };

    let mut out = Vec::new();
    commands::take(&args, &FocuskitConfig::default(), Cursor::new(script), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("ADHD Self-Assessment: Low Likelihood"));
    assert!(text.contains("Overall score: 0 / 45"));
}

#[test]
fn structured_output_rejects_wrong_length() {
    let mut args = score_args("0,1,2");
    args.structured = true;
    let err = run_score(&args).unwrap_err();
    assert!(err.to_string().contains("expected 15 responses, got 3"));
}
