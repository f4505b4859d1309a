use focuskit_core::models::category::Category;
use focuskit_instruments::instruments::adhd_self_report::{self, AdhdSelfReport};
use focuskit_instruments::error::AssessmentError;
use focuskit_instruments::{Instrument, all_instruments, get_instrument};

#[test]
fn bank_has_fifteen_questions_in_id_order() {
    let questions = adhd_self_report::all();
    assert_eq!(questions.len(), 15);
    let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=15).collect::<Vec<_>>());
}

#[test]
fn category_counts_match_fixed_assignment() {
    let questions = adhd_self_report::all();
    let count = |c: Category| questions.iter().filter(|q| q.category == c).count();

    assert_eq!(count(Category::Organization), 3);
    assert_eq!(count(Category::Memory), 1);
    assert_eq!(count(Category::Attention), 5);
    assert_eq!(count(Category::Hyperactivity), 5);
    assert_eq!(count(Category::Impulsivity), 1);
}

#[test]
fn organization_questions_are_one_two_and_ten() {
    let ids: Vec<u32> = adhd_self_report::all()
        .iter()
        .filter(|q| q.category == Category::Organization)
        .map(|q| q.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 10]);
}

#[test]
fn registry_finds_screener_by_id() {
    assert_eq!(all_instruments().len(), 1);
    let instrument = get_instrument("adhd_self_report").unwrap();
    assert_eq!(instrument.name(), "ADHD Self-Assessment");
    assert_eq!(instrument.max_total(), 45);
    assert!(instrument.disclaimer().contains("NOT a diagnostic test"));
}

#[test]
fn registry_rejects_unknown_id() {
    assert!(matches!(
        get_instrument("phq9"),
        Err(AssessmentError::UnknownInstrument(id)) if id == "phq9"
    ));
}

#[test]
fn structured_input_groups_answers_by_category() {
    use focuskit_core::models::response::ResponseOption;

    let mut responses = vec![None; 15];
    responses[2] = Some(ResponseOption::Often);
    responses[14] = Some(ResponseOption::VeryOften);
    responses[0] = Some(ResponseOption::Never);

    let text = AdhdSelfReport.to_structured_input(&responses).unwrap();
    assert!(text.starts_with("## ADHD Self-Assessment\n\n"));

    let organization = text.find("### Organization").unwrap();
    let memory = text.find("### Memory").unwrap();
    let impulsivity = text.find("### Impulsivity").unwrap();
    assert!(organization < memory && memory < impulsivity);
    assert!(!text.contains("### Attention"));
    assert!(text.contains("remembering appointments or obligations? Often (2)"));
    assert!(text.contains("talking too much when you are in social situations? Very Often (3)"));
}

#[test]
fn structured_input_rejects_misaligned_responses() {
    use focuskit_core::models::response::ResponseOption;

    let short = vec![Some(ResponseOption::Often); 14];
    assert!(matches!(
        AdhdSelfReport.to_structured_input(&short),
        Err(AssessmentError::InvalidInput(msg)) if msg == "expected 15 responses, got 14"
    ));

    let long = vec![None; 16];
    assert!(AdhdSelfReport.to_structured_input(&long).is_err());
}
