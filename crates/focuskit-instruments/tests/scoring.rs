use focuskit_core::models::category::Category;
use focuskit_core::models::response::ResponseOption;
use focuskit_instruments::error::AssessmentError;
use focuskit_instruments::instruments::adhd_self_report;
use focuskit_instruments::scoring::{self, CategoryBand, CategoryScore};

fn values(raw: &[u8]) -> Vec<Option<u8>> {
    raw.iter().copied().map(Some).collect()
}

#[test]
fn all_zero_scores_zero() {
    let result = scoring::score_values(&values(&[0; 15]), adhd_self_report::all()).unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.max_total, 45);
    assert!(result.is_complete());
}

#[test]
fn all_three_scores_maximum() {
    let result = scoring::score_values(&values(&[3; 15]), adhd_self_report::all()).unwrap();
    assert_eq!(result.total, 45);
    for category in &result.category_scores {
        assert_eq!(category.score, category.max);
        assert_eq!(category.band(), CategoryBand::Elevated);
    }
}

#[test]
fn first_three_answered_high_lands_in_organization_and_memory() {
    let raw = [3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    let result = scoring::score_values(&values(&raw), adhd_self_report::all()).unwrap();

    assert_eq!(result.total, 9);
    assert_eq!(
        result.category(Category::Organization),
        Some(&CategoryScore {
            category: Category::Organization,
            score: 6,
            max: 9,
        })
    );
    assert_eq!(result.category(Category::Memory).unwrap().score, 3);
    assert_eq!(result.category(Category::Memory).unwrap().max, 3);
    assert_eq!(result.category(Category::Attention).unwrap().score, 0);
    assert_eq!(result.category(Category::Attention).unwrap().max, 15);
    assert_eq!(result.category(Category::Hyperactivity).unwrap().max, 15);
    assert_eq!(result.category(Category::Impulsivity).unwrap().max, 3);
}

#[test]
fn categories_reported_in_declaration_order() {
    let result = scoring::score_values(&values(&[1; 15]), adhd_self_report::all()).unwrap();
    let order: Vec<Category> = result.category_scores.iter().map(|c| c.category).collect();
    assert_eq!(order, Category::ALL.to_vec());
}

#[test]
fn unanswered_entries_count_as_zero() {
    let mut responses = vec![None; 15];
    responses[4] = Some(ResponseOption::Often);
    let result = scoring::score(&responses, adhd_self_report::all()).unwrap();

    assert_eq!(result.total, 2);
    assert_eq!(result.answered, 1);
    assert!(!result.is_complete());
    assert_eq!(result.category(Category::Hyperactivity).unwrap().score, 2);
}

#[test]
fn length_mismatch_is_invalid_input() {
    let err = scoring::score(&[Some(ResponseOption::Never)], adhd_self_report::all()).unwrap_err();
    assert!(matches!(err, AssessmentError::InvalidInput(msg) if msg.contains("expected 15")));
}

#[test]
fn out_of_scale_value_is_invalid_input() {
    let mut raw = values(&[0; 15]);
    raw[7] = Some(4);
    let err = scoring::score_values(&raw, adhd_self_report::all()).unwrap_err();
    assert!(matches!(err, AssessmentError::InvalidInput(_)));
}

#[test]
fn category_band_thresholds() {
    assert_eq!(CategoryBand::from_percentage(0.0), CategoryBand::Minimal);
    assert_eq!(CategoryBand::from_percentage(29.9), CategoryBand::Minimal);
    assert_eq!(CategoryBand::from_percentage(30.0), CategoryBand::Mild);
    assert_eq!(CategoryBand::from_percentage(50.0), CategoryBand::Moderate);
    assert_eq!(CategoryBand::from_percentage(69.9), CategoryBand::Moderate);
    assert_eq!(CategoryBand::from_percentage(70.0), CategoryBand::Elevated);
}

#[test]
fn empty_category_has_zero_percentage() {
    let empty = CategoryScore {
        category: Category::Memory,
        score: 0,
        max: 0,
    };
    assert_eq!(empty.percentage(), 0.0);
}
