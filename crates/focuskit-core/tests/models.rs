use focuskit_core::error::CoreError;
use focuskit_core::models::category::Category;
use focuskit_core::models::response::ResponseOption;

#[test]
fn response_values_follow_frequency_order() {
    let values: Vec<u8> = ResponseOption::ALL.iter().map(|o| o.value()).collect();
    assert_eq!(values, vec![0, 1, 2, 3]);
    assert!(ResponseOption::Never < ResponseOption::VeryOften);
}

#[test]
fn response_from_u8_rejects_out_of_scale() {
    assert_eq!(ResponseOption::try_from(2), Ok(ResponseOption::Often));
    assert_eq!(
        ResponseOption::try_from(4),
        Err(CoreError::InvalidResponseValue(4))
    );
}

#[test]
fn response_parses_labels_and_numbers() {
    assert_eq!("3".parse::<ResponseOption>(), Ok(ResponseOption::VeryOften));
    assert_eq!("very often".parse::<ResponseOption>(), Ok(ResponseOption::VeryOften));
    assert_eq!("Very_Often".parse::<ResponseOption>(), Ok(ResponseOption::VeryOften));
    assert_eq!(" sometimes ".parse::<ResponseOption>(), Ok(ResponseOption::Sometimes));
    assert!(matches!(
        "always".parse::<ResponseOption>(),
        Err(CoreError::UnknownResponseOption(_))
    ));
    assert_eq!(
        "9".parse::<ResponseOption>(),
        Err(CoreError::InvalidResponseValue(9))
    );
}

#[test]
fn response_labels_match_display() {
    assert_eq!(ResponseOption::VeryOften.to_string(), "Very Often");
    assert_eq!(ResponseOption::Never.label(), "Never");
}

#[test]
fn category_round_trips_through_name() {
    for category in Category::ALL {
        assert_eq!(category.to_string().parse::<Category>(), Ok(category));
    }
    assert_eq!("attention".parse::<Category>(), Ok(Category::Attention));
    assert!(matches!(
        "focus".parse::<Category>(),
        Err(CoreError::UnknownCategory(name)) if name == "focus"
    ));
}

#[test]
fn response_serializes_snake_case() {
    let json = serde_json::to_string(&ResponseOption::VeryOften).unwrap();
    assert_eq!(json, "\"very_often\"");
}
