use std::sync::LazyLock;

use focuskit_core::models::category::Category;
use focuskit_core::models::question::Question;

use crate::Instrument;

/// Adult ADHD self-report screener, modelled on the ASRS.
/// 15 items, each rated 0–3 (Never … Very Often). Total 0–45.
pub struct AdhdSelfReport;

const DISCLAIMER: &str = "This self-assessment is a screening tool based on established ADHD \
criteria, but it is NOT a diagnostic test. Only qualified healthcare professionals can provide \
an official ADHD diagnosis. If you're concerned about your symptoms, please schedule an \
appointment with a psychiatrist, psychologist, or your primary care provider.";

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    use Category::*;

    let items = [
        (
            "How often do you have trouble wrapping up final details once the challenging parts of a project are done?",
            Organization,
        ),
        (
            "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
            Organization,
        ),
        (
            "How often do you have problems remembering appointments or obligations?",
            Memory,
        ),
        (
            "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
            Attention,
        ),
        (
            "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
            Hyperactivity,
        ),
        (
            "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
            Hyperactivity,
        ),
        (
            "How often do you make careless mistakes when you have to work on a boring or difficult project?",
            Attention,
        ),
        (
            "How often do you have difficulty keeping your attention when you are doing boring or repetitive work?",
            Attention,
        ),
        (
            "How often do you have difficulty concentrating on what people say to you, even when they are speaking to you directly?",
            Attention,
        ),
        (
            "How often do you misplace or have difficulty finding things at home or at work?",
            Organization,
        ),
        (
            "How often are you distracted by activity or noise around you?",
            Attention,
        ),
        (
            "How often do you leave your seat in meetings or other situations in which you are expected to remain seated?",
            Hyperactivity,
        ),
        ("How often do you feel restless or fidgety?", Hyperactivity),
        (
            "How often do you have difficulty unwinding and relaxing when you have time to yourself?",
            Hyperactivity,
        ),
        (
            "How often do you find yourself talking too much when you are in social situations?",
            Impulsivity,
        ),
    ];

    items
        .iter()
        .zip(1..)
        .map(|((text, category), id)| Question::new(id, text, *category))
        .collect()
});

/// The fixed question bank, in presentation order.
pub fn all() -> &'static [Question] {
    &QUESTIONS
}

impl Instrument for AdhdSelfReport {
    fn id(&self) -> &str {
        "adhd_self_report"
    }

    fn name(&self) -> &str {
        "ADHD Self-Assessment"
    }

    fn questions(&self) -> &[Question] {
        all()
    }

    fn disclaimer(&self) -> &str {
        DISCLAIMER
    }
}
