use serde::Serialize;
use tera::{Context, Tera};

use focuskit_instruments::classification::LikelihoodTier;
use focuskit_instruments::outcome::AssessmentOutcome;
use focuskit_instruments::scoring::CategoryBand;

use crate::error::ExportError;

const DEFAULT_TEMPLATE_NAME: &str = "result.txt";
const DEFAULT_TEMPLATE: &str = include_str!("templates/result.txt.tera");

/// Flattened view of an outcome. Every field is addressable by name in a
/// template.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub instrument_name: String,
    pub label: String,
    /// `low`, `moderate` or `high`, for branching in templates.
    pub tier: &'static str,
    pub total: u32,
    pub max_total: u32,
    pub percentage: f64,
    pub answered: usize,
    pub question_count: usize,
    pub description: String,
    pub recommendations: Vec<String>,
    pub categories: Vec<CategoryLine>,
    pub disclaimer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryLine {
    pub name: String,
    pub score: u32,
    pub max: u32,
    /// Rounded to the nearest whole percent.
    pub percent: u32,
    pub band: &'static str,
}

impl From<&AssessmentOutcome> for ReportContext {
    fn from(outcome: &AssessmentOutcome) -> Self {
        let classification = &outcome.classification;
        Self {
            instrument_name: outcome.instrument_name.clone(),
            label: classification.label.clone(),
            tier: tier_key(classification.tier),
            total: outcome.score.total,
            max_total: outcome.score.max_total,
            percentage: classification.percentage,
            answered: outcome.score.answered,
            question_count: outcome.score.question_count,
            description: classification.description.clone(),
            recommendations: classification.recommendations.clone(),
            categories: outcome
                .score
                .category_scores
                .iter()
                .map(|c| CategoryLine {
                    name: c.category.to_string(),
                    score: c.score,
                    max: c.max,
                    percent: c.percentage().round() as u32,
                    band: band_label(c.band()),
                })
                .collect(),
            disclaimer: outcome.disclaimer.clone(),
        }
    }
}

fn tier_key(tier: LikelihoodTier) -> &'static str {
    match tier {
        LikelihoodTier::Low => "low",
        LikelihoodTier::Moderate => "moderate",
        LikelihoodTier::High => "high",
    }
}

fn band_label(band: CategoryBand) -> &'static str {
    match band {
        CategoryBand::Minimal => "minimal",
        CategoryBand::Mild => "mild",
        CategoryBand::Moderate => "moderate",
        CategoryBand::Elevated => "elevated",
    }
}

/// Render an outcome with the built-in plain-text report template.
pub fn render_report(outcome: &AssessmentOutcome) -> Result<String, ExportError> {
    render_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, outcome)
}

/// Render a Tera template with an outcome.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The [`ReportContext`] fields become the template context variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    outcome: &AssessmentOutcome,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ReportContext::from(outcome))?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}
