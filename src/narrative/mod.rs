//! Free-text feedback from a language model. The model is a black box behind [`Narrator`];
//! a failed call never fails the command that asked for it.

mod openai;

use anyhow::Result;

use crate::aggregate::ForecastSummary;
use crate::ui::util::{format_won, format_won_f};

pub(crate) use openai::ChatNarrator;

/// Persona the model is asked to play.
pub(crate) const SYSTEM_PROMPT: &str = "You are the drill instructor of a spending boot camp.";

pub(crate) trait Narrator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Feedback {
    Text(String),
    /// Why no text could be produced, fit to show the user.
    Unavailable(String),
}

pub(crate) fn request_feedback(narrator: &dyn Narrator, prompt: &str) -> Feedback {
    match narrator.generate(prompt) {
        Ok(text) => Feedback::Text(text.trim().to_string()),
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "narrative feedback failed");
            Feedback::Unavailable(format!("{e:#}"))
        }
    }
}

/// Figures the instructor must judge, and the exact shape of the answer wanted.
pub(crate) fn build_prompt(forecast: &ForecastSummary, months: u32) -> String {
    let average = format_won_f(forecast.average);
    let projected = format_won_f(forecast.projection(months));
    let ceiling = format_won_f(forecast.average * 0.8);
    let span = match forecast.recent_months() {
        0 => "with no months recorded".to_string(),
        1 => "over the last month".to_string(),
        n => format!("over the last {n} months"),
    };
    let top = if forecast.top_majors.is_empty() {
        "- (no spending recorded)".to_string()
    } else {
        forecast
            .top_majors
            .iter()
            .map(|(major, cost)| format!("- {major}: {}", format_won(*cost)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "You are the drill instructor of a spending boot camp.
Never use vague language.

[Objective figures]
- Average monthly spending {span}: {average}
- Projected total if this holds for {months} months: {projected}
- Top spending categories:
{top}

Answer only in the format below.

[Verdict]
Current spending averages {average} a month and is concentrated in the top categories.

[Warning]
If this pattern lasts {months} months you will spend {projected} in total,
and with unchanged income financial pressure arrives within {months} months.

[Orders]
1. From next month, cut the largest category by at least 20%.
2. Keep total monthly spending at or below {ceiling}.
3. Log every unnecessary purchase for 7 days, then block it.

Every sentence must be assertive."
    )
}
