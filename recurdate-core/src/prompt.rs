//! Natural-language prompt asking a text model for task ideas that fit a rule.

use crate::calendar::{format_long, weekday_name};
use crate::spec::{Frequency, MonthlyMode, RecurrenceSpec};
use crate::summary::nth_weekday_phrase;

const PREAMBLE: &str =
    "Suggest 5 common recurring tasks or reminders for a recurrence pattern that is ";

const CLOSING: &str = " Provide the suggestions as a numbered list.";

/// Build the suggestion prompt for `spec`.
pub fn build_prompt(spec: &RecurrenceSpec) -> String {
    let interval = spec.effective_interval();
    let mut prompt = String::from(PREAMBLE);

    prompt.push_str(&format!("every {} {}", interval, spec.frequency.unit(interval)));

    match spec.frequency {
        Frequency::Daily => prompt.push('.'),
        Frequency::Weekly => {
            let names: Vec<&str> = spec
                .days_of_week
                .iter()
                .filter_map(|d| weekday_name(*d))
                .collect();
            if names.is_empty() {
                prompt.push('.');
            } else {
                prompt.push_str(&format!(", specifically on {}.", names.join(" and ")));
            }
        }
        Frequency::Monthly => match spec.monthly_mode {
            MonthlyMode::DayOfMonth => {
                prompt.push_str(&format!(", on day {} of the month.", spec.day_of_month));
            }
            MonthlyMode::NthWeekday => {
                prompt.push_str(&format!(
                    ", on the {} of the month.",
                    nth_weekday_phrase(spec.nth, spec.weekday_in_month)
                ));
            }
        },
        Frequency::Yearly => match spec.start {
            Some(start) => prompt.push_str(&format!(", starting on {}.", format_long(start))),
            None => prompt.push('.'),
        },
    }

    prompt.push_str(CLOSING);
    prompt
}
