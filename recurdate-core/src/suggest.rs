//! Task suggestions for a recurrence rule.
//!
//! The text model behind a [`Suggester`] is injected by the caller. Nothing in
//! here touches expansion; suggestions are free text for display only.

use std::future::Future;

use crate::error::RecurResult;
use crate::prompt::build_prompt;
use crate::spec::RecurrenceSpec;

/// Something that turns a prompt into free text, usually over the network.
pub trait Suggester {
    fn suggest(&self, prompt: &str) -> impl Future<Output = RecurResult<String>> + Send;
}

/// Build the prompt for `spec` and ask `suggester` for task ideas.
pub async fn suggest_tasks<S: Suggester>(suggester: &S, spec: &RecurrenceSpec) -> RecurResult<String> {
    let prompt = build_prompt(spec);
    tracing::debug!(prompt_len = prompt.len(), "Requesting task suggestions");
    suggester.suggest(&prompt).await
}
