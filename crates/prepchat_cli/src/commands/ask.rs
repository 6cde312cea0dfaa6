//! `prepchat ask` — one-shot question.

use anyhow::Result;
use prepchat_core::Session;

use crate::driver::submit_turn;
use crate::output;

use super::{describe_attachment, guardrail_from_env, load_attachment, provider_from_env};

pub async fn handle(
    question: String,
    file: Option<String>,
    model: Option<String>,
    guardrail: bool,
) -> Result<()> {
    let provider = provider_from_env(model)?;
    let guardrail = guardrail_from_env(guardrail);
    let mut session = Session::new();

    if let Some(path) = file {
        let attachment = load_attachment(&path)?;
        describe_attachment(&attachment);
        session.attach(attachment);
    }

    let spinner = output::spinner("Thinking...");
    let outcome = submit_turn(&mut session, &provider, guardrail.as_ref(), &question).await;
    spinner.finish_and_clear();

    output::assistant(outcome.display_text());
    Ok(())
}
