//! `prepchat chat` — the interactive session loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use prepchat_core::Session;
use prepchat_llms::Provider;

use crate::driver::submit_turn;
use crate::output;
use crate::topics::{prompt_for, TOPICS};

use super::{describe_attachment, guardrail_from_env, load_attachment, provider_from_env};

pub async fn handle(
    model: Option<String>,
    guardrail: bool,
    file: Option<String>,
) -> Result<()> {
    let provider = provider_from_env(model)?;
    let guardrail = guardrail_from_env(guardrail);
    let mut session = Session::new();

    output::header("prepchat — your study companion for AWS and Scrum certifications");
    output::dim("Ask anything, or use /file <path>, /topics, /clear, /new, /quit.");
    println!();

    if let Some(path) = file {
        attach(&mut session, &path);
    }

    let stdin = std::io::stdin();
    loop {
        print!("{}", output::user_prompt());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Input::Quit => break,
            Input::New => {
                session.reset();
                output::success("Started a new session.");
            }
            Input::Clear => {
                session.clear_attachment();
                output::success("Cleared the pending attachment.");
            }
            Input::File(path) => attach(&mut session, &path),
            Input::Topics => {
                let rows: Vec<(usize, &str)> = TOPICS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, _))| (i + 1, *title))
                    .collect();
                output::topics_table(&rows);
                output::dim("Use /topics <n> to ask about one.");
            }
            Input::Topic(index) => match prompt_for(index) {
                Some(prompt) => {
                    output::dim(prompt);
                    ask(&mut session, &provider, guardrail.as_ref(), prompt).await;
                }
                None => output::warning(&format!("No topic #{index}; see /topics.")),
            },
            Input::Unknown(cmd) => {
                output::warning(&format!("Unknown command: {cmd}"));
            }
            Input::Message(text) => {
                ask(&mut session, &provider, guardrail.as_ref(), &text).await;
            }
        }
    }

    Ok(())
}

async fn ask(
    session: &mut Session,
    provider: &dyn Provider,
    guardrail: Option<&prepchat_llms::GuardrailConfig>,
    text: &str,
) {
    let spinner = output::spinner("Thinking...");
    let outcome = submit_turn(session, provider, guardrail, text).await;
    spinner.finish_and_clear();
    output::assistant(outcome.display_text());
}

fn attach(session: &mut Session, path: &str) {
    match load_attachment(path) {
        Ok(attachment) => {
            describe_attachment(&attachment);
            session.attach(attachment);
        }
        Err(e) => output::warning(&e.to_string()),
    }
}

enum Input {
    Message(String),
    File(String),
    Topics,
    Topic(usize),
    Clear,
    New,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Input {
    if !line.starts_with('/') {
        return Input::Message(line.to_string());
    }

    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "/quit" | "/exit" => Input::Quit,
        "/new" => Input::New,
        "/clear" => Input::Clear,
        "/file" if !rest.is_empty() => Input::File(rest.to_string()),
        "/file" => Input::Unknown("/file needs a path".to_string()),
        "/topics" if rest.is_empty() => Input::Topics,
        "/topics" => match rest.parse::<usize>() {
            Ok(index) => Input::Topic(index),
            Err(_) => Input::Unknown(format!("/topics {rest}")),
        },
        other => Input::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_message() {
        assert!(matches!(
            parse_command("what is EC2?"),
            Input::Message(text) if text == "what is EC2?"
        ));
    }

    #[test]
    fn test_parse_file_command() {
        assert!(matches!(
            parse_command("/file notes with spaces.pdf"),
            Input::File(path) if path == "notes with spaces.pdf"
        ));
        assert!(matches!(parse_command("/file"), Input::Unknown(_)));
    }

    #[test]
    fn test_parse_topics() {
        assert!(matches!(parse_command("/topics"), Input::Topics));
        assert!(matches!(parse_command("/topics 3"), Input::Topic(3)));
        assert!(matches!(parse_command("/topics abc"), Input::Unknown(_)));
    }

    #[test]
    fn test_parse_session_commands() {
        assert!(matches!(parse_command("/quit"), Input::Quit));
        assert!(matches!(parse_command("/exit"), Input::Quit));
        assert!(matches!(parse_command("/new"), Input::New));
        assert!(matches!(parse_command("/clear"), Input::Clear));
        assert!(matches!(parse_command("/bogus"), Input::Unknown(_)));
    }
}
