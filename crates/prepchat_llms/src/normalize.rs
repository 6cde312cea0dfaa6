//! Conversation normalizer: turns the flat session history into the strictly
//! role-alternating sequence the messages API accepts.
//!
//! The final history element is never read directly; callers pass the
//! (possibly document-augmented) current text separately so the raw turn in
//! history stays untouched.

use prepchat_core::{Role, Turn};

use crate::types::{ApiTurn, ContentPart};

/// Normalize `history` plus the current request into alternating API turns.
///
/// * Consecutive same-role turns merge, `\n`-joined, into the first text part
///   of the previously built turn. Merged text accumulates without a cap.
/// * `pending_image`, when present, is prepended to the current parts.
/// * The output never has two adjacent turns with the same role and always
///   ends with a `user` turn carrying `current_text`.
pub fn normalize(
    history: &[Turn],
    pending_image: Option<ContentPart>,
    current_text: &str,
) -> Vec<ApiTurn> {
    let past = match history.len() {
        0 => &[][..],
        n => &history[..n - 1],
    };

    // Fold with an explicit (last_role, built_turns) accumulator.
    let (_, mut conversation) = past.iter().fold(
        (None::<Role>, Vec::<ApiTurn>::new()),
        |(last_role, mut turns), turn| {
            if last_role == Some(turn.role) {
                if let Some(prev) = turns.last_mut() {
                    merge_text(prev, &turn.content);
                }
                (last_role, turns)
            } else {
                turns.push(ApiTurn::text_turn(turn.role, turn.content.clone()));
                (Some(turn.role), turns)
            }
        },
    );

    let mut current_parts = Vec::new();
    if let Some(image) = pending_image {
        current_parts.push(image);
    }
    current_parts.push(ContentPart::text(current_text));

    match conversation.last_mut() {
        Some(last) if last.role == Role::User => {
            // Keep alternation: fold the current request into the trailing
            // user turn instead of appending a second one.
            last.parts.extend(current_parts);
        }
        _ => conversation.push(ApiTurn::new(Role::User, current_parts)),
    }

    conversation
}

/// Append `content` to the first text part of `turn`, `\n`-separated.
fn merge_text(turn: &mut ApiTurn, content: &str) {
    for part in &mut turn.parts {
        if let ContentPart::Text { text } = part {
            text.push('\n');
            text.push_str(content);
            return;
        }
    }
    turn.parts.push(ContentPart::text(content));
}
