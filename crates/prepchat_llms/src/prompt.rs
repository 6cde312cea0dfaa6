//! System prompt and document augmentation for the study coach.

/// Character cap applied to extracted document text before it is spliced into
/// the outgoing question.
pub const DOC_CONTEXT_CAP: usize = 3000;

/// Persona and domain restriction sent verbatim as the system prompt.
pub const STUDY_COACH_SYSTEM: &str = r#"You are an expert AI assistant specialized in helping users prepare for:
1. AWS Certified AI Practitioner exam
2. AWS Certified Cloud Practitioner exam
3. Scrum certifications (PSM, CSM)

Your responsibilities:
- Explain concepts clearly and concisely
- Provide practice questions when asked
- Analyze uploaded study materials and images
- Give exam tips and strategies
- Correct misconceptions
- Stay focused on these certification topics

Always be encouraging and supportive. If asked about topics outside these certifications,
politely redirect the conversation back to exam preparation. Do not provide information on unrelated subjects.
Be mindful of the user's learning journey and adapt explanations to their level of understanding."#;

/// Splice capped document context around the user's question. Without
/// context the question passes through unchanged.
pub fn augment_with_document(question: &str, doc_context: Option<&str>) -> String {
    match doc_context {
        Some(ctx) => {
            let capped: String = ctx.chars().take(DOC_CONTEXT_CAP).collect();
            format!("Based on this study material:\n\n{capped}\n\nUser question: {question}")
        }
        None => question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_context_passes_through() {
        assert_eq!(
            augment_with_document("what is EC2?", None),
            "what is EC2?"
        );
    }

    #[test]
    fn test_context_is_wrapped() {
        let text = augment_with_document("what is EC2?", Some("EC2 is compute."));
        assert_eq!(
            text,
            "Based on this study material:\n\nEC2 is compute.\n\nUser question: what is EC2?"
        );
    }

    #[test]
    fn test_context_capped_at_3000_chars() {
        let ctx = "X".repeat(5000);
        let text = augment_with_document("what is EC2?", Some(&ctx));

        let expected_ctx = "X".repeat(DOC_CONTEXT_CAP);
        assert!(text.contains(&expected_ctx));
        assert!(!text.contains(&"X".repeat(DOC_CONTEXT_CAP + 1)));
        assert!(text.starts_with("Based on this study material:\n\n"));
        assert!(text.ends_with("\n\nUser question: what is EC2?"));
    }

    #[test]
    fn test_cap_respects_char_boundaries() {
        let ctx = "é".repeat(4000);
        let text = augment_with_document("q", Some(&ctx));
        assert!(text.contains(&"é".repeat(DOC_CONTEXT_CAP)));
    }
}
