//! Quick study topics and their canned prompts.

pub const TOPICS: &[(&str, &str)] = &[
    (
        "AWS AI Services Overview",
        "Can you explain the main AWS AI services I need to know for the AI Practitioner exam?",
    ),
    (
        "Machine Learning Fundamentals",
        "What are the key machine learning concepts covered in the AWS AI Practitioner exam?",
    ),
    (
        "AWS Cloud Concepts",
        "Explain the core cloud concepts I need for the Cloud Practitioner exam.",
    ),
    (
        "AWS Security & Compliance",
        "What security and compliance topics are important for the Cloud Practitioner exam?",
    ),
    (
        "Scrum Framework",
        "Explain the Scrum framework and its key components.",
    ),
    (
        "Scrum Roles & Events",
        "What are the Scrum roles and events I need to know for certification?",
    ),
    (
        "Practice Questions",
        "Give me 3 practice questions covering AWS AI, Cloud, and Scrum topics.",
    ),
];

/// Look up a topic prompt by its 1-based index.
pub fn prompt_for(index: usize) -> Option<&'static str> {
    TOPICS.get(index.checked_sub(1)?).map(|(_, prompt)| *prompt)
}
