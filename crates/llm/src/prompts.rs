//! Prompt template for hot take generation

/// Build the generation prompt. The user's text is interpolated verbatim;
/// it never leaves the prompt body, so no escaping is applied.
pub fn hot_take_prompt(thoughts: &str) -> String {
    format!(
        r#"Transform the following thoughts into 3-5 concise, sharp "hot takes" - bold, controversial, or provocative statements that capture the essence of the original thoughts. Each hot take should be:
- One sentence long
- Direct and punchy
- Thought-provoking or slightly controversial
- Capture the core insight from the original thoughts

Original thoughts: "{}"

Format your response as a numbered list of hot takes, one per line."#,
        thoughts
    )
}
