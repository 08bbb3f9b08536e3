use crate::llm::prompts;

/// The user prompt for one commit message: instructions, then the diff verbatim.
pub fn commit_message_prompt(diff: &str) -> String {
    format!(
        "{instructions}\n\n{header}\n{diff}\n\n{rules}",
        instructions = prompts::COMMIT_MESSAGE_INSTRUCTIONS,
        header = prompts::DIFF_HEADER,
        diff = diff,
        rules = prompts::RESPONSE_RULES,
    )
}
