pub const COMMIT_MESSAGE_INSTRUCTIONS: &str = r#"Summarize the following code changes as a **complete Conventional-Commit message**
(a subject line, an empty line, then the body).
Start the subject line with a type keyword such as `feat: ` or `fix: `, and write the body
as plain explanatory sentences separated only by line breaks."#;

pub const DIFF_HEADER: &str = "--- diff (git diff --staged) ---";

pub const RESPONSE_RULES: &str = "Return **only the message text**.";
