//! Prompt construction for code review requests.

use util::languages::Language;

/// Literal the model is told to answer with when it finds nothing wrong.
pub const NO_ISSUES_RESPONSE: &str = "Your code was correct.";

/// Word budget the model is asked to stay under. Not enforced locally.
pub const WORD_LIMIT: u32 = 200;

/// Builds the review prompt for one file, embedding `content` verbatim.
///
/// The result depends only on its inputs, so identical files produce identical prompts.
pub fn build_prompt(content: &str, language: Language) -> String {
    let name = language.display_name();
    let fence = language.fence_tag();
    format!(
        r#"Analyze the following {name} code file content and provide feedback on logical and syntax errors.
Pay attention to any comments within the code, especially those like '@brief' or similar annotations,
as they might indicate the intended functionality or specific requirements.

File Content:
```{fence}
{content}
```

Please provide a detailed analysis of the code, including:
1. Syntax errors (point out specific lines if possible).
2. Logical errors or potential runtime issues.
3. How well the code seems to achieve any stated goals mentioned in comments (like @brief).

DO NOT WRITE ANY CORRECTED CODE, KEEP THE RESPONSE UNDER {WORD_LIMIT} WORDS STRICTLY, DO NOT MENTION ANYTHING RELATED TO OPTIMISATION OF THIS CODE
IF THERE ARE NO ERRORS WRITE "{NO_ISSUES_RESPONSE}" AND DO NOT ADD ANYTHING ELSE TO THIS RESPONSE
"#
    )
}
