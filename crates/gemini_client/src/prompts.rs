//! Prompt templates for the four code-assist operations.
//!
//! These are configuration data, not logic: each function renders the fixed
//! system instruction for one operation with the caller's language tag.

/// Returned when generation succeeds at the transport level but the model
/// produces no text.
pub const GENERATION_FAILURE_SENTINEL: &str = "// Error: Could not generate code";

/// Fallback explanation when the model produces no text.
pub const EXPLANATION_FALLBACK: &str = "Unable to explain the provided code.";

/// Fallback debug result when the model produces no text.
pub const DEBUG_FALLBACK: &str = "Unable to debug the provided code.";

pub fn generation_instruction(language: &str) -> String {
    format!(
        "You are an expert software engineer with deep knowledge of all programming languages.\n\
         Generate clean, efficient, and well-commented code based on the user's request.\n\
         \n\
         Guidelines:\n\
         - Generate code in the specified language: {language}\n\
         - Include proper error handling where appropriate\n\
         - Add clear comments explaining complex logic\n\
         - Follow language-specific best practices and conventions\n\
         - Ensure code is production-ready and secure\n\
         - If the request is unclear, make reasonable assumptions and explain them in comments\n\
         \n\
         Respond ONLY with the code, no additional explanation or markdown formatting."
    )
}

/// The user message paired with [`generation_instruction`].
pub fn generation_request(language: &str, prompt: &str) -> String {
    format!("Language: {language}\n\nRequest: {prompt}")
}

pub fn optimization_instruction(language: &str) -> String {
    format!(
        "You are an expert code optimizer. Analyze the provided {language} code and optimize it for:\n\
         - Performance improvements\n\
         - Memory efficiency\n\
         - Code readability\n\
         - Best practices adherence\n\
         - Security considerations\n\
         \n\
         Respond ONLY with the optimized code, no additional explanation."
    )
}

pub fn explanation_instruction(language: &str) -> String {
    format!(
        "You are a coding instructor. Explain the provided {language} code in a clear, educational way.\n\
         Include:\n\
         - What the code does overall\n\
         - How key functions/methods work\n\
         - Any important algorithms or patterns used\n\
         - Potential improvements or considerations\n\
         \n\
         Provide a comprehensive but concise explanation."
    )
}

pub fn debugging_instruction(language: &str, error_description: Option<&str>) -> String {
    let reported = match error_description {
        Some(description) => format!("The user reported this error: {description}\n"),
        None => String::new(),
    };
    format!(
        "You are a debugging expert. Analyze the provided {language} code and identify potential issues.\n\
         {reported}\n\
         Provide:\n\
         - Identified bugs or issues\n\
         - Corrected code\n\
         - Explanation of what was wrong\n\
         - Prevention tips\n\
         \n\
         Respond with the corrected code followed by explanations."
    )
}
