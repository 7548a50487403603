//! Text sample handed to the analysis collaborator.
//!
//! The sample is the first [`SAMPLE_LINE_LIMIT`] lines of the file after
//! blank-line filtering, verbatim. It is embedded in a fixed instruction
//! template by [`analysis_prompt`].

/// Maximum number of lines forwarded for analysis.
pub const SAMPLE_LINE_LIMIT: usize = 25;

const PROMPT_HEADER: &str = "You are a data analyst. Below is a sample of a CSV file \
(the first lines, exactly as they appear in the file).\n\nCSV SAMPLE:\n";

const PROMPT_INSTRUCTIONS: &str = "\n\nDescribe what this dataset appears to contain. \
Summarize each column in one line, point out data quality problems you can see \
(missing values, inconsistent formats, suspicious entries), and suggest three \
questions this data could answer. Keep the answer concise and use plain text.";

/// Joins the first [`SAMPLE_LINE_LIMIT`] lines with `\n`.
pub fn sample_text(lines: &[&str]) -> String {
    lines
        .iter()
        .take(SAMPLE_LINE_LIMIT)
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Embeds `sample` in the analysis instruction template.
pub fn analysis_prompt(sample: &str) -> String {
    format!("{PROMPT_HEADER}{sample}{PROMPT_INSTRUCTIONS}")
}
