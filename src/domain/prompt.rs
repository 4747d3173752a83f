//! Prompt construction. Pure text templating, no I/O.
//!
//! Layout of a full prompt (blocks separated by the `###` delimiter line):
//! language directive, persona, `Resume:` section, `Job post:` section, instructions.

use crate::domain::{Persona, ReviewRequest};
use std::fmt;

/// Delimiter line between prompt blocks.
pub const SECTION_DELIMITER: &str = "###";

/// Literal heading every rewritten resume starts with.
pub const RESUME_HEADING: &str = "# Resume";

const LANGUAGE_DIRECTIVE: &str = "Identify the text language of the resume section. \
Language means English, Chinese, Japanese or any other spoken language.\n\
Update the resume's text language to match the job post's language. \
Output the result in the job post's text language.";

const REVIEW_INSTRUCTIONS: &str = "Review the resume against the job post from your point of view.\n\
Point out strengths, weaknesses and missing qualifications in a few short paragraphs.";

const SCORE_INSTRUCTIONS: &str = "Based on the given information, how would you rate this resume \
by how relevant it is to the job post? (1 - 100)\n\
Only output the number without any other text.";

const SCORE_AND_REVIEW_INSTRUCTIONS: &str = "Based on the given information, evaluate how well the resume matches the job post.\n\
Output exactly three lines and nothing else, in this layout:\n\
Score: <a number from 0 to 10>\n\
Review: <a single paragraph reviewing the resume against the job post>\n\
Fit: <true or false>\n\
Fit must be either true or false. There is no middle ground.";

const REWRITE_INSTRUCTIONS: &str = "Rewrite the resume based on the job post if there is a match.\n\
Generate the new resume in a clear format without following its original style.\n\
Apply proper spacing and indentation.\n\
After the resume, write a cover letter for this job post under the heading # Cover Letter.\n\
Output in the Markdown format without any other text, starting with # Resume";

/// Full text payload of one remote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Persona framing followed by free text. Used for ad-hoc questions.
    pub fn question(persona: Persona, message: &str) -> Self {
        Self(format!("{}\n{}", persona.describe(), message))
    }

    /// Full prompt with the request's own task and additional instructions.
    pub fn custom(persona: Persona, request: &ReviewRequest) -> Self {
        Self::compose(persona, request, request.task_instructions.as_deref())
    }

    pub fn review(persona: Persona, request: &ReviewRequest) -> Self {
        Self::compose(persona, request, Some(REVIEW_INSTRUCTIONS))
    }

    pub fn score(persona: Persona, request: &ReviewRequest) -> Self {
        Self::compose(persona, request, Some(SCORE_INSTRUCTIONS))
    }

    pub fn score_and_review(persona: Persona, request: &ReviewRequest) -> Self {
        Self::compose(persona, request, Some(SCORE_AND_REVIEW_INSTRUCTIONS))
    }

    /// Final call of averaged scoring: merge several raw evaluations into one.
    pub fn reconcile(persona: Persona, request: &ReviewRequest, results: &[String]) -> Self {
        let instructions = format!(
            "The following are {} independent evaluations of this resume against this job post:\n\
             {}\n{}\n{}\n\
             Reconcile them into one final evaluation.\n{}",
            results.len(),
            SECTION_DELIMITER,
            results.join("\n\n"),
            SECTION_DELIMITER,
            SCORE_AND_REVIEW_INSTRUCTIONS
        );
        Self::compose(persona, request, Some(&instructions))
    }

    pub fn rewrite(persona: Persona, request: &ReviewRequest) -> Self {
        Self::compose(persona, request, Some(REWRITE_INSTRUCTIONS))
    }

    fn compose(persona: Persona, request: &ReviewRequest, task: Option<&str>) -> Self {
        let mut blocks = vec![
            LANGUAGE_DIRECTIVE.to_string(),
            persona.describe().to_string(),
            format!("Resume:\n{}", request.resume_text),
            format!("Job post:\n{}", request.job_post_text),
        ];

        let instructions: Vec<&str> = [task, request.additional_instructions.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if !instructions.is_empty() {
            blocks.push(instructions.join("\n"));
        }

        Self(blocks.join(&format!("\n{}\n", SECTION_DELIMITER)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
