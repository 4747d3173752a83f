//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/PDF types here. Adapters map into these.

use crate::domain::DomainError;
use std::fmt;
use std::str::FromStr;

/// Viewpoint the model is asked to take for every prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Recruiter,
    Applicant,
}

impl Persona {
    /// Every persona, in menu order.
    pub const ALL: [Persona; 2] = [Persona::Applicant, Persona::Recruiter];

    /// Fixed framing sentence placed in front of every prompt sent under this persona.
    pub fn describe(self) -> &'static str {
        match self {
            Persona::Recruiter => {
                "You are the principal HR (Human Resources)/recruiter of a company."
            }
            Persona::Applicant => "You are a candidate applying for a new job.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Persona::Recruiter => "recruiter",
            Persona::Applicant => "applicant",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recruiter" | "hr" => Ok(Persona::Recruiter),
            "applicant" | "candidate" => Ok(Persona::Applicant),
            other => Err(DomainError::InvalidRole(format!(
                "'{}' (expected recruiter or applicant)",
                other
            ))),
        }
    }
}

/// Resume and job post for one request, plus optional caller instructions.
///
/// Immutable once built. Task methods read it and build their own prompt;
/// they never write their instructions back into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewRequest {
    pub resume_text: String,
    pub job_post_text: String,
    /// Main instruction used by `custom` prompts.
    pub task_instructions: Option<String>,
    /// Extra caller notes appended after any task instruction.
    pub additional_instructions: Option<String>,
}

impl ReviewRequest {
    pub fn new(resume_text: impl Into<String>, job_post_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_post_text: job_post_text.into(),
            task_instructions: None,
            additional_instructions: None,
        }
    }

    pub fn with_task_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.task_instructions = Some(instructions.into());
        self
    }

    pub fn with_additional_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.additional_instructions = Some(instructions.into());
        self
    }
}

/// Reply of one chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Generated content, untrimmed.
    pub text: String,
    /// Token usage reported by the service.
    pub total_tokens: u32,
}
