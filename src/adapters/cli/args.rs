//! clap argument model.

use crate::domain::Persona;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "resume-ai",
    version,
    about = "Review, score or rewrite a resume PDF against a job post with an LLM"
)]
pub struct Cli {
    /// Persona framing every prompt (recruiter | applicant)
    #[arg(long, global = true)]
    pub persona: Option<Persona>,

    /// Log credential loading, token usage and intermediate results
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Answer with the offline mock adapter instead of the remote API
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Resume PDF and job post text file.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Resume PDF
    #[arg(long)]
    pub resume: PathBuf,

    /// Job post text file (UTF-8)
    #[arg(long)]
    pub job: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the normalized text of a resume PDF
    Extract {
        #[arg(long)]
        resume: PathBuf,
    },
    /// Ask a free-form question under the persona
    Ask { message: String },
    /// Review the resume against the job post
    Review(InputArgs),
    /// Rate resume relevance from 1 to 100
    Score(InputArgs),
    /// Score (0-10), one-paragraph review and a true/false fit verdict
    ScoreReview {
        #[command(flatten)]
        input: InputArgs,
        /// Run several evaluations and let the model reconcile them
        #[arg(long, default_value_t = false)]
        average: bool,
        /// Evaluations to reconcile (implies --average)
        #[arg(long)]
        repeat: Option<usize>,
    },
    /// Rewrite the resume for the job post and add a cover letter (Markdown)
    Rewrite {
        #[command(flatten)]
        input: InputArgs,
        /// Output file; defaults to <resume>.rewritten.md
        #[arg(long)]
        output: Option<PathBuf>,
        /// Extra instructions appended to the prompt
        #[arg(long)]
        instructions: Option<String>,
    },
    /// Send your own instruction with the resume and job post
    Custom {
        #[command(flatten)]
        input: InputArgs,
        /// Main instruction for the model
        #[arg(long)]
        task: String,
        /// Extra instructions appended after the task
        #[arg(long)]
        instructions: Option<String>,
        /// Also write the answer to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Interactive menu
    Interactive,
}

impl Command {
    /// False for commands that never reach the chat service.
    pub fn needs_chat(&self) -> bool {
        !matches!(self, Command::Extract { .. })
    }

    /// Resume path the command works on, if any.
    pub fn resume(&self) -> Option<&std::path::Path> {
        match self {
            Command::Extract { resume } => Some(resume.as_path()),
            Command::Review(input) | Command::Score(input) => Some(input.resume.as_path()),
            Command::ScoreReview { input, .. }
            | Command::Rewrite { input, .. }
            | Command::Custom { input, .. } => Some(input.resume.as_path()),
            Command::Ask { .. } | Command::Interactive => None,
        }
    }
}
