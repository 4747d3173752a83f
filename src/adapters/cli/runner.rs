//! Implements InputPort for one-shot commands. Result goes to stdout.

use crate::adapters::cli::args::{Command, InputArgs};
use crate::domain::{DomainError, Persona, ReviewRequest};
use crate::ports::InputPort;
use crate::usecases::{AssistantFactory, IntakeService, ResumeAssistant};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// CLI adapter. Runs a single parsed command.
pub struct CliInputPort {
    command: Command,
    persona: Persona,
    repeat_count: usize,
    intake: Arc<IntakeService>,
    /// `None` when the command needs no chat service (e.g. `extract`).
    assistants: Option<AssistantFactory>,
}

impl CliInputPort {
    pub fn new(
        command: Command,
        persona: Persona,
        repeat_count: usize,
        intake: Arc<IntakeService>,
        assistants: Option<AssistantFactory>,
    ) -> Self {
        Self {
            command,
            persona,
            repeat_count,
            intake,
            assistants,
        }
    }

    fn assistant(&self) -> Result<ResumeAssistant, DomainError> {
        let factory = self.assistants.as_ref().ok_or_else(|| {
            DomainError::InvalidInput("this command needs the chat service".to_string())
        })?;
        Ok(factory.build(self.persona, self.command.resume()))
    }

    async fn request(&self, input: &InputArgs) -> Result<ReviewRequest, DomainError> {
        self.intake.load_request(&input.resume, &input.job).await
    }

    /// Run the command and return the text to print.
    pub async fn execute(&self) -> Result<String, DomainError> {
        match &self.command {
            Command::Extract { resume } => self.intake.load_resume(resume).await,
            Command::Ask { message } => self.assistant()?.ask(message).await,
            Command::Review(input) => {
                let request = self.request(input).await?;
                self.assistant()?.review(&request).await
            }
            Command::Score(input) => {
                let request = self.request(input).await?;
                self.assistant()?.score(&request).await
            }
            Command::ScoreReview {
                input,
                average,
                repeat,
            } => {
                let request = self.request(input).await?;
                let assistant = self.assistant()?;
                match (average, repeat) {
                    (_, Some(n)) => assistant.score_and_review_averaged(&request, *n).await,
                    (true, None) => {
                        assistant
                            .score_and_review_averaged(&request, self.repeat_count)
                            .await
                    }
                    (false, None) => assistant.score_and_review(&request).await,
                }
            }
            Command::Rewrite {
                input,
                output,
                instructions,
            } => {
                let mut request = self.request(input).await?;
                if let Some(extra) = instructions {
                    request = request.with_additional_instructions(extra.as_str());
                }
                let assistant = self.assistant()?;
                let markdown = assistant.rewrite(&request, output.as_deref()).await?;
                let saved = output
                    .clone()
                    .unwrap_or_else(|| assistant.options().rewrite_output.clone());
                info!(path = %saved.display(), "rewrite saved");
                Ok(markdown)
            }
            Command::Custom {
                input,
                task,
                instructions,
                output,
            } => {
                let mut request = self
                    .request(input)
                    .await?
                    .with_task_instructions(task.as_str());
                if let Some(extra) = instructions {
                    request = request.with_additional_instructions(extra.as_str());
                }
                let assistant = self.assistant()?;
                match output {
                    Some(path) => assistant.custom_output(&request, path).await,
                    None => assistant.custom(&request).await,
                }
            }
            Command::Interactive => Err(DomainError::InvalidInput(
                "interactive mode is served by the TUI".to_string(),
            )),
        }
    }
}

#[async_trait]
impl InputPort for CliInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let output = self.execute().await?;
        println!("{}", output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockChatAdapter;
    use crate::adapters::pdf::pdf_extractor::tests::write_pdf;
    use crate::adapters::pdf::PdfExtractor;
    use crate::ports::ChatPort;
    use std::path::{Path, PathBuf};

    struct Fixture {
        _dir: tempfile::TempDir,
        resume: PathBuf,
        job: PathBuf,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let resume = dir.path().join("jane.pdf");
        let job = dir.path().join("job.txt");
        write_pdf(&resume, &[&["Jane Doe"], &["Rust  engineer"]]);
        std::fs::write(&job, "Senior Rust\ndeveloper").unwrap();
        Fixture {
            _dir: dir,
            resume,
            job,
        }
    }

    fn port(command: Command, mock: &Arc<MockChatAdapter>) -> CliInputPort {
        let chat: Arc<dyn ChatPort> = Arc::clone(mock) as Arc<dyn ChatPort>;
        CliInputPort::new(
            command,
            Persona::Applicant,
            3,
            Arc::new(IntakeService::new(Arc::new(PdfExtractor::new()))),
            Some(AssistantFactory::new(chat, false, None)),
        )
    }

    fn input(f: &Fixture) -> InputArgs {
        InputArgs {
            resume: f.resume.clone(),
            job: f.job.clone(),
        }
    }

    #[tokio::test]
    async fn test_extract_without_chat() {
        let f = fixture();
        let port = CliInputPort::new(
            Command::Extract {
                resume: f.resume.clone(),
            },
            Persona::Applicant,
            3,
            Arc::new(IntakeService::new(Arc::new(PdfExtractor::new()))),
            None,
        );
        assert_eq!(port.execute().await.unwrap(), "Jane Doe Rust engineer");
    }

    #[tokio::test]
    async fn test_chat_command_without_factory_fails() {
        let port = CliInputPort::new(
            Command::Ask {
                message: "hi".into(),
            },
            Persona::Applicant,
            3,
            Arc::new(IntakeService::new(Arc::new(PdfExtractor::new()))),
            None,
        );
        assert!(matches!(
            port.execute().await,
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_review_sends_normalized_inputs() {
        let f = fixture();
        let mock = Arc::new(MockChatAdapter::with_replies(["Looks solid."]));
        let out = port(Command::Review(input(&f)), &mock)
            .execute()
            .await
            .unwrap();
        assert_eq!(out, "Looks solid.");

        let prompt = &mock.prompts().await[0];
        assert!(prompt.contains("Resume:\nJane Doe Rust engineer"));
        assert!(prompt.contains("Job post:\nSenior Rust developer"));
        assert!(prompt.contains(Persona::Applicant.describe()));
    }

    #[tokio::test]
    async fn test_score_review_average_uses_configured_repeat() {
        let f = fixture();
        let mock = Arc::new(MockChatAdapter::with_replies(["a", "b", "c", "final"]));
        let command = Command::ScoreReview {
            input: input(&f),
            average: true,
            repeat: None,
        };
        let out = port(command, &mock).execute().await.unwrap();
        assert_eq!(out, "final");
        assert_eq!(mock.calls().await, 4);
    }

    #[tokio::test]
    async fn test_score_review_repeat_overrides() {
        let f = fixture();
        let mock = Arc::new(MockChatAdapter::with_replies(["a", "b", "final"]));
        let command = Command::ScoreReview {
            input: input(&f),
            average: false,
            repeat: Some(2),
        };
        assert_eq!(port(command, &mock).execute().await.unwrap(), "final");
        assert_eq!(mock.calls().await, 3);
    }

    #[tokio::test]
    async fn test_rewrite_defaults_beside_resume() {
        let f = fixture();
        let mock = Arc::new(MockChatAdapter::with_replies(["# Resume\nJane Doe"]));
        let command = Command::Rewrite {
            input: input(&f),
            output: None,
            instructions: Some("Keep it to one page.".into()),
        };
        let out = port(command, &mock).execute().await.unwrap();
        assert_eq!(out, "# Resume\nJane Doe");

        let expected = f.resume.with_file_name("jane.rewritten.md");
        assert_eq!(std::fs::read_to_string(expected).unwrap(), out);
        assert!(mock.prompts().await[0].ends_with("Keep it to one page."));
    }

    #[tokio::test]
    async fn test_custom_with_output_file() {
        let f = fixture();
        let out_path = f.resume.with_file_name("answer.txt");
        let mock = Arc::new(MockChatAdapter::with_replies(["- Rust\n- Tokio"]));
        let command = Command::Custom {
            input: input(&f),
            task: "List the matching skills.".into(),
            instructions: None,
            output: Some(out_path.clone()),
        };
        let out = port(command, &mock).execute().await.unwrap();
        assert_eq!(out, "- Rust\n- Tokio");
        assert_eq!(std::fs::read_to_string(Path::new(&out_path)).unwrap(), out);
        assert!(mock.prompts().await[0].ends_with("List the matching skills."));
    }

    #[tokio::test]
    async fn test_missing_resume_surfaces_extraction_error() {
        let f = fixture();
        let mock = Arc::new(MockChatAdapter::with_replies(["unused"]));
        let command = Command::Score(InputArgs {
            resume: f.resume.with_file_name("missing.pdf"),
            job: f.job.clone(),
        });
        let err = port(command, &mock).execute().await.unwrap_err();
        assert!(matches!(err, DomainError::Extraction(_)));
        assert_eq!(mock.calls().await, 0);
    }
}
