//! Implements InputPort. Inquire-based interactive menu.
//!
//! Pick a persona, point at a resume and job post once, then run tasks until Quit.

use crate::adapters::ui::banner::{CYBER_GREEN, NEON_PURPLE};
use crate::adapters::ui::progress::spinner;
use crate::domain::{DomainError, Persona, ReviewRequest};
use crate::ports::InputPort;
use crate::usecases::{AssistantFactory, IntakeService, ResumeAssistant};
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{CustomType, InquireError, Select, Text};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Neon prompt prefix and highlight for every inquire prompt.
pub fn apply_theme() {
    let purple = Color::Rgb {
        r: NEON_PURPLE.0,
        g: NEON_PURPLE.1,
        b: NEON_PURPLE.2,
    };
    let green = Color::Rgb {
        r: CYBER_GREEN.0,
        g: CYBER_GREEN.1,
        b: CYBER_GREEN.2,
    };
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(purple))
        .with_highlighted_option_prefix(Styled::new("»").with_fg(green));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Ask,
    Review,
    Score,
    ScoreAndReview,
    ScoreAndReviewAveraged,
    Rewrite,
    Custom,
    ShowResume,
    ChangeFiles,
    SwitchPersona,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 11] = [
        MenuItem::Ask,
        MenuItem::Review,
        MenuItem::Score,
        MenuItem::ScoreAndReview,
        MenuItem::ScoreAndReviewAveraged,
        MenuItem::Rewrite,
        MenuItem::Custom,
        MenuItem::ShowResume,
        MenuItem::ChangeFiles,
        MenuItem::SwitchPersona,
        MenuItem::Quit,
    ];

    /// Whether the item works on the loaded resume and job post.
    fn needs_request(self) -> bool {
        !matches!(
            self,
            MenuItem::Ask | MenuItem::ChangeFiles | MenuItem::SwitchPersona | MenuItem::Quit
        )
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::Ask => "Ask a question",
            MenuItem::Review => "Review resume",
            MenuItem::Score => "Score resume (1-100)",
            MenuItem::ScoreAndReview => "Score, review and fit",
            MenuItem::ScoreAndReviewAveraged => "Score, review and fit (averaged)",
            MenuItem::Rewrite => "Rewrite resume + cover letter",
            MenuItem::Custom => "Custom instruction",
            MenuItem::ShowResume => "Show extracted resume text",
            MenuItem::ChangeFiles => "Load another resume / job post",
            MenuItem::SwitchPersona => "Switch persona",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Resume and job post loaded for the session.
struct Loaded {
    resume_path: PathBuf,
    request: ReviewRequest,
}

/// Outcome of one prompt: a value, or the user backed out.
enum Answer<T> {
    Value(T),
    Cancelled,
}

fn answer<T>(result: Result<T, InquireError>) -> Result<Answer<T>, DomainError> {
    match result {
        Ok(value) => Ok(Answer::Value(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Answer::Cancelled)
        }
        Err(e) => Err(DomainError::InvalidInput(e.to_string())),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    intake: Arc<IntakeService>,
    assistants: AssistantFactory,
    persona: Persona,
    repeat_count: usize,
}

impl TuiInputPort {
    pub fn new(
        intake: Arc<IntakeService>,
        assistants: AssistantFactory,
        persona: Persona,
        repeat_count: usize,
    ) -> Self {
        Self {
            intake,
            assistants,
            persona,
            repeat_count,
        }
    }

    fn choose_persona(current: Persona) -> Result<Answer<Persona>, DomainError> {
        let start = Persona::ALL.iter().position(|p| *p == current).unwrap_or(0);
        answer(
            Select::new("Persona:", Persona::ALL.to_vec())
                .with_starting_cursor(start)
                .prompt(),
        )
    }

    async fn load_files(&self) -> Result<Answer<Loaded>, DomainError> {
        let resume = match answer(Text::new("Resume PDF path:").prompt())? {
            Answer::Value(path) => PathBuf::from(path.trim()),
            Answer::Cancelled => return Ok(Answer::Cancelled),
        };
        let job = match answer(Text::new("Job post text file path:").prompt())? {
            Answer::Value(path) => PathBuf::from(path.trim()),
            Answer::Cancelled => return Ok(Answer::Cancelled),
        };

        let pb = spinner("Extracting resume...");
        let request = self.intake.load_request(&resume, &job).await;
        pb.finish_and_clear();

        Ok(Answer::Value(Loaded {
            resume_path: resume,
            request: request?,
        }))
    }

    /// Run one task. `None` means the user backed out of a follow-up prompt.
    async fn run_task(
        &self,
        item: MenuItem,
        assistant: &ResumeAssistant,
        loaded: Option<&Loaded>,
    ) -> Result<Option<String>, DomainError> {
        let request = loaded.map(|l| &l.request);
        let output = match (item, request) {
            (MenuItem::Ask, _) => {
                let Answer::Value(message) = answer(Text::new("Question:").prompt())? else {
                    return Ok(None);
                };
                let pb = spinner("Asking...");
                let result = assistant.ask(&message).await;
                pb.finish_and_clear();
                result?
            }
            (MenuItem::ShowResume, Some(request)) => request.resume_text.clone(),
            (MenuItem::Review, Some(request)) => {
                let pb = spinner("Reviewing...");
                let result = assistant.review(request).await;
                pb.finish_and_clear();
                result?
            }
            (MenuItem::Score, Some(request)) => {
                let pb = spinner("Scoring...");
                let result = assistant.score(request).await;
                pb.finish_and_clear();
                result?
            }
            (MenuItem::ScoreAndReview, Some(request)) => {
                let pb = spinner("Evaluating...");
                let result = assistant.score_and_review(request).await;
                pb.finish_and_clear();
                result?
            }
            (MenuItem::ScoreAndReviewAveraged, Some(request)) => {
                let Answer::Value(repeat) = answer(
                    CustomType::<usize>::new("Evaluations to reconcile:")
                        .with_default(self.repeat_count)
                        .prompt(),
                )?
                else {
                    return Ok(None);
                };
                let pb = spinner(format!("Running {} evaluations...", repeat));
                let result = assistant.score_and_review_averaged(request, repeat).await;
                pb.finish_and_clear();
                result?
            }
            (MenuItem::Rewrite, Some(request)) => {
                let default_path = assistant.options().rewrite_output.display().to_string();
                let Answer::Value(path) = answer(
                    Text::new("Save rewritten resume to:")
                        .with_default(&default_path)
                        .prompt(),
                )?
                else {
                    return Ok(None);
                };
                let path = PathBuf::from(path.trim());
                let pb = spinner("Rewriting...");
                let result = assistant.rewrite(request, Some(&path)).await;
                pb.finish_and_clear();
                let markdown = result?;
                println!("Saved to {}", path.display());
                markdown
            }
            (MenuItem::Custom, Some(request)) => {
                let Answer::Value(task) = answer(Text::new("Instruction:").prompt())? else {
                    return Ok(None);
                };
                let Answer::Value(path) = answer(
                    Text::new("Save answer to (leave empty to only print):").prompt(),
                )?
                else {
                    return Ok(None);
                };
                let request = request.clone().with_task_instructions(task);
                let pb = spinner("Running custom instruction...");
                let result = match path.trim() {
                    "" => assistant.custom(&request).await,
                    path => assistant.custom_output(&request, Path::new(path)).await,
                };
                pb.finish_and_clear();
                result?
            }
            _ => return Ok(None),
        };
        Ok(Some(output))
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut persona = match Self::choose_persona(self.persona)? {
            Answer::Value(p) => p,
            Answer::Cancelled => return Ok(()),
        };
        let mut loaded: Option<Loaded> = None;

        loop {
            let item = match answer(
                Select::new(&format!("[{}] What next?", persona), MenuItem::ALL.to_vec())
                    .prompt(),
            )? {
                Answer::Value(item) => item,
                Answer::Cancelled => return Ok(()),
            };

            match item {
                MenuItem::Quit => return Ok(()),
                MenuItem::SwitchPersona => {
                    if let Answer::Value(p) = Self::choose_persona(persona)? {
                        persona = p;
                    }
                    continue;
                }
                MenuItem::ChangeFiles => {
                    loaded = None;
                }
                _ => {}
            }

            if loaded.is_none() && (item.needs_request() || item == MenuItem::ChangeFiles) {
                match self.load_files().await {
                    Ok(Answer::Value(l)) => loaded = Some(l),
                    Ok(Answer::Cancelled) => continue,
                    Err(e) => {
                        eprintln!("Could not load files: {}", e);
                        continue;
                    }
                }
            }
            if item == MenuItem::ChangeFiles {
                continue;
            }

            let assistant = self
                .assistants
                .build(persona, loaded.as_ref().map(|l| l.resume_path.as_path()));
            match self.run_task(item, &assistant, loaded.as_ref()).await {
                Ok(Some(output)) => println!("\n{}\n", output),
                Ok(None) => {}
                // Remote failures are reported and the menu stays open so the user can retry.
                Err(e) if e.is_remote() => eprintln!("Remote service failed: {}", e),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items_needing_files() {
        let needing: Vec<MenuItem> = MenuItem::ALL
            .into_iter()
            .filter(|m| m.needs_request())
            .collect();
        assert_eq!(
            needing,
            vec![
                MenuItem::Review,
                MenuItem::Score,
                MenuItem::ScoreAndReview,
                MenuItem::ScoreAndReviewAveraged,
                MenuItem::Rewrite,
                MenuItem::Custom,
                MenuItem::ShowResume,
            ]
        );
    }

    #[test]
    fn test_cancel_is_not_an_error() {
        let result: Result<String, InquireError> = Err(InquireError::OperationCanceled);
        assert!(matches!(answer(result), Ok(Answer::Cancelled)));
        let result: Result<String, InquireError> = Err(InquireError::OperationInterrupted);
        assert!(matches!(answer(result), Ok(Answer::Cancelled)));
    }
}
