//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into services, run a front end.
//! No business logic here.

use clap::Parser;
use resume_ai::adapters::ai::{MockChatAdapter, OpenAiAdapter};
use resume_ai::adapters::cli::{Cli, CliInputPort, Command};
use resume_ai::adapters::pdf::PdfExtractor;
use resume_ai::adapters::ui::tui::TuiInputPort;
use resume_ai::ports::{ChatPort, InputPort};
use resume_ai::shared::config::AppConfig;
use resume_ai::shared::credentials::load_api_key;
use resume_ai::usecases::{AssistantFactory, IntakeService};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let diagnostics = cli.debug || cfg.debug_or_default();
    let default_filter = if diagnostics { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let persona = match cli.persona {
        Some(p) => p,
        None => cfg
            .persona_or_default()
            .map_err(|e| anyhow::anyhow!("{}", e))?,
    };
    let repeat_count = cfg.repeat_count_or_default();
    let needs_chat = cli.command.as_ref().is_none_or(Command::needs_chat);

    // --- Chat port: remote API, or the mock when asked for ---
    let assistants = if needs_chat {
        let chat: Arc<dyn ChatPort> = if cli.mock || cfg.mock_or_default() {
            warn!("mock mode: replies are canned, no API calls are made");
            Arc::new(MockChatAdapter::new())
        } else {
            let key_path = cfg.key_file_or_default();
            let api_key =
                load_api_key(&key_path, diagnostics).map_err(|e| anyhow::anyhow!("{}", e))?;
            if diagnostics {
                info!(
                    persona = %persona,
                    model = %cfg.model_or_default(),
                    url = %cfg.api_url_or_default(),
                    "chat adapter configured"
                );
            }
            Arc::new(
                OpenAiAdapter::new(cfg.api_url_or_default(), api_key, cfg.model_or_default())
                    .map_err(|e| anyhow::anyhow!("{}", e))?
                    .with_role(cfg.message_role_or_default()),
            )
        };
        Some(AssistantFactory::new(chat, diagnostics, cfg.output_path()))
    } else {
        None
    };

    let intake = Arc::new(IntakeService::new(Arc::new(PdfExtractor::new())));

    // --- Front end: one-shot command, or the interactive menu ---
    let input_port: Arc<dyn InputPort> = match (cli.command, assistants) {
        (None | Some(Command::Interactive), Some(assistants)) => {
            resume_ai::adapters::ui::init_ui();
            Arc::new(TuiInputPort::new(intake, assistants, persona, repeat_count))
        }
        (Some(command), assistants) => Arc::new(CliInputPort::new(
            command,
            persona,
            repeat_count,
            intake,
            assistants,
        )),
        (None, None) => anyhow::bail!("interactive mode needs the chat service"),
    };

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
