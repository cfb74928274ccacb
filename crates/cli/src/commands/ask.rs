//! `twinvoice ask`: one question, one answer.

use super::Workspace;
use std::sync::Arc;
use twinvoice_agent::{AskOutcome, AskPipeline};
use twinvoice_config::AppConfig;
use twinvoice_store::ProfileRepository;

pub async fn run(
    ws: &Workspace,
    question: Option<&str>,
    session: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = match twinvoice_providers::from_config(&ws.config) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!();
            eprintln!("  ERROR: {e}");
            eprintln!();
            eprintln!("  Set one of these environment variables:");
            eprintln!("    GROQ_API_KEY=gsk_...        (Groq, the default endpoint)");
            eprintln!("    TWINVOICE_API_KEY=...       (any OpenAI-compatible endpoint)");
            eprintln!();
            eprintln!("  Or add api_key to your config file:");
            eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
            eprintln!();
            return Err("No API key found. See above for setup instructions.".into());
        }
    };

    let repository = ProfileRepository::new(Arc::clone(ws.repo.store()));
    let pipeline = AskPipeline::from_config(Arc::new(provider), repository, &ws.config);

    let outcome = pipeline.ask(question, session).await?;
    match &outcome {
        AskOutcome::Answered(text) => println!("{text}"),
        AskOutcome::NoAnswer { reason } => {
            tracing::debug!(%reason, "No answer");
            println!("{outcome}");
        }
    }
    Ok(())
}
