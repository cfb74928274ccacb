//! The ask pipeline: load, compile, call the provider once.

use crate::context::{compile_context, CompiledContext, ContextSettings, ContextSources};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use twinvoice_config::AppConfig;
use twinvoice_core::error::{Error, Result};
use twinvoice_core::{now_millis, KeyValueStore, Message, Provider, ProviderRequest, RecentChat};
use twinvoice_store::ProfileRepository;

/// What a question produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    Answered(String),
    /// The provider failed or returned nothing. `reason` is for logs; the
    /// user sees [`AskOutcome::NO_ANSWER`].
    NoAnswer { reason: String },
}

impl AskOutcome {
    pub const NO_ANSWER: &'static str = "No answer returned from model.";

    pub fn text(&self) -> &str {
        match self {
            AskOutcome::Answered(text) => text,
            AskOutcome::NoAnswer { .. } => Self::NO_ANSWER,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, AskOutcome::Answered(_))
    }
}

impl fmt::Display for AskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Load everything stored for `session` and compile it.
///
/// A selection pointing at a removed connection is rewritten to self in
/// the store. Failing to persist that correction is logged, not raised.
pub fn compile_session<S: KeyValueStore>(
    repo: &ProfileRepository<S>,
    session: &str,
    settings: &ContextSettings,
) -> CompiledContext {
    let answers = repo.load_answers();
    let account = repo.load_account();
    let connections = repo.load_connections();
    let selection = repo.load_selection(session);
    let corrections = repo.load_corrections();
    let memory_facts = repo.load_memory_facts();

    let compiled = compile_context(
        &ContextSources {
            answers: &answers,
            account: account.as_ref(),
            connections: &connections,
            selection: &selection,
            corrections: &corrections,
            memory_facts: &memory_facts,
        },
        settings,
    );

    if compiled.speaker_target.degraded {
        debug!(session, "Persisting corrected speaker/target selection");
        if let Err(e) = repo.save_selection(session, &compiled.speaker_target.pair) {
            warn!(session, error = %e, "Failed to persist corrected selection");
        }
    }
    compiled
}

/// Orchestrates one question end to end.
pub struct AskPipeline<S> {
    provider: Arc<dyn Provider>,

    repository: ProfileRepository<S>,

    model: String,

    temperature: f32,

    max_tokens: Option<u32>,

    settings: ContextSettings,
}

impl<S: KeyValueStore> AskPipeline<S> {
    pub fn new(
        provider: Arc<dyn Provider>,
        repository: ProfileRepository<S>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            repository,
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
            settings: ContextSettings::default(),
        }
    }

    /// Pipeline with model, sampling and context limits taken from config.
    pub fn from_config(
        provider: Arc<dyn Provider>,
        repository: ProfileRepository<S>,
        config: &AppConfig,
    ) -> Self {
        Self::new(provider, repository, config.model.clone())
            .with_temperature(config.temperature)
            .with_max_tokens(config.max_tokens)
            .with_settings(ContextSettings::from(&config.context))
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn with_settings(mut self, settings: ContextSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn repository(&self) -> &ProfileRepository<S> {
        &self.repository
    }

    /// Load everything for `session` and compile it. See [`compile_session`].
    pub fn compile(&self, session: &str) -> CompiledContext {
        compile_session(&self.repository, session, &self.settings)
    }

    /// Ask a question in `session`.
    ///
    /// A blank or missing question is rejected before anything is loaded.
    /// Provider failures become [`AskOutcome::NoAnswer`], never an `Err`.
    pub async fn ask(&self, question: Option<&str>, session: &str) -> Result<AskOutcome> {
        let question = question.map(str::trim).unwrap_or_default();
        if question.is_empty() {
            return Err(Error::MissingInput("question".into()));
        }

        let compiled = self.compile(session);
        info!(
            provider = self.provider.name(),
            model = %self.model,
            filled = compiled.filled_count(),
            corrections = compiled.corrections.len(),
            "Asking question"
        );

        let request = ProviderRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(&compiled.system_prompt),
                Message::user(question),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = match self.provider.complete(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Provider call failed");
                return Ok(AskOutcome::NoAnswer {
                    reason: e.to_string(),
                });
            }
        };

        let answer = response.message.content.trim();
        if answer.is_empty() {
            warn!(model = %response.model, "Provider returned empty content");
            return Ok(AskOutcome::NoAnswer {
                reason: "empty response".into(),
            });
        }

        if let Some(usage) = &response.usage {
            debug!(tokens = usage.total_tokens, model = %response.model, "Answer received");
        }

        let chat = RecentChat {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now_millis(),
            question: question.to_string(),
            answer: answer.to_string(),
            used_persona: compiled.speaker_target.summary(),
            used_profile: compiled.profile.text.clone(),
        };
        if let Err(e) = self.repository.add_recent_chat(chat) {
            warn!(error = %e, "Failed to record recent chat");
        }

        Ok(AskOutcome::Answered(answer.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{failing, ScriptedProvider};
    use twinvoice_core::{ProviderError, Relationship, Role, SpeakerTargetPair, Tone};
    use twinvoice_store::InMemoryStore;

    fn pipeline(provider: Arc<ScriptedProvider>) -> AskPipeline<InMemoryStore> {
        AskPipeline::new(
            provider,
            ProfileRepository::new(InMemoryStore::new()),
            "test-model",
        )
        .with_max_tokens(400)
    }

    #[tokio::test]
    async fn blank_question_is_rejected_before_the_provider() {
        let provider = Arc::new(ScriptedProvider::text("unused"));
        let pipeline = pipeline(provider.clone());

        assert!(matches!(
            pipeline.ask(None, "default").await,
            Err(Error::MissingInput(_))
        ));
        assert!(matches!(
            pipeline.ask(Some("   "), "default").await,
            Err(Error::MissingInput(_))
        ));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn answer_is_returned_and_recorded() {
        let provider = Arc::new(ScriptedProvider::text("  Tea, obviously.  "));
        let pipeline = pipeline(provider.clone());
        let repo = pipeline.repository();
        repo.save_account("Ana", None, Tone::Warm).unwrap();
        repo.set_answer("identity_words", "calm, direct").unwrap();

        let outcome = pipeline.ask(Some("Tea or coffee?"), "default").await.unwrap();
        assert_eq!(outcome, AskOutcome::Answered("Tea, obviously.".into()));

        let request = provider.last_request().unwrap();
        assert_eq!(request.model, "test-model");
        assert_eq!(request.max_tokens, Some(400));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "Tea or coffee?");
        assert!(
            request.messages[0]
                .content
                .contains("Identity words: calm, direct")
        );

        let chats = repo.load_recent_chats();
        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].used_persona, "Speaker: Ana\nTarget: Ana");
        assert_eq!(chats[0].used_profile, "Identity words: calm, direct");
    }

    #[tokio::test]
    async fn provider_failure_becomes_no_answer() {
        let provider = Arc::new(failing(ProviderError::Network("connection refused".into())));
        let pipeline = pipeline(provider);

        let outcome = pipeline.ask(Some("Hello?"), "default").await.unwrap();
        assert!(!outcome.is_answered());
        assert_eq!(outcome.to_string(), "No answer returned from model.");
        assert!(pipeline.repository().load_recent_chats().is_empty());
    }

    #[tokio::test]
    async fn empty_content_becomes_no_answer() {
        let provider = Arc::new(ScriptedProvider::text("   "));
        let outcome = pipeline(provider).ask(Some("Hello?"), "s").await.unwrap();
        assert_eq!(outcome.text(), AskOutcome::NO_ANSWER);
    }

    #[tokio::test]
    async fn dangling_selection_is_corrected_in_store() {
        let provider = Arc::new(ScriptedProvider::text("ok"));
        let pipeline = pipeline(provider);
        let repo = pipeline.repository();
        let dad = repo
            .add_connection("Dad", Relationship::Father, None)
            .unwrap();
        repo.save_selection("kitchen", &SpeakerTargetPair::new(dad.id.as_str(), "gone"))
            .unwrap();

        let compiled = pipeline.compile("kitchen");
        assert!(compiled.speaker_target.degraded);
        assert_eq!(compiled.speaker_target.target_label, "Me");
        assert_eq!(
            repo.load_selection("kitchen"),
            SpeakerTargetPair::new(dad.id.as_str(), "self")
        );

        // Already corrected: nothing to degrade the second time.
        assert!(!pipeline.compile("kitchen").speaker_target.degraded);
    }

    #[tokio::test]
    async fn malformed_sibling_connection_keeps_selection() {
        let store = InMemoryStore::with_entries([(
            twinvoice_store::keys::CONNECTIONS,
            r#"[{"id":"c1","name":"Dad","role":"Father"},{"name":"NoId","role":"Friend"}]"#,
        )]);
        let pipeline = AskPipeline::new(
            Arc::new(ScriptedProvider::text("ok")),
            ProfileRepository::new(store),
            "test-model",
        );
        let repo = pipeline.repository();
        let pair = SpeakerTargetPair::new("c1", "self");
        repo.save_selection("default", &pair).unwrap();

        let compiled = pipeline.compile("default");
        assert!(!compiled.speaker_target.degraded);
        assert_eq!(compiled.speaker_target.speaker_label, "Dad (Father)");
        assert_eq!(repo.load_selection("default"), pair);
    }

    #[tokio::test]
    async fn from_config_applies_limits() {
        let mut config = AppConfig::default();
        config.model = "llama-test".into();
        config.temperature = 0.2;
        config.context.corrections_limit = 2;

        let provider = Arc::new(ScriptedProvider::text("ok"));
        let pipeline = AskPipeline::from_config(
            provider.clone(),
            ProfileRepository::new(InMemoryStore::new()),
            &config,
        );
        for i in 0..4 {
            pipeline
                .repository()
                .add_correction(twinvoice_core::CorrectionRecord::new(
                    format!("q{i}"),
                    None,
                    format!("a{i}"),
                ))
                .unwrap();
        }
        assert_eq!(pipeline.compile("default").corrections.len(), 2);

        pipeline.ask(Some("hi"), "default").await.unwrap();
        let request = provider.last_request().unwrap();
        assert_eq!(request.model, "llama-test");
        assert!((request.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(request.max_tokens, Some(config.max_tokens));
    }
}
