//! `twinvoice status`: config and readiness overview.

use super::Workspace;
use twinvoice_agent::Readiness;
use twinvoice_config::AppConfig;
use twinvoice_core::Provider;

pub async fn run(ws: &Workspace, check: bool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = &ws.repo;
    let account = repo.load_account();
    let answers = repo.load_answers();
    let readiness = Readiness::evaluate(account.as_ref(), &answers);
    let mark = |ok: bool| if ok { "ok" } else { "missing" };

    println!("twinvoice status");
    println!("================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Data dir:     {}", repo.store().dir().display());
    println!("  Endpoint:     {}", ws.config.api_url);
    println!("  Model:        {}", ws.config.model);
    println!("  API key:      {}", mark(ws.config.has_api_key()));
    if check {
        let line = match twinvoice_providers::from_config(&ws.config) {
            Ok(provider) => endpoint_status(&provider).await,
            Err(e) => format!("not checked ({e})"),
        };
        println!("  Reachable:    {line}");
    }
    println!();
    println!(
        "  Name:         {} ({})",
        account.as_ref().and_then(|a| a.name()).unwrap_or("-"),
        mark(readiness.name_ok)
    );
    println!(
        "  Answers:      {} filled ({})",
        readiness.filled,
        mark(readiness.interview_ok)
    );
    println!("  Connections:  {}", repo.load_connections().len());
    println!("  Corrections:  {}", repo.load_corrections().len());
    println!("  Memory facts: {}", repo.load_memory_facts().len());

    if readiness.is_ready() {
        println!("\n  Ready: ask away with `twinvoice ask`.");
    } else {
        println!("\n  Not ready yet: set a name and answer at least 3 questions.");
    }

    Ok(())
}

/// One-line result of the provider health check.
async fn endpoint_status(provider: &dyn Provider) -> String {
    match provider.health_check().await {
        Ok(true) => format!("yes ({})", provider.name()),
        Ok(false) => format!("no: {} rejected the request", provider.name()),
        Err(e) => format!("no: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinvoice_core::{ProviderError, ProviderRequest, ProviderResponse};

    struct FixedHealth(Result<bool, ProviderError>);

    #[async_trait::async_trait]
    impl Provider for FixedHealth {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn complete(&self, _: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
            Err(ProviderError::EmptyResponse)
        }

        async fn health_check(&self) -> Result<bool, ProviderError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn endpoint_status_lines() {
        assert_eq!(endpoint_status(&FixedHealth(Ok(true))).await, "yes (fixed)");
        assert_eq!(
            endpoint_status(&FixedHealth(Ok(false))).await,
            "no: fixed rejected the request"
        );
        let line = endpoint_status(&FixedHealth(Err(ProviderError::Network("refused".into())))).await;
        assert_eq!(line, "no: Network error: refused");
    }
}
