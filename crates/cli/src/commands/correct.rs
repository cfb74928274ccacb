//! `twinvoice correct`: record how you would really have answered.

use super::Workspace;
use twinvoice_core::CorrectionRecord;

pub async fn run(
    ws: &Workspace,
    question: &str,
    corrected: &str,
    prior: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if question.trim().is_empty() || corrected.trim().is_empty() {
        return Err("Both --question and --corrected are required".into());
    }
    let prior = prior.filter(|p| !p.trim().is_empty());
    ws.repo
        .add_correction(CorrectionRecord::new(question.trim(), prior, corrected.trim()))?;
    println!(
        "Saved correction. {} stored (newest {} used per question).",
        ws.repo.load_corrections().len(),
        ws.config.context.corrections_limit
    );
    Ok(())
}
