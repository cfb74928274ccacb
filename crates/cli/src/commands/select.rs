//! `twinvoice select`: speaker and target for a session.

use super::Workspace;
use twinvoice_agent::context::resolve_speaker_target;
use twinvoice_core::SpeakerTargetPair;
use twinvoice_store::keys;

pub async fn run(
    ws: &Workspace,
    speaker: &str,
    target: &str,
    session: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let account = ws.repo.load_account();
    let connections = ws.repo.load_connections();
    let resolved = resolve_speaker_target(
        account.as_ref(),
        &connections,
        &SpeakerTargetPair::new(speaker, target),
    );
    if resolved.degraded {
        println!("Unknown connection id; using yourself instead.");
    }
    let stored_as = keys::session_id(session);
    if stored_as != session.trim() {
        println!("Session name {session:?} is stored as {stored_as:?}.");
    }
    ws.repo.save_selection(session, &resolved.pair)?;
    println!("{}", resolved.summary());
    Ok(())
}
