//! `twinvoice prompt`: the full instructions a question would carry.

use super::Workspace;
use twinvoice_agent::{compile_session, ContextSettings};

pub async fn run(ws: &Workspace, session: &str) -> Result<(), Box<dyn std::error::Error>> {
    let settings = ContextSettings::from(&ws.config.context);
    let compiled = compile_session(&ws.repo, session, &settings);
    if compiled.speaker_target.degraded {
        eprintln!("Note: the selected connection no longer exists; reset to yourself.");
    }
    println!("{}", compiled.system_prompt);
    Ok(())
}
