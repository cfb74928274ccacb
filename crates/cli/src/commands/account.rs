//! `twinvoice account`: name, bio and tone.

use super::Workspace;
use twinvoice_core::Tone;

pub async fn set(
    ws: &Workspace,
    name: &str,
    bio: Option<&str>,
    tone: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tone = match tone {
        Some(raw) => Tone::parse(raw).ok_or_else(|| {
            let options: Vec<&str> = Tone::ALL.iter().map(|t| t.as_str()).collect();
            format!("Unknown tone {raw:?}; expected one of {}", options.join(", "))
        })?,
        None => ws.repo.load_account().map(|a| a.tone).unwrap_or_default(),
    };
    let account = ws.repo.save_account(name, bio, tone)?;
    println!("Saved account for {}.", account.display_name);
    println!("  Tone: {} ({})", account.tone, account.tone.help());
    Ok(())
}

pub async fn show(ws: &Workspace) -> Result<(), Box<dyn std::error::Error>> {
    match ws.repo.load_account() {
        Some(account) => {
            println!("  Name: {}", account.display_name);
            println!("  Bio:  {}", account.bio.as_deref().unwrap_or("-"));
            println!("  Tone: {} ({})", account.tone, account.tone.help());
        }
        None => println!("No account yet. Run `twinvoice account set --name ...`."),
    }
    Ok(())
}
