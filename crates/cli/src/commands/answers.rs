//! `twinvoice answer`: interview answers.

use super::Workspace;

pub async fn set(ws: &Workspace, id: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let answers = ws.repo.set_answer(id, value)?;
    if value.trim().is_empty() {
        println!("Removed {id}.");
    } else {
        println!("Saved {id}.");
    }
    println!("  {} answers filled", answers.filled_count());
    Ok(())
}

pub async fn list(ws: &Workspace) -> Result<(), Box<dyn std::error::Error>> {
    let answers = ws.repo.load_answers();
    if answers.is_empty() {
        println!("No answers yet.");
        return Ok(());
    }
    for (id, value) in answers.iter() {
        println!("  {id:<28} {}", value.trim());
    }
    Ok(())
}

pub async fn clear(ws: &Workspace, confirm: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !confirm {
        println!("This will delete ALL interview answers.");
        println!("   Run with --confirm to proceed:");
        println!("   twinvoice answer clear --confirm");
        return Ok(());
    }
    ws.repo.clear_answers()?;
    println!("All answers cleared.");
    Ok(())
}
