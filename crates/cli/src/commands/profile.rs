//! `twinvoice profile`: compiled profile summary.

use super::Workspace;
use twinvoice_agent::context::profile;

pub async fn run(ws: &Workspace) -> Result<(), Box<dyn std::error::Error>> {
    let answers = ws.repo.load_answers();
    let groups = profile::by_section(&answers);
    println!("Profile ({} answers filled)", answers.filled_count());
    println!("==========================");
    if groups.is_empty() {
        println!("(No profile provided.)");
        return Ok(());
    }
    for (section, lines) in groups {
        println!("\n[{}]", section.title());
        for line in lines {
            println!("  {line}");
        }
    }
    Ok(())
}
