//! `twinvoice memory`: facts the twin always treats as true.

use super::Workspace;

pub async fn add(
    ws: &Workspace,
    fact: &str,
    tag: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let item = ws.repo.add_memory_fact(fact, tag)?;
    println!("Saved memory fact {}.", item.id);
    Ok(())
}

pub async fn list(ws: &Workspace) -> Result<(), Box<dyn std::error::Error>> {
    let facts = ws.repo.load_memory_facts();
    if facts.is_empty() {
        println!("No memory facts yet.");
        return Ok(());
    }
    println!("Memory facts (newest first, {} used per question)", ws.config.context.memory_facts_limit);
    for f in &facts {
        match &f.tag {
            Some(tag) => println!("  {}  [{tag}] {}", f.id, f.fact),
            None => println!("  {}  {}", f.id, f.fact),
        }
    }
    Ok(())
}

pub async fn edit(
    ws: &Workspace,
    id: &str,
    fact: Option<&str>,
    tag: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    if ws.repo.update_memory_fact(id, fact, tag)? {
        println!("Updated memory fact {id}.");
    } else {
        println!("No memory fact with id {id}.");
    }
    Ok(())
}

pub async fn delete(ws: &Workspace, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    if ws.repo.delete_memory_fact(id)? {
        println!("Deleted memory fact {id}.");
    } else {
        println!("No memory fact with id {id}.");
    }
    Ok(())
}

pub async fn clear(ws: &Workspace, confirm: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !confirm {
        println!("This will delete ALL memory facts permanently.");
        println!("   Run with --confirm to proceed:");
        println!("   twinvoice memory clear --confirm");
        return Ok(());
    }
    ws.repo.clear_memory_facts()?;
    println!("All memory facts cleared.");
    Ok(())
}
