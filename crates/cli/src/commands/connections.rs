//! `twinvoice connections`: people you can speak as or about.

use super::Workspace;
use twinvoice_core::Relationship;

pub async fn add(
    ws: &Workspace,
    name: &str,
    role: &str,
    invite_code: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let role = Relationship::parse(role).unwrap_or_default();
    let connection = ws.repo.add_connection(name, role, invite_code)?;
    println!("Added {} ({}).", connection.name, connection.role);
    println!("  id: {}", connection.id);
    Ok(())
}

pub async fn remove(ws: &Workspace, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    if ws.repo.remove_connection(id)? {
        println!("Removed connection {id}.");
    } else {
        println!("No connection with id {id}.");
    }
    Ok(())
}

pub async fn list(ws: &Workspace) -> Result<(), Box<dyn std::error::Error>> {
    let connections = ws.repo.load_connections();
    if connections.is_empty() {
        println!("No connections yet.");
        return Ok(());
    }
    for c in &connections {
        println!("  {}  {} ({})", c.id, c.name, c.role);
    }
    Ok(())
}
