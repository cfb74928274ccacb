//! `twinvoice init`: first-time setup.

use std::path::PathBuf;
use twinvoice_config::AppConfig;

pub async fn run(data_dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");
    let data_dir = data_dir.unwrap_or_else(|| AppConfig::default().store.data_dir);

    println!("twinvoice: first-time setup");
    println!("===========================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        println!("Created data directory: {}", data_dir.display());
    }

    if config_path.exists() {
        println!("\nConfig already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run init.\n");
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("Created config.toml at: {}", config_path.display());
    }

    println!("\nNext steps:");
    println!("   1. Set GROQ_API_KEY (or api_key in {})", config_path.display());
    println!("   2. twinvoice account set --name \"Your name\"");
    println!("   3. twinvoice answer set identity_words \"calm, direct, curious\"");
    println!("   4. twinvoice ask \"What should I do this weekend?\"\n");

    Ok(())
}
