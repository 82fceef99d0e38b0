use anyhow::{bail, Result};

use folio_core::AppConfig;

pub fn run(force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save_to(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
