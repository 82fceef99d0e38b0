use anyhow::Result;

use folio_core::content::{nav_index, Section};

pub fn run() -> Result<()> {
    println!("Sections, top to bottom:\n");

    for section in Section::ALL {
        let anchor = section
            .anchor()
            .map(|a| format!("#{}", a))
            .unwrap_or_else(|| "-".to_string());
        let nav = section
            .anchor()
            .and_then(nav_index)
            .map(|i| format!("nav {}", i + 1))
            .unwrap_or_default();
        println!("  {:<32} {:<15} {}", section.heading(), anchor, nav);
    }

    Ok(())
}
