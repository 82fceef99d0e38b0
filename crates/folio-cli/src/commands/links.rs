use anyhow::Result;

use folio_core::content::{outbound_links, LinkTarget, Section};

pub fn run(json: bool) -> Result<()> {
    let links = outbound_links();

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    println!("Outbound links ({}):\n", links.len());

    let mut current: Option<Section> = None;
    for link in &links {
        if current != Some(link.section) {
            if current.is_some() {
                println!();
            }
            println!("  {}", link.section.heading());
            current = Some(link.section);
        }
        let target = match link.target {
            LinkTarget::External(href) => href,
            LinkTarget::Asset(path) => path,
            LinkTarget::Anchor(anchor) => anchor,
        };
        println!("    {} - {}", link.label, target);
    }

    Ok(())
}
