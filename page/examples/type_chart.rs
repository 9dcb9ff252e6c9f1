use std::env;
use std::process;

use anyhow::{Context, Result};
use dexpage_page::{DetailPage, MemorySource, PageError};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let (Some(path), Some(id)) = (args.next(), args.next()) else {
        eprintln!("usage: type_chart <records.json> <id>");
        process::exit(2);
    };
    let id: u32 = id.parse().context("id must be a positive integer")?;

    let source = MemorySource::load(&path).await?;

    let page = match DetailPage::load(&source, id).await {
        Ok(page) => page,
        Err(PageError::NotFound(id)) => {
            eprintln!("No Pokemon with id {id}");
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(prev) = page.prev_link() {
        println!("< {}", prev.label);
    }
    if let Some(next) = page.next_link() {
        println!("> {}", next.label);
    }

    println!("\n{} {} ({})\n", page.title(), page.number(), page.defenders);

    for (attacker, multiplier) in page.type_chart.iter() {
        println!("  {:<10} {:>5}x", attacker.display_name(), multiplier);
    }

    let weak: Vec<&str> = page.type_chart.weaknesses().iter().map(|t| t.as_str()).collect();
    println!("\nWeak to: {}", weak.join(", "));

    Ok(())
}
