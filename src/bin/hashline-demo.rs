#![forbid(unsafe_code)]
//! Walkthrough of a tamper-evident chain: build it, break it, watch
//! validation catch both the stale hash and the broken back-link.

use clap::Parser;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Color as TableColor;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use hashline::blockchain::{Block, Chain};
use serde_json::json;

const LOGO: &str = r#"
╔═══════════════════════════════════════════════════════════════════╗
║   ██╗  ██╗ █████╗ ███████╗██╗  ██╗██╗     ██╗███╗   ██╗███████╗   ║
║   ██║  ██║██╔══██╗██╔════╝██║  ██║██║     ██║████╗  ██║██╔════╝   ║
║   ███████║███████║███████╗███████║██║     ██║██╔██╗ ██║█████╗     ║
║   ██╔══██║██╔══██║╚════██║██╔══██║██║     ██║██║╚██╗██║██╔══╝     ║
║   ██║  ██║██║  ██║███████║██║  ██║███████╗██║██║ ╚████║███████╗   ║
║   ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝╚══════╝╚═╝╚═╝  ╚═══╝╚══════╝   ║
║                  🔗 Tamper-Evident Chain Demo 🔗                   ║
╚═══════════════════════════════════════════════════════════════════╝
"#;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dump the chain as pretty-printed JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    println!("{}", LOGO.bright_magenta());

    let mut chain = Chain::new();
    chain.add_block(Block::new(1, "2017-02-23", json!({ "amount": 1 })));
    chain.add_block(Block::new(2, "2017-03-23", json!({ "amount": 3 })));
    chain.add_block(Block::new(3, "2017-04-23", json!({ "amount": 20 })));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&chain)?);
    } else {
        print_chain(&chain);
    }

    println!();
    report_verdict(&chain);

    println!();
    println!(
        "{}",
        "✏️  Tampering with block #1's payload (amount: 1 → 2)...".bright_yellow()
    );
    chain.blocks[1].data = json!({ "amount": 2 });
    report_verdict(&chain);

    println!();
    println!(
        "{}",
        "🔨 Resealing block #1 to cover the tracks...".bright_yellow()
    );
    chain.blocks[1].reseal();
    report_verdict(&chain);

    println!();
    println!(
        "{}",
        "Every block after the edit would need a reseal too, and the"
            .bright_cyan()
    );
    println!(
        "{}",
        "rewrite grows with the chain. That is the whole trick.".bright_cyan()
    );

    Ok(())
}

fn print_chain(chain: &Chain) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Index")
                .fg(TableColor::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("Timestamp")
                .fg(TableColor::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("Data")
                .fg(TableColor::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("Prev Hash")
                .fg(TableColor::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("Hash")
                .fg(TableColor::Cyan)
                .add_attribute(Attribute::Bold),
        ]);

    for block in &chain.blocks {
        table.add_row(vec![
            Cell::new(format!("#{}", block.index)).fg(TableColor::White),
            Cell::new(&block.timestamp).fg(TableColor::Grey),
            Cell::new(serde_json::to_string(&block.data).unwrap_or_default())
                .fg(TableColor::White),
            Cell::new(short(&block.prev_hash)).fg(TableColor::Yellow),
            Cell::new(short(&block.hash)).fg(TableColor::Green),
        ]);
    }

    println!("{}", table);
}

fn report_verdict(chain: &Chain) {
    match chain.validate() {
        Ok(()) => println!("{}", "✅ Chain valid".bright_green().bold()),
        Err(err) => println!("{} {}", "❌ Chain broken:".red().bold(), err),
    }
}

fn short(digest: &str) -> String {
    if digest.len() > 16 {
        format!("{}...", &digest[..13])
    } else {
        digest.to_string()
    }
}
