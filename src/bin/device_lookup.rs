//! Resolve hardware identifiers, model numbers, or name hints from the
//! command line.
//!
//! Usage:
//!   device-lookup --identifier iPhone17,2
//!   device-lookup --model A3084
//!   device-lookup --support-id SP905 --name "Apple Watch Series 9 45mm"
//!   device-lookup --resolve iPhone99,9

use anyhow::{Result, bail};
use clap::Parser;
use orchard::lookup::{LookupQuery, lookup, resolve};

#[derive(Parser, Debug)]
#[command(name = "device-lookup")]
#[command(about = "Resolve Apple hardware identifiers against the catalog")]
struct Cli {
    /// Hardware identifier ("iPhone17,2").
    #[arg(long)]
    identifier: Option<String>,
    /// Marketing model number ("A3084").
    #[arg(long)]
    model: Option<String>,
    /// Support-article id ("121032").
    #[arg(long)]
    support_id: Option<String>,
    /// Marketing-name hint, used for fuzzy fallback and ranking.
    #[arg(long)]
    name: Option<String>,
    /// Resolve one identifier totally, synthesizing a placeholder when the
    /// catalog does not know it. Exclusive with the query flags.
    #[arg(long, value_name = "IDENTIFIER", conflicts_with_all = ["identifier", "model", "support_id", "name"])]
    resolve: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(identifier) = &cli.resolve {
        let device = resolve(identifier);
        println!("{}", orchard::export::to_json(&[device])?);
        return Ok(());
    }

    if cli.identifier.is_none() && cli.model.is_none() && cli.support_id.is_none() && cli.name.is_none() {
        bail!("nothing to look up; pass --identifier, --model, --support-id, or --name");
    }

    let query = LookupQuery {
        identifier: cli.identifier,
        model: cli.model,
        support_id: cli.support_id,
        name_hint: cli.name,
    };
    let results = lookup(&query);
    if results.is_empty() {
        bail!("no catalog entry matched; try --resolve for a placeholder record");
    }
    println!("{}", orchard::export::to_json(&results)?);
    Ok(())
}
