//! Dump catalog tables in one of the supported export formats.
//!
//! Usage:
//!   catalog-export --format json
//!   catalog-export --format legacy --idiom phone --out phones.txt
//!   catalog-export --format source --idiom watch

use anyhow::{Context, Result, bail};
use clap::Parser;
use orchard::catalog;
use orchard::device::Device;
use orchard::export;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-export")]
#[command(about = "Export the device catalog as JSON, legacy lines, or source")]
struct Cli {
    /// Output format: json, legacy, or source.
    #[arg(long, default_value = "json", value_parser = ["json", "legacy", "source"])]
    format: String,
    /// Restrict to one idiom: phone, pad, mac, watch, tv, homepod, vision.
    /// Exports everything when omitted.
    #[arg(long)]
    idiom: Option<String>,
    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn select_table(name: Option<&str>) -> Result<&'static [Device]> {
    let devices = match name {
        None => catalog::all(),
        Some("phone") => catalog::phones(),
        Some("pad") => catalog::pads(),
        Some("mac") => catalog::macs(),
        Some("watch") => catalog::watches(),
        Some("tv") => catalog::apple_tvs(),
        Some("homepod") => catalog::home_pods(),
        Some("vision") => catalog::visions(),
        Some(other) => bail!("unknown idiom '{}'", other),
    };
    Ok(devices)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let devices = select_table(cli.idiom.as_deref())?;

    let rendered = match cli.format.as_str() {
        "json" => export::to_json(devices)?,
        "legacy" => export::to_legacy(devices),
        "source" => export::to_source(devices),
        other => bail!("unknown format '{}'", other),
    };

    match cli.out {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("writing export to {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}
