//! Catalog serialization.
//!
//! Three renderings: JSON for downstream tooling, the legacy pipe-delimited
//! feed older ingest jobs still consume, and Rust source for regenerating
//! table literals from an edited export.

use crate::device::{Device, Idiom};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Pretty-printed JSON array of device records.
pub fn to_json(devices: &[Device]) -> Result<String> {
    serde_json::to_string_pretty(devices).context("serializing device records to JSON")
}

/// Write the JSON rendering to a file.
pub fn write_json(devices: &[Device], path: &Path) -> Result<()> {
    let json = to_json(devices)?;
    fs::write(path, json).with_context(|| format!("writing catalog export to {}", path.display()))
}

/// Legacy line format, one device per line:
///
/// ```text
/// idiom|official name|id,id|support id|launch|cpu|model,model
/// ```
///
/// Fields never contain pipes; list fields are comma-joined and may be
/// empty. Consumers of this feed key on position, so the column order is
/// frozen.
pub fn to_legacy(devices: &[Device]) -> String {
    let mut out = String::new();
    for device in devices {
        let _ = writeln!(
            out,
            "{}|{}|{}|{}|{}|{}|{}",
            device.idiom.name(),
            device.official_name,
            device.identifiers.join(","),
            device.support_id,
            device.launch_os_version,
            device.cpu.name(),
            device.models.join(","),
        );
    }
    out
}

/// Render devices back as table-literal source. Only identity fields are
/// rendered; capability chains are curated by hand.
pub fn to_source(devices: &[Device]) -> String {
    let mut out = String::new();
    for device in devices {
        let constructor = match device.idiom {
            Idiom::Phone => "phone",
            Idiom::Pad => "pad",
            Idiom::Mac => "mac",
            Idiom::Watch => "watch",
            Idiom::Tv => "apple_tv",
            Idiom::HomePod => "home_pod",
            Idiom::Vision => "vision",
            // Placeholders have no table literal to regenerate.
            Idiom::CarPlay | Idiom::Unspecified => continue,
        };
        let identifiers = device
            .identifiers
            .iter()
            .map(|id| format!("{id:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(
            out,
            "Device::{constructor}({:?}, &[{identifiers}], {:?}, {:?}, Cpu::{:?}",
            device.official_name, device.support_id, device.launch_os_version, device.cpu,
        );
        match constructor {
            "mac" => {
                if let Some(form) = device.capabilities.mac_form() {
                    let _ = write!(out, ", MacForm::{form:?}");
                }
            }
            "watch" => {
                if let Some(size) = device.capabilities.watch_size() {
                    let _ = write!(out, ", WatchSize::{size:?}");
                }
            }
            _ => {}
        }
        let _ = write!(out, ")");
        if !device.models.is_empty() {
            let models = device
                .models
                .iter()
                .map(|m| format!("{m:?}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = write!(out, ".with_models(&[{models}])");
        }
        if let Some(version) = &device.unsupported_os_version {
            let _ = write!(out, ".unsupported_since({version:?})");
        }
        let _ = writeln!(out, ",");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::lookup;

    #[test]
    fn json_is_an_array_of_records() {
        let devices = vec![lookup::resolve("iPhone17,2")];
        let json = to_json(&devices).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(1));
        assert_eq!(parsed[0]["official_name"], "iPhone 16 Pro Max");
    }

    #[test]
    fn legacy_lines_have_seven_columns() {
        let rendered = to_legacy(catalog::phones());
        for line in rendered.lines() {
            assert_eq!(line.split('|').count(), 7, "{line}");
        }
        assert!(rendered.contains("iPhone|iPhone 16 Pro Max|iPhone17,2|121032|18.0|A18 Pro|"));
    }

    #[test]
    fn source_rendering_round_trips_identity() {
        let rendered = to_source(&[lookup::resolve("Watch7,5")]);
        assert!(rendered.contains("Device::watch(\"Apple Watch Ultra 2\""));
        assert!(rendered.contains("WatchSize::Mm49"));
    }

    #[test]
    fn write_json_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        write_json(catalog::visions(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Apple Vision Pro"));
    }
}
