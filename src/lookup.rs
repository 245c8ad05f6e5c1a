//! Identifier and name resolution over the catalog.
//!
//! Two entry points. `lookup` answers a structured query: exact matches on
//! identifier, model number, or support id first, falling back to fuzzy
//! official-name scoring when the exact fields find nothing but a name
//! hint was supplied. `resolve` is the total variant: it always returns a
//! record, synthesizing a forward-looking placeholder when the identifier
//! is newer than the catalog.

use crate::catalog;
use crate::device::{Device, Idiom};
use std::cmp::Ordering;

/// Hardware identifier tokens reported by simulators and Catalyst hosts.
/// These resolve to a Mac placeholder rather than the generic unknown.
const HOST_ARCH_TOKENS: &[&str] = &["x86_64", "arm64", "i386"];

/// A catalog query. Any combination of fields; an empty query matches
/// nothing. Exact fields are unioned, so a query naming both an identifier
/// and a model returns devices matching either.
#[derive(Clone, Debug, Default)]
pub struct LookupQuery {
    /// Hardware identifier as reported by the device ("iPhone17,2").
    pub identifier: Option<String>,
    /// Marketing model number ("A3084").
    pub model: Option<String>,
    /// Support-article id ("121032").
    pub support_id: Option<String>,
    /// Marketing-name hint ("iPhone 16 Pro Max"), used for ranking and for
    /// fuzzy fallback when the exact fields find nothing.
    pub name_hint: Option<String>,
}

impl LookupQuery {
    pub fn identifier(identifier: &str) -> Self {
        Self {
            identifier: Some(identifier.to_string()),
            ..Self::default()
        }
    }

    pub fn model(model: &str) -> Self {
        Self {
            model: Some(model.to_string()),
            ..Self::default()
        }
    }

    pub fn support_id(support_id: &str) -> Self {
        Self {
            support_id: Some(support_id.to_string()),
            ..Self::default()
        }
    }

    pub fn name(hint: &str) -> Self {
        Self {
            name_hint: Some(hint.to_string()),
            ..Self::default()
        }
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.name_hint = Some(hint.to_string());
        self
    }

    fn matches_exactly(&self, device: &Device) -> bool {
        if let Some(identifier) = &self.identifier {
            if device.identifiers.iter().any(|id| id == identifier) {
                return true;
            }
        }
        if let Some(model) = &self.model {
            if device.models.iter().any(|m| m == model) {
                return true;
            }
        }
        if let Some(support_id) = &self.support_id {
            if device.support_id == *support_id {
                return true;
            }
        }
        false
    }
}

/// Lowercase and collapse runs of whitespace to single spaces.
fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// What remains of the official name once the hint is removed, squeezed to
/// a bare token: parentheses and all whitespace dropped. "iPad Pro 11-inch
/// (M4)" minus "iPad Pro 11-inch" leaves "m4".
fn remainder_token(official: &str, hint: &str) -> String {
    official
        .replacen(hint, "", 1)
        .chars()
        .filter(|c| *c != '(' && *c != ')' && !c.is_whitespace())
        .collect()
}

/// Score how well a name hint describes a device, on a fixed ladder:
///
/// * `1.0`: hint equals the official name exactly.
/// * `0.9`: equal after case and whitespace normalization.
/// * `0.7`: official name contains the hint and the leftover text is
///   exactly the device's chip token ("iPad Pro 11-inch" against
///   "iPad Pro 11-inch (M4)").
/// * `0.5`: official name contains the hint.
/// * `0.3`: hint contains the official name (over-specified hint).
/// * `0.1`: no textual relationship.
/// * `0.0`: no hint given.
///
/// The thresholds are hand-tuned values carried over from long use; they
/// are not derived from anything and should not be re-tuned casually.
pub fn match_score(device: &Device, hint: Option<&str>) -> f64 {
    let Some(hint) = hint else {
        return 0.0;
    };
    if device.official_name == hint {
        return 1.0;
    }
    let official = normalize(&device.official_name);
    let needle = normalize(hint);
    if needle.is_empty() {
        return 0.1;
    }
    if official == needle {
        return 0.9;
    }
    if official.contains(&needle) {
        if remainder_token(&official, &needle) == device.cpu.case_name() {
            return 0.7;
        }
        return 0.5;
    }
    if needle.contains(&official) {
        return 0.3;
    }
    0.1
}

fn rank(mut devices: Vec<Device>, hint: Option<&str>) -> Vec<Device> {
    if hint.is_some() && devices.len() > 1 {
        let mut scored: Vec<(Device, f64)> = devices
            .into_iter()
            .map(|device| {
                let score = match_score(&device, hint);
                (device, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        devices = scored.into_iter().map(|(device, _)| device).collect();
    }
    devices
}

/// Run a query against the catalog.
///
/// Exact matches on identifier, model, or support id win outright,
/// deduplicated by full structural equality so legacy identifier
/// duplicates with differing records all surface. When the exact fields
/// match nothing and a name hint is present, every catalog entry is
/// scored against the hint and entries above the 0.1 floor are returned.
/// Either way the result is ranked best-first against the hint; the sort
/// is stable, so ties keep table order.
pub fn lookup(query: &LookupQuery) -> Vec<Device> {
    let has_exact_field =
        query.identifier.is_some() || query.model.is_some() || query.support_id.is_some();
    if has_exact_field {
        let mut matches: Vec<Device> = Vec::new();
        for device in catalog::all() {
            if query.matches_exactly(device) && !matches.contains(device) {
                matches.push(device.clone());
            }
        }
        if !matches.is_empty() {
            return rank(matches, query.name_hint.as_deref());
        }
    }

    let Some(hint) = query.name_hint.as_deref() else {
        return Vec::new();
    };
    let candidates: Vec<Device> = catalog::all()
        .iter()
        .filter(|device| match_score(device, Some(hint)) > 0.1)
        .cloned()
        .collect();
    rank(candidates, Some(hint))
}

/// Resolve an identifier to a record, always.
///
/// Catalog hits are returned as-is (first table match wins). Anything
/// unrecognized is classified by identifier shape: the idiom prefixes
/// first, then a "Mac" substring or a simulator architecture token, and
/// finally the fully generic placeholder with an empty capability set.
pub fn resolve(identifier: &str) -> Device {
    for device in catalog::all() {
        if device.identifiers.iter().any(|id| id == identifier) {
            return device.clone();
        }
    }

    let prefixed = |idiom: Idiom| {
        idiom
            .identifier_prefix()
            .is_some_and(|prefix| identifier.starts_with(prefix))
    };
    if prefixed(Idiom::Phone) {
        return Device::unknown_phone(identifier);
    }
    if prefixed(Idiom::Pad) {
        return Device::unknown_pad(identifier);
    }
    if prefixed(Idiom::Watch) {
        return Device::unknown_watch(identifier);
    }
    if prefixed(Idiom::Tv) {
        return Device::unknown_tv(identifier);
    }
    if prefixed(Idiom::HomePod) {
        return Device::unknown_home_pod(identifier);
    }
    if prefixed(Idiom::Vision) {
        return Device::unknown_vision(identifier);
    }
    if identifier.contains("Mac") || HOST_ARCH_TOKENS.contains(&identifier) {
        return Device::unknown_mac(identifier);
    }
    Device::unknown(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Cpu;

    #[test]
    fn exact_identifier_wins() {
        let results = lookup(&LookupQuery::identifier("iPhone17,2"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].official_name, "iPhone 16 Pro Max");
    }

    #[test]
    fn model_and_support_id_are_exact_fields() {
        let by_model = lookup(&LookupQuery::model("A3084"));
        assert_eq!(by_model.len(), 1);
        assert_eq!(by_model[0].official_name, "iPhone 16 Pro Max");

        let by_support = lookup(&LookupQuery::support_id("SP905"));
        assert_eq!(by_support.len(), 2);
        assert!(by_support
            .iter()
            .all(|d| d.official_name.starts_with("Apple Watch Series 9")));
    }

    #[test]
    fn exact_match_ignores_fuzzy_fallback_but_ranks_by_hint() {
        let query = LookupQuery::support_id("SP905").with_hint("Apple Watch Series 9 45mm");
        let results = lookup(&query);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].official_name, "Apple Watch Series 9 45mm");
    }

    #[test]
    fn hint_fallback_ranks_exact_name_first() {
        let results = lookup(&LookupQuery::name("iPhone 6"));
        assert!(results.len() >= 2);
        assert_eq!(results[0].official_name, "iPhone 6");
        let plus_rank = results
            .iter()
            .position(|d| d.official_name == "iPhone 6 Plus")
            .unwrap();
        assert!(plus_rank > 0);
    }

    #[test]
    fn overspecified_hint_still_finds_its_device() {
        let results = lookup(&LookupQuery::name("iPhone 6 Plus"));
        assert_eq!(results[0].official_name, "iPhone 6 Plus");
        // The shorter sibling only matches by reverse containment.
        let six = results
            .iter()
            .position(|d| d.official_name == "iPhone 6")
            .unwrap();
        assert!(six > 0);
    }

    #[test]
    fn score_ladder() {
        let device = resolve("iPhone17,2");
        assert_eq!(match_score(&device, Some("iPhone 16 Pro Max")), 1.0);
        assert_eq!(match_score(&device, Some("  iphone 16 PRO max ")), 0.9);
        assert_eq!(match_score(&device, Some("iPhone 16")), 0.5);
        assert_eq!(match_score(&device, Some("my iPhone 16 Pro Max 256GB")), 0.3);
        assert_eq!(match_score(&device, Some("Galaxy")), 0.1);
        assert_eq!(match_score(&device, None), 0.0);
    }

    #[test]
    fn chip_suffix_scores_above_plain_containment() {
        let m4 = resolve("iPad16,3");
        assert_eq!(m4.official_name, "iPad Pro 11-inch (M4)");
        assert_eq!(match_score(&m4, Some("iPad Pro 11-inch")), 0.7);
        let gen4 = resolve("iPad14,3");
        assert_eq!(match_score(&gen4, Some("iPad Pro 11-inch")), 0.5);
    }

    #[test]
    fn resolve_is_total() {
        let phone = resolve("iPhone99,9");
        assert_eq!(phone.idiom, Idiom::Phone);
        assert!(!phone.capabilities.is_empty());
        assert_eq!(phone.cpu, Cpu::Unknown);

        let mac = resolve("arm64");
        assert_eq!(mac.idiom, Idiom::Mac);

        let other = resolve("Slate3,1");
        assert_eq!(other.idiom, Idiom::Unspecified);
        assert!(other.capabilities.is_empty());
    }

    #[test]
    fn resolve_prefers_catalog_over_placeholders() {
        let device = resolve("Watch7,5");
        assert_eq!(device.official_name, "Apple Watch Ultra 2");
    }
}
