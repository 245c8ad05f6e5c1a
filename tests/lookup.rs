//! Lookup and resolution behavior over the full catalog.

use orchard::lookup::{LookupQuery, lookup, match_score, resolve};
use orchard::{Capability, Cpu, Idiom};

#[test]
fn exact_identifier_lookup() {
    let results = lookup(&LookupQuery::identifier("iPhone17,2"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].official_name, "iPhone 16 Pro Max");
}

#[test]
fn unknown_identifier_with_no_hint_finds_nothing() {
    assert!(lookup(&LookupQuery::identifier("iPhone99,9")).is_empty());
}

#[test]
fn renamed_model_surfaces_under_both_names() {
    // iPad4,4 shipped as "iPad mini with Retina display" and was renamed
    // "iPad mini 2"; both records stay in the table and an identifier
    // lookup returns both.
    let results = lookup(&LookupQuery::identifier("iPad4,4"));
    assert_eq!(results.len(), 2);
    assert_ne!(results[0], results[1]);
    let names: Vec<&str> = results.iter().map(|d| d.official_name.as_str()).collect();
    assert!(names.contains(&"iPad mini 2"));
    assert!(names.contains(&"iPad mini with Retina display"));
    for device in &results {
        assert!(device.identifiers.iter().any(|id| id == "iPad4,4"));
    }
}

#[test]
fn hint_fallback_ranks_by_score_then_table_order() {
    let results = lookup(&LookupQuery::name("iPhone 6"));
    assert_eq!(results[0].official_name, "iPhone 6");

    // Everything scoring at the 0.1 floor is excluded outright.
    assert!(results.iter().all(|d| {
        let score = match_score(d, Some("iPhone 6"));
        score > 0.1
    }));

    // Containment matches ("iPhone 6 Plus", "iPhone 6s") follow the exact
    // one, preserving their relative table order.
    let plus = results
        .iter()
        .position(|d| d.official_name == "iPhone 6 Plus")
        .expect("iPhone 6 Plus in results");
    let six_s = results
        .iter()
        .position(|d| d.official_name == "iPhone 6s")
        .expect("iPhone 6s in results");
    assert!(plus < six_s);
}

#[test]
fn hint_with_chip_suffix_outranks_sibling_generations() {
    let results = lookup(&LookupQuery::name("iPad Pro 11-inch"));
    // The 2018 model owns that exact name; the M4's chip-suffix match beats
    // the parenthesized generational siblings.
    assert_eq!(results[0].official_name, "iPad Pro 11-inch");
    let m4 = results
        .iter()
        .position(|d| d.official_name == "iPad Pro 11-inch (M4)")
        .expect("M4 in results");
    let gen4 = results
        .iter()
        .position(|d| d.official_name == "iPad Pro 11-inch (4th generation)")
        .expect("4th generation in results");
    assert!(m4 < gen4);
}

#[test]
fn no_hint_scores_zero() {
    let device = resolve("iPhone17,2");
    assert_eq!(match_score(&device, None), 0.0);
}

#[test]
fn resolve_never_fails() {
    let cases = [
        ("iPhone99,9", Idiom::Phone),
        ("iPad99,1", Idiom::Pad),
        ("Watch99,1", Idiom::Watch),
        ("AppleTV99,1", Idiom::Tv),
        ("AudioAccessory99,1", Idiom::HomePod),
        ("RealityDevice99,1", Idiom::Vision),
        ("Mac99,1", Idiom::Mac),
        ("MacBookPro99,1", Idiom::Mac),
        ("x86_64", Idiom::Mac),
        ("arm64", Idiom::Mac),
        ("Slate3,1", Idiom::Unspecified),
    ];
    for (identifier, idiom) in cases {
        let device = resolve(identifier);
        assert_eq!(device.idiom, idiom, "{identifier}");
        assert_eq!(device.cpu, Cpu::Unknown, "{identifier}");
        assert_eq!(device.identifiers, vec![identifier.to_string()]);
    }
}

#[test]
fn unknown_phone_placeholder_is_forward_looking() {
    let device = resolve("iPhone99,9");
    assert!(!device.capabilities.is_empty());
    assert!(device.capabilities.contains(&Capability::DynamicIsland));
    assert!(device.capabilities.contains(&Capability::AppleIntelligence));
    assert_eq!(device.official_name, "Unknown iPhone");
}

#[test]
fn fully_unrecognized_identifier_gets_empty_capabilities() {
    let device = resolve("Slate3,1");
    assert!(device.capabilities.is_empty());
    assert_eq!(device.official_name, "Unknown Device");
}

#[test]
fn empty_query_matches_nothing() {
    assert!(lookup(&LookupQuery::default()).is_empty());
}
