//! Catalog-wide consistency checks.

use orchard::catalog;
use orchard::lookup::{self, LookupQuery};
use orchard::{Capability, Idiom, MacForm};

#[test]
fn every_identifier_resolves_to_its_own_record() {
    for device in catalog::all() {
        for identifier in &device.identifiers {
            let resolved = lookup::resolve(identifier);
            assert_eq!(
                resolved.idiom, device.idiom,
                "{identifier} resolved across idioms"
            );
            let results = lookup::lookup(&LookupQuery::identifier(identifier));
            assert!(
                results.contains(device),
                "{identifier} lookup missed {}",
                device.official_name
            );
        }
    }
}

#[test]
fn duplicate_identifiers_only_occur_on_distinct_records() {
    let mut owners: std::collections::BTreeMap<&str, Vec<&orchard::Device>> =
        std::collections::BTreeMap::new();
    for device in catalog::all() {
        for identifier in &device.identifiers {
            owners.entry(identifier).or_default().push(device);
        }
    }
    let mut duplicates = 0;
    for (identifier, devices) in owners {
        if devices.len() < 2 {
            continue;
        }
        duplicates += 1;
        for pair in devices.windows(2) {
            assert_ne!(
                pair[0], pair[1],
                "{identifier} repeated on identical records"
            );
        }
    }
    // The renamed-mid-life records share their identifiers on purpose.
    assert!(duplicates > 0);
}

#[test]
fn identifier_prefixes_match_their_tables() {
    for device in catalog::all() {
        let Some(prefix) = device.idiom.identifier_prefix() else {
            continue;
        };
        for identifier in &device.identifiers {
            assert!(
                identifier.starts_with(prefix),
                "{identifier} in the {} table",
                device.idiom.name()
            );
        }
    }
}

#[test]
fn launch_versions_are_dotted_numbers() {
    for device in catalog::all() {
        assert!(
            device
                .launch_os_version
                .split('.')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())),
            "{}: bad launch version {}",
            device.official_name,
            device.launch_os_version
        );
    }
}

#[test]
fn phones_and_watches_always_have_batteries() {
    for device in catalog::phones().iter().chain(catalog::watches()) {
        assert!(
            device.capabilities.contains(&Capability::Battery),
            "{}",
            device.official_name
        );
    }
}

#[test]
fn only_laptops_have_batteries_among_macs() {
    for device in catalog::macs() {
        let is_laptop = device.capabilities.mac_form() == Some(MacForm::MacBook);
        assert_eq!(
            device.capabilities.contains(&Capability::Battery),
            is_laptop,
            "{}",
            device.official_name
        );
    }
}

#[test]
fn watches_carry_a_case_size() {
    for device in catalog::watches() {
        assert!(device.capabilities.watch_size().is_some(), "{}", device.official_name);
        assert_eq!(device.idiom, Idiom::Watch);
    }
}

#[test]
fn well_known_records_are_present() {
    let pro_max = lookup::resolve("iPhone17,2");
    assert_eq!(pro_max.official_name, "iPhone 16 Pro Max");
    assert_eq!(pro_max.support_id, "121032");
    assert!(pro_max.models.contains(&"A3084".to_string()));

    let vision = lookup::resolve("RealityDevice14,1");
    assert_eq!(vision.official_name, "Apple Vision Pro");

    let original = lookup::resolve("iPhone1,1");
    assert_eq!(original.official_name, "iPhone");
    assert!(original.unsupported_os_version.is_some());
}
