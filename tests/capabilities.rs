//! Capability-set behavior through the public API.

use orchard::{
    Biometrics, Camera, Capabilities, Capability, Cellular, Stylus, WatchSize, screen,
};
use std::collections::BTreeSet;

#[test]
fn typed_accessors_round_trip() {
    let mut set = Capabilities::new();
    set.set_screen(Some(screen::IN_6_9));
    set.set_cellular(Some(Cellular::FiveG));
    set.set_biometrics(Some(Biometrics::FaceId));

    assert_eq!(set.screen(), Some(screen::IN_6_9));
    assert_eq!(set.cellular(), Some(Cellular::FiveG));
    assert_eq!(set.biometrics(), Some(Biometrics::FaceId));
}

#[test]
fn setting_a_payload_case_twice_keeps_one_element() {
    let mut set = Capabilities::new();
    set.set_cellular(Some(Cellular::Lte));
    set.set_cellular(Some(Cellular::FiveG));
    let cellular_count = set
        .iter()
        .filter(|c| matches!(c, Capability::Cellular(_)))
        .count();
    assert_eq!(cellular_count, 1);
    assert_eq!(set.cellular(), Some(Cellular::FiveG));
}

#[test]
fn clearing_a_payload_case_removes_it() {
    let mut set = Capabilities::new();
    set.set_watch_size(Some(WatchSize::Mm49));
    set.set_watch_size(None);
    assert_eq!(set.watch_size(), None);
    assert!(set.is_empty());
}

#[test]
fn empty_collections_read_as_absent() {
    let mut set = Capabilities::new();
    set.set_cameras(BTreeSet::new());
    assert!(set.cameras().is_empty());
    assert!(set.is_empty());

    set.set_pencils([Stylus::Pro, Stylus::UsbC].into_iter().collect());
    assert_eq!(set.pencils().len(), 2);
}

#[test]
fn duplicate_inserts_collapse() {
    let mut set = Capabilities::new();
    set.insert(Capability::Nfc);
    set.insert(Capability::Nfc);
    set.insert(Capability::ApplePay);
    assert_eq!(set.len(), 2);
}

#[test]
fn equality_ignores_insertion_order() {
    let mut a = Capabilities::new();
    a.insert(Capability::Nfc);
    a.insert(Capability::Lightning);

    let mut b = Capabilities::new();
    b.insert(Capability::Lightning);
    b.insert(Capability::Nfc);

    assert_eq!(a, b);
}

#[test]
fn camera_sets_are_ordered() {
    let mut set = Capabilities::new();
    set.set_cameras(
        [Camera::Telephoto, Camera::Wide, Camera::TrueDepth]
            .into_iter()
            .collect(),
    );
    let cameras: Vec<Camera> = set.cameras().into_iter().collect();
    assert_eq!(cameras, vec![Camera::TrueDepth, Camera::Wide, Camera::Telephoto]);
}
