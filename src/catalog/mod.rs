//! The static device catalog.
//!
//! One table per idiom, authored with the `Device` builder constructors and
//! materialized lazily on first access. Tables are read-only for the life
//! of the process; every accessor hands out `&'static [Device]` views.
//!
//! Identifiers are not globally unique: legacy duplicates exist where a
//! model was renamed mid-life and both records were kept. Nothing here
//! indexes by identifier; the lookup layer scans and deduplicates by full
//! structural equality instead.

mod apple_tv;
mod home_pod;
mod ipad;
mod iphone;
mod mac;
mod vision;
mod watch;

use crate::device::Device;
use std::sync::LazyLock;

static PHONES: LazyLock<Vec<Device>> = LazyLock::new(iphone::devices);
static PADS: LazyLock<Vec<Device>> = LazyLock::new(ipad::devices);
static MACS: LazyLock<Vec<Device>> = LazyLock::new(mac::devices);
static WATCHES: LazyLock<Vec<Device>> = LazyLock::new(watch::devices);
static APPLE_TVS: LazyLock<Vec<Device>> = LazyLock::new(apple_tv::devices);
static HOME_PODS: LazyLock<Vec<Device>> = LazyLock::new(home_pod::devices);
static VISIONS: LazyLock<Vec<Device>> = LazyLock::new(vision::devices);

static ALL: LazyLock<Vec<Device>> = LazyLock::new(|| {
    let mut all = Vec::new();
    all.extend_from_slice(&PHONES);
    all.extend_from_slice(&PADS);
    all.extend_from_slice(&MACS);
    all.extend_from_slice(&WATCHES);
    all.extend_from_slice(&APPLE_TVS);
    all.extend_from_slice(&HOME_PODS);
    all.extend_from_slice(&VISIONS);
    all
});

pub fn phones() -> &'static [Device] {
    &PHONES
}

pub fn pads() -> &'static [Device] {
    &PADS
}

pub fn macs() -> &'static [Device] {
    &MACS
}

pub fn watches() -> &'static [Device] {
    &WATCHES
}

pub fn apple_tvs() -> &'static [Device] {
    &APPLE_TVS
}

pub fn home_pods() -> &'static [Device] {
    &HOME_PODS
}

pub fn visions() -> &'static [Device] {
    &VISIONS
}

/// Every catalog entry, in stable table order (phones first).
pub fn all() -> &'static [Device] {
    &ALL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Idiom;

    #[test]
    fn tables_are_nonempty_and_consistently_tagged() {
        let cases: &[(&[Device], Idiom)] = &[
            (phones(), Idiom::Phone),
            (pads(), Idiom::Pad),
            (macs(), Idiom::Mac),
            (watches(), Idiom::Watch),
            (apple_tvs(), Idiom::Tv),
            (home_pods(), Idiom::HomePod),
            (visions(), Idiom::Vision),
        ];
        for (table, idiom) in cases {
            assert!(!table.is_empty());
            for device in *table {
                assert_eq!(device.idiom, *idiom, "{}", device.official_name);
                assert!(!device.identifiers.is_empty(), "{}", device.official_name);
                assert!(!device.official_name.is_empty());
            }
        }
    }

    #[test]
    fn all_is_the_concatenation() {
        let expected = phones().len()
            + pads().len()
            + macs().len()
            + watches().len()
            + apple_tvs().len()
            + home_pods().len()
            + visions().len();
        assert_eq!(all().len(), expected);
    }
}
