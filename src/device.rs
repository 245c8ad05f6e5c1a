//! The device record and its construction idioms.
//!
//! A `Device` is an immutable description of one hardware model: category,
//! official name, the hardware identifiers it reports (several per model
//! when regional or cellular variants exist), support-article id, OS
//! support window, capabilities, marketing model numbers, material colors,
//! and chip tag. Records are built once into the static catalog tables and
//! never mutated afterwards.
//!
//! Construction goes through per-idiom constructors (`Device::phone`, …)
//! that seed the idiom's baseline capability set, followed by chained
//! `with_*` calls. The `unknown_*` constructors back the total
//! identifier-resolution fallback: they seed a forward-looking default set
//! so callers always get a usable record for hardware newer than the
//! catalog.

use crate::capability::{
    Biometrics, Camera, Capabilities, Capability, Cellular, MacForm, Stylus, WatchSize,
};
use crate::screen::Screen;
use serde::Serialize;
use std::collections::BTreeSet;

/// Device category, after Apple's "user interface idiom".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Idiom {
    Phone,
    Pad,
    Mac,
    Watch,
    Tv,
    HomePod,
    Vision,
    CarPlay,
    /// Category of the fully generic placeholder; no real hardware
    /// reports it.
    Unspecified,
}

impl Idiom {
    pub fn name(self) -> &'static str {
        match self {
            Idiom::Phone => "iPhone",
            Idiom::Pad => "iPad",
            Idiom::Mac => "Mac",
            Idiom::Watch => "Apple Watch",
            Idiom::Tv => "Apple TV",
            Idiom::HomePod => "HomePod",
            Idiom::Vision => "Apple Vision",
            Idiom::CarPlay => "CarPlay",
            Idiom::Unspecified => "Unknown",
        }
    }

    /// Canonical hardware-identifier prefix, where the idiom has one.
    /// Macs are recognized by substring instead (`Macmini9,1`,
    /// `MacBookPro18,3`, `Mac14,2` share no common prefix position).
    pub fn identifier_prefix(self) -> Option<&'static str> {
        match self {
            Idiom::Phone => Some("iPhone"),
            Idiom::Pad => Some("iPad"),
            Idiom::Watch => Some("Watch"),
            Idiom::Tv => Some("AppleTV"),
            Idiom::HomePod => Some("AudioAccessory"),
            Idiom::Vision => Some("RealityDevice"),
            Idiom::Mac | Idiom::CarPlay | Idiom::Unspecified => None,
        }
    }
}

/// Chip tag. `name` is the marketing spelling, `case_name` the lowercase
/// token the fuzzy matcher compares name remainders against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Cpu {
    // Pre-"A" Samsung parts in the earliest hardware.
    S5L8900,
    S5L8920,
    A4,
    A5,
    A5X,
    A6,
    A6X,
    A7,
    A8,
    A8X,
    A9,
    A9X,
    A10,
    A10X,
    A11,
    A12,
    A12X,
    A12Z,
    A13,
    A14,
    A15,
    A16,
    A17Pro,
    A18,
    A18Pro,
    M1,
    M1Pro,
    M1Max,
    M1Ultra,
    M2,
    M2Pro,
    M2Max,
    M2Ultra,
    M3,
    M3Pro,
    M3Max,
    M4,
    M4Pro,
    M4Max,
    S1,
    S1P,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
    Intel,
    Unknown,
}

impl Cpu {
    pub fn name(self) -> &'static str {
        match self {
            Cpu::S5L8900 => "S5L8900",
            Cpu::S5L8920 => "S5L8920",
            Cpu::A4 => "A4",
            Cpu::A5 => "A5",
            Cpu::A5X => "A5X",
            Cpu::A6 => "A6",
            Cpu::A6X => "A6X",
            Cpu::A7 => "A7",
            Cpu::A8 => "A8",
            Cpu::A8X => "A8X",
            Cpu::A9 => "A9",
            Cpu::A9X => "A9X",
            Cpu::A10 => "A10 Fusion",
            Cpu::A10X => "A10X Fusion",
            Cpu::A11 => "A11 Bionic",
            Cpu::A12 => "A12 Bionic",
            Cpu::A12X => "A12X Bionic",
            Cpu::A12Z => "A12Z Bionic",
            Cpu::A13 => "A13 Bionic",
            Cpu::A14 => "A14 Bionic",
            Cpu::A15 => "A15 Bionic",
            Cpu::A16 => "A16 Bionic",
            Cpu::A17Pro => "A17 Pro",
            Cpu::A18 => "A18",
            Cpu::A18Pro => "A18 Pro",
            Cpu::M1 => "M1",
            Cpu::M1Pro => "M1 Pro",
            Cpu::M1Max => "M1 Max",
            Cpu::M1Ultra => "M1 Ultra",
            Cpu::M2 => "M2",
            Cpu::M2Pro => "M2 Pro",
            Cpu::M2Max => "M2 Max",
            Cpu::M2Ultra => "M2 Ultra",
            Cpu::M3 => "M3",
            Cpu::M3Pro => "M3 Pro",
            Cpu::M3Max => "M3 Max",
            Cpu::M4 => "M4",
            Cpu::M4Pro => "M4 Pro",
            Cpu::M4Max => "M4 Max",
            Cpu::S1 => "S1",
            Cpu::S1P => "S1P",
            Cpu::S2 => "S2",
            Cpu::S3 => "S3",
            Cpu::S4 => "S4",
            Cpu::S5 => "S5",
            Cpu::S6 => "S6",
            Cpu::S7 => "S7",
            Cpu::S8 => "S8",
            Cpu::S9 => "S9",
            Cpu::S10 => "S10",
            Cpu::Intel => "Intel",
            Cpu::Unknown => "Unknown",
        }
    }

    /// Lowercase case token ("a18pro", "m4", "s9"). Explicit mapping; the
    /// matcher depends on these being stable.
    pub fn case_name(self) -> &'static str {
        match self {
            Cpu::S5L8900 => "s5l8900",
            Cpu::S5L8920 => "s5l8920",
            Cpu::A4 => "a4",
            Cpu::A5 => "a5",
            Cpu::A5X => "a5x",
            Cpu::A6 => "a6",
            Cpu::A6X => "a6x",
            Cpu::A7 => "a7",
            Cpu::A8 => "a8",
            Cpu::A8X => "a8x",
            Cpu::A9 => "a9",
            Cpu::A9X => "a9x",
            Cpu::A10 => "a10",
            Cpu::A10X => "a10x",
            Cpu::A11 => "a11",
            Cpu::A12 => "a12",
            Cpu::A12X => "a12x",
            Cpu::A12Z => "a12z",
            Cpu::A13 => "a13",
            Cpu::A14 => "a14",
            Cpu::A15 => "a15",
            Cpu::A16 => "a16",
            Cpu::A17Pro => "a17pro",
            Cpu::A18 => "a18",
            Cpu::A18Pro => "a18pro",
            Cpu::M1 => "m1",
            Cpu::M1Pro => "m1pro",
            Cpu::M1Max => "m1max",
            Cpu::M1Ultra => "m1ultra",
            Cpu::M2 => "m2",
            Cpu::M2Pro => "m2pro",
            Cpu::M2Max => "m2max",
            Cpu::M2Ultra => "m2ultra",
            Cpu::M3 => "m3",
            Cpu::M3Pro => "m3pro",
            Cpu::M3Max => "m3max",
            Cpu::M4 => "m4",
            Cpu::M4Pro => "m4pro",
            Cpu::M4Max => "m4max",
            Cpu::S1 => "s1",
            Cpu::S1P => "s1p",
            Cpu::S2 => "s2",
            Cpu::S3 => "s3",
            Cpu::S4 => "s4",
            Cpu::S5 => "s5",
            Cpu::S6 => "s6",
            Cpu::S7 => "s7",
            Cpu::S8 => "s8",
            Cpu::S9 => "s9",
            Cpu::S10 => "s10",
            Cpu::Intel => "intel",
            Cpu::Unknown => "unknown",
        }
    }
}

/// Named finish/color associated with a device SKU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MaterialColor {
    Black,
    White,
    Silver,
    SpaceGray,
    SpaceBlack,
    Gold,
    RoseGold,
    Graphite,
    Midnight,
    Starlight,
    ProductRed,
    JetBlack,
    Blue,
    PacificBlue,
    SierraBlue,
    DeepPurple,
    Purple,
    Pink,
    Yellow,
    Green,
    AlpineGreen,
    Coral,
    Orange,
    Ultramarine,
    Teal,
    NaturalTitanium,
    BlueTitanium,
    WhiteTitanium,
    BlackTitanium,
    DesertTitanium,
}

impl MaterialColor {
    pub fn name(self) -> &'static str {
        match self {
            MaterialColor::Black => "Black",
            MaterialColor::White => "White",
            MaterialColor::Silver => "Silver",
            MaterialColor::SpaceGray => "Space Gray",
            MaterialColor::SpaceBlack => "Space Black",
            MaterialColor::Gold => "Gold",
            MaterialColor::RoseGold => "Rose Gold",
            MaterialColor::Graphite => "Graphite",
            MaterialColor::Midnight => "Midnight",
            MaterialColor::Starlight => "Starlight",
            MaterialColor::ProductRed => "(PRODUCT)RED",
            MaterialColor::JetBlack => "Jet Black",
            MaterialColor::Blue => "Blue",
            MaterialColor::PacificBlue => "Pacific Blue",
            MaterialColor::SierraBlue => "Sierra Blue",
            MaterialColor::DeepPurple => "Deep Purple",
            MaterialColor::Purple => "Purple",
            MaterialColor::Pink => "Pink",
            MaterialColor::Yellow => "Yellow",
            MaterialColor::Green => "Green",
            MaterialColor::AlpineGreen => "Alpine Green",
            MaterialColor::Coral => "Coral",
            MaterialColor::Orange => "Orange",
            MaterialColor::Ultramarine => "Ultramarine",
            MaterialColor::Teal => "Teal",
            MaterialColor::NaturalTitanium => "Natural Titanium",
            MaterialColor::BlueTitanium => "Blue Titanium",
            MaterialColor::WhiteTitanium => "White Titanium",
            MaterialColor::BlackTitanium => "Black Titanium",
            MaterialColor::DesertTitanium => "Desert Titanium",
        }
    }

    /// Representative swatch as a hex RGB string.
    pub fn swatch(self) -> &'static str {
        match self {
            MaterialColor::Black => "#1f2020",
            MaterialColor::White => "#f9f6ef",
            MaterialColor::Silver => "#e3e4e5",
            MaterialColor::SpaceGray => "#535150",
            MaterialColor::SpaceBlack => "#2e2c2e",
            MaterialColor::Gold => "#fad7bd",
            MaterialColor::RoseGold => "#e6c7c2",
            MaterialColor::Graphite => "#41424c",
            MaterialColor::Midnight => "#2e3641",
            MaterialColor::Starlight => "#faf6f2",
            MaterialColor::ProductRed => "#ba0c2e",
            MaterialColor::JetBlack => "#0a0a0a",
            MaterialColor::Blue => "#447792",
            MaterialColor::PacificBlue => "#2d4e5c",
            MaterialColor::SierraBlue => "#a7c1d9",
            MaterialColor::DeepPurple => "#594f63",
            MaterialColor::Purple => "#d1cdda",
            MaterialColor::Pink => "#fae0d8",
            MaterialColor::Yellow => "#f9e479",
            MaterialColor::Green => "#aee1cd",
            MaterialColor::AlpineGreen => "#505f4e",
            MaterialColor::Coral => "#ff6e5a",
            MaterialColor::Orange => "#f56e0f",
            MaterialColor::Ultramarine => "#9aadf6",
            MaterialColor::Teal => "#b0d4d2",
            MaterialColor::NaturalTitanium => "#c2bcb2",
            MaterialColor::BlueTitanium => "#3f4a5a",
            MaterialColor::WhiteTitanium => "#f2f1ed",
            MaterialColor::BlackTitanium => "#3c3c3d",
            MaterialColor::DesertTitanium => "#bfa48f",
        }
    }
}

/// Immutable hardware model record. Structural equality across all fields;
/// catalog dedup relies on it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Device {
    pub idiom: Idiom,
    pub official_name: String,
    /// Hardware identifiers reported by the model. Not globally unique:
    /// legacy duplicates exist across device families.
    pub identifiers: Vec<String>,
    /// Apple support-article id (e.g. "SP875" or a knowledge-base number).
    pub support_id: String,
    /// First OS version the model shipped with.
    pub launch_os_version: String,
    /// First OS version the model can no longer run, when retired.
    pub unsupported_os_version: Option<String>,
    /// Product image URL, when one is published.
    pub image: Option<String>,
    pub capabilities: Capabilities,
    /// Marketing model numbers ("A3084", …).
    pub models: Vec<String>,
    pub colors: Vec<MaterialColor>,
    pub cpu: Cpu,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Device {
    fn base(
        idiom: Idiom,
        official_name: &str,
        identifiers: &[&str],
        support_id: &str,
        launch_os_version: &str,
        cpu: Cpu,
        seed: &[Capability],
    ) -> Self {
        Self {
            idiom,
            official_name: official_name.to_string(),
            identifiers: strings(identifiers),
            support_id: support_id.to_string(),
            launch_os_version: launch_os_version.to_string(),
            unsupported_os_version: None,
            image: None,
            capabilities: seed.iter().cloned().collect(),
            models: Vec::new(),
            colors: Vec::new(),
            cpu,
        }
    }

    /// iPhone constructor. Seeds the phone baseline (battery, ringer switch).
    pub fn phone(
        official_name: &str,
        identifiers: &[&str],
        support_id: &str,
        launch_os_version: &str,
        cpu: Cpu,
    ) -> Self {
        Self::base(
            Idiom::Phone,
            official_name,
            identifiers,
            support_id,
            launch_os_version,
            cpu,
            &[Capability::Battery, Capability::RingerSwitch],
        )
    }

    pub fn pad(
        official_name: &str,
        identifiers: &[&str],
        support_id: &str,
        launch_os_version: &str,
        cpu: Cpu,
    ) -> Self {
        Self::base(
            Idiom::Pad,
            official_name,
            identifiers,
            support_id,
            launch_os_version,
            cpu,
            &[Capability::Battery],
        )
    }

    pub fn mac(
        official_name: &str,
        identifiers: &[&str],
        support_id: &str,
        launch_os_version: &str,
        cpu: Cpu,
        form: MacForm,
    ) -> Self {
        let mut device = Self::base(
            Idiom::Mac,
            official_name,
            identifiers,
            support_id,
            launch_os_version,
            cpu,
            &[],
        );
        device.capabilities.set_mac_form(Some(form));
        if form == MacForm::MacBook {
            device.capabilities.insert(Capability::Battery);
        }
        device
    }

    pub fn watch(
        official_name: &str,
        identifiers: &[&str],
        support_id: &str,
        launch_os_version: &str,
        cpu: Cpu,
        size: WatchSize,
    ) -> Self {
        let mut device = Self::base(
            Idiom::Watch,
            official_name,
            identifiers,
            support_id,
            launch_os_version,
            cpu,
            &[
                Capability::Battery,
                Capability::WirelessCharging,
                Capability::DigitalCrown,
                Capability::Nfc,
                Capability::ApplePay,
            ],
        );
        device.capabilities.set_watch_size(Some(size));
        device
    }

    pub fn apple_tv(
        official_name: &str,
        identifiers: &[&str],
        support_id: &str,
        launch_os_version: &str,
        cpu: Cpu,
    ) -> Self {
        Self::base(
            Idiom::Tv,
            official_name,
            identifiers,
            support_id,
            launch_os_version,
            cpu,
            &[],
        )
    }

    pub fn home_pod(
        official_name: &str,
        identifiers: &[&str],
        support_id: &str,
        launch_os_version: &str,
        cpu: Cpu,
    ) -> Self {
        Self::base(
            Idiom::HomePod,
            official_name,
            identifiers,
            support_id,
            launch_os_version,
            cpu,
            &[],
        )
    }

    pub fn vision(
        official_name: &str,
        identifiers: &[&str],
        support_id: &str,
        launch_os_version: &str,
        cpu: Cpu,
    ) -> Self {
        Self::base(
            Idiom::Vision,
            official_name,
            identifiers,
            support_id,
            launch_os_version,
            cpu,
            &[Capability::Battery],
        )
    }

    // Chained table-authoring helpers. Consuming so catalog entries read as
    // one expression per device.

    pub fn with(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Drop a seeded capability that this particular model lacks (for
    /// example the ringer switch on action-button phones).
    pub fn without(mut self, capability: &Capability) -> Self {
        self.capabilities.remove(capability);
        self
    }

    pub fn with_all(mut self, capabilities: &[Capability]) -> Self {
        for capability in capabilities {
            self.capabilities.insert(capability.clone());
        }
        self
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.capabilities.set_screen(Some(screen));
        self
    }

    pub fn with_cellular(mut self, generation: Cellular) -> Self {
        self.capabilities.set_cellular(Some(generation));
        self
    }

    pub fn with_biometrics(mut self, kind: Biometrics) -> Self {
        self.capabilities.set_biometrics(Some(kind));
        self
    }

    pub fn with_cameras(mut self, cameras: &[Camera]) -> Self {
        self.capabilities
            .set_cameras(cameras.iter().copied().collect::<BTreeSet<_>>());
        self
    }

    pub fn with_pencils(mut self, pencils: &[Stylus]) -> Self {
        self.capabilities
            .set_pencils(pencils.iter().copied().collect::<BTreeSet<_>>());
        self
    }

    pub fn with_models(mut self, models: &[&str]) -> Self {
        self.models = strings(models);
        self
    }

    pub fn with_colors(mut self, colors: &[MaterialColor]) -> Self {
        self.colors = colors.to_vec();
        self
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.image = Some(url.to_string());
        self
    }

    pub fn unsupported_since(mut self, os_version: &str) -> Self {
        self.unsupported_os_version = Some(os_version.to_string());
        self
    }

    // Placeholder constructors for identifiers newer than the catalog.
    // Each seeds the forward-looking defaults for its idiom so callers get
    // a plausible record instead of nothing.

    pub fn unknown_phone(identifier: &str) -> Self {
        Self::phone("Unknown iPhone", &[identifier], "unknown", "0.0", Cpu::Unknown)
            .with_all(&[
                Capability::UsbC,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::DualEsim,
                Capability::DynamicIsland,
                Capability::AlwaysOnDisplay,
                Capability::ActionButton,
                Capability::CameraControl,
                Capability::RoundedCorners,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::AppleIntelligence,
            ])
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
    }

    pub fn unknown_pad(identifier: &str) -> Self {
        Self::pad("Unknown iPad", &[identifier], "unknown", "0.0", Cpu::Unknown)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::SmartConnector,
                Capability::AppleIntelligence,
            ])
            .with_biometrics(Biometrics::TouchId)
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::Pro, Stylus::UsbC])
    }

    pub fn unknown_mac(identifier: &str) -> Self {
        Self::mac(
            "Unknown Mac",
            &[identifier],
            "unknown",
            "0.0",
            Cpu::Unknown,
            MacForm::MacBook,
        )
        .with_all(&[
            Capability::UsbC,
            Capability::MagSafe,
            Capability::AppleIntelligence,
        ])
        .with_biometrics(Biometrics::TouchId)
    }

    pub fn unknown_watch(identifier: &str) -> Self {
        Self::watch(
            "Unknown Apple Watch",
            &[identifier],
            "unknown",
            "0.0",
            Cpu::Unknown,
            WatchSize::Mm46,
        )
        .with_all(&[Capability::AlwaysOnDisplay, Capability::CrashDetection, Capability::Gps])
        .with_cellular(Cellular::Lte)
    }

    pub fn unknown_tv(identifier: &str) -> Self {
        Self::apple_tv("Unknown Apple TV", &[identifier], "unknown", "0.0", Cpu::Unknown)
    }

    pub fn unknown_home_pod(identifier: &str) -> Self {
        Self::home_pod("Unknown HomePod", &[identifier], "unknown", "0.0", Cpu::Unknown)
    }

    pub fn unknown_vision(identifier: &str) -> Self {
        Self::vision("Unknown Apple Vision", &[identifier], "unknown", "0.0", Cpu::Unknown)
            .with_biometrics(Biometrics::OpticId)
    }

    /// Fully generic placeholder for identifiers no idiom claims.
    pub fn unknown(identifier: &str) -> Self {
        Self {
            idiom: Idiom::Unspecified,
            official_name: "Unknown Device".to_string(),
            identifiers: vec![identifier.to_string()],
            support_id: "unknown".to_string(),
            launch_os_version: "0.0".to_string(),
            unsupported_os_version: None,
            image: None,
            capabilities: Capabilities::new(),
            models: Vec::new(),
            colors: Vec::new(),
            cpu: Cpu::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen;

    #[test]
    fn phone_constructor_seeds_baseline() {
        let device = Device::phone("iPhone X", &["iPhone10,3", "iPhone10,6"], "SP770", "11.0", Cpu::A11);
        assert_eq!(device.idiom, Idiom::Phone);
        assert!(device.capabilities.contains(&Capability::Battery));
        assert!(device.capabilities.contains(&Capability::RingerSwitch));
        assert_eq!(device.identifiers.len(), 2);
    }

    #[test]
    fn laptop_forms_get_battery_desktops_do_not() {
        let laptop = Device::mac("MacBook Air (M2)", &["Mac14,2"], "SP869", "12.4", Cpu::M2, MacForm::MacBook);
        let desktop = Device::mac("Mac Studio (M1 Max)", &["Mac13,1"], "SP865", "12.3", Cpu::M1Max, MacForm::MacStudio);
        assert!(laptop.capabilities.contains(&Capability::Battery));
        assert!(!desktop.capabilities.contains(&Capability::Battery));
        assert_eq!(desktop.capabilities.mac_form(), Some(MacForm::MacStudio));
    }

    #[test]
    fn builder_chain_sets_payload_cases_once() {
        let device = Device::phone("iPhone 16", &["iPhone17,3"], "121029", "18.0", Cpu::A18)
            .with_screen(screen::IN_6_1_PRO)
            .with_screen(screen::IN_6_1_PRO)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId);
        let screens = device
            .capabilities
            .iter()
            .filter(|c| matches!(c, Capability::Screen(_)))
            .count();
        assert_eq!(screens, 1);
        assert_eq!(device.capabilities.cellular(), Some(Cellular::FiveG));
    }

    #[test]
    fn unknown_phone_is_forward_looking() {
        let device = Device::unknown_phone("iPhone99,9");
        assert_eq!(device.idiom, Idiom::Phone);
        assert!(!device.capabilities.is_empty());
        assert!(device.capabilities.contains(&Capability::UsbC));
        assert_eq!(device.capabilities.biometrics(), Some(Biometrics::FaceId));
        assert_eq!(device.identifiers, vec!["iPhone99,9".to_string()]);
    }

    #[test]
    fn generic_unknown_has_empty_capabilities() {
        let device = Device::unknown("Slate3,1");
        assert!(device.capabilities.is_empty());
        assert_eq!(device.official_name, "Unknown Device");
    }
}
