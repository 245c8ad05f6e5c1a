//! Capability modeling for catalog devices.
//!
//! A `Capability` is a tagged feature a device may or may not carry. Most
//! cases are bare markers (`UsbC`, `Lidar`); a handful carry structured
//! payloads (the screen descriptor, the cellular generation, the camera
//! set). A `Capabilities` value is a set of these variants.
//!
//! Because elements compare by full value (case plus payload), the set
//! itself cannot enforce "exactly one screen variant". That convention
//! lives in the typed accessors (`screen`/`set_screen` and friends), which
//! scan the set, drop any existing element of the case, and insert the
//! replacement. Direct `insert` calls can violate the convention; catalog
//! construction only goes through the accessors.

use crate::screen::Screen;
use serde::Serialize;
use std::collections::BTreeSet;

/// Biometric unlock hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Biometrics {
    TouchId,
    FaceId,
    OpticId,
}

impl Biometrics {
    pub fn name(self) -> &'static str {
        match self {
            Biometrics::TouchId => "Touch ID",
            Biometrics::FaceId => "Face ID",
            Biometrics::OpticId => "Optic ID",
        }
    }
}

/// Camera modules. Ordered so camera sets serialize deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Camera {
    Front,
    TrueDepth,
    Wide,
    UltraWide,
    Telephoto,
}

/// Apple Pencil generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Stylus {
    FirstGeneration,
    SecondGeneration,
    UsbC,
    Pro,
}

/// Cellular radio generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Cellular {
    Gprs,
    Edge,
    ThreeG,
    Lte,
    FiveG,
}

impl Cellular {
    pub fn name(self) -> &'static str {
        match self {
            Cellular::Gprs => "GPRS",
            Cellular::Edge => "EDGE",
            Cellular::ThreeG => "3G",
            Cellular::Lte => "LTE",
            Cellular::FiveG => "5G",
        }
    }
}

/// Mac enclosure family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MacForm {
    MacBook,
    MacMini,
    MacStudio,
    MacPro,
    IMac,
}

impl MacForm {
    pub fn name(self) -> &'static str {
        match self {
            MacForm::MacBook => "MacBook",
            MacForm::MacMini => "Mac mini",
            MacForm::MacStudio => "Mac Studio",
            MacForm::MacPro => "Mac Pro",
            MacForm::IMac => "iMac",
        }
    }
}

/// Watch case size in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WatchSize {
    Mm38,
    Mm40,
    Mm41,
    Mm42,
    Mm44,
    Mm45,
    Mm46,
    Mm49,
}

impl WatchSize {
    pub fn millimeters(self) -> u32 {
        match self {
            WatchSize::Mm38 => 38,
            WatchSize::Mm40 => 40,
            WatchSize::Mm41 => 41,
            WatchSize::Mm42 => 42,
            WatchSize::Mm44 => 44,
            WatchSize::Mm45 => 45,
            WatchSize::Mm46 => 46,
            WatchSize::Mm49 => 49,
        }
    }
}

/// A tagged device feature. Unit cases are bare markers; the associated-value
/// cases carry structured payloads and are expected to appear at most once
/// per set (enforced by the `Capabilities` accessors, not by the type).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Capability {
    // Power and charging.
    Battery,
    WirelessCharging,
    MagSafe,
    // Connectors.
    ThirtyPin,
    Lightning,
    UsbC,
    HeadphoneJack,
    SmartConnector,
    // Radios and payments.
    Nfc,
    ApplePay,
    Esim,
    DualEsim,
    Gps,
    // Sensors.
    Lidar,
    ForceTouch,
    CrashDetection,
    Satellite,
    // Display traits.
    RoundedCorners,
    Notch,
    DynamicIsland,
    AlwaysOnDisplay,
    ProMotion,
    TrueTone,
    // Physical controls.
    HomeButton,
    ActionButton,
    CameraControl,
    RingerSwitch,
    DigitalCrown,
    // Intelligence.
    AppleIntelligence,
    // Marketing tiers.
    Pro,
    Air,
    Mini,
    Plus,
    Max,
    // Associated-value cases.
    MacForm(MacForm),
    WatchSize(WatchSize),
    Cellular(Cellular),
    Screen(Screen),
    Cameras(BTreeSet<Camera>),
    Pencils(BTreeSet<Stylus>),
    Biometrics(Biometrics),
}

impl Capability {
    /// Stable lowercase case name. Explicit mapping; there is deliberately
    /// no reflection-derived naming anywhere in the crate.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Battery => "battery",
            Capability::WirelessCharging => "wireless_charging",
            Capability::MagSafe => "magsafe",
            Capability::ThirtyPin => "thirty_pin",
            Capability::Lightning => "lightning",
            Capability::UsbC => "usb_c",
            Capability::HeadphoneJack => "headphone_jack",
            Capability::SmartConnector => "smart_connector",
            Capability::Nfc => "nfc",
            Capability::ApplePay => "apple_pay",
            Capability::Esim => "esim",
            Capability::DualEsim => "dual_esim",
            Capability::Gps => "gps",
            Capability::Lidar => "lidar",
            Capability::ForceTouch => "force_touch",
            Capability::CrashDetection => "crash_detection",
            Capability::Satellite => "satellite",
            Capability::RoundedCorners => "rounded_corners",
            Capability::Notch => "notch",
            Capability::DynamicIsland => "dynamic_island",
            Capability::AlwaysOnDisplay => "always_on_display",
            Capability::ProMotion => "promotion",
            Capability::TrueTone => "true_tone",
            Capability::HomeButton => "home_button",
            Capability::ActionButton => "action_button",
            Capability::CameraControl => "camera_control",
            Capability::RingerSwitch => "ringer_switch",
            Capability::DigitalCrown => "digital_crown",
            Capability::AppleIntelligence => "apple_intelligence",
            Capability::Pro => "pro",
            Capability::Air => "air",
            Capability::Mini => "mini",
            Capability::Plus => "plus",
            Capability::Max => "max",
            Capability::MacForm(_) => "mac_form",
            Capability::WatchSize(_) => "watch_size",
            Capability::Cellular(_) => "cellular",
            Capability::Screen(_) => "screen",
            Capability::Cameras(_) => "cameras",
            Capability::Pencils(_) => "pencils",
            Capability::Biometrics(_) => "biometrics",
        }
    }
}

/// A set of capabilities.
///
/// Backed by an insertion-ordered vector with membership-checked insertion:
/// `Screen` carries floats, which rules out hashing, and the catalog only
/// ever needs value-equality membership plus deterministic iteration for
/// export. Equality between two sets is order-insensitive.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Capabilities(Vec<Capability>);

impl Capabilities {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, capability: &Capability) -> bool {
        self.0.iter().any(|c| c == capability)
    }

    /// Insert by full value. A duplicate (case + payload) is a no-op.
    /// Inserting a second payload-carrying element of an existing case is
    /// possible here; use the typed setters to keep one-per-case intact.
    pub fn insert(&mut self, capability: Capability) {
        if !self.contains(&capability) {
            self.0.push(capability);
        }
    }

    /// Remove by full value. Returns whether an element was removed.
    pub fn remove(&mut self, capability: &Capability) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != capability);
        before != self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.0.iter()
    }

    fn remove_case(&mut self, name: &str) {
        self.0.retain(|c| c.name() != name);
    }

    /// Screen descriptor, if a `Screen` element is present.
    pub fn screen(&self) -> Option<Screen> {
        self.0.iter().find_map(|c| match c {
            Capability::Screen(screen) => Some(*screen),
            _ => None,
        })
    }

    /// Replace the screen element; `None` clears it.
    pub fn set_screen(&mut self, screen: Option<Screen>) {
        self.remove_case("screen");
        if let Some(screen) = screen {
            self.insert(Capability::Screen(screen));
        }
    }

    pub fn cellular(&self) -> Option<Cellular> {
        self.0.iter().find_map(|c| match c {
            Capability::Cellular(generation) => Some(*generation),
            _ => None,
        })
    }

    pub fn set_cellular(&mut self, generation: Option<Cellular>) {
        self.remove_case("cellular");
        if let Some(generation) = generation {
            self.insert(Capability::Cellular(generation));
        }
    }

    pub fn mac_form(&self) -> Option<MacForm> {
        self.0.iter().find_map(|c| match c {
            Capability::MacForm(form) => Some(*form),
            _ => None,
        })
    }

    pub fn set_mac_form(&mut self, form: Option<MacForm>) {
        self.remove_case("mac_form");
        if let Some(form) = form {
            self.insert(Capability::MacForm(form));
        }
    }

    pub fn watch_size(&self) -> Option<WatchSize> {
        self.0.iter().find_map(|c| match c {
            Capability::WatchSize(size) => Some(*size),
            _ => None,
        })
    }

    pub fn set_watch_size(&mut self, size: Option<WatchSize>) {
        self.remove_case("watch_size");
        if let Some(size) = size {
            self.insert(Capability::WatchSize(size));
        }
    }

    pub fn biometrics(&self) -> Option<Biometrics> {
        self.0.iter().find_map(|c| match c {
            Capability::Biometrics(kind) => Some(*kind),
            _ => None,
        })
    }

    pub fn set_biometrics(&mut self, kind: Option<Biometrics>) {
        self.remove_case("biometrics");
        if let Some(kind) = kind {
            self.insert(Capability::Biometrics(kind));
        }
    }

    /// Camera set; empty when no `Cameras` element is present.
    pub fn cameras(&self) -> BTreeSet<Camera> {
        self.0
            .iter()
            .find_map(|c| match c {
                Capability::Cameras(cameras) => Some(cameras.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Replace the camera set; an empty set clears the element.
    pub fn set_cameras(&mut self, cameras: BTreeSet<Camera>) {
        self.remove_case("cameras");
        if !cameras.is_empty() {
            self.insert(Capability::Cameras(cameras));
        }
    }

    pub fn pencils(&self) -> BTreeSet<Stylus> {
        self.0
            .iter()
            .find_map(|c| match c {
                Capability::Pencils(pencils) => Some(pencils.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn set_pencils(&mut self, pencils: BTreeSet<Stylus>) {
        self.remove_case("pencils");
        if !pencils.is_empty() {
            self.insert(Capability::Pencils(pencils));
        }
    }
}

impl PartialEq for Capabilities {
    // Order-insensitive: insertion order is an artifact of table authoring,
    // not part of the value. Relies on the no-duplicates insert invariant.
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|c| other.contains(c))
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Capabilities::new();
        for capability in iter {
            set.insert(capability);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen;

    #[test]
    fn insert_deduplicates_by_full_value() {
        let mut caps = Capabilities::new();
        caps.insert(Capability::UsbC);
        caps.insert(Capability::UsbC);
        assert_eq!(caps.len(), 1);

        caps.insert(Capability::Cellular(Cellular::Lte));
        caps.insert(Capability::Cellular(Cellular::FiveG));
        // Same case, different payloads: both admitted by raw insert.
        assert_eq!(caps.len(), 3);
    }

    #[test]
    fn screen_wrapper_round_trips() {
        let mut caps = Capabilities::new();
        assert_eq!(caps.screen(), None);

        caps.set_screen(Some(screen::IN_6_1_PRO));
        assert_eq!(caps.screen(), Some(screen::IN_6_1_PRO));

        caps.set_screen(None);
        assert_eq!(caps.screen(), None);
        assert!(caps.is_empty());
    }

    #[test]
    fn setters_keep_one_element_per_case() {
        let mut caps = Capabilities::new();
        caps.set_screen(Some(screen::IN_4_7));
        caps.set_screen(Some(screen::IN_6_9));

        let screens = caps
            .iter()
            .filter(|c| matches!(c, Capability::Screen(_)))
            .count();
        assert_eq!(screens, 1);
        assert_eq!(caps.screen(), Some(screen::IN_6_9));
    }

    #[test]
    fn setters_collapse_raw_duplicates() {
        let mut caps = Capabilities::new();
        caps.insert(Capability::Cellular(Cellular::Lte));
        caps.insert(Capability::Cellular(Cellular::FiveG));
        caps.set_cellular(Some(Cellular::FiveG));

        let radios: Vec<_> = caps
            .iter()
            .filter(|c| matches!(c, Capability::Cellular(_)))
            .collect();
        assert_eq!(radios, vec![&Capability::Cellular(Cellular::FiveG)]);
    }

    #[test]
    fn collection_payloads_treat_empty_as_absent() {
        let mut caps = Capabilities::new();
        caps.set_cameras(BTreeSet::from([Camera::Wide, Camera::TrueDepth]));
        assert_eq!(caps.cameras().len(), 2);

        caps.set_cameras(BTreeSet::new());
        assert!(caps.cameras().is_empty());
        assert!(caps.is_empty());

        caps.set_pencils(BTreeSet::from([Stylus::Pro]));
        assert_eq!(caps.pencils(), BTreeSet::from([Stylus::Pro]));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: Capabilities =
            [Capability::UsbC, Capability::Lidar, Capability::Pro].into_iter().collect();
        let b: Capabilities =
            [Capability::Pro, Capability::UsbC, Capability::Lidar].into_iter().collect();
        let c: Capabilities = [Capability::UsbC, Capability::Lidar].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
