//! Battery and device-state interfaces.
//!
//! Platform battery readings arrive through whatever host glue embeds this
//! library, so the surface here is a trait plus a static test double. The
//! sentinel conventions follow the platform APIs: a level of `-1` and an
//! `Unknown` state mean monitoring is unavailable or disabled.

use crate::device::Device;
use crate::lookup;
use serde::Serialize;

/// Charge state as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BatteryState {
    /// Monitoring disabled or state unreadable.
    Unknown,
    /// On battery power, discharging.
    Unplugged,
    Charging,
    /// Plugged in at 100%.
    Full,
}

/// Callback invoked by a monitoring battery source when its reading
/// changes.
pub type BatteryObserver = Box<dyn FnMut(i8, BatteryState) + Send>;

/// Read-only view of a device battery.
///
/// `level` is in percent, `0..=100`, or `-1` when unavailable. `capacity`
/// is maximum capacity relative to new, also in percent, `-1` when the
/// host does not expose it.
pub trait Battery {
    fn level(&self) -> i8;
    fn state(&self) -> BatteryState;
    fn capacity(&self) -> i8;
    fn low_power_mode(&self) -> bool;

    /// Register a callback for subsequent reading changes. Sources whose
    /// readings never change (including [`StaticBattery`]) keep the
    /// default no-op.
    fn monitor(&mut self, _observer: BatteryObserver) {}

    /// True when a meaningful level reading is available.
    fn has_reading(&self) -> bool {
        self.level() >= 0
    }
}

/// Fixed battery readings, for tests and for hosts without a battery.
#[derive(Clone, Copy, Debug)]
pub struct StaticBattery {
    pub level: i8,
    pub state: BatteryState,
    pub capacity: i8,
    pub low_power_mode: bool,
}

impl StaticBattery {
    /// The all-sentinel reading: nothing known.
    pub fn unavailable() -> Self {
        Self {
            level: -1,
            state: BatteryState::Unknown,
            capacity: -1,
            low_power_mode: false,
        }
    }
}

impl Default for StaticBattery {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl Battery for StaticBattery {
    fn level(&self) -> i8 {
        self.level
    }

    fn state(&self) -> BatteryState {
        self.state
    }

    fn capacity(&self) -> i8 {
        self.capacity
    }

    fn low_power_mode(&self) -> bool {
        self.low_power_mode
    }
}

/// The resolved identity and live state of the device the process runs on.
/// Built by host glue from the reported hardware identifier plus a battery
/// source; tests construct it directly.
pub struct DeviceEnvironment {
    device: Device,
    battery: Box<dyn Battery + Send + Sync>,
}

impl DeviceEnvironment {
    pub fn new(device: Device, battery: Box<dyn Battery + Send + Sync>) -> Self {
        Self { device, battery }
    }

    /// Resolve the identifier through the catalog and attach a battery
    /// source. Unrecognized identifiers still produce an environment, per
    /// the total-resolution guarantee.
    pub fn for_identifier(identifier: &str, battery: Box<dyn Battery + Send + Sync>) -> Self {
        Self::new(lookup::resolve(identifier), battery)
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn battery(&self) -> &(dyn Battery + Send + Sync) {
        self.battery.as_ref()
    }

    /// Mutable access, for registering monitors on sources that support it.
    pub fn battery_mut(&mut self) -> &mut (dyn Battery + Send + Sync) {
        self.battery.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_reading_reports_no_level() {
        let battery = StaticBattery::unavailable();
        assert_eq!(battery.level(), -1);
        assert_eq!(battery.state(), BatteryState::Unknown);
        assert!(!battery.has_reading());
    }

    #[test]
    fn live_reading_reports_level() {
        let battery = StaticBattery {
            level: 80,
            state: BatteryState::Charging,
            capacity: 97,
            low_power_mode: false,
        };
        assert!(battery.has_reading());
        assert_eq!(battery.capacity(), 97);
    }

    #[test]
    fn environment_resolves_identity() {
        let env = DeviceEnvironment::for_identifier(
            "iPhone17,2",
            Box::new(StaticBattery::unavailable()),
        );
        assert_eq!(env.device().official_name, "iPhone 16 Pro Max");
        assert_eq!(env.battery().level(), -1);
    }
}
