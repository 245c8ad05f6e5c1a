//! Static catalog of Apple hardware, keyed by the identifiers devices
//! report about themselves ("iPhone17,2", "Mac14,2", "Watch7,5").
//!
//! The catalog maps identifiers to one immutable [`Device`] record each:
//! official name, support-article id, OS support window, chip, marketing
//! model numbers, finishes, and a typed capability set. On top of it sit
//! exact and fuzzy lookup ([`lookup::lookup`]), a total resolver that
//! synthesizes plausible placeholders for hardware newer than the catalog
//! ([`lookup::resolve`]), host-state interfaces ([`power`]), and catalog
//! exporters ([`export`]).
//!
//! ```no_run
//! use orchard::lookup;
//!
//! let device = lookup::resolve("iPhone17,2");
//! assert_eq!(device.official_name, "iPhone 16 Pro Max");
//! ```

pub mod capability;
pub mod catalog;
pub mod device;
pub mod export;
pub mod lookup;
pub mod power;
pub mod screen;

pub use capability::{Biometrics, Camera, Capabilities, Capability, Cellular, MacForm, Stylus, WatchSize};
pub use device::{Cpu, Device, Idiom, MaterialColor};
pub use lookup::{LookupQuery, lookup as find, match_score, resolve};
pub use power::{Battery, BatteryObserver, BatteryState, DeviceEnvironment, StaticBattery};
pub use screen::Screen;
