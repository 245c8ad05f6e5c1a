//! Display panel descriptors.
//!
//! A `Screen` records what is publicly known about a device's panel: the
//! diagonal in inches, the pixel grid, and the pixel density. Any of the
//! three may be unknown (historical entries are spotty), so every field is
//! optional and equality is structural. The constants below cover each
//! panel configuration Apple has shipped; catalog tables reference these
//! rather than spelling out raw numbers.

use serde::Serialize;

/// Physical display descriptor. All fields optional; equality is structural.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Screen {
    /// Diagonal size in inches.
    pub diagonal: Option<f64>,
    /// Native pixel resolution as (width, height) in portrait orientation.
    pub resolution: Option<(u32, u32)>,
    /// Pixels per inch.
    pub ppi: Option<u32>,
}

impl Screen {
    pub const fn new(diagonal: f64, width: u32, height: u32, ppi: u32) -> Self {
        Self {
            diagonal: Some(diagonal),
            resolution: Some((width, height)),
            ppi: Some(ppi),
        }
    }

    /// Panel with a known diagonal but no published pixel data.
    pub const fn diagonal_only(diagonal: f64) -> Self {
        Self {
            diagonal: Some(diagonal),
            resolution: None,
            ppi: None,
        }
    }
}

// iPhone panels.
pub const IN_3_5: Screen = Screen::new(3.5, 320, 480, 163);
pub const IN_3_5_RETINA: Screen = Screen::new(3.5, 640, 960, 326);
pub const IN_4_0: Screen = Screen::new(4.0, 640, 1136, 326);
pub const IN_4_7: Screen = Screen::new(4.7, 750, 1334, 326);
pub const IN_5_4: Screen = Screen::new(5.4, 1080, 2340, 476);
pub const IN_5_5: Screen = Screen::new(5.5, 1080, 1920, 401);
pub const IN_5_8: Screen = Screen::new(5.8, 1125, 2436, 458);
pub const IN_6_1: Screen = Screen::new(6.1, 828, 1792, 326);
pub const IN_6_1_OLED: Screen = Screen::new(6.1, 1170, 2532, 460);
pub const IN_6_1_PRO: Screen = Screen::new(6.1, 1179, 2556, 460);
pub const IN_6_3: Screen = Screen::new(6.3, 1206, 2622, 460);
pub const IN_6_5: Screen = Screen::new(6.5, 1242, 2688, 458);
pub const IN_6_7: Screen = Screen::new(6.7, 1284, 2778, 458);
pub const IN_6_7_PRO: Screen = Screen::new(6.7, 1290, 2796, 460);
pub const IN_6_9: Screen = Screen::new(6.9, 1320, 2868, 460);

// iPad panels.
pub const IN_7_9: Screen = Screen::new(7.9, 768, 1024, 163);
pub const IN_7_9_RETINA: Screen = Screen::new(7.9, 1536, 2048, 326);
pub const IN_8_3: Screen = Screen::new(8.3, 1488, 2266, 326);
pub const IN_9_7: Screen = Screen::new(9.7, 768, 1024, 132);
pub const IN_9_7_RETINA: Screen = Screen::new(9.7, 1536, 2048, 264);
pub const IN_10_2: Screen = Screen::new(10.2, 1620, 2160, 264);
pub const IN_10_5: Screen = Screen::new(10.5, 1668, 2224, 264);
pub const IN_10_9: Screen = Screen::new(10.9, 1640, 2360, 264);
pub const IN_11_0: Screen = Screen::new(11.0, 1668, 2388, 264);
pub const IN_11_0_TANDEM: Screen = Screen::new(11.1, 1668, 2420, 264);
pub const IN_12_9: Screen = Screen::new(12.9, 2048, 2732, 264);
pub const IN_13_0_TANDEM: Screen = Screen::new(13.0, 2064, 2752, 264);

// Mac panels (built-in displays).
pub const IN_13_3: Screen = Screen::new(13.3, 2560, 1600, 227);
pub const IN_13_6: Screen = Screen::new(13.6, 2560, 1664, 224);
pub const IN_14_2: Screen = Screen::new(14.2, 3024, 1964, 254);
pub const IN_15_3: Screen = Screen::new(15.3, 2880, 1864, 224);
pub const IN_16_2: Screen = Screen::new(16.2, 3456, 2234, 254);
pub const IN_24_0: Screen = Screen::new(24.0, 4480, 2520, 218);

// Watch panels, keyed by case size.
pub const WATCH_38: Screen = Screen::new(1.5, 272, 340, 290);
pub const WATCH_40: Screen = Screen::new(1.57, 324, 394, 326);
pub const WATCH_41: Screen = Screen::new(1.69, 352, 430, 326);
pub const WATCH_42: Screen = Screen::new(1.65, 312, 390, 302);
pub const WATCH_42_S10: Screen = Screen::new(1.77, 374, 446, 326);
pub const WATCH_44: Screen = Screen::new(1.73, 368, 448, 326);
pub const WATCH_45: Screen = Screen::new(1.9, 396, 484, 326);
pub const WATCH_46: Screen = Screen::new(1.96, 416, 496, 326);
pub const WATCH_49: Screen = Screen::new(1.92, 410, 502, 338);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality() {
        assert_eq!(IN_4_7, Screen::new(4.7, 750, 1334, 326));
        assert_ne!(IN_4_7, IN_5_5);
        assert_ne!(Screen::diagonal_only(4.7), IN_4_7);
    }

    #[test]
    fn default_is_fully_unknown() {
        let screen = Screen::default();
        assert!(screen.diagonal.is_none());
        assert!(screen.resolution.is_none());
        assert!(screen.ppi.is_none());
    }
}
