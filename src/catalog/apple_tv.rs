//! Apple TV table. Set-top boxes carry almost no capability payload; the
//! record is mostly identity and support window.

use crate::device::{Cpu, Device, MaterialColor};

pub(crate) fn devices() -> Vec<Device> {
    vec![
        Device::apple_tv("Apple TV (2nd generation)", &["AppleTV2,1"], "SP598", "4.1", Cpu::A4)
            .with_models(&["A1378"])
            .with_colors(&[MaterialColor::Black])
            .unsupported_since("8.0"),
        Device::apple_tv("Apple TV (3rd generation)", &["AppleTV3,1", "AppleTV3,2"], "SP648", "5.1", Cpu::A5)
            .with_models(&["A1427", "A1469"])
            .with_colors(&[MaterialColor::Black])
            .unsupported_since("8.0"),
        Device::apple_tv("Apple TV HD", &["AppleTV5,3"], "SP724", "9.0", Cpu::A8)
            .with_models(&["A1625"])
            .with_colors(&[MaterialColor::Black]),
        Device::apple_tv("Apple TV 4K", &["AppleTV6,2"], "SP769", "11.0", Cpu::A10X)
            .with_models(&["A1842"])
            .with_colors(&[MaterialColor::Black]),
        Device::apple_tv("Apple TV 4K (2nd generation)", &["AppleTV11,1"], "SP845", "14.5", Cpu::A12)
            .with_models(&["A2169"])
            .with_colors(&[MaterialColor::Black]),
        Device::apple_tv("Apple TV 4K (3rd generation)", &["AppleTV14,1"], "SP886", "16.1", Cpu::A15)
            .with_models(&["A2737", "A2843"])
            .with_colors(&[MaterialColor::Black]),
    ]
}
