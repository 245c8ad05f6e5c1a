//! HomePod table.

use crate::device::{Cpu, Device, MaterialColor};

pub(crate) fn devices() -> Vec<Device> {
    vec![
        Device::home_pod("HomePod", &["AudioAccessory1,1", "AudioAccessory1,2"], "SP773", "11.0", Cpu::A8)
            .with_models(&["A1639"])
            .with_colors(&[MaterialColor::White, MaterialColor::SpaceGray]),
        Device::home_pod("HomePod mini", &["AudioAccessory5,1"], "SP834", "14.0", Cpu::S5)
            .with_models(&["A2374"])
            .with_colors(&[
                MaterialColor::White,
                MaterialColor::SpaceGray,
                MaterialColor::Blue,
                MaterialColor::Yellow,
                MaterialColor::Orange,
            ]),
        Device::home_pod("HomePod (2nd generation)", &["AudioAccessory6,1"], "SP888", "16.3", Cpu::S7)
            .with_models(&["A2825"])
            .with_colors(&[MaterialColor::White, MaterialColor::Midnight]),
    ]
}
