//! Apple Watch table.
//!
//! Watches get one record per case size because the size is a capability
//! payload and the two sizes of a generation report different identifiers.
//! GPS and cellular builds of the same size are folded into one record's
//! identifier list, with the cellular payload recording the best radio in
//! the family.

use crate::capability::{Capability, Cellular, WatchSize};
use crate::device::{Cpu, Device, MaterialColor};
use crate::screen;

pub(crate) fn devices() -> Vec<Device> {
    vec![
        Device::watch("Apple Watch (1st generation) 38mm", &["Watch1,1"], "SP735", "1.0", Cpu::S1, WatchSize::Mm38)
            .with_screen(screen::WATCH_38)
            .with(Capability::ForceTouch)
            .with_models(&["A1553"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("5.0"),
        Device::watch("Apple Watch (1st generation) 42mm", &["Watch1,2"], "SP735", "1.0", Cpu::S1, WatchSize::Mm42)
            .with_screen(screen::WATCH_42)
            .with(Capability::ForceTouch)
            .with_models(&["A1554"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("5.0"),
        Device::watch("Apple Watch Series 1 38mm", &["Watch2,6"], "SP745", "3.0", Cpu::S1P, WatchSize::Mm38)
            .with_screen(screen::WATCH_38)
            .with(Capability::ForceTouch)
            .with_models(&["A1802"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::RoseGold])
            .unsupported_since("7.0"),
        Device::watch("Apple Watch Series 1 42mm", &["Watch2,7"], "SP745", "3.0", Cpu::S1P, WatchSize::Mm42)
            .with_screen(screen::WATCH_42)
            .with(Capability::ForceTouch)
            .with_models(&["A1803"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::RoseGold])
            .unsupported_since("7.0"),
        Device::watch("Apple Watch Series 2 38mm", &["Watch2,3"], "SP746", "3.0", Cpu::S2, WatchSize::Mm38)
            .with_screen(screen::WATCH_38)
            .with_all(&[Capability::ForceTouch, Capability::Gps])
            .with_models(&["A1757", "A1816"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::RoseGold])
            .unsupported_since("7.0"),
        Device::watch("Apple Watch Series 2 42mm", &["Watch2,4"], "SP746", "3.0", Cpu::S2, WatchSize::Mm42)
            .with_screen(screen::WATCH_42)
            .with_all(&[Capability::ForceTouch, Capability::Gps])
            .with_models(&["A1758", "A1817"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::RoseGold])
            .unsupported_since("7.0"),
        Device::watch("Apple Watch Series 3 38mm", &["Watch3,1", "Watch3,3"], "SP766", "4.0", Cpu::S3, WatchSize::Mm38)
            .with_screen(screen::WATCH_38)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::ForceTouch, Capability::Gps])
            .with_models(&["A1860", "A1858"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("9.0"),
        Device::watch("Apple Watch Series 3 42mm", &["Watch3,2", "Watch3,4"], "SP766", "4.0", Cpu::S3, WatchSize::Mm42)
            .with_screen(screen::WATCH_42)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::ForceTouch, Capability::Gps])
            .with_models(&["A1861", "A1859"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("9.0"),
        Device::watch("Apple Watch Series 4 40mm", &["Watch4,1", "Watch4,3"], "SP778", "5.0", Cpu::S4, WatchSize::Mm40)
            .with_screen(screen::WATCH_40)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::ForceTouch, Capability::Gps])
            .with_models(&["A1977", "A1975"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("11.0"),
        Device::watch("Apple Watch Series 4 44mm", &["Watch4,2", "Watch4,4"], "SP778", "5.0", Cpu::S4, WatchSize::Mm44)
            .with_screen(screen::WATCH_44)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::ForceTouch, Capability::Gps])
            .with_models(&["A1978", "A1976"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("11.0"),
        Device::watch("Apple Watch Series 5 40mm", &["Watch5,1", "Watch5,3"], "SP808", "6.0", Cpu::S5, WatchSize::Mm40)
            .with_screen(screen::WATCH_40)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::ForceTouch, Capability::Gps, Capability::AlwaysOnDisplay])
            .with_models(&["A2092", "A2094"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("11.0"),
        Device::watch("Apple Watch Series 5 44mm", &["Watch5,2", "Watch5,4"], "SP808", "6.0", Cpu::S5, WatchSize::Mm44)
            .with_screen(screen::WATCH_44)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::ForceTouch, Capability::Gps, Capability::AlwaysOnDisplay])
            .with_models(&["A2093", "A2095"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("11.0"),
        Device::watch("Apple Watch SE 40mm", &["Watch5,9", "Watch5,11"], "SP827", "7.0", Cpu::S5, WatchSize::Mm40)
            .with_screen(screen::WATCH_40)
            .with_cellular(Cellular::Lte)
            .with(Capability::Gps)
            .with_models(&["A2351", "A2355"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("11.0"),
        Device::watch("Apple Watch SE 44mm", &["Watch5,10", "Watch5,12"], "SP827", "7.0", Cpu::S5, WatchSize::Mm44)
            .with_screen(screen::WATCH_44)
            .with_cellular(Cellular::Lte)
            .with(Capability::Gps)
            .with_models(&["A2352", "A2356"])
            .with_colors(&[MaterialColor::Silver, MaterialColor::SpaceGray, MaterialColor::Gold])
            .unsupported_since("11.0"),
        Device::watch("Apple Watch Series 6 40mm", &["Watch6,1", "Watch6,3"], "SP826", "7.0", Cpu::S6, WatchSize::Mm40)
            .with_screen(screen::WATCH_40)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay])
            .with_models(&["A2291", "A2293"])
            .with_colors(&[
                MaterialColor::Silver,
                MaterialColor::SpaceGray,
                MaterialColor::Gold,
                MaterialColor::Blue,
                MaterialColor::ProductRed,
            ])
            .unsupported_since("11.0"),
        Device::watch("Apple Watch Series 6 44mm", &["Watch6,2", "Watch6,4"], "SP826", "7.0", Cpu::S6, WatchSize::Mm44)
            .with_screen(screen::WATCH_44)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay])
            .with_models(&["A2292", "A2294"])
            .with_colors(&[
                MaterialColor::Silver,
                MaterialColor::SpaceGray,
                MaterialColor::Gold,
                MaterialColor::Blue,
                MaterialColor::ProductRed,
            ])
            .unsupported_since("11.0"),
        Device::watch("Apple Watch Series 7 41mm", &["Watch6,6", "Watch6,8"], "SP860", "8.0", Cpu::S7, WatchSize::Mm41)
            .with_screen(screen::WATCH_41)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay])
            .with_models(&["A2473", "A2475"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Green,
                MaterialColor::Blue,
                MaterialColor::ProductRed,
            ]),
        Device::watch("Apple Watch Series 7 45mm", &["Watch6,7", "Watch6,9"], "SP860", "8.0", Cpu::S7, WatchSize::Mm45)
            .with_screen(screen::WATCH_45)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay])
            .with_models(&["A2474", "A2477"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Green,
                MaterialColor::Blue,
                MaterialColor::ProductRed,
            ]),
        Device::watch(
            "Apple Watch SE (2nd generation) 40mm",
            &["Watch6,10", "Watch6,12"],
            "SP877",
            "9.0",
            Cpu::S8,
            WatchSize::Mm40,
        )
        .with_screen(screen::WATCH_40)
        .with_cellular(Cellular::Lte)
        .with_all(&[Capability::Gps, Capability::CrashDetection])
        .with_models(&["A2722", "A2726"])
        .with_colors(&[MaterialColor::Midnight, MaterialColor::Starlight, MaterialColor::Silver]),
        Device::watch(
            "Apple Watch SE (2nd generation) 44mm",
            &["Watch6,11", "Watch6,13"],
            "SP877",
            "9.0",
            Cpu::S8,
            WatchSize::Mm44,
        )
        .with_screen(screen::WATCH_44)
        .with_cellular(Cellular::Lte)
        .with_all(&[Capability::Gps, Capability::CrashDetection])
        .with_models(&["A2723", "A2727"])
        .with_colors(&[MaterialColor::Midnight, MaterialColor::Starlight, MaterialColor::Silver]),
        Device::watch("Apple Watch Series 8 41mm", &["Watch6,14", "Watch6,16"], "SP878", "9.0", Cpu::S8, WatchSize::Mm41)
            .with_screen(screen::WATCH_41)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay, Capability::CrashDetection])
            .with_models(&["A2770", "A2772"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Silver,
                MaterialColor::ProductRed,
            ]),
        Device::watch("Apple Watch Series 8 45mm", &["Watch6,15", "Watch6,17"], "SP878", "9.0", Cpu::S8, WatchSize::Mm45)
            .with_screen(screen::WATCH_45)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay, Capability::CrashDetection])
            .with_models(&["A2771", "A2773"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Silver,
                MaterialColor::ProductRed,
            ]),
        Device::watch("Apple Watch Ultra", &["Watch6,18"], "SP879", "9.0", Cpu::S8, WatchSize::Mm49)
            .with_screen(screen::WATCH_49)
            .with_cellular(Cellular::Lte)
            .with_all(&[
                Capability::Gps,
                Capability::AlwaysOnDisplay,
                Capability::CrashDetection,
                Capability::ActionButton,
            ])
            .with_models(&["A2622", "A2684"])
            .with_colors(&[MaterialColor::NaturalTitanium]),
        Device::watch("Apple Watch Series 9 41mm", &["Watch7,1", "Watch7,3"], "SP905", "10.0", Cpu::S9, WatchSize::Mm41)
            .with_screen(screen::WATCH_41)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay, Capability::CrashDetection])
            .with_models(&["A2978", "A2982"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Silver,
                MaterialColor::Pink,
                MaterialColor::ProductRed,
            ]),
        Device::watch("Apple Watch Series 9 45mm", &["Watch7,2", "Watch7,4"], "SP905", "10.0", Cpu::S9, WatchSize::Mm45)
            .with_screen(screen::WATCH_45)
            .with_cellular(Cellular::Lte)
            .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay, Capability::CrashDetection])
            .with_models(&["A2980", "A2984"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Silver,
                MaterialColor::Pink,
                MaterialColor::ProductRed,
            ]),
        Device::watch("Apple Watch Ultra 2", &["Watch7,5"], "SP906", "10.0", Cpu::S9, WatchSize::Mm49)
            .with_screen(screen::WATCH_49)
            .with_cellular(Cellular::Lte)
            .with_all(&[
                Capability::Gps,
                Capability::AlwaysOnDisplay,
                Capability::CrashDetection,
                Capability::ActionButton,
            ])
            .with_models(&["A2986", "A2987"])
            .with_colors(&[MaterialColor::NaturalTitanium, MaterialColor::BlackTitanium]),
        Device::watch(
            "Apple Watch Series 10 42mm",
            &["Watch7,8", "Watch7,10"],
            "121202",
            "11.0",
            Cpu::S10,
            WatchSize::Mm42,
        )
        .with_screen(screen::WATCH_42_S10)
        .with_cellular(Cellular::Lte)
        .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay, Capability::CrashDetection])
        .with_models(&["A2997", "A3001"])
        .with_colors(&[MaterialColor::JetBlack, MaterialColor::RoseGold, MaterialColor::Silver]),
        Device::watch(
            "Apple Watch Series 10 46mm",
            &["Watch7,9", "Watch7,11"],
            "121202",
            "11.0",
            Cpu::S10,
            WatchSize::Mm46,
        )
        .with_screen(screen::WATCH_46)
        .with_cellular(Cellular::Lte)
        .with_all(&[Capability::Gps, Capability::AlwaysOnDisplay, Capability::CrashDetection])
        .with_models(&["A2999", "A3003"])
        .with_colors(&[MaterialColor::JetBlack, MaterialColor::RoseGold, MaterialColor::Silver]),
    ]
}
