//! iPad table.
//!
//! Cellular builds carry their own identifiers, so most records list two to
//! four. Pencil support is recorded per model through the typed wrapper;
//! generations are not cumulative (the Pro line switched from the 2nd
//! generation pencil to Pro/USB-C with the M4 chassis).

use crate::capability::{Biometrics, Camera, Capability, Cellular, Stylus};
use crate::device::{Cpu, Device, MaterialColor};
use crate::screen;

pub(crate) fn devices() -> Vec<Device> {
    vec![
        Device::pad("iPad", &["iPad1,1"], "SP580", "3.2", Cpu::A4)
            .with_screen(screen::IN_9_7)
            .with_cellular(Cellular::ThreeG)
            .with_all(&[Capability::ThirtyPin, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[])
            .with_models(&["A1219", "A1337"])
            .with_colors(&[MaterialColor::Silver])
            .unsupported_since("6.0"),
        Device::pad("iPad 2", &["iPad2,1", "iPad2,2", "iPad2,3", "iPad2,4"], "SP622", "4.3", Cpu::A5)
            .with_screen(screen::IN_9_7)
            .with_cellular(Cellular::ThreeG)
            .with_all(&[Capability::ThirtyPin, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1395", "A1396", "A1397"])
            .with_colors(&[MaterialColor::Black, MaterialColor::White])
            .unsupported_since("10.0"),
        Device::pad(
            "iPad (3rd generation)",
            &["iPad3,1", "iPad3,2", "iPad3,3"],
            "SP647",
            "5.1",
            Cpu::A5X,
        )
        .with_screen(screen::IN_9_7_RETINA)
        .with_cellular(Cellular::Lte)
        .with_all(&[Capability::ThirtyPin, Capability::HeadphoneJack, Capability::HomeButton])
        .with_cameras(&[Camera::Front, Camera::Wide])
        .with_models(&["A1416", "A1430"])
        .with_colors(&[MaterialColor::Black, MaterialColor::White])
        .unsupported_since("10.0"),
        Device::pad(
            "iPad (4th generation)",
            &["iPad3,4", "iPad3,5", "iPad3,6"],
            "SP662",
            "6.0",
            Cpu::A6X,
        )
        .with_screen(screen::IN_9_7_RETINA)
        .with_cellular(Cellular::Lte)
        .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
        .with_cameras(&[Camera::Front, Camera::Wide])
        .with_models(&["A1458", "A1459"])
        .with_colors(&[MaterialColor::Black, MaterialColor::White])
        .unsupported_since("11.0"),
        Device::pad("iPad mini", &["iPad2,5", "iPad2,6", "iPad2,7"], "SP661", "6.0", Cpu::A5)
            .with_screen(screen::IN_7_9)
            .with_cellular(Cellular::Lte)
            .with(Capability::Mini)
            .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1432", "A1454"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver])
            .unsupported_since("10.0"),
        Device::pad("iPad mini 2", &["iPad4,4", "iPad4,5", "iPad4,6"], "SP693", "7.0", Cpu::A7)
            .with_screen(screen::IN_7_9_RETINA)
            .with_cellular(Cellular::Lte)
            .with(Capability::Mini)
            .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1489", "A1490"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver])
            .unsupported_since("13.0"),
        // Sold as "iPad mini with Retina display" until the mini 3 launch
        // renamed it. Same hardware, both records kept; identifier lookups
        // return both.
        Device::pad(
            "iPad mini with Retina display",
            &["iPad4,4", "iPad4,5", "iPad4,6"],
            "SP693",
            "7.0",
            Cpu::A7,
        )
            .with_screen(screen::IN_7_9_RETINA)
            .with_cellular(Cellular::Lte)
            .with(Capability::Mini)
            .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1489", "A1490"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver])
            .unsupported_since("13.0"),
        Device::pad("iPad mini 3", &["iPad4,7", "iPad4,8", "iPad4,9"], "SP709", "8.1", Cpu::A7)
            .with_screen(screen::IN_7_9_RETINA)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Mini)
            .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1599", "A1600"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("13.0"),
        Device::pad("iPad mini 4", &["iPad5,1", "iPad5,2"], "SP725", "9.0", Cpu::A8)
            .with_screen(screen::IN_7_9_RETINA)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Mini)
            .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1538", "A1550"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("16.0"),
        Device::pad("iPad mini (5th generation)", &["iPad11,1", "iPad11,2"], "SP788", "12.2", Cpu::A12)
            .with_screen(screen::IN_7_9_RETINA)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Mini)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::TrueTone,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration])
            .with_models(&["A2133", "A2124"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold]),
        Device::pad("iPad mini (6th generation)", &["iPad14,1", "iPad14,2"], "SP850", "15.0", Cpu::A15)
            .with_screen(screen::IN_8_3)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Mini)
            .with_all(&[Capability::UsbC, Capability::RoundedCorners, Capability::TrueTone])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::SecondGeneration])
            .with_models(&["A2567", "A2568"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Starlight,
                MaterialColor::Pink,
                MaterialColor::Purple,
            ]),
        Device::pad("iPad mini (A17 Pro)", &["iPad16,1", "iPad16,2"], "121456", "18.0", Cpu::A17Pro)
            .with_screen(screen::IN_8_3)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Mini)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::TrueTone,
                Capability::AppleIntelligence,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::Pro, Stylus::UsbC])
            .with_models(&["A2993", "A2995"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Starlight,
                MaterialColor::Blue,
                MaterialColor::Purple,
            ]),
        Device::pad("iPad Air", &["iPad4,1", "iPad4,2", "iPad4,3"], "SP692", "7.0", Cpu::A7)
            .with_screen(screen::IN_9_7_RETINA)
            .with_cellular(Cellular::Lte)
            .with(Capability::Air)
            .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1474", "A1475"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver])
            .unsupported_since("13.0"),
        Device::pad("iPad Air 2", &["iPad5,3", "iPad5,4"], "SP708", "8.1", Cpu::A8X)
            .with_screen(screen::IN_9_7_RETINA)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Air)
            .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1566", "A1567"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("16.0"),
        Device::pad("iPad Air (3rd generation)", &["iPad11,3", "iPad11,4"], "SP787", "12.2", Cpu::A12)
            .with_screen(screen::IN_10_5)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Air)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::TrueTone,
                Capability::SmartConnector,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration])
            .with_models(&["A2152", "A2123"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold]),
        Device::pad("iPad Air (4th generation)", &["iPad13,1", "iPad13,2"], "SP828", "14.0", Cpu::A14)
            .with_screen(screen::IN_10_9)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Air)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::TrueTone,
                Capability::SmartConnector,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::SecondGeneration])
            .with_models(&["A2316", "A2324"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::RoseGold,
                MaterialColor::Green,
                MaterialColor::Blue,
            ]),
        Device::pad("iPad Air (5th generation)", &["iPad13,16", "iPad13,17"], "SP866", "15.4", Cpu::M1)
            .with_screen(screen::IN_10_9)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Air)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::TrueTone,
                Capability::SmartConnector,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::SecondGeneration])
            .with_models(&["A2588", "A2589"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Starlight,
                MaterialColor::Pink,
                MaterialColor::Purple,
                MaterialColor::Blue,
            ]),
        Device::pad("iPad Air 11-inch (M2)", &["iPad14,8", "iPad14,9"], "119894", "17.4", Cpu::M2)
            .with_screen(screen::IN_10_9)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Air)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::TrueTone,
                Capability::SmartConnector,
                Capability::AppleIntelligence,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::Pro, Stylus::UsbC])
            .with_models(&["A2902", "A2903"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Starlight,
                MaterialColor::Purple,
                MaterialColor::Blue,
            ]),
        Device::pad("iPad Air 13-inch (M2)", &["iPad14,10", "iPad14,11"], "119893", "17.4", Cpu::M2)
            .with_screen(screen::IN_12_9)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Air)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::TrueTone,
                Capability::SmartConnector,
                Capability::AppleIntelligence,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::Pro, Stylus::UsbC])
            .with_models(&["A2898", "A2899"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Starlight,
                MaterialColor::Purple,
                MaterialColor::Blue,
            ]),
        Device::pad("iPad (5th generation)", &["iPad6,11", "iPad6,12"], "SP751", "10.3", Cpu::A9)
            .with_screen(screen::IN_9_7_RETINA)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1822", "A1823"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("17.0"),
        Device::pad("iPad (6th generation)", &["iPad7,5", "iPad7,6"], "SP774", "11.3", Cpu::A10)
            .with_screen(screen::IN_9_7_RETINA)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[Capability::Lightning, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration])
            .with_models(&["A1893", "A1954"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("18.0"),
        Device::pad("iPad (7th generation)", &["iPad7,11", "iPad7,12"], "SP807", "13.1", Cpu::A10)
            .with_screen(screen::IN_10_2)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::SmartConnector,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration])
            .with_models(&["A2197", "A2200"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("18.0"),
        Device::pad("iPad (8th generation)", &["iPad11,6", "iPad11,7"], "SP822", "14.0", Cpu::A12)
            .with_screen(screen::IN_10_2)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::SmartConnector,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration])
            .with_models(&["A2270", "A2428"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold]),
        Device::pad("iPad (9th generation)", &["iPad12,1", "iPad12,2"], "SP849", "15.0", Cpu::A13)
            .with_screen(screen::IN_10_2)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::SmartConnector,
                Capability::TrueTone,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration])
            .with_models(&["A2602", "A2604"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::pad("iPad (10th generation)", &["iPad13,18", "iPad13,19"], "SP884", "16.1", Cpu::A14)
            .with_screen(screen::IN_10_9)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::SmartConnector,
                Capability::TrueTone,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration, Stylus::UsbC])
            .with_models(&["A2696", "A2757"])
            .with_colors(&[
                MaterialColor::Silver,
                MaterialColor::Blue,
                MaterialColor::Pink,
                MaterialColor::Yellow,
            ]),
        Device::pad("iPad (A16)", &["iPad15,7", "iPad15,8"], "122241", "18.3", Cpu::A16)
            .with_screen(screen::IN_10_9)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::SmartConnector,
                Capability::TrueTone,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration, Stylus::UsbC])
            .with_models(&["A3354", "A3355"])
            .with_colors(&[
                MaterialColor::Silver,
                MaterialColor::Blue,
                MaterialColor::Pink,
                MaterialColor::Yellow,
            ]),
        Device::pad("iPad Pro 12.9-inch", &["iPad6,7", "iPad6,8"], "SP723", "9.1", Cpu::A9X)
            .with_screen(screen::IN_12_9)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::SmartConnector,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration])
            .with_models(&["A1584", "A1652"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("17.0"),
        Device::pad("iPad Pro 9.7-inch", &["iPad6,3", "iPad6,4"], "SP739", "9.3", Cpu::A9X)
            .with_screen(screen::IN_9_7_RETINA)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::SmartConnector,
                Capability::TrueTone,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration])
            .with_models(&["A1673", "A1674"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::RoseGold,
            ])
            .unsupported_since("17.0"),
        Device::pad(
            "iPad Pro 12.9-inch (2nd generation)",
            &["iPad7,1", "iPad7,2"],
            "SP761",
            "10.3",
            Cpu::A10X,
        )
        .with_screen(screen::IN_12_9)
        .with_cellular(Cellular::Lte)
        .with_biometrics(Biometrics::TouchId)
        .with(Capability::Pro)
        .with_all(&[
            Capability::Lightning,
            Capability::HeadphoneJack,
            Capability::HomeButton,
            Capability::SmartConnector,
            Capability::TrueTone,
            Capability::ProMotion,
        ])
        .with_cameras(&[Camera::Front, Camera::Wide])
        .with_pencils(&[Stylus::FirstGeneration])
        .with_models(&["A1670", "A1671"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
        .unsupported_since("18.0"),
        Device::pad("iPad Pro 10.5-inch", &["iPad7,3", "iPad7,4"], "SP762", "10.3", Cpu::A10X)
            .with_screen(screen::IN_10_5)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::SmartConnector,
                Capability::TrueTone,
                Capability::ProMotion,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_pencils(&[Stylus::FirstGeneration])
            .with_models(&["A1701", "A1709"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::RoseGold,
            ])
            .unsupported_since("18.0"),
        Device::pad(
            "iPad Pro 11-inch",
            &["iPad8,1", "iPad8,2", "iPad8,3", "iPad8,4"],
            "SP784",
            "12.1",
            Cpu::A12X,
        )
        .with_screen(screen::IN_11_0)
        .with_cellular(Cellular::Lte)
        .with_biometrics(Biometrics::FaceId)
        .with(Capability::Pro)
        .with_all(&[
            Capability::UsbC,
            Capability::RoundedCorners,
            Capability::SmartConnector,
            Capability::TrueTone,
            Capability::ProMotion,
        ])
        .with_cameras(&[Camera::TrueDepth, Camera::Wide])
        .with_pencils(&[Stylus::SecondGeneration])
        .with_models(&["A1980", "A1934"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::pad(
            "iPad Pro 12.9-inch (3rd generation)",
            &["iPad8,5", "iPad8,6", "iPad8,7", "iPad8,8"],
            "SP785",
            "12.1",
            Cpu::A12X,
        )
        .with_screen(screen::IN_12_9)
        .with_cellular(Cellular::Lte)
        .with_biometrics(Biometrics::FaceId)
        .with(Capability::Pro)
        .with_all(&[
            Capability::UsbC,
            Capability::RoundedCorners,
            Capability::SmartConnector,
            Capability::TrueTone,
            Capability::ProMotion,
        ])
        .with_cameras(&[Camera::TrueDepth, Camera::Wide])
        .with_pencils(&[Stylus::SecondGeneration])
        .with_models(&["A1876", "A1895"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::pad(
            "iPad Pro 11-inch (2nd generation)",
            &["iPad8,9", "iPad8,10"],
            "SP814",
            "13.4",
            Cpu::A12Z,
        )
        .with_screen(screen::IN_11_0)
        .with_cellular(Cellular::Lte)
        .with_biometrics(Biometrics::FaceId)
        .with(Capability::Pro)
        .with_all(&[
            Capability::UsbC,
            Capability::RoundedCorners,
            Capability::SmartConnector,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Lidar,
        ])
        .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
        .with_pencils(&[Stylus::SecondGeneration])
        .with_models(&["A2228", "A2068"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::pad(
            "iPad Pro 12.9-inch (4th generation)",
            &["iPad8,11", "iPad8,12"],
            "SP815",
            "13.4",
            Cpu::A12Z,
        )
        .with_screen(screen::IN_12_9)
        .with_cellular(Cellular::Lte)
        .with_biometrics(Biometrics::FaceId)
        .with(Capability::Pro)
        .with_all(&[
            Capability::UsbC,
            Capability::RoundedCorners,
            Capability::SmartConnector,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Lidar,
        ])
        .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
        .with_pencils(&[Stylus::SecondGeneration])
        .with_models(&["A2229", "A2069"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::pad(
            "iPad Pro 11-inch (3rd generation)",
            &["iPad13,4", "iPad13,5", "iPad13,6", "iPad13,7"],
            "SP843",
            "14.5",
            Cpu::M1,
        )
        .with_screen(screen::IN_11_0)
        .with_cellular(Cellular::FiveG)
        .with_biometrics(Biometrics::FaceId)
        .with(Capability::Pro)
        .with_all(&[
            Capability::UsbC,
            Capability::RoundedCorners,
            Capability::SmartConnector,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Lidar,
        ])
        .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
        .with_pencils(&[Stylus::SecondGeneration])
        .with_models(&["A2377", "A2459"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::pad(
            "iPad Pro 12.9-inch (5th generation)",
            &["iPad13,8", "iPad13,9", "iPad13,10", "iPad13,11"],
            "SP844",
            "14.5",
            Cpu::M1,
        )
        .with_screen(screen::IN_12_9)
        .with_cellular(Cellular::FiveG)
        .with_biometrics(Biometrics::FaceId)
        .with(Capability::Pro)
        .with_all(&[
            Capability::UsbC,
            Capability::RoundedCorners,
            Capability::SmartConnector,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Lidar,
        ])
        .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
        .with_pencils(&[Stylus::SecondGeneration])
        .with_models(&["A2378", "A2461"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::pad(
            "iPad Pro 11-inch (4th generation)",
            &["iPad14,3", "iPad14,4"],
            "SP882",
            "16.1",
            Cpu::M2,
        )
        .with_screen(screen::IN_11_0)
        .with_cellular(Cellular::FiveG)
        .with_biometrics(Biometrics::FaceId)
        .with(Capability::Pro)
        .with_all(&[
            Capability::UsbC,
            Capability::RoundedCorners,
            Capability::SmartConnector,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Lidar,
        ])
        .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
        .with_pencils(&[Stylus::SecondGeneration, Stylus::UsbC])
        .with_models(&["A2759", "A2435"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::pad(
            "iPad Pro 12.9-inch (6th generation)",
            &["iPad14,5", "iPad14,6"],
            "SP883",
            "16.1",
            Cpu::M2,
        )
        .with_screen(screen::IN_12_9)
        .with_cellular(Cellular::FiveG)
        .with_biometrics(Biometrics::FaceId)
        .with(Capability::Pro)
        .with_all(&[
            Capability::UsbC,
            Capability::RoundedCorners,
            Capability::SmartConnector,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Lidar,
        ])
        .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
        .with_pencils(&[Stylus::SecondGeneration, Stylus::UsbC])
        .with_models(&["A2436", "A2437"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::pad("iPad Pro 11-inch (M4)", &["iPad16,3", "iPad16,4"], "119892", "17.5", Cpu::M4)
            .with_screen(screen::IN_11_0_TANDEM)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::SmartConnector,
                Capability::TrueTone,
                Capability::ProMotion,
                Capability::Lidar,
                Capability::AppleIntelligence,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide])
            .with_pencils(&[Stylus::Pro, Stylus::UsbC])
            .with_models(&["A2836", "A2837"])
            .with_colors(&[MaterialColor::SpaceBlack, MaterialColor::Silver]),
        Device::pad("iPad Pro 13-inch (M4)", &["iPad16,5", "iPad16,6"], "119891", "17.5", Cpu::M4)
            .with_screen(screen::IN_13_0_TANDEM)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::UsbC,
                Capability::RoundedCorners,
                Capability::SmartConnector,
                Capability::TrueTone,
                Capability::ProMotion,
                Capability::Lidar,
                Capability::AppleIntelligence,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide])
            .with_pencils(&[Stylus::Pro, Stylus::UsbC])
            .with_models(&["A2925", "A2926"])
            .with_colors(&[MaterialColor::SpaceBlack, MaterialColor::Silver]),
    ]
}
