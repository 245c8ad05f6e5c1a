//! iPhone table.
//!
//! Ordered by release. Multiple identifiers on one record mean regional or
//! radio variants of the same model (GSM/CDMA splits in the early years,
//! later regional modem builds).

use crate::capability::{Biometrics, Camera, Capability, Cellular};
use crate::device::{Cpu, Device, MaterialColor};
use crate::screen;

pub(crate) fn devices() -> Vec<Device> {
    vec![
        Device::phone("iPhone", &["iPhone1,1"], "SP2", "1.0", Cpu::S5L8900)
            .with_screen(screen::IN_3_5)
            .with_cellular(Cellular::Edge)
            .with_all(&[Capability::ThirtyPin, Capability::HeadphoneJack, Capability::HomeButton])
            .with_cameras(&[Camera::Wide])
            .with_models(&["A1203"])
            .with_colors(&[MaterialColor::Silver])
            .unsupported_since("4.0"),
        Device::phone("iPhone 3G", &["iPhone1,2"], "SP495", "2.0", Cpu::S5L8900)
            .with_screen(screen::IN_3_5)
            .with_cellular(Cellular::ThreeG)
            .with_all(&[
                Capability::ThirtyPin,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Wide])
            .with_models(&["A1241", "A1324"])
            .with_colors(&[MaterialColor::Black, MaterialColor::White])
            .unsupported_since("4.3"),
        Device::phone("iPhone 3GS", &["iPhone2,1"], "SP565", "3.0", Cpu::S5L8920)
            .with_screen(screen::IN_3_5)
            .with_cellular(Cellular::ThreeG)
            .with_all(&[
                Capability::ThirtyPin,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Wide])
            .with_models(&["A1303", "A1325"])
            .with_colors(&[MaterialColor::Black, MaterialColor::White])
            .unsupported_since("7.0"),
        Device::phone(
            "iPhone 4",
            &["iPhone3,1", "iPhone3,2", "iPhone3,3"],
            "SP587",
            "4.0",
            Cpu::A4,
        )
        .with_screen(screen::IN_3_5_RETINA)
        .with_cellular(Cellular::ThreeG)
        .with_all(&[
            Capability::ThirtyPin,
            Capability::HeadphoneJack,
            Capability::HomeButton,
            Capability::Gps,
        ])
        .with_cameras(&[Camera::Front, Camera::Wide])
        .with_models(&["A1332", "A1349"])
        .with_colors(&[MaterialColor::Black, MaterialColor::White])
        .unsupported_since("8.0"),
        Device::phone("iPhone 4s", &["iPhone4,1"], "SP643", "5.0", Cpu::A5)
            .with_screen(screen::IN_3_5_RETINA)
            .with_cellular(Cellular::ThreeG)
            .with_all(&[
                Capability::ThirtyPin,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1387", "A1431"])
            .with_colors(&[MaterialColor::Black, MaterialColor::White])
            .unsupported_since("10.0"),
        Device::phone("iPhone 5", &["iPhone5,1", "iPhone5,2"], "SP655", "6.0", Cpu::A6)
            .with_screen(screen::IN_4_0)
            .with_cellular(Cellular::Lte)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1428", "A1429"])
            .with_colors(&[MaterialColor::Black, MaterialColor::White])
            .unsupported_since("11.0"),
        Device::phone("iPhone 5c", &["iPhone5,3", "iPhone5,4"], "SP684", "7.0", Cpu::A6)
            .with_screen(screen::IN_4_0)
            .with_cellular(Cellular::Lte)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1456", "A1532"])
            .with_colors(&[
                MaterialColor::White,
                MaterialColor::Pink,
                MaterialColor::Yellow,
                MaterialColor::Blue,
                MaterialColor::Green,
            ])
            .unsupported_since("11.0"),
        Device::phone("iPhone 5s", &["iPhone6,1", "iPhone6,2"], "SP685", "7.0", Cpu::A7)
            .with_screen(screen::IN_4_0)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1453", "A1457"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("13.0"),
        Device::phone("iPhone 6", &["iPhone7,2"], "SP705", "8.0", Cpu::A8)
            .with_screen(screen::IN_4_7)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1549", "A1586"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("13.0"),
        Device::phone("iPhone 6 Plus", &["iPhone7,1"], "SP706", "8.0", Cpu::A8)
            .with_screen(screen::IN_5_5)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Plus)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1522", "A1524"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("13.0"),
        Device::phone("iPhone 6s", &["iPhone8,1"], "SP726", "9.0", Cpu::A9)
            .with_screen(screen::IN_4_7)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::ForceTouch,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1633", "A1688"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::RoseGold,
            ])
            .unsupported_since("16.0"),
        Device::phone("iPhone 6s Plus", &["iPhone8,2"], "SP727", "9.0", Cpu::A9)
            .with_screen(screen::IN_5_5)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Plus)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::ForceTouch,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1634", "A1687"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::RoseGold,
            ])
            .unsupported_since("16.0"),
        Device::phone("iPhone SE (1st generation)", &["iPhone8,4"], "SP738", "9.3", Cpu::A9)
            .with_screen(screen::IN_4_0)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HeadphoneJack,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1662", "A1723"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::RoseGold,
            ])
            .unsupported_since("16.0"),
        Device::phone("iPhone 7", &["iPhone9,1", "iPhone9,3"], "SP743", "10.0", Cpu::A10)
            .with_screen(screen::IN_4_7)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::ForceTouch,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1660", "A1778"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::JetBlack,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::RoseGold,
                MaterialColor::ProductRed,
            ])
            .unsupported_since("16.0"),
        Device::phone("iPhone 7 Plus", &["iPhone9,2", "iPhone9,4"], "SP744", "10.0", Cpu::A10)
            .with_screen(screen::IN_5_5)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Plus)
            .with_all(&[
                Capability::Lightning,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::ForceTouch,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide, Camera::Telephoto])
            .with_models(&["A1661", "A1784"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::JetBlack,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::RoseGold,
                MaterialColor::ProductRed,
            ])
            .unsupported_since("16.0"),
        Device::phone("iPhone 8", &["iPhone10,1", "iPhone10,4"], "SP767", "11.0", Cpu::A11)
            .with_screen(screen::IN_4_7)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::ForceTouch,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A1863", "A1905"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::ProductRed,
            ])
            .unsupported_since("17.0"),
        Device::phone("iPhone 8 Plus", &["iPhone10,2", "iPhone10,5"], "SP768", "11.0", Cpu::A11)
            .with_screen(screen::IN_5_5)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with(Capability::Plus)
            .with_all(&[
                Capability::Lightning,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::ForceTouch,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide, Camera::Telephoto])
            .with_models(&["A1864", "A1897"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::ProductRed,
            ])
            .unsupported_since("17.0"),
        Device::phone("iPhone X", &["iPhone10,3", "iPhone10,6"], "SP770", "11.0", Cpu::A11)
            .with_screen(screen::IN_5_8)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::ForceTouch,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::Telephoto])
            .with_models(&["A1865", "A1901"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver])
            .unsupported_since("17.0"),
        Device::phone("iPhone XS", &["iPhone11,2"], "SP779", "12.0", Cpu::A12)
            .with_screen(screen::IN_5_8)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::ForceTouch,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::Telephoto])
            .with_models(&["A1920", "A2097"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("26.0"),
        Device::phone("iPhone XS Max", &["iPhone11,4", "iPhone11,6"], "SP780", "12.0", Cpu::A12)
            .with_screen(screen::IN_6_5)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Max)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::ForceTouch,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::Telephoto])
            .with_models(&["A1921", "A2101"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold])
            .unsupported_since("26.0"),
        Device::phone("iPhone XR", &["iPhone11,8"], "SP781", "12.0", Cpu::A12)
            .with_screen(screen::IN_6_1)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide])
            .with_models(&["A1984", "A2105"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::White,
                MaterialColor::Blue,
                MaterialColor::Yellow,
                MaterialColor::Coral,
                MaterialColor::ProductRed,
            ])
            .unsupported_since("26.0"),
        Device::phone("iPhone 11", &["iPhone12,1"], "SP804", "13.0", Cpu::A13)
            .with_screen(screen::IN_6_1)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A2111", "A2221"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::White,
                MaterialColor::Green,
                MaterialColor::Yellow,
                MaterialColor::Purple,
                MaterialColor::ProductRed,
            ]),
        Device::phone("iPhone 11 Pro", &["iPhone12,3"], "SP805", "13.0", Cpu::A13)
            .with_screen(screen::IN_5_8)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2160", "A2215"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::Midnight,
            ]),
        Device::phone("iPhone 11 Pro Max", &["iPhone12,5"], "SP806", "13.0", Cpu::A13)
            .with_screen(screen::IN_6_5)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[Capability::Pro, Capability::Max])
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2161", "A2220"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::Midnight,
            ]),
        Device::phone("iPhone SE (2nd generation)", &["iPhone12,8"], "SP820", "13.4", Cpu::A13)
            .with_screen(screen::IN_4_7)
            .with_cellular(Cellular::Lte)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A2275", "A2296"])
            .with_colors(&[MaterialColor::Black, MaterialColor::White, MaterialColor::ProductRed]),
        Device::phone("iPhone 12 mini", &["iPhone13,1"], "SP829", "14.1", Cpu::A14)
            .with_screen(screen::IN_5_4)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Mini)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A2176", "A2398"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::White,
                MaterialColor::Blue,
                MaterialColor::Green,
                MaterialColor::Purple,
                MaterialColor::ProductRed,
            ]),
        Device::phone("iPhone 12", &["iPhone13,2"], "SP830", "14.1", Cpu::A14)
            .with_screen(screen::IN_6_1_OLED)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A2172", "A2402"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::White,
                MaterialColor::Blue,
                MaterialColor::Green,
                MaterialColor::Purple,
                MaterialColor::ProductRed,
            ]),
        Device::phone("iPhone 12 Pro", &["iPhone13,3"], "SP831", "14.1", Cpu::A14)
            .with_screen(screen::IN_6_1_OLED)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Lidar,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2341", "A2406"])
            .with_colors(&[
                MaterialColor::Graphite,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::PacificBlue,
            ]),
        Device::phone("iPhone 12 Pro Max", &["iPhone13,4"], "SP832", "14.1", Cpu::A14)
            .with_screen(screen::IN_6_7)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[Capability::Pro, Capability::Max])
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::Lidar,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2342", "A2410"])
            .with_colors(&[
                MaterialColor::Graphite,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::PacificBlue,
            ]),
        Device::phone("iPhone 13 mini", &["iPhone14,4"], "SP847", "15.0", Cpu::A15)
            .with_screen(screen::IN_5_4)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Mini)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A2481", "A2628"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Blue,
                MaterialColor::Pink,
                MaterialColor::Green,
                MaterialColor::ProductRed,
            ]),
        Device::phone("iPhone 13", &["iPhone14,5"], "SP851", "15.0", Cpu::A15)
            .with_screen(screen::IN_6_1_OLED)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A2482", "A2633"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Blue,
                MaterialColor::Pink,
                MaterialColor::Green,
                MaterialColor::ProductRed,
            ]),
        Device::phone("iPhone 13 Pro", &["iPhone14,2"], "SP852", "15.0", Cpu::A15)
            .with_screen(screen::IN_6_1_OLED)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::Lidar,
                Capability::ProMotion,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2483", "A2636"])
            .with_colors(&[
                MaterialColor::Graphite,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::SierraBlue,
                MaterialColor::AlpineGreen,
            ]),
        Device::phone("iPhone 13 Pro Max", &["iPhone14,3"], "SP848", "15.0", Cpu::A15)
            .with_screen(screen::IN_6_7)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[Capability::Pro, Capability::Max])
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::Lidar,
                Capability::ProMotion,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2484", "A2641"])
            .with_colors(&[
                MaterialColor::Graphite,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::SierraBlue,
                MaterialColor::AlpineGreen,
            ]),
        Device::phone("iPhone SE (3rd generation)", &["iPhone14,6"], "SP867", "15.4", Cpu::A15)
            .with_screen(screen::IN_4_7)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::Lightning,
                Capability::HomeButton,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Esim,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::Front, Camera::Wide])
            .with_models(&["A2595", "A2782"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::ProductRed,
            ]),
        Device::phone("iPhone 14", &["iPhone14,7"], "SP873", "16.0", Cpu::A15)
            .with_screen(screen::IN_6_1_OLED)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A2649", "A2881"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Blue,
                MaterialColor::Purple,
                MaterialColor::Yellow,
                MaterialColor::ProductRed,
            ]),
        Device::phone("iPhone 14 Plus", &["iPhone14,8"], "SP874", "16.0", Cpu::A15)
            .with_screen(screen::IN_6_7)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Plus)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A2632", "A2885"])
            .with_colors(&[
                MaterialColor::Midnight,
                MaterialColor::Starlight,
                MaterialColor::Blue,
                MaterialColor::Purple,
                MaterialColor::Yellow,
                MaterialColor::ProductRed,
            ]),
        Device::phone("iPhone 14 Pro", &["iPhone15,2"], "SP875", "16.0", Cpu::A16)
            .with_screen(screen::IN_6_1_PRO)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::AlwaysOnDisplay,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Lidar,
                Capability::ProMotion,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2650", "A2890"])
            .with_image(
                "https://support.apple.com/library/APPLE/APPLECARE_ALLGEOS/SP875/sp875-sp876-iphone14-pro-promax.png",
            )
            .with_colors(&[
                MaterialColor::SpaceBlack,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::DeepPurple,
            ]),
        Device::phone("iPhone 14 Pro Max", &["iPhone15,3"], "SP876", "16.0", Cpu::A16)
            .with_screen(screen::IN_6_7_PRO)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[Capability::Pro, Capability::Max])
            .with_all(&[
                Capability::Lightning,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::AlwaysOnDisplay,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Lidar,
                Capability::ProMotion,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2651", "A2894"])
            .with_image(
                "https://support.apple.com/library/APPLE/APPLECARE_ALLGEOS/SP875/sp875-sp876-iphone14-pro-promax.png",
            )
            .with_colors(&[
                MaterialColor::SpaceBlack,
                MaterialColor::Silver,
                MaterialColor::Gold,
                MaterialColor::DeepPurple,
            ]),
        Device::phone("iPhone 15", &["iPhone15,4"], "SP901", "17.0", Cpu::A16)
            .with_screen(screen::IN_6_1_PRO)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::UsbC,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A2846", "A3090"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::Blue,
                MaterialColor::Green,
                MaterialColor::Yellow,
                MaterialColor::Pink,
            ]),
        Device::phone("iPhone 15 Plus", &["iPhone15,5"], "SP902", "17.0", Cpu::A16)
            .with_screen(screen::IN_6_7_PRO)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Plus)
            .with_all(&[
                Capability::UsbC,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A2847", "A3094"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::Blue,
                MaterialColor::Green,
                MaterialColor::Yellow,
                MaterialColor::Pink,
            ]),
        Device::phone("iPhone 15 Pro", &["iPhone16,1"], "SP903", "17.0", Cpu::A17Pro)
            .without(&Capability::RingerSwitch)
            .with_screen(screen::IN_6_1_PRO)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::UsbC,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::AlwaysOnDisplay,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Lidar,
                Capability::ProMotion,
                Capability::ActionButton,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2848", "A3101"])
            .with_colors(&[
                MaterialColor::NaturalTitanium,
                MaterialColor::BlueTitanium,
                MaterialColor::WhiteTitanium,
                MaterialColor::BlackTitanium,
            ]),
        Device::phone("iPhone 15 Pro Max", &["iPhone16,2"], "SP904", "17.0", Cpu::A17Pro)
            .without(&Capability::RingerSwitch)
            .with_screen(screen::IN_6_7_PRO)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[Capability::Pro, Capability::Max])
            .with_all(&[
                Capability::UsbC,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::AlwaysOnDisplay,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Lidar,
                Capability::ProMotion,
                Capability::ActionButton,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A2849", "A3105"])
            .with_colors(&[
                MaterialColor::NaturalTitanium,
                MaterialColor::BlueTitanium,
                MaterialColor::WhiteTitanium,
                MaterialColor::BlackTitanium,
            ]),
        Device::phone("iPhone 16", &["iPhone17,3"], "121029", "18.0", Cpu::A18)
            .without(&Capability::RingerSwitch)
            .with_screen(screen::IN_6_1_PRO)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::UsbC,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::ActionButton,
                Capability::CameraControl,
                Capability::AppleIntelligence,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A3081", "A3286"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::White,
                MaterialColor::Pink,
                MaterialColor::Teal,
                MaterialColor::Ultramarine,
            ]),
        Device::phone("iPhone 16 Plus", &["iPhone17,4"], "121030", "18.0", Cpu::A18)
            .without(&Capability::RingerSwitch)
            .with_screen(screen::IN_6_7_PRO)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Plus)
            .with_all(&[
                Capability::UsbC,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::ActionButton,
                Capability::CameraControl,
                Capability::AppleIntelligence,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide])
            .with_models(&["A3082", "A3290"])
            .with_colors(&[
                MaterialColor::Black,
                MaterialColor::White,
                MaterialColor::Pink,
                MaterialColor::Teal,
                MaterialColor::Ultramarine,
            ]),
        Device::phone("iPhone 16 Pro", &["iPhone17,1"], "121031", "18.0", Cpu::A18Pro)
            .without(&Capability::RingerSwitch)
            .with_screen(screen::IN_6_3)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with(Capability::Pro)
            .with_all(&[
                Capability::UsbC,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::AlwaysOnDisplay,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Lidar,
                Capability::ProMotion,
                Capability::ActionButton,
                Capability::CameraControl,
                Capability::AppleIntelligence,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A3083", "A3293"])
            .with_colors(&[
                MaterialColor::NaturalTitanium,
                MaterialColor::WhiteTitanium,
                MaterialColor::BlackTitanium,
                MaterialColor::DesertTitanium,
            ]),
        Device::phone("iPhone 16 Pro Max", &["iPhone17,2"], "121032", "18.0", Cpu::A18Pro)
            .without(&Capability::RingerSwitch)
            .with_screen(screen::IN_6_9)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[Capability::Pro, Capability::Max])
            .with_all(&[
                Capability::UsbC,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::MagSafe,
                Capability::TrueTone,
                Capability::DynamicIsland,
                Capability::AlwaysOnDisplay,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::Lidar,
                Capability::ProMotion,
                Capability::ActionButton,
                Capability::CameraControl,
                Capability::AppleIntelligence,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide, Camera::UltraWide, Camera::Telephoto])
            .with_models(&["A3084", "A3297"])
            .with_colors(&[
                MaterialColor::NaturalTitanium,
                MaterialColor::WhiteTitanium,
                MaterialColor::BlackTitanium,
                MaterialColor::DesertTitanium,
            ]),
        Device::phone("iPhone 16e", &["iPhone17,5"], "122208", "18.3", Cpu::A18)
            .without(&Capability::RingerSwitch)
            .with_screen(screen::IN_6_1_OLED)
            .with_cellular(Cellular::FiveG)
            .with_biometrics(Biometrics::FaceId)
            .with_all(&[
                Capability::UsbC,
                Capability::Nfc,
                Capability::ApplePay,
                Capability::WirelessCharging,
                Capability::TrueTone,
                Capability::Notch,
                Capability::RoundedCorners,
                Capability::Esim,
                Capability::DualEsim,
                Capability::CrashDetection,
                Capability::Satellite,
                Capability::ActionButton,
                Capability::AppleIntelligence,
                Capability::Gps,
            ])
            .with_cameras(&[Camera::TrueDepth, Camera::Wide])
            .with_models(&["A3212"])
            .with_colors(&[MaterialColor::Black, MaterialColor::White]),
    ]
}
