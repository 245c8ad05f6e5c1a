//! Mac table.
//!
//! Mac identifiers carry no stable prefix position, so this table leans on
//! the form-factor payload case for downstream filtering. A small Intel
//! tail is kept for fleets that still report those identifiers.

use crate::capability::{Biometrics, Camera, Capability, MacForm};
use crate::device::{Cpu, Device, MaterialColor};
use crate::screen;

pub(crate) fn devices() -> Vec<Device> {
    vec![
        Device::mac("MacBook Air (M1, 2020)", &["MacBookAir10,1"], "SP825", "11.0", Cpu::M1, MacForm::MacBook)
            .with_screen(screen::IN_13_3)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack, Capability::TrueTone])
            .with_cameras(&[Camera::Front])
            .with_models(&["A2337"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver, MaterialColor::Gold]),
        Device::mac(
            "MacBook Pro (13-inch, M1, 2020)",
            &["MacBookPro17,1"],
            "SP824",
            "11.0",
            Cpu::M1,
            MacForm::MacBook,
        )
        .with_screen(screen::IN_13_3)
        .with_biometrics(Biometrics::TouchId)
        .with_all(&[Capability::UsbC, Capability::HeadphoneJack, Capability::TrueTone])
        .with_cameras(&[Camera::Front])
        .with_models(&["A2338"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::mac("Mac mini (M1, 2020)", &["Macmini9,1"], "SP823", "11.0", Cpu::M1, MacForm::MacMini)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack])
            .with_models(&["A2348"])
            .with_colors(&[MaterialColor::Silver]),
        Device::mac("iMac (24-inch, M1, 2021)", &["iMac21,1", "iMac21,2"], "SP839", "11.3", Cpu::M1, MacForm::IMac)
            .with_screen(screen::IN_24_0)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack, Capability::TrueTone])
            .with_cameras(&[Camera::Front])
            .with_models(&["A2438", "A2439"])
            .with_colors(&[
                MaterialColor::Silver,
                MaterialColor::Blue,
                MaterialColor::Green,
                MaterialColor::Pink,
                MaterialColor::Yellow,
                MaterialColor::Orange,
                MaterialColor::Purple,
            ]),
        Device::mac(
            "MacBook Pro (14-inch, 2021)",
            &["MacBookPro18,3", "MacBookPro18,4"],
            "SP854",
            "12.0",
            Cpu::M1Pro,
            MacForm::MacBook,
        )
        .with_screen(screen::IN_14_2)
        .with_biometrics(Biometrics::TouchId)
        .with_all(&[
            Capability::UsbC,
            Capability::MagSafe,
            Capability::HeadphoneJack,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Notch,
        ])
        .with_cameras(&[Camera::Front])
        .with_models(&["A2442"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::mac(
            "MacBook Pro (16-inch, 2021)",
            &["MacBookPro18,1", "MacBookPro18,2"],
            "SP858",
            "12.0",
            Cpu::M1Pro,
            MacForm::MacBook,
        )
        .with_screen(screen::IN_16_2)
        .with_biometrics(Biometrics::TouchId)
        .with_all(&[
            Capability::UsbC,
            Capability::MagSafe,
            Capability::HeadphoneJack,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Notch,
        ])
        .with_cameras(&[Camera::Front])
        .with_models(&["A2485"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::mac("Mac Studio (2022)", &["Mac13,1", "Mac13,2"], "SP865", "12.3", Cpu::M1Max, MacForm::MacStudio)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack])
            .with_models(&["A2615"])
            .with_colors(&[MaterialColor::Silver]),
        Device::mac("MacBook Air (M2, 2022)", &["Mac14,2"], "SP869", "12.4", Cpu::M2, MacForm::MacBook)
            .with_screen(screen::IN_13_6)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::UsbC,
                Capability::MagSafe,
                Capability::HeadphoneJack,
                Capability::TrueTone,
                Capability::Notch,
            ])
            .with_cameras(&[Camera::Front])
            .with_models(&["A2681"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Starlight,
                MaterialColor::Midnight,
            ]),
        Device::mac("MacBook Pro (13-inch, M2, 2022)", &["Mac14,7"], "SP870", "12.4", Cpu::M2, MacForm::MacBook)
            .with_screen(screen::IN_13_3)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack, Capability::TrueTone])
            .with_cameras(&[Camera::Front])
            .with_models(&["A2338"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::mac("Mac mini (2023)", &["Mac14,3", "Mac14,12"], "SP891", "13.2", Cpu::M2, MacForm::MacMini)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack])
            .with_models(&["A2686"])
            .with_colors(&[MaterialColor::Silver]),
        Device::mac(
            "MacBook Pro (14-inch, 2023)",
            &["Mac14,5", "Mac14,9"],
            "SP889",
            "13.2",
            Cpu::M2Pro,
            MacForm::MacBook,
        )
        .with_screen(screen::IN_14_2)
        .with_biometrics(Biometrics::TouchId)
        .with_all(&[
            Capability::UsbC,
            Capability::MagSafe,
            Capability::HeadphoneJack,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Notch,
        ])
        .with_cameras(&[Camera::Front])
        .with_models(&["A2779"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::mac(
            "MacBook Pro (16-inch, 2023)",
            &["Mac14,6", "Mac14,10"],
            "SP890",
            "13.2",
            Cpu::M2Pro,
            MacForm::MacBook,
        )
        .with_screen(screen::IN_16_2)
        .with_biometrics(Biometrics::TouchId)
        .with_all(&[
            Capability::UsbC,
            Capability::MagSafe,
            Capability::HeadphoneJack,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Notch,
        ])
        .with_cameras(&[Camera::Front])
        .with_models(&["A2780"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::mac("Mac Pro (2023)", &["Mac14,8"], "SP892", "13.4", Cpu::M2Ultra, MacForm::MacPro)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack])
            .with_models(&["A2786", "A2787"])
            .with_colors(&[MaterialColor::Silver]),
        Device::mac("Mac Studio (2023)", &["Mac14,13", "Mac14,14"], "SP894", "13.4", Cpu::M2Max, MacForm::MacStudio)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack])
            .with_models(&["A2901"])
            .with_colors(&[MaterialColor::Silver]),
        Device::mac("MacBook Air (15-inch, M2, 2023)", &["Mac14,15"], "SP893", "13.4", Cpu::M2, MacForm::MacBook)
            .with_screen(screen::IN_15_3)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::UsbC,
                Capability::MagSafe,
                Capability::HeadphoneJack,
                Capability::TrueTone,
                Capability::Notch,
            ])
            .with_cameras(&[Camera::Front])
            .with_models(&["A2941"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Starlight,
                MaterialColor::Midnight,
            ]),
        Device::mac("MacBook Pro (14-inch, M3, 2023)", &["Mac15,3"], "SP898", "14.1", Cpu::M3, MacForm::MacBook)
            .with_screen(screen::IN_14_2)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::UsbC,
                Capability::MagSafe,
                Capability::HeadphoneJack,
                Capability::TrueTone,
                Capability::ProMotion,
                Capability::Notch,
            ])
            .with_cameras(&[Camera::Front])
            .with_models(&["A2918"])
            .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::mac("MacBook Air (13-inch, M3, 2024)", &["Mac15,12"], "118551", "14.3", Cpu::M3, MacForm::MacBook)
            .with_screen(screen::IN_13_6)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::UsbC,
                Capability::MagSafe,
                Capability::HeadphoneJack,
                Capability::TrueTone,
                Capability::Notch,
                Capability::AppleIntelligence,
            ])
            .with_cameras(&[Camera::Front])
            .with_models(&["A3113"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Starlight,
                MaterialColor::Midnight,
            ]),
        Device::mac("MacBook Air (15-inch, M3, 2024)", &["Mac15,13"], "118552", "14.3", Cpu::M3, MacForm::MacBook)
            .with_screen(screen::IN_15_3)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::UsbC,
                Capability::MagSafe,
                Capability::HeadphoneJack,
                Capability::TrueTone,
                Capability::Notch,
                Capability::AppleIntelligence,
            ])
            .with_cameras(&[Camera::Front])
            .with_models(&["A3114"])
            .with_colors(&[
                MaterialColor::SpaceGray,
                MaterialColor::Silver,
                MaterialColor::Starlight,
                MaterialColor::Midnight,
            ]),
        Device::mac("iMac (24-inch, M4, 2024)", &["Mac16,2"], "121557", "15.1", Cpu::M4, MacForm::IMac)
            .with_screen(screen::IN_24_0)
            .with_biometrics(Biometrics::TouchId)
            .with_all(&[
                Capability::UsbC,
                Capability::HeadphoneJack,
                Capability::TrueTone,
                Capability::AppleIntelligence,
            ])
            .with_cameras(&[Camera::Front])
            .with_models(&["A3266"])
            .with_colors(&[
                MaterialColor::Silver,
                MaterialColor::Blue,
                MaterialColor::Green,
                MaterialColor::Pink,
                MaterialColor::Yellow,
                MaterialColor::Orange,
                MaterialColor::Purple,
            ]),
        Device::mac("Mac mini (2024)", &["Mac16,10", "Mac16,11"], "121555", "15.1", Cpu::M4, MacForm::MacMini)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack, Capability::AppleIntelligence])
            .with_models(&["A3238"])
            .with_colors(&[MaterialColor::Silver]),
        Device::mac(
            "MacBook Pro (14-inch, M4, 2024)",
            &["Mac16,1", "Mac16,6", "Mac16,8"],
            "121552",
            "15.1",
            Cpu::M4,
            MacForm::MacBook,
        )
        .with_screen(screen::IN_14_2)
        .with_biometrics(Biometrics::TouchId)
        .with_all(&[
            Capability::UsbC,
            Capability::MagSafe,
            Capability::HeadphoneJack,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Notch,
            Capability::AppleIntelligence,
        ])
        .with_cameras(&[Camera::Front])
        .with_models(&["A3112"])
        .with_colors(&[MaterialColor::SpaceBlack, MaterialColor::Silver]),
        Device::mac(
            "MacBook Pro (16-inch, M4, 2024)",
            &["Mac16,7", "Mac16,5"],
            "121553",
            "15.1",
            Cpu::M4Pro,
            MacForm::MacBook,
        )
        .with_screen(screen::IN_16_2)
        .with_biometrics(Biometrics::TouchId)
        .with_all(&[
            Capability::UsbC,
            Capability::MagSafe,
            Capability::HeadphoneJack,
            Capability::TrueTone,
            Capability::ProMotion,
            Capability::Notch,
            Capability::AppleIntelligence,
        ])
        .with_cameras(&[Camera::Front])
        .with_models(&["A3186"])
        .with_colors(&[MaterialColor::SpaceBlack, MaterialColor::Silver]),
        Device::mac(
            "MacBook Pro (16-inch, 2019)",
            &["MacBookPro16,1"],
            "SP809",
            "10.15",
            Cpu::Intel,
            MacForm::MacBook,
        )
        .with_screen(screen::IN_16_2)
        .with_biometrics(Biometrics::TouchId)
        .with_all(&[
            Capability::UsbC,
            Capability::HeadphoneJack,
            Capability::TrueTone,
            Capability::ForceTouch,
        ])
        .with_cameras(&[Camera::Front])
        .with_models(&["A2141"])
        .with_colors(&[MaterialColor::SpaceGray, MaterialColor::Silver]),
        Device::mac(
            "iMac (Retina 5K, 27-inch, 2020)",
            &["iMac20,1", "iMac20,2"],
            "SP821",
            "10.15",
            Cpu::Intel,
            MacForm::IMac,
        )
        .with_all(&[Capability::UsbC, Capability::HeadphoneJack, Capability::TrueTone])
        .with_cameras(&[Camera::Front])
        .with_models(&["A2115"])
        .with_colors(&[MaterialColor::Silver]),
        Device::mac("Mac Pro (2019)", &["MacPro7,1"], "SP797", "10.15", Cpu::Intel, MacForm::MacPro)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack])
            .with_models(&["A1991"])
            .with_colors(&[MaterialColor::Silver]),
        Device::mac("Mac mini (2018)", &["Macmini8,1"], "SP782", "10.14", Cpu::Intel, MacForm::MacMini)
            .with_all(&[Capability::UsbC, Capability::HeadphoneJack])
            .with_models(&["A1993"])
            .with_colors(&[MaterialColor::SpaceGray]),
    ]
}
