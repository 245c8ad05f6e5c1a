//! Apple Vision table.

use crate::capability::{Biometrics, Camera, Capability};
use crate::device::{Cpu, Device, MaterialColor};

pub(crate) fn devices() -> Vec<Device> {
    vec![
        Device::vision("Apple Vision Pro", &["RealityDevice14,1"], "SP911", "1.0", Cpu::M2)
            .with_biometrics(Biometrics::OpticId)
            .with(Capability::Pro)
            .with_cameras(&[Camera::Wide, Camera::TrueDepth])
            .with_models(&["A2117"])
            .with_colors(&[MaterialColor::White]),
    ]
}
