use glam::Vec3;

use super::CameraMovementDesc;
use crate::gameplay::{LabKey, PressedKeys};

/// Speed factor chosen by the modifier keys.
///
/// Both modifiers are checked one after the other, so holding both ends up
/// with the fast multiplier.
pub fn speed_multiplier(keys: &PressedKeys, desc: &CameraMovementDesc) -> f32 {
    let mut mult = 1.0;
    if keys.contains(LabKey::Slow) {
        mult = desc.slow_multiplier;
    }
    if keys.contains(LabKey::Fast) {
        mult = desc.fast_multiplier;
    }
    mult
}

/// Sum of the axis vectors of every held movement key, not normalized.
pub fn movement_axes(keys: &PressedKeys, direction: Vec3, right: Vec3) -> Vec3 {
    let mut axes = Vec3::ZERO;
    if keys.contains(LabKey::Forward) {
        axes += direction;
    }
    if keys.contains(LabKey::Backward) {
        axes -= direction;
    }
    if keys.contains(LabKey::StrafeRight) {
        axes += right;
    }
    if keys.contains(LabKey::StrafeLeft) {
        axes -= right;
    }
    axes
}
