use winit::keyboard::KeyCode;

/// The fixed set of keys the labs react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabKey {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Plus,
    Minus,
    Slow,
    Fast,
}

impl LabKey {
    pub const ALL: [LabKey; 12] = [
        LabKey::Forward,
        LabKey::Backward,
        LabKey::StrafeLeft,
        LabKey::StrafeRight,
        LabKey::ArrowUp,
        LabKey::ArrowDown,
        LabKey::ArrowLeft,
        LabKey::ArrowRight,
        LabKey::Plus,
        LabKey::Minus,
        LabKey::Slow,
        LabKey::Fast,
    ];

    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::KeyW => LabKey::Forward,
            KeyCode::KeyS => LabKey::Backward,
            KeyCode::KeyA => LabKey::StrafeLeft,
            KeyCode::KeyD => LabKey::StrafeRight,
            KeyCode::ArrowUp => LabKey::ArrowUp,
            KeyCode::ArrowDown => LabKey::ArrowDown,
            KeyCode::ArrowLeft => LabKey::ArrowLeft,
            KeyCode::ArrowRight => LabKey::ArrowRight,
            KeyCode::NumpadAdd | KeyCode::Equal => LabKey::Plus,
            KeyCode::NumpadSubtract | KeyCode::Minus => LabKey::Minus,
            KeyCode::ControlLeft => LabKey::Slow,
            KeyCode::ShiftLeft => LabKey::Fast,
            _ => return None,
        };
        Some(key)
    }

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Snapshot of which [`LabKey`]s are held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressedKeys {
    bits: u16,
}

impl PressedKeys {
    pub fn from_keys(keys: impl IntoIterator<Item = LabKey>) -> Self {
        let mut pressed = Self::default();
        for key in keys {
            pressed.insert(key);
        }
        pressed
    }

    pub fn insert(&mut self, key: LabKey) {
        self.bits |= key.bit();
    }

    pub fn remove(&mut self, key: LabKey) {
        self.bits &= !key.bit();
    }

    pub fn contains(&self, key: LabKey) -> bool {
        self.bits & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = LabKey> + '_ {
        LabKey::ALL.into_iter().filter(|k| self.contains(*k))
    }
}
