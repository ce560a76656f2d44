use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Result};

use crate::heightfield::NoiseHeightFieldDesc;
use crate::util::resolve_asset_path;
use crate::window::WindowStateDesc;

pub const LAB_ENV: &str = "LABKIT_LAB";
pub const HEIGHT_FIELD_ENV: &str = "LABKIT_HEIGHTFIELD";

/// The lab programs the app can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabKind {
    Square,
    Circle,
    CirclesNested,
    CirclesInline,
    CirclesInclined,
    Orbit,
    Crane,
    Village,
    Terrain,
}

impl LabKind {
    pub const ALL: [LabKind; 9] = [
        LabKind::Square,
        LabKind::Circle,
        LabKind::CirclesNested,
        LabKind::CirclesInline,
        LabKind::CirclesInclined,
        LabKind::Orbit,
        LabKind::Crane,
        LabKind::Village,
        LabKind::Terrain,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LabKind::Square => "square",
            LabKind::Circle => "circle",
            LabKind::CirclesNested => "circles-nested",
            LabKind::CirclesInline => "circles-inline",
            LabKind::CirclesInclined => "circles-inclined",
            LabKind::Orbit => "orbit",
            LabKind::Crane => "crane",
            LabKind::Village => "village",
            LabKind::Terrain => "terrain",
        }
    }

    /// Labs steered by the first person camera take over the cursor.
    pub fn uses_camera(self) -> bool {
        matches!(self, LabKind::Village | LabKind::Terrain)
    }
}

impl fmt::Display for LabKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        match LabKind::ALL.into_iter().find(|k| k.name() == wanted) {
            Some(kind) => Ok(kind),
            None => {
                let known: Vec<&str> = LabKind::ALL.iter().map(|k| k.name()).collect();
                bail!("unknown lab {:?}, expected one of: {}", s, known.join(", "))
            }
        }
    }
}

/// Startup configuration of the app.
#[derive(Debug, Clone)]
pub struct AppDesc {
    pub lab: LabKind,
    /// Terrain lab input, a generated field is used when `None`.
    pub height_field_path: Option<PathBuf>,
    /// Generator settings for the terrain lab without a file.
    pub noise: NoiseHeightFieldDesc,
    pub window: WindowStateDesc,
}

impl Default for AppDesc {
    fn default() -> Self {
        Self {
            lab: LabKind::Terrain,
            height_field_path: None,
            noise: NoiseHeightFieldDesc::default(),
            window: WindowStateDesc::default(),
        }
    }
}

impl AppDesc {
    /// Reads `LABKIT_LAB` and `LABKIT_HEIGHTFIELD`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(LAB_ENV).ok(),
            std::env::var(HEIGHT_FIELD_ENV).ok(),
        )
    }

    pub fn from_vars(lab: Option<String>, height_field: Option<String>) -> Result<Self> {
        let mut desc = AppDesc::default();
        if let Some(lab) = lab.filter(|s| !s.trim().is_empty()) {
            desc.lab = lab.parse()?;
        }
        desc.height_field_path = height_field
            .filter(|s| !s.trim().is_empty())
            .map(resolve_asset_path);

        desc.window.title = format!("labkit - {}", desc.lab);
        if desc.lab.uses_camera() {
            desc.window.cursor_locked = true;
            desc.window.cursor_visible = false;
        }
        desc.validate()?;
        Ok(desc)
    }

    pub fn validate(&self) -> Result<()> {
        if let Err(msg) = self.window.validate() {
            bail!("invalid window description: {}", msg);
        }
        if let Err(msg) = self.noise.validate() {
            bail!("invalid noise description: {}", msg);
        }
        if self.height_field_path.is_some() && self.lab != LabKind::Terrain {
            log::warn!(
                "{} is only used by the terrain lab, ignoring it for {}",
                HEIGHT_FIELD_ENV,
                self.lab
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_generated_terrain() {
        let desc = AppDesc::from_vars(None, None).unwrap();
        assert_eq!(desc.lab, LabKind::Terrain);
        assert!(desc.height_field_path.is_none());
        assert!(desc.window.cursor_locked);
        assert_eq!(desc.window.width, 800.0);
        assert_eq!(desc.window.height, 600.0);
    }

    #[test]
    fn parses_every_lab_name() {
        for kind in LabKind::ALL {
            let desc = AppDesc::from_vars(Some(kind.name().to_string()), None).unwrap();
            assert_eq!(desc.lab, kind);
            assert_eq!(desc.window.cursor_visible, !kind.uses_camera());
        }
        assert_eq!(" Crane ".parse::<LabKind>().unwrap(), LabKind::Crane);
    }

    #[test]
    fn unknown_lab_is_an_error() {
        let err = AppDesc::from_vars(Some("teapot".to_string()), None).unwrap_err();
        assert!(err.to_string().contains("teapot"));
        assert!(err.to_string().contains("circles-inclined"));
    }

    #[test]
    fn height_field_path_is_resolved() {
        let desc = AppDesc::from_vars(None, Some("assets/field.txt".to_string())).unwrap();
        let path = desc.height_field_path.unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("assets/field.txt"));

        let desc = AppDesc::from_vars(Some(String::new()), Some("  ".to_string())).unwrap();
        assert_eq!(desc.lab, LabKind::Terrain);
        assert!(desc.height_field_path.is_none());
    }
}
