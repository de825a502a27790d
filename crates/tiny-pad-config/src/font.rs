/// Font descriptor chosen in the font picker and applied to the text area.
use serde::{Deserialize, Serialize};

/// Scale from typographic points to device units (98/72).
pub const POINT_TO_DEVICE: f32 = 98.0 / 72.0;

pub const MIN_POINT_SIZE: f32 = 6.0;
pub const MAX_POINT_SIZE: f32 = 72.0;

/// Family names understood by the text surface.
pub const FAMILIES: &[&str] = &["Proportional", "Monospace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub family: String,
    /// Size in points, as picked by the user.
    pub size_pt: f32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Monospace".to_string(),
            size_pt: 11.0,
            bold: false,
            italic: false,
        }
    }
}

impl FontSpec {
    /// Size in device units.
    pub fn device_size(&self) -> f32 {
        self.size_pt * POINT_TO_DEVICE
    }

    pub fn is_monospace(&self) -> bool {
        self.family.eq_ignore_ascii_case("monospace")
    }

    /// Clamps the size and falls back to the default family for unknown names.
    pub fn sanitize(&mut self) {
        if !self.size_pt.is_finite() {
            self.size_pt = Self::default().size_pt;
        }
        self.size_pt = self.size_pt.clamp(MIN_POINT_SIZE, MAX_POINT_SIZE);
        if !FAMILIES
            .iter()
            .any(|f| f.eq_ignore_ascii_case(self.family.trim()))
        {
            self.family = Self::default().family;
        }
    }
}
