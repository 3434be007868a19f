use serde::{Deserialize, Serialize};

/// Typography and box sizing of a single receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptStyles {
    /// CSS font stack for the whole receipt.
    pub font_family: String,

    /// Body text size in points.
    pub body_size: u32,

    /// Store name size in points.
    pub title_size: u32,

    /// Header and footer size in points.
    pub small_size: u32,

    /// Details, items and totals size in points.
    pub detail_size: u32,

    /// Receipt width in millimetres; matches the paper roll.
    pub width_mm: f64,

    /// Inner padding in millimetres.
    pub padding_mm: f64,
}

impl Default for ReceiptStyles {
    fn default() -> Self {
        Self {
            font_family: "'Courier New', monospace".to_string(),
            body_size: 10,
            title_size: 14,
            small_size: 8,
            detail_size: 9,
            width_mm: 80.0,
            padding_mm: 5.0,
        }
    }
}

/// Page geometry handed to the rendering engine at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    pub width_mm: f64,
    pub print_background: bool,
    pub margins: Margins,
}

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl PageSetup {
    /// 80mm thermal roll, backgrounds on, no margins.
    pub fn thermal_80mm() -> Self {
        Self {
            width_mm: 80.0,
            print_background: true,
            margins: Margins::default(),
        }
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::thermal_80mm()
    }
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / 25.4
}
