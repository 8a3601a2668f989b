use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgDrawOptions {
    pub theme: SvgLayoutThemes,
    /// Writes the id of every item at the center of its footprint
    pub item_ids: bool,
    /// Draws the region in which the centers of the smallest placed footprint could lie
    pub inset_region: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            item_ids: true,
            inset_region: false,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub surface_fill: &'static str,
    pub item_fill: &'static str,
    pub label_fill: &'static str,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        EARTH_TONES_THEME
    }
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    surface_fill: "#CC824A",
    item_fill: "#FFC879",
    label_fill: "#2D2D2D",
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    surface_fill: "#C3C3C3",
    item_fill: "#8F8F8F",
    label_fill: "#FFFFFF",
};

/// Scales the brightness of a `#RRGGBB` color by `fraction`.
/// Colors in any other format are returned unchanged.
pub fn change_brightness(color: &str, fraction: f64) -> String {
    let hex = color.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
    };
    match (hex.len(), channel(0), channel(2), channel(4)) {
        (6, Some(r), Some(g), Some(b)) => {
            let scale = |c: u8| (c as f64 * fraction) as u8;
            format!("#{:02X}{:02X}{:02X}", scale(r), scale(g), scale(b))
        }
        _ => color.to_string(),
    }
}
