use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use urania::aspects::AspectType;
use urania::bodies::Body;
use urania::rendering::{Color, RingRadii, VisualConfig};

/// Canvas size plus styling for one wheel render.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSettings {
    pub width: f64,
    pub height: f64,
    pub visual: VisualConfig,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            visual: VisualConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RadiiToml {
    zodiac_outer: Option<f64>,
    zodiac_inner: Option<f64>,
    planets: Option<f64>,
    aspects: Option<f64>,
    house_numbers: Option<f64>,
    highlight: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WheelToml {
    width: Option<f64>,
    height: Option<f64>,
    padding: Option<f64>,
    glyph_size: Option<f64>,
    aspect_stroke_width: Option<f64>,
    highlight_width: Option<f64>,
    stroke_width: Option<f64>,
    background_color: Option<String>,
    stroke_color: Option<String>,
    highlight_color: Option<String>,
    draw_chart_shape: Option<bool>,
    draw_stelliums: Option<bool>,
    accept_legacy_patterns: Option<bool>,
    #[serde(default)]
    radii: Option<RadiiToml>,
    #[serde(default)]
    sign_colors: Option<Vec<String>>,
    #[serde(default)]
    planet_colors: HashMap<String, String>,
    #[serde(default)]
    aspect_colors: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    wheel: Option<WheelToml>,
}

/// Try common relative paths for `configs/wheel.toml`.
pub fn read_wheel_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/wheel.toml", "../../configs/wheel.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load wheel.toml from {:?}", paths);
}

/// Load settings from an explicit file, or from the default locations.
///
/// Without an explicit path a missing file is not an error: the defaults are
/// used and a warning is logged.
pub fn load_wheel_settings(path: Option<&Path>) -> anyhow::Result<WheelSettings> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?,
        None => match read_wheel_toml_text() {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{e}; using default wheel settings");
                return Ok(WheelSettings::default());
            }
        },
    };
    parse_wheel_settings(&text)
}

/// Parse the `[wheel]` table; keys that are absent keep their defaults.
pub fn parse_wheel_settings(text: &str) -> anyhow::Result<WheelSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse wheel.toml: {e}"))?;
    let Some(cfg) = root.wheel else {
        log::debug!("No [wheel] table in config; using defaults");
        return Ok(WheelSettings::default());
    };

    let mut settings = WheelSettings::default();
    let visual = &mut settings.visual;

    if let Some(width) = cfg.width {
        settings.width = positive("wheel.width", width)?;
    }
    if let Some(height) = cfg.height {
        settings.height = positive("wheel.height", height)?;
    }
    if let Some(padding) = cfg.padding {
        if !padding.is_finite() || padding < 0.0 {
            anyhow::bail!("wheel.padding must be a non-negative number, got {padding}");
        }
        visual.padding = padding;
    }
    if let Some(v) = cfg.glyph_size {
        visual.glyph_size = positive("wheel.glyph_size", v)?;
    }
    if let Some(v) = cfg.aspect_stroke_width {
        visual.aspect_stroke_width = positive("wheel.aspect_stroke_width", v)?;
    }
    if let Some(v) = cfg.highlight_width {
        visual.highlight_width = positive("wheel.highlight_width", v)?;
    }
    if let Some(v) = cfg.stroke_width {
        visual.stroke_width = positive("wheel.stroke_width", v)?;
    }
    if let Some(c) = cfg.background_color {
        visual.background_color = color("wheel.background_color", &c)?;
    }
    if let Some(c) = cfg.stroke_color {
        visual.stroke_color = color("wheel.stroke_color", &c)?;
    }
    if let Some(c) = cfg.highlight_color {
        visual.highlight_color = color("wheel.highlight_color", &c)?;
    }
    if let Some(flag) = cfg.draw_chart_shape {
        visual.draw_chart_shape = flag;
    }
    if let Some(flag) = cfg.draw_stelliums {
        visual.draw_stelliums = flag;
    }
    if let Some(flag) = cfg.accept_legacy_patterns {
        visual.accept_legacy_patterns = flag;
    }

    if let Some(radii) = cfg.radii {
        visual.radii = apply_radii(visual.radii, radii)?;
    }

    if let Some(colors) = cfg.sign_colors {
        if colors.len() != 12 {
            anyhow::bail!("wheel.sign_colors must list 12 colors, got {}", colors.len());
        }
        visual.sign_colors = colors
            .iter()
            .map(|c| color("wheel.sign_colors", c))
            .collect::<anyhow::Result<Vec<_>>>()?;
    }

    for (name, hex) in &cfg.planet_colors {
        let body: Body = name
            .parse()
            .map_err(|e| anyhow::anyhow!("wheel.planet_colors: {e}"))?;
        visual
            .planet_colors
            .insert(body, color("wheel.planet_colors", hex)?);
    }

    for (name, hex) in &cfg.aspect_colors {
        let aspect = AspectType::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == name.to_ascii_lowercase())
            .ok_or_else(|| anyhow::anyhow!("wheel.aspect_colors: unknown aspect type {name:?}"))?;
        visual
            .aspect_colors
            .insert(aspect, color("wheel.aspect_colors", hex)?);
    }

    Ok(settings)
}

fn apply_radii(mut radii: RingRadii, cfg: RadiiToml) -> anyhow::Result<RingRadii> {
    let fields = [
        ("zodiac_outer", cfg.zodiac_outer, &mut radii.zodiac_outer),
        ("zodiac_inner", cfg.zodiac_inner, &mut radii.zodiac_inner),
        ("planets", cfg.planets, &mut radii.planets),
        ("aspects", cfg.aspects, &mut radii.aspects),
        ("house_numbers", cfg.house_numbers, &mut radii.house_numbers),
        ("highlight", cfg.highlight, &mut radii.highlight),
    ];
    for (name, value, slot) in fields {
        if let Some(value) = value {
            if !(value > 0.0 && value <= 1.0) {
                anyhow::bail!("wheel.radii.{name} must be in (0, 1], got {value}");
            }
            *slot = value;
        }
    }
    if radii.zodiac_inner >= radii.zodiac_outer {
        anyhow::bail!("wheel.radii.zodiac_inner must be less than zodiac_outer");
    }
    Ok(radii)
}

fn positive(key: &str, value: f64) -> anyhow::Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        anyhow::bail!("{key} must be a positive number, got {value}")
    }
}

fn color(key: &str, hex: &str) -> anyhow::Result<Color> {
    Color::from_hex(hex).ok_or_else(|| anyhow::anyhow!("{key}: invalid hex color {hex:?}"))
}
