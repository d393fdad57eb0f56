//! Colour string manipulation
//!
//! Colours are `#RGB`, `#RRGGBB` or `#AARRGGBB` strings; channel maths is
//! done on `0.0..=1.0` floats.

use thiserror::Error;

/// Hue offset that spreads successive generated colours evenly
const GOLDEN_ANGLE: f64 = 137.5 / 360.0;

/// Returned when a generated colour cannot be derived from its seed
const FALLBACK_COLOR: &str = "#FF0000";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour: '{0}'")]
pub struct ParseColorError(pub String);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Rgba {
    fn parse(text: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError(text.to_string());
        let hex = text.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() {
            return Err(err());
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| err())
        };

        match hex.len() {
            3 => {
                let nibble = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Self {
                    r: nibble(0)?,
                    g: nibble(1)?,
                    b: nibble(2)?,
                    a: 1.0,
                })
            }
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a: 1.0,
            }),
            8 => Ok(Self {
                a: channel(&hex[0..2])?,
                r: channel(&hex[2..4])?,
                g: channel(&hex[4..6])?,
                b: channel(&hex[6..8])?,
            }),
            _ => Err(err()),
        }
    }

    fn to_hex(self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if byte(self.a) == 255 {
            format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                byte(self.a),
                byte(self.r),
                byte(self.g),
                byte(self.b)
            )
        }
    }

    fn max_min(self) -> (f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        (max, min)
    }

    /// Hue in `0.0..1.0`, or `None` for greys
    fn hue(self) -> Option<f64> {
        let (max, min) = self.max_min();
        let delta = max - min;
        if delta <= 0.0 {
            return None;
        }

        let sector = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        Some(sector / 6.0)
    }

    fn with_hsv_hue(self, hue: f64) -> Self {
        let (max, min) = self.max_min();
        let chroma = max - min;
        let (r, g, b) = from_chroma(hue, chroma, max - chroma);
        Self { r, g, b, a: self.a }
    }

    fn hsl_saturation_lightness(self) -> (f64, f64) {
        let (max, min) = self.max_min();
        let lightness = (max + min) / 2.0;
        let delta = max - min;
        if delta <= 0.0 {
            return (0.0, lightness);
        }
        (delta / (1.0 - (2.0 * lightness - 1.0).abs()), lightness)
    }

    fn from_hsla(hue: f64, saturation: f64, lightness: f64, a: f64) -> Self {
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let (r, g, b) = from_chroma(hue, chroma, lightness - chroma / 2.0);
        Self { r, g, b, a }
    }
}

fn from_chroma(hue: f64, chroma: f64, offset: f64) -> (f64, f64, f64) {
    let h = (hue.rem_euclid(1.0)) * 6.0;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    (r + offset, g + offset, b + offset)
}

/// Scale the HSL saturation of `color` by `factor`
pub fn desaturate(color: &str, factor: f64) -> Result<String, ParseColorError> {
    let rgba = Rgba::parse(color)?;
    let hue = rgba.hue().unwrap_or(0.0);
    let (saturation, lightness) = rgba.hsl_saturation_lightness();
    let saturation = (saturation * factor).clamp(0.0, 1.0);
    Ok(Rgba::from_hsla(hue, saturation, lightness, rgba.a).to_hex())
}

/// Next colour in a golden-angle sequence seeded by `color`
///
/// Greys have no hue to rotate and yield pure red.
pub fn generate_color_from(color: &str) -> Result<String, ParseColorError> {
    let rgba = Rgba::parse(color)?;
    match rgba.hue() {
        Some(hue) => {
            let mut hue = hue + GOLDEN_ANGLE;
            if hue > 1.0 {
                hue -= 1.0;
            }
            Ok(rgba.with_hsv_hue(hue).to_hex())
        }
        None => Ok(FALLBACK_COLOR.to_string()),
    }
}
