use crate::models::{Hsl, Rgb};

// Absorbs float noise so that integral channel values are not truncated down
const CHANNEL_EPSILON: f64 = 1e-9;

/// Converts an RGB color to its hue/saturation/luminance representation.
pub fn to_hsl(color: Rgb) -> Hsl {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    let mut h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0 * 60.0
    } else if max == g {
        (2.0 + (b - r) / delta) * 60.0
    } else {
        (4.0 + (r - g) / delta) * 60.0
    };
    if h < 0.0 {
        h += 360.0;
    };
    Hsl { h, s, l }
}

/// Converts back to RGB. Channels are truncated to integers.
pub fn to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = hsl.l - c / 2.0;
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0 + CHANNEL_EPSILON).clamp(0.0, 255.0) as u8
}

/// Rotates the hue by 180 degrees, keeping saturation and luminance.
pub fn complementary(color: Rgb) -> Rgb {
    let mut hsl = to_hsl(color);
    hsl.h = if hsl.h < 180.0 { hsl.h + 180.0 } else { hsl.h - 180.0 };
    to_rgb(hsl)
}
