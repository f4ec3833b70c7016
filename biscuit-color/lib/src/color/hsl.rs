//! HSL (hue, saturation, lightness) conversions.
//!
//! Hue is expressed in degrees (`0.0..360.0`), saturation and lightness as
//! fractions in `0.0..=1.0`.

use super::rgb::Rgb;

/// Converts an RGB color to `(hue, saturation, lightness)`.
///
/// ```
/// use biscuit_color::color::{hsl::rgb_to_hsl, rgb::Rgb};
///
/// let (h, s, l) = rgb_to_hsl(Rgb::new(255, 0, 0));
/// assert_eq!((h, s, l), (0.0, 1.0, 0.5));
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> (f64, f64, f64) {
    let r = f64::from(rgb.red()) / 255.0;
    let g = f64::from(rgb.green()) / 255.0;
    let b = f64::from(rgb.blue()) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, 0.0, lightness);
    }

    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (hue * 60.0, saturation, lightness)
}

/// Converts `(hue, saturation, lightness)` back to RGB.
///
/// Hue wraps around the color wheel; saturation and lightness are clamped to
/// `0.0..=1.0`.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue.rem_euclid(360.0) / 360.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    if s == 0.0 {
        let gray = to_channel(l);
        return Rgb::new(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn primaries_to_hsl() {
        let (h, s, l) = rgb_to_hsl(Rgb::new(0, 255, 0));
        assert!(close(h, 120.0) && close(s, 1.0) && close(l, 0.5));

        let (h, s, l) = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert!(close(h, 240.0) && close(s, 1.0) && close(l, 0.5));
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        let (h, s, l) = rgb_to_hsl(Rgb::new(102, 102, 102));
        assert_eq!((h, s), (0.0, 0.0));
        assert!(close(l, 0.4));
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.25), Rgb::new(0, 128, 0));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(-120.0, 1.0, 0.5), Rgb::new(0, 0, 255));
    }

    proptest! {
        #[test]
        fn round_trip_within_one_step(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let (h, s, l) = rgb_to_hsl(Rgb::new(r, g, b));
            let back = hsl_to_rgb(h, s, l);
            prop_assert!(back.red().abs_diff(r) <= 1);
            prop_assert!(back.green().abs_diff(g) <= 1);
            prop_assert!(back.blue().abs_diff(b) <= 1);
        }
    }
}
