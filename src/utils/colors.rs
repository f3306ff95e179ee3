//! Heat-map color scale for the astro frequency table.
//!
//! Cell backgrounds interpolate linearly between hue 170 (teal, low) and
//! hue 200 (blue, high) at fixed saturation/lightness, converted to RGB
//! for the terminal.

const MIN_HUE: f32 = 200.0;
const MAX_HUE: f32 = 170.0;
const SATURATION: f32 = 0.70;
const LIGHTNESS: f32 = 0.90;

/// Hue for `value` relative to `max`. `max == 0` pins everything low.
pub fn heat_hue(value: u32, max: u32) -> f32 {
    if max == 0 {
        return MAX_HUE;
    }
    let t = value as f32 / max as f32;
    MAX_HUE - t * (MAX_HUE - MIN_HUE)
}

/// Heat cell color as an RGB triple.
pub fn heat_rgb(value: u32, max: u32) -> (u8, u8, u8) {
    hsl_to_rgb(heat_hue(value, max), SATURATION, LIGHTNESS)
}

/// Bar height as a percentage of the tallest bar, `0..=100`.
pub fn bar_percent(value: u32, max: u32) -> u16 {
    if max == 0 {
        return 0;
    }
    ((value as f32 / max as f32) * 100.0).round() as u16
}

/// Standard HSL to RGB conversion; `h` in degrees, `s`/`l` in `0..=1`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_endpoints() {
        assert_eq!(heat_hue(0, 9), 170.0);
        assert_eq!(heat_hue(9, 9), 200.0);
    }

    #[test]
    fn test_hue_is_monotonic_in_value() {
        let max = 12;
        let mut prev = heat_hue(0, max);
        for v in 1..=max {
            let hue = heat_hue(v, max);
            assert!(hue > prev, "hue must increase with value: {} !> {}", hue, prev);
            prev = hue;
        }
    }

    #[test]
    fn test_zero_max_pins_low() {
        assert_eq!(heat_hue(0, 0), 170.0);
        assert_eq!(bar_percent(5, 0), 0);
    }

    #[test]
    fn test_bar_percent_histogram() {
        // For [3,7,1,0,5,2,9,4,6,8] the max bar is index 6.
        let values = [3u32, 7, 1, 0, 5, 2, 9, 4, 6, 8];
        let max = *values.iter().max().unwrap();
        let heights: Vec<u16> = values.iter().map(|&v| bar_percent(v, max)).collect();

        let tallest = heights
            .iter()
            .enumerate()
            .max_by_key(|(_, h)| **h)
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(tallest, 6);
        assert_eq!(heights[6], 100);
        assert_eq!(heights[3], 0);
        assert_eq!(heights[0], ((3.0 / 9.0) * 100.0_f32).round() as u16);
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn test_heat_rgb_stays_light() {
        // At 90% lightness every channel stays near white.
        for v in 0..=9 {
            let (r, g, b) = heat_rgb(v, 9);
            assert!(r > 180 && g > 180 && b > 180, "({}, {}, {})", r, g, b);
        }
    }
}
