//! Count-to-color heat ramp and the low-count opacity fade.

/// sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// "#rrggbb", for SVG fill attributes.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const STEELBLUE: Rgb = Rgb::new(0x46, 0x82, 0xb4);
pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);
pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);

/// Counts below this fade toward transparent instead of changing hue.
pub const FULL_OPACITY_COUNT: u32 = 10;
/// Counts at or above this saturate to the hot end of the ramp.
pub const MAX_COLOR_COUNT: u32 = 100;

/// Piecewise-linear color ramp over three stops, clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatRamp {
    stops: [(f64, Rgb); 3],
}

/// Quiet cells steelblue, busy cells yellow, hot cells red.
pub const HEAT_RAMP: HeatRamp = HeatRamp::new([
    (FULL_OPACITY_COUNT as f64, STEELBLUE),
    (30.0, YELLOW),
    (MAX_COLOR_COUNT as f64, RED),
]);

impl HeatRamp {
    pub const fn new(stops: [(f64, Rgb); 3]) -> Self {
        Self { stops }
    }

    pub fn sample(&self, x: f64) -> Rgb {
        let [(x0, c0), (x1, c1), (x2, c2)] = self.stops;
        if x <= x0 {
            c0
        } else if x >= x2 {
            c2
        } else if x <= x1 {
            lerp(c0, c1, (x - x0) / (x1 - x0))
        } else {
            lerp(c1, c2, (x - x1) / (x2 - x1))
        }
    }
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
    )
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Heatmap fill for a cell with this frequency count.
pub fn heat_color(count: u32) -> Rgb {
    HEAT_RAMP.sample(count as f64)
}

/// Fill opacity for a cell with this frequency count: `(count+1)/10` below
/// the fade threshold, fully opaque at or above it.
pub fn fill_opacity(count: u32) -> f64 {
    if count < FULL_OPACITY_COUNT {
        (count + 1) as f64 / FULL_OPACITY_COUNT as f64
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_clamps_at_both_ends() {
        assert_eq!(heat_color(0), STEELBLUE);
        assert_eq!(heat_color(10), STEELBLUE);
        assert_eq!(heat_color(100), RED);
        assert_eq!(heat_color(5_000), RED);
    }

    #[test]
    fn ramp_hits_the_middle_stop_exactly() {
        assert_eq!(heat_color(30), YELLOW);
    }

    #[test]
    fn ramp_interpolates_between_stops() {
        // Halfway steelblue -> yellow, then halfway yellow -> red.
        assert_eq!(heat_color(20).hex(), "#a3c15a");
        assert_eq!(heat_color(65).hex(), "#ff8000");
    }

    #[test]
    fn hex_is_zero_padded_lowercase() {
        assert_eq!(STEELBLUE.hex(), "#4682b4");
        assert_eq!(Rgb::new(0, 1, 255).hex(), "#0001ff");
    }

    #[test]
    fn opacity_fades_only_below_threshold() {
        assert_eq!(fill_opacity(0), 0.1);
        assert_eq!(fill_opacity(3), 0.4);
        assert_eq!(fill_opacity(9), 1.0);
        assert_eq!(fill_opacity(10), 1.0);
        assert_eq!(fill_opacity(500), 1.0);
    }
}
