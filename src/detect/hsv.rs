//! 8-bit HSV conversion and the fixed colony hue bands.
//!
//! Hue uses the half-degree scale (0..=179) so it fits a byte; red wraps
//! around 0, which is why each color family is described by two boxes.

/// One pixel in 8-bit HSV.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    /// Convert a processing-order (`[b, g, r]`) pixel.
    ///
    /// `V = max`. Saturation and hue are computed in 12-bit fixed point:
    /// the numerator is multiplied by a rounded reciprocal from
    /// `SDIV`/`HDIV` and shifted back with round-half-up. Hue lands on
    /// the half-degree scale, 0..=179. Achromatic pixels get `H = S = 0`.
    ///
    /// Ties between channels resolve red first, then green, so a pixel with
    /// `r == g` is measured from the red sextant.
    pub fn from_bgr([b, g, r]: [u8; 3]) -> Self {
        let (b, g, r) = (i32::from(b), i32::from(g), i32::from(r));
        let v = r.max(g).max(b);
        let diff = v - r.min(g).min(b);

        let s = (diff * SDIV[v as usize] + ROUND) >> FIXED_SHIFT;

        let num = if v == r {
            g - b
        } else if v == g {
            b - r + 2 * diff
        } else {
            r - g + 4 * diff
        };
        let mut h = (num * HDIV[diff as usize] + ROUND) >> FIXED_SHIFT;
        if h < 0 {
            h += 180;
        }

        Self {
            h: h as u8,
            s: s as u8,
            v: v as u8,
        }
    }
}

// ----------------------------------------------------------------------------
// Fixed-point reciprocals
// ----------------------------------------------------------------------------

const FIXED_SHIFT: u32 = 12;
const ROUND: i32 = 1 << (FIXED_SHIFT - 1);

/// `round((255 << 12) / v)`, with `SDIV[0] = 0`.
static SDIV: [i32; 256] = reciprocals(255 << FIXED_SHIFT, 1);

/// `round((180 << 12) / (6 * d))`, with `HDIV[0] = 0`.
static HDIV: [i32; 256] = reciprocals(180 << FIXED_SHIFT, 6);

/// `round(numerator / (scale * i))` for `i` in `1..256`.
///
/// None of the quotients land exactly on a half, so `(2n + d) / 2d` matches
/// rounding the floating-point division.
const fn reciprocals(numerator: i32, scale: i32) -> [i32; 256] {
    let mut table = [0i32; 256];
    let mut i = 1;
    while i < 256 {
        let d = scale * i as i32;
        table[i] = (2 * numerator + d) / (2 * d);
        i += 1;
    }
    table
}

/// Inclusive HSV box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl HsvRange {
    /// Box over `h_lo..=h_hi` with saturation and value in `50..=255`.
    pub const fn hue(h_lo: u8, h_hi: u8) -> Self {
        Self {
            lower: Hsv {
                h: h_lo,
                s: MIN_SATURATION,
                v: MIN_VALUE,
            },
            upper: Hsv {
                h: h_hi,
                s: 255,
                v: 255,
            },
        }
    }

    pub fn contains(&self, px: Hsv) -> bool {
        px.h >= self.lower.h
            && px.h <= self.upper.h
            && px.s >= self.lower.s
            && px.s <= self.upper.s
            && px.v >= self.lower.v
            && px.v <= self.upper.v
    }
}

const MIN_SATURATION: u8 = 50;
const MIN_VALUE: u8 = 50;

/// Blue family: cyan-blue through deep blue.
pub const BLUE_BANDS: [HsvRange; 2] = [HsvRange::hue(90, 100), HsvRange::hue(101, 130)];

/// Red family: both sides of the hue wrap.
pub const RED_BANDS: [HsvRange; 2] = [HsvRange::hue(0, 10), HsvRange::hue(160, 179)];
