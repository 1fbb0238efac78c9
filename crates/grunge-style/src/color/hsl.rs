//! HSL cylindrical color space and circular hue arithmetic.
//!
//! Hue is stored as a fraction of a full turn in `0.0..1.0`, so `0.0` and
//! `1.0` name the same red. Any arithmetic on hue must therefore go around
//! the circle; [`lerp_hue`] and [`hue_distance`] do that.

use super::srgb::Srgb;

/// Below this channel spread a color is treated as achromatic.
const ACHROMATIC_EPSILON: f32 = 1e-6;

/// A color in HSL (hue, saturation, lightness) form.
///
/// # Components
///
/// - `h`: Hue as a fraction of a turn, `0.0..1.0` (0 = red, 1/3 = green,
///   2/3 = blue)
/// - `s`: Saturation, `0.0..=1.0`
/// - `l`: Lightness, `0.0..=1.0`
///
/// # Note
///
/// For achromatic colors (saturation zero) hue is undefined. The conversion
/// from [`Srgb`] sets it to `0.0`, so greys interpolate as if they were red
/// with no saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue: fraction of a turn, wraps at 1.0
    pub h: f32,
    /// Saturation: 0.0 (grey) to 1.0 (fully saturated)
    pub s: f32,
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color. Hue is wrapped into `0.0..1.0`, saturation and
    /// lightness are clamped to `0.0..=1.0`.
    #[inline]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Interpolate between two colors at fraction `t`.
    ///
    /// Hue travels the shorter arc (see [`lerp_hue`]); saturation and
    /// lightness are blended linearly as `(1 - t) * a + t * b`.
    ///
    /// # Example
    ///
    /// ```
    /// use grunge_style::Hsl;
    ///
    /// let a = Hsl::new(0.9, 0.2, 0.4);
    /// let b = Hsl::new(0.1, 0.6, 0.8);
    /// let mid = a.lerp(b, 0.5);
    ///
    /// assert!(mid.h < 1e-4 || mid.h > 1.0 - 1e-4);
    /// assert!((mid.s - 0.4).abs() < 1e-6);
    /// assert!((mid.l - 0.6).abs() < 1e-6);
    /// ```
    pub fn lerp(self, other: Hsl, t: f32) -> Hsl {
        let t = t.clamp(0.0, 1.0);
        Hsl::new(
            lerp_hue(self.h, other.h, t),
            (1.0 - t) * self.s + t * other.s,
            (1.0 - t) * self.l + t * other.l,
        )
    }
}

/// Wrap any finite hue into `0.0..1.0`.
#[inline]
fn wrap_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(1.0);
    // rem_euclid can return exactly 1.0 for tiny negative inputs
    if h >= 1.0 {
        0.0
    } else {
        h
    }
}

/// Shortest signed hue difference from `from` to `to`, in `(-0.5, 0.5]`.
///
/// An exact half turn is reported as `+0.5`, so ties go forward.
#[inline]
fn shortest_hue_delta(from: f32, to: f32) -> f32 {
    let d = (to - from).rem_euclid(1.0);
    if d > 0.5 {
        d - 1.0
    } else {
        d
    }
}

/// Interpolate hue at fraction `t` along the shorter arc from `h1` to `h2`.
///
/// The signed difference is wrapped into `(-0.5, 0.5]` before blending, so
/// hues that straddle `0.0`/`1.0` pass through red rather than through the
/// opposite side of the wheel. `t` is clamped to `0.0..=1.0` and the result
/// is wrapped into `0.0..1.0`.
///
/// # Example
///
/// ```
/// use grunge_style::{hue_distance, lerp_hue};
///
/// // 0.9 -> 0.1 wraps through red, it does not pass 0.5 (cyan)
/// let h = lerp_hue(0.9, 0.1, 0.5);
/// assert!(hue_distance(h, 0.0) < 1e-5);
/// ```
pub fn lerp_hue(h1: f32, h2: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    wrap_hue(h1 + t * shortest_hue_delta(h1, h2))
}

/// Circular distance between two hues, in `0.0..=0.5`.
pub fn hue_distance(h1: f32, h2: f32) -> f32 {
    shortest_hue_delta(h1, h2).abs()
}

impl From<Srgb> for Hsl {
    /// Convert from RGB to HSL.
    ///
    /// Channels are clamped to `0.0..=1.0` first. Achromatic inputs produce
    /// hue `0.0` and saturation `0.0`.
    fn from(rgb: Srgb) -> Self {
        let r = rgb.r.clamp(0.0, 1.0);
        let g = rgb.g.clamp(0.0, 1.0);
        let b = rgb.b.clamp(0.0, 1.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta < ACHROMATIC_EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        // Hue in sixths of a turn
        let sextant = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl::new(sextant / 6.0, s, l)
    }
}

impl From<Hsl> for Srgb {
    /// Convert from HSL to RGB. Output channels are clamped to `0.0..=1.0`.
    fn from(hsl: Hsl) -> Self {
        let h = wrap_hue(hsl.h);
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sextant = h * 6.0;
        let x = chroma * (1.0 - (sextant.rem_euclid(2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match sextant as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Srgb::new(
            (r + m).clamp(0.0, 1.0),
            (g + m).clamp(0.0, 1.0),
            (b + m).clamp(0.0, 1.0),
        )
    }
}
