use crate::{
    color::Color,
    error::{HuepatchError, HuepatchResult},
    half::f32_to_half16,
};

/// Number of entries in an encoded curve lookup table.
pub const CURVE_SAMPLES: usize = 64;

/// Encoded size of a full curve table: 64 samples of 4 little-endian halves.
pub const CURVE_TABLE_BYTES: usize = CURVE_SAMPLES * 4 * 2;

/// A color anchored at a normalized time in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorKeyframe {
    pub time: f32,
    pub color: Color,
}

/// A sparse keyframe set that the target format consumes as a dense
/// 64-entry lookup table of linearly interpolated colors.
///
/// [`ColorCurve::new`] is the validating constructor. A curve built by hand
/// or through `Deserialize` carries no guarantees; run
/// [`ColorCurve::validate`] before sampling it, as the write path does.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ColorCurve {
    /// Keyframes sorted ascending by time; [`ColorCurve::validate`] checks
    /// this along with the count and time-range invariants.
    pub keys: Vec<ColorKeyframe>,
}

impl ColorCurve {
    /// Build a curve from keyframes in any insertion order. Keys are sorted
    /// ascending by time; ties keep their insertion order.
    pub fn new(keys: Vec<ColorKeyframe>) -> HuepatchResult<Self> {
        let mut curve = Self { keys };
        curve.keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        curve.validate()?;
        Ok(curve)
    }

    pub fn validate(&self) -> HuepatchResult<()> {
        if self.keys.len() < 2 {
            return Err(HuepatchError::validation(
                "at least two keyframes required to build a color curve",
            ));
        }
        for key in &self.keys {
            if !key.time.is_finite() || !(0.0..=1.0).contains(&key.time) {
                return Err(HuepatchError::validation(format!(
                    "keyframe time {} must be within [0.0, 1.0]",
                    key.time
                )));
            }
        }
        if !self.keys.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(HuepatchError::validation(
                "keyframes must be sorted ascending by time",
            ));
        }
        Ok(())
    }

    /// Interpolated RGBA at time `t`, each channel normalized to `[0.0, 1.0]`.
    ///
    /// Times outside the keyframe span clamp to the boundary keyframe's
    /// color unmodified. When `t` lands exactly on a keyframe shared by two
    /// brackets, the earlier bracket in sorted order wins.
    ///
    /// Expects a validated curve; see [`ColorCurve::validate`].
    pub fn sample(&self, t: f32) -> [f32; 4] {
        let first = &self.keys[0];
        let last = &self.keys[self.keys.len() - 1];
        // Strictly outside the span clamps; exact boundary times fall
        // through to the bracket scan so first-match tie-breaking applies.
        if t < first.time {
            return normalized(first.color);
        }
        if t > last.time {
            return normalized(last.color);
        }

        for w in self.keys.windows(2) {
            let (k1, k2) = (&w[0], &w[1]);
            if k1.time <= t && t <= k2.time {
                if k1.time == k2.time {
                    return normalized(k1.color);
                }
                let u = (t - k1.time) / (k2.time - k1.time);
                return lerp_normalized(k1.color, k2.color, u);
            }
        }

        // Unreachable once the boundary checks above have run.
        normalized(last.color)
    }

    /// The dense table: 64 samples evaluated at `i / 63`.
    pub fn sample_table(&self) -> Vec<[f32; 4]> {
        (0..CURVE_SAMPLES)
            .map(|i| self.sample(i as f32 / (CURVE_SAMPLES - 1) as f32))
            .collect()
    }

    /// Encode the table as the target format stores it: each sample is four
    /// little-endian binary16 components in R,G,B,A order, 512 bytes total.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(CURVE_TABLE_BYTES);
        for sample in self.sample_table() {
            for channel in sample {
                out.extend_from_slice(&f32_to_half16(channel).to_le_bytes());
            }
        }
        out
    }
}

fn normalized(c: Color) -> [f32; 4] {
    [c.r, c.g, c.b, c.a].map(|v| f32::from(v) / 255.0)
}

fn lerp_normalized(c1: Color, c2: Color, u: f32) -> [f32; 4] {
    let channel = |a: u8, b: u8| (f32::from(a) + u * (f32::from(b) - f32::from(a))) / 255.0;
    [
        channel(c1.r, c2.r),
        channel(c1.g, c2.g),
        channel(c1.b, c2.b),
        channel(c1.a, c2.a),
    ]
}
