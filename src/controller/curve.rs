//! Controller domain: sampled height curve driving the jump arc.

use serde::{Deserialize, Serialize};

/// A single `(time, value)` sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    /// Returned by lookups on a curve without keyframes.
    pub const DEFAULT: Self = Self::new(0.0, 0.0);

    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Jump path: time on the X axis, height above the jump origin on the Y axis.
///
/// Keyframes are kept sorted by time with unique times. Evaluation uses
/// monotone cubic Hermite interpolation, so the curve stays smooth and never
/// overshoots the authored keyframes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct JumpCurve {
    keys: Vec<Keyframe>,
    tangents: Vec<f32>,
}

impl JumpCurve {
    /// Builds a curve from keyframes in any order. Keyframes with a NaN or
    /// infinite time or value are dropped.
    pub fn new(keys: impl IntoIterator<Item = Keyframe>) -> Self {
        let mut keys: Vec<Keyframe> = keys
            .into_iter()
            .filter(|k| k.time.is_finite() && k.value.is_finite())
            .collect();
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        keys.dedup_by(|later, earlier| later.time == earlier.time);
        let tangents = monotone_tangents(&keys);
        Self { keys, tangents }
    }

    pub fn from_points(points: &[(f32, f32)]) -> Self {
        Self::new(points.iter().map(|&(time, value)| Keyframe::new(time, value)))
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keyframe with the lowest time.
    pub fn first_keyframe(&self) -> Keyframe {
        self.keys.first().copied().unwrap_or(Keyframe::DEFAULT)
    }

    /// Keyframe with the highest time.
    pub fn last_keyframe(&self) -> Keyframe {
        self.keys.last().copied().unwrap_or(Keyframe::DEFAULT)
    }

    /// Keyframe with the lowest value (first one on ties).
    pub fn min_keyframe(&self) -> Keyframe {
        self.keys
            .iter()
            .copied()
            .reduce(|min, k| if k.value < min.value { k } else { min })
            .unwrap_or(Keyframe::DEFAULT)
    }

    /// Keyframe with the highest value (first one on ties).
    pub fn max_keyframe(&self) -> Keyframe {
        self.keys
            .iter()
            .copied()
            .reduce(|max, k| if k.value > max.value { k } else { max })
            .unwrap_or(Keyframe::DEFAULT)
    }

    pub fn min_time(&self) -> f32 {
        self.first_keyframe().time
    }

    pub fn max_time(&self) -> f32 {
        self.last_keyframe().time
    }

    pub fn min_value(&self) -> f32 {
        self.min_keyframe().value
    }

    pub fn max_value(&self) -> f32 {
        self.max_keyframe().value
    }

    /// Time span covered by the keyframes. Zero with fewer than two keyframes.
    pub fn duration(&self) -> f32 {
        self.max_time() - self.min_time()
    }

    /// Value span covered by the keyframes. Zero with fewer than two keyframes.
    pub fn range(&self) -> f32 {
        self.max_value() - self.min_value()
    }

    /// Samples the curve at `time`, clamped to the keyframe time span.
    pub fn evaluate(&self, time: f32) -> f32 {
        match self.keys.as_slice() {
            [] => 0.0,
            [only] => only.value,
            keys => {
                let time = time.clamp(self.min_time(), self.max_time());
                let segment = keys
                    .partition_point(|k| k.time <= time)
                    .saturating_sub(1)
                    .min(keys.len() - 2);
                let (a, b) = (keys[segment], keys[segment + 1]);
                let span = b.time - a.time;
                let t = (time - a.time) / span;
                let t2 = t * t;
                let t3 = t2 * t;

                let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
                let h10 = t3 - 2.0 * t2 + t;
                let h01 = -2.0 * t3 + 3.0 * t2;
                let h11 = t3 - t2;

                h00 * a.value
                    + h10 * span * self.tangents[segment]
                    + h01 * b.value
                    + h11 * span * self.tangents[segment + 1]
            }
        }
    }
}

impl Default for JumpCurve {
    fn default() -> Self {
        Self::from_points(&[(0.0, 0.0), (0.2, 1.8), (0.4, 2.5)])
    }
}

impl From<Vec<Keyframe>> for JumpCurve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl From<JumpCurve> for Vec<Keyframe> {
    fn from(curve: JumpCurve) -> Self {
        curve.keys
    }
}

/// Fritsch-Carlson tangents for sorted keyframes with unique times.
fn monotone_tangents(keys: &[Keyframe]) -> Vec<f32> {
    let n = keys.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let secants: Vec<f32> = keys
        .windows(2)
        .map(|w| (w[1].value - w[0].value) / (w[1].time - w[0].time))
        .collect();

    let mut tangents = vec![0.0; n];
    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        let (before, after) = (secants[i - 1], secants[i]);
        tangents[i] = if before * after <= 0.0 {
            0.0
        } else {
            (before + after) * 0.5
        };
    }

    for (i, &secant) in secants.iter().enumerate() {
        if secant == 0.0 {
            tangents[i] = 0.0;
            tangents[i + 1] = 0.0;
            continue;
        }
        let a = tangents[i] / secant;
        let b = tangents[i + 1] / secant;
        let s = a * a + b * b;
        if s > 9.0 {
            let tau = 3.0 / s.sqrt();
            tangents[i] = tau * a * secant;
            tangents[i + 1] = tau * b * secant;
        }
    }

    tangents
}
