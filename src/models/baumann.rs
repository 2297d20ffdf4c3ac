use serde::{Deserialize, Serialize};

/// Score at or above which an axis takes its "high" letter
pub const AXIS_THRESHOLD: i32 = 50;

/// Neutral midpoint used when an axis has no evidence
pub const NEUTRAL_SCORE: i32 = 50;

/// One of the four Baumann axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Oily (O) vs dry (D)
    Oily,
    /// Sensitive (S) vs resistant (R)
    Sensitive,
    /// Pigmented (P) vs non-pigmented (N)
    Pigmented,
    /// Wrinkle-prone (W) vs tight (T)
    Wrinkle,
}

impl Axis {
    /// Letters for (high, low) side of the axis
    pub fn letters(&self) -> (char, char) {
        match self {
            Axis::Oily => ('O', 'D'),
            Axis::Sensitive => ('S', 'R'),
            Axis::Pigmented => ('P', 'N'),
            Axis::Wrinkle => ('W', 'T'),
        }
    }

    /// Labels for (high, low) side of the axis
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Axis::Oily => ("Oily", "Dry"),
            Axis::Sensitive => ("Sensitive", "Resistant"),
            Axis::Pigmented => ("Pigmented", "Non-pigmented"),
            Axis::Wrinkle => ("Wrinkle-prone", "Tight"),
        }
    }
}

/// Baumann 4-axis skin profile
///
/// Every axis is clamped into `[0, 100]` on construction. Values are never
/// mutated; adjustments produce a new score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaumannScore {
    oily: i32,
    sensitive: i32,
    pigmented: i32,
    wrinkle: i32,
}

impl Default for BaumannScore {
    fn default() -> Self {
        Self::neutral()
    }
}

impl BaumannScore {
    /// Creates a score, clamping each axis into `[0, 100]`
    pub fn new(oily: i32, sensitive: i32, pigmented: i32, wrinkle: i32) -> Self {
        Self {
            oily: clamp_axis(oily),
            sensitive: clamp_axis(sensitive),
            pigmented: clamp_axis(pigmented),
            wrinkle: clamp_axis(wrinkle),
        }
    }

    /// All axes at the neutral midpoint
    pub fn neutral() -> Self {
        Self::new(NEUTRAL_SCORE, NEUTRAL_SCORE, NEUTRAL_SCORE, NEUTRAL_SCORE)
    }

    pub fn oily(&self) -> i32 {
        self.oily
    }

    pub fn sensitive(&self) -> i32 {
        self.sensitive
    }

    pub fn pigmented(&self) -> i32 {
        self.pigmented
    }

    pub fn wrinkle(&self) -> i32 {
        self.wrinkle
    }

    pub fn axis(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Oily => self.oily,
            Axis::Sensitive => self.sensitive,
            Axis::Pigmented => self.pigmented,
            Axis::Wrinkle => self.wrinkle,
        }
    }

    /// Whether the axis sits on its high side (`>= 50`)
    pub fn is_high(&self, axis: Axis) -> bool {
        self.axis(axis) >= AXIS_THRESHOLD
    }

    /// 4-letter Baumann code, e.g. `OSPT`
    pub fn code(&self) -> String {
        AXES.iter()
            .map(|axis| {
                let (high, low) = axis.letters();
                if self.is_high(*axis) {
                    high
                } else {
                    low
                }
            })
            .collect()
    }

    /// Human-readable breakdown of the code
    pub fn describe(&self) -> SkinTypeDescription {
        let label = |axis: Axis| {
            let (high, low) = axis.labels();
            if self.is_high(axis) {
                high
            } else {
                low
            }
        };

        SkinTypeDescription {
            code: self.code(),
            oily_dry: label(Axis::Oily),
            sensitive_resistant: label(Axis::Sensitive),
            pigmented: label(Axis::Pigmented),
            wrinkle: label(Axis::Wrinkle),
        }
    }
}

/// Axis order used for the code letters
pub const AXES: [Axis; 4] = [Axis::Oily, Axis::Sensitive, Axis::Pigmented, Axis::Wrinkle];

fn clamp_axis(value: i32) -> i32 {
    value.clamp(0, 100)
}

/// Readable form of a Baumann code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkinTypeDescription {
    pub code: String,
    pub oily_dry: &'static str,
    pub sensitive_resistant: &'static str,
    pub pigmented: &'static str,
    pub wrinkle: &'static str,
}
