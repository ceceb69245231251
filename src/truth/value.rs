//! PLN truth values and their combinators

use std::fmt;

use serde::{Deserialize, Serialize};

/// Probabilistic truth value `{strength, confidence, count}`.
///
/// Immutable; every combinator returns a fresh value built through
/// [`TruthValue::new`], so the range invariants hold for all values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTruthValue")]
pub struct TruthValue {
    strength: f32,
    confidence: f32,
    count: f32,
}

/// Unclamped wire form; deserialization goes through [`TruthValue::new`].
#[derive(Deserialize)]
struct RawTruthValue {
    strength: f32,
    confidence: f32,
    #[serde(default)]
    count: f32,
}

impl From<RawTruthValue> for TruthValue {
    fn from(raw: RawTruthValue) -> Self {
        TruthValue::new(raw.strength, raw.confidence, raw.count)
    }
}

impl TruthValue {
    /// Create a truth value, clamping strength and confidence to [0, 1]
    /// and count to [0, inf).
    ///
    /// NaN inputs clamp to 0.
    pub fn new(strength: f32, confidence: f32, count: f32) -> Self {
        Self {
            strength: clamp_unit(strength),
            confidence: clamp_unit(confidence),
            count: if count > 0.0 { count } else { 0.0 },
        }
    }

    /// Belief assigned to atoms declared without an explicit truth value.
    pub fn default_belief() -> Self {
        Self::new(0.8, 0.9, 1.0)
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn count(&self) -> f32 {
        self.count
    }

    /// Conjunction under an independence assumption.
    ///
    /// Strengths and confidences multiply, counts add.
    pub fn and(self, other: TruthValue) -> TruthValue {
        TruthValue::new(
            self.strength * other.strength,
            self.confidence * other.confidence,
            self.count + other.count,
        )
    }

    /// Probabilistic union.
    ///
    /// Confidence is bounded by the weaker operand; count is the larger one.
    pub fn or(self, other: TruthValue) -> TruthValue {
        TruthValue::new(
            self.strength + other.strength - self.strength * other.strength,
            self.confidence.min(other.confidence),
            self.count.max(other.count),
        )
    }

    /// Negation. Confidence and count are unaffected.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> TruthValue {
        TruthValue::new(1.0 - self.strength, self.confidence, self.count)
    }

    /// Evidence-weighted point probability: `s*c + (1-c)*0.5`.
    ///
    /// With no confidence this is the uninformed 0.5; with full confidence it
    /// is the strength itself.
    pub fn to_probability(&self) -> f32 {
        self.strength * self.confidence + (1.0 - self.confidence) * 0.5
    }

    /// Same as [`TruthValue::to_probability`].
    pub fn expectation(&self) -> f32 {
        self.to_probability()
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{:.3}, {:.3}, {}>",
            self.strength, self.confidence, self.count
        )
    }
}
