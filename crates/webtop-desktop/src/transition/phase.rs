//! Visual transition phases

use serde::{Deserialize, Serialize};

/// Scale applied while a window is entering or exiting
pub const HIDDEN_SCALE: f32 = 0.95;

/// Visual phase of a window's open/close animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPhase {
    /// Baseline transform, no animation pending
    #[default]
    Idle,
    /// Visible but still at the start state of the open animation
    Entering,
    /// Open animation target state applied
    Entered,
    /// Close animation running, window still open
    Exiting,
}

impl TransitionPhase {
    /// Target opacity the renderer should animate towards
    pub fn opacity(&self) -> f32 {
        match self {
            TransitionPhase::Idle | TransitionPhase::Entered => 1.0,
            TransitionPhase::Entering | TransitionPhase::Exiting => 0.0,
        }
    }

    /// Target scale the renderer should animate towards
    pub fn scale(&self) -> f32 {
        match self {
            TransitionPhase::Idle | TransitionPhase::Entered => 1.0,
            TransitionPhase::Entering | TransitionPhase::Exiting => HIDDEN_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entering_and_exiting_are_hidden() {
        for phase in [TransitionPhase::Entering, TransitionPhase::Exiting] {
            assert!((phase.opacity() - 0.0).abs() < 0.001);
            assert!((phase.scale() - HIDDEN_SCALE).abs() < 0.001);
        }
    }

    #[test]
    fn test_entered_matches_baseline() {
        assert_eq!(TransitionPhase::Entered.opacity(), TransitionPhase::Idle.opacity());
        assert_eq!(TransitionPhase::Entered.scale(), TransitionPhase::Idle.scale());
    }

    #[test]
    fn test_phase_serializes_lowercase() {
        let json = serde_json::to_string(&TransitionPhase::Exiting).unwrap();
        assert_eq!(json, "\"exiting\"");
    }
}
