use crate::error::PathError;

/// Sentinel value meaning "unreachable" in cost and step maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Prices of the two moves of the direction-aware search.
///
/// A forward step costs `step`; rotating 90° in place costs `turn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    pub step: i32,
    pub turn: i32,
}

impl Default for CostModel {
    /// One point per step, a thousand per turn.
    fn default() -> Self {
        Self { step: 1, turn: 1000 }
    }
}

impl CostModel {
    pub const fn new(step: i32, turn: i32) -> Self {
        Self { step, turn }
    }

    /// Both prices must be strictly positive.
    pub fn validate(self) -> Result<Self, PathError> {
        if self.step <= 0 || self.turn <= 0 {
            return Err(PathError::InvalidCostModel {
                step: self.step,
                turn: self.turn,
            });
        }
        Ok(self)
    }

    /// Check that no route through `states` states can reach [`UNREACHABLE`].
    ///
    /// A cheapest route settles each state at most once, so its cost stays
    /// below `states * max(step, turn)`.
    pub fn validate_for(self, states: usize) -> Result<Self, PathError> {
        let model = self.validate()?;
        let worst = i64::from(model.step.max(model.turn)).saturating_mul(states as i64);
        if worst >= i64::from(UNREACHABLE) {
            return Err(PathError::CostOverflow {
                step: model.step,
                turn: model.turn,
                states,
            });
        }
        Ok(model)
    }
}
