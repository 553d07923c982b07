use serde::{Deserialize, Serialize};

use super::domain::RiskLevel;

/// Lower bounds of the moderate and high risk bands.
///
/// Bands are evaluated low-to-high and include their lower bound: a total
/// below `moderate` is low risk, a total of at least `high` is high risk,
/// everything between is moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub moderate: u32,
    pub high: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            moderate: 4,
            high: 8,
        }
    }
}

impl RiskThresholds {
    pub const fn is_ordered(&self) -> bool {
        self.moderate < self.high
    }

    pub const fn classify(&self, total_score: u32) -> RiskLevel {
        if total_score >= self.high {
            RiskLevel::High
        } else if total_score >= self.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}
