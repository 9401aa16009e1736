use serde::{Deserialize, Serialize};

/// One `mul(x,y)` occurrence extracted from the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulInstruction {
    pub lhs: u64,
    pub rhs: u64,
}

impl MulInstruction {
    pub fn product(&self) -> Option<u64> {
        self.lhs.checked_mul(self.rhs)
    }
}

/// Outcome of a full scan: the accumulator plus enough context
/// for the optional JSON report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    pub total: u64,
    pub executed: Vec<MulInstruction>,
    pub skipped: usize,
    pub lines_scanned: usize,
}
