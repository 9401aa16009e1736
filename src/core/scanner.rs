use crate::domain::model::{MulInstruction, ScanReport};
use crate::utils::error::{Result, ScanError};
use regex::Regex;

/// One alternation covers all three instruction forms so that a single
/// left-to-right pass sees them in source order. The digit groups are
/// deliberately unbounded; the pattern itself never rejects a long operand.
const INSTRUCTION_PATTERN: &str = r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)";

pub struct Scanner {
    instruction_re: Regex,
    conditionals: bool,
}

impl Scanner {
    pub fn new(conditionals: bool) -> Self {
        Self {
            instruction_re: Regex::new(INSTRUCTION_PATTERN).expect("Invalid instruction regex"),
            conditionals,
        }
    }

    /// Scans all lines and folds every executed `mul` product into the
    /// accumulator. All scan state is local, so repeated calls over the
    /// same input produce the same report.
    pub fn scan(&self, lines: &[String]) -> Result<ScanReport> {
        let mut report = ScanReport::default();
        let mut enabled = true;

        for line in lines {
            for caps in self.instruction_re.captures_iter(line) {
                let token = &caps[0];

                if token == "do()" {
                    enabled = true;
                    continue;
                }
                if token == "don't()" {
                    if self.conditionals {
                        enabled = false;
                    }
                    continue;
                }

                let instruction = MulInstruction {
                    lhs: parse_operand(&caps[1])?,
                    rhs: parse_operand(&caps[2])?,
                };

                if !enabled {
                    tracing::debug!("Skipping disabled instruction: {}", token);
                    report.skipped += 1;
                    continue;
                }

                let product = instruction.product().ok_or_else(|| {
                    ScanError::ProcessingError {
                        message: format!("product of '{}' exceeds u64 range", token),
                    }
                })?;
                report.total = report.total.checked_add(product).ok_or_else(|| {
                    ScanError::ProcessingError {
                        message: "accumulated total exceeds u64 range".to_string(),
                    }
                })?;
                report.executed.push(instruction);
            }
            report.lines_scanned += 1;
        }

        Ok(report)
    }
}

fn parse_operand(digits: &str) -> Result<u64> {
    digits
        .parse::<u64>()
        .map_err(|_| ScanError::ProcessingError {
            message: format!("operand '{}' exceeds u64 range", digits),
        })
}
