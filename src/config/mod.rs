pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mulsum")]
#[command(about = "Sums the products of mul(x,y) instructions embedded in a text file")]
pub struct CliConfig {
    #[arg(long, default_value = "data/day03.txt")]
    pub input: String,

    #[arg(long, help = "Honor do()/don't() toggles while scanning")]
    pub conditionals: bool,

    #[arg(long, help = "Write a JSON scan report to this path")]
    pub report: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn report_path(&self) -> Option<&str> {
        self.report.as_deref()
    }

    fn conditionals_enabled(&self) -> bool {
        self.conditionals
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;

        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(input: &str) -> CliConfig {
        CliConfig {
            input: input.to_string(),
            conditionals: false,
            report: None,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_accepts_default_input() {
        assert!(config("data/day03.txt").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        assert!(config("").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_report_path() {
        let mut cfg = config("data/day03.txt");
        cfg.report = Some(String::new());
        assert!(cfg.validate().is_err());
    }
}
