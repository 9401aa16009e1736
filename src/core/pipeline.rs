use crate::core::scanner::Scanner;
use crate::core::{ConfigProvider, Pipeline, ScanReport, Storage};
use crate::utils::error::{Result, ScanError};

pub struct MulPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    scanner: Scanner,
}

impl<S: Storage, C: ConfigProvider> MulPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let scanner = Scanner::new(config.conditionals_enabled());
        Self {
            storage,
            config,
            scanner,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MulPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading input file: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path()).await?;

        let text = String::from_utf8(raw).map_err(|e| ScanError::DecodeError {
            message: format!("{} is not valid UTF-8: {}", self.config.input_path(), e),
        })?;

        Ok(text.lines().map(str::to_string).collect())
    }

    async fn transform(&self, lines: Vec<String>) -> Result<ScanReport> {
        let report = self.scanner.scan(&lines)?;
        tracing::debug!(
            "Scanned {} lines: {} executed, {} skipped",
            report.lines_scanned,
            report.executed.len(),
            report.skipped
        );
        Ok(report)
    }

    async fn load(&self, report: ScanReport) -> Result<u64> {
        if let Some(report_path) = self.config.report_path() {
            let json_data = serde_json::to_string_pretty(&report)?;
            tracing::debug!(
                "Writing scan report ({} bytes) to {}",
                json_data.len(),
                report_path
            );
            self.storage
                .write_file(report_path, json_data.as_bytes())
                .await?;
        }

        Ok(report.total)
    }
}
