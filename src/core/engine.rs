use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ScanEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<u64> {
        tracing::info!("Starting scan...");

        // Extract
        let lines = self.pipeline.extract().await?;
        tracing::info!("Read {} lines", lines.len());

        // Transform
        let report = self.pipeline.transform(lines).await?;
        tracing::info!(
            "Executed {} instructions ({} skipped)",
            report.executed.len(),
            report.skipped
        );

        // Load
        let total = self.pipeline.load(report).await?;
        tracing::info!("Accumulated total: {}", total);

        Ok(total)
    }
}
