use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting fee report run");

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} return records", records.len());

        // Transform
        let result = self.pipeline.transform(records).await?;
        tracing::info!("Computed fees for {} patrons", result.summaries.len());

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
