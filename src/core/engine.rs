use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Load, render and write the site. Returns the output directory.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading content...");
        let portfolio = self.pipeline.extract().await?;

        tracing::info!("Rendering page...");
        let result = self.pipeline.transform(portfolio).await?;
        tracing::info!(
            "Rendered {} sections into {} artifact(s), {} content warning(s)",
            result.page.sections.len(),
            result.artifacts.len(),
            result.warnings
        );

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }

    /// Load and lint only. Returns the number of content warnings.
    pub async fn check(&self) -> Result<usize> {
        let portfolio = self.pipeline.extract().await?;
        let result = self.pipeline.transform(portfolio).await?;
        Ok(result.warnings)
    }
}
