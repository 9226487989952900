use crate::domain::model::Portfolio;
use crate::domain::page::Page;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    pub fn default_filename(self) -> &'static str {
        match self {
            OutputFormat::Html => "index.html",
            OutputFormat::Json => "page.json",
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn content_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
    fn resume_href(&self) -> &str;

    fn output_filename(&self, format: OutputFormat) -> String {
        format.default_filename().to_string()
    }

    /// Footer year override; `None` reads the clock.
    fn fixed_year(&self) -> Option<i32> {
        None
    }
}

/// Wall-clock access, injected so rendering stays pure.
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Serialized outputs keyed by format, ready to be written.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub page: Page,
    pub artifacts: Vec<(OutputFormat, String)>,
    pub warnings: usize,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Portfolio>;
    async fn transform(&self, portfolio: Portfolio) -> Result<RenderResult>;
    async fn load(&self, result: RenderResult) -> Result<String>;
}
