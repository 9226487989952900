#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_range, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_CONTENT_PATH: &str = "content/portfolio.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./dist";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Render a single-page portfolio site from a JSON content file")]
pub struct CliConfig {
    /// Path to the portfolio content document
    #[arg(long, default_value = DEFAULT_CONTENT_PATH)]
    pub content: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, value_enum, value_delimiter = ',', default_value = "html")]
    pub format: Vec<OutputFormat>,

    #[arg(long, default_value = crate::core::renderer::DEFAULT_RESUME_HREF)]
    pub resume_href: String,

    /// Fix the footer year instead of reading the clock
    #[arg(long)]
    pub year: Option<i32>,

    /// Load and lint the content without writing anything
    #[arg(long)]
    pub check: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn content_path(&self) -> &str {
        &self.content
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.format
    }

    fn resume_href(&self) -> &str {
        &self.resume_href
    }

    fn fixed_year(&self) -> Option<i32> {
        self.year
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("content", &self.content)?;
        validate_file_extension("content", &self.content, &["json"])?;
        validate_path("output_path", &self.output_path)?;
        if let Some(year) = self.year {
            validate_range("year", year, 1970, 9999)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["portfolio-site"]);
        assert_eq!(config.content_path(), "content/portfolio.json");
        assert_eq!(config.output_path(), "./dist");
        assert_eq!(config.output_formats(), &[OutputFormat::Html]);
        assert_eq!(config.resume_href(), "/resume.pdf");
        assert_eq!(config.fixed_year(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_formats_are_comma_delimited() {
        let config = CliConfig::parse_from(["portfolio-site", "--format", "html,json", "--year", "2030"]);
        assert_eq!(config.format, vec![OutputFormat::Html, OutputFormat::Json]);
        assert_eq!(config.fixed_year(), Some(2030));
    }

    #[test]
    fn test_rejects_non_json_content() {
        let config = CliConfig::parse_from(["portfolio-site", "--content", "portfolio.yaml"]);
        assert!(config.validate().is_err());
    }
}
