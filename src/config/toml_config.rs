use crate::config::{DEFAULT_CONTENT_PATH, DEFAULT_OUTPUT_PATH};
use crate::core::renderer::DEFAULT_RESUME_HREF;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_file_extension, validate_filename, validate_path, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: SiteInfo,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_content_path")]
    pub path: String,
}

fn default_content_path() -> String {
    DEFAULT_CONTENT_PATH.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Html]
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_content_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    pub resume_href: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
    pub filenames: Option<FilenameConfig>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            formats: default_formats(),
            filenames: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub html: Option<String>,
    pub json: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value. Unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("content.path", &self.content.path)?;
        validate_file_extension("content.path", &self.content.path, &["json"])?;
        validate_path("output.path", &self.output.path)?;

        if self.output.formats.is_empty() {
            return Err(SiteError::MissingConfigError {
                field: "output.formats".to_string(),
            });
        }

        if let Some(year) = self.render.year {
            validate_range("render.year", year, 1970, 9999)?;
        }

        if let Some(filenames) = &self.output.filenames {
            if let Some(html) = &filenames.html {
                validate_filename("output.filenames.html", html)?;
            }
            if let Some(json) = &filenames.json {
                validate_filename("output.filenames.json", json)?;
            }
        }

        Ok(())
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }

    pub fn verbose_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn content_path(&self) -> &str {
        &self.content.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.output.formats
    }

    fn resume_href(&self) -> &str {
        self.render
            .resume_href
            .as_deref()
            .unwrap_or(DEFAULT_RESUME_HREF)
    }

    fn output_filename(&self, format: OutputFormat) -> String {
        let configured = self.output.filenames.as_ref().and_then(|f| match format {
            OutputFormat::Html => f.html.clone(),
            OutputFormat::Json => f.json.clone(),
        });
        configured.unwrap_or_else(|| format.default_filename().to_string())
    }

    fn fixed_year(&self) -> Option<i32> {
        self.render.year
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[site]
name = "ada-portfolio"
version = "1.0.0"

[content]
path = "data/portfolio.json"

[render]
resume_href = "/files/cv.pdf"
year = 2025

[output]
path = "./public"
formats = ["html", "json"]

[output.filenames]
html = "home.html"

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site.name, "ada-portfolio");
        assert_eq!(config.content_path(), "data/portfolio.json");
        assert_eq!(config.resume_href(), "/files/cv.pdf");
        assert_eq!(config.fixed_year(), Some(2025));
        assert_eq!(config.output_formats(), &[OutputFormat::Html, OutputFormat::Json]);
        assert_eq!(config.output_filename(OutputFormat::Html), "home.html");
        assert_eq!(config.output_filename(OutputFormat::Json), "page.json");
        assert!(config.json_logging());
        assert!(!config.verbose_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[site]\nname = \"minimal\"\n").unwrap();

        assert_eq!(config.content_path(), "content/portfolio.json");
        assert_eq!(config.output_path(), "./dist");
        assert_eq!(config.output_formats(), &[OutputFormat::Html]);
        assert_eq!(config.resume_href(), "/resume.pdf");
        assert_eq!(config.fixed_year(), None);
    }

    #[test]
    fn test_partial_tables_fill_in_defaults() {
        let config = TomlConfig::from_toml_str(
            "[site]\nname = \"x\"\n[content]\n[output]\npath = \"public\"\n",
        )
        .unwrap();
        assert_eq!(config.content_path(), "content/portfolio.json");
        assert_eq!(config.output_path(), "public");
        assert_eq!(config.output_formats(), &[OutputFormat::Html]);
        assert!(config.validate().is_ok());

        let config =
            TomlConfig::from_toml_str("[site]\nname = \"x\"\n[output]\nformats = [\"json\"]\n")
                .unwrap();
        assert_eq!(config.output_path(), "./dist");
        assert_eq!(config.output_formats(), &[OutputFormat::Json]);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_OUTPUT", "/tmp/site-out");

        let toml_content = r#"
[site]
name = "test"

[output]
path = "${PORTFOLIO_TEST_OUTPUT}"
formats = ["html"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/site-out");

        std::env::remove_var("PORTFOLIO_TEST_OUTPUT");
    }

    #[test]
    fn test_unknown_env_var_is_left_verbatim() {
        let toml_content = r#"
[site]
name = "${PORTFOLIO_TEST_DOES_NOT_EXIST}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site.name, "${PORTFOLIO_TEST_DOES_NOT_EXIST}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[site]
name = "test"

[output]
path = "./dist"
formats = []
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(SiteError::MissingConfigError { .. })
        ));

        let toml_content = r#"
[site]
name = "test"

[output]
path = "./dist"
formats = ["html"]

[output.filenames]
html = "../escape.html"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let toml_content = r#"
[site]
name = "test"

[output]
path = "./dist"
formats = ["pdf"]
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(SiteError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\nname = \"file-test\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.name, "file-test");
    }
}
