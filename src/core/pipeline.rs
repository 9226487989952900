use crate::core::html::HtmlFormatter;
use crate::core::renderer::{render, RenderOptions};
use crate::core::{Clock, ConfigProvider, OutputFormat, Pipeline, RenderResult, Storage};
use crate::domain::model::Portfolio;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::lint_portfolio;
use std::path::Path;

pub struct SitePipeline<S: Storage, C: ConfigProvider, K: Clock> {
    storage: S,
    config: C,
    clock: K,
}

impl<S: Storage, C: ConfigProvider, K: Clock> SitePipeline<S, C, K> {
    pub fn new(storage: S, config: C, clock: K) -> Self {
        Self {
            storage,
            config,
            clock,
        }
    }

    fn render_options(&self) -> RenderOptions {
        let resume_href = self.config.resume_href();
        let resume_asset_path = Path::new(self.config.output_path())
            .join(resume_href.trim_start_matches('/'))
            .to_string_lossy()
            .into_owned();

        RenderOptions {
            resume_href: resume_href.to_string(),
            resume_asset_path,
            content_path: self.config.content_path().to_string(),
        }
    }

    fn year(&self) -> i32 {
        self.config
            .fixed_year()
            .unwrap_or_else(|| self.clock.current_year())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Clock> Pipeline for SitePipeline<S, C, K> {
    async fn extract(&self) -> Result<Portfolio> {
        let path = self.config.content_path();
        tracing::debug!("Reading content document: {}", path);
        let bytes = self.storage.read_file(path).await?;

        let portfolio =
            Portfolio::from_json_slice(&bytes).map_err(|source| SiteError::ContentSchemaError {
                path: path.to_string(),
                source,
            })?;

        tracing::debug!(
            "Loaded {} skills, {} experience entries, {} projects",
            portfolio.skills.len(),
            portfolio.experience.len(),
            portfolio.projects.len()
        );
        Ok(portfolio)
    }

    async fn transform(&self, portfolio: Portfolio) -> Result<RenderResult> {
        let warnings = lint_portfolio(&portfolio);
        for warning in &warnings {
            tracing::warn!("Content: {}", warning);
        }

        let page = render(&portfolio, &self.render_options(), self.year());

        let mut artifacts: Vec<(OutputFormat, String)> = Vec::new();
        for format in self.config.output_formats() {
            if artifacts.iter().any(|(done, _)| done == format) {
                tracing::debug!("Skipping repeated output format {:?}", format);
                continue;
            }
            let body = match format {
                OutputFormat::Html => HtmlFormatter::format(&page),
                OutputFormat::Json => serde_json::to_string_pretty(&page)?,
            };
            artifacts.push((*format, body));
        }

        Ok(RenderResult {
            page,
            artifacts,
            warnings: warnings.len(),
        })
    }

    async fn load(&self, result: RenderResult) -> Result<String> {
        let output_dir = self.config.output_path();

        for (format, body) in &result.artifacts {
            let filename = self.config.output_filename(*format);
            let target = Path::new(output_dir).join(&filename);
            let target = target.to_string_lossy();

            tracing::debug!("Writing {} bytes to {}", body.len(), target);
            self.storage.write_file(&target, body.as_bytes()).await?;
        }

        Ok(output_dir.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::FixedClock;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    const CONTENT: &str = r#"{
        "profile": {
            "name": "Ada", "role": "Engineer", "headline": "Builds things",
            "summary": "s", "about": "a", "location": "London",
            "email": "ada@example.com", "contactBlurb": "Say hi",
            "highlights": ["one"], "links": []
        },
        "skills": ["Go"],
        "experience": [],
        "projects": [{"name": "X", "description": "d"}]
    }"#;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put(&self, path: &str, data: &str) {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                SiteError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        formats: Vec<OutputFormat>,
        year: Option<i32>,
    }

    impl MockConfig {
        fn new(formats: Vec<OutputFormat>) -> Self {
            Self {
                formats,
                year: None,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn content_path(&self) -> &str {
            "portfolio.json"
        }

        fn output_path(&self) -> &str {
            "dist"
        }

        fn output_formats(&self) -> &[OutputFormat] {
            &self.formats
        }

        fn resume_href(&self) -> &str {
            "/resume.pdf"
        }

        fn fixed_year(&self) -> Option<i32> {
            self.year
        }
    }

    #[tokio::test]
    async fn test_extract_parses_content() {
        let storage = MockStorage::default();
        storage.put("portfolio.json", CONTENT).await;
        let pipeline = SitePipeline::new(
            storage,
            MockConfig::new(vec![OutputFormat::Html]),
            FixedClock(2024),
        );

        let portfolio = pipeline.extract().await.unwrap();
        assert_eq!(portfolio.profile.name, "Ada");
        assert_eq!(portfolio.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_extract_reports_schema_violation() {
        let storage = MockStorage::default();
        storage
            .put("portfolio.json", r#"{"profile": {}, "skills": []}"#)
            .await;
        let pipeline = SitePipeline::new(
            storage,
            MockConfig::new(vec![OutputFormat::Html]),
            FixedClock(2024),
        );

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(
            err,
            SiteError::ContentSchemaError { ref path, .. } if path == "portfolio.json"
        ));
    }

    #[tokio::test]
    async fn test_extract_missing_file() {
        let pipeline = SitePipeline::new(
            MockStorage::default(),
            MockConfig::new(vec![OutputFormat::Html]),
            FixedClock(2024),
        );
        assert!(matches!(
            pipeline.extract().await,
            Err(SiteError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn test_transform_produces_requested_formats() {
        let storage = MockStorage::default();
        storage.put("portfolio.json", CONTENT).await;
        let pipeline = SitePipeline::new(
            storage,
            MockConfig::new(vec![OutputFormat::Html, OutputFormat::Json]),
            FixedClock(2024),
        );

        let portfolio = pipeline.extract().await.unwrap();
        let result = pipeline.transform(portfolio).await.unwrap();

        assert_eq!(result.artifacts.len(), 2);
        assert_eq!(result.artifacts[0].0, OutputFormat::Html);
        assert!(result.artifacts[0].1.contains("<p>Ada · 2024</p>"));
        let json: serde_json::Value = serde_json::from_str(&result.artifacts[1].1).unwrap();
        assert_eq!(json["footer"]["year"], 2024);
        assert_eq!(json["sections"][3]["body"]["kind"], "projects");
        assert_eq!(result.warnings, 0);
    }

    #[tokio::test]
    async fn test_repeated_format_is_rendered_once() {
        let storage = MockStorage::default();
        storage.put("portfolio.json", CONTENT).await;
        let pipeline = SitePipeline::new(
            storage,
            MockConfig::new(vec![OutputFormat::Html, OutputFormat::Json, OutputFormat::Html]),
            FixedClock(2024),
        );

        let portfolio = pipeline.extract().await.unwrap();
        let result = pipeline.transform(portfolio).await.unwrap();

        let formats: Vec<OutputFormat> = result.artifacts.iter().map(|(f, _)| *f).collect();
        assert_eq!(formats, vec![OutputFormat::Html, OutputFormat::Json]);
    }

    #[test]
    fn test_render_options_follow_config() {
        let pipeline = SitePipeline::new(
            MockStorage::default(),
            MockConfig::new(vec![OutputFormat::Html]),
            FixedClock(2024),
        );
        let options = pipeline.render_options();
        assert_eq!(options.resume_href, "/resume.pdf");
        assert_eq!(
            options.resume_asset_path,
            Path::new("dist").join("resume.pdf").to_string_lossy()
        );
        assert_eq!(options.content_path, "portfolio.json");
    }

    #[tokio::test]
    async fn test_fixed_year_overrides_clock() {
        let mut config = MockConfig::new(vec![OutputFormat::Html]);
        config.year = Some(2001);
        let pipeline = SitePipeline::new(MockStorage::default(), config, FixedClock(2024));
        assert_eq!(pipeline.year(), 2001);
    }

    #[tokio::test]
    async fn test_load_writes_into_output_dir() {
        let storage = MockStorage::default();
        storage.put("portfolio.json", CONTENT).await;
        let pipeline = SitePipeline::new(
            storage.clone(),
            MockConfig::new(vec![OutputFormat::Html, OutputFormat::Json]),
            FixedClock(2024),
        );

        let portfolio = pipeline.extract().await.unwrap();
        let result = pipeline.transform(portfolio).await.unwrap();
        let output = pipeline.load(result).await.unwrap();

        assert_eq!(output, "dist");
        let index = Path::new("dist").join("index.html");
        let page = Path::new("dist").join("page.json");
        assert!(storage.get_file(&index.to_string_lossy()).await.is_some());
        assert!(storage.get_file(&page.to_string_lossy()).await.is_some());
    }
}
