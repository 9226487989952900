use crate::domain::model::{Portfolio, SocialLink};
use crate::domain::page::MAILTO_PREFIX;
use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;
use std::fmt;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

/// Filenames are written beneath the output directory and must stay there.
pub fn validate_filename(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Filename must not contain path separators".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Accepts `mailto:` links, in-page anchors, site-relative paths and
/// absolute URLs with a scheme the browser can open.
pub fn validate_href(field_name: &str, href: &str) -> Result<()> {
    let invalid = |reason: String| SiteError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: href.to_string(),
        reason,
    };

    if href.trim().is_empty() {
        return Err(invalid("Link target cannot be empty".to_string()));
    }

    if let Some(address) = href.strip_prefix(MAILTO_PREFIX) {
        if address.contains('@') {
            return Ok(());
        }
        return Err(invalid("mailto link has no address".to_string()));
    }

    if href.starts_with('#') || href.starts_with('/') {
        return Ok(());
    }

    match Url::parse(href) {
        Ok(url) => match url.scheme() {
            "http" | "https" | "tel" => Ok(()),
            scheme => Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
        },
        Err(e) => Err(invalid(format!("Invalid URL format: {}", e))),
    }
}

/// A data-quality finding. Never blocks rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentWarning {
    pub location: String,
    pub message: String,
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

#[derive(Default)]
struct Linter {
    warnings: Vec<ContentWarning>,
}

impl Linter {
    fn warn(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ContentWarning {
            location: location.into(),
            message: message.into(),
        });
    }

    fn required(&mut self, location: &str, value: &str) {
        if validate_non_empty_string(location, value).is_err() {
            self.warn(location, "value is empty");
        }
    }

    fn unique_keys(&mut self, list: &str, keys: impl IntoIterator<Item = String>) {
        let mut seen = HashSet::new();
        for (index, key) in keys.into_iter().enumerate() {
            if !seen.insert(key.clone()) {
                self.warn(
                    format!("{}[{}]", list, index),
                    format!("duplicate key '{}'", key),
                );
            }
        }
    }

    fn links(&mut self, list: &str, links: &[SocialLink]) {
        self.unique_keys(list, links.iter().map(|link| link.href.clone()));
        for (index, link) in links.iter().enumerate() {
            let location = format!("{}[{}]", list, index);
            self.required(&format!("{}.label", location), &link.label);
            if let Err(SiteError::InvalidConfigValueError { reason, .. }) =
                validate_href(&location, &link.href)
            {
                self.warn(format!("{}.href", location), reason);
            }
        }
    }
}

/// Report duplicate derived keys, blank display fields and malformed hrefs.
///
/// Duplicate keys are kept and rendered as-is; this only makes them visible.
pub fn lint_portfolio(portfolio: &Portfolio) -> Vec<ContentWarning> {
    let mut linter = Linter::default();
    let profile = &portfolio.profile;

    linter.required("profile.name", &profile.name);
    linter.required("profile.role", &profile.role);
    linter.required("profile.headline", &profile.headline);
    linter.required("profile.email", &profile.email);
    linter.unique_keys("profile.highlights", profile.highlights.iter().cloned());
    linter.links("profile.links", &profile.links);
    linter.unique_keys("skills", portfolio.skills.iter().cloned());

    linter.unique_keys(
        "experience",
        portfolio.experience.iter().map(|entry| entry.key()),
    );

    linter.unique_keys("projects", portfolio.projects.iter().map(|p| p.key()));
    for (index, project) in portfolio.projects.iter().enumerate() {
        let location = format!("projects[{}]", index);
        linter.required(&format!("{}.name", location), &project.name);
        if let Some(tags) = &project.tags {
            linter.unique_keys(&format!("{}.tags", location), tags.iter().cloned());
        }
        if let Some(links) = &project.links {
            linter.links(&format!("{}.links", location), links);
        }
    }

    linter.warnings
}
