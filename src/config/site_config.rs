use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub source: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub name: String,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub root: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with the environment value; unset
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for SiteConfig {
    fn base_url(&self) -> Option<&str> {
        self.source.base_url.as_deref()
    }

    fn site_root(&self) -> &str {
        self.source.root.as_deref().unwrap_or(".")
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.source.base_url {
            validation::validate_url("source.base_url", url)?;
        }
        if let Some(root) = &self.source.root {
            validation::validate_path("source.root", root)?;
        }
        validation::validate_path("output.path", &self.output.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_site_config() {
        let toml_content = r#"
[site]
name = "Jane Doe"
author = "Jane Doe"

[source]
root = "./public"

[output]
path = "./site"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site.name, "Jane Doe");
        assert_eq!(config.site_root(), "./public");
        assert_eq!(config.output_path(), "./site");
        assert!(config.base_url().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FOLIO_TEST_BASE_URL", "https://cdn.example.com");

        let toml_content = r#"
[site]
name = "Jane Doe"

[source]
base_url = "${FOLIO_TEST_BASE_URL}"

[output]
path = "./site"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), Some("https://cdn.example.com"));

        std::env::remove_var("FOLIO_TEST_BASE_URL");
    }

    #[test]
    fn test_unset_env_var_stays_literal() {
        let toml_content = r#"
[site]
name = "Jane Doe"

[source]
base_url = "${FOLIO_UNSET_VARIABLE}"

[output]
path = "./site"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), Some("${FOLIO_UNSET_VARIABLE}"));
        // and an unresolved placeholder is not a valid URL
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_url() {
        let toml_content = r#"
[site]
name = "Jane Doe"

[source]
base_url = "ftp://example.com"

[output]
path = "./site"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
name = "File Test"

[source]

[output]
path = "./out"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.name, "File Test");
        assert_eq!(config.site_root(), ".");
    }
}
