use crate::constants::{DEFAULT_NONCE_LENGTH, ENVIRONMENT_VAR};
use crate::core::rule::CspRule;
use crate::error::CspError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[serde(alias = "dev")]
    Development,
    #[default]
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    #[inline]
    pub const fn is_dev(self) -> bool {
        matches!(self, Environment::Development)
    }

    // anything but development/dev is production
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("development") || value.eq_ignore_ascii_case("dev") {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_var(ENVIRONMENT_VAR)
    }

    pub fn from_env_var(name: &str) -> Self {
        std::env::var(name)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

impl From<bool> for Environment {
    #[inline]
    fn from(is_dev: bool) -> Self {
        if is_dev {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SecurityConfig {
    environment: Environment,
    rules: Vec<CspRule>,
    headers: IndexMap<String, String>,
    nonce_enabled: bool,
    nonce_length: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            rules: Vec::new(),
            headers: IndexMap::new(),
            nonce_enabled: true,
            nonce_length: DEFAULT_NONCE_LENGTH,
        }
    }
}

impl SecurityConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, CspError> {
        let config: SecurityConfig = serde_json::from_str(json)?;
        config.validated()
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CspError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    fn validated(self) -> Result<Self, CspError> {
        if self.nonce_enabled && self.nonce_length == 0 {
            return Err(CspError::ConfigError(
                "nonce-length must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }

    #[inline]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    #[inline]
    pub fn is_dev(&self) -> bool {
        self.environment.is_dev()
    }

    #[inline]
    pub fn rules(&self) -> &[CspRule] {
        &self.rules
    }

    #[inline]
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    #[inline]
    pub fn nonce_enabled(&self) -> bool {
        self.nonce_enabled
    }

    #[inline]
    pub fn nonce_length(&self) -> usize {
        self.nonce_length
    }

    pub fn add_rule(&mut self, rule: CspRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn set_environment(&mut self, environment: Environment) -> &mut Self {
        self.environment = environment;
        self
    }
}

#[derive(Debug, Default)]
pub struct SecurityConfigBuilder {
    environment: Option<Environment>,
    rules: Vec<CspRule>,
    headers: IndexMap<String, String>,
    nonce_enabled: Option<bool>,
    nonce_length: Option<usize>,
}

impl SecurityConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    #[inline]
    pub fn development(self, is_dev: bool) -> Self {
        self.environment(Environment::from(is_dev))
    }

    #[inline]
    pub fn rule(mut self, rule: CspRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = CspRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[inline]
    pub fn nonce_enabled(mut self, enabled: bool) -> Self {
        self.nonce_enabled = Some(enabled);
        self
    }

    #[inline]
    pub fn nonce_length(mut self, length: usize) -> Self {
        self.nonce_length = Some(length);
        self
    }

    pub fn build(self) -> Result<SecurityConfig, CspError> {
        let defaults = SecurityConfig::default();
        SecurityConfig {
            environment: self.environment.unwrap_or(defaults.environment),
            rules: self.rules,
            headers: self.headers,
            nonce_enabled: self.nonce_enabled.unwrap_or(defaults.nonce_enabled),
            nonce_length: self.nonce_length.unwrap_or(defaults.nonce_length),
        }
        .validated()
    }
}
