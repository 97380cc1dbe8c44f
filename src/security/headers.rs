use crate::constants::{
    CONTENT_TYPE_OPTIONS_VALUE, FRAME_OPTIONS_VALUE, HEADER_CONTENT_TYPE_OPTIONS, HEADER_CSP,
    HEADER_FRAME_OPTIONS, HEADER_HSTS, HEADER_NONCE, HEADER_PERMISSIONS_POLICY,
    HEADER_REFERRER_POLICY, HEADER_XSS_PROTECTION, HSTS_VALUE, PERMISSIONS_POLICY_VALUE,
    REFERRER_POLICY_VALUE, XSS_PROTECTION_VALUE,
};
use crate::core::builder::CspHeaderBuilder;
use crate::core::config::SecurityConfig;
use crate::error::CspError;
use crate::monitoring::advisory::AdvisorySink;
use actix_web::http::header::{HeaderName, HeaderValue};
use indexmap::IndexMap;
use std::borrow::Cow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityHeaders {
    entries: IndexMap<String, (Cow<'static, str>, String)>,
}

impl SecurityHeaders {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defaults() -> Self {
        let mut headers = Self::new();
        headers
            .insert(HEADER_FRAME_OPTIONS, FRAME_OPTIONS_VALUE)
            .insert(HEADER_CONTENT_TYPE_OPTIONS, CONTENT_TYPE_OPTIONS_VALUE)
            .insert(HEADER_REFERRER_POLICY, REFERRER_POLICY_VALUE)
            .insert(HEADER_XSS_PROTECTION, XSS_PROTECTION_VALUE)
            .insert(HEADER_PERMISSIONS_POLICY, PERMISSIONS_POLICY_VALUE);
        headers
    }

    // same name, any case: replaced in place
    pub fn insert(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.get_mut(&name.to_ascii_lowercase()) {
            Some(entry) => entry.1 = value,
            None => {
                self.entries
                    .insert(name.to_ascii_lowercase(), (name, value));
            }
        }
        self
    }

    pub fn extend<I, K, V>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.insert(name, value);
        }
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_ref(), value.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn header_pairs(
        &self,
    ) -> impl Iterator<Item = Result<(HeaderName, HeaderValue), CspError>> + '_ {
        self.iter().map(|(name, value)| header_pair(name, value))
    }
}

pub fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), CspError> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| CspError::HeaderError(format!("{}: {}", name, e)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| CspError::HeaderError(format!("{}: {}", name, e)))?;
    Ok((header_name, header_value))
}

// Order: defaults, CSP, HSTS (production), overrides, x-nonce.
pub fn build_security_headers(
    config: &SecurityConfig,
    nonce: Option<&str>,
    sink: &dyn AdvisorySink,
) -> SecurityHeaders {
    let nonce = nonce.filter(|n| !n.is_empty());

    let csp = CspHeaderBuilder::new(config.rules())
        .nonce(nonce)
        .environment(config.environment())
        .sink(sink)
        .build();

    let mut headers = SecurityHeaders::defaults();
    headers.insert(HEADER_CSP, csp);

    if !config.is_dev() {
        headers.insert(HEADER_HSTS, HSTS_VALUE);
    }

    headers.extend(
        config
            .headers()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );

    if let Some(nonce) = nonce {
        headers.insert(HEADER_NONCE, nonce);
    }

    headers
}
