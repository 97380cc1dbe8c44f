use crate::core::directive::Directive;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Flag(bool),
    List(Vec<String>),
    Text(String),
}

impl From<bool> for DirectiveValue {
    fn from(value: bool) -> Self {
        DirectiveValue::Flag(value)
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        DirectiveValue::Text(value.to_owned())
    }
}

impl From<String> for DirectiveValue {
    fn from(value: String) -> Self {
        DirectiveValue::Text(value)
    }
}

impl From<Vec<String>> for DirectiveValue {
    fn from(value: Vec<String>) -> Self {
        DirectiveValue::List(value)
    }
}

impl From<Vec<&str>> for DirectiveValue {
    fn from(value: Vec<&str>) -> Self {
        DirectiveValue::List(value.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for DirectiveValue {
    fn from(value: [&str; N]) -> Self {
        DirectiveValue::List(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CspRule {
    description: Option<String>,
    source: Option<String>,
    directives: IndexMap<Directive, DirectiveValue>,
}

impl CspRule {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn directive(mut self, directive: Directive, value: impl Into<DirectiveValue>) -> Self {
        self.set(directive, value);
        self
    }

    pub fn set(&mut self, directive: Directive, value: impl Into<DirectiveValue>) -> &mut Self {
        self.directives.insert(directive, value.into());
        self
    }

    #[inline]
    pub fn get(&self, directive: Directive) -> Option<&DirectiveValue> {
        self.directives.get(&directive)
    }

    #[inline]
    pub fn directives(&self) -> impl Iterator<Item = (Directive, &DirectiveValue)> {
        self.directives.iter().map(|(d, v)| (*d, v))
    }

    #[inline]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn source_text(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

impl<'de> Deserialize<'de> for CspRule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut rule = CspRule::new();

        for (key, value) in fields {
            match key.as_str() {
                "description" => rule.description = value.as_str().map(str::to_owned),
                "source" => rule.source = value.as_str().map(str::to_owned),
                _ => match Directive::from_name(&key) {
                    Some(directive) => match serde_json::from_value::<DirectiveValue>(value) {
                        Ok(value) => {
                            rule.directives.insert(directive, value);
                        }
                        Err(e) => {
                            log::warn!("Ignoring unsupported value for '{}': {}", directive, e);
                        }
                    },
                    None => log::debug!("Ignoring unknown CSP rule field '{}'", key),
                },
            }
        }

        Ok(rule)
    }
}
