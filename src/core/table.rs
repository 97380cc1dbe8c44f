use crate::constants::{SELF_SOURCE, SEMICOLON_SPACE};
use crate::core::directive::Directive;
use crate::error::CspError;
use actix_web::http::header::HeaderValue;
use bytes::Bytes;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;
use std::{fmt, hash::BuildHasherDefault};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

pub type TokenSet = IndexSet<String, FxBuildHasher>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveTable {
    directives: IndexMap<Directive, TokenSet, FxBuildHasher>,
}

impl DirectiveTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directive<I, T>(mut self, directive: Directive, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.replace(directive, tokens);
        self
    }

    #[inline]
    pub fn get(&self, directive: Directive) -> Option<&TokenSet> {
        self.directives.get(&directive)
    }

    #[inline]
    pub fn get_mut(&mut self, directive: Directive) -> Option<&mut TokenSet> {
        self.directives.get_mut(&directive)
    }

    #[inline]
    pub fn contains(&self, directive: Directive) -> bool {
        self.directives.contains_key(&directive)
    }

    #[inline]
    pub fn contains_token(&self, directive: Directive, token: &str) -> bool {
        self.get(directive).is_some_and(|set| set.contains(token))
    }

    pub fn tokens(&self, directive: Directive) -> Vec<&str> {
        self.get(directive)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    // new sets start as 'self' unless the directive has no implicit self
    pub fn get_or_init(&mut self, directive: Directive) -> &mut TokenSet {
        self.directives.entry(directive).or_insert_with(|| {
            let mut set = TokenSet::default();
            if directive.has_implicit_self() {
                set.insert(SELF_SOURCE.to_owned());
            }
            set
        })
    }

    pub fn get_or_empty(&mut self, directive: Directive) -> &mut TokenSet {
        self.directives.entry(directive).or_default()
    }

    pub fn replace<I, T>(&mut self, directive: Directive, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let set = tokens.into_iter().map(Into::into).collect();
        self.directives.insert(directive, set);
        self
    }

    #[inline]
    pub fn insert_token(&mut self, directive: Directive, token: impl Into<String>) -> bool {
        self.get_or_empty(directive).insert(token.into())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Directive, &TokenSet)> {
        self.directives.iter().map(|(d, set)| (*d, set))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    #[inline]
    pub fn to_header_string(&self) -> String {
        self.to_string()
    }

    pub fn to_header_value(&self) -> Result<HeaderValue, CspError> {
        HeaderValue::from_maybe_shared(Bytes::from(self.to_header_string()))
            .map_err(|e| CspError::HeaderError(e.to_string()))
    }
}

impl fmt::Display for DirectiveTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (directive, tokens) in &self.directives {
            if !first {
                f.write_str(SEMICOLON_SPACE)?;
            }
            f.write_str(directive.name())?;

            // empty tokens only mark a valueless directive
            for token in tokens.iter().filter(|t| !t.is_empty()) {
                f.write_str(" ")?;
                f.write_str(token)?;
            }
            first = false;
        }
        Ok(())
    }
}
