use crate::constants::{LARGE_HEADER_BYTES, MIN_NONCE_CHARS, OVERSIZED_HEADER_BYTES};
use crate::core::directive::Directive;
use std::cell::RefCell;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyWarning {
    UnsafeEvalInProduction { directive: Directive },
    Wildcard { directive: Directive },
    MalformedSource { directive: Directive, token: String },
    MismatchedValue { directive: Directive },
    ShortNonce { length: usize },
    MalformedNonce,
    LargeHeader { size: usize },
    OversizedHeader { size: usize },
}

impl fmt::Display for PolicyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyWarning::UnsafeEvalInProduction { directive } => {
                write!(f, "'unsafe-eval' used in {} in production", directive)
            }
            PolicyWarning::Wildcard { directive } => {
                write!(f, "wildcard source '*' used in {}", directive)
            }
            PolicyWarning::MalformedSource { directive, token } => {
                write!(f, "source '{}' in {} is not a valid URL", token, directive)
            }
            PolicyWarning::MismatchedValue { directive } => {
                write!(f, "value of the wrong kind for {} was ignored", directive)
            }
            PolicyWarning::ShortNonce { length } => write!(
                f,
                "nonce is {} characters long, expected at least {}",
                length, MIN_NONCE_CHARS
            ),
            PolicyWarning::MalformedNonce => f.write_str("nonce is not base64 encoded"),
            PolicyWarning::LargeHeader { size } => write!(
                f,
                "CSP header is {} bytes, above {} bytes",
                size, LARGE_HEADER_BYTES
            ),
            PolicyWarning::OversizedHeader { size } => write!(
                f,
                "CSP header is {} bytes, above {} bytes; some servers and proxies will reject it",
                size, OVERSIZED_HEADER_BYTES
            ),
        }
    }
}

pub trait AdvisorySink {
    fn warn(&self, warning: &PolicyWarning);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AdvisorySink for LogSink {
    fn warn(&self, warning: &PolicyWarning) {
        log::warn!("CSP advisory: {}", warning);
    }
}

#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: RefCell<Vec<PolicyWarning>>,
}

impl CollectingSink {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn warnings(&self) -> Vec<PolicyWarning> {
        self.warnings.borrow().clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.warnings.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }
}

impl AdvisorySink for CollectingSink {
    fn warn(&self, warning: &PolicyWarning) {
        self.warnings.borrow_mut().push(warning.clone());
    }
}

// base64 or base64url, at most two '=' of padding
pub fn is_base64_value(value: &str) -> bool {
    let body = value.trim_end_matches('=');
    let padding = value.len() - body.len();

    !body.is_empty()
        && padding <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'-' | b'_'))
}

pub fn check_nonce(nonce: &str, sink: &dyn AdvisorySink) {
    if nonce.len() < MIN_NONCE_CHARS {
        sink.warn(&PolicyWarning::ShortNonce {
            length: nonce.len(),
        });
    }
    if !is_base64_value(nonce) {
        sink.warn(&PolicyWarning::MalformedNonce);
    }
}

pub fn check_header_size(header: &str, sink: &dyn AdvisorySink) {
    let size = header.len();
    if size > OVERSIZED_HEADER_BYTES {
        sink.warn(&PolicyWarning::OversizedHeader { size });
    } else if size > LARGE_HEADER_BYTES {
        sink.warn(&PolicyWarning::LargeHeader { size });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_value_grammar() {
        assert!(is_base64_value("dGVzdC1ub25jZS0xMjM0NTY3OA=="));
        assert!(is_base64_value("abc_DEF-123"));
        assert!(!is_base64_value("abc==="));
        assert!(!is_base64_value("not base64"));
        assert!(!is_base64_value("=="));
        assert!(!is_base64_value(""));
    }
}
