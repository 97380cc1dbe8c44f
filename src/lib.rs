pub mod constants;
pub mod core;
pub mod error;
pub mod middleware;
pub mod monitoring;
pub mod prelude;
pub mod security;

// Re-export commonly used types for convenience
pub use self::core::{
    build_csp_header, CspHeaderBuilder, CspRule, Directive, DirectiveTable, DirectiveValue,
    Environment, SecurityConfig, SecurityConfigBuilder,
};
pub use error::CspError;
pub use middleware::{
    security_headers, security_headers_from_env, CspExtensions, SecurityHeadersMiddleware,
};
pub use monitoring::{AdvisorySink, CollectingSink, CspStats, LogSink, PolicyWarning};
pub use security::{
    build_security_headers, HashAlgorithm, HashGenerator, NonceGenerator, RequestNonce,
    SecurityHeaders,
};
