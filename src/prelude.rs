pub use crate::core::{
    build_csp_header, CspHeaderBuilder, CspRule, Directive, DirectiveValue, Environment,
    SecurityConfig, SecurityConfigBuilder,
};
pub use crate::middleware::{security_headers, CspExtensions, SecurityHeadersMiddleware};
pub use crate::monitoring::{AdvisorySink, PolicyWarning};
pub use crate::security::{build_security_headers, HashAlgorithm, HashGenerator, SecurityHeaders};
