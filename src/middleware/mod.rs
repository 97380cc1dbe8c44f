pub mod extensions;
pub mod security;

pub use extensions::CspExtensions;
pub use security::{
    security_headers, security_headers_from_env, SecurityHeadersMiddleware, SecurityHeadersService,
};
