pub mod hash;
pub mod headers;
pub mod nonce;

pub use hash::{HashAlgorithm, HashGenerator};
pub use headers::{build_security_headers, header_pair, SecurityHeaders};
pub use nonce::{NonceGenerator, RequestNonce};
