pub mod advisory;
pub mod stats;

pub use advisory::{
    check_header_size, check_nonce, is_base64_value, AdvisorySink, CollectingSink, LogSink,
    PolicyWarning,
};
pub use stats::CspStats;
