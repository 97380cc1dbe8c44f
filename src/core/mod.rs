pub mod baseline;
pub mod builder;
pub mod config;
pub mod directive;
pub mod merge;
pub mod normalize;
pub mod rule;
pub mod table;

pub use baseline::{baseline_policy, nonce_source};
pub use builder::{build_csp_header, CspHeaderBuilder};
pub use config::{Environment, SecurityConfig, SecurityConfigBuilder};
pub use directive::{Directive, DirectiveKind};
pub use merge::{merge_rules, propagate_granular, DirectiveMerger};
pub use normalize::{is_valueless, normalize, resolve_none, NoneResolution, TokenList};
pub use rule::{CspRule, DirectiveValue};
pub use table::{DirectiveTable, TokenSet};
