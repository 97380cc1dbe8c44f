use crate::core::baseline::baseline_policy;
use crate::core::config::Environment;
use crate::core::merge::{merge_rules, propagate_granular};
use crate::core::rule::CspRule;
use crate::core::table::DirectiveTable;
use crate::monitoring::advisory::{check_header_size, check_nonce, AdvisorySink, LogSink};

/// ```
/// use actix_web_security_headers::core::{build_csp_header, CspRule, Directive};
///
/// let rules = [CspRule::new().directive(Directive::FrameSrc, "https://www.youtube.com")];
/// let header = build_csp_header(&rules, None, false);
/// assert!(header.contains("frame-src https://www.youtube.com"));
/// ```
pub fn build_csp_header(rules: &[CspRule], nonce: Option<&str>, is_dev: bool) -> String {
    CspHeaderBuilder::new(rules)
        .nonce(nonce)
        .environment(Environment::from(is_dev))
        .build()
}

pub struct CspHeaderBuilder<'a> {
    rules: &'a [CspRule],
    nonce: Option<&'a str>,
    environment: Environment,
    sink: &'a dyn AdvisorySink,
}

impl<'a> CspHeaderBuilder<'a> {
    #[inline]
    pub fn new(rules: &'a [CspRule]) -> Self {
        Self {
            rules,
            nonce: None,
            environment: Environment::default(),
            sink: &LogSink,
        }
    }

    #[inline]
    pub fn nonce(mut self, nonce: Option<&'a str>) -> Self {
        self.nonce = nonce.filter(|n| !n.is_empty());
        self
    }

    #[inline]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    #[inline]
    pub fn sink(mut self, sink: &'a dyn AdvisorySink) -> Self {
        self.sink = sink;
        self
    }

    pub fn build_table(&self) -> DirectiveTable {
        if let Some(nonce) = self.nonce {
            check_nonce(nonce, self.sink);
        }

        let baseline = baseline_policy(self.environment, self.nonce);
        let mut table = merge_rules(baseline, self.rules, self.environment, self.sink);
        propagate_granular(&mut table);
        table
    }

    pub fn build(&self) -> String {
        let header = self.build_table().to_header_string();
        check_header_size(&header, self.sink);
        header
    }
}
