use crate::constants::{NONE_SOURCE, UNSAFE_EVAL_SOURCE, WILDCARD_SOURCE};
use crate::core::config::Environment;
use crate::core::directive::Directive;
use crate::core::normalize::{is_valueless, normalize, resolve_none, NoneResolution};
use crate::core::rule::{CspRule, DirectiveValue};
use crate::core::table::DirectiveTable;
use crate::monitoring::advisory::{AdvisorySink, PolicyWarning};
use url::Url;

const GRANULAR_PAIRS: [(Directive, Directive); 2] = [
    (Directive::ScriptSrc, Directive::ScriptSrcElem),
    (Directive::StyleSrc, Directive::StyleSrcElem),
];

pub struct DirectiveMerger<'a> {
    table: DirectiveTable,
    environment: Environment,
    sink: &'a dyn AdvisorySink,
}

impl<'a> DirectiveMerger<'a> {
    #[inline]
    pub fn new(baseline: DirectiveTable, environment: Environment, sink: &'a dyn AdvisorySink) -> Self {
        Self {
            table: baseline,
            environment,
            sink,
        }
    }

    pub fn apply_rule(&mut self, rule: &CspRule) -> &mut Self {
        for (directive, value) in rule.directives() {
            self.apply_directive(directive, value);
        }
        self
    }

    pub fn apply_directive(&mut self, directive: Directive, value: &DirectiveValue) -> &mut Self {
        let mut tokens = normalize(value);
        if tokens.is_empty() {
            return self;
        }

        if is_valueless(&tokens) {
            // the empty token only marks presence, so an inherited 'none' stays
            self.table.get_or_init(directive).insert(String::new());
            return self;
        }

        if !directive.accepts_sources() {
            self.sink.warn(&PolicyWarning::MismatchedValue { directive });
            return self;
        }

        match resolve_none(&mut tokens) {
            NoneResolution::Override => {
                self.table.replace(directive, [NONE_SOURCE]);
            }
            NoneResolution::Extend => {
                self.inspect_tokens(directive, &tokens);
                let set = self.table.get_or_init(directive);
                if !tokens.is_empty() {
                    set.shift_remove(NONE_SOURCE);
                }
                set.extend(tokens);
            }
        }
        self
    }

    fn inspect_tokens(&self, directive: Directive, tokens: &[String]) {
        for token in tokens {
            if token == UNSAFE_EVAL_SOURCE && !self.environment.is_dev() {
                self.sink.warn(&PolicyWarning::UnsafeEvalInProduction { directive });
            } else if token == WILDCARD_SOURCE {
                self.sink.warn(&PolicyWarning::Wildcard { directive });
            } else if token.contains("://") && !token.contains('*') && Url::parse(token).is_err() {
                self.sink.warn(&PolicyWarning::MalformedSource {
                    directive,
                    token: token.clone(),
                });
            }
        }
    }

    #[inline]
    pub fn table(&self) -> &DirectiveTable {
        &self.table
    }

    #[inline]
    pub fn finish(self) -> DirectiveTable {
        self.table
    }
}

pub fn merge_rules(
    baseline: DirectiveTable,
    rules: &[CspRule],
    environment: Environment,
    sink: &dyn AdvisorySink,
) -> DirectiveTable {
    let mut merger = DirectiveMerger::new(baseline, environment, sink);
    for rule in rules {
        merger.apply_rule(rule);
    }
    merger.finish()
}

// Runs once, after every rule is merged. 'unsafe-eval' never reaches script-src-elem.
pub fn propagate_granular(table: &mut DirectiveTable) {
    for (base, granular) in GRANULAR_PAIRS {
        let tokens: Vec<String> = match table.get(base) {
            Some(set) => set
                .iter()
                .filter(|t| !t.is_empty())
                .filter(|t| !(granular == Directive::ScriptSrcElem && *t == UNSAFE_EVAL_SOURCE))
                .cloned()
                .collect(),
            None => continue,
        };

        if tokens.is_empty() {
            continue;
        }

        if tokens.len() == 1 && tokens[0] == NONE_SOURCE {
            table.replace(granular, [NONE_SOURCE]);
            continue;
        }

        let target = table.get_or_empty(granular);
        target.extend(tokens);
        if target.len() > 1 {
            target.shift_remove(NONE_SOURCE);
        }
    }
}
