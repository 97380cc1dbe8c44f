use actix_web_security_headers::core::{
    build_csp_header, CspHeaderBuilder, CspRule, Directive, Environment,
};
use actix_web_security_headers::monitoring::CollectingSink;
use proptest::prelude::*;

fn arb_host() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_map(|name| format!("https://{}.example.com", name))
}

fn arb_source_directive() -> impl Strategy<Value = Directive> {
    prop::sample::select(
        Directive::ALL
            .iter()
            .copied()
            .filter(|d| d.accepts_sources() && *d != Directive::Sandbox)
            .collect::<Vec<_>>(),
    )
}

fn arb_additive_rule() -> impl Strategy<Value = CspRule> {
    prop::collection::vec((arb_source_directive(), arb_host()), 1..4).prop_map(|entries| {
        let mut rule = CspRule::new();
        for (directive, host) in entries {
            rule.set(directive, host);
        }
        rule
    })
}

fn arb_nonce() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z0-9+/]{22}==")
}

proptest! {
    #[test]
    fn prop_additive_rules_commute(
        rules in prop::collection::vec(arb_additive_rule(), 1..5),
        is_dev in any::<bool>(),
    ) {
        let mut reversed = rules.clone();
        reversed.reverse();
        let environment = Environment::from(is_dev);
        let sink = CollectingSink::new();

        let forward = CspHeaderBuilder::new(&rules).environment(environment).sink(&sink).build_table();
        let backward = CspHeaderBuilder::new(&reversed).environment(environment).sink(&sink).build_table();

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_none_is_never_mixed(
        rules in prop::collection::vec(arb_additive_rule(), 0..4),
        none_directive in arb_source_directive(),
        nonce in arb_nonce(),
        is_dev in any::<bool>(),
    ) {
        let mut rules = rules;
        rules.push(CspRule::new().directive(none_directive, "'none' https://late.example.com"));
        let header = build_csp_header(&rules, nonce.as_deref(), is_dev);

        for segment in header.split("; ") {
            let tokens: Vec<&str> = segment.split(' ').skip(1).collect();
            if tokens.contains(&"'none'") {
                prop_assert_eq!(tokens.len(), 1, "'none' mixed in {}", segment);
            }
        }
    }

    #[test]
    fn prop_header_is_well_formed(
        rules in prop::collection::vec(arb_additive_rule(), 0..4),
        nonce in arb_nonce(),
        is_dev in any::<bool>(),
    ) {
        let header = build_csp_header(&rules, nonce.as_deref(), is_dev);

        prop_assert!(!header.ends_with(';'));
        let mut names: Vec<&str> = Vec::new();
        for segment in header.split("; ") {
            prop_assert!(!segment.is_empty());
            let name = segment.split(' ').next().unwrap_or_default();
            prop_assert!(name.parse::<Directive>().is_ok());
            prop_assert!(!names.contains(&name), "duplicate directive {}", name);
            names.push(name);

            let tokens: Vec<&str> = segment.split(' ').skip(1).collect();
            for (i, token) in tokens.iter().enumerate() {
                prop_assert!(!tokens[..i].contains(token), "duplicate token {} in {}", token, segment);
            }
        }
    }

    #[test]
    fn prop_script_src_elem_never_allows_eval(
        rules in prop::collection::vec(arb_additive_rule(), 0..4),
        nonce in arb_nonce(),
    ) {
        let mut rules = rules;
        rules.push(CspRule::new().directive(Directive::ScriptSrc, "'unsafe-eval'"));
        let header = build_csp_header(&rules, nonce.as_deref(), true);

        let elem = header
            .split("; ")
            .find(|s| s.starts_with("script-src-elem "))
            .unwrap_or_default();
        prop_assert!(!elem.contains("'unsafe-eval'"));
    }
}
