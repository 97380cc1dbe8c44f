use actix_web_security_headers::core::{build_csp_header, CspHeaderBuilder, CspRule, Directive, Environment};
use actix_web_security_headers::monitoring::{CollectingSink, PolicyWarning};

const NONCE: &str = "dGVzdC1ub25jZS0xMjM0NTY3OA==";

fn directive_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split("; ").find_map(|segment| {
        if segment == name {
            Some("")
        } else {
            segment
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix(' '))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_baseline_without_nonce() {
        let header = build_csp_header(&[], None, false);

        assert_eq!(
            header,
            "default-src 'self'; base-uri 'self'; child-src 'none'; connect-src 'self'; \
             font-src 'self'; form-action 'self'; frame-ancestors 'none'; frame-src 'none'; \
             img-src 'self' blob: data:; manifest-src 'self'; media-src 'self'; \
             object-src 'none'; script-src 'self' 'unsafe-inline'; \
             script-src-elem 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; \
             style-src-elem 'self' 'unsafe-inline'; style-src-attr 'unsafe-inline'; \
             worker-src 'self' blob:"
        );
    }

    #[test]
    fn test_development_baseline_with_nonce() {
        let header = build_csp_header(&[], Some(NONCE), true);

        assert_eq!(
            directive_value(&header, "script-src"),
            Some("'nonce-dGVzdC1ub25jZS0xMjM0NTY3OA==' 'strict-dynamic' 'unsafe-eval'")
        );
        assert_eq!(
            directive_value(&header, "script-src-elem"),
            Some("'nonce-dGVzdC1ub25jZS0xMjM0NTY3OA==' 'strict-dynamic'")
        );
        assert_eq!(
            directive_value(&header, "connect-src"),
            Some("'self' ws://localhost:* wss://localhost:*")
        );
    }

    #[test]
    fn test_dev_prod_switch() {
        let dev = build_csp_header(&[], Some(NONCE), true);
        assert!(dev.contains("'unsafe-eval'"));
        assert!(dev.contains("ws://localhost:*"));
        assert!(dev.contains("wss://localhost:*"));

        let prod = build_csp_header(&[], Some(NONCE), false);
        assert!(!prod.contains("'unsafe-eval'"));
        assert!(!prod.contains("ws://localhost:*"));
        assert!(!prod.contains("wss://localhost:*"));
    }

    #[test]
    fn test_nonce_substitution() {
        let header = build_csp_header(&[], Some("abc123"), false);
        let script_src = directive_value(&header, "script-src").unwrap();
        assert!(script_src.contains("'nonce-abc123'"));
        assert!(script_src.contains("'strict-dynamic'"));
        assert!(!script_src.contains("'unsafe-inline'"));
        assert!(!script_src.contains("'self'"));

        let header = build_csp_header(&[], None, false);
        assert_eq!(
            directive_value(&header, "script-src"),
            Some("'self' 'unsafe-inline'")
        );
    }

    #[test]
    fn test_empty_nonce_means_no_nonce() {
        assert_eq!(
            build_csp_header(&[], Some(""), false),
            build_csp_header(&[], None, false)
        );
    }

    #[test]
    fn test_rule_source_replaces_baseline_none() {
        let rules = [CspRule::new()
            .description("YouTube embeds")
            .directive(Directive::FrameSrc, "https://www.youtube.com")];
        let header = build_csp_header(&rules, None, false);

        assert_eq!(
            directive_value(&header, "frame-src"),
            Some("https://www.youtube.com")
        );
    }

    #[test]
    fn test_rule_none_alone_is_exact() {
        let rules = [CspRule::new().directive(Directive::MediaSrc, "'none'")];
        let header = build_csp_header(&rules, None, false);

        assert_eq!(directive_value(&header, "media-src"), Some("'none'"));
    }

    #[test]
    fn test_none_mixed_with_sources_is_dropped() {
        let rules = [CspRule::new().directive(Directive::FrameSrc, "'none' https://example.com")];
        let header = build_csp_header(&rules, None, false);

        assert_eq!(
            directive_value(&header, "frame-src"),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_untouched_directive_keeps_baseline_none() {
        let rules = [CspRule::new().directive(Directive::ImgSrc, "https://images.example.com")];
        let header = build_csp_header(&rules, None, false);

        assert_eq!(directive_value(&header, "object-src"), Some("'none'"));
    }

    #[test]
    fn test_repeated_none_keeps_connect_src_self() {
        let rules = [CspRule::new().directive(Directive::ConnectSrc, "'none' 'none'")];
        let header = build_csp_header(&rules, None, false);

        assert_eq!(directive_value(&header, "connect-src"), Some("'self'"));
    }

    #[test]
    fn test_empty_value_on_source_directive_is_emitted() {
        let rules = [CspRule::new()
            .directive(Directive::ReportTo, "")
            .directive(Directive::PrefetchSrc, "")];
        let header = build_csp_header(&rules, None, false);

        assert_eq!(directive_value(&header, "report-to"), Some(""));
        assert_eq!(directive_value(&header, "prefetch-src"), Some("'self'"));
        assert!(header.ends_with("; report-to; prefetch-src 'self'"));
    }

    #[test]
    fn test_none_keyword_is_case_sensitive() {
        let rules = [CspRule::new().directive(Directive::FrameSrc, "'None' https://example.com")];
        let header = build_csp_header(&rules, None, false);

        assert_eq!(
            directive_value(&header, "frame-src"),
            Some("'None' https://example.com")
        );
    }

    #[test]
    fn test_deduplication_across_rules() {
        let rules = [
            CspRule::new().directive(Directive::ConnectSrc, "https://api.example.com"),
            CspRule::new().directive(Directive::ConnectSrc, "https://api.example.com"),
        ];
        let header = build_csp_header(&rules, None, false);

        assert_eq!(header.matches("https://api.example.com").count(), 1);
    }

    #[test]
    fn test_rule_sources_propagate_to_script_src_elem() {
        let rules = [CspRule::new().directive(Directive::ScriptSrc, "https://cdn.example.com")];
        let header = build_csp_header(&rules, Some(NONCE), true);

        let script_src = directive_value(&header, "script-src").unwrap();
        let script_src_elem = directive_value(&header, "script-src-elem").unwrap();
        assert!(script_src.contains("https://cdn.example.com"));
        assert!(script_src_elem.contains("https://cdn.example.com"));
        assert!(script_src.contains("'unsafe-eval'"));
        assert!(!script_src_elem.contains("'unsafe-eval'"));
    }

    #[test]
    fn test_rule_sources_propagate_to_style_src_elem() {
        let rules = [CspRule::new().directive(Directive::StyleSrc, "https://fonts.googleapis.com")];
        let header = build_csp_header(&rules, None, false);

        assert_eq!(
            directive_value(&header, "style-src-elem"),
            Some("'self' 'unsafe-inline' https://fonts.googleapis.com")
        );
    }

    #[test]
    fn test_unsafe_eval_from_rule_never_reaches_script_src_elem() {
        let rules = [CspRule::new().directive(Directive::ScriptSrc, "'unsafe-eval'")];
        let header = build_csp_header(&rules, None, false);

        assert!(directive_value(&header, "script-src")
            .unwrap()
            .contains("'unsafe-eval'"));
        assert!(!directive_value(&header, "script-src-elem")
            .unwrap()
            .contains("'unsafe-eval'"));
    }

    #[test]
    fn test_boolean_directive_handling() {
        for value in [
            CspRule::new().directive(Directive::UpgradeInsecureRequests, true),
            CspRule::new().directive(Directive::UpgradeInsecureRequests, ""),
        ] {
            let header = build_csp_header(&[value], None, false);
            assert_eq!(directive_value(&header, "upgrade-insecure-requests"), Some(""));
            assert!(header.ends_with("; upgrade-insecure-requests"));
        }

        let rules = [CspRule::new().directive(Directive::UpgradeInsecureRequests, false)];
        let header = build_csp_header(&rules, None, false);
        assert!(!header.contains("upgrade-insecure-requests"));
    }

    #[test]
    fn test_serialization_format() {
        let header = build_csp_header(&[], Some(NONCE), false);

        assert!(!header.ends_with(';'));
        assert!(!header.ends_with(' '));
        assert!(!header.contains(";;"));
        assert_eq!(header.split("; ").count(), 18);
        for segment in header.split("; ") {
            assert!(!segment.is_empty());
            assert!(!segment.contains(';'));
        }
    }

    #[test]
    fn test_additive_rules_are_order_independent() {
        let a = CspRule::new()
            .directive(Directive::ConnectSrc, "https://a.example.com")
            .directive(Directive::ImgSrc, "https://img.example.com");
        let b = CspRule::new()
            .directive(Directive::ConnectSrc, "https://b.example.com")
            .directive(Directive::FrameSrc, "https://frames.example.com");

        let ab = CspHeaderBuilder::new(&[a.clone(), b.clone()]).build_table();
        let ba = CspHeaderBuilder::new(&[b, a]).build_table();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_builder_routes_advisories_to_sink() {
        let sink = CollectingSink::new();
        let rules = [CspRule::new().directive(Directive::ImgSrc, "*")];

        let header = CspHeaderBuilder::new(&rules)
            .nonce(Some("short"))
            .environment(Environment::Production)
            .sink(&sink)
            .build();

        assert!(directive_value(&header, "img-src").unwrap().ends_with(" *"));
        assert_eq!(
            sink.warnings(),
            [
                PolicyWarning::ShortNonce { length: 5 },
                PolicyWarning::Wildcard {
                    directive: Directive::ImgSrc
                },
            ]
        );
    }

    #[test]
    fn test_large_header_is_still_emitted() {
        let hosts: Vec<String> = (0..300)
            .map(|i| format!("https://host-{}.example.com", i))
            .collect();
        let rules = [CspRule::new().directive(Directive::ConnectSrc, hosts)];
        let sink = CollectingSink::new();

        let header = CspHeaderBuilder::new(&rules).sink(&sink).build();

        assert!(header.len() > 8000);
        assert!(header.contains("https://host-299.example.com"));
        assert_eq!(
            sink.warnings(),
            [PolicyWarning::OversizedHeader { size: header.len() }]
        );
    }

    #[test]
    fn test_table_encodes_as_header_value() {
        let table = CspHeaderBuilder::new(&[]).nonce(Some(NONCE)).build_table();

        let value = table.to_header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), table.to_header_string());
        assert_eq!(table.len(), 18);
    }
}
