use super::api::ProductVersionParser;
use super::api::{parse_to_pairs, Rule};
use super::types::VersionRange;

use pest::consumes_to;
use pest::parses_to;

#[test]
fn test_open_range_tokens() {
    parses_to! {
        parser: ProductVersionParser,
        input: "flash 10+",
        rule: Rule::product_version,
        tokens: [
            product_version(0, 9, [
                product(0, 5),
                version_range(6, 9, [
                    open_range(6, 9, [
                        number(6, 8)
                    ])
                ]),
                EOI(9, 9)
            ])
        ]
    };
}

#[test]
fn test_bounded_range_tokens() {
    parses_to! {
        parser: ProductVersionParser,
        input: "chrome 29-35",
        rule: Rule::product_version,
        tokens: [
            product_version(0, 12, [
                product(0, 6),
                version_range(7, 12, [
                    bounded_range(7, 12, [
                        number(7, 9),
                        number(10, 12)
                    ])
                ]),
                EOI(12, 12)
            ])
        ]
    };
}

#[test]
fn test_multi_word_product_tokens() {
    parses_to! {
        parser: ProductVersionParser,
        input: "Adobe Flash 10.1",
        rule: Rule::product_version,
        tokens: [
            product_version(0, 16, [
                product(0, 11),
                version_range(12, 16, [
                    exact_version(12, 16, [
                        number(12, 16)
                    ])
                ]),
                EOI(16, 16)
            ])
        ]
    };
}

#[test]
fn test_browser_rule_without_range_tokens() {
    parses_to! {
        parser: ProductVersionParser,
        input: "Internet Explorer",
        rule: Rule::browser_rule,
        tokens: [
            browser_rule(0, 17, [
                product(0, 17),
                EOI(17, 17)
            ])
        ]
    };
}

#[test]
fn test_rejects_missing_range() {
    assert!(parse_to_pairs(Rule::product_version, "totally-garbage-string").is_err());
    assert!(parse_to_pairs(Rule::product_version, "flash").is_err());
}

#[test]
fn test_rejects_missing_product() {
    assert!(parse_to_pairs(Rule::product_version, "10+").is_err());
    assert!(parse_to_pairs(Rule::product_version, "").is_err());
}

#[test]
fn test_parse_open_range() {
    let parsed = ProductVersionParser::parse_product_version_string("flash 10+").unwrap();
    assert_eq!(parsed.product, "flash");
    assert_eq!(parsed.versions, VersionRange::at_least(10.0));
}

#[test]
fn test_parse_multi_word_product() {
    let parsed =
        ProductVersionParser::parse_product_version_string("  Adobe   Flash 9-11 ").unwrap();
    assert_eq!(parsed.product, "Adobe Flash");
    assert_eq!(parsed.versions, VersionRange::between(9.0, 11.0));
}

#[test]
fn test_parse_exact_and_any() {
    let exact = ProductVersionParser::parse_product_version_string("java 1.6").unwrap();
    assert_eq!(exact.versions, VersionRange::exactly(1.6));

    let any = ProductVersionParser::parse_product_version_string("quicktime *").unwrap();
    assert_eq!(any.versions, VersionRange::any());
}

#[test]
fn test_trailing_non_range_word_is_part_of_product() {
    assert!(ProductVersionParser::parse_product_version_string("flash 10+ beta").is_none());

    let rule = ProductVersionParser::parse_browser_rule("chrome 10+ beta").unwrap();
    assert_eq!(rule.product, "chrome 10+ beta");
    assert_eq!(rule.versions, VersionRange::any());
}

#[test]
fn test_parse_garbage_is_none() {
    assert!(ProductVersionParser::parse_product_version_string("totally-garbage-string").is_none());
    assert!(ProductVersionParser::parse_product_version_string("flash 10.1.2").is_none());
}

#[test]
fn test_browser_rule_defaults_to_any_version() {
    let rule = ProductVersionParser::parse_browser_rule("ie").unwrap();
    assert_eq!(rule.product, "ie");
    assert_eq!(rule.versions, VersionRange::any());

    let rule = ProductVersionParser::parse_browser_rule("ie 6-8").unwrap();
    assert_eq!(rule.versions, VersionRange::between(6.0, 8.0));
}

#[test]
fn test_version_range_contains() {
    assert!(VersionRange::at_least(10.0).contains(10.0));
    assert!(VersionRange::at_least(10.0).contains(99.0));
    assert!(!VersionRange::at_least(10.0).contains(9.5));
    assert!(VersionRange::between(6.0, 8.0).contains(8.0));
    assert!(!VersionRange::between(6.0, 8.0).contains(8.5));
    assert!(VersionRange::exactly(1.6).contains(1.6));
}

#[test]
fn test_version_range_rendering() {
    assert_eq!(VersionRange::at_least(10.0).to_string(), "10+");
    assert_eq!(VersionRange::between(6.0, 8.5).to_string(), "6-8.5");
    assert_eq!(VersionRange::exactly(11.0).to_string(), "11");
    assert_eq!(VersionRange::between(9.0, 11.0).requirement(), "9+");
}
