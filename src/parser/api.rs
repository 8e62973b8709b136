use pest::error::{Error, ErrorVariant};
use pest::iterators::{Pair, Pairs};
use pest::{Parser, Position};
use pest_derive::Parser;
use tracing::trace;

use super::types::{ProductVersion, Version, VersionRange};

#[derive(Parser)]
#[grammar = "parser/product_version.pest"] // relative to src
pub struct ProductVersionParser;

impl ProductVersionParser {
    /// Parses `"<product> <versionRange>"`, e.g. `"Adobe Flash 10+"`.
    ///
    /// The range is mandatory. Returns `None` when the input does not match
    /// the grammar.
    pub fn parse_product_version_string(input: &str) -> Option<ProductVersion> {
        Self::parse_with(Rule::product_version, input)
    }

    /// Parses a blacklist/whitelist rule. A rule without a range covers every
    /// version of the browser.
    pub fn parse_browser_rule(input: &str) -> Option<ProductVersion> {
        Self::parse_with(Rule::browser_rule, input)
    }

    fn parse_with(rule: Rule, input: &str) -> Option<ProductVersion> {
        let input = input.trim();
        match parse_to_pairs(rule, input).and_then(|pairs| build_product_version(pairs, input)) {
            Ok(product_version) => Some(product_version),
            Err(err) => {
                trace!(input, rule = ?rule, error = %err, "rejected product/version string");
                None
            }
        }
    }
}

pub fn parse_to_pairs(rule: Rule, input: &str) -> Result<Pairs<'_, Rule>, Error<Rule>> {
    ProductVersionParser::parse(rule, input)
}

fn build_product_version(mut pairs: Pairs<Rule>, input: &str) -> Result<ProductVersion, Error<Rule>> {
    match pairs.next() {
        Some(pair) => match pair.as_rule() {
            Rule::product_version | Rule::browser_rule => build_from_rule_pair(pair),
            _ => Err(get_unexpected_error(1, &pair)),
        },
        None => Err(Error::new_from_pos(
            ErrorVariant::CustomError {
                message: "Nothing to parse".to_string(),
            },
            Position::from_start(input),
        )),
    }
}

fn build_from_rule_pair(pair: Pair<Rule>) -> Result<ProductVersion, Error<Rule>> {
    let span = pair.as_span();
    let mut product = None;
    let mut versions = VersionRange::any();
    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::product => {
                product = Some(
                    inner_pair
                        .as_str()
                        .split_whitespace()
                        .collect::<Vec<_>>()
                        .join(" "),
                )
            }
            Rule::version_range => versions = build_version_range(inner_pair)?,
            Rule::EOI => { /* Do nothing */ }
            _ => return Err(get_unexpected_error(2, &inner_pair)),
        }
    }
    match product {
        Some(product) => Ok(ProductVersion { product, versions }),
        None => Err(Error::new_from_span(
            ErrorVariant::CustomError {
                message: "Missing product name".to_string(),
            },
            span,
        )),
    }
}

fn build_version_range(pair: Pair<Rule>) -> Result<VersionRange, Error<Rule>> {
    let span = pair.as_span();
    let inner_pair = match pair.into_inner().next() {
        Some(p) => p,
        None => {
            return Err(Error::new_from_span(
                ErrorVariant::CustomError {
                    message: "Empty version range".to_string(),
                },
                span,
            ))
        }
    };
    Ok(match inner_pair.as_rule() {
        Rule::open_range => {
            let numbers = build_numbers(inner_pair)?;
            VersionRange::at_least(numbers[0])
        }
        Rule::bounded_range => {
            let numbers = build_numbers(inner_pair)?;
            VersionRange::between(numbers[0], numbers[1])
        }
        Rule::exact_version => {
            let numbers = build_numbers(inner_pair)?;
            VersionRange::exactly(numbers[0])
        }
        Rule::any_version => VersionRange::any(),
        _ => return Err(get_unexpected_error(3, &inner_pair)),
    })
}

/// Collects the `number` children of a range. The grammar guarantees one
/// number for open and exact ranges and two for bounded ones.
fn build_numbers(pair: Pair<Rule>) -> Result<Vec<Version>, Error<Rule>> {
    let mut numbers = vec![];
    for number_pair in pair.into_inner() {
        match number_pair.as_rule() {
            Rule::number => {
                let value = number_pair.as_str().parse::<Version>().map_err(|e| {
                    Error::new_from_span(
                        ErrorVariant::CustomError {
                            message: format!("Invalid version number: {}", e),
                        },
                        number_pair.as_span(),
                    )
                })?;
                numbers.push(value);
            }
            _ => return Err(get_unexpected_error(4, &number_pair)),
        }
    }
    Ok(numbers)
}

fn get_unexpected_error(id: i32, pair: &Pair<Rule>) -> Error<Rule> {
    let message = format!("Unexpected state reached [{:?}] - {}", pair.as_rule(), id);
    Error::new_from_span(ErrorVariant::CustomError { message }, pair.as_span())
}
