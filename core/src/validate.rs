//! Option validation and normalization.
//!
//! # Design
//! One generic pass driven by an `EndpointDescriptor`. Rules run in
//! descriptor order and the first failure is returned; nothing is collected.
//! An absent bag skips validation entirely, so even required fields are only
//! enforced once the caller hands over a bag. The output keeps the bag's
//! insertion order, with every recognised field replaced by its normalized
//! text and unrecognised keys passed through. A pass-through list repeats
//! its key once per element.

use std::collections::HashMap;

use tracing::warn;

use crate::endpoint::{EndpointDescriptor, FieldKind, FieldRule};
use crate::error::UsageError;
use crate::options::{join_ints, OptionValue, Options};

/// Normalized query parameters, in insertion order.
pub type QueryParams = Vec<(String, String)>;

/// Validate `options` against `descriptor` and normalize them for the query
/// string.
pub fn normalize(
    descriptor: &EndpointDescriptor,
    options: Option<&Options>,
) -> Result<QueryParams, UsageError> {
    let Some(options) = options else {
        return Ok(Vec::new());
    };

    let mut normalized = HashMap::with_capacity(descriptor.fields.len());
    for rule in descriptor.fields {
        match options.get(rule.name) {
            Some(value) => {
                let text = normalize_field(rule, value).inspect_err(|err| {
                    warn!(endpoint = descriptor.path, kind = value.kind(), "{err}");
                })?;
                normalized.insert(rule.name, text);
            }
            None if rule.required => {
                let err = UsageError::MissingRequired { option: rule.name };
                warn!(endpoint = descriptor.path, "{err}");
                return Err(err);
            }
            None => {}
        }
    }

    Ok(options
        .iter()
        .flat_map(|(key, value)| {
            let texts = match normalized.remove(key) {
                Some(text) => vec![text],
                None => value.render(),
            };
            texts.into_iter().map(move |text| (key.to_string(), text))
        })
        .collect())
}

fn normalize_field(rule: &FieldRule, value: &OptionValue) -> Result<String, UsageError> {
    let invalid = || UsageError::InvalidType {
        option: rule.name,
        expected: rule.kind.expected(),
    };

    match (rule.kind, value) {
        (FieldKind::Integer, OptionValue::Int(n)) => Ok(n.to_string()),
        (FieldKind::BoundedInteger { min, max }, OptionValue::Int(n)) => {
            if (min..=max).contains(n) {
                Ok(n.to_string())
            } else {
                Err(UsageError::OutOfRange {
                    option: rule.name,
                    value: *n,
                    min,
                    max,
                })
            }
        }
        (FieldKind::IntegerList, OptionValue::Int(n)) => Ok(n.to_string()),
        (FieldKind::IntegerList, OptionValue::IntList(ns)) => Ok(join_ints(ns)),
        (FieldKind::IntegerList, OptionValue::Str(s)) => s
            .split(',')
            .map(parse_leading_int)
            .collect::<Option<Vec<_>>>()
            .map(|ns| join_ints(&ns))
            .ok_or_else(invalid),
        (FieldKind::Boolean, OptionValue::Bool(b)) => Ok(b.to_string()),
        (FieldKind::String, OptionValue::Str(s)) => Ok(s.clone()),
        _ => Err(invalid()),
    }
}

/// Parse the integer prefix of `token`: optional whitespace, optional sign,
/// then at least one digit. Anything after the digits is ignored. A prefix
/// that overflows `i64` is rejected.
fn parse_leading_int(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let (sign, rest) = match token.as_bytes().first() {
        Some(b'-') => ("-", &token[1..]),
        Some(b'+') => ("", &token[1..]),
        _ => ("", token),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    format!("{sign}{}", &rest[..digits]).parse().ok()
}
