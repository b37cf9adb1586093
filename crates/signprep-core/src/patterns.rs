//! Ordered pattern tables mapping tag-name substrings to field types and
//! signer roles.
//!
//! Both tables are decision tables walked top to bottom: the first entry
//! whose substring list matches wins, regardless of match length or position
//! in the tag name. Entry order is an observable contract — these must stay
//! ordered slices, never a map with unspecified iteration order.

use crate::field::FieldType;

/// Fallback signer role when no role pattern matches.
pub const DEFAULT_ROLE: &str = "First Party";

/// Ordered field-type patterns, first match wins.
///
/// `text` is the fallback and deliberately has no entry here. A tag name
/// containing substrings from two entries (e.g. `signature_date`) resolves
/// to the earlier entry.
pub static TYPE_PATTERNS: &[(FieldType, &[&str])] = &[
    (FieldType::Signature, &["_signature", "signature", "_sign"]),
    (FieldType::Initials, &["initial", "_init"]),
    (FieldType::Date, &["date"]),
    (FieldType::Checkbox, &["checkbox", "check_", "agree"]),
    (FieldType::Image, &["image", "photo", "picture"]),
    (FieldType::File, &["file", "attachment"]),
    (FieldType::Phone, &["phone", "mobile"]),
    (FieldType::Number, &["number", "amount", "price", "total", "qty"]),
    (FieldType::Select, &["select", "dropdown"]),
    (FieldType::Radio, &["radio"]),
    (FieldType::Stamp, &["stamp", "seal"]),
];

/// Ordered signer-role patterns, first match wins.
///
/// [`DEFAULT_ROLE`] is the fallback and has no entry here.
pub static ROLE_PATTERNS: &[(&str, &[&str])] = &[
    (
        "Service Provider",
        &["provider_", "provider", "vendor_", "seller_"],
    ),
    (
        "Client",
        &["client_", "client", "customer_", "buyer_", "tenant_"],
    ),
];
