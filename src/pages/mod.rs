//! Route matching and cache key derivation.
//!
//! Rules are held in a fixed, ordered list and evaluated first-match-wins:
//! a literal rule matches every path it is a prefix of, a pattern rule
//! matches every path its regular expression finds a match in. Because
//! order decides, overlapping rules are reported at startup.
//!
//! Keys are a pure function of the configured prefix, the optional host
//! prefix, the route and the postfix selected by the matched rule:
//!
//! ```text
//! /catalog/accessories/           -> page:catalog.accessories
//! prefix = "shop"                 -> shop:page:catalog.accessories
//! host "example.local", /a/b      -> page:example.local.a.b
//! postfix "mobile"                -> page:catalog.accessories_mobile
//! ```

/// Rule matchers and key postfixes.
pub mod enums;

/// Page rules, the rule list and the key builder.
pub mod structs;

/// Implementation blocks for rules and keys.
pub mod impls;

mod tests;
