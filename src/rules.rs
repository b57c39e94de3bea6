//! The fixed set of rule identifiers that count as ES6+ syntax findings
//!
//! The lint engine reports far more than syntax-level problems (style, unused
//! variables, formatting). Only the identifiers below mean "this artifact still
//! contains modern syntax"; everything else is discarded before counting.

/// Default rule-configuration file consumed by the lint engine
pub const DEFAULT_CONFIG_FILE: &str = ".eslintrc.dist.js";

/// Prefix of the eslint-plugin-es5 rule family ("no X for ES5" checks)
pub const ES5_PLUGIN_PREFIX: &str = "es5/";

/// Core-rule identifiers that indicate ES6+ syntax
///
/// The `es5/` entries are listed for documentation value; the prefix check in
/// [`is_es6_syntax_rule`] already covers the whole family.
pub const ES6_SYNTAX_RULES: &[&str] = &[
    // Arrow functions
    "arrow-body-style",
    "arrow-parens",
    "arrow-spacing",
    // Classes
    "no-class-assign",
    "no-dupe-class-members",
    "constructor-super",
    "no-this-before-super",
    "no-useless-constructor",
    // Template strings
    "no-template-curly-in-string",
    // eslint-plugin-es5 rules
    "es5/no-arrow-functions",
    "es5/no-binary-and-octal-literals",
    "es5/no-block-scoping",
    "es5/no-classes",
    "es5/no-computed-properties",
    "es5/no-default-parameters",
    "es5/no-destructuring",
    "es5/no-exponentiation-operator",
    "es5/no-for-of",
    "es5/no-generators",
    "es5/no-modules",
    "es5/no-object-super",
    "es5/no-rest-parameters",
    "es5/no-shorthand-properties",
    "es5/no-spread",
    "es5/no-template-literals",
    "es5/no-typeof-symbol",
    "es5/no-unicode-code-point-escape",
    "es5/no-unicode-regex",
];

/// Check whether a rule identifier denotes ES6+ syntax
///
/// A rule matches if it is an exact member of [`ES6_SYNTAX_RULES`] or starts
/// with [`ES5_PLUGIN_PREFIX`]. This is the only place the allow-list is
/// consulted; callers must not re-implement the check.
#[must_use]
pub fn is_es6_syntax_rule(rule_id: &str) -> bool {
    ES6_SYNTAX_RULES.contains(&rule_id) || rule_id.starts_with(ES5_PLUGIN_PREFIX)
}
