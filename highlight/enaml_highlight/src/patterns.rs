//! Pattern fragments for the literal sub-grammars.
//!
//! Composed the way the grammar defines them: each fragment is a complete
//! non-capturing group, so callers can concatenate and alternate them
//! without re-parenthesizing.

/// Optional raw/unicode string prefix.
pub(crate) const STRING_PREFIX: &str = "(?:r|u|ur|R|U|UR|Ur|uR)?";

/// Decimal integer: `0` itself, or a nonzero-leading digit run. Arbitrary
/// leading zeros are left to the octal form.
const DECIMAL_INTEGER: &str = r"(?:(?:[1-9]\d*)|(?:0))";
const OCT_INTEGER: &str = "(?:0[oO]?[0-7]+)";
const HEX_INTEGER: &str = r"(?:0[xX][\dA-Fa-f]+)";
const BIN_INTEGER: &str = "(?:0[bB][01]+)";

const EXPONENT: &str = r"(?:[eE][+-]?\d+)";
const FRACTION: &str = r"(?:\.\d+)";
const INT_PART: &str = r"(?:\d+)";

/// Integer literal in any radix.
pub(crate) fn integer() -> String {
    format!("(?:{DECIMAL_INTEGER}|{OCT_INTEGER}|{HEX_INTEGER}|{BIN_INTEGER})")
}

/// Fractional form (`1.5`, `.5`) or trailing-dot form (`1.`).
fn point_float() -> String {
    format!(r"(?:(?:{INT_PART}?{FRACTION})|(?:{INT_PART}\.))")
}

/// Exponent form over a point float or bare integer part (`1e9`, `1.5e-3`).
fn exponent_float() -> String {
    format!("(?:(?:{}|{INT_PART}){EXPONENT})", point_float())
}

/// Any floating-point literal. Exponent form first: it must win over its
/// own point-float prefix.
pub(crate) fn float_number() -> String {
    format!("(?:{}|{})", exponent_float(), point_float())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
