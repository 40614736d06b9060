// Literal grammar.
//
// Ordered choice over the literal forms: hexadecimal, double, integer,
// quoted string. The order is load-bearing — hexadecimal must run before
// decimal parsing so `0x1A` is not read as `0` followed by `x1A`, and the
// alternatives roll back fully between attempts.

use adql_ast::UnsignedLiteral;
use memchr::memchr;

use crate::cursor::Cursor;
use crate::error::ParseError;

/// Parse an unsigned literal.
pub(crate) fn unsigned_literal(c: &mut Cursor<'_>) -> Result<UnsignedLiteral, ParseError> {
    let start = c.pos();
    if let Ok(lit) = hexadecimal(c) {
        return Ok(lit);
    }
    c.rewind(start);
    if let Ok(lit) = double_literal(c) {
        return Ok(lit);
    }
    c.rewind(start);
    if let Ok(lit) = integer_literal(c) {
        return Ok(lit);
    }
    c.rewind(start);
    if let Ok(lit) = quoted_string(c) {
        return Ok(lit);
    }
    c.rewind(start);
    Err(c.error(
        "unsigned_literal",
        "expected a numeric or string literal",
    ))
}

/// Parse `0x` followed by a hex-digit run.
///
/// Matching the prefix commits the rule: an empty digit run or a value that
/// overflows u64 yields the soft-failure sentinel rather than a parse error.
fn hexadecimal(c: &mut Cursor<'_>) -> Result<UnsignedLiteral, ParseError> {
    if !c.eat_str("0x") {
        return Err(c.error("hexadecimal", "expected '0x' prefix"));
    }
    let digits = c.take_while(|b| b.is_ascii_hexdigit());
    Ok(u64::from_str_radix(digits, 16)
        .map_or(UnsignedLiteral::Error, UnsignedLiteral::Hexadecimal))
}

/// Parse digits `.` digits, where either digit run may be empty but not
/// both. `.45` reads as `0.45`, `123.` as `123.0`.
fn double_literal(c: &mut Cursor<'_>) -> Result<UnsignedLiteral, ParseError> {
    let start = c.pos();
    let int_part = c.take_while(|b| b.is_ascii_digit());
    if !c.eat(b'.') {
        return Err(c.error("double_literal", "expected '.'"));
    }
    let frac_part = c.take_while(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(c.error("double_literal", "expected digits around '.'"));
    }
    let text = &c.source()[start..c.pos()];
    let value: f64 = text
        .parse()
        .map_err(|_| c.error("double_literal", format!("invalid double: {text}")))?;
    Ok(UnsignedLiteral::Double(value))
}

/// Parse a decimal digit run as an i64.
fn integer_literal(c: &mut Cursor<'_>) -> Result<UnsignedLiteral, ParseError> {
    let digits = c.take_while(|b| b.is_ascii_digit());
    if digits.is_empty() {
        return Err(c.error("integer_literal", "expected a digit"));
    }
    let value: i64 = digits
        .parse()
        .map_err(|_| c.error("integer_literal", format!("integer out of range: {digits}")))?;
    Ok(UnsignedLiteral::Int(value))
}

/// Fold string content up to an unescaped `'`, decoding `''` to `'`.
///
/// Never fails: the scan stops before a lone quote or at end of input and
/// leaves the terminator for the caller.
pub(crate) fn non_quoted_string(c: &mut Cursor<'_>) -> String {
    let mut value = String::new();
    loop {
        let rest = c.rest();
        match memchr(b'\'', rest.as_bytes()) {
            Some(offset) => {
                if rest.as_bytes().get(offset + 1) == Some(&b'\'') {
                    // Doubled-quote escape.
                    value.push_str(&rest[..offset]);
                    value.push('\'');
                    c.advance(offset + 2);
                } else {
                    value.push_str(&rest[..offset]);
                    c.advance(offset);
                    return value;
                }
            }
            None => {
                value.push_str(rest);
                c.advance(rest.len());
                return value;
            }
        }
    }
}

/// Parse a single-quoted string literal.
fn quoted_string(c: &mut Cursor<'_>) -> Result<UnsignedLiteral, ParseError> {
    if !c.eat(b'\'') {
        return Err(c.error("string_literal", "expected opening '''"));
    }
    let value = non_quoted_string(c);
    if !c.eat(b'\'') {
        return Err(c.error("string_literal", "unterminated string literal"));
    }
    Ok(UnsignedLiteral::String(value))
}
