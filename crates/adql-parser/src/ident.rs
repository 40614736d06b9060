// Identifier and qualified-name grammar.
//
// Regular identifiers are `[A-Za-z][A-Za-z0-9_]*`; delimited identifiers are
// double-quoted with `""` escapes. Qualified names are dot-separated chains
// assigned to catalog/schema/table slots from the right.

use adql_ast::{ColumnReference, Identifier, TableName};
use memchr::memchr;

use crate::cursor::Cursor;
use crate::error::ParseError;

/// Parse a regular identifier: one ASCII letter, then ASCII letters, digits,
/// or underscores. Digits-first input fails without consuming anything.
pub(crate) fn regular_identifier(c: &mut Cursor<'_>) -> Result<Identifier, ParseError> {
    match c.peek() {
        Some(byte) if byte.is_ascii_alphabetic() => {}
        _ => return Err(c.error("regular_identifier", "expected an ASCII letter")),
    }
    let text = c.take_while(|b| b.is_ascii_alphanumeric() || b == b'_');
    Ok(Identifier::Regular(text.to_owned()))
}

/// Parse a delimited identifier: `"` content `"`, folding `""` to `"`.
///
/// The content scan uses memchr to jump between quote bytes; everything in
/// between is copied verbatim. An unterminated identifier (including a
/// dangling escape at end of input) is a failure.
pub(crate) fn delimited_identifier(c: &mut Cursor<'_>) -> Result<Identifier, ParseError> {
    if !c.eat(b'"') {
        return Err(c.error("delimited_identifier", "expected opening '\"'"));
    }
    let mut value = String::new();
    loop {
        let rest = c.rest();
        match memchr(b'"', rest.as_bytes()) {
            Some(offset) => {
                value.push_str(&rest[..offset]);
                c.advance(offset + 1);
                if c.eat(b'"') {
                    // Doubled-quote escape.
                    value.push('"');
                } else {
                    return Ok(Identifier::Delimited(value));
                }
            }
            None => {
                return Err(c.error(
                    "delimited_identifier",
                    "unterminated delimited identifier",
                ));
            }
        }
    }
}

/// Parse an identifier: regular form first, then delimited, with full
/// rollback between the alternatives.
pub(crate) fn identifier(c: &mut Cursor<'_>) -> Result<Identifier, ParseError> {
    let start = c.pos();
    if let Ok(id) = regular_identifier(c) {
        return Ok(id);
    }
    c.rewind(start);
    match delimited_identifier(c) {
        Ok(id) => Ok(id),
        Err(err) => {
            c.rewind(start);
            // Keep the delimited diagnostic when a quote actually opened;
            // otherwise neither alternative started.
            if c.peek() == Some(b'"') {
                Err(err)
            } else {
                Err(c.error("identifier", "expected an identifier"))
            }
        }
    }
}

/// Parse one or more identifiers separated by `.` with no surrounding
/// whitespace. A trailing dot not followed by an identifier is left
/// unconsumed.
fn identifier_chain(c: &mut Cursor<'_>) -> Result<Vec<Identifier>, ParseError> {
    let mut parts = vec![identifier(c)?];
    loop {
        let mark = c.pos();
        if !c.eat(b'.') {
            break;
        }
        match identifier(c) {
            Ok(id) => parts.push(id),
            Err(_) => {
                c.rewind(mark);
                break;
            }
        }
    }
    Ok(parts)
}

/// Parse a table name of one to three dot-separated identifiers; additional
/// leading segments are dropped by the right-to-left assignment.
pub(crate) fn table_name(c: &mut Cursor<'_>) -> Result<TableName, ParseError> {
    let start = c.pos();
    let parts = identifier_chain(c)?;
    TableName::from_parts(parts).ok_or_else(|| {
        c.rewind(start);
        c.error("table_name", "empty identifier sequence")
    })
}

/// Parse a column reference of one to four dot-separated identifiers, the
/// qualifier shape mirroring [`table_name`] one level deeper.
pub(crate) fn column_reference(c: &mut Cursor<'_>) -> Result<ColumnReference, ParseError> {
    let start = c.pos();
    let parts = identifier_chain(c)?;
    ColumnReference::from_parts(parts).ok_or_else(|| {
        c.rewind(start);
        c.error("column_reference", "empty identifier sequence")
    })
}
