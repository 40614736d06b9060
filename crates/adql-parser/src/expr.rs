// Numeric value-expression grammar, precedence climbing.
//
// Precedence levels, tightest to loosest binding:
//   primary        literal | column reference | ( value-expression )
//   factor         optional adjacent unary + / -
//   term           left-fold over * and /
//   ~              prefix on a term-level expression
//   &   ^   |      one left-fold level each, in that order
//   +   -          loosest
//
// The AND < XOR < OR < additive ordering is the ADQL bitwise-extension
// design, not C precedence. Whitespace is permitted around binary operators
// and after `~`, nowhere else. The parenthesized primary recurses back into
// the full expression grammar; that is the grammar's only cycle.

use adql_ast::{Factor, NumericValueExpression, Term, ValueExpression, ValueExpressionPrimary};

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::ident::column_reference;
use crate::literal::unsigned_literal;

/// Parse a value expression. Only the numeric arm exists today; string,
/// boolean, and geometry expressions are future grammar work.
pub(crate) fn value_expression(c: &mut Cursor<'_>) -> Result<ValueExpression, ParseError> {
    numeric_value_expression(c).map(ValueExpression::Numeric)
}

/// Parse the leaf level: ordered choice over literal, column reference, and
/// parenthesized sub-expression, with full rollback between alternatives.
pub(crate) fn value_expression_primary(
    c: &mut Cursor<'_>,
) -> Result<ValueExpressionPrimary, ParseError> {
    let start = c.pos();
    if let Ok(lit) = unsigned_literal(c) {
        return Ok(ValueExpressionPrimary::Literal(lit));
    }
    c.rewind(start);
    if let Ok(col) = column_reference(c) {
        return Ok(ValueExpressionPrimary::ColumnRef(col));
    }
    c.rewind(start);
    if c.eat(b'(') {
        let expr = value_expression(c)?;
        if !c.eat(b')') {
            return Err(c.error("value_expression_primary", "expected closing ')'"));
        }
        return Ok(ValueExpressionPrimary::Parenthesized(Box::new(expr)));
    }
    Err(c.error(
        "value_expression_primary",
        "expected a literal, column reference, or '('",
    ))
}

/// Parse a factor: an optional sign directly attached to a primary.
pub(crate) fn factor(c: &mut Cursor<'_>) -> Result<Factor, ParseError> {
    let sign = if c.eat(b'+') {
        1.0
    } else if c.eat(b'-') {
        -1.0
    } else {
        1.0
    };
    let operand = value_expression_primary(c)?;
    Ok(Factor { sign, operand })
}

/// Parse a term: factors left-folded over `*` and `/`. An operator not
/// followed by a factor is put back rather than failing the whole term.
pub(crate) fn term(c: &mut Cursor<'_>) -> Result<Term, ParseError> {
    let mut acc = Term::Factor(factor(c)?);
    loop {
        let mark = c.pos();
        c.skip_ws();
        let op = match c.peek() {
            Some(op @ (b'*' | b'/')) => op,
            _ => {
                c.rewind(mark);
                break;
            }
        };
        c.bump();
        c.skip_ws();
        match factor(c) {
            Ok(rhs) => {
                acc = if op == b'*' {
                    Term::Multiplication(Box::new(acc), rhs)
                } else {
                    Term::Division(Box::new(acc), rhs)
                };
            }
            Err(_) => {
                c.rewind(mark);
                break;
            }
        }
    }
    Ok(acc)
}

fn term_expression(c: &mut Cursor<'_>) -> Result<NumericValueExpression, ParseError> {
    term(c).map(NumericValueExpression::Term)
}

/// Parse the `~` prefix level: `~` binds a whole term, tighter than every
/// binary bitwise and additive operator. Falls back to a plain term.
fn unary_expression(c: &mut Cursor<'_>) -> Result<NumericValueExpression, ParseError> {
    let start = c.pos();
    if c.eat(b'~') {
        c.skip_ws();
        match term_expression(c) {
            Ok(inner) => return Ok(NumericValueExpression::BitwiseNot(Box::new(inner))),
            Err(_) => c.rewind(start),
        }
    }
    term_expression(c)
}

type BinaryBuild =
    fn(Box<NumericValueExpression>, Box<NumericValueExpression>) -> NumericValueExpression;

/// Left-fold one binary precedence level: `operand (op operand)*` with
/// optional whitespace around each operator. A trailing operator with no
/// right-hand operand is put back.
fn fold_binary(
    c: &mut Cursor<'_>,
    operand: fn(&mut Cursor<'_>) -> Result<NumericValueExpression, ParseError>,
    ops: &[(u8, BinaryBuild)],
) -> Result<NumericValueExpression, ParseError> {
    let mut acc = operand(c)?;
    loop {
        let mark = c.pos();
        c.skip_ws();
        let Some(build) = c
            .peek()
            .and_then(|byte| ops.iter().find(|&&(op, _)| op == byte))
            .map(|&(_, build)| build)
        else {
            c.rewind(mark);
            break;
        };
        c.bump();
        c.skip_ws();
        match operand(c) {
            Ok(rhs) => acc = build(Box::new(acc), Box::new(rhs)),
            Err(_) => {
                c.rewind(mark);
                break;
            }
        }
    }
    Ok(acc)
}

fn bitwise_and_expression(c: &mut Cursor<'_>) -> Result<NumericValueExpression, ParseError> {
    fold_binary(
        c,
        unary_expression,
        &[(b'&', NumericValueExpression::BitwiseAnd as BinaryBuild)],
    )
}

fn bitwise_xor_expression(c: &mut Cursor<'_>) -> Result<NumericValueExpression, ParseError> {
    fold_binary(
        c,
        bitwise_and_expression,
        &[(b'^', NumericValueExpression::BitwiseXor as BinaryBuild)],
    )
}

fn bitwise_or_expression(c: &mut Cursor<'_>) -> Result<NumericValueExpression, ParseError> {
    fold_binary(
        c,
        bitwise_xor_expression,
        &[(b'|', NumericValueExpression::BitwiseOr as BinaryBuild)],
    )
}

/// Parse a numeric value expression (the loosest, additive level).
pub(crate) fn numeric_value_expression(
    c: &mut Cursor<'_>,
) -> Result<NumericValueExpression, ParseError> {
    fold_binary(
        c,
        bitwise_or_expression,
        &[
            (b'+', NumericValueExpression::Addition as BinaryBuild),
            (b'-', NumericValueExpression::Subtraction as BinaryBuild),
        ],
    )
}
