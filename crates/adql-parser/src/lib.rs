//! Recursive descent parser for the ADQL grammar.
//!
//! ADQL is the SQL-like query language of astronomical catalog services.
//! This crate parses its naming, literal, numeric value-expression, and
//! set-function sublanguages into `adql-ast` trees. Each entry point is a
//! pure function from an input slice to an AST plus the remaining
//! unconsumed input; alternation backtracks fully, so a failed alternative
//! never leaks partial consumption into the next one.
//!
//! The top-level statement grammar (SELECT/FROM/WHERE assembly) is not built
//! yet; it will consume these entry points as sub-parsers.

mod cursor;
mod error;
mod expr;
mod func;
mod ident;
mod literal;
pub mod position;

use adql_ast::{
    ColumnReference, Identifier, NumericValueExpression, SetFunctionSpecification, TableName,
    UnsignedLiteral, ValueExpression,
};
use tracing::{debug, trace};

use crate::cursor::Cursor;
pub use crate::error::ParseError;

fn run<'a, T>(
    input: &'a str,
    rule: &'static str,
    parse: impl FnOnce(&mut Cursor<'a>) -> Result<T, ParseError>,
) -> Result<(T, &'a str), ParseError> {
    let mut cursor = Cursor::new(input);
    match parse(&mut cursor) {
        Ok(ast) => {
            trace!(rule, consumed = cursor.pos(), "parse succeeded");
            Ok((ast, cursor.rest()))
        }
        Err(err) => {
            debug!(rule, %err, "parse failed");
            Err(err)
        }
    }
}

/// Parse an identifier (regular or delimited).
///
/// Returns the node and the remaining input.
pub fn parse_identifier(input: &str) -> Result<(Identifier, &str), ParseError> {
    run(input, "identifier", ident::identifier)
}

/// Parse a table name of up to three dot-separated identifiers.
pub fn parse_table_name(input: &str) -> Result<(TableName, &str), ParseError> {
    run(input, "table_name", ident::table_name)
}

/// Parse a column reference of up to four dot-separated identifiers.
pub fn parse_column_reference(input: &str) -> Result<(ColumnReference, &str), ParseError> {
    run(input, "column_reference", ident::column_reference)
}

/// Parse an unsigned literal: hexadecimal, double, integer, or string.
pub fn parse_unsigned_literal(input: &str) -> Result<(UnsignedLiteral, &str), ParseError> {
    run(input, "unsigned_literal", literal::unsigned_literal)
}

/// Parse a numeric value expression.
pub fn parse_numeric_value_expression(
    input: &str,
) -> Result<(NumericValueExpression, &str), ParseError> {
    run(
        input,
        "numeric_value_expression",
        expr::numeric_value_expression,
    )
}

/// Parse a value expression. Currently equivalent to the numeric grammar;
/// string, boolean, and geometry arms are future work.
pub fn parse_value_expression(input: &str) -> Result<(ValueExpression, &str), ParseError> {
    run(input, "value_expression", expr::value_expression)
}

/// Parse a set-function specification: `COUNT(*)` or a general call.
pub fn parse_set_function_specification(
    input: &str,
) -> Result<(SetFunctionSpecification, &str), ParseError> {
    run(
        input,
        "set_function_specification",
        func::set_function_specification,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points_return_remaining_input() {
        let (id, rest) = parse_identifier("ra, dec").unwrap();
        assert_eq!(id, Identifier::Regular("ra".to_owned()));
        assert_eq!(rest, ", dec");

        let (lit, rest) = parse_unsigned_literal("123 + 4").unwrap();
        assert_eq!(lit, UnsignedLiteral::Int(123));
        assert_eq!(rest, " + 4");

        let (_, rest) = parse_numeric_value_expression("1 + 2 FROM stars").unwrap();
        assert_eq!(rest, " FROM stars");
    }

    #[test]
    fn test_failure_reports_line_and_column() {
        let err = parse_numeric_value_expression("(1 +\n 2").unwrap_err();
        // The missing ')' is discovered at the end of line 2.
        assert_eq!(err.line, 2);
        assert_eq!(err.rule, "value_expression_primary");
    }

    #[test]
    fn test_failure_offset_locates_residual_input() {
        let src = "123abc";
        let err = parse_identifier(src).unwrap_err();
        assert_eq!(&src[err.offset..], "123abc");
    }

    #[test]
    fn test_value_expression_wraps_numeric() {
        let (expr, _) = parse_value_expression("5 + 3").unwrap();
        let ValueExpression::Numeric(_) = expr;
    }

    mod roundtrip {
        use super::*;

        /// Parse, render, re-parse, and compare both trees and renderings.
        fn assert_expr_roundtrip(src: &str) {
            let (ast, rest) = parse_numeric_value_expression(src).unwrap();
            assert_eq!(rest, "", "input not fully consumed: {src}");
            let rendered = ast.to_string();
            let (ast2, rest2) = parse_numeric_value_expression(&rendered).unwrap();
            assert_eq!(rest2, "", "rendering not fully consumed: {rendered}");
            assert_eq!(ast, ast2, "round-trip changed the tree for {src}");
            assert_eq!(rendered, ast2.to_string());
        }

        #[test]
        fn test_expression_roundtrip() {
            for src in [
                "42",
                "123.45",
                ".45",
                "0x1A",
                "'isn''t'",
                "-5",
                "1 * 2 * 3",
                "5 + 3 * 2",
                "(5 + 3) * 2",
                "~42 & 10",
                "1 | 2 ^ 3 & 4",
                "t.ra + s.t.dec",
                "\"proper motion\" / 2.0",
            ] {
                assert_expr_roundtrip(src);
            }
        }

        #[test]
        fn test_set_function_roundtrip() {
            for src in ["COUNT ( * )", "MAX (DISTINCT )", "AVG ( )", "SUM(ALL)"] {
                let (ast, rest) = parse_set_function_specification(src).unwrap();
                assert_eq!(rest, "");
                let rendered = ast.to_string();
                let (ast2, _) = parse_set_function_specification(&rendered).unwrap();
                assert_eq!(ast, ast2);
            }
        }

        #[test]
        fn test_error_sentinel_rendering_reparses_to_sentinel() {
            let (ast, _) = parse_unsigned_literal("0xFFFFFFFFFFFFFFFFFF").unwrap();
            assert_eq!(ast, UnsignedLiteral::Error);
            let (ast2, _) = parse_unsigned_literal(&ast.to_string()).unwrap();
            assert_eq!(ast2, UnsignedLiteral::Error);
        }
    }

    // -----------------------------------------------------------------------
    // Proptest: render/re-parse fixpoint over generated inputs
    // -----------------------------------------------------------------------

    mod proptest_roundtrip {
        use proptest::prelude::*;

        use super::*;

        fn arb_regular_ident() -> BoxedStrategy<String> {
            prop::string::string_regex("[a-z][a-z0-9_]{0,8}")
                .expect("valid regex")
                .boxed()
        }

        /// A literal as source text.
        fn arb_literal() -> BoxedStrategy<String> {
            prop_oneof![
                any::<u32>().prop_map(|n| n.to_string()),
                (0u32..10_000, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
                (0u64..=u64::MAX).prop_map(|v| format!("0x{v:X}")),
                arb_regular_ident().prop_map(|s| format!("'{s}'")),
            ]
            .boxed()
        }

        /// An expression as source text, of bounded depth.
        fn arb_expr(depth: u32) -> BoxedStrategy<String> {
            if depth == 0 {
                prop_oneof![
                    arb_literal(),
                    arb_regular_ident(),
                    (arb_regular_ident(), arb_regular_ident())
                        .prop_map(|(t, c)| format!("{t}.{c}")),
                ]
                .boxed()
            } else {
                let sub = arb_expr(depth - 1);
                prop_oneof![
                    3 => arb_expr(0),
                    3 => (sub.clone(), prop_oneof![
                        Just("+"), Just("-"), Just("*"), Just("/"),
                        Just("&"), Just("^"), Just("|"),
                    ], arb_expr(depth - 1))
                        .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                    1 => sub.clone().prop_map(|e| format!("({e})")),
                    1 => arb_expr(0).prop_map(|e| format!("~{e}")),
                    1 => arb_expr(0).prop_map(|e| format!("-({e})")),
                ]
                .boxed()
            }
        }

        proptest! {
            #[test]
            fn test_regular_identifier_roundtrip(name in arb_regular_ident()) {
                let (id, rest) = parse_identifier(&name).unwrap();
                prop_assert_eq!(rest, "");
                prop_assert_eq!(id.to_string(), name);
            }

            #[test]
            fn test_delimited_identifier_roundtrip(name in "[ -~]{0,12}") {
                let encoded = format!("\"{}\"", name.replace('"', "\"\""));
                let (id, rest) = parse_identifier(&encoded).unwrap();
                prop_assert_eq!(rest, "");
                prop_assert_eq!(&id, &Identifier::Delimited(name));
                prop_assert_eq!(id.to_string(), encoded);
            }

            #[test]
            fn test_string_literal_roundtrip(text in "[ -~]{0,12}") {
                let encoded = format!("'{}'", text.replace('\'', "''"));
                let (lit, rest) = parse_unsigned_literal(&encoded).unwrap();
                prop_assert_eq!(rest, "");
                prop_assert_eq!(lit, UnsignedLiteral::String(text));
            }

            #[test]
            fn test_expression_render_fixpoint(src in arb_expr(3)) {
                let (ast, rest) = parse_numeric_value_expression(&src).unwrap();
                prop_assert_eq!(rest, "", "input not fully consumed: {}", src);
                let rendered = ast.to_string();
                let (ast2, rest2) = parse_numeric_value_expression(&rendered).unwrap();
                prop_assert_eq!(rest2, "");
                prop_assert_eq!(&ast, &ast2, "round-trip changed the tree");
                prop_assert_eq!(rendered, ast2.to_string());
            }
        }
    }
}
