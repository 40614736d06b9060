//! ADQL rendering via `fmt::Display` for AST nodes.
//!
//! Every node type renders back to source text. For parser-produced trees
//! this gives the round-trip property: `parse(ast.to_string())` yields an
//! equal tree, and rendering is a fixpoint.

use std::fmt;

use crate::{
    ColumnReference, Factor, Identifier, NumericValueExpression, SetFunction,
    SetFunctionSpecification, SetQuantifier, TableName, Term, UnsignedLiteral, ValueExpression,
    ValueExpressionPrimary,
};

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular(name) => f.write_str(name),
            Self::Delimited(name) => write!(f, "\"{}\"", name.replace('"', "\"\"")),
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref catalog) = self.catalog {
            write!(f, "{catalog}.")?;
        }
        if let Some(ref schema) = self.schema {
            write!(f, "{schema}.")?;
        }
        write!(f, "{}", self.table)
    }
}

impl fmt::Display for ColumnReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref table_name) = self.table_name {
            write!(f, "{table_name}.")?;
        }
        write!(f, "{}", self.column_name)
    }
}

impl fmt::Display for UnsignedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Double(v) => {
                // Keep the decimal point so the text re-parses as a double.
                if v.fract() == 0.0 && !v.is_infinite() && !v.is_nan() {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
            Self::Hexadecimal(v) => write!(f, "0x{v:X}"),
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            // The sentinel has no source form of its own; the smallest
            // overflowing literal re-parses to the same sentinel.
            Self::Error => f.write_str("0x10000000000000000"),
        }
    }
}

impl fmt::Display for ValueExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for ValueExpressionPrimary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "{lit}"),
            Self::ColumnRef(col) => write!(f, "{col}"),
            Self::Parenthesized(expr) => write!(f, "({expr})"),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign < 0.0 {
            f.write_str("-")?;
        }
        write!(f, "{}", self.operand)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factor(factor) => write!(f, "{factor}"),
            Self::Multiplication(lhs, rhs) => write!(f, "{lhs} * {rhs}"),
            Self::Division(lhs, rhs) => write!(f, "{lhs} / {rhs}"),
        }
    }
}

impl fmt::Display for NumericValueExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(term) => write!(f, "{term}"),
            Self::BitwiseNot(inner) => write!(f, "~{inner}"),
            Self::BitwiseAnd(lhs, rhs) => write!(f, "{lhs} & {rhs}"),
            Self::BitwiseXor(lhs, rhs) => write!(f, "{lhs} ^ {rhs}"),
            Self::BitwiseOr(lhs, rhs) => write!(f, "{lhs} | {rhs}"),
            Self::Addition(lhs, rhs) => write!(f, "{lhs} + {rhs}"),
            Self::Subtraction(lhs, rhs) => write!(f, "{lhs} - {rhs}"),
        }
    }
}

impl fmt::Display for SetFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Average => "AVG",
            Self::Count => "COUNT",
            Self::Maximum => "MAX",
            Self::Minimum => "MIN",
            Self::Sum => "SUM",
        })
    }
}

impl fmt::Display for SetQuantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
        })
    }
}

impl fmt::Display for SetFunctionSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountAll => f.write_str("COUNT(*)"),
            Self::General {
                function,
                quantifier,
            } => {
                write!(f, "{function}(")?;
                if let Some(quantifier) = quantifier {
                    write!(f, "{quantifier}")?;
                }
                f.write_str(")")
            }
        }
    }
}
