//! AST node types for the ADQL grammar.
//!
//! ADQL (Astronomical Data Query Language) is the SQL dialect used by
//! astronomical catalog services. `adql-parser` produces trees of these
//! nodes; every node is an immutable, independently owned value with no
//! back-references or sharing. All types implement [`fmt::Display`] so that
//! a parsed tree renders back to source text that re-parses to an equal
//! tree.

mod display;

// ---------------------------------------------------------------------------
// Identifiers and qualified names
// ---------------------------------------------------------------------------

/// A single naming unit.
///
/// Regular identifiers start with an ASCII letter and continue with ASCII
/// letters, digits, and underscores. Delimited identifiers are enclosed in
/// double quotes and may contain arbitrary characters; an embedded `"` is
/// written as `""` and stored decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Unquoted identifier, e.g. `gaia_source`.
    Regular(String),
    /// Double-quoted identifier with escapes already folded, e.g.
    /// `"proper motion"`.
    Delimited(String),
}

impl Identifier {
    /// The decoded name text, regardless of quoting form.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Regular(s) | Self::Delimited(s) => s,
        }
    }
}

/// A possibly-qualified table name like `gaiadr3.gaia_source` or
/// `ivoa.obscore.main`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName {
    /// Optional catalog qualifier (present only when a schema is too).
    pub catalog: Option<Identifier>,
    /// Optional schema qualifier.
    pub schema: Option<Identifier>,
    /// The table itself.
    pub table: Identifier,
}

impl TableName {
    /// Create an unqualified table name.
    #[must_use]
    pub fn bare(table: Identifier) -> Self {
        Self {
            catalog: None,
            schema: None,
            table,
        }
    }

    /// Build a table name from a dot-separated identifier sequence, assigning
    /// parts from the right: the last is the table, then schema, then
    /// catalog. Returns `None` for an empty sequence.
    ///
    /// Sequences longer than three silently drop their leading segments.
    #[must_use]
    pub fn from_parts(parts: Vec<Identifier>) -> Option<Self> {
        let mut rev = parts.into_iter().rev();
        let table = rev.next()?;
        let schema = rev.next();
        let catalog = rev.next();
        Some(Self {
            catalog,
            schema,
            table,
        })
    }
}

/// A reference to a column, possibly qualified by a table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnReference {
    /// Optional table qualifier, itself possibly catalog/schema qualified.
    pub table_name: Option<TableName>,
    /// The column itself.
    pub column_name: Identifier,
}

impl ColumnReference {
    /// Create an unqualified column reference.
    #[must_use]
    pub fn bare(column_name: Identifier) -> Self {
        Self {
            table_name: None,
            column_name,
        }
    }

    /// Build a column reference from a dot-separated identifier sequence by
    /// the same right-to-left rule as [`TableName::from_parts`], one level
    /// deeper: the last part is the column, the rest (up to three) form the
    /// embedded table name. Returns `None` for an empty sequence.
    #[must_use]
    pub fn from_parts(mut parts: Vec<Identifier>) -> Option<Self> {
        let column_name = parts.pop()?;
        let table_name = TableName::from_parts(parts);
        Some(Self {
            table_name,
            column_name,
        })
    }
}

// ---------------------------------------------------------------------------
// Literals
// ---------------------------------------------------------------------------

/// An unsigned literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum UnsignedLiteral {
    /// Decimal integer literal: `123`.
    Int(i64),
    /// Decimal floating-point literal: `123.45`, `.45`.
    Double(f64),
    /// Hexadecimal literal: `0x1A`.
    Hexadecimal(u64),
    /// Single-quoted string literal with `''` escapes folded: `'isn''t'`.
    String(String),
    /// Sentinel for a syntactically well-formed hexadecimal literal whose
    /// value cannot be represented (overflow, or no digits after `0x`).
    /// Distinguishes "matched but uninterpretable" from "grammar did not
    /// match"; callers surface it as a semantic error.
    Error,
}

// ---------------------------------------------------------------------------
// Value expressions
// ---------------------------------------------------------------------------

/// A value expression.
///
/// Only the numeric arm exists today; string, boolean, and geometry value
/// expressions are future grammar work.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpression {
    Numeric(NumericValueExpression),
}

/// The leaf level of the expression grammar.
///
/// `Parenthesized` is the sole recursive edge back to [`ValueExpression`];
/// the `Box` provides the indirection that closes the type cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpressionPrimary {
    Literal(UnsignedLiteral),
    ColumnRef(ColumnReference),
    Parenthesized(Box<ValueExpression>),
}

/// A signed primary: an optional unary `+`/`-` applied to a primary.
///
/// The sign is `1.0` or `-1.0`; an absent sign reads as `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    pub sign: f64,
    pub operand: ValueExpressionPrimary,
}

impl Factor {
    /// A factor with no written sign.
    #[must_use]
    pub fn unsigned(operand: ValueExpressionPrimary) -> Self {
        Self { sign: 1.0, operand }
    }
}

/// A multiplicative expression: factors left-folded over `*` and `/`.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Factor(Factor),
    Multiplication(Box<Term>, Factor),
    Division(Box<Term>, Factor),
}

/// A numeric value expression: terms combined by `~`, `&`, `^`, `|`, `+`,
/// and `-`.
///
/// Precedence, tightest first: `*`/`/` (inside [`Term`]), `~`, `&`, `^`,
/// `|`, then `+`/`-`. Binary levels are left-associative. Placing the
/// additive operators loosest is the ADQL bitwise-extension design, not
/// C-style precedence.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValueExpression {
    Term(Term),
    BitwiseNot(Box<NumericValueExpression>),
    BitwiseAnd(Box<NumericValueExpression>, Box<NumericValueExpression>),
    BitwiseXor(Box<NumericValueExpression>, Box<NumericValueExpression>),
    BitwiseOr(Box<NumericValueExpression>, Box<NumericValueExpression>),
    Addition(Box<NumericValueExpression>, Box<NumericValueExpression>),
    Subtraction(Box<NumericValueExpression>, Box<NumericValueExpression>),
}

impl NumericValueExpression {
    /// Wrap a bare factor as a full expression. Convenience for building
    /// expected trees in tests.
    #[must_use]
    pub fn from_factor(factor: Factor) -> Self {
        Self::Term(Term::Factor(factor))
    }
}

// ---------------------------------------------------------------------------
// Set functions
// ---------------------------------------------------------------------------

/// An aggregate function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetFunction {
    Average,
    Count,
    Maximum,
    Minimum,
    Sum,
}

/// The `DISTINCT` / `ALL` quantifier inside a set-function call. Absence is
/// modeled as `Option<SetQuantifier>` at the use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetQuantifier {
    Distinct,
    All,
}

/// A set-function call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SetFunctionSpecification {
    /// The special form `COUNT(*)`.
    CountAll,
    /// A general call like `MAX(DISTINCT )`. The argument expression slot is
    /// reserved until the statement grammar wires set functions into value
    /// expressions.
    General {
        function: SetFunction,
        quantifier: Option<SetQuantifier>,
    },
}
