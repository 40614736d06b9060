// Set-function (aggregate) grammar.
//
// `COUNT(*)` is a special form tried before the general call shape. Keywords
// are matched by exact-case literal prefix; the argument slot of a general
// call stays reserved until set functions embed value expressions.

use adql_ast::{SetFunction, SetFunctionSpecification, SetQuantifier};

use crate::cursor::Cursor;
use crate::error::ParseError;

/// Parse a set-function specification: `COUNT(*)` or a general call.
pub(crate) fn set_function_specification(
    c: &mut Cursor<'_>,
) -> Result<SetFunctionSpecification, ParseError> {
    let start = c.pos();
    if let Ok(spec) = count_all(c) {
        return Ok(spec);
    }
    c.rewind(start);
    general_set_function(c)
}

/// Parse `COUNT ( * )` with optional interior whitespace.
fn count_all(c: &mut Cursor<'_>) -> Result<SetFunctionSpecification, ParseError> {
    if !c.eat_str("COUNT") {
        return Err(c.error("count_all", "expected COUNT"));
    }
    c.skip_ws();
    if !c.eat(b'(') {
        return Err(c.error("count_all", "expected '('"));
    }
    c.skip_ws();
    if !c.eat(b'*') {
        return Err(c.error("count_all", "expected '*'"));
    }
    c.skip_ws();
    if !c.eat(b')') {
        return Err(c.error("count_all", "expected ')'"));
    }
    Ok(SetFunctionSpecification::CountAll)
}

/// Parse a general set function: keyword, `(`, optional quantifier, `)`.
pub(crate) fn general_set_function(
    c: &mut Cursor<'_>,
) -> Result<SetFunctionSpecification, ParseError> {
    let function = set_function_name(c)?;
    c.skip_ws();
    if !c.eat(b'(') {
        return Err(c.error("general_set_function", "expected '('"));
    }
    c.skip_ws();
    let quantifier = set_quantifier(c);
    c.skip_ws();
    // Reserved argument expression slot.
    if !c.eat(b')') {
        return Err(c.error("general_set_function", "expected ')'"));
    }
    Ok(SetFunctionSpecification::General {
        function,
        quantifier,
    })
}

fn set_function_name(c: &mut Cursor<'_>) -> Result<SetFunction, ParseError> {
    const KEYWORDS: [(&str, SetFunction); 5] = [
        ("AVG", SetFunction::Average),
        ("COUNT", SetFunction::Count),
        ("MAX", SetFunction::Maximum),
        ("MIN", SetFunction::Minimum),
        ("SUM", SetFunction::Sum),
    ];
    for (keyword, function) in KEYWORDS {
        if c.eat_str(keyword) {
            return Ok(function);
        }
    }
    Err(c.error(
        "set_function",
        "expected AVG, COUNT, MAX, MIN, or SUM",
    ))
}

fn set_quantifier(c: &mut Cursor<'_>) -> Option<SetQuantifier> {
    if c.eat_str("DISTINCT") {
        c.skip_ws();
        Some(SetQuantifier::Distinct)
    } else if c.eat_str("ALL") {
        c.skip_ws();
        Some(SetQuantifier::All)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<SetFunctionSpecification, ParseError> {
        let mut c = Cursor::new(src);
        set_function_specification(&mut c)
    }

    #[test]
    fn test_count_all() {
        assert_eq!(parse("COUNT(*)").unwrap(), SetFunctionSpecification::CountAll);
        assert_eq!(
            parse("COUNT ( * )").unwrap(),
            SetFunctionSpecification::CountAll
        );
    }

    #[test]
    fn test_count_general_falls_back() {
        // No `*` inside, so the special form backtracks and the general form
        // wins.
        assert_eq!(
            parse("COUNT(DISTINCT )").unwrap(),
            SetFunctionSpecification::General {
                function: SetFunction::Count,
                quantifier: Some(SetQuantifier::Distinct),
            }
        );
    }

    #[test]
    fn test_general_set_functions() {
        assert_eq!(
            parse("AVG ( )").unwrap(),
            SetFunctionSpecification::General {
                function: SetFunction::Average,
                quantifier: None,
            }
        );
        assert_eq!(
            parse("MAX (DISTINCT )").unwrap(),
            SetFunctionSpecification::General {
                function: SetFunction::Maximum,
                quantifier: Some(SetQuantifier::Distinct),
            }
        );
        assert_eq!(
            parse("MIN(ALL)").unwrap(),
            SetFunctionSpecification::General {
                function: SetFunction::Minimum,
                quantifier: Some(SetQuantifier::All),
            }
        );
        assert_eq!(
            parse("SUM()").unwrap(),
            SetFunctionSpecification::General {
                function: SetFunction::Sum,
                quantifier: None,
            }
        );
    }

    #[test]
    fn test_unknown_function_fails() {
        let err = parse("MEDIAN(*)").unwrap_err();
        assert_eq!(err.rule, "set_function");
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(parse("count(*)").is_err());
        assert!(parse("MAX(distinct )").is_err());
    }

    #[test]
    fn test_malformed_argument_list_fails() {
        assert!(parse("SUM(").is_err());
        assert!(parse("AVG").is_err());
    }
}
