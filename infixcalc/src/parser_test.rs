use crate::parser::{RPNExpr, ShuntingParser};
use calclex::{BinOp, Bracket, CalcToken, Func, ParseError};

fn num(n: f64) -> CalcToken {
    CalcToken::Number(n)
}

fn op(c: char) -> CalcToken {
    CalcToken::BOp(BinOp::from_char(c).unwrap())
}

fn check(expr: &str, expect: &[CalcToken]) {
    let rpn = ShuntingParser::parse_str(expr).unwrap();
    assert_eq!(rpn.0.len(), expect.len(), "length of '{}'", expr);
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn.0[i], *token, "token {} of '{}'", i, expr);
    }
}

#[test]
fn test_parse1() {
    check("3+4*2/(1-5)^2^3", &[
        num(3.0),
        num(4.0),
        num(2.0),
        op('*'),
        num(1.0),
        num(5.0),
        op('-'),
        num(2.0),
        num(3.0),
        op('^'),
        op('^'),
        op('/'),
        op('+'),
    ]);
}

#[test]
fn test_parse2() {
    check("sin(cos(2)/3*5)", &[
        num(2.0),
        CalcToken::Function(Func::Cos),
        num(3.0),
        op('/'),
        num(5.0),
        op('*'),
        CalcToken::Function(Func::Sin),
    ]);
}

#[test]
fn left_assoc_ties() {
    check("8-3-2", &[num(8.0), num(3.0), op('-'), num(2.0), op('-')]);
    check("8/4*2", &[num(8.0), num(4.0), op('/'), num(2.0), op('*')]);
}

#[test]
fn unary_minus_binds_to_operand() {
    check("-2^2", &[num(-1.0), num(2.0), op('*'), num(2.0), op('^')]);
    check("2^-3", &[num(2.0), num(-1.0), num(3.0), op('*'), op('^')]);
}

#[test]
fn functions_bind_tightest() {
    check("sin(1)^2", &[num(1.0), CalcToken::Function(Func::Sin), num(2.0), op('^')]);
    check("tan{1}+ln(2)", &[
        num(1.0),
        CalcToken::Function(Func::Tan),
        num(2.0),
        CalcToken::Function(Func::Ln),
        op('+'),
    ]);
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("sin(1-2^2");
    assert_eq!(rpn, Err(ParseError::UnbalancedBrackets));

    let rpn = ShuntingParser::parse_str("(1-2^2))");
    assert_eq!(rpn, Err(ParseError::UnbalancedBrackets));

    let rpn = ShuntingParser::parse_str("5 + ?");
    assert_eq!(rpn, Err(ParseError::UnknownSymbol('?')));
}

#[test]
fn rejects_untokenized_sequences() {
    let paren = |open: bool| {
        if open { CalcToken::Open(Bracket::Paren) } else { CalcToken::Close(Bracket::Paren) }
    };
    let tests = vec![
        vec![paren(false)],
        vec![paren(true), num(1.0)],
        vec![num(1.0), op('+'), paren(false)],
        vec![CalcToken::Open(Bracket::Brace), num(1.0), paren(false)],
        vec![paren(true), CalcToken::Open(Bracket::Brace), num(1.0), paren(false)],
    ];
    for tokens in tests.iter() {
        assert_eq!(ShuntingParser::parse(tokens), Err(ParseError::UnbalancedBrackets));
    }
}

#[test]
fn display_infix() {
    let tests = vec![
        ("3+4*2/(1-5)^2^3", "3 + 4 * 2 / (1 - 5) ^ 2 ^ 3"),
        ("8-(3-2)", "8 - (3 - 2)"),
        ("(8-3)-2", "8 - 3 - 2"),
        ("(2^3)^2", "(2 ^ 3) ^ 2"),
        ("sin(1)^2+log{100}", "sin(1) ^ 2 + log(100)"),
        ("-5^2", "(-1 * 5) ^ 2"),
        ("(2)(3)", "2 * 3"),
    ];
    for (expr, printed) in tests {
        let rpn = ShuntingParser::parse_str(expr).unwrap();
        assert_eq!(rpn.to_string(), printed);
    }
}

#[test]
fn display_malformed_in_postfix_order() {
    let rpn = RPNExpr(vec![num(3.0), num(4.0)]);
    assert_eq!(rpn.to_string(), "3 4");
    let rpn = RPNExpr(vec![num(3.0), op('+')]);
    assert_eq!(rpn.to_string(), "3 +");
    let rpn = RPNExpr(vec![CalcToken::Open(Bracket::Brace)]);
    assert_eq!(rpn.to_string(), "{");
}

#[test]
fn display_long_chains() {
    let expr = vec!["1"; 200_000].join("+");
    let rpn = ShuntingParser::parse_str(&expr).unwrap();
    assert_eq!(rpn.to_string(), vec!["1"; 200_000].join(" + "));

    let expr = vec!["2"; 200_000].join("^");
    let rpn = ShuntingParser::parse_str(&expr).unwrap();
    assert_eq!(rpn.to_string(), vec!["2"; 200_000].join(" ^ "));

    let expr = format!("{}1{}", "sin(".repeat(50_000), ")".repeat(50_000));
    let rpn = ShuntingParser::parse_str(&expr).unwrap();
    assert_eq!(rpn.to_string(), expr);
}
