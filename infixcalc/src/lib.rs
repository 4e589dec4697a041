use log::debug;

pub use calclex::{tokenize, BinOp, Bracket, CalcToken, Func, ParseError};
pub use error::{ErrorClass, EvaluationError};
pub use parser::{RPNExpr, ShuntingParser};
pub use rpneval::EvalErr;

pub mod parser;
#[cfg(test)]
mod parser_test;

mod error;
mod rpnprint;
mod rpneval;

/// Reorder an infix token sequence into postfix.
pub fn to_postfix(tokens: &[CalcToken]) -> Result<RPNExpr, ParseError> {
    ShuntingParser::parse(tokens)
}

pub fn evaluate_postfix(rpn: &RPNExpr) -> Result<f64, EvalErr> {
    rpn.eval()
}

/// Decimal rendering of a result, negative zero shows as `0`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return format!("0");
    }
    format!("{}", value)
}

/// Evaluate an infix expression such as `3 + 4 * sin(0)`.
///
/// Every call owns its token sequence and stacks, so this is safe to call
/// from any number of threads.
pub fn evaluate(expr: &str) -> Result<String, EvaluationError> {
    let tokens = tokenize(expr)?;
    debug!("tokens: {:?}", tokens);
    let rpn = to_postfix(&tokens)?;
    debug!("postfix: {:?}", rpn.0);
    let value = rpn.eval()?;
    debug!("{} = {}", rpn, value);
    Ok(format_result(value))
}
