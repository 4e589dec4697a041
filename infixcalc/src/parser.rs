use calclex::{tokenize, Assoc, Bracket, CalcToken, ParseError};
use log::trace;

#[derive(PartialEq, Clone, Debug)]
pub struct RPNExpr(pub Vec<CalcToken>);

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&tokenize(expr)?)
    }

    /// Shunting-yard over an infix token sequence.
    ///
    /// The input isn't trusted to come from the tokenizer, bracket nesting
    /// is checked again here.
    pub fn parse(tokens: &[CalcToken]) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for &token in tokens {
            match token {
                CalcToken::Number(_) => out.push(token),
                CalcToken::Open(_) => stack.push(token),
                CalcToken::Close(kind) => Self::close_group(kind, &mut stack, &mut out)?,
                CalcToken::BOp(_) | CalcToken::Function(_) => {
                    if let Some((prec_rhs, assoc_rhs)) = token.precedence() {
                        while let Some((prec_lhs, _)) = stack.last().and_then(CalcToken::precedence) {
                            let pops = prec_lhs > prec_rhs
                                || (prec_lhs == prec_rhs && assoc_rhs == Assoc::Left);
                            if !pops {
                                break;
                            }
                            if let Some(top) = stack.pop() {
                                trace!("{} yields to {}", top, token);
                                out.push(top);
                            }
                        }
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                CalcToken::Open(_) | CalcToken::Close(_) => {
                    return Err(ParseError::UnbalancedBrackets)
                }
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }

    // pop operators until the matching opener, which is discarded
    fn close_group(
        kind: Bracket,
        stack: &mut Vec<CalcToken>,
        out: &mut Vec<CalcToken>,
    ) -> Result<(), ParseError> {
        loop {
            match stack.pop() {
                Some(CalcToken::Open(open)) if open == kind => return Ok(()),
                Some(CalcToken::Open(_)) | None => return Err(ParseError::UnbalancedBrackets),
                Some(op) => out.push(op),
            }
        }
    }
}
