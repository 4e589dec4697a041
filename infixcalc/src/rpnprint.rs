use calclex::{Assoc, CalcToken};
use std::collections::VecDeque;
use std::fmt;

use crate::parser::RPNExpr;

// Printed subexpression as a list of fragments, cheap to wrap and to join
// from either side, with the precedence of its outermost operator.
struct Printed {
    text: VecDeque<String>,
    prec: (usize, Assoc),
}

// leaves never need parens
const LEAF: (usize, Assoc) = (usize::MAX, Assoc::Left);

impl Printed {
    fn leaf(token: &CalcToken) -> Printed {
        Printed { text: VecDeque::from(vec![token.to_string()]), prec: LEAF }
    }

    fn wrap(mut self) -> Printed {
        self.text.push_front(format!("("));
        self.text.push_back(format!(")"));
        self
    }

    // move the shorter side into the longer one
    fn join(mut lhs: VecDeque<String>, op: String, mut rhs: VecDeque<String>) -> VecDeque<String> {
        if lhs.len() >= rhs.len() {
            lhs.push_back(op);
            lhs.extend(rhs);
            lhs
        } else {
            rhs.push_front(op);
            while let Some(piece) = lhs.pop_back() {
                rhs.push_front(piece);
            }
            rhs
        }
    }
}

impl RPNExpr {
    fn print_infix(&self) -> Option<VecDeque<String>> {
        let mut printed: Vec<Printed> = Vec::new();
        for token in self.0.iter() {
            let (prec, assoc) = match *token {
                CalcToken::Number(_) => {
                    printed.push(Printed::leaf(token));
                    continue;
                }
                CalcToken::Open(_) | CalcToken::Close(_) => return None,
                _ => token.precedence()?,
            };
            match *token {
                CalcToken::Function(func) => {
                    let arg = printed.pop()?.wrap();
                    let mut text = arg.text;
                    text.push_front(func.to_string());
                    printed.push(Printed { text, prec: (prec, assoc) });
                }
                CalcToken::BOp(op) => {
                    let rhs = printed.pop()?;
                    let lhs = printed.pop()?;
                    let lhs = if prec > lhs.prec.0 || (prec == lhs.prec.0 && assoc != Assoc::Left) {
                        lhs.wrap()
                    } else {
                        lhs
                    };
                    // NOTE: '2-(3-4)' keeps its parens, so does '2+(3+4)'
                    let rhs = if prec > rhs.prec.0 || (prec == rhs.prec.0 && assoc != Assoc::Right) {
                        rhs.wrap()
                    } else {
                        rhs
                    };
                    let text = Printed::join(lhs.text, format!(" {} ", op.symbol()), rhs.text);
                    printed.push(Printed { text, prec: (prec, assoc) });
                }
                _ => return None,
            }
        }
        if printed.len() != 1 {
            return None;
        }
        printed.pop().map(|p| p.text)
    }
}

/// Infix rendering with only the parens precedence requires. Sequences that
/// don't form a single expression are shown in postfix order.
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.print_infix() {
            Some(text) => text.iter().try_for_each(|piece| f.write_str(piece)),
            None => {
                let tokens: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
                write!(f, "{}", tokens.join(" "))
            }
        }
    }
}
