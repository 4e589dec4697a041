use calclex::{BinOp, CalcToken, Func};
use thiserror::Error;

use crate::parser::RPNExpr;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum EvalErr {
    #[error("not enough operands")]
    InsufficientOperands,
    #[error("division by zero")]
    DivisionByZero,
    #[error("logarithm of a negative number")]
    NegativeLogarithm,
    #[error("unexpected token '{0}'")]
    UnknownToken(String),
    #[error("malformed expression")]
    MalformedExpression,
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in self.0.iter() {
            match *token {
                CalcToken::Number(num) => operands.push(num),
                CalcToken::BOp(op) => {
                    let r = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
                    let l = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
                    operands.push(Self::eval_op(op, l, r)?);
                }
                CalcToken::Function(func) => {
                    let arg = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
                    operands.push(Self::eval_fn(func, arg)?);
                }
                _ => return Err(EvalErr::UnknownToken(token.to_string())),
            }
        }
        match operands[..] {
            [result] => Ok(result),
            _ => Err(EvalErr::MalformedExpression),
        }
    }

    fn eval_op(op: BinOp, l: f64, r: f64) -> Result<f64, EvalErr> {
        match op {
            BinOp::Add => Ok(l + r),
            BinOp::Sub => Ok(l - r),
            BinOp::Mul => Ok(l * r),
            BinOp::Div if r == 0.0 => Err(EvalErr::DivisionByZero),
            BinOp::Div => Ok(l / r),
            BinOp::Pow => Ok(l.powf(r)),
        }
    }

    fn eval_fn(func: Func, x: f64) -> Result<f64, EvalErr> {
        match func {
            Func::Sin => Ok(x.sin()),
            Func::Cos => Ok(x.cos()),
            Func::Tan => Ok(x.tan()),
            // same policy as '/' when sin(x) is exactly zero
            Func::Cot if x.sin() == 0.0 => Err(EvalErr::DivisionByZero),
            Func::Cot => Ok(x.cos() / x.sin()),
            Func::Log | Func::Ln if x < 0.0 => Err(EvalErr::NegativeLogarithm),
            Func::Log => Ok(x.log10()),
            Func::Ln => Ok(x.ln()),
        }
    }
}
