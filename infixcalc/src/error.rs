use std::fmt;
use thiserror::Error;

use calclex::ParseError;
use crate::rpneval::EvalErr;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum EvaluationError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorClass {
    Lexical,
    Structural,
    Evaluation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorClass::Lexical => write!(f, "Lexical"),
            ErrorClass::Structural => write!(f, "Structural"),
            ErrorClass::Evaluation => write!(f, "Evaluation"),
        }
    }
}

impl EvaluationError {
    pub fn class(&self) -> ErrorClass {
        match *self {
            EvaluationError::Parse(ParseError::UnbalancedBrackets) => ErrorClass::Structural,
            EvaluationError::Parse(_) => ErrorClass::Lexical,
            EvaluationError::Eval(EvalErr::MalformedExpression) => ErrorClass::Structural,
            EvaluationError::Eval(_) => ErrorClass::Evaluation,
        }
    }
}
