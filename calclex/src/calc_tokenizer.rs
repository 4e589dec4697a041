#![deny(warnings)]

use std::collections::VecDeque;
use thiserror::Error;

use crate::scanner::Scanner;
use crate::token::{BinOp, Bracket, CalcToken, Func};

static NUMERIC: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];

#[derive(Error, Clone, PartialEq, Debug)]
pub enum ParseError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(char),
    #[error("unexpected operator '{0}'")]
    UnexpectedOperator(char),
    #[error("unary minus without an operand")]
    DanglingUnaryOperator,
    #[error("empty brackets")]
    EmptyGroup,
    #[error("function '{0}' must be followed by a bracketed operand")]
    FunctionWithoutGroup(Func),
    #[error("unbalanced brackets")]
    UnbalancedBrackets,
}

/// Streaming tokenizer for calculator expressions.
///
/// A unary minus is rewritten as `(-1 * operand)`: the synthetic open
/// paren, `-1` and `*` are emitted right away while the closing paren is
/// owed until the operand is complete. Owed closes are tracked by the user
/// bracket depth they were opened at, so nested unary minuses unwind in
/// order once their operand finishes at that depth.
///
/// The iterator stops after yielding the first error.
pub struct CalcTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
    out: VecDeque<CalcToken>,
    prev: Option<CalcToken>,
    open: Vec<Bracket>,
    unary: Vec<usize>,
    need_fill: bool,
    after_unary: bool,
    after_function: Option<Func>,
    // last lexeme was a typed closing bracket
    closed_group: bool,
    done: bool,
}

pub fn tokenize(expr: &str) -> Result<Vec<CalcToken>, ParseError> {
    CalcTokenizer::new(expr.chars()).collect()
}

impl<I: Iterator<Item = char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer {
            src: Scanner::new(source),
            out: VecDeque::new(),
            prev: None,
            open: Vec::new(),
            unary: Vec::new(),
            need_fill: false,
            after_unary: false,
            after_function: None,
            closed_group: false,
            done: false,
        }
    }

    // binary operators need a complete operand on their left
    fn allows_binary(&self) -> bool {
        matches!(self.prev, Some(CalcToken::Number(_)) | Some(CalcToken::Close(_)))
    }

    fn emit(&mut self, token: CalcToken) {
        self.need_fill = false;
        self.prev = Some(token);
        self.out.push_back(token);
    }

    // an operand just completed at the current depth, pay owed closes
    fn close_unary_scopes(&mut self) {
        let depth = self.open.len();
        while self.unary.last() == Some(&depth) {
            self.unary.pop();
            self.emit(CalcToken::Close(Bracket::Paren));
        }
    }

    fn open_unary(&mut self) {
        self.unary.push(self.open.len());
        self.emit(CalcToken::Open(Bracket::Paren));
        self.emit(CalcToken::Number(-1.0));
        self.emit(CalcToken::BOp(BinOp::Mul));
        self.after_unary = true;
    }

    fn scan_number(&mut self) -> Result<(), ParseError> {
        self.src.skip_all(NUMERIC);
        let literal = self.src.extract_string();
        match literal.parse::<f64>() {
            Ok(n) if n.is_finite() => {
                self.emit(CalcToken::Number(n));
                self.close_unary_scopes();
                Ok(())
            }
            _ => Err(ParseError::InvalidNumber(literal)),
        }
    }

    fn scan_function(&mut self) -> Option<Func> {
        let src = &mut self.src;
        let func = Func::ALL.iter().copied().find(|f| src.accept_word(f.name()))?;
        src.ignore();
        Some(func)
    }

    fn open_bracket(&mut self, kind: Bracket, closed_group: bool) {
        // (2)(3) means 2*3, owed unary closes don't count: -5(3) is not -5*3
        if closed_group {
            self.emit(CalcToken::BOp(BinOp::Mul));
        }
        self.emit(CalcToken::Open(kind));
        self.open.push(kind);
        self.need_fill = true;
    }

    fn close_bracket(&mut self, kind: Bracket) -> Result<(), ParseError> {
        if self.need_fill {
            return Err(ParseError::EmptyGroup);
        }
        if self.unary.last() == Some(&self.open.len()) {
            return Err(ParseError::DanglingUnaryOperator);
        }
        match self.open.pop() {
            Some(open) if open == kind => (),
            _ => return Err(ParseError::UnbalancedBrackets),
        }
        self.emit(CalcToken::Close(kind));
        self.close_unary_scopes();
        self.closed_group = true;
        Ok(())
    }

    fn finish(&self, after_function: Option<Func>) -> Result<(), ParseError> {
        if let Some(func) = after_function {
            return Err(ParseError::FunctionWithoutGroup(func));
        }
        if !self.open.is_empty() {
            return Err(ParseError::UnbalancedBrackets);
        }
        if !self.unary.is_empty() {
            return Err(ParseError::DanglingUnaryOperator);
        }
        Ok(())
    }

    // Scan one lexeme, returns false once the input is exhausted
    fn scan_step(&mut self) -> Result<bool, ParseError> {
        self.src.ignore_ws();
        let after_unary = std::mem::replace(&mut self.after_unary, false);
        let after_function = self.after_function.take();
        let closed_group = std::mem::replace(&mut self.closed_group, false);

        let c = match self.src.peek() {
            Some(c) => c,
            None => {
                self.finish(after_function)?;
                return Ok(false);
            }
        };
        if let Some(func) = after_function {
            if !matches!(c, '(' | '{' | '-') {
                return Err(ParseError::FunctionWithoutGroup(func));
            }
        }

        if NUMERIC.contains(&c) {
            self.scan_number()?;
            return Ok(true);
        }
        if let Some(func) = self.scan_function() {
            self.emit(CalcToken::Function(func));
            self.need_fill = true;
            self.after_function = Some(func);
            return Ok(true);
        }

        self.src.next();
        self.src.ignore();
        match c {
            '-' if !self.allows_binary() => self.open_unary(),
            '(' => self.open_bracket(Bracket::Paren, closed_group),
            '{' => self.open_bracket(Bracket::Brace, closed_group),
            ')' => self.close_bracket(Bracket::Paren)?,
            '}' => self.close_bracket(Bracket::Brace)?,
            _ => match BinOp::from_char(c) {
                Some(_) if after_unary => return Err(ParseError::DanglingUnaryOperator),
                Some(op) if op == BinOp::Pow || self.allows_binary() => {
                    self.emit(CalcToken::BOp(op))
                }
                Some(_) => return Err(ParseError::UnexpectedOperator(c)),
                None => return Err(ParseError::UnknownSymbol(c)),
            },
        }
        Ok(true)
    }
}

impl<I: Iterator<Item = char>> Iterator for CalcTokenizer<I> {
    type Item = Result<CalcToken, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.out.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            match self.scan_step() {
                Ok(true) => (),
                Ok(false) => self.done = true,
                Err(e) => {
                    self.done = true;
                    self.out.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
