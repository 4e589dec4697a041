use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bracket {
    Paren,
    Brace,
}

impl Bracket {
    pub fn open_char(self) -> char {
        match self {
            Bracket::Paren => '(',
            Bracket::Brace => '{',
        }
    }

    pub fn close_char(self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Brace => '}',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub fn from_char(c: char) -> Option<BinOp> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            '^' => Some(BinOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }
}

/// Named unary functions, always applied to a bracketed operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Cot,
    Log,
    Ln,
}

impl Func {
    pub const ALL: [Func; 6] = [Func::Sin, Func::Cos, Func::Tan, Func::Cot, Func::Log, Func::Ln];

    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Cot => "cot",
            Func::Log => "log",
            Func::Ln => "ln",
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Assoc {
    Left,
    Right,
}

/// Operators with precedence at or below this value are left associative.
pub const LEFT_ASSOC_BOUNDARY: usize = 2;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CalcToken {
    Number(f64),
    BOp(BinOp),
    Function(Func),
    Open(Bracket),
    Close(Bracket),
}

impl CalcToken {
    /// Precedence and associativity of operator tokens, `None` for operands
    /// and brackets.
    pub fn precedence(&self) -> Option<(usize, Assoc)> {
        let prec = match *self {
            CalcToken::BOp(BinOp::Add) | CalcToken::BOp(BinOp::Sub) => 1,
            CalcToken::BOp(BinOp::Mul) | CalcToken::BOp(BinOp::Div) => 2,
            CalcToken::BOp(BinOp::Pow) => 3,
            CalcToken::Function(_) => 4,
            _ => return None,
        };
        let assoc = if prec <= LEFT_ASSOC_BOUNDARY { Assoc::Left } else { Assoc::Right };
        Some((prec, assoc))
    }

    pub fn is_operator(&self) -> bool {
        self.precedence().is_some()
    }
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CalcToken::Number(n) => write!(f, "{}", n),
            CalcToken::BOp(op) => write!(f, "{}", op.symbol()),
            CalcToken::Function(func) => write!(f, "{}", func),
            CalcToken::Open(b) => write!(f, "{}", b.open_char()),
            CalcToken::Close(b) => write!(f, "{}", b.close_char()),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_table() {
        let add = CalcToken::BOp(BinOp::Add).precedence();
        let sub = CalcToken::BOp(BinOp::Sub).precedence();
        let mul = CalcToken::BOp(BinOp::Mul).precedence();
        let pow = CalcToken::BOp(BinOp::Pow).precedence();
        let ln = CalcToken::Function(Func::Ln).precedence();
        assert_eq!(add, Some((1, Assoc::Left)));
        assert_eq!(add, sub);
        assert_eq!(mul, Some((2, Assoc::Left)));
        assert_eq!(pow, Some((3, Assoc::Right)));
        assert_eq!(ln, Some((4, Assoc::Right)));
        assert_eq!(CalcToken::Number(1.0).precedence(), None);
        assert!(!CalcToken::Open(Bracket::Brace).is_operator());
    }

    #[test]
    fn display() {
        let tokens = [
            CalcToken::Function(Func::Cot),
            CalcToken::Open(Bracket::Brace),
            CalcToken::Number(-1.5),
            CalcToken::BOp(BinOp::Div),
            CalcToken::Close(Bracket::Brace),
        ];
        let text: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(text, vec!["cot", "{", "-1.5", "/", "}"]);
    }
}
