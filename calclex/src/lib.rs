mod scanner;
mod token;
mod calc_tokenizer;

pub use scanner::Scanner;
pub use token::{Assoc, BinOp, Bracket, CalcToken, Func, LEFT_ASSOC_BOUNDARY};
pub use calc_tokenizer::{tokenize, CalcTokenizer, ParseError};
