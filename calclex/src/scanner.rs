#![deny(warnings)]

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];

/// A buffered character scanner with backtracking.
///
/// Characters are pulled lazily from the source iterator. `pos` points at
/// the last consumed character of the current lexeme (-1 when nothing has
/// been consumed yet), `extract_string` hands the lexeme out and starts a
/// fresh one.
pub struct Scanner<I: Iterator<Item = char>> {
    src: I,
    buf: Vec<char>,
    pos: isize,
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        self.pos += 1;
        self.fill_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1 }
    }

    pub fn pos(&self) -> isize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<char> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).copied()
    }

    // pull from the source until pos is backed by the buffer
    fn fill_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(c) => self.buf.push(c),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// True when no characters are left after the current position.
    pub fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Drop the consumed part of the buffer, starting a new lexeme.
    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = ((self.pos + 1) as usize).min(self.buf.len());
            self.buf.drain(..n);
        }
        self.pos = -1;
    }

    pub fn extract_string(&mut self) -> String {
        let n = ((self.pos + 1).max(0) as usize).min(self.buf.len());
        let lexeme = self.buf[..n].iter().collect();
        self.ignore();
        lexeme
    }

    pub fn accept(&mut self, what: char) -> Option<char> {
        self.accept_any(&[what])
    }

    // Advance only if the next char is in the 'any' set
    pub fn accept_any(&mut self, any: &[char]) -> Option<char> {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if any.contains(&next) {
                return Some(next);
            }
        }
        self.pos = backtrack;
        None
    }

    // Skip over the 'over' set, returns whether the scanner advanced
    pub fn skip_all(&mut self, over: &[char]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }

    /// Consume `word` exactly or leave the scanner untouched.
    pub fn accept_word(&mut self, word: &str) -> bool {
        let backtrack = self.pos;
        for c in word.chars() {
            if self.next() != Some(c) {
                self.pos = backtrack;
                return false;
            }
        }
        true
    }

    pub fn ignore_ws(&mut self) {
        self.skip_all(WHITE);
        self.ignore();
    }
}
