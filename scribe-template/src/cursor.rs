//! Character cursor with 1-based line and column tracking.

#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// The character before the current one.
    pub(crate) fn prev(&self) -> Option<char> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.chars.get(i).copied())
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume `s` if the input continues with it.
    pub(crate) fn eat(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            for _ in s.chars() {
                self.bump();
            }
            true
        } else {
            false
        }
    }

    pub(crate) fn starts_with(&self, s: &str) -> bool {
        s.chars()
            .enumerate()
            .all(|(i, c)| self.peek_nth(i) == Some(c))
    }

    /// Consume characters while `pred` holds.
    pub(crate) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.bump();
        }
        out
    }

    /// Returns true if only spaces or tabs precede the current position on
    /// its line.
    pub(crate) fn at_line_start(&self) -> bool {
        self.chars[..self.pos]
            .iter()
            .rev()
            .take_while(|c| **c != '\n')
            .all(|c| *c == ' ' || *c == '\t')
    }

    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    pub(crate) fn column(&self) -> u32 {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.bump();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.bump();
        cursor.bump();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_eat_and_prev() {
        let mut cursor = Cursor::new("@* x *@");
        assert!(!cursor.eat("@@"));
        assert!(cursor.eat("@*"));
        assert_eq!(cursor.prev(), Some('*'));
        assert_eq!(cursor.take_while(|c| c != '*'), " x ");
        assert!(cursor.eat("*@"));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_at_line_start() {
        let mut cursor = Cursor::new("x\n  @using");
        assert!(cursor.at_line_start());
        cursor.bump();
        assert!(!cursor.at_line_start());
        cursor.bump();
        cursor.bump();
        cursor.bump();
        assert!(cursor.at_line_start());
    }
}
