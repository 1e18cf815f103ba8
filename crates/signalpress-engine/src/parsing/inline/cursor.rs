/// Byte cursor over one inline run.
///
/// Holds a local index into `s` but reports and accepts absolute positions
/// (`base + index`), so spans it produces point straight into the document.
/// Every delimiter it searches for is ASCII, so positions it returns are
/// always char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    base: usize,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Absolute position of the next unread byte.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos())
    }

    /// Byte at an absolute position, if it lies inside this run.
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        let local = pos.checked_sub(self.base)?;
        self.s.as_bytes().get(local).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().is_some_and(|rest| rest.starts_with(pat))
    }

    /// First `pat` at least `skip` bytes past the cursor.
    pub fn find(&self, pat: &[u8], skip: usize) -> Option<usize> {
        self.find_from(pat, self.pos() + skip)
    }

    /// First `pat` at or after absolute position `from`.
    pub fn find_from(&self, pat: &[u8], from: usize) -> Option<usize> {
        if pat.is_empty() {
            return None;
        }
        let local = from.checked_sub(self.base)?;
        self.s
            .as_bytes()
            .get(local..)?
            .windows(pat.len())
            .position(|w| w == pat)
            .map(|at| from + at)
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    pub fn advance(&mut self, n: usize) {
        self.i += n;
    }

    /// Jumps to an absolute position, typically one returned by `find`.
    pub fn seek(&mut self, pos: usize) {
        self.i = pos - self.base;
    }

    fn rest(&self) -> Option<&'a [u8]> {
        self.s.as_bytes().get(self.i..)
    }
}
