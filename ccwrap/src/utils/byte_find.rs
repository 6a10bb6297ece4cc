// Find a pattern of bytes in a byte slice
pub trait ByteFind<P> {
    fn find(&self, pat: P) -> Option<usize>;
}

impl ByteFind<u8> for [u8] {
    #[inline]
    fn find(&self, pat: u8) -> Option<usize> {
        memchr::memchr(pat, self)
    }
}

impl ByteFind<&[u8]> for [u8] {
    #[inline]
    fn find(&self, pat: &[u8]) -> Option<usize> {
        memchr::memmem::find(self, pat)
    }
}


/// Iterator over the lines of a byte buffer that keeps each line's `\n` terminator.
///
/// The last line is yielded without a terminator if the buffer does not end in one.
/// Nothing is yielded for an empty buffer.
pub struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Lines<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { rest: buf }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }
        let end = match self.rest.find(b'\n') {
            Some(i) => i + 1,
            None => self.rest.len(),
        };
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}
