/// Forward-only cursor over a stream of lines with one line of lookahead.
///
/// A line taken with [`LineCursor::next_if`] is consumed only when the
/// predicate accepts it; otherwise it stays buffered for the next read.
pub struct LineCursor<I: Iterator> {
    inner: I,
    peeked: Option<I::Item>,
    /// Number of lines handed out so far.
    consumed: usize,
}

impl<I, S> LineCursor<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            peeked: None,
            consumed: 0,
        }
    }

    /// Takes the next line, preferring the buffered one.
    pub fn next_line(&mut self) -> Option<S> {
        let line = self.peeked.take().or_else(|| self.inner.next())?;
        self.consumed += 1;
        Some(line)
    }

    /// Looks at the next line without consuming it.
    pub fn peek<'a>(&'a mut self) -> Option<&'a str>
    where
        S: 'a,
    {
        if self.peeked.is_none() {
            self.peeked = self.inner.next();
        }
        self.peeked.as_ref().map(|line| line.as_ref())
    }

    /// Consumes the next line only if `accept` returns true for it.
    pub fn next_if(&mut self, accept: impl FnOnce(&str) -> bool) -> Option<S> {
        let accepted = self.peek().is_some_and(accept);
        if accepted { self.next_line() } else { None }
    }

    /// 1-based number of the most recently consumed line.
    pub fn line_number(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_line_walks_the_stream() {
        let mut cur = LineCursor::new(["a", "b"].into_iter());
        assert_eq!(cur.next_line(), Some("a"));
        assert_eq!(cur.line_number(), 1);
        assert_eq!(cur.next_line(), Some("b"));
        assert_eq!(cur.next_line(), None);
        assert_eq!(cur.line_number(), 2);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cur = LineCursor::new(["a", "b"].into_iter());
        assert_eq!(cur.peek(), Some("a"));
        assert_eq!(cur.peek(), Some("a"));
        assert_eq!(cur.line_number(), 0);
        assert_eq!(cur.next_line(), Some("a"));
    }

    #[test]
    fn rejected_line_stays_buffered() {
        let mut cur = LineCursor::new(["comment", "* bullet"].into_iter());
        assert_eq!(cur.next_if(|l| !l.starts_with('*')), Some("comment"));
        assert_eq!(cur.next_if(|l| !l.starts_with('*')), None);
        assert_eq!(cur.next_line(), Some("* bullet"));
    }

    #[test]
    fn owned_lines() {
        let mut cur = LineCursor::new(vec!["x".to_string()].into_iter());
        assert_eq!(cur.peek(), Some("x"));
        assert_eq!(cur.next_line().as_deref(), Some("x"));
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn peek_borrows_from_owned_buffered_line() {
        let mut cur = LineCursor::new(vec!["* a".to_string(), "b".to_string()].into_iter());
        let peeked = cur.peek().map(str::to_owned);
        assert_eq!(peeked.as_deref(), Some("* a"));
        assert_eq!(cur.next_if(|l| l.starts_with('*')).as_deref(), Some("* a"));
        assert_eq!(cur.next_if(|l| l.starts_with('*')), None);
        assert_eq!(cur.peek(), Some("b"));
    }

    #[test]
    fn empty_stream() {
        let mut cur = LineCursor::new(std::iter::empty::<&str>());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.next_if(|_| true), None);
        assert_eq!(cur.next_line(), None);
    }
}
