const INDENT: &str = "  ";

/// Indentation-aware text buffer used to emit GraphQL selection sets.
///
/// A [`QueryWriter`] is owned by exactly one compilation pass. Nesting is
/// only ever changed through [`QueryWriter::scope()`], which brackets the
/// body it runs, so every `{` it writes is matched by a `}` at the same
/// indentation level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryWriter {
    buf: String,
    level: usize,
}

/// Position in a [`QueryWriter`] that output can be rolled back to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WriterCheckpoint {
    len: usize,
    level: usize,
}

impl QueryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    pub fn checkpoint(&self) -> WriterCheckpoint {
        WriterCheckpoint {
            len: self.buf.len(),
            level: self.level,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_bytes()
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// The current nesting level (`0` outside of any scope).
    pub fn level(&self) -> usize {
        self.level
    }

    /// Discard everything written since `checkpoint` was taken.
    pub fn rollback(&mut self, checkpoint: WriterCheckpoint) {
        self.buf.truncate(checkpoint.len);
        self.level = checkpoint.level;
    }

    /// Write `"<label> {"` (or a bare `"{"` when `label` is empty), run
    /// `body` one level deeper, then write the closing `"}"`.
    pub fn scope<F>(&mut self, label: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        if label.is_empty() {
            self.write_line(&["{"]);
        } else {
            self.write_line(&[label, "{"]);
        }
        self.level += 1;
        body(self);
        self.level -= 1;
        self.write_line(&["}"]);
    }

    /// Write one indented line made of `tokens` joined by a single space.
    pub fn write_line(&mut self, tokens: &[&str]) {
        for _ in 0..self.level {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(&tokens.join(" "));
        self.buf.push('\n');
    }
}

impl std::fmt::Display for QueryWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buf)
    }
}
