//! Member scoping strategies

/// How much text the member patterns of a declaration run over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberScope {
    /// From the declaration keyword to end of file.
    ///
    /// Members of every later declaration in the same file are also
    /// attributed to this one. Kept as the default so existing
    /// `index.json` consumers see unchanged output.
    #[default]
    ToEndOfFile,
    /// From the declaration keyword to the brace closing its body.
    ///
    /// Braces are counted without regard to strings or comments.
    Braced,
}

impl MemberScope {
    /// Slice of `text` that members of the declaration matched at
    /// `start..open_brace_end` are collected from.
    ///
    /// `open_brace_end` is the offset just past the declaration's `{`.
    #[must_use]
    pub fn body<'a>(&self, text: &'a str, start: usize, open_brace_end: usize) -> &'a str {
        match self {
            Self::ToEndOfFile => &text[start..],
            Self::Braced => &text[start..braced_body_end(text, open_brace_end)],
        }
    }
}

/// Offset just past the `}` that balances an already-opened `{`.
///
/// Scanning starts at `from` with a depth of one. Returns `text.len()` when
/// the braces never balance.
#[must_use]
pub fn braced_body_end(text: &str, from: usize) -> usize {
    let mut depth = 1usize;
    for (offset, byte) in text.as_bytes()[from..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return from + offset + 1;
                }
            }
            _ => {}
        }
    }
    text.len()
}
