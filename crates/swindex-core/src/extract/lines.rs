//! Byte offset to line number conversion

/// Precomputed line start offsets for one file.
///
/// Built once per file, then each lookup is a binary search.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// `line_starts[0] == 0` is line 1, `line_starts[1]` is one past the first `\n`, etc.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Build a line index from file content
    #[must_use]
    pub fn new(content: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();
        Self { line_starts }
    }

    /// 1-indexed line containing `byte_offset`.
    ///
    /// Equal to one plus the number of newlines before the offset.
    #[must_use]
    pub fn line_of(&self, byte_offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= byte_offset)
    }
}
