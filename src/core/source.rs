/// Pure position information in scanned source files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position plus the source line it points into, for cargo-style excerpts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceContext {
    pub location: SourceLocation,
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_context_accessors() {
        let loc = SourceLocation::new("./app/page.tsx", 10, 5);
        let ctx = SourceContext::new(loc, "  return t('home.title');");
        assert_eq!(ctx.file_path(), "./app/page.tsx");
        assert_eq!(ctx.line(), 10);
        assert_eq!(ctx.col(), 5);
        assert_eq!(ctx.source_line, "  return t('home.title');");
    }

    #[test]
    fn test_source_location_ordering() {
        let a = SourceLocation::new("a.tsx", 3, 1);
        let b = SourceLocation::new("a.tsx", 10, 1);
        let c = SourceLocation::new("b.tsx", 1, 1);
        assert!(a < b);
        assert!(b < c);
    }
}
