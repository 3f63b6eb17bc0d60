//! Format code caching.
//!
//! A workbook uses a handful of distinct format codes across thousands of
//! cells, so compiled formats are kept by source string. Entries are never
//! evicted.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::ast::NumberFormat;

/// Process-wide cache behind [`crate::compile_format`].
static GLOBAL: Lazy<FormatCache> = Lazy::new(FormatCache::new);

/// A concurrent map from format code to its compiled form.
///
/// Reads do not block each other. Two threads compiling the same new code
/// may both parse it; the first insert wins and both get that copy.
#[derive(Debug, Default)]
pub struct FormatCache {
    formats: DashMap<String, Arc<NumberFormat>>,
}

impl FormatCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a compiled format, parsing and inserting it on a miss.
    pub fn get_or_parse(&self, format_code: &str) -> Arc<NumberFormat> {
        if let Some(format) = self.formats.get(format_code) {
            return Arc::clone(format.value());
        }

        log::trace!("format cache miss for {format_code:?}");
        let parsed = Arc::new(NumberFormat::parse(format_code));
        let entry = self
            .formats
            .entry(format_code.to_string())
            .or_insert(parsed);
        Arc::clone(entry.value())
    }

    /// Number of distinct format codes held.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn clear(&self) {
        self.formats.clear();
    }
}

/// Get or parse a format code through the process-wide cache.
pub fn get_or_parse(format_code: &str) -> Arc<NumberFormat> {
    GLOBAL.get_or_parse(format_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_if_absent() {
        let cache = FormatCache::new();
        assert!(cache.is_empty());

        let first = cache.get_or_parse("0.00");
        let second = cache.get_or_parse("0.00");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        cache.get_or_parse("#,##0");
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
