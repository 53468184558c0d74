use compact_str::CompactString;

use crate::error::LayoutError;

/// One input square before layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RawItem {
    /// Intrinsic edge length in pixels
    pub size: f64,
    /// Caller data passed through to the placement (e.g. an image URL)
    pub label: Option<CompactString>,
}

impl RawItem {
    pub fn new(size: f64) -> Self {
        Self { size, label: None }
    }

    pub fn labeled(size: f64, label: &str) -> Self {
        Self {
            size,
            label: Some(CompactString::new(label)),
        }
    }
}

/// The five-image sample the grid was first tuned on.
pub fn sample_items() -> Vec<RawItem> {
    [78.0, 73.0, 50.0, 51.0, 55.0]
        .into_iter()
        .map(RawItem::new)
        .collect()
}

/// Parse one item per line: `<size> [label]`.
/// Blank lines and `#` comments are skipped. Line numbers in errors are 1-based.
pub fn parse_items(text: &str) -> Result<Vec<RawItem>, LayoutError> {
    let mut items = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (size_str, rest) = match line.split_once(char::is_whitespace) {
            Some((s, rest)) => (s, rest.trim()),
            None => (line, ""),
        };
        let size: f64 = size_str.parse().map_err(|_| LayoutError::Parse {
            line: i + 1,
            message: format!("expected a size, found '{}'", size_str),
        })?;

        items.push(RawItem {
            size,
            label: (!rest.is_empty()).then(|| CompactString::new(rest)),
        });
    }
    Ok(items)
}
