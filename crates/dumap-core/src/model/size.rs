/// Human-readable byte and entry counts for the scan summary.
///
/// Sizes are `u64` bytes everywhere; floating point only appears here, at
/// the display boundary. The JSON document always carries raw byte counts.
use std::fmt;

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;

/// Display wrapper: `ByteSize(1536)` renders as `1.5 KB`.
///
/// Binary multiples with the familiar short labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteSize(pub u64);

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        let b = bytes as f64;
        if b < KB {
            write!(f, "{bytes} B")
        } else if b < MB {
            write!(f, "{:.1} KB", b / KB)
        } else if b < GB {
            write!(f, "{:.1} MB", b / MB)
        } else if b < TB {
            write!(f, "{:.2} GB", b / GB)
        } else {
            write!(f, "{:.2} TB", b / TB)
        }
    }
}

/// Group digits in threes: `1234567` becomes `1,234,567`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
