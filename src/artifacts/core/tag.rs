//! Report line prefixes
//!
//! Every line the reconciler prints starts with one of these tags so the
//! output can be grepped or parsed by scripts:
//!
//! | Tag   | Meaning                                   |
//! |-------|-------------------------------------------|
//! | `[C]` | checkout from the current commit          |
//! | `[R]` | removal of an untracked file              |
//! | `[!]` | warning, nothing was changed              |
//! | `[I]` | information                               |
//! | `[E]` | error, the file was skipped               |

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Checkout,
    Remove,
    Warning,
    Info,
    Error,
}

impl From<&Tag> for &str {
    fn from(tag: &Tag) -> Self {
        match tag {
            Tag::Checkout => "[C]",
            Tag::Remove => "[R]",
            Tag::Warning => "[!]",
            Tag::Info => "[I]",
            Tag::Error => "[E]",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag_str: &str = self.into();
        let colored_str = match self {
            Tag::Checkout => tag_str.green(),
            Tag::Remove => tag_str.green(),
            Tag::Warning => tag_str.yellow(),
            Tag::Info => tag_str.normal(),
            Tag::Error => tag_str.red(),
        };
        write!(f, "{}", colored_str)
    }
}
