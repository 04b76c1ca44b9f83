//=========================================================================
// Block Parser
//
// Reads the engine's block-structured text format into a tree of generic
// `Block` records. The parser knows nothing about objects or components;
// the blueprint layer gives meaning to names and properties.
//
// Grammar (one construct per line):
// ```text
// <Name | spec, spec>      block header (last '>' on the line closes it)
//     key = value          property (split at the first '=')
//     // comment           skipped
//     token                free-form line, stored in `other`
//     <Child>              nested block
//     </Child>             closes the innermost open block
// </Name>
// ```
//
// Closing tags are positional: the label after `</` is never checked, so
// `</Anything>` closes whatever block is currently open.
//
//=========================================================================

//=== Module Declarations =================================================

mod block;
mod error;
mod reader;

//=== Public API ==========================================================

pub use block::{Block, Property};
pub use error::ParseError;
pub use reader::Parser;

//=== Whitespace Helpers ==================================================

/// Characters the format treats as insignificant around tokens.
pub const WHITESPACE: &[char] = &[' ', '\n', '\r', '\t'];

/// Removes leading and trailing format whitespace.
pub fn trim(text: &str) -> &str {
    text.trim_matches(WHITESPACE)
}

/// Removes leading format whitespace.
pub fn trim_start(text: &str) -> &str {
    text.trim_start_matches(WHITESPACE)
}

/// Removes trailing format whitespace.
pub fn trim_end(text: &str) -> &str {
    text.trim_end_matches(WHITESPACE)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_only_format_whitespace() {
        assert_eq!(trim("\t  value \r\n"), "value");
        assert_eq!(trim_start("  a b  "), "a b  ");
        assert_eq!(trim_end("  a b  "), "  a b");
    }

    #[test]
    fn trimming_keeps_other_unicode_spaces() {
        // Non-breaking space is content, not layout.
        assert_eq!(trim("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
    }
}
