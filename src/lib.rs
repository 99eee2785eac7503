#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::Error;

pub mod errors;
pub mod lexer;
pub mod parser;

/// Locates the line containing `offset` in `source`.
///
/// Returns the 1-based line number, the line's text, and the column of the
/// offset within that line. Offsets at or past the end of the source (an
/// error at Eof) clamp to the final byte.
pub fn get_line_at_offset(source: &str, offset: usize) -> (usize, String, usize) {
    let offset = offset.min(source.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return (line_number, line.to_string(), offset - start);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

/// Prints a diagnostic for `error` with the offending line and a caret:
///
/// ```text
/// Error: UnrecognisedCharacter (unexpected character '@' (offset 11))
/// -> assets/src1.txt
///   |
/// 2 | int a @ 3;
///   | ------^
/// ```
pub fn display_error(error: &Error, file: &Path, source: &str) {
    let (line, line_text, line_pos) = get_line_at_offset(source, error.offset());

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("Error: {} ({})", error.error_name(), error);
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_offset, remove_starting_whitespace};

    #[test]
    fn test_get_line_at_offset() {
        let source = "int a;\nint b;\na = 1;\n";

        let (line_number, line, line_pos) = get_line_at_offset(source, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "int a;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = get_line_at_offset(source, 11);
        assert_eq!(line_number, 2);
        assert_eq!(line, "int b;\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_at_offset_clamps_past_the_end() {
        let source = "int a;";
        let (line_number, line, line_pos) = get_line_at_offset(source, 100);
        assert_eq!(line_number, 1);
        assert_eq!(line, "int a;");
        assert_eq!(line_pos, 5);

        let (line_number, _, line_pos) = get_line_at_offset("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (trimmed, removed) = remove_starting_whitespace("    a = 1;");
        assert_eq!(trimmed, "a = 1;");
        assert_eq!(removed, 4);

        let (trimmed, removed) = remove_starting_whitespace("a = 1;");
        assert_eq!(trimmed, "a = 1;");
        assert_eq!(removed, 0);
    }
}
