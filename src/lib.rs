#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::Error;

pub mod errors;
pub mod lexer;

/// Character offset into a source, paired with the source's name.
#[derive(Debug, Clone)]
pub struct Position(pub usize, pub Rc<String>);

/// Finds the line containing the character at `position`.
///
/// Returns the 1-based line number, the line text (with its newline) and
/// the character column within that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> sample.lang
          |
        2 | let a = @;
          | --------^
    */

    let position = error.get_position();
    let mut out = format!(
        "Error: {} ({})\n-> {}\n",
        error.get_error_name(),
        error.get_tip(),
        position.1
    );

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (string.chars().skip(start).collect(), start)
}
