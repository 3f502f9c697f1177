//! Reading heightmaps from text.
//!
//! Cells are separated by whitespace, commas or `|`. Outside brackets a
//! line break ends a row. Inside brackets a closing `]` ends a row, so a
//! nested-list literal parses the same on one line or across several.
//! `#` starts a comment that runs to the end of the line. Rows with no
//! cells are skipped.

use crate::error::ParseError;
use crate::prepare::prepare_grid;
use tarn_core::HeightMap;

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Cell(&'a str),
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '|')
}

/// Split one comment-free line into brackets and cell tokens.
fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        let boundary = is_separator(c) || c == '[' || c == ']';
        if boundary {
            if let Some(s) = start.take() {
                out.push(Token::Cell(&line[s..i]));
            }
            match c {
                '[' => out.push(Token::Open),
                ']' => out.push(Token::Close),
                _ => {}
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        out.push(Token::Cell(&line[s..]));
    }
    out
}

fn finish_row(rows: &mut Vec<Vec<u32>>, row: &mut Vec<u32>) {
    if !row.is_empty() {
        rows.push(std::mem::take(row));
    }
}

/// Parse `text` into rows and normalize them with [`prepare_grid`].
///
/// # Examples
///
/// ```
/// use tarn_grid::parse_grid;
///
/// let map = parse_grid("[[1, 1, 1], [1, 0, 1], [1, 1, 1]]").unwrap();
/// assert_eq!((map.length(), map.width()), (3, 3));
/// assert_eq!(map.height(1, 1), 0);
/// ```
pub fn parse_grid(text: &str) -> Result<HeightMap, ParseError> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut depth = 0usize;
    let mut line = 0;
    for (n, raw) in text.lines().enumerate() {
        line = n + 1;
        let content = raw.split('#').next().unwrap_or_default();
        for token in tokenize(content) {
            match token {
                Token::Open => depth += 1,
                Token::Close => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(ParseError::UnbalancedBracket { line })?;
                    finish_row(&mut rows, &mut row);
                }
                Token::Cell(cell) => {
                    let value = cell.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
                        line,
                        token: cell.to_string(),
                    })?;
                    row.push(value);
                }
            }
        }
        if depth == 0 {
            finish_row(&mut rows, &mut row);
        }
    }
    if depth != 0 {
        return Err(ParseError::UnbalancedBracket { line });
    }
    log::debug!("parsed {} rows", rows.len());
    Ok(prepare_grid(rows)?)
}
