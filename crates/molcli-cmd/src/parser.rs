//! Argument tokenizer using nom
//!
//! Splits the argument part of a command line into complete words and the
//! word under construction.
//!
//! # Supported Syntax
//!
//! - Whitespace separated words: `#1/A cartoon`
//! - Quoted strings: `"path with spaces.pdb"`, `'single quoted'`
//! - Backslash escapes inside quotes: `"say \"hi\""`
//! - Quotes glued to bare text: `name="two words"`
//!
//! Words are returned as raw slices of the input, quotes included. An
//! unterminated quote makes the rest of the line the word under construction.

use nom::{
    branch::alt,
    bytes::complete::{escaped, take_while1},
    character::complete::{anychar, char, none_of},
    combinator::{opt, recognize},
    multi::many1,
    sequence::tuple,
    IResult,
};

/// Words of a partially typed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWords<'a> {
    /// Complete words, followed by whitespace
    pub words: Vec<&'a str>,
    /// Word under construction; empty after trailing whitespace
    pub last: &'a str,
}

/// Split a line into complete words and the in-progress last word
///
/// # Example
/// ```
/// use molcli_cmd::split_words;
///
/// let line = split_words("#1 color \"my file");
/// assert_eq!(line.words, vec!["#1", "color"]);
/// assert_eq!(line.last, "\"my file");
///
/// let line = split_words("#1 color ");
/// assert_eq!(line.words, vec!["#1", "color"]);
/// assert_eq!(line.last, "");
/// ```
pub fn split_words(line: &str) -> LineWords<'_> {
    let mut words = Vec::new();
    let mut rest = line;
    loop {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            return LineWords { words, last: "" };
        }
        match word(trimmed) {
            Ok(("", w)) => return LineWords { words, last: w },
            Ok((after, w)) if after.starts_with(char::is_whitespace) => {
                words.push(w);
                rest = after;
            }
            _ => return LineWords { words, last: trimmed },
        }
    }
}

fn double_quoted(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('"'),
        opt(escaped(none_of("\"\\"), '\\', anychar)),
        char('"'),
    )))(input)
}

fn single_quoted(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('\''),
        opt(escaped(none_of("'\\"), '\\', anychar)),
        char('\''),
    )))(input)
}

fn bare(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '"' && c != '\'')(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((double_quoted, single_quoted, bare))))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        let line = split_words("  #1/A   cartoon on");
        assert_eq!(line.words, vec!["#1/A", "cartoon"]);
        assert_eq!(line.last, "on");
    }

    #[test]
    fn test_empty() {
        let line = split_words("");
        assert!(line.words.is_empty());
        assert_eq!(line.last, "");

        let line = split_words("   ");
        assert!(line.words.is_empty());
        assert_eq!(line.last, "");
    }

    #[test]
    fn test_quoted_word_with_spaces() {
        let line = split_words("\"my dir/a.pdb\" format pdb");
        assert_eq!(line.words, vec!["\"my dir/a.pdb\"", "format"]);
        assert_eq!(line.last, "pdb");
    }

    #[test]
    fn test_escaped_quote() {
        let line = split_words(r#"'it\'s here' x"#);
        assert_eq!(line.words, vec![r#"'it\'s here'"#]);
        assert_eq!(line.last, "x");
    }

    #[test]
    fn test_glued_quotes() {
        let line = split_words("name=\"two words\" ");
        assert_eq!(line.words, vec!["name=\"two words\""]);
        assert_eq!(line.last, "");
    }

    #[test]
    fn test_unterminated_quote() {
        let line = split_words("open 'my documents/pro");
        assert_eq!(line.words, vec!["open"]);
        assert_eq!(line.last, "'my documents/pro");

        let line = split_words("open ab\"cd ef");
        assert_eq!(line.words, vec!["open"]);
        assert_eq!(line.last, "ab\"cd ef");
    }

    #[test]
    fn test_empty_quotes() {
        let line = split_words("\"\" x");
        assert_eq!(line.words, vec!["\"\""]);
        assert_eq!(line.last, "x");
    }
}
