// src/exec/split.rs

//! Shell-style word splitting.
//!
//! Follows POSIX shell quoting rules closely enough for command lines found
//! in config files and console parameters:
//!
//! - unquoted spaces, tabs and newlines separate words (runs collapse);
//! - `'...'` is taken literally;
//! - `"..."` is literal except that `\"` and `\\` are unescaped;
//! - an unquoted `\x` yields `x`;
//! - quoted and unquoted pieces glue together (`a'b c'd` is one word);
//! - `''` / `""` produce an empty word.
//!
//! No expansion of any kind happens (`$`, `*`, `~` and `#` are plain text).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("no closing quotation (unterminated {0} quote)")]
    UnterminatedQuote(char),

    #[error("no escaped character after trailing backslash")]
    TrailingEscape,
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split `input` into words.
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut current = String::new();
    // Tracks whether a word has started, so that `''` still yields a word.
    let mut in_word = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(SplitError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err(SplitError::UnterminatedQuote('"')),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(SplitError::UnterminatedQuote('"')),
                    }
                }
            }
            '\\' => match chars.next() {
                Some(ch) => {
                    in_word = true;
                    current.push(ch);
                }
                None => return Err(SplitError::TrailingEscape),
            },
            c if is_separator(c) => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Final argument vector: the template's words followed by the extra words.
pub fn compose_argv(template: &str, extra: &str) -> Result<Vec<String>, SplitError> {
    let mut argv = split(template)?;
    argv.extend(split(extra)?);
    Ok(argv)
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Quote a single word so that [`split`] returns it unchanged.
pub fn quote(word: &str) -> String {
    if !word.is_empty() && word.chars().all(is_safe_char) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r#"'"'"'"#))
}

/// Render an argument vector back into a single command line.
pub fn join<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| quote(w.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
