// tests/split_words.rs

use proptest::prelude::*;
use shellcmd::exec::{compose_argv, join, quote, split, SplitError};

fn words(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn splits_on_whitespace_and_collapses_runs() {
    assert_eq!(split("echo  hello\t world\n").unwrap(), words(&["echo", "hello", "world"]));
    assert_eq!(split("   ").unwrap(), Vec::<String>::new());
    assert_eq!(split("").unwrap(), Vec::<String>::new());
}

#[test]
fn single_quotes_are_literal() {
    assert_eq!(split(r#"'a b' c"#).unwrap(), words(&["a b", "c"]));
    assert_eq!(split(r#"'a\b "c"'"#).unwrap(), words(&[r#"a\b "c""#]));
}

#[test]
fn double_quotes_unescape_only_quote_and_backslash() {
    assert_eq!(split(r#""say \"hi\"""#).unwrap(), words(&[r#"say "hi""#]));
    assert_eq!(split(r#""a\\b""#).unwrap(), words(&[r"a\b"]));
    assert_eq!(split(r#""a\nb""#).unwrap(), words(&[r"a\nb"]));
    assert_eq!(split(r#""it's""#).unwrap(), words(&["it's"]));
}

#[test]
fn unquoted_backslash_escapes_next_char() {
    assert_eq!(split(r"a\ b c").unwrap(), words(&["a b", "c"]));
    assert_eq!(split(r"\'x").unwrap(), words(&["'x"]));
}

#[test]
fn quoted_pieces_join_adjacent_text() {
    assert_eq!(split(r#"a'b c'd"#).unwrap(), words(&["ab cd"]));
    assert_eq!(split(r#"--name="two words""#).unwrap(), words(&["--name=two words"]));
}

#[test]
fn empty_quotes_produce_empty_word() {
    assert_eq!(split("a '' b").unwrap(), words(&["a", "", "b"]));
    assert_eq!(split(r#""""#).unwrap(), words(&[""]));
}

#[test]
fn hash_and_dollar_are_plain_text() {
    assert_eq!(split("echo #x $HOME *").unwrap(), words(&["echo", "#x", "$HOME", "*"]));
}

#[test]
fn unterminated_quotes_and_trailing_escape_are_errors() {
    assert_eq!(split("'open"), Err(SplitError::UnterminatedQuote('\'')));
    assert_eq!(split(r#"say "open"#), Err(SplitError::UnterminatedQuote('"')));
    assert_eq!(split(r#""ends with \"#), Err(SplitError::UnterminatedQuote('"')));
    assert_eq!(split(r"trailing\"), Err(SplitError::TrailingEscape));
}

#[test]
fn compose_appends_params_after_template() {
    let argv = compose_argv("echo hello", "'a b' c").unwrap();
    assert_eq!(argv, words(&["echo", "hello", "a b", "c"]));

    let argv = compose_argv("ls -l", "").unwrap();
    assert_eq!(argv, words(&["ls", "-l"]));
}

#[test]
fn quote_leaves_safe_words_alone() {
    assert_eq!(quote("plain-word_1.txt"), "plain-word_1.txt");
    assert_eq!(quote(""), "''");
    assert_eq!(quote("a b"), "'a b'");
    assert_eq!(quote("it's"), r#"'it'"'"'s'"#);
}

proptest! {
    #[test]
    fn join_then_split_returns_the_same_words(
        ws in proptest::collection::vec(any::<String>(), 0..6)
    ) {
        let line = join(&ws);
        prop_assert_eq!(split(&line).unwrap(), ws);
    }

    #[test]
    fn compose_appends_extra_words_after_template_words(
        template in proptest::collection::vec("[a-z0-9 ]{1,8}", 1..4),
        extra in proptest::collection::vec("[a-z0-9'\" ]{0,8}", 0..4),
    ) {
        let argv = compose_argv(&join(&template), &join(&extra)).unwrap();

        let mut expected = template;
        expected.extend(extra);
        prop_assert_eq!(argv, expected);
    }

    #[test]
    fn unquoted_simple_words_split_on_whitespace(
        ws in proptest::collection::vec("[A-Za-z0-9_./=-]{1,10}", 0..8),
        sep in "[ \t]{1,3}",
    ) {
        let line = ws.join(&sep);
        prop_assert_eq!(split(&line).unwrap(), ws);
    }
}
