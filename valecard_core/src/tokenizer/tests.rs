use super::{Word, tokenize};

fn texts(input: &str) -> Vec<&str> {
    tokenize(input).into_iter().map(|w| w.text).collect()
}

#[test]
fn splits_on_whitespace() {
    assert_eq!(texts("Gain two  gems"), ["Gain", "two", "gems"]);
}

#[test]
fn leading_and_trailing_whitespace_produce_nothing() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t\n ").is_empty());
    assert_eq!(texts("  one  "), ["one"]);
}

#[test]
fn first_word_is_never_spaced() {
    let words = tokenize("   lead {fire}");
    assert_eq!(words[0], Word::new("lead", false));
    assert_eq!(words[1], Word::new("{fire}", true));
}

#[test]
fn glued_brackets_are_separate_unspaced_words() {
    let words = tokenize("Получи {1камень}{1камень} урона.");
    assert_eq!(
        words,
        [
            Word::new("Получи", false),
            Word::new("{1камень}", true),
            Word::new("{1камень}", false),
            Word::new("урона.", true),
        ]
    );
}

#[test]
fn bracket_splits_surrounding_literal() {
    let words = tokenize("x{fire}.");
    assert_eq!(
        words,
        [
            Word::new("x", false),
            Word::new("{fire}", false),
            Word::new(".", false),
        ]
    );
}

#[test]
fn bracket_keeps_inner_whitespace() {
    assert_eq!(texts("a {two words} b"), ["a", "{two words}", "b"]);
}

#[test]
fn parentheses_are_brackets_too() {
    assert_eq!(texts("pay (3wp) now"), ["pay", "(3wp)", "now"]);
}

#[test]
fn delimiters_only_pair_with_their_own_closer() {
    // `{` looks for `}`; the `)` inside is ordinary content.
    assert_eq!(texts("{a)b}"), ["{a)b}"]);
    // `(` has no `)` here, so it degrades to text; `{}` is still a code.
    assert_eq!(texts("(x {y}"), ["(x", "{y}"]);
}

#[test]
fn unclosed_opener_is_literal_text() {
    let words = tokenize("abc{def ghi");
    assert_eq!(
        words,
        [
            Word::new("abc", false),
            Word::new("{def", false),
            Word::new("ghi", true),
        ]
    );
}

#[test]
fn empty_brackets_are_a_word() {
    assert_eq!(texts("{}"), ["{}"]);
}

#[test]
fn never_emits_empty_words() {
    for input in ["", " ", "{", "}{", "a  b", "(()", "{{}}"] {
        assert!(tokenize(input).iter().all(|w| !w.text.is_empty()), "{input:?}");
    }
}
