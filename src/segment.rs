//! Word segmentation for feeding text into the trie.
//!
//! Splits input into word-like tokens: maximal runs of letters and
//! apostrophes (so contractions like "don't" stay whole). Runs containing no
//! letter at all (stray apostrophes) are discarded. Tokens borrow from the
//! input; the tree consumes them via `token.as_bytes()`.

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '\'' || c == '\u{2019}'
}

/// Split `text` into an ordered sequence of word-like tokens.
pub fn segment(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            run_start.get_or_insert(i);
        } else if let Some(start) = run_start.take() {
            push_token(&text[start..i], &mut tokens);
        }
    }
    if let Some(start) = run_start {
        push_token(&text[start..], &mut tokens);
    }
    tokens
}

fn push_token<'a>(run: &'a str, tokens: &mut Vec<&'a str>) {
    if run.chars().any(|c| c.is_alphabetic()) {
        tokens.push(run);
    }
}
