//! Free-text tokenizer shared by queries and the write path

/// Split text into lowercase runs of letters and digits.
///
/// Anything that is not alphanumeric separates tokens and is dropped.
/// Runs of a single character are discarded. Duplicates are kept in
/// order of occurrence since term frequency depends on them.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::with_capacity((lowered.len() / 6).max(8));
    let mut current = String::with_capacity(32);
    let mut run_len = 0usize;

    for c in lowered.chars() {
        if c.is_alphanumeric() {
            current.push(c);
            run_len += 1;
        } else if run_len > 0 {
            if run_len > 1 {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            run_len = 0;
        }
    }

    if run_len > 1 {
        tokens.push(current);
    }

    tokens
}

/// Token set for a record: every field followed by a space, then the tags.
pub fn generate_tokens(fields: &[&str], tags: &[String]) -> Vec<String> {
    let mut text = String::new();
    for field in fields {
        text.push_str(field);
        text.push(' ');
    }
    text.push_str(&tags.join(" "));
    tokenize(&text)
}
