/// Word-count policy shared by the interactive status line and the
/// pre-flight check in the translator. The two must stay consistent.
pub const WORD_LIMIT: usize = 10_000;

/// Count whitespace-delimited words. Leading/trailing whitespace is ignored
/// and runs of whitespace collapse, so empty or blank text counts as 0.
pub fn count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn exceeds_limit(count: usize) -> bool {
    count > WORD_LIMIT
}

/// Status line like "1,234 / 10,000 words" for display after input.
pub fn format_count(count: usize) -> String {
    if exceeds_limit(count) {
        format!(
            "{} / {} words (exceeded limit!)",
            group_thousands(count),
            group_thousands(WORD_LIMIT)
        )
    } else {
        format!(
            "{} / {} words",
            group_thousands(count),
            group_thousands(WORD_LIMIT)
        )
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
