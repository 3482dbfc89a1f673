//! Text shaping helpers for report cells.

/// Width at which long special-ability descriptions are hard-wrapped.
pub const DESCRIPTION_WRAP: usize = 75;

/// Collapse newlines/extra whitespace into single spaces.
pub fn compact_line(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-case the first letter of every whitespace-separated word and
/// lower-case the rest.
pub fn title_case(input: &str) -> String {
    compact_line(input)
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case the first character and lower-case the remainder.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Split into fixed-size chunks of `width` characters. Existing line breaks
/// are kept; each line is chunked on its own.
pub fn wrap_chars(input: &str, width: usize) -> Vec<String> {
    if width == 0 || input.is_empty() {
        return vec![input.to_string()];
    }
    input
        .split('\n')
        .flat_map(|line| {
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                return vec![String::new()];
            }
            chars
                .chunks(width)
                .map(|chunk| chunk.iter().collect())
                .collect()
        })
        .collect()
}
