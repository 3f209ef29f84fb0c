//! Lexicon-based sentiment scoring.
//!
//! Scores text by counting polarity-bearing words against small positive and
//! negative word lists, flipping the sign when the preceding token negates.
//! The result is the mean polarity over matched words, always in [-1, 1];
//! text with no lexicon hits scores 0.

const POSITIVE: &[&str] = &[
    "amazing",
    "awesome",
    "best",
    "brilliant",
    "delightful",
    "effective",
    "excellent",
    "fantastic",
    "good",
    "great",
    "happy",
    "helpful",
    "impressive",
    "love",
    "loved",
    "outstanding",
    "perfect",
    "pleasant",
    "recommend",
    "reliable",
    "satisfied",
    "superb",
    "useful",
    "valuable",
    "wonderful",
];

const NEGATIVE: &[&str] = &[
    "annoying",
    "awful",
    "bad",
    "broken",
    "confusing",
    "disappointed",
    "disappointing",
    "dislike",
    "dreadful",
    "failure",
    "hate",
    "hated",
    "horrible",
    "poor",
    "sad",
    "slow",
    "terrible",
    "unhappy",
    "unreliable",
    "useless",
    "waste",
    "worst",
    "wrong",
];

const NEGATORS: &[&str] = &["not", "no", "never", "neither", "nor", "cannot"];

/// Polarity of `text` in [-1, 1]; negative-to-positive tone.
pub fn polarity(text: &str) -> f64 {
    let tokens: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect();

    let mut score = 0.0;
    let mut matched = 0u32;

    for (i, token) in tokens.iter().enumerate() {
        let word_score = if POSITIVE.contains(&token.as_str()) {
            1.0
        } else if NEGATIVE.contains(&token.as_str()) {
            -1.0
        } else {
            continue;
        };

        let negated = i
            .checked_sub(1)
            .map(|p| NEGATORS.contains(&tokens[p].as_str()) || tokens[p].ends_with("n't"))
            .unwrap_or(false);

        score += if negated { -word_score } else { word_score };
        matched += 1;
    }

    if matched == 0 {
        return 0.0;
    }

    score / f64::from(matched)
}
