// src/domain/article/statistics.rs
use once_cell::sync::Lazy;
use regex::Regex;

static STATISTICS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)(p-?value|regression|anova|odds ratio|confidence interval|",
        r"multivariate|statistical significance)",
    ))
    .expect("statistics pattern is valid")
});

/// Whether an abstract reports some form of statistical analysis.
pub fn mentions_statistics(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    STATISTICS_PATTERN.is_match(text)
}
