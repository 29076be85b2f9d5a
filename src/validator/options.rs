use super::patterns;

/// More options than this with extreme or negative wording is an issue
const MAX_FLAGGED_OPTIONS: usize = 2;

/// Audit a raw option list for signs of unequal plausibility.
///
/// Works on option text alone, so unlike the per-question analysis it
/// cannot exempt the answer key. An empty list yields no issues.
pub fn validate_answer_options<S: AsRef<str>>(options: &[S]) -> Vec<String> {
    let mut issues = Vec::new();

    if options.is_empty() {
        return issues;
    }

    let lengths: Vec<usize> = options.iter().map(|o| o.as_ref().chars().count()).collect();
    let average = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    let max = lengths.iter().copied().max().unwrap_or(0);
    let min = lengths.iter().copied().min().unwrap_or(0);

    if (max - min) as f64 > average * 0.5 {
        issues.push(
            "Answer options vary significantly in length - may indicate obvious wrong answers"
                .to_string(),
        );
    }

    let extreme_count = options
        .iter()
        .filter(|o| patterns::has_extreme_language(o.as_ref()))
        .count();
    if extreme_count > MAX_FLAGGED_OPTIONS {
        issues.push("Too many options contain extreme language".to_string());
    }

    let negative_count = options
        .iter()
        .filter(|o| patterns::has_negation(o.as_ref()))
        .count();
    if negative_count > MAX_FLAGGED_OPTIONS {
        issues.push("Too many negative options - may create obvious wrong answers".to_string());
    }

    issues
}
