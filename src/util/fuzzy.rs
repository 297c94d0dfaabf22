//! String similarity for nomination deduplication.
//!
//! Scores are token-sort ratios in `[0, 100]`: both strings are lowercased,
//! whitespace-tokenized and token-sorted before a normalized Levenshtein
//! comparison, so word order and casing never cost points.

use crate::model::idol::Idol;

/// Default similarity threshold for suggesting a near-match.
pub const DEFAULT_CUTOFF: u8 = 75;

/// Token-sort similarity ratio between two strings, from 0 (disjoint) to
/// 100 (identical up to case and word order).
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let a = sorted_tokens(a);
    let b = sorted_tokens(b);

    if a == b {
        return 100;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let longest = a_chars.len().max(b_chars.len());
    if longest == 0 {
        return 100;
    }

    let distance = levenshtein(&a_chars, &b_chars);
    (100.0 * (1.0 - distance as f64 / longest as f64)).round() as u8
}

/// Finds the candidate most similar to `target`, if any scores at or above
/// `cutoff`. Ties are broken in favor of the earliest candidate.
pub fn best_match<'a, I>(target: &Idol, candidates: I, cutoff: u8) -> Option<&'a Idol>
where
    I: IntoIterator<Item = &'a Idol>,
{
    let target_name = target.full_name();
    let mut best: Option<(&'a Idol, u8)> = None;

    for candidate in candidates {
        let score = token_sort_ratio(&target_name, &candidate.full_name());
        if score < cutoff {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(idol, _)| idol)
}

fn sorted_tokens(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut tokens: Vec<&str> = lowered.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(token_sort_ratio("Aespa Karina", "Aespa Karina"), 100);
    }

    #[test]
    fn case_differences_score_100() {
        assert_eq!(token_sort_ratio("red velvet irene", "Red Velvet IRENE"), 100);
    }

    #[test]
    fn word_order_is_ignored() {
        assert_eq!(token_sort_ratio("Karina Aespa", "Aespa Karina"), 100);
    }

    #[test]
    fn disjoint_tokens_score_below_cutoff() {
        assert!(token_sort_ratio("Aespa Karina", "Blackpink Rose") < DEFAULT_CUTOFF);
    }

    #[test]
    fn single_typo_scores_high() {
        assert!(token_sort_ratio("aespa karinna", "Aespa Karina") >= DEFAULT_CUTOFF);
    }

    #[test]
    fn best_match_returns_closest_candidate() {
        let candidates = vec![
            Idol::new("Blackpink", "Rose"),
            Idol::new("Aespa", "Karina"),
            Idol::new("Aespa", "Winter"),
        ];

        let target = Idol::new("aespa", "karinna");
        let found = best_match(&target, &candidates, DEFAULT_CUTOFF);
        assert_eq!(found, Some(&candidates[1]));
    }

    #[test]
    fn best_match_respects_cutoff() {
        let candidates = vec![Idol::new("Blackpink", "Rose")];
        let target = Idol::new("Aespa", "Karina");
        assert_eq!(best_match(&target, &candidates, DEFAULT_CUTOFF), None);
    }

    #[test]
    fn best_match_prefers_earliest_on_tie() {
        let candidates = vec![
            Idol::new("Aespa", "Karina"),
            Idol::new("aespa", "karina"),
        ];
        let target = Idol::new("AESPA", "KARINA");
        let found = best_match(&target, &candidates, DEFAULT_CUTOFF);
        assert!(std::ptr::eq(found.unwrap(), &candidates[0]));
    }
}
