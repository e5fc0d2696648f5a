use difflib::sequencematcher::SequenceMatcher;
use log::debug;

/// Similarity ratio in `[0, 1]` of `candidate` to `input`.
///
/// Ratcliff/Obershelp ratio `2 * M / T`: `M` is the number of chars in the
/// matching blocks and `T` the total char count of both names. Blocks are
/// found with `candidate` as the first sequence, so the ratio is not
/// symmetric in rare cases. Case-sensitive. Two empty strings score 1.
pub fn similarity(input: &str, candidate: &str) -> f64 {
    let first: Vec<char> = candidate.chars().collect();
    let second: Vec<char> = input.chars().collect();
    let total = first.len() + second.len();
    if total == 0 {
        return 1.0;
    }

    let mut matcher = SequenceMatcher::new(first.as_slice(), second.as_slice());
    let matched: usize = matcher
        .get_matching_blocks()
        .iter()
        .map(|block| block.size)
        .sum();
    2.0 * matched as f64 / total as f64
}

/// Find the candidate closest to `input`.
///
/// Only candidates scoring at least `cutoff` are considered. Ties go to the
/// lexicographically largest candidate, so the result does not depend on
/// iteration order.
pub fn find_closest_match<'a, I>(input: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in candidates {
        let score = similarity(input, candidate);
        if score < cutoff {
            continue;
        }
        best = match best {
            Some((current, best_score))
                if best_score > score || (best_score == score && current >= candidate) =>
            {
                Some((current, best_score))
            }
            _ => Some((candidate, score)),
        };
    }

    match best {
        Some((name, score)) => {
            debug!("Matched '{}' to '{}' (score {:.3})", input, name, score);
            Some(name)
        }
        None => {
            debug!("No match for '{}' at cutoff {}", input, cutoff);
            None
        }
    }
}
