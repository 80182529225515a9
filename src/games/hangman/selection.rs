//! Secret selection for a new round.

use super::RoundError;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks one candidate uniformly at random.
///
/// The random source is supplied by the caller so tests can pin it.
///
/// # Errors
///
/// Returns [`RoundError::EmptyCandidateList`] if there is nothing to pick.
#[instrument(skip(candidates, rng), fields(count = candidates.len()))]
pub fn choose_secret_string<'a, R>(
    candidates: &'a [String],
    rng: &mut R,
) -> Result<&'a str, RoundError>
where
    R: Rng + ?Sized,
{
    let chosen = candidates.choose(rng).ok_or(RoundError::EmptyCandidateList)?;
    debug!(len = chosen.len(), "Secret chosen");
    Ok(chosen.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_candidates_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            choose_secret_string(&[], &mut rng).unwrap_err(),
            RoundError::EmptyCandidateList
        );
    }

    #[test]
    fn test_seeded_choice_is_deterministic() {
        let candidates: Vec<String> = ["alpha", "beta", "gamma", "delta"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let first = choose_secret_string(&candidates, &mut StdRng::seed_from_u64(42))
            .unwrap()
            .to_string();
        let second = choose_secret_string(&candidates, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
        assert!(candidates.contains(&first));
    }

    #[test]
    fn test_single_candidate_always_chosen() {
        let candidates = vec!["only".to_string()];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(choose_secret_string(&candidates, &mut rng).unwrap(), "only");
        }
    }
}
