use tracing::debug;

use crate::error::{InterleavingError, Result};
use crate::ranking::Ranking;

/// Clicks per source ranking, attributed through `rank_to_ranker_index`.
pub fn attribute_clicks<D>(ranking: &Ranking<D>, clicked_positions: &[usize]) -> Result<Vec<usize>> {
    let attributions = ranking.rank_to_ranker_index();
    let mut counts = vec![0usize; ranking.number_of_rankers()];

    for &position in clicked_positions {
        let ranker = attributions.get(position).copied().ok_or_else(|| {
            InterleavingError::invalid(format!(
                "clicked position {} is outside a ranking of length {}",
                position,
                ranking.len()
            ))
        })?;
        match counts.get_mut(ranker) {
            Some(count) => *count += 1,
            None => {
                return Err(InterleavingError::InternalInvariantViolation(format!(
                    "position {} attributed to ranker {} of {}",
                    position,
                    ranker,
                    ranking.number_of_rankers()
                )))
            }
        }
    }

    Ok(counts)
}

/// Credits every ranker tied for the most clicks, or nobody when all counts are equal.
pub fn evaluate<D>(ranking: &Ranking<D>, clicked_positions: &[usize]) -> Result<Vec<u8>> {
    let counts = attribute_clicks(ranking, clicked_positions)?;

    let (Some(&max_count), Some(&min_count)) = (counts.iter().max(), counts.iter().min()) else {
        return Ok(Vec::new());
    };

    let outcome: Vec<u8> = if max_count == min_count {
        vec![0; counts.len()]
    } else {
        counts
            .iter()
            .map(|&count| u8::from(count == max_count))
            .collect()
    };

    debug!(clicks = clicked_positions.len(), ?counts, ?outcome, "evaluated clicks");
    Ok(outcome)
}
