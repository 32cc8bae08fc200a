use probabilistic_interleave::evaluation::attribute_clicks;
use probabilistic_interleave::{
    evaluate, InterleavingError, InterleavingMethod, Probabilistic, Ranking, Scoreboard,
};
use proptest::prelude::*;

fn alternating() -> Ranking<&'static str> {
    Ranking::from_parts(vec!["a", "b", "c", "d"], 2, vec![0, 1, 0, 1]).unwrap()
}

#[test]
fn single_click_credits_its_source() {
    assert_eq!(evaluate(&alternating(), &[0]).unwrap(), vec![1, 0]);
}

#[test]
fn equal_clicks_are_a_tie() {
    assert_eq!(evaluate(&alternating(), &[0, 1]).unwrap(), vec![0, 0]);
}

#[test]
fn majority_source_wins() {
    assert_eq!(evaluate(&alternating(), &[0, 2]).unwrap(), vec![1, 0]);
}

#[test]
fn no_clicks_is_a_tie() {
    assert_eq!(evaluate(&alternating(), &[]).unwrap(), vec![0, 0]);
}

#[test]
fn rankers_tied_for_first_all_win() {
    let ranking = Ranking::from_parts(vec![1, 2, 3, 4], 3, vec![0, 1, 2, 0]).unwrap();
    assert_eq!(evaluate(&ranking, &[1, 2]).unwrap(), vec![0, 1, 1]);
    assert_eq!(attribute_clicks(&ranking, &[1, 2]).unwrap(), vec![0, 1, 1]);
}

#[test]
fn click_outside_ranking_is_rejected() {
    let err = evaluate(&alternating(), &[4]).unwrap_err();
    assert!(matches!(err, InterleavingError::InvalidArgument(_)));
}

#[test]
fn from_parts_checks_attributions() {
    assert!(Ranking::from_parts(vec![1, 2], 2, vec![0]).is_err());
    assert!(Ranking::from_parts(vec![1, 2], 2, vec![0, 3]).is_err());
}

#[test]
fn method_evaluates_its_own_rankings() {
    let mut method = Probabilistic::seeded(3.0, 42).unwrap();
    let ranking = method.interleave(&[1, 2, 3], &[4, 5, 6]).unwrap();

    let clicked_ranker = ranking.rank_to_ranker_index()[0];
    let outcome = method.evaluate(&ranking, &[0]).unwrap();

    let mut expected = vec![0u8; 2];
    expected[clicked_ranker] = 1;
    assert_eq!(outcome, expected);
}

#[test]
fn scoreboard_tallies_outcomes() {
    let ranking = alternating();
    let mut scoreboard = Scoreboard::new(2);

    scoreboard.record_clicks(&ranking, &[0]).unwrap();
    scoreboard.record_clicks(&ranking, &[0, 2, 1]).unwrap();
    scoreboard.record_clicks(&ranking, &[1]).unwrap();
    scoreboard.record_clicks(&ranking, &[]).unwrap();

    assert_eq!(scoreboard.wins(), &[2, 1]);
    assert_eq!(scoreboard.ties(), 1);
    assert_eq!(scoreboard.impressions(), 4);
    assert_eq!(scoreboard.win_rate(0), Some(0.5));
    assert_eq!(scoreboard.win_rate(1), Some(0.25));
    assert_eq!(scoreboard.win_rate(2), None);
    assert_eq!(scoreboard.leaders(), vec![0]);
}

#[test]
fn scoreboard_rejects_malformed_outcomes() {
    let mut scoreboard = Scoreboard::new(3);
    assert!(scoreboard.record(&[1, 0]).is_err());
    assert!(scoreboard.record(&[0, 2, 0]).is_err());
    assert_eq!(scoreboard.impressions(), 0);
    assert_eq!(scoreboard.win_rate(0), None);
    assert!(scoreboard.leaders().is_empty());
}

proptest! {
    #[test]
    fn click_order_does_not_matter(
        attributions in prop::collection::vec(0usize..4, 1..16),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..12),
    ) {
        let documents: Vec<usize> = (0..attributions.len()).collect();
        let ranking = Ranking::from_parts(documents, 4, attributions.clone()).unwrap();
        let clicks: Vec<usize> = picks.iter().map(|pick| pick.index(attributions.len())).collect();

        let mut reversed = clicks.clone();
        reversed.reverse();
        let mut sorted = clicks.clone();
        sorted.sort_unstable();

        let outcome = evaluate(&ranking, &clicks).unwrap();
        prop_assert_eq!(&outcome, &evaluate(&ranking, &reversed).unwrap());
        prop_assert_eq!(&outcome, &evaluate(&ranking, &sorted).unwrap());
        prop_assert_eq!(outcome.len(), 4);
    }
}
