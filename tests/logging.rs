use probabilistic_interleave::logging::init_logging;
use probabilistic_interleave::{InterleavingMethod, Probabilistic};

#[test]
fn logging_installs_once_and_engine_runs_under_it() {
    init_logging("probabilistic_interleave=trace");
    assert!(!init_logging("warn"));

    let mut method = Probabilistic::seeded(3.0, 2).unwrap();
    let ranking = method
        .multileave(&[vec![1, 2, 3], vec![3, 4, 5], vec![6, 1, 7]])
        .unwrap();
    assert_eq!(method.evaluate(&ranking, &[0]).unwrap().iter().sum::<u8>(), 1);
}
