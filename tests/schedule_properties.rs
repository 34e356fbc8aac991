//! Property tests for the schedule generators.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tournament_engine::{
    circle_schedule, generate_knockout_matches, MatchFormat, Participant, Tournament,
    TournamentFormat,
};

fn roster(format: TournamentFormat, n: usize) -> Tournament {
    let mut t = Tournament::new("Props", format, MatchFormat::TimeLimited, 10);
    t.participants = (0..n).map(|i| Participant::new(format!("P{i}")).id).collect();
    t
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn circle_method_meets_every_pair_once(n in 2usize..40) {
        let ids: Vec<usize> = (0..n).collect();
        let stages = circle_schedule(&ids);

        let expected_stages = if n % 2 == 0 { n - 1 } else { n };
        prop_assert_eq!(stages.len(), expected_stages);

        let mut pairs = HashSet::new();
        for stage in &stages {
            prop_assert_eq!(stage.len(), n / 2);
            let mut seen = HashSet::new();
            for &(a, b) in stage {
                prop_assert!(a != b);
                prop_assert!(seen.insert(a) && seen.insert(b));
                prop_assert!(pairs.insert((a.min(b), a.max(b))));
            }
        }
        prop_assert_eq!(pairs.len(), n * (n - 1) / 2);
    }

    #[test]
    fn knockout_tree_has_the_right_shape(exp in 2u32..=8, seed in any::<u64>()) {
        let n = 1usize << exp;
        let t = roster(TournamentFormat::Knockout, n);
        let matches = generate_knockout_matches(&t, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(matches.len(), n - 1);
        for stage in 0..exp {
            let in_stage: Vec<_> = matches.iter().filter(|m| m.stage == stage).collect();
            prop_assert_eq!(in_stage.len(), n >> (stage + 1));
            let serials: HashSet<_> = in_stage.iter().map(|m| m.serial_number).collect();
            prop_assert_eq!(serials.len(), in_stage.len());
            prop_assert!(in_stage.iter().all(|m| m.is_seeded() == (stage == 0)));
        }

        let seeded: HashSet<_> = matches
            .iter()
            .filter(|m| m.stage == 0)
            .flat_map(|m| [m.player_a.unwrap(), m.player_b.unwrap()])
            .collect();
        prop_assert_eq!(seeded.len(), n);
    }
}
