use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ssq_core::{check, generate, Generator, GeneratorConfig, Mode, PrizeTier};
use std::collections::HashSet;

// ── Generated combinations satisfy every ball and uniqueness rule ─────────

proptest! {
    #[test]
    fn output_has_requested_length(seed in any::<u64>(), count in 0usize..64, mode in 1u8..=2) {
        let mut rng = StdRng::seed_from_u64(seed);
        let combos = generate(&mut rng, count, mode).unwrap();
        prop_assert_eq!(combos.len(), count);
    }

    #[test]
    fn every_combination_in_range(seed in any::<u64>(), count in 1usize..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for combo in generate(&mut rng, count, 1).unwrap() {
            let reds: HashSet<u8> = combo.red_numbers().iter().copied().collect();
            prop_assert_eq!(reds.len(), 6);
            prop_assert!(reds.iter().all(|&r| (1..=33).contains(&r)));
            prop_assert!((1..=16).contains(&combo.blue_number()));
        }
    }

    #[test]
    fn no_repeated_pairs(seed in any::<u64>(), count in 1usize..128) {
        let mut rng = StdRng::seed_from_u64(seed);
        let combos = generate(&mut rng, count, 1).unwrap();
        let unique: HashSet<_> = combos.iter().collect();
        prop_assert_eq!(unique.len(), combos.len());
    }

    #[test]
    fn blue_distinct_within_span(
        seed in any::<u64>(),
        count in 1usize..80,
        span in 1usize..=16,
    ) {
        let config = GeneratorConfig { recency_span: span, ..GeneratorConfig::default() };
        let mut generator = Generator::new(config, StdRng::seed_from_u64(seed)).unwrap();
        let combos = generator.generate(count, Mode::Normal).unwrap();
        for i in 0..combos.len() {
            for j in (i + 1)..combos.len().min(i + span) {
                prop_assert_ne!(combos[i].blue_number(), combos[j].blue_number());
            }
        }
    }

    #[test]
    fn unknown_modes_rejected(seed in any::<u64>(), count in 0usize..16, mode in 3u8..) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(generate(&mut rng, count, mode).is_err());
    }
}

// ── Prize checking ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ticket_wins_first_prize_against_itself(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let combo = generate(&mut rng, 1, 1).unwrap()[0];
        prop_assert_eq!(check(&combo, &combo), Some(PrizeTier::First));
    }

    #[test]
    fn matching_is_symmetric(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let combos = generate(&mut rng, 2, 1).unwrap();
        prop_assert_eq!(combos[0].matches(&combos[1]), combos[1].matches(&combos[0]));
        prop_assert_eq!(check(&combos[0], &combos[1]), check(&combos[1], &combos[0]));
    }
}
