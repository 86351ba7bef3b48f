//! Random strategy factory
//!
//! Half the bricks get the basic strategy. The other half get a special one:
//! usually a single leaf, sometimes a pair, and occasionally a leaf plus a
//! nested pair (three effects, never more).

use rand::Rng;

use super::strategy::CollisionStrategy;

/// Upper bound of the first roll
const BASIC_ROLL_BOUND: u32 = 100;
/// Rolls below this give the basic strategy
const BASIC_THRESHOLD: u32 = 50;
/// Upper bound of a dual coin flip
const DUAL_ROLL_BOUND: u32 = 50;
/// Dual coin flips above this come up dual (9 in 50)
const DUAL_THRESHOLD: u32 = 40;
/// Upper bound of a special leaf roll, split into four equal bands
const LEAF_ROLL_BOUND: u32 = 40;

/// Builds a strategy for each brick from an injected RNG
#[derive(Debug)]
pub struct StrategyFactory<R> {
    rng: R,
}

impl<R: Rng> StrategyFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a strategy for one brick
    pub fn create_strategy(&mut self) -> CollisionStrategy {
        let rng = &mut self.rng;
        compose_strategy(&mut |bound| rng.random_range(0..bound))
    }
}

/// Compose a strategy from a source of rolls, where `roll(n)` yields a value
/// in `[0, n)`
pub(crate) fn compose_strategy(roll: &mut impl FnMut(u32) -> u32) -> CollisionStrategy {
    if roll(BASIC_ROLL_BOUND) < BASIC_THRESHOLD {
        return CollisionStrategy::Basic;
    }

    if !dual_coin(roll) {
        return special_leaf(roll);
    }

    let first = special_leaf(roll);
    // Each of the pair gets its own chance to turn dual again
    if dual_coin(roll) || dual_coin(roll) {
        let second = special_leaf(roll);
        let third = special_leaf(roll);
        CollisionStrategy::composite(first, CollisionStrategy::composite(second, third))
    } else {
        let second = special_leaf(roll);
        CollisionStrategy::composite(first, second)
    }
}

fn dual_coin(roll: &mut impl FnMut(u32) -> u32) -> bool {
    roll(DUAL_ROLL_BOUND) > DUAL_THRESHOLD
}

fn special_leaf(roll: &mut impl FnMut(u32) -> u32) -> CollisionStrategy {
    match roll(LEAF_ROLL_BOUND) {
        0..10 => CollisionStrategy::Puck,
        10..20 => CollisionStrategy::MockPaddle,
        20..30 => CollisionStrategy::Turbo,
        _ => CollisionStrategy::Heart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::strategy::StrategyKind;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::VecDeque;

    /// Replay fixed rolls, checking each bound
    fn scripted(rolls: &[(u32, u32)]) -> CollisionStrategy {
        let mut queue: VecDeque<(u32, u32)> = rolls.iter().copied().collect();
        let strategy = compose_strategy(&mut |bound| {
            let (expected_bound, value) = queue.pop_front().expect("ran out of rolls");
            assert_eq!(bound, expected_bound);
            value
        });
        assert!(queue.is_empty(), "unused rolls: {:?}", queue);
        strategy
    }

    #[test]
    fn test_low_roll_is_basic() {
        assert_eq!(scripted(&[(100, 10)]), CollisionStrategy::Basic);
        assert_eq!(scripted(&[(100, 49)]), CollisionStrategy::Basic);
    }

    #[test]
    fn test_single_special_leaves() {
        assert_eq!(scripted(&[(100, 70), (50, 5), (40, 5)]).leaves(), vec![StrategyKind::Puck]);
        // Dual only strictly above 40
        assert_eq!(scripted(&[(100, 50), (50, 40), (40, 5)]), CollisionStrategy::Puck);
        assert_eq!(scripted(&[(100, 50), (50, 0), (40, 10)]), CollisionStrategy::MockPaddle);
        assert_eq!(scripted(&[(100, 50), (50, 0), (40, 29)]), CollisionStrategy::Turbo);
        assert_eq!(scripted(&[(100, 50), (50, 0), (40, 39)]), CollisionStrategy::Heart);
    }

    #[test]
    fn test_dual_pair() {
        let strategy = scripted(&[(100, 99), (50, 49), (40, 25), (50, 0), (50, 40), (40, 35)]);
        assert_eq!(
            strategy,
            CollisionStrategy::composite(CollisionStrategy::Turbo, CollisionStrategy::Heart)
        );
    }

    #[test]
    fn test_dual_triple_first_coin() {
        // First re-roll comes up dual, the second is never drawn
        let strategy = scripted(&[(100, 99), (50, 49), (40, 5), (50, 45), (40, 15), (40, 25)]);
        assert_eq!(
            strategy,
            CollisionStrategy::composite(
                CollisionStrategy::Puck,
                CollisionStrategy::composite(
                    CollisionStrategy::MockPaddle,
                    CollisionStrategy::Turbo,
                ),
            )
        );
    }

    #[test]
    fn test_dual_triple_second_coin() {
        let strategy = scripted(&[
            (100, 99),
            (50, 49),
            (40, 35),
            (50, 3),
            (50, 41),
            (40, 35),
            (40, 0),
        ]);
        assert_eq!(
            strategy.leaves(),
            vec![StrategyKind::Heart, StrategyKind::Heart, StrategyKind::Puck]
        );
        assert_eq!(strategy.depth(), 2);
    }

    #[test]
    fn test_basic_frequency_about_half() {
        let mut factory = StrategyFactory::new(Pcg32::seed_from_u64(12345));
        let trials = 20_000;
        let mut basic = 0;
        let mut triples = 0;
        for _ in 0..trials {
            let strategy = factory.create_strategy();
            if strategy == CollisionStrategy::Basic {
                basic += 1;
            }
            if strategy.leaf_count() == 3 {
                triples += 1;
            }
        }
        let basic_share = basic as f64 / trials as f64;
        assert!((0.48..0.52).contains(&basic_share), "basic share {}", basic_share);

        // 0.5 * 0.18 * 0.3276 ≈ 2.9%
        let triple_share = triples as f64 / trials as f64;
        assert!((0.02..0.04).contains(&triple_share), "triple share {}", triple_share);
    }

    proptest! {
        #[test]
        fn prop_tree_shape_bounded(seed in any::<u64>()) {
            let mut factory = StrategyFactory::new(Pcg32::seed_from_u64(seed));
            for _ in 0..64 {
                let strategy = factory.create_strategy();
                prop_assert!((1..=3).contains(&strategy.leaf_count()));
                prop_assert!(strategy.depth() <= 2);
                // Basic only ever appears alone
                if strategy.leaf_count() > 1 {
                    prop_assert!(!strategy.leaves().contains(&StrategyKind::Basic));
                }
            }
        }
    }
}
