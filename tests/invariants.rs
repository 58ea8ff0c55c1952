use boss_raid::{Battle, BattleConfig, BattleError, BattlePhase, render, roster};
use combat::Combatant;
use proptest::prelude::*;

fn standard_battle(seed: u64, max_rounds: u32) -> Battle {
    Battle::new(
        roster::standard_boss().unwrap(),
        roster::standard_party().unwrap(),
        BattleConfig::default()
            .with_seed(seed)
            .with_max_rounds(max_rounds),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn health_never_negative(seed in any::<u64>()) {
        let mut battle = standard_battle(seed, 200);
        for _ in 0..200 {
            prop_assert!(battle.boss().health() >= 0);
            for hero in battle.heroes() {
                prop_assert!(hero.health() >= 0);
            }
            match battle.play_round() {
                Ok(Some(_)) => break,
                Ok(None) => {}
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }
    }

    #[test]
    fn run_ends_or_hits_the_cap(seed in any::<u64>()) {
        let mut battle = standard_battle(seed, 300);
        match battle.run() {
            Ok(outcome) => {
                prop_assert_eq!(battle.phase().outcome(), Some(outcome));
                prop_assert!(battle.round() <= 300);
            }
            Err(BattleError::RoundLimitReached { limit }) => {
                prop_assert_eq!(limit, 300);
                prop_assert_eq!(battle.phase(), BattlePhase::InProgress);
            }
            Err(e) => return Err(TestCaseError::fail(e.to_string())),
        }
    }
}

#[test]
fn test_same_seed_same_battle() {
    let mut first = standard_battle(2024, 500);
    let mut second = standard_battle(2024, 500);
    let first_result = first.run();
    let second_result = second.run();

    assert_eq!(first_result, second_result);
    assert_eq!(first.log().events(), second.log().events());
    assert_eq!(render::render_log(first.log()), render::render_log(second.log()));
}
