//! End-to-end generation through AppState with the bundled SRD data

use wrldbldr_gm_tools::application::ports::outbound::ReferenceTablePort;
use wrldbldr_gm_tools::{
    AppConfig, AppState, DiceRollQuery, DiceType, DifficultyTier, EncounterGeneratorService,
    EncounterQuery, ToolErrorKind, TreasureDisposition, TreasureQuery,
};

fn seeded_state(seed: u64) -> AppState {
    let config = AppConfig {
        rng_seed: Some(seed),
        ..AppConfig::default()
    };
    AppState::new(config).expect("bundled data should load")
}

#[tokio::test]
async fn seeded_sessions_replay_identically() {
    let first = seeded_state(1234);
    let second = seeded_state(1234);

    for pcs in [vec![5, 5, 5, 5], vec![11, 12, 10], vec![17, 17, 17]] {
        let query = EncounterQuery::new(pcs, DifficultyTier::High);
        let a = first.encounter_service.generate_encounter(query.clone()).await;
        let b = second.encounter_service.generate_encounter(query).await;
        assert!(a.is_success(), "{a:?}");
        assert_eq!(a, b);
    }

    let dice = DiceRollQuery::new(DiceType::D20, 10);
    assert_eq!(
        first.dice_roller_service.roll_dice(dice.clone()),
        second.dice_roller_service.roll_dice(dice)
    );
}

#[tokio::test]
async fn encounters_stay_within_budget_and_name_monsters() {
    let state = seeded_state(99);

    for _ in 0..25 {
        let result = state
            .encounter_service
            .generate_encounter(EncounterQuery::new(vec![8, 8, 9, 7], DifficultyTier::Moderate))
            .await;
        assert!(result.is_success(), "{result:?}");

        let budget = result.total_party_budget.unwrap();
        assert_eq!(budget, 1_700 + 1_700 + 2_000 + 1_300);

        let crs = result.encounter_crs.unwrap();
        assert!(!crs.is_empty());
        let spent: u32 = crs
            .iter()
            .map(|cr| state.tables.xp_by_cr().xp_of(*cr).unwrap())
            .sum();
        assert!(spent <= budget);
        assert!(budget - spent < 200, "left {} unspent", budget - spent);

        let monsters = result.monsters_by_cr.unwrap();
        for cr in &crs {
            assert!(monsters.contains_key(cr));
        }
    }
}

#[tokio::test]
async fn weak_party_is_reported() {
    let state = seeded_state(5);
    let result = state
        .encounter_service
        .generate_encounter(EncounterQuery::new(vec![1, 1, 1], DifficultyTier::Low))
        .await;

    assert_eq!(result.total_party_budget, Some(150));
    assert_eq!(result.error.unwrap().kind, ToolErrorKind::PartyTooWeak);
}

#[tokio::test]
async fn encounter_query_from_json_is_validated() {
    let state = seeded_state(5);
    let query: EncounterQuery =
        serde_json::from_str(r#"{"pcs": [3, 21], "difficulty": "H"}"#).unwrap();
    let result = state.encounter_service.generate_encounter(query).await;

    assert_eq!(result.error.unwrap().kind, ToolErrorKind::InvalidQuery);
    assert!(result.total_party_budget.is_none());
}

#[test]
fn treasure_lookup_by_cr_and_disposition() {
    let state = seeded_state(1);

    let result = state
        .treasure_service
        .generate_treasure(TreasureQuery::new(11, TreasureDisposition::Trove));
    assert_eq!(
        result.treasure.as_deref(),
        Some("4d6 x 100 gp in coins and 1 rare magic item")
    );

    let out_of_range = state
        .treasure_service
        .generate_treasure(TreasureQuery::new(31, TreasureDisposition::Hoard));
    assert_eq!(out_of_range.error.unwrap().kind, ToolErrorKind::RangeError);
}

#[test]
fn dice_rolls_respect_configured_limit() {
    let config = AppConfig {
        rng_seed: Some(3),
        max_dice_per_roll: 4,
    };
    let state = AppState::new(config).unwrap();

    let ok = state
        .dice_roller_service
        .roll_dice(DiceRollQuery::new(DiceType::D8, 4));
    assert!(ok.is_success());
    assert_eq!(ok.rolls.len(), 4);
    assert!(ok.rolls.iter().all(|r| (1..=8).contains(r)));
    assert_eq!(ok.total, ok.rolls.iter().map(|r| u64::from(*r)).sum::<u64>());

    let too_many = state
        .dice_roller_service
        .roll_dice(DiceRollQuery::new(DiceType::D8, 5));
    assert_eq!(too_many.error.unwrap().kind, ToolErrorKind::InvalidQuery);
}
