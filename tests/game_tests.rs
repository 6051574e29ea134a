//! Game driver integration tests: restart, preload and failure handling.

mod common;

use common::{artwork, key_at, pair_of, FixtureLookup, RecordingCache};
use pokememo::{
    ClickOutcome, EntityId, FetchError, GameConfig, GamePhase, MemoryGame, DEFAULT_BACK_IMAGE,
};

fn config() -> GameConfig {
    GameConfig::new().with_pairs(5).with_id_range(1, 5).with_seed(42)
}

fn game() -> MemoryGame<FixtureLookup, RecordingCache> {
    MemoryGame::new(config(), FixtureLookup::new(), RecordingCache::new())
}

#[tokio::test]
async fn test_restart_builds_and_preloads() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut game = game();
    assert_eq!(game.session().phase(), GamePhase::Loading);

    let report = game.restart().await.unwrap();

    assert_eq!(game.session().phase(), GamePhase::Ready);
    assert!(game.session().can_start());
    // Back image + five distinct faces
    assert_eq!(report.requested, 6);
    assert_eq!(report.loaded, 6);
    assert!(report.is_complete());

    let mut loaded = game.cache().loaded();
    loaded.sort();
    let mut expected: Vec<String> = (1..=5).map(artwork).collect();
    expected.push(DEFAULT_BACK_IMAGE.to_string());
    expected.sort();
    assert_eq!(loaded, expected);
}

#[tokio::test]
async fn test_restart_hands_cache_the_new_working_set() {
    let mut game = game();
    game.restart().await.unwrap();

    let retained = game.cache().retained();
    assert_eq!(retained.len(), 6);
    assert_eq!(retained[0], DEFAULT_BACK_IMAGE);
    for id in 1..=5 {
        assert!(retained.contains(&artwork(id)));
    }
}

#[tokio::test]
async fn test_preload_failures_do_not_block_ready() {
    let cache = RecordingCache::new().failing_on(artwork(2)).failing_on(DEFAULT_BACK_IMAGE);
    let mut game = MemoryGame::new(config(), FixtureLookup::new(), cache);

    let report = game.restart().await.unwrap();

    assert_eq!(report.loaded, 4);
    assert_eq!(report.failed.len(), 2);
    assert!(game.session().can_start());
}

#[tokio::test]
async fn test_species_failure_disables_start() {
    let lookup = FixtureLookup::new().with_species_failure(4, 500);
    let mut game = MemoryGame::new(config(), lookup, RecordingCache::new());

    let err = game.restart().await.unwrap_err();

    assert_eq!(err, FetchError::Network { id: EntityId(4), status: 500 });
    assert_eq!(game.session().phase(), GamePhase::Failed);
    assert!(!game.session().can_start());
    assert!(game.cache().loaded().is_empty());
}

#[tokio::test]
async fn test_transport_failure_disables_start() {
    let lookup = FixtureLookup::new().with_transport_failure(1);
    let mut game = MemoryGame::new(config(), lookup, RecordingCache::new());

    let err = game.restart().await.unwrap_err();

    assert!(matches!(err, FetchError::Transport { id: EntityId(1), .. }));
    assert_eq!(game.session().phase(), GamePhase::Failed);
    assert!(!game.session().can_start());
    assert!(!game.start());
    assert_eq!(game.status(), "Failed to load cards. Please try again later.");
}

#[tokio::test]
async fn test_failed_build_disables_start() {
    let lookup = FixtureLookup::new().with_failure(2, 404);
    let mut game = MemoryGame::new(config(), lookup, RecordingCache::new());

    let err = game.restart().await.unwrap_err();

    assert_eq!(err, FetchError::Network { id: EntityId(2), status: 404 });
    assert_eq!(game.session().phase(), GamePhase::Failed);
    assert!(!game.session().can_start());
    assert!(!game.start());
    assert!(game.session().deck().is_empty());
    assert_eq!(game.status(), "Failed to load cards. Please try again later.");
    // Nothing is preloaded for a deck that was never built
    assert!(game.cache().loaded().is_empty());
}

#[tokio::test]
async fn test_full_game_through_driver() {
    let mut game = game();
    game.restart().await.unwrap();
    assert!(game.start());
    assert_eq!(game.snapshot().cards.iter().filter(|c| c.face_up).count(), 10);

    game.advance(2_500);
    assert_eq!(game.snapshot().cards.iter().filter(|c| c.face_up).count(), 0);

    for entity in 1..=5 {
        let (a, b) = pair_of(game.session(), entity);
        let (key_a, key_b) = (key_at(game.session(), a), key_at(game.session(), b));
        assert_eq!(game.click(&key_a), ClickOutcome::FirstPick);
        assert_eq!(game.click(&key_b), ClickOutcome::Matched { won: entity == 5 });
    }

    assert_eq!(game.moves(), 5);
    assert_eq!(game.matches(), 5);
    assert_eq!(game.status(), "You won! Total moves: 5");
}

#[tokio::test]
async fn test_restart_mid_game_rebuilds_and_drops_timers() {
    let mut game = game();
    game.restart().await.unwrap();
    game.start();
    game.advance(2_500);

    let (a, b) = pair_of(game.session(), 1);
    let (c, _) = pair_of(game.session(), 2);
    let (key_a, key_b, key_c) = (
        key_at(game.session(), a),
        key_at(game.session(), b),
        key_at(game.session(), c),
    );
    game.click(&key_a);
    game.click(&key_b);
    game.click(&key_c);
    let old_keys: Vec<String> = game.snapshot().cards.iter().map(|c| c.key.to_string()).collect();
    let old_generation = game.session().generation();

    // Leave a half-finished pick behind, then restart
    assert_eq!(game.session().picks(), (Some(c), None));
    game.restart().await.unwrap();

    assert_eq!(game.moves(), 0);
    assert_eq!(game.matches(), 0);
    assert_eq!(game.session().picks(), (None, None));
    assert_eq!(game.session().pending_timers(), 0);
    assert!(game.session().generation() > old_generation);
    assert_eq!(game.session().phase(), GamePhase::Ready);

    // Fresh deck: new keys, nothing matched or face-up
    let snapshot = game.snapshot();
    assert_eq!(snapshot.cards.len(), 10);
    assert!(snapshot.cards.iter().all(|c| !c.matched && !c.face_up));
    assert!(snapshot.cards.iter().all(|c| !old_keys.contains(&c.key.to_string())));

    // Old keys mean nothing on the new board
    assert!(game.click(&key_a).is_ignored());
}

#[tokio::test]
async fn test_restart_during_mismatch_window() {
    let mut game = game();
    game.restart().await.unwrap();
    game.start();
    game.advance(2_500);

    let (a, _) = pair_of(game.session(), 1);
    let (c, _) = pair_of(game.session(), 2);
    let (key_a, key_c) = (key_at(game.session(), a), key_at(game.session(), c));
    game.click(&key_a);
    assert_eq!(game.click(&key_c), ClickOutcome::Mismatched);

    game.restart().await.unwrap();
    game.start();
    game.advance(900);

    // Still revealing: the stale mismatch timer did not unflip anything
    assert_eq!(game.session().phase(), GamePhase::Revealing);
    assert_eq!(game.session().face_up_count(), 10);
}

#[tokio::test]
async fn test_seeded_games_repeat() {
    let mut first = game();
    let mut second = game();
    first.restart().await.unwrap();
    second.restart().await.unwrap();
    assert_eq!(first.session().deck(), second.session().deck());

    // Each restart draws a new deck
    let before = first.session().deck().clone();
    first.restart().await.unwrap();
    assert_ne!(first.session().deck(), &before);
}
