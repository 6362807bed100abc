//! Integration test: generic game loop lifecycle
//!
//! Drives the real games through `GameLoopEngine` and `GameRunner`:
//! start/playing/gameover transitions, score monotonicity, restart resets
//! and loop cancellation.

use minigames::core::{
    Command, GameLoopEngine, GameRunner, InputOutcome, SessionState, SpawnPolicy, TickOutcome,
    World,
};
use minigames::games::{
    FlappyConfig, FlappyWorld, RacerConfig, RacerWorld, SnakeConfig, SnakeWorld,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Tick until game over, returning every score seen along the way.
fn play_out<W: World>(
    engine: &mut GameLoopEngine<W>,
    rng: &mut StdRng,
    max_ticks: usize,
) -> Vec<u32> {
    let mut scores = Vec::new();
    for _ in 0..max_ticks {
        let outcome = engine.tick(rng);
        scores.push(engine.score());
        if let TickOutcome::GameOver { score } = outcome {
            assert_eq!(score, engine.score());
            break;
        }
    }
    scores
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_flappy_falls_to_game_over_and_restarts() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut engine = GameLoopEngine::new(FlappyWorld::new(FlappyConfig::default()));
    assert_eq!(engine.state(), SessionState::Start);

    engine.start();
    play_out(&mut engine, &mut rng, 500);
    assert_eq!(engine.state(), SessionState::GameOver);

    // Terminal state persists until start
    assert_eq!(engine.tick(&mut rng), TickOutcome::Idle);

    engine.start();
    assert_eq!(engine.state(), SessionState::Playing);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.world().bird_y, 300.0);
    assert_eq!(engine.world().velocity, 0.0);
    assert!(engine.world().pipes.is_empty());
}

#[test]
fn test_racer_restart_resets_car_and_obstacles() {
    let mut rng = StdRng::seed_from_u64(5);
    let config = RacerConfig {
        spawn: SpawnPolicy::Chance { per_tick: 1.0 },
        ..RacerConfig::default()
    };
    let mut engine = GameLoopEngine::new(RacerWorld::new(config));
    engine.start();
    engine.handle_input(Command::Left);
    for _ in 0..5 {
        engine.tick(&mut rng);
    }
    assert!(!engine.world().obstacles.is_empty());
    assert_eq!(engine.world().car_x, 165.0);

    engine.start();
    assert!(engine.world().obstacles.is_empty());
    assert_eq!(engine.world().car_x, 175.0);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_score_never_decreases_within_a_run() {
    let mut rng = StdRng::seed_from_u64(99);
    let config = RacerConfig {
        spawn: SpawnPolicy::Chance { per_tick: 0.2 },
        ..RacerConfig::default()
    };
    let mut engine = GameLoopEngine::new(RacerWorld::new(config));
    engine.start();
    // Keep steering back and forth so the car survives for a while
    let mut scores = Vec::new();
    for i in 0..2000 {
        if i % 40 == 0 {
            engine.handle_input(if (i / 40) % 2 == 0 { Command::Left } else { Command::Right });
        }
        if let TickOutcome::GameOver { .. } = engine.tick(&mut rng) {
            break;
        }
        scores.push(engine.score());
    }
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_snake_score_monotonic_until_wall() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut engine = GameLoopEngine::new(SnakeWorld::new(SnakeConfig::default()));
    engine.start();
    let scores = play_out(&mut engine, &mut rng, 100);
    assert_eq!(engine.state(), SessionState::GameOver);
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    // Apple at (8,3) lies on the way up; a respawn may land ahead too
    assert!(engine.score() >= 1);
}

// =============================================================================
// Runner / scheduling
// =============================================================================

#[test]
fn test_runner_stops_ticking_after_game_over() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut runner = GameRunner::new(FlappyWorld::new(FlappyConfig::default()));
    runner.start();
    let mut ticks = 0;
    let mut over = false;
    for _ in 0..1000 {
        match runner.pump(16, &mut rng) {
            Some(TickOutcome::GameOver { .. }) => {
                over = true;
                ticks += 1;
            }
            Some(_) => ticks += 1,
            None => {}
        }
    }
    assert!(over);
    assert_eq!(runner.engine().session().ticks, ticks);
    assert!(!runner.is_scheduled());
}

#[test]
fn test_flappy_jump_restarts_from_game_over() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut runner = GameRunner::new(FlappyWorld::new(FlappyConfig::default()));
    runner.start();
    while !matches!(runner.pump(16, &mut rng), Some(TickOutcome::GameOver { .. })) {}
    assert_eq!(runner.engine().state(), SessionState::GameOver);

    assert_eq!(runner.handle_input(Command::Jump), InputOutcome::Restarted);
    assert_eq!(runner.engine().state(), SessionState::Playing);
    assert_eq!(runner.engine().session().run(), 2);
    assert!(runner.is_scheduled());
}

#[test]
fn test_snake_ignores_jump_restart() {
    let mut runner = GameRunner::new(SnakeWorld::new(SnakeConfig::default()));
    assert_eq!(runner.handle_input(Command::Jump), InputOutcome::Ignored);
    assert_eq!(runner.engine().state(), SessionState::Start);
    assert!(!runner.is_scheduled());
}
