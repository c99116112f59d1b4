//! Multi-tick runs of the arena.

use pocket_snake::{Arena, ArenaSettings, Chain, Crash, Direction, Point, REWARD_POINTS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn far() -> Point {
    Point::new(550.0, 750.0)
}

fn run_until_crash(arena: &mut Arena, rng: &mut ChaCha8Rng, limit: usize) -> (usize, Crash) {
    for tick in 1..=limit {
        if let Some(crash) = arena.tick(rng).crash {
            return (tick, crash);
        }
    }
    panic!("no crash within {limit} ticks");
}

#[test]
fn test_straight_run_reaches_left_edge() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let chain = Chain::new(Point::new(300.0, 300.0), Direction::Left, 3);
    let mut arena = Arena::with_layout(ArenaSettings::default(), chain, far(), far());

    let (ticks, crash) = run_until_crash(&mut arena, &mut rng, 500);
    assert_eq!(crash, Crash::OutOfBounds);
    assert_eq!(ticks, 100);
}

#[test]
fn test_steering_up_reaches_top_edge() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let chain = Chain::new(Point::new(300.0, 300.0), Direction::Left, 3);
    let mut arena = Arena::with_layout(ArenaSettings::default(), chain, far(), far());
    arena.steer(Direction::Up);

    let (ticks, crash) = run_until_crash(&mut arena, &mut rng, 500);
    assert_eq!(crash, Crash::OutOfBounds);
    assert_eq!(ticks, 100);
    assert_eq!(arena.chain().head().x, 300.0);
}

#[test]
fn test_reward_collected_on_approach() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let chain = Chain::new(Point::new(300.0, 300.0), Direction::Left, 3);
    let mut arena =
        Arena::with_layout(ArenaSettings::default(), chain, Point::new(250.0, 300.0), far());

    for _ in 0..6 {
        assert!(!arena.tick(&mut rng).rewarded);
    }
    let report = arena.tick(&mut rng);
    assert!(report.rewarded);
    assert_eq!(*arena.score(), REWARD_POINTS);
    assert_eq!(arena.chain().len(), 4);
    assert!(arena.step() > 3.0);
}

#[test]
fn test_same_seed_same_game() {
    let settings = ArenaSettings::default();
    let mut a = Arena::new(settings, &mut ChaCha8Rng::seed_from_u64(77));
    let mut b = Arena::new(settings, &mut ChaCha8Rng::seed_from_u64(77));
    assert_eq!(a, b);

    let mut rng_a = ChaCha8Rng::seed_from_u64(5);
    let mut rng_b = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        assert_eq!(a.tick(&mut rng_a), b.tick(&mut rng_b));
    }
    assert_eq!(a, b);
}
