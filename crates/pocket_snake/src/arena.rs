//! One game of Snake: the chain, two items and the score.

use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::chain::Chain;
use crate::geometry::{Bounds, Direction, Hitbox, Point};

/// Side length of an item's hitbox.
pub const ITEM_SIZE: f32 = 30.0;

/// Distance covered every tick before any speed bonus.
pub const BASE_STEP: f32 = 3.0;

/// Points for collecting a reward.
pub const REWARD_POINTS: u32 = 10;

/// Score needed for each extra unit of speed.
pub const SCORE_PER_SPEED: f32 = 40.0;

/// What an item does to the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum ItemKind {
    /// Grows the chain and scores points.
    Reward,
    /// Shrinks the chain; fatal when only the head is left.
    Penalty,
}

/// An item lying in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Item {
    /// What touching the item does.
    pub kind: ItemKind,
    /// Centre of the item.
    pub position: Point,
}

impl Item {
    /// Hitbox of the item.
    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.position, ITEM_SIZE)
    }
}

/// Why a game of Snake ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Crash {
    /// The head ran into the body.
    SelfCollision,
    /// The head reached an edge of the arena.
    OutOfBounds,
    /// A penalty was touched with only the head left.
    BodyTooShort,
}

/// Tunables for an arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaSettings {
    /// Playable area.
    pub bounds: Bounds,
    /// Segments in a fresh chain.
    pub initial_length: usize,
    /// Ceiling on the speed bonus.
    pub max_speed: f32,
    /// Minimum distance between a freshly placed item and the edges.
    pub item_margin: f32,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(600.0, 800.0),
            initial_length: 3,
            max_speed: 12.0,
            item_margin: 50.0,
        }
    }
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A reward was collected.
    pub rewarded: bool,
    /// A penalty shrank the chain.
    pub penalized: bool,
    /// The game ended.
    pub crash: Option<Crash>,
}

/// A running game of Snake.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Arena {
    /// Tunables this arena was built with.
    settings: ArenaSettings,
    /// The player's chain.
    chain: Chain,
    /// Item that grows the chain.
    reward: Item,
    /// Item that shrinks the chain.
    penalty: Item,
    /// Points collected so far.
    score: u32,
}

impl Arena {
    /// Starts a game: the chain heads left from the upper middle of the arena
    /// and both items are placed at random.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(settings: ArenaSettings, rng: &mut R) -> Self {
        let bounds = settings.bounds;
        let head = Point::new(bounds.width / 2.0, bounds.height * 0.375);
        let chain = Chain::new(head, Direction::Left, settings.initial_length);
        let reward = Item::new(ItemKind::Reward, random_spot(&settings, rng));
        let penalty = Item::new(ItemKind::Penalty, random_spot(&settings, rng));
        Self::with_layout(settings, chain, reward.position, penalty.position)
    }

    /// Starts a game from an explicit chain and item positions.
    #[instrument]
    pub fn with_layout(
        settings: ArenaSettings,
        chain: Chain,
        reward_at: Point,
        penalty_at: Point,
    ) -> Self {
        Self {
            settings,
            chain,
            reward: Item::new(ItemKind::Reward, reward_at),
            penalty: Item::new(ItemKind::Penalty, penalty_at),
            score: 0,
        }
    }

    /// Speed bonus earned by the score, capped at `max_speed`.
    pub fn speed(&self) -> f32 {
        (self.score as f32 / SCORE_PER_SPEED).min(self.settings.max_speed)
    }

    /// Distance the chain covers on the next tick.
    pub fn step(&self) -> f32 {
        BASE_STEP + self.speed()
    }

    /// Sets the heading for the next tick.
    pub fn steer(&mut self, heading: Direction) {
        self.chain.set_heading(heading);
    }

    /// Advances one tick.
    ///
    /// The chain moves, then the head is checked against the body and the
    /// arena edges; either ends the game. Items are checked afterwards:
    /// the penalty first, so a fatal penalty leaves the chain unchanged, then
    /// the reward.
    #[instrument(skip(self, rng), fields(score = self.score, len = self.chain.len()))]
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        self.chain.advance(self.step());

        if self.chain.head_collides_with_self() {
            info!("Chain ran into itself");
            report.crash = Some(Crash::SelfCollision);
            return report;
        }
        if self.chain.head_out_of_bounds(&self.settings.bounds) {
            info!(head = ?self.chain.head(), "Chain left the arena");
            report.crash = Some(Crash::OutOfBounds);
            return report;
        }

        if self.chain.head_collides_with(&self.penalty.hitbox()) {
            if self.chain.shrink().is_err() {
                info!("Penalty touched with only the head left");
                report.crash = Some(Crash::BodyTooShort);
                return report;
            }
            self.penalty.position = random_spot(&self.settings, rng);
            report.penalized = true;
            debug!(len = self.chain.len(), "Penalty collected");
        }

        if self.chain.head_collides_with(&self.reward.hitbox()) {
            self.chain.grow();
            self.score += REWARD_POINTS;
            self.reward.position = random_spot(&self.settings, rng);
            report.rewarded = true;
            debug!(score = self.score, len = self.chain.len(), "Reward collected");
        }

        report
    }
}

/// A uniformly random point at least `item_margin` from every edge.
fn random_spot<R: Rng + ?Sized>(settings: &ArenaSettings, rng: &mut R) -> Point {
    let Bounds { width, height } = settings.bounds;
    let mx = settings.item_margin.clamp(0.0, width / 2.0);
    let my = settings.item_margin.clamp(0.0, height / 2.0);
    Point::new(rng.gen_range(mx..=width - mx), rng.gen_range(my..=height - my))
}
