//! Game session module - owns the complete game state
//!
//! This module ties together the snake, food placement, RNG and scoring.
//! It handles the game lifecycle (start, pause, reset), steering and the
//! per-tick simulation step. Timing lives outside: callers decide when to
//! call [`GameSession::tick`] (see [`crate::scheduler`]).

use crate::config::GameConfig;
use crate::food::place_food;
use crate::rng::FoodRng;
use crate::scoring::{completes_level, food_points, next_speed_ms};
use crate::snake::Snake;
use crate::types::{Direction, Intent, Phase, Position};

/// Why a tick ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the grid
    Wall,
    /// Head ran into a body segment
    SelfHit,
}

/// What a single call to [`GameSession::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session was not playing; nothing changed
    Idle,
    /// Snake translated by one cell
    Moved,
    /// Snake ate the food and grew by one segment
    Ate { leveled_up: bool },
    /// Snake collided; the session is now over
    Crashed(Collision),
    /// Snake filled the grid; no cell left for food, the session is over
    Cleared,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    snake: Snake,
    food: Position,
    /// Direction used by the last step (the committed direction).
    direction: Direction,
    /// Latest accepted steering request, applied on the next step.
    pending_direction: Option<Direction>,
    score: u32,
    level: u32,
    food_eaten: u32,
    speed_ms: u32,
    playing: bool,
    game_over: bool,
    board_cleared: bool,
    high_score: u32,
    /// Bumped on every mutation so views can poll for changes.
    revision: u64,
    rng: FoodRng,
}

impl GameSession {
    /// Create a session in its initial, idle state
    pub fn new(config: GameConfig) -> Self {
        let rng = FoodRng::from_seed(config.seed);
        log::debug!("new session (seed {})", rng.seed());

        Self {
            snake: Snake::new(config.initial_head()),
            food: config.initial_food(),
            direction: Direction::Right,
            pending_direction: None,
            score: 0,
            level: 1,
            food_eaten: 0,
            speed_ms: config.initial_speed_ms,
            playing: false,
            game_over: false,
            board_cleared: false,
            high_score: 0,
            revision: 0,
            rng,
            config,
        }
    }

    /// Create an idle session with an explicit layout
    ///
    /// Useful for replays and for exercising specific situations. The food is
    /// taken as given; callers are responsible for keeping it off the snake.
    pub fn with_layout(
        config: GameConfig,
        snake: Snake,
        food: Position,
        direction: Direction,
    ) -> Self {
        let mut session = Self::new(config);
        session.snake = snake;
        session.food = food;
        session.direction = direction;
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board_cleared(&self) -> bool {
        self.board_cleared
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.playing {
            Phase::Playing
        } else {
            Phase::Idle
        }
    }

    /// Reward for the next food item at the current level
    pub fn points_per_food(&self) -> u32 {
        food_points(self.config.points_per_food, self.level)
    }

    /// True on the game-over screen when this game set the high score
    pub fn is_new_record(&self) -> bool {
        self.game_over && self.score > 0 && self.score == self.high_score
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Start (or resume) play. No-op when already playing or after game over.
    pub fn start(&mut self) -> bool {
        if self.game_over || self.playing {
            return false;
        }
        self.playing = true;
        self.touch();
        log::info!("playing (score {}, level {})", self.score, self.level);
        true
    }

    /// Pause play, keeping all state. No-op unless playing.
    pub fn pause(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.playing = false;
        self.touch();
        log::info!("paused");
        true
    }

    /// The Play/Pause control
    pub fn toggle_play(&mut self) -> bool {
        if self.playing {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Restore the initial state, keeping the high score
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.config.initial_head());
        self.food = self.config.initial_food();
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.score = 0;
        self.level = 1;
        self.food_eaten = 0;
        self.speed_ms = self.config.initial_speed_ms;
        self.playing = false;
        self.game_over = false;
        self.board_cleared = false;
        self.touch();
        log::info!("reset (high score {})", self.high_score);
    }

    /// Request a new heading for the next tick
    ///
    /// Accepted only while playing and only onto the other axis than the
    /// committed direction, so the snake can never reverse into its neck.
    /// The latest accepted request before a tick wins.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if !self.playing {
            return false;
        }
        if !self.direction.is_orthogonal(dir) {
            return false;
        }
        if self.pending_direction != Some(dir) {
            self.pending_direction = Some(dir);
            self.touch();
            log::debug!("steer {}", dir.as_str());
        }
        true
    }

    /// Apply a normalized input intent
    ///
    /// `Intent::Quit` is an application concern and is ignored here.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Steer(dir) => self.steer(dir),
            Intent::TogglePlay => self.toggle_play(),
            Intent::Reset => {
                self.reset();
                true
            }
            Intent::Quit => false,
        }
    }

    /// Advance the simulation by one cell
    pub fn tick(&mut self) -> TickOutcome {
        if !self.playing || self.game_over {
            return TickOutcome::Idle;
        }

        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }

        let next = self.snake.head().step(self.direction);
        log::trace!("tick: head -> ({}, {})", next.x, next.y);

        // Checked against the pre-move body, tail included.
        let collision = if !next.in_bounds(self.config.grid_size) {
            Some(Collision::Wall)
        } else if self.snake.contains(next) {
            Some(Collision::SelfHit)
        } else {
            None
        };

        if let Some(kind) = collision {
            self.finish();
            log::info!(
                "game over ({kind:?}) score {} level {} food {}",
                self.score,
                self.level,
                self.food_eaten
            );
            return TickOutcome::Crashed(kind);
        }

        self.snake.push_head(next);
        self.touch();

        if next != self.food {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.food_eaten += 1;
        self.score = self
            .score
            .saturating_add(food_points(self.config.points_per_food, self.level));

        let leveled_up = completes_level(self.food_eaten, self.config.food_per_level);
        if leveled_up {
            self.level += 1;
            self.speed_ms = next_speed_ms(
                self.speed_ms,
                self.config.speed_step_ms,
                self.config.speed_floor_ms,
            );
            log::info!("level {} (tick {}ms)", self.level, self.speed_ms);
        }

        match place_food(&mut self.rng, self.config.grid_size, &self.snake) {
            Some(food) => {
                self.food = food;
                log::debug!("food at ({}, {})", food.x, food.y);
                TickOutcome::Ate { leveled_up }
            }
            None => {
                self.board_cleared = true;
                self.finish();
                log::info!("board cleared with score {}", self.score);
                TickOutcome::Cleared
            }
        }
    }

    fn finish(&mut self) {
        self.game_over = true;
        self.playing = false;
        self.pending_direction = None;
        self.high_score = self.high_score.max(self.score);
        self.touch();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> GameConfig {
        GameConfig::default().with_seed(12345)
    }

    fn layout(body: &[(i32, i32)], food: (i32, i32), dir: Direction) -> GameSession {
        let snake = Snake::from_segments(body.iter().copied().map(Position::from)).unwrap();
        GameSession::with_layout(seeded(), snake, food.into(), dir)
    }

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(seeded());

        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.snake().len(), 1);
        assert_eq!(session.head(), Position::new(10, 10));
        assert_eq!(session.food(), Position::new(15, 15));
        assert_eq!(session.direction(), Direction::Right);
        assert_eq!(session.speed_ms(), 150);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.food_eaten(), 0);
        assert_eq!(session.high_score(), 0);
        assert!(!session.board_cleared());
    }

    #[test]
    fn test_tick_is_idle_until_started() {
        let mut session = GameSession::new(seeded());
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.head(), Position::new(10, 10));

        assert!(session.start());
        assert_eq!(session.tick(), TickOutcome::Moved);
        assert_eq!(session.head(), Position::new(11, 10));
    }

    #[test]
    fn test_start_and_pause_transitions() {
        let mut session = GameSession::new(seeded());
        assert!(!session.pause());
        assert!(session.start());
        assert!(!session.start());
        assert_eq!(session.phase(), Phase::Playing);

        session.tick();
        let head = session.head();
        assert!(session.pause());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.head(), head);

        assert!(session.toggle_play());
        assert_eq!(session.phase(), Phase::Playing);
        assert!(session.toggle_play());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut session = layout(&[(14, 10)], (15, 10), Direction::Right);
        session.start();

        assert_eq!(session.tick(), TickOutcome::Ate { leveled_up: false });
        assert_eq!(session.snake().len(), 2);
        assert_eq!(session.head(), Position::new(15, 10));
        assert_eq!(session.food_eaten(), 1);
        assert_eq!(session.score(), 10);
        assert_ne!(session.food(), Position::new(15, 10));
        assert_ne!(session.food(), Position::new(14, 10));
        assert!(!session.snake().contains(session.food()));
    }

    #[test]
    fn test_score_uses_level_before_level_up() {
        let mut session = layout(&[(1, 1)], (2, 1), Direction::Right);
        session.level = 3;
        session.food_eaten = 9;
        session.start();

        assert_eq!(session.tick(), TickOutcome::Ate { leveled_up: true });
        assert_eq!(session.score(), 30);
        assert_eq!(session.level(), 4);
        assert_eq!(session.points_per_food(), 40);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut session = layout(&[(0, 5)], (15, 15), Direction::Left);
        session.start();

        assert_eq!(session.tick(), TickOutcome::Crashed(Collision::Wall));
        assert!(session.game_over());
        assert!(!session.is_playing());
        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.head(), Position::new(0, 5));
    }

    #[test]
    fn test_self_collision_includes_tail() {
        // A 2x2 loop: moving into the current tail cell is a collision.
        let mut session = layout(
            &[(5, 5), (5, 6), (6, 6), (6, 5)],
            (15, 15),
            Direction::Up,
        );
        session.start();
        assert!(session.steer(Direction::Right));

        assert_eq!(session.tick(), TickOutcome::Crashed(Collision::SelfHit));
        assert_eq!(session.snake().len(), 4);
    }

    #[test]
    fn test_high_score_only_updates_on_game_over() {
        let mut session = layout(&[(18, 10)], (19, 10), Direction::Right);
        session.start();

        session.tick();
        assert_eq!(session.score(), 10);
        assert_eq!(session.high_score(), 0);

        assert_eq!(session.tick(), TickOutcome::Crashed(Collision::Wall));
        assert_eq!(session.high_score(), 10);
        assert!(session.is_new_record());
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let mut session = layout(&[(0, 0)], (15, 15), Direction::Left);
        session.high_score = 50;
        session.start();
        session.tick();

        assert_eq!(session.high_score(), 50);
        assert!(!session.is_new_record());
    }

    #[test]
    fn test_game_over_blocks_start_until_reset() {
        let mut session = layout(&[(0, 0)], (15, 15), Direction::Up);
        session.start();
        session.tick();

        assert!(!session.start());
        assert!(!session.toggle_play());
        session.reset();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.start());
    }

    #[test]
    fn test_reset_preserves_high_score_only() {
        let mut session = layout(&[(18, 3)], (19, 3), Direction::Right);
        session.start();
        session.tick();
        session.tick();
        assert!(session.game_over());

        session.reset();

        assert_eq!(session.high_score(), 10);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.food_eaten(), 0);
        assert_eq!(session.speed_ms(), 150);
        assert_eq!(session.snake().len(), 1);
        assert_eq!(session.head(), Position::new(10, 10));
        assert_eq!(session.food(), Position::new(15, 15));
        assert_eq!(session.direction(), Direction::Right);
        assert_eq!(session.pending_direction(), None);
        assert!(!session.is_playing());
        assert!(!session.game_over());
    }

    #[test]
    fn test_steer_rejects_same_axis() {
        let mut session = GameSession::new(seeded());
        session.start();

        assert!(!session.steer(Direction::Left));
        assert!(!session.steer(Direction::Right));
        session.tick();
        assert_eq!(session.direction(), Direction::Right);
    }

    #[test]
    fn test_steer_ignored_while_not_playing() {
        let mut session = GameSession::new(seeded());
        assert!(!session.steer(Direction::Up));
        assert_eq!(session.pending_direction(), None);
    }

    #[test]
    fn test_steer_checks_committed_direction() {
        let mut session = GameSession::new(seeded());
        session.start();

        assert!(session.steer(Direction::Up));
        // Still heading right until the next tick, so Left is a reversal.
        assert!(!session.steer(Direction::Left));
        // Down replaces Up: latest accepted request wins.
        assert!(session.steer(Direction::Down));

        session.tick();
        assert_eq!(session.direction(), Direction::Down);
        assert_eq!(session.head(), Position::new(10, 11));
        assert_eq!(session.pending_direction(), None);
    }

    #[test]
    fn test_apply_intent_dispatch() {
        let mut session = GameSession::new(seeded());

        assert!(session.apply_intent(Intent::TogglePlay));
        assert!(session.is_playing());
        assert!(session.apply_intent(Intent::Steer(Direction::Down)));
        assert!(!session.apply_intent(Intent::Quit));
        assert!(session.apply_intent(Intent::Reset));
        assert!(!session.is_playing());
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut session = GameSession::new(seeded());
        let r0 = session.revision();

        session.tick();
        assert_eq!(session.revision(), r0);

        session.start();
        let r1 = session.revision();
        assert!(r1 > r0);

        session.tick();
        assert!(session.revision() > r1);
    }

    #[test]
    fn test_filling_the_grid_clears_the_board() {
        // 4x4 grid, one free cell at (3, 0) holding the food, head right below it.
        let config = GameConfig {
            grid_size: 4,
            ..seeded()
        };
        let body = [
            (3, 1), (3, 2), (3, 3), (2, 3),
            (2, 2), (2, 1), (2, 0), (1, 0),
            (1, 1), (1, 2), (1, 3), (0, 3),
            (0, 2), (0, 1), (0, 0),
        ];
        let snake = Snake::from_segments(body.iter().copied().map(Position::from)).unwrap();
        let mut session =
            GameSession::with_layout(config, snake, Position::new(3, 0), Direction::Up);
        session.start();

        assert_eq!(session.tick(), TickOutcome::Cleared);
        assert!(session.board_cleared());
        assert!(session.game_over());
        assert_eq!(session.snake().len(), 16);
        assert_eq!(session.high_score(), session.score());
    }
}
