//! Game state module - the play session
//!
//! Ties together the grid, the falling piece, the piece source and the
//! level/score counters. All state lives in one `GameState` value; the
//! caller drives it with commands (`move_horizontal`, `rotate`, `drop`,
//! `hard_drop`) and with `tick` for gravity.

use tracing::{debug, info, warn};

use crate::collision::{collides, merge};
use crate::config::{GameConfig, GameOverPolicy};
use crate::error::Result;
use crate::grid::Grid;
use crate::pieces::pattern_for;
use crate::player::Player;
use crate::rng::PieceSource;
use crate::scoring::{calculate_line_score, drop_interval_ms, next_level};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::sweep::sweep;
use crate::types::{GameAction, PieceKind, Rotation, RotationDir, START_LEVEL};

/// Result of spawning a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// The new piece fits and is now active
    Spawned,
    /// The new piece overlapped the stack; the game that just ended scored
    /// `final_score`
    GameOver { final_score: u32 },
}

/// Result of a one-row drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing to drop (not started, paused or halted)
    Idle,
    /// The piece moved down one row
    Moved,
    /// The piece was blocked, merged into the grid, and the next piece spawned
    Locked {
        lines_cleared: usize,
        spawn: SpawnOutcome,
    },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    active: Option<Player>,
    source: PieceSource,
    score: u32,
    level: u32,
    lines: u32,
    /// Games that ended by topping out
    games_played: u32,
    /// Monotonic id for spawned pieces
    piece_id: u32,
    drop_interval_ms: f64,
    drop_counter_ms: f64,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a session from a validated config
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self::with_grid(config, grid))
    }

    /// Default-sized session with the given RNG seed
    pub fn with_seed(seed: u32) -> Self {
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        };
        Self::with_grid(config, Grid::default())
    }

    fn with_grid(config: GameConfig, grid: Grid) -> Self {
        let source = PieceSource::new(config.seed.unwrap_or(1));
        let drop_interval_ms = drop_interval_ms(config.base_drop_ms, START_LEVEL);

        Self {
            config,
            grid,
            active: None,
            source,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            games_played: 0,
            piece_id: 0,
            drop_interval_ms,
            drop_counter_ms: 0.0,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) -> SpawnOutcome {
        if self.started {
            return SpawnOutcome::Spawned;
        }
        self.started = true;
        self.spawn_piece()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn drop_interval_ms(&self) -> f64 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> f64 {
        self.drop_counter_ms
    }

    pub fn active(&self) -> Option<Player> {
        self.active
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scripted setups (puzzles, tests)
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current RNG state (for restarting game with same sequence)
    pub fn seed(&self) -> u32 {
        self.source.seed()
    }

    fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    /// Spawn a random piece with a random starting rotation
    pub fn spawn_piece(&mut self) -> SpawnOutcome {
        let (kind, rotation) = self.source.draw();
        self.spawn_piece_of(kind, rotation)
    }

    /// Spawn a specific piece, horizontally centred on row 0
    pub fn spawn_piece_of(&mut self, kind: PieceKind, rotation: Rotation) -> SpawnOutcome {
        if self.game_over {
            return SpawnOutcome::GameOver {
                final_score: self.score,
            };
        }
        self.started = true;

        let x = Player::spawn_x(self.grid.width(), pattern_for(kind).size());
        let piece = Player::oriented(kind, rotation, x, 0);
        self.piece_id = self.piece_id.wrapping_add(1);

        if !collides(&self.grid, &piece) {
            debug!(?kind, ?rotation, x, piece_id = self.piece_id, "spawned");
            self.active = Some(piece);
            return SpawnOutcome::Spawned;
        }

        let final_score = self.score;
        self.games_played = self.games_played.wrapping_add(1);
        info!(
            final_score,
            lines = self.lines,
            level = self.level,
            policy = ?self.config.game_over,
            "game over"
        );

        match self.config.game_over {
            GameOverPolicy::Reset => {
                self.grid.clear();
                self.reset_stats();
                if collides(&self.grid, &piece) {
                    // Blocked by the walls or floor of an empty grid.
                    warn!(?kind, ?rotation, "piece does not fit the empty grid, halting");
                    self.game_over = true;
                    self.active = None;
                } else {
                    self.active = Some(piece);
                }
            }
            GameOverPolicy::Halt => {
                self.game_over = true;
                self.active = None;
            }
        }

        SpawnOutcome::GameOver { final_score }
    }

    fn reset_stats(&mut self) {
        self.score = 0;
        self.lines = 0;
        self.level = START_LEVEL;
        self.drop_interval_ms = drop_interval_ms(self.config.base_drop_ms, START_LEVEL);
        self.drop_counter_ms = 0.0;
    }

    /// Shift the piece one column; negative `dir` moves left, positive right
    ///
    /// Only the sign of `dir` matters. Returns false, leaving the piece in
    /// place, when the move is blocked or `dir` is zero.
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        let step = dir.signum();
        if step == 0 || !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(step as i32, 0);
        if collides(&self.grid, &moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the piece a quarter turn; no wall kicks
    pub fn rotate(&mut self, dir: RotationDir) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let turned = active.turned(dir);
        if collides(&self.grid, &turned) {
            return false;
        }
        self.active = Some(turned);
        true
    }

    /// Move the piece down one row, locking it when it is blocked
    ///
    /// Always resets the gravity accumulator.
    pub fn drop(&mut self) -> DropOutcome {
        self.drop_counter_ms = 0.0;

        if !self.playable() {
            return DropOutcome::Idle;
        }
        let Some(active) = self.active else {
            return DropOutcome::Idle;
        };

        let below = active.shifted(0, 1);
        if !collides(&self.grid, &below) {
            self.active = Some(below);
            return DropOutcome::Moved;
        }

        self.lock_piece(active)
    }

    /// Drop until the piece locks
    pub fn hard_drop(&mut self) -> DropOutcome {
        loop {
            match self.drop() {
                DropOutcome::Moved => continue,
                outcome => return outcome,
            }
        }
    }

    /// Merge the piece, clear lines, update speed and score, spawn the next
    fn lock_piece(&mut self, piece: Player) -> DropOutcome {
        merge(&mut self.grid, &piece);
        self.active = None;

        let lines_cleared = sweep(&mut self.grid);
        self.score = self
            .score
            .saturating_add(calculate_line_score(lines_cleared, self.level));
        self.lines = self.lines.saturating_add(lines_cleared as u32);
        debug!(kind = ?piece.kind, x = piece.x, y = piece.y, lines_cleared, "locked");

        let level = next_level(self.level, lines_cleared, self.config.level_line_threshold);
        if level != self.level {
            self.level = level;
            self.drop_interval_ms = drop_interval_ms(self.config.base_drop_ms, level);
            info!(level, interval_ms = self.drop_interval_ms, "level up");
        }

        let spawn = self.spawn_piece();
        DropOutcome::Locked {
            lines_cleared,
            spawn,
        }
    }

    /// Advance the gravity timer; drops the piece once the accumulated time
    /// exceeds the fall interval
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<DropOutcome> {
        if !self.playable() {
            return None;
        }

        self.drop_counter_ms += elapsed_ms as f64;
        if self.drop_counter_ms > self.drop_interval_ms {
            return Some(self.drop());
        }
        None
    }

    /// Throw away the current game and start a new one
    pub fn restart(&mut self) -> SpawnOutcome {
        self.grid.clear();
        self.reset_stats();
        self.active = None;
        self.paused = false;
        self.game_over = false;
        self.started = false;
        self.start()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.drop() != DropOutcome::Idle,
            GameAction::HardDrop => self.hard_drop() != DropOutcome::Idle,
            GameAction::RotateCw => self.rotate(RotationDir::Cw),
            GameAction::RotateCcw => self.rotate(RotationDir::Ccw),
            GameAction::Pause => {
                if !self.started || self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            board: self.grid.to_rows(),
            active: self.active.map(ActiveSnapshot::from),
            piece_id: self.piece_id,
            score: self.score,
            level: self.level,
            lines: self.lines,
            drop_interval_ms: self.drop_interval_ms,
            games_played: self.games_played,
            paused: self.paused,
            game_over: self.game_over,
            seed: self.source.seed(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn started(kind: PieceKind) -> GameState {
        let mut state = GameState::with_seed(12345);
        assert_eq!(state.spawn_piece_of(kind, Rotation::North), SpawnOutcome::Spawned);
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::with_seed(12345);

        assert!(!state.started);
        assert!(!state.game_over);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.drop_interval_ms, 2000.0);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig {
            height: 0,
            ..GameConfig::default()
        };
        assert!(GameState::new(config).is_err());
    }

    #[test]
    fn test_game_start() {
        let mut state = GameState::with_seed(12345);
        assert_eq!(state.start(), SpawnOutcome::Spawned);
        assert!(state.started);
        assert!(state.active.is_some());
        assert_eq!(state.piece_id, 1);
    }

    #[test]
    fn test_spawn_is_centred_on_row_zero() {
        let state = started(PieceKind::I);
        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (3, 0));

        let state = started(PieceKind::T);
        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (4, 0));
    }

    #[test]
    fn test_spawn_applies_rotation() {
        let mut state = GameState::with_seed(1);
        state.spawn_piece_of(PieceKind::L, Rotation::South);
        let active = state.active.unwrap();
        assert_eq!(active.rotation, Rotation::South);
        assert_eq!(active, Player::oriented(PieceKind::L, Rotation::South, 4, 0));
    }

    #[test]
    fn test_move_horizontal_stops_at_wall() {
        let mut state = started(PieceKind::O);
        let mut moved = 0;
        for _ in 0..10 {
            if state.move_horizontal(-1) {
                moved += 1;
            }
        }
        assert_eq!(moved, 4);
        assert_eq!(state.active.unwrap().x, 0);
        assert!(state.move_horizontal(1));
        assert_eq!(state.active.unwrap().x, 1);
    }

    #[test]
    fn test_rotate_updates_index_and_reverts_when_blocked() {
        let mut state = started(PieceKind::T);
        assert!(state.rotate(RotationDir::Cw));
        assert_eq!(state.active.unwrap().rotation, Rotation::East);
        assert!(state.rotate(RotationDir::Ccw));
        assert_eq!(state.active.unwrap().rotation, Rotation::North);

        // Block the cell a clockwise turn needs: (x+1, y+2) after rotation
        let mut state = started(PieceKind::T);
        let before = state.active.unwrap();
        state.grid.set(before.x + 1, before.y + 2, 3);
        assert!(!state.rotate(RotationDir::Cw));
        assert_eq!(state.active.unwrap(), before);
    }

    #[test]
    fn test_drop_resets_counter() {
        let mut state = started(PieceKind::O);
        state.drop_counter_ms = 150.0;
        assert_eq!(state.drop(), DropOutcome::Moved);
        assert_eq!(state.drop_counter_ms, 0.0);
    }

    #[test]
    fn test_tick_drops_after_interval() {
        let mut state = started(PieceKind::O);
        let y0 = state.active.unwrap().y;

        assert_eq!(state.tick(1000), None);
        assert_eq!(state.tick(1000), None); // equal is not enough
        assert_eq!(state.tick(1), Some(DropOutcome::Moved));
        assert_eq!(state.active.unwrap().y, y0 + 1);
        assert_eq!(state.drop_counter_ms, 0.0);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut state = started(PieceKind::O);
        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.tick(5000), None);
        assert!(!state.move_horizontal(1));
        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.tick(5000), Some(DropOutcome::Moved));
    }

    #[test]
    fn test_hard_drop_locks_and_spawns() {
        let mut state = started(PieceKind::O);
        let outcome = state.hard_drop();
        assert_eq!(
            outcome,
            DropOutcome::Locked {
                lines_cleared: 0,
                spawn: SpawnOutcome::Spawned
            }
        );
        assert_eq!(state.grid.get(4, 19), Some(4));
        assert_eq!(state.piece_id, 2);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_game_over_reset_policy() {
        let mut state = started(PieceKind::O);
        state.score = 500;
        state.level = 3;
        // Fill row 0 under the spawn area
        for x in 0..10 {
            if x != 0 {
                state.grid.set(x, 0, 2);
            }
        }
        let outcome = state.spawn_piece_of(PieceKind::O, Rotation::North);
        assert_eq!(outcome, SpawnOutcome::GameOver { final_score: 500 });
        assert!(!state.game_over);
        assert_eq!(state.games_played, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.grid.cells().iter().all(|&c| c == 0));
        assert!(state.active.is_some());
    }

    #[test]
    fn test_game_over_halt_policy() {
        let config = GameConfig {
            game_over: GameOverPolicy::Halt,
            seed: Some(3),
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).unwrap();
        state.start();
        state.grid.set(4, 1, 2);
        state.grid.set(5, 1, 2);
        state.grid.set(4, 0, 2);

        let outcome = state.spawn_piece_of(PieceKind::O, Rotation::North);
        assert!(matches!(outcome, SpawnOutcome::GameOver { .. }));
        assert!(state.game_over);
        assert!(state.active.is_none());
        assert_eq!(state.drop(), DropOutcome::Idle);
        assert_eq!(state.tick(10_000), None);
        assert!(!state.apply_action(GameAction::MoveLeft));

        assert_eq!(state.restart(), SpawnOutcome::Spawned);
        assert!(!state.game_over);
        assert!(state.active.is_some());
        assert!(state.grid.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_move_horizontal_steps_one_column() {
        let mut state = started(PieceKind::O);
        let x0 = state.active.unwrap().x;
        // Wall two columns to the right of the piece
        state.grid.set(x0 + 3, 0, 2);
        state.grid.set(x0 + 3, 1, 2);

        assert!(!state.move_horizontal(0));
        assert!(state.move_horizontal(5));
        assert_eq!(state.active.unwrap().x, x0 + 1);
        assert!(!state.move_horizontal(5));
        assert_eq!(state.active.unwrap().x, x0 + 1);
        assert!(state.move_horizontal(-100));
        assert_eq!(state.active.unwrap().x, x0);
    }

    #[test]
    fn test_reset_policy_halts_when_piece_cannot_fit_empty_grid() {
        let config = GameConfig {
            width: 3,
            ..GameConfig::default()
        };
        let grid = Grid::new(3, 20).unwrap();
        let mut state = GameState::with_grid(config, grid);

        let outcome = state.spawn_piece_of(PieceKind::I, Rotation::North);
        assert_eq!(outcome, SpawnOutcome::GameOver { final_score: 0 });
        assert!(state.game_over);
        assert!(state.active.is_none());

        assert_eq!(state.drop(), DropOutcome::Idle);
        assert!(state.grid.cells().iter().all(|&c| c == 0));
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_new_rejects_grid_smaller_than_largest_piece() {
        for (width, height) in [(3, 20), (10, 3)] {
            let config = GameConfig {
                width,
                height,
                ..GameConfig::default()
            };
            assert!(matches!(
                GameState::new(config),
                Err(CoreError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = started(PieceKind::T);
        let snap = state.snapshot();
        assert_eq!(snap.board.len(), 20);
        assert_eq!(snap.board[0].len(), 10);
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::T);
        assert_eq!(active.cells.len(), 4);
        assert_eq!(snap.level, 1);
    }
}
