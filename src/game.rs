//! Screen flow around runs
//!
//! Start -> AvatarSelect -> Playing -> Results -> AvatarSelect ...
//!
//! `Game` owns the current `Run`, the input state and the store. Every new
//! run is built from scratch with the session's tuning, so speed, score and
//! spawn timer never leak from one run into the next.

use crate::highscores::HighScore;
use crate::persistence::KeyValueStore;
use crate::render::{self, Drawable};
use crate::settings::Tuning;
use crate::sim::{GameEvent, InputState, Playfield, Run, tick};

/// Which screen the host should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen
    Start,
    /// Avatar picker
    AvatarSelect,
    /// A run is in progress
    Playing,
    /// Last run's outcome
    Results { final_score: u64, high_score: u64 },
}

/// A game session over a key-value store
pub struct Game<S: KeyValueStore> {
    store: S,
    tuning: Tuning,
    high_score: HighScore,
    screen: Screen,
    run: Option<Run>,
    playfield: Playfield,
    /// Held keys, written by the host's keyboard handlers
    pub input: InputState,
}

impl<S: KeyValueStore> Game<S> {
    /// Session with the default tuning
    pub fn new(store: S, playfield: Playfield) -> Self {
        Self::with_tuning(store, playfield, Tuning::default())
    }

    /// Session with host-supplied tuning (sanitized before use)
    pub fn with_tuning(store: S, playfield: Playfield, tuning: Tuning) -> Self {
        let high_score = HighScore::load(&store);
        Self {
            store,
            tuning: tuning.sanitized(),
            high_score,
            screen: Screen::Start,
            run: None,
            playfield,
            input: InputState::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    /// Best score known to this session
    pub fn high_score(&self) -> u64 {
        self.high_score.best
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Leave the title or results screen for the avatar picker
    pub fn open_avatar_picker(&mut self) {
        match self.screen {
            Screen::Start | Screen::Results { .. } => self.screen = Screen::AvatarSelect,
            Screen::AvatarSelect | Screen::Playing => {}
        }
    }

    /// Start a fresh run with the chosen avatar
    ///
    /// Ignored while a run is already in progress.
    pub fn choose_avatar(&mut self, glyph: &str, seed: u64) {
        if self.screen == Screen::Playing {
            log::warn!("Ignoring avatar pick during a run");
            return;
        }

        self.high_score = HighScore::load(&self.store);
        self.input.clear();

        let mut run = Run::new(&self.tuning, glyph, self.playfield, self.high_score.best, seed);
        run.start();
        self.run = Some(run);
        self.screen = Screen::Playing;
    }

    /// Track the host canvas size
    pub fn resize(&mut self, playfield: Playfield) {
        self.playfield = playfield;
        if let Some(run) = &mut self.run {
            run.set_playfield(playfield);
        }
    }

    /// Simulate one frame of the current run
    ///
    /// On game over the high score is persisted before the event is returned
    /// and the screen switches to `Results`.
    pub fn frame(&mut self) -> Option<GameEvent> {
        if self.screen != Screen::Playing {
            return None;
        }
        let run = self.run.as_mut()?;
        let input = self.input.snapshot();
        let event = tick(run, &input)?;

        let GameEvent::GameOver {
            final_score,
            high_score,
        } = event;
        if self.high_score.submit(high_score) {
            log::info!("New high score: {high_score}");
        }
        self.high_score.save(&mut self.store);
        self.screen = Screen::Results {
            final_score,
            high_score: self.high_score.best,
        };

        Some(event)
    }

    /// Primitives for the current run (empty outside of one)
    pub fn drawables(&self) -> Vec<Drawable> {
        match (&self.screen, &self.run) {
            (Screen::Playing, Some(run)) => render::frame(run),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::{Obstacle, ObstacleKind, RunPhase};
    use glam::Vec2;

    fn game() -> Game<MemoryStore> {
        Game::new(MemoryStore::new(), Playfield::new(800.0, 400.0))
    }

    /// Drop an obstacle right on top of the avatar
    fn block_avatar(game: &mut Game<MemoryStore>) {
        let run = game.run.as_mut().unwrap();
        let id = run.next_entity_id();
        let pos = run.avatar.pos + Vec2::splat(5.0) + Vec2::new(run.game_speed, 0.0);
        run.obstacles.push(Obstacle {
            id,
            kind: ObstacleKind::Ground,
            pos,
            size: Vec2::splat(20.0),
            dx: 0.0,
            color: "#ff0000".into(),
        });
    }

    #[test]
    fn test_first_run_persists_score() {
        let mut game = game();
        game.open_avatar_picker();
        game.choose_avatar("😀", 2024);
        assert_eq!(game.run().unwrap().score.current_high_score(), 0);

        for _ in 0..42 {
            assert!(game.frame().is_none());
        }
        block_avatar(&mut game);

        assert_eq!(
            game.frame(),
            Some(GameEvent::GameOver {
                final_score: 42,
                high_score: 42,
            })
        );
        assert_eq!(
            game.screen(),
            Screen::Results {
                final_score: 42,
                high_score: 42,
            }
        );
        assert_eq!(game.store.get(HighScore::STORAGE_KEY).as_deref(), Some("42"));
        assert_eq!(game.run().unwrap().phase, RunPhase::Ended);

        // Nothing more happens until a new run is chosen
        assert!(game.frame().is_none());
    }

    #[test]
    fn test_lower_score_keeps_stored_high() {
        let mut store = MemoryStore::new();
        store.set(HighScore::STORAGE_KEY, "500");
        let mut game = Game::new(store, Playfield::new(800.0, 400.0));
        game.choose_avatar("😀", 2024);
        assert_eq!(game.run().unwrap().score.current_high_score(), 500);

        for _ in 0..10 {
            game.frame();
        }
        block_avatar(&mut game);
        assert_eq!(
            game.frame(),
            Some(GameEvent::GameOver {
                final_score: 10,
                high_score: 500,
            })
        );
        assert_eq!(game.store.get(HighScore::STORAGE_KEY).as_deref(), Some("500"));
    }

    #[test]
    fn test_host_tuning_is_sanitized() {
        let tuning = Tuning {
            game_speed: -3.0,
            spawn_interval: 0,
            ..Default::default()
        };
        let game = Game::with_tuning(MemoryStore::new(), Playfield::new(800.0, 400.0), tuning);
        assert_eq!(game.tuning().game_speed, crate::consts::GAME_SPEED);
        assert_eq!(game.tuning().spawn_interval, 1);
    }

    #[test]
    fn test_screen_flow() {
        let mut game = game();
        assert_eq!(game.screen(), Screen::Start);
        assert!(game.frame().is_none());

        game.open_avatar_picker();
        assert_eq!(game.screen(), Screen::AvatarSelect);

        game.choose_avatar("🐱", 1);
        assert_eq!(game.screen(), Screen::Playing);
        assert!(game.run().is_some_and(|r| r.is_running()));

        // Picker can't interrupt a run
        game.open_avatar_picker();
        assert_eq!(game.screen(), Screen::Playing);
    }

    #[test]
    fn test_avatar_pick_during_run_ignored() {
        let mut game = game();
        game.choose_avatar("🐱", 1);
        game.frame();
        game.choose_avatar("🐶", 2);
        let run = game.run().unwrap();
        assert_eq!(run.avatar.glyph, "🐱");
        assert_eq!(run.time_ticks, 1);
    }

    #[test]
    fn test_resize_reaches_run() {
        let mut game = game();
        game.choose_avatar("🐱", 1);
        game.resize(Playfield::new(1024.0, 300.0));
        assert_eq!(game.run().unwrap().playfield, Playfield::new(1024.0, 300.0));
    }

    #[test]
    fn test_drawables_only_while_playing() {
        let mut game = game();
        assert!(game.drawables().is_empty());
        game.choose_avatar("🐱", 1);
        assert_eq!(game.drawables().len(), 3);
    }
}
