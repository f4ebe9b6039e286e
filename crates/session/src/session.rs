//! Session - everything around the engine that a player sees.
//!
//! The session owns the engine and gates calls into it: no slides before the
//! first game, while paused, behind an overlay, or after the board is stuck.
//! It also keeps the move counter, the play clock, the persisted best score,
//! theme and sound switch, and decides which overlay is on screen.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::clock::PlayClock;
use crate::core::{GameSnapshot, GameState, RandomSource, SimpleRng};
use crate::store::{KeyValueStore, Preferences, HIGH_SCORE_KEY, SOUND_KEY, THEME_KEY};
use crate::types::{Direction, GameAction, Spawn, Theme};

/// Which modal layer covers the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// How-to-play text; shown at launch before the first game
    Instructions,
    Paused,
    /// 2048 reached: continue this game or start a new one
    WinPrompt,
    /// Board stuck; shows the final score
    GameOver,
}

/// Feedback sounds requested by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Move,
    Merge,
    Win,
    GameOver,
}

impl SoundCue {
    /// Cues worth an audible signal on a terminal (plain moves are silent)
    pub fn is_audible(self) -> bool {
        !matches!(self, SoundCue::Move)
    }
}

/// Cues produced by one action (at most move/merge, win, game over)
pub type SoundCues = ArrayVec<SoundCue, 3>;

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub game: GameSnapshot,
    pub best: u32,
    pub moves: u32,
    pub elapsed: Duration,
    pub overlay: Overlay,
    pub started: bool,
    pub paused: bool,
    pub theme: Theme,
    pub sound_enabled: bool,
    pub last_spawn: Option<Spawn>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            game: GameSnapshot::default(),
            best: 0,
            moves: 0,
            elapsed: Duration::ZERO,
            overlay: Overlay::Instructions,
            started: false,
            paused: false,
            theme: Theme::Light,
            sound_enabled: true,
            last_spawn: None,
        }
    }
}

pub struct Session<S: KeyValueStore, R: RandomSource = SimpleRng> {
    game: GameState<R>,
    store: S,
    prefs: Preferences,
    clock: PlayClock,
    overlay: Overlay,
    started: bool,
    paused: bool,
    moves: u32,
    last_spawn: Option<Spawn>,
}

impl<S: KeyValueStore, R: RandomSource> Session<S, R> {
    /// Wrap an unstarted engine. Preferences are read from `store`; the
    /// instructions overlay is shown until the player confirms.
    pub fn new(game: GameState<R>, store: S) -> Self {
        let prefs = Preferences::load(&store);
        debug!(?prefs, "preferences loaded");
        Self {
            game,
            store,
            prefs,
            clock: PlayClock::new(),
            overlay: Overlay::Instructions,
            started: false,
            paused: false,
            moves: 0,
            last_spawn: None,
        }
    }

    /// Apply one player action at time `now`.
    ///
    /// Returns the sound cues to play; empty when sound is off.
    pub fn apply(&mut self, action: GameAction, now: Instant) -> SoundCues {
        let mut cues = SoundCues::new();
        match action {
            GameAction::Slide(direction) => self.slide(direction, now, &mut cues),
            GameAction::Pause => self.toggle_pause(now),
            GameAction::NewGame => self.new_game(now),
            GameAction::ToggleTheme => self.toggle_theme(),
            GameAction::ToggleSound => self.toggle_sound(),
            GameAction::Help => self.show_instructions(now),
            GameAction::Confirm => self.confirm(now),
        }
        if !self.prefs.sound_enabled {
            cues.clear();
        }
        cues
    }

    /// Reset the engine and counters and start the clock
    pub fn new_game(&mut self, now: Instant) {
        self.game.start_game();
        self.clock.start(now);
        self.started = true;
        self.paused = false;
        self.moves = 0;
        self.last_spawn = None;
        self.overlay = Overlay::None;
        info!(best = self.prefs.high_score, "new game");
    }

    /// A slide is allowed right now
    pub fn can_slide(&self) -> bool {
        self.started && !self.paused && self.overlay == Overlay::None && !self.game.is_stuck()
    }

    fn slide(&mut self, direction: Direction, now: Instant, cues: &mut SoundCues) {
        if !self.can_slide() {
            return;
        }

        let was_won = self.game.is_won();
        let outcome = self.game.slide(direction);
        if !outcome.moved {
            return;
        }

        self.moves += 1;
        self.last_spawn = outcome.spawned;
        cues.push(if outcome.score_delta > 0 {
            SoundCue::Merge
        } else {
            SoundCue::Move
        });
        self.record_best();

        if outcome.won && !was_won {
            info!(score = self.game.score(), moves = self.moves, "reached 2048");
            self.overlay = Overlay::WinPrompt;
            cues.push(SoundCue::Win);
        }

        if outcome.stuck {
            self.clock.stop(now);
            self.overlay = Overlay::GameOver;
            cues.push(SoundCue::GameOver);
            info!(
                score = self.game.score(),
                moves = self.moves,
                elapsed_secs = self.clock.elapsed(now).as_secs(),
                "game over"
            );
        }
    }

    fn record_best(&mut self) {
        let score = self.game.score();
        if score <= self.prefs.high_score {
            return;
        }
        self.prefs.high_score = score;
        if let Err(e) = self.store.set(HIGH_SCORE_KEY, &score.to_string()) {
            warn!(error = %e, "failed to persist high score");
        }
    }

    fn toggle_pause(&mut self, now: Instant) {
        if !self.started || self.game.is_stuck() {
            return;
        }
        match self.overlay {
            Overlay::None => self.pause(now),
            Overlay::Paused => self.resume(now),
            _ => {}
        }
    }

    fn pause(&mut self, now: Instant) {
        self.paused = true;
        self.clock.pause(now);
        self.overlay = Overlay::Paused;
    }

    fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.clock.resume(now);
        self.overlay = Overlay::None;
    }

    fn show_instructions(&mut self, now: Instant) {
        if self.started && !self.paused && self.overlay == Overlay::None {
            self.paused = true;
            self.clock.pause(now);
        }
        if matches!(self.overlay, Overlay::None | Overlay::Paused) {
            self.overlay = Overlay::Instructions;
        }
    }

    fn confirm(&mut self, now: Instant) {
        match self.overlay {
            Overlay::Instructions if !self.started => self.new_game(now),
            Overlay::Instructions | Overlay::Paused => {
                if self.paused {
                    self.resume(now);
                } else {
                    self.overlay = Overlay::None;
                }
            }
            Overlay::WinPrompt => {
                debug!("continuing after win");
                self.overlay = Overlay::None;
            }
            Overlay::GameOver => self.new_game(now),
            Overlay::None => {}
        }
    }

    fn toggle_theme(&mut self) {
        self.prefs.theme = self.prefs.theme.toggle();
        if let Err(e) = self.store.set(THEME_KEY, self.prefs.theme.as_str()) {
            warn!(error = %e, "failed to persist theme");
        }
    }

    fn toggle_sound(&mut self) {
        self.prefs.sound_enabled = !self.prefs.sound_enabled;
        let value = if self.prefs.sound_enabled { "true" } else { "false" };
        if let Err(e) = self.store.set(SOUND_KEY, value) {
            warn!(error = %e, "failed to persist sound setting");
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn best(&self) -> u32 {
        self.prefs.high_score
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn sound_enabled(&self) -> bool {
        self.prefs.sound_enabled
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.clock.elapsed(now)
    }

    pub fn snapshot_into(&self, now: Instant, out: &mut SessionSnapshot) {
        self.game.snapshot_into(&mut out.game);
        out.best = self.prefs.high_score;
        out.moves = self.moves;
        out.elapsed = self.clock.elapsed(now);
        out.overlay = self.overlay;
        out.started = self.started;
        out.paused = self.paused;
        out.theme = self.prefs.theme;
        out.sound_enabled = self.prefs.sound_enabled;
        out.last_spawn = self.last_spawn;
    }

    pub fn snapshot(&self, now: Instant) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(now, &mut s);
        s
    }
}
