//! The welcome/playing/paused/game-over session flow
//!
//! The session owns the board and the in-memory high score, decides which
//! commands each screen accepts, and emits audio cues at transitions. It
//! never touches the terminal: the driver pumps commands in and drains cues
//! out once per tick.

use std::mem;

use crate::audio::AudioCue;
use crate::game::{Board, GameConfig};
use crate::input::Command;
use crate::persistence::HighScoreStore;

/// Which screen the session is on. Pausing moves the board across untouched;
/// game over keeps it around for the final display; a new game always builds
/// a fresh board.
pub enum Screen {
    Welcome,
    Playing(Board),
    Paused(Board),
    GameOver(Board),
}

impl Screen {
    pub fn board(&self) -> Option<&Board> {
        match self {
            Screen::Welcome => None,
            Screen::Playing(board) | Screen::Paused(board) | Screen::GameOver(board) => {
                Some(board)
            }
        }
    }

    pub fn board_mut(&mut self) -> Option<&mut Board> {
        match self {
            Screen::Welcome => None,
            Screen::Playing(board) | Screen::Paused(board) | Screen::GameOver(board) => {
                Some(board)
            }
        }
    }
}

pub struct Session {
    pub screen: Screen,
    /// Best score seen so far; read from the store when a game starts and
    /// written back when it ends
    pub high_score: u32,
    pub audio_on: bool,
    /// Non-fatal problems surfaced to the player, e.g. a failed score write
    pub status: Option<String>,
    store: HighScoreStore,
    config: GameConfig,
    cues: Vec<AudioCue>,
    quit: bool,
}

impl Session {
    pub fn new(config: GameConfig, store: HighScoreStore) -> Self {
        Self {
            screen: Screen::Welcome,
            high_score: 0,
            audio_on: true,
            status: None,
            store,
            config,
            cues: Vec::new(),
            quit: false,
        }
    }

    /// Quit is a flag rather than an exit call so the driver can observe it
    /// once per tick, no matter which screen requested it
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Audio cues emitted since the last drain, in emission order
    pub fn take_cues(&mut self) -> Vec<AudioCue> {
        mem::take(&mut self.cues)
    }

    /// Dispatch one command to the current screen. Commands a screen does
    /// not accept are ignored; quit is accepted everywhere.
    pub fn handle_command(&mut self, command: Command) {
        if matches!(command, Command::Quit) {
            self.quit = true;
            return;
        }

        match &self.screen {
            Screen::Welcome => {
                if matches!(command, Command::Start) {
                    self.start_game();
                }
            }
            Screen::Playing(_) => self.playing_command(command),
            Screen::Paused(_) => {
                if matches!(command, Command::TogglePause) {
                    self.resume();
                }
            }
            Screen::GameOver(_) => {
                if matches!(command, Command::Continue) {
                    self.screen = Screen::Welcome;
                }
            }
        }
    }

    /// Advance the game by one tick. Only the Playing screen moves; the
    /// driver keeps calling this during Paused so resume stays responsive,
    /// but a paused or finished board is left alone.
    pub fn tick(&mut self) {
        let Screen::Playing(board) = &mut self.screen else {
            return;
        };

        board.advance();

        if board.check_food() && board.score > self.high_score {
            self.high_score = board.score;
        }

        if board.check_collision().is_some() {
            self.cues.push(AudioCue::GameOverSound);
            self.enter_game_over();
        }
    }

    fn playing_command(&mut self, command: Command) {
        match command {
            Command::Move(direction) => {
                if let Screen::Playing(board) = &mut self.screen {
                    board.steer(direction);
                }
            }
            Command::ToggleAudio => {
                self.audio_on = !self.audio_on;
                self.cues.push(if self.audio_on {
                    AudioCue::Unmute
                } else {
                    AudioCue::Mute
                });
            }
            Command::TogglePause => self.pause(),
            _ => {}
        }
    }

    fn start_game(&mut self) {
        // A new game starts with a clean footer; only problems from this
        // game belong on it
        self.status = None;

        self.high_score = match self.store.load() {
            Ok(score) => score,
            Err(err) => {
                // Missing or corrupt record: fall back to 0 and keep playing
                self.status = Some(format!("Could not read high score: {err:#}"));
                0
            }
        };

        self.screen = Screen::Playing(Board::new(self.config.clone()));
        self.audio_on = true;
        self.cues.push(AudioCue::StartMusic);
    }

    fn pause(&mut self) {
        if let Screen::Playing(board) = mem::replace(&mut self.screen, Screen::Welcome) {
            self.screen = Screen::Paused(board);
        }
    }

    fn resume(&mut self) {
        if let Screen::Paused(board) = mem::replace(&mut self.screen, Screen::Welcome) {
            self.screen = Screen::Playing(board);
        }
    }

    /// Persist the high score and show the game-over screen. The write
    /// happens here and nowhere else, so it runs exactly once per game; a
    /// failed write is surfaced as a status message and the session goes on.
    fn enter_game_over(&mut self) {
        if let Err(err) = self.store.save(self.high_score) {
            self.status = Some(format!("Could not save high score: {err:#}"));
        }

        if let Screen::Playing(board) = mem::replace(&mut self.screen, Screen::Welcome) {
            self.screen = Screen::GameOver(board);
        }
    }
}
