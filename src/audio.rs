//! Audio cue signals
//!
//! The game only decides *when* a sound should happen. Mixing and decoding
//! belong to whatever implements [`AudioSink`]; the default sink discards
//! every cue so the game runs fine without audio hardware.

/// A discrete sound event emitted at a session transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Background music, started when a game begins
    StartMusic,
    /// Played once when the snake crashes
    GameOverSound,
    /// The player muted the music
    Mute,
    /// The player unmuted the music
    Unmute,
}

/// Playback seam between the game and an audio backend
pub trait AudioSink {
    fn cue(&mut self, cue: AudioCue);
}

/// Sink that drops every cue
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn cue(&mut self, _cue: AudioCue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records cues for assertions
    #[derive(Default)]
    struct Recorder(Vec<AudioCue>);

    impl AudioSink for Recorder {
        fn cue(&mut self, cue: AudioCue) {
            self.0.push(cue);
        }
    }

    #[test]
    fn test_sink_receives_cues_in_order() {
        let mut recorder = Recorder::default();
        recorder.cue(AudioCue::StartMusic);
        recorder.cue(AudioCue::Mute);
        recorder.cue(AudioCue::Unmute);
        assert_eq!(
            recorder.0,
            vec![AudioCue::StartMusic, AudioCue::Mute, AudioCue::Unmute]
        );
    }
}
