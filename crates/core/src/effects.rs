//! Side-effect capabilities the simulation requests but never performs itself.
//! The shell supplies an implementation; the core stays headless.

/// Named audio triggers. The shell decides what, if anything, each one sounds like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Coin,
    Damage,
    Key,
    Door,
    Win,
    GameOver,
}

/// Fire-and-forget cue playback. No completion tracking, no mixing guarantees.
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

/// Sink for headless runs; drops every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentCues;

impl CueSink for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}

/// Test sink that keeps cues in trigger order.
#[derive(Clone, Debug, Default)]
pub struct RecordedCues {
    pub cues: Vec<Cue>,
}

impl CueSink for RecordedCues {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_cues_preserve_trigger_order() {
        let mut sink = RecordedCues::default();
        sink.play(Cue::Key);
        sink.play(Cue::Door);
        sink.play(Cue::Coin);
        assert_eq!(sink.cues, vec![Cue::Key, Cue::Door, Cue::Coin]);
    }
}
