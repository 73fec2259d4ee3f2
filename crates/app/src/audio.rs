//! Fire-and-forget playback for the simulation's audio cues.

use delve_core::{Cue, CueSink};
use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound};

const CUE_VOLUME: f32 = 0.3;

/// One optional sound per cue. A missing asset file loads as `None` and that
/// cue simply stays silent.
pub struct CueBank {
    coin: Option<Sound>,
    damage: Option<Sound>,
    key: Option<Sound>,
    door: Option<Sound>,
    win: Option<Sound>,
    gameover: Option<Sound>,
}

impl CueBank {
    pub async fn load() -> Self {
        Self {
            coin: load_cue("assets/coin.wav").await,
            damage: load_cue("assets/damage.wav").await,
            key: load_cue("assets/key.wav").await,
            door: load_cue("assets/door.wav").await,
            win: load_cue("assets/win.wav").await,
            gameover: load_cue("assets/gameover.wav").await,
        }
    }

    fn sound_for(&self, cue: Cue) -> Option<&Sound> {
        match cue {
            Cue::Coin => self.coin.as_ref(),
            Cue::Damage => self.damage.as_ref(),
            Cue::Key => self.key.as_ref(),
            Cue::Door => self.door.as_ref(),
            Cue::Win => self.win.as_ref(),
            Cue::GameOver => self.gameover.as_ref(),
        }
    }
}

impl CueSink for CueBank {
    fn play(&mut self, cue: Cue) {
        // No queueing or mixing control: cues triggered together overlap.
        if let Some(sound) = self.sound_for(cue) {
            play_sound(sound, PlaySoundParams { looped: false, volume: CUE_VOLUME });
        }
    }
}

async fn load_cue(path: &str) -> Option<Sound> {
    load_sound(path).await.ok()
}
