//=========================================================================
// Audio
//
// Play/stop requests issued by behaviors. Mixing is the job of whatever
// implements `AudioService`; the runtime only routes requests to it.
// Paths are resource-relative.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::Path;

//=== External Crates =====================================================

use log::debug;

//=== Volume ==============================================================

/// Loudest volume a request may carry.
pub const MAX_VOLUME: u8 = 128;

//=== AudioService ========================================================

pub trait AudioService {
    /// Starts looping `path` as background music, replacing any current track.
    fn play_music(&mut self, path: &Path, volume: u8);

    /// Plays `path` once.
    fn play_sound(&mut self, path: &Path, volume: u8);

    fn stop_music(&mut self);
}

//=== SilentAudio =========================================================

/// Accepts every request and only logs it.
#[derive(Debug, Default)]
pub struct SilentAudio {
    music: Option<String>,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track most recently started and not stopped since.
    pub fn current_music(&self) -> Option<&str> {
        self.music.as_deref()
    }
}

impl AudioService for SilentAudio {
    fn play_music(&mut self, path: &Path, volume: u8) {
        debug!(
            target: "audio",
            "Music `{}` at volume {}",
            path.display(),
            volume.min(MAX_VOLUME)
        );
        self.music = Some(path.display().to_string());
    }

    fn play_sound(&mut self, path: &Path, volume: u8) {
        debug!(
            target: "audio",
            "Sound `{}` at volume {}",
            path.display(),
            volume.min(MAX_VOLUME)
        );
    }

    fn stop_music(&mut self) {
        if let Some(music) = self.music.take() {
            debug!(target: "audio", "Music `{}` stopped", music);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_audio_tracks_music() {
        let mut audio = SilentAudio::new();
        audio.play_music(Path::new("music/theme.ogg"), MAX_VOLUME);
        audio.play_sound(Path::new("sfx/jump.wav"), 40);
        assert_eq!(audio.current_music(), Some("music/theme.ogg"));

        audio.stop_music();
        assert_eq!(audio.current_music(), None);
    }
}
