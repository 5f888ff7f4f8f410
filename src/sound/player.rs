//! Sound player implementation using rodio.
//!
//! Plays a short synthesized beep when a period ends. No audio files are
//! shipped; the tone is generated with `rodio::source::SineWave`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;

/// Beep pitch in Hz.
const BEEP_FREQUENCY: f32 = 880.0;
/// Beep length.
const BEEP_DURATION: Duration = Duration::from_millis(350);
/// Beep loudness, scaled down from full amplitude.
const BEEP_AMPLIFY: f32 = 0.2;

/// A sound player that uses rodio for audio playback.
///
/// The underlying output stream is bound to the thread that created it, so
/// the player is not `Send`: keep it on the creating thread and render
/// events there instead of moving it into spawned tasks.
/// Playback is non-blocking; the beep continues in the background.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// Whether sound playback is disabled.
    disabled: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new sound player.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all sound playback will be silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            disabled: AtomicBool::new(disabled),
        })
    }

    /// Creates a disabled sound player.
    ///
    /// All calls to `play` will silently succeed without producing sound.
    ///
    /// # Errors
    ///
    /// May still fail if unable to initialize the audio stream.
    pub fn disabled() -> Result<Self, SoundError> {
        Self::new(true)
    }

    /// Plays the notification beep.
    ///
    /// Non-blocking; the beep plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if the audio sink cannot be created.
    pub fn play(&self) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!("sound playback disabled, skipping");
            return Ok(());
        }

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        let beep = SineWave::new(BEEP_FREQUENCY)
            .take_duration(BEEP_DURATION)
            .amplify(BEEP_AMPLIFY);

        sink.append(beep);
        sink.detach(); // Non-blocking: sound continues after function returns

        debug!("beep playback started (detached)");
        Ok(())
    }

    /// Returns true if sound playback is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    /// Enables sound playback.
    pub fn enable(&self) {
        self.disabled.store(false, Ordering::Relaxed);
        debug!("sound playback enabled");
    }

    /// Disables sound playback.
    pub fn disable(&self) {
        self.disabled.store(true, Ordering::Relaxed);
        debug!("sound playback disabled");
    }

    /// Returns true if the audio system is available.
    ///
    /// Always true if the player was successfully created, as the audio
    /// stream is initialized during construction.
    #[must_use]
    pub fn is_available(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// This is a convenience function for optional sound support. If audio
/// initialization fails, a warning is logged and None is returned; the
/// timer keeps running without sound.
#[must_use]
pub fn try_create_player(disabled: bool) -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new(disabled) {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("audio not available, sound disabled: {}", e);
            None
        }
    }
}
