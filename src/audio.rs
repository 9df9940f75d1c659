//! Sound effects played through rodio
//!
//! Procedurally generated tones, rendered once at startup. No audio files.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::sim::GameEvent;

pub const SAMPLE_RATE: u32 = 44_100;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Fish or seagull eaten
    Eat,
    /// Crab pinch or orca strike
    Hit,
    /// Timer ran out
    GameOver,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Eat, SoundEffect::Hit, SoundEffect::GameOver];

    /// Effect for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Ate { .. } => Some(SoundEffect::Eat),
            GameEvent::Pinched { .. } | GameEvent::OrcaStrike { .. } => Some(SoundEffect::Hit),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            _ => None,
        }
    }

    fn tone(self) -> Tone {
        match self {
            // Quick rising chirp
            SoundEffect::Eat => Tone {
                wave: Waveform::Sine,
                start_hz: 520.0,
                end_hz: 880.0,
                duration: 0.12,
                gain: 0.3,
            },
            SoundEffect::Hit => Tone {
                wave: Waveform::Square,
                start_hz: 220.0,
                end_hz: 90.0,
                duration: 0.18,
                gain: 0.15,
            },
            // Long falling buzz
            SoundEffect::GameOver => Tone {
                wave: Waveform::Saw,
                start_hz: 400.0,
                end_hz: 80.0,
                duration: 0.6,
                gain: 0.2,
            },
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
}

impl Waveform {
    /// Sample at `phase` in [0, 1)
    fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * std::f32::consts::TAU).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => 2.0 * phase - 1.0,
        }
    }
}

/// Oscillator with a linear pitch sweep and a decaying envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub wave: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    /// Seconds
    pub duration: f32,
    /// Peak amplitude
    pub gain: f32,
}

impl Tone {
    /// Render mono samples, fading to near silence by the last one
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let count = (sample_rate as f32 * self.duration) as usize;
        let mut phase = 0.0f32;
        (0..count)
            .map(|i| {
                let t = i as f32 / count as f32;
                let hz = self.start_hz + (self.end_hz - self.start_hz) * t;
                let sample = self.wave.sample(phase) * self.gain * (1.0 - t) * (-3.0 * t).exp();
                phase = (phase + hz / sample_rate as f32).fract();
                sample
            })
            .collect()
    }
}

/// Audio manager for the game
pub struct AudioManager {
    /// Stream must stay alive for the handle to play
    output: Option<(OutputStream, OutputStreamHandle)>,
    clips: Vec<Vec<f32>>,
    volume: f32,
}

impl AudioManager {
    /// Open the default output device. Missing audio is never fatal.
    pub fn new(enabled: bool, volume: f32) -> Self {
        let output = if enabled {
            match OutputStream::try_default() {
                Ok(output) => Some(output),
                Err(e) => {
                    log::warn!("No audio output ({e}), sound disabled");
                    None
                }
            }
        } else {
            log::info!("Sound effects disabled in settings");
            None
        };
        Self::with_output(output, volume)
    }

    /// Silent manager, for headless use
    pub fn disabled() -> Self {
        Self::with_output(None, 0.0)
    }

    fn with_output(output: Option<(OutputStream, OutputStreamHandle)>, volume: f32) -> Self {
        let clips = SoundEffect::ALL
            .iter()
            .map(|effect| effect.tone().render(SAMPLE_RATE))
            .collect();
        Self {
            output,
            clips,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.output.is_some() && self.volume > 0.0
    }

    /// Rendered samples for `effect`
    pub fn clip(&self, effect: SoundEffect) -> &[f32] {
        &self.clips[effect.index()]
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }
        let Some((_, handle)) = &self.output else {
            return;
        };

        match Sink::try_new(handle) {
            Ok(sink) => {
                sink.set_volume(self.volume);
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, self.clip(effect).to_vec()));
                sink.detach();
            }
            Err(e) => log::debug!("Could not play {:?}: {e}", effect),
        }
    }

    /// Play whatever the tick's events call for
    pub fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
