// SPDX-License-Identifier: MPL-2.0
//! Shutter sound playback through cpal.
//!
//! The shutter sample is a short WAV embedded in the binary. It is
//! decoded once at startup; each playback request spawns a short-lived
//! audio thread (cpal streams are not `Send`) that plays the clip at the
//! requested volume and exits.

use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rust_embed::RustEmbed;
use std::sync::Arc;
use std::time::Duration;

#[derive(RustEmbed)]
#[folder = "assets/sfx/"]
struct Asset;

const SHUTTER_SAMPLE: &str = "shutter.wav";

/// Sink for one-shot sound playback.
///
/// `volume` is normalized to `[0.0, 1.0]`. Playback begins
/// asynchronously; failures after it begins are logged, not reported.
pub trait SoundPlayer: Send + Sync {
    fn play(&self, volume: f32) -> Result<()>;
}

/// Plays the embedded shutter sample through the default output device.
pub struct CpalPlayer {
    /// Mono samples normalized to [-1.0, 1.0].
    samples: Arc<Vec<f32>>,
    sample_rate: u32,
}

impl CpalPlayer {
    /// Decodes the embedded shutter sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded asset is missing or fails to
    /// decode as WAV.
    pub fn new() -> Result<Self> {
        let asset = Asset::get(SHUTTER_SAMPLE)
            .ok_or_else(|| Error::Audio(format!("missing embedded asset: {SHUTTER_SAMPLE}")))?;
        let (samples, sample_rate) = decode_wav(asset.data.as_ref())?;
        Ok(Self {
            samples: Arc::new(samples),
            sample_rate,
        })
    }

    /// Returns the clip length.
    fn clip_duration(&self) -> Duration {
        let seconds = self.samples.len() as f64 / f64::from(self.sample_rate);
        Duration::from_secs_f64(seconds)
    }
}

impl SoundPlayer for CpalPlayer {
    fn play(&self, volume: f32) -> Result<()> {
        let samples = Arc::clone(&self.samples);
        let sample_rate = self.sample_rate;
        let clip = self.clip_duration();
        let volume = volume.clamp(0.0, 1.0);

        // The stream must live on the thread that created it.
        std::thread::Builder::new()
            .name("shutterbox-audio".to_string())
            .spawn(move || {
                if let Err(error) = play_clip(&samples, sample_rate, volume, clip) {
                    eprintln!("Error playing sound: {}", error);
                }
            })
            .map_err(|e| Error::Audio(format!("failed to spawn audio thread: {e}")))?;

        Ok(())
    }
}

/// Fallback player used when no output device or sample is available.
///
/// Keeps the rest of the application functional on machines without
/// audio; every playback request is a silent no-op.
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _volume: f32) -> Result<()> {
        Ok(())
    }
}

/// Decodes a WAV into mono f32 samples, averaging channels if needed.
fn decode_wav(bytes: &[u8]) -> Result<(Vec<f32>, u32)> {
    let mut reader = hound::WavReader::new(std::io::Cursor::new(bytes))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => {
            let samples: std::result::Result<Vec<f32>, hound::Error> =
                reader.samples::<f32>().collect();
            samples?
        }
        hound::SampleFormat::Int => {
            let max = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            let samples: std::result::Result<Vec<i32>, hound::Error> =
                reader.samples::<i32>().collect();
            samples?.into_iter().map(|s| s as f32 / max).collect()
        }
    };

    let channels = usize::from(spec.channels.max(1));
    let mono = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    };

    Ok((mono, spec.sample_rate))
}

/// Plays the clip to completion on the current thread.
fn play_clip(samples: &Arc<Vec<f32>>, source_rate: u32, volume: f32, clip: Duration) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| Error::Audio("no audio output device found".to_string()))?;

    let supported_config = device
        .default_output_config()
        .map_err(|e| Error::Audio(format!("failed to get audio config: {e}")))?;

    let stream = match supported_config.sample_format() {
        cpal::SampleFormat::F32 => build_clip_stream::<f32>(
            &device,
            &supported_config.into(),
            Arc::clone(samples),
            source_rate,
            volume,
        )?,
        cpal::SampleFormat::I16 => build_clip_stream::<i16>(
            &device,
            &supported_config.into(),
            Arc::clone(samples),
            source_rate,
            volume,
        )?,
        cpal::SampleFormat::U16 => build_clip_stream::<u16>(
            &device,
            &supported_config.into(),
            Arc::clone(samples),
            source_rate,
            volume,
        )?,
        _ => return Err(Error::Audio("unsupported audio sample format".to_string())),
    };

    stream
        .play()
        .map_err(|e| Error::Audio(format!("failed to start audio stream: {e}")))?;

    // Keep the stream alive until the clip (plus scheduling slack) is done.
    std::thread::sleep(clip + Duration::from_millis(100));
    Ok(())
}

/// Builds an output stream that plays the clip once, then silence.
fn build_clip_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    samples: Arc<Vec<f32>>,
    source_rate: u32,
    volume: f32,
) -> Result<cpal::Stream> {
    let channels = usize::from(config.channels);
    // Nearest-neighbor resampling; good enough for a 200ms click.
    let step = f64::from(source_rate) / f64::from(config.sample_rate.0);
    let mut cursor = 0.0_f64;

    let stream = device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let index = cursor as usize;
                    let value = if index < samples.len() {
                        (samples[index] * volume).clamp(-1.0, 0.999_999_9)
                    } else {
                        0.0
                    };
                    for sample in frame.iter_mut() {
                        *sample = T::from_sample(value);
                    }
                    cursor += step;
                }
            },
            |err| {
                eprintln!("Audio output error: {err}");
            },
            None,
        )
        .map_err(|e| Error::Audio(format!("failed to build audio stream: {e}")))?;

    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shutter_sample_decodes() {
        let asset = Asset::get(SHUTTER_SAMPLE).expect("shutter sample embedded");
        let (samples, sample_rate) = decode_wav(asset.data.as_ref()).expect("decodes as WAV");

        assert!(sample_rate > 0);
        assert!(!samples.is_empty());
        // Normalized range
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn clip_duration_is_short() {
        let player = CpalPlayer::new().expect("player builds from embedded sample");
        let clip = player.clip_duration();
        assert!(clip > Duration::ZERO);
        assert!(clip < Duration::from_secs(2), "shutter click should be brief");
    }

    #[test]
    fn silent_player_always_succeeds() {
        assert!(SilentPlayer.play(0.0).is_ok());
        assert!(SilentPlayer.play(1.0).is_ok());
    }

    #[test]
    fn stereo_wav_downmixes_to_mono() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        {
            let mut writer =
                hound::WavWriter::new(std::io::Cursor::new(&mut bytes), spec).expect("writer");
            for _ in 0..10 {
                writer.write_sample(16000_i16).expect("write");
                writer.write_sample(-16000_i16).expect("write");
            }
            writer.finalize().expect("finalize");
        }

        let (samples, sample_rate) = decode_wav(&bytes).expect("decodes");
        assert_eq!(sample_rate, 8000);
        assert_eq!(samples.len(), 10);
        // Opposite-phase channels cancel out when averaged
        assert!(samples.iter().all(|s| s.abs() < 0.001));
    }
}
