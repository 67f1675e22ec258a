//! Synthesized audio assets. Both feed Bevy's audio engine through
//! [`Decodable`], so they can be played, looped and spatialized like any
//! loaded sound.

use std::time::Duration;

use bevy::audio::{Decodable, Source};
use bevy::prelude::*;

use audiopong_shared::config::SAMPLE_RATE;

use super::biquad::Biquad;
use super::noise::WhiteNoise;

/// Band-limited noise loses most of its energy in the filter; this brings
/// the ball's hiss back to a usable level.
const FILTERED_NOISE_MAKEUP: f32 = 4.0;

/// Endless white noise through a band-pass filter: the ball's voice.
#[derive(Asset, TypePath, Debug, Clone, Copy)]
pub(crate) struct FilteredNoise {
    pub(crate) center_hz: f32,
    pub(crate) q: f32,
    pub(crate) seed: u64,
}

pub(crate) struct FilteredNoiseDecoder {
    noise: WhiteNoise,
    filter: Biquad,
}

impl FilteredNoiseDecoder {
    fn new(source: &FilteredNoise) -> Self {
        Self {
            noise: WhiteNoise::new(source.seed),
            filter: Biquad::band_pass(SAMPLE_RATE as f32, source.center_hz, source.q),
        }
    }
}

impl Iterator for FilteredNoiseDecoder {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.noise.next_sample();
        Some((self.filter.process(x) * FILTERED_NOISE_MAKEUP).clamp(-1.0, 1.0))
    }
}

impl Source for FilteredNoiseDecoder {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

impl Decodable for FilteredNoise {
    type DecoderItem = <FilteredNoiseDecoder as Iterator>::Item;
    type Decoder = FilteredNoiseDecoder;

    fn decoder(&self) -> Self::Decoder {
        FilteredNoiseDecoder::new(self)
    }
}

/// A short filtered-noise burst with a decaying envelope, used for impacts
/// and points.
#[derive(Asset, TypePath, Debug, Clone, Copy)]
pub(crate) struct ImpactBurst {
    pub(crate) center_hz: f32,
    pub(crate) q: f32,
    pub(crate) seconds: f32,
    pub(crate) seed: u64,
}

impl ImpactBurst {
    fn total_samples(&self) -> u32 {
        (self.seconds.max(0.0) * SAMPLE_RATE as f32).round() as u32
    }
}

pub(crate) struct ImpactBurstDecoder {
    noise: WhiteNoise,
    filter: Biquad,
    position: u32,
    total: u32,
}

impl Iterator for ImpactBurstDecoder {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.total {
            return None;
        }
        let remaining = 1.0 - self.position as f32 / self.total as f32;
        self.position += 1;
        let y = self.filter.process(self.noise.next_sample()) * FILTERED_NOISE_MAKEUP;
        Some((y * remaining * remaining).clamp(-1.0, 1.0))
    }
}

impl Source for ImpactBurstDecoder {
    fn current_frame_len(&self) -> Option<usize> {
        Some((self.total - self.position) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f64(
            self.total as f64 / SAMPLE_RATE as f64,
        ))
    }
}

impl Decodable for ImpactBurst {
    type DecoderItem = <ImpactBurstDecoder as Iterator>::Item;
    type Decoder = ImpactBurstDecoder;

    fn decoder(&self) -> Self::Decoder {
        ImpactBurstDecoder {
            noise: WhiteNoise::new(self.seed),
            filter: Biquad::band_pass(SAMPLE_RATE as f32, self.center_hz, self.q),
            position: 0,
            total: self.total_samples(),
        }
    }
}
