//! Touchless input: turns a stream of distance samples into player
//! decisions.
//!
//! Each sample is classified by zone (HIT, STAY, or neither) and a gesture
//! is only reported once its zone has held for more than
//! [`GestureOptions::threshold`] consecutive samples. Any sample from a
//! different zone restarts the count, which filters out passing hands and
//! sensor noise.

mod sensor;

pub use sensor::{DistanceSensor, EchoPulse, Samples};

use crate::options::GestureOptions;
use crate::table::{PlayerInput, Prompt};

/// Classification of a debounced run of samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Hand held in the HIT zone.
    Hit,
    /// Hand held in the STAY zone.
    Stay,
    /// Nothing in either zone.
    NoAction,
}

/// A player's answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take a card (or accept a split).
    Hit,
    /// Keep the hand (or decline a split).
    Stay,
}

/// Debouncing gesture decoder.
///
/// Samples are pulled from any iterator of distances, so the decoder runs
/// the same against a live sensor (see [`DistanceSensor::samples`]) or a
/// scripted sequence.
#[derive(Debug, Clone)]
pub struct GestureDecoder {
    options: GestureOptions,
    hit_run: u32,
    stay_run: u32,
    idle_run: u32,
}

impl GestureDecoder {
    /// Creates a decoder with all run counters at zero.
    #[must_use]
    pub const fn new(options: GestureOptions) -> Self {
        Self {
            options,
            hit_run: 0,
            stay_run: 0,
            idle_run: 0,
        }
    }

    /// Returns the decoder's calibration.
    #[must_use]
    pub const fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// Returns the zone a single sample falls into.
    ///
    /// Zone edges are exclusive. A `NaN` reading lands in no zone.
    #[must_use]
    pub fn zone(&self, distance: f64) -> Gesture {
        let GestureOptions {
            hit_near,
            stay_near,
            zone_width,
            ..
        } = self.options;

        if distance > hit_near && distance < hit_near + zone_width {
            Gesture::Hit
        } else if distance > stay_near && distance < stay_near + zone_width {
            Gesture::Stay
        } else {
            Gesture::NoAction
        }
    }

    /// Feeds one sample into the debounce counters.
    ///
    /// Returns a gesture once its run exceeds the threshold, resetting all
    /// counters.
    pub fn step(&mut self, distance: f64) -> Option<Gesture> {
        let zone = self.zone(distance);
        let run = match zone {
            Gesture::Hit => {
                self.stay_run = 0;
                self.idle_run = 0;
                &mut self.hit_run
            }
            Gesture::Stay => {
                self.hit_run = 0;
                self.idle_run = 0;
                &mut self.stay_run
            }
            Gesture::NoAction => {
                self.hit_run = 0;
                self.stay_run = 0;
                &mut self.idle_run
            }
        };
        *run += 1;
        log::trace!("sample {distance} in {zone:?}, run {run}");

        if *run > u32::from(self.options.threshold) {
            self.reset();
            log::debug!("gesture {zone:?} held past threshold");
            Some(zone)
        } else {
            None
        }
    }

    /// Clears all run counters.
    pub const fn reset(&mut self) {
        self.hit_run = 0;
        self.stay_run = 0;
        self.idle_run = 0;
    }

    /// Consumes samples until one zone has held long enough.
    ///
    /// Counting starts from zero on every call. Returns `None` if the
    /// samples run out first; a live sensor never does.
    pub fn classify<I>(&mut self, samples: &mut I) -> Option<Gesture>
    where
        I: Iterator<Item = f64>,
    {
        self.reset();
        samples.find_map(|distance| self.step(distance))
    }

    /// Reads one player decision.
    ///
    /// Waits for the gesture area to be clear (a [`Gesture::NoAction`]
    /// result) so a hand still held from the previous prompt is not read
    /// twice, then returns the first HIT or STAY.
    pub fn decide<I>(&mut self, samples: &mut I) -> Option<Decision>
    where
        I: Iterator<Item = f64>,
    {
        while self.classify(samples)? != Gesture::NoAction {}

        let decision = loop {
            match self.classify(samples)? {
                Gesture::Hit => break Decision::Hit,
                Gesture::Stay => break Decision::Stay,
                Gesture::NoAction => {}
            }
        };
        log::debug!("player decided {decision:?}");
        Some(decision)
    }
}

impl Default for GestureDecoder {
    fn default() -> Self {
        Self::new(GestureOptions::default())
    }
}

/// Player input read from a distance sample stream.
#[derive(Debug)]
pub struct GestureInput<I> {
    decoder: GestureDecoder,
    samples: I,
}

impl<I: Iterator<Item = f64>> GestureInput<I> {
    /// Creates gesture input over the given samples.
    pub const fn new(options: GestureOptions, samples: I) -> Self {
        Self {
            decoder: GestureDecoder::new(options),
            samples,
        }
    }

    /// Returns the underlying sample stream.
    pub fn into_inner(self) -> I {
        self.samples
    }
}

impl<I: Iterator<Item = f64>> PlayerInput for GestureInput<I> {
    fn decide(&mut self, prompt: &Prompt) -> Option<Decision> {
        log::debug!("waiting for seat {} ({:?})", prompt.seat, prompt.kind);
        self.decoder.decide(&mut self.samples)
    }
}
