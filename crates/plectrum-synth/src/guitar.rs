//! Six-string guitar: fret positions, tuning, and a plucked-string instrument.
//!
//! Strings are numbered from 1 (the highest, Mi3) to 6 (the lowest, Mi1) in
//! standard tuning:
//!
//! | String | Open note |
//! |--------|-----------|
//! | 1      | Mi3       |
//! | 2      | Si2       |
//! | 3      | Sol2      |
//! | 4      | Ré2       |
//! | 5      | La1       |
//! | 6      | Mi1       |
//!
//! Adjacent strings are a fourth apart (5 half-tones) except Sol2 to Si2, a
//! major third (4 half-tones).

use std::fmt;

use plectrum_core::{Error, Interval, Note, Result, buffer_len, mix, silence};

use crate::chord::Chord;
use crate::karplus::KarplusStrong;
use crate::synthesizer::{HarmonicSynthesizer, Synthesizer};

/// A guitar string in standard tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GuitarString {
    /// String 1, open Mi3.
    Mi3 = 1,
    /// String 2, open Si2.
    Si2 = 2,
    /// String 3, open Sol2.
    Sol2 = 3,
    /// String 4, open Ré2.
    Re2 = 4,
    /// String 5, open La1.
    La1 = 5,
    /// String 6, open Mi1.
    Mi1 = 6,
}

impl GuitarString {
    /// All strings, highest first.
    pub const ALL: [GuitarString; 6] = [
        GuitarString::Mi3,
        GuitarString::Si2,
        GuitarString::Sol2,
        GuitarString::Re2,
        GuitarString::La1,
        GuitarString::Mi1,
    ];

    /// Look up a string by its number, 1 to 6.
    pub fn from_number(number: i64) -> Result<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(Error::UnknownStringNumber(number))
    }

    /// String number, 1 (highest) to 6 (lowest).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Pitch of the string played open.
    pub fn open_note(self) -> Note {
        let (octave, index) = match self {
            GuitarString::Mi3 => (3, 4),
            GuitarString::Si2 => (2, 11),
            GuitarString::Sol2 => (2, 7),
            GuitarString::Re2 => (2, 2),
            GuitarString::La1 => (1, 9),
            GuitarString::Mi1 => (1, 4),
        };
        Note { octave, index }
    }
}

impl TryFrom<i64> for GuitarString {
    type Error = Error;

    fn try_from(number: i64) -> Result<Self> {
        Self::from_number(number)
    }
}

/// A finger position: a string and a fret (0 is the open string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FretNote {
    /// The string played.
    pub string: GuitarString,
    /// Fret number; each fret raises the pitch by a half-tone.
    pub fret: u8,
}

impl FretNote {
    /// Position on `string` at `fret`.
    pub fn new(string: GuitarString, fret: u8) -> Self {
        Self { string, fret }
    }

    /// Position from a numeric string (1 to 6) and fret.
    pub fn from_numbers(string: i64, fret: u8) -> Result<Self> {
        Ok(Self::new(GuitarString::from_number(string)?, fret))
    }

    /// The sounding pitch: the open-string note raised by `fret` half-tones.
    pub fn note(self) -> Note {
        self.string.open_note().derived(Interval(i32::from(self.fret)))
    }

    /// Fundamental frequency in Hz.
    pub fn frequency(self) -> f64 {
        self.note().frequency()
    }

    /// Name of the sounding pitch, e.g. `"Sol#2"`.
    pub fn name(self) -> String {
        self.note().name()
    }
}

impl fmt::Display for FretNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}F{}", self.string.number(), self.fret)
    }
}

/// Text table of note names over the neck, one row per string, frets `0..frets`.
///
/// ```text
/// String \ Fret | F00   F01   F02   ...
/// ---------------------------------...
/// S1 Mi3        | Mi3   Fa3   Fa#3  ...
/// ```
pub fn neck_table(frets: u8) -> String {
    let mut table = String::from("String \\ Fret | ");
    let mut rule = String::from("----------------");
    for fret in 0..frets {
        table.push_str(&format!("F{fret:02}   "));
        rule.push_str("------");
    }
    table.push('\n');
    table.push_str(&rule);
    table.push('\n');

    for string in GuitarString::ALL {
        let open = FretNote::new(string, 0).name();
        table.push_str(&format!("S{} {:<5}      | ", string.number(), open));
        for fret in 0..frets {
            table.push_str(&format!("{:<6}", FretNote::new(string, fret).name()));
        }
        table.push('\n');
    }
    table
}

/// A plucked-string guitar.
///
/// One [`KarplusStrong`] generator plays every note: its frequency is set
/// before each pluck.
///
/// # Example
///
/// ```rust
/// use plectrum_synth::{Guitar, standard_chord};
///
/// let mut guitar = Guitar::new(44100).with_seed(7);
/// let chord = standard_chord("Sol").unwrap();
/// let strum = guitar.chord(&chord, 2.0, 0.05);
/// assert_eq!(strum.len(), 88200);
/// ```
#[derive(Debug, Clone)]
pub struct Guitar {
    string: KarplusStrong,
}

impl Guitar {
    /// A guitar rendering at `sample_rate`.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            string: KarplusStrong::new(0.0, 1.0, sample_rate),
        }
    }

    /// Reseed the pluck noise for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.string = self.string.with_seed(seed);
        self
    }

    /// Set the Karplus-Strong dynamic level for all notes.
    pub fn with_level(mut self, level: f64) -> Self {
        self.string.set_level(level);
        self
    }

    /// Sample rate of the rendered buffers.
    pub fn sample_rate(&self) -> u32 {
        self.string.sample_rate()
    }

    /// Current pluck amplitude.
    pub fn amplitude(&self) -> f64 {
        self.string.amplitude()
    }

    /// Change the pluck amplitude.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.string.set_amplitude(amplitude);
    }

    /// Pluck one note for `duration` seconds.
    pub fn pluck(&mut self, note: FretNote, duration: f64) -> Vec<f64> {
        self.string.set_frequency(note.frequency());
        self.string.synthesize(duration)
    }

    /// Strum a chord.
    ///
    /// Note `i` starts `i * delay` seconds in and rings until the end, so the
    /// result is always `floor(duration * rate)` samples. Notes starting at or
    /// after `duration` are dropped.
    pub fn chord(&mut self, chord: &Chord, duration: f64, delay: f64) -> Vec<f64> {
        let rate = self.sample_rate();
        let len = buffer_len(duration, rate);
        let mut parts = Vec::with_capacity(chord.len());
        for (i, &note) in chord.notes().iter().enumerate() {
            let start = delay * i as f64;
            if start >= duration {
                tracing::debug!(%note, start, duration, "chord: note starts after the end");
                break;
            }
            let offset = buffer_len(start, rate);
            parts.push((offset, self.pluck(note, duration - start)));
        }
        mix(len, &parts)
    }

    /// Silence at this guitar's sample rate.
    pub fn silence(&self, duration: f64) -> Vec<f64> {
        silence(duration, self.sample_rate())
    }
}
