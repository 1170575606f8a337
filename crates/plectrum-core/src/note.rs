//! Equal-tempered note model.
//!
//! A [`Note`] is an octave plus a semitone index in `[0, 12)`. Frequencies
//! are derived from the half-tone interval to the reference note La3
//! (A = 440 Hz):
//!
//! ```text
//! f(note) = 440 * 2^(interval(La3, note) / 12)
//! ```
//!
//! which is `2^(log2(440) + interval / 12)` written so that La3 itself maps
//! to exactly 440.0.
//!
//! Labels follow French solfège (`Do`, `Ré`, `Mi`, ...). Octave 0 starts at
//! Do0 ≈ 32.703 Hz.
//!
//! # Example
//!
//! ```rust
//! use plectrum_core::{Interval, Note};
//!
//! let la3 = Note::from_label(3, "La").unwrap();
//! assert_eq!(la3.frequency(), 440.0);
//!
//! let mi4 = la3.derived(Interval::QUINTE);
//! assert_eq!(mi4.name(), "Mi4");
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::error::{Error, Result};

/// Reference pitch of La3 in Hz.
pub const REFERENCE_FREQUENCY: f64 = 440.0;

/// The reference note (La3, A440).
pub const LA3: Note = Note {
    octave: 3,
    index: 9,
};

/// Number of half-tones in an octave.
pub const HALF_TONES_PER_OCTAVE: i32 = 12;

/// Chromatic labels indexed by semitone index.
pub const NOTE_LABELS: [&str; 12] = [
    "Do", "Do#", "Ré", "Ré#", "Mi", "Fa", "Fa#", "Sol", "Sol#", "La", "La#", "Si",
];

/// Signed distance between two notes, counted in half-tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Interval(pub i32);

impl Interval {
    /// One half-tone (semitone).
    pub const HALF_TONE: Self = Self(1);
    /// One tone (two half-tones).
    pub const TONE: Self = Self(2);
    /// Perfect fifth (seven half-tones).
    pub const QUINTE: Self = Self(7);
    /// Octave (twelve half-tones).
    pub const OCTAVE: Self = Self(HALF_TONES_PER_OCTAVE);

    /// Number of half-tones.
    pub const fn half_tones(self) -> i32 {
        self.0
    }

    /// Frequency ratio of this interval under equal temperament.
    pub fn ratio(self) -> f64 {
        2f64.powf(f64::from(self.0) / f64::from(HALF_TONES_PER_OCTAVE))
    }
}

impl From<i32> for Interval {
    fn from(half_tones: i32) -> Self {
        Self(half_tones)
    }
}

impl Add for Interval {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Interval {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Interval {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<i32> for Interval {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Self(self.0 * rhs)
    }
}

/// Look up the semitone index of a chromatic label.
///
/// Accepts the accented `Ré`/`Ré#` as well as the plain `Re`/`Re#`.
pub fn label_to_index(label: &str) -> Result<u8> {
    let canonical = match label {
        "Re" => "Ré",
        "Re#" => "Ré#",
        other => other,
    };
    NOTE_LABELS
        .iter()
        .position(|&l| l == canonical)
        .map(|i| i as u8)
        .ok_or_else(|| Error::UnknownNoteLabel(label.to_string()))
}

/// A pitch: octave number plus semitone index within the octave.
///
/// # Invariants
///
/// - `index` is in `[0, 12)`
/// - frequency is monotonic in [`Note::linear`]
///
/// The derived ordering compares octave first, then index, which matches the
/// linear pitch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note {
    /// Octave number (Do0 is the lowest named note).
    pub octave: i32,
    /// Semitone index in the octave, `0` = Do, `11` = Si.
    pub index: u8,
}

impl Note {
    /// Create a note, rejecting an index outside `[0, 12)`.
    pub fn new(octave: i32, index: u8) -> Result<Self> {
        if i32::from(index) >= HALF_TONES_PER_OCTAVE {
            return Err(Error::invalid_config(
                "index",
                format!("semitone index {index} is outside [0, 12)"),
            ));
        }
        Ok(Self { octave, index })
    }

    /// Create a note from an octave and a chromatic label such as `"Sol#"`.
    pub fn from_label(octave: i32, label: &str) -> Result<Self> {
        Ok(Self {
            octave,
            index: label_to_index(label)?,
        })
    }

    /// Build the note at a linear pitch (`octave * 12 + index`).
    pub fn from_linear(linear: i32) -> Self {
        Self {
            octave: linear.div_euclid(HALF_TONES_PER_OCTAVE),
            index: linear.rem_euclid(HALF_TONES_PER_OCTAVE) as u8,
        }
    }

    /// Linear pitch counted in half-tones from Do0.
    pub fn linear(self) -> i32 {
        self.octave * HALF_TONES_PER_OCTAVE + i32::from(self.index)
    }

    /// Signed interval from `self` up to `other`.
    ///
    /// ```rust
    /// use plectrum_core::{Interval, Note, LA3};
    ///
    /// let do0 = Note::new(0, 0).unwrap();
    /// assert_eq!(LA3.interval_to(do0), Interval(-45));
    /// ```
    pub fn interval_to(self, other: Note) -> Interval {
        Interval(other.linear() - self.linear())
    }

    /// Move this note by `interval` half-tones.
    ///
    /// The octave uses floor division and the index a Euclidean remainder,
    /// so negative intervals cross octave boundaries correctly.
    pub fn shift(&mut self, interval: Interval) {
        *self = Self::from_linear(self.linear() + interval.half_tones());
    }

    /// Copy of this note moved by `interval`.
    pub fn derived(self, interval: Interval) -> Note {
        let mut note = self;
        note.shift(interval);
        note
    }

    /// Fundamental frequency in Hz under equal temperament anchored at La3.
    pub fn frequency(self) -> f64 {
        REFERENCE_FREQUENCY * LA3.interval_to(self).ratio()
    }

    /// Chromatic label, e.g. `"Sol#"`.
    pub fn label(self) -> &'static str {
        NOTE_LABELS[usize::from(self.index) % NOTE_LABELS.len()]
    }

    /// Label followed by octave, e.g. `"La3"`.
    pub fn name(self) -> String {
        format!("{}{}", self.label(), self.octave)
    }
}

impl AddAssign<Interval> for Note {
    fn add_assign(&mut self, interval: Interval) {
        self.shift(interval);
    }
}

impl Add<Interval> for Note {
    type Output = Note;

    fn add(self, interval: Interval) -> Note {
        self.derived(interval)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label(), self.octave)
    }
}
