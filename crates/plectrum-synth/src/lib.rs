//! Plectrum Synth - batch waveform synthesis
//!
//! Every generator implements [`Synthesizer`] and renders a complete buffer
//! of `floor(duration * sample_rate)` samples per call.
//!
//! # Generators
//!
//! - [`SineWave`] - phase-accumulated sine
//! - [`PwmWave`] - pulse-width modulated square ([`PwmWave::square`] for 50% duty)
//! - [`TriangleWave`] - triangle with adjustable rise ([`TriangleWave::sawtooth`])
//! - [`SweepFrequency`] - linear frequency glide
//! - [`AmplitudeModulation`] / [`FrequencyModulation`] - modulated sine carriers
//! - [`KarplusStrong`] - plucked string from filtered noise in a damped delay line
//!
//! Pitched generators also implement [`HarmonicSynthesizer`], whose setters
//! let one instance play a sequence of notes:
//!
//! ```rust
//! use plectrum_synth::{HarmonicSynthesizer, SineWave, Synthesizer};
//! use plectrum_core::{Note, concat};
//!
//! let mut sine = SineWave::new(0.0, 0.8, 44100);
//! let mut melody = Vec::new();
//! for label in ["Do", "Mi", "Sol"] {
//!     sine.set_frequency(Note::from_label(3, label).unwrap().frequency());
//!     melody.push(sine.synthesize(0.25));
//! }
//! assert_eq!(concat(&melody).len(), 3 * 11025);
//! ```
//!
//! # Guitar
//!
//! - [`GuitarString`] / [`FretNote`] - standard tuning and fret positions
//! - [`Chord`] / [`standard_chord`] - the chord book
//! - [`Guitar`] - plucks and strums with a single Karplus-Strong string
//!
//! ```rust
//! use plectrum_synth::{FretNote, Guitar, GuitarString};
//!
//! let mut guitar = Guitar::new(44100).with_seed(1);
//! let note = FretNote::new(GuitarString::Sol2, 2);
//! assert_eq!(note.name(), "La2");
//! let samples = guitar.pluck(note, 1.0);
//! assert_eq!(samples.len(), 44100);
//! ```
//!
//! # One-call helpers
//!
//! [`signal`] wraps each generator in a function taking an optional sample rate.

pub mod chord;
pub mod guitar;
pub mod karplus;
pub mod modulation;
pub mod signal;
pub mod sweep;
pub mod synthesizer;
pub mod waveform;

pub use chord::{Chord, STANDARD_CHORD_NAMES, standard_chord};
pub use guitar::{FretNote, Guitar, GuitarString, neck_table};
pub use karplus::{DEFAULT_LEVEL, KarplusStrong};
pub use modulation::{AmplitudeModulation, FrequencyModulation, PhaseMode};
pub use sweep::SweepFrequency;
pub use synthesizer::{HarmonicSynthesizer, Synthesizer};
pub use waveform::{PwmWave, SineWave, TriangleWave};
