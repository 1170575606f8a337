//! Chords as ordered finger positions, and the standard chord book.

use plectrum_core::{Error, Result};

use crate::guitar::{FretNote, GuitarString};

/// Names accepted by [`standard_chord`], in book order.
pub const STANDARD_CHORD_NAMES: [&str; 8] = ["Do", "Re", "Mi", "Mim", "Fa", "Sol", "La", "Lam"];

/// An ordered list of notes, strummed first to last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chord {
    notes: Vec<FretNote>,
}

impl Chord {
    /// Chord from notes in strum order.
    pub fn new(notes: Vec<FretNote>) -> Self {
        Self { notes }
    }

    /// Notes in strum order.
    pub fn notes(&self) -> &[FretNote] {
        &self.notes
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True if the chord has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The same chord strummed the other way (upstroke).
    pub fn reversed(&self) -> Self {
        Self {
            notes: self.notes.iter().rev().copied().collect(),
        }
    }

    /// Note names in strum order, e.g. `["Do3", "Mi3", ...]`.
    pub fn names(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.name()).collect()
    }
}

impl FromIterator<FretNote> for Chord {
    fn from_iter<I: IntoIterator<Item = FretNote>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn shape(positions: &[(GuitarString, u8)]) -> Chord {
    positions
        .iter()
        .map(|&(string, fret)| FretNote::new(string, fret))
        .collect()
}

/// Look up a chord of the standard book by name (`"Ré"` is accepted for `"Re"`).
///
/// Shapes are listed from the lowest played string down to string 1.
pub fn standard_chord(name: &str) -> Result<Chord> {
    use GuitarString::{La1, Mi1, Mi3, Re2, Si2, Sol2};

    let chord = match name {
        "Do" => shape(&[(La1, 3), (Re2, 2), (Sol2, 0), (Si2, 1), (Mi3, 0)]),
        "Re" | "Ré" => shape(&[(Re2, 0), (Sol2, 2), (Si2, 3), (Mi3, 2)]),
        "Mi" => shape(&[(Mi1, 0), (La1, 2), (Re2, 2), (Sol2, 1), (Si2, 0), (Mi3, 0)]),
        "Mim" => shape(&[(Mi1, 0), (La1, 2), (Re2, 2), (Sol2, 0), (Si2, 0), (Mi3, 0)]),
        "Fa" => shape(&[(La1, 0), (Re2, 3), (Sol2, 2), (Si2, 1)]),
        "Sol" => shape(&[(Mi1, 3), (La1, 2), (Re2, 0), (Sol2, 0), (Si2, 0), (Mi3, 3)]),
        "La" => shape(&[(La1, 0), (Re2, 2), (Sol2, 2), (Si2, 2), (Mi3, 0)]),
        "Lam" => shape(&[(La1, 0), (Re2, 2), (Sol2, 2), (Si2, 1), (Mi3, 0)]),
        _ => return Err(Error::UnknownChord(name.to_string())),
    };
    Ok(chord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_book_name_resolves() {
        for name in STANDARD_CHORD_NAMES {
            let chord = standard_chord(name).unwrap();
            assert!((4..=6).contains(&chord.len()), "{name}");
        }
        assert_eq!(standard_chord("Ré").unwrap(), standard_chord("Re").unwrap());
    }

    #[test]
    fn unknown_chord() {
        assert_eq!(
            standard_chord("Xyz"),
            Err(Error::UnknownChord("Xyz".to_string()))
        );
    }

    #[test]
    fn do_major_notes() {
        let chord = standard_chord("Do").unwrap();
        assert_eq!(chord.names(), vec!["Do2", "Mi2", "Sol2", "Do3", "Mi3"]);
    }

    #[test]
    fn minor_differs_by_a_half_tone() {
        let major = standard_chord("La").unwrap();
        let minor = standard_chord("Lam").unwrap();
        let diffs: Vec<i32> = major
            .notes()
            .iter()
            .zip(minor.notes())
            .map(|(a, b)| i32::from(a.fret) - i32::from(b.fret))
            .collect();
        assert_eq!(diffs, vec![0, 0, 0, 1, 0]);
    }

    #[test]
    fn reversed_is_upstroke() {
        let chord = standard_chord("Mi").unwrap();
        let up = chord.reversed();
        assert_eq!(up.notes()[0].string, GuitarString::Mi3);
        assert_eq!(up.reversed(), chord);
    }
}
