//! Nucleotide and protein sequence types.
//!
//! - `DnaSequence`: validated, uppercase A/T/C/G only
//! - `RnaSequence`: transcription output, segmented into codons
//! - `ProteinSequence`: one-letter amino acid codes
//!
//! All three are immutable once built.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

/// The DNA alphabet, uppercase only.
pub const DNA_ALPHABET: [char; 4] = ['A', 'T', 'C', 'G'];

/// Errors raised when a string is not a DNA sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Empty DNA sequence")]
    Empty,

    #[error("Invalid nucleotide '{nucleotide}' at position {position}")]
    InvalidNucleotide { nucleotide: char, position: usize },
}

/// Result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Returns true iff `dna` is non-empty and made only of `A`, `T`, `C`, `G`.
pub fn is_valid_dna(dna: &str) -> bool {
    validate_dna(dna).is_ok()
}

/// Checks `dna` against the DNA alphabet, reporting the first bad character.
fn validate_dna(dna: &str) -> SequenceResult<()> {
    if dna.is_empty() {
        return Err(SequenceError::Empty);
    }
    match dna.chars().enumerate().find(|(_, c)| !DNA_ALPHABET.contains(c)) {
        Some((position, nucleotide)) => Err(SequenceError::InvalidNucleotide {
            nucleotide,
            position,
        }),
        None => Ok(()),
    }
}

/// A validated DNA sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnaSequence {
    data: String,
}

impl DnaSequence {
    /// Creates a DNA sequence, rejecting empty input and anything outside
    /// the uppercase A/T/C/G alphabet.
    pub fn new(data: impl Into<String>) -> SequenceResult<Self> {
        let data = data.into();
        validate_dna(&data)?;
        Ok(Self { data })
    }

    /// Generates a random DNA sequence of `length` nucleotides.
    ///
    /// Returns `None` for a zero length, since DNA sequences are never empty.
    pub fn random<R: Rng>(rng: &mut R, length: usize) -> Option<Self> {
        if length == 0 {
            return None;
        }
        let data = (0..length)
            .map(|_| DNA_ALPHABET[rng.random_range(0..DNA_ALPHABET.len())])
            .collect();
        Some(Self { data })
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a `DnaSequence` cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromStr for DnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// An RNA sequence.
///
/// Normally produced by transcription; `from_raw` accepts any string so that
/// translation can run on arbitrary RNA text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RnaSequence {
    data: String,
}

impl RnaSequence {
    /// Wraps a raw RNA string without checking its alphabet.
    pub fn from_raw(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the length of the sequence in characters.
    pub fn len(&self) -> usize {
        self.data.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Splits the sequence into codons, starting at index 0.
    ///
    /// A trailing group of one or two characters is still yielded.
    pub fn codons(&self) -> Codons<'_> {
        Codons { rest: &self.data }
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Iterator over the non-overlapping codons of an RNA sequence.
#[derive(Debug, Clone)]
pub struct Codons<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Codons<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        // Split on character boundaries, not bytes
        let end = self
            .rest
            .char_indices()
            .nth(3)
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (codon, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(codon)
    }
}

/// A protein as one-letter amino acid codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProteinSequence {
    data: String,
}

impl ProteinSequence {
    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the number of amino acids.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no amino acid was produced.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<char> for ProteinSequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_valid_dna() {
        assert!(is_valid_dna("ATCG"));
        assert!(is_valid_dna("A"));
        assert!(is_valid_dna("GATTACA"));
    }

    #[test]
    fn test_invalid_dna() {
        assert!(!is_valid_dna(""));
        assert!(!is_valid_dna("atcg"));
        assert!(!is_valid_dna("AUCG"));
        assert!(!is_valid_dna("ATC G"));
        assert!(!is_valid_dna("ATCN"));
    }

    #[test]
    fn test_dna_sequence_errors() {
        assert_eq!(DnaSequence::new(""), Err(SequenceError::Empty));
        assert_eq!(
            DnaSequence::new("ATxG"),
            Err(SequenceError::InvalidNucleotide {
                nucleotide: 'x',
                position: 2
            })
        );
        let dna: DnaSequence = "ATCG".parse().unwrap();
        assert_eq!(dna.as_str(), "ATCG");
        assert_eq!(dna.len(), 4);
    }

    #[test]
    fn test_codon_segmentation() {
        let rna = RnaSequence::from_raw("AUGUUUUAA");
        let codons: Vec<&str> = rna.codons().collect();
        assert_eq!(codons, vec!["AUG", "UUU", "UAA"]);
    }

    #[test]
    fn test_codon_segmentation_keeps_short_tail() {
        let rna = RnaSequence::from_raw("AUGUU");
        assert_eq!(rna.codons().collect::<Vec<_>>(), vec!["AUG", "UU"]);

        let rna = RnaSequence::from_raw("AUGU");
        assert_eq!(rna.codons().collect::<Vec<_>>(), vec!["AUG", "U"]);

        let rna = RnaSequence::from_raw("");
        assert_eq!(rna.codons().count(), 0);
    }

    #[test]
    fn test_codon_segmentation_is_restartable() {
        let rna = RnaSequence::from_raw("AUGGCC");
        let first: Vec<&str> = rna.codons().collect();
        let second: Vec<&str> = rna.codons().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_codon_segmentation_multibyte() {
        let rna = RnaSequence::from_raw("AUGéé");
        assert_eq!(rna.len(), 5);
        assert_eq!(rna.codons().collect::<Vec<_>>(), vec!["AUG", "éé"]);
    }

    #[test]
    fn test_random_dna() {
        let mut rng = StdRng::seed_from_u64(42);
        let dna = DnaSequence::random(&mut rng, 1_000).unwrap();
        assert_eq!(dna.len(), 1_000);
        assert!(is_valid_dna(dna.as_str()));
        for base in DNA_ALPHABET {
            assert!(dna.as_str().contains(base));
        }

        assert!(DnaSequence::random(&mut rng, 0).is_none());
    }

    #[test]
    fn test_random_dna_is_seeded() {
        let a = DnaSequence::random(&mut StdRng::seed_from_u64(7), 50);
        let b = DnaSequence::random(&mut StdRng::seed_from_u64(7), 50);
        assert_eq!(a, b);
    }
}
