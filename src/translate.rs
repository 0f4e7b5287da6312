//! DNA to RNA transcription and RNA to protein translation.
//!
//! Transcription substitutes each nucleotide (A→U, T→A, C→G, G→C).
//! Translation segments the RNA into codons from index 0, finds the first
//! start codon and, independently, the first stop codon, then maps every
//! codon in `[start, stop)` through the standard genetic code.
//!
//! ## Quirks kept on purpose
//!
//! - The stop codon scan always begins at the first codon, so a stop codon
//!   sitting before the start codon yields `StartAfterStop` even when a later
//!   in-frame stop exists.
//! - Codons missing from the table (short tails, unknown triples) inside the
//!   reading frame are skipped silently.

use std::ops::Range;

use thiserror::Error;

use crate::genetic_code::{is_start_codon, is_stop_codon, GeneticCode};
use crate::sequence::{DnaSequence, ProteinSequence, RnaSequence, SequenceError, SequenceResult};

/// Reasons an RNA sequence has no open reading frame.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationError {
    #[error("no start codon (AUG)")]
    NoStartCodon,

    #[error("no stop codon (UAA, UAG, UGA)")]
    NoStopCodon,

    #[error("stop codon at codon {stop} precedes start codon at codon {start}")]
    StartAfterStop { start: usize, stop: usize },
}

/// Outcome of translating an RNA sequence.
pub type ProteinResult = Result<ProteinSequence, TranslationError>;

/// Maps one DNA nucleotide to its RNA counterpart.
fn transcribe_nucleotide(nucleotide: char) -> Option<char> {
    match nucleotide {
        'A' => Some('U'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Transcribes a raw DNA string into RNA.
///
/// Callers are expected to validate first; any character outside
/// `A`, `T`, `C`, `G` is reported as `InvalidNucleotide`.
pub fn transcribe(dna: &str) -> SequenceResult<RnaSequence> {
    if dna.is_empty() {
        return Err(SequenceError::Empty);
    }
    let rna = dna
        .chars()
        .enumerate()
        .map(|(position, nucleotide)| {
            transcribe_nucleotide(nucleotide)
                .ok_or(SequenceError::InvalidNucleotide { nucleotide, position })
        })
        .collect::<SequenceResult<String>>()?;
    Ok(RnaSequence::from_raw(rna))
}

impl DnaSequence {
    /// Transcribes this sequence into RNA.
    pub fn transcribe(&self) -> RnaSequence {
        // Validated on construction, every nucleotide has a counterpart
        let rna: String = self
            .as_str()
            .chars()
            .filter_map(transcribe_nucleotide)
            .collect();
        RnaSequence::from_raw(rna)
    }
}

/// Index of the first start codon.
pub fn find_start_codon(rna: &RnaSequence) -> Option<usize> {
    rna.codons().position(is_start_codon)
}

/// Index of the first stop codon, scanning from the first codon.
pub fn find_stop_codon(rna: &RnaSequence) -> Option<usize> {
    rna.codons().position(is_stop_codon)
}

/// Codon range `[start, stop)` to translate.
pub fn open_reading_frame(rna: &RnaSequence) -> Result<Range<usize>, TranslationError> {
    let start = find_start_codon(rna).ok_or(TranslationError::NoStartCodon)?;
    let stop = find_stop_codon(rna).ok_or(TranslationError::NoStopCodon)?;
    if start > stop {
        return Err(TranslationError::StartAfterStop { start, stop });
    }
    Ok(start..stop)
}

/// Translates an RNA sequence into a protein.
pub fn translate(rna: &RnaSequence) -> ProteinResult {
    let frame = open_reading_frame(rna)?;
    let code = GeneticCode::standard();
    Ok(rna
        .codons()
        .skip(frame.start)
        .take(frame.len())
        .filter_map(|codon| code.translate_codon(codon))
        .collect())
}

/// Everything produced from one DNA input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationReport {
    pub dna: DnaSequence,
    pub rna: RnaSequence,
    pub protein: ProteinResult,
}

impl TranslationReport {
    /// Journal line for this report, only when a protein was produced.
    pub fn journal_record(&self) -> Option<String> {
        self.protein.as_ref().ok().map(|protein| {
            format!("DNA: {}, RNA: {}, Protein: {}", self.dna, self.rna, protein)
        })
    }
}

/// Validates raw input, then transcribes and translates it.
pub fn process_dna(input: &str) -> SequenceResult<TranslationReport> {
    let dna = DnaSequence::new(input)?;
    let rna = dna.transcribe();
    let protein = translate(&rna);
    Ok(TranslationReport { dna, rna, protein })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn translate_str(rna: &str) -> ProteinResult {
        translate(&RnaSequence::from_raw(rna))
    }

    #[test]
    fn test_transcription_rule() {
        assert_eq!(transcribe("ATCG").unwrap().as_str(), "UAGC");
        assert_eq!(transcribe("ATG").unwrap().as_str(), "UAC");
        assert_eq!(transcribe("GATTACA").unwrap().as_str(), "CUAAUGU");
    }

    #[test]
    fn test_transcription_preserves_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let length = rng.random_range(1..=400);
            let dna = DnaSequence::random(&mut rng, length).unwrap();
            let rna = transcribe(dna.as_str()).unwrap();

            assert_eq!(rna.len(), length);
            assert_eq!(rna, dna.transcribe());
            for (d, r) in dna.as_str().chars().zip(rna.as_str().chars()) {
                let expected = match d {
                    'A' => 'U',
                    'T' => 'A',
                    'C' => 'G',
                    'G' => 'C',
                    other => panic!("unexpected nucleotide {}", other),
                };
                assert_eq!(r, expected);
            }
        }
    }

    #[test]
    fn test_transcription_rejects_invalid_input() {
        assert_eq!(
            transcribe("ATUG"),
            Err(SequenceError::InvalidNucleotide {
                nucleotide: 'U',
                position: 2
            })
        );
        assert_eq!(transcribe(""), Err(SequenceError::Empty));
        assert!(transcribe("atcg").is_err());
    }

    #[test]
    fn test_validated_transcription_matches_raw() {
        let dna = DnaSequence::new("ATGCGTTAGC").unwrap();
        assert_eq!(dna.transcribe(), transcribe(dna.as_str()).unwrap());
    }

    #[test]
    fn test_translate_simple() {
        assert_eq!(translate_str("AUGUUUUAA").unwrap().as_str(), "MF");
    }

    #[test]
    fn test_translate_start_codon_only() {
        assert_eq!(translate_str("AUGUGA").unwrap().as_str(), "M");
    }

    #[test]
    fn test_translate_no_start_codon() {
        assert_eq!(translate_str("UUUAAA"), Err(TranslationError::NoStartCodon));
        // Missing start is reported before missing stop
        assert_eq!(translate_str(""), Err(TranslationError::NoStartCodon));
    }

    #[test]
    fn test_translate_no_stop_codon() {
        assert_eq!(translate_str("AUGAAA"), Err(TranslationError::NoStopCodon));
    }

    #[test]
    fn test_translate_start_after_stop() {
        assert_eq!(
            translate_str("UAAAUG"),
            Err(TranslationError::StartAfterStop { start: 1, stop: 0 })
        );
    }

    #[test]
    fn test_stop_scan_ignores_start_position() {
        // A later stop after AUG does not rescue the frame
        assert_eq!(
            translate_str("UAGAUGGCCUAA"),
            Err(TranslationError::StartAfterStop { start: 1, stop: 0 })
        );
    }

    #[test]
    fn test_translate_skips_unknown_codons() {
        assert_eq!(translate_str("AUGNNNUAA").unwrap().as_str(), "M");
        assert_eq!(translate_str("AUGNNNGGGUAG").unwrap().as_str(), "MG");
    }

    #[test]
    fn test_translate_frame_after_leading_codons() {
        // Codons before the start codon are not translated
        assert_eq!(translate_str("GCCAUGAAAUGGUAA").unwrap().as_str(), "MKW");
    }

    #[test]
    fn test_out_of_frame_codons_are_not_found() {
        // AUG at offset 1 is split across codons UAU and GUA
        assert_eq!(translate_str("UAUGUAA"), Err(TranslationError::NoStartCodon));
    }

    #[test]
    fn test_open_reading_frame() {
        let rna = RnaSequence::from_raw("CCCAUGUUUGGGUGACCC");
        assert_eq!(find_start_codon(&rna), Some(1));
        assert_eq!(find_stop_codon(&rna), Some(4));
        assert_eq!(open_reading_frame(&rna), Ok(1..4));
        assert_eq!(translate(&rna).unwrap().as_str(), "MFG");
    }

    #[test]
    fn test_translate_is_deterministic() {
        let rna = RnaSequence::from_raw("AUGGCCAAGUAA");
        assert_eq!(translate(&rna), translate(&rna));
    }

    #[test]
    fn test_transcribe_then_translate() {
        // ATG becomes UAC, which holds no start codon
        let rna = transcribe("ATG").unwrap();
        assert_eq!(rna.as_str(), "UAC");
        assert_eq!(translate(&rna), Err(TranslationError::NoStartCodon));

        // TAC -> AUG, AAA -> UUU, ATT -> UAA
        let rna = transcribe("TACAAAATT").unwrap();
        assert_eq!(translate(&rna).unwrap().as_str(), "MF");
    }

    #[test]
    fn test_process_dna() {
        let report = process_dna("TACAAAATT").unwrap();
        assert_eq!(report.rna.as_str(), "AUGUUUUAA");
        assert_eq!(
            report.journal_record().as_deref(),
            Some("DNA: TACAAAATT, RNA: AUGUUUUAA, Protein: MF")
        );

        let report = process_dna("ATG").unwrap();
        assert_eq!(report.protein, Err(TranslationError::NoStartCodon));
        assert_eq!(report.journal_record(), None);

        assert!(process_dna("ATGX").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TranslationError::StartAfterStop { start: 3, stop: 1 }.to_string(),
            "stop codon at codon 1 precedes start codon at codon 3"
        );
        assert_eq!(
            SequenceError::InvalidNucleotide {
                nucleotide: 'N',
                position: 4
            }
            .to_string(),
            "Invalid nucleotide 'N' at position 4"
        );
    }
}
