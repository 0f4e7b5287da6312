//! Genetic code definition and codon lookup.
//!
//! This module provides:
//! - The standard genetic code (NCBI table 1) keyed by RNA codons
//! - Start and stop codon constants
//! - Codon to amino acid lookup

use std::collections::HashMap;
use std::sync::LazyLock;

/// The start codon; it also encodes Methionine.
pub const START_CODON: &str = "AUG";

/// The three stop codons of the standard code.
pub const STOP_CODONS: [&str; 3] = ["UAA", "UAG", "UGA"];

/// Amino acids of the standard code in NCBI order (`*` marks a stop codon).
const STANDARD_NCBIEAA: &str =
    "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

static STANDARD: LazyLock<GeneticCode> =
    LazyLock::new(|| GeneticCode::new(1, "Standard", STANDARD_NCBIEAA));

/// A genetic code table for translating RNA codons to amino acids.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    /// NCBI genetic code ID
    pub id: u8,
    /// Name of the genetic code
    pub name: String,
    /// Codon to amino acid mapping (64 entries, stops included as `*`)
    codon_table: HashMap<String, char>,
}

impl GeneticCode {
    /// Creates a genetic code from an NCBI amino acid string.
    ///
    /// # Arguments
    /// * `id` - NCBI genetic code ID
    /// * `name` - Name of the genetic code
    /// * `ncbieaa` - 64-character string of amino acids (NCBI format)
    fn new(id: u8, name: &str, ncbieaa: &str) -> Self {
        let bases = ['U', 'C', 'A', 'G'];
        let mut codon_table = HashMap::new();
        let mut amino_acids = ncbieaa.chars();

        // NCBI order: UUU, UUC, UUA, UUG, UCU, UCC, ... (Base1, Base2, Base3)
        for b1 in bases {
            for b2 in bases {
                for b3 in bases {
                    let codon = format!("{}{}{}", b1, b2, b3);
                    let aa = amino_acids.next().unwrap_or('X');
                    codon_table.insert(codon, aa);
                }
            }
        }

        Self {
            id,
            name: name.to_string(),
            codon_table,
        }
    }

    /// Returns the standard genetic code, built once on first use.
    pub fn standard() -> &'static GeneticCode {
        &STANDARD
    }

    /// Translates a single RNA codon to its one-letter amino acid.
    ///
    /// Stop codons, short codons and anything not in the table give `None`:
    /// they contribute nothing to a protein.
    pub fn translate_codon(&self, codon: &str) -> Option<char> {
        self.codon_table
            .get(codon)
            .copied()
            .filter(|&aa| aa != '*')
    }

    /// Number of codons in the table.
    pub fn len(&self) -> usize {
        self.codon_table.len()
    }

    /// Returns true if the table holds no codons.
    pub fn is_empty(&self) -> bool {
        self.codon_table.is_empty()
    }
}

/// Returns true if `codon` is the start codon.
pub fn is_start_codon(codon: &str) -> bool {
    codon == START_CODON
}

/// Returns true if `codon` is one of the stop codons.
pub fn is_stop_codon(codon: &str) -> bool {
    STOP_CODONS.contains(&codon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_total() {
        let standard = GeneticCode::standard();
        assert_eq!(standard.id, 1);
        assert_eq!(standard.len(), 64);
    }

    #[test]
    fn test_standard_code_translation() {
        let standard = GeneticCode::standard();

        assert_eq!(standard.translate_codon("AUG"), Some('M'));
        assert_eq!(standard.translate_codon("UUU"), Some('F'));
        assert_eq!(standard.translate_codon("UUA"), Some('L'));
        assert_eq!(standard.translate_codon("AGA"), Some('R'));
        assert_eq!(standard.translate_codon("AGU"), Some('S'));
        assert_eq!(standard.translate_codon("UGG"), Some('W'));
        assert_eq!(standard.translate_codon("GGG"), Some('G'));
    }

    #[test]
    fn test_stop_codons_have_no_amino_acid() {
        let standard = GeneticCode::standard();
        for stop in STOP_CODONS {
            assert_eq!(standard.translate_codon(stop), None);
            assert!(is_stop_codon(stop));
        }
        assert!(!is_stop_codon(START_CODON));
    }

    #[test]
    fn test_unknown_codons() {
        let standard = GeneticCode::standard();

        // DNA alphabet, lowercase, ambiguous and short codons are not in the table
        assert_eq!(standard.translate_codon("ATG"), None);
        assert_eq!(standard.translate_codon("aug"), None);
        assert_eq!(standard.translate_codon("NNN"), None);
        assert_eq!(standard.translate_codon("AU"), None);
        assert_eq!(standard.translate_codon(""), None);
    }

    #[test]
    fn test_amino_acid_counts() {
        let standard = GeneticCode::standard();
        let bases = ['U', 'C', 'A', 'G'];
        let mut leucine = 0;
        let mut coding = 0;
        for b1 in bases {
            for b2 in bases {
                for b3 in bases {
                    let codon: String = [b1, b2, b3].iter().collect();
                    match standard.translate_codon(&codon) {
                        Some('L') => {
                            leucine += 1;
                            coding += 1;
                        }
                        Some(_) => coding += 1,
                        None => {}
                    }
                }
            }
        }
        assert_eq!(leucine, 6);
        assert_eq!(coding, 61);
    }
}
