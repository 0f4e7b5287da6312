//! Genotype marker lookups.
//!
//! Three fixed SNP markers, each with canned text for its three genotypes
//! and a fallback for anything else. Matching is exact.

use std::fmt;

/// A genotype marker known to the analysis menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Skin pigmentation, used as an ancestry hint
    Ancestry,
    /// Stature
    Height,
    /// APOE ε4 status
    Alzheimers,
}

impl Marker {
    /// All markers, in menu order.
    pub const ALL: [Marker; 3] = [Marker::Ancestry, Marker::Height, Marker::Alzheimers];

    /// The dbSNP identifier of the marker.
    pub fn rsid(self) -> &'static str {
        match self {
            Marker::Ancestry => "rs1426654",
            Marker::Height => "rs12740374",
            Marker::Alzheimers => "rs429358",
        }
    }

    /// Short label used in journal records.
    pub fn label(self) -> &'static str {
        match self {
            Marker::Ancestry => "Ancestry",
            Marker::Height => "Height",
            Marker::Alzheimers => "Alzheimer's",
        }
    }

    /// Menu title for the marker.
    pub fn title(self) -> &'static str {
        match self {
            Marker::Ancestry => "Ancestry",
            Marker::Height => "Height",
            Marker::Alzheimers => "Alzheimer's Disease Risk",
        }
    }

    /// Interpretation of `genotype` for this marker.
    pub fn interpret(self, genotype: &str) -> &'static str {
        match (self, genotype) {
            (Marker::Ancestry, "AA") => "European ancestry. Probably light-skinned.",
            (Marker::Ancestry, "AG") => "Probably mixed African/European ancestry.",
            (Marker::Ancestry, "GG") => "Probably Asian or African ancestry with darker-skinned.",
            (Marker::Ancestry, _) => "Invalid input or no DNA info on skin type.",

            (Marker::Height, "AA") => "Shorter stature.",
            (Marker::Height, "AG") => "Intermediate height.",
            (Marker::Height, "GG") => "Taller stature.",
            (Marker::Height, _) => "Invalid input or no DNA info on height.",

            (Marker::Alzheimers, "CC") => "Lower risk; no APOE ε4 allele.",
            (Marker::Alzheimers, "CT") => "Intermediate risk; one APOE ε4 allele.",
            (Marker::Alzheimers, "TT") => "Higher risk; two APOE ε4 alleles.",
            (Marker::Alzheimers, _) => {
                "Invalid input or no DNA info on Alzheimer's disease risk."
            }
        }
    }

    /// Genotypes with a known interpretation.
    pub fn known_genotypes(self) -> [&'static str; 3] {
        match self {
            Marker::Ancestry | Marker::Height => ["AA", "AG", "GG"],
            Marker::Alzheimers => ["CC", "CT", "TT"],
        }
    }

    /// Looks up `genotype` and returns a full report.
    pub fn analyze(self, genotype: &str) -> GenotypeReport {
        GenotypeReport {
            marker: self,
            genotype: genotype.to_string(),
            interpretation: self.interpret(genotype),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.rsid())
    }
}

/// Result of one genotype lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeReport {
    pub marker: Marker,
    pub genotype: String,
    pub interpretation: &'static str,
}

impl GenotypeReport {
    /// True when the genotype matched one of the marker's table entries.
    pub fn is_known(&self) -> bool {
        self.marker
            .known_genotypes()
            .contains(&self.genotype.as_str())
    }

    /// Journal line for this report.
    pub fn journal_record(&self) -> String {
        format!("{} Analysis: {}", self.marker.label(), self.interpretation)
    }
}
