use serde::Serialize;

/// Sequence database whose header naming convention a FASTA entry follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DatabaseType {
    /// UniProtKB: `sp|P12345|NAME_HUMAN ...` or `tr|...`
    UniProt,
    /// Legacy Swiss-Prot: `sw|P12345|NAME_HUMAN ...`
    SwissProt,
    /// NCBI GenInfo: `gi|12345|ref|NP_000001.1| ...`
    #[serde(rename = "NCBI")]
    Ncbi,
    /// NCBI RefSeq accession: `NP_000001.1 ...`
    RefSeq,
    /// International Protein Index: `IPI:IPI00000001.2|...`
    #[serde(rename = "IPI")]
    Ipi,
    /// H-Invitational Database: `HIT000000001.10|...`
    #[serde(rename = "H_Invitation")]
    HInvitation,
    /// Ensembl peptide: `ENSP00000354587.3 pep ...`
    Ensembl,
    /// neXtProt: `nxp|NX_P12345-1|GENE|...`
    NextProt,
    /// UniRef clusters: `UniRef100_P12345 ...`
    UniRef,
    /// Saccharomyces Genome Database: `YAL001C TFC3 SGDID:S000000001, ...`
    #[serde(rename = "SGD")]
    Sgd,
    /// FlyBase: `FBpp0070000 type=protein; ...`
    Flybase,
    /// TAIR Arabidopsis: `AT1G01010.1 | Symbols: ...`
    #[serde(rename = "Arabidopsis_thaliana_TAIR")]
    ArabidopsisTair,
    /// Explicit generic split header: `generic|ACCESSION|description`
    #[serde(rename = "Generic_Split_Header")]
    GenericSplitHeader,
}

impl DatabaseType {
    /// Tag used in reports
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::UniProt => "UniProt",
            Self::SwissProt => "SwissProt",
            Self::Ncbi => "NCBI",
            Self::RefSeq => "RefSeq",
            Self::Ipi => "IPI",
            Self::HInvitation => "H_Invitation",
            Self::Ensembl => "Ensembl",
            Self::NextProt => "NextProt",
            Self::UniRef => "UniRef",
            Self::Sgd => "SGD",
            Self::Flybase => "Flybase",
            Self::ArabidopsisTair => "Arabidopsis_thaliana_TAIR",
            Self::GenericSplitHeader => "Generic_Split_Header",
        }
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Outcome of classifying a single FASTA header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConventionMatch {
    /// The header follows the naming convention of this database
    Matched(DatabaseType),
    /// No known naming convention accepts the header
    NoMatch,
}

impl ConventionMatch {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    #[must_use]
    pub fn database(&self) -> Option<DatabaseType> {
        match self {
            Self::Matched(database) => Some(*database),
            Self::NoMatch => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_report_tag() {
        assert_eq!(DatabaseType::Ncbi.to_string(), "NCBI");
        assert_eq!(
            DatabaseType::ArabidopsisTair.to_string(),
            "Arabidopsis_thaliana_TAIR"
        );
    }

    #[test]
    fn test_serde_name_matches_tag() {
        for database in [
            DatabaseType::UniProt,
            DatabaseType::Ncbi,
            DatabaseType::Ipi,
            DatabaseType::HInvitation,
            DatabaseType::Sgd,
            DatabaseType::GenericSplitHeader,
        ] {
            let json = serde_json::to_string(&database).unwrap();
            assert_eq!(json, format!("\"{}\"", database.tag()));
        }
    }

    #[test]
    fn test_convention_match_accessors() {
        let matched = ConventionMatch::Matched(DatabaseType::UniProt);
        assert!(matched.is_match());
        assert_eq!(matched.database(), Some(DatabaseType::UniProt));

        assert!(!ConventionMatch::NoMatch.is_match());
        assert_eq!(ConventionMatch::NoMatch.database(), None);
    }
}
