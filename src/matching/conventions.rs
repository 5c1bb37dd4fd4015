//! Header syntaxes of the supported sequence databases.
//!
//! Each matcher receives the header text without the leading `>` and line
//! terminator and returns the accession it found, or `None` when the header
//! does not follow that database's layout. Matchers emit `trace!` events
//! describing why a header was rejected.

use tracing::trace;

use crate::core::types::DatabaseType;

/// Attempt to read a header under one naming convention, returning the accession
pub type MatchFn = fn(&str) -> Option<&str>;

/// A single naming convention: the database it identifies and how to recognise it
#[derive(Clone, Copy)]
pub struct ConventionMatcher {
    pub database: DatabaseType,
    matcher: MatchFn,
}

impl std::fmt::Debug for ConventionMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConventionMatcher")
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

impl ConventionMatcher {
    #[must_use]
    pub const fn new(database: DatabaseType, matcher: MatchFn) -> Self {
        Self { database, matcher }
    }

    /// Try this convention on a header, returning the accession on success
    #[must_use]
    pub fn try_match<'h>(&self, header: &'h str) -> Option<&'h str> {
        (self.matcher)(header)
    }
}

/// Conventions in the order they are tried; the first match wins
pub const DEFAULT_CONVENTIONS: &[ConventionMatcher] = &[
    ConventionMatcher::new(DatabaseType::UniProt, match_uniprot),
    ConventionMatcher::new(DatabaseType::SwissProt, match_swissprot),
    ConventionMatcher::new(DatabaseType::Ncbi, match_ncbi_gi),
    ConventionMatcher::new(DatabaseType::RefSeq, match_refseq),
    ConventionMatcher::new(DatabaseType::Ipi, match_ipi),
    ConventionMatcher::new(DatabaseType::HInvitation, match_h_invitation),
    ConventionMatcher::new(DatabaseType::Ensembl, match_ensembl),
    ConventionMatcher::new(DatabaseType::NextProt, match_nextprot),
    ConventionMatcher::new(DatabaseType::UniRef, match_uniref),
    ConventionMatcher::new(DatabaseType::Sgd, match_sgd),
    ConventionMatcher::new(DatabaseType::Flybase, match_flybase),
    ConventionMatcher::new(DatabaseType::ArabidopsisTair, match_tair),
    ConventionMatcher::new(DatabaseType::GenericSplitHeader, match_generic_split),
];

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_upper_alnum(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

/// First whitespace-delimited token of a header
///
/// `None` when the header is empty or starts with whitespace; no convention
/// allows a gap between `>` and the identifier.
fn first_token(header: &str) -> Option<&str> {
    if header.starts_with(char::is_whitespace) {
        trace!(header, "whitespace before identifier");
        return None;
    }
    header.split_whitespace().next()
}

/// `DIGITS` optionally followed by `.DIGITS`
fn is_versioned_number(s: &str, digits: Option<usize>) -> bool {
    let (number, version) = match s.split_once('.') {
        Some((number, version)) => (number, Some(version)),
        None => (s, None),
    };
    let number_ok = all_digits(number) && digits.map_or(true, |n| number.len() == n);
    number_ok && version.map_or(true, all_digits)
}

/// UniProtKB accession, with optional `-N` isoform suffix
///
/// Six or ten upper-case alphanumerics: a letter, a digit, and a trailing digit.
pub fn is_uniprot_accession(accession: &str) -> bool {
    let base = match accession.split_once('-') {
        Some((base, isoform)) if all_digits(isoform) => base,
        Some(_) => return false,
        None => accession,
    };
    let bytes = base.as_bytes();
    matches!(bytes.len(), 6 | 10)
        && bytes.iter().all(|&b| is_upper_alnum(b))
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_digit()
        && bytes[bytes.len() - 1].is_ascii_digit()
}

/// `DB|ACCESSION|ENTRY_NAME[ description]` with a UniProt accession
fn match_uniprot_layout<'h>(header: &'h str, prefixes: &[&str]) -> Option<&'h str> {
    let token = first_token(header)?;
    let mut fields = token.splitn(3, '|');
    let db = fields.next()?;
    if !prefixes.contains(&db) {
        return None;
    }
    let Some(accession) = fields.next() else {
        trace!(header, "missing accession field");
        return None;
    };
    if !is_uniprot_accession(accession) {
        trace!(header, accession, "not a UniProt accession");
        return None;
    }
    match fields.next() {
        Some(name) if !name.is_empty() && !name.contains('|') => Some(accession),
        _ => {
            trace!(header, "missing or malformed entry name");
            None
        }
    }
}

/// `sp|P12345|NAME_HUMAN ...` or `tr|Q9XYZ1|Q9XYZ1_MOUSE ...`
pub fn match_uniprot(header: &str) -> Option<&str> {
    match_uniprot_layout(header, &["sp", "tr"])
}

/// Legacy Swiss-Prot layout `sw|P12345|NAME_HUMAN ...`
pub fn match_swissprot(header: &str) -> Option<&str> {
    match_uniprot_layout(header, &["sw"])
}

/// `gi|4501847|ref|NP_001605.1| description`
pub fn match_ncbi_gi(header: &str) -> Option<&str> {
    let rest = header.strip_prefix("gi|")?;
    let fields: Vec<&str> = rest.splitn(4, '|').collect();
    if fields.len() < 4 {
        trace!(header, "expected gi|number|db|accession|");
        return None;
    }
    let (gi, db, accession) = (fields[0], fields[1], fields[2]);
    if !all_digits(gi) {
        trace!(header, gi, "gi number is not numeric");
        return None;
    }
    if db.is_empty() || !db.bytes().all(|b| b.is_ascii_lowercase()) {
        trace!(header, db, "database field is not a lower-case code");
        return None;
    }
    if accession.is_empty() || accession.contains(char::is_whitespace) {
        trace!(header, "empty or malformed accession");
        return None;
    }
    Some(accession)
}

/// `NP_001605.1 description`
pub fn match_refseq(header: &str) -> Option<&str> {
    let token = first_token(header)?;
    let (prefix, number) = token.split_once('_')?;
    if prefix.len() != 2 || !prefix.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    if !is_versioned_number(number, None) {
        trace!(header, "RefSeq accession number is not numeric");
        return None;
    }
    Some(token)
}

/// `IPI:IPI00000001.2|SWISS-PROT:O95793-1|...`
pub fn match_ipi(header: &str) -> Option<&str> {
    let rest = header.strip_prefix("IPI:")?;
    let end = rest
        .find(|c: char| c == '|' || c.is_whitespace())
        .unwrap_or(rest.len());
    let accession = &rest[..end];
    match accession.strip_prefix("IPI") {
        Some(number) if is_versioned_number(number, Some(8)) => Some(accession),
        _ => {
            trace!(header, accession, "not an IPI accession");
            None
        }
    }
}

/// `HIT000000001.10|HIX0021591.10|AB002292.2|...`
pub fn match_h_invitation(header: &str) -> Option<&str> {
    let (accession, rest) = header.split_once('|')?;
    let number = accession.strip_prefix("HIT")?;
    if !number.contains('.') || !is_versioned_number(number, Some(9)) {
        trace!(header, accession, "not an H-Invitational transcript id");
        return None;
    }
    if rest.is_empty() {
        trace!(header, "missing fields after transcript id");
        return None;
    }
    Some(accession)
}

/// `ENSP00000354587.3 pep chromosome:...`, any species prefix (`ENSMUSP`, ...)
pub fn match_ensembl(header: &str) -> Option<&str> {
    let token = first_token(header)?;
    let rest = token.strip_prefix("ENS")?;
    let species_len = rest
        .bytes()
        .take_while(u8::is_ascii_uppercase)
        .count();
    if species_len == 0 || rest.as_bytes()[species_len - 1] != b'P' {
        trace!(header, "not an Ensembl peptide id");
        return None;
    }
    if !is_versioned_number(&rest[species_len..], Some(11)) {
        trace!(header, "Ensembl id does not have eleven digits");
        return None;
    }
    Some(token)
}

/// `nxp|NX_P12345-1|GENE|description`
pub fn match_nextprot(header: &str) -> Option<&str> {
    let rest = header.strip_prefix("nxp|")?;
    let fields: Vec<&str> = rest.splitn(3, '|').collect();
    if fields.len() < 3 {
        trace!(header, "expected nxp|accession|gene|description");
        return None;
    }
    let accession = fields[0];
    match accession.strip_prefix("NX_") {
        Some(id) if !id.is_empty() && !id.contains(char::is_whitespace) => Some(accession),
        _ => {
            trace!(header, accession, "not a neXtProt accession");
            None
        }
    }
}

/// `UniRef100_P12345 Cluster: ...` (also `UniRef90_`, `UniRef50_`)
pub fn match_uniref(header: &str) -> Option<&str> {
    let token = first_token(header)?;
    let rest = token.strip_prefix("UniRef")?;
    let (level, id) = rest.split_once('_')?;
    if !matches!(level, "100" | "90" | "50") || id.is_empty() {
        trace!(header, "malformed UniRef cluster id");
        return None;
    }
    Some(token)
}

/// `YAL001C TFC3 SGDID:S000000001, Chr I from ...`
pub fn match_sgd(header: &str) -> Option<&str> {
    let systematic = first_token(header)?;
    let mut tokens = header.split_whitespace().skip(1);
    let _gene = tokens.next()?;
    let sgd_id = tokens.next()?.trim_end_matches(',');
    let number = sgd_id.strip_prefix("SGDID:S")?;
    if !all_digits(number) || !systematic.bytes().all(is_upper_alnum_or_dash) {
        trace!(header, "malformed SGD header");
        return None;
    }
    Some(systematic)
}

fn is_upper_alnum_or_dash(b: u8) -> bool {
    is_upper_alnum(b) || b == b'-'
}

/// `FBpp0070000 type=protein; loc=X:...; ID=FBpp0070000; ...`
pub fn match_flybase(header: &str) -> Option<&str> {
    let (accession, rest) = header.split_once(' ')?;
    let number = accession.strip_prefix("FBpp")?;
    if number.len() != 7 || !all_digits(number) {
        trace!(header, accession, "not a FlyBase polypeptide id");
        return None;
    }
    if !rest.starts_with("type=") {
        trace!(header, "missing type= attribute");
        return None;
    }
    Some(accession)
}

/// `AT1G01010.1 | Symbols: NAC001 | ...`
pub fn match_tair(header: &str) -> Option<&str> {
    let (accession, _) = header.split_once(" | ")?;
    let bytes = accession.as_bytes();
    if bytes.len() < 11 || !accession.starts_with("AT") || bytes[3] != b'G' {
        return None;
    }
    if !matches!(bytes[2], b'1'..=b'5' | b'C' | b'M') {
        trace!(header, accession, "unknown TAIR chromosome code");
        return None;
    }
    let (locus, model) = accession[4..].split_once('.')?;
    if locus.len() != 5 || !all_digits(locus) || !all_digits(model) {
        trace!(header, accession, "malformed TAIR locus id");
        return None;
    }
    Some(accession)
}

/// `generic|ACCESSION|description`
pub fn match_generic_split(header: &str) -> Option<&str> {
    let rest = header.strip_prefix("generic|")?;
    match rest.split_once('|') {
        Some((accession, _)) if !accession.is_empty() => Some(accession),
        _ => {
            trace!(header, "expected generic|accession|description");
            None
        }
    }
}
