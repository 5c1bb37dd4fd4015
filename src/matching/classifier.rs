use tracing::{trace, Dispatch};

use crate::core::record::header_text;
use crate::core::types::{ConventionMatch, DatabaseType};
use crate::matching::conventions::{ConventionMatcher, DEFAULT_CONVENTIONS};

/// Run `f` with all tracing output on this thread discarded
///
/// The previous dispatcher is restored when `f` returns or unwinds.
pub fn quietly<T>(f: impl FnOnce() -> T) -> T {
    tracing::dispatcher::with_default(&Dispatch::none(), f)
}

/// Decides which database naming convention, if any, a FASTA header follows
///
/// Conventions are tried in order and the first one that accepts the header
/// wins. Matcher diagnostics are suppressed unless quiet mode is turned off.
#[derive(Debug, Clone)]
pub struct HeaderClassifier {
    conventions: Vec<ConventionMatcher>,
    quiet: bool,
}

impl Default for HeaderClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderClassifier {
    /// Classifier using the built-in conventions
    #[must_use]
    pub fn new() -> Self {
        Self::with_matchers(DEFAULT_CONVENTIONS.to_vec())
    }

    /// Classifier trying exactly these conventions, in this order
    #[must_use]
    pub fn with_matchers(conventions: Vec<ConventionMatcher>) -> Self {
        Self {
            conventions,
            quiet: true,
        }
    }

    /// Whether matcher diagnostics are suppressed during classification
    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub fn conventions(&self) -> &[ConventionMatcher] {
        &self.conventions
    }

    /// Classify a raw header line (with or without `>` and line terminator)
    #[must_use]
    pub fn classify(&self, header: &str) -> ConventionMatch {
        let text = header_text(header);
        let found = if self.quiet {
            quietly(|| self.find_convention(text))
        } else {
            self.find_convention(text)
        };

        match found {
            Some(database) => ConventionMatch::Matched(database),
            None => ConventionMatch::NoMatch,
        }
    }

    fn find_convention(&self, text: &str) -> Option<DatabaseType> {
        self.conventions.iter().find_map(|convention| {
            let accession = convention.try_match(text)?;
            trace!(database = %convention.database, accession, "header matched");
            Some(convention.database)
        })
    }
}
