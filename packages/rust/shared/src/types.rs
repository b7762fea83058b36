//! Core domain types for citation-gender enrichment.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Direction of a citation-graph query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Works that cite the given DOI.
    Citing,
    /// Works the given DOI cites (its references).
    Cited,
}

impl Direction {
    /// API path segment on the citation index.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Citing => "citations",
            Self::Cited => "references",
        }
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// A guessed gender label. `Unknown` is a valid terminal value, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    /// Parse a service-reported label. Anything unrecognized maps to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// A gender guess with an optional confidence score in percent.
///
/// The local heuristic detector reports no score; the external service
/// reports 0–100. Serialized into the name cache as `{gender, accuracy}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderGuess {
    pub gender: Gender,
    pub accuracy: Option<u8>,
}

impl GenderGuess {
    /// The explicit "could not resolve" sentinel: unknown at zero confidence.
    pub fn unknown() -> Self {
        Self {
            gender: Gender::Unknown,
            accuracy: Some(0),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.gender == Gender::Unknown
    }
}

// ---------------------------------------------------------------------------
// AuthorNames
// ---------------------------------------------------------------------------

/// Given names of the first-listed and last-listed authors of a work.
/// Either name may be empty when the work or its author list is unresolvable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorNames {
    pub first: String,
    pub last: String,
}

// ---------------------------------------------------------------------------
// CitationRecord
// ---------------------------------------------------------------------------

/// One enriched row of the results table, keyed by DOI.
///
/// `cited_entity`/`cited_doi` are set for first-hop rows (works citing a
/// seed); `citing_entity`/`citing_doi` for second-hop rows (references of a
/// citing work). Field order here is the CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationRecord {
    pub doi: String,
    pub first_author_name: String,
    pub first_author_gender: Gender,
    pub first_author_gender_accuracy: Option<u8>,
    pub last_author_name: String,
    pub last_author_gender: Gender,
    pub last_author_gender_accuracy: Option<u8>,
    /// Seed entity (e.g. "paper") this row cites, for first-hop rows.
    pub cited_entity: Option<String>,
    /// DOI of the seed this row cites, for first-hop rows.
    pub cited_doi: Option<String>,
    /// Space-joined seed entities that transitively led here, for second-hop rows.
    pub citing_entity: Option<String>,
    /// DOI of the citing work whose references produced this row.
    pub citing_doi: Option<String>,
}

impl CitationRecord {
    /// Build a record from resolved names and guesses, with no provenance tags.
    pub fn new(
        doi: impl Into<String>,
        names: AuthorNames,
        first_guess: GenderGuess,
        last_guess: GenderGuess,
    ) -> Self {
        Self {
            doi: doi.into(),
            first_author_name: names.first,
            first_author_gender: first_guess.gender,
            first_author_gender_accuracy: first_guess.accuracy,
            last_author_name: names.last,
            last_author_gender: last_guess.gender,
            last_author_gender_accuracy: last_guess.accuracy,
            cited_entity: None,
            cited_doi: None,
            citing_entity: None,
            citing_doi: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_paths() {
        assert_eq!(Direction::Citing.as_path(), "citations");
        assert_eq!(Direction::Cited.as_path(), "references");
    }

    #[test]
    fn gender_label_roundtrip() {
        assert_eq!(Gender::from_label("male"), Gender::Male);
        assert_eq!(Gender::from_label("Female"), Gender::Female);
        assert_eq!(Gender::from_label("nonbinary"), Gender::Unknown);
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        let parsed: Gender = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(parsed, Gender::Unknown);
    }

    #[test]
    fn unknown_sentinel() {
        let g = GenderGuess::unknown();
        assert!(g.is_unknown());
        assert_eq!(g.accuracy, Some(0));
    }

    #[test]
    fn guess_cache_shape() {
        let guess = GenderGuess {
            gender: Gender::Female,
            accuracy: Some(97),
        };
        let json = serde_json::to_string(&guess).unwrap();
        assert_eq!(json, r#"{"gender":"female","accuracy":97}"#);

        let no_score: GenderGuess = serde_json::from_str(r#"{"gender":"male","accuracy":null}"#)
            .unwrap();
        assert_eq!(no_score.accuracy, None);
    }

    #[test]
    fn record_defaults_have_no_provenance() {
        let rec = CitationRecord::new(
            "10.1/xyz",
            AuthorNames {
                first: "Jane".into(),
                last: "John".into(),
            },
            GenderGuess {
                gender: Gender::Female,
                accuracy: None,
            },
            GenderGuess {
                gender: Gender::Male,
                accuracy: Some(99),
            },
        );
        assert_eq!(rec.doi, "10.1/xyz");
        assert!(rec.cited_entity.is_none());
        assert!(rec.citing_entity.is_none());
    }
}
