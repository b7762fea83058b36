//! Persisted results table.
//!
//! Row-oriented CSV with one enriched record per DOI. Records accumulate in
//! memory during a run and are serialized once at the end; the DOI index
//! backs the membership check that makes re-runs idempotent.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use gendercite_shared::{CitationRecord, GenderciteError, Result};

/// The accumulated record table, keyed by DOI.
#[derive(Debug, Default)]
pub struct ResultsTable {
    records: Vec<CitationRecord>,
    dois: HashSet<String>,
}

impl ResultsTable {
    /// Load a previously saved table. A missing file yields an empty table.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(?path, "no prior results table found, starting empty");
            return Ok(Self::default());
        }

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| GenderciteError::Storage(format!("{}: {e}", path.display())))?;

        let mut table = Self::default();
        for row in reader.deserialize() {
            let record: CitationRecord =
                row.map_err(|e| GenderciteError::Storage(format!("{}: {e}", path.display())))?;
            table.push(record);
        }

        debug!(?path, rows = table.len(), "loaded results table");
        Ok(table)
    }

    /// Whether a record for `doi` is already present.
    pub fn contains(&self, doi: &str) -> bool {
        self.dois.contains(doi)
    }

    /// Append a record. The caller checks membership first; a duplicate DOI
    /// here would break the one-row-per-DOI invariant of the saved table.
    pub fn push(&mut self, record: CitationRecord) {
        self.dois.insert(record.doi.clone());
        self.records.push(record);
    }

    pub fn records(&self) -> &[CitationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the table to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| GenderciteError::io(parent, e))?;
            }
        }

        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| GenderciteError::Storage(format!("{}: {e}", path.display())))?;

        for record in &self.records {
            writer
                .serialize(record)
                .map_err(|e| GenderciteError::Storage(format!("{}: {e}", path.display())))?;
        }

        writer
            .flush()
            .map_err(|e| GenderciteError::io(path, e))?;

        info!(?path, rows = self.records.len(), "saved results table");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gendercite_shared::{AuthorNames, Gender, GenderGuess};
    use std::path::PathBuf;

    fn tmp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gendercite-table-{name}-{}.csv", std::process::id()))
    }

    fn sample_record(doi: &str) -> CitationRecord {
        let mut rec = CitationRecord::new(
            doi,
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
                accuracy: Some(92),
            },
        );
        rec.cited_entity = Some("paper".into());
        rec.cited_doi = Some("10.1038/s41593-020-0658-y".into());
        rec
    }

    #[test]
    fn missing_file_starts_empty() {
        let table = ResultsTable::load(&tmp_path("missing")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn membership_check() {
        let mut table = ResultsTable::default();
        assert!(!table.contains("10.1/aaa"));
        table.push(sample_record("10.1/aaa"));
        assert!(table.contains("10.1/aaa"));
        assert!(!table.contains("10.1/bbb"));
    }

    #[test]
    fn save_then_reload_preserves_rows() {
        let path = tmp_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let mut table = ResultsTable::default();
        table.push(sample_record("10.1/aaa"));

        let mut second_hop = sample_record("10.2/ref1");
        second_hop.cited_entity = None;
        second_hop.cited_doi = None;
        second_hop.citing_entity = Some("paper preprint".into());
        second_hop.citing_doi = Some("10.1/aaa".into());
        table.push(second_hop);

        table.save(&path).unwrap();

        let reloaded = ResultsTable::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("10.1/aaa"));
        assert!(reloaded.contains("10.2/ref1"));

        let first = &reloaded.records()[0];
        assert_eq!(first.first_author_name, "Jane");
        assert_eq!(first.first_author_gender, Gender::Female);
        assert_eq!(first.first_author_gender_accuracy, None);
        assert_eq!(first.last_author_gender_accuracy, Some(92));
        assert_eq!(first.cited_entity.as_deref(), Some("paper"));

        let second = &reloaded.records()[1];
        assert_eq!(second.cited_entity, None);
        assert_eq!(second.citing_entity.as_deref(), Some("paper preprint"));
        assert_eq!(second.citing_doi.as_deref(), Some("10.1/aaa"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn header_matches_documented_column_order() {
        let path = tmp_path("header");
        let _ = std::fs::remove_file(&path);

        let mut table = ResultsTable::default();
        table.push(sample_record("10.1/aaa"));
        table.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "doi,first_author_name,first_author_gender,first_author_gender_accuracy,\
             last_author_name,last_author_gender,last_author_gender_accuracy,\
             cited_entity,cited_doi,citing_entity,citing_doi"
        );

        let _ = std::fs::remove_file(&path);
    }
}
