//! Two-hop dataset assembly.
//!
//! Hop 1 collects the works citing each configured seed; hop 2 collects the
//! references of every newly recorded citing work. Each new DOI is enriched
//! with author names and gender guesses before being appended to the table.
//! All external calls are sequential; a transport fault aborts the run and
//! only write-through cache entries survive.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use gendercite_citations::{AuthorClient, CitationClient};
use gendercite_gender::GenderResolver;
use gendercite_shared::{CitationRecord, Direction, Result, Seed};
use gendercite_storage::{NameCache, ResultsTable};

// ---------------------------------------------------------------------------
// Config & summary
// ---------------------------------------------------------------------------

/// Configuration for one assembly run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Seed works whose citation graphs are collected, in order.
    pub seeds: Vec<Seed>,
    /// Where the combined results table is saved.
    pub data_file: PathBuf,
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// New rows from works citing a seed.
    pub first_hop_rows: usize,
    /// New rows from references of newly recorded citing works.
    pub second_hop_rows: usize,
    /// Total rows in the saved table (prior + new).
    pub total_rows: usize,
    /// Total elapsed time.
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// Progress reporting
// ---------------------------------------------------------------------------

/// Progress callback for reporting run status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Per-DOI progress within the current phase.
    fn item(&self, current: usize, total: usize, detail: &str);
    /// Called when the run completes.
    fn done(&self, summary: &RunSummary);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn item(&self, _current: usize, _total: usize, _detail: &str) {}
    fn done(&self, _summary: &RunSummary) {}
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run the full assembly pass over `table`, saving the table and persisting
/// the cache on completion.
///
/// Re-running against an unchanged citation graph appends nothing: every DOI
/// already present in `table` is skipped before any metadata is fetched.
#[instrument(skip_all, fields(seeds = config.seeds.len(), prior_rows = table.len()))]
pub async fn run(
    config: &RunConfig,
    citations: &CitationClient,
    authors: &AuthorClient,
    resolver: &GenderResolver,
    table: &mut ResultsTable,
    cache: &mut NameCache,
    progress: &dyn ProgressReporter,
) -> Result<RunSummary> {
    let start = Instant::now();

    let seed_dois: HashSet<&str> = config.seeds.iter().map(|s| s.doi.as_str()).collect();

    // Which seed entities each citing DOI showed up under, in seed order.
    // Tracked for every citing DOI seen this run so second-hop rows can be
    // tagged with their full lineage.
    let mut lineage: HashMap<String, Vec<String>> = HashMap::new();
    // DOIs recorded in hop 1 this run, in append order.
    let mut new_citing: Vec<String> = Vec::new();

    // --- Hop 1: works citing each seed ---
    for seed in &config.seeds {
        progress.phase(&format!("Collecting citations of the {}", seed.entity));
        let citing_dois = citations.fetch(&seed.doi, Direction::Citing).await?;

        if citing_dois.is_empty() {
            info!(entity = %seed.entity, doi = %seed.doi, "no citations found");
            continue;
        }

        let total = citing_dois.len();
        for (n, citing_doi) in citing_dois.iter().enumerate() {
            progress.item(n + 1, total, citing_doi);

            let entities = lineage.entry(citing_doi.clone()).or_default();
            if !entities.contains(&seed.entity) {
                entities.push(seed.entity.clone());
            }

            if table.contains(citing_doi) {
                continue;
            }

            let mut record = enrich(citing_doi, authors, resolver, cache).await?;
            record.cited_entity = Some(seed.entity.clone());
            record.cited_doi = Some(seed.doi.clone());
            table.push(record);
            new_citing.push(citing_doi.clone());
        }
    }
    let first_hop_rows = new_citing.len();

    // --- Hop 2: references of the newly recorded citing works ---
    progress.phase("Collecting references of the citing papers");
    let mut second_hop_rows = 0;
    let total = new_citing.len();

    for (n, citing_doi) in new_citing.iter().enumerate() {
        let ref_dois = citations.fetch(citing_doi, Direction::Cited).await?;

        for (k, ref_doi) in ref_dois.iter().enumerate() {
            progress.item(
                n + 1,
                total,
                &format!("{citing_doi} reference {}/{}", k + 1, ref_dois.len()),
            );

            // The seeds themselves and anything already enriched are skipped.
            if seed_dois.contains(ref_doi.as_str()) || table.contains(ref_doi) {
                continue;
            }

            let mut record = enrich(ref_doi, authors, resolver, cache).await?;
            record.citing_entity = lineage.get(citing_doi).map(|e| e.join(" "));
            record.citing_doi = Some(citing_doi.clone());
            table.push(record);
            second_hop_rows += 1;
        }
    }

    // --- Terminal: persist both outputs ---
    progress.phase("Saving results");
    table.save(&config.data_file)?;
    cache.persist()?;

    let summary = RunSummary {
        first_hop_rows,
        second_hop_rows,
        total_rows: table.len(),
        elapsed: start.elapsed(),
    };

    progress.done(&summary);

    info!(
        first_hop = summary.first_hop_rows,
        second_hop = summary.second_hop_rows,
        total = summary.total_rows,
        elapsed_ms = summary.elapsed.as_millis(),
        "assembly run complete"
    );

    Ok(summary)
}

/// Build one enriched record: author names, then a gender guess per name.
async fn enrich(
    doi: &str,
    authors: &AuthorClient,
    resolver: &GenderResolver,
    cache: &mut NameCache,
) -> Result<CitationRecord> {
    let names = authors.resolve(doi).await?;
    let first_guess = resolver.resolve(&names.first, cache).await?;
    let last_guess = resolver.resolve(&names.last, cache).await?;
    Ok(CitationRecord::new(doi, names, first_guess, last_guess))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
