//! Normalization pipeline with explicit, numbered stages.
//!
//! 1. **Load**: read the raw list and extract typed rows
//! 2. **Dates of birth**: parse each DOB string with a precision label
//! 3. **Countries**: strip positional noise from country cells
//! 4. **Names**: build display names from the name parts
//! 5. **Aggregate**: one record per `Group ID`
//! 6. **Refine columns**: build the output table in column order
//! 7. **LRM**: remove left-to-right marks and placeholder tokens
//! 8. **Metadata dates**: parse listing and update dates
//! 9. **Whitespace**: trim and collapse whitespace
//! 10. **Country standardization**: map variants to canonical names
//! 11. **Checks**: run the quality gate
//! 12. **Export**: sort by `Group ID` and write the CSV
//!
//! Any failure before stage 11 aborts the run. Quality-gate findings never do.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::DataFrame;
use tracing::{info, info_span, trace, warn};

use sanctions_ingest::{extract_source_records, read_source_table};
use sanctions_model::{AggregatedEntity, GroupTypeSet, NormalizedRecord, SourceRecord};
use sanctions_normalization::cleaning::{
    clean_whitespace, convert_metadata_dates, remove_lrm, standardize_country_columns,
};
use sanctions_normalization::{
    CleaningSummary, CountryMap, DobSummary, FrameOptions, NormalizationConfig, aggregate_group,
    build_names, clean_countries, entities_to_frame, group_records, parse_dates, prepare_record,
};
use sanctions_output::{export_sorted, sort_by_group_id};
use sanctions_validate::{QualityReport, run_quality_gate};

use crate::logging::redact_value;

/// Version tag given to a group-type set supplied on the command line.
pub const CLI_GROUP_TYPES_VERSION: &str = "command-line";

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Zero-based line index of the header row.
    pub header_row: usize,
    /// Extra country mappings merged over the built-in table.
    pub country_map: Option<PathBuf>,
    /// Accepted group classifications; empty keeps the built-in set.
    pub group_types: Vec<String>,
    pub keep_raw_dob: bool,
    /// Skip stage 12.
    pub dry_run: bool,
    /// Draw a progress bar during aggregation.
    pub show_progress: bool,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            header_row: 1,
            country_map: None,
            group_types: Vec::new(),
            keep_raw_dob: false,
            dry_run: false,
            show_progress: false,
        }
    }
}

/// Timing of one completed stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTiming {
    pub number: u8,
    pub name: &'static str,
    pub duration_ms: u128,
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Path written in stage 12; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub source_rows: usize,
    pub entity_count: usize,
    pub dob: DobSummary,
    /// Country cells that held only noise.
    pub emptied_countries: usize,
    /// Rows without any name part.
    pub unnamed_rows: usize,
    pub cleaning: CleaningSummary,
    pub report: QualityReport,
    /// Final table, sorted by `Group ID`.
    pub table: DataFrame,
    pub stages: Vec<StageTiming>,
}

/// Records stage timings and emits the numbered stage events.
#[derive(Debug, Default)]
struct StageLog {
    stages: Vec<StageTiming>,
}

impl StageLog {
    fn run<T>(&mut self, number: u8, name: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let span = info_span!("stage", stage = number, stage_name = name);
        let _guard = span.enter();
        let start = Instant::now();
        let value = f()?;
        let duration_ms = start.elapsed().as_millis();
        info!(stage = number, duration_ms, "{name} complete");
        self.stages.push(StageTiming {
            number,
            name,
            duration_ms,
        });
        Ok(value)
    }
}

/// Builds the normalization configuration, merging any extra country mappings.
pub fn build_config(country_map: Option<&Path>) -> Result<NormalizationConfig> {
    let mut countries = CountryMap::builtin();
    if let Some(path) = country_map {
        let added = countries
            .merge_json_file(path)
            .with_context(|| format!("load country map {}", path.display()))?;
        info!(path = %path.display(), added, total = countries.len(), "merged country map");
    }
    Ok(NormalizationConfig::default().with_countries(countries))
}

/// Accepted group types: the command-line values when given, else the built-in set.
pub fn group_type_set(values: &[String]) -> GroupTypeSet {
    if values.is_empty() {
        GroupTypeSet::default()
    } else {
        GroupTypeSet::new(CLI_GROUP_TYPES_VERSION, values.iter().cloned())
    }
}

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Reads the raw list and extracts one [`SourceRecord`] per row.
pub fn load(input: &Path, header_row: usize) -> Result<Vec<SourceRecord>> {
    let df = read_source_table(input, header_row)
        .with_context(|| format!("read {}", input.display()))?;
    let records = extract_source_records(&df).context("extract source rows")?;
    info!(
        path = %input.display(),
        row_count = records.len(),
        column_count = df.width(),
        "loaded raw list"
    );
    Ok(records)
}

// ============================================================================
// Stage 5: Aggregate
// ============================================================================

/// Groups rows by `Group ID` and consolidates each group.
///
/// Any group failure aborts the run; partial output would misstate which
/// entities are on the list.
pub fn aggregate(
    records: Vec<NormalizedRecord>,
    config: &NormalizationConfig,
    show_progress: bool,
) -> Result<Vec<AggregatedEntity>> {
    let groups = group_records(records);
    let progress = progress_bar(groups.len() as u64, show_progress);
    let mut entities = Vec::with_capacity(groups.len());
    for group in &groups {
        let entity = aggregate_group(group, config)
            .with_context(|| format!("aggregate group {}", group.group_id))?;
        trace!(
            group_id = entity.group_id,
            rows = group.rows.len(),
            primary_name = redact_value(entity.primary_name.as_deref().unwrap_or_default()),
            "aggregated entity"
        );
        entities.push(entity);
        progress.inc(1);
    }
    progress.finish_and_clear();
    Ok(entities)
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    let style = ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len} groups ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar.set_message("Aggregating");
    bar
}

// ============================================================================
// Full run
// ============================================================================

/// Runs all twelve stages.
///
/// # Errors
///
/// Returns an error for an unreadable or malformed input, an invalid country
/// map, a failed aggregation or a failed export.
pub fn run_pipeline(options: &RunOptions) -> Result<RunResult> {
    let config = build_config(options.country_map.as_deref())?;
    let group_types = group_type_set(&options.group_types);
    let frame_options = FrameOptions {
        keep_raw_dob: options.keep_raw_dob,
    };
    let mut log = StageLog::default();

    let sources = log.run(1, "load", || load(&options.input, options.header_row))?;
    let source_rows = sources.len();
    let mut records: Vec<NormalizedRecord> = sources.into_iter().map(prepare_record).collect();

    let dob = log.run(2, "dates of birth", || {
        let summary = parse_dates(&mut records, config.dob_years);
        info!(
            row_count = records.len(),
            precisions = ?summary.counts,
            "parsed dates of birth"
        );
        Ok(summary)
    })?;

    let emptied_countries = log.run(3, "countries", || {
        let emptied = clean_countries(&mut records);
        info!(row_count = records.len(), emptied, "cleansed country cells");
        Ok(emptied)
    })?;

    let unnamed_rows = log.run(4, "names", || {
        let unnamed = build_names(&mut records);
        info!(row_count = records.len(), unnamed, "built display names");
        Ok(unnamed)
    })?;

    let entities = log.run(5, "aggregate", || {
        let entities = aggregate(records, &config, options.show_progress)?;
        info!(row_count = source_rows, entity_count = entities.len(), "aggregated entities");
        Ok(entities)
    })?;
    let entity_count = entities.len();

    let mut df = log.run(6, "refine columns", || {
        let df = entities_to_frame(&entities, frame_options).context("build entity table")?;
        info!(entity_count = df.height(), column_count = df.width(), "built entity table");
        Ok(df)
    })?;
    drop(entities);

    let lrm = log.run(7, "lrm", || {
        let summary = remove_lrm(&mut df).context("remove left-to-right marks")?;
        info!(cells_changed = summary.cells_changed, "removed left-to-right marks");
        Ok(summary)
    })?;

    let dates = log.run(8, "metadata dates", || {
        let dates = convert_metadata_dates(&mut df, &config.metadata_date_format)
            .context("convert metadata dates")?;
        let failed: usize = dates.iter().map(|d| d.failed).sum();
        info!(columns = dates.len(), failed, "converted metadata dates");
        Ok(dates)
    })?;

    let whitespace = log.run(9, "whitespace", || {
        let summary = clean_whitespace(&mut df).context("clean whitespace")?;
        info!(cells_changed = summary.cells_changed, "cleaned whitespace");
        Ok(summary)
    })?;

    let countries = log.run(10, "country standardization", || {
        let summary = standardize_country_columns(&mut df, &config.countries, &config.delimiter)
            .context("standardize country lists")?;
        info!(
            columns = summary.columns,
            cells_changed = summary.cells_changed,
            "standardized country lists"
        );
        Ok(summary)
    })?;

    let cleaning = CleaningSummary {
        lrm,
        dates,
        whitespace,
        countries,
    };
    if cleaning.failed_dates() > 0 {
        for conversion in cleaning.dates.iter().filter(|c| c.failed > 0) {
            warn!(
                column = %conversion.column,
                failed = conversion.failed,
                "unparseable metadata dates were cleared"
            );
        }
    }

    let report = log.run(11, "checks", || {
        let report = run_quality_gate(&df, &group_types);
        if report.is_ready() {
            info!(entity_count = report.row_count, "quality gate passed");
        } else {
            for issue in report.issues() {
                warn!(
                    rule_id = issue.rule_id(),
                    severity = issue.severity().label(),
                    column = issue.column(),
                    count = issue.count(),
                    "{}",
                    issue.message()
                );
            }
        }
        Ok(report)
    })?;

    let (table, output) = log.run(12, "export", || {
        if options.dry_run {
            info!("dry run; skipping export");
            let sorted = sort_by_group_id(&df).context("sort entity table")?;
            return Ok((sorted, None));
        }
        let sorted = export_sorted(&df, &options.output)
            .with_context(|| format!("write {}", options.output.display()))?;
        info!(
            path = %options.output.display(),
            entity_count = sorted.height(),
            "exported consolidated list"
        );
        Ok((sorted, Some(options.output.clone())))
    })?;

    Ok(RunResult {
        input: options.input.clone(),
        output,
        source_rows,
        entity_count,
        dob,
        emptied_countries,
        unnamed_rows,
        cleaning,
        report,
        table,
        stages: log.stages,
    })
}
