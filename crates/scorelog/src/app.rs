//! Orchestration of a single scoring run
//!
//! A [`ResultProcessor`] validates the caller's inputs, collects the first
//! and second results, combines them with a fixed tag and records the
//! outcome in its [`ResultLog`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use scorelog_core::{
    ConstantTable, ResultValue, collect_candidate, collect_constant, combine, validate_range,
    validate_test_type,
};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::config::ScorelogConfig;
use crate::error::{Result, ScorelogError};
use crate::result_log::{DEFAULT_LOG_PATH, RecordedInputs, ResultLog};
use crate::storage::{LocalStorage, Storage};

/// Third input used when none is configured
pub const DEFAULT_TAG: &str = "number_3";

/// Runs validate → collect → combine → log against one log document
///
/// The log is read once in [`ResultProcessorBuilder::build`]. Writes made
/// through another handle between `process` calls are not seen, and the
/// next insert overwrites them.
pub struct ResultProcessor {
    constants: ConstantTable,
    tag: String,
    log: ResultLog,
    rng: StdRng,
}

impl ResultProcessor {
    /// Create a new builder
    pub fn builder() -> ResultProcessorBuilder {
        ResultProcessorBuilder::new()
    }

    /// Builder preloaded from configuration, backed by local storage
    pub fn from_config(config: &ScorelogConfig) -> ResultProcessorBuilder {
        ResultProcessorBuilder::new()
            .storage(LocalStorage::from_config(config))
            .log_path(&config.log_path)
            .constants(config.test_types.clone())
            .tag(config.tag.clone())
    }

    /// Validate the inputs, combine a random candidate with the constant
    /// for `label` and record the outcome.
    ///
    /// Validation failures happen before any collection or write.
    /// Combination failures propagate unchanged.
    pub fn process(&mut self, range: &[ResultValue], label: &str) -> Result<ProcessOutcome> {
        let candidates = validate_range(range)?;
        validate_test_type(label, &self.constants)?;

        let result_1 = collect_candidate(&candidates, &mut self.rng)?;
        let result_2 = collect_constant(label, &self.constants)?;
        let result_3 = self.tag.clone();
        let score = combine(result_1, result_2, &result_3)?;
        debug!(
            "Combined {}, {} and {} into {}",
            result_1, result_2, result_3, score
        );

        let inputs = RecordedInputs::new(result_1, result_2, result_3);
        let recorded = self.log.write(score, inputs.clone())?;

        Ok(ProcessOutcome {
            inputs,
            score,
            recorded,
        })
    }

    pub fn log(&self) -> &ResultLog {
        &self.log
    }

    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Debug for ResultProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultProcessor")
            .field("constants", &self.constants)
            .field("tag", &self.tag)
            .field("log", &self.log)
            .finish()
    }
}

/// What a single [`ResultProcessor::process`] call did
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    pub inputs: RecordedInputs,
    pub score: i64,
    /// `false` when the score was already in the log and the write was dropped
    pub recorded: bool,
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = ["result_1", "result_2", "result_3", "combined"];
        let [r1, r2, r3] = self.inputs.values();
        let cells = [cell(r1), cell(r2), cell(r3), self.score.to_string()];
        let widths: Vec<usize> = headers
            .iter()
            .zip(cells.iter())
            .map(|(h, c)| h.len().max(c.len()))
            .collect();

        let row = |values: &[String]| {
            values
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!(" {:<w$} ", v, w = *w))
                .collect::<Vec<_>>()
                .join("|")
        };
        let header_row = row(&headers.map(String::from));
        let rule = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");

        writeln!(f, "{}", header_row.trim_end())?;
        writeln!(f, "{}", rule)?;
        write!(f, "{}", row(&cells).trim_end())
    }
}

fn cell(value: &ResultValue) -> String {
    match value {
        ResultValue::Text(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builder for [`ResultProcessor`]
pub struct ResultProcessorBuilder {
    constants: ConstantTable,
    tag: String,
    storage: Option<Arc<dyn Storage>>,
    log_path: PathBuf,
    seed: Option<u64>,
}

impl ResultProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            constants: ConstantTable::default(),
            tag: DEFAULT_TAG.to_string(),
            storage: None,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            seed: None,
        }
    }

    /// Set the test type constants
    pub fn constants(mut self, constants: ConstantTable) -> Self {
        self.constants = constants;
        self
    }

    /// Set the fixed third input
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the storage backing the log
    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Set the log document path
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Make candidate selection deterministic
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Open the log and build the processor
    pub fn build(self) -> Result<ResultProcessor> {
        if self.constants.is_empty() {
            return Err(ScorelogError::Build(
                "No test type constants configured".to_string(),
            ));
        }

        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(LocalStorage::default()));
        let log = ResultLog::open(storage, self.log_path)?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(ResultProcessor {
            constants: self.constants,
            tag: self.tag,
            log,
            rng,
        })
    }
}

impl Default for ResultProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
