//! Reporting harness. Feeds integer keys in three orders into a table and writes a collision report and a table dump
//! report per input file and strategy. Only talks to tables through [`ProbingTable`].

pub mod config;

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::components::table::strategy::Strategy;
use crate::debug::debug;
use crate::harness::config::HarnessConfig;
use crate::traits::probing_table::ProbingTable;
use crate::{Error, Result};

/// Order the keys of an input get fed in. Phases always run in the order of [`Phase::ALL`] on the same table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Order of the input file.
    Random,
    Ascending,
    Descending,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Random, Phase::Ascending, Phase::Descending];

    pub fn title(self) -> &'static str {
        match self {
            Phase::Random => "Random Order",
            Phase::Ascending => "Ascending Order",
            Phase::Descending => "Descending Order",
        }
    }

    /// Brings `keys` into the order of this phase.
    pub fn arrange(self, keys: &mut [i32]) {
        match self {
            Phase::Random => {}
            Phase::Ascending => keys.sort_unstable(),
            Phase::Descending => keys.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }
}

/// What happened to a single key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub key: i32,
    pub value: i32,
    pub retrieved: Option<i32>,
    /// Collisions caused by the `put` and the `get` of this key.
    pub collisions: usize,
}

impl StepOutcome {
    #[inline]
    pub fn matches(&self) -> bool {
        self.retrieved == Some(self.value)
    }
}

impl Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {} -> ", self.key, self.value)?;
        match self.retrieved {
            Some(r) => write!(f, "{r}")?,
            None => write!(f, "null")?,
        }
        write!(f, ", collisions {}", self.collisions)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhaseSummary {
    pub phase: Phase,
    pub keys: usize,
    /// Collisions within this phase.
    pub collisions: usize,
    /// Value of the table's collision counter after this phase.
    pub total_collisions: usize,
    pub mismatches: usize,
}

/// Result of running one input file through one strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSummary {
    pub input: PathBuf,
    pub strategy: Strategy,
    pub collisions_report: PathBuf,
    pub tables_report: PathBuf,
    /// Tokens of the input that aren't integers.
    pub skipped: Vec<String>,
    pub phases: Vec<PhaseSummary>,
}

/// Value stored for a key.
#[inline]
pub fn derive_value(key: i32) -> i32 {
    key.wrapping_mul(2)
}

/// Splits `text` on whitespace into integer keys. Returns the keys and the tokens that failed to parse.
pub fn parse_keys(text: &str) -> (Vec<i32>, Vec<&str>) {
    let mut keys = Vec::new();
    let mut skipped = Vec::new();

    for token in text.split_whitespace() {
        match token.parse() {
            Ok(key) => keys.push(key),
            Err(_) => skipped.push(token),
        }
    }

    (keys, skipped)
}

/// Name prefix for the reports of an input file: `in150.txt` becomes `out150`.
pub fn output_prefix(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|i| i.to_string_lossy())
        .unwrap_or_default();
    let stem = stem.strip_prefix("in").unwrap_or(&stem);
    format!("out{stem}")
}

/// Paths of the collision and the table report for `input` and `strategy`.
pub fn report_paths(output_dir: &Path, input: &Path, strategy: Strategy) -> (PathBuf, PathBuf) {
    let prefix = output_prefix(input);
    let tag = strategy.tag();
    (
        output_dir.join(format!("{prefix}_collisions_{tag}.txt")),
        output_dir.join(format!("{prefix}_tables_{tag}.txt")),
    )
}

/// Puts `key` and reads it back, writing one report line to `out`. A value that can't be read back is reported too;
/// with `abort_on_mismatch` it's also returned as error.
pub fn test_key<W: Write>(
    table: &mut dyn ProbingTable<i32, i32>,
    key: i32,
    out: &mut W,
    abort_on_mismatch: bool,
) -> Result<StepOutcome> {
    let before = table.collisions();
    let value = derive_value(key);

    let put = table.put(key, value);
    let retrieved = table.get(&key).copied();

    let outcome = StepOutcome {
        key,
        value,
        retrieved,
        collisions: table.collisions() - before,
    };
    writeln!(out, "{outcome}")?;

    if !outcome.matches() {
        let err = match put {
            Err(err) => err,
            Ok(_) => Error::ValueMismatch {
                key: key.to_string(),
                expected: value.to_string(),
                retrieved: retrieved.map(|i| i.to_string()),
            },
        };
        writeln!(out, "{err}\n")?;

        if abort_on_mismatch {
            return Err(err);
        }
    }

    Ok(outcome)
}

/// Runs one phase over `keys`. Writes the per key lines and the collision total to `collisions_out` and the table
/// dump to `tables_out`.
pub fn run_phase<W1: Write, W2: Write>(
    table: &mut dyn ProbingTable<i32, i32>,
    phase: Phase,
    keys: &[i32],
    collisions_out: &mut W1,
    tables_out: &mut W2,
    abort_on_mismatch: bool,
) -> Result<PhaseSummary> {
    debug!("{} probing: {} with {} keys", table.name(), phase.title(), keys.len());

    writeln!(collisions_out, "*** {} Start ***\n", phase.title())?;

    let before = table.collisions();
    let mut mismatches = 0;
    for key in keys {
        let outcome = test_key(table, *key, collisions_out, abort_on_mismatch)?;
        if !outcome.matches() {
            mismatches += 1;
        }
    }

    writeln!(collisions_out, "\n{} {} collisions", table.name(), table.collisions())?;
    write!(tables_out, "{}", table.dump())?;
    writeln!(collisions_out, "\n*** End ***\n")?;

    Ok(PhaseSummary {
        phase,
        keys: keys.len(),
        collisions: table.collisions() - before,
        total_collisions: table.collisions(),
        mismatches,
    })
}

/// Runs all phases over the same table.
pub fn run_phases<W1: Write, W2: Write>(
    table: &mut dyn ProbingTable<i32, i32>,
    mut keys: Vec<i32>,
    collisions_out: &mut W1,
    tables_out: &mut W2,
    abort_on_mismatch: bool,
) -> Result<Vec<PhaseSummary>> {
    let mut phases = Vec::with_capacity(Phase::ALL.len());
    for phase in Phase::ALL {
        phase.arrange(&mut keys);
        phases.push(run_phase(
            table,
            phase,
            &keys,
            collisions_out,
            tables_out,
            abort_on_mismatch,
        )?);
    }
    Ok(phases)
}

/// Runs `input` through a fresh table of `strategy` and writes both reports into the configured output directory.
pub fn run_file(config: &HarnessConfig, input: &Path, strategy: Strategy) -> Result<FileSummary> {
    let text = fs::read_to_string(input)?;
    let (keys, skipped) = parse_keys(&text);
    let skipped = skipped.into_iter().map(|i| i.to_string()).collect();

    let mut table = strategy.build::<i32, i32>(config.table_size)?;

    let (collisions_report, tables_report) = report_paths(&config.output_dir, input, strategy);
    let mut collisions_out = BufWriter::new(File::create(&collisions_report)?);
    let mut tables_out = BufWriter::new(File::create(&tables_report)?);

    let phases = run_phases(
        table.as_mut(),
        keys,
        &mut collisions_out,
        &mut tables_out,
        config.abort_on_mismatch,
    );

    collisions_out.flush()?;
    tables_out.flush()?;

    Ok(FileSummary {
        input: input.to_path_buf(),
        strategy,
        collisions_report,
        tables_report,
        skipped,
        phases: phases?,
    })
}

/// Runs every configured input through every configured strategy. A failing input doesn't stop the others.
pub fn run(config: &HarnessConfig) -> Vec<(PathBuf, Strategy, Result<FileSummary>)> {
    let mut results = Vec::with_capacity(config.inputs.len() * config.strategies.len());

    for input in &config.inputs {
        for strategy in &config.strategies {
            let res = run_file(config, input, *strategy);
            results.push((input.clone(), *strategy, res));
        }
    }

    results
}
