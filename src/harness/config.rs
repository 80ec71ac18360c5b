use std::path::PathBuf;

use crate::components::table::strategy::Strategy;
use crate::components::table::DEFAULT_CAPACITY;
use crate::{Error, Result};

/// Input files read when none are given.
pub const DEFAULT_INPUTS: [&str; 4] = ["in150.txt", "in160.txt", "in170.txt", "in180.txt"];

/// Strategies run when none are given.
pub const DEFAULT_STRATEGIES: [Strategy; 2] = [Strategy::Linear, Strategy::Quadratic];

pub const USAGE: &str = "\
Usage: probestore [OPTIONS] [FILES]...

Feeds the integer keys of each input file in file, ascending and descending order
into a fresh table per strategy and writes collision and table reports.

Options:
  -s, --size <N>          Table capacity [default: 191]
  -o, --out <DIR>         Directory for the reports [default: .]
  -p, --strategy <NAME>   linear, quadratic, quadratic_primary or double. Can be repeated
                          [default: linear, quadratic]
  -k, --keep-going        Don't stop a file at the first value mismatch
  -h, --help              Print this help";

/// Settings of a harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    pub table_size: usize,
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub strategies: Vec<Strategy>,
    /// Stop processing an input file at the first key whose value can't be read back.
    pub abort_on_mismatch: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_CAPACITY,
            inputs: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            output_dir: PathBuf::from("."),
            strategies: DEFAULT_STRATEGIES.to_vec(),
            abort_on_mismatch: true,
        }
    }
}

impl HarnessConfig {
    /// Builds a config from command line arguments, program name excluded. Unset values keep their defaults.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut inputs: Vec<PathBuf> = Vec::new();
        let mut strategies: Vec<Strategy> = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-s" | "--size" => {
                    let value = value_of(&arg, args.next())?;
                    config.table_size = value
                        .parse()
                        .map_err(|_| Error::InvalidArgument(format!("{arg} {value}")))?;
                    if config.table_size == 0 {
                        return Err(Error::InvalidCapacity);
                    }
                }
                "-o" | "--out" => config.output_dir = PathBuf::from(value_of(&arg, args.next())?),
                "-p" | "--strategy" => strategies.push(value_of(&arg, args.next())?.parse::<Strategy>()?),
                "-k" | "--keep-going" => config.abort_on_mismatch = false,
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(Error::InvalidArgument(arg.clone()))
                }
                _ => inputs.push(PathBuf::from(&arg)),
            }
        }

        if !inputs.is_empty() {
            config.inputs = inputs;
        }
        if !strategies.is_empty() {
            config.strategies = strategies;
        }

        Ok(config)
    }
}

#[inline]
fn value_of(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::InvalidArgument(format!("{flag} needs a value")))
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.table_size, 191);
        assert_eq!(config.inputs.len(), 4);
        assert_eq!(config.strategies, vec![Strategy::Linear, Strategy::Quadratic]);
        assert!(config.abort_on_mismatch);
    }

    #[test]
    fn test_parse() {
        let config =
            HarnessConfig::from_args(args("--size 11 -p double -p linear -o reports a.txt -k b.txt"))
                .unwrap();
        assert_eq!(config.table_size, 11);
        assert_eq!(config.strategies, vec![Strategy::DoubleHashing, Strategy::Linear]);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.inputs, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert!(!config.abort_on_mismatch);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            HarnessConfig::from_args(args("--size 0")),
            Err(Error::InvalidCapacity)
        );
        assert!(HarnessConfig::from_args(args("--size ten")).is_err());
        assert!(HarnessConfig::from_args(args("--size")).is_err());
        assert_eq!(
            HarnessConfig::from_args(args("-p cuckoo")),
            Err(Error::UnknownStrategy("cuckoo".to_string()))
        );
        assert_eq!(
            HarnessConfig::from_args(args("--verbose")),
            Err(Error::InvalidArgument("--verbose".to_string()))
        );
    }
}
