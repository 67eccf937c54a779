// config.rs - Command line options shared by the front ends

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_COLS: usize = 60;
pub const DEFAULT_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub interval: Duration,   // sleep between generations
    pub seed: Option<u64>,    // None: seed from the OS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            seed: None,
        }
    }
}

pub const USAGE: &str = "\
options:
  -r <rows>      rows count (default 30)
  -c <cols>      columns count (default 60)
  -i <ms>        sleep interval between iterations in ms (default 100)
  -s <seed>      seed for the initial grid";

impl Config {
    /// Parse options, without the program name.
    ///
    /// Accepts `-r 10` and `-r=10`. Zero or negative sizes and intervals
    /// are replaced by their defaults with a warning.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let name = flag.trim_start_matches('-');
            if !matches!(name, "r" | "c" | "i" | "s") || !flag.starts_with('-') {
                return Err(ConfigError::UnknownFlag(flag));
            }

            let value = match inline.or_else(|| args.next()) {
                Some(value) => value,
                None => return Err(ConfigError::MissingValue(flag)),
            };
            let invalid = || ConfigError::InvalidValue { flag: flag.clone(), value: value.clone() };

            match name {
                "s" => config.seed = Some(value.parse().map_err(|_| invalid())?),
                _ => {
                    let number: i64 = value.parse().map_err(|_| invalid())?;
                    match (name, u64::try_from(number)) {
                        ("r", Ok(rows)) if rows > 0 => config.rows = rows as usize,
                        ("c", Ok(cols)) if cols > 0 => config.cols = cols as usize,
                        ("i", Ok(ms)) if ms > 0 => config.interval = Duration::from_millis(ms),
                        ("r", _) => log::warn!("Invalid rows {}, use default value", number),
                        ("c", _) => log::warn!("Invalid columns {}, use default value", number),
                        _ => log::warn!("Invalid interval {}, use default value", number),
                    }
                }
            }
        }
        Ok(config)
    }
}
