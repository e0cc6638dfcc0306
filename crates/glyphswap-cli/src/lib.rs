// glyphswap-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use log::{Level, LevelFilter, Log, Metadata, Record};

use glyphswap_core::SwapConfig;

/// Environment variable naming the data directory.
pub const DATA_PATH_ENV: &str = "GLYPHSWAP_DATA_PATH";

/// Data directory searched under the home directory.
const HOME_DATA_DIR: &str = ".glyphswap/data";

// ---------------------------------------------------------------------------
// Data directory
// ---------------------------------------------------------------------------

/// Find the directory holding the JSON data documents.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `GLYPHSWAP_DATA_PATH` environment variable
/// 3. `~/.glyphswap/data`
/// 4. `./data`
pub fn find_data_dir(data_path: Option<&str>) -> Result<PathBuf, String> {
    let search_paths = build_search_paths(data_path);

    if let Some(dir) = search_paths.iter().find(|dir| dir.is_dir()) {
        return Ok(dir.clone());
    }

    Err(format!(
        "could not find a data directory in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Like [`find_data_dir`], but fall back to `./data` with a warning.
///
/// Encoders without data still work when the directory is missing; the
/// others fail to load and refuse every word.
pub fn data_dir_or_default(data_path: Option<&str>) -> PathBuf {
    match find_data_dir(data_path) {
        Ok(dir) => {
            log::debug!("using data directory {}", dir.display());
            dir
        }
        Err(e) => {
            log::warn!("{e}");
            PathBuf::from("data")
        }
    }
}

/// Build the list of directories to search for data documents.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(HOME_DATA_DIR));
    }

    paths.push(PathBuf::from("data"));

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Pull a `--long=VALUE`, `--long VALUE` or `-s VALUE` option out of the
/// argument list.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn parse_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || (!short.is_empty() && arg == short) {
            match args.get(i + 1) {
                Some(next) => {
                    value = Some(next.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--data-path=PATH` or `-d PATH` argument.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "--data-path", "-d")
}

/// Load the swap configuration from a JSON file, or the defaults.
pub fn load_config(path: Option<&str>) -> Result<SwapConfig, String> {
    let Some(path) = path else {
        return Ok(SwapConfig::default());
    };
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    SwapConfig::from_json_str(&text).map_err(|e| format!("{path}: {e}"))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

// ---------------------------------------------------------------------------
// Logging and runtime
// ---------------------------------------------------------------------------

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "error",
            Level::Warn => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        };
        eprintln!("{level}: {}", record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level selected by `-v`/`--verbose` and `-q`/`--quiet`.
fn level_from_args(args: &[String]) -> LevelFilter {
    if args.iter().any(|a| a == "-q" || a == "--quiet") {
        LevelFilter::Error
    } else if args.iter().any(|a| a == "-v" || a == "--verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the stderr logger and strip the verbosity flags.
pub fn init_logging(args: &[String]) -> Vec<String> {
    let level = level_from_args(args);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    args.iter()
        .filter(|a| !matches!(a.as_str(), "-v" | "--verbose" | "-q" | "--quiet"))
        .cloned()
        .collect()
}

/// A current-thread tokio runtime.
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap_or_else(|e| fatal(&format!("failed to start runtime: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn option_forms() {
        let (value, rest) = parse_option(&args(&["-d", "/x", "word"]), "--data-path", "-d");
        assert_eq!(value.as_deref(), Some("/x"));
        assert_eq!(rest, args(&["word"]));

        let (value, rest) = parse_data_path(&args(&["--data-path=/y", "a", "b"]));
        assert_eq!(value.as_deref(), Some("/y"));
        assert_eq!(rest, args(&["a", "b"]));

        let (value, rest) = parse_option(&args(&["--seed", "7"]), "--seed", "");
        assert_eq!(value.as_deref(), Some("7"));
        assert!(rest.is_empty());
    }

    #[test]
    fn missing_option() {
        let (value, rest) = parse_data_path(&args(&["hello"]));
        assert_eq!(value, None);
        assert_eq!(rest, args(&["hello"]));
    }

    #[test]
    fn explicit_path_searched_first() {
        let paths = build_search_paths(Some("/opt/glyphs"));
        assert_eq!(paths[0], PathBuf::from("/opt/glyphs"));
        assert_eq!(paths.last(), Some(&PathBuf::from("data")));
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(level_from_args(&args(&["-v"])), LevelFilter::Debug);
        assert_eq!(level_from_args(&args(&["--quiet", "-v"])), LevelFilter::Error);
        assert_eq!(level_from_args(&args(&[])), LevelFilter::Warn);
    }

    #[test]
    fn default_config_without_file() {
        assert_eq!(load_config(None), Ok(SwapConfig::default()));
    }

    #[test]
    fn unreadable_config() {
        let err = load_config(Some("/nonexistent/glyphswap.json")).unwrap_err();
        assert!(err.starts_with("failed to read /nonexistent/glyphswap.json"));
    }
}
