use std::io::{BufRead, Write};
use std::str::FromStr;

use lambind::{normalize_source, LocallyNameless, ScopeIndexed, Strategy};
use tracing_subscriber::EnvFilter;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StrategyKind {
    LocallyNameless,
    ScopeIndexed,
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        if s == LocallyNameless::NAME {
            return Ok(StrategyKind::LocallyNameless);
        }
        if s == ScopeIndexed::NAME {
            return Ok(StrategyKind::ScopeIndexed);
        }
        Err(format!("unknown strategy `{s}` (expected `ln` or `scoped`)"))
    }
}


#[derive(Debug)]
struct Config {
    strategy: StrategyKind,
    fuel:     u64,
}

#[derive(Debug, thiserror::Error)]
enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: String, message: String },

    #[error("missing value for {0}")]
    Missing(String),

    #[error("unknown argument `{0}`")]
    Unknown(String),
}

impl Config {
    const DEFAULT_FUEL: u64 = 100_000;

    /// flags win over environment variables, which win over defaults.
    fn load<I: Iterator<Item = String>>(mut args: I) -> Result<Config, ConfigError> {
        let mut config = Config {
            strategy: env_var("LAMBIND_STRATEGY")?.unwrap_or(StrategyKind::LocallyNameless),
            fuel:     env_var("LAMBIND_FUEL")?.unwrap_or(Self::DEFAULT_FUEL),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--strategy" => {
                    let value = args.next().ok_or_else(|| ConfigError::Missing(arg.clone()))?;
                    config.strategy = parse_value(&arg, &value)?;
                }
                "--fuel" => {
                    let value = args.next().ok_or_else(|| ConfigError::Missing(arg.clone()))?;
                    config.fuel = parse_value(&arg, &value)?;
                }
                _ => return Err(ConfigError::Unknown(arg)),
            }
        }

        return Ok(config);
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where T: FromStr, T::Err: ToString {
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// unset and empty variables are `None`.
fn env_var<T>(key: &str) -> Result<Option<T>, ConfigError>
where T: FromStr, T::Err: ToString {
    use std::env::VarError;
    match std::env::var(key) {
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::Invalid {
            key: key.to_string(),
            message: "not unicode".to_string(),
        }),
        Ok(v) if v.is_empty() => Ok(None),
        Ok(v) => parse_value(key, &v).map(Some),
    }
}


fn run<S: Strategy>(config: &Config) -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let source = line.trim();
        if source.is_empty() || source.starts_with("--") {
            continue;
        }

        match normalize_source::<S>(source, config.fuel) {
            Ok(result) => writeln!(stdout, "{result}")?,
            Err(e) => {
                tracing::debug!(source, error = %e, "normalization failed");
                writeln!(stdout, "error: {e}")?;
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    tracing::info!(?config, "starting");

    let result = match config.strategy {
        StrategyKind::LocallyNameless => run::<LocallyNameless>(&config),
        StrategyKind::ScopeIndexed    => run::<ScopeIndexed>(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
