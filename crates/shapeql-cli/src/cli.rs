use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(name = "shapeql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Logging level. Takes precedence over the `LOG_LEVEL` \
             environment variable.",
        long,
        value_enum,
    )]
    pub log_level: Option<LogLevel>,

    #[arg(
        help="Enable verbose output (same as `--log-level debug`).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Resolve the logging level from `--verbose`, then `--log-level`, then
    /// the `LOG_LEVEL` value in `env_level`. An unrecognized `LOG_LEVEL`
    /// falls back to `default` and yields a warning to report once logging
    /// is up.
    pub(crate) fn resolve_log_level(
        &self,
        env_level: Option<&str>,
        default: tracing::Level,
    ) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }
        if let Some(level) = self.log_level {
            return (level.into(), None);
        }
        match env_level.map(str::trim) {
            None | Some("") => (default, None),
            Some(value) => match LogLevel::from_env_value(value) {
                Some(level) => (level.into(), None),
                None => (default, Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{value}`"
                ))),
            },
        }
    }

    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub(crate) enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl LogLevel {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" | "verbose" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}
impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use tracing::Level;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shapeql").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn verbose_beats_log_level_and_env() {
        let cli = parse(&["-v", "--log-level", "error"]);
        assert_eq!(cli.resolve_log_level(Some("trace"), Level::INFO), (Level::DEBUG, None));
    }

    #[test]
    fn log_level_flag_beats_env() {
        let cli = parse(&["--log-level", "warn"]);
        assert_eq!(cli.resolve_log_level(Some("trace"), Level::INFO), (Level::WARN, None));
    }

    #[test]
    fn env_level_is_case_insensitive() {
        let cli = parse(&[]);
        assert_eq!(cli.resolve_log_level(Some(" Trace "), Level::INFO), (Level::TRACE, None));
        assert_eq!(cli.resolve_log_level(Some("VERBOSE"), Level::INFO), (Level::DEBUG, None));
        assert_eq!(cli.resolve_log_level(None, Level::INFO), (Level::INFO, None));
    }

    #[test]
    fn invalid_env_level_warns_and_falls_back() {
        let cli = parse(&[]);
        let (level, warning) = cli.resolve_log_level(Some("loud"), Level::INFO);
        assert_eq!(level, Level::INFO);
        assert!(warning.unwrap().contains("`loud`"));
    }

    #[test]
    fn unknown_log_level_flag_is_rejected() {
        let args = ["shapeql", "--log-level", "loud"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
