//! Command-line configuration shared by both shells.

use clap::{Args, ValueEnum};

use storefront_core::OutputFormat;
use storefront_observability::{LogFormat, LogSettings};

/// Log levels
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// Flags accepted by every shell binary.
#[derive(Debug, Clone, Args)]
pub struct ShellArgs {
    /// Diagnostics level written to stderr (RUST_LOG overrides it)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Diagnostics line format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    /// How listings and documents are printed
    #[arg(long, value_enum, default_value_t = OutputArg::Table)]
    pub output: OutputArg,
}

impl ShellArgs {
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            directive: self.log_level.to_filter_directive().to_string(),
            format: match self.log_format {
                LogFormatArg::Text => LogFormat::Text,
                LogFormatArg::Json => LogFormat::Json,
            },
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        match self.output {
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        shell: ShellArgs,
    }

    #[test]
    fn defaults_are_warn_text_table() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.shell.log_settings(), LogSettings::default());
        assert_eq!(cli.shell.output_format(), OutputFormat::Table);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = TestCli::try_parse_from([
            "test",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--output",
            "json",
        ])
        .unwrap();
        let settings = cli.shell.log_settings();
        assert_eq!(settings.directive, "debug");
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(cli.shell.output_format(), OutputFormat::Json);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(TestCli::try_parse_from(["test", "--log-level", "loud"]).is_err());
    }
}
