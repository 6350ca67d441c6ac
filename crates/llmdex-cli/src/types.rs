use clap::ValueEnum;
use llmdex_engine::{Direction, SortKey, SortMode};
use llmdex_runtime::UiMode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum UiArg {
    Rich,
    Table,
    Auto,
}

impl From<UiArg> for UiMode {
    fn from(arg: UiArg) -> Self {
        match arg {
            UiArg::Rich => UiMode::Rich,
            UiArg::Table => UiMode::Table,
            UiArg::Auto => UiMode::Auto,
        }
    }
}

impl fmt::Display for UiArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        UiMode::from(*self).fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SortArg {
    InputCost,
    OutputCost,
    Provider,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::InputCost => SortMode::By(SortKey::InputCost, Direction::Asc),
            SortArg::OutputCost => SortMode::By(SortKey::OutputCost, Direction::Asc),
            SortArg::Provider => SortMode::By(SortKey::Provider, Direction::Asc),
        }
    }
}

impl fmt::Display for SortArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortArg::InputCost => write!(f, "input-cost"),
            SortArg::OutputCost => write!(f, "output-cost"),
            SortArg::Provider => write!(f, "provider"),
        }
    }
}
