use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::todo::VisibilityFilter;

/// Terminal to-do list with a single-store, reducer-driven UI.
#[derive(Debug, Parser)]
#[command(name = "tuido", version, about)]
pub struct Cli {
    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Visibility filter to open with (overrides the config file).
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for VisibilityFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => VisibilityFilter::All,
            FilterArg::Active => VisibilityFilter::Active,
            FilterArg::Completed => VisibilityFilter::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_parses_with_defaults() {
        let cli = Cli::parse_from(["tuido"]);
        assert!(cli.config.is_none());
        assert!(cli.filter.is_none());
    }

    #[test]
    fn filter_arg_maps_to_visibility_filter() {
        let cli = Cli::parse_from(["tuido", "--filter", "active"]);
        assert_eq!(cli.filter, Some(FilterArg::Active));
        assert_eq!(
            VisibilityFilter::from(FilterArg::Active),
            VisibilityFilter::Active
        );
    }
}
