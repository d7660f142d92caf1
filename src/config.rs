//! Render configuration resolved once from the global CLI flags.
use crate::cli::GlobalArgs;
use crate::sort::SortMode;
use clap::ValueEnum;

/// Environment variable that enables debug logging like `--debug`.
pub const DEBUG_ENV: &str = "ACTDOCS_DEBUG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub omit: bool,
    pub sort: SortMode,
}

impl RenderConfig {
    pub fn from_args(args: &GlobalArgs) -> Self {
        Self {
            format: args.format,
            omit: args.omit,
            sort: SortMode::from_flags(args.sort, args.sort_by_name, args.sort_by_required),
        }
    }
}

/// Debug logging is on when the flag is set or the environment asks for it.
pub fn debug_enabled(flag: bool) -> bool {
    flag || env_flag(std::env::var(DEBUG_ENV).ok().as_deref())
}

fn env_flag(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_flag_accepts_truthy_values() {
        for value in ["true", "1", "yes", "TRUE", " yes "] {
            assert!(env_flag(Some(value)), "{value:?} should enable debug");
        }
        for value in ["", "0", "false", "no", "on"] {
            assert!(!env_flag(Some(value)), "{value:?} should not enable debug");
        }
        assert!(!env_flag(None));
    }

    #[test]
    fn flag_always_enables_debug() {
        assert!(debug_enabled(true));
    }

    #[test]
    fn config_from_global_args() {
        let args = GlobalArgs {
            format: OutputFormat::Json,
            omit: true,
            sort: false,
            sort_by_name: true,
            sort_by_required: true,
            debug: false,
        };
        let config = RenderConfig::from_args(&args);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.omit);
        assert_eq!(config.sort, SortMode::ByName);
    }
}
