//! Output context: where output goes and how it should look.

use std::io::IsTerminal;

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// JSON only, for scripts
    Json,
    /// Stable `key=value` / space-separated text
    #[default]
    Plain,
    /// Tables and colors, only on a TTY
    Pretty,
}

impl OutputMode {
    /// Routing: `--json` wins, then `--format plain` or `TERM=dumb` force
    /// plain, then pretty on a TTY and plain elsewhere.
    pub fn resolve(json: bool, format: Option<&str>, is_tty: bool, term_is_dumb: bool) -> Self {
        if json {
            Self::Json
        } else if format == Some("plain") || term_is_dumb || !is_tty {
            Self::Plain
        } else {
            Self::Pretty
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(json: bool, format: Option<&str>, no_color: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            color: is_tty && !no_color && !no_color_env && !term_is_dumb,
            width: terminal_width(),
            mode: OutputMode::resolve(json, format, is_tty, term_is_dumb),
        }
    }
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0)
        .unwrap_or(80)
}
