//! Tracing configuration for the `scopewalk` binary.
//!
//! Supports three output formats controlled by `SCOPEWALK_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ```bash
//! # Follow scope creation and identifier collection
//! SCOPEWALK_LOG=debug SCOPEWALK_LOG_FORMAT=tree scopewalk ast.json
//!
//! # Every node expansion
//! SCOPEWALK_LOG="scopewalk_tree=trace" scopewalk --tree ast.json
//! ```
//!
//! The subscriber is only initialised when `SCOPEWALK_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `SCOPEWALK_LOG_FORMAT` value; unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("SCOPEWALK_LOG_FORMAT").unwrap_or_default())
    }
}

/// Directives from `SCOPEWALK_LOG` win over `RUST_LOG`; `None` when neither
/// is set, which leaves logging off.
fn build_filter(own: Option<String>, rust_log: Option<String>) -> Option<EnvFilter> {
    own.or(rust_log)
        .map(|directives| EnvFilter::builder().parse_lossy(directives))
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `SCOPEWALK_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with reports on stdout.
pub fn init_tracing() {
    let Some(filter) = build_filter(
        std::env::var("SCOPEWALK_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
    ) else {
        return;
    };

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
