//! Application state for the web layer.

use std::sync::Arc;

use crate::availability::Board;
use crate::config::WidgetSettings;
use crate::gbfs::FeedSource;
use crate::locale::Locale;

/// Shared application state.
///
/// Immutable after startup; every request renders the board afresh.
#[derive(Clone)]
pub struct AppState {
    /// Board over the live or mock feeds
    pub board: Arc<Board<FeedSource>>,

    /// Title, default language and time offset
    pub widget: Arc<WidgetSettings>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(board: Board<FeedSource>, widget: WidgetSettings) -> Self {
        Self {
            board: Arc::new(board),
            widget: Arc::new(widget),
        }
    }

    /// The language for a request: `requested` if recognised, else the default.
    pub fn locale_for(&self, requested: Option<&str>) -> Locale {
        requested
            .and_then(Locale::parse)
            .unwrap_or(self.widget.default_locale)
    }
}
