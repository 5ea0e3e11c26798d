//! Current navigation location as seen by the shell

use serde::{Deserialize, Serialize};

/// Route that hides both the queue drawer and the side panel
pub const NOW_PLAYING: &str = "/now-playing";

/// Default location before the navigation provider reports one
pub const HOME: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Route(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    /// Exact match, as the router reports `pathname` without query or hash
    pub fn is_now_playing(&self) -> bool {
        self.0 == NOW_PLAYING
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new(HOME)
    }
}
