//! Configuration constants for depgraph
//!
//! This module contains the fixed values used throughout the application.

use std::time::Duration;

/// Name of the per-module dependency descriptor
pub const DESCRIPTOR_FILE_NAME: &str = "depgraph.toml";

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while scanning for descriptors
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Output formatting configuration
pub mod output {
    /// Default graph format when not specified
    pub const DEFAULT_FORMAT: &str = "dot";

    /// Variable name used when JSON output is wrapped as a script
    pub const SCRIPT_VARIABLE: &str = "graph";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 4);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "dot");
        assert_eq!(DESCRIPTOR_FILE_NAME, "depgraph.toml");
    }
}
