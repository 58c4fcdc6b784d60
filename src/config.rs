use std::path::PathBuf;

/// Output file written when no path is given
pub const DEFAULT_OUTPUT: &str = "apresentacao_tributaria.html";

/// Runtime options for a report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub output: PathBuf,
    /// Try to open the written file in the default browser
    pub open_browser: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            open_browser: true,
        }
    }
}
