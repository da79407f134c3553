use std::path::PathBuf;

/// Where the conversion input comes from. Filled in by the CLI wrapper; the
/// readers only ever look at this, never at the arguments themselves.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path of the model file to read.
    pub in_file: PathBuf,
}
