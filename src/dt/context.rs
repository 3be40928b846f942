use anyhow::Result;

use crate::config::Settings;
use crate::dt::defines::Definitions;

/// Immutable lookup state shared by every resolver call
#[derive(Debug, Clone, Default)]
pub struct DtContext {
    pub doc_mode: bool,
    pub defines: Definitions,
}

impl DtContext {
    pub fn new(
        doc_mode: bool,
        defines: Definitions,
    ) -> Self {
        DtContext { doc_mode, defines }
    }

    /// Loads the generated database described by `settings`.
    ///
    /// Documentation mode, an unset binary directory or a missing file all
    /// leave the definitions empty. Errors reading a file that does exist
    /// are returned.
    pub fn load(settings: &Settings) -> Result<Self> {
        if settings.doc_mode {
            tracing::debug!("Documentation mode, skipping device tree defines");
            return Ok(Self::new(true, Definitions::default()));
        }
        let Some(path) = settings.conf_file() else {
            tracing::debug!("No binary directory set, device tree defines are empty");
            return Ok(Self::default());
        };
        if !path.is_file() {
            tracing::debug!("{:?} not found, device tree defines are empty", path);
            return Ok(Self::default());
        }
        Ok(Self::new(false, Definitions::read(&path)?))
    }
}
