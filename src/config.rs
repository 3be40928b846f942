use crate::constants::{BINARY_DIR_ENV, DOC_MODE_ENV, DTS_CONF_PATH};
use std::path::PathBuf;

/// Settings derived from the build environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Documentation mode: no device tree data, every lookup returns zero.
    pub doc_mode: bool,
    pub bin_dir: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let doc_mode = lookup(DOC_MODE_ENV).as_deref() == Some("1");
        let bin_dir = lookup(BINARY_DIR_ENV).map(PathBuf::from);
        Settings { doc_mode, bin_dir }
    }

    /// Path of the generated device tree database, if a binary dir is known.
    pub fn conf_file(&self) -> Option<PathBuf> {
        self.bin_dir
            .as_ref()
            .map(|dir| DTS_CONF_PATH.iter().fold(dir.clone(), |p, c| p.join(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn doc_mode_only_for_exact_one() {
        assert!(settings(&[("KCONFIG_DOC_MODE", "1")]).doc_mode);
        assert!(!settings(&[("KCONFIG_DOC_MODE", "true")]).doc_mode);
        assert!(!settings(&[("KCONFIG_DOC_MODE", "0")]).doc_mode);
        assert!(!settings(&[]).doc_mode);
    }

    #[test]
    fn conf_file_joins_generated_path() {
        let s = settings(&[("PROJECT_BINARY_DIR", "/build")]);
        assert_eq!(
            s.conf_file().unwrap(),
            Path::new("/build/include/generated/generated_dts_board.conf")
        );
        assert_eq!(settings(&[]).conf_file(), None);
    }
}
