// Centralized environment names, paths & default values
pub const DOC_MODE_ENV: &str = "KCONFIG_DOC_MODE";
pub const BINARY_DIR_ENV: &str = "PROJECT_BINARY_DIR";

/// Location of the generated database, relative to the binary directory.
pub const DTS_CONF_PATH: [&str; 3] = ["include", "generated", "generated_dts_board.conf"];

pub const INT_ZERO: &str = "0";
pub const HEX_ZERO: &str = "0x0";
