use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kconfig-dt")]
#[command(
    about = "Evaluate device tree kconfig functions (dt_int_val, dt_hex_val) against \
             a build's generated_dts_board.conf."
)]
pub struct Cli {
    /// Function to evaluate, e.g. dt_hex_val.
    #[arg(required_unless_present = "list")]
    pub function: Option<String>,

    /// Arguments passed to the function: NAME [UNIT].
    pub args: Vec<String>,

    /// Build output directory; overrides PROJECT_BINARY_DIR.
    #[arg(short = 'b', long = "bin-dir")]
    pub bin_dir: Option<PathBuf>,

    /// Force documentation mode; every lookup returns zero.
    #[arg(short = 'd', long = "doc-mode")]
    pub doc_mode: bool,

    /// List registered functions with their argument bounds.
    #[arg(short = 'l', long = "list", conflicts_with = "function")]
    pub list: bool,
}
