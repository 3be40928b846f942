#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

/// Builds a fake build output directory:
/// root/
///   include/generated/generated_dts_board.conf
pub fn build_dir(conf: &str) -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("include")
        .child("generated")
        .child("generated_dts_board.conf")
        .write_str(conf)
        .unwrap();
    td
}

pub const BOARD_CONF: &str = "\
DT_FLASH_BASE_ADDRESS=0x8000000
DT_FLASH_SIZE=0x100000
DT_SRAM_SIZE=65536
DT_UART_0_BAUD_RATE = 115200
DT_UART_0_LABEL=\"UART_0\"
";
