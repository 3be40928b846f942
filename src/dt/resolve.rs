use anyhow::{Result, anyhow};

use crate::constants::{HEX_ZERO, INT_ZERO};
use crate::dt::context::DtContext;
use crate::dt::units::UnitScale;
use crate::error::ResolveError;

/// Looks up `name` and returns it as a decimal integer, divided by `unit`.
///
/// `unit` is `k`, `m` or `g` (either case) for a right shift of 10, 20 or 30
/// bits; anything else leaves the value unscaled. Returns `"0"` in
/// documentation mode or when `name` is not defined.
pub fn int_val(
    ctx: &DtContext,
    _binding: &str,
    name: &str,
    unit: Option<&str>,
) -> Result<String> {
    match lookup_scaled(ctx, name, unit)? {
        Some(v) => Ok(v.to_string()),
        None => Ok(INT_ZERO.to_string()),
    }
}

/// Same as [`int_val`] but formats the result as lowercase `0x` hex.
/// Returns `"0x0"` in documentation mode or when `name` is not defined.
pub fn hex_val(
    ctx: &DtContext,
    _binding: &str,
    name: &str,
    unit: Option<&str>,
) -> Result<String> {
    match lookup_scaled(ctx, name, unit)? {
        Some(v) => Ok(format_hex(v)),
        None => Ok(HEX_ZERO.to_string()),
    }
}

fn lookup_scaled(
    ctx: &DtContext,
    name: &str,
    unit: Option<&str>,
) -> Result<Option<i128>> {
    if ctx.doc_mode {
        return Ok(None);
    }
    let Some(raw) = ctx.defines.get(name) else {
        tracing::trace!("{name} not in device tree defines");
        return Ok(None);
    };
    let value = parse_value(raw).map_err(|source| {
        anyhow!(ResolveError::InvalidValue {
            name: name.to_string(),
            value: raw.to_string(),
            source,
        })
    })?;
    Ok(Some(UnitScale::parse(unit).apply(value)))
}

/// Parses a stored value: `0x`/`0X` prefix means hex, otherwise decimal.
pub fn parse_value(raw: &str) -> Result<i128, std::num::ParseIntError> {
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        // from_str_radix takes a sign; hex digits must follow the prefix directly
        Some(digits) if !digits.starts_with(|c: char| c.is_ascii_hexdigit()) => {
            i128::from_str_radix("-", 16)
        }
        Some(digits) => i128::from_str_radix(digits, 16),
        None => raw.parse(),
    }
}

fn format_hex(value: i128) -> String {
    if value < 0 {
        format!("-{:#x}", value.unsigned_abs())
    } else {
        format!("{:#x}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dt::defines::Definitions;

    fn ctx(pairs: &[(&str, &str)]) -> DtContext {
        DtContext::new(false, Definitions::from_pairs(pairs.iter().copied()))
    }

    #[test]
    fn flash_size_hex_scenario() {
        let c = ctx(&[("FLASH_SIZE", "0x100000")]);
        assert_eq!(hex_val(&c, "dt_hex_val", "FLASH_SIZE", None).unwrap(), "0x100000");
        assert_eq!(hex_val(&c, "dt_hex_val", "FLASH_SIZE", Some("K")).unwrap(), "0x400");
    }

    #[test]
    fn ram_size_int_scenario() {
        let c = ctx(&[("RAM_SIZE", "65536")]);
        assert_eq!(int_val(&c, "dt_int_val", "RAM_SIZE", Some("k")).unwrap(), "64");
    }

    #[test]
    fn uppercase_prefix_and_negative_values() {
        let c = ctx(&[("A", "0XFF"), ("B", "-4096")]);
        assert_eq!(int_val(&c, "", "A", None).unwrap(), "255");
        assert_eq!(int_val(&c, "", "B", Some("k")).unwrap(), "-4");
        assert_eq!(hex_val(&c, "", "B", None).unwrap(), "-0x1000");
    }

    #[test]
    fn full_u64_range_fits() {
        let c = ctx(&[("TOP", "0xffffffffffffffff")]);
        assert_eq!(int_val(&c, "", "TOP", None).unwrap(), u64::MAX.to_string());
        assert_eq!(hex_val(&c, "", "TOP", Some("g")).unwrap(), "0x3ffffffff");
    }

    #[test]
    fn values_wider_than_i128_are_rejected() {
        let c = ctx(&[("WIDE", "0x100000000000000000000000000000000")]);
        let err = hex_val(&c, "", "WIDE", Some("g")).unwrap_err();
        assert!(err.to_string().contains("WIDE: invalid integer value"), "{err}");
    }

    #[test]
    fn malformed_value_is_an_error() {
        let c = ctx(&[
            ("BAD", "abc"),
            ("BADHEX", "0xzz"),
            ("EMPTYHEX", "0x"),
            ("NEGHEX", "0x-10"),
            ("POSHEX", "0x+10"),
        ]);
        for name in ["BAD", "BADHEX", "EMPTYHEX", "NEGHEX", "POSHEX"] {
            let err = int_val(&c, "", name, None).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ResolveError>(),
                Some(ResolveError::InvalidValue { .. })
            ));
            assert!(hex_val(&c, "", name, None).is_err());
        }
    }
}
