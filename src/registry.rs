use anyhow::{Result, anyhow};

use crate::dt::context::DtContext;
use crate::dt::resolve::{hex_val, int_val};
use crate::error::ResolveError;

/// Handler signature: context, the name the function was invoked as, and
/// the call arguments.
pub type Handler = fn(&DtContext, &str, &[&str]) -> Result<String>;

/// A preprocessor function exposed to the kconfig evaluator.
#[derive(Debug, Clone, Copy)]
pub struct KconfigFunction {
    pub name: &'static str,
    pub handler: Handler,
    pub min_args: usize,
    pub max_args: usize,
}

pub static FUNCTIONS: &[KconfigFunction] = &[
    KconfigFunction {
        name: "dt_int_val",
        handler: call_int_val,
        min_args: 1,
        max_args: 2,
    },
    KconfigFunction {
        name: "dt_hex_val",
        handler: call_hex_val,
        min_args: 1,
        max_args: 2,
    },
];

pub fn lookup(name: &str) -> Option<&'static KconfigFunction> {
    FUNCTIONS.iter().find(|f| f.name == name)
}

/// Invokes the function registered as `name` after checking its arity.
pub fn call(
    ctx: &DtContext,
    name: &str,
    args: &[&str],
) -> Result<String> {
    let func = lookup(name).ok_or_else(|| anyhow!(ResolveError::UnknownFunction(name.to_string())))?;
    if args.len() < func.min_args || args.len() > func.max_args {
        return Err(anyhow!(ResolveError::ArgumentCount {
            function: func.name.to_string(),
            got: args.len(),
            min: func.min_args,
            max: func.max_args,
        }));
    }
    (func.handler)(ctx, func.name, args)
}

// Arity is checked by `call`; handlers may still be invoked directly.
fn split_args<'a>(args: &[&'a str]) -> (&'a str, Option<&'a str>) {
    let name = args.first().copied().unwrap_or_default();
    // kconfig passes omitted trailing arguments as empty strings
    let unit = args.get(1).copied().filter(|u| !u.is_empty());
    (name, unit)
}

fn call_int_val(
    ctx: &DtContext,
    binding: &str,
    args: &[&str],
) -> Result<String> {
    let (name, unit) = split_args(args);
    int_val(ctx, binding, name, unit)
}

fn call_hex_val(
    ctx: &DtContext,
    binding: &str,
    args: &[&str],
) -> Result<String> {
    let (name, unit) = split_args(args);
    hex_val(ctx, binding, name, unit)
}
