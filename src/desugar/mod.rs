//! The fixed-order desugar pipeline (§4.5): functions, then ifs, then
//! whiles, then funcalls, then syscalls, then macros, each run exactly
//! once. The order matters -- register macros from `apply_functions`
//! must exist before `apply_macros` runs, and argument-marshalling in
//! `apply_funcalls`/`apply_syscalls` must see already-lowered `if`/`while`
//! bodies so nested calls inside them are reached by recursion.

mod functions;
mod funcalls;
mod ifs;
mod macros;
mod syscalls;
mod whiles;

pub use functions::apply_functions;
pub use funcalls::apply_funcalls;
pub use ifs::apply_ifs;
pub use macros::apply_macros;
pub use syscalls::apply_syscalls;
pub use whiles::apply_whiles;

use crate::context::CompileContext;
use crate::error::ConstructError;
use crate::token::Token;

/// Runs all six passes over the top-level token list in the fixed order.
pub fn desugar(tokens: &mut Vec<Token>, ctx: &mut CompileContext) -> Result<(), ConstructError> {
    apply_functions(tokens, ctx)?;
    apply_ifs(tokens, ctx);
    apply_whiles(tokens, ctx);
    apply_funcalls(tokens, ctx);
    apply_syscalls(tokens, ctx);
    let mut known_macros = Vec::new();
    apply_macros(tokens, &mut known_macros);
    Ok(())
}
