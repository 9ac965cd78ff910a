//! Argument-register naming: index <-> spelling at a given bitwidth.
//!
//! Ported from `reconstruct.cpp`'s `reg_to_str`/`str_to_reg`. Shared by
//! the `function` desugar pass (parameter-macro binding) and the call-site
//! marshalling algorithm (§4.7), both of which need to go from "this is
//! argument slot N" to "this is register rdi/edi/di/dil" and back.

use crate::error::ConstructError;
use crate::token::Bitwidth;

/// Sentinel `reg_index` result meaning "not one of the six argument
/// registers at any width" -- the original's `str_to_reg` returns 6 for
/// the same case.
pub const NON_ARG_REGISTER: u8 = 6;

/// Maps argument-register index `0..=5` to its spelling at `width`. Beyond
/// index 5 the System V calling convention has no register slot -- the
/// original's `reg_to_str` falls out of its `switch` with no `default`
/// case and reaches its final `throw`, which this mirrors as
/// `InvalidArgument` rather than silently wrapping or panicking.
pub fn reg_for_index(index: u8, width: Bitwidth) -> Result<&'static str, ConstructError> {
    let table: [&str; 6] = match width {
        Bitwidth::Bit8 => ["dil", "sil", "dl", "cl", "r8b", "r9b"],
        Bitwidth::Bit16 => ["di", "si", "dx", "cx", "r8w", "r9w"],
        Bitwidth::Bit32 => ["edi", "esi", "edx", "ecx", "r8d", "r9d"],
        Bitwidth::Bit64 => ["rdi", "rsi", "rdx", "rcx", "r8", "r9"],
    };
    table.get(index as usize).copied().ok_or_else(|| {
        ConstructError::InvalidArgument(format!(
            "no argument register at index {index} (bitwidth {width:?})"
        ))
    })
}

/// Maps an operand spelling to its argument-register index `0..=5` if it
/// names one of the six argument registers at any width, or
/// [`NON_ARG_REGISTER`] otherwise.
pub fn reg_index(operand: &str) -> u8 {
    match operand {
        "dil" | "di" | "edi" | "rdi" => 0,
        "sil" | "si" | "esi" | "rsi" => 1,
        "dl" | "dx" | "edx" | "rdx" => 2,
        "cl" | "cx" | "ecx" | "rcx" => 3,
        "r8b" | "r8w" | "r8d" | "r8" => 4,
        "r9b" | "r9w" | "r9d" | "r9" => 5,
        _ => NON_ARG_REGISTER,
    }
}
