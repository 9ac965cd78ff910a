//! Call-site argument marshalling (§4.7) -- the core algorithm.
//!
//! Moves an ordered argument list into the six System V AMD64 argument
//! registers (`rdi, rsi, rdx, rcx, r8, r9`, spilling argument 7+ to the
//! stack) without ever clobbering a register whose value is still needed
//! by a later argument. Ported from `reconstruct.cpp`'s `push_args`,
//! rewritten from index-juggling C arrays into named steps with the
//! three-phase structure spec.md §4.7 documents: stack arguments, preserve
//! clobbered sources, materialize argument registers.

use crate::regs::{reg_for_index, reg_index, NON_ARG_REGISTER};
use crate::token::{Bitwidth, Token};

const ARG_REGISTERS: usize = 6;

/// Produces the `Cmd` sequence that leaves `args[i]` in argument register
/// `i` for `i < 6` (and on the stack, for a callee to find at a
/// decreasing offset, for `i >= 6`), at the given `indentation` (inherited
/// from the call site until the final indentation pass normalizes it).
pub fn marshal_args(args: &[String], width: Bitwidth, indentation: i32) -> Vec<Token> {
    let mut out = Vec::new();

    // Step 1: stack arguments, pushed last-to-first so arg 6 ends up on
    // top at the call (what the callee reads at the smallest offset).
    for i in (ARG_REGISTERS..args.len()).rev() {
        out.push(Token::cmd1("push", args[i].clone(), indentation));
    }

    let reg_args_len = args.len().min(ARG_REGISTERS);

    // first_read[r] = smallest i with reg_index(args[i]) == r, or
    // NON_ARG_REGISTER if no argument names r.
    let mut first_read = [NON_ARG_REGISTER; ARG_REGISTERS];
    for (i, arg) in args.iter().enumerate().take(reg_args_len) {
        let r = reg_index(arg);
        if r != NON_ARG_REGISTER && first_read[r as usize] == NON_ARG_REGISTER {
            first_read[r as usize] = i as u8;
        }
    }

    // Step 2: preserve registers whose value is needed after the point
    // it would otherwise be overwritten, in decreasing order of
    // first_read[r] (so the pops in step 3 come off in increasing
    // target-index order).
    let mut needs_preserve: Vec<u8> = (0..ARG_REGISTERS as u8)
        .filter(|&r| {
            let fr = first_read[r as usize];
            fr != NON_ARG_REGISTER && (fr as u8) > r
        })
        .collect();
    needs_preserve.sort_by_key(|&r| std::cmp::Reverse(first_read[r as usize]));
    for r in &needs_preserve {
        // Unwrap-free by construction: r is always < ARG_REGISTERS.
        if let Ok(spelling) = reg_for_index(*r, width) {
            out.push(Token::cmd1("push", spelling, indentation));
        }
    }

    // Step 3: materialize each argument register in order, tracking where
    // each register's original value currently lives (its own slot, a
    // lower-indexed register it was moved into, or the stack).
    // `current_val_place[r] == ARG_REGISTERS` means "on the stack".
    let mut current_val_place = [0u8, 1, 2, 3, 4, 5];
    for r in &needs_preserve {
        current_val_place[*r as usize] = ARG_REGISTERS as u8;
    }

    for (i, arg) in args.iter().enumerate().take(reg_args_len) {
        let i = i as u8;
        let wanted = reg_index(arg);
        if wanted == NON_ARG_REGISTER {
            if let Ok(dest) = reg_for_index(i, width) {
                out.push(Token::cmd2("mov", dest, arg.clone(), indentation));
            }
            continue;
        }
        let place = current_val_place[wanted as usize];
        if place == ARG_REGISTERS as u8 {
            if let Ok(dest) = reg_for_index(i, width) {
                out.push(Token::cmd1("pop", dest, indentation));
            }
            current_val_place[wanted as usize] = i;
        } else if place == i {
            // Value already in place: emit nothing.
        } else {
            if let (Ok(dest), Ok(src)) = (reg_for_index(i, width), reg_for_index(place, width)) {
                out.push(Token::cmd2("mov", dest, src, indentation));
            }
            current_val_place[wanted as usize] = current_val_place[wanted as usize].min(i);
        }
    }

    out
}
