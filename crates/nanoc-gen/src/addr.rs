//! `gen_addr`/`load`/`store`: the three primitives every memory access
//! goes through.

use nanoc_par::ast::{Node, NodeKind};
use nanoc_types::Type;

use crate::emitter::Emitter;
use crate::error::GenError;

/// Computes an lvalue's address into `rax`. `Var` resolves to either a
/// frame-relative `lea` (locals) or an `[rip]`-relative `lea` (globals);
/// `Deref` just evaluates its operand, whose value already is the
/// address. Anything else reaching here (e.g. `&(1 + 2)`) is not an
/// lvalue.
pub(crate) fn gen_addr(node: &Node, emitter: &mut Emitter) {
    match &node.kind {
        NodeKind::Var(obj) => {
            let o = obj.borrow();
            if o.is_local {
                emitter.emit(format!("  lea rax, [rbp{:+}]", o.offset));
            } else {
                let name = emitter.interner.resolve(o.name);
                emitter.emit(format!("  lea rax, {name}[rip]"));
            }
        }
        NodeKind::Deref(inner) => crate::expr::gen_expr(inner, emitter),
        _ => emitter.handler.report(&GenError::NotAnLvalue(node.span)),
    }
}

/// Loads through the address currently in `rax`. Arrays decay to their
/// own address (a no-op here, since `gen_addr` already left it in
/// `rax`); `char` loads with sign extension, everything else is a plain
/// 8-byte load — `int` is 8 bytes wide throughout this compiler, so
/// there is no narrower-than-pointer integer load to worry about.
pub(crate) fn load(ty: &Type, emitter: &mut Emitter) {
    if ty.is_array() {
        return;
    }
    if ty.size() == 1 {
        emitter.emit("  movsx rax, BYTE PTR [rax]");
    } else {
        emitter.emit("  mov rax, [rax]");
    }
}

/// Stores `rax` through the address on top of the stack (pushed by the
/// caller before evaluating the right-hand side).
pub(crate) fn store(ty: &Type, emitter: &mut Emitter) {
    emitter.pop("rdi");
    if ty.size() == 1 {
        emitter.emit("  mov [rdi], al");
    } else {
        emitter.emit("  mov [rdi], rax");
    }
}
