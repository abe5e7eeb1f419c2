//! Expression codegen: a stack-machine tree walk. `rax` always holds
//! the value of the expression just evaluated; binary operators
//! evaluate right-to-left, stashing the right operand on the stack
//! while the left is computed, matching `original_source/codegen.c`'s
//! `gen_expr` exactly.

use nanoc_par::ast::{Node, NodeKind};
use nanoc_util::Symbol;

use crate::addr::{gen_addr, load, store};
use crate::emitter::Emitter;
use crate::stmt::gen_stmt;

const ARG_REGS: [&str; 6] = ["rdi", "rsi", "rdx", "rcx", "r8", "r9"];

pub(crate) fn gen_expr(node: &Node, emitter: &mut Emitter) {
    match &node.kind {
        NodeKind::Num(v) => emitter.emit(format!("  mov rax, {v}")),

        NodeKind::Neg(operand) => {
            gen_expr(operand, emitter);
            emitter.emit("  neg rax");
        }

        NodeKind::Var(_) => {
            gen_addr(node, emitter);
            load(node.ty.as_ref().expect("typed by add_type"), emitter);
        }

        NodeKind::Deref(inner) => {
            gen_expr(inner, emitter);
            load(node.ty.as_ref().expect("typed by add_type"), emitter);
        }

        NodeKind::Addr(inner) => gen_addr(inner, emitter),

        NodeKind::Assign(lhs, rhs) => {
            gen_addr(lhs, emitter);
            emitter.push();
            gen_expr(rhs, emitter);
            store(node.ty.as_ref().expect("typed by add_type"), emitter);
        }

        NodeKind::Add(l, r) => binop(l, r, "add", emitter),
        NodeKind::Sub(l, r) => binop(l, r, "sub", emitter),
        NodeKind::Mul(l, r) => binop(l, r, "imul", emitter),

        NodeKind::Div(l, r) => {
            gen_expr(r, emitter);
            emitter.push();
            gen_expr(l, emitter);
            emitter.pop("rdi");
            emitter.emit("  cqo");
            emitter.emit("  idiv rdi");
        }

        NodeKind::Eq(l, r) => cmp(l, r, "sete", emitter),
        NodeKind::Ne(l, r) => cmp(l, r, "setne", emitter),
        NodeKind::Lt(l, r) => cmp(l, r, "setl", emitter),
        NodeKind::Le(l, r) => cmp(l, r, "setle", emitter),

        NodeKind::Funcall { name, args } => gen_funcall(*name, args, emitter),

        NodeKind::StmtExpr(stmts) => {
            for s in stmts {
                gen_stmt(s, emitter);
            }
        }

        NodeKind::ExprStmt(inner) => gen_expr(inner, emitter),

        NodeKind::If { .. }
        | NodeKind::For { .. }
        | NodeKind::Block(_)
        | NodeKind::Return(_) => {
            unreachable!("gen_expr called on a statement-only node")
        }
    }
}

fn binop(l: &Node, r: &Node, mnemonic: &str, emitter: &mut Emitter) {
    gen_expr(r, emitter);
    emitter.push();
    gen_expr(l, emitter);
    emitter.pop("rdi");
    emitter.emit(format!("  {mnemonic} rax, rdi"));
}

fn cmp(l: &Node, r: &Node, setcc: &str, emitter: &mut Emitter) {
    gen_expr(r, emitter);
    emitter.push();
    gen_expr(l, emitter);
    emitter.pop("rdi");
    emitter.emit("  cmp rax, rdi");
    emitter.emit(format!("  {setcc} al"));
    emitter.emit("  movzx rax, al");
}

/// Arguments are evaluated and pushed left to right, then popped into
/// argument registers in reverse order so argument 0 lands in `rdi` —
/// the push/pop dance is what lets each argument expression use the
/// same stack machine as everything else instead of needing its own
/// per-argument register assignment pass.
fn gen_funcall(name: Symbol, args: &[Node], emitter: &mut Emitter) {
    for arg in args {
        gen_expr(arg, emitter);
        emitter.push();
    }
    for i in (0..args.len()).rev() {
        emitter.pop(ARG_REGS[i]);
    }
    emitter.emit(format!("  mov rax, {}", args.len()));
    let fname = emitter.interner.resolve(name).to_string();
    emitter.emit(format!("  call {fname}"));
}
