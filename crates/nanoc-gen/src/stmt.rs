//! Statement codegen: control flow, using a monotonic per-compilation
//! label counter (`.L.if/else/end/begin.N`), plus the `.L.return.<fn>`
//! epilogue jump target every `return` statement targets.

use nanoc_par::ast::{Node, NodeKind};

use crate::emitter::Emitter;
use crate::expr::gen_expr;

pub(crate) fn gen_stmt(node: &Node, emitter: &mut Emitter) {
    match &node.kind {
        NodeKind::If { cond, then, els } => {
            let label = emitter.next_label();
            gen_expr(cond, emitter);
            emitter.emit("  cmp rax, 0");
            emitter.emit(format!("  je .L.else.{label}"));
            gen_stmt(then, emitter);
            emitter.emit(format!("  jmp .L.end.{label}"));
            emitter.emit(format!(".L.else.{label}:"));
            if let Some(e) = els {
                gen_stmt(e, emitter);
            }
            emitter.emit(format!(".L.end.{label}:"));
        }

        NodeKind::For {
            init,
            cond,
            inc,
            then,
        } => {
            let label = emitter.next_label();
            if let Some(i) = init {
                gen_stmt(i, emitter);
            }
            emitter.emit(format!(".L.begin.{label}:"));
            if let Some(c) = cond {
                gen_expr(c, emitter);
                emitter.emit("  cmp rax, 0");
                emitter.emit(format!("  je .L.end.{label}"));
            }
            gen_stmt(then, emitter);
            if let Some(i) = inc {
                gen_stmt(i, emitter);
            }
            emitter.emit(format!("  jmp .L.begin.{label}"));
            emitter.emit(format!(".L.end.{label}:"));
        }

        NodeKind::Block(stmts) => {
            for s in stmts {
                gen_stmt(s, emitter);
            }
        }

        NodeKind::Return(value) => {
            gen_expr(value, emitter);
            let fname = emitter.current_fn.clone();
            emitter.emit(format!("  jmp .L.return.{fname}"));
        }

        NodeKind::ExprStmt(inner) => gen_expr(inner, emitter),

        _ => gen_expr(node, emitter),
    }
}
