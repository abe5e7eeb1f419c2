//! Whole-program assembly emission: `.data` for every global, `.text`
//! for every function, in the order `nanoc_par::parse` discovered them.

use std::cell::RefCell;
use std::rc::Rc;

use nanoc_par::ast::Obj;
use nanoc_par::Program;
use nanoc_util::Handler;

use crate::emitter::Emitter;
use crate::frame::assign_offsets;
use crate::stmt::gen_stmt;

const ARG_REGS64: [&str; 6] = ["rdi", "rsi", "rdx", "rcx", "r8", "r9"];
const ARG_REGS8: [&str; 6] = ["dil", "sil", "dl", "cl", "r8b", "r9b"];

/// Generates GNU-assembler, Intel-syntax x86-64 text for `program`.
pub fn generate(program: &Program, handler: &Handler) -> String {
    let mut emitter = Emitter::new(handler, &program.interner);
    emitter.emit(".intel_syntax noprefix");

    let globals: Vec<_> = program
        .objects
        .iter()
        .filter(|o| !o.borrow().is_function)
        .collect();
    if !globals.is_empty() {
        emitter.emit(".data");
        for g in &globals {
            emit_global(g, &mut emitter);
        }
    }

    let functions: Vec<_> = program
        .objects
        .iter()
        .filter(|o| o.borrow().is_function)
        .collect();
    if !functions.is_empty() {
        emitter.emit(".text");
        for f in &functions {
            assign_offsets(f);
            emit_function(f, &mut emitter);
        }
    }

    emitter.finish()
}

fn emit_global(obj: &Rc<RefCell<Obj>>, emitter: &mut Emitter) {
    let o = obj.borrow();
    let name = emitter.interner.resolve(o.name).to_string();
    emitter.emit(format!(".globl {name}"));
    emitter.emit(format!("{name}:"));
    match &o.init_data {
        Some(bytes) => {
            for b in bytes {
                emitter.emit(format!("  .byte {b}"));
            }
        }
        None => {
            emitter.emit(format!("  .zero {}", o.ty.size()));
        }
    }
}

fn emit_function(obj: &Rc<RefCell<Obj>>, emitter: &mut Emitter) {
    let o = obj.borrow();
    let name = emitter.interner.resolve(o.name).to_string();
    emitter.current_fn = name.clone();

    emitter.emit(format!(".globl {name}"));
    emitter.emit(format!("{name}:"));
    emitter.emit("  push rbp");
    emitter.emit("  mov rbp, rsp");
    emitter.emit(format!("  sub rsp, {}", o.stack_size));

    for (i, param) in o.params.iter().enumerate() {
        let p = param.borrow();
        let reg = if p.ty.size() == 1 {
            ARG_REGS8[i]
        } else {
            ARG_REGS64[i]
        };
        emitter.emit(format!("  mov [rbp{:+}], {reg}", p.offset));
    }

    if let Some(body) = &o.body {
        gen_stmt(body, emitter);
    }

    emitter.assert_balanced(&name);

    emitter.emit(format!(".L.return.{name}:"));
    emitter.emit("  mov rsp, rbp");
    emitter.emit("  pop rbp");
    emitter.emit("  ret");
}
