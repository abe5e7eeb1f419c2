//! The text-buffer emitter: a thin wrapper around a growing `String`
//! plus the two pieces of state every codegen function needs — the
//! push/pop depth counter and the monotonic label counter.
//!
//! Grounded on `faxc-gen/src/asm.rs`'s `AsmGenerator { output: String,
//! ... }` shape, trimmed of its (unused, stubbed-out) register
//! allocator — `nanoc`'s fixed stack-machine scheme needs no register
//! allocation pass.

use nanoc_util::{Handler, Interner};

pub(crate) struct Emitter<'a> {
    pub(crate) handler: &'a Handler<'a>,
    pub(crate) interner: &'a Interner,
    out: String,
    depth: i64,
    label_count: u32,
    pub(crate) current_fn: String,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(handler: &'a Handler<'a>, interner: &'a Interner) -> Self {
        Self {
            handler,
            interner,
            out: String::new(),
            depth: 0,
            label_count: 0,
            current_fn: String::new(),
        }
    }

    pub(crate) fn emit(&mut self, line: impl AsRef<str>) {
        self.out.push_str(line.as_ref());
        self.out.push('\n');
    }

    pub(crate) fn push(&mut self) {
        self.emit("  push rax");
        self.depth += 1;
    }

    pub(crate) fn pop(&mut self, reg: &str) {
        self.emit(format!("  pop {reg}"));
        self.depth -= 1;
    }

    /// Allocates a fresh, process-unique label suffix for `if`/`for`.
    pub(crate) fn next_label(&mut self) -> u32 {
        let n = self.label_count;
        self.label_count += 1;
        n
    }

    /// Asserted `== 0` at the end of every function body: a nonzero
    /// depth means some codegen function pushed without a matching pop,
    /// an internal bug rather than anything a source program can trigger.
    pub(crate) fn assert_balanced(&self, fn_name: &str) {
        assert_eq!(
            self.depth, 0,
            "push/pop imbalance generating function `{fn_name}`"
        );
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
