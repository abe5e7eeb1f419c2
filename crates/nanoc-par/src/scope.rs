//! Identifier resolution.
//!
//! `nanoc`'s language has no nested block scoping of declarations, so
//! this is the two-level lookup spec.md actually calls for: the current
//! function's locals (searched most-recently-declared first, i.e. LIFO)
//! then the single global list. This is a deliberate simplification of
//! the teacher's `faxc-sem::scope::ScopeTree` rib-chain (grounded on
//! `faxc-sem/src/scope.rs`'s `enter_scope`/`resolve` shape) down to the
//! two lists spec.md's data model actually describes.

use std::cell::RefCell;
use std::rc::Rc;

use nanoc_util::Symbol;

use crate::ast::Obj;

#[derive(Default)]
pub struct Scope {
    /// The function currently being parsed; cleared at the start of each
    /// `function-def`. Most recent declaration is at index 0, so a plain
    /// linear search already gives the LIFO shadowing spec.md requires.
    pub locals: Vec<Rc<RefCell<Obj>>>,
    pub globals: Vec<Rc<RefCell<Obj>>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new local at the head of the current function's list.
    pub fn push_local(&mut self, obj: Obj) -> Rc<RefCell<Obj>> {
        let obj = Rc::new(RefCell::new(obj));
        self.locals.insert(0, obj.clone());
        obj
    }

    pub fn push_global(&mut self, obj: Obj) -> Rc<RefCell<Obj>> {
        let obj = Rc::new(RefCell::new(obj));
        self.globals.push(obj.clone());
        obj
    }

    /// Locals first (LIFO), then globals — spec.md's lexical resolution
    /// order.
    pub fn resolve(&self, name: Symbol) -> Option<Rc<RefCell<Obj>>> {
        self.locals
            .iter()
            .find(|o| o.borrow().name == name)
            .or_else(|| self.globals.iter().find(|o| o.borrow().name == name))
            .cloned()
    }
}
