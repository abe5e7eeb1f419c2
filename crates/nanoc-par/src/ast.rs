//! The typed AST and the `Obj` symbol-table entry it references.
//!
//! Role-specific fields of spec.md's flat `Node` record become variant
//! payloads on a native Rust sum type instead: `lhs`/`rhs` on a binary
//! node are the two fields of `NodeKind::Add`/`Sub`/etc. rather than
//! always-present, sometimes-null pointers. Sibling lists (`compound-stmt`
//! bodies, call argument lists) become owned `Vec<Node>` in declaration
//! order — the only externally observable property spec.md asks of them.

use std::cell::RefCell;
use std::rc::Rc;

use nanoc_types::Type;
use nanoc_util::{Span, Symbol};

/// A named program entity: a local or global variable, or a function.
///
/// Shared via `Rc<RefCell<_>>` because a single `Obj` is referenced both
/// from its owning scope list (`Parser::locals`/`globals`, `Obj::params`)
/// and from every `NodeKind::Var` that names it; codegen later mutates
/// `offset`/`stack_size` in place once layout is known.
#[derive(Debug)]
pub struct Obj {
    pub name: Symbol,
    pub ty: Rc<Type>,
    pub is_local: bool,
    pub is_function: bool,

    /// Locals only: byte offset from `rbp`, assigned during codegen's
    /// frame-layout pass. Zero and unused for globals/functions.
    pub offset: i64,

    /// Globals only: `Some(bytes)` for a string literal or other
    /// initialized global, `None` for a zero-initialized one.
    pub init_data: Option<Vec<u8>>,

    /// Functions only: parameters, in declaration order.
    pub params: Vec<Rc<RefCell<Obj>>>,
    /// Functions only: the parsed, type-checked body.
    pub body: Option<Node>,
    /// Functions only: every local declared in the body, including
    /// parameters, in the order `Parser` discovered them.
    pub locals: Vec<Rc<RefCell<Obj>>>,
    /// Functions only: total frame size in bytes, 16-byte aligned.
    pub stack_size: i64,
}

impl Obj {
    pub fn new_local(name: Symbol, ty: Rc<Type>) -> Self {
        Obj {
            name,
            ty,
            is_local: true,
            is_function: false,
            offset: 0,
            init_data: None,
            params: Vec::new(),
            body: None,
            locals: Vec::new(),
            stack_size: 0,
        }
    }

    pub fn new_global(name: Symbol, ty: Rc<Type>, init_data: Option<Vec<u8>>) -> Self {
        Obj {
            name,
            ty,
            is_local: false,
            is_function: false,
            offset: 0,
            init_data,
            params: Vec::new(),
            body: None,
            locals: Vec::new(),
            stack_size: 0,
        }
    }
}

/// A typed AST node.
#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// Filled by [`crate::sema::add_type`]. Every non-`Num`, non-`Var`
    /// node has this set before codegen ever sees it.
    pub ty: Option<Rc<Type>>,
}

#[derive(Debug)]
pub enum NodeKind {
    Num(u64),
    Var(Rc<RefCell<Obj>>),

    Add(Box<Node>, Box<Node>),
    Sub(Box<Node>, Box<Node>),
    Mul(Box<Node>, Box<Node>),
    Div(Box<Node>, Box<Node>),
    Neg(Box<Node>),

    Eq(Box<Node>, Box<Node>),
    Ne(Box<Node>, Box<Node>),
    Lt(Box<Node>, Box<Node>),
    Le(Box<Node>, Box<Node>),

    Addr(Box<Node>),
    Deref(Box<Node>),
    Assign(Box<Node>, Box<Node>),

    If {
        cond: Box<Node>,
        then: Box<Node>,
        els: Option<Box<Node>>,
    },
    For {
        init: Option<Box<Node>>,
        cond: Option<Box<Node>>,
        inc: Option<Box<Node>>,
        then: Box<Node>,
    },
    Block(Vec<Node>),
    Return(Box<Node>),

    Funcall {
        name: Symbol,
        args: Vec<Node>,
    },

    ExprStmt(Box<Node>),
    /// `({ ... })` — a block used as an expression; its value is the
    /// last statement's.
    StmtExpr(Vec<Node>),
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span, ty: None }
    }

    pub fn num(val: u64, span: Span) -> Self {
        Node::new(NodeKind::Num(val), span)
    }
}
