pub mod decl;
pub mod expr;
pub mod stmt;

pub use decl::{Decl, DeclId, DeclKind, EventDecl, FunctionDecl, MachineDecl, VariableDecl};
pub use expr::{BinOp, Expr, ExprId, ExprKind};
pub use stmt::{Stmt, StmtId, StmtKind};

use umbra_type::Store;

/// The global scope: declarations in deterministic enumeration order.
#[derive(Debug, Clone, Default)]
pub struct Scope {
  pub declarations: Vec<DeclId>,
}

/// One compilation unit: every IR arena plus the global scope.
///
/// The IR is fully typed and scope-resolved before it reaches a backend;
/// expression nodes carry their canonicalisable type and variable reads
/// reference declarations directly.
#[derive(Debug, Clone, Default)]
pub struct Program {
  pub decls: Store<Decl>,
  pub stmts: Store<Stmt>,
  pub exprs: Store<Expr>,
  pub scope: Scope,
}

impl Program {
  pub fn new() -> Self {
    Self::default()
  }
}
