use umbra_type::{symbol::SymbolId, Id};

use crate::decl::DeclId;
use crate::expr::ExprId;

pub type StmtId = Id<Stmt>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
  pub kind: StmtKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
  Assign {
    target: ExprId,
    value: ExprId,
  },
  /// Move the value of `source` into `target`, consuming `source`.
  MoveAssign {
    target: ExprId,
    source: DeclId,
  },
  Return(Option<ExprId>),
  Break,
  Continue,
  /// Transfer the enclosing machine to another state.
  Goto {
    state: SymbolId,
  },
  /// Pop the enclosing machine's state stack.
  Pop,
  /// Raise an event, unwinding to the machine's handler.
  Raise {
    event: Option<ExprId>,
  },
  Compound(Vec<StmtId>),
  While {
    condition: ExprId,
    body: StmtId,
  },
  If {
    condition: ExprId,
    then_branch: StmtId,
    else_branch: Option<StmtId>,
  },
  Call {
    callee: DeclId,
    args: Vec<ExprId>,
  },
  Assert {
    condition: ExprId,
  },
  Send {
    target: ExprId,
    event: ExprId,
  },
}

impl StmtKind {
  pub fn kind_name(&self) -> &'static str {
    match self {
      StmtKind::Assign { .. } => "assign",
      StmtKind::MoveAssign { .. } => "move assign",
      StmtKind::Return(_) => "return",
      StmtKind::Break => "break",
      StmtKind::Continue => "continue",
      StmtKind::Goto { .. } => "goto",
      StmtKind::Pop => "pop",
      StmtKind::Raise { .. } => "raise",
      StmtKind::Compound(_) => "compound",
      StmtKind::While { .. } => "while",
      StmtKind::If { .. } => "if",
      StmtKind::Call { .. } => "call",
      StmtKind::Assert { .. } => "assert",
      StmtKind::Send { .. } => "send",
    }
  }
}
