use umbra_type::{symbol::SymbolId, types::TypeId, Id};

use crate::stmt::StmtId;

pub type DeclId = Id<Decl>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
  pub name: SymbolId,
  pub kind: DeclKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
  Function(FunctionDecl),
  Variable(VariableDecl),
  Machine(MachineDecl),
  Event(EventDecl),
}

impl DeclKind {
  pub fn kind_name(&self) -> &'static str {
    match self {
      DeclKind::Function(_) => "function",
      DeclKind::Variable(_) => "variable",
      DeclKind::Machine(_) => "machine",
      DeclKind::Event(_) => "event",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
  /// Owning machine, when the function is a member. Backends that only
  /// handle global functions reject owned ones.
  pub owner: Option<DeclId>,
  /// True when the body may block on a `receive`.
  pub can_receive: bool,
  pub is_foreign: bool,
  /// Parameter declarations, in signature order. Each is a `Variable`.
  pub params: Vec<DeclId>,
  pub return_type: TypeId,
  /// Local variable declarations, in declaration order. Each is a `Variable`.
  pub locals: Vec<DeclId>,
  pub body: StmtId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableDecl {
  pub ty: TypeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineDecl {
  pub states: Vec<SymbolId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDecl {
  pub payload: Option<TypeId>,
}
