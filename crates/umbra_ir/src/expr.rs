use ordered_float::OrderedFloat;
use umbra_type::{symbol::SymbolId, types::TypeId, Id};

use crate::decl::DeclId;

pub type ExprId = Id<Expr>;

/// A typed expression node. `ty` is the expression's static type; it may be
/// an alias and is canonicalised before any backend dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
  pub kind: ExprKind,
  pub ty: TypeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprKind {
  /// An explicit deep copy. Pass-through for backends whose value
  /// representation is persistent.
  Clone(ExprId),
  Binary {
    op: BinOp,
    left: ExprId,
    right: ExprId,
  },
  BoolLit(bool),
  IntLit(i64),
  FloatLit(OrderedFloat<f64>),
  /// The default value of the node's type.
  Default,
  MapGet {
    map: ExprId,
    key: ExprId,
  },
  SeqGet {
    seq: ExprId,
    index: ExprId,
  },
  Var(DeclId),
  /// A read of a linear (move-tracked) variable that does not consume it.
  LinearRef(DeclId),
  TupleGet {
    base: ExprId,
    index: u32,
  },
  FieldGet {
    base: ExprId,
    field: SymbolId,
  },
  StringLit(String),
}

impl ExprKind {
  pub fn kind_name(&self) -> &'static str {
    match self {
      ExprKind::Clone(_) => "clone",
      ExprKind::Binary { .. } => "binary",
      ExprKind::BoolLit(_) => "bool literal",
      ExprKind::IntLit(_) => "int literal",
      ExprKind::FloatLit(_) => "float literal",
      ExprKind::Default => "default",
      ExprKind::MapGet { .. } => "map access",
      ExprKind::SeqGet { .. } => "seq access",
      ExprKind::Var(_) => "variable",
      ExprKind::LinearRef(_) => "linear ref",
      ExprKind::TupleGet { .. } => "tuple access",
      ExprKind::FieldGet { .. } => "named tuple access",
      ExprKind::StringLit(_) => "string literal",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
  Add,
  Sub,
  Mul,
  Div,

  Lt,
  Le,
  Gt,
  Ge,

  And,
  Or,

  Eq,
  Neq,
}
