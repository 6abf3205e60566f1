//! Syntactic flow predicates over IR statements.
//!
//! The statement emitter uses these to decide where a path-constraint
//! liveness check must be inserted and where emission can stop. `Break`
//! and `Continue` are absorbed by their enclosing loop, so a `While` only
//! escapes when its body can return early.
//!
//! Compound statements distribute every predicate, including the `must`
//! variants, as "any child satisfies". For `must` this over-approximates;
//! it is the inherited behaviour and the emitter's stop condition depends
//! on it.

use umbra_ir::{Stmt, StmtId, StmtKind};
use umbra_type::Store;

/// True when executing `id` may return from the enclosing function.
pub fn can_early_return(
  stmts: &Store<Stmt>,
  id: StmtId,
) -> bool {
  match &stmts.get(&id).kind {
    StmtKind::Return(_) | StmtKind::Goto { .. } | StmtKind::Pop | StmtKind::Raise { .. } => true,
    StmtKind::Compound(children) => children.iter().any(|c| can_early_return(stmts, *c)),
    StmtKind::If {
      then_branch,
      else_branch,
      ..
    } => {
      can_early_return(stmts, *then_branch) || else_branch.map_or(false, |e| can_early_return(stmts, e))
    },
    StmtKind::While { body, .. } => can_early_return(stmts, *body),
    _ => false,
  }
}

/// True when executing `id` always returns from the enclosing function.
pub fn must_early_return(
  stmts: &Store<Stmt>,
  id: StmtId,
) -> bool {
  match &stmts.get(&id).kind {
    StmtKind::Return(_) | StmtKind::Goto { .. } | StmtKind::Pop | StmtKind::Raise { .. } => true,
    StmtKind::Compound(children) => children.iter().any(|c| must_early_return(stmts, *c)),
    StmtKind::If {
      then_branch,
      else_branch,
      ..
    } => {
      must_early_return(stmts, *then_branch) && else_branch.map_or(false, |e| must_early_return(stmts, e))
    },
    StmtKind::While { body, .. } => must_early_return(stmts, *body),
    _ => false,
  }
}

/// True when executing `id` may escape the enclosing block (return, break,
/// continue, or a machine-level transfer).
pub fn can_jump_out(
  stmts: &Store<Stmt>,
  id: StmtId,
) -> bool {
  match &stmts.get(&id).kind {
    StmtKind::Return(_) | StmtKind::Goto { .. } | StmtKind::Pop | StmtKind::Raise { .. } => true,
    StmtKind::Break | StmtKind::Continue => true,
    StmtKind::Compound(children) => children.iter().any(|c| can_jump_out(stmts, *c)),
    StmtKind::If {
      then_branch,
      else_branch,
      ..
    } => can_jump_out(stmts, *then_branch) || else_branch.map_or(false, |e| can_jump_out(stmts, e)),
    // Breaks and continues are absorbed by the loop; only an early return
    // inside the body escapes past it.
    StmtKind::While { body, .. } => can_early_return(stmts, *body),
    _ => false,
  }
}

/// True when executing `id` always escapes the enclosing block.
pub fn must_jump_out(
  stmts: &Store<Stmt>,
  id: StmtId,
) -> bool {
  match &stmts.get(&id).kind {
    StmtKind::Return(_) | StmtKind::Goto { .. } | StmtKind::Pop | StmtKind::Raise { .. } => true,
    StmtKind::Break | StmtKind::Continue => true,
    StmtKind::Compound(children) => children.iter().any(|c| must_jump_out(stmts, *c)),
    StmtKind::If {
      then_branch,
      else_branch,
      ..
    } => must_jump_out(stmts, *then_branch) && else_branch.map_or(false, |e| must_jump_out(stmts, e)),
    StmtKind::While { body, .. } => must_early_return(stmts, *body),
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn alloc(
    stmts: &mut Store<Stmt>,
    kind: StmtKind,
  ) -> StmtId {
    stmts.alloc(Stmt { kind })
  }

  #[test]
  fn leaf_classification() {
    let mut stmts = Store::new();
    let ret = alloc(&mut stmts, StmtKind::Return(None));
    let brk = alloc(&mut stmts, StmtKind::Break);
    let pop = alloc(&mut stmts, StmtKind::Pop);

    assert!(can_early_return(&stmts, ret));
    assert!(must_early_return(&stmts, ret));
    assert!(can_jump_out(&stmts, ret));
    assert!(must_jump_out(&stmts, ret));

    assert!(!can_early_return(&stmts, brk));
    assert!(!must_early_return(&stmts, brk));
    assert!(can_jump_out(&stmts, brk));
    assert!(must_jump_out(&stmts, brk));

    assert!(must_early_return(&stmts, pop));
  }

  #[test]
  fn compound_must_uses_any_child() {
    let mut stmts = Store::new();
    let brk = alloc(&mut stmts, StmtKind::Break);
    let pop = alloc(&mut stmts, StmtKind::Pop);
    let seq = alloc(&mut stmts, StmtKind::Compound(vec![pop, brk]));

    // A single returning child is enough to mark the whole compound.
    assert!(must_early_return(&stmts, seq));
    assert!(must_jump_out(&stmts, seq));
  }

  #[test]
  fn loops_absorb_breaks() {
    let mut stmts = Store::new();
    let brk = alloc(&mut stmts, StmtKind::Break);
    let body = alloc(&mut stmts, StmtKind::Compound(vec![brk]));
    // Condition id is irrelevant to the predicates.
    let cond = umbra_ir::ExprId::new(0);
    let lp = alloc(
      &mut stmts,
      StmtKind::While {
        condition: cond,
        body,
      },
    );

    assert!(!can_jump_out(&stmts, lp));
    assert!(!must_jump_out(&stmts, lp));
  }

  #[test]
  fn returns_escape_loops() {
    let mut stmts = Store::new();
    let ret = alloc(&mut stmts, StmtKind::Return(None));
    let body = alloc(&mut stmts, StmtKind::Compound(vec![ret]));
    let cond = umbra_ir::ExprId::new(0);
    let lp = alloc(
      &mut stmts,
      StmtKind::While {
        condition: cond,
        body,
      },
    );

    assert!(can_jump_out(&stmts, lp));
    assert!(must_jump_out(&stmts, lp));
  }

  #[test]
  fn if_composes_or_for_can_and_for_must() {
    let mut stmts = Store::new();
    let ret = alloc(&mut stmts, StmtKind::Return(None));
    let cont = alloc(&mut stmts, StmtKind::Continue);
    let cond = umbra_ir::ExprId::new(0);

    let one_armed = alloc(
      &mut stmts,
      StmtKind::If {
        condition: cond,
        then_branch: ret,
        else_branch: None,
      },
    );
    assert!(can_early_return(&stmts, one_armed));
    assert!(!must_early_return(&stmts, one_armed));

    let two_armed = alloc(
      &mut stmts,
      StmtKind::If {
        condition: cond,
        then_branch: ret,
        else_branch: Some(cont),
      },
    );
    assert!(can_early_return(&stmts, two_armed));
    assert!(!must_early_return(&stmts, two_armed));
    assert!(must_jump_out(&stmts, two_armed));
  }
}
