use std::collections::{HashMap, HashSet};

use umbra_ir::DeclId;

/// Name of the target-level BDD library handle.
pub const BDD_HANDLE: &str = "bdd";
/// Name of the per-function return accumulator.
pub const RETURN_ACCUMULATOR: &str = "retValue";

/// A target-level BDD variable holding the current path constraint. Lives
/// for the emission of one block whose predicate is fixed.
#[derive(Debug, Clone)]
pub struct PathConstraintScope {
  pub pc_var: String,
}

/// Target-level identifiers for one loop: the list of break predicates and
/// the early-return flag that outlives the loop body.
#[derive(Debug, Clone)]
pub struct LoopScope {
  pub exits_list: String,
  pub early_ret_flag: String,
}

/// The per-branch flag set whenever a control-flow-escaping statement was
/// taken within the branch.
#[derive(Debug, Clone)]
pub struct BranchScope {
  pub jumped_out_flag: String,
}

/// Immutable bundle threaded through statement emission: the live path
/// constraint, plus the innermost loop and branch scopes if any.
#[derive(Debug, Clone)]
pub struct FlowContext {
  pub pc: PathConstraintScope,
  pub loop_scope: Option<LoopScope>,
  pub branch_scope: Option<BranchScope>,
}

impl FlowContext {
  /// Context for a function body: no loop, no branch.
  pub fn function(pc: PathConstraintScope) -> Self {
    Self {
      pc,
      loop_scope: None,
      branch_scope: None,
    }
  }

  /// Context for a loop body. Any enclosing branch scope is dropped; jumps
  /// inside the loop are absorbed by the loop protocol.
  pub fn in_loop(
    pc: PathConstraintScope,
    loop_scope: LoopScope,
  ) -> Self {
    Self {
      pc,
      loop_scope: Some(loop_scope),
      branch_scope: None,
    }
  }

  /// Context for one branch of a conditional. The loop scope is inherited
  /// from the parent so breaks still find their exits list.
  pub fn branch(
    pc: PathConstraintScope,
    branch_scope: BranchScope,
    parent: &FlowContext,
  ) -> Self {
    Self {
      pc,
      loop_scope: parent.loop_scope.clone(),
      branch_scope: Some(branch_scope),
    }
  }
}

/// Per-job mutable state: the name mint and the declaration name map.
///
/// Every minted identifier is pairwise distinct across the compilation
/// unit; one monotonic counter feeds all mints.
#[derive(Debug, Default)]
pub struct CompilationContext {
  counter: u32,
  decl_names: HashMap<DeclId, String>,
  used_names: HashSet<String>,
}

impl CompilationContext {
  pub fn new() -> Self {
    Self::default()
  }

  fn next(&mut self) -> u32 {
    let n = self.counter;
    self.counter += 1;
    n
  }

  pub fn fresh_temp_var(&mut self) -> String {
    format!("temp_{}", self.next())
  }

  pub fn fresh_pc_scope(&mut self) -> PathConstraintScope {
    PathConstraintScope {
      pc_var: format!("pc_{}", self.next()),
    }
  }

  pub fn fresh_loop_scope(&mut self) -> LoopScope {
    LoopScope {
      exits_list: format!("loopExits_{}", self.next()),
      early_ret_flag: format!("loopEarlyRet_{}", self.next()),
    }
  }

  pub fn fresh_branch_scope(&mut self) -> BranchScope {
    BranchScope {
      jumped_out_flag: format!("jumpedOut_{}", self.next()),
    }
  }

  /// Stable, collision-free identifier for a declaration. The first
  /// declaration to claim a source name keeps it; later claimants get a
  /// counter suffix.
  pub fn name_for_decl(
    &mut self,
    id: DeclId,
    source_name: &str,
  ) -> String {
    if let Some(name) = self.decl_names.get(&id) {
      return name.clone();
    }
    let mut name = source_name.to_string();
    while self.used_names.contains(&name) {
      name = format!("{}_{}", source_name, self.next());
    }
    self.used_names.insert(name.clone());
    self.decl_names.insert(id, name.clone());
    name
  }

  /// Deterministic mangling of a source variable name. Pure: independent
  /// of mint state.
  pub fn var(name: &str) -> String {
    format!("var_{}", name)
  }
}
