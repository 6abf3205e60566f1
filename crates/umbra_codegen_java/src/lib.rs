mod context;
mod emit;
mod errors;
mod flow;
mod lift;
mod registry;

pub use context::{
  BranchScope, CompilationContext, FlowContext, LoopScope, PathConstraintScope, BDD_HANDLE, RETURN_ACCUMULATOR,
};
pub use emit::{emit_java, JavaEmitter};
pub use errors::CodegenError;
pub use flow::{can_early_return, can_jump_out, must_early_return, must_jump_out};
pub use lift::{boxed_type, ops_type, symbolic_type};
pub use registry::{OpsEntry, OpsIndex, OpsRegistry};
