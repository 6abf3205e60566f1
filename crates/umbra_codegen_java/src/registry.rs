use std::collections::HashMap;

use umbra_type::types::{Type, TypeId, TypeStore};

use crate::context::BDD_HANDLE;
use crate::errors::CodegenError;
use crate::lift::ops_type;

/// Index of one registered operator table. Renders to the name of the
/// target-level constant serving every call site of the same type shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpsIndex(u32);

impl OpsIndex {
  pub fn constant_name(&self) -> String {
    format!("ops_{}", self.0)
  }

  #[inline]
  pub fn index(&self) -> u32 {
    self.0
  }
}

#[derive(Debug, Clone)]
pub struct OpsEntry {
  pub ops_type: String,
  pub ctor: String,
}

/// Deduplicating registry of operator tables, keyed on the canonical type
/// id (structural, since the type store interns). Indices are dense and
/// assigned in first-request order; the epilogue emits entries in the same
/// order, which keeps every definition ahead of its uses because children
/// are registered before their containers.
#[derive(Debug, Default)]
pub struct OpsRegistry {
  by_type: HashMap<TypeId, OpsIndex>,
  entries: Vec<OpsEntry>,
}

impl OpsRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register(
    &mut self,
    types: &TypeStore,
    ty: TypeId,
  ) -> Result<OpsIndex, CodegenError> {
    let ty = types.canonical(ty);
    if let Some(&index) = self.by_type.get(&ty) {
      return Ok(index);
    }

    let ctor = match types.get(&ty) {
      Type::Bool | Type::Int | Type::Float => {
        format!("new {}({})", ops_type(types, ty)?, BDD_HANDLE)
      },
      Type::Seq(element) => {
        let element_ops = self.register(types, *element)?;
        format!(
          "new {}({}, {})",
          ops_type(types, ty)?,
          BDD_HANDLE,
          element_ops.constant_name()
        )
      },
      Type::Map { value, .. } => {
        let value_ops = self.register(types, *value)?;
        format!(
          "new {}({}, {})",
          ops_type(types, ty)?,
          BDD_HANDLE,
          value_ops.constant_name()
        )
      },
      other => return Err(CodegenError::registry_shape(format!("{:?}", other))),
    };

    let index = OpsIndex(self.entries.len() as u32);
    self.entries.push(OpsEntry {
      ops_type: ops_type(types, ty)?,
      ctor,
    });
    self.by_type.insert(ty, index);
    Ok(index)
  }

  /// Registered entries in index order.
  pub fn entries(&self) -> &[OpsEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
