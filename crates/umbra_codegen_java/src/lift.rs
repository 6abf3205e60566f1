use umbra_type::types::{Type, TypeId, TypeStore};

use crate::errors::CodegenError;

/// Java text of the value-summary type for `ty`.
///
/// `in_var_position` is true when the text will declare a variable or
/// parameter; `Null` lifts to `void` and is therefore rejected there.
pub fn symbolic_type(
  types: &TypeStore,
  ty: TypeId,
  in_var_position: bool,
) -> Result<String, CodegenError> {
  let ty = types.canonical(ty);
  match types.get(&ty) {
    Type::Bool => Ok("PrimVS<Bdd, Boolean>".to_string()),
    Type::Int => Ok("PrimVS<Bdd, Integer>".to_string()),
    Type::Float => Ok("PrimVS<Bdd, Float>".to_string()),
    Type::Null => {
      if in_var_position {
        Err(CodegenError::unsupported("symbolic type", "variable of null type"))
      } else {
        Ok("void".to_string())
      }
    },
    Type::Seq(element) => {
      let element = symbolic_type(types, *element, true)?;
      Ok(format!("ListVS<Bdd, {}>", element))
    },
    Type::Map { key, value } => {
      let key = boxed_type(types, *key)?;
      let value = symbolic_type(types, *value, true)?;
      Ok(format!("MapVS<Bdd, {}, {}>", key, value))
    },
    other => Err(CodegenError::unsupported("symbolic type", format!("{:?}", other))),
  }
}

/// Java text of the boxed concrete type for `ty`. Only primitive value
/// types box; everything else has no concrete boxed form.
pub fn boxed_type(
  types: &TypeStore,
  ty: TypeId,
) -> Result<String, CodegenError> {
  let ty = types.canonical(ty);
  match types.get(&ty) {
    Type::Bool => Ok("Boolean".to_string()),
    Type::Int => Ok("Integer".to_string()),
    Type::Float => Ok("Float".to_string()),
    other => Err(CodegenError::unsupported("boxed type", format!("{:?}", other))),
  }
}

/// Java text of the companion operator-table type for `ty`. Same shape as
/// [`symbolic_type`] with the `.Ops` suffix substituted.
pub fn ops_type(
  types: &TypeStore,
  ty: TypeId,
) -> Result<String, CodegenError> {
  let ty = types.canonical(ty);
  match types.get(&ty) {
    Type::Bool => Ok("PrimVS.Ops<Bdd, Boolean>".to_string()),
    Type::Int => Ok("PrimVS.Ops<Bdd, Integer>".to_string()),
    Type::Float => Ok("PrimVS.Ops<Bdd, Float>".to_string()),
    Type::Seq(element) => {
      let element = symbolic_type(types, *element, true)?;
      Ok(format!("ListVS.Ops<Bdd, {}>", element))
    },
    Type::Map { key, value } => {
      let key = boxed_type(types, *key)?;
      let value = symbolic_type(types, *value, true)?;
      Ok(format!("MapVS.Ops<Bdd, {}, {}>", key, value))
    },
    other => Err(CodegenError::unsupported("operator table type", format!("{:?}", other))),
  }
}
