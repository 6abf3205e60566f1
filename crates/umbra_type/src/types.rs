use std::collections::HashMap;

use crate::{symbol::SymbolId, Id, Store};

pub type TypeId = Id<Type>;

/// The type language of Umbra programs.
///
/// `Alias` is the only non-canonical form; every other variant is canonical
/// once interned, so `TypeId` equality on canonical ids is structural
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
  Bool,
  Int,
  Float,
  Null,

  Seq(TypeId),
  Map {
    key: TypeId,
    value: TypeId,
  },
  Tuple(Vec<TypeId>),
  NamedTuple(Vec<(SymbolId, TypeId)>),

  /// A named alias for another type. Resolved away by [`TypeStore::canonical`].
  Alias {
    name: SymbolId,
    target: TypeId,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MapKey {
  key: TypeId,
  value: TypeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AliasKey {
  name: SymbolId,
  target: TypeId,
}

/// Interning store for [`Type`]. Structurally equal types always receive the
/// same [`TypeId`].
#[derive(Debug, Clone)]
pub struct TypeStore {
  types: Store<Type>,
  primitives: HashMap<Type, TypeId>,
  seqs: HashMap<TypeId, TypeId>,
  maps: HashMap<MapKey, TypeId>,
  tuples: HashMap<Vec<TypeId>, TypeId>,
  named_tuples: HashMap<Vec<(SymbolId, TypeId)>, TypeId>,
  aliases: HashMap<AliasKey, TypeId>,
}

impl TypeStore {
  pub fn new() -> Self {
    let mut store = Self {
      types: Store::new(),
      primitives: HashMap::new(),
      seqs: HashMap::new(),
      maps: HashMap::new(),
      tuples: HashMap::new(),
      named_tuples: HashMap::new(),
      aliases: HashMap::new(),
    };
    store.init_primitives();
    store
  }

  fn init_primitives(&mut self) {
    for ty in [Type::Bool, Type::Int, Type::Float, Type::Null] {
      let id = self.types.alloc(ty.clone());
      self.primitives.insert(ty, id);
    }
  }

  pub fn seq(
    &mut self,
    element: TypeId,
  ) -> TypeId {
    if let Some(&id) = self.seqs.get(&element) {
      return id;
    }
    let id = self.types.alloc(Type::Seq(element));
    self.seqs.insert(element, id);
    id
  }

  pub fn map(
    &mut self,
    key: TypeId,
    value: TypeId,
  ) -> TypeId {
    let map_key = MapKey { key, value };
    if let Some(&id) = self.maps.get(&map_key) {
      return id;
    }
    let id = self.types.alloc(Type::Map { key, value });
    self.maps.insert(map_key, id);
    id
  }

  pub fn tuple(
    &mut self,
    elements: Vec<TypeId>,
  ) -> TypeId {
    if let Some(&id) = self.tuples.get(&elements) {
      return id;
    }
    let id = self.types.alloc(Type::Tuple(elements.clone()));
    self.tuples.insert(elements, id);
    id
  }

  pub fn named_tuple(
    &mut self,
    fields: Vec<(SymbolId, TypeId)>,
  ) -> TypeId {
    if let Some(&id) = self.named_tuples.get(&fields) {
      return id;
    }
    let id = self.types.alloc(Type::NamedTuple(fields.clone()));
    self.named_tuples.insert(fields, id);
    id
  }

  pub fn alias(
    &mut self,
    name: SymbolId,
    target: TypeId,
  ) -> TypeId {
    let key = AliasKey { name, target };
    if let Some(&id) = self.aliases.get(&key) {
      return id;
    }
    let id = self.types.alloc(Type::Alias { name, target });
    self.aliases.insert(key, id);
    id
  }

  #[inline]
  pub fn get(
    &self,
    id: &TypeId,
  ) -> &Type {
    self.types.get(id)
  }

  #[inline]
  pub fn boolean(&self) -> TypeId {
    self.primitives[&Type::Bool]
  }

  #[inline]
  pub fn int(&self) -> TypeId {
    self.primitives[&Type::Int]
  }

  #[inline]
  pub fn float(&self) -> TypeId {
    self.primitives[&Type::Float]
  }

  #[inline]
  pub fn null(&self) -> TypeId {
    self.primitives[&Type::Null]
  }

  /// Resolve alias chains down to the canonical type.
  pub fn canonical(
    &self,
    id: TypeId,
  ) -> TypeId {
    let mut id = id;
    while let Type::Alias { target, .. } = self.get(&id) {
      id = *target;
    }
    id
  }

  pub fn is_primitive(
    &self,
    id: &TypeId,
  ) -> bool {
    matches!(
      self.get(&self.canonical(*id)),
      Type::Bool | Type::Int | Type::Float | Type::Null
    )
  }
}

impl Default for TypeStore {
  fn default() -> Self {
    Self::new()
  }
}
