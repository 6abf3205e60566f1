use std::collections::HashMap;

use crate::{Id, Store};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Symbol {
  pub name: String,
}

pub type SymbolId = Id<Symbol>;

/// String interner. Equal names always intern to the same [`SymbolId`].
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
  symbols: Store<Symbol>,
  map: HashMap<String, SymbolId>,
}

impl SymbolTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn intern(
    &mut self,
    name: &str,
  ) -> SymbolId {
    if let Some(id) = self.map.get(name) {
      return *id;
    }
    let id = self.symbols.alloc(Symbol { name: name.to_string() });
    self.map.insert(name.to_string(), id);
    id
  }

  pub fn get(
    &self,
    id: &SymbolId,
  ) -> &str {
    &self.symbols.get(id).name
  }
}
