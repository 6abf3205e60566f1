use umbra_codegen_java::{emit_java, CodegenError};
use umbra_config::JobConfig;
use umbra_ir::{
  BinOp, Decl, DeclId, DeclKind, Expr, ExprId, ExprKind, FunctionDecl, Program, Stmt, StmtId, StmtKind, VariableDecl,
};
use umbra_type::symbol::SymbolTable;
use umbra_type::types::{TypeId, TypeStore};

/// Everything one generation job consumes, built programmatically.
pub struct Fixture {
  pub program: Program,
  pub types: TypeStore,
  pub symbols: SymbolTable,
}

impl Fixture {
  pub fn new() -> Self {
    Self {
      program: Program::new(),
      types: TypeStore::new(),
      symbols: SymbolTable::new(),
    }
  }

  pub fn var_decl(
    &mut self,
    name: &str,
    ty: TypeId,
  ) -> DeclId {
    let name = self.symbols.intern(name);
    self.program.decls.alloc(Decl {
      name,
      kind: DeclKind::Variable(VariableDecl { ty }),
    })
  }

  pub fn expr(
    &mut self,
    kind: ExprKind,
    ty: TypeId,
  ) -> ExprId {
    self.program.exprs.alloc(Expr { kind, ty })
  }

  pub fn int_lit(
    &mut self,
    value: i64,
  ) -> ExprId {
    let ty = self.types.int();
    self.expr(ExprKind::IntLit(value), ty)
  }

  pub fn bool_lit(
    &mut self,
    value: bool,
  ) -> ExprId {
    let ty = self.types.boolean();
    self.expr(ExprKind::BoolLit(value), ty)
  }

  pub fn float_lit(
    &mut self,
    value: f64,
  ) -> ExprId {
    let ty = self.types.float();
    self.expr(ExprKind::FloatLit(ordered_float::OrderedFloat(value)), ty)
  }

  /// A read of a variable declaration, typed from the declaration.
  pub fn read(
    &mut self,
    decl: DeclId,
  ) -> ExprId {
    let ty = match &self.program.decls.get(&decl).kind {
      DeclKind::Variable(v) => v.ty,
      other => panic!("read of a {} declaration", other.kind_name()),
    };
    self.expr(ExprKind::Var(decl), ty)
  }

  pub fn binary(
    &mut self,
    op: BinOp,
    left: ExprId,
    right: ExprId,
    ty: TypeId,
  ) -> ExprId {
    self.expr(ExprKind::Binary { op, left, right }, ty)
  }

  pub fn stmt(
    &mut self,
    kind: StmtKind,
  ) -> StmtId {
    self.program.stmts.alloc(Stmt { kind })
  }

  pub fn ret(
    &mut self,
    value: Option<ExprId>,
  ) -> StmtId {
    self.stmt(StmtKind::Return(value))
  }

  pub fn compound(
    &mut self,
    children: Vec<StmtId>,
  ) -> StmtId {
    self.stmt(StmtKind::Compound(children))
  }

  pub fn assign(
    &mut self,
    target: ExprId,
    value: ExprId,
  ) -> StmtId {
    self.stmt(StmtKind::Assign { target, value })
  }

  pub fn if_stmt(
    &mut self,
    condition: ExprId,
    then_branch: StmtId,
    else_branch: Option<StmtId>,
  ) -> StmtId {
    self.stmt(StmtKind::If {
      condition,
      then_branch,
      else_branch,
    })
  }

  pub fn while_true(
    &mut self,
    body: StmtId,
  ) -> StmtId {
    let condition = self.bool_lit(true);
    self.stmt(StmtKind::While { condition, body })
  }

  /// A plain global function: static, non-receiving, non-foreign.
  pub fn function(
    &mut self,
    name: &str,
    params: Vec<DeclId>,
    return_type: TypeId,
    locals: Vec<DeclId>,
    body: StmtId,
  ) -> DeclId {
    self.function_decl(
      name,
      FunctionDecl {
        owner: None,
        can_receive: false,
        is_foreign: false,
        params,
        return_type,
        locals,
        body,
      },
    )
  }

  /// A function with explicit flags, for exercising the rejection paths.
  pub fn function_decl(
    &mut self,
    name: &str,
    func: FunctionDecl,
  ) -> DeclId {
    let name = self.symbols.intern(name);
    let id = self.program.decls.alloc(Decl {
      name,
      kind: DeclKind::Function(func),
    });
    self.program.scope.declarations.push(id);
    id
  }

  /// A non-function declaration in the global scope.
  pub fn scope_decl(
    &mut self,
    name: &str,
    kind: DeclKind,
  ) -> DeclId {
    let name = self.symbols.intern(name);
    let id = self.program.decls.alloc(Decl { name, kind });
    self.program.scope.declarations.push(id);
    id
  }

  pub fn emit(&self) -> Result<String, CodegenError> {
    emit_java(&self.program, &self.types, &self.symbols, &JobConfig::default())
  }

  pub fn emit_ok(&self) -> String {
    self.emit().expect("generation failed")
  }
}

pub fn count(
  haystack: &str,
  needle: &str,
) -> usize {
  haystack.matches(needle).count()
}
