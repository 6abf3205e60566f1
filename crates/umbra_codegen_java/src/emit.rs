use std::fmt::Write;

use umbra_config::JobConfig;
use umbra_ir::{BinOp, DeclId, DeclKind, ExprId, ExprKind, FunctionDecl, Program, StmtId, StmtKind};
use umbra_type::{
  symbol::SymbolTable,
  types::{Type, TypeId, TypeStore},
};

use crate::context::{CompilationContext, FlowContext, BDD_HANDLE, RETURN_ACCUMULATOR};
use crate::errors::CodegenError;
use crate::flow::{can_jump_out, must_jump_out};
use crate::lift::symbolic_type;
use crate::registry::OpsRegistry;

/// Emit the whole compilation unit as one Java class whose methods execute
/// symbolically: every value is a value summary and every side effect is
/// guarded by the live path constraint.
pub fn emit_java(
  program: &Program,
  types: &TypeStore,
  symbols: &SymbolTable,
  config: &JobConfig,
) -> Result<String, CodegenError> {
  JavaEmitter::new(program, types, symbols, config).emit()
}

/// An open lvalue-mutation context. `temp` names the guarded snapshot of
/// the destination; the closers write the mutated snapshot back while
/// preserving the destination on the complement path set.
struct MutationToken {
  temp: String,
  closers: Vec<String>,
}

/// Symbolic Java emitter for typed IR programs.
pub struct JavaEmitter<'a> {
  program: &'a Program,
  types: &'a TypeStore,
  symbols: &'a SymbolTable,
  config: &'a JobConfig,
  ctx: CompilationContext,
  registry: OpsRegistry,
  output: String,
  depth: usize,
}

impl<'a> JavaEmitter<'a> {
  pub fn new(
    program: &'a Program,
    types: &'a TypeStore,
    symbols: &'a SymbolTable,
    config: &'a JobConfig,
  ) -> Self {
    Self {
      program,
      types,
      symbols,
      config,
      ctx: CompilationContext::new(),
      registry: OpsRegistry::new(),
      output: String::new(),
      depth: 0,
    }
  }

  /// Run the generation. The artifact is built in memory, so a failing
  /// generation returns `Err` and yields no partial output.
  pub fn emit(mut self) -> Result<String, CodegenError> {
    if std::env::var("UMBRA_VERBOSE").is_ok() {
      eprintln!(
        "[EMIT] {} declarations in global scope",
        self.program.scope.declarations.len()
      );
    }

    self.line("// Imports of the symbolic runtime are inserted here.");
    self.line(&format!("public class {} {{", self.config.main_class_name));
    self.depth += 1;

    let declarations = self.program.scope.declarations.clone();
    for decl_id in declarations {
      self.emit_decl(decl_id)?;
    }

    self.emit_operator_tables();

    self.depth -= 1;
    self.line("}");
    Ok(self.output)
  }

  fn line(
    &mut self,
    text: &str,
  ) {
    writeln!(self.output, "{:indent$}{}", "", text, indent = self.depth * 4).unwrap();
  }

  fn blank(&mut self) {
    writeln!(self.output).unwrap();
  }

  /// Canonical static type of an expression.
  fn expr_ty(
    &self,
    id: ExprId,
  ) -> TypeId {
    self.types.canonical(self.program.exprs.get(&id).ty)
  }

  /// Canonical type of a variable declaration.
  fn decl_var_ty(
    &self,
    id: DeclId,
  ) -> TypeId {
    match &self.program.decls.get(&id).kind {
      DeclKind::Variable(v) => self.types.canonical(v.ty),
      other => panic!("ICE: declaration used as a variable is a {}", other.kind_name()),
    }
  }

  /// Emittable identifier for a variable declaration.
  fn var_name(
    &self,
    id: DeclId,
  ) -> String {
    CompilationContext::var(self.symbols.get(&self.program.decls.get(&id).name))
  }

  /// Register the operator table for `ty` and return its constant name.
  fn ops_name(
    &mut self,
    ty: TypeId,
  ) -> Result<String, CodegenError> {
    Ok(self.registry.register(self.types, ty)?.constant_name())
  }

  fn emit_decl(
    &mut self,
    id: DeclId,
  ) -> Result<(), CodegenError> {
    let decl = self.program.decls.get(&id);
    match &decl.kind {
      DeclKind::Function(func) => {
        if func.is_foreign {
          return Err(CodegenError::unsupported("function declaration", "foreign function"));
        }
        if func.owner.is_some() {
          return Err(CodegenError::unsupported(
            "function declaration",
            "non-static member function",
          ));
        }
        if func.can_receive {
          return Err(CodegenError::unsupported(
            "function declaration",
            "receive-capable function",
          ));
        }
        let source_name = self.symbols.get(&decl.name).to_string();
        self.emit_function(id, &source_name, func)
      },
      other => {
        let text = format!(
          "// SKIP: {} declaration {}",
          other.kind_name(),
          self.symbols.get(&decl.name)
        );
        self.line(&text);
        Ok(())
      },
    }
  }

  fn emit_function(
    &mut self,
    id: DeclId,
    source_name: &str,
    func: &FunctionDecl,
  ) -> Result<(), CodegenError> {
    let name = self.ctx.name_for_decl(id, source_name);
    if std::env::var("UMBRA_VERBOSE").is_ok() {
      eprintln!("[EMIT] function {}", name);
    }

    let flow = FlowContext::function(self.ctx.fresh_pc_scope());

    let ret_ty = self.types.canonical(func.return_type);
    let returns_value = !matches!(self.types.get(&ret_ty), Type::Null);
    let ret_text = symbolic_type(self.types, ret_ty, false)?;

    // The path constraint is always the leading parameter.
    let mut params = vec![format!("Bdd {}", flow.pc.pc_var)];
    for &param in &func.params {
      let ty = self.decl_var_ty(param);
      let text = symbolic_type(self.types, ty, true)?;
      params.push(format!("{} {}", text, self.var_name(param)));
    }
    self.line(&format!("static {} {}({}) {{", ret_text, name, params.join(", ")));
    self.depth += 1;

    for &local in &func.locals {
      let ty = self.decl_var_ty(local);
      let text = symbolic_type(self.types, ty, true)?;
      let default = self.default_value(ty, &flow)?;
      let var = self.var_name(local);
      self.line(&format!("{} {} = {};", text, var, default));
    }

    if returns_value {
      let ops = self.ops_name(ret_ty)?;
      self.line(&format!("{} {} = {}.empty();", ret_text, RETURN_ACCUMULATOR, ops));
    }

    self.emit_stmt(&flow, func.body)?;

    if returns_value {
      self.line(&format!("return {};", RETURN_ACCUMULATOR));
    }
    self.depth -= 1;
    self.line("}");
    self.blank();
    Ok(())
  }

  // ---------------------------------------------------------------------
  // Statements
  // ---------------------------------------------------------------------

  fn emit_stmt(
    &mut self,
    flow: &FlowContext,
    id: StmtId,
  ) -> Result<(), CodegenError> {
    match &self.program.stmts.get(&id).kind {
      StmtKind::Assign { target, value } => {
        let (target, value) = (*target, *value);
        if self.expr_ty(target) != self.expr_ty(value) {
          return Err(CodegenError::unsupported("assignment", "coercion between distinct types"));
        }
        let rhs = self.emit_expr(flow, value)?;
        self.emit_write(flow, target, &rhs)
      },
      StmtKind::MoveAssign { target, source } => {
        let (target, source) = (*target, *source);
        let source_ty = self.decl_var_ty(source);
        if self.expr_ty(target) != source_ty {
          return Err(CodegenError::unsupported(
            "move assignment",
            "coercion between distinct types",
          ));
        }
        let ops = self.ops_name(source_ty)?;
        let rhs = format!("{}.guard({}, {})", ops, self.var_name(source), flow.pc.pc_var);
        self.emit_write(flow, target, &rhs)
      },
      StmtKind::Return(value) => {
        if let Some(value) = *value {
          let ops = self.ops_name(self.expr_ty(value))?;
          let guarded = self.emit_expr(flow, value)?;
          self.line(&format!(
            "{} = {}.merge2({}, {});",
            RETURN_ACCUMULATOR, ops, RETURN_ACCUMULATOR, guarded
          ));
        }
        self.kill_pc(flow);
        if let Some(loop_scope) = &flow.loop_scope {
          self.line(&format!("{} = true;", loop_scope.early_ret_flag));
        }
        self.set_jumped_out(flow);
        Ok(())
      },
      StmtKind::Break => {
        let loop_scope = match &flow.loop_scope {
          Some(loop_scope) => loop_scope.clone(),
          None => panic!("ICE: break statement outside of a loop scope"),
        };
        self.line(&format!("{}.add({});", loop_scope.exits_list, flow.pc.pc_var));
        self.set_jumped_out(flow);
        self.kill_pc(flow);
        Ok(())
      },
      StmtKind::Continue => {
        // The loop header re-tests the loop pc, so killing the pc is all a
        // continue needs; nothing joins the exits list.
        if flow.loop_scope.is_none() {
          panic!("ICE: continue statement outside of a loop scope");
        }
        self.set_jumped_out(flow);
        self.kill_pc(flow);
        Ok(())
      },
      StmtKind::Compound(children) => {
        let mut opened = 0usize;
        for &child in children {
          self.emit_stmt(flow, child)?;
          if must_jump_out(&self.program.stmts, child) {
            break;
          }
          if can_jump_out(&self.program.stmts, child) {
            self.line(&format!("if (!{}.isConstFalse({})) {{", BDD_HANDLE, flow.pc.pc_var));
            self.depth += 1;
            opened += 1;
          }
        }
        for _ in 0..opened {
          self.depth -= 1;
          self.line("}");
        }
        Ok(())
      },
      StmtKind::While { condition, body } => self.emit_while(flow, *condition, *body),
      StmtKind::If {
        condition,
        then_branch,
        else_branch,
      } => self.emit_if(flow, *condition, *then_branch, *else_branch),
      StmtKind::Call { callee, args } => {
        let callee = *callee;
        let decl = self.program.decls.get(&callee);
        let func = match &decl.kind {
          DeclKind::Function(func) => func,
          other => {
            return Err(CodegenError::unsupported(
              "function call",
              format!("callee is a {}", other.kind_name()),
            ));
          },
        };
        if func.owner.is_some() {
          return Err(CodegenError::unsupported("function call", "non-static member callee"));
        }
        if func.can_receive {
          return Err(CodegenError::unsupported("function call", "receive-capable callee"));
        }
        let source_name = self.symbols.get(&decl.name).to_string();
        let name = self.ctx.name_for_decl(callee, &source_name);
        // The current path constraint rides along as the first argument.
        let mut parts = vec![flow.pc.pc_var.clone()];
        for &arg in args {
          parts.push(self.emit_expr(flow, arg)?);
        }
        self.line(&format!("{}({});", name, parts.join(", ")));
        Ok(())
      },
      other => {
        let text = format!("// SKIP: {} statement", other.kind_name());
        self.line(&text);
        Ok(())
      },
    }
  }

  fn emit_while(
    &mut self,
    flow: &FlowContext,
    condition: ExprId,
    body: StmtId,
  ) -> Result<(), CodegenError> {
    // Loop normalisation is required to have reduced the condition to a
    // literal true; everything else is malformed input.
    let cond = self.program.exprs.get(&condition);
    if !matches!(cond.kind, ExprKind::BoolLit(true)) {
      return Err(CodegenError::unsupported(
        "while statement",
        "loop condition must be the literal true",
      ));
    }

    let loop_scope = self.ctx.fresh_loop_scope();
    let inner = FlowContext::in_loop(self.ctx.fresh_pc_scope(), loop_scope.clone());

    self.line(&format!("List<Bdd> {} = new ArrayList<>();", loop_scope.exits_list));
    self.line(&format!("boolean {} = false;", loop_scope.early_ret_flag));
    self.line(&format!("Bdd {} = {};", inner.pc.pc_var, flow.pc.pc_var));
    self.line(&format!("while (!{}.isConstFalse({})) {{", BDD_HANDLE, inner.pc.pc_var));
    self.depth += 1;
    self.emit_stmt(&inner, body)?;
    self.depth -= 1;
    self.line("}");

    // Paths that returned inside the loop stay dead; the survivors are
    // exactly the break-out predicates.
    self.line(&format!("if ({}) {{", loop_scope.early_ret_flag));
    self.depth += 1;
    self.line(&format!(
      "{} = {}.orMany({});",
      flow.pc.pc_var, BDD_HANDLE, loop_scope.exits_list
    ));
    self.set_jumped_out(flow);
    self.depth -= 1;
    self.line("}");
    Ok(())
  }

  fn emit_if(
    &mut self,
    flow: &FlowContext,
    condition: ExprId,
    then_branch: StmtId,
    else_branch: Option<StmtId>,
  ) -> Result<(), CodegenError> {
    let cond_ty = self.expr_ty(condition);
    if !matches!(self.types.get(&cond_ty), Type::Bool) {
      return Err(CodegenError::unsupported("if statement", "non-boolean condition"));
    }

    let cond_text = self.emit_expr(flow, condition)?;
    let cond_temp = self.ctx.fresh_temp_var();
    self.line(&format!("PrimVS<Bdd, Boolean> {} = {};", cond_temp, cond_text));

    let then_pc = self.ctx.fresh_pc_scope();
    let then_scope = self.ctx.fresh_branch_scope();
    let else_pc = self.ctx.fresh_pc_scope();
    let else_scope = self.ctx.fresh_branch_scope();

    let then_pc_var = then_pc.pc_var.clone();
    let then_flag = then_scope.jumped_out_flag.clone();
    let else_pc_var = else_pc.pc_var.clone();
    let else_flag = else_scope.jumped_out_flag.clone();

    self.line(&format!("Bdd {} = {}.trueCond({});", then_pc_var, BDD_HANDLE, cond_temp));
    self.line(&format!("boolean {} = false;", then_flag));
    self.line(&format!("Bdd {} = {}.falseCond({});", else_pc_var, BDD_HANDLE, cond_temp));
    self.line(&format!("boolean {} = false;", else_flag));

    let then_ctx = FlowContext::branch(then_pc, then_scope, flow);
    self.line(&format!("if (!{}.isConstFalse({})) {{", BDD_HANDLE, then_pc_var));
    self.depth += 1;
    self.emit_stmt(&then_ctx, then_branch)?;
    self.depth -= 1;
    self.line("}");

    if let Some(else_branch) = else_branch {
      let else_ctx = FlowContext::branch(else_pc, else_scope, flow);
      self.line(&format!("if (!{}.isConstFalse({})) {{", BDD_HANDLE, else_pc_var));
      self.depth += 1;
      self.emit_stmt(&else_ctx, else_branch)?;
      self.depth -= 1;
      self.line("}");
    }

    // Adopt the branch kills upward: when either branch escaped, the
    // parent's live set is whatever survives in the two branch pcs.
    self.line(&format!("if ({} || {}) {{", then_flag, else_flag));
    self.depth += 1;
    self.line(&format!(
      "{} = {}.or({}, {});",
      flow.pc.pc_var, BDD_HANDLE, then_pc_var, else_pc_var
    ));
    self.set_jumped_out(flow);
    self.depth -= 1;
    self.line("}");
    Ok(())
  }

  fn kill_pc(
    &mut self,
    flow: &FlowContext,
  ) {
    self.line(&format!("{} = {}.constFalse();", flow.pc.pc_var, BDD_HANDLE));
  }

  fn set_jumped_out(
    &mut self,
    flow: &FlowContext,
  ) {
    if let Some(branch) = &flow.branch_scope {
      self.line(&format!("{} = true;", branch.jumped_out_flag));
    }
  }

  // ---------------------------------------------------------------------
  // Lvalue mutation contexts
  // ---------------------------------------------------------------------

  /// Assign `rhs` to `target` through a mutation context.
  fn emit_write(
    &mut self,
    flow: &FlowContext,
    target: ExprId,
    rhs: &str,
  ) -> Result<(), CodegenError> {
    let token = self.open_mutation(flow, target, false)?;
    self.line(&format!("{} = {};", token.temp, rhs));
    self.close_mutation(token);
    Ok(())
  }

  /// Open a mutation context for `lvalue`: emit the guarded-snapshot
  /// prologue and return a token naming the writable temporary. The
  /// matching [`Self::close_mutation`] emits the write-back chain,
  /// innermost container first.
  fn open_mutation(
    &mut self,
    flow: &FlowContext,
    lvalue: ExprId,
    need_original: bool,
  ) -> Result<MutationToken, CodegenError> {
    let expr = self.program.exprs.get(&lvalue);
    let ty = self.types.canonical(expr.ty);
    match &expr.kind {
      ExprKind::Var(decl) => {
        let var = self.var_name(*decl);
        let sym = symbolic_type(self.types, ty, true)?;
        let ops = self.ops_name(ty)?;
        let temp = self.ctx.fresh_temp_var();
        self.line(&format!(
          "{} {} = {}.guard({}, {});",
          sym, temp, ops, var, flow.pc.pc_var
        ));
        // Only the live path set's slice of the variable is overwritten;
        // the complement keeps its old values.
        let writeback = format!(
          "{} = {}.merge2({}.guard({}, {}.not({})), {});",
          var, ops, ops, var, BDD_HANDLE, flow.pc.pc_var, temp
        );
        Ok(MutationToken {
          temp,
          closers: vec![writeback],
        })
      },
      ExprKind::MapGet { map, key } => {
        let (map, key) = (*map, *key);
        let container_ty = self.expr_ty(map);
        let outer = self.open_mutation(flow, map, true)?;
        let ops = self.ops_name(container_ty)?;

        let key_text = self.emit_expr(flow, key)?;
        let key_sym = symbolic_type(self.types, self.expr_ty(key), true)?;
        let index = self.ctx.fresh_temp_var();
        self.line(&format!("{} {} = {};", key_sym, index, key_text));

        let value_sym = symbolic_type(self.types, ty, true)?;
        let value = self.ctx.fresh_temp_var();
        if need_original {
          self.line(&format!(
            "{} {} = unwrapOrThrow({}.get({}, {}));",
            value_sym, value, ops, outer.temp, index
          ));
        } else {
          self.line(&format!("{} {};", value_sym, value));
        }

        let mut closers = vec![format!(
          "{} = {}.put({}, {}, {});",
          outer.temp, ops, outer.temp, index, value
        )];
        closers.extend(outer.closers);
        Ok(MutationToken { temp: value, closers })
      },
      ExprKind::SeqGet { seq, index } => {
        let (seq, index_expr) = (*seq, *index);
        let container_ty = self.expr_ty(seq);
        let outer = self.open_mutation(flow, seq, true)?;
        let ops = self.ops_name(container_ty)?;

        let index_text = self.emit_expr(flow, index_expr)?;
        let index_sym = symbolic_type(self.types, self.expr_ty(index_expr), true)?;
        let index = self.ctx.fresh_temp_var();
        self.line(&format!("{} {} = {};", index_sym, index, index_text));

        let value_sym = symbolic_type(self.types, ty, true)?;
        let value = self.ctx.fresh_temp_var();
        if need_original {
          self.line(&format!(
            "{} {} = unwrapOrThrow({}.get({}, {}));",
            value_sym, value, ops, outer.temp, index
          ));
        } else {
          self.line(&format!("{} {};", value_sym, value));
        }

        // set is partial: out-of-bounds writes surface at runtime.
        let mut closers = vec![format!(
          "{} = unwrapOrThrow({}.set({}, {}, {}));",
          outer.temp, ops, outer.temp, index, value
        )];
        closers.extend(outer.closers);
        Ok(MutationToken { temp: value, closers })
      },
      ExprKind::TupleGet { .. } => Err(CodegenError::unsupported("assignment target", "tuple access")),
      ExprKind::FieldGet { .. } => Err(CodegenError::unsupported("assignment target", "named tuple access")),
      other => Err(CodegenError::invalid_lvalue(other.kind_name())),
    }
  }

  fn close_mutation(
    &mut self,
    token: MutationToken,
  ) {
    for closer in token.closers {
      self.line(&closer);
    }
  }

  // ---------------------------------------------------------------------
  // Expressions
  // ---------------------------------------------------------------------

  /// Produce a Java expression whose runtime value is the symbolic lifting
  /// of `id`, guarded by the current path constraint. Never writes lines.
  fn emit_expr(
    &mut self,
    flow: &FlowContext,
    id: ExprId,
  ) -> Result<String, CodegenError> {
    let expr = self.program.exprs.get(&id);
    let ty = self.types.canonical(expr.ty);
    match &expr.kind {
      ExprKind::Clone(inner) => self.emit_expr(flow, *inner),
      ExprKind::BoolLit(value) => self.guarded_literal(ty, &value.to_string(), flow),
      ExprKind::IntLit(value) => self.guarded_literal(ty, &value.to_string(), flow),
      ExprKind::FloatLit(value) => self.guarded_literal(ty, &format!("{}f", value), flow),
      ExprKind::Default => self.default_value(ty, flow),
      ExprKind::Var(decl) | ExprKind::LinearRef(decl) => {
        let ops = self.ops_name(ty)?;
        Ok(format!("{}.guard({}, {})", ops, self.var_name(*decl), flow.pc.pc_var))
      },
      ExprKind::MapGet { map, key } => {
        let (map, key) = (*map, *key);
        let ops = self.ops_name(self.expr_ty(map))?;
        let container = self.emit_expr(flow, map)?;
        let index = self.emit_expr(flow, key)?;
        // The container was guarded at its own emission; re-guarding the
        // lookup would double-restrict it.
        Ok(format!("unwrapOrThrow({}.get({}, {}))", ops, container, index))
      },
      ExprKind::SeqGet { seq, index } => {
        let (seq, index) = (*seq, *index);
        let ops = self.ops_name(self.expr_ty(seq))?;
        let container = self.emit_expr(flow, seq)?;
        let index = self.emit_expr(flow, index)?;
        Ok(format!("unwrapOrThrow({}.get({}, {}))", ops, container, index))
      },
      ExprKind::Binary { op, left, right } => self.emit_binary(flow, *op, *left, *right),
      other => Ok(format!("/* SKIP: {} expression */", other.kind_name())),
    }
  }

  fn guarded_literal(
    &mut self,
    ty: TypeId,
    literal: &str,
    flow: &FlowContext,
  ) -> Result<String, CodegenError> {
    let sym = symbolic_type(self.types, ty, true)?;
    let ops = self.ops_name(ty)?;
    Ok(format!(
      "{}.guard(new {}({}, {}), {})",
      ops, sym, BDD_HANDLE, literal, flow.pc.pc_var
    ))
  }

  /// The symbolic default of `ty`, guarded by the current path constraint.
  fn default_value(
    &mut self,
    ty: TypeId,
    flow: &FlowContext,
  ) -> Result<String, CodegenError> {
    let ty = self.types.canonical(ty);
    match self.types.get(&ty) {
      Type::Bool | Type::Int | Type::Float | Type::Seq(_) | Type::Map { .. } => {},
      other => {
        return Err(CodegenError::unsupported("default value", format!("{:?}", other)));
      },
    }
    let ops = self.ops_name(ty)?;
    let inner = match self.types.get(&ty) {
      Type::Bool => format!("new PrimVS<Bdd, Boolean>({}, false)", BDD_HANDLE),
      Type::Int => format!("new PrimVS<Bdd, Integer>({}, 0)", BDD_HANDLE),
      Type::Float => format!("new PrimVS<Bdd, Float>({}, 0.0f)", BDD_HANDLE),
      _ => format!("{}.empty()", ops),
    };
    Ok(format!("{}.guard({}, {})", ops, inner, flow.pc.pc_var))
  }

  fn emit_binary(
    &mut self,
    flow: &FlowContext,
    op: BinOp,
    left: ExprId,
    right: ExprId,
  ) -> Result<String, CodegenError> {
    for operand in [left, right] {
      let ty = self.expr_ty(operand);
      if !matches!(self.types.get(&ty), Type::Bool | Type::Int | Type::Float) {
        return Err(CodegenError::unsupported("binary operation", "non-primitive operand"));
      }
    }
    let symbol = match op {
      BinOp::Add => "+",
      BinOp::Sub => "-",
      BinOp::Mul => "*",
      BinOp::Div => "/",
      BinOp::Lt => "<",
      BinOp::Le => "<=",
      BinOp::Gt => ">",
      BinOp::Ge => ">=",
      BinOp::And => "&&",
      BinOp::Or => "||",
      BinOp::Eq | BinOp::Neq => {
        return Err(CodegenError::unsupported(
          "binary operation",
          "equality over value summaries",
        ));
      },
    };
    let lhs = self.emit_expr(flow, left)?;
    let rhs = self.emit_expr(flow, right)?;
    Ok(format!(
      "({}).map2({}, {}, (a, b) -> a {} b)",
      lhs, rhs, BDD_HANDLE, symbol
    ))
  }

  // ---------------------------------------------------------------------
  // Epilogue
  // ---------------------------------------------------------------------

  /// Dump the operator-table constants in registration order, which keeps
  /// every definition ahead of its uses.
  fn emit_operator_tables(&mut self) {
    if self.registry.is_empty() {
      return;
    }
    let entries: Vec<(String, String)> = self
      .registry
      .entries()
      .iter()
      .map(|entry| (entry.ops_type.clone(), entry.ctor.clone()))
      .collect();

    self.line("// Operator tables, one per distinct type shape.");
    for (index, (ops_type, ctor)) in entries.iter().enumerate() {
      self.line(&format!("private static final {} ops_{} = {};", ops_type, index, ctor));
    }
  }
}
