use std::fmt;

#[derive(Debug, Clone)]
pub enum CodegenError {
  /// A construct the symbolic backend does not handle yet.
  Unsupported {
    context: String,
    construct: String,
  },
  /// An expression reached the lvalue emitter that cannot be assigned to.
  InvalidLvalue {
    expression: String,
  },
  /// A type shape with no operator-table constructor was registered.
  RegistryShape {
    type_repr: String,
  },
}

impl CodegenError {
  pub fn unsupported(
    context: impl Into<String>,
    construct: impl Into<String>,
  ) -> Self {
    Self::Unsupported {
      context: context.into(),
      construct: construct.into(),
    }
  }

  pub fn invalid_lvalue(expression: impl Into<String>) -> Self {
    Self::InvalidLvalue {
      expression: expression.into(),
    }
  }

  pub fn registry_shape(type_repr: impl Into<String>) -> Self {
    Self::RegistryShape {
      type_repr: type_repr.into(),
    }
  }
}

impl fmt::Display for CodegenError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      CodegenError::Unsupported { context, construct } => {
        write!(f, "SYM0001 Unsupported construct in {}: {}", context, construct)
      },
      CodegenError::InvalidLvalue { expression } => {
        write!(f, "SYM0002 Invalid assignment target: {}", expression)
      },
      CodegenError::RegistryShape { type_repr } => {
        write!(f, "SYM0003 No operator table for type shape: {}", type_repr)
      },
    }
  }
}

impl std::error::Error for CodegenError {}
