use serde::{Deserialize, Serialize};

/// Configuration for a single code-generation job.
///
/// A job owns its own name mint and operator-table registry; configs must
/// not be shared across independent jobs expecting stable identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
  /// File name the caller writes the produced artifact to.
  pub file_name: String,
  /// Name of the generated top-level Java class.
  pub main_class_name: String,
}

impl JobConfig {
  pub fn new(
    file_name: impl Into<String>,
    main_class_name: impl Into<String>,
  ) -> Self {
    Self {
      file_name: file_name.into(),
      main_class_name: main_class_name.into(),
    }
  }
}

impl Default for JobConfig {
  fn default() -> Self {
    Self {
      file_name: "out.java".to_string(),
      main_class_name: "Main".to_string(),
    }
  }
}
