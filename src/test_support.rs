//! Shared fixture config types for tests.

use crate::{FieldSpec, config_node};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("test.yml")
}

pub(crate) fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct InnerSectionConfig {
    #[serde(rename = "innerTest")]
    pub inner_test: String,
}

impl Default for InnerSectionConfig {
    fn default() -> Self {
        Self {
            inner_test: "innerTestContent".to_string(),
        }
    }
}

config_node! {
    InnerSectionConfig {
        inner_test: leaf(
            FieldSpec::new("inner_test")
                .rename("innerTest")
                .comments(&["Inner comment", "", "Seems to work"])
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CommentsConfig {
    pub test: String,
    pub test2: String,
    pub test3: String,
    pub test4: Option<InnerSectionConfig>,
    pub cc: i32,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            test: "something".to_string(),
            test2: "something2".to_string(),
            test3: "lastly".to_string(),
            test4: Some(InnerSectionConfig::default()),
            cc: 1,
        }
    }
}

config_node! {
    CommentsConfig {
        test: leaf(FieldSpec::new("test").comments(&["This is a comment", "This is another comment"])),
        test2: leaf(FieldSpec::new("test2")),
        test3: leaf(FieldSpec::new("test3").comments(&["This is a comment", "This is another comment"])),
        test4: section(FieldSpec::new("test4").comments(&[])),
        cc: leaf(FieldSpec::new("cc").comments(&[""])),
    }
}

pub(crate) const COMMENTS_FILE: &str = "\
# This is a comment
# This is another comment
test: \"something\"
test2: \"something2\"
# This is a comment
# This is another comment
test3: \"lastly\"
test4:
  # Inner comment

  # Seems to work
  innerTest: \"innerTestContent\"

cc: 1
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct IndentationConfig {
    pub test: String,
    pub test_section: Option<Box<IndentationConfig>>,
}

impl IndentationConfig {
    pub fn with_depth(depth: usize) -> Self {
        let mut config = Self::default();
        if depth > 0 {
            config.test_section = Some(Box::new(Self::with_depth(depth - 1)));
        }
        config
    }
}

impl Default for IndentationConfig {
    fn default() -> Self {
        Self {
            test: "something".to_string(),
            test_section: None,
        }
    }
}

config_node! {
    IndentationConfig {
        test: leaf(FieldSpec::new("test").comments(&["This is a comment", "This is another comment"])),
        test_section: section(FieldSpec::new("test_section")),
    }
}

pub(crate) const INDENTATION_FILE: &str = "\
# This is a comment
# This is another comment
test: \"something\"
test_section:
  # This is a comment
  # This is another comment
  test: \"something\"
  test_section:
    # This is a comment
    # This is another comment
    test: \"something\"
    test_section:
      # This is a comment
      # This is another comment
      test: \"something\"
      test_section:
        # This is a comment
        # This is another comment
        test: \"something\"
        test_section:
          # This is a comment
          # This is another comment
          test: \"something\"
";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct TypeCastingValues {
    pub test: String,
    pub test2: i32,
    pub test3: bool,
    pub test4: f64,
}

config_node! {
    TypeCastingValues {
        test: leaf(FieldSpec::new("test").on_creation("test")),
        test2: leaf(FieldSpec::new("test2").on_creation("2")),
        test3: leaf(FieldSpec::new("test3").on_creation("true")),
        test4: leaf(FieldSpec::new("test4").on_creation("1.25")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WithDefaultValues {
    pub test: String,
    pub test2: i32,
    pub test3: bool,
    pub test4: f64,
}

impl Default for WithDefaultValues {
    fn default() -> Self {
        Self {
            test: "default".to_string(),
            test2: 1,
            test3: false,
            test4: 1.0,
        }
    }
}

config_node! {
    WithDefaultValues {
        test: leaf(FieldSpec::new("test").on_creation("test")),
        test2: leaf(FieldSpec::new("test2").on_creation("2")),
        test3: leaf(FieldSpec::new("test3").on_creation("true")),
        test4: leaf(FieldSpec::new("test4").on_creation("1.25")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PersistenceConfig {
    pub test: String,
    pub test2: i32,
    pub test3: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            test: "something".to_string(),
            test2: 2,
            test3: true,
        }
    }
}

config_node! {
    PersistenceConfig {
        test: leaf(FieldSpec::new("test")),
        test2: leaf(FieldSpec::new("test2")),
        test3: leaf(FieldSpec::new("test3")),
    }
}

pub(crate) const PERSISTENCE_FILE: &str = "test: \"something\"\ntest2: 2\ntest3: true\n";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Level3 {
    pub depth: u32,
    pub enabled: bool,
}

config_node! {
    Level3 {
        depth: leaf(FieldSpec::new("depth").comments(&["Third level"]).on_creation("3")),
        enabled: leaf(FieldSpec::new("enabled").on_creation("true")),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Level2 {
    pub label: String,
    pub level3: Level3,
}

config_node! {
    Level2 {
        label: leaf(FieldSpec::new("label").comments(&["Second level"]).on_creation("middle")),
        level3: nested(FieldSpec::new("level3")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Level1 {
    pub name: String,
    pub level2: Option<Level2>,
}

impl Default for Level1 {
    fn default() -> Self {
        Self {
            name: String::new(),
            level2: Some(Level2::default()),
        }
    }
}

config_node! {
    Level1 {
        name: leaf(FieldSpec::new("name").comments(&["First level"]).on_creation("root")),
        level2: section(FieldSpec::new("level2")),
    }
}

pub(crate) const DEPTH_FILE: &str = "\
# First level
name: \"root\"
level2:
  # Second level
  label: \"middle\"
  level3:
    # Third level
    depth: 3
    enabled: true
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct BaseValues {
    pub id: String,
}

impl Default for BaseValues {
    fn default() -> Self {
        Self {
            id: "base".to_string(),
        }
    }
}

config_node! {
    BaseValues {
        id: leaf(FieldSpec::new("id").comments(&["Identifier"])),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DerivedValues {
    pub name: String,
    #[serde(flatten)]
    pub base: BaseValues,
}

impl Default for DerivedValues {
    fn default() -> Self {
        Self {
            name: "derived".to_string(),
            base: BaseValues::default(),
        }
    }
}

config_node! {
    DerivedValues {
        name: leaf(FieldSpec::new("name").comments(&["Display name"])),
        base: flatten(FieldSpec::new("base")),
    }
}
