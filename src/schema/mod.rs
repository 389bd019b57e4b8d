//! Field metadata for configuration types.
//!
//! A configuration type describes its own fields through [`ConfigNode`]:
//! every field is listed in declaration order together with a [`FieldSpec`]
//! carrying its logical name, comment lines and creation-time default.
//! Nested configuration sections are exposed as child nodes so the tree can
//! be walked without any runtime introspection.
//!
//! The [`config_node!`](crate::config_node) macro generates the impl from a
//! single table, which keeps the read-only and mutable views in sync.

mod creation;
mod walk;


pub use creation::apply_creation_values;
pub use walk::{FieldPath, FieldPaths, walk};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Static metadata for one configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Declared field name.
    pub ident: &'static str,
    /// Serialized name, when it differs from the declared one.
    pub rename: Option<&'static str>,
    /// Comment lines emitted above the field's key. An empty entry renders
    /// as a blank line.
    pub comments: &'static [&'static str],
    /// YAML literal assigned to the field when the config file is first created.
    pub on_creation: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(ident: &'static str) -> Self {
        Self {
            ident,
            rename: None,
            comments: &[],
            on_creation: None,
        }
    }

    pub const fn rename(mut self, name: &'static str) -> Self {
        self.rename = Some(name);
        self
    }

    pub const fn comments(mut self, comments: &'static [&'static str]) -> Self {
        self.comments = comments;
        self
    }

    pub const fn on_creation(mut self, literal: &'static str) -> Self {
        self.on_creation = Some(literal);
        self
    }

    /// The name this field is written under.
    pub fn logical_name(&self) -> &'static str {
        self.rename.unwrap_or(self.ident)
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

/// A configuration object or nested configuration section.
///
/// Implementations must list fields in the order serde serializes them and
/// must not form cycles through their child nodes.
pub trait ConfigNode {
    /// Read-only view of every field, in declaration order.
    fn fields(&self) -> Vec<FieldRef<'_>>;

    /// Mutable view of every field, in the same order as [`ConfigNode::fields`].
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

impl<T: ConfigNode + ?Sized> ConfigNode for Box<T> {
    fn fields(&self) -> Vec<FieldRef<'_>> {
        (**self).fields()
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        (**self).fields_mut()
    }
}

/// A configuration root: a node that can also be marshalled.
pub trait ConfigValues: ConfigNode + Serialize + DeserializeOwned {}

impl<T: ConfigNode + Serialize + DeserializeOwned> ConfigValues for T {}

/// What a field holds, as seen by the walker.
pub enum Child<'a> {
    /// Primitive, string, collection or map.
    Leaf,
    /// Nested section. `None` when the section is absent this cycle.
    Section(Option<&'a dyn ConfigNode>),
    /// Fields serialized inline at the parent's level.
    Flatten(&'a dyn ConfigNode),
}

/// Read-only reference to one field.
pub struct FieldRef<'a> {
    pub spec: FieldSpec,
    pub child: Child<'a>,
}

impl<'a> FieldRef<'a> {
    pub fn leaf(spec: FieldSpec) -> Self {
        Self {
            spec,
            child: Child::Leaf,
        }
    }

    pub fn section<T: ConfigNode>(spec: FieldSpec, value: Option<&'a T>) -> Self {
        Self {
            spec,
            child: Child::Section(value.map(|node| node as &dyn ConfigNode)),
        }
    }

    pub fn nested<T: ConfigNode>(spec: FieldSpec, value: &'a T) -> Self {
        Self {
            spec,
            child: Child::Section(Some(value as &dyn ConfigNode)),
        }
    }

    pub fn flatten<T: ConfigNode>(spec: FieldSpec, value: &'a T) -> Self {
        Self {
            spec,
            child: Child::Flatten(value),
        }
    }
}

/// A field value that can be overwritten from a YAML literal.
pub trait CreationValue {
    fn assign_literal(&mut self, literal: &str) -> Result<(), serde_yaml::Error>;
}

impl<T: DeserializeOwned> CreationValue for T {
    fn assign_literal(&mut self, literal: &str) -> Result<(), serde_yaml::Error> {
        *self = serde_yaml::from_str(literal)?;
        Ok(())
    }
}

/// An optional section slot.
pub trait SectionSlot: CreationValue {
    fn node_mut(&mut self) -> Option<&mut dyn ConfigNode>;
}

impl<T: ConfigNode + DeserializeOwned> SectionSlot for Option<T> {
    fn node_mut(&mut self) -> Option<&mut dyn ConfigNode> {
        self.as_mut().map(|node| node as &mut dyn ConfigNode)
    }
}

/// An always-present section slot.
pub trait NestedSlot: CreationValue {
    fn node_mut(&mut self) -> &mut dyn ConfigNode;
}

impl<T: ConfigNode + DeserializeOwned> NestedSlot for T {
    fn node_mut(&mut self) -> &mut dyn ConfigNode {
        self
    }
}

/// Mutable access to what a field holds.
pub enum SlotMut<'a> {
    Leaf(&'a mut dyn CreationValue),
    Section(&'a mut dyn SectionSlot),
    Nested(&'a mut dyn NestedSlot),
    Flatten(&'a mut dyn NestedSlot),
}

/// Mutable reference to one field.
pub struct FieldMut<'a> {
    pub spec: FieldSpec,
    pub slot: SlotMut<'a>,
}

impl<'a> FieldMut<'a> {
    pub fn leaf<T: DeserializeOwned + 'a>(spec: FieldSpec, value: &'a mut T) -> Self {
        Self {
            spec,
            slot: SlotMut::Leaf(value),
        }
    }

    pub fn section<T: ConfigNode + DeserializeOwned + 'a>(
        spec: FieldSpec,
        value: &'a mut Option<T>,
    ) -> Self {
        Self {
            spec,
            slot: SlotMut::Section(value),
        }
    }

    pub fn nested<T: ConfigNode + DeserializeOwned + 'a>(spec: FieldSpec, value: &'a mut T) -> Self {
        Self {
            spec,
            slot: SlotMut::Nested(value),
        }
    }

    pub fn flatten<T: ConfigNode + DeserializeOwned + 'a>(
        spec: FieldSpec,
        value: &'a mut T,
    ) -> Self {
        Self {
            spec,
            slot: SlotMut::Flatten(value),
        }
    }
}

/// Joins a logical path prefix and a field name with `.`.
pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Implements [`ConfigNode`] for a struct from a table of fields.
///
/// Each entry is `field: kind(spec)` where `kind` is one of
/// `leaf`, `section` (an `Option<T>`), `nested` (a `T`) or `flatten`
/// (a `T` marked `#[serde(flatten)]`). Entries must follow the struct's
/// declaration order.
///
/// An `on_creation` literal on a `section`, `nested` or `flatten` entry
/// replaces the whole value before the literals of its own fields are
/// applied. For `flatten` the literal is a mapping of the embedded fields.
///
/// ```
/// use commented_config::{FieldSpec, config_node};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Default, Serialize, Deserialize)]
/// #[serde(default)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// config_node! {
///     Server {
///         host: leaf(FieldSpec::new("host").comments(&["Interface to bind"])),
///         port: leaf(FieldSpec::new("port").on_creation("8080")),
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_node {
    (@ref leaf $place:expr, $spec:expr) => {
        $crate::FieldRef::leaf($spec)
    };
    (@ref section $place:expr, $spec:expr) => {
        $crate::FieldRef::section($spec, $place.as_ref())
    };
    (@ref nested $place:expr, $spec:expr) => {
        $crate::FieldRef::nested($spec, &$place)
    };
    (@ref flatten $place:expr, $spec:expr) => {
        $crate::FieldRef::flatten($spec, &$place)
    };
    (@mut leaf $place:expr, $spec:expr) => {
        $crate::FieldMut::leaf($spec, &mut $place)
    };
    (@mut section $place:expr, $spec:expr) => {
        $crate::FieldMut::section($spec, &mut $place)
    };
    (@mut nested $place:expr, $spec:expr) => {
        $crate::FieldMut::nested($spec, &mut $place)
    };
    (@mut flatten $place:expr, $spec:expr) => {
        $crate::FieldMut::flatten($spec, &mut $place)
    };
    ($ty:ty { $($field:ident : $kind:ident ( $spec:expr )),* $(,)? }) => {
        impl $crate::ConfigNode for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::FieldRef<'_>> {
                ::std::vec![$($crate::config_node!(@ref $kind self.$field, $spec)),*]
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::FieldMut<'_>> {
                ::std::vec![$($crate::config_node!(@mut $kind self.$field, $spec)),*]
            }
        }
    };
}
