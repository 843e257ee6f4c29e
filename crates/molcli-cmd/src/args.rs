//! Argument types
//!
//! Every command argument declares one [`ArgType`]. The completion engine
//! dispatches on the variant to decide which candidates to offer.

use std::fmt;
use std::sync::Arc;

/// Zero-argument function producing the current values of a dynamic enum
#[derive(Clone)]
pub struct ValueSupplier(Arc<dyn Fn() -> Vec<String> + Send + Sync>);

impl ValueSupplier {
    /// Wrap a supplier function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Vec<String> + Send + Sync + 'static,
    {
        ValueSupplier(Arc::new(f))
    }

    /// Call the supplier
    pub fn values(&self) -> Vec<String> {
        (self.0)()
    }
}

impl fmt::Debug for ValueSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueSupplier(..)")
    }
}

impl PartialEq for ValueSupplier {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// What a file path argument is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// A single existing file
    Open,
    /// One or more existing files
    OpenMany,
    /// A file to write
    Save,
    /// A directory
    Directory,
}

/// Flavors of object specifier arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecKind {
    /// A single model
    Model,
    /// Several models
    Models,
    /// A model id
    ModelId,
    /// A single surface
    Surface,
    /// Several surfaces
    Surfaces,
    /// A single density map
    DensityMap,
    /// Several density maps
    DensityMaps,
    /// General objects specifier, including named selectors and `& | ~`
    Objects,
}

impl SpecKind {
    /// Restricted to surface models
    pub fn is_surface(&self) -> bool {
        matches!(self, SpecKind::Surface | SpecKind::Surfaces)
    }

    /// Restricted to volume models
    pub fn is_density_map(&self) -> bool {
        matches!(self, SpecKind::DensityMap | SpecKind::DensityMaps)
    }

    /// Accepts named selectors and selector algebra
    pub fn allows_selectors(&self) -> bool {
        matches!(self, SpecKind::Objects)
    }

    fn describe(&self) -> &'static str {
        match self {
            SpecKind::Model => "a model specifier",
            SpecKind::Models => "a models specifier",
            SpecKind::ModelId => "a model id",
            SpecKind::Surface => "a surface specifier",
            SpecKind::Surfaces => "a surfaces specifier",
            SpecKind::DensityMap => "a density map specifier",
            SpecKind::DensityMaps => "a density maps specifier",
            SpecKind::Objects => "an objects specifier",
        }
    }
}

/// Declared type of a command argument
#[derive(Debug, Clone, PartialEq)]
pub enum ArgType {
    /// Flag keyword that takes no value
    NoArg,
    /// One of a fixed set of values
    Enum(Vec<String>),
    /// One of a set of values computed on demand
    DynamicEnum(ValueSupplier),
    /// `true` or `false`
    Bool,
    /// `on` or `off`
    OnOff,
    /// Comma-separated list of another type
    ListOf(Box<ArgType>),
    /// Named or hex color
    Color,
    /// File system path
    FilePath(PathKind),
    /// Axis vector
    Axis,
    /// Numeric value type (`int8`, `float32`, ...)
    ValueType,
    /// Drawing target letters (`a`, `c`, `s`, ...)
    TargetFlags,
    /// Named colormap
    Colormap,
    /// Any of several types
    Or(Vec<ArgType>),
    /// Object specifier
    Spec(SpecKind),
    /// Integer
    Int,
    /// Floating point number
    Float,
    /// Free text
    Text,
}

impl ArgType {
    /// Build an enum type from its values
    pub fn enum_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgType::Enum(values.into_iter().map(Into::into).collect())
    }

    /// Build a dynamic enum from a supplier function
    pub fn dynamic_enum<F>(f: F) -> Self
    where
        F: Fn() -> Vec<String> + Send + Sync + 'static,
    {
        ArgType::DynamicEnum(ValueSupplier::new(f))
    }

    /// Build a list type
    pub fn list_of(inner: ArgType) -> Self {
        ArgType::ListOf(Box::new(inner))
    }

    /// Build a disjunction type
    pub fn or(branches: impl IntoIterator<Item = ArgType>) -> Self {
        ArgType::Or(branches.into_iter().collect())
    }

    /// Lightweight tag identifying the variant
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgType::NoArg => ArgKind::NoArg,
            ArgType::Enum(_) => ArgKind::Enum,
            ArgType::DynamicEnum(_) => ArgKind::DynamicEnum,
            ArgType::Bool => ArgKind::Bool,
            ArgType::OnOff => ArgKind::OnOff,
            ArgType::ListOf(_) => ArgKind::ListOf,
            ArgType::Color => ArgKind::Color,
            ArgType::FilePath(kind) => ArgKind::FilePath(*kind),
            ArgType::Axis => ArgKind::Axis,
            ArgType::ValueType => ArgKind::ValueType,
            ArgType::TargetFlags => ArgKind::TargetFlags,
            ArgType::Colormap => ArgKind::Colormap,
            ArgType::Or(_) => ArgKind::Or,
            ArgType::Spec(kind) => ArgKind::Spec(*kind),
            ArgType::Int => ArgKind::Int,
            ArgType::Float => ArgKind::Float,
            ArgType::Text => ArgKind::Text,
        }
    }

    /// True for flag keywords
    pub fn is_noarg(&self) -> bool {
        matches!(self, ArgType::NoArg)
    }

    /// Human readable description used in command tooltips
    pub fn describe(&self) -> String {
        match self {
            ArgType::NoArg => "no value".to_string(),
            ArgType::Enum(values) => format!("one of {}", values.join(", ")),
            ArgType::DynamicEnum(_) => "one of the available names".to_string(),
            ArgType::Bool => "true or false".to_string(),
            ArgType::OnOff => "on or off".to_string(),
            ArgType::ListOf(inner) => format!("a list of {}", inner.describe()),
            ArgType::Color => "a color".to_string(),
            ArgType::FilePath(PathKind::Open) => "a file name".to_string(),
            ArgType::FilePath(PathKind::OpenMany) => "one or more file names".to_string(),
            ArgType::FilePath(PathKind::Save) => "a file name to write".to_string(),
            ArgType::FilePath(PathKind::Directory) => "a directory".to_string(),
            ArgType::Axis => "an axis vector".to_string(),
            ArgType::ValueType => "numeric value type".to_string(),
            ArgType::TargetFlags => "target flags".to_string(),
            ArgType::Colormap => "a colormap".to_string(),
            ArgType::Or(branches) => branches
                .iter()
                .map(ArgType::describe)
                .collect::<Vec<_>>()
                .join(" or "),
            ArgType::Spec(kind) => kind.describe().to_string(),
            ArgType::Int => "an integer".to_string(),
            ArgType::Float => "a number".to_string(),
            ArgType::Text => "a text string".to_string(),
        }
    }
}

/// Variant tag of an [`ArgType`], without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    NoArg,
    Enum,
    DynamicEnum,
    Bool,
    OnOff,
    ListOf,
    Color,
    FilePath(PathKind),
    Axis,
    ValueType,
    TargetFlags,
    Colormap,
    Or,
    Spec(SpecKind),
    Int,
    Float,
    Text,
}

/// Named argument definition
#[derive(Debug, Clone, PartialEq)]
pub struct ArgDef {
    /// Argument name
    pub name: String,
    /// Declared type
    pub arg: ArgType,
}

impl ArgDef {
    /// Create a new argument definition
    pub fn new(name: impl Into<String>, arg: ArgType) -> Self {
        ArgDef {
            name: name.into(),
            arg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_nested() {
        let ty = ArgType::or([ArgType::Color, ArgType::list_of(ArgType::enum_of(["x", "y"]))]);
        assert_eq!(ty.describe(), "a color or a list of one of x, y");
        assert_eq!(ArgType::Spec(SpecKind::Surfaces).describe(), "a surfaces specifier");
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ArgType::FilePath(PathKind::Save).kind(), ArgKind::FilePath(PathKind::Save));
        assert_eq!(ArgType::enum_of(["a"]).kind(), ArgKind::Enum);
        assert!(ArgType::NoArg.is_noarg());
    }

    #[test]
    fn test_supplier_identity() {
        let supplier = ValueSupplier::new(|| vec!["a".to_string()]);
        let same = supplier.clone();
        let other = ValueSupplier::new(|| vec!["a".to_string()]);
        assert_eq!(supplier, same);
        assert_ne!(supplier, other);
        assert_eq!(supplier.values(), vec!["a"]);
    }

    #[test]
    fn test_spec_kind_flags() {
        assert!(SpecKind::DensityMaps.is_density_map());
        assert!(SpecKind::Surface.is_surface());
        assert!(SpecKind::Objects.allows_selectors());
        assert!(!SpecKind::Models.allows_selectors());
    }
}
