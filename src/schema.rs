//! Schema model: the resolved, language-agnostic form of one type
//! declaration.
//!
//! Values here are plain data. They are built once by the resolver and never
//! mutated afterwards; the only behavior is shape predicates and the
//! canonical-name derivation used by [`Type::new`].

// =============================================================================
// Type Prefixes
// =============================================================================

/// One layer of indirection or collection wrapped around a base type shape.
///
/// Prefixes are recorded outermost-first: `*[]T` stores
/// `[Pointer, Slice]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePrefix {
    /// Pointer indirection: `*T`
    Pointer,
    /// Unbounded sequence: `[]T`
    Slice,
    /// Fixed-size array of the given length: `[N]T`
    Array(usize),
}

/// Prefix classification, derivable from the stored value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePrefixKind {
    Pointer,
    Slice,
    Array,
}

impl TypePrefix {
    /// Classifies this prefix.
    #[inline]
    pub const fn kind(&self) -> TypePrefixKind {
        match self {
            TypePrefix::Pointer => TypePrefixKind::Pointer,
            TypePrefix::Slice => TypePrefixKind::Slice,
            TypePrefix::Array(_) => TypePrefixKind::Array,
        }
    }

    /// Returns the array length for fixed-size array prefixes.
    #[inline]
    pub const fn array_len(&self) -> Option<usize> {
        match self {
            TypePrefix::Array(n) => Some(*n),
            _ => None,
        }
    }
}

// =============================================================================
// Canonical Type Identity
// =============================================================================

/// Canonical identity of a named type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Type {
    /// Canonical fully-qualified name, e.g. `xxx/yy.Zzz`, or a bare
    /// primitive name such as `string`.
    pub underlying: String,
    /// Package id, e.g. `xxx/yy`. Empty for primitives/builtins.
    pub pkg_id: String,
    /// Last package segment joined with the type name, e.g. `yy.Zzz`.
    pub pkg_plus_name: String,
    /// Bare type name, e.g. `Zzz`.
    pub type_name: String,
}

impl Type {
    /// Builds a type identity, deriving `pkg_id` and `pkg_plus_name` from
    /// the canonical name. Every construction goes through here so the
    /// derived parts can never be stale.
    pub fn new(type_name: impl Into<String>, underlying: impl Into<String>) -> Self {
        let underlying = underlying.into();
        let (pkg_id, pkg_plus_name) = split_canonical(&underlying);
        Self {
            underlying,
            pkg_id,
            pkg_plus_name,
            type_name: type_name.into(),
        }
    }
}

/// Splits a canonical fully-qualified name into `(pkg_id, pkg_plus_name)`.
///
/// Pure and total: primitives and unresolved bare names yield two empty
/// strings; `pkg.Name` forms without a path yield the package name and the
/// input; slash-separated paths rejoin everything before the final segment
/// and append the final segment's package part.
pub fn split_canonical(underlying: &str) -> (String, String) {
    let segments: Vec<&str> = underlying.split('/').collect();
    if segments.len() == 1 {
        return match underlying.split_once('.') {
            Some((pkg, _)) => (pkg.to_string(), underlying.to_string()),
            None => (String::new(), String::new()),
        };
    }

    let pkg_plus_name = segments[segments.len() - 1];
    let pkg_short = pkg_plus_name
        .split_once('.')
        .map_or(pkg_plus_name, |(pkg, _)| pkg);
    let mut pkg_id = segments[..segments.len() - 1].join("/");
    pkg_id.push('/');
    pkg_id.push_str(pkg_short);
    (pkg_id, pkg_plus_name.to_string())
}

// =============================================================================
// Resolved Shapes
// =============================================================================

/// The resolved form of one top-level type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    /// Declared identifier.
    pub name: String,
    /// Ordered fields, for struct and interface declarations.
    pub fields: Vec<Field>,
    /// Identity of the declared type itself.
    pub typ: Option<Type>,
    /// Present iff the declared shape is a function signature.
    pub func: Option<Func>,
    /// Present iff the declared shape (after prefixes) is a map.
    pub map: Option<Map>,
    /// True iff the declaration is an interface.
    pub is_interface: bool,
    /// Prefixes stripped from the declared expression, outermost first.
    pub type_prefixes: Vec<TypePrefix>,
    /// Literal doc/trailing comment text attached to the declaration.
    pub comment: Vec<String>,
}

impl Schema {
    /// Returns whether the schema resolved to a function signature.
    #[inline]
    pub fn is_func(&self) -> bool {
        self.func.is_some()
    }

    /// Returns whether the schema resolved to a map.
    #[inline]
    pub fn is_map(&self) -> bool {
        self.map.is_some()
    }
}

/// One struct field, interface member, function parameter, or function
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Field {
    /// Member name; inferred for embedded members, empty for unnamed
    /// parameters/results and map key/value positions.
    pub name: String,
    /// Identity of the field's (possibly prefixed) named type.
    pub typ: Option<Type>,
    /// True when the type is an inline struct literal.
    pub is_untitled_struct: bool,
    /// True when the type is an inline interface literal.
    pub is_untitled_interface: bool,
    /// Parsed tag entries, in source order.
    pub tags: Vec<Tag>,
    /// Literal doc/trailing comment text attached to the member.
    pub comment: Vec<String>,
    /// Present iff the field's shape is a function signature.
    pub func: Option<Func>,
    /// Present iff the field's shape is a map.
    pub map: Option<Map>,
    /// Prefixes stripped before reaching the base shape, outermost first.
    pub type_prefixes: Vec<TypePrefix>,
    /// Resolved anonymous shape; only for untitled structs/interfaces that
    /// declare at least one member.
    pub schema: Option<Box<Schema>>,
}

impl Field {
    /// Returns whether the field resolved to a function signature.
    #[inline]
    pub fn is_func(&self) -> bool {
        self.func.is_some()
    }

    /// Returns whether the field resolved to a map.
    #[inline]
    pub fn is_map(&self) -> bool {
        self.map.is_some()
    }
}

/// Argument and result lists of a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Func {
    pub args: Vec<Field>,
    pub results: Vec<Field>,
}

/// Key/value pair of a map shape. Each side resolves exactly like an
/// unnamed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub key: Box<Field>,
    pub value: Box<Field>,
}

/// One parsed annotation entry from a struct tag string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tag {
    /// Text before the first colon.
    pub key: String,
    /// Comma-split value parts.
    pub values: Vec<String>,
    /// Quote-stripped but unsplit value.
    pub raw_value: String,
}
