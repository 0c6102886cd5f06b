//! Resolver: turns type declarations from a syntax forest into schema
//! values.
//!
//! The resolver is a direct structural recursion over type expressions. It
//! owns no state beyond borrows of its read-only inputs, so any number of
//! resolution passes may run concurrently over the same forest.
//!
//! Two collaborator seams are supplied by the host:
//!
//! - [`NameOracle`], the type-checker capability that maps a type expression
//!   to its canonical fully-qualified name;
//! - [`DeclLookup`], which binds an identifier to the type declaration it
//!   refers to, if that declaration is in scope. [`DeclIndex`] is the
//!   in-tree implementation, built by walking a forest.
//!
//! Resolution never fails. Unsupported declaration shapes produce name-only
//! schemas, unsupported members are dropped, and malformed array bounds fall
//! back to slices; the `_with_diags` entry points report each such
//! degradation.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::ast::{
    ArrayLen, BasicLitKind, CommentGroupId, Decl, Expr, FieldId, Forest, Ident, InterfaceElem,
    Results, SignatureId, SourceFile, Spec, TopLevelDecl, Type, TypeId, TypeSpec,
};
use crate::error::{Diag, SkipReason};
use crate::schema;
use crate::schema::TypePrefix;
use crate::walk::Visitor;

// =============================================================================
// Collaborator Seams
// =============================================================================

/// Canonical-name oracle.
///
/// Implementations must be deterministic and total over every type
/// expression the resolver may query (named types and declaration
/// identifiers); the resolver treats the answers as ground truth.
pub trait NameOracle {
    /// Canonical fully-qualified name for a named type expression in its
    /// syntactic context, e.g. `xxx/yy.Zzz` or a bare `string`.
    fn type_name(&self, forest: &Forest, ty: TypeId) -> String;

    /// Canonical name for a type declared in the current compilation unit,
    /// identified by its declaration name.
    fn decl_name(&self, forest: &Forest, name: Ident) -> String;
}

/// Local-declaration lookup.
///
/// `None` means the identifier has no known declaration binding (builtin, or
/// declared outside the resolution scope).
pub trait DeclLookup {
    fn lookup(&self, name: Ident) -> Option<TypeSpec>;
}

/// Forest-backed [`DeclLookup`]: indexes every type declaration reachable
/// from the forest's files. The first declaration of a name wins.
#[derive(Debug, Default)]
pub struct DeclIndex {
    by_name: HashMap<Ident, TypeSpec>,
}

impl DeclIndex {
    /// Builds the index by walking every file in the forest.
    pub fn from_forest(forest: &Forest) -> Self {
        struct Collect {
            by_name: HashMap<Ident, TypeSpec>,
        }

        impl<'ast> Visitor<'ast> for Collect {
            fn visit_type_spec(&mut self, _a: &'ast crate::ast::AstArena, spec: &TypeSpec) {
                self.by_name.entry(spec.name).or_insert(*spec);
            }
        }

        let mut collect = Collect {
            by_name: HashMap::new(),
        };
        for file in &forest.files {
            collect.visit_source_file(&forest.arena, file);
        }
        Self {
            by_name: collect.by_name,
        }
    }

    /// Number of indexed declarations.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Checks if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl DeclLookup for DeclIndex {
    fn lookup(&self, name: Ident) -> Option<TypeSpec> {
        self.by_name.get(&name).copied()
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Stateless resolver over one syntax forest.
pub struct Resolver<'a> {
    forest: &'a Forest,
    oracle: &'a dyn NameOracle,
    decls: &'a dyn DeclLookup,
}

impl<'a> Resolver<'a> {
    pub fn new(
        forest: &'a Forest,
        oracle: &'a dyn NameOracle,
        decls: &'a dyn DeclLookup,
    ) -> Self {
        Self {
            forest,
            oracle,
            decls,
        }
    }

    /// Resolves every top-level type declaration in every file, file order
    /// preserved.
    pub fn resolve_all(&self) -> Vec<schema::Schema> {
        self.resolve_all_with_diags().0
    }

    /// Like [`Resolver::resolve_all`], also returning one [`Diag`] per
    /// skipped or downgraded construct.
    pub fn resolve_all_with_diags(&self) -> (Vec<schema::Schema>, Vec<Diag>) {
        let mut out = Vec::new();
        let mut diags = Vec::new();
        for file in &self.forest.files {
            self.file_into(file, &mut out, &mut diags);
        }
        (out, diags)
    }

    /// Resolves every top-level type declaration in one file, in
    /// declaration order. Declarations of unsupported shape still appear,
    /// with only their name populated.
    pub fn resolve_file(&self, file: &SourceFile) -> Vec<schema::Schema> {
        self.resolve_file_with_diags(file).0
    }

    /// Like [`Resolver::resolve_file`], also returning one [`Diag`] per
    /// skipped or downgraded construct.
    pub fn resolve_file_with_diags(&self, file: &SourceFile) -> (Vec<schema::Schema>, Vec<Diag>) {
        let mut out = Vec::new();
        let mut diags = Vec::new();
        self.file_into(file, &mut out, &mut diags);
        (out, diags)
    }

    fn file_into(
        &self,
        file: &SourceFile,
        out: &mut Vec<schema::Schema>,
        diags: &mut Vec<Diag>,
    ) {
        let arena = &self.forest.arena;
        let before = out.len();
        for td in arena.top_decls(file.decls) {
            let Decl::Gen(gen) = (match td {
                TopLevelDecl::Decl(id) => arena.decls[*id],
                // Function declarations do not declare types.
                TopLevelDecl::Func(_) => continue,
            }) else {
                continue;
            };
            for spec in arena.specs_list(gen.specs) {
                if let Spec::Type(ts) = spec {
                    out.push(self.resolve_type_spec(ts, diags));
                }
            }
        }
        debug!(
            file = self.forest.name(file.name),
            count = out.len() - before,
            "resolved type declarations"
        );
    }

    // -------------------------------------------------------------------------
    // Declarations
    // -------------------------------------------------------------------------

    fn resolve_type_spec(&self, spec: &TypeSpec, diags: &mut Vec<Diag>) -> schema::Schema {
        let arena = &self.forest.arena;
        let mut sc = schema::Schema {
            name: self.forest.name(spec.name).to_string(),
            comment: self.comment_text(&[spec.doc, spec.comment]),
            ..Default::default()
        };

        let (base, prefixes) = self.strip_prefixes(spec.typ, diags);
        sc.type_prefixes = prefixes;

        match arena.types[base] {
            Type::Struct { fields, .. } => {
                sc.typ = Some(self.decl_type(spec.name));
                sc.fields = self.resolve_members(arena.fields_list(fields), diags);
            }
            Type::Interface { elems, .. } => {
                sc.typ = Some(self.decl_type(spec.name));
                sc.is_interface = true;
                sc.fields = self.resolve_interface(arena.interface_elems(elems), diags);
            }
            Type::Map { key, val, .. } => {
                sc.typ = Some(self.decl_type(spec.name));
                sc.map = self.resolve_map(base, key, val, diags);
            }
            Type::Func { sig, .. } => {
                sc.typ = Some(self.decl_type(spec.name));
                sc.func = Some(self.resolve_func(sig, diags));
            }
            Type::Named { pkg, name, .. } => {
                sc.typ = Some(self.resolve_named(base, pkg, name));
            }
            _ => {
                trace!(decl = %sc.name, "declaration shape not supported");
                diags.push(Diag::new(
                    SkipReason::UnsupportedShape,
                    arena.types.span(base),
                    format!("declaration `{}` has an unsupported shape", sc.name),
                ));
            }
        }
        sc
    }

    /// Identity for a struct/interface/map/func declaration: the canonical
    /// name of the declaration identifier itself.
    fn decl_type(&self, name: Ident) -> schema::Type {
        schema::Type::new(
            self.forest.name(name),
            self.oracle.decl_name(self.forest, name),
        )
    }

    // -------------------------------------------------------------------------
    // Prefix Stripping
    // -------------------------------------------------------------------------

    /// Peels pointer/slice/array layers until a base shape is reached,
    /// recording each layer outermost-first.
    fn strip_prefixes(&self, ty: TypeId, diags: &mut Vec<Diag>) -> (TypeId, Vec<TypePrefix>) {
        let arena = &self.forest.arena;
        let mut prefixes = Vec::new();
        let mut cur = ty;
        loop {
            match arena.types[cur] {
                Type::Pointer { elem, .. } => {
                    prefixes.push(TypePrefix::Pointer);
                    cur = elem;
                }
                Type::Slice { elem, .. } => {
                    prefixes.push(TypePrefix::Slice);
                    cur = elem;
                }
                Type::Array { len, elem, .. } => {
                    prefixes.push(self.array_prefix(cur, len, diags));
                    cur = elem;
                }
                _ => return (cur, prefixes),
            }
        }
    }

    /// Array prefix with its declared bound, or the lenient slice fallback
    /// when the bound is not a plain non-negative integer literal.
    fn array_prefix(&self, ty: TypeId, len: ArrayLen, diags: &mut Vec<Diag>) -> TypePrefix {
        let arena = &self.forest.arena;
        if let ArrayLen::Expr(id) = len {
            if let Expr::BasicLit(lit) = arena.exprs[id] {
                if lit.kind == BasicLitKind::Int {
                    if let Ok(n) = self.forest.name(lit.text).parse::<usize>() {
                        return TypePrefix::Array(n);
                    }
                }
            }
        }
        trace!("array bound fell back to slice");
        diags.push(Diag::new(
            SkipReason::ArrayBound,
            arena.types.span(ty),
            "array bound is not an integer literal",
        ));
        TypePrefix::Slice
    }

    // -------------------------------------------------------------------------
    // Fields and Members
    // -------------------------------------------------------------------------

    fn resolve_members(&self, fields: &[FieldId], diags: &mut Vec<Diag>) -> Vec<schema::Field> {
        fields
            .iter()
            .filter_map(|&fid| self.resolve_field(fid, true, diags))
            .collect()
    }

    /// Resolves one syntax-level field. `infer_embedded` enables the
    /// embedding name rule and is set only in struct/interface member
    /// contexts; parameters, results, and map entries keep empty names.
    fn resolve_field(
        &self,
        fid: FieldId,
        infer_embedded: bool,
        diags: &mut Vec<Diag>,
    ) -> Option<schema::Field> {
        let arena = &self.forest.arena;
        let field = arena.fields[fid];

        if let Some(pos) = field.ellipsis_pos {
            trace!("variadic parameter skipped");
            diags.push(Diag::new(
                SkipReason::Variadic,
                pos,
                "variadic parameters are not supported",
            ));
            return None;
        }

        // Multiple names on one decl (`X, Y int`) collapse to the first.
        let name = arena
            .ident_names(field.names)
            .first()
            .map(|n| self.forest.name(n.sym).to_string())
            .unwrap_or_default();

        let mut out = self.resolve_entry(field.typ, name, infer_embedded, diags)?;
        if let Some(tag) = field.tag {
            out.tags = parse_tags(self.forest.name(tag.text));
        }
        out.comment = self.comment_text(&[field.doc, field.comment]);
        Some(out)
    }

    /// Shared field-resolution path: strips prefixes from one type
    /// expression, dispatches on the base shape, and fills a schema field.
    fn resolve_entry(
        &self,
        ty: TypeId,
        name: String,
        infer_embedded: bool,
        diags: &mut Vec<Diag>,
    ) -> Option<schema::Field> {
        let arena = &self.forest.arena;
        let (base, prefixes) = self.strip_prefixes(ty, diags);
        let mut out = schema::Field {
            name,
            type_prefixes: prefixes,
            ..Default::default()
        };

        match arena.types[base] {
            Type::Named {
                pkg,
                name: type_name,
                ..
            } => {
                if infer_embedded && out.name.is_empty() {
                    // Embedded member: the effective name is the type's own
                    // name (`Foo`, `*Foo`, `pkg.Bar` all embed by tail name).
                    out.name = self.forest.name(type_name).to_string();
                }
                out.typ = Some(self.resolve_named(base, pkg, type_name));
            }
            Type::Func { sig, .. } => {
                out.func = Some(self.resolve_func(sig, diags));
            }
            Type::Map { key, val, .. } => {
                out.map = self.resolve_map(base, key, val, diags);
            }
            Type::Struct { fields, .. } => {
                out.is_untitled_struct = true;
                if !fields.is_empty() {
                    out.schema = Some(Box::new(schema::Schema {
                        fields: self.resolve_members(arena.fields_list(fields), diags),
                        ..Default::default()
                    }));
                }
            }
            Type::Interface { elems, .. } => {
                out.is_untitled_interface = true;
                if !elems.is_empty() {
                    out.schema = Some(Box::new(schema::Schema {
                        fields: self.resolve_interface(arena.interface_elems(elems), diags),
                        ..Default::default()
                    }));
                }
            }
            _ => {
                trace!(member = %out.name, "member shape not supported");
                diags.push(Diag::new(
                    SkipReason::UnsupportedShape,
                    arena.types.span(base),
                    match out.name.as_str() {
                        "" => "unnamed member has an unsupported shape".to_string(),
                        n => format!("member `{n}` has an unsupported shape"),
                    },
                ));
                return None;
            }
        }
        Some(out)
    }

    fn resolve_interface(
        &self,
        elems: &[InterfaceElem],
        diags: &mut Vec<Diag>,
    ) -> Vec<schema::Field> {
        let mut out = Vec::new();
        for &elem in elems {
            match elem {
                InterfaceElem::Method { name, sig, .. } => {
                    out.push(schema::Field {
                        name: self.forest.name(name).to_string(),
                        func: Some(self.resolve_func(sig, diags)),
                        ..Default::default()
                    });
                }
                InterfaceElem::Embedded(ty) => {
                    if let Some(f) = self.resolve_entry(ty, String::new(), true, diags) {
                        out.push(f);
                    }
                }
            }
        }
        out
    }

    // -------------------------------------------------------------------------
    // Composite Shapes
    // -------------------------------------------------------------------------

    fn resolve_func(&self, sig: SignatureId, diags: &mut Vec<Diag>) -> schema::Func {
        let arena = &self.forest.arena;
        let sig = arena.signatures[sig];
        let mut func = schema::Func::default();

        for &fid in arena.fields_list(sig.params) {
            if let Some(f) = self.resolve_field(fid, false, diags) {
                func.args.push(f);
            }
        }
        match sig.results {
            Some(Results::Params(list)) => {
                for &fid in arena.fields_list(list) {
                    if let Some(f) = self.resolve_field(fid, false, diags) {
                        func.results.push(f);
                    }
                }
            }
            Some(Results::Type(ty)) => {
                if let Some(f) = self.resolve_entry(ty, String::new(), false, diags) {
                    func.results.push(f);
                }
            }
            None => {}
        }
        func
    }

    /// Map shapes resolve whole or not at all: if either side fails, the
    /// map is omitted.
    fn resolve_map(
        &self,
        map_ty: TypeId,
        key: TypeId,
        val: TypeId,
        diags: &mut Vec<Diag>,
    ) -> Option<schema::Map> {
        let key = self.resolve_entry(key, String::new(), false, diags);
        let value = self.resolve_entry(val, String::new(), false, diags);
        match (key, value) {
            (Some(key), Some(value)) => Some(schema::Map {
                key: Box::new(key),
                value: Box::new(value),
            }),
            _ => {
                trace!("map dropped");
                diags.push(Diag::new(
                    SkipReason::MapEntry,
                    self.forest.arena.types.span(map_ty),
                    "map omitted because its key or value did not resolve",
                ));
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Identifier Resolution
    // -------------------------------------------------------------------------

    /// Resolves a named base type to its canonical identity.
    ///
    /// Qualified references and unbound identifiers (builtins, foreign
    /// names) resolve through the oracle in their own context. A local
    /// declaration whose declared shape is itself a bare identifier is the
    /// alias case: `underlying` comes from the aliased expression while
    /// `type_name` keeps the referencing identifier, so `type Foo string`
    /// yields `{type_name: "Foo", underlying: "string"}`. Every other
    /// locally declared shape resolves in the identifier's own context.
    fn resolve_named(&self, ty: TypeId, pkg: Option<Ident>, name: Ident) -> schema::Type {
        let type_name = self.forest.name(name);
        if pkg.is_some() {
            return schema::Type::new(type_name, self.oracle.type_name(self.forest, ty));
        }

        let aliased = self.decls.lookup(name).and_then(|spec| {
            match self.forest.arena.types[spec.typ] {
                Type::Named { pkg: None, .. } => Some(spec.typ),
                _ => None,
            }
        });
        let underlying = match aliased {
            Some(inner) => self.oracle.type_name(self.forest, inner),
            None => self.oracle.type_name(self.forest, ty),
        };
        schema::Type::new(type_name, underlying)
    }

    // -------------------------------------------------------------------------
    // Comments
    // -------------------------------------------------------------------------

    /// Flattens doc and trailing comment groups into their literal text, in
    /// source order.
    fn comment_text(&self, groups: &[Option<CommentGroupId>]) -> Vec<String> {
        let arena = &self.forest.arena;
        let mut out = Vec::new();
        for group in groups.iter().flatten() {
            for &cid in arena.comment_ids(arena.comment_groups[*group].comments) {
                out.push(self.forest.name(arena.comments[cid].text).to_string());
            }
        }
        out
    }
}

// =============================================================================
// Tag Parsing
// =============================================================================

/// Parses a raw backtick-delimited tag string into its entries.
///
/// Tokens are space-separated `key:"value"` pairs; tokens without exactly
/// one colon are discarded. Values are quote-stripped, kept raw, and also
/// comma-split. Order and duplicate keys are preserved.
pub fn parse_tags(raw: &str) -> Vec<schema::Tag> {
    let mut out = Vec::new();
    for token in raw.trim_matches('`').split(' ') {
        let parts: Vec<&str> = token.split(':').collect();
        if parts.len() != 2 {
            continue;
        }
        let value = parts[1].trim_matches('"');
        out.push(schema::Tag {
            key: parts[0].to_string(),
            values: value.split(',').map(str::to_string).collect(),
            raw_value: value.to_string(),
        });
    }
    out
}
