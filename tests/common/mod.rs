//! Shared test helpers: a terse forest builder and a table-backed
//! canonical-name oracle.

#![allow(dead_code)]

use std::collections::HashMap;

use goshape::ast::{
    ArrayLen, BasicLit, BasicLitKind, ChanDir, Comment, CommentGroup, CommentGroupId, CommentId,
    CommentKind, Decl, Expr, Field, FieldId, Forest, FuncDecl, GenDecl, GenDeclKind, Ident,
    IdentName, ImportSpec, InterfaceElem, ListRef, Receiver, Results, Signature, SignatureId,
    SourceFile, Span, Spec, StringLit, TopLevelDecl, Type, TypeId, TypeSpec, ValueSpec,
};
use goshape::resolve::{DeclLookup, NameOracle};

/// Builds forests one node at a time. All spans are defaulted; tests care
/// about structure, not positions.
#[derive(Default)]
pub struct ForestBuilder {
    pub forest: Forest,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // -- types ---------------------------------------------------------------

    pub fn named(&mut self, name: &str) -> TypeId {
        let name = self.forest.intern(name);
        self.alloc_type(Type::Named {
            pkg: None,
            name,
            name_pos: Span::default(),
        })
    }

    pub fn qualified(&mut self, pkg: &str, name: &str) -> TypeId {
        let pkg = self.forest.intern(pkg);
        let name = self.forest.intern(name);
        self.alloc_type(Type::Named {
            pkg: Some(pkg),
            name,
            name_pos: Span::default(),
        })
    }

    pub fn ptr(&mut self, elem: TypeId) -> TypeId {
        self.alloc_type(Type::Pointer {
            star_pos: Span::default(),
            elem,
        })
    }

    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.alloc_type(Type::Slice {
            l_brack: Span::default(),
            elem,
        })
    }

    /// Array with a decimal integer literal bound.
    pub fn array(&mut self, len: usize, elem: TypeId) -> TypeId {
        let text = self.forest.intern(&len.to_string());
        let lit = self.forest.arena.exprs.alloc(
            Expr::BasicLit(BasicLit {
                kind: BasicLitKind::Int,
                text,
            }),
            Span::default(),
        );
        self.alloc_type(Type::Array {
            l_brack: Span::default(),
            len: ArrayLen::Expr(lit),
            elem,
        })
    }

    /// Array whose bound is an identifier (a named constant).
    pub fn array_ident_bound(&mut self, bound: &str, elem: TypeId) -> TypeId {
        let sym = self.forest.intern(bound);
        let expr = self
            .forest
            .arena
            .exprs
            .alloc(Expr::Ident(sym, Span::default()), Span::default());
        self.alloc_type(Type::Array {
            l_brack: Span::default(),
            len: ArrayLen::Expr(expr),
            elem,
        })
    }

    /// Array with an inferred `[...]` bound.
    pub fn array_ellipsis(&mut self, elem: TypeId) -> TypeId {
        self.alloc_type(Type::Array {
            l_brack: Span::default(),
            len: ArrayLen::Ellipsis(Span::default()),
            elem,
        })
    }

    pub fn map(&mut self, key: TypeId, val: TypeId) -> TypeId {
        self.alloc_type(Type::Map {
            map_pos: Span::default(),
            key,
            val,
        })
    }

    pub fn chan(&mut self, elem: TypeId) -> TypeId {
        self.alloc_type(Type::Chan {
            dir: ChanDir::Both,
            chan_pos: Span::default(),
            elem,
        })
    }

    pub fn paren(&mut self, typ: TypeId) -> TypeId {
        self.alloc_type(Type::Paren {
            l_paren: Span::default(),
            typ,
        })
    }

    pub fn struct_type(&mut self, fields: Vec<FieldId>) -> TypeId {
        let fields = self.forest.arena.list_fields(fields);
        self.alloc_type(Type::Struct {
            struct_pos: Span::default(),
            fields,
        })
    }

    pub fn interface_type(&mut self, elems: Vec<InterfaceElem>) -> TypeId {
        let elems = self.forest.arena.list_interface_elems(elems);
        self.alloc_type(Type::Interface {
            interface_pos: Span::default(),
            elems,
        })
    }

    pub fn func_type(&mut self, sig: SignatureId) -> TypeId {
        self.alloc_type(Type::Func {
            func_pos: Span::default(),
            sig,
        })
    }

    fn alloc_type(&mut self, ty: Type) -> TypeId {
        self.forest.arena.types.alloc(ty, Span::default())
    }

    // -- signatures ----------------------------------------------------------

    pub fn sig(&mut self, params: Vec<FieldId>, results: Option<Results>) -> SignatureId {
        let params = self.forest.arena.list_fields(params);
        self.forest
            .arena
            .signatures
            .alloc(Signature { params, results }, Span::default())
    }

    pub fn results(&mut self, fields: Vec<FieldId>) -> Option<Results> {
        Some(Results::Params(self.forest.arena.list_fields(fields)))
    }

    pub fn method(&mut self, name: &str, sig: SignatureId) -> InterfaceElem {
        InterfaceElem::Method {
            name: self.forest.intern(name),
            name_pos: Span::default(),
            sig,
        }
    }

    // -- fields --------------------------------------------------------------

    pub fn field(&mut self, name: &str, ty: TypeId) -> FieldId {
        self.field_full(&[name], ty, None, None, false)
    }

    pub fn tagged(&mut self, name: &str, ty: TypeId, tag: &str) -> FieldId {
        self.field_full(&[name], ty, Some(tag), None, false)
    }

    pub fn commented(&mut self, name: &str, ty: TypeId, comment: &str) -> FieldId {
        let group = self.comments(&[comment]);
        self.field_full(&[name], ty, None, Some(group), false)
    }

    pub fn embedded(&mut self, ty: TypeId) -> FieldId {
        self.field_full(&[], ty, None, None, false)
    }

    /// Unnamed parameter, result, or map entry position.
    pub fn unnamed(&mut self, ty: TypeId) -> FieldId {
        self.field_full(&[], ty, None, None, false)
    }

    pub fn variadic(&mut self, name: &str, ty: TypeId) -> FieldId {
        self.field_full(&[name], ty, None, None, true)
    }

    pub fn field_full(
        &mut self,
        names: &[&str],
        ty: TypeId,
        tag: Option<&str>,
        comment: Option<CommentGroupId>,
        variadic: bool,
    ) -> FieldId {
        let names: Vec<IdentName> = names
            .iter()
            .map(|n| IdentName {
                sym: self.forest.intern(n),
                pos: Span::default(),
            })
            .collect();
        let names = self.forest.arena.list_ident_names(names);
        let tag = tag.map(|t| StringLit {
            text: self.forest.intern(t),
        });
        let field = Field {
            names,
            ellipsis_pos: variadic.then(Span::default),
            typ: ty,
            tag,
            doc: None,
            comment,
        };
        self.forest.arena.fields.alloc(field, Span::default())
    }

    // -- comments ------------------------------------------------------------

    pub fn comments(&mut self, texts: &[&str]) -> CommentGroupId {
        let ids: Vec<CommentId> = texts
            .iter()
            .map(|t| {
                let text = self.forest.intern(t);
                self.forest
                    .arena
                    .comments
                    .alloc(Comment {
                        kind: CommentKind::Line,
                        text,
                    },
                    Span::default())
            })
            .collect();
        let comments = self.forest.arena.list_comment_ids(ids);
        self.forest
            .arena
            .comment_groups
            .alloc(CommentGroup { comments }, Span::default())
    }

    // -- declarations and files ----------------------------------------------

    pub fn type_spec(&mut self, name: &str, ty: TypeId) -> Spec {
        self.type_spec_full(name, ty, None, None)
    }

    pub fn type_spec_full(
        &mut self,
        name: &str,
        ty: TypeId,
        doc: Option<CommentGroupId>,
        comment: Option<CommentGroupId>,
    ) -> Spec {
        Spec::Type(TypeSpec {
            doc,
            name: self.forest.intern(name),
            name_pos: Span::default(),
            typ: ty,
            comment,
        })
    }

    pub fn import_spec(&mut self, path: &str) -> Spec {
        let text = self.forest.intern(path);
        Spec::Import(ImportSpec {
            doc: None,
            name: None,
            path: StringLit { text },
        })
    }

    pub fn value_spec(&mut self, names: &[&str], ty: Option<TypeId>) -> Spec {
        let names: Vec<IdentName> = names
            .iter()
            .map(|n| IdentName {
                sym: self.forest.intern(n),
                pos: Span::default(),
            })
            .collect();
        let names = self.forest.arena.list_ident_names(names);
        Spec::Value(ValueSpec {
            doc: None,
            names,
            typ: ty,
            values: ListRef::EMPTY,
        })
    }

    pub fn type_decl(&mut self, specs: Vec<Spec>) -> TopLevelDecl {
        self.gen_decl(GenDeclKind::Type, specs)
    }

    pub fn gen_decl(&mut self, kind: GenDeclKind, specs: Vec<Spec>) -> TopLevelDecl {
        let specs = self.forest.arena.list_specs(specs);
        let id = self.forest.arena.decls.alloc(
            Decl::Gen(GenDecl {
                doc: None,
                kw_pos: Span::default(),
                kind,
                specs,
            }),
            Span::default(),
        );
        TopLevelDecl::Decl(id)
    }

    pub fn func_decl(&mut self, name: &str, sig: SignatureId) -> TopLevelDecl {
        self.func_decl_full(None, name, sig)
    }

    pub fn method_decl(&mut self, recv: TypeId, name: &str, sig: SignatureId) -> TopLevelDecl {
        self.func_decl_full(Some(Receiver { name: None, typ: recv }), name, sig)
    }

    fn func_decl_full(
        &mut self,
        recv: Option<Receiver>,
        name: &str,
        sig: SignatureId,
    ) -> TopLevelDecl {
        let name = self.forest.intern(name);
        let id = self.forest.arena.funcs.alloc(
            FuncDecl {
                doc: None,
                func_pos: Span::default(),
                recv,
                name,
                name_pos: Span::default(),
                signature: sig,
            },
            Span::default(),
        );
        TopLevelDecl::Func(id)
    }

    /// Appends a file holding the given top-level declarations.
    pub fn push_file(&mut self, pkg: &str, decls: Vec<TopLevelDecl>) {
        let name = self.forest.intern(pkg);
        let decls = self.forest.arena.list_top_decls(decls);
        self.forest.files.push(SourceFile {
            package_pos: Span::default(),
            name,
            decls,
            doc: None,
        });
    }

    /// Appends a file holding one `type (...)` declaration with the given
    /// specs, which is all most tests need.
    pub fn push_type_file(&mut self, pkg: &str, specs: Vec<Spec>) {
        let decl = self.type_decl(specs);
        self.push_file(pkg, vec![decl]);
    }
}

/// Table-backed [`NameOracle`].
///
/// `type_name` answers from the table, keyed `"Name"` for bare identifiers
/// and `"pkg.Name"` for qualified references; unknown keys echo themselves,
/// which is what a type checker does for builtins (`string` → `string`) and
/// path-less qualified names (`time.Time` → `time.Time`). `decl_name` falls
/// back to `<module>.<Name>`.
pub struct TableOracle {
    module: String,
    entries: HashMap<String, String>,
}

impl TableOracle {
    pub fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
            entries: HashMap::new(),
        }
    }

    /// Registers module-local declarations: each name resolves to
    /// `<module>.<name>`.
    pub fn with_locals(module: &str, locals: &[&str]) -> Self {
        let mut oracle = Self::new(module);
        for name in locals {
            oracle
                .entries
                .insert((*name).to_string(), format!("{module}.{name}"));
        }
        oracle
    }

    pub fn insert(&mut self, key: &str, canonical: &str) -> &mut Self {
        self.entries.insert(key.to_string(), canonical.to_string());
        self
    }
}

impl NameOracle for TableOracle {
    fn type_name(&self, forest: &Forest, ty: TypeId) -> String {
        let key = match forest.arena.types[ty] {
            Type::Named {
                pkg: Some(pkg),
                name,
                ..
            } => format!("{}.{}", forest.name(pkg), forest.name(name)),
            Type::Named { pkg: None, name, .. } => forest.name(name).to_string(),
            ref other => panic!("oracle queried on non-named type: {other:?}"),
        };
        self.entries.get(&key).cloned().unwrap_or(key)
    }

    fn decl_name(&self, forest: &Forest, name: Ident) -> String {
        let name = forest.name(name);
        self.entries
            .get(name)
            .cloned()
            .unwrap_or_else(|| format!("{}.{}", self.module, name))
    }
}

/// [`DeclLookup`] with no local declarations at all.
pub struct NoDecls;

impl DeclLookup for NoDecls {
    fn lookup(&self, _name: Ident) -> Option<TypeSpec> {
        None
    }
}
