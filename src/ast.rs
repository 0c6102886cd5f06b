//! # Declaration-Level Syntax Forest
//!
//! This module defines the syntax-tree input model the schema resolver
//! consumes: an ordered collection of source files whose nodes live in typed
//! arenas.
//!
//! ## Design Goals
//!
//! - **Memory Efficiency**: Arena-allocated nodes to minimize per-node
//!   allocations
//! - **Performance**: Side-table spans and interned symbols for fast lookups
//! - **Type Safety**: Typed list references (`ListRef<T>`) instead of raw
//!   vectors
//!
//! ## Architecture
//!
//! - **Nodes**: All nodes are allocated in typed arenas (`SpannedArena<T>`)
//! - **Lists**: Centralized buffers avoid per-node `Vec` allocations
//! - **Spans**: Location information stored separately in side tables
//! - **Symbols**: String interning for identifiers, comment text, and
//!   literal text, so a forest is self-contained without the source bytes
//!
//! ## Important Notes
//!
//! - This module models declaration syntax only; statements, generics, and
//!   composite literals are out of scope
//! - The external parser/loader that builds a forest is not part of this
//!   crate; hosts and tests construct forests through the arena API
//! - Walk/Visitor infrastructure lives in `walk.rs` (see `crate::walk`)
//! - `#[derive(WalkAst)]` generates `impl crate::walk::Walk`

use ast_derive::WalkAst;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::hash::{BuildHasher, BuildHasherDefault, Hasher, RandomState};

// =============================================================================
// Core Foundation Types
// =============================================================================

/// Represents a source code span with start and end positions.
///
/// Positions are stored as `u32` to save memory, limiting file size to 4GB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Creates a new span from usize positions.
    ///
    /// # Panics
    /// In debug builds, panics if positions exceed `u32::MAX`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Returns the length of the span.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Checks if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Type-safe identifier for arena-allocated nodes.
///
/// The phantom marker ensures type safety at compile time.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Id<T> {
    raw: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Id<T> {
    /// Creates an ID from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Converts the ID to usize for indexing.
    #[inline]
    pub const fn to_usize(&self) -> usize {
        self.raw as usize
    }

    /// Returns the raw u32 value.
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.raw
    }
}

/// Typed reference into a centralized list buffer.
///
/// Lists are stored in `AstArena::extras` to avoid per-node allocations.
/// Each `ListRef` points to a contiguous slice in the appropriate buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct ListRef<T> {
    start: u32,
    len: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Copy for ListRef<T> {}

impl<T> Clone for ListRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Default for ListRef<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T> ListRef<T> {
    /// Empty list constant.
    pub const EMPTY: Self = Self {
        start: 0,
        len: 0,
        _marker: PhantomData,
    };

    /// Creates a new list reference.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        Self {
            start,
            len,
            _marker: PhantomData,
        }
    }

    /// Checks if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the start index.
    #[inline]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Returns the length.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.len
    }

    /// Returns the end index (exclusive).
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }
}

// =============================================================================
// Symbol Interning System
// =============================================================================

/// Interned string symbol.
///
/// Symbols are immutable identifiers stored once and referenced by ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Symbol(u32);

/// Type alias for identifier symbols.
pub type Ident = Symbol;

impl Symbol {
    /// Creates a symbol from a raw u32 value.
    #[inline]
    pub const fn from_raw(v: u32) -> Self {
        Self(v)
    }

    /// Returns the raw u32 value.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Identifier occurrence (interned symbol + source position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct IdentName {
    pub sym: Ident,
    pub pos: Span,
}

/// Identity hasher for u64 values (used for symbol hash buckets).
#[derive(Default)]
struct U64IdentityHasher(u64);

impl Hasher for U64IdentityHasher {
    fn write(&mut self, _b: &[u8]) {
        unreachable!("U64IdentityHasher only supports write_u64")
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
}

type U64IdentityBuild = BuildHasherDefault<U64IdentityHasher>;

/// String interner for efficient symbol storage.
///
/// Symbols are stored once and looked up via hash buckets.
/// Uses a seeded random hasher for security against hash collision attacks.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    buckets: HashMap<u64, SmallVec<[Symbol; 1]>, U64IdentityBuild>,
    state: RandomState,
}

impl Interner {
    /// Creates a new empty interner.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves capacity for additional symbols.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.strings.reserve(additional);
        self.buckets.reserve(additional);
    }

    /// Interns a string and returns its symbol.
    ///
    /// If the string already exists, returns the existing symbol.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Symbol {
        let h = self.state.hash_one(s);

        let entry = self.buckets.entry(h).or_default();
        for &sym in entry.iter() {
            if self.strings[sym.0 as usize].as_ref() == s {
                return sym;
            }
        }

        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(s.into());
        entry.push(sym);
        sym
    }

    /// Resolves a symbol back to its string.
    ///
    /// # Panics
    /// Panics if the symbol is invalid.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        debug_assert!((sym.0 as usize) < self.strings.len());
        self.strings
            .get(sym.0 as usize)
            .expect("invalid symbol")
            .as_ref()
    }
}

// =============================================================================
// Arena Allocation
// =============================================================================

/// Arena for nodes with associated spans.
///
/// Stores nodes and their spans in parallel vectors for cache efficiency.
#[derive(Debug)]
pub struct SpannedArena<T> {
    data: Vec<T>,
    spans: Vec<Span>,
}

impl<T> Default for SpannedArena<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            spans: Vec::new(),
        }
    }
}

impl<T> SpannedArena<T> {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a node with its span and returns an ID.
    #[inline]
    pub fn alloc(&mut self, node: T, span: Span) -> Id<T> {
        let id = Id::from_raw(self.data.len() as u32);
        self.data.push(node);
        self.spans.push(span);
        id
    }

    /// Gets an immutable reference to a node.
    #[inline]
    pub fn get(&self, id: Id<T>) -> &T {
        &self.data[id.to_usize()]
    }

    /// Gets a mutable reference to a node.
    #[inline]
    pub fn get_mut(&mut self, id: Id<T>) -> &mut T {
        &mut self.data[id.to_usize()]
    }

    /// Gets the span for a node.
    #[inline]
    pub fn span(&self, id: Id<T>) -> Span {
        self.spans[id.to_usize()]
    }

    /// Returns the number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the arena is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Index<Id<T>> for SpannedArena<T> {
    type Output = T;
    fn index(&self, id: Id<T>) -> &T {
        self.get(id)
    }
}

impl<T> IndexMut<Id<T>> for SpannedArena<T> {
    fn index_mut(&mut self, id: Id<T>) -> &mut T {
        self.get_mut(id)
    }
}

// =============================================================================
// Type Aliases for Node IDs
// =============================================================================

pub type DeclId = Id<Decl>;
pub type FuncDeclId = Id<FuncDecl>;
pub type ExprId = Id<Expr>;
pub type TypeId = Id<Type>;
pub type FieldId = Id<Field>;
pub type SignatureId = Id<Signature>;
pub type CommentId = Id<Comment>;
pub type CommentGroupId = Id<CommentGroup>;

// =============================================================================
// Centralized List Storage
// =============================================================================

/// Extra data storage for all list types.
///
/// This structure holds all the centralized buffers that `ListRef<T>` points
/// into. Keeping lists here instead of in individual nodes reduces memory
/// overhead.
#[derive(Debug, Default)]
pub struct ExtraData {
    pub ident_names: Vec<IdentName>,
    pub exprs: Vec<ExprId>,
    pub fields: Vec<FieldId>,
    pub specs: Vec<Spec>,
    pub top_decls: Vec<TopLevelDecl>,
    pub interface_elems: Vec<InterfaceElem>,
    pub comment_ids: Vec<CommentId>,
}

// =============================================================================
// Main AST Arena
// =============================================================================

/// Central arena holding all syntax nodes and list buffers.
///
/// This is the main entry point for node allocation and access.
#[derive(Debug, Default)]
pub struct AstArena {
    pub decls: SpannedArena<Decl>,
    pub funcs: SpannedArena<FuncDecl>,
    pub exprs: SpannedArena<Expr>,
    pub types: SpannedArena<Type>,
    pub signatures: SpannedArena<Signature>,
    pub fields: SpannedArena<Field>,
    pub comments: SpannedArena<Comment>,
    pub comment_groups: SpannedArena<CommentGroup>,
    pub extras: ExtraData,
}

impl AstArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper to push items into a buffer and return a typed list reference.
    #[inline]
    fn push_list<T>(buf: &mut Vec<T>, items: impl IntoIterator<Item = T>) -> ListRef<T> {
        let start = buf.len();
        buf.extend(items);
        let len = buf.len() - start;
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(len <= u32::MAX as usize);
        ListRef::new(start as u32, len as u32)
    }

    /// Helper to get a slice from a buffer using a list reference.
    #[inline]
    fn slice<T>(buf: &[T], r: ListRef<T>) -> &[T] {
        let s = r.start() as usize;
        let e = r.end() as usize;
        &buf[s..e]
    }

    // List Builders

    pub fn list_ident_names(
        &mut self,
        i: impl IntoIterator<Item = IdentName>,
    ) -> ListRef<IdentName> {
        Self::push_list(&mut self.extras.ident_names, i)
    }

    pub fn list_exprs(&mut self, i: impl IntoIterator<Item = ExprId>) -> ListRef<ExprId> {
        Self::push_list(&mut self.extras.exprs, i)
    }

    pub fn list_fields(&mut self, i: impl IntoIterator<Item = FieldId>) -> ListRef<FieldId> {
        Self::push_list(&mut self.extras.fields, i)
    }

    pub fn list_specs(&mut self, i: impl IntoIterator<Item = Spec>) -> ListRef<Spec> {
        Self::push_list(&mut self.extras.specs, i)
    }

    pub fn list_top_decls(
        &mut self,
        i: impl IntoIterator<Item = TopLevelDecl>,
    ) -> ListRef<TopLevelDecl> {
        Self::push_list(&mut self.extras.top_decls, i)
    }

    pub fn list_interface_elems(
        &mut self,
        i: impl IntoIterator<Item = InterfaceElem>,
    ) -> ListRef<InterfaceElem> {
        Self::push_list(&mut self.extras.interface_elems, i)
    }

    pub fn list_comment_ids(
        &mut self,
        i: impl IntoIterator<Item = CommentId>,
    ) -> ListRef<CommentId> {
        Self::push_list(&mut self.extras.comment_ids, i)
    }

    // List Accessors

    pub fn ident_names(&self, r: ListRef<IdentName>) -> &[IdentName] {
        Self::slice(&self.extras.ident_names, r)
    }

    pub fn exprs_list(&self, r: ListRef<ExprId>) -> &[ExprId] {
        Self::slice(&self.extras.exprs, r)
    }

    pub fn fields_list(&self, r: ListRef<FieldId>) -> &[FieldId] {
        Self::slice(&self.extras.fields, r)
    }

    pub fn specs_list(&self, r: ListRef<Spec>) -> &[Spec] {
        Self::slice(&self.extras.specs, r)
    }

    pub fn top_decls(&self, r: ListRef<TopLevelDecl>) -> &[TopLevelDecl] {
        Self::slice(&self.extras.top_decls, r)
    }

    pub fn interface_elems(&self, r: ListRef<InterfaceElem>) -> &[InterfaceElem] {
        Self::slice(&self.extras.interface_elems, r)
    }

    pub fn comment_ids(&self, r: ListRef<CommentId>) -> &[CommentId] {
        Self::slice(&self.extras.comment_ids, r)
    }
}

// =============================================================================
// Syntax Forest (Root)
// =============================================================================

/// A complete syntax forest: one arena, one symbol table, and the files
/// materialized into them, in load order.
///
/// A forest is read-only once built; resolution passes never mutate it, so a
/// host may run any number of them over the same forest concurrently.
#[derive(Debug, Default)]
pub struct Forest {
    pub arena: AstArena,
    pub symbols: Interner,
    pub files: Vec<SourceFile>,
}

impl Forest {
    /// Creates a new empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a string, returning its symbol.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Symbol {
        self.symbols.intern(s)
    }

    /// Resolves a symbol back to its string.
    #[inline]
    pub fn name(&self, sym: Symbol) -> &str {
        self.symbols.resolve(sym)
    }
}

// =============================================================================
// Comments
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

/// Comment token. The text is the full literal including delimiters
/// (`// like this`), interned so the forest carries it without the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: Symbol,
}

/// Group of adjacent comments (doc comments, trailing comments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct CommentGroup {
    pub comments: ListRef<CommentId>,
}

// =============================================================================
// Source File (Root Node)
// =============================================================================

/// Represents one source file: a package clause followed by top-level
/// declarations in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct SourceFile {
    /// Position of the `package` keyword
    pub package_pos: Span,
    /// Package name
    pub name: Ident,
    /// All top-level declarations in source order
    pub decls: ListRef<TopLevelDecl>,
    /// Optional file doc comment group
    pub doc: Option<CommentGroupId>,
}

// =============================================================================
// Declarations
// =============================================================================

/// Top-level declaration (a general declaration or a function).
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum TopLevelDecl {
    Decl(DeclId),
    Func(FuncDeclId),
}

/// General declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Decl {
    Gen(GenDecl),
    /// Error-recovery placeholder produced by a lossy front end.
    Bad(Span),
}

/// Generic declaration (import, const, type, var), possibly grouping
/// multiple specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct GenDecl {
    /// Leading doc comment group (optional)
    pub doc: Option<CommentGroupId>,
    /// Position of keyword (import/const/type/var)
    pub kw_pos: Span,
    /// Kind of declaration
    pub kind: GenDeclKind,
    /// Specification list
    pub specs: ListRef<Spec>,
}

/// Kind of generic declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GenDeclKind {
    Import,
    Const,
    Type,
    Var,
}

/// Specification within a declaration.
///
/// Only `Spec::Type` produces schemas; the other kinds exist so a forest can
/// hold whole files, and resolution skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

/// Import specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct ImportSpec {
    /// Leading doc comment group (optional)
    pub doc: Option<CommentGroupId>,
    /// Optional import name (dot import, blank, or alias)
    pub name: Option<ImportName>,
    /// Import path string
    pub path: StringLit,
}

/// Import name variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum ImportName {
    /// Dot import: `import . "pkg"`
    Dot(Span),
    /// Blank import: `import _ "pkg"`
    Blank(Span),
    /// Named import: `import name "pkg"`
    Name(Ident, Span),
}

/// Value specification (const or var).
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct ValueSpec {
    /// Leading doc comment group (optional)
    pub doc: Option<CommentGroupId>,
    /// Variable/constant names
    pub names: ListRef<IdentName>,
    /// Optional type
    pub typ: Option<TypeId>,
    /// Initial values
    pub values: ListRef<ExprId>,
}

/// Type specification: one `Name Type` binding inside a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct TypeSpec {
    /// Leading doc comment group (optional)
    pub doc: Option<CommentGroupId>,
    /// Declared type name
    pub name: Ident,
    /// Position of name
    pub name_pos: Span,
    /// Declared type expression
    pub typ: TypeId,
    /// Trailing line comment group (optional)
    pub comment: Option<CommentGroupId>,
}

/// Function or method declaration. Carried so a forest can represent whole
/// files; resolution skips these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct FuncDecl {
    /// Leading doc comment group (optional)
    pub doc: Option<CommentGroupId>,
    /// Position of the `func` keyword
    pub func_pos: Span,
    /// Receiver (present only for methods)
    pub recv: Option<Receiver>,
    /// Function name
    pub name: Ident,
    /// Position of name
    pub name_pos: Span,
    /// Function signature
    pub signature: SignatureId,
}

/// Method receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct Receiver {
    pub name: Option<IdentName>,
    pub typ: TypeId,
}

// =============================================================================
// Signatures and Fields
// =============================================================================

/// Function signature: parameters plus an optional result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct Signature {
    /// Parameter list
    pub params: ListRef<FieldId>,
    /// Optional result (return type)
    pub results: Option<Results>,
}

/// Function result specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Results {
    /// Parenthesized results: `(x int, y string)` or `(int, error)`
    Params(ListRef<FieldId>),
    /// Single unnamed result: `int`
    Type(TypeId),
}

/// Field in a parameter list, struct, or interface.
///
/// An embedded member is represented by an empty name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub struct Field {
    /// Field names (empty for embedded/anonymous fields)
    pub names: ListRef<IdentName>,
    /// Position of `...` for variadic parameters
    pub ellipsis_pos: Option<Span>,
    /// Field type
    pub typ: TypeId,
    /// Struct tag (struct fields only)
    pub tag: Option<StringLit>,
    /// Leading doc comment group (optional)
    pub doc: Option<CommentGroupId>,
    /// Trailing line comment group (optional)
    pub comment: Option<CommentGroupId>,
}

// =============================================================================
// Expressions
// =============================================================================

/// Expression node. Declaration syntax only needs identifiers and basic
/// literals (array bounds, const/var initializers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Expr {
    Ident(Ident, Span),
    BasicLit(BasicLit),
}

/// Basic literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicLit {
    pub kind: BasicLitKind,
    /// Literal text as written, interned.
    pub text: Symbol,
}

/// Basic literal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BasicLitKind {
    Int,
    Float,
    Imag,
    Rune,
    String,
}

/// String literal (import paths, struct tags). The text is the raw literal
/// including delimiters, interned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLit {
    pub text: Symbol,
}

// =============================================================================
// Types
// =============================================================================

/// Type expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum Type {
    /// Named type: a bare identifier `Name` or a qualified reference
    /// `pkg.Name`
    Named {
        pkg: Option<Ident>,
        name: Ident,
        name_pos: Span,
    },

    /// Pointer type: `*T`
    Pointer { star_pos: Span, elem: TypeId },

    /// Slice type: `[]T`
    Slice { l_brack: Span, elem: TypeId },

    /// Array type: `[N]T`
    Array {
        l_brack: Span,
        len: ArrayLen,
        elem: TypeId,
    },

    /// Map type: `map[K]V`
    Map {
        map_pos: Span,
        key: TypeId,
        val: TypeId,
    },

    /// Channel type: `chan T`, `<-chan T`, or `chan<- T`
    Chan {
        dir: ChanDir,
        chan_pos: Span,
        elem: TypeId,
    },

    /// Struct type: `struct { ... }`
    Struct {
        struct_pos: Span,
        fields: ListRef<FieldId>,
    },

    /// Interface type: `interface { ... }`
    Interface {
        interface_pos: Span,
        elems: ListRef<InterfaceElem>,
    },

    /// Function type: `func(...) ...`
    Func { func_pos: Span, sig: SignatureId },

    /// Parenthesized type: `(T)`
    Paren { l_paren: Span, typ: TypeId },

    /// Bad type (error recovery)
    Bad(Span),
}

/// Array length specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum ArrayLen {
    /// Explicit length expression: `[10]int`, `[maxLen]int`
    Expr(ExprId),
    /// Inferred length: `[...]int`
    Ellipsis(Span),
}

/// Channel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// Bidirectional: `chan T`
    Both,
    /// Send-only: `chan<- T`
    Send,
    /// Receive-only: `<-chan T`
    Recv,
}

/// Interface element: a method or an embedded type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WalkAst)]
pub enum InterfaceElem {
    /// Method specification: `Method(...) ...`
    Method {
        name: Ident,
        name_pos: Span,
        sig: SignatureId,
    },

    /// Embedded type: `io.Reader`, `childIntf`
    Embedded(TypeId),
}
