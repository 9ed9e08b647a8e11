//! Static catalog of type-system concepts to scaffold.
//!
//! The catalog is authored directly as one `const` slice rather than built
//! into nested maps at startup, so the full enumeration is inspectable as
//! plain data and iteration order matches authoring order. Each entry knows
//! how to derive its own output path; nothing here touches the filesystem.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Difficulty/usage-frequency tier. Purely a namespace: the only behavioral
/// effect is the `level{N}` directory segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// Directory segment for this tier (`level1`..`level3`).
    pub fn dir_name(self) -> &'static str {
        match self {
            Level::One => "level1",
            Level::Two => "level2",
            Level::Three => "level3",
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        match level {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One (level, category, name) triple designating a stub to produce.
///
/// `name` keeps its original casing; it becomes the stub title verbatim and
/// is lowercased only when deriving the file name. Names are not sanitized
/// and collisions are not detected; a duplicate derived path is an authoring
/// bug, and the later write silently wins.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CatalogEntry {
    pub level: Level,
    pub category: &'static str,
    pub name: &'static str,
}

impl CatalogEntry {
    /// File name for this entry: the lowercased concept name plus `.md`.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.name.to_lowercase())
    }

    /// Output path relative to the generated tree's base directory:
    /// `level{L}/{category}/{lowercase(name)}.md`.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.level.dir_name())
            .join(self.category)
            .join(self.file_name())
    }
}

const fn e(level: Level, category: &'static str, name: &'static str) -> CatalogEntry {
    CatalogEntry {
        level,
        category,
        name,
    }
}

/// The full enumeration, ordered level 1 → 3 with categories in authoring
/// order. 84 entries.
#[rustfmt::skip]
pub const CATALOG: &[CatalogEntry] = &[
    // Level 1: foundational and frequent use.
    e(Level::One, "primitive", "int"),
    e(Level::One, "primitive", "float"),
    e(Level::One, "primitive", "str"),
    e(Level::One, "primitive", "bool"),
    e(Level::One, "primitive", "bytes"),
    e(Level::One, "primitive", "complex"),
    e(Level::One, "primitive", "None"),
    e(Level::One, "collections", "List"),
    e(Level::One, "collections", "Dict"),
    e(Level::One, "collections", "Tuple"),
    e(Level::One, "collections", "Set"),
    e(Level::One, "collections", "FrozenSet"),
    e(Level::One, "utilities", "Optional"),
    e(Level::One, "utilities", "Union"),
    e(Level::One, "utilities", "Any"),
    e(Level::One, "utilities", "Literal"),
    e(Level::One, "utilities", "Callable"),
    e(Level::One, "utilities", "Annotated"),
    e(Level::One, "utilities", "Final"),
    e(Level::One, "utilities", "ClassVar"),
    e(Level::One, "utilities", "Type"),
    e(Level::One, "abcs", "Iterable"),
    e(Level::One, "abcs", "Iterator"),
    e(Level::One, "abcs", "Sequence"),
    e(Level::One, "abcs", "Mapping"),
    e(Level::One, "abcs", "MutableMapping"),
    e(Level::One, "abcs", "Sized"),
    e(Level::One, "abcs", "Container"),
    e(Level::One, "abcs", "Collection"),
    // Level 2: intermediate use.
    e(Level::Two, "structured", "TypedDict"),
    e(Level::Two, "structured", "NamedTuple"),
    e(Level::Two, "structured", "TypeAlias"),
    e(Level::Two, "structured", "LiteralString"),
    e(Level::Two, "abcs", "ContextManager"),
    e(Level::Two, "abcs", "AsyncContextManager"),
    e(Level::Two, "abcs", "Reversible"),
    e(Level::Two, "abcs", "Hashable"),
    e(Level::Two, "abcs", "SupportsInt"),
    e(Level::Two, "async", "Awaitable"),
    e(Level::Two, "async", "Coroutine"),
    e(Level::Two, "async", "AsyncIterator"),
    e(Level::Two, "async", "AsyncIterable"),
    e(Level::Two, "async", "Generator"),
    e(Level::Two, "callable", "Callable_Args"),
    e(Level::Two, "callable", "TypeGuard"),
    e(Level::Two, "callable", "NewType"),
    e(Level::Two, "tools", "overload"),
    e(Level::Two, "tools", "cast"),
    e(Level::Two, "tools", "reveal_type"),
    e(Level::Two, "tools", "assert_type"),
    e(Level::Two, "tools", "assert_never"),
    // Level 3: advanced and metaprogramming.
    e(Level::Three, "generics", "Generic"),
    e(Level::Three, "generics", "TypeVar"),
    e(Level::Three, "generics", "TypeVarTuple"),
    e(Level::Three, "generics", "ParamSpec"),
    e(Level::Three, "generics", "Concatenate"),
    e(Level::Three, "generics", "Unpack"),
    e(Level::Three, "generics", "Self"),
    e(Level::Three, "protocols", "Protocol"),
    e(Level::Three, "protocols", "runtime_checkable"),
    e(Level::Three, "protocols", "is_protocol"),
    e(Level::Three, "protocols", "get_protocol_members"),
    e(Level::Three, "internals", "ForwardRef"),
    e(Level::Three, "internals", "get_args"),
    e(Level::Three, "internals", "get_origin"),
    e(Level::Three, "internals", "get_type_hints"),
    e(Level::Three, "internals", "TypeAliasType"),
    e(Level::Three, "internals", "NoReturn"),
    e(Level::Three, "internals", "Never"),
    e(Level::Three, "internals", "NoDefault"),
    e(Level::Three, "domain", "BinaryIO"),
    e(Level::Three, "domain", "IO"),
    e(Level::Three, "domain", "TextIO"),
    e(Level::Three, "domain", "Match"),
    e(Level::Three, "domain", "Pattern"),
    e(Level::Three, "domain", "AnyStr"),
    e(Level::Three, "decorators", "dataclass_transform"),
    e(Level::Three, "decorators", "final"),
    e(Level::Three, "decorators", "override"),
    e(Level::Three, "decorators", "no_type_check"),
    e(Level::Three, "decorators", "no_type_check_decorator"),
    e(Level::Three, "decorators", "ReadOnly"),
    e(Level::Three, "decorators", "Required"),
    e(Level::Three, "decorators", "NotRequired"),
];
