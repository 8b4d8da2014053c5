// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

/// A value of no recognized node kind,
/// carried through the tree for diagnostics and optional coercion.
///
/// Blanket-implemented for everything that is both printable and
/// debug-printable, so tree producers can wrap numbers, paths, etc.
/// without ceremony.
pub trait ForeignValue: fmt::Display + fmt::Debug {}

impl<T: fmt::Display + fmt::Debug> ForeignValue for T {}

/// One node of a content tree.
///
/// The writer classifies every value it visits into exactly one of these
/// cases, in this priority order, so a marker can never be mistaken for
/// a sequence of nodes.
pub enum Node {
    /// Atomic text, emitted verbatim as a single chunk.
    Text(Cow<'static, str>),
    /// Mutates the writer's current depth; emits nothing.
    DepthChange(DepthChange),
    /// Emits the indentation whitespace for the current line
    /// as a single chunk; never mutates depth.
    Indentation(Indentation),
    /// Emits the configured newline string as a single chunk.
    Newline,
    /// An ordered sequence of child nodes, flattened in place.
    Sequence(Vec<Node>),
    /// A lazily produced sequence of child nodes.
    /// Pulled one item at a time, never collected up front,
    /// so trees may be arbitrarily large.
    Lazy(Box<dyn Iterator<Item = Node>>),
    /// Anything else.
    /// Fatal at traversal time,
    /// unless auto-coercion renders it via its [`fmt::Display`] form.
    Foreign(Box<dyn ForeignValue>),
}

impl Node {
    #[must_use]
    pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(content.into())
    }

    /// Increases the current depth by one.
    #[must_use]
    pub const fn indent() -> Self {
        Self::DepthChange(DepthChange::Relative(1))
    }

    /// Decreases the current depth by one.
    #[must_use]
    pub const fn dedent() -> Self {
        Self::DepthChange(DepthChange::Relative(-1))
    }

    /// Indentation whitespace for the current depth.
    #[must_use]
    pub const fn indentation() -> Self {
        Self::Indentation(Indentation::Current)
    }

    #[must_use]
    pub const fn newline() -> Self {
        Self::Newline
    }

    /// One fully indented and terminated line of text:
    /// `[indentation, content, newline]`.
    #[must_use]
    pub fn line(content: impl Into<Cow<'static, str>>) -> Self {
        Self::Sequence(vec![
            Self::indentation(),
            Self::Text(content.into()),
            Self::Newline,
        ])
    }

    /// Wraps a lazily produced sequence of nodes.
    #[must_use]
    pub fn lazy<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: 'static,
    {
        Self::Lazy(Box::new(nodes.into_iter()))
    }

    /// Wraps a value of no recognized node kind.
    #[must_use]
    pub fn foreign(value: impl ForeignValue + 'static) -> Self {
        Self::Foreign(Box::new(value))
    }
}

impl From<&'static str> for Node {
    fn from(content: &'static str) -> Self {
        Self::Text(Cow::Borrowed(content))
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Self::Text(Cow::Owned(content))
    }
}

impl From<Cow<'static, str>> for Node {
    fn from(content: Cow<'static, str>) -> Self {
        Self::Text(content)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Self>) -> Self {
        Self::Sequence(children)
    }
}

// Hand-written because lazy iterators are opaque.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(content) => f.debug_tuple("Text").field(content).finish(),
            Self::DepthChange(change) => f.debug_tuple("DepthChange").field(change).finish(),
            Self::Indentation(indentation) => {
                f.debug_tuple("Indentation").field(indentation).finish()
            }
            Self::Newline => f.write_str("Newline"),
            Self::Sequence(children) => f.debug_tuple("Sequence").field(children).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
            Self::Foreign(value) => f.debug_tuple("Foreign").field(value).finish(),
        }
    }
}

/// A request to alter the writer's current depth.
///
/// Applying one never emits text; it only mutates writer state,
/// and the new depth is visible to every node visited afterwards,
/// at any nesting, until the next change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthChange {
    /// New depth = current depth + offset.
    Relative(isize),
    /// New depth = value, ignoring the current depth.
    Absolute(isize),
}

impl DepthChange {
    #[must_use]
    pub const fn new_depth_for(self, depth: isize) -> isize {
        match self {
            Self::Relative(offset) => depth + offset,
            Self::Absolute(value) => value,
        }
    }
}

/// A request to emit the indentation whitespace of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indentation {
    /// Indents = current depth.
    Current,
    /// Indents = current depth + offset.
    Relative(isize),
    /// Indents = value, ignoring the current depth.
    Absolute(isize),
}

impl Indentation {
    /// The number of indents to emit at the given depth.
    /// Negative results clamp to zero whitespace.
    #[must_use]
    pub fn indents_for(self, depth: isize) -> usize {
        let indents = match self {
            Self::Current => depth,
            Self::Relative(offset) => depth + offset,
            Self::Absolute(value) => value,
        };
        usize::try_from(indents).unwrap_or(0)
    }
}
