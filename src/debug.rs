// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::node::Node;
use std::collections::VecDeque;
use std::fmt::Write;

/// How many recently pulled items are retained per stack level.
const RECENT_ITEMS: usize = 8;

/// Traversal history recorder, injected into the writer when its
/// options request debug mode.
///
/// The writer calls into it at cursor creation, item pull, cursor pop
/// and error exit. On the success path it never influences output;
/// on failure it renders a snapshot of every live stack level into the
/// error's trace, preserving the error kind.
#[derive(Default)]
pub(crate) struct StackTrace {
    levels: Vec<Level>,
}

struct Level {
    /// Items pulled from this cursor so far, the failing one included.
    pulled: usize,
    /// Descriptions of the most recently pulled items.
    recent: VecDeque<String>,
    /// Descriptions of every item, for cursors over sequences
    /// whose length is known at push time.
    items: Option<Vec<String>>,
}

/// One-level description of a node.
///
/// Nested sequences are summarized by length rather than recursed into,
/// so capturing an item costs the same no matter how deep the subtree
/// below it is, and deep trees render in debug mode just as they do
/// without it.
fn describe(node: &Node) -> String {
    match node {
        Node::Sequence(children) => format!("Sequence(<{} items>)", children.len()),
        Node::Text(_)
        | Node::DepthChange(_)
        | Node::Indentation(_)
        | Node::Newline
        | Node::Lazy(_)
        | Node::Foreign(_) => format!("{node:?}"),
    }
}

impl StackTrace {
    /// A new cursor was pushed onto the writer's stack.
    /// `known_items` is the full sequence for eager cursors,
    /// `None` for lazily produced ones.
    pub(crate) fn pushed(&mut self, known_items: Option<&[Node]>) {
        self.levels.push(Level {
            pulled: 0,
            recent: VecDeque::with_capacity(RECENT_ITEMS),
            items: known_items.map(|items| items.iter().map(describe).collect()),
        });
    }

    /// The top cursor yielded an item.
    pub(crate) fn pulled(&mut self, item: &Node) {
        if let Some(level) = self.levels.last_mut() {
            level.pulled += 1;
            if level.recent.len() == RECENT_ITEMS {
                level.recent.pop_front();
            }
            level.recent.push_back(describe(item));
        }
    }

    /// The top cursor was exhausted and popped.
    pub(crate) fn popped(&mut self) {
        self.levels.pop();
    }

    /// Appends a snapshot of the live stack to the error's trace,
    /// keeping its kind unchanged.
    pub(crate) fn annotate(&self, error: Error) -> Error {
        let snapshot = self.render();
        match error {
            Error::UnsupportedNode { value, mut trace } => {
                trace.push_str(&snapshot);
                Error::UnsupportedNode { value, trace }
            }
            Error::Sink { source, mut trace } => {
                trace.push_str(&snapshot);
                Error::Sink { source, trace }
            }
        }
    }

    fn render(&self) -> String {
        let mut buffer = String::from("\n\nWriter stack:\n");
        for (index, level) in self.levels.iter().enumerate() {
            // Writing to a String is infallible.
            let _ = writeln!(
                buffer,
                "Level #{index}: ({} items processed)",
                level.pulled
            );
            if let Some(items) = &level.items {
                for (sub_index, item) in items.iter().enumerate() {
                    let _ = writeln!(buffer, "  item {sub_index}: {item}");
                }
            } else {
                let _ = writeln!(buffer, "  Last {} items processed:", level.recent.len());
                for item in &level.recent {
                    let _ = writeln!(buffer, "    {item}");
                }
            }
        }
        buffer
    }
}
