// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::debug::StackTrace;
use crate::error::{Error, RenderResult};
use crate::node::Node;
use crate::options::RenderOptions;
use std::borrow::Cow;
use std::fmt;

/// An iterator over one sequence's immediate children,
/// parked on the writer's stack while deeper sequences are drained.
enum Cursor {
    Sequence(std::vec::IntoIter<Node>),
    Lazy(Box<dyn Iterator<Item = Node>>),
}

impl Iterator for Cursor {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        match self {
            Self::Sequence(nodes) => nodes.next(),
            Self::Lazy(nodes) => nodes.next(),
        }
    }
}

/// Flattens one node tree into an ordered stream of text chunks.
///
/// The traversal is iterative over an explicit stack of cursors,
/// depth-first and left-to-right, so tree depth is bounded by available
/// memory rather than the host call stack. Chunks are produced lazily
/// through the [`Iterator`] impl; dropping the writer mid-stream
/// cancels the traversal with no cleanup required.
///
/// Each instance is bound to exactly one traversal of one root node.
/// The stack is drained destructively, so re-rendering a tree requires
/// constructing it (and a writer) afresh.
pub struct Writer {
    stack: Vec<Cursor>,
    depth: isize,
    options: RenderOptions,
    trace: Option<Box<StackTrace>>,
    failed: bool,
}

impl Writer {
    #[must_use]
    pub fn new(node: Node, options: RenderOptions) -> Self {
        tracing::trace!("Starting node tree traversal at depth {}", options.base_depth);
        let mut trace = options.debug.then(|| Box::new(StackTrace::default()));
        let root = vec![node];
        if let Some(trace) = &mut trace {
            trace.pushed(Some(&root));
        }
        Self {
            stack: vec![Cursor::Sequence(root.into_iter())],
            depth: options.base_depth,
            options,
            trace,
            failed: false,
        }
    }

    /// The depth the next indentation marker would be resolved against.
    #[must_use]
    pub const fn depth(&self) -> isize {
        self.depth
    }

    fn next_chunk(&mut self) -> Option<RenderResult<Cow<'static, str>>> {
        if self.failed {
            return None;
        }
        loop {
            let cursor = self.stack.last_mut()?;
            let Some(node) = cursor.next() else {
                // An exhausted cursor hands control back to the
                // enclosing sequence.
                self.stack.pop();
                if let Some(trace) = &mut self.trace {
                    trace.popped();
                }
                continue;
            };
            if let Some(trace) = &mut self.trace {
                trace.pulled(&node);
            }
            match node {
                Node::Text(content) => return Some(Ok(content)),
                Node::DepthChange(change) => {
                    self.depth = change.new_depth_for(self.depth);
                }
                Node::Indentation(indentation) => {
                    let indents = indentation.indents_for(self.depth);
                    return Some(Ok(Cow::Owned(self.options.indentation.repeat(indents))));
                }
                Node::Newline => return Some(Ok(Cow::Owned(self.options.newline.clone()))),
                Node::Sequence(children) => {
                    if let Some(trace) = &mut self.trace {
                        trace.pushed(Some(&children));
                    }
                    self.stack.push(Cursor::Sequence(children.into_iter()));
                }
                Node::Lazy(nodes) => {
                    if let Some(trace) = &mut self.trace {
                        trace.pushed(None);
                    }
                    self.stack.push(Cursor::Lazy(nodes));
                }
                Node::Foreign(value) => {
                    if self.options.auto_coerce {
                        return Some(Ok(Cow::Owned(value.to_string())));
                    }
                    return Some(Err(self.fail(Error::UnsupportedNode {
                        value: format!("{value:?}"),
                        trace: String::new(),
                    })));
                }
            }
        }
    }

    /// Marks the traversal failed and, in debug mode,
    /// appends the stack snapshot to the error.
    fn fail(&mut self, error: Error) -> Error {
        self.failed = true;
        tracing::debug!("Node tree traversal failed: {error}");
        match &self.trace {
            Some(trace) => trace.annotate(error),
            None => error,
        }
    }

    fn sink_error(&mut self, source: fmt::Error) -> Error {
        self.fail(Error::Sink {
            source,
            trace: String::new(),
        })
    }
}

impl Iterator for Writer {
    type Item = RenderResult<Cow<'static, str>>;

    /// Produces the next text chunk,
    /// in exact depth-first left-to-right leaf order.
    /// After an error the writer is fused.
    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk()
    }
}

/// Processes a node tree and writes out the result to a sink,
/// chunk by chunk as they are produced, without accumulation.
///
/// Partial output may already be in the sink when an error surfaces;
/// there is no rollback.
///
/// # Errors
///
/// Fails on a value of no recognized node kind
/// (unless `options.auto_coerce` is set),
/// or as soon as the sink refuses a chunk.
pub fn dump<W: fmt::Write>(
    node: Node,
    output: &mut W,
    options: &RenderOptions,
) -> RenderResult<()> {
    let mut writer = Writer::new(node, options.clone());
    let mut sink_failure = None;
    for chunk in writer.by_ref() {
        if let Err(source) = output.write_str(&chunk?) {
            sink_failure = Some(source);
            break;
        }
    }
    if let Some(source) = sink_failure {
        return Err(writer.sink_error(source));
    }
    Ok(())
}

/// Processes a node tree and returns the result as a string.
///
/// # Errors
///
/// Fails like [`dump`]; no partial result is returned.
pub fn dumps(node: Node, options: &RenderOptions) -> RenderResult<String> {
    let mut output = String::new();
    dump(node, &mut output, options)?;
    Ok(output)
}
