// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A leaf that is neither text, a marker, nor a sequence,
    /// visited with auto-coercion disabled.
    ///
    /// `value` is the offending value's debug rendering.
    /// `trace` is empty unless debug mode appended a stack snapshot.
    #[error(
        "Unable to process node {value}.\n\
         Either convert it to text or a sequence of nodes, \
         or enable auto-coercion to handle values of this kind.{trace}"
    )]
    UnsupportedNode { value: String, trace: String },

    /// The output sink refused a chunk.
    /// Partial output already delivered to the sink stands.
    #[error("Error while writing a chunk to the output sink: {source}{trace}")]
    Sink {
        source: fmt::Error,
        trace: String,
    },
}

pub type RenderResult<T> = std::result::Result<T, Error>;
