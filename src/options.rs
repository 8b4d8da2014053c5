// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// Per-render configuration.
///
/// Passed per call, never process-global,
/// so two renders may use different conventions without interference.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Space(s) or tab(s) representing one level of indentation.
    pub indentation: String,
    /// String used for line termination in the output.
    pub newline: String,
    /// Depth (i.e. number of indents) to start the traversal at.
    pub base_depth: isize,
    /// Whether to render values of no recognized node kind
    /// via their display form,
    /// instead of failing the traversal.
    pub auto_coerce: bool,
    /// Whether to record traversal history per stack level,
    /// and attach a snapshot of the stack to any error.
    ///
    /// Successful output is byte-identical with or without this;
    /// it only adds diagnostic payload on the failure path,
    /// at a small constant cost per stack level.
    pub debug: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indentation: "    ".to_string(),
            newline: "\n".to_string(),
            base_depth: 0,
            auto_coerce: false,
            debug: false,
        }
    }
}
