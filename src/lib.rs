// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

mod debug;
pub mod error;
pub mod node;
pub mod options;
pub mod writer;
