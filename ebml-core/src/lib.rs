// ebml-rs
// Copyright (c) 2026 The ebml-rs Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared infrastructure for the `ebml` reader and writer: the common error type, the pull-mode
//! byte-source abstraction, the push-mode byte-sink abstraction, and bit utilities.

pub mod errors;
pub mod io;
pub mod util;
