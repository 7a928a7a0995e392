// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for story files and choice artwork.

pub mod media;
pub mod serialization;
