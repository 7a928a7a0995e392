// Copyright (c) 2025, Jeremy Holder
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for stories, scenes, and choices.

pub mod scene;
pub mod story;
