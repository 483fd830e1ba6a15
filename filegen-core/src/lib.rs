// File:    lib.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The main library crate for filegen-core, providing random file generation.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Filegen Core Library
//!
//! This library provides the core functionality for generating files of a
//! requested size in megabytes, filled with random bytes drawn from the
//! operating system's randomness source.

/// Random payload generation and file writing.
pub mod generator;
