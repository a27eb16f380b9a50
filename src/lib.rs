// Copyright 2026 PathSim Contributors
// SPDX-License-Identifier: Apache-2.0

//! PathSim portal library — content registry and screenshot tile capture
//! for the PathSim homepage.
//!
//! This library crate exposes the core modules for integration testing.

#![allow(clippy::new_without_default)]

pub mod capture;
pub mod cli;
pub mod registry;
pub mod renderer;
