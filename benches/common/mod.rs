// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides reusable session history generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! Common benchmark utilities and fixtures.

pub mod fixtures;
