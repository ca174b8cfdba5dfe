// ABOUTME: Re-exports command modules for the fitflex CLI
// ABOUTME: Provides access to history and simulation commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

pub mod history;
pub mod simulate;
