// ABOUTME: Re-exports helper modules for the fitflex CLI
// ABOUTME: Provides access to output formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

pub mod display;
