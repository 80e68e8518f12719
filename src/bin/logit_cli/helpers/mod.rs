// ABOUTME: Helper modules for logit-cli
// ABOUTME: Provides output formatting shared by the subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

pub mod display;
