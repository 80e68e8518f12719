// ABOUTME: Re-exports command modules for logit-cli
// ABOUTME: Provides the extract and nutrition subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

pub mod extract;
pub mod nutrition;
