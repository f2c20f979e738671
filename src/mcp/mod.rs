// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Minimal MCP (JSON-RPC 2.0 over stdio) server exposing the weather tool.

pub mod protocol;
pub mod server;

pub use server::{handle_request, serve};
