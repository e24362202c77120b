//! Integration tests for Layer 1: Storage
//!
//! Tests for schema migrations and the store contract shared by the SQLite
//! and in-memory stores.

mod contract;
mod migrations;
mod sqlite;
