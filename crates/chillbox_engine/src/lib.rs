//! Inventory controller for Chillbox.
//!
//! This crate provides:
//! - [`InventoryController`] - Applies operations atomically, with multi-step undo
//! - [`ApplyResult`] / [`RejectionReason`] - What an operation did, as data
//! - [`FeedbackSink`] / [`DisplaySink`] - Seams for speech and display collaborators
//!
//! # Lifecycle
//!
//! Each operation moves `Received → Validated → Applied`, or
//! `Received → Rejected`. Nothing is persisted before `Applied`, and the
//! quantity write and history append of one operation commit together.
//! Storage faults are the only [`chillbox_foundation::Error`]s; everything a
//! user can cause is an [`ApplyResult::Rejected`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod controller;
pub mod outcome;
pub mod sink;

pub use controller::{InventoryController, Stage};
pub use outcome::{ApplyResult, RejectionReason};
pub use sink::{DisplaySink, FeedbackSink};
