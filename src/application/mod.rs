//! Application layer containing the policy engine facade.
//!
//! This module defines the `CancellationPolicyEngine`, the entry point the
//! booking workflow calls with trip timing, cost, and funding inputs. Every
//! operation is pure and synchronous; identical inputs always produce
//! identical outputs.

pub mod engine;
