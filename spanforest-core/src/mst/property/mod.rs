//! Property-based tests for the Kruskal and Prim engines.
//!
//! Checks both engines against a dense-matrix oracle, validates the
//! structural invariants of every forest they return, and confirms the two
//! engines agree with each other across generated topologies.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
#[cfg(test)]
mod tests;
mod types;
