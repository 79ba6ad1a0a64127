//! Property-based tests for the spanning-tree algorithm family.
//!
//! Verifies structural invariants (acyclicity, edge counts, edge provenance)
//! for every algorithm, and weight equivalence of the MST algorithms against
//! Kruskal across graph topologies with varied weight distributions.

mod equivalence;
mod strategies;
mod structural;
mod tests;
mod types;
