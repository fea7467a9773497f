// Pathway synthesis: occupation pair → ordered, course-annotated skill tree.
// Stages run in the order of the submodules below; `pipeline` wires them together.

pub mod context;
pub mod cooccurrence;
pub mod enricher;
pub mod error;
pub mod export;
pub mod handlers;
pub mod linker;
pub mod pipeline;
pub mod scorer;
pub mod selector;
pub mod tiers;

#[cfg(test)]
pub(crate) mod fixtures;
