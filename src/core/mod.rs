pub mod classifier;
pub mod predicates;
