/// Datapath against the closed-form model.
pub mod datapath;

/// Pre-adder, selector, multiplier and post-combine in isolation.
pub mod lanes;
