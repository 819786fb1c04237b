//! Business logic use cases

pub mod flow;
