pub mod page;
pub mod roa;
pub mod trust_anchor;
