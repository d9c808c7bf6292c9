pub mod escape;
pub mod serialize;
pub mod traverse;

mod types;

pub use types::{Id, Node, NodeId};
