pub mod capacity;
pub mod edge;
pub mod network;

pub use capacity::{Capacity, FlowValue};
pub use edge::Edge;
pub use network::{Network, VirtualTerminals};

/// Amount type used by scenario files and the command line tool.
pub type Amount = i64;
