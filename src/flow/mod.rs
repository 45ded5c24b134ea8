pub mod graph;
pub mod io;
pub mod node;

pub use graph::*;
pub use io::*;
pub use node::*;
