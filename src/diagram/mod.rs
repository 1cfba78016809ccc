pub mod link;
pub mod model;
pub mod node;
pub mod port;

pub use link::*;
pub use model::*;
pub use node::*;
pub use port::*;
