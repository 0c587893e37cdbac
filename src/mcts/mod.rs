pub mod node;
pub mod precursor;

pub use node::Node;
pub use precursor::Precursor;
