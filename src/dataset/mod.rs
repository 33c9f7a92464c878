mod graph;
mod load;
mod parse;

pub use graph::ClassGraph;
#[cfg(test)]
pub use graph::{ClassNode, DatasetError, EdgeRecord};
pub use load::load_class_graph;
