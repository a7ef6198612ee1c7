//! ID3 decision tree induction over discrete, labeled datasets.

// Modules
pub mod config;
pub mod constants;
pub mod data;
pub mod errors;
pub mod node;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use config::TreeConfig;
pub use data::{Dataset, Record, Value};
pub use errors::TreeError;
pub use node::Node;
pub use tree::{make_tree, Tree};
