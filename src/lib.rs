//! Ordered, labeled tree abstraction for dialog-state inspection.
//!
//! The core is [`node::TreeNode`] (data model, serialization, traversal,
//! canonical ordering) and [`printer::PrettyPrinter`] (path-compressed dotted
//! rendering). [`reader`] and [`cli`] are thin I/O glue for dumping
//! line-delimited JSON conversation logs.

pub mod cli;
pub mod errors;
pub mod escape;
pub mod node;
pub mod printer;
pub mod reader;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use escape::{escape_node_name, unescape_node_name};
pub use node::{NodeName, TreeNode};
pub use printer::PrettyPrinter;
