//! Plain-text edge lists used to seed a graph.

pub mod edge_list;

pub use edge_list::{parse_edge_line, EdgeListReader, LoadReport};
