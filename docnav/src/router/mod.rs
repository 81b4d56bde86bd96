//! Routing: fragment resolution and the page-key route table.

pub mod fragment;
pub mod table;

pub use fragment::{resolve, DEFAULT_PAGE};
pub use table::RouteTable;
