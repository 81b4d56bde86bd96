pub mod application;
pub mod environment;
pub mod error;
pub mod renderer;
pub mod router;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{App, EventSource, NavEvent};
pub use environment::{Container, Location};
pub use renderer::PageRenderer;
pub use router::{resolve, RouteTable, DEFAULT_PAGE};
