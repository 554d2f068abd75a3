#[cfg(feature = "cli")]
pub mod cli;
pub mod collide;
pub mod config;
pub mod graph;
pub mod layout;
pub mod model;
pub mod place;
pub mod validate;

#[cfg(feature = "cli")]
pub use cli::run;
pub use collide::resolve_collisions;
pub use config::{Config, PlacementConfig, ResolveConfig, load_config};
pub use layout::auto_layout;
pub use model::{FlowDocument, FlowEdge, FlowNode, NodeSize, Point};
pub use validate::{FlowIssue, validate_flow};
