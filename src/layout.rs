//! The auto-layout pipeline: assign grid positions to nodes that have
//! none, then relax overlaps away.

use crate::collide::resolve_collisions;
use crate::config::Config;
use crate::model::{FlowDocument, FlowNode};
use crate::place::assign_missing_positions;

/// Lay out a flow document and return its nodes with updated positions.
/// The document itself is never mutated; node order, ids, and all
/// non-position fields are carried through unchanged.
pub fn auto_layout(doc: &FlowDocument, config: &Config) -> Vec<FlowNode> {
    let mut nodes = doc.nodes.clone();
    assign_missing_positions(&mut nodes, &doc.edges, &config.placement);
    resolve_collisions(&nodes, &config.resolve)
}
