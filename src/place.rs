//! Initial grid placement for nodes that arrive without a position.
//!
//! Ranks become columns, declaration order becomes the row within a
//! column. Nodes that already carry a position are left exactly where the
//! user put them; the collision pass afterwards deals with any overlap.

use crate::config::PlacementConfig;
use crate::graph::FlowGraph;
use crate::model::{FlowEdge, FlowNode, Point};

pub fn assign_missing_positions(
    nodes: &mut [FlowNode],
    edges: &[FlowEdge],
    config: &PlacementConfig,
) {
    if nodes.iter().all(|node| node.position.is_some()) {
        return;
    }

    let graph = FlowGraph::build(nodes, edges);
    let ranks = graph.ranks();
    let max_rank = ranks.values().copied().max().unwrap_or(0);

    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); max_rank + 1];
    for (idx, node) in nodes.iter().enumerate() {
        let rank = ranks.get(&node.id).copied().unwrap_or(0);
        buckets[rank].push(idx);
    }

    // Column origins: each rank is as wide as its widest node.
    let mut column_x = vec![0.0f32; buckets.len()];
    let mut x = 0.0f32;
    for (rank, bucket) in buckets.iter().enumerate() {
        column_x[rank] = x;
        let mut width = 0.0f32;
        for &idx in bucket {
            width = width.max(nodes[idx].size().0);
        }
        if width <= 0.0 {
            width = config.default_width;
        }
        x += width + config.column_gap;
    }

    for (rank, bucket) in buckets.iter().enumerate() {
        let mut y = 0.0f32;
        for &idx in bucket {
            if nodes[idx].position.is_some() {
                continue;
            }
            nodes[idx].position = Some(Point {
                x: column_x[rank],
                y,
            });
            let mut height = nodes[idx].size().1;
            if height <= 0.0 {
                height = config.default_height;
            }
            y += height + config.row_gap;
        }
    }
}
