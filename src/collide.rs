//! Pairwise collision resolution for canvas nodes.
//!
//! Overlapping nodes are pushed apart along the axis that needs the least
//! movement to separate them, half the overlap extent each way, until every
//! pair's overlap falls below the configured threshold or the pass budget
//! runs out.

use crate::config::ResolveConfig;
use crate::model::{FlowNode, Point};

type Rect = (f32, f32, f32, f32);

fn padded_rect(pos: Point, size: (f32, f32), margin: f32) -> Rect {
    (
        pos.x - margin,
        pos.y - margin,
        size.0 + margin * 2.0,
        size.1 + margin * 2.0,
    )
}

/// Overlap extent of two rects along each axis. Non-positive extents mean
/// the rects are separated (or merely touching) on that axis.
fn overlap_extents(a: &Rect, b: &Rect) -> (f32, f32) {
    let x = (a.0 + a.2).min(b.0 + b.2) - a.0.max(b.0);
    let y = (a.1 + a.3).min(b.1 + b.3) - a.1.max(b.1);
    (x, y)
}

/// Push overlapping nodes apart until no pair's padded overlap area reaches
/// `overlap_threshold`, bounded by `max_iterations` relaxation passes.
///
/// The returned list has the same length, order, and ids as the input, and
/// every field other than `position` is carried over unchanged. Sizes are
/// snapshotted once; only positions move. A `max_iterations` of zero or
/// less returns the input as-is. The whole routine is deterministic: pairs
/// are visited in input order (i < j), and an exact tie between the two
/// axis extents resolves horizontally.
pub fn resolve_collisions(nodes: &[FlowNode], options: &ResolveConfig) -> Vec<FlowNode> {
    let mut out: Vec<FlowNode> = nodes.to_vec();
    if nodes.len() < 2 || options.max_iterations <= 0 {
        return out;
    }

    let sizes: Vec<(f32, f32)> = nodes.iter().map(|node| node.size()).collect();
    let mut positions: Vec<Point> = nodes
        .iter()
        .map(|node| node.position.unwrap_or_default())
        .collect();
    let mut moved = vec![false; nodes.len()];

    for _ in 0..options.max_iterations {
        let mut any_moved = false;
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let rect_i = padded_rect(positions[i], sizes[i], options.margin);
                let rect_j = padded_rect(positions[j], sizes[j], options.margin);
                let (x_overlap, y_overlap) = overlap_extents(&rect_i, &rect_j);
                // Positive-form guard so NaN extents fail the collision
                // test instead of propagating.
                let colliding = x_overlap > 0.0
                    && y_overlap > 0.0
                    && x_overlap * y_overlap >= options.overlap_threshold;
                if !colliding {
                    continue;
                }

                if x_overlap <= y_overlap {
                    let shift = x_overlap * 0.5;
                    let center_i = rect_i.0 + rect_i.2 * 0.5;
                    let center_j = rect_j.0 + rect_j.2 * 0.5;
                    let (neg, pos) = if center_i <= center_j { (i, j) } else { (j, i) };
                    positions[neg].x -= shift;
                    positions[pos].x += shift;
                } else {
                    let shift = y_overlap * 0.5;
                    let center_i = rect_i.1 + rect_i.3 * 0.5;
                    let center_j = rect_j.1 + rect_j.3 * 0.5;
                    let (neg, pos) = if center_i <= center_j { (i, j) } else { (j, i) };
                    positions[neg].y -= shift;
                    positions[pos].y += shift;
                }
                moved[i] = true;
                moved[j] = true;
                any_moved = true;
            }
        }
        if !any_moved {
            break;
        }
    }

    for (idx, node) in out.iter_mut().enumerate() {
        if moved[idx] {
            node.position = Some(positions[idx]);
        }
    }
    out
}
