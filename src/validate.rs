//! Best-effort structural checks over a flow document. Issues are
//! diagnostics, not hard failures; the canvas is expected to stay
//! permissive and render what it can.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::graph::FlowGraph;
use crate::model::FlowDocument;

static NODE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowIssue {
    #[error("duplicate node id `{id}`")]
    DuplicateNodeId { id: String },
    #[error("node id `{id}` contains unsupported characters")]
    InvalidNodeId { id: String },
    #[error("edge #{index} references unknown node `{id}`")]
    UnknownEndpoint { index: usize, id: String },
    #[error("edge #{index} connects `{id}` to itself")]
    SelfLoop { index: usize, id: String },
    #[error("flow has no entry node; every node has an incoming edge")]
    NoEntryNode,
    #[error("node `{id}` is not reachable from any entry node")]
    UnreachableNode { id: String },
}

/// Collect structural issues in deterministic document order: node checks
/// first, then edge checks, then graph-wide checks.
pub fn validate_flow(doc: &FlowDocument) -> Vec<FlowIssue> {
    let mut issues = Vec::new();

    let mut seen: HashSet<&str> = HashSet::new();
    for node in &doc.nodes {
        if !seen.insert(node.id.as_str()) {
            issues.push(FlowIssue::DuplicateNodeId {
                id: node.id.clone(),
            });
            continue;
        }
        if !NODE_ID_RE.is_match(&node.id) {
            issues.push(FlowIssue::InvalidNodeId {
                id: node.id.clone(),
            });
        }
    }

    for (index, edge) in doc.edges.iter().enumerate() {
        for endpoint in [&edge.source, &edge.target] {
            if !seen.contains(endpoint.as_str()) {
                issues.push(FlowIssue::UnknownEndpoint {
                    index,
                    id: endpoint.clone(),
                });
            }
        }
        if edge.source == edge.target {
            issues.push(FlowIssue::SelfLoop {
                index,
                id: edge.source.clone(),
            });
        }
    }

    let graph = FlowGraph::build(&doc.nodes, &doc.edges);
    if graph.is_empty() {
        return issues;
    }
    let mut entries = graph.entry_nodes();
    if entries.is_empty() {
        issues.push(FlowIssue::NoEntryNode);
        // Fall back to the first declared node so disconnected clusters
        // are still flagged.
        entries = vec![doc.nodes[0].id.as_str()];
    }
    let reachable = graph.reachable_from(&entries);
    for node in &doc.nodes {
        if !reachable.contains(&node.id) {
            issues.push(FlowIssue::UnreachableNode {
                id: node.id.clone(),
            });
        }
    }

    issues
}
