//! Adjacency, rank, and reachability helpers over a flow document's edge
//! list. Everything here is keyed by node declaration order so results do
//! not depend on hash-map iteration.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::model::{FlowEdge, FlowNode};

#[derive(Debug)]
pub struct FlowGraph {
    ids: Vec<String>,
    order: HashMap<String, usize>,
    outgoing: HashMap<String, Vec<String>>,
    incoming: HashMap<String, Vec<String>>,
}

impl FlowGraph {
    /// Build the adjacency maps. Edges whose endpoints are not in the node
    /// set are skipped here; the validator reports them separately.
    pub fn build(nodes: &[FlowNode], edges: &[FlowEdge]) -> Self {
        let mut ids = Vec::with_capacity(nodes.len());
        let mut order = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if !order.contains_key(&node.id) {
                order.insert(node.id.clone(), ids.len());
                ids.push(node.id.clone());
            }
        }

        let mut outgoing: HashMap<String, Vec<String>> = HashMap::new();
        let mut incoming: HashMap<String, Vec<String>> = HashMap::new();
        for edge in edges {
            if !order.contains_key(&edge.source) || !order.contains_key(&edge.target) {
                continue;
            }
            outgoing
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
            incoming
                .entry(edge.target.clone())
                .or_default()
                .push(edge.source.clone());
        }

        Self {
            ids,
            order,
            outgoing,
            incoming,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Nodes with no incoming edge, in declaration order.
    pub fn entry_nodes(&self) -> Vec<&str> {
        self.ids
            .iter()
            .filter(|id| self.incoming.get(id.as_str()).is_none_or(|v| v.is_empty()))
            .map(|id| id.as_str())
            .collect()
    }

    /// Nodes reachable from the given starting set, following edge
    /// direction.
    pub fn reachable_from(&self, starts: &[&str]) -> HashSet<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        for &start in starts {
            if self.order.contains_key(start) && seen.insert(start.to_string()) {
                queue.push_back(start);
            }
        }
        while let Some(id) = queue.pop_front() {
            if let Some(nexts) = self.outgoing.get(id) {
                for next in nexts {
                    if seen.insert(next.clone()) {
                        queue.push_back(next.as_str());
                    }
                }
            }
        }
        seen
    }

    /// Longest-path rank per node via a Kahn-style topological sweep.
    ///
    /// The ready queue is keyed by declaration order so the result is
    /// stable. When a cycle blocks progress, the earliest remaining node is
    /// forced through and its pending incoming edges are treated as
    /// back-edges.
    pub fn ranks(&self) -> HashMap<String, usize> {
        let order_key = |id: &str| -> usize { self.order.get(id).copied().unwrap_or(usize::MAX) };

        let mut indeg: HashMap<&str, usize> = HashMap::new();
        for id in &self.ids {
            let count = self.incoming.get(id).map(|v| v.len()).unwrap_or(0);
            indeg.insert(id.as_str(), count);
        }

        let mut ready: BinaryHeap<Reverse<(usize, &str)>> = BinaryHeap::new();
        for id in &self.ids {
            if indeg.get(id.as_str()).copied().unwrap_or(0) == 0 {
                ready.push(Reverse((order_key(id), id.as_str())));
            }
        }

        let mut topo: Vec<&str> = Vec::with_capacity(self.ids.len());
        let mut processed: HashSet<&str> = HashSet::new();
        loop {
            while let Some(Reverse((_, id))) = ready.pop() {
                if !processed.insert(id) {
                    continue;
                }
                topo.push(id);
                if let Some(nexts) = self.outgoing.get(id) {
                    for next in nexts {
                        if processed.contains(next.as_str()) {
                            continue;
                        }
                        if let Some(deg) = indeg.get_mut(next.as_str()) {
                            *deg = deg.saturating_sub(1);
                            if *deg == 0 {
                                ready.push(Reverse((order_key(next), next.as_str())));
                            }
                        }
                    }
                }
            }

            if topo.len() >= self.ids.len() {
                break;
            }

            // Cycle: force the earliest remaining node through.
            let next = self
                .ids
                .iter()
                .find(|id| !processed.contains(id.as_str()));
            match next {
                Some(id) => ready.push(Reverse((order_key(id), id.as_str()))),
                None => break,
            }
        }

        let topo_index: HashMap<&str, usize> = topo
            .iter()
            .enumerate()
            .map(|(idx, id)| (*id, idx))
            .collect();

        let mut ranks: HashMap<String, usize> = HashMap::new();
        for id in &topo {
            let rank = ranks.get(*id).copied().unwrap_or(0);
            ranks.entry((*id).to_string()).or_insert(rank);
            let Some(nexts) = self.outgoing.get(*id) else {
                continue;
            };
            let from_idx = topo_index[*id];
            for next in nexts {
                // Back-edges (targets earlier in the sweep) do not deepen
                // the rank.
                let to_idx = topo_index.get(next.as_str()).copied().unwrap_or(from_idx);
                if to_idx <= from_idx {
                    continue;
                }
                let entry = ranks.entry(next.clone()).or_insert(0);
                *entry = (*entry).max(rank + 1);
            }
        }
        ranks
    }
}
