use crate::flow::{FlowEdge, FlowNode};
use ahash::{AHashMap, AHashSet};

/// The core recursive engine for a single level-resolution pass.
///
/// Holds the reverse adjacency (child to parents) built from the edge list,
/// with dangling edges already filtered out, and the global memo of settled
/// levels. Borrows all ids from the input slices for the duration of the
/// pass; the resulting map owns its keys.
pub(super) struct LevelEngine<'a> {
    parents: AHashMap<&'a str, Vec<&'a str>>,
    pub(super) levels: AHashMap<String, u32>,
    pub(super) dangling_edges: usize,
    pub(super) cycles_broken: usize,
}

impl<'a> LevelEngine<'a> {
    pub(super) fn new(nodes: &'a [FlowNode], edges: &'a [FlowEdge]) -> Self {
        let known: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

        let mut parents: AHashMap<&'a str, Vec<&'a str>> = AHashMap::new();
        let mut dangling_edges = 0;
        for edge in edges {
            if !known.contains(edge.source.as_str()) || !known.contains(edge.target.as_str()) {
                log::warn!(
                    "Skipping dangling edge '{}' ({} -> {})",
                    edge.id,
                    edge.source,
                    edge.target
                );
                dangling_edges += 1;
                continue;
            }
            parents
                .entry(edge.target.as_str())
                .or_default()
                .push(edge.source.as_str());
        }

        Self {
            parents,
            levels: AHashMap::with_capacity(nodes.len()),
            dangling_edges,
            cycles_broken: 0,
        }
    }

    /// Resolves every node in the input order, filling the level memo.
    pub(super) fn resolve_all(&mut self, nodes: &'a [FlowNode]) {
        // Roots have no (valid) incoming edge and settle at level 0 eagerly.
        for node in nodes {
            if !self.parents.contains_key(node.id.as_str()) {
                self.levels.insert(node.id.clone(), 0);
            }
        }

        let mut chain = AHashSet::new();
        for node in nodes {
            self.resolve(node.id.as_str(), &mut chain);
        }
    }

    /// Memoized recursion over parents: `level(n) = 1 + max(level(p))`, where
    /// the max over an empty parent set is -1 so roots unify with the general
    /// case. `chain` tracks the current call path for cycle detection.
    fn resolve(&mut self, id: &'a str, chain: &mut AHashSet<&'a str>) -> u32 {
        if let Some(&level) = self.levels.get(id) {
            return level;
        }

        if chain.contains(id) {
            // Back-edge into the current chain: break the cycle by taking
            // whatever partial information the already-settled parents give.
            self.cycles_broken += 1;
            log::debug!("Cycle detected at node '{}', falling back to settled parents", id);
            let settled_max = self
                .parents
                .get(id)
                .into_iter()
                .flatten()
                .filter_map(|parent| self.levels.get(*parent).copied())
                .max();
            return settled_max.map_or(0, |max| max + 1);
        }

        chain.insert(id);
        let parent_ids: Vec<&'a str> = self.parents.get(id).cloned().unwrap_or_default();
        let mut max_parent_level: Option<u32> = None;
        for parent in parent_ids {
            let parent_level = self.resolve(parent, chain);
            max_parent_level = Some(max_parent_level.map_or(parent_level, |m| m.max(parent_level)));
        }
        chain.remove(id);

        let level = max_parent_level.map_or(0, |max| max + 1);
        self.levels.insert(id.to_string(), level);
        level
    }
}
