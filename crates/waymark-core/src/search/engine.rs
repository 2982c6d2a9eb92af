use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::policy::{PriorityKey, SearchPolicy};
use super::types::{Costs, Guidance, SearchOptions, SearchResult};
use crate::error::{Result, WaymarkError};
use crate::graph::{GraphProvider, NodeId, Point};

/// Queue record: a node reached along `path` with accumulated `costs`
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub key: PriorityKey,
    /// Push order, breaks ties between equal keys (earlier first)
    pub sequence: u64,
    pub node: NodeId,
    pub costs: Costs,
    /// Nodes before `node`, starting at the source
    pub path: Vec<NodeId>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Min-priority queue of frontier entries
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    pushed: u64,
}

impl Frontier {
    fn push(&mut self, key: PriorityKey, node: NodeId, costs: Costs, path: Vec<NodeId>) {
        self.heap.push(Reverse(FrontierEntry {
            key,
            sequence: self.pushed,
            node,
            costs,
            path,
        }));
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

/// Heuristic bound to the target's coordinate
struct Estimator<'a> {
    provider: &'a dyn GraphProvider,
    guidance: Guidance,
    target: Point,
}

impl Estimator<'_> {
    fn estimate(&self, node: &str) -> Result<f64> {
        let point = coordinate(self.provider, node)?;
        Ok(self
            .guidance
            .heuristic
            .estimate(point, self.target, self.guidance.weight))
    }
}

fn coordinate(provider: &dyn GraphProvider, node: &str) -> Result<Point> {
    provider
        .coordinate(node)
        .ok_or_else(|| WaymarkError::MissingCoordinate {
            node: node.to_string(),
        })
}

/// Run one best-first search from `opts.source` to `opts.target`
///
/// Returns `Ok(None)` when the queue empties without popping the target.
/// Errors only when the provider lists an edge it cannot describe.
/// With `guidance` set, the heuristic is evaluated at every pushed neighbor;
/// without it the estimate is zero.
pub fn best_first_search(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
    policy: &SearchPolicy,
    guidance: Option<Guidance>,
) -> Result<Option<SearchResult>> {
    let estimator = match guidance {
        Some(guidance) => Some(Estimator {
            provider,
            guidance,
            target: coordinate(provider, &opts.target)?,
        }),
        None => None,
    };

    let mut frontier = Frontier::default();
    let mut best_known: HashMap<NodeId, f64> = HashMap::new();
    let mut explored: HashSet<NodeId> = HashSet::new();
    let mut expanded = 0usize;

    best_known.insert(opts.source.clone(), 0.0);
    frontier.push(
        PriorityKey::ZERO,
        opts.source.clone(),
        Costs::default(),
        Vec::new(),
    );

    while let Some(entry) = frontier.pop() {
        if policy.closed_set && !explored.insert(entry.node.clone()) {
            continue;
        }

        expanded += 1;
        tracing::trace!(node = %entry.node, distance = entry.costs.distance, energy = entry.costs.energy, expanded, "expand");

        if entry.node == opts.target {
            let FrontierEntry {
                node,
                costs,
                mut path,
                ..
            } = entry;
            path.push(node);

            tracing::debug!(distance = costs.distance, expanded, hops = path.len() - 1, "target_reached");
            return Ok(Some(SearchResult {
                path,
                distance: costs.distance,
                expanded,
                energy: policy.tracks_energy.then_some(costs.energy),
            }));
        }

        let current = entry.node.as_str();
        let mut prefix = entry.path;
        prefix.push(entry.node.clone());

        for neighbor in provider.neighbors(current) {
            let distance = provider
                .distance(current, neighbor)
                .ok_or_else(|| WaymarkError::missing_edge_data("distance", current, neighbor))?;
            let energy = if policy.tracks_energy {
                provider
                    .cost(current, neighbor)
                    .ok_or_else(|| WaymarkError::missing_edge_data("cost", current, neighbor))?
            } else {
                0.0
            };

            let costs = Costs {
                distance: entry.costs.distance + distance,
                energy: entry.costs.energy + energy,
            };

            if !policy.within_budget(costs) {
                continue;
            }

            let relaxed = policy.relax_on.of(costs);
            let improves = best_known
                .get(neighbor.as_str())
                .map_or(true, |&known| relaxed < known);
            if !improves {
                continue;
            }

            let estimate = match &estimator {
                Some(estimator) => estimator.estimate(neighbor)?,
                None => 0.0,
            };

            best_known.insert(neighbor.clone(), relaxed);
            frontier.push(
                policy.layout.compose(costs, estimate),
                neighbor.clone(),
                costs,
                prefix.clone(),
            );
        }
    }

    tracing::debug!(expanded, "frontier_exhausted");
    Ok(None)
}
