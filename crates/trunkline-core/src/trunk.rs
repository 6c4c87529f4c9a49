//! # Trunk-line graph
//!
//! Trunk lines form an undirected graph whose nodes are area codes. Storing
//! the relation once, keyed by area code, keeps it symmetric by construction:
//! connecting `A` to `B` is the same edge as connecting `B` to `A`, and
//! removing it removes it from both ends.
//!
//! Self-loops are allowed. A switchboard connected to itself lists its own
//! area code once among its trunk lines.
//!
//! ```rust
//! use trunkline_core::TrunkGraph;
//!
//! let mut trunks = TrunkGraph::new();
//! trunks.connect(410, 443);
//! trunks.connect(443, 301);
//!
//! assert!(trunks.is_reachable(410, 301));
//! assert!(trunks.is_reachable(301, 410));
//!
//! trunks.disconnect(443, 301);
//! assert!(!trunks.is_reachable(410, 301));
//! ```

use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Dfs;

use crate::phone::AreaCode;

/// Symmetric adjacency between switchboards
#[derive(Debug, Clone, Default)]
pub struct TrunkGraph {
    graph: UnGraphMap<AreaCode, ()>,
}

impl TrunkGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraphMap::new(),
        }
    }

    /// Register a switchboard with no trunk lines. No-op if already present.
    pub fn add_switchboard(&mut self, area_code: AreaCode) {
        self.graph.add_node(area_code);
    }

    /// Drop a switchboard and every trunk line touching it
    pub fn remove_switchboard(&mut self, area_code: AreaCode) -> bool {
        self.graph.remove_node(area_code)
    }

    /// Add the trunk line `a`–`b`. Returns `false` if it already existed.
    pub fn connect(&mut self, a: AreaCode, b: AreaCode) -> bool {
        self.graph.add_edge(a, b, ()).is_none()
    }

    /// Remove the trunk line `a`–`b`. Returns `false` if there was none.
    pub fn disconnect(&mut self, a: AreaCode, b: AreaCode) -> bool {
        self.graph.remove_edge(a, b).is_some()
    }

    pub fn is_connected(&self, a: AreaCode, b: AreaCode) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// Direct trunk-line peers of `area_code`
    pub fn neighbors(&self, area_code: AreaCode) -> impl Iterator<Item = AreaCode> + '_ {
        self.graph.neighbors(area_code)
    }

    pub fn degree(&self, area_code: AreaCode) -> usize {
        self.neighbors(area_code).count()
    }

    /// Number of distinct trunk lines
    pub fn line_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn clear(&mut self) {
        self.graph.clear();
    }

    /// Depth-first existence check for a path of trunk lines from `from` to `to`.
    ///
    /// A switchboard always reaches itself, even with no trunk lines.
    pub fn is_reachable(&self, from: AreaCode, to: AreaCode) -> bool {
        if from == to {
            return true;
        }

        let mut dfs = Dfs::new(&self.graph, from);
        while let Some(area_code) = dfs.next(&self.graph) {
            if area_code == to {
                return true;
            }
        }
        false
    }
}
