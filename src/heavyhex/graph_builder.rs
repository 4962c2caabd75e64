// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

use hashbrown::HashMap;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, trace};

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableUnGraph;

use super::grid::Grid;
use crate::error::{PlacementError, Result};
use crate::graph::*;
use crate::utils::to_undirected;

/// Heavy hex qubits couple to at most three neighbours.
pub const HEAVY_HEX_MAX_DEGREE: usize = 3;


/// Degree statistics of a qubit coupling graph.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ConnectivitySummary {
    pub num_qubits: usize,
    /// Length of the raw coupling map, repeated pairs included.
    pub num_pairs: usize,
    /// Number of distinct undirected couplings.
    pub num_couplings: usize,
    pub max_degree: usize,
    /// Qubits exceeding the heavy hex degree bound, sorted.
    pub overloaded_qubits: Vec<QubitIndex>,
    /// Qubits without any coupling, sorted.
    pub isolated_qubits: Vec<QubitIndex>,
}

impl ConnectivitySummary {
    pub fn is_heavy_hex(&self) -> bool {
        self.overloaded_qubits.is_empty()
    }
}


/// Build qubit coupling graph on the grid.
/// A node in the graph is a qubit, and an edge is physical coupling between qubits.
/// Every grid qubit becomes a node, including qubits without couplings.
pub fn build_qubit_graph(
    grid: &Grid,
    coupling_map: &[(QubitIndex, QubitIndex)],
) -> Result<StableUnGraph<QubitNode, QubitEdge>> {
    let (_, connectivity) = to_undirected(coupling_map);
    let mut graph: StableUnGraph<QubitNode, QubitEdge> =
        StableUnGraph::with_capacity(grid.num_qubits(), connectivity.len());
    let mut node_map = HashMap::<QubitIndex, NodeIndex>::with_capacity(grid.num_qubits());
    for (qidx, xy) in grid.positions() {
        let nidx = graph.add_node(QubitNode {
            index: qidx,
            coordinate: xy,
            role: QubitRole::from_column(xy.0),
        });
        node_map.insert(qidx, nidx);
    }
    for (qi, qj) in connectivity.into_iter() {
        if qi == qj {
            return Err(PlacementError::SelfCoupling(qi));
        }
        let xy0 = grid.checked_position(qi)?;
        let xy1 = grid.checked_position(qj)?;
        let orientation = match (xy0.0.abs_diff(xy1.0), xy0.1.abs_diff(xy1.1)) {
            (0, 1) => EdgeOrientation::Vertical,
            (1, 0) => EdgeOrientation::Horizontal,
            _ => return Err(PlacementError::NonAdjacentCoupling(qi, qj)),
        };
        trace!(q0 = qi, q1 = qj, ?orientation, "add coupling");
        graph.add_edge(
            node_map[&qi],
            node_map[&qj],
            QubitEdge { neighbor0: qi, neighbor1: qj, orientation },
        );
    }
    debug!(
        num_nodes = graph.node_count(),
        num_edges = graph.edge_count(),
        "built qubit graph",
    );
    Ok(graph)
}


/// Summarize degree statistics of the qubit graph.
///
/// # Arguments
///
/// * `graph`: Qubit graph returned by [`build_qubit_graph`].
/// * `num_pairs`: Length of the coupling map the graph was built from.
pub fn summarize(
    graph: &StableUnGraph<QubitNode, QubitEdge>,
    num_pairs: usize,
) -> ConnectivitySummary {
    let degrees = graph
        .node_indices()
        .map(|n| (graph[n].index, graph.neighbors(n).count()))
        .sorted_unstable()
        .collect_vec();
    let overloaded_qubits = degrees
        .iter()
        .filter_map(|&(qi, deg)| if deg > HEAVY_HEX_MAX_DEGREE { Some(qi) } else { None })
        .collect_vec();
    let isolated_qubits = degrees
        .iter()
        .filter_map(|&(qi, deg)| if deg == 0 { Some(qi) } else { None })
        .collect_vec();
    if !overloaded_qubits.is_empty() {
        debug!(?overloaded_qubits, "qubits exceed heavy hex degree bound");
    }
    ConnectivitySummary {
        num_qubits: graph.node_count(),
        num_pairs,
        num_couplings: graph.edge_count(),
        max_degree: degrees.iter().map(|d| d.1).max().unwrap_or(0),
        overloaded_qubits,
        isolated_qubits,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::heavyhex::placement::heavy_hex_coupling_map;
    use crate::mock::HEAVYHEX_5X5_CMAP;

    #[test]
    fn test_5x5_graph() {
        let grid = Grid::new(5, 5).unwrap();
        let coupling_map = HEAVYHEX_5X5_CMAP.lock().unwrap().to_owned();
        let graph = build_qubit_graph(&grid, &coupling_map).unwrap();
        assert_eq!(graph.node_count(), 25);
        assert_eq!(graph.edge_count(), 32);
        for node in graph.node_weights() {
            assert_eq!(grid.position(node.index), node.coordinate);
        }
        let summary = summarize(&graph, coupling_map.len());
        assert_eq!(
            summary,
            ConnectivitySummary {
                num_qubits: 25,
                num_pairs: 50,
                num_couplings: 32,
                max_degree: 4,
                overloaded_qubits: vec![7, 12, 17],
                isolated_qubits: vec![],
            }
        );
        assert!(!summary.is_heavy_hex());
    }

    #[test]
    fn test_3x3_is_heavy_hex() {
        let grid = Grid::new(3, 3).unwrap();
        let coupling_map = heavy_hex_coupling_map(&grid);
        let graph = build_qubit_graph(&grid, &coupling_map).unwrap();
        let summary = summarize(&graph, coupling_map.len());
        assert_eq!(summary.num_couplings, 10);
        assert_eq!(summary.max_degree, 3);
        assert!(summary.is_heavy_hex());
    }

    #[test]
    fn test_edge_orientation() {
        let grid = Grid::new(2, 2).unwrap();
        let graph = build_qubit_graph(&grid, &[(0, 2), (0, 1), (1, 0), (2, 0), (3, 2)]).unwrap();
        let edges = graph
            .edge_weights()
            .map(|e| (e.neighbor0, e.neighbor1, e.orientation))
            .collect_vec();
        assert_eq!(
            edges,
            vec![
                (0, 1, EdgeOrientation::Horizontal),
                (0, 2, EdgeOrientation::Vertical),
                (2, 3, EdgeOrientation::Horizontal),
            ]
        );
    }

    #[test]
    fn test_isolated_qubit() {
        let grid = Grid::new(2, 2).unwrap();
        let graph = build_qubit_graph(&grid, &[(0, 1), (0, 2)]).unwrap();
        let summary = summarize(&graph, 2);
        assert_eq!(summary.isolated_qubits, vec![3]);
        assert_eq!(summary.max_degree, 2);
    }

    #[test]
    fn test_summary_uses_qubit_index() {
        let grid = Grid::new(2, 2).unwrap();
        let mut graph = build_qubit_graph(&grid, &[(2, 3)]).unwrap();
        let first = graph.node_indices().next().unwrap();
        graph.remove_node(first);
        let summary = summarize(&graph, 1);
        assert_eq!(summary.num_qubits, 3);
        assert_eq!(summary.isolated_qubits, vec![1]);
        assert_eq!(summary.max_degree, 1);
    }

    #[test]
    fn test_rejects_invalid_couplings() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(matches!(
            build_qubit_graph(&grid, &[(0, 4)]),
            Err(PlacementError::QubitOutOfRange { qubit: 4, num_qubits: 4 })
        ));
        assert!(matches!(
            build_qubit_graph(&grid, &[(1, 1)]),
            Err(PlacementError::SelfCoupling(1))
        ));
        assert!(matches!(
            build_qubit_graph(&grid, &[(0, 3)]),
            Err(PlacementError::NonAdjacentCoupling(0, 3))
        ));
    }
}
