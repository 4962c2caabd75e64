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

use hashbrown::HashSet;
use itertools::Itertools;
use petgraph::stable_graph::StableUnGraph;

use crate::graph::*;

/// Convert potential bidirectional coupling map to undirected.
/// Coupling pairs (a, b) and (b, a) are merged into (a, b), where a < b.
/// Both returned vectors are sorted.
pub(crate) fn to_undirected(connectivity: &[(QubitIndex, QubitIndex)]) -> (Vec<QubitIndex>, CouplingMap) {
    let mut undirected: CouplingMap = connectivity
        .iter()
        .map(|p| if p.0 < p.1 { (p.0, p.1) } else { (p.1, p.0) })
        .collect::<HashSet<_>>()
        .into_iter()
        .collect_vec();
    undirected.sort_unstable();
    let mut unique_elms: Vec<_> = undirected
        .iter()
        .flat_map(|p| [p.0, p.1])
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    unique_elms.sort_unstable();
    (unique_elms, undirected)
}

/// Write dot script to feed the graphviz drawer for graph image generation.
pub(crate) fn ungraph_to_dot<N: WriteDot, E: WriteDot>(graph: &StableUnGraph<N, E>) -> String {
    let mut buf = String::new();
    buf.push_str("graph {\n");
    buf.push_str("node [fontname=\"Consolas\", fontsize=8.0, height=0.7];\n");
    buf.push_str("edge [fontname=\"Consolas\", fontsize=8.0, penwidth=2.5];\n");
    for node in graph.node_weights() {
        buf.push_str(&node.to_dot());
        buf.push('\n');
    }
    for edge in graph.edge_weights() {
        buf.push_str(&edge.to_dot());
        buf.push('\n');
    }
    buf.push_str("}\n");
    buf
}
