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

use petgraph::stable_graph::StableUnGraph;

use crate::graph::*;
use crate::utils::ungraph_to_dot;


/// Draw the heavy hex qubit graph.
///
/// Qubits are pinned at their grid coordinate. Rail qubits are filled,
/// and horizontal couplings are colored to separate rungs from rails.
pub fn qubit_graph_to_dot(graph: &StableUnGraph<QubitNode, QubitEdge>) -> String {
    ungraph_to_dot(graph)
}
