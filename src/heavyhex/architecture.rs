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

use serde::{Deserialize, Serialize};

use super::placement::num_qubits_of;
use crate::error::Result;
use crate::graph::QubitIndex;

const REGISTER_NAME: &str = "q";


#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct QuantumRegister {
    pub name: String,
    pub qubits: usize,
}


#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct AdjacentVertex {
    pub v: String,
}


/// Device description consumed by the qubit mapper.
/// All qubits live in the single register `q`, and `adj[i]` lists
/// the qubits reachable from qubit `i` as `q[j]`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Architecture {
    pub qubits: usize,
    pub registers: Vec<QuantumRegister>,
    pub adj: Vec<Vec<AdjacentVertex>>,
}

impl Architecture {
    /// Pairs are directed: `(i, j)` only lands in `adj[i]`.
    /// Every pair is listed in input order, repeated pairs included.
    pub fn from_coupling_map(coupling_map: &[(QubitIndex, QubitIndex)]) -> Self {
        let num_qubits = num_qubits_of(coupling_map);
        let mut adj: Vec<Vec<AdjacentVertex>> = vec![Vec::new(); num_qubits];
        for &(q0, q1) in coupling_map {
            adj[q0].push(AdjacentVertex { v: register_bit(q1) });
        }
        Architecture {
            qubits: num_qubits,
            registers: vec![QuantumRegister { name: REGISTER_NAME.to_string(), qubits: num_qubits }],
            adj,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn register_bit(qubit: QubitIndex) -> String {
    format!("{}[{}]", REGISTER_NAME, qubit)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::heavyhex::placement::generate;

    #[test]
    fn test_2x2_architecture_json() {
        let arch = Architecture::from_coupling_map(&generate(2, 2).unwrap());
        assert_eq!(
            arch.to_json().unwrap(),
            concat!(
                r#"{"qubits":4,"registers":[{"name":"q","qubits":4}],"adj":["#,
                r#"[{"v":"q[2]"},{"v":"q[1]"}],[{"v":"q[0]"}],[{"v":"q[0]"}],[{"v":"q[2]"}]]}"#,
            ),
        );
    }

    #[test]
    fn test_single_qubit_architecture() {
        let arch = Architecture::from_coupling_map(&generate(1, 1).unwrap());
        assert_eq!(arch.qubits, 1);
        assert_eq!(arch.registers[0].qubits, 1);
        assert_eq!(arch.adj, vec![Vec::<AdjacentVertex>::new()]);
    }

    #[test]
    fn test_repeated_pairs_kept() {
        let arch = Architecture::from_coupling_map(&[(0, 1), (0, 1), (1, 0)]);
        assert_eq!(
            arch.adj[0],
            vec![
                AdjacentVertex { v: "q[1]".to_string() },
                AdjacentVertex { v: "q[1]".to_string() },
            ],
        );
        assert_eq!(arch.adj[1], vec![AdjacentVertex { v: "q[0]".to_string() }]);
    }

    #[test]
    fn test_json_roundtrip() {
        let arch = Architecture::from_coupling_map(&generate(3, 3).unwrap());
        let parsed: Architecture = serde_json::from_str(&arch.to_json().unwrap()).unwrap();
        assert_eq!(parsed, arch);
        assert_eq!(parsed.adj.iter().map(|a| a.len()).sum::<usize>(), 16);
    }
}
