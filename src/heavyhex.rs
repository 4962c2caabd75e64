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

pub mod architecture;
pub mod graph_builder;
pub mod grid;
pub mod placement;
pub mod visualization;

use petgraph::stable_graph::StableUnGraph;
use tracing::info;

#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::config::LatticeConfig;
use crate::error::Result;
use crate::graph::*;
use crate::utils::to_undirected;
use architecture::Architecture;
use graph_builder::{build_qubit_graph, summarize, ConnectivitySummary};
use grid::Grid;
use placement::heavy_hex_coupling_map;
use visualization::qubit_graph_to_dot;


/// Heavy hex placement lattice carved out of a rectangular grid.
///
/// Holds the coupling map in generation order, which is what the qubit mapper
/// consumes, together with the annotated qubit graph used for analysis and drawing.
#[derive(Debug, Clone)]
pub struct HeavyHexLattice {
    grid: Grid,
    coupling_map: CouplingMap,
    qubit_graph: StableUnGraph<QubitNode, QubitEdge>,
}

impl HeavyHexLattice {
    pub fn new(length: usize, height: usize) -> Result<Self> {
        let grid = Grid::new(length, height)?;
        let coupling_map = heavy_hex_coupling_map(&grid);
        let qubit_graph = build_qubit_graph(&grid, &coupling_map)?;
        info!(
            length,
            height,
            num_qubits = grid.num_qubits(),
            num_couplings = qubit_graph.edge_count(),
            "heavy hex lattice ready",
        );
        Ok(HeavyHexLattice { grid, coupling_map, qubit_graph })
    }

    pub fn from_config(config: &LatticeConfig) -> Result<Self> {
        Self::new(config.length, config.height)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn coupling_map(&self) -> &[(QubitIndex, QubitIndex)] {
        &self.coupling_map
    }

    /// Distinct undirected couplings `(a, b)` with `a < b`, sorted.
    pub fn couplings(&self) -> CouplingMap {
        to_undirected(&self.coupling_map).1
    }

    pub fn qubit_graph(&self) -> &StableUnGraph<QubitNode, QubitEdge> {
        &self.qubit_graph
    }

    pub fn summary(&self) -> ConnectivitySummary {
        summarize(&self.qubit_graph, self.coupling_map.len())
    }

    pub fn architecture(&self) -> Architecture {
        Architecture::from_coupling_map(&self.coupling_map)
    }

    pub fn to_dot(&self) -> String {
        qubit_graph_to_dot(&self.qubit_graph)
    }
}


/// Heavy hex coupling map of a `length x height` grid.
///
/// Args:
///     length (int): Number of grid columns.
///     height (int): Number of grid rows.
///
/// Returns:
///     list[tuple[int, int]]: Coupling pairs in generation order.
#[cfg(feature = "python")]
#[pyfunction]
pub fn generate_heavy_hex_placement(length: usize, height: usize) -> PyResult<CouplingMap> {
    Ok(placement::generate(length, height)?)
}


#[cfg(feature = "python")]
#[pyclass(name = "HeavyHexLattice")]
pub struct PyHeavyHexLattice {
    pub lattice: HeavyHexLattice,
}

#[cfg(feature = "python")]
#[pymethods]
impl PyHeavyHexLattice {
    #[new]
    #[pyo3(signature = (length=5, height=5))]
    pub fn new(length: usize, height: usize) -> PyResult<Self> {
        Ok(PyHeavyHexLattice { lattice: HeavyHexLattice::new(length, height)? })
    }

    #[staticmethod]
    pub fn from_config_file(path: std::path::PathBuf) -> PyResult<Self> {
        let config = LatticeConfig::from_file(path)?;
        Ok(PyHeavyHexLattice { lattice: HeavyHexLattice::from_config(&config)? })
    }

    #[getter]
    pub fn length(&self) -> usize {
        self.lattice.grid().length()
    }

    #[getter]
    pub fn height(&self) -> usize {
        self.lattice.grid().height()
    }

    #[getter]
    pub fn coupling_map(&self) -> CouplingMap {
        self.lattice.coupling_map().to_vec()
    }

    #[getter]
    pub fn couplings(&self) -> CouplingMap {
        self.lattice.couplings()
    }

    pub fn qubit_coordinates(&self) -> Vec<Coordinate> {
        self.lattice
            .grid()
            .positions()
            .map(|(_, xy)| xy)
            .collect()
    }

    pub fn is_heavy_hex(&self) -> bool {
        self.lattice.summary().is_heavy_hex()
    }

    pub fn overloaded_qubits(&self) -> Vec<QubitIndex> {
        self.lattice.summary().overloaded_qubits
    }

    pub fn summary_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.lattice.summary())
            .map_err(|err| crate::error::PlacementError::from(err).into())
    }

    pub fn architecture_json(&self) -> PyResult<String> {
        Ok(self.lattice.architecture().to_json()?)
    }

    pub fn to_dot(&self) -> String {
        self.lattice.to_dot()
    }
}
