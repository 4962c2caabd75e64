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

use thiserror::Error;

use crate::graph::QubitIndex;

pub type Result<T> = std::result::Result<T, PlacementError>;

/// Errors raised while building a heavy hex placement.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// Grid dimension smaller than one.
    #[error("Lattice {name} must be at least 1, got {value}")]
    InvalidDimension { name: &'static str, value: usize },

    #[error("Lattice of {length} x {height} qubits exceeds the addressable qubit range")]
    LatticeTooLarge { length: usize, height: usize },

    #[error("Qubit {qubit} is out of range for a lattice of {num_qubits} qubits")]
    QubitOutOfRange { qubit: QubitIndex, num_qubits: usize },

    #[error("Qubit {0} cannot be coupled to itself")]
    SelfCoupling(QubitIndex),

    /// Coupling between qubits that are not grid neighbours.
    #[error("Qubits {0} and {1} are not adjacent on the lattice")]
    NonAdjacentCoupling(QubitIndex, QubitIndex),

    #[error("Invalid lattice configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlacementError {
    pub fn invalid_dimension(name: &'static str, value: usize) -> Self {
        Self::InvalidDimension { name, value }
    }
}

#[cfg(feature = "python")]
impl From<PlacementError> for pyo3::PyErr {
    fn from(err: PlacementError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let err = PlacementError::invalid_dimension("length", 0);
        assert_eq!(err.to_string(), "Lattice length must be at least 1, got 0");
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PlacementError = json_err.into();
        assert!(matches!(err, PlacementError::Config(_)));
    }
}
