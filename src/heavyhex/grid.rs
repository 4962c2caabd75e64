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

use std::mem;

use crate::error::{PlacementError, Result};
use crate::graph::{Coordinate, QubitIndex};

/// Rail qubits emit up to three pairs, rung qubits two.
pub const MAX_PAIRS_PER_QUBIT: usize = 3;


/// Rectangular `length x height` grid with row-major qubit numbering,
/// i.e. the qubit at `(x, y)` has index `y * length + x`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Grid {
    length: usize,
    height: usize,
    num_qubits: usize,
}

impl Grid {
    pub fn new(length: usize, height: usize) -> Result<Self> {
        if length < 1 {
            return Err(PlacementError::invalid_dimension("length", length));
        }
        if height < 1 {
            return Err(PlacementError::invalid_dimension("height", height));
        }
        // The coupling map of the whole grid must stay allocatable.
        let pair_bytes = MAX_PAIRS_PER_QUBIT * mem::size_of::<(QubitIndex, QubitIndex)>();
        let num_qubits = length
            .checked_mul(height)
            .filter(|n| n.checked_mul(pair_bytes).map_or(false, |bytes| bytes <= isize::MAX as usize))
            .ok_or(PlacementError::LatticeTooLarge { length, height })?;
        Ok(Grid { length, height, num_qubits })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Qubit index at `(x, y)`. The position must be on the grid.
    pub fn index(&self, x: usize, y: usize) -> QubitIndex {
        debug_assert!(x < self.length && y < self.height);
        y * self.length + x
    }

    /// Grid position of a qubit. The index must be below `num_qubits`.
    pub fn position(&self, qubit: QubitIndex) -> Coordinate {
        debug_assert!(qubit < self.num_qubits);
        (qubit % self.length, qubit / self.length)
    }

    pub fn checked_position(&self, qubit: QubitIndex) -> Result<Coordinate> {
        if qubit < self.num_qubits {
            Ok(self.position(qubit))
        } else {
            Err(PlacementError::QubitOutOfRange { qubit, num_qubits: self.num_qubits })
        }
    }

    /// All qubits with their positions, `y` outer and `x` inner.
    pub fn positions(&self) -> impl Iterator<Item = (QubitIndex, Coordinate)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.length).map(move |x| (x, y)))
            .enumerate()
    }
}
