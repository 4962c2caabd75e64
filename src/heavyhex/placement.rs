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

use tracing::debug;

use super::grid::{Grid, MAX_PAIRS_PER_QUBIT};
use crate::error::Result;
use crate::graph::{CouplingMap, QubitIndex};


#[derive(Debug, PartialEq, Clone, Copy)]
enum RungSide {
    Left,
    Right,
}


/// Generate the heavy hex coupling map of a `length x height` grid.
///
/// # Arguments
///
/// * `length`: Number of grid columns, at least 1.
/// * `height`: Number of grid rows, at least 1.
///
/// # Return
///
/// Coupling pairs in generation order, e.g. `[(0, 2), (0, 1), (1, 0), ...]` for a 2 x 2 grid.
/// Most couplings appear once from each end. Consumers should treat the list as a set of adjacencies.
pub fn generate(length: usize, height: usize) -> Result<CouplingMap> {
    let grid = Grid::new(length, height)?;
    Ok(heavy_hex_coupling_map(&grid))
}


/// Coupling map on an already validated grid.
///
/// Even columns are rails coupled vertically. A rail qubit additionally hosts
/// a rung on every other row; the side of the rung flips every two columns.
/// Odd columns couple horizontally to both neighbouring rails.
pub fn heavy_hex_coupling_map(grid: &Grid) -> CouplingMap {
    let mut coupling_map = CouplingMap::with_capacity(MAX_PAIRS_PER_QUBIT * grid.num_qubits());
    for (qubit, (x, y)) in grid.positions() {
        if x % 2 == 0 {
            if y > 0 {
                coupling_map.push((qubit, grid.index(x, y - 1)));
            }
            if y + 1 < grid.height() {
                coupling_map.push((qubit, grid.index(x, y + 1)));
            }
            match rung_side(x, y, grid.length()) {
                Some(RungSide::Left) => coupling_map.push((qubit, grid.index(x - 1, y))),
                Some(RungSide::Right) => coupling_map.push((qubit, grid.index(x + 1, y))),
                None => {},
            }
        } else {
            // Odd column is never the first column.
            coupling_map.push((qubit, grid.index(x - 1, y)));
            if x + 1 < grid.length() {
                coupling_map.push((qubit, grid.index(x + 1, y)));
            }
        }
    }
    debug!(
        length = grid.length(),
        height = grid.height(),
        num_pairs = coupling_map.len(),
        "generated heavy hex coupling map",
    );
    coupling_map
}


/// Horizontal coupling hosted by the rail qubit at `(x, y)`, if any.
fn rung_side(x: usize, y: usize, length: usize) -> Option<RungSide> {
    let has_right = x + 1 < length;
    if (x + 2) % 4 == 0 {
        // x == 2 (mod 4), so the left neighbour always exists.
        if y % 4 == 0 {
            Some(RungSide::Left)
        } else if (y + 2) % 4 == 0 && has_right {
            Some(RungSide::Right)
        } else {
            None
        }
    } else if y % 4 == 0 && has_right {
        Some(RungSide::Right)
    } else if (y + 2) % 4 == 0 && x > 0 {
        Some(RungSide::Left)
    } else {
        None
    }
}


/// Number of qubits implied by a coupling map, i.e. the largest index plus one.
/// An empty map still describes a single qubit.
pub fn num_qubits_of(coupling_map: &[(QubitIndex, QubitIndex)]) -> usize {
    coupling_map
        .iter()
        .map(|&(q0, q1)| q0.max(q1) + 1)
        .max()
        .unwrap_or(1)
}
