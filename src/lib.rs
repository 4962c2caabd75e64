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

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod config;
pub mod error;
pub mod graph;
pub mod heavyhex;
mod utils;
#[cfg(test)]
mod mock;

pub use config::LatticeConfig;
pub use error::{PlacementError, Result};
pub use heavyhex::placement::generate;
pub use heavyhex::HeavyHexLattice;


#[cfg(feature = "python")]
#[pymodule]
fn heavyhex_placement(m: &Bound<PyModule>) -> PyResult<()> {
    m.add_class::<heavyhex::PyHeavyHexLattice>()?;
    m.add_function(wrap_pyfunction!(heavyhex::generate_heavy_hex_placement, m)?)?;
    Ok(())
}
