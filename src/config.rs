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

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::heavyhex::grid::Grid;


/// Size of the rectangular grid the heavy hex lattice is carved from.
/// Missing fields fall back to the 5 x 5 hardware used by the QAOA placement experiment.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct LatticeConfig {
    #[serde(default = "default_length")]
    pub length: usize,

    #[serde(default = "default_height")]
    pub height: usize,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        LatticeConfig {
            length: default_length(),
            height: default_height(),
        }
    }
}

impl LatticeConfig {
    pub fn new(length: usize, height: usize) -> Self {
        LatticeConfig { length, height }
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let config: LatticeConfig = serde_json::from_str(data)?;
        config.grid()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading lattice config");
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Validated grid for this configuration.
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.length, self.height)
    }
}

fn default_length() -> usize {
    5
}

fn default_height() -> usize {
    default_length()
}
