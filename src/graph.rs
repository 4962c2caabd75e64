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


pub type QubitIndex = usize;
pub type Coordinate = (usize, usize);
pub type CouplingMap = Vec<(QubitIndex, QubitIndex)>;


/// Qubits in even grid columns form the vertical rails of the lattice,
/// qubits in odd columns bridge two rails horizontally.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum QubitRole {
    Rail,
    Rung,
}

impl QubitRole {
    pub fn from_column(x: usize) -> Self {
        if x % 2 == 0 {
            QubitRole::Rail
        } else {
            QubitRole::Rung
        }
    }
}


#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum EdgeOrientation {
    Vertical,
    Horizontal,
}


pub trait WriteDot {
    fn to_dot(&self) -> String;
}


#[derive(Debug, PartialEq, Clone, Copy)]
pub struct QubitNode {
    pub index: QubitIndex,
    pub coordinate: Coordinate,
    pub role: QubitRole,
}

impl WriteDot for QubitNode {
    fn to_dot(&self) -> String {
        let mut options = Vec::<String>::new();
        match self.role {
            QubitRole::Rail => {
                options.push(format!("fillcolor=darkgrey"));
                options.push(format!("style=filled"));
            },
            QubitRole::Rung => {
                options.push(format!("fillcolor=lightgrey"));
                options.push(format!("style=solid"));
            },
        }
        options.push(format!("label=Q{}", self.index));
        options.push(format!("pos=\"{},-{}\"", self.coordinate.0, self.coordinate.1));
        options.push(format!("pin=True"));
        format!("{} [{}, shape=\"circle\"];", self.index, options.join(", "))
    }
}


/// Undirected physical coupling. `neighbor0` is always the smaller index.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct QubitEdge {
    pub neighbor0: QubitIndex,
    pub neighbor1: QubitIndex,
    pub orientation: EdgeOrientation,
}

impl WriteDot for QubitEdge {
    fn to_dot(&self) -> String {
        let color = match self.orientation {
            EdgeOrientation::Vertical => "black",
            EdgeOrientation::Horizontal => "dodgerblue",
        };
        format!("{} -- {} [color={}];", self.neighbor0, self.neighbor1, color)
    }
}
