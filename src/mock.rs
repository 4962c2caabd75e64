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

// Reference coupling maps recorded from the QAOA placement experiment harness.

use std::sync::Mutex;

use lazy_static::lazy_static;


lazy_static! {
    pub static ref HEAVYHEX_3X3_CMAP: Mutex<Vec<(usize, usize)>> = Mutex::new(vec![
        (0, 3), (0, 1), (1, 0), (1, 2), (2, 5), (2, 1), (3, 0), (3, 6),
        (4, 3), (4, 5), (5, 2), (5, 8), (6, 3), (7, 6), (7, 8), (8, 5),
    ]);

    pub static ref HEAVYHEX_5X5_CMAP: Mutex<Vec<(usize, usize)>> = Mutex::new(vec![
        (0, 5), (0, 1), (1, 0), (1, 2), (2, 7), (2, 1), (3, 2), (3, 4),
        (4, 9), (5, 0), (5, 10), (6, 5), (6, 7), (7, 2), (7, 12), (8, 7),
        (8, 9), (9, 4), (9, 14), (10, 5), (10, 15), (11, 10), (11, 12), (12, 7),
        (12, 17), (12, 13), (13, 12), (13, 14), (14, 9), (14, 19), (14, 13), (15, 10),
        (15, 20), (16, 15), (16, 17), (17, 12), (17, 22), (18, 17), (18, 19), (19, 14),
        (19, 24), (20, 15), (20, 21), (21, 20), (21, 22), (22, 17), (22, 21), (23, 22),
        (23, 24), (24, 19),
    ]);
}
