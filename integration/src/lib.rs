// Copyright (c) 2023-2024, The BitcoinMW Developers
// Some code and concepts from:
// * Grin: https://github.com/mimblewimble/grin
// * Arti: https://gitlab.torproject.org/tpo/core/arti
// * BitcoinMW: https://github.com/bitcoinmw/bitcoinmw
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Cross SDK fixtures. Each scenario in this crate builds a transaction with
//! [`bcs_tx::TransactionBuilder`] the same way the TypeScript (and, for the move call, the
//! Unity C#) SDK tests do. The tests check the encoding against the bytes those SDKs produce.

mod fixtures;
mod scenarios;

pub use crate::fixtures::*;
pub use crate::scenarios::*;
