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


//! # Sui BCS
//!
//! Binary Canonical Serialization for Sui. The workspace is split into member crates. This crate
//! re-exports them so that downstream users depend on a single crate.
//!
//! * [`crate::ser`]: the codec. Integers, ULEB128, containers and the
//!   [`crate::Serializable`] trait.
//! * [`crate::tx`]: Sui addresses, type tags, transaction data and the transaction builder.
//! * [`crate::error`]: the shared [`crate::Error`] type.
//! * [`crate::conf`]: configuration options for the reader and the builder.
//! * [`crate::log`]: the global logger used by the transaction layer.
//!
//! # Examples
//!
//!```
//! use sui_bcs::tx::{ObjectRef, SuiAddress, TransactionBuilder, TransactionData};
//! use sui_bcs::Error;
//!
//! fn main() -> Result<(), Error> {
//!     let mut tx = TransactionBuilder::new();
//!     let gas = tx.gas_coin();
//!     let amount = tx.pure(&100u64)?;
//!     tx.split_coins(gas, vec![amount])?;
//!     tx.set_sender(SuiAddress::parse("0x2")?)
//!         .set_gas_price(5)
//!         .set_gas_budget(100)
//!         .set_gas_payment(vec![ObjectRef::parse(
//!             "0x5877400000000000000000000000000000000000000000000000000000000000",
//!             3619,
//!             "1thX6LZfHDZZGkq4tt1q2yRAPVfCTpX99XN4RHFsxM",
//!         )?]);
//!
//!     let bytes = tx.to_bytes()?;
//!     assert_eq!(bytes.len(), 175);
//!     assert_eq!(TransactionData::from_bytes(&bytes)?.to_bytes()?, bytes);
//!     Ok(())
//! }
//!```


pub use bcs_conf as conf;
pub use bcs_err as error;
pub use bcs_log as log;
pub use bcs_ser as ser;
pub use bcs_tx as tx;

pub use bcs_err::{Error, ErrorKind};
pub use bcs_ser::{deserialize, serialize, Serializable};
