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

//! # The Sui transaction layer
//!
//! This crate models the values that make up a Sui transaction and encodes them with the
//! `bcs_ser` codec. The wire layout of every value (field order and enum tags) matches the
//! Sui network, so the bytes produced by [`crate::TransactionData::to_bytes`] are the bytes a
//! wallet signs.
//!
//! The [`crate::TransactionBuilder`] is the usual entry point. Inputs are deduplicated, results
//! of earlier commands are referenced through [`crate::ResultHandle`] and the gas metadata is
//! checked when the transaction is built.
//!
//! # Examples
//!
//!```
//! use bcs_err::Error;
//! use bcs_tx::*;
//!
//! fn main() -> Result<(), Error> {
//!     let payment = ObjectRef::parse(
//!         "0x1000000000000000000000000000000000000000000000000000000000000000",
//!         10000,
//!         "1thX6LZfHDZZGkq4tt1q2yRAPVfCTpX99XN4RHFsxM",
//!     )?;
//!
//!     let mut tx = TransactionBuilder::new();
//!     let gas = tx.gas_coin();
//!     let amount = tx.pure(&100u64)?;
//!     let coins = tx.split_coins(gas, vec![amount])?;
//!     let recipient = tx.pure(&SuiAddress::parse("0x2")?)?;
//!     tx.transfer_objects(vec![coins.nested(0)], recipient)?;
//!
//!     tx.set_sender(SuiAddress::parse("0x2")?)
//!         .set_gas_price(5)
//!         .set_gas_budget(100)
//!         .set_gas_payment(vec![payment]);
//!
//!     let bytes = tx.to_bytes()?;
//!     let decoded = TransactionData::from_bytes(&bytes)?;
//!     assert_eq!(decoded.programmable_transaction().commands.len(), 2);
//!     assert_eq!(decoded.to_bytes()?, bytes);
//!     Ok(())
//! }
//!```
//!
//! Strict mode (see [`bcs_conf::ConfigOption::StrictValidation`]) rejects a transaction with
//! no commands. The permissive default logs a warning and builds it.
//!
//!```
//! use bcs_conf::ConfigOption::StrictValidation;
//! use bcs_err::{Error, ErrorKind};
//! use bcs_tx::TransactionBuilder;
//!
//! fn main() -> Result<(), Error> {
//!     let tx = TransactionBuilder::with_config(vec![StrictValidation(true)])?;
//!     let res = tx.build_ptb();
//!     assert!(matches!(res.unwrap_err().kind(), ErrorKind::Validation(_)));
//!     Ok(())
//! }
//!```

mod address;
mod builder;
mod json;
mod test;
mod tx;
mod type_tag;
mod types;

pub use crate::types::{
	Argument, CallArg, Command, GasData, ObjectArg, ObjectDigest, ObjectID, ObjectRef,
	ProgrammableMoveCall, ProgrammableTransaction, ResultHandle, StructTag, SuiAddress,
	TransactionBuilder, TransactionData, TransactionDataV1, TransactionExpiration,
	TransactionKind, TypeTag,
};
