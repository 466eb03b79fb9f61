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


use bcs_err::Error;
use bcs_ser::serialize;
use bcs_tx::{
	Argument, ObjectID, ObjectRef, ProgrammableMoveCall, SuiAddress, TransactionBuilder, TypeTag,
};

/// The gas object used by every transaction fixture.
pub fn reference_object() -> Result<ObjectRef, Error> {
	ObjectRef::parse(
		"0x5877400000000000000000000000000000000000000000000000000000000000",
		3619,
		"1thX6LZfHDZZGkq4tt1q2yRAPVfCTpX99XN4RHFsxM",
	)
}

/// Sender `0x2`, gas price 5, gas budget 100, paid with [`crate::reference_object`].
pub fn reference_builder() -> Result<TransactionBuilder, Error> {
	let mut tx = TransactionBuilder::new();
	tx.set_sender(SuiAddress::parse("0x2")?)
		.set_gas_price(5)
		.set_gas_budget(100)
		.set_gas_payment(vec![reference_object()?]);
	Ok(tx)
}

pub fn move_call() -> Result<ProgrammableMoveCall, Error> {
	Ok(ProgrammableMoveCall {
		package: ObjectID::parse("0x2")?,
		module: "display".to_string(),
		function: "new".to_string(),
		type_arguments: vec![TypeTag::parse("0x6::capy::Capy")?],
		arguments: vec![
			Argument::GasCoin,
			Argument::NestedResult(0, 1),
			Argument::Input(3),
			Argument::Result(1),
		],
	})
}

pub fn empty() -> Result<TransactionBuilder, Error> {
	reference_builder()
}

pub fn epoch_expiration() -> Result<TransactionBuilder, Error> {
	let mut tx = reference_builder()?;
	tx.set_expiration_epoch(1);
	Ok(tx)
}

pub fn split_coins() -> Result<TransactionBuilder, Error> {
	let mut tx = reference_builder()?;
	let gas = tx.gas_coin();
	let amount = tx.pure(&100u64)?;
	tx.split_coins(gas, vec![amount])?;
	Ok(tx)
}

pub fn pre_serialized() -> Result<TransactionBuilder, Error> {
	let mut tx = reference_builder()?;
	let gas = tx.gas_coin();
	let amount = tx.pure_bytes(serialize(&100u64)?)?;
	tx.split_coins(gas, vec![amount])?;
	Ok(tx)
}

pub fn complex() -> Result<TransactionBuilder, Error> {
	let mut tx = reference_builder()?;
	let gas = tx.gas_coin();
	let amount = tx.pure(&100u64)?;
	let coin = tx.split_coins(gas, vec![amount])?;
	let object = tx.object(reference_object()?)?;
	tx.merge_coins(gas, vec![coin.single(), object])?;

	let mut arguments = vec![];
	for s in ["foo", "bar", "baz"] {
		arguments.push(tx.pure(&s.to_string())?);
	}
	tx.move_call("0x2::devnet_nft::mint", &[], arguments)?;
	Ok(tx)
}

pub fn object_inputs() -> Result<TransactionBuilder, Error> {
	let mut tx = reference_builder()?;
	tx.object(reference_object()?)?;
	let gas = tx.gas_coin();
	let amount = tx.pure(&100u64)?;
	let coin = tx.split_coins(gas, vec![amount])?;
	let object = tx.object(reference_object()?)?;
	tx.merge_coins(gas, vec![coin.single(), object])?;
	Ok(tx)
}

pub fn receiving() -> Result<TransactionBuilder, Error> {
	let mut tx = object_inputs()?;
	let object = tx.object(reference_object()?)?;
	let received = tx.receiving(reference_object()?)?;
	tx.move_call("0x2::devnet_nft::mint", &[], vec![object, received])?;
	Ok(tx)
}
