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

use bcs_ser::{Bytes, FixedBytes};
use std::collections::HashMap;

/// A 32 byte Sui account address. Parses from `0x` prefixed hex (short forms such as `0x2`
/// are left padded) and displays as `0x` followed by 64 lowercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuiAddress(pub(crate) FixedBytes<32>);

/// A 32 byte object identifier. Same text and wire form as [`crate::SuiAddress`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectID(pub(crate) FixedBytes<32>);

/// The digest of an object version. Base58 in text form. On the wire it is a length
/// prefixed byte string whose length must be 32.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectDigest(pub(crate) [u8; 32]);

/// A reference to a specific version of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
	pub object_id: ObjectID,
	pub version: u64,
	pub digest: ObjectDigest,
}

/// A Move type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
	Bool,
	U8,
	U64,
	U128,
	Address,
	Signer,
	Vector(Box<TypeTag>),
	Struct(Box<StructTag>),
	U16,
	U32,
	U256,
}

/// A fully qualified Move struct type such as `0x2::coin::Coin<0x2::sui::SUI>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructTag {
	pub address: SuiAddress,
	pub module: String,
	pub name: String,
	pub type_params: Vec<TypeTag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectArg {
	ImmOrOwnedObject(ObjectRef),
	SharedObject {
		id: ObjectID,
		initial_shared_version: u64,
		mutable: bool,
	},
	Receiving(ObjectRef),
}

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
	/// Already serialized BCS bytes.
	Pure(Bytes),
	Object(ObjectArg),
}

/// A reference to a value available to a command: the gas coin, an input, or the output of
/// an earlier command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
	GasCoin,
	Input(u16),
	Result(u16),
	NestedResult(u16, u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgrammableMoveCall {
	pub package: ObjectID,
	pub module: String,
	pub function: String,
	pub type_arguments: Vec<TypeTag>,
	pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	MoveCall(Box<ProgrammableMoveCall>),
	TransferObjects {
		objects: Vec<Argument>,
		address: Argument,
	},
	SplitCoins {
		coin: Argument,
		amounts: Vec<Argument>,
	},
	MergeCoins {
		destination: Argument,
		sources: Vec<Argument>,
	},
	Publish {
		modules: Vec<Bytes>,
		dependencies: Vec<ObjectID>,
	},
	MakeMoveVec {
		type_tag: Option<TypeTag>,
		elements: Vec<Argument>,
	},
	Upgrade {
		modules: Vec<Bytes>,
		dependencies: Vec<ObjectID>,
		package: ObjectID,
		ticket: Argument,
	},
}

/// A programmable transaction block: the inputs and the commands that consume them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgrammableTransaction {
	pub inputs: Vec<CallArg>,
	pub commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
	ProgrammableTransaction(ProgrammableTransaction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasData {
	pub payment: Vec<ObjectRef>,
	pub owner: SuiAddress,
	pub price: u64,
	pub budget: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionExpiration {
	#[default]
	None,
	Epoch(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDataV1 {
	pub kind: TransactionKind,
	pub sender: SuiAddress,
	pub gas_data: GasData,
	pub expiration: TransactionExpiration,
}

/// Versioned transaction data. This is the value that gets signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionData {
	V1(TransactionDataV1),
}

/// Returned by commands that produce values. `single` refers to the whole result and
/// `nested` to one element of a multi value result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultHandle {
	pub(crate) command_index: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum InputKey {
	Pure(Vec<u8>),
	Object(ObjectID, u64, ObjectDigest),
	Shared(ObjectID),
}

/// Fluent construction of programmable transactions. Inputs are deduplicated and gas
/// metadata is collected until [`crate::TransactionBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
	pub(crate) strict: bool,
	pub(crate) inputs: Vec<CallArg>,
	pub(crate) commands: Vec<Command>,
	pub(crate) input_cache: HashMap<InputKey, u16>,
	pub(crate) sender: Option<SuiAddress>,
	pub(crate) gas_price: Option<u64>,
	pub(crate) gas_budget: Option<u64>,
	pub(crate) gas_payment: Vec<ObjectRef>,
	pub(crate) gas_owner: Option<SuiAddress>,
	pub(crate) expiration: TransactionExpiration,
}
