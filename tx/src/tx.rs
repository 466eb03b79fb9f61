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

use crate::{
	Argument, CallArg, Command, GasData, ObjectArg, ObjectID, ObjectRef, ProgrammableMoveCall,
	ProgrammableTransaction, TransactionData, TransactionDataV1, TransactionExpiration,
	TransactionKind, TypeTag,
};
use bcs_err::*;
use bcs_ser::{
	deserialize, impl_struct, serialize, unknown_variant, Bytes, Reader, Serializable, Writer,
};

impl Serializable for ObjectArg {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		let offset = reader.offset();
		match reader.read_variant_tag()? {
			0 => Ok(ObjectArg::ImmOrOwnedObject(ObjectRef::read(reader)?)),
			1 => Ok(ObjectArg::SharedObject {
				id: ObjectID::read(reader)?,
				initial_shared_version: reader.read_u64()?,
				mutable: reader.read_bool()?,
			}),
			2 => Ok(ObjectArg::Receiving(ObjectRef::read(reader)?)),
			tag => Err(unknown_variant("ObjectArg", tag, offset)),
		}
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		match self {
			ObjectArg::ImmOrOwnedObject(object_ref) => {
				writer.write_variant_tag(0)?;
				object_ref.write(writer)
			}
			ObjectArg::SharedObject {
				id,
				initial_shared_version,
				mutable,
			} => {
				writer.write_variant_tag(1)?;
				id.write(writer)?;
				writer.write_u64(*initial_shared_version)?;
				writer.write_bool(*mutable)
			}
			ObjectArg::Receiving(object_ref) => {
				writer.write_variant_tag(2)?;
				object_ref.write(writer)
			}
		}
	}
}

impl Serializable for CallArg {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		let offset = reader.offset();
		match reader.read_variant_tag()? {
			0 => Ok(CallArg::Pure(Bytes::read(reader)?)),
			1 => Ok(CallArg::Object(ObjectArg::read(reader)?)),
			tag => Err(unknown_variant("CallArg", tag, offset)),
		}
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		match self {
			CallArg::Pure(bytes) => {
				writer.write_variant_tag(0)?;
				bytes.write(writer)
			}
			CallArg::Object(object_arg) => {
				writer.write_variant_tag(1)?;
				object_arg.write(writer)
			}
		}
	}
}

impl Serializable for Argument {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		let offset = reader.offset();
		match reader.read_variant_tag()? {
			0 => Ok(Argument::GasCoin),
			1 => Ok(Argument::Input(reader.read_u16()?)),
			2 => Ok(Argument::Result(reader.read_u16()?)),
			3 => Ok(Argument::NestedResult(reader.read_u16()?, reader.read_u16()?)),
			tag => Err(unknown_variant("Argument", tag, offset)),
		}
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		match self {
			Argument::GasCoin => writer.write_variant_tag(0),
			Argument::Input(i) => {
				writer.write_variant_tag(1)?;
				writer.write_u16(*i)
			}
			Argument::Result(i) => {
				writer.write_variant_tag(2)?;
				writer.write_u16(*i)
			}
			Argument::NestedResult(i, j) => {
				writer.write_variant_tag(3)?;
				writer.write_u16(*i)?;
				writer.write_u16(*j)
			}
		}
	}
}

impl_struct!(ProgrammableMoveCall {
	package,
	module,
	function,
	type_arguments,
	arguments
});

impl Command {
	/// The variant name, used in summaries and error messages.
	pub fn name(&self) -> &'static str {
		match self {
			Command::MoveCall(_) => "MoveCall",
			Command::TransferObjects { .. } => "TransferObjects",
			Command::SplitCoins { .. } => "SplitCoins",
			Command::MergeCoins { .. } => "MergeCoins",
			Command::Publish { .. } => "Publish",
			Command::MakeMoveVec { .. } => "MakeMoveVec",
			Command::Upgrade { .. } => "Upgrade",
		}
	}

	/// Every argument this command reads, in wire order.
	pub fn arguments(&self) -> Vec<Argument> {
		match self {
			Command::MoveCall(call) => call.arguments.clone(),
			Command::TransferObjects { objects, address } => {
				let mut ret = objects.clone();
				ret.push(*address);
				ret
			}
			Command::SplitCoins { coin, amounts } => {
				let mut ret = vec![*coin];
				ret.extend(amounts.iter().copied());
				ret
			}
			Command::MergeCoins {
				destination,
				sources,
			} => {
				let mut ret = vec![*destination];
				ret.extend(sources.iter().copied());
				ret
			}
			Command::Publish { .. } => vec![],
			Command::MakeMoveVec { elements, .. } => elements.clone(),
			Command::Upgrade { ticket, .. } => vec![*ticket],
		}
	}

	pub(crate) fn check_shape(&self) -> Result<(), Error> {
		let empty = match self {
			Command::TransferObjects { objects, .. } => objects.is_empty(),
			Command::SplitCoins { amounts, .. } => amounts.is_empty(),
			Command::MergeCoins { sources, .. } => sources.is_empty(),
			Command::Publish { modules, .. } => modules.is_empty(),
			Command::Upgrade { modules, .. } => modules.is_empty(),
			Command::MakeMoveVec { type_tag, elements } => {
				type_tag.is_none() && elements.is_empty()
			}
			Command::MoveCall(_) => false,
		};
		if empty {
			return Err(err!(
				ErrKind::Validation,
				"{} requires at least one element",
				self.name()
			));
		}
		Ok(())
	}
}

impl Serializable for Command {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		let offset = reader.offset();
		match reader.read_variant_tag()? {
			0 => Ok(Command::MoveCall(Box::new(ProgrammableMoveCall::read(reader)?))),
			1 => Ok(Command::TransferObjects {
				objects: Vec::read(reader)?,
				address: Argument::read(reader)?,
			}),
			2 => Ok(Command::SplitCoins {
				coin: Argument::read(reader)?,
				amounts: Vec::read(reader)?,
			}),
			3 => Ok(Command::MergeCoins {
				destination: Argument::read(reader)?,
				sources: Vec::read(reader)?,
			}),
			4 => Ok(Command::Publish {
				modules: Vec::read(reader)?,
				dependencies: Vec::read(reader)?,
			}),
			5 => Ok(Command::MakeMoveVec {
				type_tag: Option::<TypeTag>::read(reader)?,
				elements: Vec::read(reader)?,
			}),
			6 => Ok(Command::Upgrade {
				modules: Vec::read(reader)?,
				dependencies: Vec::read(reader)?,
				package: ObjectID::read(reader)?,
				ticket: Argument::read(reader)?,
			}),
			tag => Err(unknown_variant("Command", tag, offset)),
		}
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		match self {
			Command::MoveCall(call) => {
				writer.write_variant_tag(0)?;
				call.write(writer)
			}
			Command::TransferObjects { objects, address } => {
				writer.write_variant_tag(1)?;
				objects.write(writer)?;
				address.write(writer)
			}
			Command::SplitCoins { coin, amounts } => {
				writer.write_variant_tag(2)?;
				coin.write(writer)?;
				amounts.write(writer)
			}
			Command::MergeCoins {
				destination,
				sources,
			} => {
				writer.write_variant_tag(3)?;
				destination.write(writer)?;
				sources.write(writer)
			}
			Command::Publish {
				modules,
				dependencies,
			} => {
				writer.write_variant_tag(4)?;
				modules.write(writer)?;
				dependencies.write(writer)
			}
			Command::MakeMoveVec { type_tag, elements } => {
				writer.write_variant_tag(5)?;
				type_tag.write(writer)?;
				elements.write(writer)
			}
			Command::Upgrade {
				modules,
				dependencies,
				package,
				ticket,
			} => {
				writer.write_variant_tag(6)?;
				modules.write(writer)?;
				dependencies.write(writer)?;
				package.write(writer)?;
				ticket.write(writer)
			}
		}
	}
}

impl ProgrammableTransaction {
	pub fn new(inputs: Vec<CallArg>, commands: Vec<Command>) -> Self {
		Self { inputs, commands }
	}

	/// Checks the structural rules of a block: list arguments are non-empty, every input
	/// reference is in range, results are only referenced by later commands and both counts
	/// fit in a u16.
	pub fn validate(&self) -> Result<(), Error> {
		if self.inputs.len() > u16::MAX as usize {
			return Err(err!(
				ErrKind::Validation,
				"too many inputs: {} (max {})",
				self.inputs.len(),
				u16::MAX
			));
		}
		if self.commands.len() > u16::MAX as usize {
			return Err(err!(
				ErrKind::Validation,
				"too many commands: {} (max {})",
				self.commands.len(),
				u16::MAX
			));
		}

		for (index, command) in self.commands.iter().enumerate() {
			command.check_shape()?;
			for argument in command.arguments() {
				self.check_argument(index, command, argument)?;
			}
		}
		Ok(())
	}

	fn check_argument(&self, index: usize, command: &Command, arg: Argument) -> Result<(), Error> {
		match arg {
			Argument::GasCoin => Ok(()),
			Argument::Input(i) => {
				if i as usize >= self.inputs.len() {
					return Err(err!(
						ErrKind::Validation,
						"command {} ({}) references input {} but there are {} inputs",
						index,
						command.name(),
						i,
						self.inputs.len()
					));
				}
				Ok(())
			}
			Argument::Result(j) | Argument::NestedResult(j, _) => {
				if j as usize >= index {
					return Err(err!(
						ErrKind::Validation,
						"command {} ({}) references the result of command {}",
						index,
						command.name(),
						j
					));
				}
				Ok(())
			}
		}
	}
}

impl Serializable for ProgrammableTransaction {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		Ok(Self {
			inputs: Vec::read(reader)?,
			commands: Vec::read(reader)?,
		})
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		self.validate()?;
		self.inputs.write(writer)?;
		self.commands.write(writer)
	}
}

impl Serializable for TransactionKind {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		let offset = reader.offset();
		match reader.read_variant_tag()? {
			0 => Ok(TransactionKind::ProgrammableTransaction(
				ProgrammableTransaction::read(reader)?,
			)),
			tag => Err(unknown_variant("TransactionKind", tag, offset)),
		}
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		match self {
			TransactionKind::ProgrammableTransaction(ptb) => {
				writer.write_variant_tag(0)?;
				ptb.write(writer)
			}
		}
	}
}

impl_struct!(GasData {
	payment,
	owner,
	price,
	budget
});

impl Serializable for TransactionExpiration {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		let offset = reader.offset();
		match reader.read_variant_tag()? {
			0 => Ok(TransactionExpiration::None),
			1 => Ok(TransactionExpiration::Epoch(reader.read_u64()?)),
			tag => Err(unknown_variant("TransactionExpiration", tag, offset)),
		}
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		match self {
			TransactionExpiration::None => writer.write_variant_tag(0),
			TransactionExpiration::Epoch(epoch) => {
				writer.write_variant_tag(1)?;
				writer.write_u64(*epoch)
			}
		}
	}
}

impl_struct!(TransactionDataV1 {
	kind,
	sender,
	gas_data,
	expiration
});

impl TransactionData {
	/// Validates and encodes the transaction. These are the bytes a wallet signs.
	pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
		serialize(self)
	}

	/// Decodes transaction data. The whole slice must be consumed.
	pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
		deserialize(data)
	}

	pub fn v1(&self) -> &TransactionDataV1 {
		match self {
			TransactionData::V1(v1) => v1,
		}
	}

	pub fn programmable_transaction(&self) -> &ProgrammableTransaction {
		match &self.v1().kind {
			TransactionKind::ProgrammableTransaction(ptb) => ptb,
		}
	}
}

impl Serializable for TransactionData {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		let offset = reader.offset();
		match reader.read_variant_tag()? {
			0 => Ok(TransactionData::V1(TransactionDataV1::read(reader)?)),
			tag => Err(unknown_variant("TransactionData", tag, offset)),
		}
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		match self {
			TransactionData::V1(v1) => {
				writer.write_variant_tag(0)?;
				v1.write(writer)
			}
		}
	}
}
