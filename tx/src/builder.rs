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

use crate::types::InputKey;
use crate::{
	Argument, CallArg, Command, GasData, ObjectArg, ObjectID, ObjectRef, ProgrammableMoveCall,
	ProgrammableTransaction, ResultHandle, SuiAddress, TransactionBuilder, TransactionData,
	TransactionDataV1, TransactionExpiration, TransactionKind, TypeTag,
};
use bcs_conf::{Config, ConfigBuilder, ConfigOption, ConfigOptionName};
use bcs_err::*;
use bcs_log::{debug, warn};
use bcs_ser::{serialize, Bytes, Serializable};
use std::fmt::{Display, Formatter};

debug!();

impl ResultHandle {
	/// The whole result of the command.
	pub fn single(&self) -> Argument {
		Argument::Result(self.command_index)
	}

	/// Element `index` of a command that returns several values.
	pub fn nested(&self, index: u16) -> Argument {
		Argument::NestedResult(self.command_index, index)
	}

	pub fn command_index(&self) -> u16 {
		self.command_index
	}
}

impl TransactionBuilder {
	/// A permissive builder: a transaction with no commands builds with a warning.
	pub fn new() -> Self {
		Self::default()
	}

	/// A builder that rejects transactions with no commands.
	pub fn new_strict() -> Self {
		Self {
			strict: true,
			..Self::default()
		}
	}

	/// Builds with [`bcs_conf::ConfigOption::StrictValidation`], the only accepted option.
	pub fn with_config(configs: Vec<ConfigOption>) -> Result<Self, Error> {
		let config = ConfigBuilder::build_config(configs);
		config.check_config(vec![ConfigOptionName::StrictValidation], vec![])?;
		Ok(Self {
			strict: config.get_or_bool(&ConfigOptionName::StrictValidation, false),
			..Self::default()
		})
	}

	/// Rebuilds a builder from encoded transaction data. Inputs and commands are taken as is
	/// and the dedup table is rebuilt from the inputs. A gas owner equal to the sender is
	/// treated as unset.
	pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
		let tx = TransactionData::from_bytes(data)?;
		let v1 = tx.v1();
		let ptb = tx.programmable_transaction();

		let mut builder = Self::new();
		builder.sender = Some(v1.sender);
		builder.gas_price = Some(v1.gas_data.price);
		builder.gas_budget = Some(v1.gas_data.budget);
		builder.gas_payment = v1.gas_data.payment.clone();
		if v1.gas_data.owner != v1.sender {
			builder.gas_owner = Some(v1.gas_data.owner);
		}
		builder.expiration = v1.expiration;
		builder.commands = ptb.commands.clone();

		for input in &ptb.inputs {
			let index = builder.next_input_index()?;
			builder.inputs.push(input.clone());
			builder.input_cache.entry(input_key(input)).or_insert(index);
		}

		debug!(
			"rebuilt builder with {} inputs and {} commands",
			builder.inputs.len(),
			builder.commands.len()
		)?;
		Ok(builder)
	}

	pub fn set_sender(&mut self, sender: SuiAddress) -> &mut Self {
		self.sender = Some(sender);
		self
	}

	pub fn set_gas_price(&mut self, price: u64) -> &mut Self {
		self.gas_price = Some(price);
		self
	}

	pub fn set_gas_budget(&mut self, budget: u64) -> &mut Self {
		self.gas_budget = Some(budget);
		self
	}

	pub fn set_gas_payment(&mut self, payment: Vec<ObjectRef>) -> &mut Self {
		self.gas_payment = payment;
		self
	}

	/// Sets the gas owner. Without this the sender pays.
	pub fn set_gas_owner(&mut self, owner: SuiAddress) -> &mut Self {
		self.gas_owner = Some(owner);
		self
	}

	pub fn set_expiration_epoch(&mut self, epoch: u64) -> &mut Self {
		self.expiration = TransactionExpiration::Epoch(epoch);
		self
	}

	pub fn set_no_expiration(&mut self) -> &mut Self {
		self.expiration = TransactionExpiration::None;
		self
	}

	/// Adds a pure input holding the BCS encoding of `value`.
	pub fn pure<T: Serializable>(&mut self, value: &T) -> Result<Argument, Error> {
		self.pure_bytes(serialize(value)?)
	}

	/// Adds a pure input from bytes that are already BCS encoded.
	pub fn pure_bytes(&mut self, bytes: Vec<u8>) -> Result<Argument, Error> {
		let key = InputKey::Pure(bytes.clone());
		self.add_input(key, CallArg::Pure(Bytes::new(bytes)))
	}

	/// Adds an owned or immutable object input.
	pub fn object(&mut self, object_ref: ObjectRef) -> Result<Argument, Error> {
		let key = object_key(&object_ref);
		self.add_input(key, CallArg::Object(ObjectArg::ImmOrOwnedObject(object_ref)))
	}

	/// Adds an object that is being received by this transaction. A reference already
	/// registered through [`crate::TransactionBuilder::object`] is reused as is.
	pub fn receiving(&mut self, object_ref: ObjectRef) -> Result<Argument, Error> {
		let key = object_key(&object_ref);
		self.add_input(key, CallArg::Object(ObjectArg::Receiving(object_ref)))
	}

	/// Adds a shared object. Shared inputs are keyed by id. Using the same object mutably
	/// after an immutable use upgrades the existing input.
	pub fn shared_object(
		&mut self,
		id: ObjectID,
		initial_shared_version: u64,
		mutable: bool,
	) -> Result<Argument, Error> {
		let key = InputKey::Shared(id);
		if let Some(index) = self.input_cache.get(&key).copied() {
			if mutable {
				if let Some(CallArg::Object(ObjectArg::SharedObject { mutable: m, .. })) =
					self.inputs.get_mut(index as usize)
				{
					*m = true;
				}
			}
			return Ok(Argument::Input(index));
		}
		let arg = ObjectArg::SharedObject {
			id,
			initial_shared_version,
			mutable,
		};
		self.add_input(key, CallArg::Object(arg))
	}

	pub fn gas_coin(&self) -> Argument {
		Argument::GasCoin
	}

	/// Adds a Move call. `target` is `package::module::function`. The package may use the
	/// short address form (`0x2`).
	pub fn move_call(
		&mut self,
		target: &str,
		type_arguments: &[&str],
		arguments: Vec<Argument>,
	) -> Result<ResultHandle, Error> {
		let parts: Vec<&str> = target.split("::").collect();
		if parts.len() != 3 || parts[1].is_empty() || parts[2].is_empty() {
			return Err(err!(
				ErrKind::Validation,
				"invalid move call target '{}', expected package::module::function",
				target
			));
		}

		let mut types = vec![];
		for type_argument in type_arguments {
			types.push(TypeTag::parse(type_argument)?);
		}

		let call = ProgrammableMoveCall {
			package: ObjectID::parse(parts[0])?,
			module: parts[1].to_string(),
			function: parts[2].to_string(),
			type_arguments: types,
			arguments,
		};
		self.add_command(Command::MoveCall(Box::new(call)))
	}

	pub fn transfer_objects(
		&mut self,
		objects: Vec<Argument>,
		recipient: Argument,
	) -> Result<(), Error> {
		self.add_command(Command::TransferObjects {
			objects,
			address: recipient,
		})?;
		Ok(())
	}

	/// Splits `coin` into one new coin per amount. Use [`crate::ResultHandle::nested`] to
	/// reach the individual coins.
	pub fn split_coins(
		&mut self,
		coin: Argument,
		amounts: Vec<Argument>,
	) -> Result<ResultHandle, Error> {
		self.add_command(Command::SplitCoins { coin, amounts })
	}

	pub fn merge_coins(&mut self, destination: Argument, sources: Vec<Argument>) -> Result<(), Error> {
		self.add_command(Command::MergeCoins {
			destination,
			sources,
		})?;
		Ok(())
	}

	pub fn publish(
		&mut self,
		modules: Vec<Vec<u8>>,
		dependencies: Vec<ObjectID>,
	) -> Result<ResultHandle, Error> {
		let modules = modules.into_iter().map(Bytes::new).collect();
		self.add_command(Command::Publish {
			modules,
			dependencies,
		})
	}

	pub fn upgrade(
		&mut self,
		modules: Vec<Vec<u8>>,
		dependencies: Vec<ObjectID>,
		package: ObjectID,
		ticket: Argument,
	) -> Result<ResultHandle, Error> {
		let modules = modules.into_iter().map(Bytes::new).collect();
		self.add_command(Command::Upgrade {
			modules,
			dependencies,
			package,
			ticket,
		})
	}

	/// Builds a vector from `elements`. The element type is required when there are no
	/// elements.
	pub fn make_move_vec(
		&mut self,
		type_tag: Option<&str>,
		elements: Vec<Argument>,
	) -> Result<ResultHandle, Error> {
		let type_tag = match type_tag {
			Some(type_tag) => Some(TypeTag::parse(type_tag)?),
			None => None,
		};
		self.add_command(Command::MakeMoveVec { type_tag, elements })
	}

	/// Appends a command as is. Argument references are checked when the transaction is
	/// built.
	pub fn add_command(&mut self, command: Command) -> Result<ResultHandle, Error> {
		if self.commands.len() >= u16::MAX as usize {
			return Err(err!(
				ErrKind::Validation,
				"too many commands (max {})",
				u16::MAX
			));
		}
		command.check_shape()?;
		let command_index = self.commands.len() as u16;
		debug!("command {}: {}", command_index, command.name())?;
		self.commands.push(command);
		Ok(ResultHandle { command_index })
	}

	/// Validates and returns the programmable transaction.
	pub fn build_ptb(&self) -> Result<ProgrammableTransaction, Error> {
		if self.commands.is_empty() {
			if self.strict {
				return Err(err!(
					ErrKind::Validation,
					"transaction must have at least one command (strict mode)"
				));
			}
			warn!("building a transaction with no commands, only gas will be charged")?;
		}

		let ptb = ProgrammableTransaction::new(self.inputs.clone(), self.commands.clone());
		ptb.validate()?;
		Ok(ptb)
	}

	/// Builds the complete transaction data. The sender, gas price, gas budget and at least
	/// one gas payment object are required.
	pub fn build(&self) -> Result<TransactionData, Error> {
		let sender = match self.sender {
			Some(sender) => sender,
			None => return Err(err!(ErrKind::Validation, "transaction sender is required")),
		};
		let price = match self.gas_price {
			Some(price) => price,
			None => return Err(err!(ErrKind::Validation, "gas price is required")),
		};
		let budget = match self.gas_budget {
			Some(budget) => budget,
			None => return Err(err!(ErrKind::Validation, "gas budget is required")),
		};
		if self.gas_payment.is_empty() {
			return Err(err!(
				ErrKind::Validation,
				"at least one gas payment object is required"
			));
		}

		let ptb = self.build_ptb()?;
		debug!(
			"built transaction with {} inputs and {} commands",
			ptb.inputs.len(),
			ptb.commands.len()
		)?;

		Ok(TransactionData::V1(TransactionDataV1 {
			kind: TransactionKind::ProgrammableTransaction(ptb),
			sender,
			gas_data: GasData {
				payment: self.gas_payment.clone(),
				owner: self.gas_owner.unwrap_or(sender),
				price,
				budget,
			},
			expiration: self.expiration,
		}))
	}

	/// Builds and encodes the transaction.
	pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
		self.build()?.to_bytes()
	}

	pub fn inputs(&self) -> &Vec<CallArg> {
		&self.inputs
	}

	pub fn commands(&self) -> &Vec<Command> {
		&self.commands
	}

	/// The number of commands.
	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	pub fn is_strict(&self) -> bool {
		self.strict
	}

	fn next_input_index(&self) -> Result<u16, Error> {
		if self.inputs.len() >= u16::MAX as usize {
			return Err(err!(
				ErrKind::Validation,
				"too many inputs (max {})",
				u16::MAX
			));
		}
		Ok(self.inputs.len() as u16)
	}

	fn add_input(&mut self, key: InputKey, arg: CallArg) -> Result<Argument, Error> {
		if let Some(index) = self.input_cache.get(&key) {
			return Ok(Argument::Input(*index));
		}
		let index = self.next_input_index()?;
		self.inputs.push(arg);
		self.input_cache.insert(key, index);
		Ok(Argument::Input(index))
	}
}

fn object_key(object_ref: &ObjectRef) -> InputKey {
	InputKey::Object(object_ref.object_id, object_ref.version, object_ref.digest)
}

fn input_key(input: &CallArg) -> InputKey {
	match input {
		CallArg::Pure(bytes) => InputKey::Pure(bytes.as_slice().to_vec()),
		CallArg::Object(ObjectArg::ImmOrOwnedObject(object_ref))
		| CallArg::Object(ObjectArg::Receiving(object_ref)) => object_key(object_ref),
		CallArg::Object(ObjectArg::SharedObject { id, .. }) => InputKey::Shared(*id),
	}
}

fn or_unset<T: Display>(value: &Option<T>) -> String {
	match value {
		Some(value) => value.to_string(),
		None => "unset".to_string(),
	}
}

impl Display for TransactionBuilder {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		let mode = if self.strict { "strict" } else { "permissive" };
		writeln!(f, "Transaction builder ({})", mode)?;
		writeln!(f, "  inputs:      {}", self.inputs.len())?;
		writeln!(f, "  commands:    {}", self.commands.len())?;
		writeln!(f, "  sender:      {}", or_unset(&self.sender))?;
		writeln!(f, "  gas price:   {}", or_unset(&self.gas_price))?;
		writeln!(f, "  gas budget:  {}", or_unset(&self.gas_budget))?;
		writeln!(f, "  gas payment: {} object(s)", self.gas_payment.len())?;
		writeln!(f, "  gas owner:   {}", or_unset(&self.gas_owner))?;
		match self.expiration {
			TransactionExpiration::None => writeln!(f, "  expiration:  none")?,
			TransactionExpiration::Epoch(epoch) => writeln!(f, "  expiration:  epoch {}", epoch)?,
		}

		let mut counts: Vec<(&str, usize)> = vec![];
		for command in &self.commands {
			match counts.iter_mut().find(|(name, _)| *name == command.name()) {
				Some((_, count)) => *count += 1,
				None => counts.push((command.name(), 1)),
			}
		}
		for (name, count) in counts {
			writeln!(f, "    {}: {}", name, count)?;
		}
		Ok(())
	}
}
