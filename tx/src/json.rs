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

//! JSON view of a transaction, for debugging. Object versions are strings and pure input
//! bytes are base64, so the output matches what the other Sui SDKs print.

use crate::{
	Argument, CallArg, Command, ObjectArg, ObjectRef, TransactionBuilder, TransactionData,
	TransactionExpiration,
};
use bcs_deps::base64::engine::general_purpose::STANDARD;
use bcs_deps::base64::Engine;
use bcs_deps::serde_json::{self, json, Value};
use bcs_err::*;

// the version reported by the TypeScript SDK for this layout
const JSON_VERSION: u64 = 2;

impl TransactionData {
	/// Returns the transaction as a [`serde_json::Value`].
	pub fn to_json_value(&self) -> Value {
		let v1 = self.v1();
		let ptb = self.programmable_transaction();
		let gas = &v1.gas_data;
		json!({
			"version": JSON_VERSION,
			"sender": v1.sender.to_string(),
			"expiration": expiration_value(&v1.expiration),
			"gasData": {
				"budget": gas.budget,
				"price": gas.price,
				"owner": gas.owner.to_string(),
				"payment": gas.payment.iter().map(object_ref_value).collect::<Vec<_>>(),
			},
			"inputs": ptb.inputs.iter().map(input_value).collect::<Vec<_>>(),
			"commands": ptb.commands.iter().map(command_value).collect::<Vec<_>>(),
		})
	}

	/// Pretty printed JSON of the transaction.
	pub fn to_json(&self) -> Result<String, Error> {
		Ok(serde_json::to_string_pretty(&self.to_json_value())?)
	}
}

impl TransactionBuilder {
	/// Builds the transaction and returns its JSON form. Fails like
	/// [`crate::TransactionBuilder::build`] when metadata is missing or a reference is invalid.
	pub fn to_json(&self) -> Result<String, Error> {
		self.build()?.to_json()
	}
}

fn expiration_value(expiration: &TransactionExpiration) -> Value {
	match expiration {
		TransactionExpiration::None => Value::Null,
		TransactionExpiration::Epoch(epoch) => json!({ "Epoch": epoch }),
	}
}

fn object_ref_value(object_ref: &ObjectRef) -> Value {
	json!({
		"objectId": object_ref.object_id.to_string(),
		"version": object_ref.version.to_string(),
		"digest": object_ref.digest.to_string(),
	})
}

fn input_value(input: &CallArg) -> Value {
	match input {
		CallArg::Pure(bytes) => json!({
			"Pure": { "bytes": STANDARD.encode(bytes.as_slice()) }
		}),
		CallArg::Object(ObjectArg::ImmOrOwnedObject(object_ref)) => json!({
			"Object": { "ImmOrOwnedObject": object_ref_value(object_ref) }
		}),
		CallArg::Object(ObjectArg::SharedObject {
			id,
			initial_shared_version,
			mutable,
		}) => json!({
			"Object": {
				"SharedObject": {
					"objectId": id.to_string(),
					"initialSharedVersion": initial_shared_version.to_string(),
					"mutable": mutable,
				}
			}
		}),
		CallArg::Object(ObjectArg::Receiving(object_ref)) => json!({
			"Object": { "ReceivingObject": object_ref_value(object_ref) }
		}),
	}
}

fn argument_value(argument: &Argument) -> Value {
	match argument {
		Argument::GasCoin => json!({ "GasCoin": true }),
		Argument::Input(i) => json!({ "Input": i }),
		Argument::Result(i) => json!({ "Result": i }),
		Argument::NestedResult(i, j) => json!({ "NestedResult": [i, j] }),
	}
}

fn arguments_value(arguments: &[Argument]) -> Vec<Value> {
	arguments.iter().map(argument_value).collect()
}

fn modules_value(modules: &[bcs_ser::Bytes]) -> Vec<Value> {
	modules
		.iter()
		.map(|module| json!(module.as_slice()))
		.collect()
}

fn command_value(command: &Command) -> Value {
	match command {
		Command::MoveCall(call) => json!({
			"MoveCall": {
				"package": call.package.to_string(),
				"module": call.module,
				"function": call.function,
				"typeArguments": call
					.type_arguments
					.iter()
					.map(|t| t.to_string())
					.collect::<Vec<_>>(),
				"arguments": arguments_value(&call.arguments),
			}
		}),
		Command::TransferObjects { objects, address } => json!({
			"TransferObjects": {
				"objects": arguments_value(objects),
				"address": argument_value(address),
			}
		}),
		Command::SplitCoins { coin, amounts } => json!({
			"SplitCoins": {
				"coin": argument_value(coin),
				"amounts": arguments_value(amounts),
			}
		}),
		Command::MergeCoins {
			destination,
			sources,
		} => json!({
			"MergeCoins": {
				"destination": argument_value(destination),
				"sources": arguments_value(sources),
			}
		}),
		Command::Publish {
			modules,
			dependencies,
		} => json!({
			"Publish": {
				"modules": modules_value(modules),
				"dependencies": dependencies.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
			}
		}),
		Command::MakeMoveVec { type_tag, elements } => json!({
			"MakeMoveVec": {
				"type": type_tag.as_ref().map(|t| t.to_string()),
				"elements": arguments_value(elements),
			}
		}),
		Command::Upgrade {
			modules,
			dependencies,
			package,
			ticket,
		} => json!({
			"Upgrade": {
				"modules": modules_value(modules),
				"dependencies": dependencies.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
				"package": package.to_string(),
				"ticket": argument_value(ticket),
			}
		}),
	}
}
