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

#[cfg(test)]
mod test {
	use crate::*;
	use bcs_conf::ConfigOption::*;
	use bcs_err::*;
	use bcs_ser::{deserialize, serialize, Bytes};
	use bcs_test::*;
	use std::io::Write;

	const DIGEST: &str = "1thX6LZfHDZZGkq4tt1q2yRAPVfCTpX99XN4RHFsxM";

	fn digest_bytes() -> [u8; 32] {
		let mut ret = [0u8; 32];
		for i in 0..30 {
			ret[i] = (i % 10) as u8;
		}
		ret[30] = 1;
		ret[31] = 2;
		ret
	}

	fn object_ref(last: u8, version: u64) -> Result<ObjectRef, Error> {
		let id = format!("0x{:064x}", last);
		ObjectRef::parse(&id, version, DIGEST)
	}

	fn is_validation(e: &Error) -> bool {
		matches!(e.kind(), ErrorKind::Validation(_))
	}

	fn is_invalid_format(e: &Error) -> bool {
		matches!(e.kind(), ErrorKind::InvalidFormat { .. })
	}

	fn ready_builder() -> Result<TransactionBuilder, Error> {
		let mut tx = TransactionBuilder::new();
		tx.set_sender(SuiAddress::parse("0x2")?)
			.set_gas_price(5)
			.set_gas_budget(100)
			.set_gas_payment(vec![object_ref(0x77, 3619)?]);
		Ok(tx)
	}

	#[test]
	fn test_address_parse_and_display() -> Result<(), Error> {
		let short = SuiAddress::parse("0x2")?;
		let mut expected = [0u8; 32];
		expected[31] = 2;
		assert_eq!(short.as_bytes(), &expected);
		assert_eq!(
			short.to_string(),
			"0x0000000000000000000000000000000000000000000000000000000000000002"
		);
		assert_eq!(SuiAddress::parse(&short.to_string())?, short);

		let upper: ObjectID = "0xABCDEF".parse()?;
		assert_eq!(
			upper.to_string(),
			"0x0000000000000000000000000000000000000000000000000000000000abcdef"
		);
		assert_eq!(SuiAddress::from(upper), SuiAddress::parse("0xabcdef")?);
		assert_eq!(SuiAddress::ZERO, SuiAddress::parse("0x0")?);

		assert!(SuiAddress::parse("2").is_err());
		assert!(SuiAddress::parse("0x").is_err());
		assert!(SuiAddress::parse("0xzz").is_err());
		assert!(SuiAddress::parse(&format!("0x1{}", "0".repeat(64))).is_err());
		match ObjectID::parse("abc") {
			Err(e) => assert!(matches!(e.kind(), ErrorKind::Parse(_))),
			Ok(v) => panic!("parsed {:?}", v),
		}

		// raw 32 bytes on the wire
		assert_eq!(serialize(&short)?, expected.to_vec());
		assert_eq!(deserialize::<SuiAddress>(&expected)?, short);
		Ok(())
	}

	#[test]
	fn test_object_digest() -> Result<(), Error> {
		let digest = ObjectDigest::parse(DIGEST)?;
		assert_eq!(digest.as_bytes(), &digest_bytes());
		assert_eq!(digest.to_string(), DIGEST);

		// length prefixed on the wire
		let bytes = serialize(&digest)?;
		assert_eq!(bytes.len(), 33);
		assert_eq!(bytes[0], 32);
		assert_eq!(&bytes[1..], &digest_bytes());
		assert_eq!(deserialize::<ObjectDigest>(&bytes)?, digest);

		// a 31 byte digest
		let short = serialize(&Bytes::new(vec![7u8; 31]))?;
		assert!(is_invalid_format(&deserialize::<ObjectDigest>(&short).unwrap_err()));

		assert!(ObjectDigest::parse("0OIl").is_err());
		assert!(ObjectDigest::parse("abc").is_err());
		Ok(())
	}

	#[test]
	fn test_object_ref_layout() -> Result<(), Error> {
		let r = object_ref(1, 3619)?;
		let bytes = serialize(&r)?;
		assert_eq!(bytes.len(), 32 + 8 + 33);
		assert_eq!(bytes[31], 1);
		assert_eq!(&bytes[32..40], &[35, 14, 0, 0, 0, 0, 0, 0]);
		assert_eq!(deserialize::<ObjectRef>(&bytes)?, r);
		Ok(())
	}

	#[test]
	fn test_type_tag_parse() -> Result<(), Error> {
		assert_eq!(TypeTag::parse("u64")?, TypeTag::U64);
		assert_eq!(TypeTag::parse(" bool ")?, TypeTag::Bool);
		assert_eq!(
			TypeTag::parse("vector<vector<u8>>")?,
			TypeTag::Vector(Box::new(TypeTag::Vector(Box::new(TypeTag::U8))))
		);

		let coin = TypeTag::parse("0x2::coin::Coin<0x2::sui::SUI>")?;
		match &coin {
			TypeTag::Struct(s) => {
				assert_eq!(s.address, SuiAddress::parse("0x2")?);
				assert_eq!(s.module, "coin");
				assert_eq!(s.name, "Coin");
				assert_eq!(s.type_params.len(), 1);
			}
			_ => panic!("expected a struct, found {:?}", coin),
		}

		// nested generics split at the top level only
		let pair = StructTag::parse("0x1::pair::Pair<0x2::coin::Coin<0x2::sui::SUI>, vector<u64>>")?;
		assert_eq!(pair.type_params.len(), 2);
		assert_eq!(pair.type_params[1], TypeTag::Vector(Box::new(TypeTag::U64)));

		// display parses back to the same tag
		let text = pair.to_string();
		let one = "0x0000000000000000000000000000000000000000000000000000000000000001";
		assert!(text.starts_with(&format!("{}::pair::Pair<", one)));
		assert_eq!(StructTag::parse(&text)?, pair);
		assert_eq!(TypeTag::parse(&coin.to_string())?, coin);

		assert!(TypeTag::parse("u7").is_err());
		assert!(TypeTag::parse("vector<u8").is_err());
		assert!(TypeTag::parse("0x2::coin").is_err());
		assert!(TypeTag::parse("0x2::coin::Coin<u8").is_err());
		assert!(TypeTag::parse("0x2::coin::Coin<>").is_err());
		assert!(TypeTag::parse("0x2::a::B<u8,>").is_err());
		assert!(TypeTag::parse("0x2::a::B<u8>>").is_err());
		Ok(())
	}

	#[test]
	fn test_type_tag_encoding() -> Result<(), Error> {
		assert_eq!(serialize(&TypeTag::U16)?, vec![8]);
		assert_eq!(serialize(&TypeTag::U32)?, vec![9]);
		assert_eq!(serialize(&TypeTag::U256)?, vec![10]);
		assert_eq!(serialize(&TypeTag::Signer)?, vec![5]);
		assert_eq!(serialize(&TypeTag::Vector(Box::new(TypeTag::U8)))?, vec![6, 1]);

		let tag = TypeTag::parse("0x6::capy::Capy")?;
		let bytes = serialize(&tag)?;
		assert_eq!(bytes[0], 7);
		assert_eq!(bytes[32], 6);
		assert_eq!(&bytes[33..], &[4, 99, 97, 112, 121, 4, 67, 97, 112, 121, 0]);
		assert_eq!(deserialize::<TypeTag>(&bytes)?, tag);

		assert!(is_invalid_format(&deserialize::<TypeTag>(&[11]).unwrap_err()));

		// too deep
		let mut deep = vec![6u8; 100];
		deep.push(1);
		assert!(is_invalid_format(&deserialize::<TypeTag>(&deep).unwrap_err()));
		Ok(())
	}

	#[test]
	fn test_argument_and_command_tags() -> Result<(), Error> {
		assert_eq!(serialize(&Argument::GasCoin)?, vec![0]);
		assert_eq!(serialize(&Argument::Input(3))?, vec![1, 3, 0]);
		assert_eq!(serialize(&Argument::Result(1))?, vec![2, 1, 0]);
		assert_eq!(serialize(&Argument::NestedResult(0, 1))?, vec![3, 0, 0, 1, 0]);
		assert!(is_invalid_format(&deserialize::<Argument>(&[4, 0, 0]).unwrap_err()));

		let make_vec = Command::MakeMoveVec {
			type_tag: Some(TypeTag::U64),
			elements: vec![],
		};
		assert_eq!(serialize(&make_vec)?, vec![5, 1, 2, 0]);

		let upgrade = Command::Upgrade {
			modules: vec![Bytes::new(vec![1, 2])],
			dependencies: vec![],
			package: ObjectID::parse("0x5")?,
			ticket: Argument::Result(0),
		};
		let bytes = serialize(&upgrade)?;
		assert_eq!(&bytes[0..5], &[6, 1, 2, 1, 2]);
		assert_eq!(deserialize::<Command>(&bytes)?, upgrade);

		let shared = CallArg::Object(ObjectArg::SharedObject {
			id: ObjectID::parse("0x6")?,
			initial_shared_version: 1,
			mutable: true,
		});
		let bytes = serialize(&shared)?;
		assert_eq!(bytes.len(), 2 + 32 + 8 + 1);
		assert_eq!(&bytes[0..2], &[1, 1]);
		assert_eq!(deserialize::<CallArg>(&bytes)?, shared);

		assert_eq!(serialize(&TransactionExpiration::Epoch(7))?, vec![1, 7, 0, 0, 0, 0, 0, 0, 0]);
		assert_eq!(serialize(&TransactionExpiration::None)?, vec![0]);
		Ok(())
	}

	#[test]
	fn test_ptb_validation() -> Result<(), Error> {
		let forward = ProgrammableTransaction::new(
			vec![],
			vec![Command::SplitCoins {
				coin: Argument::Result(0),
				amounts: vec![Argument::GasCoin],
			}],
		);
		assert!(is_validation(&forward.validate().unwrap_err()));
		// encoding validates first
		assert!(is_validation(&serialize(&forward).unwrap_err()));

		let nested_forward = ProgrammableTransaction::new(
			vec![],
			vec![Command::MergeCoins {
				destination: Argument::GasCoin,
				sources: vec![Argument::NestedResult(3, 0)],
			}],
		);
		assert!(is_validation(&nested_forward.validate().unwrap_err()));

		let bad_input = ProgrammableTransaction::new(
			vec![CallArg::Pure(Bytes::new(vec![1]))],
			vec![Command::TransferObjects {
				objects: vec![Argument::GasCoin],
				address: Argument::Input(1),
			}],
		);
		assert!(is_validation(&bad_input.validate().unwrap_err()));

		let empty_amounts = ProgrammableTransaction::new(
			vec![],
			vec![Command::SplitCoins {
				coin: Argument::GasCoin,
				amounts: vec![],
			}],
		);
		assert!(is_validation(&empty_amounts.validate().unwrap_err()));

		let untyped_vec = ProgrammableTransaction::new(
			vec![],
			vec![Command::MakeMoveVec {
				type_tag: None,
				elements: vec![],
			}],
		);
		assert!(is_validation(&untyped_vec.validate().unwrap_err()));

		let ok = ProgrammableTransaction::new(
			vec![CallArg::Pure(Bytes::new(vec![1, 0, 0, 0, 0, 0, 0, 0]))],
			vec![
				Command::SplitCoins {
					coin: Argument::GasCoin,
					amounts: vec![Argument::Input(0)],
				},
				Command::MergeCoins {
					destination: Argument::GasCoin,
					sources: vec![Argument::NestedResult(0, 0)],
				},
			],
		);
		ok.validate()?;
		assert_eq!(deserialize::<ProgrammableTransaction>(&serialize(&ok)?)?, ok);
		Ok(())
	}

	#[test]
	fn test_input_dedup() -> Result<(), Error> {
		let mut tx = TransactionBuilder::new();
		let a = tx.pure(&100u64)?;
		let b = tx.pure(&100u64)?;
		let c = tx.pure(&101u64)?;
		assert_eq!(a, b);
		assert_eq!(a, Argument::Input(0));
		assert_eq!(c, Argument::Input(1));

		// same bytes through the raw path
		let d = tx.pure_bytes(serialize(&100u64)?)?;
		assert_eq!(d, a);

		let r = object_ref(9, 1)?;
		let obj = tx.object(r)?;
		let recv = tx.receiving(r)?;
		assert_eq!(obj, recv);
		assert_eq!(tx.inputs().len(), 3);
		assert_eq!(tx.inputs()[2], CallArg::Object(ObjectArg::ImmOrOwnedObject(r)));

		// a different version is a different input
		let other = tx.object(object_ref(9, 2)?)?;
		assert_eq!(other, Argument::Input(3));
		Ok(())
	}

	#[test]
	fn test_shared_object_upgrade() -> Result<(), Error> {
		let mut tx = TransactionBuilder::new();
		let id = ObjectID::parse("0x6")?;
		let first = tx.shared_object(id, 1, false)?;
		let second = tx.shared_object(id, 1, true)?;
		let third = tx.shared_object(id, 1, false)?;
		assert_eq!(first, second);
		assert_eq!(second, third);
		assert_eq!(tx.inputs().len(), 1);
		assert_eq!(
			tx.inputs()[0],
			CallArg::Object(ObjectArg::SharedObject {
				id,
				initial_shared_version: 1,
				mutable: true,
			})
		);
		Ok(())
	}

	#[test]
	fn test_result_handles() -> Result<(), Error> {
		let mut tx = TransactionBuilder::new();
		let gas = tx.gas_coin();
		let amount = tx.pure(&5u64)?;
		let first = tx.split_coins(gas, vec![amount, amount])?;
		let second = tx.move_call("0x2::coin::join", &["0x2::sui::SUI"], vec![first.nested(1)])?;
		assert_eq!(first.command_index(), 0);
		assert_eq!(first.single(), Argument::Result(0));
		assert_eq!(first.nested(1), Argument::NestedResult(0, 1));
		assert_eq!(second.single(), Argument::Result(1));
		assert_eq!(tx.len(), 2);
		assert!(!tx.is_empty());

		match &tx.commands()[1] {
			Command::MoveCall(call) => {
				assert_eq!(call.package, ObjectID::parse("0x2")?);
				assert_eq!(call.module, "coin");
				assert_eq!(call.function, "join");
				assert_eq!(call.type_arguments, vec![TypeTag::parse("0x2::sui::SUI")?]);
			}
			other => panic!("unexpected command {:?}", other),
		}

		assert!(is_validation(&tx.move_call("0x2::coin", &[], vec![]).unwrap_err()));
		assert!(is_validation(&tx.move_call("0x2::::join", &[], vec![]).unwrap_err()));
		assert!(tx.move_call("2::coin::join", &[], vec![]).is_err());
		assert!(tx.move_call("0x2::coin::join", &["nope"], vec![]).is_err());
		// rejected commands are not added
		assert_eq!(tx.len(), 2);

		assert!(is_validation(&tx.split_coins(gas, vec![]).unwrap_err()));
		assert!(is_validation(&tx.merge_coins(gas, vec![]).unwrap_err()));
		assert!(is_validation(&tx.transfer_objects(vec![], gas).unwrap_err()));
		assert!(is_validation(&tx.publish(vec![], vec![]).unwrap_err()));
		Ok(())
	}

	#[test]
	fn test_forward_reference_rejected_at_build() -> Result<(), Error> {
		let mut tx = ready_builder()?;
		let gas = tx.gas_coin();
		tx.merge_coins(gas, vec![Argument::Result(0)])?;
		assert!(is_validation(&tx.build().unwrap_err()));

		let mut tx = ready_builder()?;
		tx.transfer_objects(vec![gas], Argument::Input(0))?;
		assert!(is_validation(&tx.to_bytes().unwrap_err()));
		Ok(())
	}

	#[test]
	fn test_build_requires_metadata() -> Result<(), Error> {
		let mut tx = TransactionBuilder::new();
		let gas = tx.gas_coin();
		let amount = tx.pure(&1u64)?;
		tx.split_coins(gas, vec![amount])?;

		assert!(is_validation(&tx.build().unwrap_err()));
		tx.set_sender(SuiAddress::parse("0x2")?);
		assert!(is_validation(&tx.build().unwrap_err()));
		tx.set_gas_price(5);
		assert!(is_validation(&tx.build().unwrap_err()));
		tx.set_gas_budget(100);
		assert!(is_validation(&tx.build().unwrap_err()));
		tx.set_gas_payment(vec![]);
		assert!(is_validation(&tx.build().unwrap_err()));
		tx.set_gas_payment(vec![object_ref(1, 1)?]);

		let data = tx.build()?;
		// owner falls back to the sender
		assert_eq!(data.v1().gas_data.owner, SuiAddress::parse("0x2")?);
		assert_eq!(data.v1().expiration, TransactionExpiration::None);

		tx.set_gas_owner(SuiAddress::parse("0x3")?).set_expiration_epoch(9);
		let data = tx.build()?;
		assert_eq!(data.v1().gas_data.owner, SuiAddress::parse("0x3")?);
		assert_eq!(data.v1().expiration, TransactionExpiration::Epoch(9));
		tx.set_no_expiration();
		assert_eq!(tx.build()?.v1().expiration, TransactionExpiration::None);
		Ok(())
	}

	#[test]
	fn test_strict_and_permissive() -> Result<(), Error> {
		let permissive = ready_builder()?;
		assert!(!permissive.is_strict());
		let ptb = permissive.build_ptb()?;
		assert!(ptb.commands.is_empty());

		let strict = TransactionBuilder::new_strict();
		assert!(strict.is_strict());
		assert!(is_validation(&strict.build_ptb().unwrap_err()));

		let configured = TransactionBuilder::with_config(vec![StrictValidation(true)])?;
		assert!(configured.is_strict());
		let configured = TransactionBuilder::with_config(vec![StrictValidation(false)])?;
		assert!(!configured.is_strict());

		match TransactionBuilder::with_config(vec![AllowTrailingBytes(true)]) {
			Err(e) => assert!(matches!(e.kind(), ErrorKind::Configuration(_))),
			Ok(_) => panic!("unexpected option accepted"),
		}
		Ok(())
	}

	#[test]
	fn test_builder_from_bytes() -> Result<(), Error> {
		let mut tx = ready_builder()?;
		let gas = tx.gas_coin();
		let amount = tx.pure(&10u64)?;
		let coins = tx.split_coins(gas, vec![amount])?;
		let recipient = tx.pure(&SuiAddress::parse("0x5")?)?;
		tx.transfer_objects(vec![coins.nested(0)], recipient)?;
		tx.set_expiration_epoch(4);
		let bytes = tx.to_bytes()?;

		let mut rebuilt = TransactionBuilder::from_bytes(&bytes)?;
		assert_eq!(rebuilt.to_bytes()?, bytes);
		assert_eq!(rebuilt.inputs(), tx.inputs());
		assert_eq!(rebuilt.commands(), tx.commands());

		// the dedup table survives the round trip
		assert_eq!(rebuilt.pure(&10u64)?, amount);

		// owner equal to the sender maps back to unset
		rebuilt.set_sender(SuiAddress::parse("0x9")?);
		assert_eq!(rebuilt.build()?.v1().gas_data.owner, SuiAddress::parse("0x9")?);

		let mut with_owner = ready_builder()?;
		with_owner.set_gas_owner(SuiAddress::parse("0x3")?);
		let bytes = with_owner.to_bytes()?;
		let mut rebuilt = TransactionBuilder::from_bytes(&bytes)?;
		rebuilt.set_sender(SuiAddress::parse("0x9")?);
		assert_eq!(rebuilt.build()?.v1().gas_data.owner, SuiAddress::parse("0x3")?);

		// trailing bytes
		let mut long = bytes.clone();
		long.push(0);
		assert!(is_invalid_format(&TransactionBuilder::from_bytes(&long).unwrap_err()));
		assert!(is_invalid_format(&TransactionData::from_bytes(&long).unwrap_err()));
		Ok(())
	}

	#[test]
	fn test_publish_upgrade_make_move_vec() -> Result<(), Error> {
		let test_info = test_info!()?;
		let module = test_info.random_bytes(64);

		let mut tx = ready_builder()?;
		let deps = vec![ObjectID::parse("0x1")?, ObjectID::parse("0x2")?];
		let cap = tx.publish(vec![module.clone()], deps.clone())?;
		let ticket = tx.move_call("0x2::package::authorize_upgrade", &[], vec![cap.single()])?;
		let receipt = tx.upgrade(vec![module], deps, ObjectID::parse("0xabc")?, ticket.single())?;
		tx.move_call("0x2::package::commit_upgrade", &[], vec![cap.single(), receipt.single()])?;
		let made = tx.make_move_vec(Some("u64"), vec![])?;
		assert_eq!(made.command_index(), 4);
		assert!(is_validation(&tx.make_move_vec(None, vec![]).unwrap_err()));

		let bytes = tx.to_bytes()?;
		let data = TransactionData::from_bytes(&bytes)?;
		assert_eq!(data.programmable_transaction().commands, *tx.commands());

		// write the signed bytes the way a caller would persist them
		let mut path = std::path::PathBuf::from(test_info.directory());
		path.push("tx.bcs");
		let mut file = std::fs::File::create(&path)?;
		bcs_ser::serialize_into(&mut file, &data)?;
		file.flush()?;
		assert_eq!(std::fs::read(&path)?, bytes);
		Ok(())
	}

	#[test]
	fn test_summary() -> Result<(), Error> {
		let mut tx = TransactionBuilder::new();
		let gas = tx.gas_coin();
		let a = tx.pure(&1u64)?;
		tx.split_coins(gas, vec![a])?;
		tx.split_coins(gas, vec![a])?;
		tx.merge_coins(gas, vec![Argument::NestedResult(0, 0)])?;

		let summary = tx.to_string();
		assert!(summary.contains("permissive"));
		assert!(summary.contains("inputs:      1"));
		assert!(summary.contains("commands:    3"));
		assert!(summary.contains("sender:      unset"));
		assert!(summary.contains("SplitCoins: 2"));
		assert!(summary.contains("MergeCoins: 1"));

		tx.set_sender(SuiAddress::parse("0x2")?).set_expiration_epoch(3);
		let summary = tx.to_string();
		assert!(summary.contains("0x0000000000000000000000000000000000000000000000000000000000000002"));
		assert!(summary.contains("epoch 3"));
		Ok(())
	}

	#[test]
	fn test_json_export() -> Result<(), Error> {
		let mut tx = TransactionBuilder::new();
		// metadata is required, as for build
		assert!(is_validation(&tx.to_json().unwrap_err()));

		tx = ready_builder()?;
		tx.set_expiration_epoch(7);
		let amount = tx.pure(&100u64)?;
		let shared = tx.shared_object(ObjectID::parse("0x6")?, 1, false)?;
		let gas = tx.gas_coin();
		let coins = tx.split_coins(gas, vec![amount])?;
		tx.move_call("0x2::clock::touch", &["0x2::sui::SUI"], vec![shared, coins.nested(0)])?;
		tx.make_move_vec(None, vec![coins.single()])?;

		let value = tx.build()?.to_json_value();
		assert_eq!(value["version"], 2);
		assert_eq!(
			value["sender"],
			"0x0000000000000000000000000000000000000000000000000000000000000002"
		);
		assert_eq!(value["expiration"]["Epoch"], 7);
		assert_eq!(value["gasData"]["budget"], 100);
		assert_eq!(value["gasData"]["price"], 5);
		assert_eq!(value["gasData"]["owner"], value["sender"]);
		assert_eq!(value["gasData"]["payment"][0]["version"], "3619");
		assert_eq!(value["gasData"]["payment"][0]["digest"], DIGEST);

		assert_eq!(value["inputs"][0]["Pure"]["bytes"], "ZAAAAAAAAAA=");
		let shared = &value["inputs"][1]["Object"]["SharedObject"];
		assert_eq!(shared["initialSharedVersion"], "1");
		assert_eq!(shared["mutable"], false);

		let split = &value["commands"][0]["SplitCoins"];
		assert_eq!(split["coin"]["GasCoin"], true);
		assert_eq!(split["amounts"][0]["Input"], 0);
		let call = &value["commands"][1]["MoveCall"];
		assert_eq!(call["module"], "clock");
		assert_eq!(call["function"], "touch");
		assert_eq!(
			call["typeArguments"][0],
			"0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI"
		);
		assert_eq!(call["arguments"][1]["NestedResult"][0], 0);
		assert_eq!(call["arguments"][1]["NestedResult"][1], 0);
		let vec = &value["commands"][2]["MakeMoveVec"];
		assert!(vec["type"].is_null());
		assert_eq!(vec["elements"][0]["Result"], 0);

		let text = tx.to_json()?;
		let parsed: bcs_deps::serde_json::Value = bcs_deps::serde_json::from_str(&text)?;
		assert_eq!(parsed, value);

		tx.set_no_expiration();
		assert!(tx.build()?.to_json_value()["expiration"].is_null());
		Ok(())
	}
}
