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
	use crate as bcs_err;
	use crate::{err, map_err, ErrKind, Error, ErrorKind};
	use std::sync::{Arc, RwLock};
	use std::thread::spawn;

	fn test_kind(k: ErrKind, s: &str, error: Error) -> Result<(), Error> {
		let err: bcs_err::Error = err!(k, s);
		let err_kind = err.kind();
		assert_eq!(error.kind(), err_kind);
		Ok(())
	}

	#[test]
	fn test_ekinds() -> Result<(), crate::Error> {
		let s = "s";
		let ss = "s".to_string();

		test_kind(ErrKind::Validation, s, ErrorKind::Validation(ss.clone()).into())?;
		test_kind(ErrKind::IO, s, ErrorKind::IO(ss.clone()).into())?;
		test_kind(ErrKind::Log, s, ErrorKind::Log(ss.clone()).into())?;
		test_kind(
			ErrKind::Configuration,
			s,
			ErrorKind::Configuration(ss.clone()).into(),
		)?;
		test_kind(ErrKind::Utf8, s, ErrorKind::Utf8(ss.clone()).into())?;
		test_kind(
			ErrKind::IllegalArgument,
			s,
			ErrorKind::IllegalArgument(ss.clone()).into(),
		)?;
		test_kind(
			ErrKind::IllegalState,
			s,
			ErrorKind::IllegalState(ss.clone()).into(),
		)?;
		test_kind(ErrKind::Poison, s, ErrorKind::Poison(ss.clone()).into())?;
		test_kind(ErrKind::Parse, s, ErrorKind::Parse(ss.clone()).into())?;
		test_kind(ErrKind::Test, s, ErrorKind::Test(ss.clone()).into())?;

		Ok(())
	}

	#[test]
	fn test_err_format_args() -> Result<(), Error> {
		let e = err!(ErrKind::Validation, "command {} references result {}", 0, 1);
		assert_eq!(
			e.kind(),
			ErrorKind::Validation("command 0 references result 1".to_string())
		);
		assert!(e.inner().contains("validation error"));
		Ok(())
	}

	#[test]
	fn test_structured_kinds() -> Result<(), Error> {
		let e: Error = ErrorKind::Overflow {
			type_name: "u8".to_string(),
			value: "256".to_string(),
			max: "255".to_string(),
		}
		.into();

		match e.kind() {
			ErrorKind::Overflow {
				type_name,
				value,
				max,
			} => {
				assert_eq!(type_name, "u8");
				assert_eq!(value, "256");
				assert_eq!(max, "255");
			}
			_ => return Err(err!(ErrKind::Test, "expected overflow")),
		}
		assert!(e.to_string().contains("256 does not fit in u8"));

		let e: Error = ErrorKind::InsufficientData {
			needed: 4,
			available: 3,
			offset: 7,
		}
		.into();
		assert!(matches!(
			e.kind(),
			ErrorKind::InsufficientData {
				needed: 4,
				available: 3,
				offset: 7
			}
		));

		let e: Error = ErrorKind::InvalidFormat {
			offset: 2,
			msg: "bool byte 0x02".to_string(),
		}
		.into();
		assert!(e.inner().contains("invalid format at offset 2"));

		// equality is by kind
		let e2: Error = ErrorKind::InvalidFormat {
			offset: 2,
			msg: "bool byte 0x02".to_string(),
		}
		.into();
		assert_eq!(e, e2);
		Ok(())
	}

	#[test]
	fn test_map_err() -> Result<(), Error> {
		let res: Result<u64, Error> = map_err!("abc".parse::<u64>(), ErrKind::Parse, "bad version");
		match res.unwrap_err().kind() {
			ErrorKind::Parse(msg) => assert!(msg.starts_with("bad version: ")),
			_ => return Err(err!(ErrKind::Test, "expected parse error")),
		}

		let res: Result<u16, Error> = map_err!(u16::try_from(70_000u32), ErrKind::Validation);
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::Validation(_)));

		Ok(())
	}

	#[test]
	fn test_from_impls() -> Result<(), Error> {
		let e: Error = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Utf8(_)));

		let e: Error = "12x".parse::<u32>().unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Parse(_)));

		let e: Error = u8::try_from(300u32).unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::IllegalArgument(_)));

		let e: Error = bcs_deps::hex::decode("zz").unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Parse(_)));

		let e: Error = bcs_deps::bs58::decode("0OIl").into_vec().unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Parse(_)));

		let res = bcs_deps::serde_json::from_str::<bcs_deps::serde_json::Value>("{");
		let e: Error = res.unwrap_err().into();
		assert!(matches!(e.kind(), ErrorKind::Parse(_)));

		let e: Error = std::io::Error::new(std::io::ErrorKind::Other, "io").into();
		assert!(matches!(e.kind(), ErrorKind::IO(_)));

		Ok(())
	}

	#[test]
	fn test_poison() -> Result<(), Error> {
		let lock = Arc::new(RwLock::new(0u32));
		let lock_clone = lock.clone();
		let _ = spawn(move || {
			let _guard = lock_clone.write();
			panic!("poison the lock");
		})
		.join();

		let res: Result<(), Error> = match lock.write() {
			Ok(_) => Ok(()),
			Err(e) => Err(e.into()),
		};
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::Poison(_)));
		Ok(())
	}
}
