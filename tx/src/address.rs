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

use crate::{ObjectDigest, ObjectID, ObjectRef, SuiAddress};
use bcs_deps::{bs58, hex};
use bcs_err::*;
use bcs_ser::{impl_struct, FixedBytes, Reader, Serializable, Writer};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

const ADDRESS_HEX_DIGITS: usize = 64;
const DIGEST_LENGTH: usize = 32;

fn parse_hex32(s: &str, type_name: &str) -> Result<[u8; 32], Error> {
	let digits = match s.strip_prefix("0x") {
		Some(digits) => digits,
		None => return Err(err!(ErrKind::Parse, "{} must start with 0x: '{}'", type_name, s)),
	};
	if digits.is_empty() || digits.len() > ADDRESS_HEX_DIGITS {
		return Err(err!(
			ErrKind::Parse,
			"{} must have between 1 and {} hex digits: '{}'",
			type_name,
			ADDRESS_HEX_DIGITS,
			s
		));
	}

	let padded = format!("{:0>64}", digits);
	let mut ret = [0u8; 32];
	hex::decode_to_slice(padded, &mut ret)?;
	Ok(ret)
}

macro_rules! impl_address {
	($name:ident) => {
		impl $name {
			pub const ZERO: $name = $name(FixedBytes::from_array([0u8; 32]));

			pub fn from_bytes(bytes: [u8; 32]) -> Self {
				Self(FixedBytes::from_array(bytes))
			}

			pub fn as_bytes(&self) -> &[u8; 32] {
				self.0.as_bytes()
			}

			/// Parses `0x` prefixed hex. Fewer than 64 digits are left padded with zeros.
			pub fn parse(s: &str) -> Result<Self, Error> {
				Ok(Self::from_bytes(parse_hex32(s, stringify!($name))?))
			}
		}

		impl FromStr for $name {
			type Err = Error;
			fn from_str(s: &str) -> Result<Self, Error> {
				Self::parse(s)
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
				write!(f, "0x{}", hex::encode(self.0.as_bytes()))
			}
		}

		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
				write!(f, "{}({})", stringify!($name), self)
			}
		}

		impl Serializable for $name {
			fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
				Ok(Self(FixedBytes::read(reader)?))
			}
			fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
				self.0.write(writer)
			}
		}
	};
}

impl_address!(SuiAddress);
impl_address!(ObjectID);

impl From<ObjectID> for SuiAddress {
	fn from(id: ObjectID) -> Self {
		Self(id.0)
	}
}

impl From<SuiAddress> for ObjectID {
	fn from(address: SuiAddress) -> Self {
		Self(address.0)
	}
}

impl ObjectDigest {
	pub fn from_bytes(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}

	/// Parses a base58 digest. The decoded value must be exactly 32 bytes.
	pub fn parse(s: &str) -> Result<Self, Error> {
		let decoded = bs58::decode(s).into_vec()?;
		if decoded.len() != DIGEST_LENGTH {
			return Err(err!(
				ErrKind::Parse,
				"digest '{}' decodes to {} bytes, expected {}",
				s,
				decoded.len(),
				DIGEST_LENGTH
			));
		}
		let mut ret = [0u8; 32];
		ret.copy_from_slice(&decoded);
		Ok(Self(ret))
	}
}

impl FromStr for ObjectDigest {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self, Error> {
		Self::parse(s)
	}
}

impl Display for ObjectDigest {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(f, "{}", bs58::encode(&self.0).into_string())
	}
}

impl Debug for ObjectDigest {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(f, "ObjectDigest({})", self)
	}
}

impl Serializable for ObjectDigest {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		let offset = reader.offset();
		let bytes = reader.read_bytes()?;
		if bytes.len() != DIGEST_LENGTH {
			let msg = format!("object digest has length {}, expected {}", bytes.len(), DIGEST_LENGTH);
			return Err(ErrorKind::InvalidFormat { offset, msg }.into());
		}
		let mut ret = [0u8; 32];
		ret.copy_from_slice(&bytes);
		Ok(Self(ret))
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		writer.write_bytes(self.0)
	}
}

impl ObjectRef {
	pub fn new(object_id: ObjectID, version: u64, digest: ObjectDigest) -> Self {
		Self {
			object_id,
			version,
			digest,
		}
	}

	/// Builds a reference from its text forms: hex id and base58 digest.
	pub fn parse(object_id: &str, version: u64, digest: &str) -> Result<Self, Error> {
		Ok(Self::new(
			ObjectID::parse(object_id)?,
			version,
			ObjectDigest::parse(digest)?,
		))
	}
}

impl_struct!(ObjectRef {
	object_id,
	version,
	digest
});
