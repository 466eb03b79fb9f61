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

use crate::{StructTag, SuiAddress, TypeTag};
use bcs_err::*;
use bcs_ser::{impl_struct, unknown_variant, Reader, Serializable, Writer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// nesting limit when decoding, deep vector<vector<...>> chains are rejected
const MAX_TYPE_TAG_DEPTH: usize = 64;

impl TypeTag {
	/// Parses a Move type: a primitive name, `vector<T>` or `address::module::Name<T, ...>`.
	/// Generic parameters may themselves be generic.
	pub fn parse(s: &str) -> Result<Self, Error> {
		let s = s.trim();
		let tag = match s {
			"bool" => TypeTag::Bool,
			"u8" => TypeTag::U8,
			"u16" => TypeTag::U16,
			"u32" => TypeTag::U32,
			"u64" => TypeTag::U64,
			"u128" => TypeTag::U128,
			"u256" => TypeTag::U256,
			"address" => TypeTag::Address,
			"signer" => TypeTag::Signer,
			_ => {
				if let Some(inner) = s.strip_prefix("vector<").and_then(|r| r.strip_suffix('>')) {
					TypeTag::Vector(Box::new(Self::parse(inner)?))
				} else if s.contains("::") {
					TypeTag::Struct(Box::new(StructTag::parse(s)?))
				} else {
					return Err(err!(ErrKind::Parse, "unable to parse type '{}'", s));
				}
			}
		};
		Ok(tag)
	}

	fn tag(&self) -> u32 {
		match self {
			TypeTag::Bool => 0,
			TypeTag::U8 => 1,
			TypeTag::U64 => 2,
			TypeTag::U128 => 3,
			TypeTag::Address => 4,
			TypeTag::Signer => 5,
			TypeTag::Vector(_) => 6,
			TypeTag::Struct(_) => 7,
			TypeTag::U16 => 8,
			TypeTag::U32 => 9,
			TypeTag::U256 => 10,
		}
	}

	fn read_nested<R: Reader>(reader: &mut R, depth: usize) -> Result<Self, Error> {
		let offset = reader.offset();
		if depth > MAX_TYPE_TAG_DEPTH {
			let msg = format!("type tag nesting exceeds {}", MAX_TYPE_TAG_DEPTH);
			return Err(ErrorKind::InvalidFormat { offset, msg }.into());
		}
		let tag = match reader.read_variant_tag()? {
			0 => TypeTag::Bool,
			1 => TypeTag::U8,
			2 => TypeTag::U64,
			3 => TypeTag::U128,
			4 => TypeTag::Address,
			5 => TypeTag::Signer,
			6 => TypeTag::Vector(Box::new(Self::read_nested(reader, depth + 1)?)),
			7 => TypeTag::Struct(Box::new(StructTag {
				address: SuiAddress::read(reader)?,
				module: String::read(reader)?,
				name: String::read(reader)?,
				type_params: {
					let len = reader.read_len()?;
					let mut params = Vec::with_capacity(len.min(reader.remaining()));
					for _ in 0..len {
						params.push(Self::read_nested(reader, depth + 1)?);
					}
					params
				},
			})),
			8 => TypeTag::U16,
			9 => TypeTag::U32,
			10 => TypeTag::U256,
			tag => return Err(unknown_variant("TypeTag", tag, offset)),
		};
		Ok(tag)
	}
}

impl Serializable for TypeTag {
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
		Self::read_nested(reader, 0)
	}
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		writer.write_variant_tag(self.tag())?;
		match self {
			TypeTag::Vector(inner) => inner.write(writer),
			TypeTag::Struct(inner) => inner.write(writer),
			_ => Ok(()),
		}
	}
}

impl FromStr for TypeTag {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self, Error> {
		Self::parse(s)
	}
}

impl Display for TypeTag {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self {
			TypeTag::Bool => write!(f, "bool"),
			TypeTag::U8 => write!(f, "u8"),
			TypeTag::U16 => write!(f, "u16"),
			TypeTag::U32 => write!(f, "u32"),
			TypeTag::U64 => write!(f, "u64"),
			TypeTag::U128 => write!(f, "u128"),
			TypeTag::U256 => write!(f, "u256"),
			TypeTag::Address => write!(f, "address"),
			TypeTag::Signer => write!(f, "signer"),
			TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
			TypeTag::Struct(inner) => write!(f, "{}", inner),
		}
	}
}

impl StructTag {
	/// Parses `address::module::Name` with optional generic parameters.
	pub fn parse(s: &str) -> Result<Self, Error> {
		let s = s.trim();
		let (base, type_params) = match s.find('<') {
			Some(start) => {
				let params = match s[start + 1..].strip_suffix('>') {
					Some(params) => params,
					None => return Err(err!(ErrKind::Parse, "unbalanced generics in '{}'", s)),
				};
				let mut type_params = vec![];
				for param in split_type_params(params)? {
					type_params.push(TypeTag::parse(param)?);
				}
				(&s[..start], type_params)
			}
			None => (s, vec![]),
		};

		let parts: Vec<&str> = base.split("::").collect();
		if parts.len() != 3 || parts[1].is_empty() || parts[2].is_empty() {
			return Err(err!(
				ErrKind::Parse,
				"struct type must be address::module::name: '{}'",
				s
			));
		}

		Ok(Self {
			address: SuiAddress::parse(parts[0].trim())?,
			module: parts[1].trim().to_string(),
			name: parts[2].trim().to_string(),
			type_params,
		})
	}
}

impl FromStr for StructTag {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self, Error> {
		Self::parse(s)
	}
}

impl Display for StructTag {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
		if !self.type_params.is_empty() {
			let params: Vec<String> = self.type_params.iter().map(|t| t.to_string()).collect();
			write!(f, "<{}>", params.join(", "))?;
		}
		Ok(())
	}
}

impl_struct!(StructTag {
	address,
	module,
	name,
	type_params
});

// split on top level commas only
fn split_type_params(s: &str) -> Result<Vec<&str>, Error> {
	let mut ret = vec![];
	let mut depth = 0usize;
	let mut start = 0;
	for (i, c) in s.char_indices() {
		match c {
			'<' => depth += 1,
			'>' => {
				if depth == 0 {
					return Err(err!(ErrKind::Parse, "unbalanced generics in '{}'", s));
				}
				depth -= 1;
			}
			',' if depth == 0 => {
				ret.push(&s[start..i]);
				start = i + 1;
			}
			_ => {}
		}
	}
	if depth != 0 {
		return Err(err!(ErrKind::Parse, "unbalanced generics in '{}'", s));
	}
	ret.push(&s[start..]);

	if ret.iter().any(|p| p.trim().is_empty()) {
		return Err(err!(ErrKind::Parse, "empty type parameter in '{}'", s));
	}
	Ok(ret)
}
