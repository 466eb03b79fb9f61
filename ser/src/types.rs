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


use crate::uleb128;
use bcs_err::{Error, ErrorKind};

/// The largest length or element count BCS allows (2^31 - 1).
pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;

/// The largest number of bytes a ULEB128 length prefix or variant tag may occupy. Five bytes
/// carry 35 bits which covers every `u32`.
pub const MAX_ULEB128_BYTES: usize = 5;

/// The largest number of bytes a ULEB128 encoded `u64` may occupy.
pub const MAX_ULEB128_U64_BYTES: usize = 10;

/// Writer trait used for serializing data. Only [`crate::Writer::write_fixed_bytes`] must be
/// implemented. Every other function is built on it, so all implementations agree on the wire
/// format: integers are little endian and lengths and tags are ULEB128.
pub trait Writer {
	/// write `bytes` to the stream with no prefix
	fn write_fixed_bytes<T: AsRef<[u8]>>(&mut self, bytes: T) -> Result<(), Error>;

	/// write a u8 to the stream
	fn write_u8(&mut self, n: u8) -> Result<(), Error> {
		self.write_fixed_bytes([n])
	}

	/// write a u16 to the stream
	fn write_u16(&mut self, n: u16) -> Result<(), Error> {
		self.write_fixed_bytes(n.to_le_bytes())
	}

	/// write a u32 to the stream
	fn write_u32(&mut self, n: u32) -> Result<(), Error> {
		self.write_fixed_bytes(n.to_le_bytes())
	}

	/// write a u64 to the stream
	fn write_u64(&mut self, n: u64) -> Result<(), Error> {
		self.write_fixed_bytes(n.to_le_bytes())
	}

	/// write a u128 to the stream
	fn write_u128(&mut self, n: u128) -> Result<(), Error> {
		self.write_fixed_bytes(n.to_le_bytes())
	}

	/// write a u256 to the stream
	fn write_u256(&mut self, n: &U256) -> Result<(), Error> {
		self.write_fixed_bytes(n.to_le_bytes())
	}

	/// write a bool as a single 0x00 or 0x01 byte
	fn write_bool(&mut self, b: bool) -> Result<(), Error> {
		self.write_u8(if b { 1 } else { 0 })
	}

	/// write `n` as ULEB128
	fn write_uleb128(&mut self, n: u64) -> Result<(), Error> {
		let mut buf = [0u8; MAX_ULEB128_U64_BYTES];
		let len = uleb128::encode(n, &mut buf);
		self.write_fixed_bytes(&buf[0..len])
	}

	/// write a length or element count. Lengths above [`crate::MAX_SEQUENCE_LENGTH`] are an
	/// [`bcs_err::ErrorKind::Overflow`] error.
	fn write_len(&mut self, len: usize) -> Result<(), Error> {
		if len > MAX_SEQUENCE_LENGTH {
			let error: Error = ErrorKind::Overflow {
				type_name: "sequence length".to_string(),
				value: len.to_string(),
				max: MAX_SEQUENCE_LENGTH.to_string(),
			}
			.into();
			return Err(error);
		}
		self.write_uleb128(len as u64)
	}

	/// write `bytes` to the stream prefixed with their length
	fn write_bytes<T: AsRef<[u8]>>(&mut self, bytes: T) -> Result<(), Error> {
		let bytes = bytes.as_ref();
		self.write_len(bytes.len())?;
		self.write_fixed_bytes(bytes)
	}

	/// write the index of an enum variant
	fn write_variant_tag(&mut self, tag: u32) -> Result<(), Error> {
		self.write_uleb128(tag as u64)
	}

	/// write the presence byte of an option
	fn write_option_tag(&mut self, is_some: bool) -> Result<(), Error> {
		self.write_bool(is_some)
	}
}

/// Reader trait used for deserializing data. Implementations supply the raw byte access and
/// the limits in effect. Reads never rewind: every successful read advances
/// [`crate::Reader::offset`] by the number of bytes consumed.
pub trait Reader {
	/// fill `buf` from the input. Fails with [`bcs_err::ErrorKind::InsufficientData`] if fewer
	/// than `buf.len()` bytes remain, in which case nothing is consumed.
	fn read_fixed_bytes(&mut self, buf: &mut [u8]) -> Result<(), Error>;
	/// offset of the next byte to be read
	fn offset(&self) -> usize;
	/// number of unread bytes
	fn remaining(&self) -> usize;
	/// the largest number of bytes a length prefix or variant tag may occupy
	fn max_uleb128_bytes(&self) -> usize;
	/// the largest length a sequence may declare
	fn max_sequence_length(&self) -> usize;

	/// read a u8 from the reader and return the value
	fn read_u8(&mut self) -> Result<u8, Error> {
		let mut b = [0u8; 1];
		self.read_fixed_bytes(&mut b)?;
		Ok(b[0])
	}
	/// read a u16 from the reader and return the value
	fn read_u16(&mut self) -> Result<u16, Error> {
		let mut b = [0u8; 2];
		self.read_fixed_bytes(&mut b)?;
		Ok(u16::from_le_bytes(b))
	}
	/// read a u32 from the reader and return the value
	fn read_u32(&mut self) -> Result<u32, Error> {
		let mut b = [0u8; 4];
		self.read_fixed_bytes(&mut b)?;
		Ok(u32::from_le_bytes(b))
	}
	/// read a u64 from the reader and return the value
	fn read_u64(&mut self) -> Result<u64, Error> {
		let mut b = [0u8; 8];
		self.read_fixed_bytes(&mut b)?;
		Ok(u64::from_le_bytes(b))
	}
	/// read a u128 from the reader and return the value
	fn read_u128(&mut self) -> Result<u128, Error> {
		let mut b = [0u8; 16];
		self.read_fixed_bytes(&mut b)?;
		Ok(u128::from_le_bytes(b))
	}
	/// read a u256 from the reader and return the value
	fn read_u256(&mut self) -> Result<U256, Error> {
		let mut b = [0u8; 32];
		self.read_fixed_bytes(&mut b)?;
		Ok(U256::from_le_bytes(b))
	}

	/// read a bool. Any byte other than 0x00 or 0x01 is
	/// [`bcs_err::ErrorKind::InvalidFormat`].
	fn read_bool(&mut self) -> Result<bool, Error> {
		let offset = self.offset();
		match self.read_u8()? {
			0 => Ok(false),
			1 => Ok(true),
			b => Err(invalid_format(offset, format!("invalid bool byte 0x{:02x}", b))),
		}
	}

	/// read a ULEB128 value occupying at most `max_bytes` bytes
	fn read_uleb128(&mut self, max_bytes: usize) -> Result<u64, Error> {
		uleb128::decode(self, max_bytes)
	}

	/// read a ULEB128 value that must fit in a u32, bounded by
	/// [`crate::Reader::max_uleb128_bytes`]
	fn read_uleb128_u32(&mut self) -> Result<u32, Error> {
		let offset = self.offset();
		let max_bytes = self.max_uleb128_bytes();
		let v = self.read_uleb128(max_bytes)?;
		if v > u32::MAX as u64 {
			return Err(invalid_format(offset, format!("ULEB128 value {} exceeds u32", v)));
		}
		Ok(v as u32)
	}

	/// read a length or element count
	fn read_len(&mut self) -> Result<usize, Error> {
		let offset = self.offset();
		let len = self.read_uleb128_u32()? as usize;
		let max = self.max_sequence_length();
		if len > max {
			let msg = format!("length {} exceeds the maximum of {}", len, max);
			return Err(invalid_format(offset, msg));
		}
		Ok(len)
	}

	/// read length prefixed bytes. The declared length is checked against the remaining input
	/// before anything is allocated.
	fn read_bytes(&mut self) -> Result<Vec<u8>, Error> {
		let len = self.read_len()?;
		let remaining = self.remaining();
		if len > remaining {
			let error: Error = ErrorKind::InsufficientData {
				needed: len,
				available: remaining,
				offset: self.offset(),
			}
			.into();
			return Err(error);
		}
		let mut ret = vec![0u8; len];
		self.read_fixed_bytes(&mut ret)?;
		Ok(ret)
	}

	/// read the index of an enum variant
	fn read_variant_tag(&mut self) -> Result<u32, Error> {
		self.read_uleb128_u32()
	}

	/// read the presence byte of an option. Any byte other than 0x00 or 0x01 is
	/// [`bcs_err::ErrorKind::InvalidFormat`].
	fn read_option_tag(&mut self) -> Result<bool, Error> {
		let offset = self.offset();
		match self.read_u8()? {
			0 => Ok(false),
			1 => Ok(true),
			b => Err(invalid_format(offset, format!("invalid option tag 0x{:02x}", b))),
		}
	}
}

/// This is the trait used by all values that have a BCS encoding. Implementations are
/// provided for the unsigned integers, [`prim@bool`], [`std::string::String`], [`crate::Bytes`],
/// [`crate::FixedBytes`], [`crate::U256`], byte arrays, [`std::vec::Vec`], [`std::option::Option`],
/// [`std::boxed::Box`] and tuples. Structs are usually implemented with the
/// [`crate::impl_struct`] macro.
///
/// # Examples
///
///```
/// use bcs_err::*;
/// use bcs_ser::*;
/// use std::fmt::Debug;
///
/// #[derive(Debug, PartialEq)]
/// struct GasPrice {
///     epoch: u64,
///     price: u64,
/// }
///
/// impl Serializable for GasPrice {
///     fn read<R: Reader>(reader: &mut R) -> Result<Self, Error> {
///         let epoch = reader.read_u64()?;
///         let price = reader.read_u64()?;
///         Ok(Self { epoch, price })
///     }
///     fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
///         writer.write_u64(self.epoch)?;
///         writer.write_u64(self.price)?;
///         Ok(())
///     }
/// }
///
/// // helper function that serializes and deserializes a Serializable and tests them for
/// // equality
/// fn ser_helper<S: Serializable + Debug + PartialEq>(ser_out: S) -> Result<(), Error> {
///     let v = serialize(&ser_out)?;
///     let ser_in: S = deserialize(&v)?;
///     assert_eq!(ser_in, ser_out);
///     Ok(())
/// }
///
/// fn main() -> Result<(), Error> {
///     let v = GasPrice { epoch: 100, price: 1_000 };
///     assert_eq!(serialize(&v)?.len(), 16);
///     ser_helper(v)?;
///     Ok(())
/// }
///```
pub trait Serializable {
	/// read data from the reader and build the underlying type represented by that
	/// data.
	fn read<R: Reader>(reader: &mut R) -> Result<Self, Error>
	where
		Self: Sized;
	/// write data to the writer representing the underlying type.
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error>;
}

/// Unsigned integer types that can be built from a wider value with a range check. A value
/// outside the range is an [`bcs_err::ErrorKind::Overflow`] error. It is never wrapped.
pub trait UintRange: Sized {
	/// name used in error messages, e.g. "u8"
	const NAME: &'static str;
	/// the largest representable value
	fn max_u256() -> U256;
	/// build from a 256 bit value.
	fn from_u256(v: &U256) -> Result<Self, Error>;
}

/// A writer that accumulates into an owned buffer. Each serialize call uses its own writer.
#[derive(Debug, Default, Clone)]
pub struct BcsWriter {
	pub(crate) buffer: Vec<u8>,
}

/// A reader over an immutable slice. The offset only moves forward.
#[derive(Debug, Clone)]
pub struct BcsReader<'a> {
	pub(crate) data: &'a [u8],
	pub(crate) offset: usize,
	pub(crate) max_uleb128_bytes: usize,
	pub(crate) max_sequence_length: usize,
	pub(crate) allow_trailing_bytes: bool,
}

/// A variable length byte string. Encoded as a ULEB128 length followed by the raw bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bytes(pub(crate) Vec<u8>);

/// Exactly `N` bytes. Encoded raw with no length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedBytes<const N: usize>(pub(crate) [u8; N]);

/// An unsigned 256 bit integer stored as 32 little endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256(pub(crate) [u8; 32]);

pub(crate) fn invalid_format(offset: usize, msg: String) -> Error {
	ErrorKind::InvalidFormat { offset, msg }.into()
}
