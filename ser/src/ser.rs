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


use crate::types::{invalid_format, MAX_SEQUENCE_LENGTH, MAX_ULEB128_BYTES};
use crate::{BcsReader, BcsWriter, Bytes, FixedBytes, Reader, Serializable, Writer, U256};
use bcs_conf::{Config, ConfigBuilder, ConfigOption, ConfigOptionName};
use bcs_err::*;
use std::io::Write;

/// Serializes a value into a new buffer.
pub fn serialize<S: Serializable>(value: &S) -> Result<Vec<u8>, Error> {
	let mut writer = BcsWriter::new();
	value.write(&mut writer)?;
	Ok(writer.into_bytes())
}

/// Serializes a value into any std::io::Write implementation. The value is fully encoded
/// before anything is written, so an encode error leaves the sink untouched.
pub fn serialize_into<S: Serializable>(sink: &mut dyn Write, value: &S) -> Result<(), Error> {
	let bytes = serialize(value)?;
	sink.write_all(&bytes)?;
	Ok(())
}

/// Returns the number of bytes [`crate::serialize`] would produce for `value`.
pub fn serialized_size<S: Serializable>(value: &S) -> Result<usize, Error> {
	let mut counter = SizeCounter { size: 0 };
	value.write(&mut counter)?;
	Ok(counter.size)
}

/// Deserializes a value that must span all of `data`. Trailing bytes are an
/// [`bcs_err::ErrorKind::InvalidFormat`] error.
pub fn deserialize<T: Serializable>(data: &[u8]) -> Result<T, Error> {
	let mut reader = BcsReader::new(data);
	let ret = T::read(&mut reader)?;
	reader.finish()?;
	Ok(ret)
}

/// Deserializes a value with the codec options [`bcs_conf::ConfigOption::MaxUleb128Bytes`],
/// [`bcs_conf::ConfigOption::MaxSequenceLength`] and
/// [`bcs_conf::ConfigOption::AllowTrailingBytes`].
pub fn deserialize_with<T: Serializable>(
	data: &[u8],
	configs: Vec<ConfigOption>,
) -> Result<T, Error> {
	let mut reader = BcsReader::with_config(data, configs)?;
	let ret = T::read(&mut reader)?;
	reader.finish()?;
	Ok(ret)
}

/// Deserializes a value from the start of `data` and returns it along with the number of bytes
/// consumed. Bytes after the value are ignored.
pub fn deserialize_prefix<T: Serializable>(data: &[u8]) -> Result<(T, usize), Error> {
	let mut reader = BcsReader::new(data);
	let ret = T::read(&mut reader)?;
	Ok((ret, reader.position()))
}

/// Builds the error for a variant tag that `type_name` does not define. `offset` is the offset
/// of the tag.
pub fn unknown_variant(type_name: &str, tag: u32, offset: usize) -> Error {
	invalid_format(offset, format!("unknown {} variant tag {}", type_name, tag))
}

// counts bytes without storing them
struct SizeCounter {
	size: usize,
}

impl Writer for SizeCounter {
	fn write_fixed_bytes<T: AsRef<[u8]>>(&mut self, bytes: T) -> Result<(), Error> {
		self.size += bytes.as_ref().len();
		Ok(())
	}
}

impl BcsWriter {
	pub fn new() -> Self {
		Self { buffer: vec![] }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	/// Discard everything written so far.
	pub fn clear(&mut self) {
		self.buffer.clear();
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.buffer
	}

	/// Consume the writer and return its buffer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buffer
	}
}

impl Writer for BcsWriter {
	fn write_fixed_bytes<T: AsRef<[u8]>>(&mut self, bytes: T) -> Result<(), Error> {
		self.buffer.extend_from_slice(bytes.as_ref());
		Ok(())
	}
}

impl<'a> BcsReader<'a> {
	/// A reader with the default limits: 5 byte ULEB128 prefixes, the BCS maximum sequence
	/// length and no trailing bytes.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			offset: 0,
			max_uleb128_bytes: MAX_ULEB128_BYTES,
			max_sequence_length: MAX_SEQUENCE_LENGTH,
			allow_trailing_bytes: false,
		}
	}

	/// A reader configured with codec options. `MaxUleb128Bytes` must be in 1..=5 and
	/// `MaxSequenceLength` may not exceed [`crate::MAX_SEQUENCE_LENGTH`].
	pub fn with_config(data: &'a [u8], configs: Vec<ConfigOption>) -> Result<Self, Error> {
		let config = ConfigBuilder::build_config(configs);
		config.check_config(
			vec![
				ConfigOptionName::MaxUleb128Bytes,
				ConfigOptionName::MaxSequenceLength,
				ConfigOptionName::AllowTrailingBytes,
			],
			vec![],
		)?;

		let max_uleb128_bytes =
			config.get_or_usize(&ConfigOptionName::MaxUleb128Bytes, MAX_ULEB128_BYTES);
		if max_uleb128_bytes == 0 || max_uleb128_bytes > MAX_ULEB128_BYTES {
			return Err(err!(
				ErrKind::Configuration,
				"MaxUleb128Bytes must be between 1 and {}",
				MAX_ULEB128_BYTES
			));
		}

		let max_sequence_length =
			config.get_or_usize(&ConfigOptionName::MaxSequenceLength, MAX_SEQUENCE_LENGTH);
		if max_sequence_length > MAX_SEQUENCE_LENGTH {
			return Err(err!(
				ErrKind::Configuration,
				"MaxSequenceLength may not exceed {}",
				MAX_SEQUENCE_LENGTH
			));
		}

		Ok(Self {
			data,
			offset: 0,
			max_uleb128_bytes,
			max_sequence_length,
			allow_trailing_bytes: config
				.get_or_bool(&ConfigOptionName::AllowTrailingBytes, false),
		})
	}

	pub fn position(&self) -> usize {
		self.offset
	}

	pub fn is_empty(&self) -> bool {
		self.offset >= self.data.len()
	}

	/// Returns the next byte without consuming it.
	pub fn peek_u8(&self) -> Result<u8, Error> {
		match self.data.get(self.offset) {
			Some(b) => Ok(*b),
			None => Err(ErrorKind::InsufficientData {
				needed: 1,
				available: 0,
				offset: self.offset,
			}
			.into()),
		}
	}

	/// Ends the read. Unless trailing bytes were allowed, input left over after the top level
	/// value is an [`bcs_err::ErrorKind::InvalidFormat`] error.
	pub fn finish(self) -> Result<(), Error> {
		let remaining = self.remaining();
		if remaining > 0 && !self.allow_trailing_bytes {
			let msg = format!("{} trailing byte(s) after the value", remaining);
			return Err(invalid_format(self.offset, msg));
		}
		Ok(())
	}
}

impl<'a> Reader for BcsReader<'a> {
	fn read_fixed_bytes(&mut self, buf: &mut [u8]) -> Result<(), Error> {
		let needed = buf.len();
		let available = self.remaining();
		if needed > available {
			let error: Error = ErrorKind::InsufficientData {
				needed,
				available,
				offset: self.offset,
			}
			.into();
			return Err(error);
		}
		buf.copy_from_slice(&self.data[self.offset..self.offset + needed]);
		self.offset += needed;
		Ok(())
	}

	fn offset(&self) -> usize {
		self.offset
	}

	fn remaining(&self) -> usize {
		self.data.len().saturating_sub(self.offset)
	}

	fn max_uleb128_bytes(&self) -> usize {
		self.max_uleb128_bytes
	}

	fn max_sequence_length(&self) -> usize {
		self.max_sequence_length
	}
}

macro_rules! impl_int {
	($int:ty, $w_fn:ident, $r_fn:ident) => {
		impl Serializable for $int {
			fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
				writer.$w_fn(*self)
			}
			fn read<R: Reader>(reader: &mut R) -> Result<$int, Error> {
				reader.$r_fn()
			}
		}
	};
}

impl_int!(u8, write_u8, read_u8);
impl_int!(u16, write_u16, read_u16);
impl_int!(u32, write_u32, read_u32);
impl_int!(u64, write_u64, read_u64);
impl_int!(u128, write_u128, read_u128);
impl_int!(bool, write_bool, read_bool);

impl Serializable for U256 {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		writer.write_u256(self)
	}
	fn read<R: Reader>(reader: &mut R) -> Result<U256, Error> {
		reader.read_u256()
	}
}

impl<A: Serializable, B: Serializable> Serializable for (A, B) {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		Serializable::write(&self.0, writer)?;
		Serializable::write(&self.1, writer)
	}
	fn read<R: Reader>(reader: &mut R) -> Result<(A, B), Error> {
		Ok((Serializable::read(reader)?, Serializable::read(reader)?))
	}
}

impl<A: Serializable, B: Serializable, C: Serializable> Serializable for (A, B, C) {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		Serializable::write(&self.0, writer)?;
		Serializable::write(&self.1, writer)?;
		Serializable::write(&self.2, writer)
	}
	fn read<R: Reader>(reader: &mut R) -> Result<(A, B, C), Error> {
		Ok((
			Serializable::read(reader)?,
			Serializable::read(reader)?,
			Serializable::read(reader)?,
		))
	}
}

impl<S: Serializable> Serializable for Vec<S> {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		writer.write_len(self.len())?;
		for s in self {
			Serializable::write(s, writer)?;
		}
		Ok(())
	}
	fn read<R: Reader>(reader: &mut R) -> Result<Vec<S>, Error> {
		let len = reader.read_len()?;
		// every element takes at least one byte on the wire except for degenerate types, so
		// the remaining input bounds the allocation
		let mut v = Vec::with_capacity(len.min(reader.remaining()));
		for _ in 0..len {
			v.push(Serializable::read(reader)?);
		}
		Ok(v)
	}
}

impl<S: Serializable> Serializable for Option<S> {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		match self {
			Some(s) => {
				writer.write_option_tag(true)?;
				s.write(writer)
			}
			None => writer.write_option_tag(false),
		}
	}
	fn read<R: Reader>(reader: &mut R) -> Result<Option<S>, Error> {
		Ok(match reader.read_option_tag()? {
			false => None,
			true => Some(S::read(reader)?),
		})
	}
}

impl<S: Serializable> Serializable for Box<S> {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		S::write(self, writer)
	}
	fn read<R: Reader>(reader: &mut R) -> Result<Box<S>, Error> {
		Ok(Box::new(S::read(reader)?))
	}
}

impl Serializable for String {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		writer.write_bytes(self.as_bytes())
	}
	fn read<R: Reader>(reader: &mut R) -> Result<String, Error> {
		let offset = reader.offset();
		let bytes = reader.read_bytes()?;
		match String::from_utf8(bytes) {
			Ok(s) => Ok(s),
			Err(e) => Err(invalid_format(offset, format!("invalid utf8 string: {}", e))),
		}
	}
}

impl<const N: usize> Serializable for [u8; N] {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		writer.write_fixed_bytes(self)
	}
	fn read<R: Reader>(reader: &mut R) -> Result<[u8; N], Error> {
		let mut r = [0u8; N];
		reader.read_fixed_bytes(&mut r)?;
		Ok(r)
	}
}

impl Bytes {
	pub fn new(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Bytes {
	fn from(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}
}

impl From<&[u8]> for Bytes {
	fn from(bytes: &[u8]) -> Self {
		Self(bytes.to_vec())
	}
}

impl AsRef<[u8]> for Bytes {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Serializable for Bytes {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		writer.write_bytes(&self.0)
	}
	fn read<R: Reader>(reader: &mut R) -> Result<Bytes, Error> {
		Ok(Self(reader.read_bytes()?))
	}
}

impl<const N: usize> FixedBytes<N> {
	/// Build from a slice. A slice whose length is not `N` is a
	/// [`bcs_err::ErrorKind::Validation`] error.
	pub fn new(bytes: &[u8]) -> Result<Self, Error> {
		if bytes.len() != N {
			return Err(err!(
				ErrKind::Validation,
				"expected {} bytes, found {}",
				N,
				bytes.len()
			));
		}
		let mut r = [0u8; N];
		r.copy_from_slice(bytes);
		Ok(Self(r))
	}

	pub const fn from_array(bytes: [u8; N]) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; N] {
		&self.0
	}

	pub fn into_inner(self) -> [u8; N] {
		self.0
	}
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl<const N: usize> Serializable for FixedBytes<N> {
	fn write<W: Writer>(&self, writer: &mut W) -> Result<(), Error> {
		writer.write_fixed_bytes(self.0)
	}
	fn read<R: Reader>(reader: &mut R) -> Result<FixedBytes<N>, Error> {
		let mut r = [0u8; N];
		reader.read_fixed_bytes(&mut r)?;
		Ok(Self(r))
	}
}
