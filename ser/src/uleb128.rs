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


//! ULEB128 is used for every length prefix and every variant tag. Each byte carries seven value
//! bits, least significant group first, and the high bit marks that another byte follows.

use crate::types::{invalid_format, BcsReader, MAX_ULEB128_U64_BYTES};
use crate::Reader;
use bcs_err::{Error, ErrorKind};

// encode `value` into `buf` and return the number of bytes used
pub(crate) fn encode(mut value: u64, buf: &mut [u8; MAX_ULEB128_U64_BYTES]) -> usize {
	let mut i = 0;
	loop {
		let byte = (value & 0x7f) as u8;
		value >>= 7;
		if value == 0 {
			buf[i] = byte;
			return i + 1;
		}
		buf[i] = byte | 0x80;
		i += 1;
	}
}

// Decode a value of at most `max_bytes` bytes. Empty input is InsufficientData. A sequence that
// ends with the continuation bit set, a value that does not fit in a u64, an encoding longer
// than `max_bytes` or a redundant trailing zero group is InvalidFormat.
pub(crate) fn decode<R: Reader + ?Sized>(reader: &mut R, max_bytes: usize) -> Result<u64, Error> {
	let start = reader.offset();
	let max_bytes = max_bytes.min(MAX_ULEB128_U64_BYTES);
	let mut value: u64 = 0;
	let mut shift = 0u32;

	for i in 0..max_bytes {
		if reader.remaining() == 0 {
			if i == 0 {
				let error: Error = ErrorKind::InsufficientData {
					needed: 1,
					available: 0,
					offset: start,
				}
				.into();
				return Err(error);
			}
			let msg = format!("truncated ULEB128 after {} byte(s)", i);
			return Err(invalid_format(start, msg));
		}
		let byte = reader.read_u8()?;
		let bits = (byte & 0x7f) as u64;
		if shift == 63 && bits > 1 {
			return Err(invalid_format(start, "ULEB128 overflows u64".to_string()));
		}
		value |= bits << shift;

		if byte & 0x80 == 0 {
			if byte == 0 && i > 0 {
				return Err(invalid_format(start, "non-canonical ULEB128".to_string()));
			}
			return Ok(value);
		}
		shift += 7;
	}

	let msg = format!("ULEB128 longer than {} byte(s)", max_bytes);
	Err(invalid_format(start, msg))
}

/// Returns the ULEB128 encoding of `value`.
///
/// # Examples
///```
/// use bcs_ser::encode_uleb128;
///
/// assert_eq!(encode_uleb128(0), vec![0x00]);
/// assert_eq!(encode_uleb128(300), vec![0xac, 0x02]);
///```
pub fn encode_uleb128(value: u64) -> Vec<u8> {
	let mut buf = [0u8; MAX_ULEB128_U64_BYTES];
	let len = encode(value, &mut buf);
	buf[0..len].to_vec()
}

/// Decodes a ULEB128 `u64` from the start of `data` and returns it along with the number of
/// bytes consumed.
pub fn decode_uleb128(data: &[u8]) -> Result<(u64, usize), Error> {
	let mut reader = BcsReader::new(data);
	let value = decode(&mut reader, MAX_ULEB128_U64_BYTES)?;
	Ok((value, reader.position()))
}
