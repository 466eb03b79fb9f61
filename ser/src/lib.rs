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


//! # The BCS Serialization crate
//! This crate implements Binary Canonical Serialization, the deterministic binary encoding
//! used by Sui. It includes the [`crate::Serializable`] trait, the [`crate::Reader`] trait and
//! the [`crate::Writer`] trait along with their slice based implementations
//! [`crate::BcsReader`] and [`crate::BcsWriter`].
//!
//! The wire format:
//! * integers are fixed width little endian (u8 through u128 and [`crate::U256`])
//! * a bool is a single 0x00 or 0x01 byte
//! * lengths, element counts and enum variant tags are ULEB128
//! * [`crate::Bytes`] and [`std::string::String`] are a length followed by the raw bytes
//! * [`crate::FixedBytes`] and byte arrays are the raw bytes with no prefix
//! * a [`std::vec::Vec`] is a count followed by the elements
//! * an [`std::option::Option`] is a presence byte followed by the value if present
//! * structs are their fields concatenated in order ([`crate::impl_struct`])
//! * enums are a ULEB128 tag followed by the variant's payload
//!
//! Decoding never returns partial data. Malformed input produces one of the structured
//! [`bcs_err::ErrorKind`] values `Overflow`, `InsufficientData` or `InvalidFormat`.
//!
//! # Examples
//!
//!```
//! use bcs_err::*;
//! use bcs_ser::*;
//!
//! fn main() -> Result<(), Error> {
//!     assert_eq!(serialize(&vec![1u8, 2, 3])?, vec![3, 1, 2, 3]);
//!     assert_eq!(serialize(&Some(999u64))?, vec![1, 0xe7, 0x03, 0, 0, 0, 0, 0, 0]);
//!
//!     let v: Option<u64> = deserialize(&[0])?;
//!     assert_eq!(v, None);
//!
//!     // 0x02 is not a bool
//!     let res: Result<bool, Error> = deserialize(&[2]);
//!     assert!(matches!(res.unwrap_err().kind(), ErrorKind::InvalidFormat { .. }));
//!     Ok(())
//! }
//!```

mod macros;
mod ser;
mod types;
mod u256;
mod uleb128;

pub use crate::types::{
	BcsReader, BcsWriter, Bytes, FixedBytes, Reader, Serializable, UintRange, Writer, U256,
	MAX_SEQUENCE_LENGTH, MAX_ULEB128_BYTES, MAX_ULEB128_U64_BYTES,
};

pub use crate::ser::{
	deserialize, deserialize_prefix, deserialize_with, serialize, serialize_into,
	serialized_size, unknown_variant,
};
pub use crate::u256::{parse_uint, uint_from_i128};
pub use crate::uleb128::{decode_uleb128, encode_uleb128};
