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


use bcs_deps::failure::{Context, Fail};

/// Base Error struct which is used throughout the workspace.
#[derive(Debug, Fail)]
pub struct Error {
	pub(crate) inner: Context<ErrorKind>,
}

/// Kinds of errors that can occur.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
	/// A value does not fit in the range of its declared type. `value` and `max` are decimal
	/// strings so that 128 and 256 bit values can be reported exactly.
	#[fail(
		display = "overflow error: {} does not fit in {} (max {})",
		value, type_name, max
	)]
	Overflow {
		/// name of the target type, e.g. "u8"
		type_name: String,
		/// the offending value
		value: String,
		/// the largest value the type can represent
		max: String,
	},
	/// The input ended before a value could be fully decoded.
	#[fail(
		display = "insufficient data: needed {} byte(s), {} available at offset {}",
		needed, available, offset
	)]
	InsufficientData {
		/// bytes required to finish the read
		needed: usize,
		/// bytes remaining in the input
		available: usize,
		/// offset of the read that failed
		offset: usize,
	},
	/// Decoded bytes violate a format rule (bad bool byte, unknown variant tag, malformed
	/// ULEB128, trailing bytes and so on).
	#[fail(display = "invalid format at offset {}: {}", offset, msg)]
	InvalidFormat {
		/// offset of the offending byte
		offset: usize,
		/// what was wrong
		msg: String,
	},
	/// A structural rule was violated before serialization
	#[fail(display = "validation error: {}", _0)]
	Validation(String),
	/// IO Error
	#[fail(display = "IO Error: {}", _0)]
	IO(String),
	/// Log Error
	#[fail(display = "Log Error: {}", _0)]
	Log(String),
	/// Configuration Error
	#[fail(display = "Configuration Error: {}", _0)]
	Configuration(String),
	/// UTF8 Error
	#[fail(display = "UTF8 Error: {}", _0)]
	Utf8(String),
	/// IllegalArgument
	#[fail(display = "IllegalArgument: {}", _0)]
	IllegalArgument(String),
	/// Illegal State
	#[fail(display = "Illegal State Error: {}", _0)]
	IllegalState(String),
	/// Poison error multiple locks
	#[fail(display = "Poison Error: {}", _0)]
	Poison(String),
	/// Parse Error
	#[fail(display = "parse_error: {}", _0)]
	Parse(String),
	/// Simulated Error used in testing
	#[fail(display = "simulated test error: {}", _0)]
	Test(String),
}

/// The message carrying kinds of errors in this crate. This enum is used to map to error
/// names using the [`crate::err`] and [`crate::map_err`] macros. The structured codec kinds
/// ([`crate::ErrorKind::Overflow`], [`crate::ErrorKind::InsufficientData`] and
/// [`crate::ErrorKind::InvalidFormat`]) are built directly from [`crate::ErrorKind`].
pub enum ErrKind {
	/// A structural rule was violated
	Validation,
	/// IO Error
	IO,
	/// Log Error
	Log,
	/// Configuration error
	Configuration,
	/// A conversion to the UTF-8 format resulted in an error
	Utf8,
	/// Illegal argument was specified
	IllegalArgument,
	/// Application is in an illegal state
	IllegalState,
	/// Attempt to obtain a lock resulted in a poison error. See [`std::sync::PoisonError`]
	/// for further details
	Poison,
	/// A textual value could not be parsed
	Parse,
	/// A simulated error used in tests
	Test,
}
