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


//! # The BCS Error crate
//! This crate defines the [`crate::Error`] type used by every crate in the workspace. An
//! [`crate::Error`] wraps an [`crate::ErrorKind`], which can be retrieved with
//! [`crate::Error::kind`] and pattern matched on. The codec kinds carry structured context
//! (the offending value, the byte offset, the number of bytes needed) so that callers never
//! need to parse error strings.
//!
//! Errors that carry only a message are usually built with the [`crate::err`] macro, and
//! foreign errors are converted with the [`crate::map_err`] macro or the `?` operator.
//!
//! # Examples
//!
//!```
//! use bcs_err::*;
//!
//! fn check_count(count: usize) -> Result<(), Error> {
//!     if count == 0 {
//!         return Err(err!(ErrKind::Validation, "count must be non-zero, found {}", count));
//!     }
//!     Ok(())
//! }
//!
//! fn main() -> Result<(), Error> {
//!     let e = check_count(0).unwrap_err();
//!     assert!(matches!(e.kind(), ErrorKind::Validation(_)));
//!
//!     let e: Error = ErrorKind::InsufficientData {
//!         needed: 4,
//!         available: 3,
//!         offset: 0,
//!     }
//!     .into();
//!     match e.kind() {
//!         ErrorKind::InsufficientData { needed, .. } => assert_eq!(needed, 4),
//!         _ => unreachable!(),
//!     }
//!     check_count(1)?;
//!     Ok(())
//! }
//!```

mod error;
mod macros;
mod test;
mod types;

pub use crate::types::{ErrKind, Error, ErrorKind};
