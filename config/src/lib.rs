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


//! # The BCS Configuration crate
//! The Configuration crate is used by the other crates in the workspace to build and check
//! configurations. Configurations should generally be built using the [`crate::config!`] macro
//! and the [`crate::Config::check_config`] function should be used to confirm the resulting
//! configuration has only allowed values, has all required values, and has no duplicates.
//!
//! The codec reads [`crate::ConfigOption::MaxUleb128Bytes`],
//! [`crate::ConfigOption::MaxSequenceLength`] and [`crate::ConfigOption::AllowTrailingBytes`].
//! The transaction builder reads [`crate::ConfigOption::StrictValidation`] and the logger reads
//! the `Display*` options along with [`crate::ConfigOption::LogFilePath`].
//!
//! # Examples
//!
//!```
//! use bcs_err::*;
//! use bcs_conf::*;
//!
//! fn main() -> Result<(), Error> {
//!     // create a simple config
//!     let config = config!(MaxSequenceLength(1_000), AllowTrailingBytes(true));
//!
//!     let res = config.check_config(
//!         vec![
//!             ConfigOptionName::MaxUleb128Bytes,
//!             ConfigOptionName::MaxSequenceLength,
//!             ConfigOptionName::AllowTrailingBytes,
//!         ],
//!         vec![ConfigOptionName::MaxSequenceLength]
//!     );
//!
//!     // ok: every option is allowed and the one required option is present
//!     assert!(res.is_ok());
//!     assert_eq!(config.get_or_usize(&ConfigOptionName::MaxSequenceLength, 0), 1_000);
//!     assert_eq!(config.get_or_usize(&ConfigOptionName::MaxUleb128Bytes, 5), 5);
//!
//!     // create an invalid config
//!     let config = config!(AllowTrailingBytes(true));
//!
//!     let res = config.check_config(
//!         vec![ConfigOptionName::MaxSequenceLength, ConfigOptionName::AllowTrailingBytes],
//!         vec![ConfigOptionName::MaxSequenceLength]
//!     );
//!
//!     // invalid because MaxSequenceLength is required and not specified.
//!     assert!(res.is_err());
//!
//!     Ok(())
//! }
//!
//!```

mod config;
mod macros;
mod test;
mod types;

pub use crate::types::{Config, ConfigBuilder, ConfigOption, ConfigOptionName};
