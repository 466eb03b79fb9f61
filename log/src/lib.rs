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


//! Logging crate used by the other crates in the workspace. The crate has a macro
//! library that allows for logging at the standard 6 levels and also
//! allows for specifying a log file and various display options. In addition to the
//! [`trace`], [`debug`], [`info`], [`warn`], [`error`] and [`fatal`] macros, the
//! [`info_plain`] macro logs a line without the timestamp, level and call site.
//! The macros return errors so calling code handles them with the question mark operator or
//! the [`bcs_err::map_err`] macro.
//!
//! # Examples
//!
//!```
//! use bcs_err::*;
//! use bcs_log::*;
//!
//! // set log level for this file. Anything below this scope will only be
//! // logged if it is equal to or more severe than 'DEBUG'.
//! debug!();
//!
//! fn main() -> Result<(), Error> {
//!     let inputs = 3;
//!     debug!("built transaction with {} inputs", inputs)?; // will show up
//!     trace!("test")?; // will not show up
//!
//!     Ok(())
//! }
//!
//!```
//!
//! The default output will look something like this:
//!
//! ```text
//! [2024-02-24 13:52:24.123]: (DEBUG) [..tx/src/builder.rs:216]: built transaction with 3 inputs
//! ```
//!
//! If enabled color coding is included as well. The global logger is initialized with defaults
//! on first use or explicitly with [`crate::log_init`].

mod constants;
mod log;
mod macros;
mod types;

pub use crate::types::{
	GlobalLogContainer, Log, LogBuilder, LogLevel, LoggingType, BCS_GLOBAL_LOG,
};
