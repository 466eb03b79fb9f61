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


use bcs_conf::{ConfigOption, ConfigOptionName};
use bcs_deps::lazy_static::lazy_static;
use bcs_err::*;
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

lazy_static! {
	#[doc(hidden)]
	pub static ref BCS_GLOBAL_LOG: Arc<RwLock<Option<Box<dyn Log + Send + Sync>>>> = Arc::new(RwLock::new(None));
}

/// Whether a line is decorated with the timestamp, level and call site or logged as is.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum LoggingType {
	Standard,
	Plain,
}

/// Standard 6 log levels.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum LogLevel {
	/// Very fine grained logging information that should not generally be visible except for
	/// debugging purposes
	Trace,
	/// Debugging information
	Debug,
	/// Standard information that is usually displayed to the user under most circumstances
	Info,
	/// Warning of something that the user should be aware of, although it may not be an error
	Warn,
	/// Error that the user must be aware of
	Error,
	/// Fatal error that usually causes the application to be unusable
	Fatal,
}

/// A logger. The global logger used by the level macros is a boxed [`crate::Log`] built by
/// [`crate::LogBuilder::build_log`].
pub trait Log {
	/// Log `line` with the configured decorations if `level` meets the threshold.
	fn log(&mut self, level: LogLevel, line: &str) -> Result<(), Error>;
	/// Log `line` with no decorations if `level` meets the threshold.
	fn log_plain(&mut self, level: LogLevel, line: &str) -> Result<(), Error>;
	/// Set the threshold below which lines are dropped.
	fn set_log_level(&mut self, level: LogLevel);
	/// Open the log file, if one is configured. Must be called once before logging.
	fn init(&mut self) -> Result<(), Error>;
	/// Change a display option. The log file path cannot be changed after init.
	fn set_config_option(&mut self, value: ConfigOption) -> Result<(), Error>;
	/// Returns the current value of a display option.
	fn get_config_option(&self, option: ConfigOptionName) -> Result<ConfigOption, Error>;
}

/// Builds [`crate::Log`] implementations.
pub struct LogBuilder {}

/// Static functions operating on the global logger. These are called by the macros.
pub struct GlobalLogContainer {}

// Crate local types

#[derive(Clone, Debug)]
pub(crate) struct LogConfig {
	pub(crate) colors: bool,
	pub(crate) stdout: bool,
	pub(crate) timestamp: bool,
	pub(crate) level: bool,
	pub(crate) line_num: bool,
	pub(crate) show_millis: bool,
	pub(crate) file_path: Option<PathBuf>,
	pub(crate) show_backtrace: bool,
	pub(crate) line_num_data_max_len: usize,
}

pub(crate) struct LogImpl {
	pub(crate) config: LogConfig,
	pub(crate) log_level: LogLevel,
	pub(crate) file: Arc<RwLock<Option<File>>>,
	pub(crate) is_init: bool,
}
