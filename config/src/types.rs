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


use bcs_err::Error;
use std::collections::HashMap;
use std::path::PathBuf;

/// The config trait allows for easy construction of configurations. Configurations can be
/// retreived with the [`crate::Config::get`] function or one of the typed `get_or_*` functions
/// and configurations can be checked with the [`crate::Config::check_config`] function.
pub trait Config {
	/// Returns the option with this name if it was specified.
	fn get(&self, name: &ConfigOptionName) -> Option<ConfigOption>;
	/// Returns the boolean value of the option or `default` if it was not specified.
	fn get_or_bool(&self, name: &ConfigOptionName, default: bool) -> bool;
	/// Returns the usize value of the option or `default` if it was not specified.
	fn get_or_usize(&self, name: &ConfigOptionName, default: usize) -> usize;
	/// Returns the path value of the option or `default` if it was not specified.
	fn get_or_path(&self, name: &ConfigOptionName, default: Option<PathBuf>) -> Option<PathBuf>;
	/// Checks that every option is in `allowed`, that no option is specified twice and that
	/// every option in `required` was specified.
	fn check_config(
		&self,
		allowed: Vec<ConfigOptionName>,
		required: Vec<ConfigOptionName>,
	) -> Result<(), Error>;
}

/// Names of configuration options. This correspondes to the values in [`crate::ConfigOption`].
#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum ConfigOptionName {
	MaxUleb128Bytes,
	MaxSequenceLength,
	AllowTrailingBytes,
	StrictValidation,
	DisplayColors,
	DisplayStdout,
	DisplayTimestamp,
	DisplayLogLevel,
	DisplayLineNum,
	DisplayMillis,
	DisplayBackTrace,
	LineNumDataMaxLen,
	LogFilePath,
}

/// Configuration options used throughout the workspace via macro.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum ConfigOption {
	/// The maximum number of bytes in a ULEB128 length prefix or variant tag (1..=5).
	MaxUleb128Bytes(usize),
	/// The largest length a `Bytes`, `String` or vector may declare.
	MaxSequenceLength(usize),
	/// Whether input may continue after the top level value has been decoded.
	AllowTrailingBytes(bool),
	/// Reject transactions with no commands instead of warning.
	StrictValidation(bool),
	DisplayColors(bool),
	DisplayStdout(bool),
	DisplayTimestamp(bool),
	DisplayLogLevel(bool),
	DisplayLineNum(bool),
	DisplayMillis(bool),
	DisplayBackTrace(bool),
	LineNumDataMaxLen(usize),
	LogFilePath(Option<PathBuf>),
}

/// A builder struct which can be used to build configs. This is typically done using the
/// [`crate::config!`] macro which calls this builder.
pub struct ConfigBuilder {}

// Crate local structures

#[derive(Clone, Debug)]
pub(crate) struct ConfigImpl {
	pub(crate) configs: Vec<ConfigOption>,
	pub(crate) hash: HashMap<ConfigOptionName, ConfigOption>,
}
