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


use crate::types::ConfigImpl;
use crate::{Config, ConfigBuilder, ConfigOption, ConfigOption::*, ConfigOptionName as CN};
use bcs_err::*;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

// macro to simplify the process of checking the parameters
macro_rules! cc {
	($self:expr, $set:expr, $specified:expr, $option_name:expr) => {{
		let config_option_name = $option_name;
		let i = $option_name as usize;
		$self.check_set(&$set, &config_option_name)?;
		$self.check_index(i, $specified, format!("{:?}", config_option_name))?;
	}};
}

impl ConfigBuilder {
	/// Build a [`crate::Config`] from the specified options. The options are not checked
	/// until [`crate::Config::check_config`] is called.
	pub fn build_config(configs: Vec<ConfigOption>) -> impl Config {
		ConfigImpl::new(configs)
	}
}

impl Config for ConfigImpl {
	fn get(&self, name: &CN) -> Option<ConfigOption> {
		self.hash.get(name).cloned()
	}

	fn get_or_bool(&self, name: &CN, default: bool) -> bool {
		match self.hash.get(name) {
			Some(v) => match v {
				AllowTrailingBytes(v) => *v,
				StrictValidation(v) => *v,
				DisplayColors(v) => *v,
				DisplayStdout(v) => *v,
				DisplayTimestamp(v) => *v,
				DisplayLogLevel(v) => *v,
				DisplayLineNum(v) => *v,
				DisplayMillis(v) => *v,
				DisplayBackTrace(v) => *v,
				_ => default,
			},
			None => default,
		}
	}

	fn get_or_usize(&self, name: &CN, default: usize) -> usize {
		match self.hash.get(name) {
			Some(v) => match v {
				MaxUleb128Bytes(v) => *v,
				MaxSequenceLength(v) => *v,
				LineNumDataMaxLen(v) => *v,
				_ => default,
			},
			None => default,
		}
	}

	fn get_or_path(&self, name: &CN, default: Option<PathBuf>) -> Option<PathBuf> {
		match self.hash.get(name) {
			Some(LogFilePath(v)) => v.clone(),
			_ => default,
		}
	}

	fn check_config(&self, allowed: Vec<CN>, required: Vec<CN>) -> Result<(), Error> {
		self.check_config_impl(allowed, required)
	}
}

impl ConfigImpl {
	pub(crate) fn new(configs: Vec<ConfigOption>) -> Self {
		let mut hash = HashMap::new();
		for config in &configs {
			hash.insert(Self::name_of(config), config.clone());
		}
		Self { configs, hash }
	}

	fn name_of(config: &ConfigOption) -> CN {
		match config {
			MaxUleb128Bytes(_) => CN::MaxUleb128Bytes,
			MaxSequenceLength(_) => CN::MaxSequenceLength,
			AllowTrailingBytes(_) => CN::AllowTrailingBytes,
			StrictValidation(_) => CN::StrictValidation,
			DisplayColors(_) => CN::DisplayColors,
			DisplayStdout(_) => CN::DisplayStdout,
			DisplayTimestamp(_) => CN::DisplayTimestamp,
			DisplayLogLevel(_) => CN::DisplayLogLevel,
			DisplayLineNum(_) => CN::DisplayLineNum,
			DisplayMillis(_) => CN::DisplayMillis,
			DisplayBackTrace(_) => CN::DisplayBackTrace,
			LineNumDataMaxLen(_) => CN::LineNumDataMaxLen,
			LogFilePath(_) => CN::LogFilePath,
		}
	}

	// check the config: 1.) for duplicates, 2.) for allowed input 3.) for the required input.
	fn check_config_impl(&self, allowed: Vec<CN>, required: Vec<CN>) -> Result<(), Error> {
		let mut t = HashSet::new();
		let mut s = vec![];
		for a in &allowed {
			t.insert(a);
		}

		// the cc macro handles #1 and #2 above
		for v in &self.configs {
			cc!(self, t, &mut s, Self::name_of(v));
		}

		// #3 is covered here (required)
		let s_len = s.len();
		for v in required {
			let v_as_usize = v as usize;
			if v_as_usize >= s_len || !s[v_as_usize] {
				return Err(err!(
					ErrKind::Configuration,
					"{:?} was required and not specified",
					v
				));
			}
		}

		Ok(())
	}

	fn check_set(&self, set: &HashSet<&CN>, option: &CN) -> Result<(), Error> {
		if set.contains(option) {
			Ok(())
		} else {
			Err(err!(ErrKind::Configuration, "{:?} is not allowed", option))
		}
	}

	// this checks for duplicates
	fn check_index(&self, i: usize, specified: &mut Vec<bool>, name: String) -> Result<(), Error> {
		if specified.len() <= i {
			specified.resize(i + 1, false);
		}

		if specified[i] {
			Err(err!(
				ErrKind::Configuration,
				"{} was specified more than once",
				name
			))
		} else {
			specified[i] = true;
			Ok(())
		}
	}
}
