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


use crate::types::TestInfoImpl;
use crate::TestInfo;
use bcs_deps::backtrace;
use bcs_deps::rand::random;
use bcs_err::Error;
use std::fs::{create_dir_all, remove_dir_all};

impl TestInfo for TestInfoImpl {
	fn directory(&self) -> &String {
		&self.directory
	}

	fn random_bytes(&self, len: usize) -> Vec<u8> {
		(0..len).map(|_| random::<u8>()).collect()
	}
}

impl TestInfoImpl {
	pub(crate) fn new(preserve: bool) -> Result<Self, Error> {
		let mut directory = String::new();
		backtrace::trace(|frame| {
			backtrace::resolve_frame(frame, |symbol| {
				directory = match symbol.name() {
					Some(name) => name.to_string(),
					None => "unknown".to_string(),
				};
			});
			// keep walking until we are out of this crate and the backtrace crate
			directory.starts_with("backtrace")
				|| directory.contains("bcs_test::impls::")
				|| directory.contains("bcs_test::types::")
		});

		let directory = Self::directory_name(&directory);
		// remove the directory if it existed from a previous failed run
		let _ = remove_dir_all(&directory);
		create_dir_all(&directory)?;

		Ok(Self {
			directory,
			preserve,
		})
	}

	// strip the symbol hash and path separators so the name is usable as a directory
	pub(crate) fn directory_name(symbol: &str) -> String {
		let symbol = match symbol.rfind("::h") {
			Some(pos) => &symbol[0..pos],
			None => symbol,
		};
		let name: String = symbol
			.replace("::", "_")
			.chars()
			.map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
			.collect();
		format!(".{}.bcs", name)
	}
}

impl Drop for TestInfoImpl {
	fn drop(&mut self) {
		// if we're not preserving the directory, delete it on drop.
		if !self.preserve {
			let _ = remove_dir_all(self.directory.clone());
		}
	}
}
