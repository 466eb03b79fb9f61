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


#[cfg(test)]
mod test {
	use crate as bcs_conf;
	use crate::{config, Config, ConfigBuilder, ConfigOption, ConfigOption::*, ConfigOptionName as CN};
	use bcs_err::*;
	use std::path::PathBuf;

	#[test]
	fn test_config_basic() -> Result<(), Error> {
		let config = ConfigBuilder::build_config(vec![ConfigOption::MaxSequenceLength(1_000)]);
		assert_eq!(
			config.get(&CN::MaxSequenceLength),
			Some(ConfigOption::MaxSequenceLength(1_000))
		);

		assert_eq!(config.get(&CN::MaxUleb128Bytes), None);

		// ok because MaxSequenceLength is allowed
		assert!(config.check_config(vec![CN::MaxSequenceLength], vec![]).is_ok());

		// err because MaxSequenceLength is not allowed
		assert!(config.check_config(vec![CN::MaxUleb128Bytes], vec![]).is_err());

		let config = ConfigBuilder::build_config(vec![
			ConfigOption::MaxSequenceLength(1_000),
			ConfigOption::MaxSequenceLength(100),
		]);

		// err because it's a duplicate
		let err = config
			.check_config(vec![CN::MaxSequenceLength], vec![])
			.unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::Configuration(_)));

		let config = ConfigBuilder::build_config(vec![ConfigOption::MaxSequenceLength(100)]);

		// ok because it's both allowed and required and specified
		assert!(config
			.check_config(vec![CN::MaxSequenceLength], vec![CN::MaxSequenceLength])
			.is_ok());

		// err because AllowTrailingBytes is not specified and it's required
		assert!(config
			.check_config(
				vec![CN::MaxSequenceLength, CN::AllowTrailingBytes],
				vec![CN::AllowTrailingBytes]
			)
			.is_err());

		Ok(())
	}

	#[test]
	fn test_config_typed_getters() -> Result<(), Error> {
		let config = config!(
			MaxUleb128Bytes(3),
			AllowTrailingBytes(true),
			LogFilePath(Some(PathBuf::from("/tmp/x.log")))
		);

		assert_eq!(config.get_or_usize(&CN::MaxUleb128Bytes, 5), 3);
		assert_eq!(config.get_or_usize(&CN::MaxSequenceLength, 77), 77);
		assert!(config.get_or_bool(&CN::AllowTrailingBytes, false));
		assert!(!config.get_or_bool(&CN::StrictValidation, false));
		assert!(config.get_or_bool(&CN::DisplayColors, true));
		assert_eq!(
			config.get_or_path(&CN::LogFilePath, None),
			Some(PathBuf::from("/tmp/x.log"))
		);

		// a name holding a value of another type falls back to the default
		assert_eq!(config.get_or_usize(&CN::AllowTrailingBytes, 9), 9);

		let config = config!(LogFilePath(None));
		assert_eq!(
			config.get_or_path(&CN::LogFilePath, Some(PathBuf::from("d"))),
			None
		);
		Ok(())
	}

	#[test]
	fn test_config_all_options() -> Result<(), Error> {
		// create a config with everything
		let config = config!(
			MaxUleb128Bytes(5),
			MaxSequenceLength(100),
			AllowTrailingBytes(false),
			StrictValidation(true),
			DisplayColors(true),
			DisplayStdout(true),
			DisplayTimestamp(true),
			DisplayLogLevel(false),
			DisplayLineNum(false),
			DisplayMillis(false),
			DisplayBackTrace(false),
			LineNumDataMaxLen(300),
			LogFilePath(None)
		);

		let all = vec![
			CN::MaxUleb128Bytes,
			CN::MaxSequenceLength,
			CN::AllowTrailingBytes,
			CN::StrictValidation,
			CN::DisplayColors,
			CN::DisplayStdout,
			CN::DisplayTimestamp,
			CN::DisplayLogLevel,
			CN::DisplayLineNum,
			CN::DisplayMillis,
			CN::DisplayBackTrace,
			CN::LineNumDataMaxLen,
			CN::LogFilePath,
		];

		// since everything is allowed and specified, it's ok
		assert!(config.check_config(all.clone(), all).is_ok());
		Ok(())
	}

	#[test]
	fn test_empty_config() -> Result<(), Error> {
		let config = config!();
		assert!(config.check_config(vec![], vec![]).is_ok());
		assert!(config
			.check_config(vec![CN::StrictValidation], vec![CN::StrictValidation])
			.is_err());
		Ok(())
	}
}
