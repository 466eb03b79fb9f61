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


/// The [`crate::trace`] macro is used to set the logging threshold at the current scope to the
/// [`crate::LogLevel::Trace`] level _or_ to log at the [`crate::LogLevel::Trace`] level depending
/// on which arguments are passed to the macro. If no arguments are supplied, a constant holding
/// the threshold is declared for the scope. If arguments are supplied, they are formatted as
/// with [`std::format`] and logged with the global logger if the scope's threshold permits it.
///
/// # Examples
///```
/// use bcs_err::*;
/// use bcs_log::*;
///
/// // set the threshold to 'trace' for the rest of this file.
/// trace!();
///
/// fn main() -> Result<(), Error> {
///     // log at the trace level. Since the threshold is trace, this will be logged.
///     trace!("this is a test")?;
///
///     // formatting can be used just like println! and format!
///     trace!("1 + 1 = {}", 2)?;
///
///     Ok(())
/// }
///
/// fn another_fn() -> Result<(), Error> {
///    // an inner scope may override the threshold
///    debug!();
///
///    // this will not be logged because the threshold is higher
///    trace!("will not show up")?;
///
///    Ok(())
/// }
///```
/// # Output of the above example
/// The output of the above example may look something like this:
///```text
/// [2024-04-14 17:45:46.899]: (TRACE) [..src/main.rs:100]: this is a test
/// [2024-04-14 17:45:46.900]: (TRACE) [..src/main.rs:103]: 1 + 1 = 2
///```
#[macro_export]
macro_rules! trace {
	() => {
		#[doc(hidden)]
		#[allow(dead_code)]
		const BCS_GLOBAL_LOG_LEVEL: bcs_log::LogLevel = bcs_log::LogLevel::Trace;
	};
	($($values:tt)*) => {{
		use bcs_log::{GlobalLogContainer, LogLevel, LoggingType};
		GlobalLogContainer::log(LogLevel::Trace, &format!($($values)*)[..], BCS_GLOBAL_LOG_LEVEL, LoggingType::Standard)
	}};
}

/// Like [`crate::trace`] but at the [`crate::LogLevel::Debug`] level.
#[macro_export]
macro_rules! debug {
	() => {
		#[doc(hidden)]
		#[allow(dead_code)]
		const BCS_GLOBAL_LOG_LEVEL: bcs_log::LogLevel = bcs_log::LogLevel::Debug;
	};
	($($values:tt)*) => {{
		use bcs_log::{GlobalLogContainer, LogLevel, LoggingType};
		GlobalLogContainer::log(LogLevel::Debug, &format!($($values)*)[..], BCS_GLOBAL_LOG_LEVEL, LoggingType::Standard)
	}};
}

/// Like [`crate::trace`] but at the [`crate::LogLevel::Info`] level.
///
/// # Examples
///```
/// use bcs_err::*;
/// use bcs_log::*;
///
/// info!();
///
/// fn main() -> Result<(), Error> {
///     let abc = 123;
///     info!("v1={},v2={}", abc, "def")?; // will show up
///     debug!("test")?; // will not show up
///
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! info {
	() => {
		#[doc(hidden)]
		#[allow(dead_code)]
		const BCS_GLOBAL_LOG_LEVEL: bcs_log::LogLevel = bcs_log::LogLevel::Info;
	};
	($($values:tt)*) => {{
		use bcs_log::{GlobalLogContainer, LogLevel, LoggingType};
		GlobalLogContainer::log(LogLevel::Info, &format!($($values)*)[..], BCS_GLOBAL_LOG_LEVEL, LoggingType::Standard)
	}};
}

/// Like [`crate::trace`] but at the [`crate::LogLevel::Warn`] level.
#[macro_export]
macro_rules! warn {
	() => {
		#[doc(hidden)]
		#[allow(dead_code)]
		const BCS_GLOBAL_LOG_LEVEL: bcs_log::LogLevel = bcs_log::LogLevel::Warn;
	};
	($($values:tt)*) => {{
		use bcs_log::{GlobalLogContainer, LogLevel, LoggingType};
		GlobalLogContainer::log(LogLevel::Warn, &format!($($values)*)[..], BCS_GLOBAL_LOG_LEVEL, LoggingType::Standard)
	}};
}

/// Like [`crate::trace`] but at the [`crate::LogLevel::Error`] level.
#[macro_export]
macro_rules! error {
	() => {
		#[doc(hidden)]
		#[allow(dead_code)]
		const BCS_GLOBAL_LOG_LEVEL: bcs_log::LogLevel = bcs_log::LogLevel::Error;
	};
	($($values:tt)*) => {{
		use bcs_log::{GlobalLogContainer, LogLevel, LoggingType};
		GlobalLogContainer::log(LogLevel::Error, &format!($($values)*)[..], BCS_GLOBAL_LOG_LEVEL, LoggingType::Standard)
	}};
}

/// Like [`crate::trace`] but at the [`crate::LogLevel::Fatal`] level.
#[macro_export]
macro_rules! fatal {
	() => {
		#[doc(hidden)]
		#[allow(dead_code)]
		const BCS_GLOBAL_LOG_LEVEL: bcs_log::LogLevel = bcs_log::LogLevel::Fatal;
	};
	($($values:tt)*) => {{
		use bcs_log::{GlobalLogContainer, LogLevel, LoggingType};
		GlobalLogContainer::log(LogLevel::Fatal, &format!($($values)*)[..], BCS_GLOBAL_LOG_LEVEL, LoggingType::Standard)
	}};
}

/// Logs a line at the [`crate::LogLevel::Info`] level without the timestamp, level or call
/// site.
#[macro_export]
macro_rules! info_plain {
	($($values:tt)*) => {{
		use bcs_log::{GlobalLogContainer, LogLevel, LoggingType};
		GlobalLogContainer::log(LogLevel::Info, &format!($($values)*)[..], BCS_GLOBAL_LOG_LEVEL, LoggingType::Plain)
	}};
}

/// Initialize the global logger with the specified [`bcs_conf::ConfigOption`] values. Only
/// the display options and `LogFilePath` are accepted. Calling it again replaces the logger.
///
/// # Examples
///```
/// use bcs_err::*;
/// use bcs_log::*;
///
/// info!();
///
/// fn main() -> Result<(), Error> {
///     log_init!(DisplayColors(false), DisplayLineNum(false), DisplayMillis(false))?;
///     info!("show this!")?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! log_init {
	( $( $config:expr ),* ) => {{
		#[allow(unused_imports)]
		use bcs_conf::{ConfigOption, ConfigOption::*};
		use bcs_log::GlobalLogContainer;
		let mut config_values: Vec<ConfigOption> = vec![];
		$(
			config_values.push($config);
		)*
		GlobalLogContainer::init(config_values)
	}};
}

/// Change one display option of the global logger after it has been initialized.
///
/// # Examples
///```
/// use bcs_err::*;
/// use bcs_log::*;
///
/// info!();
///
/// fn main() -> Result<(), Error> {
///     log_init!(DisplayColors(false))?;
///     info!("no colors")?;
///     set_log_option!(DisplayColors(true))?;
///     info!("colors")?;
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! set_log_option {
	($option:expr) => {{
		#[allow(unused_imports)]
		use bcs_conf::ConfigOption::*;
		use bcs_log::GlobalLogContainer;
		GlobalLogContainer::set_log_option($option)
	}};
}

/// Returns the current value of a display option of the global logger.
#[macro_export]
macro_rules! get_log_option {
	($option:expr) => {{
		use bcs_log::GlobalLogContainer;
		GlobalLogContainer::get_log_option($option)
	}};
}
