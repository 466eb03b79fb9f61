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


use crate::constants::*;
use crate::types::{LogConfig, LogImpl};
use crate::{GlobalLogContainer, Log, LogBuilder, LogLevel, LoggingType, BCS_GLOBAL_LOG};
use bcs_conf::*;
use bcs_deps::backtrace;
use bcs_deps::backtrace::{Backtrace, Symbol};
use bcs_deps::chrono::Local;
use bcs_deps::colored::Colorize;
use bcs_err::*;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, RwLock};

impl Display for LogLevel {
	fn fmt(&self, w: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self {
			LogLevel::Trace => write!(w, "TRACE"),
			LogLevel::Debug => write!(w, "DEBUG"),
			LogLevel::Info => write!(w, "INFO"),
			LogLevel::Warn => write!(w, "WARN"),
			LogLevel::Error => write!(w, "ERROR"),
			LogLevel::Fatal => write!(w, "FATAL"),
		}
	}
}

impl LogBuilder {
	/// Build a logger with the specified display options. The logger's threshold is
	/// [`crate::LogLevel::Info`] until [`crate::Log::set_log_level`] is called.
	pub fn build_log(configs: Vec<ConfigOption>) -> Result<Box<dyn Log + Send + Sync>, Error> {
		Ok(Box::new(LogImpl::new(configs)?))
	}
}

impl GlobalLogContainer {
	pub fn log(
		level: LogLevel,
		line: &str,
		global_level: LogLevel,
		logging_type: LoggingType,
	) -> Result<(), Error> {
		if level as usize >= global_level as usize {
			Self::check_init()?; // check if we need to call init
			let mut log = BCS_GLOBAL_LOG.write()?;

			match (*log).as_mut() {
				Some(logger) => match logging_type {
					LoggingType::Standard => logger.log(level, line)?,
					LoggingType::Plain => logger.log_plain(level, line)?,
				},
				None => return Err(err!(ErrKind::IllegalState, "global logger missing")),
			}
		}
		Ok(())
	}

	/// (Re)initialize the global logger. Any previous global logger is dropped.
	pub fn init(values: Vec<ConfigOption>) -> Result<(), Error> {
		let mut log = BCS_GLOBAL_LOG.write()?;
		let mut logger = LogBuilder::build_log(values)?;
		logger.set_log_level(LogLevel::Trace);
		logger.init()?;
		(*log) = Some(logger);
		Ok(())
	}

	pub fn set_log_option(option: ConfigOption) -> Result<(), Error> {
		let mut log = BCS_GLOBAL_LOG.write()?;
		match (*log).as_mut() {
			Some(logger) => logger.set_config_option(option),
			None => {
				let text = "global logger has not been initalized";
				Err(err!(ErrKind::Configuration, text))
			}
		}
	}

	pub fn get_log_option(option: ConfigOptionName) -> Result<ConfigOption, Error> {
		let log = BCS_GLOBAL_LOG.read()?;
		match (*log).as_ref() {
			Some(logger) => logger.get_config_option(option),
			None => {
				let text = "global logger has not been initialized";
				Err(err!(ErrKind::Configuration, text))
			}
		}
	}

	fn check_init() -> Result<(), Error> {
		let need_init = {
			let log = BCS_GLOBAL_LOG.read()?;
			(*log).is_none()
		};

		// haven't initialized yet, so call init
		if need_init {
			Self::init(vec![])?;
		}
		Ok(())
	}
}

impl Log for LogImpl {
	fn log(&mut self, level: LogLevel, line: &str) -> Result<(), Error> {
		self.log_impl(level, line, LoggingType::Standard)
	}
	fn log_plain(&mut self, level: LogLevel, line: &str) -> Result<(), Error> {
		self.log_impl(level, line, LoggingType::Plain)
	}
	fn set_log_level(&mut self, log_level: LogLevel) {
		self.log_level = log_level;
	}
	fn init(&mut self) -> Result<(), Error> {
		if self.is_init {
			return Err(err!(ErrKind::Log, "log file has already been initialized"));
		}

		if let Some(path) = self.config.file_path.as_ref() {
			let f = OpenOptions::new().append(true).create(true).open(path)?;
			let mut file = self.file.write()?;
			*file = Some(f);
		}
		self.is_init = true;

		Ok(())
	}
	fn set_config_option(&mut self, value: ConfigOption) -> Result<(), Error> {
		use bcs_conf::ConfigOption as CO;
		match value {
			CO::DisplayColors(v) => self.config.colors = v,
			CO::DisplayTimestamp(v) => self.config.timestamp = v,
			CO::DisplayStdout(v) => self.config.stdout = v,
			CO::DisplayLogLevel(v) => self.config.level = v,
			CO::DisplayLineNum(v) => self.config.line_num = v,
			CO::DisplayMillis(v) => self.config.show_millis = v,
			CO::DisplayBackTrace(v) => self.config.show_backtrace = v,
			CO::LineNumDataMaxLen(v) => {
				LogConfig::check_line_num_data_max_len(v)?;
				self.config.line_num_data_max_len = v
			}
			CO::LogFilePath(_) => {
				let text = "cannot set LogFilePath after logging has been started";
				return Err(err!(ErrKind::Configuration, text));
			}
			_ => {
				let text = format!("{:?} is not a logging option", value);
				return Err(err!(ErrKind::Configuration, text));
			}
		}
		Ok(())
	}
	fn get_config_option(&self, option: ConfigOptionName) -> Result<ConfigOption, Error> {
		use bcs_conf::ConfigOption as CO;
		use bcs_conf::ConfigOptionName as CN;
		Ok(match option {
			CN::DisplayColors => CO::DisplayColors(self.config.colors),
			CN::DisplayTimestamp => CO::DisplayTimestamp(self.config.timestamp),
			CN::DisplayStdout => CO::DisplayStdout(self.config.stdout),
			CN::DisplayLogLevel => CO::DisplayLogLevel(self.config.level),
			CN::DisplayLineNum => CO::DisplayLineNum(self.config.line_num),
			CN::DisplayMillis => CO::DisplayMillis(self.config.show_millis),
			CN::LogFilePath => CO::LogFilePath(self.config.file_path.clone()),
			CN::DisplayBackTrace => CO::DisplayBackTrace(self.config.show_backtrace),
			CN::LineNumDataMaxLen => CO::LineNumDataMaxLen(self.config.line_num_data_max_len),
			_ => {
				let text = format!("{:?} is not a logging option", option);
				return Err(err!(ErrKind::Configuration, text));
			}
		})
	}
}

impl LogImpl {
	pub(crate) fn new(configs: Vec<ConfigOption>) -> Result<Self, Error> {
		let config = LogConfig::new(configs)?;
		let log_level = LogLevel::Info;
		let file = Arc::new(RwLock::new(None));
		let is_init = false;
		Ok(Self {
			config,
			log_level,
			file,
			is_init,
		})
	}

	fn log_impl(
		&mut self,
		level: LogLevel,
		line: &str,
		logging_type: LoggingType,
	) -> Result<(), Error> {
		if !self.is_init {
			return Err(err!(ErrKind::Log, "init() must be called before logging"));
		}
		if level as usize >= self.log_level as usize {
			let plain = logging_type == LoggingType::Plain;
			let show_timestamp = self.config.timestamp && !plain;
			let show_log_level = self.config.level && !plain;
			let show_line_num = self.config.line_num && !plain;
			let show_bt = self.config.show_backtrace && level as usize >= LogLevel::Error as usize;

			self.do_log_impl(show_timestamp, show_log_level, show_line_num, show_bt, level, line)?;
		}
		Ok(())
	}

	fn write_file(&self, bytes: &[u8]) -> Result<(), Error> {
		let mut file = self.file.write()?;
		if let Some(file) = (*file).as_mut() {
			file.write_all(bytes)?;
		}
		Ok(())
	}

	fn do_log_impl(
		&mut self,
		show_timestamp: bool,
		show_log_level: bool,
		show_line_num: bool,
		show_bt: bool,
		level: LogLevel,
		line: &str,
	) -> Result<(), Error> {
		let show_stdout = self.config.stdout;
		let show_colors = self.config.colors;

		if show_timestamp {
			let date = Local::now();
			let millis = date.timestamp_millis() % 1_000;
			let formatted_timestamp = if self.config.show_millis {
				format!(
					"{}.{}",
					date.format("%Y-%m-%d %H:%M:%S"),
					Self::format_millis(millis)
				)
			} else {
				format!("{}", date.format("%Y-%m-%d %H:%M:%S"))
			};

			self.write_file(format!("[{}]: ", formatted_timestamp).as_bytes())?;

			if show_stdout {
				if show_colors {
					print!("[{}]: ", formatted_timestamp.dimmed());
				} else {
					print!("[{}]: ", formatted_timestamp);
				}
			}
		}

		if show_log_level {
			// INFO and WARN are padded so the columns line up
			let pad = if level == LogLevel::Info || level == LogLevel::Warn {
				"  "
			} else {
				" "
			};
			self.write_file(format!("({}){}", level, pad).as_bytes())?;

			if show_stdout {
				if show_colors {
					let text = format!("{}", level);
					let text = match level {
						LogLevel::Trace => text.magenta(),
						LogLevel::Debug => text.cyan(),
						LogLevel::Info => text.green(),
						LogLevel::Warn => text.yellow(),
						LogLevel::Error => text.bright_blue(),
						LogLevel::Fatal => text.red(),
					};
					print!("({}){}", text, pad);
				} else {
					print!("({}){}", level, pad);
				}
			}
		}

		if show_line_num {
			let mut found_logger = false;
			let mut found_frame = false;
			let mut logged_from_file = "*********unknown**********".to_string();

			// walk the stack until the first frame outside of this file
			backtrace::trace(|frame| {
				backtrace::resolve_frame(frame, |symbol| {
					found_frame =
						Self::process_resolve_frame(symbol, &mut found_logger, &mut logged_from_file);
				});
				!found_frame
			});

			let logged_from_file =
				Self::truncate_location(logged_from_file, self.config.line_num_data_max_len);

			self.write_file(format!("[{}]: ", logged_from_file).as_bytes())?;

			if show_stdout {
				if show_colors {
					print!("[{}]: ", logged_from_file.yellow());
				} else {
					print!("[{}]: ", logged_from_file);
				}
			}
		}

		self.write_file(line.as_bytes())?;
		self.write_file(NEWLINE)?;
		if show_bt {
			let bt_text = format!("{:?}", Backtrace::new());
			self.write_file(bt_text.as_bytes())?;
		}

		if show_stdout {
			println!("{}", line);
			if show_bt {
				print!("{:?}", Backtrace::new());
			}
		}

		Ok(())
	}

	fn process_resolve_frame(
		symbol: &Symbol,
		found_logger: &mut bool,
		logged_from_file: &mut String,
	) -> bool {
		let mut found_frame = false;

		// debug builds carry file and line information
		#[cfg(debug_assertions)]
		if let Some(filename) = symbol.filename() {
			let filename = filename.display().to_string();
			let lineno = match symbol.lineno() {
				Some(lineno) => lineno.to_string(),
				None => "".to_string(),
			};

			let is_logger = filename.find("/log/src/log.rs").is_some()
				|| filename.find("\\log\\src\\log.rs").is_some();
			if is_logger {
				*found_logger = true;
			} else if *found_logger {
				*logged_from_file = format!("{}:{}", filename, lineno);
				found_frame = true;
			}
		}

		// release builds only have symbol names
		#[cfg(not(debug_assertions))]
		if let Some(name) = symbol.name() {
			let name = name.to_string();
			if name.find("bcs_log::").is_some() {
				*found_logger = true;
			} else if *found_logger {
				let name = match name.rfind(':') {
					Some(pos) if pos > 1 => &name[0..pos - 1],
					_ => &name[..],
				};
				*logged_from_file = name.to_string();
				found_frame = true;
			}
		}
		found_frame
	}

	// keep the tail of the location so the file name and line stay visible
	pub(crate) fn truncate_location(location: String, max_len: usize) -> String {
		let len = location.len();
		if len > max_len {
			let mut start = len.saturating_sub(max_len);
			while !location.is_char_boundary(start) {
				start += 1;
			}
			format!("..{}", &location[start..])
		} else {
			location
		}
	}

	// correctly format the milliseconds
	pub(crate) fn format_millis(millis: i64) -> String {
		format!("{:03}", millis)
	}
}

impl LogConfig {
	pub(crate) fn new(configs: Vec<ConfigOption>) -> Result<Self, Error> {
		let config = ConfigBuilder::build_config(configs);
		config.check_config(
			vec![
				ConfigOptionName::DisplayColors,
				ConfigOptionName::DisplayStdout,
				ConfigOptionName::DisplayTimestamp,
				ConfigOptionName::DisplayLogLevel,
				ConfigOptionName::DisplayLineNum,
				ConfigOptionName::DisplayMillis,
				ConfigOptionName::DisplayBackTrace,
				ConfigOptionName::LogFilePath,
				ConfigOptionName::LineNumDataMaxLen,
			],
			vec![],
		)?;

		let line_num_data_max_len = config.get_or_usize(
			&ConfigOptionName::LineNumDataMaxLen,
			DEFAULT_LINE_NUM_DATA_MAX_LEN,
		);
		Self::check_line_num_data_max_len(line_num_data_max_len)?;

		Ok(Self {
			colors: config.get_or_bool(&ConfigOptionName::DisplayColors, true),
			stdout: config.get_or_bool(&ConfigOptionName::DisplayStdout, true),
			timestamp: config.get_or_bool(&ConfigOptionName::DisplayTimestamp, true),
			level: config.get_or_bool(&ConfigOptionName::DisplayLogLevel, true),
			line_num: config.get_or_bool(&ConfigOptionName::DisplayLineNum, true),
			show_millis: config.get_or_bool(&ConfigOptionName::DisplayMillis, true),
			file_path: config.get_or_path(&ConfigOptionName::LogFilePath, None),
			show_backtrace: config.get_or_bool(&ConfigOptionName::DisplayBackTrace, false),
			line_num_data_max_len,
		})
	}

	pub(crate) fn check_line_num_data_max_len(v: usize) -> Result<(), Error> {
		if v < MINIMUM_LNDML {
			let text = format!("LineNumDataMaxLen must be at least {}", MINIMUM_LNDML);
			return Err(err!(ErrKind::Configuration, text));
		}
		Ok(())
	}
}

