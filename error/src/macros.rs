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


/// Build the specified [`crate::ErrorKind`] and convert it into an [`crate::Error`]. The desired
/// [`crate::ErrorKind`] is specified using the [`crate::ErrKind`] name enum. A format string
/// and arguments may be used just like with [`std::format`].
///
/// Example:
///
///```
/// use bcs_err::{Error, ErrorKind, ErrKind, err};
///
/// fn check_tag(tag: u32) -> Result<(), Error> {
///     if tag > 6 {
///         return Err(err!(ErrKind::Validation, "unknown command tag {}", tag));
///     }
///
///     Ok(())
/// }
///
/// assert!(check_tag(7).is_err());
///```
#[macro_export]
macro_rules! err {
	($kind:expr, $msg:expr, $($param:tt)*) => {{
		use bcs_err::err;
		let msg = &format!($msg, $($param)*)[..];
		err!($kind, msg)
	}};
	($kind:expr, $msg:expr) => {{
		use bcs_err::{ErrKind, ErrorKind, Error};
		match $kind {
			ErrKind::Validation => {
				let error: Error = ErrorKind::Validation($msg.to_string()).into();
				error
			}
			ErrKind::IO => {
				let error: Error = ErrorKind::IO($msg.to_string()).into();
				error
			}
			ErrKind::Log => {
				let error: Error = ErrorKind::Log($msg.to_string()).into();
				error
			}
			ErrKind::Configuration => {
				let error: Error = ErrorKind::Configuration($msg.to_string()).into();
				error
			}
			ErrKind::Utf8 => {
				let error: Error = ErrorKind::Utf8($msg.to_string()).into();
				error
			}
			ErrKind::IllegalArgument => {
				let error: Error = ErrorKind::IllegalArgument($msg.to_string()).into();
				error
			}
			ErrKind::IllegalState => {
				let error: Error = ErrorKind::IllegalState($msg.to_string()).into();
				error
			}
			ErrKind::Poison => {
				let error: Error = ErrorKind::Poison($msg.to_string()).into();
				error
			}
			ErrKind::Parse => {
				let error: Error = ErrorKind::Parse($msg.to_string()).into();
				error
			}
			ErrKind::Test => {
				let error: Error = ErrorKind::Test($msg.to_string()).into();
				error
			}
		}
	}};
}

/// Map the specified error into the [`crate::ErrKind`] enum name from this crate.
/// Optionally specify an additional message to be included in the error.
///
/// Example:
///
///```
/// use bcs_err::{Error, ErrorKind, ErrKind, map_err};
///
/// fn parse_version(s: &str) -> Result<u64, Error> {
///     let v = map_err!(s.parse::<u64>(), ErrKind::Parse, "invalid object version")?;
///     Ok(v)
/// }
///
/// assert_eq!(parse_version("3619").unwrap(), 3619);
/// assert!(matches!(parse_version("x").unwrap_err().kind(), ErrorKind::Parse(_)));
///```
#[macro_export]
macro_rules! map_err {
	($in_err:expr, $kind:expr) => {{
		use bcs_err::map_err;
		map_err!($in_err, $kind, "")
	}};
	($in_err:expr, $kind:expr, $msg:expr) => {{
		use bcs_err::{ErrKind, Error, ErrorKind};
		$in_err.map_err(|e| -> Error {
			match $kind {
				ErrKind::Validation => ErrorKind::Validation(format!("{}: {}", $msg, e)).into(),
				ErrKind::IO => ErrorKind::IO(format!("{}: {}", $msg, e)).into(),
				ErrKind::Log => ErrorKind::Log(format!("{}: {}", $msg, e)).into(),
				ErrKind::Configuration => {
					ErrorKind::Configuration(format!("{}: {}", $msg, e)).into()
				}
				ErrKind::Utf8 => ErrorKind::Utf8(format!("{}: {}", $msg, e)).into(),
				ErrKind::IllegalArgument => {
					ErrorKind::IllegalArgument(format!("{}: {}", $msg, e)).into()
				}
				ErrKind::IllegalState => ErrorKind::IllegalState(format!("{}: {}", $msg, e)).into(),
				ErrKind::Poison => ErrorKind::Poison(format!("{}: {}", $msg, e)).into(),
				ErrKind::Parse => ErrorKind::Parse(format!("{}: {}", $msg, e)).into(),
				ErrKind::Test => ErrorKind::Test(format!("{}: {}", $msg, e)).into(),
			}
		})
	}};
}
