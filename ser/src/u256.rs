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


use crate::types::{UintRange, U256};
use bcs_err::*;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

impl U256 {
	/// zero
	pub const ZERO: U256 = U256([0u8; 32]);
	/// 2^256 - 1
	pub const MAX: U256 = U256([0xffu8; 32]);

	/// Build from 32 little endian bytes.
	pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	/// The 32 little endian bytes of this value.
	pub fn to_le_bytes(&self) -> [u8; 32] {
		self.0
	}

	pub fn from_u128(v: u128) -> Self {
		let mut bytes = [0u8; 32];
		bytes[0..16].copy_from_slice(&v.to_le_bytes());
		Self(bytes)
	}

	/// Returns the value as a u128 or None if it does not fit.
	pub fn to_u128(&self) -> Option<u128> {
		if self.0[16..].iter().any(|b| *b != 0) {
			return None;
		}
		let mut low = [0u8; 16];
		low.copy_from_slice(&self.0[0..16]);
		Some(u128::from_le_bytes(low))
	}

	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|b| *b == 0)
	}

	/// Parse a decimal string of ASCII digits. A value above [`crate::U256::MAX`] is an
	/// [`bcs_err::ErrorKind::Overflow`] error, anything other than digits is a
	/// [`bcs_err::ErrorKind::Parse`] error. Signs are handled by [`crate::parse_uint`].
	pub fn from_dec_str(s: &str) -> Result<Self, Error> {
		if s.is_empty() {
			return Err(err!(ErrKind::Parse, "empty decimal string"));
		}
		let mut value = U256::ZERO;
		for c in s.chars() {
			let digit = match c.to_digit(10) {
				Some(d) => d as u64,
				None => {
					return Err(err!(ErrKind::Parse, "'{}' is not a decimal digit in '{}'", c, s))
				}
			};
			value = match value
				.checked_mul_u64(10)
				.and_then(|v| v.checked_add(&U256::from(digit)))
			{
				Some(v) => v,
				None => {
					let error: Error = ErrorKind::Overflow {
						type_name: U256::NAME.to_string(),
						value: s.to_string(),
						max: U256::MAX.to_string(),
					}
					.into();
					return Err(error);
				}
			};
		}
		Ok(value)
	}

	/// Returns `self + other` or None on overflow.
	pub fn checked_add(&self, other: &U256) -> Option<U256> {
		let a = self.limbs();
		let b = other.limbs();
		let mut out = [0u64; 4];
		let mut carry = false;
		for i in 0..4 {
			let (s1, c1) = a[i].overflowing_add(b[i]);
			let (s2, c2) = s1.overflowing_add(carry as u64);
			out[i] = s2;
			carry = c1 || c2;
		}
		if carry {
			None
		} else {
			Some(Self::from_limbs(out))
		}
	}

	/// Returns `self * m` or None on overflow.
	pub fn checked_mul_u64(&self, m: u64) -> Option<U256> {
		let a = self.limbs();
		let mut out = [0u64; 4];
		let mut carry: u128 = 0;
		for i in 0..4 {
			let product = a[i] as u128 * m as u128 + carry;
			out[i] = product as u64;
			carry = product >> 64;
		}
		if carry != 0 {
			None
		} else {
			Some(Self::from_limbs(out))
		}
	}

	// divide by a non-zero `d`, returning the quotient and remainder
	fn div_rem_u64(&self, d: u64) -> (U256, u64) {
		let a = self.limbs();
		let mut out = [0u64; 4];
		let mut rem: u128 = 0;
		for i in (0..4).rev() {
			let cur = (rem << 64) | a[i] as u128;
			out[i] = (cur / d as u128) as u64;
			rem = cur % d as u128;
		}
		(Self::from_limbs(out), rem as u64)
	}

	fn limbs(&self) -> [u64; 4] {
		let mut limbs = [0u64; 4];
		for (i, limb) in limbs.iter_mut().enumerate() {
			let mut b = [0u8; 8];
			b.copy_from_slice(&self.0[i * 8..i * 8 + 8]);
			*limb = u64::from_le_bytes(b);
		}
		limbs
	}

	fn from_limbs(limbs: [u64; 4]) -> Self {
		let mut bytes = [0u8; 32];
		for (i, limb) in limbs.iter().enumerate() {
			bytes[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
		}
		Self(bytes)
	}
}

impl Ord for U256 {
	fn cmp(&self, other: &Self) -> Ordering {
		// most significant byte first
		self.0.iter().rev().cmp(other.0.iter().rev())
	}
}

impl PartialOrd for U256 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Display for U256 {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		if self.is_zero() {
			return write!(f, "0");
		}
		let mut digits = vec![];
		let mut cur = *self;
		while !cur.is_zero() {
			let (q, r) = cur.div_rem_u64(10);
			digits.push(b'0' + r as u8);
			cur = q;
		}
		digits.reverse();
		write!(f, "{}", String::from_utf8_lossy(&digits))
	}
}

impl Debug for U256 {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(f, "U256({})", self)
	}
}

impl FromStr for U256 {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self, Error> {
		U256::from_dec_str(s)
	}
}

macro_rules! impl_from_uint {
	($int:ty) => {
		impl From<$int> for U256 {
			fn from(v: $int) -> Self {
				U256::from_u128(v as u128)
			}
		}
	};
}

impl_from_uint!(u8);
impl_from_uint!(u16);
impl_from_uint!(u32);
impl_from_uint!(u64);
impl_from_uint!(u128);

fn overflow<T: UintRange>(value: String) -> Error {
	ErrorKind::Overflow {
		type_name: T::NAME.to_string(),
		value,
		max: T::max_u256().to_string(),
	}
	.into()
}

macro_rules! impl_uint_range {
	($int:ty, $name:expr) => {
		impl UintRange for $int {
			const NAME: &'static str = $name;
			fn max_u256() -> U256 {
				U256::from(<$int>::MAX)
			}
			fn from_u256(v: &U256) -> Result<Self, Error> {
				match v.to_u128() {
					Some(x) if x <= <$int>::MAX as u128 => Ok(x as $int),
					_ => Err(overflow::<Self>(v.to_string())),
				}
			}
		}
	};
}

impl_uint_range!(u8, "u8");
impl_uint_range!(u16, "u16");
impl_uint_range!(u32, "u32");
impl_uint_range!(u64, "u64");
impl_uint_range!(u128, "u128");

impl UintRange for U256 {
	const NAME: &'static str = "u256";
	fn max_u256() -> U256 {
		U256::MAX
	}
	fn from_u256(v: &U256) -> Result<Self, Error> {
		Ok(*v)
	}
}

/// Build an unsigned integer from a signed value with a range check. Negative values and values
/// above the target's maximum are [`bcs_err::ErrorKind::Overflow`] errors.
///
/// # Examples
///```
/// use bcs_err::*;
/// use bcs_ser::*;
///
/// assert_eq!(uint_from_i128::<u8>(255).unwrap(), 255u8);
/// assert!(matches!(uint_from_i128::<u8>(256).unwrap_err().kind(), ErrorKind::Overflow { .. }));
/// assert!(matches!(uint_from_i128::<u64>(-1).unwrap_err().kind(), ErrorKind::Overflow { .. }));
///```
pub fn uint_from_i128<T: UintRange>(v: i128) -> Result<T, Error> {
	if v < 0 {
		return Err(overflow::<T>(v.to_string()));
	}
	T::from_u256(&U256::from_u128(v as u128))
}

/// Parse a decimal string into an unsigned integer with a range check. A leading `-` on a non
/// zero value and values above the target's maximum are [`bcs_err::ErrorKind::Overflow`]
/// errors.
pub fn parse_uint<T: UintRange>(s: &str) -> Result<T, Error> {
	match s.strip_prefix('-') {
		Some(digits) => {
			let magnitude = U256::from_dec_str(digits)?;
			if magnitude.is_zero() {
				T::from_u256(&U256::ZERO)
			} else {
				Err(overflow::<T>(s.to_string()))
			}
		}
		None => match U256::from_dec_str(s) {
			Ok(v) => T::from_u256(&v),
			Err(e) => match e.kind() {
				ErrorKind::Overflow { .. } => Err(overflow::<T>(s.to_string())),
				_ => Err(e),
			},
		},
	}
}
