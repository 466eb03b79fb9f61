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


/// Implements [`crate::Serializable`] for a struct by encoding the listed fields in the order
/// given, with no framing. The order must match the wire format, which is usually the
/// declaration order.
///
/// # Examples
///
///```
/// use bcs_err::*;
/// use bcs_ser::*;
///
/// #[derive(Debug, PartialEq)]
/// struct GasData {
///     price: u64,
///     budget: u64,
///     sponsored: bool,
/// }
///
/// impl_struct!(GasData { price, budget, sponsored });
///
/// fn main() -> Result<(), Error> {
///     let gas = GasData { price: 5, budget: 100, sponsored: false };
///     let bytes = serialize(&gas)?;
///     assert_eq!(bytes, vec![5, 0, 0, 0, 0, 0, 0, 0, 100, 0, 0, 0, 0, 0, 0, 0, 0]);
///     assert_eq!(deserialize::<GasData>(&bytes)?, gas);
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! impl_struct {
	($name:ident { $($field:ident),* $(,)? }) => {
		impl $crate::Serializable for $name {
			fn read<R: $crate::Reader>(reader: &mut R) -> Result<Self, bcs_err::Error> {
				Ok(Self {
					$($field: $crate::Serializable::read(reader)?,)*
				})
			}
			fn write<W: $crate::Writer>(&self, writer: &mut W) -> Result<(), bcs_err::Error> {
				$($crate::Serializable::write(&self.$field, writer)?;)*
				Ok(())
			}
		}
	};
}
