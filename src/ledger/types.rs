use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub type Chips = u128;

/// Hand-local player index. Index 0 is always the small blind for the hand,
/// index 1 the big blind; hosts map their channel participants onto these via
/// [`small_blind_is_player_a`].
pub type PlayerIdx = usize;

/// Static cap on the number of actions accepted per hand. A legal hand tops
/// out around forty actions (blinds, four capped raising rounds, closing
/// calls); anything past this cap is rejected before any hashing work.
pub const MAX_ACTIONS_PER_HAND: usize = 256;

macro_rules! bytes32_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name([u8; 32]);

        impl $name {
            pub const fn from_raw(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Identifier whose big-endian value is the given word. Handy for
            /// fixtures and low-numbered channels.
            pub const fn from_low_u64(value: u64) -> Self {
                let mut bytes = [0u8; 32];
                let be = value.to_be_bytes();
                let mut i = 0;
                while i < 8 {
                    bytes[24 + i] = be[i];
                    i += 1;
                }
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct HexVisitor;

                impl<'de> Visitor<'de> for HexVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("a 0x-prefixed 32-byte hex string")
                    }

                    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                        let stripped = value.strip_prefix("0x").unwrap_or(value);
                        let decoded = hex::decode(stripped).map_err(de::Error::custom)?;
                        let bytes: [u8; 32] = decoded
                            .try_into()
                            .map_err(|_| de::Error::custom("expected exactly 32 bytes"))?;
                        Ok($name(bytes))
                    }
                }

                deserializer.deserialize_str(HexVisitor)
            }
        }
    };
}

bytes32_newtype! {
    /// Opaque 256-bit channel identifier; the core only binds it into hashes.
    ChannelId
}

bytes32_newtype! {
    /// 256-bit hand identifier. Its parity decides which channel participant
    /// posts the small blind.
    HandId
}

bytes32_newtype! {
    /// Digest of one action's canonical encoding, or the hand genesis.
    ActionHash
}

/// Whether channel participant A posts the small blind (and is therefore
/// player 0) for this hand. A posts it on odd hand identifiers, B on even
/// ones, alternating the button every hand.
pub fn small_blind_is_player_a(hand_id: &HandId) -> bool {
    hand_id.as_bytes()[31] & 1 == 1
}
