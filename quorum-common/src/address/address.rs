use bech32::{convert_bits, decode, encode, u5, FromBase32, Variant};
use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Serialize};

use super::errors::AddressError;

/// Human-readable prefix for quorum addresses.
pub const ADDRESS_HRP: &str = "qrm";

/// A participant identity: the bech32m encoding of an ed25519 verifying key.
///
/// Every mutating ballot operation is attributed to exactly one `Address`.
/// The ballot itself never authenticates callers; whoever hands an `Address`
/// to the ballot is responsible for having verified it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if Address::is_valid(&s) {
            Ok(Address(s))
        } else {
            Err(AddressError::InvalidPublicKey(format!("Invalid address: {}", s)))
        }
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if Address::is_valid(s) {
            Ok(Address(s.to_string()))
        } else {
            Err(AddressError::InvalidPublicKey(format!("Invalid address: {}", s)))
        }
    }
}

impl std::ops::Deref for Address {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Address {
    /// Returns whether the given string is a well-formed quorum address.
    pub fn is_valid(address: &str) -> bool {
        Self::public_key_from_str(address).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the verifying key from a valid address.
    pub fn public_key_from_str(address: &str) -> Result<VerifyingKey, AddressError> {
        let (hrp, data, variant) = decode(address)
            .map_err(|e| AddressError::InvalidPublicKey(e.to_string()))?;

        if hrp != ADDRESS_HRP || variant != Variant::Bech32m {
            return Err(AddressError::InvalidPublicKey(format!("Invalid address: {}", address)));
        }

        let bytes = Vec::<u8>::from_base32(&data)
            .map_err(|e| AddressError::InvalidPublicKey(e.to_string()))?;

        if bytes.len() != 32 {
            return Err(AddressError::InvalidPublicKeyLength(bytes.len()));
        }

        let bytes_array: [u8; 32] = bytes.as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidPublicKey("Invalid public key length".to_string()))?;

        VerifyingKey::from_bytes(&bytes_array)
            .map_err(|e| AddressError::InvalidPublicKey(e.to_string()))
    }

    /// Converts a `VerifyingKey` into a bech32m-encoded address with the
    /// `qrm` prefix.
    ///
    /// The conversion involves:
    /// - Converting the 32-byte public key into 5-bit chunks (base32 compatible).
    /// - Encoding the result with the bech32m variant.
    pub fn from_public_key(public_key: &VerifyingKey) -> Result<Address, AddressError> {
        let bytes = public_key.to_bytes();

        let five_bit: Vec<u5> = convert_bits(&bytes, 8, 5, true)
            .map_err(AddressError::BitConversionFailed)?
            .into_iter()
            .map(|b| u5::try_from_u8(b).map_err(|_| AddressError::EncodingFailed))
            .collect::<Result<_, _>>()?;

        let encoded = encode(ADDRESS_HRP, five_bit, Variant::Bech32m)
            .map_err(|_| AddressError::EncodingFailed)?;

        Ok(Address(encoded))
    }
}

#[cfg(test)]
mod tests {
    use ed25519_dalek::SigningKey;
    use rand::RngCore;
    use rand::rngs::OsRng;

    use super::*;

    pub fn seed() -> [u8; 32] {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        seed
    }

    /// Asserts that an address generated from a public key
    /// can be parsed back to the same public key.
    #[test]
    fn test_address_from_public_key_and_back() -> Result<(), AddressError> {
        let seed = seed();

        let secret_key = SigningKey::from_bytes(&seed);
        let public_key = VerifyingKey::from(&secret_key);

        let address = Address::from_public_key(&public_key)?;
        let extracted_pk = Address::public_key_from_str(address.as_str())?;

        assert_eq!(public_key, extracted_pk);

        Ok(())
    }

    /// Verifies that an invalid address string is rejected.
    #[test]
    fn test_invalid_address_is_rejected() {
        let invalid_address = "qrm1invalidaddress";

        assert!(!Address::is_valid(invalid_address));
        assert!(Address::public_key_from_str(invalid_address).is_err());
    }

    /// Verifies that a random string that is not bech32 fails.
    #[test]
    fn test_completely_invalid_format_fails() {
        let random_string = "not_even_bech32_encoded";
        assert!(Address::try_from(random_string).is_err());
        assert!(Address::public_key_from_str(random_string).is_err());
    }

    /// A wrong human-readable prefix must be rejected even if the payload
    /// is a valid key.
    #[test]
    fn test_foreign_prefix_is_rejected() {
        let seed = seed();
        let public_key = VerifyingKey::from(&SigningKey::from_bytes(&seed));

        let bytes = public_key.to_bytes();
        let five_bit: Vec<u5> = convert_bits(&bytes, 8, 5, true)
            .unwrap()
            .into_iter()
            .map(|b| u5::try_from_u8(b).unwrap())
            .collect();
        let foreign = encode("other", five_bit, Variant::Bech32m).unwrap();

        assert!(Address::try_from(foreign.as_str()).is_err());
    }
}
