use crate::DbTime;

/// A user's U2F device
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct U2fDevice {
    /// Owner of the device
    pub username: String,

    /// Opaque key handle issued at registration
    pub key_handle: Vec<u8>,

    /// Opaque public key bytes
    pub public_key: Vec<u8>,
}

/// An authentication attempt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthenticationAttempt {
    /// User who attempted to authenticate
    pub username: String,

    /// Whether the attempt succeeded
    pub successful: bool,

    /// When the attempt happened
    pub time: DbTime,
}
