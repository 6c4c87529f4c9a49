//! # Phone numbers
//!
//! A [`PhoneNumber`] is one endpoint attached to a switchboard. It carries a
//! busy/idle flag and nothing else that routing relies on: there is no stored
//! link to the phone at the other end of a call, so hanging up one side never
//! touches the other.
//!
//! [`PhoneAddress`] is the `(area code, local number)` pair that identifies a
//! phone. Its textual form is `<area>-<number>`. When parsing, everything after
//! the first hyphen is joined together, so `410-555-1234` reads as area `410`,
//! number `5551234`. The network file format relies on this, so keep it.
//!
//! ```rust
//! use trunkline_core::PhoneAddress;
//!
//! let addr: PhoneAddress = "410-555-1234".parse().unwrap();
//! assert_eq!(addr.area_code, 410);
//! assert_eq!(addr.local_number, 5551234);
//! assert_eq!(addr.to_string(), "410-5551234");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Area code keying a switchboard
pub type AreaCode = u32;

/// Local part of a phone number
pub type LocalNumber = u64;

const HYPHEN: char = '-';

/// Parse an area code token
pub fn parse_area_code(token: &str) -> Result<AreaCode> {
    token
        .parse()
        .map_err(|_| Error::InvalidAreaCode(token.to_string()))
}

/// Logical key of a phone: `(area code, local number)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneAddress {
    pub area_code: AreaCode,
    pub local_number: LocalNumber,
}

impl PhoneAddress {
    pub fn new(area_code: AreaCode, local_number: LocalNumber) -> Self {
        Self {
            area_code,
            local_number,
        }
    }
}

impl fmt::Display for PhoneAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.area_code, self.local_number)
    }
}

impl FromStr for PhoneAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(HYPHEN);
        let area = parts.next().unwrap_or_default();
        let area_code = area
            .parse()
            .map_err(|_| Error::InvalidPhoneNumber(s.to_string()))?;

        // Interior hyphens are dropped rather than treated as separators.
        let local: String = parts.collect();
        let local_number = local
            .parse()
            .map_err(|_| Error::InvalidPhoneNumber(s.to_string()))?;

        Ok(Self::new(area_code, local_number))
    }
}

/// An endpoint owned by a switchboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    address: PhoneAddress,
    connected: bool,
    /// Far end of the call that last connected this phone. Display only.
    peer: Option<PhoneAddress>,
}

impl PhoneNumber {
    /// Create an idle phone
    pub fn new(area_code: AreaCode, local_number: LocalNumber) -> Self {
        Self {
            address: PhoneAddress::new(area_code, local_number),
            connected: false,
            peer: None,
        }
    }

    pub fn address(&self) -> PhoneAddress {
        self.address
    }

    pub fn area_code(&self) -> AreaCode {
        self.address.area_code
    }

    pub fn local_number(&self) -> LocalNumber {
        self.address.local_number
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The number this phone was last connected to, if it is still in a call
    pub fn peer(&self) -> Option<PhoneAddress> {
        self.peer
    }

    /// Exact match on both halves of the address
    pub fn matches(&self, address: PhoneAddress) -> bool {
        self.address == address
    }

    /// Mark the phone busy. Idempotent.
    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Mark the phone idle. Idempotent.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.peer = None;
    }

    pub(crate) fn connect_to(&mut self, peer: PhoneAddress) {
        self.connect();
        self.peer = Some(peer);
    }
}
