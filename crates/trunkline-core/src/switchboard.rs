//! Local exchange node

use crate::phone::{AreaCode, PhoneAddress, PhoneNumber};

/// One exchange: an area code and the phones attached to it.
///
/// Trunk lines are not stored here. They live in the directory's
/// [`TrunkGraph`](crate::trunk::TrunkGraph) keyed by area code, so both ends
/// of a line are always updated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switchboard {
    area_code: AreaCode,
    phones: Vec<PhoneNumber>,
}

impl Switchboard {
    pub fn new(area_code: AreaCode) -> Self {
        Self {
            area_code,
            phones: Vec::new(),
        }
    }

    pub fn area_code(&self) -> AreaCode {
        self.area_code
    }

    /// Phones in insertion order
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Append a phone. Duplicate addresses are allowed.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Index of the first phone matching `address`
    pub fn position_of(&self, address: PhoneAddress) -> Option<usize> {
        self.phones.iter().position(|p| p.matches(address))
    }

    /// First phone matching `address`
    pub fn find_phone(&self, address: PhoneAddress) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.matches(address))
    }

    pub fn find_phone_mut(&mut self, address: PhoneAddress) -> Option<&mut PhoneNumber> {
        self.phones.iter_mut().find(|p| p.matches(address))
    }

    pub(crate) fn phone_at_mut(&mut self, index: usize) -> Option<&mut PhoneNumber> {
        self.phones.get_mut(index)
    }
}
