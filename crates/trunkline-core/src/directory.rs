//! # Network directory
//!
//! [`NetworkDirectory`] owns every switchboard, keyed by area code and kept in
//! insertion order, together with the [`TrunkGraph`] that links them. It is a
//! plain value: whoever drives the command loop creates it, hands out `&mut`
//! for mutation and swaps it wholesale on load.
//!
//! Mutations that reference an unknown area code do nothing. Each returns a
//! `bool` so callers that want to surface the miss can do so.
//!
//! ```rust
//! use trunkline_core::{NetworkDirectory, PhoneAddress};
//!
//! let mut directory = NetworkDirectory::new();
//! directory.add_switchboard(410);
//! directory.add_switchboard(443);
//! directory.connect_switchboards(410, 443);
//! directory.add_phone(410, 5551234);
//!
//! assert_eq!(directory.trunk_lines(443).collect::<Vec<_>>(), vec![410]);
//! assert!(directory.find_phone(PhoneAddress::new(410, 5551234)).is_some());
//! ```

use indexmap::IndexMap;
use tracing::debug;

use crate::phone::{AreaCode, LocalNumber, PhoneAddress, PhoneNumber};
use crate::switchboard::Switchboard;
use crate::trunk::TrunkGraph;

/// Area code to switchboard mapping plus the trunk lines between them
#[derive(Debug, Clone, Default)]
pub struct NetworkDirectory {
    pub(crate) switchboards: IndexMap<AreaCode, Switchboard>,
    pub(crate) trunks: TrunkGraph,
}

impl NetworkDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.switchboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switchboards.is_empty()
    }

    /// Drop every switchboard, phone and trunk line
    pub fn clear(&mut self) {
        self.switchboards.clear();
        self.trunks.clear();
    }

    pub fn contains(&self, area_code: AreaCode) -> bool {
        self.switchboards.contains_key(&area_code)
    }

    pub fn switchboard(&self, area_code: AreaCode) -> Option<&Switchboard> {
        self.switchboards.get(&area_code)
    }

    /// Switchboards in directory order
    pub fn switchboards(&self) -> impl Iterator<Item = &Switchboard> + '_ {
        self.switchboards.values()
    }

    /// Area codes in directory order
    pub fn area_codes(&self) -> impl Iterator<Item = AreaCode> + '_ {
        self.switchboards.keys().copied()
    }

    pub fn trunks(&self) -> &TrunkGraph {
        &self.trunks
    }

    /// Direct trunk-line peers of a switchboard
    pub fn trunk_lines(&self, area_code: AreaCode) -> impl Iterator<Item = AreaCode> + '_ {
        self.trunks.neighbors(area_code)
    }

    /// Add a switchboard unless one with this area code already exists.
    ///
    /// Returns `true` if a new switchboard was created. An existing
    /// switchboard keeps its phones and trunk lines.
    pub fn add_switchboard(&mut self, area_code: AreaCode) -> bool {
        if self.switchboards.contains_key(&area_code) {
            debug!(area_code, "switchboard already exists");
            return false;
        }
        self.switchboards.insert(area_code, Switchboard::new(area_code));
        self.trunks.add_switchboard(area_code);
        debug!(area_code, "switchboard added");
        true
    }

    /// Replace any switchboard at `area_code` with a fresh, empty one.
    ///
    /// The old switchboard's phones are discarded and its trunk lines are
    /// removed from both ends. Directory order is preserved for an existing key.
    pub(crate) fn redeclare_switchboard(&mut self, area_code: AreaCode) -> bool {
        let replaced = self
            .switchboards
            .insert(area_code, Switchboard::new(area_code))
            .is_some();
        if replaced {
            self.trunks.remove_switchboard(area_code);
        }
        self.trunks.add_switchboard(area_code);
        replaced
    }

    /// Add a trunk line between two existing switchboards.
    ///
    /// Returns `false` without changing anything if either area code is
    /// unknown. Connecting an already connected pair succeeds and changes nothing.
    pub fn connect_switchboards(&mut self, a: AreaCode, b: AreaCode) -> bool {
        if !self.contains(a) || !self.contains(b) {
            debug!(a, b, "connect skipped, unknown switchboard");
            return false;
        }
        if self.trunks.connect(a, b) {
            debug!(a, b, "trunk line added");
        }
        true
    }

    /// Remove the trunk line between two switchboards, if there is one.
    ///
    /// Returns `true` only when a line was removed.
    pub fn disconnect_switchboards(&mut self, a: AreaCode, b: AreaCode) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        let removed = self.trunks.disconnect(a, b);
        if removed {
            debug!(a, b, "trunk line removed");
        }
        removed
    }

    /// Attach a new idle phone to the switchboard at `area_code`.
    ///
    /// Returns `false` if there is no such switchboard. Duplicate numbers are accepted.
    pub fn add_phone(&mut self, area_code: AreaCode, local_number: LocalNumber) -> bool {
        match self.switchboards.get_mut(&area_code) {
            Some(switchboard) => {
                switchboard.add_phone(PhoneNumber::new(area_code, local_number));
                debug!(area_code, local_number, "phone added");
                true
            }
            None => {
                debug!(area_code, local_number, "phone skipped, unknown switchboard");
                false
            }
        }
    }

    /// First phone on the address's own switchboard matching the address
    pub fn find_phone(&self, address: PhoneAddress) -> Option<&PhoneNumber> {
        self.switchboards
            .get(&address.area_code)
            .and_then(|sb| sb.find_phone(address))
    }

    pub(crate) fn switchboard_mut(&mut self, area_code: AreaCode) -> Option<&mut Switchboard> {
        self.switchboards.get_mut(&area_code)
    }

    /// Total number of phones across all switchboards
    pub fn phone_count(&self) -> usize {
        self.switchboards.values().map(|sb| sb.phones().len()).sum()
    }
}
