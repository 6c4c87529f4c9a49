//! # Call routing
//!
//! A call between two phones can be placed when the source switchboard reaches
//! the destination switchboard over trunk lines. Reachability is a pure
//! existence check ([`TrunkGraph::is_reachable`]), not a shortest path, so any
//! path will do and no route is stored.
//!
//! Once a path exists, the first phone matching each address on its own
//! switchboard is marked busy. Hanging up ([`NetworkDirectory::end_call`]) idles
//! one phone only. The far end stays busy until it hangs up too.
//!
//! Every failure is reported to the user with one message. The typed
//! [`CallFailure`] keeps the actual reason for logs and tests.
//!
//! ```rust
//! use trunkline_core::{CallOutcome, NetworkDirectory, PhoneAddress};
//!
//! let mut directory = NetworkDirectory::new();
//! directory.add_switchboard(410);
//! directory.add_switchboard(443);
//! directory.add_phone(410, 5551234);
//! directory.add_phone(443, 5559876);
//!
//! let from = PhoneAddress::new(410, 5551234);
//! let to = PhoneAddress::new(443, 5559876);
//! assert!(!directory.start_call(from, to).is_connected());
//!
//! directory.connect_switchboards(410, 443);
//! let outcome = directory.start_call(from, to);
//! assert_eq!(outcome, CallOutcome::Connected { from, to });
//! assert_eq!(outcome.to_string(), "Connected 410-5551234 to 443-5559876");
//! ```
//!
//! [`TrunkGraph::is_reachable`]: crate::trunk::TrunkGraph::is_reachable

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::directory::NetworkDirectory;
use crate::phone::{AreaCode, PhoneAddress};

/// Message printed for any call that could not be placed
pub const NO_PATH_MESSAGE: &str = "No path found between the given phone numbers.";

/// Why a call could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CallFailure {
    #[error("no switchboard with area code {0}")]
    UnknownSwitchboard(AreaCode),

    #[error("no trunk-line path from {from} to {to}")]
    Unreachable { from: AreaCode, to: AreaCode },

    #[error("phone {0} is not attached to its switchboard")]
    MissingEndpoint(PhoneAddress),
}

/// Result of [`NetworkDirectory::start_call`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// Both phones are now marked connected
    Connected {
        from: PhoneAddress,
        to: PhoneAddress,
    },
    /// Nothing changed
    NoPath(CallFailure),
}

impl CallOutcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, CallOutcome::Connected { .. })
    }

    pub fn failure(&self) -> Option<CallFailure> {
        match self {
            CallOutcome::NoPath(reason) => Some(*reason),
            CallOutcome::Connected { .. } => None,
        }
    }
}

impl fmt::Display for CallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallOutcome::Connected { from, to } => write!(f, "Connected {} to {}", from, to),
            CallOutcome::NoPath(_) => f.write_str(NO_PATH_MESSAGE),
        }
    }
}

impl NetworkDirectory {
    /// Whether a call from switchboard `from` can reach switchboard `to`.
    ///
    /// Unknown area codes are never reachable, not even from themselves.
    pub fn find_path(&self, from: AreaCode, to: AreaCode) -> bool {
        self.contains(from) && self.contains(to) && self.trunks.is_reachable(from, to)
    }

    /// Route a call from `from` to `to` and mark both phones connected.
    pub fn start_call(&mut self, from: PhoneAddress, to: PhoneAddress) -> CallOutcome {
        let outcome = self.route(from, to);
        match outcome {
            CallOutcome::Connected { .. } => debug!(%from, %to, "call connected"),
            CallOutcome::NoPath(reason) => debug!(%from, %to, %reason, "call not placed"),
        }
        outcome
    }

    fn route(&mut self, from: PhoneAddress, to: PhoneAddress) -> CallOutcome {
        let (Some(source), Some(destination)) = (
            self.switchboard(from.area_code),
            self.switchboard(to.area_code),
        ) else {
            let missing = if self.contains(from.area_code) {
                to.area_code
            } else {
                from.area_code
            };
            return CallOutcome::NoPath(CallFailure::UnknownSwitchboard(missing));
        };

        if !self.trunks.is_reachable(from.area_code, to.area_code) {
            return CallOutcome::NoPath(CallFailure::Unreachable {
                from: from.area_code,
                to: to.area_code,
            });
        }

        let Some(source_index) = source.position_of(from) else {
            return CallOutcome::NoPath(CallFailure::MissingEndpoint(from));
        };
        let Some(destination_index) = destination.position_of(to) else {
            return CallOutcome::NoPath(CallFailure::MissingEndpoint(to));
        };

        // Looked up by index one at a time: both phones may sit on the same switchboard.
        if let Some(phone) = self
            .switchboard_mut(from.area_code)
            .and_then(|sb| sb.phone_at_mut(source_index))
        {
            phone.connect_to(to);
        }
        if let Some(phone) = self
            .switchboard_mut(to.area_code)
            .and_then(|sb| sb.phone_at_mut(destination_index))
        {
            phone.connect_to(from);
        }

        CallOutcome::Connected { from, to }
    }

    /// Hang up one phone.
    ///
    /// Only the first phone matching `address` is idled. Returns `false` if
    /// there was no such phone.
    pub fn end_call(&mut self, address: PhoneAddress) -> bool {
        match self
            .switchboard_mut(address.area_code)
            .and_then(|sb| sb.find_phone_mut(address))
        {
            Some(phone) => {
                phone.disconnect();
                debug!(%address, "call ended");
                true
            }
            None => {
                debug!(%address, "end call skipped, unknown phone");
                false
            }
        }
    }
}
