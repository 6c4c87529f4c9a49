//! # Trunkline Core
//!
//! A toy telephone switching network: local exchanges ("switchboards") keyed by
//! area code, the phones attached to each, and the trunk lines between them.
//!
//! This crate provides:
//! - the switchboard directory and its topology mutations
//! - a symmetric trunk-line graph with a depth-first reachability check
//! - call routing that marks endpoints busy, and one-sided hang-up
//! - a line-oriented save/load format
//! - a human-readable listing via `Display`
//!
//! ## Architecture
//!
//! ```text
//! NetworkDirectory
//! ├── IndexMap<AreaCode, Switchboard>   (insertion order)
//! │   └── Vec<PhoneNumber>              (owned, duplicates allowed)
//! └── TrunkGraph                        (undirected, keyed by area code)
//! ```
//!
//! Trunk lines are held once per pair in the graph rather than on each
//! switchboard, so connecting or disconnecting always updates both ends.
//!
//! ## Example
//!
//! ```rust
//! use trunkline_core::{NetworkDirectory, PhoneAddress};
//!
//! let mut directory = NetworkDirectory::new();
//! directory.add_switchboard(410);
//! directory.add_switchboard(443);
//! directory.connect_switchboards(410, 443);
//! directory.add_phone(410, 5551234);
//! directory.add_phone(443, 5559876);
//!
//! let outcome = directory.start_call("410-5551234".parse()?, "443-5559876".parse()?);
//! assert!(outcome.is_connected());
//!
//! directory.end_call(PhoneAddress::new(410, 5551234));
//! # Ok::<(), trunkline_core::Error>(())
//! ```

pub mod directory;
pub mod display;
pub mod error;
pub mod persist;
pub mod phone;
pub mod routing;
pub mod switchboard;
pub mod trunk;

pub use directory::NetworkDirectory;
pub use error::{Error, Result};
pub use persist::Record;
pub use phone::{parse_area_code, AreaCode, LocalNumber, PhoneAddress, PhoneNumber};
pub use routing::{CallFailure, CallOutcome, NO_PATH_MESSAGE};
pub use switchboard::Switchboard;
pub use trunk::TrunkGraph;
