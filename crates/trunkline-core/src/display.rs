//! Human-readable directory listing

use std::fmt;

use crate::directory::NetworkDirectory;
use crate::phone::PhoneNumber;

struct PhoneState<'a>(&'a PhoneNumber);

impl fmt::Display for PhoneState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phone = self.0;
        if phone.is_connected() {
            let peer = phone.peer().unwrap_or_else(|| phone.address());
            write!(f, "connected to {}", peer)
        } else {
            f.write_str("not in use")
        }
    }
}

/// One block per switchboard in directory order, each line newline-terminated
impl fmt::Display for NetworkDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for switchboard in self.switchboards() {
            let area = switchboard.area_code();
            writeln!(f, "Switchboard with area code: {}", area)?;

            writeln!(f, "\tTrunk lines are:")?;
            let mut any_lines = false;
            for peer in self.trunk_lines(area) {
                any_lines = true;
                writeln!(f, "\t  Trunk line connection to: {}", peer)?;
            }
            if !any_lines {
                writeln!(f, "\t  No trunk line connections")?;
            }

            writeln!(f, "\tLocal phone numbers are:")?;
            if switchboard.phones().is_empty() {
                writeln!(f, "\t  No local phone numbers")?;
            }
            for phone in switchboard.phones() {
                writeln!(
                    f,
                    "\t  Phone with number: {} is {}",
                    phone.address(),
                    PhoneState(phone)
                )?;
            }
        }
        Ok(())
    }
}
