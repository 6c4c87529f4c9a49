//! # Network file format
//!
//! A network is saved as one record per line, whitespace separated:
//!
//! ```text
//! SWITCHBOARD <area>
//! CONNECT <area1> <area2>
//! PHONE <area>-<number>
//! ```
//!
//! Each switchboard is written as its `SWITCHBOARD` record, then one `CONNECT`
//! per trunk-line peer, then one `PHONE` per attached phone. A trunk line is
//! therefore written twice, once from each end. Loading the second copy is a
//! no-op.
//!
//! A `CONNECT` may name a switchboard declared further down the file. It is
//! held until both ends have their `SWITCHBOARD` record, and the load fails if
//! an end is still undeclared at end of input. A `PHONE` must follow the
//! `SWITCHBOARD` of its area code.
//!
//! The format has no busy/idle flag, so every phone comes back idle.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::directory::NetworkDirectory;
use crate::error::{Error, Result};
use crate::phone::{parse_area_code, AreaCode, PhoneAddress};

const SWITCHBOARD: &str = "SWITCHBOARD";
const CONNECT: &str = "CONNECT";
const PHONE: &str = "PHONE";

/// One line of a network file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Switchboard(AreaCode),
    Connect(AreaCode, AreaCode),
    Phone(PhoneAddress),
}

impl Record {
    /// Parse one line. Blank lines and unknown leading tokens yield `None`.
    ///
    /// Tokens past the ones a record needs are ignored.
    pub fn parse(line: &str, line_number: usize) -> Result<Option<Record>> {
        let mut tokens = line.split_whitespace();
        let Some(tag) = tokens.next() else {
            return Ok(None);
        };

        let mut field = |name: &str| {
            tokens.next().ok_or_else(|| Error::MalformedRecord {
                line: line_number,
                reason: format!("{} record is missing its {}", tag, name),
            })
        };
        let malformed = |e: Error| Error::MalformedRecord {
            line: line_number,
            reason: e.to_string(),
        };

        let record = match tag {
            SWITCHBOARD => {
                let area = parse_area_code(field("area code")?).map_err(malformed)?;
                Record::Switchboard(area)
            }
            CONNECT => {
                let a = field("first area code")?;
                let b = field("second area code")?;
                Record::Connect(
                    parse_area_code(a).map_err(malformed)?,
                    parse_area_code(b).map_err(malformed)?,
                )
            }
            PHONE => {
                let address = field("number")?
                    .parse::<PhoneAddress>()
                    .map_err(malformed)?;
                Record::Phone(address)
            }
            other => {
                debug!(line = line_number, tag = other, "skipping unknown record");
                return Ok(None);
            }
        };
        Ok(Some(record))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Switchboard(area) => write!(f, "{} {}", SWITCHBOARD, area),
            Record::Connect(a, b) => write!(f, "{} {} {}", CONNECT, a, b),
            Record::Phone(address) => write!(f, "{} {}", PHONE, address),
        }
    }
}

/// A `CONNECT` read before one of its switchboards
#[derive(Debug, Clone, Copy)]
struct DeferredConnect {
    line: usize,
    a: AreaCode,
    b: AreaCode,
}

impl DeferredConnect {
    fn undeclared(&self, directory: &NetworkDirectory) -> Option<AreaCode> {
        [self.a, self.b].into_iter().find(|area| !directory.contains(*area))
    }
}

impl NetworkDirectory {
    /// Records describing this directory, in file order
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.switchboards().flat_map(move |sb| {
            let area = sb.area_code();
            std::iter::once(Record::Switchboard(area))
                .chain(self.trunk_lines(area).map(move |peer| Record::Connect(area, peer)))
                .chain(sb.phones().iter().map(|p| Record::Phone(p.address())))
        })
    }

    /// Write the network file format to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for record in self.records() {
            writeln!(writer, "{}", record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Save the directory to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        info!(
            path = %path.display(),
            switchboards = self.len(),
            trunk_lines = self.trunks().line_count(),
            phones = self.phone_count(),
            "network saved"
        );
        Ok(())
    }

    /// Reset this directory and rebuild it from `reader`.
    ///
    /// On error the directory holds whatever was read before the bad record.
    pub fn read_into<R: BufRead>(&mut self, reader: R) -> Result<()> {
        self.clear();
        let mut deferred = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let Some(record) = Record::parse(&line?, line_number)? else {
                continue;
            };
            self.apply(record, line_number, &mut deferred)?;
        }

        match deferred.first() {
            Some(connect) => Err(Error::UndeclaredSwitchboard {
                line: connect.line,
                area_code: connect.undeclared(self).unwrap_or(connect.a),
            }),
            None => Ok(()),
        }
    }

    fn apply(
        &mut self,
        record: Record,
        line_number: usize,
        deferred: &mut Vec<DeferredConnect>,
    ) -> Result<()> {
        match record {
            Record::Switchboard(area) => {
                if self.redeclare_switchboard(area) {
                    warn!(line = line_number, area, "switchboard declared twice, replacing");
                }
                let (ready, waiting): (Vec<_>, Vec<_>) = deferred
                    .drain(..)
                    .partition(|connect| connect.undeclared(self).is_none());
                *deferred = waiting;
                for connect in ready {
                    self.trunks.connect(connect.a, connect.b);
                }
            }
            Record::Connect(a, b) => {
                let connect = DeferredConnect { line: line_number, a, b };
                match connect.undeclared(self) {
                    Some(area) => {
                        debug!(
                            line = line_number,
                            area, "holding trunk line until switchboard is declared"
                        );
                        deferred.push(connect);
                    }
                    None => {
                        self.trunks.connect(a, b);
                    }
                }
            }
            Record::Phone(address) => {
                if !self.add_phone(address.area_code, address.local_number) {
                    return Err(Error::UndeclaredSwitchboard {
                        line: line_number,
                        area_code: address.area_code,
                    });
                }
            }
        }
        Ok(())
    }

    /// Build a new directory from a network file
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut directory = Self::new();
        directory.read_into(reader)?;
        Ok(directory)
    }

    /// Load a network file into a new directory.
    ///
    /// Use this to replace a live directory only when the whole file parses.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let directory = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            switchboards = directory.len(),
            trunk_lines = directory.trunks().line_count(),
            phones = directory.phone_count(),
            "network loaded"
        );
        Ok(directory)
    }

    /// Reset this directory and reload it from `path` in place.
    ///
    /// There is no partial-state guarantee: a bad record leaves the directory
    /// holding the records before it.
    pub fn reload_from(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::open(path.as_ref())?;
        self.read_into(BufReader::new(file))
    }
}
