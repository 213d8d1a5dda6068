//! NMEA 0183 sentence encoding.
//!
//! Every function here is pure: identical inputs give byte-identical
//! sentences. Framed sentences look like `$<payload>*<checksum>` and carry no
//! `\r\n` terminator; appending one is left to whoever transmits them.
//!
//! Talker and sentence identifiers are the vendor-style `SBVTG`, `SBHDT` and
//! `SBRMC`, not the standard `GP`/`HE` talkers.

mod format;
mod package;
mod sentences;

pub use self::format::{format_angle_dms, format_general, heading_to_nmea, split_time_and_date};
pub use self::package::{checksum_byte, compute_checksum, create_package, verify_package};
pub use self::sentences::{create_hdt, create_rmc, create_vtg};
