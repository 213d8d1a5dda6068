pub mod angle;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod nmea;
pub mod pose;

pub use angle::Angle;
pub use config::{EncoderConfig, SentenceKind};
pub use encoder::SentenceEncoder;
pub use error::{NmeaError, Result};
pub use pose::{StateRecord, VesselState};
