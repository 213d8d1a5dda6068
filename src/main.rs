use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use seabots_nmea::{EncoderConfig, SentenceEncoder, SentenceKind, StateRecord, VesselState};

#[derive(Parser, Debug)]
#[command(name = "seabots-nmea")]
#[command(about = "Encode vessel states as NMEA 0183 sentences", long_about = None)]
struct Args {
    /// JSON-lines file of vessel states (reads stdin when omitted)
    input: Option<PathBuf>,

    /// TOML encoder configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sentences to emit, e.g. "rmc,vtg,hdt" (overrides the configuration file)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    sentences: Vec<SentenceKind>,

    /// Magnetic variation in degrees, east positive (overrides the configuration file)
    #[arg(long, allow_hyphen_values = true)]
    magnetic_variation: Option<f64>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match args.config {
        Some(ref path) => EncoderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EncoderConfig::default(),
    };
    if !args.sentences.is_empty() {
        config.output.sentences = args.sentences.clone();
    }
    if let Some(variation) = args.magnetic_variation {
        config.track.magnetic_variation_deg = variation;
    }

    let encoder = SentenceEncoder::new(&config).context("Invalid encoder configuration")?;
    log::info!(
        "Emitting {:?}, min track speed {} m/s, magnetic variation {}°",
        encoder.sentences(),
        config.track.min_track_speed,
        config.track.magnetic_variation_deg
    );

    let reader: Box<dyn BufRead> = match args.input {
        Some(ref path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let (encoded, skipped) = run_encoding_loop(reader, &encoder, &mut out)?;
    out.flush().context("Failed to flush output")?;

    log::info!("Encoded {} states, skipped {}", encoded, skipped);
    Ok(())
}

fn run_encoding_loop(
    reader: impl BufRead,
    encoder: &SentenceEncoder,
    out: &mut impl Write,
) -> anyhow::Result<(usize, usize)> {
    let mut encoded = 0;
    let mut skipped = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match encode_line(line, encoder) {
            Ok(sentences) => {
                for sentence in sentences {
                    // NMEA lines end in CR LF
                    write!(out, "{}\r\n", sentence).context("Failed to write output")?;
                }
                encoded += 1;
            }
            Err(e) => {
                log::warn!("Skipping line {}: {}", index + 1, e);
                skipped += 1;
            }
        }
    }

    Ok((encoded, skipped))
}

fn encode_line(line: &str, encoder: &SentenceEncoder) -> anyhow::Result<Vec<String>> {
    let record: StateRecord = serde_json::from_str(line).context("Invalid state record")?;
    let state = VesselState::try_from(record)?;
    Ok(encoder.encode(&state)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn rmc_hdt_encoder() -> SentenceEncoder {
        let mut config = EncoderConfig::default();
        config.output.sentences = vec![SentenceKind::Rmc, SentenceKind::Hdt];
        SentenceEncoder::new(&config).unwrap()
    }

    #[test]
    fn test_mixed_input_skips_bad_lines() {
        let input = [
            r#"{"time_ms": 1556222665123, "latitude_deg": 43.2135634, "longitude_deg": 43.018, "velocity_north": 1.4, "yaw_deg": 10.42}"#,
            "not json",
            "",
            r#"{"time_ms": 9223372036854775807, "latitude_deg": 1.0, "longitude_deg": 2.0}"#,
        ]
        .join("\n");

        let mut out = Vec::new();
        let counts = run_encoding_loop(Cursor::new(input), &rmc_hdt_encoder(), &mut out).unwrap();
        assert_eq!(counts, (1, 2));

        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            "$SBRMC,200425.12,A,4312.813,N,04301.079,E,2.7,0.0,250419,0.0,W*46\r\n\
             $SBHDT,10.42,T*34\r\n"
        );
    }

    #[test]
    fn test_empty_input() {
        let mut out = Vec::new();
        let counts = run_encoding_loop(Cursor::new(""), &rmc_hdt_encoder(), &mut out).unwrap();
        assert_eq!(counts, (0, 0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_unreadable_input_fails_the_run() {
        // invalid UTF-8 is an I/O error from `lines()`, not a skipped record
        let mut out = Vec::new();
        let result = run_encoding_loop(
            Cursor::new(vec![0xff, 0xfe, b'\n']),
            &rmc_hdt_encoder(),
            &mut out,
        );
        assert!(result.is_err());
    }
}
