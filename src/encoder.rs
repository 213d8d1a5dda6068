use crate::angle::Angle;
use crate::config::{EncoderConfig, SentenceKind};
use crate::error::Result;
use crate::nmea::{create_hdt, create_rmc, create_vtg};
use crate::pose::VesselState;

/// Turns vessel states into the configured list of framed sentences.
///
/// Holds only immutable settings; encoding the same state twice gives the
/// same sentences.
#[derive(Debug, Clone)]
pub struct SentenceEncoder {
    sentences: Vec<SentenceKind>,
    min_track_speed: f64,
    magnetic_variation: Angle,
}

impl SentenceEncoder {
    pub fn new(config: &EncoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sentences: config.output.sentences.clone(),
            min_track_speed: config.track.min_track_speed,
            magnetic_variation: Angle::from_deg(config.track.magnetic_variation_deg),
        })
    }

    pub fn sentences(&self) -> &[SentenceKind] {
        &self.sentences
    }

    /// Encode one state, one sentence per configured kind in order
    pub fn encode(&self, state: &VesselState) -> Result<Vec<String>> {
        let speed = state.speed_over_ground();
        let track = state.track(self.min_track_speed);

        self.sentences
            .iter()
            .map(|kind| {
                let sentence = match kind {
                    SentenceKind::Rmc => create_rmc(
                        &state.time,
                        state.latitude,
                        state.longitude,
                        speed,
                        track,
                        self.magnetic_variation,
                    )?,
                    SentenceKind::Vtg => create_vtg(track, self.magnetic_track(track), speed)?,
                    SentenceKind::Hdt => create_hdt(state.yaw)?,
                };
                log::debug!("{}: {}", kind, sentence);
                Ok(sentence)
            })
            .collect()
    }

    /// Magnetic track from true track; easterly variation is positive
    fn magnetic_track(&self, track: Angle) -> Angle {
        Angle::from_rad(track.rad() - self.magnetic_variation.rad())
    }
}
