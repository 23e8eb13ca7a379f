use crate::types::{CardError, EventPayload, Result, SelectedSpeaker, SpeakerSelection};
use std::collections::HashSet;
use tracing::{debug, warn};

pub struct SpeakerResolver;

impl SpeakerResolver {
    /// Speaker ids of the requested sessions, in payload session order then
    /// per-session order. The same speaker appears once per session they
    /// speak in.
    pub fn speaker_ids(payload: &EventPayload, session_ids: &[String]) -> Vec<String> {
        let requested: HashSet<&str> = session_ids.iter().map(String::as_str).collect();

        let matched: Vec<_> = payload
            .sessions
            .iter()
            .filter(|session| requested.contains(session.id.as_str()))
            .collect();

        for id in &requested {
            if !matched.iter().any(|session| session.id == *id) {
                warn!("Session {} is not in the payload", id);
            }
        }

        matched
            .into_iter()
            .flat_map(|session| session.speaker_ids.iter().cloned())
            .collect()
    }

    /// Map the requested sessions to the ordered speaker selection. The
    /// position in the returned list is the speaker's index for slot
    /// assignment.
    pub fn resolve(payload: &EventPayload, session_ids: &[String]) -> Result<SpeakerSelection> {
        let selection = Self::speaker_ids(payload, session_ids)
            .into_iter()
            .map(|speaker_id| {
                let speaker = payload
                    .speakers
                    .iter()
                    .find(|speaker| speaker.id == speaker_id)
                    .ok_or_else(|| CardError::Lookup {
                        speaker_id: speaker_id.clone(),
                    })?;

                let image_url = speaker
                    .profile_picture
                    .clone()
                    .ok_or_else(|| CardError::MissingPicture {
                        speaker_id: speaker_id.clone(),
                    })?;

                Ok(SelectedSpeaker {
                    speaker_id,
                    image_url,
                })
            })
            .collect::<Result<SpeakerSelection>>()?;

        debug!("Resolved {} speakers", selection.len());
        Ok(selection)
    }
}
