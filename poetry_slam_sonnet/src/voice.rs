// Spoken playback of the winning sonnet.
//
// `Speaker` is the seam between the engine and whatever reads text aloud.
// `SpeechCommand` runs an external program as `<program> -v <voice> <text>`,
// passing each piece as its own argument (no shell), so voice names with
// spaces ("Bad News") and quotes in the text need no escaping. A missing
// program or a non-zero exit is `SlamError::Playback`.

use std::process::Command;

use tracing::info;

use crate::config::VoiceConfig;
use crate::error::SlamError;
use crate::tone::ToneProfile;

pub trait Speaker {
    fn speak(&self, voice: &str, text: &str) -> Result<(), SlamError>;
}

#[derive(Debug, Clone)]
pub struct SpeechCommand {
    program: String,
}

impl SpeechCommand {
    pub fn new(program: impl Into<String>) -> Self {
        SpeechCommand {
            program: program.into(),
        }
    }
}

impl Speaker for SpeechCommand {
    fn speak(&self, voice: &str, text: &str) -> Result<(), SlamError> {
        let status = Command::new(&self.program)
            .args(["-v", voice, text])
            .status()
            .map_err(|e| SlamError::Playback {
                voice: voice.to_string(),
                reason: format!("could not run {}: {e}", self.program),
            })?;
        if !status.success() {
            return Err(SlamError::Playback {
                voice: voice.to_string(),
                reason: format!("{} exited with {status}", self.program),
            });
        }
        Ok(())
    }
}

/// The configured voice for a tone profile.
pub fn voice_for(profile: ToneProfile, voices: &VoiceConfig) -> &str {
    match profile {
        ToneProfile::Positive => &voices.positive,
        ToneProfile::Negative => &voices.negative,
        ToneProfile::Neutral => &voices.neutral,
    }
}

/// Speak `text` in the voice matching `tone`.
pub fn dispatch(
    speaker: &dyn Speaker,
    tone: i64,
    voices: &VoiceConfig,
    text: &str,
) -> Result<(), SlamError> {
    let profile = ToneProfile::from_tone(tone);
    let voice = voice_for(profile, voices);
    info!(tone, ?profile, voice, "speaking sonnet");
    speaker.speak(voice, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl Speaker for Recorder {
        fn speak(&self, voice: &str, text: &str) -> Result<(), SlamError> {
            self.calls.borrow_mut().push((voice.to_string(), text.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_voice_follows_tone_sign() {
        let voices = VoiceConfig::default();
        let recorder = Recorder::default();
        dispatch(&recorder, 3, &voices, "sweet love,").unwrap();
        dispatch(&recorder, -2, &voices, "cold death,").unwrap();
        dispatch(&recorder, 0, &voices, "the day,").unwrap();
        let calls = recorder.calls.into_inner();
        let voices: Vec<&str> = calls.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(voices, ["Vicki", "Bad News", "Samantha"]);
        assert_eq!(calls[1].1, "cold death,");
    }

    #[test]
    fn test_missing_program_is_playback_error() {
        let speaker = SpeechCommand::new("poetry-slam-no-such-speech-program");
        let err = speaker.speak("Vicki", "hello").unwrap_err();
        assert!(matches!(err, SlamError::Playback { ref voice, .. } if voice == "Vicki"));
    }
}
