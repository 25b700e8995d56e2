//! Audio playback via rodio.
//!
//! One stoppable, queryable sink for dialogue voice clips, plus
//! fire-and-forget playback for short UI sounds. A machine without an
//! audio device degrades to silence instead of failing.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

pub struct AudioOutput {
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    voice_sink: Option<Sink>,
    /// Clip paths already reported as unreadable, to keep the per-frame
    /// retry loop from spamming the log
    reported_bad: HashSet<String>,
}

impl AudioOutput {
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                _stream: Some(stream),
                handle: Some(handle),
                voice_sink: None,
                reported_bad: HashSet::new(),
            },
            Err(err) => {
                log::warn!("no audio device available, running silent: {err}");
                Self::disabled()
            }
        }
    }

    /// An instance with no output device; playback calls are no-ops.
    pub fn disabled() -> Self {
        Self {
            _stream: None,
            handle: None,
            voice_sink: None,
            reported_bad: HashSet::new(),
        }
    }

    /// Is a voice clip still playing on the dialogue sink?
    pub fn is_voice_playing(&self) -> bool {
        self.voice_sink.as_ref().map_or(false, |sink| !sink.empty())
    }

    /// Start a voice clip, replacing whatever the sink held before.
    pub fn play_voice(&mut self, path: &str) {
        let Some(handle) = self.handle.clone() else {
            return;
        };
        let Some(source) = self.open_clip(path) else {
            return;
        };
        match Sink::try_new(&handle) {
            Ok(sink) => {
                sink.append(source);
                self.voice_sink = Some(sink);
            }
            Err(err) => log::error!("failed to create voice sink: {err}"),
        }
    }

    pub fn stop_voice(&mut self) {
        if let Some(sink) = self.voice_sink.take() {
            sink.stop();
        }
    }

    /// Play a short UI sound without tracking it.
    pub fn play_oneshot(&mut self, path: &str) {
        let Some(handle) = self.handle.clone() else {
            return;
        };
        let Some(source) = self.open_clip(path) else {
            return;
        };
        if let Err(err) = handle.play_raw(source.convert_samples()) {
            log::error!("failed to play '{path}': {err}");
        }
    }

    fn open_clip(&mut self, path: &str) -> Option<Decoder<BufReader<File>>> {
        let open_result = File::open(path)
            .map_err(|e| e.to_string())
            .and_then(|file| Decoder::new(BufReader::new(file)).map_err(|e| e.to_string()));
        match open_result {
            Ok(decoder) => Some(decoder),
            Err(err) => {
                if self.reported_bad.insert(path.to_string()) {
                    log::error!("cannot load audio clip '{path}': {err}");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_output_is_inert() {
        let mut audio = AudioOutput::disabled();
        assert!(!audio.is_voice_playing());
        audio.play_voice("assets/voices/nope.ogg");
        assert!(!audio.is_voice_playing());
        audio.stop_voice();
        audio.play_oneshot("assets/sounds/nope.ogg");
    }
}
