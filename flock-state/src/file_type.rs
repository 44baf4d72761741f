use serde::{Deserialize, Serialize};

/// The container/codec of a song's underlying file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// The type could not be determined.
    #[default]
    Unknown,
    /// RIFF WAVE.
    Wav,
    /// Native FLAC.
    Flac,
    /// MPEG-4 audio.
    Mp4,
    /// MPEG layer 3.
    Mp3,
    /// Vorbis in an Ogg container.
    OggVorbis,
    /// FLAC in an Ogg container.
    OggFlac,
    /// Speex in an Ogg container.
    OggSpeex,
    /// Opus in an Ogg container.
    OggOpus,
    /// Windows Media / ASF.
    Asf,
    /// AIFF.
    Aiff,
    /// Musepack.
    Mpc,
    /// TrueAudio.
    TrueAudio,
    /// An audio CD track.
    Cdda,
    /// A network stream.
    Stream,
}

impl FileType {
    /// Returns a human-readable label for the file type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Unknown => "Unknown",
            FileType::Wav => "Wav",
            FileType::Flac => "FLAC",
            FileType::Mp4 => "MP4",
            FileType::Mp3 => "MP3",
            FileType::OggVorbis => "Ogg Vorbis",
            FileType::OggFlac => "Ogg FLAC",
            FileType::OggSpeex => "Ogg Speex",
            FileType::OggOpus => "Ogg Opus",
            FileType::Asf => "Windows Media audio",
            FileType::Aiff => "AIFF",
            FileType::Mpc => "MPC",
            FileType::TrueAudio => "TrueAudio",
            FileType::Cdda => "CDDA",
            FileType::Stream => "Stream",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
