use serde::{Deserialize, Serialize};

// Field names on the wire follow the existing client contract, hence the
// mixed casing of `Playlists` and `Songs`.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub secret_code: String,
    #[serde(rename = "username")]
    pub name: String,
    pub email: String,
    #[serde(rename = "Playlists")]
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "playlistid")]
    pub id: String,
    #[serde(rename = "playlistname")]
    pub name: String,
    #[serde(rename = "Songs")]
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "songid")]
    pub id: String,
    #[serde(rename = "songname")]
    pub name: String,
    pub composer: String,
    #[serde(rename = "songurl")]
    pub url: String,
}

/// Registration body. Older clients send `username`, newer ones `name`;
/// when both are present `username` wins.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl RegisterRequest {
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SecretCodeRequest {
    #[serde(default)]
    pub secret_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    #[serde(rename = "playlistname", default)]
    pub name: String,
}

/// Song fields supplied by the client; the id is assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSong {
    #[serde(rename = "songname", default)]
    pub name: String,
    #[serde(default)]
    pub composer: String,
    #[serde(rename = "songurl", default)]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddSongRequest {
    #[serde(default)]
    pub playlist_id: String,
    #[serde(default)]
    pub song: NewSong,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SecretCodeQuery {
    pub secret_code: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlaylistQuery {
    pub secret_code: Option<String>,
    pub playlist_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SongQuery {
    pub secret_code: Option<String>,
    pub playlist_id: Option<String>,
    pub song_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_body(json: &str) -> RegisterRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn register_name_accepts_either_key() {
        assert_eq!(register_body(r#"{"username":"Ann"}"#).display_name(), "Ann");
        assert_eq!(register_body(r#"{"name":"Ann"}"#).display_name(), "Ann");
        assert_eq!(
            register_body(r#"{"username":"Ann","name":"Bob"}"#).display_name(),
            "Ann"
        );
        assert_eq!(
            register_body(r#"{"username":"","name":"Bob"}"#).display_name(),
            "Bob"
        );
        assert_eq!(register_body(r#"{"email":"a@x.com"}"#).display_name(), "");
    }
}
