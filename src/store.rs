//! In-memory user, playlist and song storage.
//!
//! A single [`Store`] is built at startup and shared by every request worker.
//! All collections and id counters sit behind one mutex, so each operation is
//! an atomic read-modify-write and no update is lost between concurrent
//! requests touching the same user.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::auth::generate_secret_code;
use crate::error::{AppError, Result};
use crate::models::{NewSong, Playlist, Song, User};
use crate::utils::Sequence;

#[derive(Debug, Default)]
pub struct Store {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Users keyed by secret code.
    users: HashMap<String, User>,
    user_ids: Sequence,
    playlist_ids: Sequence,
    song_ids: Sequence,
}

impl Inner {
    fn user_mut(&mut self, secret_code: &str) -> Result<&mut User> {
        self.users
            .get_mut(secret_code)
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    fn playlist_mut(&mut self, secret_code: &str, playlist_id: &str) -> Result<&mut Playlist> {
        self.user_mut(secret_code)?
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| AppError::not_found("Playlist not found"))
    }

    fn unused_secret_code(&self) -> String {
        loop {
            let code = generate_secret_code();
            if !self.users.contains_key(&code) {
                return code;
            }
            tracing::debug!("secret code collision, regenerating");
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("Internal server error".to_string()))
    }

    pub fn register(&self, name: &str, email: &str) -> Result<User> {
        if name.is_empty() || email.is_empty() {
            return Err(AppError::validation("Name and email are required fields"));
        }

        let mut inner = self.lock()?;
        let user = User {
            id: inner.user_ids.next_id(),
            secret_code: inner.unused_secret_code(),
            name: name.to_string(),
            email: email.to_string(),
            playlists: Vec::new(),
        };
        inner.users.insert(user.secret_code.clone(), user.clone());

        tracing::info!(user_id = %user.id, "registered user");
        Ok(user)
    }

    pub fn authenticate(&self, secret_code: &str) -> Result<User> {
        let mut inner = self.lock()?;
        let user = inner.user_mut(secret_code)?;
        Ok(user.clone())
    }

    pub fn find_for_profile(&self, secret_code: &str) -> Result<Vec<Playlist>> {
        let mut inner = self.lock()?;
        let user = inner.user_mut(secret_code)?;
        Ok(user.playlists.clone())
    }

    pub fn create_playlist(&self, secret_code: &str, name: &str) -> Result<Playlist> {
        let mut inner = self.lock()?;
        // Resolve the user before consuming an id so failed calls leave no gap.
        inner.user_mut(secret_code)?;
        let playlist = Playlist {
            id: inner.playlist_ids.next_id(),
            name: name.to_string(),
            songs: Vec::new(),
        };
        let user = inner.user_mut(secret_code)?;
        user.playlists.push(playlist.clone());

        tracing::info!(user_id = %user.id, playlist_id = %playlist.id, "created playlist");
        Ok(playlist)
    }

    pub fn list_songs(&self, secret_code: &str, playlist_id: &str) -> Result<Vec<Song>> {
        let mut inner = self.lock()?;
        let playlist = inner.playlist_mut(secret_code, playlist_id)?;
        Ok(playlist.songs.clone())
    }

    /// Appends a song and returns the playlist as it stands afterwards.
    pub fn add_song(
        &self,
        secret_code: &str,
        playlist_id: &str,
        song: NewSong,
    ) -> Result<Playlist> {
        if song.name.is_empty() || song.composer.is_empty() || song.url.is_empty() {
            return Err(AppError::validation("Invalid input data"));
        }

        let mut inner = self.lock()?;
        inner.playlist_mut(secret_code, playlist_id)?;
        let song = Song {
            id: inner.song_ids.next_id(),
            name: song.name,
            composer: song.composer,
            url: song.url,
        };
        let playlist = inner.playlist_mut(secret_code, playlist_id)?;
        tracing::info!(playlist_id = %playlist.id, song_id = %song.id, "added song");
        playlist.songs.push(song);
        Ok(playlist.clone())
    }

    pub fn delete_song(&self, secret_code: &str, playlist_id: &str, song_id: &str) -> Result<()> {
        let mut inner = self.lock()?;
        let playlist = inner.playlist_mut(secret_code, playlist_id)?;
        let index = playlist
            .songs
            .iter()
            .position(|s| s.id == song_id)
            .ok_or_else(|| AppError::not_found("Song not found in playlist"))?;
        playlist.songs.remove(index);

        tracing::info!(playlist_id, song_id, "deleted song");
        Ok(())
    }

    pub fn delete_playlist(&self, secret_code: &str, playlist_id: &str) -> Result<()> {
        let mut inner = self.lock()?;
        let user = inner.user_mut(secret_code)?;
        let index = user
            .playlists
            .iter()
            .position(|p| p.id == playlist_id)
            .ok_or_else(|| AppError::not_found("Playlist not found"))?;
        user.playlists.remove(index);

        tracing::info!(user_id = %user.id, playlist_id, "deleted playlist");
        Ok(())
    }

    pub fn song_detail(&self, secret_code: &str, playlist_id: &str, song_id: &str) -> Result<Song> {
        let mut inner = self.lock()?;
        let playlist = inner.playlist_mut(secret_code, playlist_id)?;
        let song = playlist
            .songs
            .iter()
            .find(|s| s.id == song_id)
            .ok_or_else(|| AppError::not_found("Song not found in playlist"))?;
        Ok(song.clone())
    }
}
