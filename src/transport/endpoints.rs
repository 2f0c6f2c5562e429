// Weapi Endpoints
// Paths and parameter sets used by the lyric client

use serde_json::{json, Value};

/// Host every weapi path is served from
pub const HOST: &str = "https://music.163.com";

/// Weapi endpoints used by the lyric client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SongLyric,
    SongDetail,
    AlbumDetail,
    PlaylistDetail,
    Search,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::SongLyric => "/weapi/song/lyric",
            Endpoint::SongDetail => "/weapi/song/detail",
            Endpoint::AlbumDetail => "/weapi/album/detail",
            Endpoint::PlaylistDetail => "/weapi/playlist/detail",
            Endpoint::Search => "/weapi/search/get",
        }
    }

    pub fn url(self) -> String {
        format!("{}{}", HOST, self.path())
    }
}

/// Lyric lookup: original, translated and the other lyric variants
pub fn lyric_params(song_id: &str) -> Value {
    json!({
        "id": song_id,
        "lv": -1,
        "tv": -1,
        "kv": -1,
        "rv": -1,
        "yv": -1,
        "ytv": -1,
        "yrv": -1
    })
}

pub fn song_detail_params(song_id: &str) -> Value {
    json!({ "ids": [song_id] })
}

pub fn album_params(album_id: &str) -> Value {
    json!({ "id": album_id })
}

/// Playlist detail, up to 1000 tracks from the start
pub fn playlist_params(playlist_id: &str) -> Value {
    json!({ "id": playlist_id, "limit": 1000, "offset": 0 })
}

/// Song search (type 1), first 10 hits
pub fn search_params(keyword: &str) -> Value {
    json!({ "s": keyword, "type": 1, "limit": 10, "offset": 0 })
}
