//! Seed data and small helpers shared by tests and demo mode.

use serde_json::json;

use super::InMemoryBackend;
use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// Fills `backend` with a small catalog: two categories with songs, two
/// genres with films, and a few comments and reviews.
pub fn seed_catalog(backend: &InMemoryBackend) -> Result<(), ApiError> {
    let folk = backend.insert(
        "category",
        json!({ "name": "Folk", "deskripsi": "Acoustic songwriting", "user_id": 1 }),
    )?;
    let jazz = backend.insert(
        "category",
        json!({ "name": "Jazz", "deskripsi": "Swing, bebop and beyond", "user_id": 1 }),
    )?;

    let songs = [
        ("Blue", "Joni Mitchell", folk),
        ("Pink Moon", "Nick Drake", folk),
        ("So What", "Miles Davis", jazz),
        ("Take Five", "Dave Brubeck", jazz),
    ];
    let mut song_ids = Vec::with_capacity(songs.len());
    for (title, artist, category) in songs {
        song_ids.push(backend.insert(
            "songs",
            json!({ "title": title, "artist": artist, "categoryId": category, "imageUrl": "" }),
        )?);
    }

    let crime = backend.insert(
        "genre",
        json!({ "name": "Crime", "description": "Heists, cops and robbers", "user_id": 1 }),
    )?;
    let scifi = backend.insert(
        "genre",
        json!({ "name": "Science Fiction", "description": "Futures near and far", "user_id": 1 }),
    )?;

    let films = [
        ("Heat", "Michael Mann", crime),
        ("Chinatown", "Roman Polanski", crime),
        ("Solaris", "Andrei Tarkovsky", scifi),
    ];
    let mut film_ids = Vec::with_capacity(films.len());
    for (title, director, genre) in films {
        film_ids.push(backend.insert(
            "films",
            json!({ "title": title, "director": director, "genreId": genre, "imageUrl": "" }),
        )?);
    }

    let comments = [
        (0, "The bank shootout still holds up."),
        (0, "De Niro and Pacino at their best."),
        (2, "Slow, strange and beautiful."),
    ];
    for (film, text) in comments {
        if let Some(film_id) = film_ids.get(film) {
            backend.insert("comment", json!({ "filmId": film_id, "comment": text }))?;
        }
    }

    let reviews = [(0, "A perfect album opener."), (3, "That 5/4 groove never gets old.")];
    for (song, text) in reviews {
        if let Some(song_id) = song_ids.get(song) {
            backend.insert("ulasan", json!({ "songId": song_id, "ulasan": text }))?;
        }
    }

    tracing::info!("Seeded in-memory catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_fills_every_table() {
        let backend = InMemoryBackend::new();
        seed_catalog(&backend).unwrap();
        assert_eq!(backend.len("category"), 2);
        assert_eq!(backend.len("songs"), 4);
        assert_eq!(backend.len("genre"), 2);
        assert_eq!(backend.len("films"), 3);
        assert_eq!(backend.len("comment"), 3);
        assert_eq!(backend.len("ulasan"), 2);
        assert!(backend.calls().is_empty());
    }
}
