use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One movie record in the catalog. `id` is assigned by the store at
/// creation and never supplied by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// A validated creation payload, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// A validated partial update. Only the fields that were present in the
/// request body are `Some`; everything else is left untouched on merge.
#[derive(Debug, Clone, Default)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct MovieListQuery {
    pub genre: Option<String>,
}

/// The closed set of accepted genres. Serialized names are the canonical
/// spellings; `parse` is case-sensitive, matching the wire contract for
/// movie payloads (the list-endpoint genre filter is the one place where
/// comparison is case-insensitive, see the repository).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Romance,
    Thriller,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::Thriller,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Action" => Some(Self::Action),
            "Adventure" => Some(Self::Adventure),
            "Comedy" => Some(Self::Comedy),
            "Drama" => Some(Self::Drama),
            "Fantasy" => Some(Self::Fantasy),
            "Horror" => Some(Self::Horror),
            "Romance" => Some(Self::Romance),
            "Thriller" => Some(Self::Thriller),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Romance => "Romance",
            Self::Thriller => "Thriller",
        }
    }
}
