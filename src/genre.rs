/// A podcast genre as used by the directory API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub title: &'static str,
}

/// Every genre the directory API tags podcasts with
pub const GENRES: [Genre; 9] = [
    Genre {
        id: 1,
        title: "Personal Growth",
    },
    Genre {
        id: 2,
        title: "Investigative Journalism",
    },
    Genre {
        id: 3,
        title: "History",
    },
    Genre {
        id: 4,
        title: "Comedy",
    },
    Genre {
        id: 5,
        title: "Entertainment",
    },
    Genre {
        id: 6,
        title: "Business",
    },
    Genre {
        id: 7,
        title: "Fiction",
    },
    Genre {
        id: 8,
        title: "News",
    },
    Genre {
        id: 9,
        title: "Kids and Family",
    },
];

impl Genre {
    pub fn by_id(id: u32) -> Option<Genre> {
        GENRES.iter().copied().find(|genre| genre.id == id)
    }

    /// Look up a genre by numeric id or case-insensitive title
    pub fn lookup(input: &str) -> Option<Genre> {
        let input = input.trim();
        if let Ok(id) = input.parse::<u32>() {
            return Self::by_id(id);
        }

        GENRES
            .iter()
            .copied()
            .find(|genre| genre.title.eq_ignore_ascii_case(input))
    }
}

/// Display title for a genre id; unknown ids render as `Genre <id>`
pub fn genre_title(id: u32) -> String {
    match Genre::by_id(id) {
        Some(genre) => genre.title.to_string(),
        None => format!("Genre {id}"),
    }
}
