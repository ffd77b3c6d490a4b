// Static dashboard content. Nothing here is fetched.

pub struct Platform {
    pub name: &'static str,
    pub url: &'static str,
}

pub const PLATFORMS: &[Platform] = &[
    Platform { name: "Netflix", url: "https://www.netflix.com" },
    Platform { name: "Prime Video", url: "https://www.primevideo.com" },
    Platform { name: "Disney+ Hotstar", url: "https://www.hotstar.com" },
    Platform { name: "SonyLIV", url: "https://www.sonyliv.com" },
    Platform { name: "Zee5", url: "https://www.zee5.com" },
    Platform { name: "JioCinema", url: "https://www.jiocinema.com" },
];

pub struct Photo {
    pub title: &'static str,
    pub date: &'static str,
}

pub const PHOTOS: &[Photo] = &[
    Photo { title: "Family Beach Vacation 2024", date: "December 15, 2024" },
    Photo { title: "Mountain Adventure 2023", date: "October 10, 2023" },
    Photo { title: "Family Portrait", date: "August 5, 2023" },
];

pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
}

pub const TRACKS: &[Track] = &[
    Track { title: "Relaxing Evening Jazz", artist: "Smooth Jazz Collective" },
    Track { title: "Lofi Study Beats", artist: "Chillhop Music" },
    Track { title: "Acoustic Morning", artist: "Indie Folk Sessions" },
];

pub struct Match {
    pub league: &'static str,
    pub team1: &'static str,
    pub team2: &'static str,
    pub score1: &'static str,
    pub score2: &'static str,
    pub status: &'static str,
    pub details: &'static str,
}

impl Match {
    pub fn is_live(&self) -> bool {
        self.status == "LIVE"
    }
}

pub const MATCHES: &[Match] = &[
    Match {
        league: "IPL 2024",
        team1: "Mumbai Indians",
        team2: "Chennai Super Kings",
        score1: "185/6",
        score2: "142/8",
        status: "LIVE",
        details: "MI won by 43 runs",
    },
    Match {
        league: "Premier League",
        team1: "Manchester City",
        team2: "Liverpool",
        score1: "3",
        score2: "1",
        status: "FT",
        details: "Goals: Haaland 2, De Bruyne 1",
    },
    Match {
        league: "La Liga",
        team1: "Real Madrid",
        team2: "Barcelona",
        score1: "vs",
        score2: "-",
        status: "18:30",
        details: "El Clasico, Santiago Bernabeu",
    },
];

pub struct Recommendation {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation { title: "The Crown - Season 6", subtitle: "Drama, 2024" },
    Recommendation { title: "Lofi Hip Hop Playlist", subtitle: "Chill, 2 hours" },
    Recommendation { title: "Holiday Photos 2023", subtitle: "147 photos" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NewsCategory {
    #[default]
    General,
    Business,
    Sports,
    Entertainment,
    Technology,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 5] = [
        NewsCategory::General,
        NewsCategory::Business,
        NewsCategory::Sports,
        NewsCategory::Entertainment,
        NewsCategory::Technology,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Business => "business",
            Self::Sports => "sports",
            Self::Entertainment => "entertainment",
            Self::Technology => "technology",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Business => "Business",
            Self::Sports => "Sports",
            Self::Entertainment => "Entertainment",
            Self::Technology => "Technology",
        }
    }

    /// Headline cards shown for the category
    pub fn headlines(self) -> &'static [&'static str] {
        match self {
            Self::General => &[
                "Climate summit concludes with breakthrough agreements",
                "ISRO announces new Mars mission timeline",
                "Monsoon arrives early across the west coast",
            ],
            Self::Business => &[
                "Local startup receives 100 crore funding",
                "Markets close higher for a third straight week",
            ],
            Self::Sports => &[
                "Mumbai Indians clinch thriller against Chennai",
                "City extend lead at the top of the table",
                "El Clasico preview: form guide and team news",
                "National athletics meet sets three new records",
            ],
            Self::Entertainment => &["Award season shortlist announced"],
            Self::Technology => &[
                "Major tech company unveils new smartphone features",
                "Open-source TV launcher hits version 2.0",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

impl Language {
    pub fn next(self) -> Self {
        match self {
            Self::English => Self::Hindi,
            Self::Hindi => Self::Marathi,
            Self::Marathi => Self::English,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::Hindi => "HI",
            Self::Marathi => "MR",
        }
    }

    pub fn welcome(self) -> &'static str {
        match self {
            Self::English => "Welcome to your Smart TV Dashboard!",
            Self::Hindi => "Aapke Smart TV Dashboard mein swagat hai!",
            Self::Marathi => "Tumchya Smart TV Dashboard madhe swagat aahe!",
        }
    }
}

/// Greeting for the hour of the day (0-23)
pub fn greeting(hour: u32) -> (&'static str, &'static str) {
    if hour < 12 {
        ("Good Morning", "Start your day with something amazing")
    } else if hour < 17 {
        ("Good Afternoon", "Hope your day is going great")
    } else {
        ("Good Evening", "Time to relax and unwind")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0).0, "Good Morning");
        assert_eq!(greeting(11).0, "Good Morning");
        assert_eq!(greeting(12).0, "Good Afternoon");
        assert_eq!(greeting(16).0, "Good Afternoon");
        assert_eq!(greeting(17).0, "Good Evening");
        assert_eq!(greeting(23).0, "Good Evening");
    }

    #[test]
    fn test_language_cycle() {
        let lang = Language::default();
        assert_eq!(lang.next(), Language::Hindi);
        assert_eq!(lang.next().next(), Language::Marathi);
        assert_eq!(lang.next().next().next(), Language::English);
    }

    #[test]
    fn test_every_category_has_headlines() {
        for category in NewsCategory::ALL {
            assert!(!category.headlines().is_empty(), "{:?}", category);
        }
    }
}
