use chrono::NaiveDate;

pub const DEFAULT_PLAYER: &str = "Tilak Varma";

pub const FORMAT_TEST: &str = "Test";

/// How a subject's innings scores are sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunsModel {
    pub mean: f64,
    pub std_dev: f64,
    // Probability that a score already past 50 is redrawn into the 50..85 band.
    pub fifty_boost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectProfile {
    pub name: String,
    pub career_start: NaiveDate,
    pub career_end: NaiveDate,
    pub formats: Vec<String>,
    pub playing_role: String,
    pub batting_style: String,
    pub bowling_style: String,
    pub nationality: String,
    pub dob: NaiveDate,
    pub biography: String,
    pub image_url: Option<String>,
    pub runs: RunsModel,
}

impl SubjectProfile {
    /// Resolves `name` against the known profiles, falling back to a generic
    /// allrounder. The career of every profile runs up to `today`.
    pub fn lookup(name: &str, today: NaiveDate) -> Self {
        match KNOWN_PROFILES.iter().find(|entry| entry.name == name) {
            Some(entry) => {
                tracing::debug!(player = name, "using known profile");
                entry.build(name, today)
            }
            None => {
                tracing::debug!(player = name, "no profile match, using fallback");
                FALLBACK_PROFILE.build(name, today)
            }
        }
    }

    pub fn is_eligible_format(&self, format: &str) -> bool {
        self.formats.iter().any(|f| f == format)
    }
}

/// Portrait for a known player, if the table has one.
pub fn image_url_for(name: &str) -> Option<&'static str> {
    KNOWN_PROFILES
        .iter()
        .find(|entry| entry.name == name)
        .and_then(|entry| entry.image_url)
}

struct ProfileEntry {
    name: &'static str,
    career_start: (i32, u32, u32),
    formats: &'static [&'static str],
    playing_role: &'static str,
    batting_style: &'static str,
    bowling_style: &'static str,
    nationality: &'static str,
    dob: (i32, u32, u32),
    biography: &'static str,
    image_url: Option<&'static str>,
    runs: RunsModel,
}

impl ProfileEntry {
    fn build(&self, name: &str, today: NaiveDate) -> SubjectProfile {
        SubjectProfile {
            name: name.to_string(),
            career_start: ymd(self.career_start),
            career_end: today,
            formats: self.formats.iter().map(|f| f.to_string()).collect(),
            playing_role: self.playing_role.to_string(),
            batting_style: self.batting_style.to_string(),
            bowling_style: self.bowling_style.to_string(),
            nationality: self.nationality.to_string(),
            dob: ymd(self.dob),
            biography: self.biography.to_string(),
            image_url: self.image_url.map(str::to_string),
            runs: self.runs,
        }
    }
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

const KNOWN_PROFILES: &[ProfileEntry] = &[ProfileEntry {
    name: "Tilak Varma",
    career_start: (2023, 8, 3),
    formats: &["T20I", "ODI"],
    playing_role: "Middle-order Batsman",
    batting_style: "Left-hand bat",
    bowling_style: "Right-arm off-break",
    nationality: "India",
    dob: (2002, 11, 8),
    biography: "Namboori Thakur Tilak Varma is an Indian international cricketer who plays for \
the Indian cricket team. A left-handed batsman and an occasional off-spin bowler, he plays for \
Hyderabad in domestic cricket and for Mumbai Indians in the Indian Premier League (IPL). He was \
a member of the Indian team that won the 2023 Asia Cup.",
    image_url: Some(
        "https://upload.wikimedia.org/wikipedia/commons/thumb/2/23/Tilak_Varma_in_2023.jpg/330px-Tilak_Varma_in_2023.jpg",
    ),
    runs: RunsModel {
        mean: 35.0,
        std_dev: 25.0,
        fifty_boost: Some(0.7),
    },
}];

const FALLBACK_PROFILE: ProfileEntry = ProfileEntry {
    name: "",
    career_start: (2020, 1, 1),
    formats: &["T20I", "ODI", FORMAT_TEST],
    playing_role: "Allrounder",
    batting_style: "Right-hand bat",
    bowling_style: "Right-arm fast-medium",
    nationality: "Unknown",
    dob: (2000, 1, 1),
    biography: "No biography available for this player.",
    image_url: None,
    runs: RunsModel {
        mean: 30.0,
        std_dev: 20.0,
        fifty_boost: None,
    },
};
