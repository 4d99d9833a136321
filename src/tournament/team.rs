// Teams and the rosters that supply them

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Strength assumed for teams that don't carry one
pub const DEFAULT_STRENGTH: f32 = 0.8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColors {
    /// Hex colour, e.g. "#FF0000"
    pub primary: String,
    pub secondary: String,
}

impl Default for TeamColors {
    fn default() -> Self {
        Self {
            primary: "#FFFFFF".to_string(),
            secondary: "#000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub colors: TeamColors,
    #[serde(default)]
    pub logo: Option<String>,
    /// Only used when the computer plays both sides
    #[serde(default)]
    pub strength: Option<f32>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            colors: TeamColors::default(),
            logo: None,
            strength: None,
        }
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_colors(mut self, primary: &str, secondary: &str) -> Self {
        self.colors = TeamColors {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        };
        self
    }

    pub fn strength_or_default(&self) -> f32 {
        match self.strength {
            Some(s) if s.is_finite() && s > 0.0 => s,
            _ => DEFAULT_STRENGTH,
        }
    }
}

/// Supplies candidate teams for a tournament draw
pub trait TeamSource {
    fn teams(&self, rng: &mut dyn RngCore) -> Vec<Team>;
}

const PLACEHOLDER_COLORS: [(&str, &str); 8] = [
    ("Red", "#FF0000"),
    ("Blue", "#0000FF"),
    ("Green", "#00FF00"),
    ("Yellow", "#FFFF00"),
    ("Purple", "#800080"),
    ("Orange", "#FFA500"),
    ("White", "#FFFFFF"),
    ("Black", "#000000"),
];

const PLACEHOLDER_ANIMALS: [&str; 8] = [
    "Lions", "Tigers", "Eagles", "Bears", "Wolves", "Panthers", "Dragons", "Knights",
];

/// Colour-and-animal team used to fill an under-supplied draw
pub fn placeholder_team(index: usize, rng: &mut (impl Rng + ?Sized)) -> Team {
    let (color, hex) = PLACEHOLDER_COLORS[index % PLACEHOLDER_COLORS.len()];
    let animal = PLACEHOLDER_ANIMALS[(index / PLACEHOLDER_COLORS.len()) % PLACEHOLDER_ANIMALS.len()];

    Team::new(format!("placeholder-{}", index), format!("{} {}", color, animal), "International")
        .with_colors(hex, "#FFFFFF")
        .with_strength(rng.gen_range(0.6..1.0))
}

/// Roster of placeholder teams, the default when no real roster is wired in
#[derive(Debug, Clone)]
pub struct PlaceholderRoster {
    count: usize,
}

impl PlaceholderRoster {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for PlaceholderRoster {
    fn default() -> Self {
        Self::new(31)
    }
}

impl TeamSource for PlaceholderRoster {
    fn teams(&self, rng: &mut dyn RngCore) -> Vec<Team> {
        (0..self.count).map(|i| placeholder_team(i, &mut *rng)).collect()
    }
}

/// A national league whose clubs get generated on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub name: &'static str,
    pub country: &'static str,
    pub color: &'static str,
}

pub const LEAGUES: [League; 12] = [
    League { name: "Premier League", country: "England", color: "#3D195B" },
    League { name: "La Liga", country: "Spain", color: "#FF7E00" },
    League { name: "Bundesliga", country: "Germany", color: "#D20515" },
    League { name: "Serie A", country: "Italy", color: "#008FD7" },
    League { name: "Ligue 1", country: "France", color: "#091C3E" },
    League { name: "Eredivisie", country: "Netherlands", color: "#FF6600" },
    League { name: "Primeira Liga", country: "Portugal", color: "#00923F" },
    League { name: "Super League", country: "Turkey", color: "#E30613" },
    League { name: "Pro League", country: "Belgium", color: "#000000" },
    League { name: "Super League", country: "Switzerland", color: "#CF0000" },
    League { name: "Premier League", country: "Scotland", color: "#0066B3" },
    League { name: "Eliteserien", country: "Norway", color: "#003399" },
];

const CITY_PREFIXES: [&str; 10] = [
    "North", "South", "East", "West", "New", "Old", "Upper", "Lower", "Great", "Little",
];
const CITY_ROOTS: [&str; 20] = [
    "Brook", "River", "Lake", "Hill", "Mount", "Vale", "Dale", "Green", "Red", "Blue", "Black",
    "White", "Gold", "Silver", "Iron", "Stone", "Rock", "Oak", "Elm", "Pine",
];
const CITY_SUFFIXES: [&str; 10] = [
    "town", "city", "burg", "ville", "haven", "port", "field", "wood", "ford", "bridge",
];
const CLUB_COLORS: [&str; 16] = [
    "#FF0000", "#0000FF", "#008000", "#FFFF00", "#FFA500", "#800080", "#000000", "#FFFFFF",
    "#00FFFF", "#FF00FF", "#A52A2A", "#808080", "#FFD700", "#C0C0C0", "#800000", "#008080",
];

/// Clubs named after made-up cities, one batch per league
#[derive(Debug, Clone)]
pub struct GeneratedLeague {
    leagues: Vec<League>,
    clubs_per_league: usize,
}

impl GeneratedLeague {
    pub fn new(leagues: Vec<League>, clubs_per_league: usize) -> Self {
        Self {
            leagues,
            clubs_per_league,
        }
    }

    /// Every known league with 30 clubs each
    pub fn all() -> Self {
        Self::new(LEAGUES.to_vec(), 30)
    }

    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }
}

impl TeamSource for GeneratedLeague {
    fn teams(&self, rng: &mut dyn RngCore) -> Vec<Team> {
        let mut teams = Vec::new();
        for league in &self.leagues {
            for (i, city) in city_names(self.clubs_per_league, &mut *rng).into_iter().enumerate() {
                let name = format!("{} {}", city, club_suffix(league.country));
                let mut colors = CLUB_COLORS.choose_multiple(&mut *rng, 2);
                let primary = colors.next().copied().unwrap_or("#FFFFFF");
                let secondary = colors.next().copied().unwrap_or("#000000");

                teams.push(
                    Team::new(
                        format!("{}-{}", league.country.to_lowercase(), i),
                        name,
                        league.country,
                    )
                    .with_colors(primary, secondary),
                );
            }
        }
        teams
    }
}

fn club_suffix(country: &str) -> &'static str {
    match country {
        "Spain" => "CF",
        "Germany" => "SV",
        "Italy" => "AC",
        "France" => "AS",
        _ => "FC",
    }
}

/// Distinct city names, at most as many as the name parts allow
fn city_names(count: usize, rng: &mut dyn RngCore) -> Vec<String> {
    let mut cities: Vec<String> = Vec::with_capacity(count);
    let mut attempts = 0;

    while cities.len() < count && attempts < count * 50 {
        attempts += 1;
        let prefix = CITY_PREFIXES[rng.gen_range(0..CITY_PREFIXES.len())];
        let root = CITY_ROOTS[rng.gen_range(0..CITY_ROOTS.len())];
        let suffix = CITY_SUFFIXES[rng.gen_range(0..CITY_SUFFIXES.len())];

        let city = match rng.gen_range(0..3) {
            0 => format!("{} {}{}", prefix, root, suffix),
            1 => format!("{}{}", root, suffix),
            _ => format!("{} {}", prefix, root),
        };

        if !cities.contains(&city) {
            cities.push(city);
        }
    }
    cities
}
