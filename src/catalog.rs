//! Token catalog
//!
//! Static seed collection of token records, partitioned into the three
//! dashboard groups (new pairs, final stretch, migrated). Catalog records are
//! immutable for the lifetime of the session; live price movement is layered
//! on top by the market store overlay.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Issuance protocol a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    Pump,
    Mayhem,
    Moonshot,
    #[serde(rename = "Daos.fun")]
    DaosFun,
    Jupiter,
}

impl Protocol {
    pub const ALL: [Protocol; 5] = [
        Protocol::Pump,
        Protocol::Mayhem,
        Protocol::Moonshot,
        Protocol::DaosFun,
        Protocol::Jupiter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Pump => "Pump",
            Protocol::Mayhem => "Mayhem",
            Protocol::Moonshot => "Moonshot",
            Protocol::DaosFun => "Daos.fun",
            Protocol::Jupiter => "Jupiter",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable catalog record for a single token
///
/// Market cap, volume and price are kept in display format ("$3.92K"); the
/// filter/sort engine parses them on demand via [`crate::formatters`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub age: String,
    pub market_cap: String,
    pub volume: String,
    pub price: String,
    pub holders: u32,
    pub likes: u32,
    pub comments: u32,
    pub change5m: f64,
    pub change1h: f64,
    pub change6h: f64,
    pub price_change: f64,
    pub dex_score: String,
    pub fdv: String,
    pub transactions: u32,
    pub protocol: Protocol,
}

/// The static seed catalog, partitioned into the three dashboard groups
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    pub new_pairs: Vec<Token>,
    pub final_stretch: Vec<Token>,
    pub migrated: Vec<Token>,
}

/// Round to one decimal, matching the seed data's display precision
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn seed_token<R: Rng>(
    rng: &mut R,
    id: &str,
    name: &str,
    symbol: &str,
    age: &str,
    market_cap: &str,
    volume: &str,
) -> Token {
    Token {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        image: format!("https://api.dicebear.com/7.x/shapes/svg?seed={}", id),
        age: age.to_string(),
        market_cap: market_cap.to_string(),
        volume: volume.to_string(),
        price: format!("${:.3}", rng.gen::<f64>()),
        holders: rng.gen_range(0..1000),
        likes: rng.gen_range(0..100),
        comments: rng.gen_range(0..50),
        change5m: round1(rng.gen_range(-100.0..100.0)),
        change1h: round1(rng.gen_range(-100.0..100.0)),
        change6h: round1(rng.gen_range(-100.0..100.0)),
        price_change: round1(rng.gen_range(-50.0..50.0)),
        dex_score: format!("{}mo", rng.gen_range(0..5)),
        fdv: format!("0.{}", rng.gen_range(0..9)),
        transactions: rng.gen_range(0..1000),
        protocol: Protocol::ALL[rng.gen_range(0..Protocol::ALL.len())],
    }
}

impl TokenCatalog {
    /// Build the seed catalog
    ///
    /// Names, symbols, ages, caps and volumes are fixed; the auxiliary
    /// display fields are drawn randomly so each session looks distinct.
    pub fn seed() -> Self {
        let mut rng = rand::thread_rng();
        let r = &mut rng;

        Self {
            new_pairs: vec![
                seed_token(r, "1", "BUILD", "BUILD", "6s", "$3.92K", "$535"),
                seed_token(r, "2", "UTC", "UTC", "11s", "$3.61K", "$3"),
                seed_token(r, "3", "TODAY", "today", "27s", "$3.61K", "$3"),
                seed_token(r, "4", "25", "The Christmas Coin", "30s", "$3.83K", "$116"),
                seed_token(r, "5", "Xmas", "XmasCoin", "32s", "$6.52K", "$5K"),
                seed_token(r, "16", "ALPHA", "Alpha", "45s", "$12.5K", "$2.1K"),
                seed_token(r, "17", "BETA", "Beta", "1m", "$8.3K", "$950"),
                seed_token(r, "18", "GAMMA", "Gamma", "2m", "$15.7K", "$3.4K"),
                seed_token(r, "19", "DELTA", "Delta", "3m", "$22.1K", "$5.6K"),
                seed_token(r, "20", "EPSILON", "Epsilon", "5m", "$45.8K", "$12.3K"),
            ],
            final_stretch: vec![
                seed_token(r, "6", "RIZZ", "Rizzbot", "11m", "$22K", "$11K"),
                seed_token(r, "7", "SOLMON", "Solmon", "20s", "$47K", "$12K"),
                seed_token(r, "8", "67xmas", "67xmas", "1m", "$1.26M", "$26K"),
                seed_token(r, "9", "GIGA", "GigaSolana1", "2m", "$977K", "$4K"),
                seed_token(r, "10", "Google", "Google", "8h", "$4.88K", "$11K"),
                seed_token(r, "21", "ZETA", "Zeta", "15m", "$156K", "$45K"),
                seed_token(r, "22", "ETA", "Eta", "22m", "$234K", "$67K"),
                seed_token(r, "23", "THETA", "Theta", "30m", "$389K", "$89K"),
                seed_token(r, "24", "IOTA", "Iota", "45m", "$567K", "$123K"),
                seed_token(r, "25", "KAPPA", "Kappa", "1h", "$789K", "$234K"),
            ],
            migrated: vec![
                seed_token(r, "11", "Monad", "Monad", "0s", "$77.5K", "$19K"),
                seed_token(r, "12", "NVIDIA", "NVIDIA", "10s", "$477K", "$12K"),
                seed_token(r, "13", "Tesla", "Tesla", "20s", "$771K", "$20K"),
                seed_token(r, "14", "NOSTALGIA", "Nostalgia", "44s", "$1.44M", "$28K"),
                seed_token(r, "15", "FIXI", "FIXI", "59s", "$2.35M", "$36K"),
                seed_token(r, "26", "LAMBDA", "Lambda", "2h", "$3.45M", "$890K"),
                seed_token(r, "27", "MU", "Mu", "3h", "$5.67M", "$1.2M"),
                seed_token(r, "28", "NU", "Nu", "5h", "$8.9M", "$2.3M"),
                seed_token(r, "29", "XI", "Xi", "8h", "$12.4M", "$3.8M"),
                seed_token(r, "30", "OMICRON", "Omicron", "12h", "$18.9M", "$5.6M"),
            ],
        }
    }

    /// Union of all three groups, in declaration order
    pub fn all(&self) -> Vec<&Token> {
        self.new_pairs
            .iter()
            .chain(self.final_stretch.iter())
            .chain(self.migrated.iter())
            .collect()
    }

    /// Total number of tokens across all groups
    pub fn len(&self) -> usize {
        self.new_pairs.len() + self.final_stretch.len() + self.migrated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a token by identifier across all groups
    pub fn get(&self, id: &str) -> Option<&Token> {
        self.all().into_iter().find(|t| t.id == id)
    }
}
