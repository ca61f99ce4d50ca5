use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Price text that marks a card as free of charge
pub const FREE_PRICE: &str = "Free";

const TITLE_FIELD: &str = "extensionTitle";
const PRICE_FIELD: &str = "extensionPrice";
const RATING_FIELD: &str = "extensionRating";
const TAGS_FIELD: &str = "tags";

/// One catalog entry as stored in the exchange data file.
///
/// The JSON object is kept exactly as loaded and written back unchanged.
/// Title, price, rating and tags are read-only views extracted at load time;
/// missing or `null` values read as empty text, a rating of 0 and no tags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Card {
    title: String,
    price: String,
    rating: f64,
    tags: Vec<String>,
    raw: Map<String, Value>,
}

impl From<Map<String, Value>> for Card {
    fn from(raw: Map<String, Value>) -> Self {
        let text = |field: &str| match raw.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let rating = match raw.get(RATING_FIELD) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        };

        let tags = match raw.get(TAGS_FIELD) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|tag| tag.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };

        let title = text(TITLE_FIELD);
        let price = text(PRICE_FIELD);

        Self {
            title,
            price,
            rating,
            tags,
            raw,
        }
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl Card {
    /// Create a card with only the listing fields set
    pub fn new(title: &str, price: &str, rating: f64, tags: &[&str]) -> Self {
        let mut raw = Map::new();
        raw.insert(TITLE_FIELD.to_string(), Value::from(title));
        raw.insert(PRICE_FIELD.to_string(), Value::from(price));
        raw.insert(RATING_FIELD.to_string(), Value::from(rating));
        raw.insert(TAGS_FIELD.to_string(), Value::from(tags.to_vec()));
        Self::from(raw)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The card object exactly as loaded
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn is_free(&self) -> bool {
        self.price.trim().eq_ignore_ascii_case(FREE_PRICE)
    }

    /// Integer price used for price sorting (`None` when the text has no digits)
    pub fn price_value(&self) -> Option<i64> {
        normalize_price(&self.price)
    }
}

/// Normalize price text to whole currency units.
///
/// `"Free"` maps to 0, a `$` prefix is stripped, and the leading integer is
/// parsed so `"$12.99"` becomes 12.
pub fn normalize_price(price: &str) -> Option<i64> {
    if price.trim().eq_ignore_ascii_case(FREE_PRICE) {
        return Some(0);
    }

    let amount = match price.split_once('$') {
        Some((_, rest)) => rest.split('$').next().unwrap_or_default(),
        None => price,
    };

    parse_leading_int(amount)
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}
