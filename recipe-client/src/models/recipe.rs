use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} ({})", name, amount)]
pub struct Ingredient {
    pub name: String,
    #[serde(deserialize_with = "amount_from_number_or_string")]
    pub amount: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<f64>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("{} - {} [{} ingredients]", name, description, ingredients.len())]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub image_path: String,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_path: impl Into<String>,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_path: image_path.into(),
            ingredients,
        }
    }
}

/// Recipe as stored by the backend, which drops empty ingredient lists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            name: record.name,
            description: record.description,
            image_path: record.image_path,
            ingredients: record.ingredients.unwrap_or_default(),
        }
    }
}

pub fn normalize_recipes(records: Vec<RecipeRecord>) -> Vec<Recipe> {
    records.into_iter().map(Recipe::from).collect()
}

/// Decodes the body of a recipe-collection GET.
///
/// An empty database answers with `null`. Deleted entries leave `null` holes,
/// and a sparse list may come back as an object keyed by index. Entries that
/// cannot be decoded are skipped so one bad record does not lose the rest.
pub fn decode_recipe_records(body: Value) -> Vec<RecipeRecord> {
    let entries = match body {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(map) => {
            let mut keyed: Vec<(usize, Value)> = map
                .into_iter()
                .map(|(key, value)| (key.parse().unwrap_or(usize::MAX), value))
                .collect();
            keyed.sort_by_key(|(index, _)| *index);
            keyed.into_iter().map(|(_, value)| value).collect()
        }
        other => {
            warn!(body = %other, "unexpected recipe collection body");
            Vec::new()
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter(|(_, entry)| !entry.is_null())
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable recipe");
                None
            }
        })
        .collect()
}

// Form input used to be persisted verbatim, so amounts show up as "5" as well as 5.
fn amount_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
