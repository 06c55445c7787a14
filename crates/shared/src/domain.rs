use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ChampionId);

/// A playable character as listed by the roster source.
///
/// Only `name` drives filtering and sorting; the stats are shown on the grid
/// cards when present. Unknown fields in the source payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Champion {
    pub id: ChampionId,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub hp: Option<f64>,
    #[serde(default)]
    pub armor: Option<f64>,
    #[serde(default)]
    pub attackdamage: Option<f64>,
    #[serde(default)]
    pub movespeed: Option<f64>,
}

impl Champion {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ChampionId(id),
            name: name.into(),
            image_url: None,
            hp: None,
            armor: None,
            attackdamage: None,
            movespeed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_pandascore_payload_ignoring_extra_fields() {
        let raw = r#"{
            "id": 2475,
            "name": "Ahri",
            "image_url": "https://cdn.pandascore.co/images/lol/champion/image/ahri.png",
            "hp": 590.0,
            "armor": 21.0,
            "attackdamage": 53.0,
            "movespeed": 330.0,
            "spellblock": 30.0,
            "videogame_versions": ["14.1.1"]
        }"#;

        let champion: Champion = serde_json::from_str(raw).expect("champion");
        assert_eq!(champion.id, ChampionId(2475));
        assert_eq!(champion.name, "Ahri");
        assert_eq!(champion.movespeed, Some(330.0));
    }

    #[test]
    fn missing_stats_default_to_none() {
        let champion: Champion =
            serde_json::from_str(r#"{"id": 1, "name": "Annie"}"#).expect("champion");
        assert_eq!(champion, Champion::new(1, "Annie"));
    }
}
