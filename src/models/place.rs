use serde::{Deserialize, Serialize};

/// Entry of `GET /countries/{id}/places`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub id: i64,
    pub place: String,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub description: String,
}

/// `GET /places/{id}/details`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceDetails {
    pub place: String,
    pub main_image: String,
    pub image_one: String,
    pub image_two: String,
    pub image_three: String,
    pub description: String,
}

impl PlaceDetails {
    pub fn gallery(&self) -> [&str; 3] {
        [&self.image_one, &self.image_two, &self.image_three]
    }
}

/// Entry of `GET /places/place?place=` (name search)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceMatch {
    pub place_id: i64,
    #[serde(default)]
    pub place: String,
}

/// Entry of `GET /places/{id}/airports`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    #[serde(rename = "airPortId")]
    pub id: i64,
    #[serde(rename = "airPortName", default)]
    pub name: String,
}
