use serde::{Deserialize, Serialize};

/// Entry of `GET /countries` (hero carousel slide)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub id: i64,
    pub country: String,
    #[serde(default)]
    pub main_image: String,
}

/// `GET /countries/{id}/details`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryDetails {
    pub country: String,
    pub country_main_image: String,
    pub image_one: String,
    pub image_two: String,
    pub image_three: String,
    pub description: String,
}

impl CountryDetails {
    pub fn gallery(&self) -> [&str; 3] {
        [&self.image_one, &self.image_two, &self.image_three]
    }
}
