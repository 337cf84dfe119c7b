use serde::{Deserialize, Serialize};

/// Vacation package card (`GET /countries/{id}/packages`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub id: i64,
    pub package_name: String,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub description: String,
}

/// `GET /packages/{id}/details`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageDetails {
    pub package_name: String,
    pub main_image: String,
    /// Per person
    pub price: f64,
    pub rate: f64,
    pub package_details: PackageGallery,
    pub benefits: Vec<Benefit>,
    pub roadmaps: Vec<Roadmap>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageGallery {
    pub image_one: String,
    pub image_two: String,
    pub image_three: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Benefit {
    pub benefit: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Roadmap {
    pub roadmap: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_gallery_and_lists_decode() {
        let body = r#"{
            "packageName": "Wadi Rum Nights",
            "mainImage": "rum.jpg",
            "price": 450,
            "rate": 4.5,
            "packageDetails": {"imageOne": "1.jpg", "imageTwo": "2.jpg", "imageThree": "3.jpg", "description": "Desert camp"},
            "benefits": [{"benefit": "Jeep tour"}],
            "roadmaps": [{"roadmap": "Day 1: Aqaba"}, {"roadmap": "Day 2: Rum"}]
        }"#;
        let details: PackageDetails = serde_json::from_str(body).unwrap();
        assert_eq!(details.price, 450.0);
        assert_eq!(details.package_details.description, "Desert camp");
        assert_eq!(details.benefits[0].benefit, "Jeep tour");
        assert_eq!(details.roadmaps.len(), 2);
    }
}
