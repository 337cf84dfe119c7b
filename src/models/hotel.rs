use serde::{Deserialize, Serialize};

/// Entry of `GET /hotels/hotel/places/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub hotel_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub main_image: String,
}

/// `GET /hotels/{id}/rooms/details`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomDetails {
    pub hotel_name: String,
    pub address: String,
    pub rate: f64,
    pub image_one: String,
    pub image_two: String,
    pub image_three: String,
    pub image_four: String,
    pub description: String,
    /// Per night
    pub price: f64,
    pub hotel_features: Vec<HotelFeature>,
    pub room_features: Vec<RoomFeature>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelFeature {
    pub hotel_features: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomFeature {
    pub room_features: String,
}

/// Stay chosen on the room view and carried to the hotel checkout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StayWindow {
    /// `datetime-local` input values
    pub start: String,
    pub end: String,
    pub nightly_price: f64,
}

impl StayWindow {
    /// Nights between start and end, at least one
    pub fn nights(&self) -> i64 {
        let parse = |v: &str| chrono::NaiveDateTime::parse_from_str(v, "%Y-%m-%dT%H:%M").ok();
        match (parse(&self.start), parse(&self.end)) {
            (Some(start), Some(end)) => (end.date() - start.date()).num_days().max(1),
            _ => 1,
        }
    }

    pub fn total(&self) -> f64 {
        self.nightly_price * self.nights() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_lists_decode() {
        let room: RoomDetails = serde_json::from_str(
            r#"{"hotelName":"Dana Lodge","price":80,"hotelFeatures":[{"hotelFeatures":"Pool"}],"roomFeatures":[]}"#,
        )
        .unwrap();
        assert_eq!(room.hotel_features[0].hotel_features, "Pool");
        assert!(room.room_features.is_empty());
    }

    #[test]
    fn stay_window_counts_nights() {
        let stay = StayWindow {
            start: "2024-08-01T14:00".into(),
            end: "2024-08-04T11:00".into(),
            nightly_price: 80.0,
        };
        assert_eq!(stay.nights(), 3);
        assert_eq!(stay.total(), 240.0);

        let unset = StayWindow {
            nightly_price: 80.0,
            ..StayWindow::default()
        };
        assert_eq!(unset.nights(), 1);
    }
}
