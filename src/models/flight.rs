use serde::{Deserialize, Serialize};

use crate::utils::format::{format_datetime, format_duration};

/// Entry of `GET /flights/flight/departures/{from}/destinations/{to}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_id: i64,
    #[serde(default)]
    pub plane_company_name: String,
    /// `[y, m, d, h, min, s]`
    #[serde(default)]
    pub departure_time: Vec<i64>,
    #[serde(default)]
    pub arrival_time: Vec<i64>,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "departureAirPort", default)]
    pub departure_airport: String,
    #[serde(rename = "departureAirPortCode", default)]
    pub departure_airport_code: String,
    #[serde(rename = "destinationAirPort", default)]
    pub destination_airport: String,
    #[serde(rename = "destinationAirPortCode", default)]
    pub destination_airport_code: String,
}

impl Flight {
    pub fn departure_label(&self) -> String {
        format_datetime(&self.departure_time)
    }

    pub fn arrival_label(&self) -> String {
        format_datetime(&self.arrival_time)
    }

    pub fn duration_label(&self) -> String {
        format_duration(&self.departure_time, &self.arrival_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_formats_backend_flight() {
        let flight: Flight = serde_json::from_str(
            r#"{
                "flightId": 11,
                "planeCompanyName": "Royal Jordanian",
                "departureTime": [2024, 9, 1, 6, 30, 0],
                "arrivalTime": [2024, 9, 1, 10, 5, 0],
                "price": 310,
                "departureAirPort": "Heathrow",
                "departureAirPortCode": "LHR",
                "destinationAirPort": "Queen Alia",
                "destinationAirPortCode": "AMM"
            }"#,
        )
        .unwrap();

        assert_eq!(flight.destination_airport_code, "AMM");
        assert_eq!(flight.departure_label(), "01/09/2024, 06:30:00");
        assert_eq!(flight.duration_label(), "3h 35m");
    }
}
