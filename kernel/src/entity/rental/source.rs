use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Acquisition channel of a rental. Wire and database values are the
/// Russian strings the business uses.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RentalSource {
    #[serde(rename = "авито")]
    Avito,
    #[serde(rename = "сайт")]
    Website,
    #[serde(rename = "рекомендация")]
    Referral,
    #[serde(rename = "карты")]
    Maps,
}

impl RentalSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalSource::Avito => "авито",
            RentalSource::Website => "сайт",
            RentalSource::Referral => "рекомендация",
            RentalSource::Maps => "карты",
        }
    }
}

impl FromStr for RentalSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "авито" => Ok(RentalSource::Avito),
            "сайт" => Ok(RentalSource::Website),
            "рекомендация" => Ok(RentalSource::Referral),
            "карты" => Ok(RentalSource::Maps),
            other => Err(format!("unknown rental source: {other}")),
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::RentalSource;

    #[test]
    fn round_trips_wire_strings() {
        for source in [
            RentalSource::Avito,
            RentalSource::Website,
            RentalSource::Referral,
            RentalSource::Maps,
        ] {
            assert_eq!(RentalSource::from_str(source.as_str()), Ok(source));
        }
    }

    #[test]
    fn serializes_as_russian_strings() {
        let json = serde_json::to_string(&RentalSource::Avito).unwrap();
        assert_eq!(json, "\"авито\"");
        let back: RentalSource = serde_json::from_str("\"сайт\"").unwrap();
        assert_eq!(back, RentalSource::Website);
    }
}
