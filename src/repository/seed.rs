use crate::models::{Currency, Listing};
use chrono::{DateTime, TimeZone, Utc};

// Only called with constant calendar dates, so `single()` always has a value.
fn posted(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0)
        .single()
        .expect("seed dates are valid")
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    description: &str,
    location: &str,
    category: &str,
    price: f64,
    currency: Currency,
    condition: Option<&str>,
    posted_date: DateTime<Utc>,
    seller_id: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        category: category.to_string(),
        price,
        currency,
        condition: condition.map(str::to_string),
        posted_date,
        seller_id: Some(seller_id.to_string()),
        images: vec![],
    }
}

/// Sample catalogue used to seed an empty store
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "VW Golf 7 1.6 TDI",
            "Prvi vlasnik, servisna knjiga, registrovan do avgusta.",
            "Novi Sad",
            "vozila",
            12_500.0,
            Currency::Eur,
            Some("polovno"),
            posted(3, 1, 10),
            "u1",
        ),
        listing(
            "2",
            "Audi A4 Avant",
            "Automatik, navigacija, kuka za prikolicu.",
            "Beograd",
            "vozila",
            14_200.0,
            Currency::Eur,
            Some("polovno"),
            posted(3, 5, 9),
            "u2",
        ),
        listing(
            "3",
            "BMW 320d",
            "Sportski paket, zimske gume na felnama.",
            "Kragujevac",
            "vozila",
            21_000.0,
            Currency::Eur,
            Some("polovno"),
            posted(3, 9, 18),
            "u2",
        ),
        listing(
            "4",
            "Dvosoban stan na Limanu",
            "54 m2, treći sprat, lift, terasa. Useljiv odmah.",
            "Novi Sad",
            "nekretnine",
            98_000.0,
            Currency::Eur,
            None,
            posted(2, 20, 12),
            "u3",
        ),
        listing(
            "5",
            "Garsonjera za izdavanje",
            "Namešten stan blizu Tržnog centra, grejanje uključeno.",
            "Niš",
            "nekretnine",
            0.0,
            Currency::Eur,
            None,
            posted(3, 2, 8),
            "u1",
        ),
        listing(
            "6",
            "iPhone 13 128GB",
            "Baterija 89%, kutija i punjač.",
            "Beograd",
            "elektronika",
            52_000.0,
            Currency::Rsd,
            Some("polovno"),
            posted(3, 10, 20),
            "u4",
        ),
        listing(
            "7",
            "Samsung Galaxy S23",
            "Nov, neotpakovan, garancija dve godine.",
            "Novi Sad",
            "elektronika",
            780.0,
            Currency::Eur,
            Some("novo"),
            posted(3, 10, 20),
            "u5",
        ),
        listing(
            "8",
            "Laptop Lenovo ThinkPad T14",
            "Ryzen 7, 16GB RAM, 512GB SSD.",
            "Subotica",
            "elektronika",
            65_000.0,
            Currency::Rsd,
            Some("polovno"),
            posted(2, 28, 14),
            "u4",
        ),
        listing(
            "9",
            "Trosed na razvlačenje",
            "Siva štofana presvlaka, bez oštećenja.",
            "Niš",
            "namestaj",
            15_000.0,
            Currency::Rsd,
            Some("polovno"),
            posted(1, 15, 11),
            "u3",
        ),
        listing(
            "10",
            "Trpezarijski sto i šest stolica",
            "Masivno drvo, hrast.",
            "Kragujevac",
            "namestaj",
            350.0,
            Currency::Eur,
            Some("polovno"),
            posted(2, 2, 16),
            "u6",
        ),
        listing(
            "11",
            "Bicikl Capriolo MTB",
            "Točkovi 29, Shimano oprema, malo vožen.",
            "Subotica",
            "sport",
            420.0,
            Currency::Eur,
            Some("polovno"),
            posted(3, 12, 7),
            "u5",
        ),
        listing(
            "12",
            "Kuća sa placem",
            "Kuća 120 m2 na placu od 8 ari, cena po dogovoru.",
            "Sremska Kamenica",
            "nekretnine",
            0.0,
            Currency::Eur,
            None,
            posted(1, 30, 13),
            "u6",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique() {
        let listings = sample_listings();
        let ids: HashSet<_> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn sample_data_is_deterministic() {
        assert_eq!(sample_listings(), sample_listings());
    }
}
