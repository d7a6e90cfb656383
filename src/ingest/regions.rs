//! Continents use the same vocabulary as the dataset's region column.

pub(crate) fn continent_for(country: &str) -> Option<&'static str> {
    let continent = match country.trim() {
        "Nigeria" | "Morocco" | "Sudan" => "África",
        "USA" | "Puerto Rico" | "Peru" | "Mexico" | "Bahamas" | "Venezuela" | "Canada"
        | "Greenland" | "Cuba" | "Haiti" | "Belize" | "Dominican Republic" | "Chile"
        | "Argentina" | "Guadeloupe" => "América",
        "Russia" | "India" | "Sri Lanka" | "Turkmenistan" | "Uzbekistan" | "Pakistan"
        | "China" | "Tajikistan" | "Kazakhstan" | "Kyrgyzstan" | "Nepal" | "Jordan" => "Ásia",
        "Spain" | "United Kingdom" | "Finland" | "Iceland" | "Norway" | "France" | "Ireland"
        | "Hungary" => "Europa",
        "Tonga" | "French Polynesia" => "Oceania",
        _ => return None,
    };
    Some(continent)
}
