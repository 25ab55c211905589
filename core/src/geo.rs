//! Static country data for the world view
//!
//! ISO-3166 alpha-3 codes for the country names that appear in the
//! coffee-quality dataset, keyed by the dataset's exact spellings.

use phf::phf_map;

static COUNTRY_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "Brazil" => "BRA",
    "Burundi" => "BDI",
    "China" => "CHN",
    "Colombia" => "COL",
    "Costa Rica" => "CRI",
    "Cote d'Ivoire" => "CIV",
    "Ecuador" => "ECU",
    "El Salvador" => "SLV",
    "Ethiopia" => "ETH",
    "Guatemala" => "GTM",
    "Haiti" => "HTI",
    "Honduras" => "HND",
    "India" => "IND",
    "Indonesia" => "IDN",
    "Japan" => "JPN",
    "Kenya" => "KEN",
    "Laos" => "LAO",
    "Malawi" => "MWI",
    "Mauritius" => "MUS",
    "Mexico" => "MEX",
    "Myanmar" => "MMR",
    "Nicaragua" => "NIC",
    "Panama" => "PAN",
    "Papua New Guinea" => "PNG",
    "Peru" => "PER",
    "Philippines" => "PHL",
    "Rwanda" => "RWA",
    "Taiwan" => "TWN",
    "Tanzania, United Republic Of" => "TZA",
    "Thailand" => "THA",
    "Uganda" => "UGA",
    "United States" => "USA",
    "United States (Hawaii)" => "USA",
    "United States (Puerto Rico)" => "PRI",
    "Vietnam" => "VNM",
    "Zambia" => "ZMB",
};

/// ISO-3166 alpha-3 code for a dataset country name, exact match.
pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRY_CODES.get(name).copied()
}
