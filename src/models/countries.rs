// ICAO 9303 country codes to display names. Only the nationalities the
// visa desk sees regularly; unknown codes are shown as-is.

use std::collections::HashMap;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref COUNTRY_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Nordics
        m.insert("SWE", "SWEDEN");
        m.insert("NOR", "NORWAY");
        m.insert("DNK", "DENMARK");
        m.insert("FIN", "FINLAND");
        m.insert("ISL", "ICELAND");

        // Rest of Europe
        m.insert("GBR", "UNITED KINGDOM");
        m.insert("DEU", "GERMANY");
        m.insert("FRA", "FRANCE");
        m.insert("ITA", "ITALY");
        m.insert("ESP", "SPAIN");
        m.insert("NLD", "NETHERLANDS");
        m.insert("BEL", "BELGIUM");
        m.insert("AUT", "AUSTRIA");
        m.insert("CHE", "SWITZERLAND");
        m.insert("IRL", "IRELAND");
        m.insert("PRT", "PORTUGAL");
        m.insert("GRC", "GREECE");
        m.insert("POL", "POLAND");
        m.insert("CZE", "CZECH REPUBLIC");
        m.insert("HUN", "HUNGARY");
        m.insert("ROU", "ROMANIA");
        m.insert("BGR", "BULGARIA");
        m.insert("HRV", "CROATIA");
        m.insert("SVK", "SLOVAKIA");
        m.insert("SVN", "SLOVENIA");
        m.insert("EST", "ESTONIA");
        m.insert("LVA", "LATVIA");
        m.insert("LTU", "LITHUANIA");
        m.insert("MLT", "MALTA");
        m.insert("CYP", "CYPRUS");
        m.insert("LUX", "LUXEMBOURG");
        m.insert("TUR", "TURKEY");
        m.insert("RUS", "RUSSIAN FEDERATION");
        m.insert("UKR", "UKRAINE");

        // Germany and British special codes
        m.insert("D<<", "GERMANY");
        m.insert("GBD", "UNITED KINGDOM");
        m.insert("GBN", "UNITED KINGDOM");
        m.insert("GBO", "UNITED KINGDOM");
        m.insert("GBS", "UNITED KINGDOM");

        // Americas
        m.insert("USA", "UNITED STATES OF AMERICA");
        m.insert("CAN", "CANADA");
        m.insert("MEX", "MEXICO");
        m.insert("BRA", "BRAZIL");
        m.insert("ARG", "ARGENTINA");
        m.insert("COL", "COLOMBIA");
        m.insert("CHL", "CHILE");
        m.insert("PER", "PERU");

        // Asia and Oceania
        m.insert("IND", "INDIA");
        m.insert("CHN", "CHINA");
        m.insert("JPN", "JAPAN");
        m.insert("KOR", "REPUBLIC OF KOREA");
        m.insert("THA", "THAILAND");
        m.insert("VNM", "VIETNAM");
        m.insert("PHL", "PHILIPPINES");
        m.insert("IDN", "INDONESIA");
        m.insert("MYS", "MALAYSIA");
        m.insert("SGP", "SINGAPORE");
        m.insert("PAK", "PAKISTAN");
        m.insert("BGD", "BANGLADESH");
        m.insert("LKA", "SRI LANKA");
        m.insert("NPL", "NEPAL");
        m.insert("AUS", "AUSTRALIA");
        m.insert("NZL", "NEW ZEALAND");

        // Middle East and Africa
        m.insert("SAU", "SAUDI ARABIA");
        m.insert("ARE", "UNITED ARAB EMIRATES");
        m.insert("QAT", "QATAR");
        m.insert("KWT", "KUWAIT");
        m.insert("OMN", "OMAN");
        m.insert("BHR", "BAHRAIN");
        m.insert("JOR", "JORDAN");
        m.insert("ISR", "ISRAEL");
        m.insert("LBN", "LEBANON");
        m.insert("IRQ", "IRAQ");
        m.insert("IRN", "IRAN");
        m.insert("ZAF", "SOUTH AFRICA");
        m.insert("EGY", "EGYPT");
        m.insert("MAR", "MOROCCO");
        m.insert("TUN", "TUNISIA");
        m.insert("NGA", "NIGERIA");
        m.insert("KEN", "KENYA");
        m.insert("GHA", "GHANA");

        m
    };
}

/// Resolve a country code field to a display name.
///
/// `raw` is the three-character field as printed (it may contain filler,
/// e.g. `D<<`), `code` the filler-stripped code. Falls back to `code`.
pub fn country_name(raw: &str, code: &str) -> String {
    COUNTRY_NAMES
        .get(raw)
        .or_else(|| COUNTRY_NAMES.get(code))
        .map(|name| name.to_string())
        .unwrap_or_else(|| code.to_string())
}
