//! Static linguistic tables.
//!
//! Everything here is `'static` data compiled into the binary, in the same
//! spirit as the ICU tables the resolver leans on: macrolanguage membership,
//! deprecated-code replacements, ISO 639-2/B bibliographic codes, and
//! display names for scripts and territories.

use phf::{Map, phf_map};

/// Languages whose `*-US` tags are meaningful enough to keep; everything
/// else drops its US-territory variants from the related-code list.
pub const US_TERRITORY_LANG_ALLOWLIST: &[&str] = &["en", "es"];

// ---------------------------------------------------------------------------
//    Macrolanguage membership (individual code → macrolanguage code)
// ---------------------------------------------------------------------------
// Codes are normalized: alpha-2 wherever one exists. Curated from the
// ISO 639-3 macrolanguage mappings; the large families (Arabic, Chinese,
// Malay, Quechua) carry their most widely used members.
pub static MACROLANGUAGE_OF: Map<&'static str, &'static str> = phf_map! {
    // Arabic
    "arb" => "ar", "arz" => "ar", "ary" => "ar", "apc" => "ar", "ajp" => "ar",
    "acm" => "ar", "afb" => "ar", "aeb" => "ar", "arq" => "ar", "ars" => "ar",
    "acw" => "ar", "apd" => "ar", "ayl" => "ar", "shu" => "ar", "acx" => "ar",
    "ayn" => "ar", "acq" => "ar",
    // Azerbaijani
    "azj" => "az", "azb" => "az",
    // Chinese
    "cmn" => "zh", "yue" => "zh", "wuu" => "zh", "hsn" => "zh", "hak" => "zh",
    "nan" => "zh", "gan" => "zh", "cjy" => "zh", "cpx" => "zh", "cdo" => "zh",
    "mnp" => "zh", "czh" => "zh", "czo" => "zh", "lzh" => "zh",
    // Cree
    "crk" => "cr", "crj" => "cr", "crl" => "cr", "crm" => "cr", "csw" => "cr",
    "cwd" => "cr",
    // Dogri
    "dgo" => "doi", "xnr" => "doi",
    // Estonian
    "ekk" => "et", "vro" => "et",
    // Persian
    "pes" => "fa", "prs" => "fa",
    // Guarani
    "gug" => "gn", "gui" => "gn", "gun" => "gn", "gnw" => "gn", "nhd" => "gn",
    // Inupiaq
    "esi" => "ik", "esk" => "ik",
    // Inuktitut
    "ike" => "iu", "ikt" => "iu",
    // Kongo
    "kng" => "kg", "ldi" => "kg", "kwy" => "kg",
    // Kanuri
    "knc" => "kr", "kby" => "kr", "krt" => "kr",
    // Kurdish
    "kmr" => "ku", "ckb" => "ku", "sdh" => "ku",
    // Komi
    "koi" => "kv", "kpv" => "kv",
    // Latvian
    "lvs" => "lv", "ltg" => "lv",
    // Malagasy
    "plt" => "mg", "bhr" => "mg", "skg" => "mg", "tdx" => "mg", "xmv" => "mg",
    "xmw" => "mg",
    // Mongolian
    "khk" => "mn", "mvf" => "mn",
    // Malay
    "zsm" => "ms", "zlm" => "ms", "min" => "ms", "bjn" => "ms", "mfa" => "ms",
    // Nepali
    "npi" => "ne", "dty" => "ne",
    // Norwegian
    "nb" => "no", "nn" => "no",
    // Oromo
    "gax" => "om", "gaz" => "om", "hae" => "om", "orc" => "om",
    // Odia
    "ory" => "or", "spv" => "or",
    // Pashto
    "pbt" => "ps", "pbu" => "ps", "pst" => "ps",
    // Quechua
    "quy" => "qu", "quz" => "qu", "quh" => "qu", "qug" => "qu", "qul" => "qu",
    "quk" => "qu",
    // Sardinian
    "sro" => "sc", "src" => "sc", "sdc" => "sc", "sdn" => "sc",
    // Serbo-Croatian
    "bs" => "sh", "hr" => "sh", "sr" => "sh",
    // Albanian
    "als" => "sq", "aae" => "sq", "aat" => "sq", "aln" => "sq",
    // Swahili
    "swh" => "sw", "swc" => "sw",
    // Uzbek
    "uzn" => "uz", "uzs" => "uz",
    // Yiddish
    "ydd" => "yi", "yih" => "yi",
    // Zhuang
    "zyb" => "za", "zgb" => "za",
};

// ---------------------------------------------------------------------------
//    Deprecated / legacy code replacements (old code → modern code)
// ---------------------------------------------------------------------------
pub static LANGUAGE_REPLACEMENTS: Map<&'static str, &'static str> = phf_map! {
    "iw" => "he",
    "in" => "id",
    "ji" => "yi",
    "jw" => "jv",
    "mo" => "ro",
    "tl" => "fil",
    "sh" => "sr",
    "bh" => "bho",
    "scc" => "sr",
    "scr" => "hr",
    "mol" => "ro",
    "drw" => "fa",
    // macrolanguage representatives folded into their umbrella code
    "cmn" => "zh",
    "arb" => "ar",
    "zsm" => "ms",
    "ekk" => "et",
    "lvs" => "lv",
    "khk" => "mn",
    "plt" => "mg",
    "gaz" => "om",
    "knc" => "kr",
    "zyb" => "za",
    "swh" => "sw",
    "uzn" => "uz",
    "azj" => "az",
    "pes" => "fa",
    "npi" => "ne",
    "ory" => "or",
};

// ---------------------------------------------------------------------------
//    ISO 639-2/B bibliographic codes (alpha-2 → B code)
// ---------------------------------------------------------------------------
// The twenty languages whose bibliographic alpha-3 code differs from the
// terminological one.
pub static ALPHA3_BIBLIOGRAPHIC: Map<&'static str, &'static str> = phf_map! {
    "sq" => "alb",
    "hy" => "arm",
    "eu" => "baq",
    "my" => "bur",
    "zh" => "chi",
    "cs" => "cze",
    "nl" => "dut",
    "fr" => "fre",
    "ka" => "geo",
    "de" => "ger",
    "el" => "gre",
    "is" => "ice",
    "mk" => "mac",
    "mi" => "mao",
    "ms" => "may",
    "fa" => "per",
    "ro" => "rum",
    "sk" => "slo",
    "bo" => "tib",
    "cy" => "wel",
};

// ---------------------------------------------------------------------------
//    Display names
// ---------------------------------------------------------------------------
pub static SCRIPT_NAMES: Map<&'static str, &'static str> = phf_map! {
    "Latn" => "Latin",
    "Cyrl" => "Cyrillic",
    "Arab" => "Arabic",
    "Hebr" => "Hebrew",
    "Grek" => "Greek",
    "Deva" => "Devanagari",
    "Beng" => "Bangla",
    "Guru" => "Gurmukhi",
    "Gujr" => "Gujarati",
    "Orya" => "Odia",
    "Taml" => "Tamil",
    "Telu" => "Telugu",
    "Knda" => "Kannada",
    "Mlym" => "Malayalam",
    "Sinh" => "Sinhala",
    "Thai" => "Thai",
    "Laoo" => "Lao",
    "Mymr" => "Myanmar",
    "Khmr" => "Khmer",
    "Hans" => "Simplified Han",
    "Hant" => "Traditional Han",
    "Hani" => "Han",
    "Jpan" => "Japanese",
    "Hira" => "Hiragana",
    "Kana" => "Katakana",
    "Kore" => "Korean",
    "Hang" => "Hangul",
    "Ethi" => "Ethiopic",
    "Geor" => "Georgian",
    "Armn" => "Armenian",
    "Tibt" => "Tibetan",
    "Mong" => "Mongolian",
    "Thaa" => "Thaana",
    "Cher" => "Cherokee",
    "Cans" => "Unified Canadian Aboriginal Syllabics",
    "Yiii" => "Yi",
    "Vaii" => "Vai",
    "Nkoo" => "N'Ko",
    "Tfng" => "Tifinagh",
    "Olck" => "Ol Chiki",
    "Adlm" => "Adlam",
    "Syrc" => "Syriac",
};

pub static TERRITORY_NAMES: Map<&'static str, &'static str> = phf_map! {
    "US" => "United States",
    "GB" => "United Kingdom",
    "FR" => "France",
    "DE" => "Germany",
    "ES" => "Spain",
    "IT" => "Italy",
    "PT" => "Portugal",
    "BR" => "Brazil",
    "MX" => "Mexico",
    "AR" => "Argentina",
    "CA" => "Canada",
    "AU" => "Australia",
    "NZ" => "New Zealand",
    "IE" => "Ireland",
    "NL" => "Netherlands",
    "BE" => "Belgium",
    "CH" => "Switzerland",
    "AT" => "Austria",
    "SE" => "Sweden",
    "NO" => "Norway",
    "DK" => "Denmark",
    "FI" => "Finland",
    "IS" => "Iceland",
    "RU" => "Russia",
    "UA" => "Ukraine",
    "BY" => "Belarus",
    "PL" => "Poland",
    "CZ" => "Czechia",
    "SK" => "Slovakia",
    "HU" => "Hungary",
    "RO" => "Romania",
    "BG" => "Bulgaria",
    "GR" => "Greece",
    "RS" => "Serbia",
    "HR" => "Croatia",
    "BA" => "Bosnia & Herzegovina",
    "SI" => "Slovenia",
    "MK" => "North Macedonia",
    "AL" => "Albania",
    "TR" => "Türkiye",
    "GE" => "Georgia",
    "AM" => "Armenia",
    "AZ" => "Azerbaijan",
    "KZ" => "Kazakhstan",
    "UZ" => "Uzbekistan",
    "CN" => "China",
    "TW" => "Taiwan",
    "HK" => "Hong Kong",
    "MO" => "Macao",
    "SG" => "Singapore",
    "JP" => "Japan",
    "KR" => "South Korea",
    "KP" => "North Korea",
    "MN" => "Mongolia",
    "VN" => "Vietnam",
    "TH" => "Thailand",
    "LA" => "Laos",
    "KH" => "Cambodia",
    "MM" => "Myanmar",
    "ID" => "Indonesia",
    "MY" => "Malaysia",
    "BN" => "Brunei",
    "PH" => "Philippines",
    "IN" => "India",
    "PK" => "Pakistan",
    "BD" => "Bangladesh",
    "LK" => "Sri Lanka",
    "NP" => "Nepal",
    "AF" => "Afghanistan",
    "IR" => "Iran",
    "IQ" => "Iraq",
    "SY" => "Syria",
    "LB" => "Lebanon",
    "JO" => "Jordan",
    "SA" => "Saudi Arabia",
    "AE" => "United Arab Emirates",
    "YE" => "Yemen",
    "OM" => "Oman",
    "IL" => "Israel",
    "EG" => "Egypt",
    "MA" => "Morocco",
    "DZ" => "Algeria",
    "TN" => "Tunisia",
    "LY" => "Libya",
    "SD" => "Sudan",
    "ET" => "Ethiopia",
    "ER" => "Eritrea",
    "SO" => "Somalia",
    "KE" => "Kenya",
    "TZ" => "Tanzania",
    "UG" => "Uganda",
    "RW" => "Rwanda",
    "CD" => "DR Congo",
    "CG" => "Congo",
    "NG" => "Nigeria",
    "GH" => "Ghana",
    "SN" => "Senegal",
    "ML" => "Mali",
    "MG" => "Madagascar",
    "ZA" => "South Africa",
    "ZW" => "Zimbabwe",
    "AO" => "Angola",
    "MZ" => "Mozambique",
    "CL" => "Chile",
    "CO" => "Colombia",
    "PE" => "Peru",
    "VE" => "Venezuela",
    "EC" => "Ecuador",
    "BO" => "Bolivia",
    "PY" => "Paraguay",
    "UY" => "Uruguay",
    "CU" => "Cuba",
    "DO" => "Dominican Republic",
    "GT" => "Guatemala",
    "HN" => "Honduras",
    "NI" => "Nicaragua",
    "CR" => "Costa Rica",
    "PA" => "Panama",
    "HT" => "Haiti",
    "419" => "Latin America",
    "001" => "World",
};

// ---------------------------------------------------------------------------
//    Lookup helpers
// ---------------------------------------------------------------------------

/// ISO 639 registry lookup for a primary language subtag.
pub fn iso_language(code: &str) -> Option<isolang::Language> {
    match code.len() {
        2 => isolang::Language::from_639_1(code),
        3 => isolang::Language::from_639_3(code),
        _ => None,
    }
}

/// English display name for a primary language subtag, falling back to the
/// raw subtag when the registry has nothing.
pub fn language_name(code: &str) -> String {
    if code == "und" {
        return "Unknown language".to_owned();
    }
    if let Some(lang) = iso_language(code) {
        return lang.to_name().to_owned();
    }
    // bibliographic codes name their terminological twin
    if let Some((alpha2, _)) = ALPHA3_BIBLIOGRAPHIC
        .entries()
        .find(|(_, biblio)| **biblio == code)
    {
        if let Some(lang) = iso_language(alpha2) {
            return lang.to_name().to_owned();
        }
    }
    code.to_owned()
}

pub fn script_name(code: &str) -> &str {
    SCRIPT_NAMES.get(code).copied().unwrap_or(code)
}

pub fn territory_name(code: &str) -> &str {
    TERRITORY_NAMES.get(code).copied().unwrap_or(code)
}

/// Individual codes whose macrolanguage is `base`, sorted for stable output.
pub fn macrolanguage_members(base: &str) -> Vec<&'static str> {
    let mut members: Vec<&'static str> = MACROLANGUAGE_OF
        .entries()
        .filter(|(_, macro_code)| **macro_code == base)
        .map(|(member, _)| *member)
        .collect();
    members.sort_unstable();
    members
}

/// Codes that `base` replaced, sorted for stable output.
pub fn replacement_sources(base: &str) -> Vec<&'static str> {
    let mut sources: Vec<&'static str> = LANGUAGE_REPLACEMENTS
        .entries()
        .filter(|(_, replacement)| **replacement == base)
        .map(|(source, _)| *source)
        .collect();
    sources.sort_unstable();
    sources
}
