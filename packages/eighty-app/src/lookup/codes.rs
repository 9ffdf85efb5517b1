//! Static lookup tables for country and state codes.
//!
//! Keys are matched case-insensitively after trimming. Country keys include
//! common names, alternate spellings and ISO 3166-1 alpha-3 codes; values are
//! ISO 3166-1 alpha-2 codes. State keys are US states, territories and
//! Canadian provinces; values are postal abbreviations.

use std::collections::HashMap;
use std::sync::LazyLock;

static STATE_CODES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| index(STATES));

static COUNTRY_CODES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| index(COUNTRIES));

fn index(rows: &'static [(&'static str, &'static str)]) -> HashMap<String, &'static str> {
    rows.iter()
        .map(|(name, code)| (name.to_lowercase(), *code))
        .collect()
}

/// Two-letter postal code for a US state, territory or Canadian province.
pub fn state_code(name: &str) -> Option<&'static str> {
    STATE_CODES.get(&name.trim().to_lowercase()).copied()
}

/// ISO 3166-1 alpha-2 code for a country name or alpha-3 code.
pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRY_CODES.get(&name.trim().to_lowercase()).copied()
}

const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("American Samoa", "AS"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District Of Columbia", "DC"),
    ("Federated States Of Micronesia", "FM"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Guam", "GU"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Marshall Islands", "MH"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Northern Mariana Islands", "MP"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Palau", "PW"),
    ("Pennsylvania", "PA"),
    ("Puerto Rico", "PR"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virgin Islands", "VI"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("Alberta", "AB"),
    ("British Columbia", "BC"),
    ("Manitoba", "MB"),
    ("New Brunswick", "NB"),
    ("Newfoundland and Labrador", "NL"),
    ("Northwest Territories", "NT"),
    ("Nova Scotia", "NS"),
    ("Nunavut", "NU"),
    ("Ontario", "ON"),
    ("Prince Edward Island", "PE"),
    ("Quebec", "QC"),
    ("Saskatchewan", "SK"),
    ("Yukon", "YT"),
];

const COUNTRIES: &[(&str, &str)] = &[
    ("Albania", "AL"),
    ("Afghanistan", "AF"),
    ("Andorra", "AD"),
    ("Anguilla", "AI"),
    ("Algeria", "DZ"),
    ("American Samoa", "AS"),
    ("Angola", "AO"),
    ("Antigua and Barbuda", "AG"),
    ("Antigua & Barbuda", "AG"),
    ("Antigua", "AG"),
    ("Argentina", "AR"),
    ("Armenia", "AM"),
    ("Aruba", "AW"),
    ("Australia", "AU"),
    ("Austria", "AT"),
    ("Azerbaijan", "AZ"),
    ("Bahamas", "BS"),
    ("Bahrain", "BH"),
    ("Bangladesh", "BD"),
    ("Barbados", "BB"),
    ("Bay Islands Honduras", "HN"),
    ("Belarus", "BY"),
    ("Belize", "BZ"),
    ("Belgium", "BE"),
    ("Benin", "BJ"),
    ("Bermuda", "BM"),
    ("Bhutan", "BT"),
    ("Bosnia and Herzegovina", "BA"),
    ("Bolivia", "BO"),
    ("Bonaire", "BQ"),
    ("Botswana", "BW"),
    ("Bouvet Island", "BV"),
    ("Brazil", "BR"),
    ("British Virgin Islands", "VG"),
    ("UK Virgin Islands", "VG"),
    ("British Indian Ocean Territory", "IO"),
    ("Brunei Darussalam", "BN"),
    ("Brunei", "BN"),
    ("Burkina Faso", "BF"),
    ("Bulgaria", "BG"),
    ("Burundi", "BI"),
    ("Cambodia", "KH"),
    ("Cameroon", "CM"),
    ("Canada", "CA"),
    ("Cape Verde", "CV"),
    ("Cayman Islands", "KY"),
    ("Grand Cayman", "KY"),
    ("Grand Cayman Islands", "KY"),
    ("Costa Rica", "CR"),
    ("Curaçao", "CW"),
    ("Curacao", "CW"),
    ("Czech Republic", "CZ"),
    ("China", "CN"),
    ("Chile", "CL"),
    ("Colombia", "CO"),
    ("Cook Islands", "CK"),
    ("Cote d\\'Ivoire", "CI"),
    ("Croatia", "HR"),
    ("Cuba", "CU"),
    ("Cyprus", "CY"),
    ("Christmas Island", "CX"),
    ("Cocos Islands", "CC"),
    ("Central African Republic", "CF"),
    ("Comoros", "KM"),
    ("Congo", "CG"),
    ("Democratic Republic of the Congo", "CD"),
    ("Denmark", "DK"),
    ("Djibouti", "DJ"),
    ("Dominica", "DM"),
    ("Dominican Republic", "DO"),
    ("Ecuador", "EC"),
    ("Egypt", "EG"),
    ("El Salvador", "SV"),
    ("England", "GB"),
    ("Equatorial Guinea", "GQ"),
    ("Eritrea", "ER"),
    ("Estonia", "EE"),
    ("Ethiopia", "ET"),
    ("Falkland Islands (Malvinas)", "FK"),
    ("Malvinas", "FK"),
    ("Faroe Islands", "FO"),
    ("Federated States of Micronesia", "FM"),
    ("Figi", "FJ"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("French Guiana", "GF"),
    ("French Polynesia", "PF"),
    ("French Southern Territories", "TF"),
    ("Gabon", "GA"),
    ("Gambia", "GM"),
    ("Georgia", "GE"),
    ("Germany", "DE"),
    ("Ghana", "GH"),
    ("Gibraltar", "GI"),
    ("Greece", "GR"),
    ("Grenada", "GD"),
    ("Greenland", "GL"),
    ("Guadeloupe", "GP"),
    ("Guam", "GU"),
    ("Guatemala", "GT"),
    ("Guernsey", "GG"),
    ("Guyana", "GY"),
    ("Haiti", "HT"),
    ("Hong Kong", "HK"),
    ("Hungary", "HU"),
    ("Honduras", "HN"),
    ("Heard Island and McDonald Mcdonald Islands", "HM"),
    ("Holy See", "VA"),
    ("Isle of Man", "IM"),
    ("Iceland", "IS"),
    ("Ireland", "IE"),
    ("India", "IN"),
    ("Indonesia", "ID"),
    ("Iran", "IR"),
    ("Iraq", "IQ"),
    ("Israel", "IL"),
    ("Italy", "IT"),
    ("Jamaica", "JM"),
    ("Japan", "JP"),
    ("Jersey", "JE"),
    ("Jordan", "JO"),
    ("Kazakhstan", "KZ"),
    ("Kenya", "KE"),
    ("Republic of Kiribati", "KI"),
    ("Kiribati", "KI"),
    ("Democratic People\\'s Republic of Korea", "KP"),
    ("Republic of Korea", "KR"),
    ("Kosovo", "XK"),
    ("Kuwait", "KW"),
    ("Kyrgyzstan", "KG"),
    ("Laos", "LA"),
    ("Latvia", "LV"),
    ("Lebanon", "LB"),
    ("Lesotho", "LS"),
    ("Liberia", "LR"),
    ("Libyia", "LY"),
    ("Liechtenstein", "LI"),
    ("Lithuania", "LT"),
    ("Luxembourg", "LU"),
    ("Macao", "MO"),
    ("Macau", "MO"),
    ("Madagascar", "MG"),
    ("Malawi", "MW"),
    ("Malaysia", "MY"),
    ("Maldives", "MV"),
    ("Malta", "MT"),
    ("Marshall Islands", "MH"),
    ("Martinique", "MQ"),
    ("Mauritania", "MR"),
    ("Mauritius", "MU"),
    ("Mayotte", "YT"),
    ("Mexico", "MX"),
    ("Moldova", "MD"),
    ("Monaco", "MC"),
    ("Mongolia", "MN"),
    ("Montserrat", "MS"),
    ("Montenegro", "ME"),
    ("Morocco", "MA"),
    ("Mozambique", "MZ"),
    ("Myanmar", "MM"),
    ("Nambia", "NA"),
    ("Namibia", "NA"),
    ("Nauru", "NR"),
    ("Nepal", "NP"),
    ("Netherlands", "NL"),
    ("New Caledonia", "NC"),
    ("New Zealand", "NZ"),
    ("Nicaragua", "NI"),
    ("Nigeria", "NG"),
    ("Niue", "NU"),
    ("Norfolk Island", "NF"),
    ("North Korea", "KP"),
    ("Northern Ireland", "GB"),
    ("Northern Mariana Islands", "MP"),
    ("Norway", "NO"),
    ("Oman", "OM"),
    ("Pakistan", "PK"),
    ("Panama", "PA"),
    ("Papua New Guinea", "PG"),
    ("Palau", "PW"),
    ("Paraguay", "PY"),
    ("Peru", "PE"),
    ("Pitcairn", "PN"),
    ("Philippines", "PH"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("Puerto Rico", "PR"),
    ("Qatar", "QA"),
    ("Republic of Macedonia", "MK"),
    ("Reunion Island", "RE"),
    ("Romania", "RO"),
    ("Russia", "RU"),
    ("Rwanda", "RW"),
    ("Saba", "BQ"),
    ("Saint Barthelemy", "BL"),
    ("Saint Eustacius", "BQ"),
    ("Saint Kitts and Nevis", "KN"),
    ("St Kitts and Nevis", "KN"),
    ("St. Kitts and Nevis", "KN"),
    ("St Kitts", "KN"),
    ("St. Kitts", "KN"),
    ("Saint Lucia", "LC"),
    ("St Lucia", "LC"),
    ("St. Lucia", "LC"),
    ("Saint Martin-Sint Maarten", "MF"),
    ("Saint Vincent and the Grenadines", "VC"),
    ("St. Vincent", "VC"),
    ("St Vincent", "VC"),
    ("Saint Vincent", "VC"),
    ("Saint Vincent & the Grenadines", "VC"),
    ("San Marino", "SM"),
    ("Samoa", "WS"),
    ("Saudi Arabia", "SA"),
    ("Scotland", "GB"),
    ("Senegal", "SN"),
    ("Serbia", "RS"),
    ("Seychelles", "SC"),
    ("Sierra Leone", "SL"),
    ("Singapore", "SG"),
    ("Slovakia", "SK"),
    ("Slovenia", "SI"),
    ("Solomon Islands", "SB"),
    ("Somalia", "SO"),
    ("South Georgia and the South Sandwich Islands", "GS"),
    ("South Sudan", "SS"),
    ("South Africa", "ZA"),
    ("South Korea", "KR"),
    ("Spain", "ES"),
    ("Sri Lanka", "LK"),
    ("Suriname", "SR"),
    ("Sudan", "SD"),
    ("Svalbard and Jan Mayen", "SJ"),
    ("Swaziland", "SZ"),
    ("Sweden", "SE"),
    ("Switzerland", "CH"),
    ("Syria", "SY"),
    ("Taiwan", "TW"),
    ("Tajikistan", "TJ"),
    ("Tanzania", "TZ"),
    ("Thailand", "TH"),
    ("Timor-Leste", "TL"),
    ("Timor Leste", "TL"),
    ("Tokelau", "TK"),
    ("Tonga", "TO"),
    ("Trinidad and Tobago", "TT"),
    ("Trinidad", "TT"),
    ("Trinidad & Tobago", "TT"),
    ("Tunisia", "TN"),
    ("Turkey", "TR"),
    ("Turkmenistan", "TM"),
    ("Turks and Caicos", "TC"),
    ("Turks & Caicos", "TC"),
    ("Tuvalu", "TV"),
    ("Uganda", "UG"),
    ("Ukraine", "UA"),
    ("United Arab Emirates", "AE"),
    ("United Kingdom", "GB"),
    ("United States", "US"),
    ("United States of America", "US"),
    ("United States Virgin Islands", "VI"),
    ("United States Minor Outlying Islands", "UM"),
    ("Uruguay", "UY"),
    ("Uzbekistan", "UZ"),
    ("U.S. Virgin Islands", "VI"),
    ("Vanuatu", "VU"),
    ("Vatican City", "VA"),
    ("Venezuela", "VE"),
    ("Vietnam", "VN"),
    ("Wales", "GB"),
    ("Wallis and Futuna", "WF"),
    ("West Bank and Gaza", "PS"),
    ("Yemen", "YE"),
    ("Zambia", "ZM"),
    ("Zimbabwe", "ZW"),
    ("Aland Islands", "AX"),
    ("AFG", "AF"),
    ("ALB", "AL"),
    ("DZA", "DZ"),
    ("ASM", "AS"),
    ("AND", "AD"),
    ("AGO", "AO"),
    ("AIA", "AI"),
    ("ATA", "AQ"),
    ("ATG", "AG"),
    ("ARG", "AR"),
    ("ARM", "AM"),
    ("ABW", "AW"),
    ("AUS", "AU"),
    ("AUT", "AT"),
    ("AZE", "AZ"),
    ("BHS", "BS"),
    ("BHR", "BH"),
    ("BGD", "BD"),
    ("BRB", "BB"),
    ("BLR", "BY"),
    ("BEL", "BE"),
    ("BLZ", "BZ"),
    ("BEN", "BJ"),
    ("BMU", "BM"),
    ("BTN", "BT"),
    ("BOL", "BO"),
    ("BIH", "BA"),
    ("BWA", "BW"),
    ("BVT", "BV"),
    ("BRA", "BR"),
    ("IOT", "IO"),
    ("BRN", "BN"),
    ("BGR", "BG"),
    ("BFA", "BF"),
    ("BDI", "BI"),
    ("KHM", "KH"),
    ("CMR", "CM"),
    ("CAN", "CA"),
    ("CPV", "CV"),
    ("CYM", "KY"),
    ("CAF", "CF"),
    ("TCD", "TD"),
    ("CHL", "CL"),
    ("CHN", "CN"),
    ("CXR", "CX"),
    ("CCK", "CC"),
    ("COL", "CO"),
    ("COM", "KM"),
    ("COG", "CG"),
    ("COD", "CD"),
    ("COK", "CK"),
    ("CRI", "CR"),
    ("CIV", "CI"),
    ("HRV", "HR"),
    ("CUB", "CU"),
    ("CYP", "CY"),
    ("CZE", "CZ"),
    ("DNK", "DK"),
    ("DJI", "DJ"),
    ("DMA", "DM"),
    ("DOM", "DO"),
    ("TMP", "TP"),
    ("ECU", "EC"),
    ("EGY", "EG"),
    ("SLV", "SV"),
    ("GNQ", "GQ"),
    ("ERI", "ER"),
    ("EST", "EE"),
    ("ETH", "ET"),
    ("FLK", "FK"),
    ("FRO", "FO"),
    ("FJI", "FJ"),
    ("FIN", "FI"),
    ("FRA", "FR"),
    ("FXX", "FX"),
    ("GUF", "GF"),
    ("PYF", "PF"),
    ("ATF", "TF"),
    ("GAB", "GA"),
    ("GMB", "GM"),
    ("GEO", "GE"),
    ("DEU", "DE"),
    ("GHA", "GH"),
    ("GIB", "GI"),
    ("GRC", "GR"),
    ("GRL", "GL"),
    ("GRD", "GD"),
    ("GLP", "GP"),
    ("GUM", "GU"),
    ("GTM", "GT"),
    ("GIN", "GN"),
    ("GNB", "GW"),
    ("GUY", "GY"),
    ("HTI", "HT"),
    ("HMD", "HM"),
    ("VAT", "VA"),
    ("HND", "HN"),
    ("HKG", "HK"),
    ("HUN", "HU"),
    ("ISL", "IS"),
    ("IND", "IN"),
    ("IDN", "ID"),
    ("IRN", "IR"),
    ("IRQ", "IQ"),
    ("IRL", "IE"),
    ("ISR", "IL"),
    ("ITA", "IT"),
    ("JAM", "JM"),
    ("JPN", "JP"),
    ("JOR", "JO"),
    ("KAZ", "KZ"),
    ("KEN", "KE"),
    ("KIR", "KI"),
    ("PRK", "KP"),
    ("KOR", "KR"),
    ("KWT", "KW"),
    ("KGZ", "KG"),
    ("LAO", "LA"),
    ("LVA", "LV"),
    ("LBN", "LB"),
    ("LSO", "LS"),
    ("LBR", "LR"),
    ("LBY", "LY"),
    ("LIE", "LI"),
    ("LTU", "LT"),
    ("LUX", "LU"),
    ("MAC", "MO"),
    ("MKD", "MK"),
    ("MDG", "MG"),
    ("MWI", "MW"),
    ("MYS", "MY"),
    ("MDV", "MV"),
    ("MLI", "ML"),
    ("MLT", "MT"),
    ("MHL", "MH"),
    ("MTQ", "MQ"),
    ("MRT", "MR"),
    ("MUS", "MU"),
    ("MYT", "YT"),
    ("MEX", "MX"),
    ("FSM", "FM"),
    ("MDA", "MD"),
    ("MCO", "MC"),
    ("MNG", "MN"),
    ("MNE", "ME"),
    ("MSR", "MS"),
    ("MAR", "MA"),
    ("MOZ", "MZ"),
    ("MMR", "MM"),
    ("NAM", "NA"),
    ("NRU", "NR"),
    ("NPL", "NP"),
    ("NLD", "NL"),
    ("ANT", "AN"),
    ("NCL", "NC"),
    ("NZL", "NZ"),
    ("NIC", "NI"),
    ("NER", "NE"),
    ("NGA", "NG"),
    ("NIU", "NU"),
    ("NFK", "NF"),
    ("MNP", "MP"),
    ("NOR", "NO"),
    ("OMN", "OM"),
    ("PAK", "PK"),
    ("PLW", "PW"),
    ("PAN", "PA"),
    ("PNG", "PG"),
    ("PRY", "PY"),
    ("PER", "PE"),
    ("PHL", "PH"),
    ("PCN", "PN"),
    ("POL", "PL"),
    ("PRT", "PT"),
    ("PRI", "PR"),
    ("QAT", "QA"),
    ("REU", "RE"),
    ("ROM", "RO"),
    ("RUS", "RU"),
    ("RWA", "RW"),
    ("KNA", "KN"),
    ("LCA", "LC"),
    ("VCT", "VC"),
    ("WSM", "WS"),
    ("SMR", "SM"),
    ("STP", "ST"),
    ("SAU", "SA"),
    ("SEN", "SN"),
    ("SRB", "RS"),
    ("SYC", "SC"),
    ("SLE", "SL"),
    ("SGP", "SG"),
    ("SVK", "SK"),
    ("SVN", "SI"),
    ("SLB", "SB"),
    ("SOM", "SO"),
    ("ZAF", "ZA"),
    ("SSD", "SS"),
    ("SGS", "GS"),
    ("ESP", "ES"),
    ("LKA", "LK"),
    ("SHN", "SH"),
    ("SPM", "PM"),
    ("SDN", "SD"),
    ("SUR", "SR"),
    ("SJM", "SJ"),
    ("SWZ", "SZ"),
    ("SWE", "SE"),
    ("CHE", "CH"),
    ("SYR", "SY"),
    ("TWN", "TW"),
    ("TJK", "TJ"),
    ("TZA", "TZ"),
    ("THA", "TH"),
    ("TGO", "TG"),
    ("TKL", "TK"),
    ("TON", "TO"),
    ("TTO", "TT"),
    ("TUN", "TN"),
    ("TUR", "TR"),
    ("TKM", "TM"),
    ("TCA", "TC"),
    ("TUV", "TV"),
    ("UGA", "UG"),
    ("UKR", "UA"),
    ("ARE", "AE"),
    ("GBR", "GB"),
    ("USA", "US"),
    ("UMI", "UM"),
    ("URY", "UY"),
    ("UZB", "UZ"),
    ("VUT", "VU"),
    ("VEN", "VE"),
    ("VNM", "VN"),
    ("VGB", "VG"),
    ("VIR", "VI"),
    ("WLF", "WF"),
    ("ESH", "EH"),
    ("YEM", "YE"),
    ("ZMB", "ZM"),
    ("ZWE", "ZW"),
    ("Chad", "TD"),
    ("São Tomé and Príncipe", "ST"),
    ("Sao Tome and Principe", "ST"),
    ("Mali", "ML"),
    ("Niger", "NE"),
    ("Guinea", "GN"),
    ("Guinea-Bissau", "GW"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_code() {
        assert_eq!(state_code("Texas"), Some("TX"));
        assert_eq!(state_code("  new york "), Some("NY"));
        assert_eq!(state_code("Alberta"), Some("AB"));
        assert_eq!(state_code("Newfoundland and Labrador"), Some("NL"));
        assert_eq!(state_code("Atlantis"), None);
    }

    #[test]
    fn test_country_code() {
        assert_eq!(country_code("Albania"), Some("AL"));
        assert_eq!(country_code("antigua & barbuda"), Some("AG"));
        assert_eq!(country_code("Guinea-Bissau"), Some("GW"));
        assert_eq!(country_code("usa"), Some("US"));
        assert_eq!(country_code("United Kingdom"), Some("GB"));
        assert_eq!(country_code("Narnia"), None);
    }

    #[test]
    fn test_tables_hold_two_letter_codes() {
        assert!(STATES.iter().chain(COUNTRIES).all(|(_, code)| code.len() == 2));
    }
}
