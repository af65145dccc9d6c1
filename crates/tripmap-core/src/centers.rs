// crates/tripmap-core/src/centers.rs

//! Representative center coordinates per country code, used to place
//! postcard markers on the map. Coverage is the set of codes the tracker
//! ships countries for; a missing code simply means no marker.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// (code, latitude, longitude)
const COUNTRY_CENTERS: &[(&str, f64, f64)] = &[
    ("US", 39.8283, -98.5795),
    ("CA", 56.1304, -106.3468),
    ("GB", 54.3781, -3.4360),
    ("FR", 46.2276, 2.2137),
    ("DE", 51.1657, 10.4515),
    ("IT", 41.8719, 12.5674),
    ("ES", 40.4637, -3.7492),
    ("RU", 61.5240, 105.3188),
    ("CN", 35.8617, 104.1954),
    ("JP", 36.2048, 138.2529),
    ("IN", 20.5937, 78.9629),
    ("AU", -25.2744, 133.7751),
    ("BR", -14.2350, -51.9253),
    ("AR", -38.4161, -63.6167),
    ("ZA", -30.5595, 22.9375),
    ("EG", 26.8206, 30.8025),
    ("NG", 9.0820, 8.6753),
    ("KE", -0.0236, 37.9062),
    ("TH", 13.7563, 100.5018),
    ("SG", 1.3521, 103.8198),
    ("MY", 4.2105, 101.9758),
    ("ID", -0.7893, 113.9213),
    ("PH", 12.8797, 121.7740),
    ("VN", 14.0583, 108.2772),
    ("MX", 23.6345, -102.5528),
    ("CL", -35.6751, -71.5430),
    ("PE", -9.1900, -75.0152),
    ("CO", 4.5709, -74.2973),
    ("VE", 6.4238, -66.5897),
    ("TR", 38.9637, 35.2433),
    ("SA", 23.8859, 45.0792),
    ("IR", 32.4279, 53.6880),
    ("IQ", 33.2232, 43.6793),
    ("AF", 33.9391, 67.7100),
    ("PK", 30.3753, 69.3451),
    ("BD", 23.6850, 90.3563),
    ("LK", 7.8731, 80.7718),
    ("MM", 21.9162, 95.9560),
    ("KH", 12.5657, 104.9910),
    ("LA", 19.8563, 102.4955),
    ("NP", 28.3949, 84.1240),
    ("BT", 27.5142, 90.4336),
    ("MN", 46.8625, 103.8467),
    ("KZ", 48.0196, 66.9237),
    ("UZ", 41.3775, 64.5853),
    ("KG", 41.2044, 74.7661),
    ("TJ", 38.8610, 71.2761),
    ("TM", 38.9697, 59.5563),
    ("GE", 42.3154, 43.3569),
    ("AM", 40.0691, 45.0382),
    ("AZ", 40.1431, 47.5769),
    ("BY", 53.7098, 27.9534),
    ("UA", 48.3794, 31.1656),
    ("MD", 47.4116, 28.3699),
    ("RO", 45.9432, 24.9668),
    ("BG", 42.7339, 25.4858),
    ("GR", 39.0742, 21.8243),
    ("AL", 41.1533, 20.1683),
    ("MK", 41.6086, 21.7453),
    ("ME", 42.7087, 19.3744),
    ("RS", 44.0165, 21.0059),
    ("BA", 43.9159, 17.6791),
    ("HR", 45.1000, 15.2000),
    ("SI", 46.1512, 14.9955),
    ("SK", 48.6690, 19.6990),
    ("CZ", 49.8175, 15.4730),
    ("PL", 51.9194, 19.1451),
    ("LT", 55.1694, 23.8813),
    ("LV", 56.8796, 24.6032),
    ("EE", 58.5953, 25.0136),
    ("FI", 61.9241, 25.7482),
    ("SE", 60.1282, 18.6435),
    ("NO", 60.4720, 8.4689),
    ("DK", 56.2639, 9.5018),
    ("NL", 52.1326, 5.2913),
    ("BE", 50.5039, 4.4699),
    ("LU", 49.8153, 6.1296),
    ("CH", 46.8182, 8.2275),
    ("AT", 47.5162, 14.5501),
    ("HU", 47.1625, 19.5033),
    ("PT", 39.3999, -8.2245),
    ("IE", 53.4129, -8.2439),
    ("IS", 64.9631, -19.0208),
    ("MT", 35.9375, 14.3754),
    ("CY", 35.1264, 33.4299),
    ("MA", 31.7917, -7.0926),
    ("DZ", 28.0339, 1.6596),
    ("TN", 33.8869, 9.5375),
    ("LY", 26.3351, 17.2283),
    ("SD", 12.8628, 30.2176),
    ("ET", 9.1450, 40.4897),
    ("SO", 5.1521, 46.1996),
    ("DJ", 11.8251, 42.5903),
    ("ER", 15.1794, 39.7823),
    ("SS", 6.8770, 31.3070),
    ("CF", 6.6111, 20.9394),
    ("TD", 15.4542, 18.7322),
    ("NE", 17.6078, 8.0817),
    ("ML", 17.5707, -3.9962),
    ("BF", 12.2383, -1.5616),
    ("CI", 7.5400, -5.5471),
    ("GH", 7.9465, -1.0232),
    ("TG", 8.6195, 0.8248),
    ("BJ", 9.3077, 2.3158),
    ("CM", 7.3697, 12.3547),
    ("GQ", 1.6508, 10.2679),
    ("GA", -0.8037, 11.6094),
    ("CG", -0.2280, 15.8277),
    ("CD", -4.0383, 21.7587),
    ("AO", -11.2027, 17.8739),
    ("ZM", -13.1339, 27.8493),
    ("ZW", -19.0154, 29.1549),
    ("BW", -22.3285, 24.6849),
    ("NA", -22.9576, 18.4904),
    ("SZ", -26.5225, 31.4659),
    ("LS", -29.6100, 28.2336),
    ("MW", -13.2543, 34.3015),
    ("MZ", -18.6657, 35.5296),
    ("TZ", -6.3690, 34.8888),
    ("UG", 1.3733, 32.2903),
    ("RW", -1.9403, 29.8739),
    ("BI", -3.3731, 29.9189),
    ("MG", -18.7669, 46.8691),
    ("MU", -20.3484, 57.5522),
    ("SC", -4.6796, 55.4920),
    ("KM", -11.8750, 43.8722),
    ("CV", 16.5388, -24.0132),
    ("ST", 0.1864, 6.6131),
    ("LR", 6.4281, -9.4295),
    ("SL", 8.4606, -11.7799),
    ("GN", 9.9456, -9.6966),
    ("GW", 11.8037, -15.1804),
    ("SN", 14.4974, -14.4524),
    ("GM", 13.4432, -15.3101),
    ("MR", 21.0079, -10.9408),
    ("NZ", -40.9006, 174.8860),
    ("FJ", -16.5780, 179.4144),
    ("SB", -9.6457, 160.1562),
    ("VU", -15.3767, 166.9592),
    ("NC", -20.9043, 165.6180),
    ("PG", -6.3149, 143.9555),
    ("TO", -21.1789, -175.1982),
    ("WS", -13.7590, -172.1046),
    ("KI", -3.3704, -168.7340),
    ("TV", -7.1095, 177.6493),
    ("NR", -0.5228, 166.9315),
    ("PW", 7.5150, 134.5825),
    ("FM", 7.4256, 150.5508),
    ("MH", 7.1315, 171.1845),
];

static CENTERS: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    COUNTRY_CENTERS
        .iter()
        .map(|&(code, lat, lng)| (code, (lat, lng)))
        .collect()
});

/// Looks up the marker position for a country code (case-insensitive).
pub fn country_center(code: &str) -> Option<(f64, f64)> {
    let code = code.trim().to_ascii_uppercase();
    CENTERS.get(code.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_centers() {
        let (lat, lng) = country_center("US").unwrap();
        assert!((lat - 39.8283).abs() < 1e-9);
        assert!((lng + 98.5795).abs() < 1e-9);
        assert!(country_center("fr").is_some());
    }

    #[test]
    fn unknown_code_has_no_center() {
        assert_eq!(country_center("XX"), None);
    }
}
