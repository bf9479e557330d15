//! Static directory of major world airports.
//!
//! Covers most commercial routes. Held in memory so lookups never touch the
//! database.

use super::Airport;

/// Major world airports keyed by IATA code.
pub(super) static AIRPORTS: &[Airport] = &[
    // United Kingdom
    Airport { code: "LHR", name: "Heathrow Airport", city: "London", country: "United Kingdom", latitude: 51.4700, longitude: -0.4543 },
    Airport { code: "LGW", name: "Gatwick Airport", city: "London", country: "United Kingdom", latitude: 51.1537, longitude: -0.1821 },
    Airport { code: "STN", name: "Stansted Airport", city: "London", country: "United Kingdom", latitude: 51.8860, longitude: 0.2389 },
    Airport { code: "LTN", name: "Luton Airport", city: "London", country: "United Kingdom", latitude: 51.8747, longitude: -0.3683 },
    Airport { code: "MAN", name: "Manchester Airport", city: "Manchester", country: "United Kingdom", latitude: 53.3537, longitude: -2.2750 },
    Airport { code: "EDI", name: "Edinburgh Airport", city: "Edinburgh", country: "United Kingdom", latitude: 55.9500, longitude: -3.3725 },
    Airport { code: "BHX", name: "Birmingham Airport", city: "Birmingham", country: "United Kingdom", latitude: 52.4539, longitude: -1.7480 },
    Airport { code: "INV", name: "Inverness Airport", city: "Inverness", country: "United Kingdom", latitude: 57.5425, longitude: -4.0475 },
    Airport { code: "GLA", name: "Glasgow Airport", city: "Glasgow", country: "United Kingdom", latitude: 55.8719, longitude: -4.4331 },
    Airport { code: "BRS", name: "Bristol Airport", city: "Bristol", country: "United Kingdom", latitude: 51.3827, longitude: -2.7190 },
    Airport { code: "NCL", name: "Newcastle Airport", city: "Newcastle", country: "United Kingdom", latitude: 55.0375, longitude: -1.6917 },
    Airport { code: "BFS", name: "Belfast International", city: "Belfast", country: "United Kingdom", latitude: 54.6575, longitude: -6.2158 },
    Airport { code: "LBA", name: "Leeds Bradford Airport", city: "Leeds", country: "United Kingdom", latitude: 53.8659, longitude: -1.6606 },
    // United States
    Airport { code: "JFK", name: "John F. Kennedy International", city: "New York", country: "United States", latitude: 40.6413, longitude: -73.7781 },
    Airport { code: "LAX", name: "Los Angeles International", city: "Los Angeles", country: "United States", latitude: 33.9425, longitude: -118.4081 },
    Airport { code: "ORD", name: "O'Hare International", city: "Chicago", country: "United States", latitude: 41.9742, longitude: -87.9073 },
    Airport { code: "SFO", name: "San Francisco International", city: "San Francisco", country: "United States", latitude: 37.6213, longitude: -122.3790 },
    Airport { code: "MIA", name: "Miami International", city: "Miami", country: "United States", latitude: 25.7959, longitude: -80.2870 },
    Airport { code: "DFW", name: "Dallas/Fort Worth International", city: "Dallas", country: "United States", latitude: 32.8998, longitude: -97.0403 },
    Airport { code: "ATL", name: "Hartsfield-Jackson Atlanta", city: "Atlanta", country: "United States", latitude: 33.6407, longitude: -84.4277 },
    Airport { code: "DEN", name: "Denver International", city: "Denver", country: "United States", latitude: 39.8561, longitude: -104.6737 },
    Airport { code: "SEA", name: "Seattle-Tacoma International", city: "Seattle", country: "United States", latitude: 47.4502, longitude: -122.3088 },
    Airport { code: "BOS", name: "Logan International", city: "Boston", country: "United States", latitude: 42.3656, longitude: -71.0096 },
    Airport { code: "EWR", name: "Newark Liberty International", city: "Newark", country: "United States", latitude: 40.6895, longitude: -74.1745 },
    Airport { code: "IAD", name: "Washington Dulles International", city: "Washington D.C.", country: "United States", latitude: 38.9531, longitude: -77.4565 },
    Airport { code: "LAS", name: "Harry Reid International", city: "Las Vegas", country: "United States", latitude: 36.0840, longitude: -115.1537 },
    Airport { code: "PHX", name: "Phoenix Sky Harbor", city: "Phoenix", country: "United States", latitude: 33.4373, longitude: -112.0078 },
    Airport { code: "IAH", name: "George Bush Intercontinental", city: "Houston", country: "United States", latitude: 29.9902, longitude: -95.3368 },
    Airport { code: "MSP", name: "Minneapolis-Saint Paul International", city: "Minneapolis", country: "United States", latitude: 44.8848, longitude: -93.2223 },
    Airport { code: "DTW", name: "Detroit Metropolitan", city: "Detroit", country: "United States", latitude: 42.2124, longitude: -83.3534 },
    Airport { code: "PHL", name: "Philadelphia International", city: "Philadelphia", country: "United States", latitude: 39.8729, longitude: -75.2437 },
    Airport { code: "CLT", name: "Charlotte Douglas International", city: "Charlotte", country: "United States", latitude: 35.2140, longitude: -80.9431 },
    Airport { code: "HNL", name: "Daniel K. Inouye International", city: "Honolulu", country: "United States", latitude: 21.3245, longitude: -157.9251 },
    // Europe
    Airport { code: "CDG", name: "Charles de Gaulle Airport", city: "Paris", country: "France", latitude: 49.0097, longitude: 2.5479 },
    Airport { code: "ORY", name: "Paris Orly Airport", city: "Paris", country: "France", latitude: 48.7262, longitude: 2.3652 },
    Airport { code: "FRA", name: "Frankfurt Airport", city: "Frankfurt", country: "Germany", latitude: 50.0379, longitude: 8.5622 },
    Airport { code: "MUC", name: "Munich Airport", city: "Munich", country: "Germany", latitude: 48.3537, longitude: 11.7750 },
    Airport { code: "AMS", name: "Amsterdam Schiphol", city: "Amsterdam", country: "Netherlands", latitude: 52.3105, longitude: 4.7683 },
    Airport { code: "MAD", name: "Madrid-Barajas", city: "Madrid", country: "Spain", latitude: 40.4983, longitude: -3.5676 },
    Airport { code: "BCN", name: "Barcelona-El Prat", city: "Barcelona", country: "Spain", latitude: 41.2974, longitude: 2.0833 },
    Airport { code: "FCO", name: "Leonardo da Vinci-Fiumicino", city: "Rome", country: "Italy", latitude: 41.8003, longitude: 12.2389 },
    Airport { code: "MXP", name: "Milan Malpensa", city: "Milan", country: "Italy", latitude: 45.6306, longitude: 8.7281 },
    Airport { code: "ZRH", name: "Zurich Airport", city: "Zurich", country: "Switzerland", latitude: 47.4647, longitude: 8.5492 },
    Airport { code: "VIE", name: "Vienna International", city: "Vienna", country: "Austria", latitude: 48.1103, longitude: 16.5697 },
    Airport { code: "BRU", name: "Brussels Airport", city: "Brussels", country: "Belgium", latitude: 50.9014, longitude: 4.4844 },
    Airport { code: "CPH", name: "Copenhagen Airport", city: "Copenhagen", country: "Denmark", latitude: 55.6180, longitude: 12.6508 },
    Airport { code: "OSL", name: "Oslo Gardermoen", city: "Oslo", country: "Norway", latitude: 60.1939, longitude: 11.1004 },
    Airport { code: "ARN", name: "Stockholm Arlanda", city: "Stockholm", country: "Sweden", latitude: 59.6519, longitude: 17.9186 },
    Airport { code: "HEL", name: "Helsinki-Vantaa", city: "Helsinki", country: "Finland", latitude: 60.3172, longitude: 24.9633 },
    Airport { code: "DUB", name: "Dublin Airport", city: "Dublin", country: "Ireland", latitude: 53.4264, longitude: -6.2499 },
    Airport { code: "LIS", name: "Lisbon Portela", city: "Lisbon", country: "Portugal", latitude: 38.7756, longitude: -9.1354 },
    Airport { code: "ATH", name: "Athens International", city: "Athens", country: "Greece", latitude: 37.9364, longitude: 23.9445 },
    Airport { code: "IST", name: "Istanbul Airport", city: "Istanbul", country: "Turkey", latitude: 41.2753, longitude: 28.7519 },
    Airport { code: "WAW", name: "Warsaw Chopin", city: "Warsaw", country: "Poland", latitude: 52.1657, longitude: 20.9671 },
    Airport { code: "PRG", name: "Václav Havel Airport", city: "Prague", country: "Czech Republic", latitude: 50.1008, longitude: 14.2600 },
    Airport { code: "BUD", name: "Budapest Ferenc Liszt", city: "Budapest", country: "Hungary", latitude: 47.4298, longitude: 19.2611 },
    // Middle East
    Airport { code: "DXB", name: "Dubai International", city: "Dubai", country: "United Arab Emirates", latitude: 25.2532, longitude: 55.3657 },
    Airport { code: "AUH", name: "Abu Dhabi International", city: "Abu Dhabi", country: "United Arab Emirates", latitude: 24.4330, longitude: 54.6511 },
    Airport { code: "DOH", name: "Hamad International", city: "Doha", country: "Qatar", latitude: 25.2731, longitude: 51.6081 },
    Airport { code: "TLV", name: "Ben Gurion Airport", city: "Tel Aviv", country: "Israel", latitude: 32.0055, longitude: 34.8854 },
    Airport { code: "AMM", name: "Queen Alia International", city: "Amman", country: "Jordan", latitude: 31.7226, longitude: 35.9932 },
    Airport { code: "RUH", name: "King Khalid International", city: "Riyadh", country: "Saudi Arabia", latitude: 24.9576, longitude: 46.6988 },
    Airport { code: "JED", name: "King Abdulaziz International", city: "Jeddah", country: "Saudi Arabia", latitude: 21.6796, longitude: 39.1565 },
    Airport { code: "BAH", name: "Bahrain International", city: "Manama", country: "Bahrain", latitude: 26.2708, longitude: 50.6336 },
    Airport { code: "KWI", name: "Kuwait International", city: "Kuwait City", country: "Kuwait", latitude: 29.2266, longitude: 47.9689 },
    Airport { code: "MCT", name: "Muscat International", city: "Muscat", country: "Oman", latitude: 23.5933, longitude: 58.2844 },
    // Asia
    Airport { code: "SIN", name: "Singapore Changi", city: "Singapore", country: "Singapore", latitude: 1.3644, longitude: 103.9915 },
    Airport { code: "HKG", name: "Hong Kong International", city: "Hong Kong", country: "Hong Kong", latitude: 22.3080, longitude: 113.9185 },
    Airport { code: "NRT", name: "Narita International", city: "Tokyo", country: "Japan", latitude: 35.7720, longitude: 140.3929 },
    Airport { code: "HND", name: "Tokyo Haneda", city: "Tokyo", country: "Japan", latitude: 35.5494, longitude: 139.7798 },
    Airport { code: "KIX", name: "Kansai International", city: "Osaka", country: "Japan", latitude: 34.4347, longitude: 135.2441 },
    Airport { code: "ICN", name: "Incheon International", city: "Seoul", country: "South Korea", latitude: 37.4602, longitude: 126.4407 },
    Airport { code: "PEK", name: "Beijing Capital International", city: "Beijing", country: "China", latitude: 40.0799, longitude: 116.6031 },
    Airport { code: "PVG", name: "Shanghai Pudong International", city: "Shanghai", country: "China", latitude: 31.1443, longitude: 121.8083 },
    Airport { code: "CAN", name: "Guangzhou Baiyun International", city: "Guangzhou", country: "China", latitude: 23.3924, longitude: 113.2988 },
    Airport { code: "TPE", name: "Taiwan Taoyuan International", city: "Taipei", country: "Taiwan", latitude: 25.0797, longitude: 121.2342 },
    Airport { code: "BKK", name: "Suvarnabhumi Airport", city: "Bangkok", country: "Thailand", latitude: 13.6900, longitude: 100.7501 },
    Airport { code: "KUL", name: "Kuala Lumpur International", city: "Kuala Lumpur", country: "Malaysia", latitude: 2.7456, longitude: 101.7099 },
    Airport { code: "CGK", name: "Soekarno-Hatta International", city: "Jakarta", country: "Indonesia", latitude: -6.1256, longitude: 106.6559 },
    Airport { code: "MNL", name: "Ninoy Aquino International", city: "Manila", country: "Philippines", latitude: 14.5086, longitude: 121.0197 },
    Airport { code: "DEL", name: "Indira Gandhi International", city: "Delhi", country: "India", latitude: 28.5562, longitude: 77.1000 },
    Airport { code: "BOM", name: "Chhatrapati Shivaji International", city: "Mumbai", country: "India", latitude: 19.0896, longitude: 72.8656 },
    Airport { code: "BLR", name: "Kempegowda International", city: "Bangalore", country: "India", latitude: 13.1986, longitude: 77.7066 },
    Airport { code: "HAN", name: "Noi Bai International", city: "Hanoi", country: "Vietnam", latitude: 21.2212, longitude: 105.8072 },
    Airport { code: "SGN", name: "Tan Son Nhat International", city: "Ho Chi Minh City", country: "Vietnam", latitude: 10.8188, longitude: 106.6520 },
    // Oceania
    Airport { code: "SYD", name: "Sydney Airport", city: "Sydney", country: "Australia", latitude: -33.9399, longitude: 151.1753 },
    Airport { code: "MEL", name: "Melbourne Airport", city: "Melbourne", country: "Australia", latitude: -37.6690, longitude: 144.8410 },
    Airport { code: "BNE", name: "Brisbane Airport", city: "Brisbane", country: "Australia", latitude: -27.3842, longitude: 153.1175 },
    Airport { code: "PER", name: "Perth Airport", city: "Perth", country: "Australia", latitude: -31.9403, longitude: 115.9672 },
    Airport { code: "AKL", name: "Auckland Airport", city: "Auckland", country: "New Zealand", latitude: -37.0082, longitude: 174.7850 },
    Airport { code: "WLG", name: "Wellington International", city: "Wellington", country: "New Zealand", latitude: -41.3272, longitude: 174.8053 },
    // Africa
    Airport { code: "JNB", name: "O.R. Tambo International", city: "Johannesburg", country: "South Africa", latitude: -26.1367, longitude: 28.2411 },
    Airport { code: "CPT", name: "Cape Town International", city: "Cape Town", country: "South Africa", latitude: -33.9715, longitude: 18.6021 },
    Airport { code: "CAI", name: "Cairo International", city: "Cairo", country: "Egypt", latitude: 30.1219, longitude: 31.4056 },
    Airport { code: "ADD", name: "Addis Ababa Bole International", city: "Addis Ababa", country: "Ethiopia", latitude: 8.9779, longitude: 38.7993 },
    Airport { code: "NBO", name: "Jomo Kenyatta International", city: "Nairobi", country: "Kenya", latitude: -1.3192, longitude: 36.9278 },
    Airport { code: "CMN", name: "Mohammed V International", city: "Casablanca", country: "Morocco", latitude: 33.3675, longitude: -7.5898 },
    Airport { code: "LOS", name: "Murtala Muhammed International", city: "Lagos", country: "Nigeria", latitude: 6.5774, longitude: 3.3212 },
    // South America
    Airport { code: "GRU", name: "São Paulo-Guarulhos International", city: "São Paulo", country: "Brazil", latitude: -23.4356, longitude: -46.4731 },
    Airport { code: "GIG", name: "Rio de Janeiro-Galeão International", city: "Rio de Janeiro", country: "Brazil", latitude: -22.8090, longitude: -43.2506 },
    Airport { code: "EZE", name: "Ministro Pistarini International", city: "Buenos Aires", country: "Argentina", latitude: -34.8222, longitude: -58.5358 },
    Airport { code: "SCL", name: "Arturo Merino Benítez International", city: "Santiago", country: "Chile", latitude: -33.3930, longitude: -70.7858 },
    Airport { code: "BOG", name: "El Dorado International", city: "Bogotá", country: "Colombia", latitude: 4.7016, longitude: -74.1469 },
    Airport { code: "LIM", name: "Jorge Chávez International", city: "Lima", country: "Peru", latitude: -12.0219, longitude: -77.1143 },
    // Central America & Caribbean
    Airport { code: "MEX", name: "Mexico City International", city: "Mexico City", country: "Mexico", latitude: 19.4363, longitude: -99.0721 },
    Airport { code: "CUN", name: "Cancún International", city: "Cancún", country: "Mexico", latitude: 21.0365, longitude: -86.8771 },
    Airport { code: "PTY", name: "Tocumen International", city: "Panama City", country: "Panama", latitude: 9.0714, longitude: -79.3835 },
    Airport { code: "SJO", name: "Juan Santamaría International", city: "San José", country: "Costa Rica", latitude: 9.9939, longitude: -84.2088 },
    Airport { code: "MBJ", name: "Sangster International", city: "Montego Bay", country: "Jamaica", latitude: 18.5037, longitude: -77.9134 },
    Airport { code: "NAS", name: "Lynden Pindling International", city: "Nassau", country: "Bahamas", latitude: 25.0390, longitude: -77.4662 },
    // Canada
    Airport { code: "YYZ", name: "Toronto Pearson International", city: "Toronto", country: "Canada", latitude: 43.6777, longitude: -79.6248 },
    Airport { code: "YVR", name: "Vancouver International", city: "Vancouver", country: "Canada", latitude: 49.1947, longitude: -123.1792 },
    Airport { code: "YUL", name: "Montréal-Trudeau International", city: "Montreal", country: "Canada", latitude: 45.4706, longitude: -73.7408 },
    Airport { code: "YYC", name: "Calgary International", city: "Calgary", country: "Canada", latitude: 51.1215, longitude: -114.0076 },
];
