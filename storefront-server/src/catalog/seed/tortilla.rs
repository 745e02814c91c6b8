use super::{SeedProduct, seed};

pub const TORTILLAS: &[SeedProduct] = &[
    seed("TOR001", "White Corn Tortillas 6in", "", 1250, "case", "12x30 ct", 120),
    seed("TOR002", "Yellow Corn Tortillas 6in", "", 1250, "case", "12x30 ct", 80),
    seed("TOR003", "Flour Tortillas 8in", "", 1600, "case", "12x20 ct", 90),
    seed("TOR004", "Flour Tortillas 10in", "", 1850, "case", "12x12 ct", 60),
    seed("TOR005", "Flour Tortillas 12in Burrito", "", 2100, "case", "12x10 ct", 45),
    seed("TOR006", "Whole Wheat Flour Tortillas", "", 2000, "case", "12x12 ct", 19),
    seed("TOR007", "Organic Blue Corn Tortillas", "", 2400, "case", "12x24 ct", 10),
    seed("TOR008", "Tostadas Caseras", "", 1700, "case", "12x20 ct", 30),
    seed("TOR009", "Tortilla Chips Restaurant Style", "", 1900, "case", "6x2 lb", 50),
    seed("TOR010", "Masa Harina", "", 2600, "case", "50 lb", 20),
    seed("TOR011", "Fresh Masa for Tamales", "", 1800, "case", "10 lb", 8),
];
