use super::{SeedProduct, seed};

pub const DAIRY: &[SeedProduct] = &[
    seed("DAI001", "Queso Fresco", "Cheese", 2800, "case", "12x12 oz", 40),
    seed("DAI002", "Queso Oaxaca", "Cheese", 3600, "case", "6x1 lb", 25),
    seed("DAI003", "Cotija Cheese", "Cheese", 4200, "case", "10 lb", 18),
    seed("DAI004", "Shredded Monterey Jack Cheese", "Cheese", 3900, "case", "4x5 lb", 22),
    seed("DAI005", "Mexican Crema", "Cream", 2600, "case", "12x15 oz", 30),
    seed("DAI006", "Sour Cream", "Cream", 2400, "case", "4x5 lb", 35),
    seed("DAI007", "Whole Milk", "Milk", 3000, "case", "4x1 gal", 20),
    seed("DAI008", "Unsalted Butter", "Butter", 4800, "case", "36x1 lb", 16),
    seed("DAI009", "Large Eggs", "Eggs", 4500, "case", "15 dozen", 0),
    seed("DAI010", "Cream Cheese", "Cheese", 3400, "case", "3x3 lb", 12),
];
