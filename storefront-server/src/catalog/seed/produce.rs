use super::{SeedProduct, seed};

pub const PRODUCE: &[SeedProduct] = &[
    // Avocados
    seed("AVG001", "Avocados Mix #1", "Avocados", 4850, "case", "48 ct", 120),
    seed("AVO001", "Hass Avocados 48ct", "", 5200, "case", "48 ct", 85),
    seed("AVO002", "Hass Avocados 60ct", "", 4975, "case", "60 ct", 64),
    seed("AVO003", "Hass Avocados 84ct", "", 4600, "case", "84 ct", 15),
    seed("AVO004", "Organic Hass Avocados", "", 6400, "case", "48 ct", 22),
    // Tomatoes
    seed("TOM001", "Roma Tomatoes", "", 2450, "case", "25 lb", 140),
    seed("TOM002", "Vine Ripe Tomatoes 5x6", "", 3200, "case", "25 lb", 60),
    seed("TOM003", "Cherry Tomatoes", "", 2800, "flat", "12 pints", 40),
    seed("TOM004", "Grape Tomatoes", "", 2650, "flat", "12 pints", 55),
    seed("TOM005", "Heirloom Tomatoes", "", 4200, "case", "10 lb", 12),
    seed("TOM006", "Organic Roma Tomatoes", "", 3600, "case", "25 lb", 18),
    seed("TOM007", "Beefsteak Tomatoes", "", 3100, "case", "20 lb", 45),
    seed("TOM008", "Sliced Tomatoes", "", 2900, "case", "10 lb", 30),
    seed("TML001", "Tomatillos", "", 3400, "case", "25 lb", 70),
    // Peppers and chiles
    seed("PEP001", "Jalapeño Peppers", "", 2200, "case", "25 lb", 150),
    seed("PEP002", "Serrano Peppers", "", 2600, "case", "20 lb", 80),
    seed("PEP003", "Green Bell Peppers", "", 3000, "case", "1 1/9 bu", 95),
    seed("PEP004", "Red Bell Peppers", "", 4200, "case", "11 lb", 40),
    seed("PEP005", "Poblano Peppers", "", 2800, "case", "20 lb", 60),
    seed("PEP006", "Habanero Peppers", "", 1800, "box", "8 lb", 14),
    seed("PEP007", "Anaheim Peppers", "", 2700, "case", "20 lb", 35),
    seed("PEP008", "Dried Guajillo Chiles", "", 1450, "bag", "5 lb", 50),
    seed("PEP009", "Dried Ancho Chiles", "", 1600, "bag", "5 lb", 0),
    seed("PRP004", "Sliced Jalapeños", "", 1900, "tub", "4x5 lb", 22),
    // Onions and garlic
    seed("ONI001", "Yellow Onions", "", 2100, "sack", "50 lb", 200),
    seed("ONI002", "White Onions", "", 2400, "sack", "50 lb", 160),
    seed("ONI003", "Red Onions", "", 2600, "sack", "25 lb", 90),
    seed("ONI004", "Green Onions", "", 1900, "case", "48 bunches", 75),
    seed("ONI005", "Peeled White Onions", "", 1850, "case", "10 lb", 25),
    seed("ONI006", "Texas 1015 Sweet Onions", "", 2900, "sack", "40 lb", 10),
    seed("GAR001", "Peeled Garlic", "", 3800, "case", "4x5 lb", 30),
    seed("GAR002", "Garlic Bulbs", "", 5400, "case", "30 lb", 45),
    // Potatoes
    seed("POT001", "Idaho Russet Potatoes", "", 2600, "sack", "50 lb", 180),
    seed("POT002", "Red Potatoes", "", 2900, "sack", "50 lb", 70),
    seed("POT003", "Yukon Gold Potatoes", "", 3100, "sack", "50 lb", 55),
    seed("POT004", "Sweet Potatoes", "", 3300, "case", "40 lb", 48),
    // Lettuce, salads and greens
    seed("LET001", "Iceberg Lettuce", "", 2950, "case", "24 ct", 66),
    seed("LET002", "Romaine Hearts", "", 3400, "case", "12x3 ct", 44),
    seed("LET003", "Shredded Lettuce", "", 1600, "case", "4x5 lb", 38),
    seed("LET004", "Green Leaf Lettuce", "", 2700, "case", "24 ct", 20),
    seed("SAL001", "Spring Salad Mix", "", 2100, "case", "3 lb", 16),
    seed("SAL002", "Organic Baby Spinach", "", 2600, "case", "4 lb", 28),
    seed("SAL003", "Shredded Coleslaw Mix", "", 1500, "case", "4x5 lb", 42),
    seed("GRN001", "Curly Kale", "", 2400, "case", "24 bunches", 33),
    seed("GRN002", "Green Cabbage", "", 1900, "case", "50 lb", 88),
    seed("GRN003", "Red Cabbage", "", 2300, "case", "45 lb", 26),
    seed("GRN004", "Swiss Chard", "", 2500, "case", "24 bunches", 12),
    // Herbs
    seed("HRB001", "Cilantro", "", 1800, "case", "60 bunches", 140),
    seed("HRB002", "Italian Parsley", "", 1900, "case", "60 bunches", 50),
    seed("HRB003", "Fresh Basil", "", 1400, "case", "1 lb", 15),
    seed("HRB004", "Mint", "", 1600, "case", "1 lb", 18),
    seed("HRB005", "Epazote", "Herbs", 1500, "case", "1 lb", 8),
    // Citrus
    seed("CIT001", "Limes 175ct", "", 3400, "case", "40 lb", 210),
    seed("CIT002", "Limes 200ct", "", 3200, "case", "40 lb", 95),
    seed("CIT003", "Lemons 115ct", "", 4100, "case", "40 lb", 65),
    seed("CIT004", "Valencia Oranges", "", 3600, "case", "40 lb", 50),
    seed("CIT005", "Texas Ruby Red Grapefruit", "", 3500, "case", "40 lb", 22),
    seed("CIT006", "Key Limes", "", 2800, "case", "10 lb", 9),
    // Berries
    seed("BER001", "Strawberries", "", 3200, "flat", "8x1 lb", 48),
    seed("BER002", "Blueberries", "", 3800, "flat", "12x6 oz", 36),
    seed("BER003", "Raspberries", "", 3400, "flat", "12x6 oz", 14),
    seed("BER004", "Blackberries", "", 3000, "flat", "12x6 oz", 0),
    // Melons
    seed("MEL001", "Cantaloupe", "", 2600, "case", "12 ct", 30),
    seed("MEL002", "Honeydew Melons", "", 2700, "case", "6 ct", 25),
    seed("MEL003", "Seedless Watermelon", "", 1100, "each", "1 ct", 60),
    // Tropical
    seed("TRP001", "Tommy Atkins Mangoes", "", 2200, "case", "9 ct", 80),
    seed("TRP002", "Ataulfo Mangoes", "", 2600, "case", "18 ct", 35),
    seed("TRP003", "Pineapples", "", 2400, "case", "7 ct", 40),
    seed("TRP004", "Papayas", "", 3000, "case", "35 lb", 16),
    seed("TRP005", "Bananas", "", 2350, "case", "40 lb", 150),
    seed("TRP006", "Plantains", "", 2500, "case", "50 lb", 45),
    seed("TRP007", "Coconuts", "", 3000, "case", "12 ct", 20),
    seed("PRP003", "Pre-Cut Pineapple Chunks", "", 2900, "tub", "4x5 lb", 15),
    // Tree fruit
    seed("APL001", "Gala Apples", "", 3600, "case", "88 ct", 40),
    seed("APL002", "Granny Smith Apples", "", 3800, "case", "88 ct", 22),
    seed("APL003", "Washington Red Delicious Apples", "", 3400, "case", "100 ct", 30),
    seed("PER001", "Bartlett Pears", "", 3500, "case", "90 ct", 18),
    seed("STN001", "Yellow Peaches", "", 3100, "case", "25 lb", 20),
    seed("STN002", "Nectarines", "", 3200, "case", "25 lb", 10),
    seed("STN003", "Red Plums", "", 2900, "case", "28 lb", 0),
    seed("STN004", "Bing Cherries", "", 5200, "case", "18 lb", 12),
    seed("GRP001", "Red Seedless Grapes", "", 3300, "case", "18 lb", 40),
    seed("GRP002", "Green Seedless Grapes", "", 3300, "case", "18 lb", 38),
    // Cucumbers and squash
    seed("CUC001", "Cucumbers", "", 2200, "case", "1 1/9 bu", 75),
    seed("CUC002", "English Cucumbers", "", 2300, "case", "12 ct", 30),
    seed("SQU001", "Zucchini Squash", "", 2100, "case", "20 lb", 60),
    seed("SQU002", "Yellow Squash", "", 2400, "case", "20 lb", 40),
    seed("SQU003", "Mexican Grey Squash", "", 2300, "case", "20 lb", 35),
    seed("SQU004", "Butternut Squash", "", 2700, "case", "35 lb", 28),
    seed("SQU005", "Chayote", "", 2600, "case", "40 lb", 30),
    // Roots and stalks
    seed("CAR001", "Jumbo Carrots", "", 2400, "sack", "50 lb", 100),
    seed("CAR002", "Baby Peeled Carrots", "", 2300, "case", "4x5 lb", 44),
    seed("CAR003", "Shredded Carrots", "", 1700, "case", "4x5 lb", 19),
    seed("CEL001", "Celery", "", 3000, "case", "24 ct", 50),
    seed("CEL002", "Celery Sticks", "", 2100, "case", "4x5 lb", 11),
    seed("ROO001", "Jicama", "", 2800, "case", "40 lb", 40),
    seed("ROO002", "Red Radishes", "", 2200, "case", "24 bunches", 30),
    seed("ROO003", "Red Beets", "", 2600, "sack", "25 lb", 15),
    seed("ROO004", "Fresh Ginger Root", "", 3900, "case", "30 lb", 20),
    // Brassicas, corn, mushrooms
    seed("BRC001", "Broccoli Crowns", "", 2800, "case", "20 lb", 45),
    seed("BRC002", "Cauliflower", "", 3200, "case", "12 ct", 25),
    seed("BRC003", "Brussels Sprouts", "", 3000, "case", "25 lb", 10),
    seed("CRN001", "Sweet Corn", "", 2200, "crate", "48 ct", 50),
    seed("CRN002", "Corn Husks", "", 1900, "bag", "1 lb", 60),
    seed("MSH001", "White Mushrooms", "", 2600, "case", "10 lb", 35),
    seed("MSH002", "Sliced Mushrooms", "", 2500, "case", "10 lb", 20),
    seed("MSH003", "Portobello Mushrooms", "", 2800, "case", "5 lb", 12),
    // Beans, stalks, nightshades, cactus
    seed("BNS001", "Green Beans", "", 3000, "case", "25 lb", 30),
    seed("BNS002", "Sugar Snap Peas", "", 3300, "case", "10 lb", 14),
    seed("ASP001", "Asparagus", "", 3900, "case", "28 lb", 25),
    seed("EGG001", "Eggplant", "", 2400, "case", "25 lb", 28),
    seed("CAC001", "Nopales Cactus Paddles", "", 2700, "case", "20 lb", 25),
    seed("CAC002", "Sliced Nopales", "", 2000, "case", "4x5 lb", 10),
    // Exotic
    seed("EXO001", "Dragon Fruit", "", 4600, "case", "10 lb", 8),
    seed("EXO002", "Passion Fruit", "", 4200, "case", "5 lb", 6),
    seed("EXO003", "Guavas", "", 3500, "case", "10 lb", 14),
    seed("EXO004", "Tamarind Pods", "", 2800, "case", "10 lb", 20),
    seed("EXO005", "Lychee", "", 5800, "case", "5 lb", 0),
    // Prepared
    seed("PRP001", "Fresh Pico de Gallo", "", 2200, "tub", "5 lb", 24),
    seed("PRP002", "Fresh Guacamole", "", 3600, "tub", "4x2 lb", 18),
];
