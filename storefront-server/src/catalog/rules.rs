//! Ordered name-matching rule tables
//!
//! Every table is evaluated top to bottom against the lowercased product
//! name. Department, subcategory, origin, seasonality and preparation tables
//! stop at the first hit, so keyword sets may overlap and the row order is
//! part of the behavior. Tag rules are independent and all of them run.

use shared::models::{Department, PreparationLevel, ProductCategory, ProductTag, Seasonality};

/// First-match rule: any keyword contained in the name selects `value`
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub value: T,
}

impl<T: Copy> KeywordRule<T> {
    pub fn matches(&self, lowered_name: &str) -> bool {
        self.keywords.iter().any(|k| lowered_name.contains(k))
    }
}

/// Department rule, also matching on the seed category
#[derive(Debug, Clone, Copy)]
pub struct DepartmentRule {
    pub categories: &'static [ProductCategory],
    pub keywords: &'static [&'static str],
    pub department: Department,
}

impl DepartmentRule {
    pub fn matches(&self, category: ProductCategory, lowered_name: &str) -> bool {
        self.categories.contains(&category) || self.keywords.iter().any(|k| lowered_name.contains(k))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TagCondition {
    /// Name contains any keyword
    NameAny(&'static [&'static str]),
    /// Name contains none of the keywords
    NameNone(&'static [&'static str]),
    /// Category is listed or name contains any keyword
    CategoryOrName(&'static [ProductCategory], &'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub when: TagCondition,
    pub tag: ProductTag,
}

impl TagRule {
    pub fn matches(&self, category: ProductCategory, lowered_name: &str) -> bool {
        match self.when {
            TagCondition::NameAny(keywords) => keywords.iter().any(|k| lowered_name.contains(k)),
            TagCondition::NameNone(keywords) => !keywords.iter().any(|k| lowered_name.contains(k)),
            TagCondition::CategoryOrName(categories, keywords) => {
                categories.contains(&category) || keywords.iter().any(|k| lowered_name.contains(k))
            }
        }
    }
}

// ========== Department ==========

pub const PREPARED_KEYWORDS: &[&str] = &["pre-cut", "shredded", "sliced", "peeled", "salad mix"];
pub const SPECIALTY_KEYWORDS: &[&str] = &["organic", "heirloom", "exotic", "dragon fruit", "passion fruit"];

/// Evaluated in order; a product matching none is Fresh Produce
pub const DEPARTMENT_RULES: &[DepartmentRule] = &[
    DepartmentRule {
        categories: &[ProductCategory::Tortilla],
        keywords: &["tortilla"],
        department: Department::Bakery,
    },
    DepartmentRule {
        categories: &[],
        keywords: PREPARED_KEYWORDS,
        department: Department::PreparedProduce,
    },
    DepartmentRule {
        categories: &[],
        keywords: SPECIALTY_KEYWORDS,
        department: Department::Specialty,
    },
];

pub const DEFAULT_DEPARTMENT: Department = Department::FreshProduce;

// ========== Subcategory ==========

pub const FALLBACK_SUBCATEGORY: &str = "Specialty";

/// Canonical subcategory labels
pub const SUBCATEGORY_LABELS: &[&str] = &[
    "Fresh Salsas",
    "Tostadas & Chips",
    "Corn Tortillas",
    "Flour Tortillas",
    "Masa",
    "Avocados",
    "Tomatillos",
    "Tomatoes",
    "Sweet Potatoes",
    "Potatoes",
    "Onions",
    "Garlic",
    "Salad Mixes",
    "Lettuce",
    "Leafy Greens",
    "Cabbage",
    "Herbs",
    "Citrus",
    "Berries",
    "Melons",
    "Bananas",
    "Tropical Fruit",
    "Exotic Fruit",
    "Apples",
    "Asparagus",
    "Pears",
    "Stone Fruit",
    "Peppers & Chiles",
    "Grapes",
    "Cucumbers",
    "Squash",
    "Carrots",
    "Celery",
    "Root Vegetables",
    "Broccoli & Cauliflower",
    "Corn",
    "Mushrooms",
    "Beans & Peas",
    "Eggplant",
    "Cactus",
    "Cheese",
    "Cream",
    "Milk",
    "Butter",
    "Eggs",
];

/// Row order resolves overlaps: "grape tomatoes" is a tomato, "pineapple"
/// is tropical before it can be an apple, "butternut squash" is squash
/// before it can be butter, "eggplant" before eggs.
pub const SUBCATEGORY_RULES: &[KeywordRule<&str>] = &[
    KeywordRule { keywords: &["pico de gallo", "guacamole", "salsa"], value: "Fresh Salsas" },
    KeywordRule { keywords: &["tostada", "tortilla chip", "chips"], value: "Tostadas & Chips" },
    KeywordRule { keywords: &["corn tortilla"], value: "Corn Tortillas" },
    KeywordRule { keywords: &["flour tortilla"], value: "Flour Tortillas" },
    KeywordRule { keywords: &["masa"], value: "Masa" },
    KeywordRule { keywords: &["avocado"], value: "Avocados" },
    KeywordRule { keywords: &["tomatillo"], value: "Tomatillos" },
    KeywordRule { keywords: &["tomato"], value: "Tomatoes" },
    KeywordRule { keywords: &["sweet potato", "yam"], value: "Sweet Potatoes" },
    KeywordRule { keywords: &["potato"], value: "Potatoes" },
    KeywordRule { keywords: &["onion", "shallot", "leek", "scallion"], value: "Onions" },
    KeywordRule { keywords: &["garlic"], value: "Garlic" },
    KeywordRule { keywords: &["salad mix", "spring mix", "coleslaw", "slaw"], value: "Salad Mixes" },
    KeywordRule { keywords: &["lettuce", "romaine"], value: "Lettuce" },
    KeywordRule {
        keywords: &["spinach", "kale", "chard", "collard", "greens", "arugula"],
        value: "Leafy Greens",
    },
    KeywordRule { keywords: &["cabbage"], value: "Cabbage" },
    KeywordRule {
        keywords: &["cilantro", "parsley", "basil", "mint", "dill", "epazote", "rosemary", "thyme"],
        value: "Herbs",
    },
    KeywordRule {
        keywords: &["lime", "lemon", "orange", "grapefruit", "tangerine", "clementine"],
        value: "Citrus",
    },
    KeywordRule {
        keywords: &["strawberr", "blueberr", "raspberr", "blackberr", "cranberr"],
        value: "Berries",
    },
    KeywordRule { keywords: &["melon", "cantaloupe", "honeydew"], value: "Melons" },
    KeywordRule { keywords: &["banana", "plantain"], value: "Bananas" },
    KeywordRule { keywords: &["mango", "pineapple", "papaya", "coconut"], value: "Tropical Fruit" },
    KeywordRule {
        keywords: &["dragon fruit", "passion fruit", "guava", "lychee", "tamarind", "star fruit", "cherimoya"],
        value: "Exotic Fruit",
    },
    KeywordRule { keywords: &["apple"], value: "Apples" },
    KeywordRule { keywords: &["asparagus"], value: "Asparagus" },
    KeywordRule { keywords: &["pear"], value: "Pears" },
    KeywordRule { keywords: &["peach", "nectarine", "plum", "cherr", "apricot"], value: "Stone Fruit" },
    KeywordRule {
        keywords: &["pepper", "jalape", "serrano", "poblano", "habanero", "chile", "chili"],
        value: "Peppers & Chiles",
    },
    KeywordRule { keywords: &["grape"], value: "Grapes" },
    KeywordRule { keywords: &["cucumber", "pickle"], value: "Cucumbers" },
    KeywordRule { keywords: &["squash", "zucchini", "chayote", "pumpkin"], value: "Squash" },
    KeywordRule { keywords: &["carrot"], value: "Carrots" },
    KeywordRule { keywords: &["celery"], value: "Celery" },
    KeywordRule {
        keywords: &["jicama", "radish", "beet", "turnip", "ginger", "yuca", "cassava"],
        value: "Root Vegetables",
    },
    KeywordRule { keywords: &["broccoli", "cauliflower", "brussels"], value: "Broccoli & Cauliflower" },
    KeywordRule { keywords: &["corn"], value: "Corn" },
    KeywordRule { keywords: &["mushroom", "portobello"], value: "Mushrooms" },
    KeywordRule { keywords: &["green bean", "snap pea", "snow pea", "bean"], value: "Beans & Peas" },
    KeywordRule { keywords: &["eggplant"], value: "Eggplant" },
    KeywordRule { keywords: &["nopal", "cactus"], value: "Cactus" },
    KeywordRule { keywords: &["cheese", "queso", "cotija"], value: "Cheese" },
    KeywordRule { keywords: &["crema", "cream"], value: "Cream" },
    KeywordRule { keywords: &["milk"], value: "Milk" },
    KeywordRule { keywords: &["butter"], value: "Butter" },
    KeywordRule { keywords: &["egg"], value: "Eggs" },
];

// ========== Origin ==========

pub const DEFAULT_ORIGIN: &str = "USA";

pub const ORIGIN_RULES: &[KeywordRule<&str>] = &[
    KeywordRule { keywords: &["texas", "rio grande", "local"], value: "Texas, USA" },
    KeywordRule { keywords: &["california"], value: "California, USA" },
    KeywordRule { keywords: &["florida"], value: "Florida, USA" },
    KeywordRule { keywords: &["washington"], value: "Washington, USA" },
    KeywordRule { keywords: &["idaho"], value: "Idaho, USA" },
    KeywordRule { keywords: &["vidalia"], value: "Georgia, USA" },
    KeywordRule { keywords: &["avocado"], value: "Michoacán, Mexico" },
    KeywordRule {
        keywords: &[
            "mexican", "mexico", "queso", "crema", "cotija", "nopal", "tomatillo", "chayote", "jicama",
            "tamarind", "epazote", "guajillo", "ancho", "ataulfo", "masa",
        ],
        value: "Mexico",
    },
    KeywordRule { keywords: &["banana", "plantain", "pineapple"], value: "Costa Rica" },
    KeywordRule { keywords: &["peruvian"], value: "Peru" },
    KeywordRule { keywords: &["dragon fruit", "lychee"], value: "Vietnam" },
    KeywordRule { keywords: &["passion fruit"], value: "Ecuador" },
];

// ========== Seasonality ==========

/// "pineapple" is pinned to year-round before the fall "apple" row
pub const SEASONALITY_RULES: &[KeywordRule<Seasonality>] = &[
    KeywordRule { keywords: &["pineapple"], value: Seasonality::YearRound },
    KeywordRule {
        keywords: &["strawberr", "asparagus", "artichoke", "snap pea", "snow pea"],
        value: Seasonality::Spring,
    },
    KeywordRule {
        keywords: &[
            "watermelon", "cantaloupe", "peach", "nectarine", "plum", "cherries", "sweet corn",
            "zucchini", "blueberr",
        ],
        value: Seasonality::Summer,
    },
    KeywordRule {
        keywords: &["pumpkin", "butternut", "acorn squash", "apple", "pear", "cranberr", "sweet potato"],
        value: Seasonality::Fall,
    },
    KeywordRule {
        keywords: &["orange", "grapefruit", "tangerine", "clementine", "brussels", "kale"],
        value: Seasonality::Winter,
    },
];

pub const DEFAULT_SEASONALITY: Seasonality = Seasonality::YearRound;

// ========== Preparation ==========

pub const PREPARATION_RULES: &[KeywordRule<PreparationLevel>] = &[
    KeywordRule {
        keywords: &["pico de gallo", "guacamole", "salsa"],
        value: PreparationLevel::Prepared,
    },
    KeywordRule {
        keywords: &["salad mix", "ready-to-use", "ready to use", "washed"],
        value: PreparationLevel::ReadyToUse,
    },
    KeywordRule {
        keywords: &["pre-cut", "shredded", "sliced", "diced", "peeled", "chopped", "chunks"],
        value: PreparationLevel::PreCut,
    },
];

pub const DEFAULT_PREPARATION: PreparationLevel = PreparationLevel::Whole;

// ========== Tags ==========

/// Independent checks; every row is evaluated
pub const TAG_RULES: &[TagRule] = &[
    // Growing method
    TagRule { when: TagCondition::NameAny(&["organic"]), tag: ProductTag::Organic },
    TagRule { when: TagCondition::NameNone(&["organic"]), tag: ProductTag::Conventional },
    // Provenance
    TagRule { when: TagCondition::NameAny(&["local", "texas"]), tag: ProductTag::Local },
    TagRule {
        when: TagCondition::NameAny(&["imported", "mexican", "mexico", "peruvian", "ataulfo"]),
        tag: ProductTag::Imported,
    },
    TagRule {
        when: TagCondition::NameAny(&["farm fresh", "farm-fresh", "fresh-picked"]),
        tag: ProductTag::FarmFresh,
    },
    // Grade
    TagRule {
        when: TagCondition::NameAny(&["premium", "jumbo", "extra fancy", "heirloom"]),
        tag: ProductTag::Premium,
    },
    TagRule {
        when: TagCondition::NameAny(&["restaurant", "foodservice", "bulk", "#1", "no. 1"]),
        tag: ProductTag::RestaurantGrade,
    },
    // Preparation state
    TagRule {
        when: TagCondition::NameAny(&["pre-cut", "shredded", "sliced", "diced", "chopped", "peeled", "chunks"]),
        tag: ProductTag::PreCut,
    },
    TagRule {
        when: TagCondition::NameAny(&["salad mix", "ready", "washed", "pico de gallo", "guacamole"]),
        tag: ProductTag::ReadyToUse,
    },
    // Variety
    TagRule { when: TagCondition::NameAny(&["heirloom"]), tag: ProductTag::Heirloom },
    TagRule {
        when: TagCondition::NameAny(&[
            "exotic", "dragon fruit", "passion fruit", "lychee", "rambutan", "star fruit", "guava",
            "cherimoya",
        ]),
        tag: ProductTag::Exotic,
    },
    // Storage
    TagRule {
        when: TagCondition::CategoryOrName(
            &[ProductCategory::Dairy],
            &[
                "lettuce", "romaine", "spinach", "kale", "salad", "slaw", "berr", "cilantro", "parsley",
                "basil", "mint", "shredded", "sliced", "peeled", "pre-cut", "pico de gallo", "guacamole",
                "mushroom", "masa", "asparagus", "green onion",
            ],
        ),
        tag: ProductTag::Refrigerated,
    },
    TagRule {
        when: TagCondition::CategoryOrName(
            &[],
            &[
                "avocado", "tomato", "banana", "plantain", "potato", "onion bulb", "yellow onion",
                "white onion", "red onion", "garlic bulb", "tostada", "chips", "dried", "coconut",
            ],
        ),
        tag: ProductTag::RoomTemperature,
    },
    // Dietary
    TagRule {
        when: TagCondition::NameAny(&["corn tortilla", "tostada", "masa", "tortilla chip"]),
        tag: ProductTag::GlutenFree,
    },
    TagRule {
        when: TagCondition::CategoryOrName(&[ProductCategory::Produce], &["corn tortilla", "tostada"]),
        tag: ProductTag::Vegan,
    },
    // Popularity
    TagRule {
        when: TagCondition::NameAny(&[
            "hass", "roma", "yellow onion", "limes", "cilantro", "jalapeño", "jalapeno", "avocados mix",
            "white corn tortilla", "queso fresco",
        ]),
        tag: ProductTag::Bestseller,
    },
];
