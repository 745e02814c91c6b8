//! Image resolver
//!
//! `resolve_image` scans [`PRODUCT_IMAGES`] in order and returns the first
//! entry whose key is a case-insensitive substring of the product name. On a
//! miss it looks the subcategory up in [`SUBCATEGORY_IMAGES`], then falls
//! back to [`DEFAULT_IMAGE`].
//!
//! More specific keys sit above the general ones they contain
//! ("organic hass" above "hass avocado", "sliced jalape" above "jalapeño").

pub const DEFAULT_IMAGE: &str = "/images/products/placeholder.jpg";

/// Ordered name-fragment table, first hit wins
pub const PRODUCT_IMAGES: &[(&str, &str)] = &[
    // Avocados
    ("organic hass", "/images/products/organic-hass-avocados.jpg"),
    ("hass avocado", "/images/products/hass-avocados.jpg"),
    // Tomatoes
    ("heirloom tomato", "/images/products/heirloom-tomatoes.jpg"),
    ("cherry tomato", "/images/products/cherry-tomatoes.jpg"),
    ("grape tomato", "/images/products/grape-tomatoes.jpg"),
    ("roma tomato", "/images/products/roma-tomatoes.jpg"),
    ("vine ripe", "/images/products/vine-ripe-tomatoes.jpg"),
    ("beefsteak", "/images/products/beefsteak-tomatoes.jpg"),
    ("sliced tomato", "/images/products/sliced-tomatoes.jpg"),
    ("tomatillo", "/images/products/tomatillos.jpg"),
    // Peppers and chiles
    ("sliced jalape", "/images/products/sliced-jalapenos.jpg"),
    ("jalapeño", "/images/products/jalapenos.jpg"),
    ("jalapeno", "/images/products/jalapenos.jpg"),
    ("serrano", "/images/products/serrano-peppers.jpg"),
    ("green bell", "/images/products/green-bell-peppers.jpg"),
    ("red bell", "/images/products/red-bell-peppers.jpg"),
    ("poblano", "/images/products/poblano-peppers.jpg"),
    ("habanero", "/images/products/habanero-peppers.jpg"),
    ("anaheim", "/images/products/anaheim-peppers.jpg"),
    ("guajillo", "/images/products/guajillo-chiles.jpg"),
    ("ancho", "/images/products/ancho-chiles.jpg"),
    // Onions and garlic
    ("green onion", "/images/products/green-onions.jpg"),
    ("yellow onion", "/images/products/yellow-onions.jpg"),
    ("peeled white onion", "/images/products/peeled-onions.jpg"),
    ("white onion", "/images/products/white-onions.jpg"),
    ("red onion", "/images/products/red-onions.jpg"),
    ("sweet onion", "/images/products/sweet-onions.jpg"),
    ("peeled garlic", "/images/products/peeled-garlic.jpg"),
    ("garlic", "/images/products/garlic.jpg"),
    // Potatoes
    ("sweet potato", "/images/products/sweet-potatoes.jpg"),
    ("russet", "/images/products/russet-potatoes.jpg"),
    ("red potato", "/images/products/red-potatoes.jpg"),
    ("yukon", "/images/products/yukon-gold-potatoes.jpg"),
    // Lettuce and greens
    ("iceberg", "/images/products/iceberg-lettuce.jpg"),
    ("romaine", "/images/products/romaine-hearts.jpg"),
    ("shredded lettuce", "/images/products/shredded-lettuce.jpg"),
    ("green leaf", "/images/products/green-leaf-lettuce.jpg"),
    ("spring salad", "/images/products/spring-mix.jpg"),
    ("spinach", "/images/products/baby-spinach.jpg"),
    ("coleslaw", "/images/products/coleslaw-mix.jpg"),
    ("kale", "/images/products/kale.jpg"),
    ("green cabbage", "/images/products/green-cabbage.jpg"),
    ("red cabbage", "/images/products/red-cabbage.jpg"),
    ("chard", "/images/products/swiss-chard.jpg"),
    // Herbs
    ("cilantro", "/images/products/cilantro.jpg"),
    ("parsley", "/images/products/parsley.jpg"),
    ("basil", "/images/products/basil.jpg"),
    ("mint", "/images/products/mint.jpg"),
    ("epazote", "/images/products/epazote.jpg"),
    // Citrus
    ("key lime", "/images/products/key-limes.jpg"),
    ("lime", "/images/products/limes.jpg"),
    ("lemon", "/images/products/lemons.jpg"),
    ("orange", "/images/products/oranges.jpg"),
    ("grapefruit", "/images/products/grapefruit.jpg"),
    // Berries and melons
    ("strawberr", "/images/products/strawberries.jpg"),
    ("blueberr", "/images/products/blueberries.jpg"),
    ("raspberr", "/images/products/raspberries.jpg"),
    ("blackberr", "/images/products/blackberries.jpg"),
    ("cantaloupe", "/images/products/cantaloupe.jpg"),
    ("honeydew", "/images/products/honeydew.jpg"),
    ("watermelon", "/images/products/watermelon.jpg"),
    // Tropical
    ("ataulfo", "/images/products/ataulfo-mangoes.jpg"),
    ("mango", "/images/products/mangoes.jpg"),
    ("pre-cut pineapple", "/images/products/pineapple-chunks.jpg"),
    ("pineapple", "/images/products/pineapples.jpg"),
    ("papaya", "/images/products/papayas.jpg"),
    ("banana", "/images/products/bananas.jpg"),
    ("plantain", "/images/products/plantains.jpg"),
    ("coconut", "/images/products/coconuts.jpg"),
    // Tree fruit
    ("gala", "/images/products/gala-apples.jpg"),
    ("granny smith", "/images/products/granny-smith-apples.jpg"),
    ("red delicious", "/images/products/red-delicious-apples.jpg"),
    ("bartlett", "/images/products/bartlett-pears.jpg"),
    ("peach", "/images/products/peaches.jpg"),
    ("nectarine", "/images/products/nectarines.jpg"),
    ("plum", "/images/products/plums.jpg"),
    ("cherries", "/images/products/cherries.jpg"),
    ("red seedless grape", "/images/products/red-grapes.jpg"),
    ("green seedless grape", "/images/products/green-grapes.jpg"),
    // Vine and squash
    ("english cucumber", "/images/products/english-cucumbers.jpg"),
    ("cucumber", "/images/products/cucumbers.jpg"),
    ("zucchini", "/images/products/zucchini.jpg"),
    ("yellow squash", "/images/products/yellow-squash.jpg"),
    ("grey squash", "/images/products/grey-squash.jpg"),
    ("butternut", "/images/products/butternut-squash.jpg"),
    ("chayote", "/images/products/chayote.jpg"),
    // Roots and stalks
    ("baby peeled carrot", "/images/products/baby-carrots.jpg"),
    ("shredded carrot", "/images/products/shredded-carrots.jpg"),
    ("carrot", "/images/products/carrots.jpg"),
    ("celery stick", "/images/products/celery-sticks.jpg"),
    ("celery", "/images/products/celery.jpg"),
    ("jicama", "/images/products/jicama.jpg"),
    ("radish", "/images/products/radishes.jpg"),
    ("beet", "/images/products/beets.jpg"),
    ("ginger", "/images/products/ginger.jpg"),
    ("broccoli", "/images/products/broccoli.jpg"),
    ("cauliflower", "/images/products/cauliflower.jpg"),
    ("brussels", "/images/products/brussels-sprouts.jpg"),
    ("sweet corn", "/images/products/sweet-corn.jpg"),
    ("corn husk", "/images/products/corn-husks.jpg"),
    ("sliced mushroom", "/images/products/sliced-mushrooms.jpg"),
    ("portobello", "/images/products/portobello.jpg"),
    ("white mushroom", "/images/products/white-mushrooms.jpg"),
    ("green bean", "/images/products/green-beans.jpg"),
    ("snap pea", "/images/products/snap-peas.jpg"),
    ("asparagus", "/images/products/asparagus.jpg"),
    ("eggplant", "/images/products/eggplant.jpg"),
    ("sliced nopal", "/images/products/sliced-nopales.jpg"),
    ("nopal", "/images/products/nopales.jpg"),
    // Exotic
    ("dragon fruit", "/images/products/dragon-fruit.jpg"),
    ("passion fruit", "/images/products/passion-fruit.jpg"),
    ("guava", "/images/products/guavas.jpg"),
    ("tamarind", "/images/products/tamarind.jpg"),
    ("lychee", "/images/products/lychee.jpg"),
    // Prepared
    ("pico de gallo", "/images/products/pico-de-gallo.jpg"),
    ("guacamole", "/images/products/guacamole.jpg"),
    // Tortillas and masa
    ("white corn tortilla", "/images/products/white-corn-tortillas.jpg"),
    ("yellow corn tortilla", "/images/products/yellow-corn-tortillas.jpg"),
    ("blue corn tortilla", "/images/products/blue-corn-tortillas.jpg"),
    ("whole wheat", "/images/products/whole-wheat-tortillas.jpg"),
    ("burrito", "/images/products/burrito-tortillas.jpg"),
    ("flour tortilla", "/images/products/flour-tortillas.jpg"),
    ("tortilla chip", "/images/products/tortilla-chips.jpg"),
    ("tostada", "/images/products/tostadas.jpg"),
    ("masa harina", "/images/products/masa-harina.jpg"),
    ("fresh masa", "/images/products/fresh-masa.jpg"),
    // Dairy
    ("queso fresco", "/images/products/queso-fresco.jpg"),
    ("oaxaca", "/images/products/queso-oaxaca.jpg"),
    ("cotija", "/images/products/cotija.jpg"),
    ("monterey jack", "/images/products/monterey-jack.jpg"),
    ("crema", "/images/products/mexican-crema.jpg"),
    ("sour cream", "/images/products/sour-cream.jpg"),
    ("cream cheese", "/images/products/cream-cheese.jpg"),
    ("whole milk", "/images/products/whole-milk.jpg"),
    ("butter", "/images/products/butter.jpg"),
    ("eggs", "/images/products/eggs.jpg"),
];

/// Subcategory fallback table, matched case-insensitively on the whole label
pub const SUBCATEGORY_IMAGES: &[(&str, &str)] = &[
    ("Avocados", "/images/categories/avocados.jpg"),
    ("Tomatoes", "/images/categories/tomatoes.jpg"),
    ("Tomatillos", "/images/categories/tomatillos.jpg"),
    ("Peppers & Chiles", "/images/categories/peppers.jpg"),
    ("Onions", "/images/categories/onions.jpg"),
    ("Garlic", "/images/categories/garlic.jpg"),
    ("Potatoes", "/images/categories/potatoes.jpg"),
    ("Sweet Potatoes", "/images/categories/sweet-potatoes.jpg"),
    ("Lettuce", "/images/categories/lettuce.jpg"),
    ("Salad Mixes", "/images/categories/salad-mixes.jpg"),
    ("Leafy Greens", "/images/categories/leafy-greens.jpg"),
    ("Cabbage", "/images/categories/cabbage.jpg"),
    ("Herbs", "/images/categories/herbs.jpg"),
    ("Citrus", "/images/categories/citrus.jpg"),
    ("Berries", "/images/categories/berries.jpg"),
    ("Melons", "/images/categories/melons.jpg"),
    ("Bananas", "/images/categories/bananas.jpg"),
    ("Tropical Fruit", "/images/categories/tropical.jpg"),
    ("Exotic Fruit", "/images/categories/exotic.jpg"),
    ("Apples", "/images/categories/apples.jpg"),
    ("Pears", "/images/categories/pears.jpg"),
    ("Stone Fruit", "/images/categories/stone-fruit.jpg"),
    ("Grapes", "/images/categories/grapes.jpg"),
    ("Cucumbers", "/images/categories/cucumbers.jpg"),
    ("Squash", "/images/categories/squash.jpg"),
    ("Carrots", "/images/categories/carrots.jpg"),
    ("Celery", "/images/categories/celery.jpg"),
    ("Root Vegetables", "/images/categories/root-vegetables.jpg"),
    ("Broccoli & Cauliflower", "/images/categories/broccoli-cauliflower.jpg"),
    ("Corn", "/images/categories/corn.jpg"),
    ("Mushrooms", "/images/categories/mushrooms.jpg"),
    ("Beans & Peas", "/images/categories/beans-peas.jpg"),
    ("Asparagus", "/images/categories/asparagus.jpg"),
    ("Eggplant", "/images/categories/eggplant.jpg"),
    ("Cactus", "/images/categories/cactus.jpg"),
    ("Fresh Salsas", "/images/categories/salsas.jpg"),
    ("Corn Tortillas", "/images/categories/corn-tortillas.jpg"),
    ("Flour Tortillas", "/images/categories/flour-tortillas.jpg"),
    ("Tostadas & Chips", "/images/categories/tostadas-chips.jpg"),
    ("Masa", "/images/categories/masa.jpg"),
    ("Cheese", "/images/categories/cheese.jpg"),
    ("Cream", "/images/categories/cream.jpg"),
    ("Milk", "/images/categories/milk.jpg"),
    ("Butter", "/images/categories/butter.jpg"),
    ("Eggs", "/images/categories/eggs.jpg"),
    ("Specialty", "/images/categories/specialty.jpg"),
];

/// Resolve the display image for a product
pub fn resolve_image(name: &str, subcategory: Option<&str>) -> &'static str {
    let lowered = name.to_lowercase();

    if let Some((_, url)) = PRODUCT_IMAGES.iter().find(|(key, _)| lowered.contains(key)) {
        return url;
    }

    subcategory
        .and_then(|sub| {
            SUBCATEGORY_IMAGES
                .iter()
                .find(|(label, _)| label.eq_ignore_ascii_case(sub.trim()))
        })
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_IMAGE)
}
