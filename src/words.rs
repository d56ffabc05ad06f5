//! Embedded wordlists for the standard six-letter game.
//!
//! Both lists are sorted so that guess validation can binary search them.
//! [`TARGETS`] holds the words a round may draw as its answer; [`GUESSES`]
//! is the superset of words accepted as guesses. Applications with a bigger
//! vocabulary can bring their own lists through
//! [`WordListSource::with_lists()`](crate::WordListSource::with_lists).

pub static TARGETS: [&str; 358] = [
    "absorb", "accept", "anchor", "animal", "august", "autumn", "banana",
    "barrel", "basket", "battle", "beauty", "become", "before", "better",
    "beyond", "bottle", "bottom", "branch", "breath", "bridge", "bright",
    "broken", "bucket", "budget", "burden", "butter", "camera", "candle",
    "cannon", "canvas", "carbon", "career", "carpet", "castle", "cattle",
    "cellar", "center", "change", "cherry", "choice", "church", "circle",
    "clever", "closet", "coffee", "column", "combat", "common", "copper",
    "corner", "cotton", "county", "couple", "course", "cousin", "credit",
    "crisis", "custom", "damage", "dancer", "danger", "debate", "decade",
    "decide", "defend", "degree", "demand", "desert", "design", "detail",
    "device", "dinner", "doctor", "dollar", "domain", "donkey", "double",
    "dragon", "drawer", "driver", "during", "editor", "effort", "eleven",
    "empire", "energy", "engine", "escape", "estate", "expert", "fabric",
    "falcon", "family", "famous", "farmer", "father", "fellow", "figure",
    "finger", "finish", "flavor", "flight", "flower", "forest", "formal",
    "fossil", "fridge", "friend", "frozen", "future", "galaxy", "garage",
    "garden", "garlic", "gather", "gentle", "ginger", "golden", "gospel",
    "ground", "growth", "guitar", "hammer", "handle", "happen", "harbor",
    "hazard", "health", "height", "helmet", "hidden", "hollow", "honest",
    "horror", "hunger", "hunter", "immune", "impact", "income", "injury",
    "insect", "inside", "island", "jacket", "jungle", "junior", "kernel",
    "kidney", "kitten", "ladder", "launch", "lawyer", "leader", "legend",
    "length", "lesson", "letter", "liquid", "listen", "little", "living",
    "locker", "lonely", "luxury", "magnet", "mammal", "manner", "marble",
    "margin", "market", "master", "matter", "meadow", "medium", "member",
    "memory", "mentor", "method", "middle", "minute", "mirror", "mobile",
    "modern", "module", "moment", "monkey", "mother", "motion", "muscle",
    "museum", "napkin", "narrow", "nation", "nature", "nearby", "needle",
    "nephew", "nickel", "nobody", "normal", "notice", "number", "object",
    "office", "orange", "orchid", "origin", "output", "oxygen", "palace",
    "parent", "patrol", "pencil", "people", "pepper", "period", "permit",
    "person", "phrase", "picnic", "pigeon", "pillow", "pirate", "planet",
    "player", "plenty", "pocket", "poetry", "police", "policy", "potato",
    "powder", "praise", "prayer", "pretty", "priest", "prince", "prison",
    "profit", "proper", "public", "puppet", "purple", "puzzle", "rabbit",
    "racket", "random", "reason", "recipe", "record", "region", "relief",
    "remain", "remedy", "remote", "rescue", "resort", "result", "retail",
    "return", "reveal", "review", "reward", "rhythm", "ribbon", "rocket",
    "rubber", "saddle", "safety", "salmon", "sample", "school", "screen",
    "script", "season", "second", "secret", "sector", "senior", "series",
    "shadow", "shield", "signal", "silent", "silver", "simple", "singer",
    "single", "sister", "smooth", "soccer", "socket", "sodium", "source",
    "spirit", "spread", "spring", "square", "stable", "statue", "steady",
    "stream", "street", "strong", "studio", "subtle", "summer", "sunset",
    "supper", "supply", "switch", "symbol", "system", "tailor", "talent",
    "target", "temple", "tender", "tennis", "theory", "thirty", "thread",
    "throne", "ticket", "timber", "tissue", "tomato", "tongue", "trader",
    "travel", "treaty", "trophy", "tunnel", "turtle", "twelve", "unique",
    "useful", "valley", "velvet", "vendor", "verbal", "victim", "violet",
    "violin", "vision", "volume", "voyage", "walnut", "wealth", "weapon",
    "weekly", "window", "winner", "winter", "wisdom", "wonder", "wooden",
    "yellow",
];

pub static GUESSES: [&str; 482] = [
    "absorb", "absurd", "accept", "acting", "adverb", "agenda", "almost",
    "always", "amount", "anchor", "animal", "answer", "anyone", "appeal",
    "apples", "arrive", "artist", "asleep", "assess", "attack", "attend",
    "august", "author", "autumn", "avenue", "ballet", "bamboo", "banana",
    "banker", "barrel", "basket", "battle", "beacon", "beauty", "become",
    "before", "behalf", "behave", "belief", "belong", "beside", "better",
    "beyond", "bishop", "bottle", "bottom", "bounce", "boxing", "brains",
    "branch", "brands", "breath", "breeze", "bridge", "bright", "broken",
    "brutal", "bubble", "bucket", "buckle", "budget", "buffet", "bullet",
    "bundle", "burden", "burger", "butter", "button", "cactus", "camels",
    "camera", "campus", "cancel", "cancer", "candle", "cannon", "canvas",
    "carbon", "career", "carpet", "carrot", "casino", "castle", "casual",
    "cattle", "caught", "cellar", "cement", "center", "change", "cheese",
    "cherry", "choice", "chorus", "chosen", "church", "cinema", "circle",
    "clause", "clever", "client", "closed", "closet", "cloudy", "clutch",
    "coffee", "collar", "column", "combat", "comedy", "common", "convey",
    "cookie", "copied", "coping", "copper", "corals", "corner", "cotton",
    "county", "couple", "course", "cousin", "crayon", "credit", "crisis",
    "crumbs", "custom", "damage", "dancer", "danger", "dashes", "deacon",
    "dearly", "debate", "decade", "decide", "deduce", "defend", "degree",
    "demand", "demons", "denote", "depths", "desert", "design", "detail",
    "device", "dimmer", "dinner", "doctor", "dollar", "domain", "donkey",
    "donors", "double", "dragon", "drawer", "drinks", "driver", "during",
    "eagles", "editor", "effort", "eleven", "emblem", "empire", "energy",
    "engine", "enrich", "escape", "estate", "expert", "fables", "fabric",
    "falcon", "family", "famous", "farmer", "father", "fellow", "fields",
    "figure", "finger", "finish", "flavor", "flight", "flints", "floats",
    "flower", "forest", "formal", "fossil", "fridge", "friend", "frozen",
    "future", "galaxy", "garage", "garden", "garlic", "gather", "gentle",
    "ginger", "gloves", "golden", "gospel", "grants", "ground", "growth",
    "guards", "guitar", "hammer", "handle", "happen", "harbor", "hazard",
    "health", "height", "helmet", "hidden", "hollow", "honest", "horror",
    "horses", "hunger", "hunter", "hushed", "ideals", "immune", "impact",
    "income", "injury", "insect", "inside", "island", "jacket", "jewels",
    "judges", "jungle", "junior", "kernel", "kidney", "kitten", "knives",
    "ladder", "launch", "lawyer", "leader", "legend", "length", "lesson",
    "letter", "lights", "liquid", "listen", "little", "living", "llamas",
    "locker", "lodges", "lonely", "luxury", "magnet", "mammal", "manner",
    "maples", "marble", "margin", "market", "master", "matter", "meadow",
    "medium", "member", "memory", "mentor", "method", "middle", "minute",
    "mirror", "mixers", "mobile", "modern", "module", "moment", "monkey",
    "mother", "motion", "muscle", "museum", "napkin", "narrow", "nation",
    "nature", "nearby", "needle", "nephew", "nickel", "nights", "nobody",
    "normal", "notice", "number", "object", "oceans", "office", "orange",
    "orchid", "origin", "output", "oxygen", "palace", "papers", "parent",
    "patrol", "pearls", "pencil", "people", "pepper", "period", "permit",
    "person", "phrase", "picnic", "pigeon", "pillow", "pirate", "plains",
    "planet", "player", "plenty", "pocket", "poetry", "police", "policy",
    "potato", "powder", "praise", "prayer", "pretty", "priest", "prince",
    "prison", "profit", "proper", "public", "puppet", "purple", "puzzle",
    "quartz", "quests", "rabbit", "racket", "raisin", "random", "reason",
    "recipe", "record", "region", "relief", "remain", "remedy", "remote",
    "rescue", "resort", "result", "retail", "return", "reveal", "review",
    "reward", "rhythm", "ribbon", "rivers", "robots", "rocket", "rubber",
    "saddle", "safety", "salmon", "sample", "scales", "school", "screen",
    "script", "scrubs", "season", "second", "secret", "sector", "senior",
    "series", "shadow", "shield", "shrubs", "signal", "silent", "silver",
    "simple", "singer", "single", "sister", "smooth", "snakes", "soccer",
    "socket", "sodium", "source", "spirit", "spread", "spring", "square",
    "stable", "statue", "steady", "stones", "stream", "street", "strong",
    "studio", "subtle", "summer", "sunset", "supper", "supply", "switch",
    "symbol", "system", "tables", "tailor", "talent", "target", "temple",
    "tender", "tennis", "theory", "thirty", "thread", "throne", "ticket",
    "timber", "tissue", "tokens", "tomato", "tongue", "trader", "travel",
    "treaty", "trophy", "tunnel", "turtle", "twelve", "unions", "unique",
    "useful", "valley", "vaults", "velvet", "vendor", "verbal", "victim",
    "violet", "violin", "vision", "volume", "voyage", "wagons", "walnut",
    "wealth", "weapon", "weekly", "whales", "window", "winner", "winter",
    "wisdom", "wonder", "wooden", "yachts", "yellow", "zebras",
];
