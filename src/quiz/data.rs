//! Curated question pools and emoji lists.

/// One Find It! pool entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindItEntry {
    pub word: &'static str,
    pub correct_emoji: &'static str,
    pub options: [&'static str; 3],
}

/// One Color Quiz pool entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    pub color_name: &'static str,
    pub color_hex: u32,
    pub glyph: &'static str,
    pub options: [&'static str; 3],
}

/// One Shape Match pool entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeEntry {
    pub shape_name: &'static str,
    pub glyph: &'static str,
    pub options: [&'static str; 3],
}

const fn find_it(
    word: &'static str,
    correct_emoji: &'static str,
    options: [&'static str; 3],
) -> FindItEntry {
    FindItEntry {
        word,
        correct_emoji,
        options,
    }
}

const fn color(
    color_name: &'static str,
    color_hex: u32,
    glyph: &'static str,
    options: [&'static str; 3],
) -> ColorEntry {
    ColorEntry {
        color_name,
        color_hex,
        glyph,
        options,
    }
}

const fn shape(
    shape_name: &'static str,
    glyph: &'static str,
    options: [&'static str; 3],
) -> ShapeEntry {
    ShapeEntry {
        shape_name,
        glyph,
        options,
    }
}

pub const FIND_IT_POOL: &[FindItEntry] = &[
    find_it("Apple", "🍎", ["🍎", "🍌", "🍇"]),
    find_it("Dog", "🐶", ["🐱", "🐶", "🐸"]),
    find_it("Sun", "☀️", ["🌙", "⭐", "☀️"]),
    find_it("Fish", "🐟", ["🐟", "🐦", "🐛"]),
    find_it("Car", "🚗", ["🚲", "🚗", "✈️"]),
    find_it("Star", "⭐", ["🌙", "☀️", "⭐"]),
    find_it("Flower", "🌸", ["🌸", "🌲", "🍀"]),
    find_it("Cat", "🐱", ["🐶", "🐰", "🐱"]),
    find_it("Moon", "🌙", ["☀️", "🌙", "⭐"]),
    find_it("Banana", "🍌", ["🍎", "🍊", "🍌"]),
    find_it("Bird", "🐦", ["🐦", "🐟", "🦋"]),
    find_it("Cake", "🎂", ["🍕", "🎂", "🍪"]),
    find_it("Tree", "🌲", ["🌸", "🌲", "🍄"]),
    find_it("Butterfly", "🦋", ["🐛", "🦋", "🐝"]),
    find_it("Pizza", "🍕", ["🍕", "🍔", "🌮"]),
    find_it("Rabbit", "🐰", ["🐱", "🐭", "🐰"]),
    find_it("Rainbow", "🌈", ["🌈", "☀️", "🌧️"]),
    find_it("Balloon", "🎈", ["🎈", "🎁", "🎀"]),
    find_it("Heart", "❤️", ["⭐", "❤️", "💎"]),
    find_it("Airplane", "✈️", ["🚗", "🚀", "✈️"]),
];

pub const COLOR_POOL: &[ColorEntry] = &[
    color("Red", 0xEF4444, "●", ["Red", "Blue", "Green"]),
    color("Blue", 0x3B82F6, "■", ["Yellow", "Blue", "Red"]),
    color("Green", 0x22C55E, "▲", ["Green", "Purple", "Orange"]),
    color("Yellow", 0xEAB308, "★", ["Blue", "Yellow", "Pink"]),
    color("Purple", 0xA855F7, "♥", ["Green", "Red", "Purple"]),
    color("Orange", 0xF97316, "●", ["Orange", "Yellow", "Brown"]),
    color("Pink", 0xEC4899, "♦", ["Red", "Pink", "Purple"]),
    color("Brown", 0x92400E, "■", ["Orange", "Brown", "Red"]),
    color("Black", 0x1F2937, "★", ["Blue", "Gray", "Black"]),
    color("White", 0xF9FAFB, "●", ["White", "Yellow", "Pink"]),
    color("Gray", 0x9CA3AF, "▲", ["White", "Black", "Gray"]),
];

pub const SHAPE_POOL: &[ShapeEntry] = &[
    shape("Circle", "⬤", ["Circle", "Square", "Triangle"]),
    shape("Square", "⬛", ["Circle", "Square", "Diamond"]),
    shape("Triangle", "▲", ["Triangle", "Circle", "Star"]),
    shape("Star", "★", ["Heart", "Star", "Diamond"]),
    shape("Heart", "♥", ["Heart", "Circle", "Star"]),
    shape("Diamond", "◆", ["Square", "Triangle", "Diamond"]),
    shape("Oval", "⬮", ["Circle", "Oval", "Rectangle"]),
    shape("Rectangle", "▬", ["Square", "Rectangle", "Triangle"]),
    shape("Crescent", "🌙", ["Circle", "Star", "Crescent"]),
    shape("Cross", "✚", ["Star", "Cross", "Diamond"]),
    shape("Arrow", "➤", ["Triangle", "Arrow", "Star"]),
    shape("Hexagon", "⬡", ["Circle", "Hexagon", "Pentagon"]),
];

/// Emoji cycled through by Counting Fun questions.
pub const COUNTING_EMOJIS: &[&str] = &[
    "🍎", "🌟", "🐟", "🦋", "🌸", "🍕", "🎈", "🐣", "🍓", "🌈", "🍪", "🧁", "🎀", "🐞",
];

/// Emoji cycled through by Math Fun questions.
pub const MATH_EMOJIS: &[&str] = &[
    "🍎", "🌟", "🍪", "🐟", "🎈", "🍓", "🐣", "🌸", "🍕", "🧁", "🐞", "🦋",
];
