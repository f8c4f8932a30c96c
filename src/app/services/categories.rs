//! Marker category reference data
//!
//! The category set is fixed at compile time and never derived from input.
//! Marker tags outside this set are preserved verbatim on the record; the
//! table only drives filter chips and legend labels.

/// A marker category
///
/// The `symbol` glyph is the category's identity key: it is what submitters
/// pick in the form and what the category cell of the spreadsheet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CategoryDescriptor {
    /// Identity glyph, unique across the set
    pub symbol: &'static str,

    /// Machine-readable category name
    pub name: &'static str,

    /// Human-readable label, in the sheet's language
    pub label: &'static str,
}

/// The fixed category set, in display order
pub const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor { symbol: "🍽️", name: "food", label: "საჭმელი" },
    CategoryDescriptor { symbol: "🌲", name: "park", label: "პარკი" },
    CategoryDescriptor { symbol: "☕", name: "cafe", label: "კაფე" },
    CategoryDescriptor { symbol: "🍸", name: "bar", label: "ბარი/კლუბი" },
    CategoryDescriptor { symbol: "🏨", name: "hotel", label: "სასტუმრო" },
    CategoryDescriptor { symbol: "🛍️", name: "market", label: "მარკეტი" },
    CategoryDescriptor { symbol: "🍴", name: "restaurant", label: "რესტორანი" },
    CategoryDescriptor { symbol: "🎭", name: "attraction", label: "ატრაქციონი" },
    CategoryDescriptor { symbol: "🏛️", name: "museum", label: "მუზეუმი" },
    CategoryDescriptor { symbol: "🌳", name: "nature", label: "ბუნება" },
    CategoryDescriptor { symbol: "🅿️", name: "parking", label: "პარკინგი" },
    CategoryDescriptor { symbol: "🏥", name: "hospital", label: "საავადმყოფო" },
    CategoryDescriptor { symbol: "ℹ️", name: "info", label: "საინფორმაციო" },
    CategoryDescriptor { symbol: "🗿", name: "monument", label: "მონუმენტი/ძეგლი" },
    CategoryDescriptor { symbol: "🚆", name: "transport", label: "ტრანსპორტი" },
    CategoryDescriptor { symbol: "🏖️", name: "beach", label: "სანაპირო" },
    CategoryDescriptor { symbol: "⛰️", name: "mountain", label: "მთა" },
    CategoryDescriptor { symbol: "⛪", name: "church", label: "ეკლესია/ტაძარი" },
];

/// Look up a category by its identity glyph
pub fn category_for_symbol(symbol: &str) -> Option<&'static CategoryDescriptor> {
    CATEGORIES.iter().find(|category| category.symbol == symbol)
}
