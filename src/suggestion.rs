//! Rule-based outfit suggestions.
//!
//! Greedy and order-sensitive: every rule takes the first matching item of
//! each category in catalog order. Nothing stops two suggestions, or two rules,
//! from reusing the same item, and season is ignored.

use crate::model::{Category, ClothingItem, Color};

/// Colors tried by the color-coordination rule, in order.
pub const SUGGESTION_COLORS: [Color; 5] = [Color::Black, Color::White, Color::Blue, Color::Red, Color::Gray];

/// Tags tried after the color rule, in order.
pub const SUGGESTION_TAGS: [&str; 2] = ["casual", "formal"];

pub const MAX_SUGGESTIONS: usize = 3;

/// Which rule produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionRule {
    Color(Color),
    Tagged(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub rule: SuggestionRule,
    /// Top, bottom, shoes and, for color rules, possibly one accessory
    pub items: Vec<ClothingItem>,
}

struct Buckets<'a> {
    tops: Vec<&'a ClothingItem>,
    bottoms: Vec<&'a ClothingItem>,
    shoes: Vec<&'a ClothingItem>,
    accessories: Vec<&'a ClothingItem>,
}

impl<'a> Buckets<'a> {
    fn new(catalog: &'a [ClothingItem]) -> Self {
        let of = |category: Category| -> Vec<&'a ClothingItem> {
            catalog.iter().filter(|i| i.category == category).collect()
        };
        Self {
            tops: of(Category::Top),
            bottoms: of(Category::Bottom),
            shoes: of(Category::Shoes),
            accessories: of(Category::Accessories),
        }
    }

    /// First top, bottom and shoes passing `pred`, if all three exist.
    fn first_core<F>(&self, pred: F) -> Option<Vec<ClothingItem>>
    where
        F: Fn(&ClothingItem) -> bool,
    {
        let first = |bucket: &[&'a ClothingItem]| bucket.iter().copied().find(|item| pred(*item));
        let top = first(self.tops.as_slice())?;
        let bottom = first(self.bottoms.as_slice())?;
        let shoes = first(self.shoes.as_slice())?;
        Some(vec![top.clone(), bottom.clone(), shoes.clone()])
    }
}

/// Up to [`MAX_SUGGESTIONS`] outfits: color matches in
/// [`SUGGESTION_COLORS`] order, then casual, then formal.
pub fn suggest_outfits(catalog: &[ClothingItem]) -> Vec<Suggestion> {
    let buckets = Buckets::new(catalog);
    let mut suggestions = Vec::new();

    for color in SUGGESTION_COLORS {
        if let Some(mut items) = buckets.first_core(|item| item.color == color) {
            if let Some(accessory) = buckets.accessories.iter().find(|a| a.color == color) {
                items.push((*accessory).clone());
            }
            suggestions.push(Suggestion {
                rule: SuggestionRule::Color(color),
                items,
            });
        }
    }

    for tag in SUGGESTION_TAGS {
        if let Some(items) = buckets.first_core(|item| item.has_tag(tag)) {
            suggestions.push(Suggestion {
                rule: SuggestionRule::Tagged(tag),
                items,
            });
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    log::debug!("Computed {} outfit suggestion(s)", suggestions.len());
    suggestions
}
