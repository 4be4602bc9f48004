use std::collections::{HashMap, HashSet};

use super::rules::{RuleAction, RuleTable};
use super::tokens::{Category, Token, TokenKind};

/// Two-way category membership index, built once from the rule table and
/// read-only afterwards. Every `Category` is seeded at construction, so a
/// category no rule mentions resolves to the empty set rather than a miss.
pub struct CategoryIndex {
    by_kind: HashMap<TokenKind, Vec<Category>>,
    by_category: HashMap<Category, HashSet<TokenKind>>,
}

impl CategoryIndex {
    pub fn from_table(table: &RuleTable) -> CategoryIndex {
        let mut by_kind: HashMap<TokenKind, Vec<Category>> = HashMap::new();
        let mut by_category: HashMap<Category, HashSet<TokenKind>> = Category::ALL
            .iter()
            .map(|category| (*category, HashSet::new()))
            .collect();

        for rule in table.rules() {
            let RuleAction::Emit(kind) = rule.action else {
                continue;
            };

            let memberships = by_kind.entry(kind).or_default();
            for category in &rule.categories {
                if !memberships.contains(category) {
                    memberships.push(*category);
                }
                if let Some(kinds) = by_category.get_mut(category) {
                    kinds.insert(kind);
                }
            }
        }

        CategoryIndex {
            by_kind,
            by_category,
        }
    }

    /// Resolved categories for a kind; empty for kinds declared with none.
    pub fn categories_of(&self, kind: TokenKind) -> &[Category] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn category_of(&self, token: &Token) -> &[Category] {
        self.categories_of(token.kind)
    }

    pub fn kinds_in(&self, category: Category) -> &HashSet<TokenKind> {
        // Seeded for every variant in from_table.
        &self.by_category[&category]
    }
}
