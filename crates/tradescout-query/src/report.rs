//! Sell report: the currency-grouped result of a want-to-sell query.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tradescout_types::{Currency, Item, SellerId};

/// One seller's entry in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellLine {
    pub seller_id: SellerId,
    pub seller_name: String,
    /// Units the seller would take right now. May be zero.
    pub quantity: u64,
    /// Price per unit of the selected offer.
    pub unit_price: Decimal,
}

/// All lines that settle in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySection {
    pub currency: Currency,
    pub lines: Vec<SellLine>,
}

impl CurrencySection {
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            lines: Vec::new(),
        }
    }
}

/// Result of a successful query. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellReport {
    pub item: Item,
    pub sections: Vec<CurrencySection>,
}

impl SellReport {
    /// Panel title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.item.display_name
    }

    /// Total number of seller lines across sections.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_count() == 0
    }

    pub fn lines(&self) -> impl Iterator<Item = &SellLine> {
        self.sections.iter().flat_map(|s| s.lines.iter())
    }

    /// Plain-text rendering, one header per currency:
    ///
    /// ```text
    /// Sell Wheat for Gold
    ///
    /// 30	for	2 @ Mill
    /// ```
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&format!(
                "Sell {} for {}\n\n",
                self.item.display_name, section.currency
            ));
            for line in &section.lines {
                out.push_str(&format!(
                    "{}\tfor\t{} @ {}\n",
                    line.quantity, line.unit_price, line.seller_name
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, quantity: u64, price: i64) -> SellLine {
        SellLine {
            seller_id: SellerId::from_bytes([7; 16]),
            seller_name: name.to_string(),
            quantity,
            unit_price: Decimal::new(price, 0),
        }
    }

    fn report() -> SellReport {
        let mut gold = CurrencySection::new(Currency::minted("Gold"));
        gold.lines.push(line("Mill", 30, 2));
        gold.lines.push(line("Bakery", 5, 3));
        let mut credit = CurrencySection::new(Currency::player_credit("Alice Credit"));
        credit.lines.push(line("Stall", 0, 1));
        SellReport {
            item: Item::dummy(1, "Wheat"),
            sections: vec![gold, credit],
        }
    }

    #[test]
    fn counts_lines() {
        let r = report();
        assert_eq!(r.line_count(), 3);
        assert!(!r.is_empty());
        assert_eq!(r.title(), "Wheat");
        let names: Vec<&str> = r.lines().map(|l| l.seller_name.as_str()).collect();
        assert_eq!(names, vec!["Mill", "Bakery", "Stall"]);
    }

    #[test]
    fn renders_sections_in_order() {
        let text = report().render_text();
        let expected = "Sell Wheat for Gold\n\n30\tfor\t2 @ Mill\n5\tfor\t3 @ Bakery\n\n\
                        Sell Wheat for Alice Credit\n\n0\tfor\t1 @ Stall\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn serde_roundtrip() {
        let r = report();
        let json = serde_json::to_string(&r).unwrap();
        let back: SellReport = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
