use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

/// Matches the BUDGET_DATA marker followed by one or more contiguous
/// `label: number` lines, anywhere in the reply.
static BUDGET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)BUDGET_DATA\s+((?:.*?: \d+\s*)+)").unwrap());

/// Extract the budget trailer block from a raw oracle reply.
///
/// Returns the reply with the matched block removed (trimmed) and the
/// parsed category -> percentage map. The extraction is deliberately
/// best-effort: the oracle's output format is not guaranteed, so a
/// missing block is a normal outcome and malformed lines are dropped
/// one at a time rather than failing the whole reply.
pub fn extract_budget(raw: &str) -> (String, HashMap<String, f64>) {
    let mut budget = HashMap::new();

    let Some(caps) = BUDGET_RE.captures(raw) else {
        return (raw.trim().to_string(), budget);
    };

    let block = caps.get(1).map_or("", |m| m.as_str());
    for line in block.trim().lines() {
        // Split on the FIRST colon only. A colon inside the label
        // (e.g. "Debt: Credit Cards: 15") leaves the remainder
        // non-numeric and the line is skipped below.
        let Some((category, value)) = line.split_once(':') else {
            continue;
        };
        match value.trim().parse::<f64>() {
            // Last occurrence of a duplicate category wins.
            Ok(pct) => {
                budget.insert(category.trim().to_string(), pct);
            }
            Err(_) => {
                debug!(line, "could not parse percentage from budget line");
            }
        }
    }

    // Remove the exact matched region, marker included.
    let whole = caps.get(0).expect("group 0 always present");
    let mut cleaned = String::with_capacity(raw.len() - whole.len());
    cleaned.push_str(&raw[..whole.start()]);
    cleaned.push_str(&raw[whole.end()..]);

    (cleaned.trim().to_string(), budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_trailer_is_extracted() {
        let raw = "Here is my advice.\n\nBUDGET_DATA\nHousing: 30\nFood: 15\nSavings: 55\n";
        let (cleaned, budget) = extract_budget(raw);

        assert_eq!(cleaned, "Here is my advice.");
        assert!(!cleaned.contains("BUDGET_DATA"));
        assert_eq!(budget.len(), 3);
        assert_eq!(budget["Housing"], 30.0);
        assert_eq!(budget["Food"], 15.0);
        assert_eq!(budget["Savings"], 55.0);
    }

    #[test]
    fn missing_marker_returns_trimmed_reply() {
        let raw = "  Sorry, I can only answer finance questions.  \n";
        let (cleaned, budget) = extract_budget(raw);

        assert_eq!(cleaned, "Sorry, I can only answer finance questions.");
        assert!(budget.is_empty());
    }

    #[test]
    fn block_in_the_middle_of_the_reply_is_removed() {
        let raw = "Intro.\n\nBUDGET_DATA\nHousing: 30\nFood: 70\n\nClosing thoughts.";
        let (cleaned, budget) = extract_budget(raw);

        assert_eq!(budget["Housing"], 30.0);
        assert_eq!(budget["Food"], 70.0);
        assert!(!cleaned.contains("BUDGET_DATA"));
        assert!(cleaned.starts_with("Intro."));
        assert!(cleaned.ends_with("Closing thoughts."));
    }

    #[test]
    fn colon_inside_category_splits_on_first_colon_and_skips() {
        let raw = "Advice.\n\nBUDGET_DATA\nHousing: 30\nDebt: Credit Cards: 15\nSavings: 55\n";
        let (_, budget) = extract_budget(raw);

        // "Debt" gets value-text "Credit Cards: 15", which fails the
        // numeric parse and is dropped; the neighbours survive.
        assert_eq!(budget.len(), 2);
        assert!(!budget.contains_key("Debt"));
        assert_eq!(budget["Housing"], 30.0);
        assert_eq!(budget["Savings"], 55.0);
    }

    #[test]
    fn trailing_text_after_number_skips_only_that_line() {
        let raw = "Advice.\n\nBUDGET_DATA\nSavings: 10 percent\nOther: 5\n";
        let (_, budget) = extract_budget(raw);

        assert!(!budget.contains_key("Savings"));
        assert_eq!(budget["Other"], 5.0);
    }

    #[test]
    fn duplicate_category_keeps_last_value() {
        let raw = "Advice.\n\nBUDGET_DATA\nFood: 10\nFood: 20\n";
        let (_, budget) = extract_budget(raw);

        assert_eq!(budget.len(), 1);
        assert_eq!(budget["Food"], 20.0);
    }

    #[test]
    fn reparsing_cleaned_text_is_a_noop() {
        let raw = "Advice first.\n\nBUDGET_DATA\nHousing: 40\nOther: 60\n";
        let (cleaned, budget) = extract_budget(raw);
        assert!(!budget.is_empty());

        let (cleaned_again, budget_again) = extract_budget(&cleaned);
        assert!(budget_again.is_empty());
        assert_eq!(cleaned_again, cleaned);
    }
}
