pub mod error;
pub mod llm;
pub mod parser;
pub mod prompt;

pub use error::AdvisorError;
pub use llm::{GeminiClient, Oracle};

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// The result of one advice request: human-readable text with the
/// budget trailer stripped out, plus the extracted breakdown (empty
/// when the oracle ignored the trailer instructions).
#[derive(Debug)]
pub struct Advice {
    pub response: String,
    pub budget_breakdown: HashMap<String, f64>,
}

/// Stateless per request; safe to share across arbitrary concurrent
/// requests behind an `Arc`.
pub struct Advisor {
    oracle: Arc<dyn Oracle>,
}

impl Advisor {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }

    /// Run one full request cycle: validate, build the prompt, call the
    /// oracle exactly once, extract the budget trailer.
    pub async fn advise(&self, query: &str) -> Result<Advice, AdvisorError> {
        if query.trim().is_empty() {
            return Err(AdvisorError::InvalidInput(
                "Query cannot be empty".to_string(),
            ));
        }

        let prompt = prompt::build_advice_prompt(query);

        let raw = self
            .oracle
            .generate(&prompt)
            .await
            .map_err(AdvisorError::Upstream)?;

        if raw.trim().is_empty() {
            return Err(AdvisorError::Upstream(anyhow::anyhow!(
                "oracle returned empty text"
            )));
        }

        debug!(reply = truncate(&raw, 200), "raw oracle reply");

        let (cleaned, budget) = parser::extract_budget(&raw);

        if budget.is_empty() {
            info!("no budget data section found in the reply");
        } else {
            info!(budget = ?budget, "parsed budget breakdown");
        }

        Ok(Advice {
            response: cleaned,
            budget_breakdown: budget,
        })
    }
}

/// Char-boundary-safe prefix for log lines.
fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
