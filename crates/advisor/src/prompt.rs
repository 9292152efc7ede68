/// Render the advice prompt around the caller's query.
///
/// The query is interpolated verbatim, with no sanitization against
/// prompt injection. The trailing BUDGET_DATA contract is the fixed
/// sub-protocol the response parser depends on; any change here must
/// be mirrored in `parser`.
pub fn build_advice_prompt(query: &str) -> String {
    format!(
        r#"I need you to act as a professional financial advisor and provide detailed, personalized financial advice based on the following query:

"{query}"

Provide clear, actionable financial advice with:

## FINANCIAL SNAPSHOT
- Quick assessment of the current situation
- Key priorities based on their query

## BUDGET BREAKDOWN
- Create a practical monthly budget with specific amounts
- Focus on essential categories relevant to their situation
- Use actual numbers if income is mentioned, otherwise use percentages

## ACTION PLAN
- 3-5 specific, immediate steps they should take
- Include exact dollar amounts and timeframes
- Recommend free tools/apps to help implementation

## NEXT LEVEL STRATEGIES
- 2-3 advanced tactics to accelerate their financial progress
- Specific investment recommendations based on their goals
- One unique insight most advisors wouldn't mention

Format your response with clear headings, bullet points, and minimal text. Be conversational and encouraging.

At the end, include a simple budget breakdown formatted exactly like this:
BUDGET_DATA
Housing: 30
Food: 15
Transportation: 10
Utilities: 5
Insurance: 10
Debt: 15
Savings: 10
Other: 5

Adjust categories and percentages based on their situation. The percentages must add up to 100%."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_embedded_verbatim() {
        let prompt = build_advice_prompt("How do I save for a house on $4k/month?");
        assert!(prompt.contains("\"How do I save for a house on $4k/month?\""));
    }

    #[test]
    fn trailer_contract_is_present() {
        let prompt = build_advice_prompt("help");
        assert!(prompt.contains("BUDGET_DATA\nHousing: 30"));
        assert!(prompt.contains("must add up to 100%"));
    }
}
