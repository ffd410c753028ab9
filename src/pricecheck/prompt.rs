//! Prompt construction and response parsing for the LLM price check

use serde::Deserialize;

use super::PriceCheckItem;
use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::models::PriceAnomaly;

/// Build the user prompt listing every product and its price
pub fn build_prompt(items: &[PriceCheckItem], threshold_percent: u32) -> String {
    let mut prompt = format!(
        "You are an expert in identifying potentially incorrect product prices. \
         Given a list of products and their prices, determine if any of the prices \
         are anomalous compared to typical market prices.\n\n\
         If a price deviates from the typical market price by more than {}%, consider \
         it anomalous. For each anomalous price, explain why and suggest a more \
         reasonable price in the same unit.\n\n\
         Respond with ONLY a JSON object of the form \
         {{\"anomalousPrices\": [{{\"productName\": string, \"suggestedPrice\": number, \
         \"reason\": string}}]}}. Use an empty array when every price looks reasonable.\n\n\
         Products:\n",
        threshold_percent
    );

    for item in items {
        prompt.push_str(&format!(
            "- Product: {}, Unit: {}, Price: {}\n",
            item.product_name, item.unit, item.current_price
        ));
    }

    prompt
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceCheckOutput {
    #[serde(default)]
    anomalous_prices: Vec<PriceAnomaly>,
}

/// Parse the model's reply into anomalies
///
/// Accepts the JSON object bare or wrapped in a markdown code block.
pub fn parse_anomalies(content: &str) -> HourlyBuysResult<Vec<PriceAnomaly>> {
    let json = extract_json(content);
    let output: PriceCheckOutput = serde_json::from_str(json).map_err(|e| {
        HourlyBuysError::PriceCheck(format!("Could not parse price check response: {}", e))
    })?;

    Ok(output
        .anomalous_prices
        .into_iter()
        .filter(|a| a.suggested_price.is_finite() && a.suggested_price >= 0.0)
        .collect())
}

fn extract_json(content: &str) -> &str {
    let content = content.trim();

    if let Some(start) = content.find("```") {
        let after_fence = &content[start + 3..];
        // Skip the language tag line
        let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after_fence[body_start..];
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }

    match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => content,
    }
}
