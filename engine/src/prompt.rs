//! Prompt templates for the chat model.
//!
//! Rendering is pure string work; the templates follow the fixed wording
//! the recommendation quality was tuned against.

/// Render the retrieval-mode prompt: a handful of relevant items plus the
/// raw query.
pub fn outfit_prompt(descriptions: &[String], query: &str) -> String {
    let clothes_text = descriptions.join("\n");

    format!(
        "You are a fashion assistant. Here are a few relevant clothes:\n\
         \n\
         {clothes_text}\n\
         \n\
         The user asked: \"{query}\"\n\
         \n\
         Suggest the best outfit (combine top + bottom if possible) based on the user's request.\n\
         Make sure the color pattern, event type, and occasion fit the user's request."
    )
}

/// Render the full-catalog prompt: every item, no retrieval.
pub fn full_catalog_prompt(descriptions: &[String], query: &str) -> String {
    let clothes_text = descriptions.join("\n");

    format!(
        "You are a fashion assistant. Here is the full clothing catalog:\n\
         \n\
         {clothes_text}\n\
         \n\
         The user asked: \"{query}\"\n\
         \n\
         Suggest the best outfit (combine top + bottom if possible) based on the user's request.\n\
         Make sure the color pattern, event type, and occasion fit the user's request."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outfit_prompt_contains_items_and_query() {
        let descriptions = vec![
            "Item: Jeans, Color: Blue, Category: Bottom, Occasion: Casual, Size: M".to_string(),
            "Item: Shirt, Color: White, Category: Top, Occasion: Formal, Size: L".to_string(),
        ];

        let prompt = outfit_prompt(&descriptions, "casual friday");

        assert!(prompt.contains("Item: Jeans"));
        assert!(prompt.contains("Item: Shirt"));
        assert!(prompt.contains("The user asked: \"casual friday\""));
        assert!(prompt.contains("fashion assistant"));
    }

    #[test]
    fn test_items_joined_with_newlines() {
        let descriptions = vec!["first".to_string(), "second".to_string()];
        let prompt = outfit_prompt(&descriptions, "q");
        assert!(prompt.contains("first\nsecond"));
    }

    #[test]
    fn test_full_catalog_prompt() {
        let descriptions = vec!["only item".to_string()];
        let prompt = full_catalog_prompt(&descriptions, "anything warm");

        assert!(prompt.contains("full clothing catalog"));
        assert!(prompt.contains("only item"));
        assert!(prompt.contains("anything warm"));
    }
}
