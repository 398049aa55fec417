//! Prompt templates for idea generation and content expansion.
//!
//! Each prompt is sent as the system message; the user message is a short kickoff line.

use crate::idea::BATCH_SIZE;
use crate::profile::BusinessProfile;

/// Sampling temperature for both calls; favors diversity across repeated requests.
pub const SAMPLING_TEMPERATURE: f32 = 0.7;

pub const IDEAS_KICKOFF: &str = "Go ahead with your 5 ideas:";
pub const CONTENT_KICKOFF: &str = "Go ahead with your content:";

/// Platforms the expansion may target.
pub const PLATFORMS: [&str; 5] = ["Facebook", "Instagram", "TikTok", "YouTube", "LinkedIn"];

/// Machine-readable description of the expected ideas JSON.
pub fn format_instructions() -> String {
    format!(
        r#"Respond with a single JSON object and nothing else. It must conform to this JSON schema:
{{"type":"object","properties":{{"content_ideas":{{"type":"array","minItems":{n},"maxItems":{n},"items":{{"type":"object","properties":{{"id":{{"type":"integer","minimum":1,"maximum":{n},"description":"Unique identifier for the content idea"}},"idea":{{"type":"string","description":"Content idea for social media"}}}},"required":["id","idea"]}}}}}},"required":["content_ideas"]}}
Number the ideas with ids 1 to {n} in order, each id used once."#,
        n = BATCH_SIZE
    )
}

/// Renders the idea-generation prompt.
pub fn ideas_prompt(profile: &BusinessProfile, rejected: &str) -> String {
    let rejected = if rejected.trim().is_empty() {
        "(none)"
    } else {
        rejected
    };
    format!(
        r#"Create {n} content ideas to promote a business with the following information:
BUSINESS NAME: {name}.

DESCRIPTION: {description}.

GOALS: {goals}.

COMMUNICATION TONE: {tone}.

REJECTED IDEAS (optional): {rejected}.

Highlight the unique aspects of the DESCRIPTION to reach the GOALS, with an approach that matches the COMMUNICATION TONE.
Use language that fits the COMMUNICATION TONE to create engaging posts for the business, driving its GOALS.
If you receive REJECTED IDEAS, make sure none of your {n} ideas overlaps with them; offer different ideas that still serve the GOALS, DESCRIPTION and COMMUNICATION TONE.
IMPORTANT: your ideas must be just ideas. Do not develop the content yet; that happens in a later step.
IMPORTANT: {format}"#,
        n = BATCH_SIZE,
        name = profile.name.trim(),
        description = profile.description.trim(),
        goals = profile.goals.trim(),
        tone = profile.tone,
        rejected = rejected,
        format = format_instructions(),
    )
}

/// Renders the content-expansion prompt for one chosen idea.
pub fn content_prompt(profile: &BusinessProfile, chosen_idea: &str) -> String {
    format!(
        r#"Act as an expert in digital marketing and sales.

Develop the content for the following social media promotion idea:

Content concept: {idea}.

Take this business information into account:

Business name: {name}

Business description: {description}

Communication tone: {tone}

Business goals: {goals}


Requirements:

1. CONCEPT: Explain the content concept to the user in detail. This will not be published; it helps the user understand what the post has to communicate.

2. SOCIAL NETWORKS: choose where it will be published among {platforms}, depending on the information you received.

3. IMAGE PROMPT: Write a very descriptive prompt to generate an image for the post. It must capture the essence of the concept and be visually striking on the chosen platforms. Do not mention logos or concepts that are hard for an image-generation AI to understand.

4. COPY OUT: Write the caption that goes in the platform's text field. It should deepen the message, match the business's tone, and lead users to interact or take the desired action.

5. COPY IN: Write the main copy that goes on the image. It must catch attention at a glance on the selected platforms.

6. VIDEO CONCEPT: Only if you selected TikTok, describe an engaging video idea that complements the content. It must be easy to make and must not need an expensive production.
IMPORTANT: Answer only with what is requested; no greetings, introduction or conclusions."#,
        idea = chosen_idea.trim(),
        name = profile.name.trim(),
        description = profile.description.trim(),
        tone = profile.tone,
        goals = profile.goals.trim(),
        platforms = PLATFORMS.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Tone;

    fn cafe() -> BusinessProfile {
        BusinessProfile::new(
            "Café Luna",
            "artisan coffee shop",
            Tone::Creative,
            "increase foot traffic",
        )
    }

    #[test]
    fn ideas_prompt_embeds_profile_schema_and_rejections() {
        let p = ideas_prompt(&cafe(), r#"{"content_ideas":[{"id":1,"idea":"Latte art"}]}"#);
        assert!(p.contains("BUSINESS NAME: Café Luna."));
        assert!(p.contains("DESCRIPTION: artisan coffee shop."));
        assert!(p.contains("GOALS: increase foot traffic."));
        assert!(p.contains("COMMUNICATION TONE: Creative."));
        assert!(p.contains(r#"{"id":1,"idea":"Latte art"}"#));
        assert!(p.contains(r#""required":["id","idea"]"#));
        assert!(p.contains(r#""minItems":5"#));
    }

    #[test]
    fn ideas_prompt_marks_empty_rejections() {
        let p = ideas_prompt(&cafe(), "");
        assert!(p.contains("REJECTED IDEAS (optional): (none)."));
    }

    #[test]
    fn format_instructions_is_valid_json_schema_line() {
        let text = format_instructions();
        let schema_line = text.lines().nth(1).unwrap();
        let schema: serde_json::Value = serde_json::from_str(schema_line).unwrap();
        assert_eq!(schema["properties"]["content_ideas"]["maxItems"], 5);
    }

    #[test]
    fn content_prompt_lists_sections_and_platforms() {
        let p = content_prompt(&cafe(), "Host a latte-art contest");
        assert!(p.contains("Content concept: Host a latte-art contest."));
        for section in ["CONCEPT", "SOCIAL NETWORKS", "IMAGE PROMPT", "COPY OUT", "COPY IN", "VIDEO CONCEPT"] {
            assert!(p.contains(section), "missing section {section}");
        }
        assert!(p.contains("Facebook, Instagram, TikTok, YouTube, LinkedIn"));
    }
}
