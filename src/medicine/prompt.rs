//! Prompt construction for medicine lookups.

/// Region used for the pricing section when none is configured.
pub const DEFAULT_PRICING_REGION: &str = "India";

/// Builds the instruction sent to the provider.
///
/// Substitution only: inputs are embedded verbatim and never validated here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptBuilder {
    pricing_region: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PRICING_REGION)
    }
}

impl PromptBuilder {
    /// Create a builder that asks for prices in `pricing_region`.
    #[must_use]
    pub fn new(pricing_region: impl Into<String>) -> Self {
        Self {
            pricing_region: pricing_region.into(),
        }
    }

    /// Region named in the pricing section.
    #[must_use]
    pub fn pricing_region(&self) -> &str {
        &self.pricing_region
    }

    /// Render the prompt for one medicine.
    #[must_use]
    pub fn build(&self, medicine_name: &str, strength: &str) -> String {
        let region = &self.pricing_region;
        format!(
            "You are a professional medical information assistant.
Provide structured, educational information about the medicine.
Do NOT give prescriptions or diagnosis.

Medicine name: {medicine_name}
Strength (if any): {strength}

Return the answer in bullet points or under subheadings, including:
- Composition
- Uses / Conditions treated
- Side effects
- Age restrictions (children / adults)
- When to take
- Approximate pricing in {region}
- Safety disclaimer

Always mention if the medicine is suitable for children or the recommended age group.
Format the output clearly, using plain text bullets and new lines. Avoid bold or markdown.
"
        )
    }
}

/// Render the prompt with the default pricing region.
#[must_use]
pub fn build_prompt(medicine_name: &str, strength: &str) -> String {
    PromptBuilder::default().build(medicine_name, strength)
}
