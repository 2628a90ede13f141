//! Fixed prompt for the negative-treatment analysis call.
//!
//! The instruction text and the required JSON key list are a contract
//! with the response parser; changing either side breaks the other.

/// System messages sent ahead of the user prompt. The model is pushed
/// hard toward a bare JSON list because the parser rejects anything
/// that does not contain one.
pub const SYSTEM_MESSAGES: &[&str] = &[
    "You are a helpful lawyer.",
    "Your response will consist ONLY of a list.",
    "You will NOT wrap the response with JSON md markers.",
    "The response JSON will have NO top-level keys.",
];

const INSTRUCTION: &str = "You are an expert legal analyst.\
A case is treated negatively if the opinion expresses disapproval or disagreement with the case, or ignores it as precedent.\
Below is the text of a legal opinion that references other cases.\
DO NOT CONSIDER THE OPINION ITSELF AS A REFERENCED CASE AND DO NOT RETURN IT IN THE RESULTS.\
Identify any of the referenced cases that are treated negatively in the opinion.\
For each of such cases, determine the nature of the treatment, quote the text of the negative treatment, and give an explanation of why the treatment was determined to be negative.\
If there are cases that are treated negatively, return a JSON encoded list where each negatively-treated case is a JSON object with the following keys: ['caseName', 'jurisdiction', 'citation', 'nature', 'quotedText', 'explanation'].\
If there are no cases treated negatively, respond EXACTLY with '[]'.";

/// Compose the user prompt for one opinion.
pub fn build_prompt(opinion_text: &str) -> String {
    format!("{INSTRUCTION}\nLegal Opinion Text:\n{opinion_text}\n")
}
