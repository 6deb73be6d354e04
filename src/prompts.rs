//! System prompts for the tone conversion endpoint.
//!
//! The per-audience guidance lives in a static table so the recognized
//! set of target labels is auditable in one place.

/// Audience category selected by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A superior or manager inside the sender's organization.
    Superior,
    /// A colleague on the same or a neighboring team.
    Colleague,
    /// An external client or business partner.
    Client,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Superior, Target::Colleague, Target::Client];

    /// Parses a frontend label. Unknown labels return `None` and the
    /// caller falls back to the generic prompt.
    pub fn parse(label: &str) -> Option<Target> {
        match label {
            "superior" => Some(Target::Superior),
            "colleague" => Some(Target::Colleague),
            "client" => Some(Target::Client),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Target::Superior => "superior",
            Target::Colleague => "colleague",
            Target::Client => "client",
        }
    }

    fn preset(&self) -> &'static TonePreset {
        match self {
            Target::Superior => &SUPERIOR,
            Target::Colleague => &COLLEAGUE,
            Target::Client => &CLIENT,
        }
    }
}

struct TonePreset {
    audience: &'static str,
    tone: &'static str,
    closings: &'static [&'static str],
}

static SUPERIOR: TonePreset = TonePreset {
    audience: "The reader is the sender's superior or direct manager. They expect \
               deference, brevity, and a clear statement of status or request.",
    tone: "Use a respectful, formal tone. Report facts first, then the request. \
           Avoid casual contractions and hedging filler.",
    closings: &[
        "I would appreciate your guidance on this.",
        "Please let me know if you need any further details.",
        "Thank you for your time and consideration.",
    ],
};

static COLLEAGUE: TonePreset = TonePreset {
    audience: "The reader is a colleague on the same or a neighboring team. They \
               expect a cooperative, efficient tone between equals.",
    tone: "Keep it polite but approachable. Be direct about what is needed and by \
           when, without stiff honorifics.",
    closings: &[
        "Thanks in advance for your help.",
        "Let me know if anything is unclear.",
    ],
};

static CLIENT: TonePreset = TonePreset {
    audience: "The reader is an external client or business partner. They expect \
               courtesy, precision, and a professional image of the sender's company.",
    tone: "Use the most formal register. Open with appreciation, state the matter \
           precisely, and avoid internal jargon or abbreviations.",
    closings: &[
        "We sincerely appreciate your continued partnership.",
        "Please do not hesitate to contact us with any questions.",
        "We look forward to hearing from you.",
    ],
};

/// Shared role and rules, prepended to every prompt variant.
pub const BASE_DIRECTIVE: &str = "\
You are a professional business-communication consultant. Rewrite the user's \
message according to these rules:
1. Preserve the original meaning while raising the level of formality.
2. Prefer business-register vocabulary over casual phrasing.
3. Omit unnecessary elaboration; do not add content the sender did not write.
4. Output only the converted text, with no commentary or explanation.";

/// Fallback guidance when the target label is not one of the known set.
pub const GENERIC_GUIDANCE: &str =
    "Convert the message into an appropriate, respectful business register.";

/// Builds the full system prompt for a conversion request. Pure: the same
/// input always yields the identical string.
pub fn build_system_prompt(target: Option<Target>) -> String {
    let mut prompt = String::from(BASE_DIRECTIVE);
    prompt.push_str("\n\n");

    match target {
        Some(target) => {
            let preset = target.preset();
            prompt.push_str("Audience: ");
            prompt.push_str(preset.audience);
            prompt.push_str("\nTone: ");
            prompt.push_str(preset.tone);
            prompt.push_str("\nExample closing phrases:\n");
            for closing in preset.closings {
                prompt.push_str("- ");
                prompt.push_str(closing);
                prompt.push('\n');
            }
        }
        None => {
            prompt.push_str(GENERIC_GUIDANCE);
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_targets_include_base_and_preset() {
        for target in Target::ALL {
            let prompt = build_system_prompt(Some(target));
            assert!(prompt.starts_with(BASE_DIRECTIVE));
            let preset = target.preset();
            assert!(prompt.contains(preset.audience));
            assert!(prompt.contains(preset.tone));
            for closing in preset.closings {
                assert!(prompt.contains(closing));
            }
            assert!(!prompt.contains(GENERIC_GUIDANCE));
        }
    }

    #[test]
    fn unrecognized_target_gets_generic_guidance() {
        assert_eq!(Target::parse("ceo"), None);
        let prompt = build_system_prompt(None);
        assert!(prompt.starts_with(BASE_DIRECTIVE));
        assert!(prompt.contains(GENERIC_GUIDANCE));
        assert!(!prompt.contains(SUPERIOR.audience));
    }

    #[test]
    fn builder_is_deterministic() {
        for target in [None, Some(Target::Superior), Some(Target::Client)] {
            assert_eq!(build_system_prompt(target), build_system_prompt(target));
        }
    }

    #[test]
    fn labels_round_trip() {
        for target in Target::ALL {
            assert_eq!(Target::parse(target.label()), Some(target));
        }
    }
}
