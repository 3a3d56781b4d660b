//! Canned replies used when no LLM is configured or the LLM call fails.

const GREETING_REPLY: &str = "Hello! I'm here to help you explore military career opportunities. \
    What interests you most about potential military service?";

const AVIATION_REPLY: &str = "Aviation careers in the military are incredible! There are \
    opportunities as pilots, air traffic controllers, aircraft mechanics, and avionics technicians. \
    The training is world-class and leads to excellent civilian aviation careers. \
    What specifically interests you about aviation?";

const TECHNOLOGY_REPLY: &str = "Technology and cybersecurity are huge growth areas in the military! \
    You'd get cutting-edge training in network security, digital forensics, and IT systems. \
    These skills are in high demand in the civilian world with great salaries. \
    Are you interested in defensive cybersecurity or more general IT work?";

const MEDICAL_REPLY: &str = "Military medical careers offer amazing training opportunities! \
    From combat medics to nurses, doctors, and medical technicians, you'd get hands-on experience \
    that translates directly to civilian healthcare careers. \
    What aspect of healthcare interests you most?";

const GENERAL_REPLY: &str = "That's a great question! Military service offers many paths with \
    excellent training and career prospects. Would you like to explore areas like technology, \
    aviation, medical, mechanics, or leadership roles? I'm here to help you understand what might \
    be the best fit for your interests and goals.";

const GREETINGS: &[&str] = &["hello", "hi", "hey"];

/// Picks a canned reply by topic. Greetings are matched as whole words.
pub fn fallback_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    let is_greeting = message
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| GREETINGS.contains(&word));

    if is_greeting {
        GREETING_REPLY
    } else if message.contains("aviation") || message.contains("pilot") {
        AVIATION_REPLY
    } else if ["cyber", "technology", "computer"].iter().any(|w| message.contains(w)) {
        TECHNOLOGY_REPLY
    } else if message.contains("medical") {
        MEDICAL_REPLY
    } else {
        GENERAL_REPLY
    }
}
