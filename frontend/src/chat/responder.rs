//! Canned replies for the chat widget.
//!
//! Replies are picked by keyword: the lower-cased input is checked against
//! each topic in order and the first topic with a matching substring wins.
//! Within a topic the reply is drawn uniformly from its pool.

use rand::Rng;

pub const TYPING_DELAY_MS: std::ops::Range<u32> = 1500..2500;
pub const QUICK_REPLY_DELAY_MS: u32 = 1500;

pub const GREETING: &str =
    "Hi! I'm your AI assistant. How can I help you with your mobile app development needs today?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Pricing,
    Services,
    Timeline,
    Contact,
    Fallback,
}

const KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Greeting, &["hello", "hi", "hey"]),
    (Topic::Pricing, &["price", "cost", "budget"]),
    (Topic::Services, &["service", "what do you do", "offer"]),
    (Topic::Timeline, &["time", "long", "when", "deadline"]),
    (Topic::Contact, &["contact", "reach", "call", "email"]),
];

impl Topic {
    pub fn classify(input: &str) -> Topic {
        let message = input.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|word| message.contains(word)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::Fallback)
    }

    pub fn responses(self) -> &'static [&'static str] {
        match self {
            Topic::Greeting => &[
                "Hello! I'm here to help you with your mobile app development questions.",
                "Hi there! What can I assist you with today?",
                "Welcome! How can I help you bring your app idea to life?",
            ],
            Topic::Pricing => &[
                "Our mobile app development starts at $5,000 for basic apps. The final cost depends on features, complexity, and timeline. Would you like a detailed quote?",
                "App development pricing varies based on your requirements. Basic apps start around $5,000, while complex apps can range from $15,000-$50,000+. What type of app are you considering?",
                "I'd be happy to discuss pricing! It depends on your app's features and complexity. Can you tell me more about what you have in mind?",
            ],
            Topic::Services => &[
                "I offer comprehensive mobile app development services including iOS & Android development, UI/UX design, backend development, and ongoing support. What specific service interests you?",
                "My services include native iOS/Android development, cross-platform solutions, app store optimization, and maintenance. Which area would you like to know more about?",
                "I specialize in end-to-end mobile app development - from concept to launch. This includes design, development, testing, and post-launch support.",
            ],
            Topic::Timeline => &[
                "Development timelines typically range from 8-20 weeks depending on complexity. Simple apps take 8-12 weeks, while complex apps need 16-20+ weeks. What's your target launch date?",
                "Most apps take 2-5 months to develop. The timeline depends on features, design complexity, and revisions. Do you have a specific deadline in mind?",
                "Project timelines vary based on scope. I can provide a detailed timeline after understanding your requirements. When would you like to launch?",
            ],
            Topic::Contact => &[
                "You can reach me at agarwal.jitendra9@gmail.com or call +91 7044216968. I'm also available through the contact form on this website.",
                "Feel free to contact me directly! Email: agarwal.jitendra9@gmail.com, Phone: +91 7044216968. I typically respond within 24 hours.",
                "I'd love to discuss your project! You can email me at agarwal.jitendra9@gmail.com or use the contact form. What's the best way to reach you?",
            ],
            Topic::Fallback => &[
                "That's a great question! I'd be happy to discuss this in more detail. Could you provide more specifics about your project?",
                "I can definitely help with that. Let me know more about your requirements and I'll provide detailed information.",
                "Interesting! I'd love to learn more about your project. Can you share some additional details?",
                "Thanks for your question! For the best answer, could you tell me a bit more about what you're looking for?",
                "I'm here to help! Would you like to schedule a call to discuss your project in detail? You can reach me at agarwal.jitendra9@gmail.com",
            ],
        }
    }
}

/// Shortcut buttons shown under the greeting until one is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickReply {
    Quote,
    TechnicalSupport,
    Project,
}

impl QuickReply {
    pub const ALL: [QuickReply; 3] = [
        QuickReply::Quote,
        QuickReply::TechnicalSupport,
        QuickReply::Project,
    ];

    pub fn message(self) -> &'static str {
        match self {
            QuickReply::Quote => "I need a quote for my app",
            QuickReply::TechnicalSupport => "I need technical support",
            QuickReply::Project => "I want to discuss a project",
        }
    }

    pub fn response(self) -> &'static str {
        match self {
            QuickReply::Quote => "I'd be happy to provide a quote! Please fill out the contact form with your project details, and I'll get back to you within 24 hours with a detailed estimate.",
            QuickReply::TechnicalSupport => "For technical support, please describe your issue in detail. You can also submit a support ticket using the form below for faster assistance.",
            QuickReply::Project => "Great! I'd love to discuss your project. What type of mobile app are you looking to build? iOS, Android, or cross-platform?",
        }
    }
}

/// Picks replies and typing delays from an injected RNG.
pub struct Responder<R: Rng> {
    rng: R,
}

impl<R: Rng> Responder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn reply(&mut self, input: &str) -> &'static str {
        let pool = Topic::classify(input).responses();
        pool[self.rng.gen_range(0..pool.len())]
    }

    pub fn typing_delay_ms(&mut self) -> u32 {
        self.rng.gen_range(TYPING_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONTACT_EMAIL, CONTACT_PHONE};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn responder(seed: u64) -> Responder<SmallRng> {
        Responder::new(SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn topics_are_checked_in_order() {
        assert_eq!(Topic::classify("Hello there"), Topic::Greeting);
        assert_eq!(Topic::classify("hey, what's the COST?"), Topic::Greeting);
        assert_eq!(Topic::classify("What is the price?"), Topic::Pricing);
        assert_eq!(Topic::classify("Do you offer design SERVICES"), Topic::Services);
        assert_eq!(Topic::classify("How long does it take"), Topic::Timeline);
        assert_eq!(Topic::classify("Can I reach you by email"), Topic::Contact);
        assert_eq!(Topic::classify("Nope"), Topic::Fallback);
    }

    #[test]
    fn hello_always_draws_a_greeting() {
        let mut responder = responder(7);
        let greetings = Topic::Greeting.responses();
        assert_eq!(greetings.len(), 3);
        for _ in 0..50 {
            assert!(greetings.contains(&responder.reply("well HELLO")));
        }
    }

    #[test]
    fn unknown_input_draws_from_the_default_pool() {
        let mut responder = responder(11);
        let fallback = Topic::Fallback.responses();
        assert_eq!(fallback.len(), 5);
        for _ in 0..50 {
            assert!(fallback.contains(&responder.reply("Kotlin or Swift?")));
        }
    }

    #[test]
    fn every_topic_has_a_pool() {
        for topic in [
            Topic::Greeting,
            Topic::Pricing,
            Topic::Services,
            Topic::Timeline,
            Topic::Contact,
        ] {
            assert_eq!(topic.responses().len(), 3, "{:?}", topic);
        }
    }

    #[test]
    fn contact_replies_mention_the_configured_details() {
        for reply in Topic::Contact.responses() {
            assert!(reply.contains(CONTACT_EMAIL));
        }
        assert!(Topic::Contact.responses()[0].contains(CONTACT_PHONE));
    }

    #[test]
    fn typing_delay_stays_in_range() {
        let mut responder = responder(3);
        for _ in 0..100 {
            let delay = responder.typing_delay_ms();
            assert!((1500..2500).contains(&delay));
        }
    }
}
