//! Page copy and asset locations

pub const BACKGROUND_IMAGE_URL: &str =
    "https://i.pinimg.com/originals/c4/e8/20/c4e820b0a8b71a4ca72cbf98a30e86c8.jpg";
pub const FOOTER_LOGO_URL: &str = "https://www.gaianet.ai/images/logo.png";

pub const HERO_TITLE_LEAD: &str = "Your Key to ";
pub const HERO_TITLE_HIGHLIGHT: &str = "Korean Fluency";
pub const HERO_SUBTITLE: &str =
    "Unlock the secrets of the Korean language with our interactive AI-powered chatbot.";

pub const CHAT_HEADING: &str = "Ask :";
pub const INPUT_PLACEHOLDER: &str = "Type your message...";

pub const DESCRIPTION_HEADING: &str = "Description";
pub const DESCRIPTION_INTRO: &str = "This Korean learning app is designed to revolutionize how \
    users engage with the language, offering an interactive and tailored learning experience. \
    With an AI-powered chatbot, users can practice speaking, ask questions, and receive instant \
    feedback, all personalized to their proficiency level.";
pub const EXAMPLE_PROMPTS_LEAD: &str = "Example prompts include:";
pub const EXAMPLE_PROMPTS: [&str; 6] = [
    "Can you help me practice introducing myself in Korean?",
    "What’s the difference between formal and informal speech?",
    "How do I properly conjugate Korean verbs?",
    "What are the most common phrases for traveling in Korea?",
    "Can you explain the meaning of this Korean idiom?",
    "How can I improve my pronunciation of Hangeul?",
];
pub const DESCRIPTION_OUTRO: &str = "This app aims to make learning Korean accessible, \
    enjoyable, and effective, breaking down language barriers while fostering a deeper \
    appreciation for Korean culture. By leveraging AI to provide real-time guidance and \
    practice, it empowers users to build confidence in speaking, listening, and understanding \
    Korean, paving the way for language mastery and cultural immersion.";

pub const FOOTER_CAPTION: &str = "Powered by";
