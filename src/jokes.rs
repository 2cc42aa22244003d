use crate::random::Entropy;

pub const MODEL_NAME: &str = "joke-generator-v1";

pub const PROGRAMMING_JOKES: [&str; 15] = [
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem!",
    "Why do Java developers wear glasses? Because they don't C#!",
    "What's a programmer's favorite hangout place? The Foo Bar!",
    "Why did the developer go broke? Because he used up all his cache!",
    "What do you call a programmer from Finland? Nerdic!",
    "Why do programmers always mix up Halloween and Christmas? Because Oct 31 == Dec 25!",
    "A SQL query goes into a bar, walks up to two tables and asks: 'Can I join you?'",
    "How do you comfort a JavaScript bug? You console it!",
    "Why did the Python programmer not respond? Because he was busy debugging indentation errors!",
    "What's the object-oriented way to become wealthy? Inheritance!",
    "Why did the programmer quit his job? Because he didn't get arrays!",
    "What do you call a programmer who doesn't comment their code? A developer in disguise!",
    "Why do programmers hate nature? It has too many bugs!",
    "What's a programmer's favorite music? Heavy metal... because of all the crashes!",
];

pub const SUGGESTED_PROMPTS: [&str; 3] = [
    "Tell me a funny programming joke",
    "Give me a developer joke",
    "Share a coding humor",
];

pub fn pick_joke(entropy: &dyn Entropy) -> &'static str {
    PROGRAMMING_JOKES[entropy.index(PROGRAMMING_JOKES.len())]
}
