//! Built-in word list written on first run.

use chrono::Utc;
use uuid::Uuid;

use crate::spelling::types::{Difficulty, Word};
use Difficulty::{Easy, Hard, Medium};

/// (word, difficulty, category) for a second-standard spelling syllabus.
pub const DEFAULT_WORDS: &[(&str, Difficulty, &str)] = &[
    ("cat", Easy, "Animals"),
    ("dog", Easy, "Animals"),
    ("bird", Easy, "Animals"),
    ("fish", Easy, "Animals"),
    ("frog", Easy, "Animals"),
    ("lion", Easy, "Animals"),
    ("bear", Easy, "Animals"),
    ("duck", Easy, "Animals"),
    ("sun", Easy, "Nature"),
    ("moon", Easy, "Nature"),
    ("tree", Easy, "Nature"),
    ("leaf", Easy, "Nature"),
    ("rain", Easy, "Nature"),
    ("wind", Easy, "Nature"),
    ("hill", Easy, "Nature"),
    ("star", Easy, "Nature"),
    ("pond", Easy, "Nature"),
    ("rock", Easy, "Nature"),
    ("book", Easy, "School"),
    ("desk", Easy, "School"),
    ("pen", Easy, "School"),
    ("bag", Easy, "School"),
    ("bell", Easy, "School"),
    ("page", Easy, "School"),
    ("mouse", Easy, "Technology"),
    ("key", Easy, "Technology"),
    ("phone", Easy, "Technology"),
    ("game", Easy, "Technology"),
    ("home", Easy, "Family"),
    ("door", Easy, "Family"),
    ("room", Easy, "Family"),
    ("wall", Easy, "Family"),
    ("bed", Easy, "Family"),
    ("tiger", Medium, "Animals"),
    ("horse", Medium, "Animals"),
    ("rabbit", Medium, "Animals"),
    ("monkey", Medium, "Animals"),
    ("parrot", Medium, "Animals"),
    ("spider", Medium, "Animals"),
    ("turtle", Medium, "Animals"),
    ("pigeon", Medium, "Animals"),
    ("flower", Medium, "Nature"),
    ("garden", Medium, "Nature"),
    ("forest", Medium, "Nature"),
    ("river", Medium, "Nature"),
    ("ocean", Medium, "Nature"),
    ("earth", Medium, "Nature"),
    ("water", Medium, "Nature"),
    ("cloud", Medium, "Nature"),
    ("plant", Medium, "Nature"),
    ("grass", Medium, "Nature"),
    ("beach", Medium, "Nature"),
    ("stone", Medium, "Nature"),
    ("apple", Medium, "Fruits"),
    ("mango", Medium, "Fruits"),
    ("orange", Medium, "Fruits"),
    ("banana", Medium, "Fruits"),
    ("grapes", Medium, "Fruits"),
    ("bread", Medium, "Food"),
    ("rice", Medium, "Food"),
    ("milk", Medium, "Food"),
    ("pencil", Medium, "School"),
    ("school", Medium, "School"),
    ("teacher", Medium, "School"),
    ("student", Medium, "School"),
    ("lesson", Medium, "School"),
    ("chalk", Medium, "School"),
    ("eraser", Medium, "School"),
    ("ruler", Medium, "School"),
    ("computer", Medium, "Technology"),
    ("laptop", Medium, "Technology"),
    ("tablet", Medium, "Technology"),
    ("screen", Medium, "Technology"),
    ("printer", Medium, "Technology"),
    ("keyboard", Medium, "Technology"),
    ("camera", Medium, "Technology"),
    ("mother", Medium, "Family"),
    ("father", Medium, "Family"),
    ("sister", Medium, "Family"),
    ("brother", Medium, "Family"),
    ("family", Medium, "Family"),
    ("window", Medium, "Family"),
    ("kitchen", Medium, "Family"),
    ("hand", Easy, "Body"),
    ("feet", Easy, "Body"),
    ("eyes", Easy, "Body"),
    ("ears", Easy, "Body"),
    ("nose", Easy, "Body"),
    ("teeth", Medium, "Body"),
    ("finger", Medium, "Body"),
    ("elephant", Hard, "Animals"),
    ("butterfly", Hard, "Animals"),
    ("crocodile", Hard, "Animals"),
    ("peacock", Hard, "Animals"),
    ("sparrow", Hard, "Animals"),
    ("rainbow", Hard, "Nature"),
    ("mountain", Hard, "Nature"),
    ("waterfall", Hard, "Nature"),
    ("environment", Hard, "Nature"),
    ("sunshine", Hard, "Nature"),
    ("weather", Hard, "Nature"),
    ("season", Medium, "Nature"),
    ("summer", Medium, "Nature"),
    ("winter", Medium, "Nature"),
    ("spring", Medium, "Nature"),
    ("notebook", Hard, "School"),
    ("classroom", Hard, "School"),
    ("blackboard", Hard, "School"),
    ("homework", Hard, "School"),
    ("library", Hard, "School"),
    ("internet", Hard, "Technology"),
    ("software", Hard, "Technology"),
    ("website", Hard, "Technology"),
    ("monitor", Hard, "Technology"),
    ("speaker", Hard, "Technology"),
    ("vegetable", Hard, "Food"),
    ("chocolate", Hard, "Food"),
    ("breakfast", Hard, "Food"),
    ("beautiful", Hard, "Adjectives"),
    ("wonderful", Hard, "Adjectives"),
    ("birthday", Hard, "Events"),
    ("umbrella", Hard, "Objects"),
    ("chair", Medium, "Objects"),
    ("table", Medium, "Objects"),
    ("bottle", Medium, "Objects"),
    ("basket", Medium, "Objects"),
    ("mirror", Medium, "Objects"),
    ("clock", Medium, "Objects"),
    ("watch", Medium, "Objects"),
    ("red", Easy, "Colors"),
    ("blue", Easy, "Colors"),
    ("green", Easy, "Colors"),
    ("yellow", Medium, "Colors"),
    ("orange", Medium, "Colors"),
    ("purple", Medium, "Colors"),
    ("circle", Medium, "Shapes"),
    ("square", Medium, "Shapes"),
    ("triangle", Hard, "Shapes"),
];

/// Materialize [`DEFAULT_WORDS`] with fresh ids and creation times.
pub fn default_words() -> Vec<Word> {
    let now = Utc::now();
    DEFAULT_WORDS
        .iter()
        .map(|(word, difficulty, category)| Word {
            id: Uuid::new_v4().to_string(),
            word: (*word).to_string(),
            difficulty: *difficulty,
            category: Some((*category).to_string()),
            is_priority: false,
            created_at: now,
        })
        .collect()
}
