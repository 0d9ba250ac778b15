mod common;

use common::{session, store_with, word};
use spellbee::console::{ConsoleGame, PlayCommandParser};
use spellbee::spelling::{Difficulty, ProgressStore};

fn play(game: &mut ConsoleGame<rand::rngs::StdRng>, line: &str) -> String {
    game.handle_line(line).expect("handle line").text
}

#[test]
fn full_round_through_the_console() {
    let (_tmp, store) = store_with(&[word("c", "cat", Difficulty::Easy, "Animals")]);
    let mut game = ConsoleGame::new(session(&store, 9), PlayCommandParser::default());

    let opening = game.start().unwrap();
    assert!(opening.contains("Spell this word!"));

    let out = play(&mut game, "dog");
    assert!(out.contains("Not quite!"));
    assert!(out.contains("2 attempts left!"));

    let out = play(&mut game, "/clue");
    assert!(out.contains("1 clue taken (reduces stars)"));

    let out = play(&mut game, "CAT");
    assert!(out.contains("You got it in 2 attempts!"));
    // One clue knocks the round rating from 2 to 1...
    assert!(out.contains("\n⭐\n"));
    // ...but the cumulative award only looks at attempts.
    assert!(out.contains("Total Stars: 2"));
    assert_eq!(ProgressStore::get(&store).unwrap().stars, 2);

    let out = play(&mut game, "");
    assert!(out.contains("Attempts: ○○○"));
}

#[test]
fn custom_prefix_treats_slash_as_text() {
    let (_tmp, store) = store_with(&[word("c", "cat", Difficulty::Easy, "Animals")]);
    let mut game = ConsoleGame::new(session(&store, 9), PlayCommandParser::new("!"));
    game.start().unwrap();

    let out = play(&mut game, "!help");
    assert!(out.contains("!clue"));
    let out = play(&mut game, "/clue");
    assert!(out.contains("Not quite!"));
}

#[test]
fn unknown_and_invalid_commands() {
    let (_tmp, store) = store_with(&[word("c", "cat", Difficulty::Easy, "Animals")]);
    let mut game = ConsoleGame::new(session(&store, 9), PlayCommandParser::default());
    game.start().unwrap();

    assert_eq!(
        play(&mut game, "/dance"),
        "Unknown command 'dance'. Type /help for commands."
    );
    assert!(play(&mut game, "/difficulty extreme").starts_with("Difficulty must be"));
    // Neither consumed an attempt.
    assert_eq!(game.session().round().unwrap().attempts(), 0);
}

#[test]
fn switching_category_then_skipping() {
    let (_tmp, store) = store_with(&[
        word("a", "cat", Difficulty::Easy, "Animals"),
        word("n", "sun", Difficulty::Easy, "Nature"),
    ]);
    let mut game = ConsoleGame::new(session(&store, 2), PlayCommandParser::default());
    game.start().unwrap();

    let out = play(&mut game, "/category Nature");
    assert!(out.starts_with("Now practicing: Nature / all levels"));
    let out = play(&mut game, "/skip");
    assert!(out.contains("[📁 Nature]"));
    assert_eq!(game.session().round().unwrap().word().id, "n");
}

#[test]
fn typed_category_is_matched_regardless_of_case() {
    let (_tmp, store) = store_with(&[
        word("a", "cat", Difficulty::Easy, "Animals"),
        word("n", "sun", Difficulty::Easy, "Nature"),
    ]);
    let mut game = ConsoleGame::new(session(&store, 2), PlayCommandParser::default());
    game.start().unwrap();

    let out = play(&mut game, "/category animals");
    assert!(out.starts_with("Now practicing: Animals / all levels"));
    let out = play(&mut game, "/skip");
    assert!(out.contains("[📁 Animals]"));
    assert_eq!(game.session().round().unwrap().word().id, "a");
}
