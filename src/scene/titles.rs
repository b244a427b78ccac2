//! Built-in title list

/// Public-domain titles shown when no other list is supplied
pub const DEFAULT_TITLES: &[&str] = &[
    "Pride and Prejudice",
    "Moby-Dick",
    "Frankenstein",
    "The Tale of Genji",
    "Kokoro",
    "I Am a Cat",
    "Botchan",
    "Rashomon",
    "Night on the Galactic Railroad",
    "Run, Melos!",
    "Crime and Punishment",
    "Anna Karenina",
    "War and Peace",
    "The Brothers Karamazov",
    "Don Quixote",
    "Les Miserables",
    "The Count of Monte Cristo",
    "Madame Bovary",
    "Great Expectations",
    "Jane Eyre",
    "Wuthering Heights",
    "Middlemarch",
    "The Odyssey",
    "The Divine Comedy",
    "Faust",
    "The Pillow Book",
    "Hojoki",
    "The Narrow Road to the Deep North",
    "Alice's Adventures in Wonderland",
    "Treasure Island",
    "The Time Machine",
    "Dracula",
    "The Picture of Dorian Gray",
    "Walden",
    "Leaves of Grass",
    "The Metamorphosis",
    "Dubliners",
    "The Scarlet Letter",
    "Little Women",
    "Heart of Darkness",
];

pub fn default_titles() -> Vec<String> {
    DEFAULT_TITLES.iter().map(|t| t.to_string()).collect()
}
