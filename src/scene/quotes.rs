//! Opening quotes about reading

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const fn q(text: &'static str, author: &'static str) -> Quote {
    Quote { text, author }
}

pub const QUOTES: &[Quote] = &[
    q("A good book is an event in my life.", "Stendhal (French novelist, 1783-1842)"),
    q(
        "A house without books is like a room without windows.",
        "Heinrich Mann (German writer, 1871-1950)",
    ),
    q(
        "The man who does not read has no advantage over the man who cannot read.",
        "Mark Twain (American novelist, 1835-1910)",
    ),
    q(
        "A room without books is like a body without a soul.",
        "Marcus Tullius Cicero (Roman statesman, 106-43 BC)",
    ),
    q(
        "A classic is something that everybody wants to have read and nobody wants to read.",
        "Mark Twain (American novelist, 1835-1910)",
    ),
    q(
        "The multitude of books is making us ignorant.",
        "Voltaire (French philosopher, 1694-1778)",
    ),
    q(
        "I am a part of everything that I have read.",
        "Theodore Roosevelt (US president, 1858-1919)",
    ),
    q(
        "No entertainment is so cheap as reading, nor any pleasure so lasting.",
        "Mary Wortley Montagu (English writer, 1689-1762)",
    ),
    q(
        "Reading is to the mind what exercise is to the body.",
        "Richard Steele (Irish writer, 1672-1729)",
    ),
    q(
        "The only thing that you absolutely have to know, is the location of the library.",
        "Albert Einstein (physicist, 1879-1955)",
    ),
    q(
        "The reading of all good books is like a conversation with the finest minds of past centuries.",
        "Rene Descartes (French philosopher, 1596-1650)",
    ),
    q(
        "Reading without reflecting is like eating without digesting.",
        "Edmund Burke (Irish-born philosopher, 1729-1797)",
    ),
    q(
        "Today a reader, tomorrow a leader.",
        "Margaret Fuller (American journalist, 1810-1850)",
    ),
    q("I cannot live without books.", "Thomas Jefferson (US president, 1743-1826)"),
    q(
        "A book must be the axe for the frozen sea within us.",
        "Franz Kafka (Bohemian novelist, 1883-1924)",
    ),
    q(
        "To learn to read is to light a fire; every syllable that is spelled out is a spark.",
        "Victor Hugo (French poet, 1802-1885)",
    ),
];

/// Pick one quote uniformly
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static Quote {
    &QUOTES[rng.random_range(0..QUOTES.len())]
}
