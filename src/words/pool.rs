use super::types::{Difficulty, WordEntry};

/// Built-in practice pool: common English words followed by a block of
/// harder vocabulary.
pub const BUILTIN_WORDS: &[WordEntry] = &[
    WordEntry::new("the", Difficulty::Easy),
    WordEntry::new("of", Difficulty::Easy),
    WordEntry::new("and", Difficulty::Easy),
    WordEntry::new("a", Difficulty::Easy),
    WordEntry::new("to", Difficulty::Easy),
    WordEntry::new("in", Difficulty::Easy),
    WordEntry::new("is", Difficulty::Easy),
    WordEntry::new("you", Difficulty::Easy),
    WordEntry::new("that", Difficulty::Easy),
    WordEntry::new("it", Difficulty::Easy),
    WordEntry::new("he", Difficulty::Easy),
    WordEntry::new("was", Difficulty::Easy),
    WordEntry::new("for", Difficulty::Easy),
    WordEntry::new("on", Difficulty::Easy),
    WordEntry::new("are", Difficulty::Easy),
    WordEntry::new("as", Difficulty::Easy),
    WordEntry::new("with", Difficulty::Easy),
    WordEntry::new("his", Difficulty::Easy),
    WordEntry::new("they", Difficulty::Easy),
    WordEntry::new("I", Difficulty::Easy),
    WordEntry::new("at", Difficulty::Easy),
    WordEntry::new("be", Difficulty::Easy),
    WordEntry::new("this", Difficulty::Easy),
    WordEntry::new("have", Difficulty::Easy),
    WordEntry::new("from", Difficulty::Easy),
    WordEntry::new("or", Difficulty::Easy),
    WordEntry::new("one", Difficulty::Easy),
    WordEntry::new("had", Difficulty::Easy),
    WordEntry::new("by", Difficulty::Easy),
    WordEntry::new("word", Difficulty::Easy),
    WordEntry::new("but", Difficulty::Easy),
    WordEntry::new("not", Difficulty::Easy),
    WordEntry::new("what", Difficulty::Easy),
    WordEntry::new("all", Difficulty::Easy),
    WordEntry::new("were", Difficulty::Easy),
    WordEntry::new("we", Difficulty::Easy),
    WordEntry::new("when", Difficulty::Easy),
    WordEntry::new("your", Difficulty::Easy),
    WordEntry::new("can", Difficulty::Easy),
    WordEntry::new("said", Difficulty::Easy),
    WordEntry::new("there", Difficulty::Medium),
    WordEntry::new("use", Difficulty::Easy),
    WordEntry::new("an", Difficulty::Easy),
    WordEntry::new("each", Difficulty::Easy),
    WordEntry::new("which", Difficulty::Medium),
    WordEntry::new("she", Difficulty::Easy),
    WordEntry::new("do", Difficulty::Easy),
    WordEntry::new("how", Difficulty::Easy),
    WordEntry::new("their", Difficulty::Medium),
    WordEntry::new("if", Difficulty::Easy),
    WordEntry::new("will", Difficulty::Easy),
    WordEntry::new("up", Difficulty::Easy),
    WordEntry::new("other", Difficulty::Medium),
    WordEntry::new("about", Difficulty::Medium),
    WordEntry::new("out", Difficulty::Easy),
    WordEntry::new("many", Difficulty::Easy),
    WordEntry::new("then", Difficulty::Easy),
    WordEntry::new("them", Difficulty::Easy),
    WordEntry::new("these", Difficulty::Medium),
    WordEntry::new("so", Difficulty::Easy),
    WordEntry::new("some", Difficulty::Easy),
    WordEntry::new("her", Difficulty::Easy),
    WordEntry::new("would", Difficulty::Medium),
    WordEntry::new("make", Difficulty::Easy),
    WordEntry::new("like", Difficulty::Easy),
    WordEntry::new("him", Difficulty::Easy),
    WordEntry::new("into", Difficulty::Easy),
    WordEntry::new("time", Difficulty::Easy),
    WordEntry::new("has", Difficulty::Easy),
    WordEntry::new("look", Difficulty::Easy),
    WordEntry::new("two", Difficulty::Easy),
    WordEntry::new("more", Difficulty::Easy),
    WordEntry::new("write", Difficulty::Medium),
    WordEntry::new("go", Difficulty::Easy),
    WordEntry::new("see", Difficulty::Easy),
    WordEntry::new("number", Difficulty::Medium),
    WordEntry::new("no", Difficulty::Easy),
    WordEntry::new("way", Difficulty::Easy),
    WordEntry::new("could", Difficulty::Medium),
    WordEntry::new("people", Difficulty::Medium),
    WordEntry::new("my", Difficulty::Easy),
    WordEntry::new("than", Difficulty::Easy),
    WordEntry::new("first", Difficulty::Medium),
    WordEntry::new("water", Difficulty::Medium),
    WordEntry::new("been", Difficulty::Easy),
    WordEntry::new("call", Difficulty::Easy),
    WordEntry::new("who", Difficulty::Easy),
    WordEntry::new("oil", Difficulty::Easy),
    WordEntry::new("its", Difficulty::Easy),
    WordEntry::new("now", Difficulty::Easy),
    WordEntry::new("find", Difficulty::Easy),
    WordEntry::new("long", Difficulty::Easy),
    WordEntry::new("down", Difficulty::Easy),
    WordEntry::new("day", Difficulty::Easy),
    WordEntry::new("did", Difficulty::Easy),
    WordEntry::new("get", Difficulty::Easy),
    WordEntry::new("come", Difficulty::Easy),
    WordEntry::new("made", Difficulty::Easy),
    WordEntry::new("may", Difficulty::Easy),
    WordEntry::new("part", Difficulty::Easy),
    WordEntry::new("over", Difficulty::Easy),
    WordEntry::new("new", Difficulty::Easy),
    WordEntry::new("sound", Difficulty::Medium),
    WordEntry::new("take", Difficulty::Easy),
    WordEntry::new("only", Difficulty::Easy),
    WordEntry::new("little", Difficulty::Medium),
    WordEntry::new("work", Difficulty::Easy),
    WordEntry::new("know", Difficulty::Easy),
    WordEntry::new("place", Difficulty::Medium),
    WordEntry::new("year", Difficulty::Easy),
    WordEntry::new("live", Difficulty::Easy),
    WordEntry::new("me", Difficulty::Easy),
    WordEntry::new("back", Difficulty::Easy),
    WordEntry::new("give", Difficulty::Easy),
    WordEntry::new("most", Difficulty::Easy),
    WordEntry::new("very", Difficulty::Easy),
    WordEntry::new("after", Difficulty::Medium),
    WordEntry::new("thing", Difficulty::Medium),
    WordEntry::new("our", Difficulty::Easy),
    WordEntry::new("just", Difficulty::Easy),
    WordEntry::new("name", Difficulty::Easy),
    WordEntry::new("good", Difficulty::Easy),
    WordEntry::new("sentence", Difficulty::Difficult),
    WordEntry::new("man", Difficulty::Easy),
    WordEntry::new("think", Difficulty::Medium),
    WordEntry::new("say", Difficulty::Easy),
    WordEntry::new("great", Difficulty::Medium),
    WordEntry::new("where", Difficulty::Medium),
    WordEntry::new("help", Difficulty::Easy),
    WordEntry::new("through", Difficulty::Medium),
    WordEntry::new("much", Difficulty::Easy),
    WordEntry::new("before", Difficulty::Medium),
    WordEntry::new("line", Difficulty::Easy),
    WordEntry::new("right", Difficulty::Medium),
    WordEntry::new("too", Difficulty::Easy),
    WordEntry::new("mean", Difficulty::Easy),
    WordEntry::new("old", Difficulty::Easy),
    WordEntry::new("any", Difficulty::Easy),
    WordEntry::new("same", Difficulty::Easy),
    WordEntry::new("tell", Difficulty::Easy),
    WordEntry::new("boy", Difficulty::Easy),
    WordEntry::new("follow", Difficulty::Medium),
    WordEntry::new("came", Difficulty::Easy),
    WordEntry::new("want", Difficulty::Easy),
    WordEntry::new("show", Difficulty::Easy),
    WordEntry::new("also", Difficulty::Easy),
    WordEntry::new("around", Difficulty::Medium),
    WordEntry::new("form", Difficulty::Easy),
    WordEntry::new("three", Difficulty::Medium),
    WordEntry::new("small", Difficulty::Medium),
    WordEntry::new("set", Difficulty::Easy),
    WordEntry::new("put", Difficulty::Easy),
    WordEntry::new("end", Difficulty::Easy),
    WordEntry::new("does", Difficulty::Easy),
    WordEntry::new("another", Difficulty::Medium),
    WordEntry::new("well", Difficulty::Easy),
    WordEntry::new("large", Difficulty::Medium),
    WordEntry::new("must", Difficulty::Easy),
    WordEntry::new("big", Difficulty::Easy),
    WordEntry::new("even", Difficulty::Easy),
    WordEntry::new("such", Difficulty::Easy),
    WordEntry::new("because", Difficulty::Medium),
    WordEntry::new("turn", Difficulty::Easy),
    WordEntry::new("here", Difficulty::Easy),
    WordEntry::new("why", Difficulty::Easy),
    WordEntry::new("ask", Difficulty::Easy),
    WordEntry::new("went", Difficulty::Easy),
    WordEntry::new("men", Difficulty::Easy),
    WordEntry::new("read", Difficulty::Easy),
    WordEntry::new("need", Difficulty::Easy),
    WordEntry::new("land", Difficulty::Easy),
    WordEntry::new("different", Difficulty::Difficult),
    WordEntry::new("home", Difficulty::Easy),
    WordEntry::new("us", Difficulty::Easy),
    WordEntry::new("move", Difficulty::Easy),
    WordEntry::new("try", Difficulty::Easy),
    WordEntry::new("kind", Difficulty::Easy),
    WordEntry::new("hand", Difficulty::Easy),
    WordEntry::new("picture", Difficulty::Medium),
    WordEntry::new("again", Difficulty::Medium),
    WordEntry::new("change", Difficulty::Medium),
    WordEntry::new("off", Difficulty::Easy),
    WordEntry::new("play", Difficulty::Easy),
    WordEntry::new("spell", Difficulty::Medium),
    WordEntry::new("air", Difficulty::Easy),
    WordEntry::new("away", Difficulty::Easy),
    WordEntry::new("animal", Difficulty::Medium),
    WordEntry::new("house", Difficulty::Medium),
    WordEntry::new("point", Difficulty::Medium),
    WordEntry::new("page", Difficulty::Easy),
    WordEntry::new("letter", Difficulty::Medium),
    WordEntry::new("mother", Difficulty::Medium),
    WordEntry::new("answer", Difficulty::Medium),
    WordEntry::new("found", Difficulty::Medium),
    WordEntry::new("study", Difficulty::Medium),
    WordEntry::new("still", Difficulty::Medium),
    WordEntry::new("learn", Difficulty::Medium),
    WordEntry::new("should", Difficulty::Medium),
    WordEntry::new("America", Difficulty::Medium),
    WordEntry::new("world", Difficulty::Medium),
    WordEntry::new("inconceivable", Difficulty::Difficult),
    WordEntry::new("perspicacious", Difficulty::Difficult),
    WordEntry::new("obfuscate", Difficulty::Difficult),
    WordEntry::new("idiosyncratic", Difficulty::Difficult),
    WordEntry::new("antediluvian", Difficulty::Difficult),
    WordEntry::new("sesquipedalian", Difficulty::Difficult),
    WordEntry::new("ephemeral", Difficulty::Difficult),
    WordEntry::new("magnanimous", Difficulty::Difficult),
    WordEntry::new("obstreperous", Difficulty::Difficult),
    WordEntry::new("esoteric", Difficulty::Difficult),
    WordEntry::new("inscrutable", Difficulty::Difficult),
    WordEntry::new("recalcitrant", Difficulty::Difficult),
    WordEntry::new("cognizant", Difficulty::Difficult),
    WordEntry::new("gregarious", Difficulty::Difficult),
    WordEntry::new("perfunctory", Difficulty::Difficult),
];

/// The built-in pool, optionally narrowed to one difficulty.
pub fn builtin_pool(difficulty: Option<Difficulty>) -> Vec<WordEntry> {
    BUILTIN_WORDS
        .iter()
        .filter(|w| difficulty.map_or(true, |d| w.difficulty == d))
        .cloned()
        .collect()
}

/// Look a word up in the built-in pool, ignoring case.
pub fn find_word(text: &str) -> Option<WordEntry> {
    let text = text.trim();
    BUILTIN_WORDS
        .iter()
        .find(|w| w.text.eq_ignore_ascii_case(text))
        .copied()
}
