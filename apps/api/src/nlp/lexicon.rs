//! Closed-class word lists used by the noun-phrase chunker.
//!
//! Anything not listed here (and not punctuation) is treated as nominal.
//! The lists are tuned for English job postings and resumes.

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "any", "some", "all",
    "both", "either", "neither", "no", "another", "such", "what", "which", "whose",
];

pub const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "who",
    "whom", "someone", "anyone", "everyone", "something", "anything", "everything",
];

pub const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "as", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite",
    "down", "during", "except", "for", "from", "in", "inside", "into", "like", "near", "of",
    "off", "on", "onto", "out", "outside", "over", "per", "since", "through", "throughout",
    "to", "toward", "towards", "under", "until", "up", "upon", "via", "with", "within",
    "without",
];

pub const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "whereas", "although",
    "though", "unless", "than", "then", "when", "where", "whether", "&",
];

/// Auxiliaries, modals and the verbs that recur in job postings.
pub const VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "need", "needs", "want", "wants", "seek", "seeking", "looking", "join", "joining",
    "working", "building", "designing", "develop", "developing", "leading", "manage",
    "managing", "owning", "driving", "helping", "supporting", "collaborate", "collaborating",
    "create", "creating", "deliver", "delivering", "maintain", "maintaining", "writing",
    "using", "ensure", "ensuring", "apply", "include", "includes", "including", "require",
    "requires", "required", "prefer", "preferred", "get", "make", "take", "bring", "thrive",
    "love", "enjoy", "know", "understand", "hire", "hiring", "implement", "implementing",
    "improve", "improving", "mentoring", "define", "defining", "offer", "offers", "write",
    "writes", "wrote", "knows", "develops", "manages", "creates", "delivers",
    "maintains", "ensures", "implements", "improves", "defines", "collaborates", "joins",
    "seeks", "brings", "makes", "takes", "gets", "loves", "enjoys", "understands", "hires",
    "deploy", "deploys", "deploying", "built", "led", "worked", "shipped", "running",
    "partnering", "architecting",
];

/// Words that are verbs in "you will lead a team" but nouns in "lead engineer".
/// The chunker decides from the neighbouring words.
pub const VERB_NOUNS: &[&str] = &[
    "build", "builds", "design", "designs", "lead", "leads", "work", "works", "drive", "drives",
    "own", "owns", "scale", "scales", "ship", "ships", "run", "runs", "support", "supports",
    "help", "helps", "mentor", "mentors", "partner", "partners", "architect", "architects",
];

pub const ADVERBS: &[&str] = &[
    "not", "also", "very", "too", "just", "only", "well", "highly", "strongly", "ideally",
    "preferably", "currently", "already", "always", "often", "plus", "etc", "e.g", "i.e",
    "there", "here", "how", "why", "least",
];

/// Nouns that end in `-ly` and must not be mistaken for adverbs.
pub const LY_NOUNS: &[&str] = &[
    "supply", "family", "assembly", "anomaly", "reply", "rally", "italy", "monopoly",
    "butterfly", "jelly", "ally", "poly", "homily", "firefly",
];

/// Adjectives that carry no skill content on their own; they are dropped when
/// they would form a single-token chunk.
pub const WEAK_MODIFIERS: &[&str] = &["other", "more", "most", "many", "much", "few", "several"];

pub fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}
