//! Word lists used by the stopword classifier.

use crate::vocab::ENGLISH_STOPWORDS;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Grammatical categories reported by the analysis, with their member words.
pub const CATEGORY_PATTERNS: &[(&str, &[&str])] = &[
    (
        "pronouns",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
            "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
            "myself", "yourself", "himself", "herself", "itself", "ourselves", "yourselves",
            "themselves", "aku", "kamu", "dia", "kita", "mereka", "saya", "anda",
        ],
    ),
    ("articles", &["a", "an", "the"]),
    (
        "prepositions",
        &[
            "in", "on", "at", "by", "for", "with", "to", "from", "of", "about", "into", "through",
            "during", "before", "after", "above", "below", "up", "down", "out", "off", "over",
            "under", "di", "ke", "dari", "untuk", "dengan", "oleh", "pada", "dalam", "antara",
        ],
    ),
    (
        "conjunctions",
        &[
            "and", "or", "but", "so", "yet", "for", "nor", "because", "since", "although",
            "though", "while", "if", "unless", "until", "when", "where", "why", "how", "dan",
            "atau", "tetapi", "karena", "jika", "ketika", "dimana", "mengapa", "bagaimana",
        ],
    ),
    (
        "auxiliary_verbs",
        &[
            "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had",
            "having", "do", "does", "did", "will", "would", "could", "should", "may", "might",
            "must", "can", "adalah", "akan", "sudah", "sedang", "bisa", "harus", "boleh",
        ],
    ),
    (
        "determiners",
        &[
            "this", "that", "these", "those", "some", "any", "all", "every", "each", "either",
            "neither", "much", "many", "few", "little", "more", "most", "less", "least", "ini",
            "itu", "semua", "setiap", "beberapa", "banyak", "sedikit", "lebih", "paling",
        ],
    ),
    (
        "question_words",
        &[
            "what", "who", "when", "where", "why", "how", "which", "whose", "apa", "siapa",
            "kapan", "dimana", "mengapa", "bagaimana", "yang mana",
        ],
    ),
    (
        "negations",
        &[
            "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "none", "tidak",
            "bukan", "jangan", "belum", "tak",
        ],
    ),
    (
        "adverbs",
        &[
            "very", "quite", "rather", "too", "so", "just", "only", "even", "still", "already",
            "yet", "again", "once", "twice", "always", "usually", "often", "sometimes", "rarely",
            "never", "here", "there", "everywhere", "somewhere", "anywhere", "nowhere", "now",
            "then", "today", "yesterday", "tomorrow", "soon", "later", "sangat", "hanya", "juga",
            "masih", "sudah", "lagi", "selalu", "sering", "kadang", "disini", "disana", "sekarang",
            "kemarin", "besok", "nanti",
        ],
    ),
    ("contractions", &["n't", "'ll", "'re", "'ve", "'d", "'s", "'m"]),
    (
        "interjections",
        &[
            "oh", "ah", "eh", "um", "uh", "hmm", "wow", "hey", "hi", "hello", "bye", "yes", "no",
            "aduh", "wah", "ya", "iya", "tidak", "halo", "hai",
        ],
    ),
    (
        "slang_informal",
        &[
            "lol", "omg", "wtf", "btw", "fyi", "asap", "aka", "etc", "lmao", "rofl", "wkwk",
            "haha", "hehe", "hihi", "gw", "gue", "lu", "lo", "bro", "sis",
        ],
    ),
];

/// Short list of very common Indonesian function words.
pub const INDONESIAN_COMMON: &[&str] = &[
    "yang", "dan", "ini", "itu", "untuk", "dengan", "dari", "pada", "dalam", "oleh", "akan",
    "sudah", "telah", "sedang", "masih", "belum", "tidak", "bukan", "jangan", "ada", "semua",
    "setiap", "beberapa", "banyak", "sedikit", "lebih", "paling", "sangat", "hanya", "juga",
    "lagi", "selalu", "sering", "kadang", "pernah",
];

/// Wider Indonesian list including frequent adjectives and spatial words.
const INDONESIAN_STOPWORDS: &[&str] = &[
    "aku", "kamu", "dia", "kita", "mereka", "saya", "anda", "kalian", "dimana", "kemana",
    "darimana", "bagaimana", "mengapa", "kenapa", "kapan", "siapa", "apa", "mana", "bila",
    "jika", "kalau", "ketika", "saat", "waktu", "karena", "sebab", "akibat", "hingga", "sampai",
    "setelah", "sesudah", "sebelum", "antara", "diantara", "sekitar", "dekat", "jauh", "atas",
    "bawah", "depan", "belakang", "kiri", "kanan", "tengah", "luar", "luas", "sempit", "besar",
    "kecil", "panjang", "pendek", "tinggi", "rendah", "tebal", "tipis", "berat", "ringan",
    "keras", "lunak", "kasar", "halus", "panas", "dingin", "hangat", "sejuk", "basah", "kering",
    "bersih", "kotor", "baru", "lama", "muda", "tua", "cepat", "lambat", "mudah", "sulit",
    "gampang", "susah", "baik", "buruk", "bagus", "jelek", "cantik", "indah", "senang", "sedih",
    "marah", "takut", "berani", "sayang", "cinta", "benci",
];

const SLANG_WORDS: &[&str] = &[
    "gw", "gue", "lu", "lo", "elu", "w", "u", "km", "sy", "dy", "mrk", "kt", "kmi", "yg", "dgn",
    "dr", "utk", "pd", "dlm", "olh", "akn", "sdh", "sdg", "msh", "blm", "tdk", "bkn", "jgn",
    "smu", "bnyk", "sdkt", "sgt", "hny", "jg", "lg", "sll", "skrg", "ntr", "kmrn", "bsk", "hr",
    "gmn", "bgmn", "dmn", "kmn", "drmn", "spa", "sapa", "ap", "mn", "kpn", "knp", "krn", "jk",
    "ktk", "wkt", "udah", "udeh", "belom", "blom", "gitu", "gini", "banget", "bgt", "kayak",
    "kaya", "kok", "sih", "deh", "dong", "lah", "kah", "tuh", "nih", "yah", "wah", "nah", "kan",
    "ya", "iya", "yup", "yep", "oke", "ok", "okay",
];

const PARTICLES: &[&str] = &[
    "nya", "mu", "ku", "pun", "lah", "kah", "tah", "deh", "dong", "sih", "kok", "yah", "wah",
    "nah", "kan", "tuh", "nih",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "eh", "uh", "um", "hmm", "hm", "em", "ih", "aduh", "astaga", "alamak", "waduh",
    "duh", "owh", "owwh", "owwwh", "oooh", "aaah", "eeeh", "iiih", "uuuh", "haah", "haaah",
    "huft", "hufh", "hufft",
];

/// Suffixes that mark an Indonesian word as carrying a particle.
pub const PARTICLE_SUFFIXES: &[&str] = &["nya", "lah", "kah", "tah", "pun"];

pub const INTERNET_ABBREVIATIONS: &[&str] = &[
    "brb", "btw", "cmiiw", "fyi", "imho", "lol", "omg", "wtf", "asap", "aka", "etc", "lmao",
    "rofl", "ttyl", "imo", "tbh", "nvm", "idk", "irl", "dm", "pm",
];

pub const LAUGHTER_VARIANTS: &[&str] = &[
    "haha", "hahaha", "hahahaha", "hehe", "hehehe", "hihi", "hoho", "huhu", "wakaka", "wakakaka",
    "kwkw", "kwkwkw", "kkkk", "kkkkk", "wkwk", "wkwkwk", "wkwkwkwk", "xixixi", "xixi",
];

/// Union of every category pattern list.
pub fn pattern_words() -> &'static HashSet<&'static str> {
    static WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| {
        CATEGORY_PATTERNS
            .iter()
            .flat_map(|(_, words)| words.iter().copied())
            .collect()
    })
}

pub fn english_stopwords() -> &'static HashSet<&'static str> {
    static WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| ENGLISH_STOPWORDS.iter().copied().collect())
}

/// Every word the classifier accepts as a stopword by exact match.
pub fn known_stopwords() -> &'static HashSet<&'static str> {
    static WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| {
        let mut words: HashSet<&'static str> = english_stopwords().clone();
        words.extend(pattern_words().iter().copied());
        for list in [
            INDONESIAN_COMMON,
            INDONESIAN_STOPWORDS,
            SLANG_WORDS,
            PARTICLES,
            INTERJECTIONS,
        ] {
            words.extend(list.iter().copied());
        }
        words
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_stopwords_cover_every_list() {
        let known = known_stopwords();
        assert!(known.contains("the"));
        assert!(known.contains("wouldn't"));
        assert!(known.contains("yang mana"));
        assert!(known.contains("benci"));
        assert!(known.contains("okay"));
        assert!(known.contains("hufft"));
        assert!(!known.contains("rumah"));
    }

    #[test]
    fn test_pattern_words_are_lowercase() {
        assert!(pattern_words().iter().all(|w| w.to_lowercase() == *w));
    }
}
