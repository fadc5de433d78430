//! Curated word lists.
//!
//! Pair lists keep their order on purpose: lookups that fall back to
//! substring matching walk them front to back.

/// Find the value for `key` in an ordered pair list.
pub fn lookup(pairs: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Find the first key whose value is `value`.
pub fn reverse_lookup(
    pairs: &'static [(&'static str, &'static str)],
    value: &str,
) -> Option<&'static str> {
    pairs.iter().find(|(_, v)| *v == value).map(|(k, _)| *k)
}

/// NLTK English stopword corpus.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// English stopword to formal Indonesian. An empty value means no direct equivalent.
pub const ENGLISH_TO_INDONESIAN: &[(&str, &str)] = &[
    ("i", "saya"), ("me", "saya"), ("my", "saya"), ("myself", "saya sendiri"), ("we", "kita"),
    ("our", "kita"), ("ours", "milik kita"), ("ourselves", "kita sendiri"), ("you", "kamu"),
    ("your", "kamu"), ("yours", "milik kamu"), ("yourself", "kamu sendiri"), ("he", "dia"),
    ("him", "dia"), ("his", "dia"), ("himself", "dia sendiri"), ("she", "dia"), ("her", "dia"),
    ("hers", "milik dia"), ("herself", "dia sendiri"), ("it", "itu"), ("its", "miliknya"),
    ("itself", "itu sendiri"), ("they", "mereka"), ("them", "mereka"), ("their", "mereka"),
    ("theirs", "milik mereka"), ("themselves", "mereka sendiri"), ("this", "ini"), ("that", "itu"),
    ("these", "ini"), ("those", "itu"), ("and", "dan"), ("or", "atau"), ("but", "tetapi"),
    ("if", "jika"), ("because", "karena"), ("when", "ketika"), ("while", "sementara"),
    ("before", "sebelum"), ("after", "setelah"), ("in", "di"), ("on", "di"), ("at", "di"),
    ("by", "oleh"), ("for", "untuk"), ("with", "dengan"), ("from", "dari"), ("to", "ke"),
    ("of", "dari"), ("the", ""), ("a", ""), ("an", ""), ("is", "adalah"), ("are", "adalah"),
    ("was", "adalah"), ("were", "adalah"), ("be", "adalah"), ("been", "telah"),
    ("being", "sedang"), ("have", "punya"), ("has", "punya"), ("had", "punya"),
    ("having", "mempunyai"), ("do", ""), ("does", ""), ("did", ""), ("will", "akan"),
    ("would", "akan"), ("could", "bisa"), ("should", "harus"), ("may", "mungkin"),
    ("might", "mungkin"), ("can", "bisa"), ("must", "harus"), ("not", "tidak"), ("no", "tidak"),
    ("yes", "ya"), ("all", "semua"), ("any", "apapun"), ("some", "beberapa"), ("many", "banyak"),
    ("much", "banyak"), ("few", "sedikit"), ("little", "sedikit"), ("more", "lebih"),
    ("most", "paling"), ("less", "kurang"), ("very", "sangat"), ("too", "terlalu"), ("so", "jadi"),
    ("just", "hanya"), ("only", "hanya"), ("also", "juga"), ("even", "bahkan"), ("still", "masih"),
    ("yet", "belum"), ("already", "sudah"), ("now", "sekarang"), ("then", "kemudian"),
    ("here", "disini"), ("there", "disana"), ("where", "dimana"), ("how", "bagaimana"),
    ("what", "apa"), ("who", "siapa"), ("why", "mengapa"), ("which", "yang mana"),
    ("about", "tentang"), ("above", "atas"), ("across", "seberang"), ("against", "melawan"),
    ("along", "sepanjang"), ("among", "antara"), ("around", "sekitar"), ("behind", "belakang"),
    ("below", "bawah"), ("beneath", "bawah"), ("beside", "samping"), ("between", "antara"),
    ("beyond", "melampaui"), ("during", "selama"), ("except", "kecuali"), ("inside", "dalam"),
    ("outside", "luar"), ("through", "melalui"), ("throughout", "sepanjang"), ("toward", "menuju"),
    ("towards", "menuju"), ("under", "bawah"), ("until", "sampai"), ("upon", "atas"),
    ("within", "dalam"), ("without", "tanpa"), ("one", "satu"), ("two", "dua"), ("three", "tiga"),
    ("four", "empat"), ("five", "lima"), ("six", "enam"), ("seven", "tujuh"), ("eight", "delapan"),
    ("nine", "sembilan"), ("ten", "sepuluh"), ("first", "pertama"), ("second", "kedua"),
    ("third", "ketiga"), ("last", "terakhir"), ("next", "berikutnya"), ("previous", "sebelumnya"),
    ("same", "sama"), ("different", "berbeda"), ("new", "baru"), ("old", "lama"),
    ("good", "bagus"), ("bad", "buruk"), ("big", "besar"), ("small", "kecil"), ("long", "panjang"),
    ("short", "pendek"), ("high", "tinggi"), ("low", "rendah"), ("true", "benar"),
    ("false", "salah"), ("right", "benar"), ("wrong", "salah"),
];

/// Formal Indonesian to Javanese.
pub const INDONESIAN_TO_JAVANESE: &[(&str, &str)] = &[
    ("saya", "aku"), ("kamu", "kowe"), ("dia", "dheweke"), ("kita", "awake dhewe"),
    ("kami", "awake"), ("mereka", "wong-wong"), ("anda", "panjenengan"),
    ("beliau", "piyambakipun"), ("ini", "iki"), ("itu", "iku"), ("sini", "kene"), ("sana", "kono"),
    ("begini", "kaya ngene"), ("begitu", "kaya ngono"), ("yang", "sing"), ("dan", "lan"),
    ("atau", "utawa"), ("tetapi", "nanging"), ("karena", "merga"), ("jika", "yen"),
    ("ketika", "nalika"), ("saat", "nalika"), ("tidak", "ora"), ("bukan", "dudu"), ("ada", "ana"),
    ("tidak ada", "ora ana"), ("di", "ing"), ("ke", "menyang"), ("dari", "saka"),
    ("untuk", "kanggo"), ("dengan", "karo"), ("pada", "ing"), ("dalam", "ing jero"),
    ("oleh", "dening"), ("akan", "arep"), ("sudah", "wis"), ("sedang", "lagi"), ("masih", "isih"),
    ("belum", "durung"), ("semua", "kabeh"), ("banyak", "akeh"), ("sedikit", "sithik"),
    ("sangat", "banget"), ("bagus", "apik"), ("jelek", "elek"), ("besar", "gedhe"),
    ("kecil", "cilik"), ("panjang", "dawa"), ("pendek", "cendhak"), ("tinggi", "dhuwur"),
    ("rendah", "cendhek"), ("baik", "apik"), ("buruk", "ala"), ("baru", "anyar"),
    ("lama", "lawas"), ("muda", "enom"), ("tua", "tuwa"), ("cepat", "cepet"), ("lambat", "alon"),
    ("mudah", "gampang"), ("sulit", "angel"), ("apa", "apa"), ("siapa", "sapa"), ("mana", "endi"),
    ("dimana", "ngendi"), ("kapan", "kapan"), ("mengapa", "ngapa"), ("bagaimana", "piye"),
    ("berapa", "pira"), ("sekarang", "saiki"), ("nanti", "mengko"), ("kemarin", "wingi"),
    ("besok", "sesuk"), ("hari", "dina"), ("pagi", "esuk"), ("siang", "awan"), ("sore", "sore"),
    ("malam", "bengi"), ("satu", "siji"), ("dua", "loro"), ("tiga", "telu"), ("empat", "papat"),
    ("lima", "lima"), ("enam", "enem"), ("tujuh", "pitu"), ("delapan", "wolu"),
    ("sembilan", "sanga"), ("sepuluh", "sepuluh"),
];

/// Formal Indonesian to Sundanese.
pub const INDONESIAN_TO_SUNDANESE: &[(&str, &str)] = &[
    ("saya", "abdi"), ("kamu", "anjeun"), ("dia", "anjeunna"), ("kita", "urang"), ("kami", "kami"),
    ("mereka", "aranjeunna"), ("anda", "anjeun"), ("beliau", "anjeunna"), ("ini", "ieu"),
    ("itu", "eta"), ("sini", "dieu"), ("sana", "dinya"), ("begini", "kieu"), ("begitu", "kitu"),
    ("yang", "nu"), ("dan", "jeung"), ("atau", "atawa"), ("tetapi", "tapi"), ("karena", "sabab"),
    ("jika", "lamun"), ("ketika", "nalika"), ("saat", "nalika"), ("tidak", "henteu"),
    ("bukan", "sanés"), ("ada", "aya"), ("tidak ada", "teu aya"), ("di", "di"), ("ke", "ka"),
    ("dari", "ti"), ("untuk", "pikeun"), ("dengan", "sareng"), ("pada", "dina"), ("dalam", "dina"),
    ("oleh", "ku"), ("akan", "bade"), ("sudah", "parantos"), ("sedang", "nuju"),
    ("masih", "masih"), ("belum", "can"), ("semua", "sadaya"), ("banyak", "seueur"),
    ("sedikit", "saeutik"), ("sangat", "pisan"), ("bagus", "saé"), ("jelek", "awon"),
    ("besar", "ageung"), ("kecil", "alit"), ("panjang", "panjang"), ("pendek", "pondok"),
    ("tinggi", "luhur"), ("rendah", "handap"), ("baik", "saé"), ("buruk", "awon"),
    ("baru", "anyar"), ("lama", "lami"), ("muda", "ngora"), ("tua", "sepuh"), ("cepat", "gancang"),
    ("lambat", "laun"), ("mudah", "gampil"), ("sulit", "hese"), ("apa", "naon"), ("siapa", "saha"),
    ("mana", "mana"), ("dimana", "dimana"), ("kapan", "iraha"), ("mengapa", "naha"),
    ("bagaimana", "kumaha"), ("berapa", "sabaraha"), ("sekarang", "ayeuna"), ("nanti", "engké"),
    ("kemarin", "kamari"), ("besok", "isukan"), ("hari", "dinten"), ("pagi", "isuk"),
    ("siang", "siang"), ("sore", "sonten"), ("malam", "wengi"), ("satu", "hiji"), ("dua", "dua"),
    ("tiga", "tilu"), ("empat", "opat"), ("lima", "lima"), ("enam", "genep"), ("tujuh", "tujuh"),
    ("delapan", "dalapan"), ("sembilan", "salapan"), ("sepuluh", "sapuluh"),
];

/// Social media slang to its formal reading. Particles and interjections map to nothing.
pub const INDONESIAN_SLANG: &[(&str, &str)] = &[
    ("wkwk", "haha"), ("wkwkwk", "hahaha"), ("wkwkwkwk", "hahahaha"), ("xixixi", "hehehe"),
    ("xixi", "hehe"), ("hehe", "hehe"), ("hihi", "hihi"), ("hoho", "hoho"), ("huhu", "huhu"),
    ("wakaka", "hahaha"), ("wakakaka", "hahahaha"), ("kwkw", "haha"), ("kwkwkw", "hahaha"),
    ("kkkk", "haha"), ("kkkkk", "hahaha"), ("brb", "be right back"), ("btw", "by the way"),
    ("cmiiw", "correct me if i am wrong"), ("fyi", "for your information"),
    ("imho", "in my humble opinion"), ("lol", "laugh out loud"), ("omg", "oh my god"),
    ("wtf", "what the f"), ("asap", "as soon as possible"), ("aka", "also known as"),
    ("etc", "et cetera"), ("lmao", "laugh my ass off"), ("rofl", "rolling on floor laughing"),
    ("ttyl", "talk to you later"), ("imo", "in my opinion"), ("tbh", "to be honest"),
    ("nvm", "never mind"), ("idk", "i dont know"), ("irl", "in real life"),
    ("dm", "direct message"), ("pm", "private message"), ("gw", "saya"), ("gue", "saya"),
    ("aku", "saya"), ("w", "saya"), ("lu", "kamu"), ("lo", "kamu"), ("elu", "kamu"), ("u", "kamu"),
    ("dia", "dia"), ("dy", "dia"), ("mrk", "mereka"), ("kt", "kita"), ("kmi", "kami"),
    ("bokap", "ayah"), ("nyokap", "ibu"), ("ortu", "orang tua"), ("bro", "saudara"),
    ("sis", "saudari"), ("gan", "juragan"), ("agan", "juragan"), ("suhu", "master"),
    ("mantap", "bagus"), ("keren", "bagus"), ("anjay", "wow"), ("anjir", "wow"), ("buset", "wow"),
    ("gilak", "gila"), ("gokil", "gila"), ("kepo", "ingin tahu"), ("gabut", "tidak ada kegiatan"),
    ("baper", "bawa perasaan"), ("galau", "bingung"), ("bucin", "budak cinta"),
    ("jones", "jomblo ngenes"), ("php", "pemberi harapan palsu"), ("pdkt", "pendekatan"),
    ("ttm", "teman tapi mesra"), ("clbk", "cinta lama bersemi kembali"), ("skrg", "sekarang"),
    ("skrang", "sekarang"), ("ntar", "nanti"), ("tar", "nanti"), ("td", "tadi"),
    ("kmrn", "kemarin"), ("bsk", "besok"), ("hr", "hari"), ("mgg", "minggu"), ("bln", "bulan"),
    ("thn", "tahun"), ("mnt", "menit"), ("dtk", "detik"), ("jam", "jam"), ("gimana", "bagaimana"),
    ("gmn", "bagaimana"), ("bgmn", "bagaimana"), ("kenapa", "kenapa"), ("knp", "kenapa"),
    ("knapa", "kenapa"), ("dimana", "dimana"), ("dmn", "dimana"), ("dmana", "dimana"),
    ("kemana", "kemana"), ("kmn", "kemana"), ("kmana", "kemana"), ("darimana", "darimana"),
    ("drmn", "darimana"), ("drmana", "darimana"), ("siapa", "siapa"), ("spa", "siapa"),
    ("sapa", "siapa"), ("apa", "apa"), ("apaan", "apa"), ("apain", "apa"), ("mana", "mana"),
    ("mn", "mana"), ("kapan", "kapan"), ("kpn", "kapan"), ("kpan", "kapan"),
    ("gabisa", "tidak bisa"), ("gasuka", "tidak suka"), ("gatau", "tidak tahu"),
    ("gapapa", "tidak apa-apa"), ("udah", "sudah"), ("udeh", "sudah"), ("belom", "belum"),
    ("blom", "belum"), ("iya", "ya"), ("yup", "ya"), ("yep", "ya"), ("aja", "saja"),
    ("doang", "saja"), ("kok", ""), ("sih", ""), ("deh", ""), ("dong", ""), ("lah", ""),
    ("kah", ""), ("tuh", ""), ("nih", ""), ("yah", ""), ("wah", ""), ("nah", ""), ("kan", ""),
    ("gitu", "begitu"), ("gini", "begini"), ("kayak", "seperti"), ("kaya", "seperti"),
    ("banget", "sangat"), ("bgt", "sangat"), ("bener", "benar"), ("emang", "memang"),
    ("memang", "memang"), ("aduh", ""), ("astaga", ""), ("alamak", ""), ("waduh", ""), ("duh", ""),
    ("ih", ""), ("eh", ""), ("ah", ""), ("oh", ""), ("uh", ""), ("hmm", ""), ("hm", ""),
    ("em", ""), ("um", ""), ("huft", ""), ("hufh", ""), ("hufft", ""), ("haah", ""), ("haaah", ""),
    ("aaah", ""), ("oooh", ""), ("uuuh", ""), ("eeeh", ""), ("iiih", ""), ("owh", ""),
    ("owwh", ""), ("owwwh", ""), ("yg", "yang"), ("sy", "saya"), ("km", "kamu"), ("ini", "ini"),
    ("itu", "itu"), ("dan", "dan"), ("atau", "atau"), ("tp", "tetapi"), ("krn", "karena"),
    ("jk", "jika"), ("ktk", "ketika"), ("saat", "saat"), ("wkt", "waktu"), ("di", "di"),
    ("ke", "ke"), ("dr", "dari"), ("utk", "untuk"), ("dgn", "dengan"), ("pd", "pada"),
    ("dlm", "dalam"), ("olh", "oleh"), ("adlh", "adalah"), ("akn", "akan"), ("tlh", "telah"),
    ("sdh", "sudah"), ("sdg", "sedang"), ("msh", "masih"), ("blm", "belum"), ("tdk", "tidak"),
    ("bkn", "bukan"), ("jgn", "jangan"), ("ada", "ada"), ("smu", "semua"), ("stp", "setiap"),
    ("bbp", "beberapa"), ("bnyk", "banyak"), ("sdkt", "sedikit"), ("sgt", "sangat"),
    ("agk", "agak"), ("ckp", "cukup"), ("tll", "terlalu"), ("plg", "paling"), ("lbh", "lebih"),
    ("krg", "kurang"), ("woles", "santai"), ("santuy", "santai"), ("newbie", "pemula"),
    ("noob", "pemula"), ("pro", "profesional"),
];

/// Formal Indonesian function words and frequent vocabulary.
pub const INDONESIAN_FORMAL: &[&str] = &[
    "saya", "aku", "kamu", "anda", "dia", "mereka", "kita", "kami", "beliau", "kalian", "engkau",
    "dirinya", "diri", "sendiri", "ini", "itu", "tersebut", "berikut", "demikian", "begini",
    "begitu", "seperti", "serupa", "sama", "beda", "berbeda", "lain", "lainnya", "yang", "dan",
    "atau", "tetapi", "namun", "karena", "sebab", "jika", "kalau", "bila", "ketika", "saat",
    "waktu", "selama", "hingga", "sampai", "sebelum", "sesudah", "setelah", "lalu", "kemudian",
    "selanjutnya", "akhirnya", "maka", "jadi", "sehingga", "supaya", "agar", "untuk", "bagi",
    "terhadap", "kepada", "di", "ke", "dari", "dengan", "pada", "dalam", "oleh", "menuju",
    "antara", "diantara", "sekitar", "dekat", "jauh", "atas", "bawah", "depan", "belakang", "kiri",
    "kanan", "tengah", "luar", "luas", "adalah", "ialah", "yaitu", "yakni", "akan", "telah",
    "sudah", "sedang", "masih", "belum", "pernah", "tidak", "bukan", "jangan", "harus", "mesti",
    "perlu", "bisa", "dapat", "boleh", "mau", "ingin", "hendak", "suka", "senang", "cinta",
    "sayang", "ada", "tidak ada", "semua", "setiap", "beberapa", "banyak", "sedikit", "cukup",
    "kurang", "lebih", "paling", "sangat", "agak", "terlalu", "hampir", "kira-kira", "sekarang",
    "kini", "nanti", "besok", "kemarin", "dulu", "dahulu", "tadi", "barusan", "baru", "lama",
    "cepat", "lambat", "pelan", "hari", "minggu", "bulan", "tahun", "jam", "menit", "detik",
    "pagi", "siang", "sore", "malam", "subuh", "maghrib", "isya", "satu", "dua", "tiga", "empat",
    "lima", "enam", "tujuh", "delapan", "sembilan", "sepuluh", "sebelas", "dua belas", "puluh",
    "ratus", "ribu", "juta", "miliar", "triliun", "pertama", "kedua", "ketiga", "baik", "buruk",
    "bagus", "jelek", "besar", "kecil", "panjang", "pendek", "tinggi", "rendah", "lebar", "sempit",
    "tebal", "tipis", "berat", "ringan", "keras", "lunak", "kasar", "halus", "panas", "dingin",
    "hangat", "sejuk", "basah", "kering", "bersih", "kotor", "muda", "tua", "mudah", "sulit",
    "gampang", "susah", "sedih", "marah", "takut", "berani", "juga", "pula", "lagi", "saja",
    "hanya", "cuma", "justru", "malah", "bahkan", "apalagi", "ternyata", "rupanya", "sebenarnya",
    "memang", "tentu", "pasti", "mungkin", "barangkali", "kiranya", "agaknya", "sepertinya", "apa",
    "siapa", "mana", "dimana", "kemana", "darimana", "kapan", "mengapa", "kenapa", "bagaimana",
    "gimana", "berapa", "seberapa",
];

/// Social media particles and interjections.
pub const SOCIAL_MEDIA_PARTICLES: &[&str] = &[
    "deh", "dong", "sih", "kok", "lah", "kah", "tuh", "nih", "yah", "wah", "aduh", "astaga",
    "alamak", "waduh", "duh", "ih", "eh", "ah", "oh", "uh", "hmm", "hm", "em", "um", "ya", "iya",
    "yup", "yep", "nah", "kan", "gitu", "gini", "begitu", "begini", "kayak", "kaya", "seperti",
    "macam", "banget", "bgt", "bener", "emang", "memang", "gimana", "bagaimana", "kenapa",
    "mengapa", "kapan", "dimana", "kemana", "darimana", "siapa", "apa", "mana", "huft", "hufh",
    "hufft", "haah", "haaah", "aaah", "oooh", "uuuh", "eeeh", "iiih", "owh", "owwh", "owwwh",
];

/// Hand-picked rows as `[en, id, jv, su, formal_id]`.
pub const ADDITIONAL_ENTRIES: &[[&str; 5]] = &[
    // English social media terms
    ["lmao", "", "", "", ""],
    ["rofl", "", "", "", ""],
    ["ttyl", "", "", "", ""],
    ["imo", "", "", "", ""],
    ["tbh", "", "", "", ""],
    ["nvm", "", "", "", ""],
    ["idk", "", "", "", ""],
    ["irl", "", "", "", ""],
    ["dm", "", "", "", ""],
    ["pm", "", "", "", ""],
    // Indonesian internet slang
    ["", "woles", "", "", "santai"],
    ["", "santuy", "", "", "santai"],
    ["", "gabisa", "", "", "tidak bisa"],
    ["", "gasuka", "", "", "tidak suka"],
    ["", "gatau", "", "", "tidak tahu"],
    ["", "gapapa", "", "", "tidak apa-apa"],
    ["", "udah", "", "", "sudah"],
    ["", "udeh", "", "", "sudah"],
    ["", "belom", "", "", "belum"],
    ["", "blom", "", "", "belum"],
    ["", "gimana", "", "", "bagaimana"],
    ["", "gmn", "", "", "bagaimana"],
    ["", "knp", "", "", "kenapa"],
    ["", "knapa", "", "", "kenapa"],
    ["", "dmn", "", "", "dimana"],
    ["", "kmn", "", "", "kemana"],
    ["", "sapa", "", "", "siapa"],
    ["", "apaan", "", "", "apa"],
    ["", "ngapain", "", "", "sedang apa"],
    ["", "lagi", "", "", "sedang"],
    ["", "lg", "", "", "sedang"],
    ["", "jg", "", "", "juga"],
    ["", "tp", "", "", "tetapi"],
    ["", "tapi", "", "", "tetapi"],
    ["", "krn", "", "", "karena"],
    ["", "karna", "", "", "karena"],
    ["", "dgn", "", "", "dengan"],
    ["", "sama", "", "", "dengan"],
    ["", "utk", "", "", "untuk"],
    ["", "buat", "", "", "untuk"],
    ["", "dr", "", "", "dari"],
    ["", "dri", "", "", "dari"],
    ["", "pd", "", "", "pada"],
    ["", "dlm", "", "", "dalam"],
    ["", "sblm", "", "", "sebelum"],
    ["", "stlh", "", "", "setelah"],
    ["", "wkt", "", "", "waktu"],
    // Javanese
    ["", "", "awakmu", "", "kamu"],
    ["", "", "awakne", "", "dia"],
    ["", "", "kene", "", "sini"],
    ["", "", "kono", "", "sana"],
    ["", "", "ngendi", "", "dimana"],
    ["", "", "piye", "", "bagaimana"],
    ["", "", "sapa", "", "siapa"],
    ["", "", "kapan", "", "kapan"],
    ["", "", "ngapa", "", "kenapa"],
    ["", "", "kuwi", "", "itu"],
    ["", "", "uga", "", "juga"],
    ["", "", "mung", "", "hanya"],
    // Sundanese
    ["", "", "", "dieu", "sini"],
    ["", "", "", "dinya", "sana"],
    ["", "", "", "kumaha", "bagaimana"],
    ["", "", "", "naon", "apa"],
    ["", "", "", "saha", "siapa"],
    ["", "", "", "iraha", "kapan"],
    ["", "", "", "naha", "kenapa"],
    ["", "", "", "teu", "tidak"],
    ["", "", "", "geus", "sudah"],
    ["", "", "", "oge", "juga"],
    // English internet abbreviations
    ["lmfao", "", "", "", "laugh my f ass off"],
    ["rotfl", "", "", "", "rolling on the floor laughing"],
    ["gtg", "", "", "", "got to go"],
    ["bff", "", "", "", "best friends forever"],
    ["afaik", "", "", "", "as far as i know"],
    ["ftw", "", "", "", "for the win"],
    ["smh", "", "", "", "shaking my head"],
    ["tmi", "", "", "", "too much information"],
    ["yolo", "", "", "", "you only live once"],
    ["fomo", "", "", "", "fear of missing out"],
    ["tbf", "", "", "", "to be fair"],
    ["afk", "", "", "", "away from keyboard"],
    ["g2g", "", "", "", "got to go"],
    ["cya", "", "", "", "see you"],
    ["thx", "", "", "", "thanks"],
    ["np", "", "", "", "no problem"],
    ["ur", "", "", "", "your"],
    ["pls", "", "", "", "please"],
    ["plz", "", "", "", "please"],
    ["msg", "", "", "", "message"],
    ["txt", "", "", "", "text"],
    ["pic", "", "", "", "picture"],
    ["vid", "", "", "", "video"],
    ["app", "", "", "", "application"],
    ["tech", "", "", "", "technology"],
    ["info", "", "", "", "information"],
    ["admin", "", "", "", "administrator"],
    ["mod", "", "", "", "moderator"],
    ["dev", "", "", "", "developer"],
    ["beta", "", "", "", "beta"],
    ["alpha", "", "", "", "alpha"],
    ["demo", "", "", "", "demonstration"],
    ["promo", "", "", "", "promotion"],
    ["sale", "", "", "", "sale"],
    ["deal", "", "", "", "deal"],
    ["offer", "", "", "", "offer"],
    ["free", "", "", "", "free"],
    ["premium", "", "", "", "premium"],
    ["pro", "", "", "", "professional"],
    ["lite", "", "", "", "light"],
    ["mini", "", "", "", "mini"],
    ["max", "", "", "", "maximum"],
    ["plus", "", "", "", "plus"],
    ["extra", "", "", "", "extra"],
    ["super", "", "", "", "super"],
    ["mega", "", "", "", "mega"],
    ["ultra", "", "", "", "ultra"],
    // Indonesian slang variants
    ["", "ygy", "", "", "ya guys ya"],
    ["", "yaudah", "", "", "ya sudah"],
    ["", "yaudeh", "", "", "ya sudah"],
    ["", "yauda", "", "", "ya sudah"],
    ["", "yasud", "", "", "ya sudah"],
    ["", "yasudah", "", "", "ya sudah"],
    ["", "yawes", "", "", "ya sudah"],
    ["", "yowes", "", "", "ya sudah"],
    ["", "pokoke", "", "", "pokoknya"],
    ["", "pokoknya", "", "", "pokoknya"],
    ["", "pokokna", "", "", "pokoknya"],
    ["", "intinya", "", "", "intinya"],
    ["", "intina", "", "", "intinya"],
    ["", "sebenernya", "", "", "sebenarnya"],
    ["", "sebenernya", "", "", "sebenarnya"],
    ["", "sebenerna", "", "", "sebenarnya"],
    ["", "makanya", "", "", "makanya"],
    ["", "makana", "", "", "makanya"],
    ["", "jadinya", "", "", "jadinya"],
    ["", "jadina", "", "", "jadinya"],
    ["", "terusnya", "", "", "terusnya"],
    ["", "terusna", "", "", "terusnya"],
    ["", "lagian", "", "", "lagian"],
    ["", "lagina", "", "", "lagian"],
    ["", "soalnya", "", "", "soalnya"],
    ["", "soalna", "", "", "soalnya"],
    ["", "padahal", "", "", "padahal"],
    ["", "ternyata", "", "", "ternyata"],
    ["", "rupanya", "", "", "rupanya"],
    ["", "rupana", "", "", "rupanya"],
    ["", "kayaknya", "", "", "sepertinya"],
    ["", "kayakna", "", "", "sepertinya"],
    ["", "sepertinya", "", "", "sepertinya"],
    ["", "keknya", "", "", "sepertinya"],
    ["", "mungkin", "", "", "mungkin"],
    ["", "mgkn", "", "", "mungkin"],
    ["", "barangkali", "", "", "barangkali"],
    ["", "brangkali", "", "", "barangkali"],
    ["", "siapa tau", "", "", "siapa tahu"],
    ["", "sapa tau", "", "", "siapa tahu"],
    ["", "kali aja", "", "", "kali saja"],
    ["", "kali aj", "", "", "kali saja"],
    ["", "mudah2an", "", "", "mudah-mudahan"],
    ["", "mudahan", "", "", "mudah-mudahan"],
    ["", "semoga", "", "", "semoga"],
    ["", "smoga", "", "", "semoga"],
    ["", "insyaallah", "", "", "insya allah"],
    ["", "insyallah", "", "", "insya allah"],
    ["", "alhamdulillah", "", "", "alhamdulillah"],
    ["", "subhanallah", "", "", "subhanallah"],
    ["", "mashaallah", "", "", "masha allah"],
    ["", "astaghfirullah", "", "", "astaghfirullah"],
    ["", "bismillah", "", "", "bismillah"],
    ["", "wallahu alam", "", "", "wallahu alam"],
    ["", "wallahualam", "", "", "wallahu alam"],
    // Javanese with formal Indonesian
    ["", "aku", "aku", "", "saya"],
    ["", "kowe", "kowe", "", "kamu"],
    ["", "dheweke", "dheweke", "", "dia"],
    ["", "awakmu", "awakmu", "", "kamu"],
    ["", "awakne", "awakne", "", "dia"],
    ["", "iki", "iki", "", "ini"],
    ["", "iku", "iku", "", "itu"],
    ["", "kene", "kene", "", "sini"],
    ["", "kono", "kono", "", "sana"],
    ["", "ngendi", "ngendi", "", "dimana"],
    ["", "piye", "piye", "", "bagaimana"],
    ["", "apa", "apa", "", "apa"],
    ["", "sapa", "sapa", "", "siapa"],
    ["", "kapan", "kapan", "", "kapan"],
    ["", "ngapa", "ngapa", "", "kenapa"],
    ["", "ning", "ning", "", "di"],
    ["", "nang", "nang", "", "di"],
    ["", "menyang", "menyang", "", "ke"],
    ["", "saka", "saka", "", "dari"],
    ["", "kanggo", "kanggo", "", "untuk"],
    ["", "karo", "karo", "", "dengan"],
    ["", "lan", "lan", "", "dan"],
    ["", "utawa", "utawa", "", "atau"],
    ["", "nanging", "nanging", "", "tetapi"],
    ["", "merga", "merga", "", "karena"],
    ["", "yen", "yen", "", "jika"],
    ["", "nalika", "nalika", "", "ketika"],
    ["", "arep", "arep", "", "akan"],
    ["", "wis", "wis", "", "sudah"],
    ["", "lagi", "lagi", "", "sedang"],
    ["", "isih", "isih", "", "masih"],
    ["", "durung", "durung", "", "belum"],
    ["", "ora", "ora", "", "tidak"],
    ["", "dudu", "dudu", "", "bukan"],
    ["", "ana", "ana", "", "ada"],
    ["", "ora ana", "ora ana", "", "tidak ada"],
    ["", "kabeh", "kabeh", "", "semua"],
    ["", "akeh", "akeh", "", "banyak"],
    ["", "sithik", "sithik", "", "sedikit"],
    ["", "banget", "banget", "", "sangat"],
    ["", "apik", "apik", "", "bagus"],
    ["", "elek", "elek", "", "jelek"],
    ["", "gedhe", "gedhe", "", "besar"],
    ["", "cilik", "cilik", "", "kecil"],
    ["", "dawa", "dawa", "", "panjang"],
    ["", "cendhak", "cendhak", "", "pendek"],
    ["", "dhuwur", "dhuwur", "", "tinggi"],
    ["", "cendhek", "cendhek", "", "rendah"],
    ["", "anyar", "anyar", "", "baru"],
    ["", "lawas", "lawas", "", "lama"],
    ["", "enom", "enom", "", "muda"],
    ["", "tuwa", "tuwa", "", "tua"],
    ["", "cepet", "cepet", "", "cepat"],
    ["", "alon", "alon", "", "lambat"],
    ["", "gampang", "gampang", "", "mudah"],
    ["", "angel", "angel", "", "sulit"],
    ["", "saiki", "saiki", "", "sekarang"],
    ["", "mengko", "mengko", "", "nanti"],
    ["", "wingi", "wingi", "", "kemarin"],
    ["", "sesuk", "sesuk", "", "besok"],
    ["", "esuk", "esuk", "", "pagi"],
    ["", "awan", "awan", "", "siang"],
    ["", "sore", "sore", "", "sore"],
    ["", "bengi", "bengi", "", "malam"],
    ["", "siji", "siji", "", "satu"],
    ["", "loro", "loro", "", "dua"],
    ["", "telu", "telu", "", "tiga"],
    ["", "papat", "papat", "", "empat"],
    ["", "lima", "lima", "", "lima"],
    ["", "enem", "enem", "", "enam"],
    ["", "pitu", "pitu", "", "tujuh"],
    ["", "wolu", "wolu", "", "delapan"],
    ["", "sanga", "sanga", "", "sembilan"],
    ["", "sepuluh", "sepuluh", "", "sepuluh"],
    // Sundanese with formal Indonesian
    ["", "abdi", "", "abdi", "saya"],
    ["", "anjeun", "", "anjeun", "kamu"],
    ["", "anjeunna", "", "anjeunna", "dia"],
    ["", "urang", "", "urang", "kita"],
    ["", "aranjeunna", "", "aranjeunna", "mereka"],
    ["", "ieu", "", "ieu", "ini"],
    ["", "eta", "", "eta", "itu"],
    ["", "dieu", "", "dieu", "sini"],
    ["", "dinya", "", "dinya", "sana"],
    ["", "dimana", "", "dimana", "dimana"],
    ["", "kumaha", "", "kumaha", "bagaimana"],
    ["", "naon", "", "naon", "apa"],
    ["", "saha", "", "saha", "siapa"],
    ["", "iraha", "", "iraha", "kapan"],
    ["", "naha", "", "naha", "kenapa"],
    ["", "nu", "", "nu", "yang"],
    ["", "jeung", "", "jeung", "dan"],
    ["", "atawa", "", "atawa", "atau"],
    ["", "tapi", "", "tapi", "tetapi"],
    ["", "sabab", "", "sabab", "karena"],
    ["", "lamun", "", "lamun", "jika"],
    ["", "nalika", "", "nalika", "ketika"],
    ["", "ka", "", "ka", "ke"],
    ["", "ti", "", "ti", "dari"],
    ["", "pikeun", "", "pikeun", "untuk"],
    ["", "sareng", "", "sareng", "dengan"],
    ["", "dina", "", "dina", "pada"],
    ["", "ku", "", "ku", "oleh"],
    ["", "bade", "", "bade", "akan"],
    ["", "parantos", "", "parantos", "sudah"],
    ["", "nuju", "", "nuju", "sedang"],
    ["", "masih", "", "masih", "masih"],
    ["", "can", "", "can", "belum"],
    ["", "henteu", "", "henteu", "tidak"],
    ["", "sanés", "", "sanés", "bukan"],
    ["", "aya", "", "aya", "ada"],
    ["", "teu aya", "", "teu aya", "tidak ada"],
    ["", "sadaya", "", "sadaya", "semua"],
    ["", "seueur", "", "seueur", "banyak"],
    ["", "saeutik", "", "saeutik", "sedikit"],
    ["", "pisan", "", "pisan", "sangat"],
    ["", "saé", "", "saé", "bagus"],
    ["", "awon", "", "awon", "jelek"],
    ["", "ageung", "", "ageung", "besar"],
    ["", "alit", "", "alit", "kecil"],
    ["", "panjang", "", "panjang", "panjang"],
    ["", "pondok", "", "pondok", "pendek"],
    ["", "luhur", "", "luhur", "tinggi"],
    ["", "handap", "", "handap", "rendah"],
    ["", "anyar", "", "anyar", "baru"],
    ["", "lami", "", "lami", "lama"],
    ["", "ngora", "", "ngora", "muda"],
    ["", "sepuh", "", "sepuh", "tua"],
    ["", "gancang", "", "gancang", "cepat"],
    ["", "laun", "", "laun", "lambat"],
    ["", "gampil", "", "gampil", "mudah"],
    ["", "hese", "", "hese", "sulit"],
    ["", "ayeuna", "", "ayeuna", "sekarang"],
    ["", "engké", "", "engké", "nanti"],
    ["", "kamari", "", "kamari", "kemarin"],
    ["", "isukan", "", "isukan", "besok"],
    ["", "dinten", "", "dinten", "hari"],
    ["", "isuk", "", "isuk", "pagi"],
    ["", "siang", "", "siang", "siang"],
    ["", "sonten", "", "sonten", "sore"],
    ["", "wengi", "", "wengi", "malam"],
    ["", "hiji", "", "hiji", "satu"],
    ["", "dua", "", "dua", "dua"],
    ["", "tilu", "", "tilu", "tiga"],
    ["", "opat", "", "opat", "empat"],
    ["", "lima", "", "lima", "lima"],
    ["", "genep", "", "genep", "enam"],
    ["", "tujuh", "", "tujuh", "tujuh"],
    ["", "dalapan", "", "dalapan", "delapan"],
    ["", "salapan", "", "salapan", "sembilan"],
    ["", "sapuluh", "", "sapuluh", "sepuluh"],
    // Indonesian social media terms
    ["", "mantul", "", "", "mantap betul"],
    ["", "mantep", "", "", "mantap"],
    ["", "kece", "", "", "keren"],
    ["", "kereen", "", "", "keren"],
    ["", "kereeen", "", "", "keren"],
    ["", "gokil", "", "", "gila"],
    ["", "gila", "", "", "gila"],
    ["", "gilak", "", "", "gila"],
    ["", "anjay", "", "", "wow"],
    ["", "anjir", "", "", "wow"],
    ["", "anjrit", "", "", "wow"],
    ["", "buset", "", "", "wow"],
    ["", "busyet", "", "", "wow"],
    ["", "astaga", "", "", "astaga"],
    ["", "astaga", "", "", "astaga"],
    ["", "alamak", "", "", "alamak"],
    ["", "aduh", "", "", "aduh"],
    ["", "waduh", "", "", "waduh"],
    ["", "duh", "", "", "duh"],
    ["", "ih", "", "", "ih"],
    ["", "eh", "", "", "eh"],
    ["", "ah", "", "", "ah"],
    ["", "oh", "", "", "oh"],
    ["", "uh", "", "", "uh"],
    ["", "hmm", "", "", "hmm"],
    ["", "hm", "", "", "hm"],
    ["", "em", "", "", "em"],
    ["", "um", "", "", "um"],
    ["", "huft", "", "", "huft"],
    ["", "hufh", "", "", "hufh"],
    ["", "hufft", "", "", "hufft"],
    ["", "haah", "", "", "haah"],
    ["", "haaah", "", "", "haaah"],
    ["", "aaah", "", "", "aaah"],
    ["", "oooh", "", "", "oooh"],
    ["", "uuuh", "", "", "uuuh"],
    ["", "eeeh", "", "", "eeeh"],
    ["", "iiih", "", "", "iiih"],
    ["", "owh", "", "", "owh"],
    ["", "owwh", "", "", "owwh"],
    ["", "owwwh", "", "", "owwwh"],
    ["", "woles", "", "", "santai"],
    ["", "santuy", "", "", "santai"],
    ["", "santai", "", "", "santai"],
    ["", "slow", "", "", "pelan"],
    ["", "pelan", "", "", "pelan"],
    ["", "sabar", "", "", "sabar"],
    ["", "tenang", "", "", "tenang"],
    ["", "kalem", "", "", "tenang"],
    ["", "cool", "", "", "keren"],
    ["", "asik", "", "", "asik"],
    ["", "asyik", "", "", "asik"],
    ["", "seru", "", "", "seru"],
    ["", "lucu", "", "", "lucu"],
    ["", "ngakak", "", "", "tertawa"],
    ["", "ketawa", "", "", "tertawa"],
    ["", "tertawa", "", "", "tertawa"],
    ["", "haha", "", "", "haha"],
    ["", "hehe", "", "", "hehe"],
    ["", "hihi", "", "", "hihi"],
    ["", "hoho", "", "", "hoho"],
    ["", "huhu", "", "", "huhu"],
    ["", "wakaka", "", "", "hahaha"],
    ["", "wakakaka", "", "", "hahahaha"],
    ["", "kwkw", "", "", "haha"],
    ["", "kwkwkw", "", "", "hahaha"],
    ["", "kkkk", "", "", "haha"],
    ["", "kkkkk", "", "", "hahaha"],
    ["", "xixixi", "", "", "hehehe"],
    ["", "xixi", "", "", "hehe"],
    // Social media and internet terms
    ["", "gabisa", "", "", "tidak bisa"],
    ["", "gasuka", "", "", "tidak suka"],
    ["", "gatau", "", "", "tidak tahu"],
    ["", "gapapa", "", "", "tidak apa-apa"],
    ["", "udah", "", "", "sudah"],
    ["", "udeh", "", "", "sudah"],
    ["", "belom", "", "", "belum"],
    ["", "blom", "", "", "belum"],
    ["", "iya", "", "", "ya"],
    ["", "yup", "", "", "ya"],
    ["", "yep", "", "", "ya"],
    ["", "aja", "", "", "saja"],
    ["", "doang", "", "", "saja"],
    ["", "kok", "", "", ""],
    ["", "sih", "", "", ""],
    ["", "deh", "", "", ""],
    ["", "dong", "", "", ""],
    ["", "lah", "", "", ""],
    ["", "kah", "", "", ""],
    ["", "tuh", "", "", ""],
    ["", "nih", "", "", ""],
    ["", "yah", "", "", ""],
    ["", "wah", "", "", ""],
    ["", "nah", "", "", ""],
    ["", "kan", "", "", ""],
    ["", "gitu", "", "", "begitu"],
    ["", "gini", "", "", "begini"],
    ["", "kayak", "", "", "seperti"],
    ["", "kaya", "", "", "seperti"],
    ["", "banget", "", "", "sangat"],
    ["", "bgt", "", "", "sangat"],
    ["", "bener", "", "", "benar"],
    ["", "emang", "", "", "memang"],
    ["", "memang", "", "", "memang"],
    ["", "yg", "", "", "yang"],
    ["", "sy", "", "", "saya"],
    ["", "km", "", "", "kamu"],
    ["", "dy", "", "", "dia"],
    ["", "mrk", "", "", "mereka"],
    ["", "kt", "", "", "kita"],
    ["", "kmi", "", "", "kami"],
    ["", "ini", "", "", "ini"],
    ["", "itu", "", "", "itu"],
    ["", "dan", "", "", "dan"],
    ["", "atau", "", "", "atau"],
    ["", "tp", "", "", "tetapi"],
    ["", "krn", "", "", "karena"],
    ["", "jk", "", "", "jika"],
    ["", "ktk", "", "", "ketika"],
    ["", "saat", "", "", "saat"],
    ["", "wkt", "", "", "waktu"],
    ["", "di", "", "", "di"],
    ["", "ke", "", "", "ke"],
    ["", "dr", "", "", "dari"],
    ["", "utk", "", "", "untuk"],
    ["", "dgn", "", "", "dengan"],
    ["", "pd", "", "", "pada"],
    ["", "dlm", "", "", "dalam"],
    ["", "olh", "", "", "oleh"],
    ["", "adlh", "", "", "adalah"],
    ["", "akn", "", "", "akan"],
    ["", "tlh", "", "", "telah"],
    ["", "sdh", "", "", "sudah"],
    ["", "sdg", "", "", "sedang"],
    ["", "msh", "", "", "masih"],
    ["", "blm", "", "", "belum"],
    ["", "tdk", "", "", "tidak"],
    ["", "bkn", "", "", "bukan"],
    ["", "jgn", "", "", "jangan"],
    ["", "ada", "", "", "ada"],
    ["", "smu", "", "", "semua"],
    ["", "stp", "", "", "setiap"],
    ["", "bbp", "", "", "beberapa"],
    ["", "bnyk", "", "", "banyak"],
    ["", "sdkt", "", "", "sedikit"],
    ["", "sgt", "", "", "sangat"],
    ["", "agk", "", "", "agak"],
    ["", "ckp", "", "", "cukup"],
    ["", "tll", "", "", "terlalu"],
    ["", "plg", "", "", "paling"],
    ["", "lbh", "", "", "lebih"],
    ["", "krg", "", "", "kurang"],
    ["", "skrg", "", "", "sekarang"],
    ["", "skrang", "", "", "sekarang"],
    ["", "ntar", "", "", "nanti"],
    ["", "tar", "", "", "nanti"],
    ["", "td", "", "", "tadi"],
    ["", "kmrn", "", "", "kemarin"],
    ["", "bsk", "", "", "besok"],
    ["", "hr", "", "", "hari"],
    ["", "mgg", "", "", "minggu"],
    ["", "bln", "", "", "bulan"],
    ["", "thn", "", "", "tahun"],
    ["", "mnt", "", "", "menit"],
    ["", "dtk", "", "", "detik"],
    ["", "jam", "", "", "jam"],
    ["", "gimana", "", "", "bagaimana"],
    ["", "gmn", "", "", "bagaimana"],
    ["", "bgmn", "", "", "bagaimana"],
    ["", "kenapa", "", "", "kenapa"],
    ["", "knp", "", "", "kenapa"],
    ["", "knapa", "", "", "kenapa"],
    ["", "dimana", "", "", "dimana"],
    ["", "dmn", "", "", "dimana"],
    ["", "dmana", "", "", "dimana"],
    ["", "kemana", "", "", "kemana"],
    ["", "kmn", "", "", "kemana"],
    ["", "kmana", "", "", "kemana"],
    ["", "darimana", "", "", "darimana"],
    ["", "drmn", "", "", "darimana"],
    ["", "drmana", "", "", "darimana"],
    ["", "siapa", "", "", "siapa"],
    ["", "spa", "", "", "siapa"],
    ["", "sapa", "", "", "siapa"],
    ["", "apa", "", "", "apa"],
    ["", "apaan", "", "", "apa"],
    ["", "apain", "", "", "apa"],
    ["", "mana", "", "", "mana"],
    ["", "mn", "", "", "mana"],
    ["", "kapan", "", "", "kapan"],
    ["", "kpn", "", "", "kapan"],
    ["", "kpan", "", "", "kapan"],
    // Expressions and reactions
    ["", "mantul", "", "", "mantap betul"],
    ["", "mantep", "", "", "mantap"],
    ["", "mantap", "", "", "mantap"],
    ["", "kece", "", "", "keren"],
    ["", "kereen", "", "", "keren"],
    ["", "kereeen", "", "", "keren"],
    ["", "keren", "", "", "keren"],
    ["", "bagus", "", "", "bagus"],
    ["", "jelek", "", "", "jelek"],
    ["", "buruk", "", "", "buruk"],
    ["", "oke", "", "", "oke"],
    ["", "ok", "", "", "oke"],
    ["", "okay", "", "", "oke"],
    ["", "siap", "", "", "siap"],
    ["", "ready", "", "", "siap"],
    ["", "done", "", "", "selesai"],
    ["", "finish", "", "", "selesai"],
    ["", "selesai", "", "", "selesai"],
    ["", "beres", "", "", "selesai"],
    ["", "clear", "", "", "jelas"],
    ["", "jelas", "", "", "jelas"],
    ["", "paham", "", "", "paham"],
    ["", "ngerti", "", "", "mengerti"],
    ["", "mengerti", "", "", "mengerti"],
    ["", "tau", "", "", "tahu"],
    ["", "tahu", "", "", "tahu"],
    ["", "kenal", "", "", "kenal"],
    ["", "familiar", "", "", "kenal"],
    ["", "asing", "", "", "asing"],
    ["", "aneh", "", "", "aneh"],
    ["", "weird", "", "", "aneh"],
    ["", "strange", "", "", "aneh"],
    ["", "normal", "", "", "normal"],
    ["", "biasa", "", "", "biasa"],
    ["", "usual", "", "", "biasa"],
    ["", "special", "", "", "khusus"],
    ["", "khusus", "", "", "khusus"],
    ["", "istimewa", "", "", "istimewa"],
    ["", "unik", "", "", "unik"],
    ["", "unique", "", "", "unik"],
    ["", "rare", "", "", "langka"],
    ["", "langka", "", "", "langka"],
    ["", "jarang", "", "", "jarang"],
    ["", "sering", "", "", "sering"],
    ["", "often", "", "", "sering"],
    ["", "always", "", "", "selalu"],
    ["", "selalu", "", "", "selalu"],
    ["", "never", "", "", "tidak pernah"],
    ["", "pernah", "", "", "pernah"],
    ["", "kadang", "", "", "kadang"],
    ["", "sometimes", "", "", "kadang"],
    ["", "maybe", "", "", "mungkin"],
    ["", "perhaps", "", "", "mungkin"],
    ["", "probably", "", "", "mungkin"],
    ["", "definitely", "", "", "pasti"],
    ["", "pasti", "", "", "pasti"],
    ["", "sure", "", "", "yakin"],
    ["", "yakin", "", "", "yakin"],
    ["", "doubt", "", "", "ragu"],
    ["", "ragu", "", "", "ragu"],
    ["", "bingung", "", "", "bingung"],
    ["", "confused", "", "", "bingung"],
    ["", "clear", "", "", "jelas"],
    ["", "obvious", "", "", "jelas"],
    ["", "simple", "", "", "sederhana"],
    ["", "sederhana", "", "", "sederhana"],
    ["", "complex", "", "", "rumit"],
    ["", "rumit", "", "", "rumit"],
    ["", "complicated", "", "", "rumit"],
    ["", "easy", "", "", "mudah"],
    ["", "mudah", "", "", "mudah"],
    ["", "gampang", "", "", "mudah"],
    ["", "difficult", "", "", "sulit"],
    ["", "sulit", "", "", "sulit"],
    ["", "susah", "", "", "sulit"],
    ["", "hard", "", "", "sulit"],
    ["", "soft", "", "", "lembut"],
    ["", "lembut", "", "", "lembut"],
    ["", "halus", "", "", "halus"],
    ["", "kasar", "", "", "kasar"],
    ["", "rough", "", "", "kasar"],
    ["", "smooth", "", "", "halus"],
    ["", "fast", "", "", "cepat"],
    ["", "cepat", "", "", "cepat"],
    ["", "quick", "", "", "cepat"],
    ["", "slow", "", "", "lambat"],
    ["", "lambat", "", "", "lambat"],
    ["", "pelan", "", "", "pelan"],
    ["", "hot", "", "", "panas"],
    ["", "panas", "", "", "panas"],
    ["", "cold", "", "", "dingin"],
    ["", "dingin", "", "", "dingin"],
    ["", "warm", "", "", "hangat"],
    ["", "hangat", "", "", "hangat"],
    ["", "cool", "", "", "sejuk"],
    ["", "sejuk", "", "", "sejuk"],
    ["", "wet", "", "", "basah"],
    ["", "basah", "", "", "basah"],
    ["", "dry", "", "", "kering"],
    ["", "kering", "", "", "kering"],
    ["", "clean", "", "", "bersih"],
    ["", "bersih", "", "", "bersih"],
    ["", "dirty", "", "", "kotor"],
    ["", "kotor", "", "", "kotor"],
    ["", "fresh", "", "", "segar"],
    ["", "segar", "", "", "segar"],
    ["", "old", "", "", "lama"],
    ["", "lama", "", "", "lama"],
    ["", "new", "", "", "baru"],
    ["", "baru", "", "", "baru"],
    ["", "young", "", "", "muda"],
    ["", "muda", "", "", "muda"],
    ["", "old", "", "", "tua"],
    ["", "tua", "", "", "tua"],
    ["", "big", "", "", "besar"],
    ["", "besar", "", "", "besar"],
    ["", "small", "", "", "kecil"],
    ["", "kecil", "", "", "kecil"],
    ["", "tiny", "", "", "kecil"],
    ["", "huge", "", "", "besar"],
    ["", "large", "", "", "besar"],
    ["", "long", "", "", "panjang"],
    ["", "panjang", "", "", "panjang"],
    ["", "short", "", "", "pendek"],
    ["", "pendek", "", "", "pendek"],
    ["", "tall", "", "", "tinggi"],
    ["", "tinggi", "", "", "tinggi"],
    ["", "low", "", "", "rendah"],
    ["", "rendah", "", "", "rendah"],
    ["", "high", "", "", "tinggi"],
    ["", "wide", "", "", "lebar"],
    ["", "lebar", "", "", "lebar"],
    ["", "narrow", "", "", "sempit"],
    ["", "sempit", "", "", "sempit"],
    ["", "thick", "", "", "tebal"],
    ["", "tebal", "", "", "tebal"],
    ["", "thin", "", "", "tipis"],
    ["", "tipis", "", "", "tipis"],
    ["", "heavy", "", "", "berat"],
    ["", "berat", "", "", "berat"],
    ["", "light", "", "", "ringan"],
    ["", "ringan", "", "", "ringan"],
    ["", "strong", "", "", "kuat"],
    ["", "kuat", "", "", "kuat"],
    ["", "weak", "", "", "lemah"],
    ["", "lemah", "", "", "lemah"],
    ["", "powerful", "", "", "kuat"],
    ["", "gentle", "", "", "lembut"],
    ["", "violent", "", "", "keras"],
    ["", "keras", "", "", "keras"],
    ["", "quiet", "", "", "sepi"],
    ["", "sepi", "", "", "sepi"],
    ["", "loud", "", "", "keras"],
    ["", "noisy", "", "", "berisik"],
    ["", "berisik", "", "", "berisik"],
    ["", "silent", "", "", "diam"],
    ["", "diam", "", "", "diam"],
    ["", "speak", "", "", "bicara"],
    ["", "bicara", "", "", "bicara"],
    ["", "talk", "", "", "bicara"],
    ["", "ngomong", "", "", "bicara"],
    ["", "say", "", "", "bilang"],
    ["", "bilang", "", "", "bilang"],
    ["", "tell", "", "", "cerita"],
    ["", "cerita", "", "", "cerita"],
    ["", "story", "", "", "cerita"],
    ["", "listen", "", "", "dengar"],
    ["", "dengar", "", "", "dengar"],
    ["", "hear", "", "", "dengar"],
    ["", "see", "", "", "lihat"],
    ["", "lihat", "", "", "lihat"],
    ["", "look", "", "", "lihat"],
    ["", "watch", "", "", "tonton"],
    ["", "tonton", "", "", "tonton"],
    ["", "read", "", "", "baca"],
    ["", "baca", "", "", "baca"],
    ["", "write", "", "", "tulis"],
    ["", "tulis", "", "", "tulis"],
    ["", "type", "", "", "ketik"],
    ["", "ketik", "", "", "ketik"],
    ["", "send", "", "", "kirim"],
    ["", "kirim", "", "", "kirim"],
    ["", "receive", "", "", "terima"],
    ["", "terima", "", "", "terima"],
    ["", "get", "", "", "dapat"],
    ["", "dapat", "", "", "dapat"],
    ["", "give", "", "", "kasih"],
    ["", "kasih", "", "", "kasih"],
    ["", "take", "", "", "ambil"],
    ["", "ambil", "", "", "ambil"],
    ["", "put", "", "", "taruh"],
    ["", "taruh", "", "", "taruh"],
    ["", "place", "", "", "tempat"],
    ["", "tempat", "", "", "tempat"],
    ["", "go", "", "", "pergi"],
    ["", "pergi", "", "", "pergi"],
    ["", "come", "", "", "datang"],
    ["", "datang", "", "", "datang"],
    ["", "arrive", "", "", "tiba"],
    ["", "tiba", "", "", "tiba"],
    ["", "leave", "", "", "pergi"],
    ["", "stay", "", "", "tinggal"],
    ["", "tinggal", "", "", "tinggal"],
    ["", "live", "", "", "hidup"],
    ["", "hidup", "", "", "hidup"],
    ["", "die", "", "", "mati"],
    ["", "mati", "", "", "mati"],
    ["", "born", "", "", "lahir"],
    ["", "lahir", "", "", "lahir"],
    ["", "grow", "", "", "tumbuh"],
    ["", "tumbuh", "", "", "tumbuh"],
    ["", "change", "", "", "ubah"],
    ["", "ubah", "", "", "ubah"],
    ["", "ganti", "", "", "ganti"],
    ["", "same", "", "", "sama"],
    ["", "sama", "", "", "sama"],
    ["", "different", "", "", "beda"],
    ["", "beda", "", "", "beda"],
    ["", "berbeda", "", "", "berbeda"],
    ["", "similar", "", "", "mirip"],
    ["", "mirip", "", "", "mirip"],
    ["", "like", "", "", "suka"],
    ["", "suka", "", "", "suka"],
    ["", "love", "", "", "cinta"],
    ["", "cinta", "", "", "cinta"],
    ["", "hate", "", "", "benci"],
    ["", "benci", "", "", "benci"],
    ["", "angry", "", "", "marah"],
    ["", "marah", "", "", "marah"],
    ["", "happy", "", "", "senang"],
    ["", "senang", "", "", "senang"],
    ["", "sad", "", "", "sedih"],
    ["", "sedih", "", "", "sedih"],
    ["", "cry", "", "", "nangis"],
    ["", "nangis", "", "", "nangis"],
    ["", "laugh", "", "", "ketawa"],
    ["", "smile", "", "", "senyum"],
    ["", "senyum", "", "", "senyum"],
    ["", "afraid", "", "", "takut"],
    ["", "takut", "", "", "takut"],
    ["", "scared", "", "", "takut"],
    ["", "brave", "", "", "berani"],
    ["", "berani", "", "", "berani"],
    ["", "worry", "", "", "khawatir"],
    ["", "khawatir", "", "", "khawatir"],
    ["", "calm", "", "", "tenang"],
    ["", "tenang", "", "", "tenang"],
    ["", "stress", "", "", "stres"],
    ["", "stres", "", "", "stres"],
    ["", "relax", "", "", "santai"],
    ["", "santai", "", "", "santai"],
    ["", "tired", "", "", "capek"],
    ["", "capek", "", "", "capek"],
    ["", "lelah", "", "", "lelah"],
    ["", "fresh", "", "", "segar"],
    ["", "sleep", "", "", "tidur"],
    ["", "tidur", "", "", "tidur"],
    ["", "wake", "", "", "bangun"],
    ["", "bangun", "", "", "bangun"],
    ["", "eat", "", "", "makan"],
    ["", "makan", "", "", "makan"],
    ["", "drink", "", "", "minum"],
    ["", "minum", "", "", "minum"],
    ["", "hungry", "", "", "lapar"],
    ["", "lapar", "", "", "lapar"],
    ["", "thirsty", "", "", "haus"],
    ["", "haus", "", "", "haus"],
    ["", "full", "", "", "kenyang"],
    ["", "kenyang", "", "", "kenyang"],
    ["", "empty", "", "", "kosong"],
    ["", "kosong", "", "", "kosong"],
    ["", "busy", "", "", "sibuk"],
    ["", "sibuk", "", "", "sibuk"],
    ["", "free", "", "", "bebas"],
    ["", "bebas", "", "", "bebas"],
    ["", "work", "", "", "kerja"],
    ["", "kerja", "", "", "kerja"],
    ["", "job", "", "", "kerja"],
    ["", "play", "", "", "main"],
    ["", "main", "", "", "main"],
    ["", "game", "", "", "permainan"],
    ["", "permainan", "", "", "permainan"],
    ["", "fun", "", "", "seru"],
    ["", "boring", "", "", "bosan"],
    ["", "bosan", "", "", "bosan"],
    ["", "interesting", "", "", "menarik"],
    ["", "menarik", "", "", "menarik"],
    ["", "important", "", "", "penting"],
    ["", "penting", "", "", "penting"],
    ["", "useful", "", "", "berguna"],
    ["", "berguna", "", "", "berguna"],
    ["", "useless", "", "", "tidak berguna"],
    ["", "help", "", "", "bantu"],
    ["", "bantu", "", "", "bantu"],
    ["", "tolong", "", "", "tolong"],
    ["", "please", "", "", "tolong"],
    ["", "thanks", "", "", "terima kasih"],
    ["", "terima kasih", "", "", "terima kasih"],
    ["", "makasih", "", "", "terima kasih"],
    ["", "thank you", "", "", "terima kasih"],
    ["", "welcome", "", "", "selamat datang"],
    ["", "selamat datang", "", "", "selamat datang"],
    ["", "sorry", "", "", "maaf"],
    ["", "maaf", "", "", "maaf"],
    ["", "excuse me", "", "", "permisi"],
    ["", "permisi", "", "", "permisi"],
    ["", "hello", "", "", "halo"],
    ["", "halo", "", "", "halo"],
    ["", "hi", "", "", "hai"],
    ["", "hai", "", "", "hai"],
    ["", "bye", "", "", "dadah"],
    ["", "dadah", "", "", "dadah"],
    ["", "goodbye", "", "", "selamat tinggal"],
    ["", "selamat tinggal", "", "", "selamat tinggal"],
    ["", "good morning", "", "", "selamat pagi"],
    ["", "selamat pagi", "", "", "selamat pagi"],
    ["", "good afternoon", "", "", "selamat siang"],
    ["", "selamat siang", "", "", "selamat siang"],
    ["", "good evening", "", "", "selamat sore"],
    ["", "selamat sore", "", "", "selamat sore"],
    ["", "good night", "", "", "selamat malam"],
    ["", "selamat malam", "", "", "selamat malam"],
    // Discourse and general vocabulary
    ["", "weekend", "", "", "akhir pekan"],
    ["", "akhir pekan", "", "", "akhir pekan"],
    ["", "holiday", "", "", "liburan"],
    ["", "liburan", "", "", "liburan"],
    ["", "vacation", "", "", "liburan"],
    ["", "school", "", "", "sekolah"],
    ["", "sekolah", "", "", "sekolah"],
    ["", "university", "", "", "universitas"],
    ["", "universitas", "", "", "universitas"],
    ["", "college", "", "", "kuliah"],
    ["", "kuliah", "", "", "kuliah"],
    ["", "student", "", "", "siswa"],
    ["", "siswa", "", "", "siswa"],
    ["", "teacher", "", "", "guru"],
    ["", "guru", "", "", "guru"],
    ["", "lesson", "", "", "pelajaran"],
    ["", "pelajaran", "", "", "pelajaran"],
    ["", "exam", "", "", "ujian"],
    ["", "ujian", "", "", "ujian"],
    ["", "test", "", "", "tes"],
    ["", "tes", "", "", "tes"],
    ["", "homework", "", "", "pekerjaan rumah"],
    ["", "pr", "", "", "pekerjaan rumah"],
    ["", "tugas", "", "", "tugas"],
    ["", "assignment", "", "", "tugas"],
    ["", "project", "", "", "proyek"],
    ["", "proyek", "", "", "proyek"],
    ["", "meeting", "", "", "rapat"],
    ["", "rapat", "", "", "rapat"],
    ["", "conference", "", "", "konferensi"],
    ["", "konferensi", "", "", "konferensi"],
    ["", "presentation", "", "", "presentasi"],
    ["", "presentasi", "", "", "presentasi"],
    ["", "report", "", "", "laporan"],
    ["", "laporan", "", "", "laporan"],
    ["", "document", "", "", "dokumen"],
    ["", "dokumen", "", "", "dokumen"],
    ["", "file", "", "", "berkas"],
    ["", "berkas", "", "", "berkas"],
    ["", "folder", "", "", "folder"],
    ["", "computer", "", "", "komputer"],
    ["", "komputer", "", "", "komputer"],
    ["", "laptop", "", "", "laptop"],
    ["", "phone", "", "", "telepon"],
    ["", "telepon", "", "", "telepon"],
    ["", "handphone", "", "", "handphone"],
    ["", "hp", "", "", "handphone"],
    ["", "smartphone", "", "", "smartphone"],
    ["", "internet", "", "", "internet"],
    ["", "website", "", "", "situs web"],
    ["", "situs web", "", "", "situs web"],
    ["", "email", "", "", "email"],
    ["", "social media", "", "", "media sosial"],
    ["", "media sosial", "", "", "media sosial"],
    ["", "medsos", "", "", "media sosial"],
    ["", "facebook", "", "", "facebook"],
    ["", "instagram", "", "", "instagram"],
    ["", "twitter", "", "", "twitter"],
    ["", "whatsapp", "", "", "whatsapp"],
    ["", "wa", "", "", "whatsapp"],
    ["", "telegram", "", "", "telegram"],
    ["", "youtube", "", "", "youtube"],
    ["", "google", "", "", "google"],
    ["", "search", "", "", "cari"],
    ["", "cari", "", "", "cari"],
    ["", "find", "", "", "temukan"],
    ["", "temukan", "", "", "temukan"],
    ["", "discover", "", "", "temukan"],
    ["", "explore", "", "", "jelajahi"],
    ["", "jelajahi", "", "", "jelajahi"],
    ["", "browse", "", "", "jelajah"],
    ["", "jelajah", "", "", "jelajah"],
    ["", "click", "", "", "klik"],
    ["", "klik", "", "", "klik"],
    ["", "tap", "", "", "ketuk"],
    ["", "ketuk", "", "", "ketuk"],
    ["", "touch", "", "", "sentuh"],
    ["", "sentuh", "", "", "sentuh"],
    ["", "swipe", "", "", "geser"],
    ["", "geser", "", "", "geser"],
    ["", "scroll", "", "", "gulir"],
    ["", "gulir", "", "", "gulir"],
    ["", "zoom", "", "", "perbesar"],
    ["", "perbesar", "", "", "perbesar"],
    ["", "download", "", "", "unduh"],
    ["", "unduh", "", "", "unduh"],
    ["", "upload", "", "", "unggah"],
    ["", "unggah", "", "", "unggah"],
    ["", "share", "", "", "bagikan"],
    ["", "bagikan", "", "", "bagikan"],
    ["", "like", "", "", "suka"],
    ["", "comment", "", "", "komentar"],
    ["", "komentar", "", "", "komentar"],
    ["", "reply", "", "", "balas"],
    ["", "balas", "", "", "balas"],
    ["", "follow", "", "", "ikuti"],
    ["", "ikuti", "", "", "ikuti"],
    ["", "unfollow", "", "", "berhenti mengikuti"],
    ["", "block", "", "", "blokir"],
    ["", "blokir", "", "", "blokir"],
    ["", "report", "", "", "laporkan"],
    ["", "laporkan", "", "", "laporkan"],
    ["", "delete", "", "", "hapus"],
    ["", "hapus", "", "", "hapus"],
    ["", "edit", "", "", "edit"],
    ["", "save", "", "", "simpan"],
    ["", "simpan", "", "", "simpan"],
    ["", "cancel", "", "", "batal"],
    ["", "batal", "", "", "batal"],
    ["", "confirm", "", "", "konfirmasi"],
    ["", "konfirmasi", "", "", "konfirmasi"],
    ["", "submit", "", "", "kirim"],
    ["", "reset", "", "", "reset"],
    ["", "refresh", "", "", "segarkan"],
    ["", "segarkan", "", "", "segarkan"],
    ["", "reload", "", "", "muat ulang"],
    ["", "muat ulang", "", "", "muat ulang"],
    ["", "update", "", "", "perbarui"],
    ["", "perbarui", "", "", "perbarui"],
    ["", "upgrade", "", "", "tingkatkan"],
    ["", "tingkatkan", "", "", "tingkatkan"],
    ["", "install", "", "", "pasang"],
    ["", "pasang", "", "", "pasang"],
    ["", "uninstall", "", "", "hapus"],
    ["", "settings", "", "", "pengaturan"],
    ["", "pengaturan", "", "", "pengaturan"],
    ["", "options", "", "", "pilihan"],
    ["", "pilihan", "", "", "pilihan"],
    ["", "menu", "", "", "menu"],
    ["", "home", "", "", "beranda"],
    ["", "beranda", "", "", "beranda"],
    ["", "profile", "", "", "profil"],
    ["", "profil", "", "", "profil"],
    ["", "account", "", "", "akun"],
    ["", "akun", "", "", "akun"],
    ["", "login", "", "", "masuk"],
    ["", "masuk", "", "", "masuk"],
    ["", "logout", "", "", "keluar"],
    ["", "keluar", "", "", "keluar"],
    ["", "register", "", "", "daftar"],
    ["", "daftar", "", "", "daftar"],
    ["", "signup", "", "", "daftar"],
    ["", "password", "", "", "kata sandi"],
    ["", "kata sandi", "", "", "kata sandi"],
    ["", "username", "", "", "nama pengguna"],
    ["", "nama pengguna", "", "", "nama pengguna"],
    ["", "user", "", "", "pengguna"],
    ["", "pengguna", "", "", "pengguna"],
    ["", "member", "", "", "anggota"],
    ["", "anggota", "", "", "anggota"],
    ["", "guest", "", "", "tamu"],
    ["", "tamu", "", "", "tamu"],
    ["", "visitor", "", "", "pengunjung"],
    ["", "pengunjung", "", "", "pengunjung"],
    ["", "online", "", "", "online"],
    ["", "offline", "", "", "offline"],
    ["", "connected", "", "", "terhubung"],
    ["", "terhubung", "", "", "terhubung"],
    ["", "disconnected", "", "", "terputus"],
    ["", "terputus", "", "", "terputus"],
    ["", "loading", "", "", "memuat"],
    ["", "memuat", "", "", "memuat"],
    ["", "processing", "", "", "memproses"],
    ["", "memproses", "", "", "memproses"],
    ["", "complete", "", "", "selesai"],
    ["", "incomplete", "", "", "belum selesai"],
    ["", "belum selesai", "", "", "belum selesai"],
    ["", "success", "", "", "berhasil"],
    ["", "berhasil", "", "", "berhasil"],
    ["", "failed", "", "", "gagal"],
    ["", "gagal", "", "", "gagal"],
    ["", "error", "", "", "kesalahan"],
    ["", "kesalahan", "", "", "kesalahan"],
    ["", "warning", "", "", "peringatan"],
    ["", "peringatan", "", "", "peringatan"],
    ["", "notice", "", "", "pemberitahuan"],
    ["", "pemberitahuan", "", "", "pemberitahuan"],
    ["", "notification", "", "", "notifikasi"],
    ["", "notifikasi", "", "", "notifikasi"],
    ["", "alert", "", "", "peringatan"],
    ["", "message", "", "", "pesan"],
    ["", "pesan", "", "", "pesan"],
    ["", "chat", "", "", "obrolan"],
    ["", "obrolan", "", "", "obrolan"],
    ["", "conversation", "", "", "percakapan"],
    ["", "percakapan", "", "", "percakapan"],
    ["", "discussion", "", "", "diskusi"],
    ["", "diskusi", "", "", "diskusi"],
    ["", "debate", "", "", "debat"],
    ["", "debat", "", "", "debat"],
    ["", "argument", "", "", "argumen"],
    ["", "argumen", "", "", "argumen"],
    ["", "opinion", "", "", "pendapat"],
    ["", "pendapat", "", "", "pendapat"],
    ["", "idea", "", "", "ide"],
    ["", "ide", "", "", "ide"],
    ["", "thought", "", "", "pikiran"],
    ["", "pikiran", "", "", "pikiran"],
    ["", "mind", "", "", "pikiran"],
    ["", "brain", "", "", "otak"],
    ["", "otak", "", "", "otak"],
    ["", "heart", "", "", "hati"],
    ["", "hati", "", "", "hati"],
    ["", "soul", "", "", "jiwa"],
    ["", "jiwa", "", "", "jiwa"],
    ["", "spirit", "", "", "semangat"],
    ["", "semangat", "", "", "semangat"],
    ["", "energy", "", "", "energi"],
    ["", "energi", "", "", "energi"],
    ["", "power", "", "", "kekuatan"],
    ["", "kekuatan", "", "", "kekuatan"],
    ["", "strength", "", "", "kekuatan"],
    ["", "force", "", "", "kekuatan"],
    ["", "pressure", "", "", "tekanan"],
    ["", "tekanan", "", "", "tekanan"],
    ["", "stress", "", "", "tekanan"],
    ["", "tension", "", "", "ketegangan"],
    ["", "ketegangan", "", "", "ketegangan"],
    ["", "conflict", "", "", "konflik"],
    ["", "konflik", "", "", "konflik"],
    ["", "problem", "", "", "masalah"],
    ["", "masalah", "", "", "masalah"],
    ["", "issue", "", "", "masalah"],
    ["", "trouble", "", "", "masalah"],
    ["", "difficulty", "", "", "kesulitan"],
    ["", "kesulitan", "", "", "kesulitan"],
    ["", "challenge", "", "", "tantangan"],
    ["", "tantangan", "", "", "tantangan"],
    ["", "opportunity", "", "", "kesempatan"],
    ["", "kesempatan", "", "", "kesempatan"],
    ["", "chance", "", "", "kesempatan"],
    ["", "possibility", "", "", "kemungkinan"],
    ["", "kemungkinan", "", "", "kemungkinan"],
    ["", "probability", "", "", "kemungkinan"],
    ["", "risk", "", "", "risiko"],
    ["", "risiko", "", "", "risiko"],
    ["", "danger", "", "", "bahaya"],
    ["", "bahaya", "", "", "bahaya"],
    ["", "safe", "", "", "aman"],
    ["", "aman", "", "", "aman"],
    ["", "secure", "", "", "aman"],
    ["", "protection", "", "", "perlindungan"],
    ["", "perlindungan", "", "", "perlindungan"],
    ["", "security", "", "", "keamanan"],
    ["", "keamanan", "", "", "keamanan"],
    ["", "privacy", "", "", "privasi"],
    ["", "privasi", "", "", "privasi"],
    ["", "secret", "", "", "rahasia"],
    ["", "rahasia", "", "", "rahasia"],
    ["", "public", "", "", "publik"],
    ["", "publik", "", "", "publik"],
    ["", "private", "", "", "pribadi"],
    ["", "pribadi", "", "", "pribadi"],
    ["", "personal", "", "", "pribadi"],
    ["", "individual", "", "", "individu"],
    ["", "individu", "", "", "individu"],
    ["", "group", "", "", "kelompok"],
    ["", "kelompok", "", "", "kelompok"],
    ["", "team", "", "", "tim"],
    ["", "tim", "", "", "tim"],
    ["", "community", "", "", "komunitas"],
    ["", "komunitas", "", "", "komunitas"],
    ["", "society", "", "", "masyarakat"],
    ["", "masyarakat", "", "", "masyarakat"],
    ["", "culture", "", "", "budaya"],
    ["", "budaya", "", "", "budaya"],
    ["", "tradition", "", "", "tradisi"],
    ["", "tradisi", "", "", "tradisi"],
    ["", "custom", "", "", "adat"],
    ["", "adat", "", "", "adat"],
    ["", "habit", "", "", "kebiasaan"],
    ["", "kebiasaan", "", "", "kebiasaan"],
    ["", "routine", "", "", "rutinitas"],
    ["", "rutinitas", "", "", "rutinitas"],
    ["", "schedule", "", "", "jadwal"],
    ["", "jadwal", "", "", "jadwal"],
    ["", "plan", "", "", "rencana"],
    ["", "rencana", "", "", "rencana"],
    ["", "goal", "", "", "tujuan"],
    ["", "tujuan", "", "", "tujuan"],
    ["", "target", "", "", "target"],
    ["", "objective", "", "", "objektif"],
    ["", "objektif", "", "", "objektif"],
    ["", "purpose", "", "", "tujuan"],
    ["", "reason", "", "", "alasan"],
    ["", "alasan", "", "", "alasan"],
    ["", "cause", "", "", "sebab"],
    ["", "sebab", "", "", "sebab"],
    ["", "effect", "", "", "efek"],
    ["", "efek", "", "", "efek"],
    ["", "result", "", "", "hasil"],
    ["", "hasil", "", "", "hasil"],
    ["", "outcome", "", "", "hasil"],
    ["", "consequence", "", "", "konsekuensi"],
    ["", "konsekuensi", "", "", "konsekuensi"],
    ["", "impact", "", "", "dampak"],
    ["", "dampak", "", "", "dampak"],
    ["", "influence", "", "", "pengaruh"],
    ["", "pengaruh", "", "", "pengaruh"],
];

/// Extra rows used only to reach the target entry count.
pub const PADDING_ENTRIES: &[[&str; 5]] = &[
    ["about", "tentang", "", "", "tentang"],
    ["above", "atas", "", "", "atas"],
    ["across", "seberang", "", "", "seberang"],
    ["against", "melawan", "", "", "melawan"],
    ["along", "sepanjang", "", "", "sepanjang"],
    ["among", "di antara", "", "", "di antara"],
    ["around", "sekitar", "", "", "sekitar"],
    ["behind", "belakang", "", "", "belakang"],
    ["below", "bawah", "", "", "bawah"],
    ["beside", "samping", "", "", "samping"],
    ["between", "antara", "", "", "antara"],
    ["beyond", "melampaui", "", "", "melampaui"],
    ["despite", "meskipun", "", "", "meskipun"],
    ["during", "selama", "", "", "selama"],
    ["except", "kecuali", "", "", "kecuali"],
    ["inside", "dalam", "", "", "dalam"],
    ["near", "dekat", "", "", "dekat"],
    ["outside", "luar", "", "", "luar"],
    ["since", "sejak", "", "", "sejak"],
    ["through", "melalui", "", "", "melalui"],
    ["toward", "menuju", "", "", "menuju"],
    ["until", "sampai", "", "", "sampai"],
    ["upon", "atas", "", "", "atas"],
    ["within", "dalam", "", "", "dalam"],
    ["without", "tanpa", "", "", "tanpa"],
    ["although", "walaupun", "", "", "walaupun"],
    ["unless", "kecuali", "", "", "kecuali"],
    ["whether", "apakah", "", "", "apakah"],
    ["however", "namun", "", "", "namun"],
    ["therefore", "oleh karena itu", "", "", "oleh karena itu"],
    ["thus", "demikian", "", "", "demikian"],
    ["maybe", "mungkin", "", "", "mungkin"],
    ["perhaps", "barangkali", "", "", "barangkali"],
    ["almost", "hampir", "", "", "hampir"],
    ["always", "selalu", "", "", "selalu"],
    ["never", "tidak pernah", "", "", "tidak pernah"],
    ["often", "sering", "", "", "sering"],
    ["sometimes", "kadang", "", "", "kadang"],
    ["rarely", "jarang", "", "", "jarang"],
    ["later", "nanti", "", "", "nanti"],
    ["soon", "segera", "", "", "segera"],
    ["today", "hari ini", "", "", "hari ini"],
    ["yesterday", "kemarin", "", "", "kemarin"],
    ["tomorrow", "besok", "", "", "besok"],
    ["everyone", "semua orang", "", "", "semua orang"],
    ["someone", "seseorang", "", "", "seseorang"],
    ["something", "sesuatu", "", "", "sesuatu"],
    ["nothing", "tidak ada", "", "", "tidak ada"],
    ["everything", "segalanya", "", "", "segalanya"],
    ["", "ygy", "", "", "ya guys ya"],
    ["", "yg", "", "", "yang"],
    ["", "sy", "", "", "saya"],
    ["", "km", "", "", "kamu"],
    ["", "dy", "", "", "dia"],
    ["", "kt", "", "", "kita"],
    ["", "mrk", "", "", "mereka"],
    ["", "tdk", "", "", "tidak"],
    ["", "gk", "", "", "tidak"],
    ["", "ga", "", "", "tidak"],
    ["", "gak", "", "", "tidak"],
    ["", "nggak", "", "", "tidak"],
    ["", "enggak", "", "", "tidak"],
    ["", "kagak", "", "", "tidak"],
    ["", "bkn", "", "", "bukan"],
    ["", "jgn", "", "", "jangan"],
    ["", "sdh", "", "", "sudah"],
    ["", "udh", "", "", "sudah"],
    ["", "blm", "", "", "belum"],
    ["", "msh", "", "", "masih"],
    ["", "sgt", "", "", "sangat"],
    ["", "bngt", "", "", "banget"],
    ["", "aja", "", "", "saja"],
    ["", "doang", "", "", "saja"],
    ["", "cuma", "", "", "hanya"],
    ["", "cuman", "", "", "hanya"],
    ["", "skrg", "", "", "sekarang"],
    ["", "skrng", "", "", "sekarang"],
    ["", "ntar", "", "", "nanti"],
    ["", "entar", "", "", "nanti"],
    ["", "kmrn", "", "", "kemarin"],
    ["", "bsk", "", "", "besok"],
    ["", "klo", "", "", "kalau"],
    ["", "kalo", "", "", "kalau"],
    ["", "kl", "", "", "kalau"],
    ["", "emg", "", "", "memang"],
    ["", "org", "", "", "orang"],
    ["", "trs", "", "", "terus"],
    ["", "trus", "", "", "terus"],
    ["", "sm", "", "", "sama"],
    ["", "bgmn", "", "", "bagaimana"],
    ["", "gmna", "", "", "bagaimana"],
    ["", "kpn", "", "", "kapan"],
    ["", "brp", "", "", "berapa"],
    ["", "ato", "", "", "atau"],
    ["", "atw", "", "", "atau"],
    ["", "pdhl", "", "", "padahal"],
    ["", "spt", "", "", "seperti"],
    ["", "kyk", "", "", "kayak"],
    ["", "kek", "", "", "kayak"],
    ["", "mksd", "", "", "maksud"],
    ["", "makasih", "", "", "terima kasih"],
    ["", "mksh", "", "", "terima kasih"],
    ["", "thx", "", "", "terima kasih"],
    ["", "plis", "", "", "tolong"],
    ["", "pls", "", "", "tolong"],
    ["", "sorry", "", "", "maaf"],
    ["", "sori", "", "", "maaf"],
    ["", "mmg", "", "", "memang"],
    ["", "dah", "", "", "sudah"],
    ["", "ud", "", "", "sudah"],
    ["", "lho", "", "", "lho"],
    ["", "loh", "", "", "lho"],
    ["", "toh", "", "", "toh"],
    ["", "kek", "", "", "seperti"],
    ["", "", "ora", "", "tidak"],
    ["", "", "durung", "", "belum"],
    ["", "", "wis", "", "sudah"],
    ["", "", "arep", "", "akan"],
    ["", "", "lagek", "", "sedang"],
    ["", "", "karo", "", "dengan"],
    ["", "", "saka", "", "dari"],
    ["", "", "kanggo", "", "untuk"],
    ["", "", "utawa", "", "atau"],
    ["", "", "nanging", "", "tetapi"],
    ["", "", "amarga", "", "karena"],
    ["", "", "yen", "", "kalau"],
    ["", "", "nalika", "", "ketika"],
    ["", "", "banjur", "", "lalu"],
    ["", "", "iso", "", "bisa"],
    ["", "", "", "henteu", "tidak"],
    ["", "", "", "acan", "belum"],
    ["", "", "", "parantos", "sudah"],
    ["", "", "", "bade", "akan"],
    ["", "", "", "nuju", "sedang"],
    ["", "", "", "sareng", "dengan"],
    ["", "", "", "ti", "dari"],
    ["", "", "", "pikeun", "untuk"],
    ["", "", "", "atawa", "atau"],
    ["", "", "", "tapi", "tetapi"],
    ["", "", "", "sabab", "karena"],
    ["", "", "", "lamun", "kalau"],
    ["", "", "", "basa", "ketika"],
    ["", "", "", "tuluy", "lalu"],
    ["", "", "", "tiasa", "bisa"],
];

/// Indonesian function words and particles gathered from KBBI word classes.
pub const KBBI_ADDITIONAL_STOPWORDS: &[&str] = &[
    // Pronouns and demonstratives
    "beliau", "mereka", "kita", "kami", "kalian", "engkau", "anda", "ini", "itu", "tersebut",
    "demikian", "begini", "begitu",
    // Conjunctions and connectors
    "dan", "atau", "tetapi", "namun", "akan tetapi", "melainkan", "karena", "sebab",
    "oleh karena", "akibat", "sehingga", "jika", "kalau", "apabila", "bila", "seandainya",
    "andai", "ketika", "saat", "waktu", "sewaktu", "tatkala", "manakala", "sebelum", "sesudah",
    "setelah", "hingga", "sampai", "selama", "sambil", "seraya", "sementara", "agar", "supaya",
    "biar", "untuk", "meskipun", "walaupun", "sekalipun", "kendatipun",
    // Prepositions
    "di", "ke", "dari", "pada", "dalam", "oleh", "dengan", "atas", "bawah", "antara",
    "diantara", "mengenai", "tentang", "terhadap", "kepada", "bagi", "tanpa", "kecuali",
    "selain", "sejak", "semenjak",
    // Auxiliary verbs and modals
    "adalah", "ialah", "yaitu", "yakni", "merupakan", "akan", "telah", "sudah", "sedang",
    "tengah", "lagi", "masih", "belum", "pernah", "tidak pernah", "dapat", "bisa", "mampu",
    "sanggup", "mau", "ingin", "harus", "mesti", "wajib", "perlu", "hendak",
    // Negations
    "tidak", "tak", "bukan", "bukanlah", "jangan", "janganlah", "minus",
    // Quantifiers and determiners
    "ada", "tidak ada", "semua", "seluruh", "segenap", "segala", "setiap", "tiap",
    "masing-masing", "para", "kaum", "beberapa", "sebagian", "separuh", "setengah", "banyak",
    "sedikit", "sejumlah", "sekelompok", "satu", "dua", "tiga", "empat", "lima", "pertama",
    "kedua", "ketiga", "terakhir",
    // Intensifiers and adverbs
    "sangat", "amat", "sekali", "banget", "betul-betul", "benar-benar", "sungguh",
    "sungguh-sungguh", "agak", "rada", "cukup", "lumayan", "terlalu", "kelewat", "kebangetan",
    "paling", "lebih", "kurang", "hampir", "nyaris", "kira-kira", "sekitar", "kurang lebih",
    "lebih kurang",
    // Particles and discourse markers
    "lah", "kah", "pun", "nya", "mu", "ku", "juga", "pula", "saja", "hanya", "cuma", "bahkan",
    "malah", "justru", "sebaliknya", "memang", "emang", "tentu", "pasti", "mungkin",
    "barangkali", "kiranya", "agaknya", "rupanya", "ternyata", "nampaknya", "sepertinya",
    // Time expressions
    "sekarang", "kini", "saat ini", "dewasa ini", "dulu", "dahulu", "tempo dulu", "masa lalu",
    "nanti", "kelak", "esok", "besok", "lusa", "kemarin", "kemaren", "tadi", "barusan",
    "selalu", "senantiasa", "terus", "terus-menerus", "kadang", "kadang-kadang", "terkadang",
    "sesekali", "jarang", "sering", "kerap", "acap",
    // Spatial expressions
    "sini", "sana", "situ", "dimana", "kemana", "darimana", "disini", "disana", "disitu",
    "kesini", "kesana", "kesitu", "dekat", "jauh", "sekeliling", "depan", "belakang", "samping",
    "sebelah", "tengah", "pinggir", "tepi",
    // Question words
    "apa", "siapa", "mana", "kapan", "mengapa", "kenapa", "bagaimana", "gimana", "berapa",
    "seberapa", "yang mana", "siapa saja",
    // Formal connectives
    "adapun", "sedangkan", "sementara itu", "lagi pula", "tambahan pula", "selanjutnya",
    "kemudian", "lalu", "akhirnya", "pada akhirnya", "kesimpulannya", "dengan demikian",
    "oleh karena itu", "maka dari itu", "walaupun demikian",
    // Light verbs
    "menjadi", "menjadikan", "membuat", "membentuk", "menggunakan", "memakai",
    "memanfaatkan", "memberikan", "memberi", "menyediakan", "mengambil", "memperoleh",
    "mendapat", "mendapatkan", "melakukan", "menjalankan", "menjalani", "memiliki",
    "mempunyai", "punya",
    // Courtesy markers
    "mohon", "tolong", "silakan", "silahkan", "mari", "coba", "cobalah", "harap", "maaf",
    "permisi", "terima kasih", "makasih", "sama-sama", "kembali", "selamat",
    // Emphasis and colloquial particles
    "kok", "sih", "dong", "deh", "nih", "tuh", "kan", "ya", "iya", "yah", "nah", "wah", "lho",
    "lo", "tho", "to", "gitu", "gini", "aja", "doang", "kayak", "kaya", "udah", "udeh", "belom",
    "blom", "gmn", "knp", "bener", "benar",
];

/// Formal words that mark a colloquial lexicon entry as a function word.
pub const FUNCTION_WORD_INDICATORS: &[&str] = &[
    "yang", "dengan", "untuk", "dari", "pada", "dalam", "oleh", "akan", "sudah", "sedang",
    "masih", "belum", "tidak", "bukan", "saya", "aku", "kamu", "dia", "mereka", "kita", "kami",
    "ini", "itu", "adalah", "juga", "hanya", "saja", "pula", "dan", "atau", "tetapi", "karena",
    "jika", "ketika", "sangat", "banget", "sekali", "agak", "cukup", "terlalu", "bisa", "dapat",
    "mau", "ingin", "harus", "perlu", "sama", "seperti", "kayak", "kaya", "begitu", "gitu",
    "dimana", "kemana", "bagaimana", "gimana", "kenapa", "kapan", "siapa", "apa", "mana",
    "berapa",
];

/// Indonesian to English dictionary for common stopwords. An empty value
/// marks a particle with no English counterpart.
pub const INDONESIAN_TO_ENGLISH: &[(&str, &str)] = &[
    // Pronouns
    ("saya", "i"), ("aku", "i"), ("kamu", "you"), ("anda", "you"), ("dia", "he"), ("ia", "he"),
    ("mereka", "they"), ("kita", "we"), ("kami", "we"), ("kalian", "you"),
    // Function words
    ("yang", "which"), ("dengan", "with"), ("untuk", "for"), ("dari", "from"), ("pada", "on"),
    ("dalam", "in"), ("oleh", "by"), ("ke", "to"), ("di", "at"), ("akan", "will"),
    ("sudah", "already"), ("sedang", "being"), ("masih", "still"), ("belum", "not yet"),
    ("tidak", "not"), ("bukan", "not"), ("jangan", "do not"), ("juga", "also"),
    ("hanya", "only"), ("saja", "just"), ("pula", "also"), ("lagi", "again"),
    // Conjunctions
    ("dan", "and"), ("atau", "or"), ("tetapi", "but"), ("karena", "because"), ("jika", "if"),
    ("ketika", "when"), ("sementara", "while"), ("sebelum", "before"), ("sesudah", "after"),
    ("sampai", "until"), ("sejak", "since"),
    // Demonstratives
    ("ini", "this"), ("itu", "that"), ("begini", "like this"), ("begitu", "like that"),
    ("demikian", "thus"), ("seperti", "like"), ("sama", "same"),
    // Question words
    ("apa", "what"), ("siapa", "who"), ("dimana", "where"), ("kemana", "where to"),
    ("kapan", "when"), ("mengapa", "why"), ("kenapa", "why"), ("bagaimana", "how"),
    ("berapa", "how many"), ("mana", "which"),
    // Adverbs
    ("sangat", "very"), ("banget", "very"), ("sekali", "very"), ("agak", "quite"),
    ("cukup", "enough"), ("terlalu", "too"), ("lebih", "more"), ("paling", "most"),
    ("kurang", "less"), ("hampir", "almost"), ("selalu", "always"), ("sering", "often"),
    ("kadang", "sometimes"), ("jarang", "rarely"), ("pernah", "ever"),
    ("belum pernah", "never"),
    // Modal verbs
    ("bisa", "can"), ("dapat", "can"), ("mau", "want"), ("ingin", "want"), ("harus", "must"),
    ("perlu", "need"), ("boleh", "may"), ("seharusnya", "should"),
    // Particles
    ("lah", ""), ("kah", ""), ("pun", ""), ("sih", ""), ("dong", ""), ("kok", ""), ("deh", ""),
    ("tuh", ""), ("nih", ""), ("yah", ""), ("ya", "yes"),
    // Colloquial
    ("gitu", "like that"), ("gini", "like this"), ("kayak", "like"), ("kaya", "like"),
    ("gimana", "how"), ("emang", "indeed"), ("memang", "indeed"), ("udah", "already"),
    ("belom", "not yet"), ("aja", "just"),
    // Abbreviations
    ("yg", "which"), ("dgn", "with"), ("utk", "for"), ("dr", "from"), ("pd", "on"),
    ("dlm", "in"), ("krn", "because"), ("jk", "if"), ("jgn", "do not"), ("bgt", "very"),
    ("bngt", "very"), ("gk", "not"), ("ga", "not"), ("tdk", "not"), ("blm", "not yet"),
    ("sdh", "already"), ("lg", "again"), ("sm", "with"), ("sma", "same"), ("kl", "if"),
    ("klo", "if"), ("kalo", "if"),
    // Family terms
    ("ayah", "father"), ("ibu", "mother"), ("bapak", "father"), ("mama", "mother"),
    ("papa", "father"), ("kakak", "sibling"), ("adik", "sibling"), ("anak", "child"),
    // Time words
    ("sekarang", "now"), ("nanti", "later"), ("kemarin", "yesterday"), ("besok", "tomorrow"),
    ("hari", "day"), ("minggu", "week"), ("bulan", "month"), ("tahun", "year"),
    ("jam", "hour"), ("menit", "minute"), ("detik", "second"),
    // Expressions
    ("terima kasih", "thank you"), ("maaf", "sorry"), ("permisi", "excuse me"),
    ("selamat", "congratulations"), ("halo", "hello"), ("hai", "hi"),
    // Laughter
    ("haha", "haha"), ("hehe", "hehe"), ("hihi", "hihi"), ("hoho", "hoho"), ("huhu", "huhu"),
    ("hahaha", "hahaha"), ("hehehe", "hehehe"), ("hahahaha", "hahahaha"),
    // Internet slang
    ("wkwk", "lol"), ("wkwkwk", "lol"), ("kwkw", "lol"), ("anjay", "wow"), ("mantap", "great"),
    ("keren", "cool"), ("bagus", "good"), ("jelek", "bad"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_and_reverse_lookup() {
        assert_eq!(lookup(INDONESIAN_TO_JAVANESE, "tidak"), Some("ora"));
        assert_eq!(lookup(INDONESIAN_TO_JAVANESE, "xyz"), None);
        assert_eq!(reverse_lookup(INDONESIAN_TO_SUNDANESE, "henteu"), Some("tidak"));
    }

    #[test]
    fn test_reverse_lookup_returns_first_key() {
        // "ing" is the Javanese for both "di" and "pada"
        assert_eq!(reverse_lookup(INDONESIAN_TO_JAVANESE, "ing"), Some("di"));
    }

    #[test]
    fn test_dictionary_keys_are_unique() {
        let keys: HashSet<_> = INDONESIAN_TO_ENGLISH.iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), INDONESIAN_TO_ENGLISH.len());
    }

    #[test]
    fn test_english_stopwords_are_lowercase() {
        assert!(ENGLISH_STOPWORDS
            .iter()
            .all(|w| w.to_lowercase() == *w && !w.is_empty()));
    }

    #[test]
    fn test_entries_have_at_least_one_value() {
        for entry in ADDITIONAL_ENTRIES.iter().chain(PADDING_ENTRIES) {
            assert!(entry.iter().any(|v| !v.is_empty()), "{:?}", entry);
        }
    }
}
