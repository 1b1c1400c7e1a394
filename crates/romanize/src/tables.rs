// Built-in romanization data.
//
// Every built-in mapping has confidence 1.0. Sound-change rules are applied
// in listed order, so earlier rewrites feed later ones.
use crate::language::Language;
use crate::language::Language::*;
use crate::mapping::RomanizationMapping;

pub(crate) struct MappingRow {
    pub original: &'static str,
    pub romanized: &'static str,
    pub language: Language,
    pub variants: &'static [&'static str],
    pub region: &'static str,
    pub source: &'static str,
}

const fn row(
    original: &'static str,
    romanized: &'static str,
    language: Language,
    variants: &'static [&'static str],
    region: &'static str,
    source: &'static str,
) -> MappingRow {
    MappingRow {
        original,
        romanized,
        language,
        variants,
        region,
        source,
    }
}

impl MappingRow {
    pub(crate) fn to_mapping(&self) -> RomanizationMapping {
        RomanizationMapping::new(self.original, self.romanized, self.language, 1.0)
            .with_variants(self.variants)
            .with_region(self.region)
            .with_source(self.source)
    }
}

pub(crate) static MAPPINGS: &[MappingRow] = &[
    // Chinese, pinyin
    row("北京", "Beijing", Chinese, &["Peking"], "standard", "pinyin"),
    row("上海", "Shanghai", Chinese, &["Shang Hai"], "standard", "pinyin"),
    row("广州", "Guangzhou", Chinese, &["Canton", "Kwangchow"], "guangdong", "pinyin"),
    row("深圳", "Shenzhen", Chinese, &["Sham Chun"], "guangdong", "pinyin"),
    row("杭州", "Hangzhou", Chinese, &["Hang-chou"], "zhejiang", "pinyin"),
    row("南京", "Nanjing", Chinese, &["Nanking"], "jiangsu", "pinyin"),
    row("武汉", "Wuhan", Chinese, &["Wu-han"], "hubei", "pinyin"),
    row("成都", "Chengdu", Chinese, &["Cheng-tu"], "sichuan", "pinyin"),
    row("西安", "Xi'an", Chinese, &["Xian", "Sian"], "shaanxi", "pinyin"),
    row("重庆", "Chongqing", Chinese, &["Chung-king"], "sichuan", "pinyin"),
    row("天津", "Tianjin", Chinese, &["Tientsin"], "hebei", "pinyin"),
    row("苏州", "Suzhou", Chinese, &["Soochow"], "jiangsu", "pinyin"),
    row("青岛", "Qingdao", Chinese, &["Tsingtao"], "shandong", "pinyin"),
    row("大连", "Dalian", Chinese, &["Dairen", "Talien"], "liaoning", "pinyin"),
    row("沈阳", "Shenyang", Chinese, &["Mukden"], "liaoning", "pinyin"),
    row("张伟", "Zhang Wei", Chinese, &["Chang Wei"], "standard", "pinyin"),
    row("王芳", "Wang Fang", Chinese, &["Wong Fong"], "standard", "pinyin"),
    row("李娜", "Li Na", Chinese, &["Lee Na"], "standard", "pinyin"),
    row("刘强", "Liu Qiang", Chinese, &["Lau Keung"], "standard", "pinyin"),
    row("陈敏", "Chen Min", Chinese, &["Chan Man"], "standard", "pinyin"),
    row("杨静", "Yang Jing", Chinese, &["Yeung Ching"], "standard", "pinyin"),
    row("赵磊", "Zhao Lei", Chinese, &["Chiu Lui"], "standard", "pinyin"),
    row("黄丽", "Huang Li", Chinese, &["Wong Lai"], "standard", "pinyin"),
    row("马云", "Ma Yun", Chinese, &["Jack Ma"], "standard", "pinyin"),
    row("李小明", "Li Xiaoming", Chinese, &["Lee Siu Ming"], "standard", "pinyin"),
    // Japanese, Hepburn
    row("東京", "Tokyo", Japanese, &["Toukyou", "Tōkyō"], "kanto", "hepburn"),
    row("大阪", "Osaka", Japanese, &["Ōsaka"], "kansai", "hepburn"),
    row("京都", "Kyoto", Japanese, &["Kyōto"], "kansai", "hepburn"),
    row("名古屋", "Nagoya", Japanese, &[], "chubu", "hepburn"),
    row("横浜", "Yokohama", Japanese, &[], "kanto", "hepburn"),
    row("神戸", "Kobe", Japanese, &["Kōbe"], "kansai", "hepburn"),
    row("福岡", "Fukuoka", Japanese, &["Hukuoka"], "kyushu", "hepburn"),
    row("札幌", "Sapporo", Japanese, &[], "hokkaido", "hepburn"),
    row("仙台", "Sendai", Japanese, &[], "tohoku", "hepburn"),
    row("広島", "Hiroshima", Japanese, &["Hirosima"], "chugoku", "hepburn"),
    row("田中太郎", "Tanaka Taro", Japanese, &["Tanaka Tarou"], "standard", "hepburn"),
    row("佐藤花子", "Sato Hanako", Japanese, &["Satou Hanako"], "standard", "hepburn"),
    row("高橋一郎", "Takahashi Ichiro", Japanese, &["Takahasi Itirou"], "standard", "hepburn"),
    row("山田美咲", "Yamada Misaki", Japanese, &[], "standard", "hepburn"),
    row("渡辺健太", "Watanabe Kenta", Japanese, &[], "standard", "hepburn"),
    row("鈴木花音", "Suzuki Kanon", Japanese, &[], "standard", "hepburn"),
    // Korean, Revised Romanization with McCune-Reischauer variants
    row("서울", "Seoul", Korean, &["Sŏul"], "standard", "revised"),
    row("부산", "Busan", Korean, &["Pusan", "Pŭsan"], "gyeongsang", "revised"),
    row("대구", "Daegu", Korean, &["Taegu"], "gyeongsang", "revised"),
    row("인천", "Incheon", Korean, &["Inch'ŏn"], "gyeonggi", "revised"),
    row("광주", "Gwangju", Korean, &["Kwangju"], "jeolla", "revised"),
    row("대전", "Daejeon", Korean, &["Taejŏn", "Taejon"], "chungcheong", "revised"),
    row("울산", "Ulsan", Korean, &[], "gyeongsang", "revised"),
    row("수원", "Suwon", Korean, &["Suwŏn"], "gyeonggi", "revised"),
    row("창원", "Changwon", Korean, &["Ch'angwŏn"], "gyeongsang", "revised"),
    row("김민수", "Kim Minsu", Korean, &["Kim Min-su"], "standard", "revised"),
    row("이지영", "Lee Jiyoung", Korean, &["Yi Chi-yŏng"], "standard", "revised"),
    row("박준호", "Park Junho", Korean, &["Pak Chun-ho"], "standard", "revised"),
    row("최수진", "Choi Sujin", Korean, &["Ch'oe Su-jin"], "standard", "revised"),
    row("정현우", "Jung Hyeonwoo", Korean, &["Chŏng Hyŏn-u"], "standard", "revised"),
    // Arabic, ISO 233: given names
    row("محمد", "Muhammad", Arabic, &["Mohammed", "Mohamed", "Mohammad", "Muhammed"], "standard", "iso233"),
    row("أحمد", "Ahmad", Arabic, &["Ahmed", "Ahmet", "Achmad"], "standard", "iso233"),
    row("علي", "Ali", Arabic, &["Aly", "Aliy"], "standard", "iso233"),
    row("عبدالله", "Abdullah", Arabic, &["Abd Allah", "Abdallah", "Abdulla"], "standard", "iso233"),
    row("خالد", "Khalid", Arabic, &["Khaled", "Halid", "Khaleed"], "standard", "iso233"),
    row("عمر", "Omar", Arabic, &["Umar", "Omer"], "standard", "iso233"),
    row("حسن", "Hassan", Arabic, &["Hasan", "Hasaan"], "standard", "iso233"),
    row("حسين", "Hussein", Arabic, &["Hussain", "Hosein", "Hossein"], "standard", "iso233"),
    row("يوسف", "Yusuf", Arabic, &["Youssef", "Joseph", "Yousef"], "standard", "iso233"),
    row("إبراهيم", "Ibrahim", Arabic, &["Ibraheem", "Abraham"], "standard", "iso233"),
    row("عبدالرحمن", "Abdurrahman", Arabic, &["Abd al-Rahman", "Abdelrahman"], "standard", "iso233"),
    row("سعد", "Saad", Arabic, &["Sa'd", "Saed"], "standard", "iso233"),
    row("فيصل", "Faisal", Arabic, &["Faysal", "Feisal"], "standard", "iso233"),
    row("طارق", "Tariq", Arabic, &["Tarik", "Tareq"], "standard", "iso233"),
    row("فاطمة", "Fatima", Arabic, &["Fatma", "Fatimah", "Fatemeh"], "standard", "iso233"),
    row("عائشة", "Aisha", Arabic, &["Aysha", "Aishah", "Ayesha"], "standard", "iso233"),
    row("خديجة", "Khadija", Arabic, &["Khadijah", "Hadija"], "standard", "iso233"),
    row("زينب", "Zainab", Arabic, &["Zaynab", "Zeinab"], "standard", "iso233"),
    row("مريم", "Maryam", Arabic, &["Mariam", "Mary"], "standard", "iso233"),
    row("أمينة", "Amina", Arabic, &["Aminah", "Ameena"], "standard", "iso233"),
    row("سارة", "Sarah", Arabic, &["Sara", "Saara"], "standard", "iso233"),
    row("ليلى", "Layla", Arabic, &["Laila", "Leila", "Lila"], "standard", "iso233"),
    row("نادية", "Nadia", Arabic, &["Nadiya", "Nadya"], "standard", "iso233"),
    // Arabic: cities
    row("الرياض", "Riyadh", Arabic, &["Ar-Riyadh", "Er Riyadh", "Riyad"], "saudi", "iso233"),
    row("القاهرة", "Cairo", Arabic, &["Al-Qahirah", "El Qahira", "Al-Qāhirah"], "egypt", "iso233"),
    row("دبي", "Dubai", Arabic, &["Dubayy", "Dubay"], "uae", "iso233"),
    row("بغداد", "Baghdad", Arabic, &["Baghdād", "Bagdad"], "iraq", "iso233"),
    row("الدوحة", "Doha", Arabic, &["Ad-Dawḥah", "Ad-Doha"], "qatar", "iso233"),
    row("الكويت", "Kuwait", Arabic, &["Al-Kuwayt", "Al-Kuwait"], "kuwait", "iso233"),
    row("عمان", "Amman", Arabic, &["'Ammān"], "jordan", "iso233"),
    row("مسقط", "Muscat", Arabic, &["Masqaţ", "Maskat"], "oman", "iso233"),
    row("دمشق", "Damascus", Arabic, &["Dimashq", "Ash-Sham"], "syria", "iso233"),
    row("بيروت", "Beirut", Arabic, &["Bayrūt", "Beyrouth"], "lebanon", "iso233"),
    row("الجزائر", "Algiers", Arabic, &["Al-Jazā'ir", "Alger"], "algeria", "iso233"),
    row("الرباط", "Rabat", Arabic, &["Ar-Ribāţ"], "morocco", "iso233"),
    row("تونس", "Tunis", Arabic, &["Tūnis"], "tunisia", "iso233"),
    row("طرابلس", "Tripoli", Arabic, &["Ţarābulus"], "libya", "iso233"),
    row("الخرطوم", "Khartoum", Arabic, &["Al-Kharţūm", "Khartum"], "sudan", "iso233"),
    // Arabic: countries
    row("السعودية", "Saudi Arabia", Arabic, &["As-Sa'ūdiyyah", "KSA"], "country", "iso233"),
    row("مصر", "Egypt", Arabic, &["Miṣr", "Masr"], "country", "iso233"),
    row("الإمارات", "UAE", Arabic, &["Al-Imārāt", "Emirates"], "country", "iso233"),
    row("العراق", "Iraq", Arabic, &["Al-'Irāq"], "country", "iso233"),
    row("الأردن", "Jordan", Arabic, &["Al-'Urdun"], "country", "iso233"),
    row("لبنان", "Lebanon", Arabic, &["Lubnān"], "country", "iso233"),
    row("سوريا", "Syria", Arabic, &["Sūriyā", "Suriya"], "country", "iso233"),
    row("فلسطين", "Palestine", Arabic, &["Filasţīn"], "country", "iso233"),
    row("المغرب", "Morocco", Arabic, &["Al-Maghrib"], "country", "iso233"),
    row("الجزائر", "Algeria", Arabic, &["Al-Jazā'ir"], "country", "iso233"),
    row("ليبيا", "Libya", Arabic, &["Lībiyā"], "country", "iso233"),
    row("السودان", "Sudan", Arabic, &["As-Sūdān"], "country", "iso233"),
    // Arabic: common words
    row("بيت", "bayt", Arabic, &["bait", "beet"], "word", "iso233"),
    row("شارع", "shari'", Arabic, &["sharia", "street"], "word", "iso233"),
    row("مدينة", "madina", Arabic, &["medina", "city"], "word", "iso233"),
    row("جامع", "jami'", Arabic, &["jamia", "mosque"], "word", "iso233"),
    row("مطار", "matar", Arabic, &["airport"], "word", "iso233"),
    // Russian, ISO 9
    row("Москва", "Moscow", Russian, &["Moskva", "Moskwa"], "standard", "iso9"),
    row("Санкт-Петербург", "Saint Petersburg", Russian, &["Sankt-Peterburg", "St. Petersburg"], "standard", "iso9"),
    row("Новосибирск", "Novosibirsk", Russian, &[], "siberia", "iso9"),
    row("Екатеринбург", "Yekaterinburg", Russian, &["Ekaterinburg"], "ural", "iso9"),
    row("Нижний Новгород", "Nizhny Novgorod", Russian, &["Nizhniy Novgorod"], "volga", "iso9"),
    row("Владимир", "Vladimir", Russian, &["Wladimir"], "standard", "iso9"),
    row("Александр", "Alexander", Russian, &["Aleksandr"], "standard", "iso9"),
    row("Наталья", "Natalia", Russian, &["Natalya", "Natasha"], "standard", "iso9"),
    row("Дмитрий", "Dmitry", Russian, &["Dmitri", "Dimitri"], "standard", "iso9"),
    // Greek, ISO 843
    row("Αθήνα", "Athens", Greek, &["Athina"], "standard", "iso843"),
    row("Θεσσαλονίκη", "Thessaloniki", Greek, &["Saloniki"], "macedonia", "iso843"),
    row("Πάτρα", "Patras", Greek, &["Patra"], "peloponnese", "iso843"),
    row("Ηράκλειο", "Heraklion", Greek, &["Iraklion"], "crete", "iso843"),
    row("Γιάννης", "Yannis", Greek, &["Giannis", "Ioannis"], "standard", "iso843"),
    row("Μαρία", "Maria", Greek, &["Mary"], "standard", "iso843"),
    row("Νίκος", "Nikos", Greek, &["Nicko"], "standard", "iso843"),
    // Thai, RTGS
    row("กรุงเทพมหานคร", "Bangkok", Thai, &["Krung Thep"], "central", "rtgs"),
    row("เชียงใหม่", "Chiang Mai", Thai, &["Chiangmai"], "northern", "rtgs"),
    row("ภูเก็ต", "Phuket", Thai, &["Puket"], "southern", "rtgs"),
    row("พัทยา", "Pattaya", Thai, &["Phatthaya"], "central", "rtgs"),
    row("สมชาย", "Somchai", Thai, &["Som Chai"], "standard", "rtgs"),
    row("นิตยา", "Nitaya", Thai, &["Nittaya"], "standard", "rtgs"),
    // Vietnamese: the original already uses Latin letters with tone marks
    row("Hà Nội", "Hanoi", Vietnamese, &["Ha Noi"], "northern", "standard"),
    row("Thành phố Hồ Chí Minh", "Ho Chi Minh City", Vietnamese, &["Saigon", "HCMC"], "southern", "standard"),
    row("Đà Nẵng", "Da Nang", Vietnamese, &["Danang"], "central", "standard"),
    row("Hải Phòng", "Hai Phong", Vietnamese, &["Haiphong"], "northern", "standard"),
    row("Nguyễn Văn A", "Nguyen Van A", Vietnamese, &[], "standard", "standard"),
    row("Trần Thị B", "Tran Thi B", Vietnamese, &[], "standard", "standard"),
];

/// A sound unit and the spellings that stand for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneticMapping {
    pub sound: &'static str,
    pub spellings: &'static [&'static str],
    pub language: Language,
    pub weight: f64,
}

const fn phone(
    sound: &'static str,
    spellings: &'static [&'static str],
    language: Language,
    weight: f64,
) -> PhoneticMapping {
    PhoneticMapping {
        sound,
        spellings,
        language,
        weight,
    }
}

/// Consonants first, then vowels; lookups take the first mapping listing
/// both spellings.
pub static PHONETIC_MAPPINGS: &[PhoneticMapping] = &[
    phone("p", &["p", "b", "ph", "f"], Universal, 1.0),
    phone("t", &["t", "d", "th", "dt"], Universal, 1.0),
    phone("k", &["k", "g", "kh", "gh", "c", "q"], Universal, 1.0),
    phone("s", &["s", "z", "sh", "zh", "c", "ts"], Universal, 1.0),
    phone("n", &["n", "ng", "m", "ny"], Universal, 1.0),
    phone("r", &["r", "l", "rr", "rl"], Universal, 0.9),
    phone("h", &["h", "kh", "gh", "x"], Universal, 0.8),
    phone("zh", &["zh", "z", "j"], Chinese, 1.0),
    phone("ch", &["ch", "c", "q"], Chinese, 1.0),
    phone("sh", &["sh", "s", "x"], Chinese, 1.0),
    phone("tsu", &["tsu", "tu", "zu"], Japanese, 1.0),
    phone("chi", &["chi", "ti", "ki"], Japanese, 1.0),
    phone("shi", &["shi", "si", "hi"], Japanese, 1.0),
    phone("'", &["'", "", "a"], Arabic, 0.8),
    phone("kh", &["kh", "h", "x"], Arabic, 1.0),
    phone("gh", &["gh", "g", "r"], Arabic, 1.0),
    phone("a", &["a", "ā", "à", "á", "â", "ă"], Universal, 1.0),
    phone("e", &["e", "ē", "è", "é", "ê", "ë"], Universal, 1.0),
    phone("i", &["i", "ī", "ì", "í", "î", "ï", "y"], Universal, 1.0),
    phone("o", &["o", "ō", "ò", "ó", "ô", "ö"], Universal, 1.0),
    phone("u", &["u", "ū", "ù", "ú", "û", "ü"], Universal, 1.0),
    phone("ai", &["ai", "ay", "ae", "ei"], Universal, 0.9),
    phone("au", &["au", "aw", "ao"], Universal, 0.9),
    phone("ou", &["ou", "ow", "oo"], Universal, 0.9),
    phone("ü", &["ü", "u", "yu"], Chinese, 1.0),
    phone("er", &["er", "r"], Chinese, 1.0),
    phone("eo", &["eo", "o", "u"], Korean, 1.0),
    phone("eu", &["eu", "u", "oo"], Korean, 1.0),
];

/// Multi-letter phonemes recognized during extraction, longest first.
pub(crate) static KNOWN_PHONEMES: &[&str] = &[
    "tsu", "chi", "shi", "zh", "ch", "sh", "th", "ph", "kh", "gh", "ng", "ny", "ts", "dz", "ou",
    "ai", "ei", "ao", "au", "ia", "ua",
];

pub(crate) static SOUND_RULES: &[(Language, &[(&str, &str)])] = &[
    (
        Chinese,
        &[
            ("zh", "z"), ("ch", "c"), ("sh", "s"),
            ("x", "sh"), ("q", "ch"), ("j", "zh"),
            ("'", ""), ("-", ""), ("_", ""),
            ("ü", "u"), ("ö", "o"), ("ā", "a"),
            ("ē", "e"), ("ī", "i"), ("ō", "o"), ("ū", "u"),
            ("ou", "o"), ("ao", "au"), ("ei", "ai"),
            ("ng", "n"), ("nk", "ng"),
            ("ian", "ien"), ("uan", "uen"),
            ("iang", "ieng"), ("uang", "ueng"),
            // Wade-Giles
            ("zi", "tzu"), ("ci", "tzu"), ("si", "szu"),
            ("zhi", "chih"), ("chi", "ch'ih"), ("shi", "shih"),
        ],
    ),
    (
        Japanese,
        &[
            ("ou", "o"), ("oo", "o"), ("uu", "u"),
            ("ei", "e"), ("ii", "i"), ("aa", "a"),
            ("nn", "n"), ("mm", "m"),
            ("tsu", "tu"), ("chi", "ti"), ("shi", "si"), ("fu", "hu"),
            ("ja", "dya"), ("ju", "dyu"), ("jo", "dyo"),
            ("sha", "sya"), ("shu", "syu"), ("sho", "syo"),
            ("cha", "tya"), ("chu", "tyu"), ("cho", "tyo"),
            ("kya", "kia"), ("kyu", "kiu"), ("kyo", "kio"),
            ("gya", "gia"), ("gyu", "giu"), ("gyo", "gio"),
            ("wo", "o"), ("we", "e"), ("wi", "i"),
            ("du", "zu"), ("di", "zi"),
        ],
    ),
    (
        Korean,
        &[
            ("eo", "o"), ("eu", "u"), ("ae", "e"),
            ("oe", "we"), ("wi", "ui"), ("eui", "ui"),
            ("kw", "qu"), ("gw", "gu"), ("hw", "fu"),
            ("ng", "n"), ("nk", "ng"), ("nt", "nd"),
            ("pp", "p"), ("tt", "t"), ("kk", "k"),
            ("ss", "s"), ("jj", "j"), ("cc", "ch"),
            ("rr", "r"), ("ll", "l"),
            ("ya", "ia"), ("yo", "io"), ("yu", "iu"),
            ("wa", "ua"), ("wo", "uo"), ("we", "ue"),
            ("b", "p"), ("d", "t"), ("g", "k"),
            ("p'", "ph"), ("t'", "th"), ("k'", "kh"),
        ],
    ),
    (
        Arabic,
        &[
            // glottal stops and stray accents
            ("'", ""), ("\u{2019}", ""), ("`", ""), ("ʾ", ""), ("ʿ", ""),
            ("ʼ", ""), ("´", ""), ("\u{300}", ""), ("\u{302}", ""), ("\u{303}", ""),
            // regional consonants
            ("kh", "h"), ("x", "kh"),
            ("gh", "g"),
            ("q", "k"),
            ("j", "g"),
            ("th", "t"), ("ث", "s"),
            ("dh", "d"), ("ذ", "z"),
            ("zh", "z"), ("ظ", "z"),
            ("sh", "s"),
            ("ض", "d"), ("ص", "s"), ("ط", "t"), ("ح", "h"),
            // long vowels
            ("aa", "a"), ("ā", "a"), ("â", "a"),
            ("ii", "i"), ("ī", "i"), ("î", "i"),
            ("uu", "u"), ("ū", "u"), ("û", "u"),
            ("oo", "o"), ("ō", "o"), ("ô", "o"),
            ("ee", "e"), ("ē", "e"), ("ê", "e"),
            // diphthongs
            ("ay", "ai"), ("ey", "ei"), ("oy", "oi"),
            ("aw", "au"), ("ew", "eu"), ("ow", "ou"),
            // semivowels
            ("y", "i"), ("w", "u"),
            // definite article
            ("al-", ""), ("el-", ""), ("ar-", ""), ("as-", ""), ("at-", ""),
            ("an-", ""), ("ad-", ""), ("az-", ""), ("ash-", ""),
            // endings
            ("ah", "a"), ("eh", "e"), ("ih", "i"),
            // chat numerals
            ("9", ""), ("3", ""), ("7", "h"), ("6", "t"), ("2", ""), ("5", "kh"),
            ("8", "gh"), ("4", "th"),
            // scholarly transliteration letters
            ("ḥ", "h"), ("ḫ", "kh"), ("ḍ", "d"),
            ("ṣ", "s"), ("ṭ", "t"), ("ẓ", "z"),
            ("ḏ", "dh"), ("ṯ", "th"),
            ("ġ", "gh"), ("š", "sh"), ("ğ", "g"),
            // dialects
            ("gi", "g"), ("gy", "g"),
            ("ch", "k"), ("tch", "k"),
            ("v", "b"), ("p", "b"),
        ],
    ),
    (
        Russian,
        &[
            ("ya", "ia"), ("ye", "ie"), ("yo", "io"), ("yu", "iu"),
            ("shch", "sh"), ("tsch", "ch"),
            ("zh", "z"), ("ch", "c"), ("sh", "s"),
            ("iy", "y"), ("yy", "y"), ("ii", "i"),
            ("'", ""), ("\"", ""), ("`", ""),
            ("kh", "h"), ("ts", "c"), ("ks", "x"),
            ("ë", "e"), ("ï", "i"), ("ÿ", "y"),
        ],
    ),
    (
        Greek,
        &[
            ("th", "t"), ("ph", "f"), ("ch", "h"),
            ("ps", "s"), ("ks", "x"), ("ng", "n"),
            ("ai", "e"), ("ei", "i"), ("oi", "i"),
            ("au", "af"), ("eu", "ef"), ("ou", "u"),
            ("y", "i"), ("ē", "e"), ("ō", "o"),
            ("rrh", "r"), ("rh", "r"),
            ("mp", "b"), ("nt", "d"), ("gk", "g"),
        ],
    ),
    (
        Thai,
        &[
            ("ph", "p"), ("th", "t"), ("kh", "k"),
            ("ch", "c"), ("ng", "n"), ("ny", "n"),
            ("ai", "ay"), ("ao", "aw"), ("oe", "e"),
            ("ue", "u"), ("ia", "ya"), ("ua", "wa"),
            ("r", "l"),
        ],
    ),
    (
        Vietnamese,
        &[
            ("ă", "a"), ("â", "a"), ("ê", "e"), ("ô", "o"), ("ơ", "o"), ("ư", "u"),
            ("đ", "d"),
            ("ngh", "ng"), ("gi", "z"), ("gh", "g"), ("ng", "n"),
            ("ph", "f"), ("th", "t"), ("tr", "ch"),
            ("qu", "kw"),
        ],
    ),
    (
        Universal,
        &[
            ("ck", "k"), ("ph", "f"), ("gh", "g"),
            ("sch", "sh"), ("tch", "ch"),
            ("x", "ks"), ("qu", "kw"),
        ],
    ),
];

/// Romanized chat spellings that use digits for Arabic letters, with the
/// standard spellings they stand for.
pub(crate) static CHAT_PATTERNS: &[(&str, &[&str])] = &[
    ("mo7amed", &["muhammad", "mohammed", "mohamed"]),
    ("mo7ammed", &["muhammad", "mohammed", "mohamed"]),
    ("mu7ammad", &["muhammad", "mohammed", "mohamed"]),
    ("a7med", &["ahmad", "ahmed"]),
    ("a7mad", &["ahmad", "ahmed"]),
    ("3ali", &["ali"]),
    ("3ly", &["ali"]),
    ("5alid", &["khalid", "khaled"]),
    ("5aled", &["khalid", "khaled"]),
    ("7asan", &["hassan", "hasan"]),
    ("7assan", &["hassan", "hasan"]),
    ("7usain", &["hussain", "hussein"]),
    ("7ussein", &["hussain", "hussein"]),
    ("fatma7", &["fatma", "fatimah"]),
    ("3aisha", &["aisha", "aysha"]),
    ("3aysha", &["aisha", "aysha"]),
];
