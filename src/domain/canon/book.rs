//! Canon Context - Book 枚举
//!
//! 枚举声明顺序即正典顺序，`Ord` 直接依赖该顺序

use serde::{Deserialize, Serialize};

/// 约别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "old",
            Testament::New => "new",
        }
    }
}

macro_rules! canon {
    ($($variant:ident => $key:literal, $name:literal, $testament:ident, $deutero:literal;)+) => {
        /// 书卷（含次经）
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Book {
            $($variant,)+
        }

        impl Book {
            /// 按正典顺序排列的全部书卷
            pub const ALL: &'static [Book] = &[$(Book::$variant,)+];

            /// 查表键：小写、去空白的规范名
            pub fn key(&self) -> &'static str {
                match self {
                    $(Book::$variant => $key,)+
                }
            }

            /// 规范名
            pub fn name(&self) -> &'static str {
                match self {
                    $(Book::$variant => $name,)+
                }
            }

            pub fn testament(&self) -> Testament {
                match self {
                    $(Book::$variant => Testament::$testament,)+
                }
            }

            /// 是否为次经（第二正典）
            pub fn is_deuterocanonical(&self) -> bool {
                match self {
                    $(Book::$variant => $deutero,)+
                }
            }
        }
    };
}

canon! {
    Genesis => "genesis", "Genesis", Old, false;
    Exodus => "exodus", "Exodus", Old, false;
    Leviticus => "leviticus", "Leviticus", Old, false;
    Numbers => "numbers", "Numbers", Old, false;
    Deuteronomy => "deuteronomy", "Deuteronomy", Old, false;
    Joshua => "joshua", "Joshua", Old, false;
    Judges => "judges", "Judges", Old, false;
    Ruth => "ruth", "Ruth", Old, false;
    FirstSamuel => "1samuel", "1 Samuel", Old, false;
    SecondSamuel => "2samuel", "2 Samuel", Old, false;
    FirstKings => "1kings", "1 Kings", Old, false;
    SecondKings => "2kings", "2 Kings", Old, false;
    FirstChronicles => "1chronicles", "1 Chronicles", Old, false;
    SecondChronicles => "2chronicles", "2 Chronicles", Old, false;
    Ezra => "ezra", "Ezra", Old, false;
    Nehemiah => "nehemiah", "Nehemiah", Old, false;
    Tobit => "tobit", "Tobit", Old, true;
    Judith => "judith", "Judith", Old, true;
    Esther => "esther", "Esther", Old, false;
    FirstMaccabees => "1maccabees", "1 Maccabees", Old, true;
    SecondMaccabees => "2maccabees", "2 Maccabees", Old, true;
    Job => "job", "Job", Old, false;
    Psalms => "psalms", "Psalms", Old, false;
    Proverbs => "proverbs", "Proverbs", Old, false;
    Ecclesiastes => "ecclesiastes", "Ecclesiastes", Old, false;
    SongOfSongs => "songofsongs", "Song of Songs", Old, false;
    Wisdom => "wisdom", "Wisdom", Old, true;
    Sirach => "sirach", "Sirach", Old, true;
    Isaiah => "isaiah", "Isaiah", Old, false;
    Jeremiah => "jeremiah", "Jeremiah", Old, false;
    Lamentations => "lamentations", "Lamentations", Old, false;
    Baruch => "baruch", "Baruch", Old, true;
    Ezekiel => "ezekiel", "Ezekiel", Old, false;
    Daniel => "daniel", "Daniel", Old, false;
    Hosea => "hosea", "Hosea", Old, false;
    Joel => "joel", "Joel", Old, false;
    Amos => "amos", "Amos", Old, false;
    Obadiah => "obadiah", "Obadiah", Old, false;
    Jonah => "jonah", "Jonah", Old, false;
    Micah => "micah", "Micah", Old, false;
    Nahum => "nahum", "Nahum", Old, false;
    Habakkuk => "habakkuk", "Habakkuk", Old, false;
    Zephaniah => "zephaniah", "Zephaniah", Old, false;
    Haggai => "haggai", "Haggai", Old, false;
    Zechariah => "zechariah", "Zechariah", Old, false;
    Malachi => "malachi", "Malachi", Old, false;
    Matthew => "matthew", "Matthew", New, false;
    Mark => "mark", "Mark", New, false;
    Luke => "luke", "Luke", New, false;
    John => "john", "John", New, false;
    Acts => "acts", "Acts", New, false;
    Romans => "romans", "Romans", New, false;
    FirstCorinthians => "1corinthians", "1 Corinthians", New, false;
    SecondCorinthians => "2corinthians", "2 Corinthians", New, false;
    Galatians => "galatians", "Galatians", New, false;
    Ephesians => "ephesians", "Ephesians", New, false;
    Philippians => "philippians", "Philippians", New, false;
    Colossians => "colossians", "Colossians", New, false;
    FirstThessalonians => "1thessalonians", "1 Thessalonians", New, false;
    SecondThessalonians => "2thessalonians", "2 Thessalonians", New, false;
    FirstTimothy => "1timothy", "1 Timothy", New, false;
    SecondTimothy => "2timothy", "2 Timothy", New, false;
    Titus => "titus", "Titus", New, false;
    Philemon => "philemon", "Philemon", New, false;
    Hebrews => "hebrews", "Hebrews", New, false;
    James => "james", "James", New, false;
    FirstPeter => "1peter", "1 Peter", New, false;
    SecondPeter => "2peter", "2 Peter", New, false;
    FirstJohn => "1john", "1 John", New, false;
    SecondJohn => "2john", "2 John", New, false;
    ThirdJohn => "3john", "3 John", New, false;
    Jude => "jude", "Jude", New, false;
    Revelation => "revelation", "Revelation", New, false;
}

impl Book {
    /// 按查表键查找书卷
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|book| book.key() == key)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
