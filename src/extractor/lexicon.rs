// file: src/extractor/lexicon.rs
// description: closed-class word lists and entity gazetteers
// reference: lowercase lookups, multi-word entries are space separated

use lazy_static::lazy_static;
use std::collections::HashSet;

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    let set: HashSet<&'static str> = words.iter().copied().collect();
    debug_assert_eq!(set.len(), words.len(), "duplicate entry in word list");
    set
}

lazy_static! {
    pub static ref DETERMINERS: HashSet<&'static str> = set(&[
        "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her",
        "its", "our", "their", "some", "any", "each", "every", "no", "all", "both",
        "another", "either", "neither", "such", "whose",
    ]);

    pub static ref PRONOUNS: HashSet<&'static str> = set(&[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
        "yourself", "itself", "ourselves", "themselves", "who", "whom", "what", "which",
        "something", "anything", "nothing", "everything", "someone", "anyone", "everyone",
    ]);

    pub static ref PREPOSITIONS: HashSet<&'static str> = set(&[
        "of", "in", "on", "for", "by", "with", "from", "to", "at", "about", "into", "onto",
        "over", "under", "through", "via", "against", "between", "during", "without",
        "within", "as", "than", "like", "per", "across", "after", "before", "behind",
        "beyond", "among", "around", "along", "near", "since", "until", "upon", "toward",
        "towards", "off", "out", "up", "down",
    ]);

    pub static ref CONJUNCTIONS: HashSet<&'static str> = set(&[
        "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "whereas",
        "although", "though", "unless", "whether", "then",
    ]);

    pub static ref COPULAS: HashSet<&'static str> = set(&[
        "is", "are", "was", "were", "be", "been", "being", "am", "seem", "seems", "become",
        "becomes", "became", "remain", "remains",
    ]);

    pub static ref VERBS: HashSet<&'static str> = set(&[
        "has", "have", "had", "do", "does", "did", "can", "could", "will", "would", "should",
        "may", "might", "must", "shall", "use", "uses", "get", "gets", "got", "make", "makes",
        "run", "runs", "learn", "learns", "see", "sees", "show", "shows", "find", "finds",
        "allow", "allows", "enable", "enables", "help", "helps", "include", "includes",
        "contain", "contains", "provide", "provides", "support", "supports", "work", "works",
        "rock", "rocks", "rule", "rules", "let", "lets", "take", "takes", "give", "gives",
        "know", "knows", "want", "wants", "need", "needs", "try", "tries", "go", "goes",
        "come", "comes", "look", "looks", "say", "says", "write", "writes", "read", "reads",
        "build", "builds", "create", "creates", "send", "sends", "perform", "performs",
        "demonstrate", "demonstrates", "explain", "explains", "watch", "discover",
        "discovers", "bypass", "bypasses", "leverage", "leverages", "affect", "affects",
        "detect", "detects", "identify", "identifies", "join", "joins", "made", "said",
        "found", "built", "written", "shown", "known", "taken", "given", "led",
    ]);

    pub static ref ADVERBS: HashSet<&'static str> = set(&[
        "not", "very", "also", "just", "how", "when", "where", "why", "here", "there",
        "now", "more", "most", "too", "only", "even", "still", "already", "often",
        "always", "never", "again", "well", "soon", "really",
    ]);

    pub static ref ADJECTIVES: HashSet<&'static str> = set(&[
        "new", "old", "good", "great", "best", "better", "bad", "free", "open", "simple",
        "easy", "common", "other", "same", "different", "many", "much", "few", "several",
        "various", "latest", "last", "first", "next", "full", "high", "low", "critical",
        "remote", "local", "public", "private", "large", "small", "big", "top", "real",
        "powerful", "popular", "useful", "secure", "important", "possible",
        "advanced", "basic", "complete", "official", "awesome", "fast", "quick",
    ]);

    pub static ref MONTHS: HashSet<&'static str> = set(&[
        "january", "february", "march", "april", "may", "june", "july", "august",
        "september", "october", "november", "december", "jan", "feb", "mar", "apr", "jun",
        "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]);

    pub static ref WEEKDAYS: HashSet<&'static str> = set(&[
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    ]);

    pub static ref TITLES: HashSet<&'static str> = set(&[
        "mr", "mrs", "ms", "dr", "prof", "sir", "madam",
    ]);

    pub static ref FIRST_NAMES: HashSet<&'static str> = set(&[
        "john", "james", "robert", "michael", "william", "david", "richard", "joseph",
        "thomas", "charles", "mary", "patricia", "jennifer", "linda", "elizabeth",
        "barbara", "susan", "jessica", "sarah", "karen", "alice", "bob", "carol", "dave",
        "eve", "frank", "grace", "heidi", "ivan", "judy", "oscar", "peggy", "victor",
        "walter", "emily", "anna", "maria", "peter", "paul", "mark", "daniel", "matthew",
        "andrew", "kevin", "brian", "george", "edward", "steven", "tim", "tom", "jack",
        "jane", "kate", "laura", "lisa", "nancy", "chris", "alex", "sam", "ben", "ryan",
        "eric", "adam", "linus", "bruce", "kim", "lee",
    ]);

    pub static ref LOCATIONS: HashSet<&'static str> = set(&[
        "usa", "america", "united states", "china", "russia", "india", "iran", "israel",
        "germany", "france", "uk", "united kingdom", "japan", "korea", "north korea",
        "south korea", "canada", "brazil", "australia", "europe", "asia", "africa",
        "ukraine", "london", "paris", "berlin", "moscow", "beijing", "tokyo", "new york",
        "california", "washington", "silicon valley", "san francisco", "las vegas",
    ]);

    pub static ref KNOWN_ORGS: HashSet<&'static str> = set(&[
        "github", "gitlab", "google", "microsoft", "youtube", "apple", "amazon", "aws",
        "meta", "facebook", "twitter", "openai", "owasp", "mitre", "nist", "cisa", "nsa",
        "fbi", "cia", "apache", "mozilla", "cloudflare", "ibm", "oracle", "cisco", "intel",
        "nvidia", "adobe", "hackerone", "bugcrowd", "portswigger", "rapid7", "tenable",
        "offensive security", "exploit-db", "exploitdb", "exploit database", "atlassian",
        "vmware", "fortinet", "palo alto networks", "crowdstrike", "mandiant", "kaspersky",
        "sans", "sans institute", "linux foundation", "ietf", "w3c", "hack the box",
        "tryhackme",
    ]);

    pub static ref KNOWN_PRODUCTS: HashSet<&'static str> = set(&[
        "burp", "burp suite", "metasploit", "nmap", "wireshark", "sqlmap", "nuclei",
        "ghidra", "kali", "kali linux", "windows", "linux", "android", "ios", "macos",
        "chrome", "firefox", "safari", "docker", "kubernetes", "python", "javascript",
        "java", "rust", "php", "node.js", "nodejs", "wordpress", "jenkins", "log4j",
        "struts", "apache struts", "openssl", "bash", "powershell", "chatgpt", "iphone",
        "postman", "curl", "ffuf", "gobuster", "hashcat", "john the ripper", "ubuntu",
    ]);

    pub static ref KNOWN_EVENTS: HashSet<&'static str> = set(&[
        "black hat", "blackhat", "def con", "defcon", "rsa conference", "pwn2own",
        "bsides", "hacktoberfest", "shmoocon", "derbycon", "chaos communication congress",
        "appsec", "global appsec",
    ]);

    pub static ref ORG_SUFFIXES: HashSet<&'static str> = set(&[
        "corp", "corporation", "inc", "incorporated", "ltd", "llc", "llp", "plc", "co",
        "company", "gmbh", "ag", "foundation", "group", "labs", "lab", "institute",
        "university", "agency", "association", "consortium", "technologies", "systems",
        "solutions", "software", "networks", "security", "team",
    ]);

    pub static ref EVENT_SUFFIXES: HashSet<&'static str> = set(&[
        "conference", "summit", "con", "hackathon", "expo", "festival", "convention",
        "symposium", "workshop", "meetup", "championship", "week", "olympics",
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_lists_are_lowercase() {
        let lists: [&HashSet<&'static str>; 6] = [
            &*KNOWN_ORGS,
            &*KNOWN_PRODUCTS,
            &*KNOWN_EVENTS,
            &*FIRST_NAMES,
            &*LOCATIONS,
            &*ORG_SUFFIXES,
        ];
        for list in lists {
            for word in list.iter() {
                assert_eq!(*word, word.to_lowercase());
            }
        }
    }

    #[test]
    fn test_word_lists_have_no_duplicates() {
        let lists: [&HashSet<&'static str>; 18] = [
            &*DETERMINERS,
            &*PRONOUNS,
            &*PREPOSITIONS,
            &*CONJUNCTIONS,
            &*COPULAS,
            &*VERBS,
            &*ADVERBS,
            &*ADJECTIVES,
            &*MONTHS,
            &*WEEKDAYS,
            &*TITLES,
            &*FIRST_NAMES,
            &*LOCATIONS,
            &*KNOWN_ORGS,
            &*KNOWN_PRODUCTS,
            &*KNOWN_EVENTS,
            &*ORG_SUFFIXES,
            &*EVENT_SUFFIXES,
        ];
        for list in lists {
            assert!(!list.is_empty());
        }
        assert!(ADVERBS.contains("even"));
    }

    #[test]
    fn test_set_rejects_duplicates() {
        let result = std::panic::catch_unwind(|| set(&["even", "still", "even"]));
        assert_eq!(result.is_err(), cfg!(debug_assertions));
    }

    #[test]
    fn test_closed_classes_do_not_overlap() {
        for word in DETERMINERS.iter() {
            assert!(!PREPOSITIONS.contains(word), "{} in two classes", word);
            assert!(!VERBS.contains(word), "{} in two classes", word);
        }
    }
}
