use crate::WordRecord;

/// The word database, compiled into the binary.
pub const WORDS: &[WordRecord] = &[
    WordRecord {
        word: "Serendipity",
        definition: "The occurrence of events by chance in a happy or beneficial way",
        example: "Finding exactly what you needed while looking for something else was pure serendipity",
        category: "positive",
    },
    WordRecord {
        word: "Eloquent",
        definition: "Fluent or persuasive in speaking or writing",
        example: "Her eloquent speech moved the entire audience",
        category: "communication",
    },
    WordRecord {
        word: "Ubiquitous",
        definition: "Present, appearing, or found everywhere",
        example: "Mobile phones have become ubiquitous in modern society",
        category: "descriptive",
    },
    WordRecord {
        word: "Pragmatic",
        definition: "Dealing with things sensibly and realistically",
        example: "We need a pragmatic approach to solving this problem",
        category: "mindset",
    },
    WordRecord {
        word: "Ephemeral",
        definition: "Lasting for a very short time",
        example: "The ephemeral beauty of cherry blossoms lasts only a few days",
        category: "descriptive",
    },
];
