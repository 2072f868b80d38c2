//! Sample documents
//!
//! Shared inputs for tests. Keeping them in one place means a change in how a construct
//! is parsed only has to be checked against one copy of each document.

/// Two levels of keys with a raw leaf
pub const SIMPLE: &str = "hello:\n  world:\n    message\n";

/// Comments at the top level and inside a key
pub const COMMENTS: &str = "#A comment\nhello:\n  #Another comment\n  world:\n    message\n";

/// Nested siblings, including a raw line at the same indent as its key (`beer`)
pub const WORLD: &str = "world:\n  europe:\n    france:\n      cheese\n    belgium:\n    beer\n  canada:\n    montreal: poutine\n    vancouver:\n      salmon\nmoon:\n  moonbase-alfa:\n    moonstone\n";

/// A key without children followed by a sibling key
pub const CHILDLESS_KEY: &str = "world:\n  europe:\n  canada:\n    montreal: poutine\n    vancouver:\n      salmon\nmoon:\n  moonbase-alfa:\n    moonstone\n";

/// Keys with no children, only unreal children, one real child and mixed children
pub const FIRST_REAL_CHILD: &str = "no-children:\nunreal-children:\n  #Unreal\n\n  #comment only\nreal-child:\n  abc\nmixed-children:\n\n#comment\n  def";

/// Spring-style application properties with lists and quoted keys
pub const APPLICATION: &str = "server:\n  port: 8080\n  ssl:\n    enabled: true # toggled per profile\nspring:\n  profiles:\n    active:\n    - dev\n    - local\nlogging:\n  level:\n    \"org.example\": DEBUG\n    'com.acme': WARN\n";

/// Every sample with a name, for tests that run over the whole set
pub const ALL: &[(&str, &str)] = &[
    ("simple", SIMPLE),
    ("comments", COMMENTS),
    ("world", WORLD),
    ("childless-key", CHILDLESS_KEY),
    ("first-real-child", FIRST_REAL_CHILD),
    ("application", APPLICATION),
];
