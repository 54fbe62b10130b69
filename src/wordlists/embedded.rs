//! Embedded corpora
//!
//! Word list and phrase passage compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Built-in passage that phrase mode draws its sentences from
pub const PASSAGE: &str = include_str!("../../data/passage.txt");

/// Title card for the built-in passage
pub const PASSAGE_BANNER: &str = r"
THE LOG OF THE NIGHT CROSSING
        |    |    |
       )_)  )_)  )_)
      )___))___))___)\
     )____)____)_____)\\
   _____|____|____|____\\\__
   \                   /
~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";
