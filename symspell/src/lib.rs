/*! Spelling correction with the Symmetric Delete algorithm.

Instead of generating every insert, substitution and transposition of a
misspelled word at lookup time, every dictionary word is indexed under all the
strings reachable by deleting up to `n` characters from its prefix. A query
generates its own deletes and meets the dictionary in the middle, so a fuzzy
lookup becomes a handful of hash lookups followed by a few exact
Damerau-Levenshtein verifications.

On top of single word lookup the crate provides compound correction (merging
and splitting tokens of a sentence, guided by a bigram table) and word
segmentation (inserting missing spaces with dynamic programming).

# Usage examples

```
use symspell::dictionary::DictionaryBuilder;
use symspell::speller::{SymSpellConfig, Verbosity};

let mut builder = DictionaryBuilder::new(SymSpellConfig::default()).unwrap();
builder.load_dictionary("house 231310420\nmouse 8312450".lines(), 0, 1);
let speller = builder.build();

let suggestions = speller.lookup("hous", Verbosity::Top, None);
assert_eq!(suggestions[0].term(), "house");
assert_eq!(suggestions[0].distance(), 1);
```

The command line front-end in `symspell-bin` shows how dictionaries are read
from disk and how results are printed.
*/

#![warn(missing_docs)]
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod speller;
pub mod tokenizer;

pub(crate) mod constants;
#[cfg(test)]
pub(crate) mod fixtures;
