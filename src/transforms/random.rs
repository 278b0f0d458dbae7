//! Transforms that draw from a random source.
//!
//! The random source is always injected, either as a `&mut Rng` argument on the
//! pure functions or as the generator owned by a [`RandomTransform`], so a
//! seeded generator makes the output reproducible.

use super::{Category, Transform, TransformRegistry, TransformResult};
use crate::constants::defaults;
use crate::error::Error;
use crate::params::Params;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use regex::Regex;
use std::sync::Mutex;

pub const CURSE_WORDS: [&str; 8] = [
    "damn", "heck", "crap", "bloody", "darn", "frick", "dang", "blast",
];

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

/// Signature of a transform that needs a random source
pub type RandomFn = fn(&str, &Params, &mut dyn RngCore) -> TransformResult;

/// A transform owning its random generator.
///
/// The generator sits behind a mutex so the transform can be shared by the
/// global registry while every invocation still advances the same sequence.
pub struct RandomTransform<R> {
    rng: Mutex<R>,
    apply: RandomFn,
}

impl<R: RngCore + Send> RandomTransform<R> {
    pub fn new(rng: R, apply: RandomFn) -> Self {
        Self {
            rng: Mutex::new(rng),
            apply,
        }
    }
}

impl RandomTransform<StdRng> {
    /// Creates the transform with a generator seeded from the operating system
    pub fn from_entropy(apply: RandomFn) -> Self {
        Self::new(StdRng::from_entropy(), apply)
    }
}

impl<R: RngCore + Send> Transform for RandomTransform<R> {
    fn transform(&self, text: &str, params: &Params) -> TransformResult {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| Error::Msg(format!("Failed to acquire random source: {}", e)))?;
        (self.apply)(text, params, &mut *rng)
    }
}

/// Inserts a random curse word after each word with a probability of `1/every`.
/// `every` values below 1 are treated as 1 (a word after every word).
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use textkit::transforms::random::{insert_curse_words, CURSE_WORDS};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let output = insert_curse_words("what a day", 1, &mut rng);
/// let words: Vec<&str> = output.split(' ').collect();
/// assert_eq!(words.len(), 6);
/// assert!(CURSE_WORDS.contains(&words[1]));
/// ```
pub fn insert_curse_words<R: Rng + ?Sized>(text: &str, every: u32, rng: &mut R) -> String {
    let every = every.max(1);
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;
    for word in WORD.find_iter(text) {
        out.push_str(&text[last..word.end()]);
        last = word.end();
        if rng.gen_ratio(1, every) {
            if let Some(curse) = CURSE_WORDS.choose(&mut *rng) {
                out.push(' ');
                out.push_str(curse);
            }
        }
    }
    out.push_str(&text[last..]);
    out
}

fn curse_words_transform(text: &str, params: &Params, rng: &mut dyn RngCore) -> TransformResult {
    Ok(insert_curse_words(
        text,
        params.get_number::<u32>("every", defaults::CURSE_EVERY),
        rng,
    ))
}

pub(crate) fn register(registry: &mut TransformRegistry) {
    registry.register(
        "insert-curse-words",
        Category::Random,
        "Sprinkle random mild curse words (one every `every` words on average)",
        RandomTransform::from_entropy(curse_words_transform),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_output_is_reproducible() {
        let text = "the quick brown fox jumps over the lazy dog";
        let first = insert_curse_words(text, 2, &mut StdRng::seed_from_u64(42));
        let second = insert_curse_words(text, 2, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_only_inserts_known_words() {
        let text = "one two three four five six seven eight";
        let output = insert_curse_words(text, 2, &mut StdRng::seed_from_u64(1));
        let original: Vec<&str> = text.split(' ').collect();
        let kept: Vec<&str> = output
            .split(' ')
            .filter(|w| !CURSE_WORDS.contains(w))
            .collect();
        assert_eq!(kept, original);
    }

    #[test]
    fn test_every_word_when_every_is_one() {
        let output = insert_curse_words("a b", 0, &mut StdRng::seed_from_u64(3));
        let words: Vec<&str> = output.split(' ').collect();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0], "a");
        assert_eq!(words[2], "b");
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let output = insert_curse_words("  \n", 1, &mut StdRng::seed_from_u64(3));
        assert_eq!(output, "  \n");
        assert_eq!(insert_curse_words("", 1, &mut StdRng::seed_from_u64(3)), "");
    }

    #[test]
    fn test_random_transform_with_injected_source() {
        let transform = RandomTransform::new(StdRng::seed_from_u64(9), curse_words_transform);
        let replay = RandomTransform::new(StdRng::seed_from_u64(9), curse_words_transform);
        let params = Params::from([("every", "1")]);
        for _ in 0..3 {
            assert_eq!(
                transform.transform("hello there", &params).unwrap(),
                replay.transform("hello there", &params).unwrap()
            );
        }
    }
}
