pub mod fnv1a;

pub use fnv1a::{fnv1a_64, Fnv1aGenerator, Fnv1aHash};

use tinyurl_core::ShortId;

/// Trait for deriving short ids from long URLs.
///
/// Implementations are pure functions of their input and never touch
/// storage. Collision handling is left to the caller.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortId>;
    /// Derives an id for `long_url`. Must return the same output for the
    /// same input.
    fn generate(&self, long_url: &str) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::Generator;
    use crate::Fnv1aGenerator;
    use tinyurl_core::ShortId;

    fn short_id<G: Generator>(generator: &G, url: &str) -> ShortId {
        generator.generate(url).into()
    }

    #[test]
    fn fnv1a_implements_generator_trait() {
        let generator = Fnv1aGenerator::new();

        let first = short_id(&generator, "https://aws.amazon.com");
        let second = short_id(&generator, "https://aws.amazon.com/");

        assert_eq!(first.as_str(), "lzbfxd8mrui8");
        assert_ne!(first, second);
    }
}
