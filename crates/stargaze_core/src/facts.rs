//! "Did you know" facts shown above the gallery.

use rand::Rng;

/// Fixed ordered list of astronomy facts for the fact panel.
pub const FACTS: [&str; 10] = [
    "A day on Venus is longer than a year on Venus — it rotates very slowly compared to its orbit.",
    "Jupiter's Great Red Spot is a huge storm larger than Earth that has been raging for centuries.",
    "Neutron stars are so dense that a teaspoon of neutron-star material would weigh about a billion tons on Earth.",
    "There are more trees on Earth than stars in the Milky Way — estimates suggest ~3 trillion trees vs ~100-400 billion stars.",
    "The footprints left on the Moon will likely remain for millions of years because there's no wind to erase them.",
    "Saturn could float in water — it's the least dense planet in our solar system (less dense than water).",
    "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
    "A spoonful of the Sun's core would be incredibly heavy — but the Sun's core is plasma, not solid material.",
    "The Milky Way and Andromeda galaxies are on a collision course and will merge in about 4 billion years.",
    "There are diamond rain storms on some planets like Neptune and Uranus under extreme pressure and temperature.",
];

/// Pick one fact uniformly at random.
pub fn random_fact() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..FACTS.len());
    FACTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_fact_comes_from_list() {
        for _ in 0..50 {
            let fact = random_fact();
            assert!(FACTS.contains(&fact));
        }
    }
}
